//! CSV loading for the in-memory database.
//!
//! Expected format (with headers):
//! `country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num`

use crate::Database;
use gmd_data::Record;
use rusqlite::params;

impl Database {
    /// Load gapminder records from a CSV string.
    ///
    /// Every row is validated before anything is inserted, so a bad row
    /// leaves the database untouched. Rows are upserted on `(country, year)`.
    pub fn load_records(&self, csv_data: &str) -> anyhow::Result<()> {
        let records = Record::parse_csv(csv_data)?;
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO records
                 (country, continent, year, life_exp, pop, gdp_percap, iso_alpha, iso_num)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for r in &records {
                stmt.execute(params![
                    r.country,
                    r.continent,
                    r.year,
                    r.life_exp,
                    r.pop,
                    r.gdp_percap,
                    r.iso_alpha,
                    r.iso_num
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[GMD] loader: Loaded {} records", records.len());
        Ok(())
    }
}
