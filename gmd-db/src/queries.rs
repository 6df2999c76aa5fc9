//! Typed queries over the gapminder records.
//!
//! Every query orders its output deterministically (country, then year) so
//! that figures built from the results are reproducible.

use crate::models::TableRow;
use crate::Database;
use gmd_data::{Country, Record, YearRange};
use rusqlite::{params, params_from_iter, Row};

const RECORD_COLUMNS: &str =
    "country, continent, year, life_exp, pop, gdp_percap, iso_alpha, iso_num";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        country: row.get(0)?,
        continent: row.get(1)?,
        year: row.get(2)?,
        life_exp: row.get(3)?,
        pop: row.get(4)?,
        gdp_percap: row.get(5)?,
        iso_alpha: row.get(6)?,
        iso_num: row.get(7)?,
    })
}

impl Database {
    /// Every record, ordered by country then year.
    pub fn query_all(&self) -> anyhow::Result<Vec<Record>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records ORDER BY country, year"
        ))?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GMD] query: query_all returned {} records", rows.len());
        Ok(rows)
    }

    /// All records for one country, ordered by year.
    ///
    /// This is the Germany view behind the table and the line chart.
    pub fn query_country(&self, country: Country) -> anyhow::Result<Vec<Record>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records WHERE country = ?1 ORDER BY year"
        ))?;
        let rows = stmt
            .query_map(params![country.name()], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GMD] query: query_country({}) returned {} records",
            country,
            rows.len()
        );
        Ok(rows)
    }

    /// Records whose country is in `countries`, ordered by country then year.
    ///
    /// An empty slice yields an empty result.
    pub fn query_countries(&self, countries: &[Country]) -> anyhow::Result<Vec<Record>> {
        if countries.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; countries.len()].join(", ");
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records
             WHERE country IN ({placeholders})
             ORDER BY country, year"
        ))?;
        let rows = stmt
            .query_map(
                params_from_iter(countries.iter().map(|c| c.name())),
                record_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GMD] query: query_countries returned {} records", rows.len());
        Ok(rows)
    }

    /// Records for `country` with `years.low() <= year <= years.high()`.
    ///
    /// This is the filter the bar-chart binder applies on every control
    /// change. A span with no data yields an empty result, not an error.
    pub fn query_country_years(
        &self,
        country: Country,
        years: YearRange,
    ) -> anyhow::Result<Vec<Record>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records
             WHERE country = ?1 AND year >= ?2 AND year <= ?3
             ORDER BY year"
        ))?;
        let rows = stmt
            .query_map(
                params![country.name(), years.low(), years.high()],
                record_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GMD] query: query_country_years({}, {}..={}) returned {} records",
            country,
            years.low(),
            years.high(),
            rows.len()
        );
        Ok(rows)
    }

    /// `(min_year, max_year)` present in the database, or `None` when empty.
    pub fn query_year_span(&self) -> anyhow::Result<Option<(i32, i32)>> {
        let conn = self.conn()?;
        let span: (Option<i32>, Option<i32>) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM records",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(match span {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        })
    }

    /// Table rows (year, lifeExp, pop, gdpPercap) for one country, by year.
    pub fn query_table_rows(&self, country: Country) -> anyhow::Result<Vec<TableRow>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT year, life_exp, pop, gdp_percap FROM records
             WHERE country = ?1
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map(params![country.name()], |row| {
                Ok(TableRow {
                    year: row.get(0)?,
                    life_exp: row.get(1)?,
                    pop: row.get(2)?,
                    gdp_percap: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GMD] query: query_table_rows({}) returned {} rows",
            country,
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        Database::with_gapminder().unwrap()
    }

    #[test]
    fn query_all_is_ordered_by_country_then_year() {
        let db = sample_db();
        let all = db.query_all().unwrap();
        assert_eq!(all.len(), 36);
        assert_eq!(all[0].country, "Belgium");
        assert_eq!(all[0].year, 1952);
        assert_eq!(all[35].country, "Germany");
        assert_eq!(all[35].year, 2007);
    }

    #[test]
    fn germany_view_matches_filtering_full_dataset() {
        let db = sample_db();
        let view = db.query_country(Country::Germany).unwrap();
        let filtered: Vec<Record> = db
            .query_all()
            .unwrap()
            .into_iter()
            .filter(|r| r.country == "Germany")
            .collect();
        assert_eq!(view, filtered);
        assert_eq!(view.len(), 12);
    }

    #[test]
    fn query_countries_filters_membership() {
        let db = sample_db();
        let two = db
            .query_countries(&[Country::Germany, Country::Denmark])
            .unwrap();
        assert_eq!(two.len(), 24);
        assert!(two.iter().all(|r| r.country != "Belgium"));

        let all = db.query_countries(&Country::ALL).unwrap();
        assert_eq!(all.len(), 36);

        assert!(db.query_countries(&[]).unwrap().is_empty());
    }

    #[test]
    fn belgium_1987_to_2007() {
        let db = sample_db();
        let rows = db
            .query_country_years(Country::Belgium, YearRange::new(1987, 2007))
            .unwrap();
        let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1987, 1992, 1997, 2002, 2007]);
        assert!(rows.iter().all(|r| r.country == "Belgium"));
    }

    #[test]
    fn germany_single_year() {
        let db = sample_db();
        let rows = db
            .query_country_years(Country::Germany, YearRange::new(1952, 1952))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, 1952);
        assert_eq!(rows[0].country, "Germany");
    }

    #[test]
    fn denmark_after_dataset_end_is_empty() {
        let db = sample_db();
        let rows = db
            .query_country_years(Country::Denmark, YearRange::new(2010, 2020))
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn off_step_single_year_is_empty() {
        let db = sample_db();
        let rows = db
            .query_country_years(Country::Denmark, YearRange::new(1953, 1953))
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn year_span() {
        let db = sample_db();
        assert_eq!(db.query_year_span().unwrap(), Some((1952, 2007)));

        let empty = Database::new().unwrap();
        assert_eq!(empty.query_year_span().unwrap(), None);
    }

    #[test]
    fn table_rows_for_germany() {
        let db = sample_db();
        let rows = db.query_table_rows(Country::Germany).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].year, 1952);
        assert_eq!(rows[0].pop, 69145952);

        let json = serde_json::to_value(&rows[0]).unwrap();
        assert!(json.get("lifeExp").is_some());
        assert!(json.get("gdpPercap").is_some());
    }
}
