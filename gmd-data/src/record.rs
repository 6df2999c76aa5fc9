use crate::{FIRST_YEAR, LAST_YEAR};
use anyhow::{bail, Context};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// One row of the gapminder table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub year: i32,
    /// Life expectancy at birth, in years.
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    pub pop: i64,
    /// GDP per capita, inflation-adjusted US dollars.
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
    /// ISO 3166-1 alpha-3 code.
    pub iso_alpha: String,
    pub iso_num: i32,
}

impl Record {
    /// Check the dataset invariant: a non-empty country and a year inside the
    /// gapminder span.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.country.trim().is_empty() {
            bail!("record for year {} has an empty country", self.year);
        }
        if !(FIRST_YEAR..=LAST_YEAR).contains(&self.year) {
            bail!(
                "record for {} has year {} outside {}..={}",
                self.country,
                self.year,
                FIRST_YEAR,
                LAST_YEAR
            );
        }
        Ok(())
    }

    /// Parse gapminder CSV (with headers) into validated records.
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<Vec<Record>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut records = Vec::new();
        for (i, result) in rdr.deserialize::<Record>().enumerate() {
            // Row 1 is the header.
            let row = i + 2;
            let record = result.with_context(|| format!("malformed gapminder row {}", row))?;
            record
                .validate()
                .with_context(|| format!("invalid gapminder row {}", row))?;
            records.push(record);
        }
        log::info!("[GMD] record: parsed {} gapminder rows", records.len());
        Ok(records)
    }
}
