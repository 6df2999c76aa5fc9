//! SQL schema for the in-memory gapminder database.

/// Returns the full SQL schema as a single batch string.
///
/// `records` holds one row per (country, year) with the gapminder columns.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS records (
        country TEXT NOT NULL,
        continent TEXT NOT NULL,
        year INTEGER NOT NULL,
        life_exp REAL NOT NULL,
        pop INTEGER NOT NULL,
        gdp_percap REAL NOT NULL,
        iso_alpha TEXT NOT NULL,
        iso_num INTEGER NOT NULL,
        PRIMARY KEY (country, year)
    );
    CREATE INDEX IF NOT EXISTS idx_records_country ON records(country);
    CREATE INDEX IF NOT EXISTS idx_records_year ON records(year);
    "#
}
