//! In-memory SQLite dataset provider for the Gap Minder dashboard.
//!
//! The gapminder CSV is embedded at compile time (see [`gmd_data::GAPMINDER_CSV`]),
//! loaded once into an in-memory SQLite database, and never mutated afterwards.
//! Every view the dashboard needs (the Germany-only table, the three-country
//! map data, the binder's country/year filter) is a typed query returning
//! serializable structs.
//!
//! # Usage
//!
//! ```rust
//! use gmd_data::{Country, YearRange};
//! use gmd_db::Database;
//!
//! let db = Database::with_gapminder().unwrap();
//!
//! let germany = db.query_country(Country::Germany).unwrap();
//! assert_eq!(germany.len(), 12);
//!
//! let belgium = db
//!     .query_country_years(Country::Belgium, YearRange::new(1987, 2007))
//!     .unwrap();
//! assert_eq!(belgium.len(), 5);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]. There is a single `records` table keyed by
//! `(country, year)`.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use anyhow::anyhow;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory SQLite database holding the gapminder records.
///
/// Cheaply cloneable; clones share the same connection. The connection sits
/// behind a mutex so the same handle works in the single-threaded browser
/// app and in the multi-threaded HTTP server.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied and no rows.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a database populated with the embedded gapminder dataset.
    pub fn with_gapminder() -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_records(gmd_data::GAPMINDER_CSV)?;
        Ok(db)
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("database connection lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn new_database_is_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_all().unwrap().is_empty());
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_records(gmd_data::GAPMINDER_CSV).unwrap();
        // Both handles reference the same underlying connection
        assert_eq!(db2.query_all().unwrap().len(), 36);
    }

    #[test]
    fn database_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }
}
