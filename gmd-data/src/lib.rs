//! Core types and the embedded gapminder dataset.
//!
//! This crate has no knowledge of storage or rendering. It defines:
//! - [`record::Record`]: one row of the gapminder table
//! - [`country::Country`]: the closed set of countries the dashboard offers
//! - [`year_range::YearRange`]: a normalized, inclusive year interval
//! - [`control::ControlState`]: a snapshot of the dashboard's two controls

pub mod control;
pub mod country;
pub mod record;
pub mod year_range;

pub use control::ControlState;
pub use country::{Country, UnknownCountry};
pub use record::Record;
pub use year_range::YearRange;

/// Embedded gapminder rows for the dashboard countries.
///
/// Header: `country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num`
pub static GAPMINDER_CSV: &str = include_str!("../../fixtures/gapminder.csv");

/// First year present in the gapminder dataset.
pub const FIRST_YEAR: i32 = 1952;

/// Last year present in the gapminder dataset.
pub const LAST_YEAR: i32 = 2007;

/// Gapminder samples every fifth year.
pub const YEAR_STEP: i32 = 5;
