//! Static components, computed once from the dataset at startup.

use crate::choropleth::life_expectancy_map;
use crate::figure::Figure;
use crate::line::life_expectancy_line;
use crate::table::TableModel;
use gmd_data::Country;
use gmd_db::Database;

/// Country profiled by the table and the line chart.
pub const PROFILE_COUNTRY: Country = Country::Germany;

pub const LINE_TITLE: &str = "Life Expectancy in Germany";

/// The table, line chart and map. None of them depend on control state.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticViews {
    pub table: TableModel,
    pub line: Figure,
    pub map: Figure,
}

impl StaticViews {
    pub fn build(db: &Database) -> anyhow::Result<Self> {
        let profile = db.query_country(PROFILE_COUNTRY)?;
        let countries = db.query_countries(&Country::ALL)?;
        Ok(Self {
            table: TableModel::from_rows(db.query_table_rows(PROFILE_COUNTRY)?),
            line: life_expectancy_line(&profile, LINE_TITLE),
            map: life_expectancy_map(&countries),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Trace;
    use gmd_data::ControlState;

    #[test]
    fn static_views_use_germany_and_all_countries() {
        let db = Database::with_gapminder().unwrap();
        let views = StaticViews::build(&db).unwrap();

        assert_eq!(views.table.data.len(), 12);
        let Trace::Scatter(line) = &views.line.data[0] else {
            panic!("expected a scatter trace");
        };
        let germany: Vec<i32> = db
            .query_all()
            .unwrap()
            .iter()
            .filter(|r| r.country == "Germany")
            .map(|r| r.year)
            .collect();
        assert_eq!(line.x, germany);
        assert_eq!(views.map.frames.len(), 12);
    }

    #[test]
    fn static_views_ignore_control_state() {
        let db = Database::with_gapminder().unwrap();
        let before = StaticViews::build(&db).unwrap();
        // The binder runs against the same database without touching it
        let _ = crate::binder::update_bar_chart(&db, &ControlState::default()).unwrap();
        assert_eq!(StaticViews::build(&db).unwrap(), before);
    }
}
