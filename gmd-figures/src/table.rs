//! Data table model: column definitions, rows and fixed styles.

use crate::theme::table_style;
use gmd_db::models::TableRow;
use serde::Serialize;

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Column {
    Year,
    LifeExp,
    Pop,
    GdpPercap,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Year, Column::LifeExp, Column::Pop, Column::GdpPercap];

    /// Column id, matching the gapminder column name.
    pub fn id(&self) -> &'static str {
        match self {
            Column::Year => "year",
            Column::LifeExp => "lifeExp",
            Column::Pop => "pop",
            Column::GdpPercap => "gdpPercap",
        }
    }

    /// Render one cell of `row` for this column.
    pub fn cell(&self, row: &TableRow) -> String {
        match self {
            Column::Year => row.year.to_string(),
            Column::LifeExp => row.life_exp.to_string(),
            Column::Pop => row.pop.to_string(),
            Column::GdpPercap => row.gdp_percap.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableModel {
    pub columns: Vec<ColumnDef>,
    pub data: Vec<TableRow>,
    pub style_data: String,
    pub style_header: String,
    pub style_table: String,
}

impl TableModel {
    pub fn from_rows(rows: Vec<TableRow>) -> Self {
        Self {
            columns: Column::ALL
                .iter()
                .map(|c| ColumnDef {
                    name: c.id().to_string(),
                    id: c.id().to_string(),
                })
                .collect(),
            data: rows,
            style_data: table_style::DATA.to_string(),
            style_header: table_style::HEADER.to_string(),
            style_table: table_style::TABLE.to_string(),
        }
    }

    /// Cells of every row, in column order.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.data
            .iter()
            .map(|row| Column::ALL.iter().map(|c| c.cell(row)).collect())
            .collect()
    }
}
