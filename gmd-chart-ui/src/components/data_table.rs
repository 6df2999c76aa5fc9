//! Static data table.

use dioxus::prelude::*;
use gmd_figures::table::TableModel;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub model: TableModel,
}

/// Scrollable table with a light header and dark data cells.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let model = &props.model;
    let cells = model.cells();

    rsx! {
        div {
            style: "{model.style_table}",
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        for column in model.columns.iter() {
                            th {
                                style: "{model.style_header} padding: 4px 8px; text-align: right;",
                                "{column.name}"
                            }
                        }
                    }
                }
                tbody {
                    for row in cells.iter() {
                        tr {
                            for cell in row.iter() {
                                td {
                                    style: "{model.style_data} padding: 4px 8px; text-align: right; border-bottom: 1px solid #444;",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
