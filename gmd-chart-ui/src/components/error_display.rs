//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px auto; width: 900px; background: #3b1f1f; color: #ff8a80; border-radius: 4px; border: 1px solid #c62828;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
