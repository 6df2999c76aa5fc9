//! Page title, description and the country banner above the table.

use dioxus::prelude::*;
use gmd_figures::theme::ACCENT_COLOR;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

/// Centered accent-colored title with an optional description paragraph.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        h1 {
            style: "text-align: center; color: {ACCENT_COLOR};",
            "{props.title}"
        }
        if !props.description.is_empty() {
            div {
                style: "margin-left: 50px; margin-right: 25px;",
                p { "{props.description}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CountryBannerProps {
    pub name: String,
}

/// Accent strip naming the profiled country, aligned with the table.
#[component]
pub fn CountryBanner(props: CountryBannerProps) -> Element {
    rsx! {
        div {
            style: "background-color: {ACCENT_COLOR}; color: white; width: 900px; margin-left: auto; margin-right: auto;",
            "{props.name}"
        }
    }
}
