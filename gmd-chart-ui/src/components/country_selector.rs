//! Dropdown selector for choosing a country.

use crate::state::AppState;
use dioxus::prelude::*;
use gmd_data::Country;

/// Country dropdown over the fixed country list. Not clearable: every option
/// is a valid country, so the bound chart always has a country to filter by.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.country)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Country>() {
        Ok(country) => state.country.set(country),
        Err(e) => log::warn!("[GMD] country selector: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px auto; width: 900px;",
            label {
                r#for: "country-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Country: "
            }
            select {
                id: "country-select",
                class: "form-select",
                onchange: on_change,
                for country in Country::ALL {
                    option {
                        value: country.name(),
                        selected: country == selected,
                        {country.name()}
                    }
                }
            }
        }
    }
}
