//! Two-ended year range slider.

use crate::state::AppState;
use dioxus::prelude::*;
use gmd_data::{YearRange, FIRST_YEAR, LAST_YEAR, YEAR_STEP};

const MARKS_LIST_ID: &str = "year-marks";

/// Year range slider built from two stepped range inputs sharing one set of
/// marks. Dragging one handle past the other swaps them, so the stored range
/// is always `low <= high`.
#[component]
pub fn YearRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let years = (state.years)();
    let low = years.low();
    let high = years.high();

    let on_low_input = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            let current = (state.years)();
            state.years.set(current.with_low(year));
        }
    };

    let on_high_input = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            let current = (state.years)();
            state.years.set(current.with_high(year));
        }
    };

    let input_style = "width: 100%;";

    rsx! {
        div {
            style: "margin: 8px auto; width: 900px;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Years: {low} - {high}"
            }
            input {
                r#type: "range",
                class: "form-range",
                style: "{input_style}",
                min: "{FIRST_YEAR}",
                max: "{LAST_YEAR}",
                step: "{YEAR_STEP}",
                list: MARKS_LIST_ID,
                value: "{low}",
                oninput: on_low_input,
            }
            input {
                r#type: "range",
                class: "form-range",
                style: "{input_style}",
                min: "{FIRST_YEAR}",
                max: "{LAST_YEAR}",
                step: "{YEAR_STEP}",
                list: MARKS_LIST_ID,
                value: "{high}",
                oninput: on_high_input,
            }
            datalist {
                id: MARKS_LIST_ID,
                for year in YearRange::marks() {
                    option { value: "{year}", label: "{year}" }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #aaa;",
                for year in YearRange::marks() {
                    span { "{year}" }
                }
            }
        }
    }
}
