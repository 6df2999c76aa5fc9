use crate::{Country, YearRange};
use serde::{Deserialize, Serialize};

/// Snapshot of the dashboard controls: the country dropdown and the year
/// range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ControlState {
    pub country: Country,
    pub years: YearRange,
}

impl ControlState {
    pub fn new(country: Country, years: YearRange) -> Self {
        Self { country, years }
    }
}
