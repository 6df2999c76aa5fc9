use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countries offered by the dashboard's country selector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Country {
    Germany,
    #[default]
    Belgium,
    Denmark,
}

impl Country {
    /// Selector order.
    pub const ALL: [Country; 3] = [Country::Germany, Country::Belgium, Country::Denmark];

    /// Display name, identical to the `country` column of the dataset.
    pub fn name(&self) -> &'static str {
        match self {
            Country::Germany => "Germany",
            Country::Belgium => "Belgium",
            Country::Denmark => "Denmark",
        }
    }

    /// ISO 3166-1 alpha-3 code used by the choropleth map.
    pub fn iso_alpha(&self) -> &'static str {
        match self {
            Country::Germany => "DEU",
            Country::Belgium => "BEL",
            Country::Denmark => "DNK",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not one of [`Country::ALL`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown country: {0}")]
pub struct UnknownCountry(pub String);

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}
