//! Fixed styling: the dark theme, the per-country palette and the table
//! styles. These are lookup tables so the figure builders stay pure.

use crate::figure::{Font, Layout};

/// Dark theme applied to every figure.
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: &'static str = "#222222";
    pub const FONT_COLOR: &'static str = "white";

    /// Set plot, paper and (when present) geo backgrounds plus font color.
    pub fn apply(layout: &mut Layout) {
        layout.plot_bgcolor = Some(Self::BACKGROUND.to_string());
        layout.paper_bgcolor = Some(Self::BACKGROUND.to_string());
        layout.font = Some(Font {
            color: Self::FONT_COLOR.to_string(),
        });
        if let Some(geo) = layout.geo.as_mut() {
            geo.bgcolor = Some(Self::BACKGROUND.to_string());
        }
    }
}

/// Page accent used for the title and the country banner.
pub const ACCENT_COLOR: &str = "#636EFA";

/// Plotly's default qualitative colorway, used for countries without a
/// fixed color.
pub const DEFAULT_COLORWAY: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Fixed bar colors per known country.
pub struct CountryPalette;

impl CountryPalette {
    const COLORS: [(&'static str, &'static str); 3] = [
        ("Germany", "#7FD4C1"),
        ("Denmark", "#8690FF"),
        ("Belgium", "#F7C0BB"),
    ];

    pub fn lookup(country: &str) -> Option<&'static str> {
        Self::COLORS
            .iter()
            .find(|(name, _)| *name == country)
            .map(|(_, color)| *color)
    }

    /// Fixed color for `country`, or the `index`-th default colorway entry.
    pub fn color(country: &str, index: usize) -> &'static str {
        Self::lookup(country).unwrap_or(DEFAULT_COLORWAY[index % DEFAULT_COLORWAY.len()])
    }
}

/// cmocean "ice" sequential scale, dark to light.
pub const ICE_SCALE: [&str; 12] = [
    "rgb(3, 5, 18)",
    "rgb(25, 25, 51)",
    "rgb(44, 42, 87)",
    "rgb(58, 60, 125)",
    "rgb(62, 83, 160)",
    "rgb(62, 109, 178)",
    "rgb(72, 134, 187)",
    "rgb(89, 159, 196)",
    "rgb(114, 184, 205)",
    "rgb(149, 207, 216)",
    "rgb(192, 229, 232)",
    "rgb(234, 252, 253)",
];

/// Spread a list of colors evenly over `[0, 1]` as a plotly colorscale.
pub fn even_colorscale(colors: &[&str]) -> Vec<(f64, String)> {
    match colors.len() {
        0 => Vec::new(),
        1 => vec![(0.0, colors[0].to_string()), (1.0, colors[0].to_string())],
        n => colors
            .iter()
            .enumerate()
            .map(|(i, c)| (i as f64 / (n - 1) as f64, c.to_string()))
            .collect(),
    }
}

/// Inline CSS for the data table, mirroring the dashboard's dark look.
pub mod table_style {
    pub const DATA: &str = "color: white; background-color: #222222;";
    pub const HEADER: &str = "background-color: rgb(210, 210, 210); color: black; font-weight: bold;";
    pub const TABLE: &str = "min-height: 400px; height: 400px; max-height: 400px; \
         min-width: 900px; width: 900px; max-width: 900px; \
         margin-left: auto; margin-right: auto; margin-top: 0; margin-bottom: 30px; \
         overflow-y: auto;";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Domain, Geo, Projection};

    #[test]
    fn known_countries_have_fixed_colors() {
        assert_eq!(CountryPalette::lookup("Germany"), Some("#7FD4C1"));
        assert_eq!(CountryPalette::lookup("Denmark"), Some("#8690FF"));
        assert_eq!(CountryPalette::lookup("Belgium"), Some("#F7C0BB"));
        assert_eq!(CountryPalette::color("Belgium", 5), "#F7C0BB");
    }

    #[test]
    fn unknown_country_falls_back_to_colorway() {
        assert_eq!(CountryPalette::lookup("France"), None);
        assert_eq!(CountryPalette::color("France", 1), "#EF553B");
        assert_eq!(CountryPalette::color("France", 11), "#EF553B");
    }

    #[test]
    fn apply_sets_geo_background_only_when_geo_exists() {
        let mut plain = Layout::default();
        DarkTheme::apply(&mut plain);
        assert_eq!(plain.plot_bgcolor.as_deref(), Some("#222222"));
        assert_eq!(plain.paper_bgcolor.as_deref(), Some("#222222"));
        assert_eq!(plain.font.as_ref().map(|f| f.color.as_str()), Some("white"));
        assert!(plain.geo.is_none());

        let mut map = Layout {
            geo: Some(Geo {
                scope: "europe".to_string(),
                projection: Projection {
                    kind: "natural earth".to_string(),
                },
                domain: Domain {
                    x: [0.0, 1.0],
                    y: [0.0, 1.0],
                },
                bgcolor: None,
            }),
            ..Default::default()
        };
        DarkTheme::apply(&mut map);
        assert_eq!(
            map.geo.and_then(|g| g.bgcolor).as_deref(),
            Some("#222222")
        );
    }

    #[test]
    fn even_colorscale_spans_unit_interval() {
        let scale = even_colorscale(&ICE_SCALE);
        assert_eq!(scale.len(), 12);
        assert_eq!(scale[0].0, 0.0);
        assert_eq!(scale[11].0, 1.0);
        assert_eq!(scale[0].1, "rgb(3, 5, 18)");
        assert_eq!(even_colorscale(&["red"]).len(), 2);
        assert!(even_colorscale(&[]).is_empty());
    }
}
