//! Grouped life-expectancy bar chart.

use crate::figure::{Axis, BarTrace, Figure, Layout, Legend, Marker, Title, Trace};
use crate::theme::{CountryPalette, DarkTheme};
use gmd_data::Record;

pub const TITLE: &str = "Germany vs Denmark & Belgium";
pub const HEIGHT: u32 = 300;

/// Group records by country, keeping the order in which countries first
/// appear and the record order within each group.
fn group_by_country(records: &[Record]) -> Vec<(&str, Vec<&Record>)> {
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(c, _)| *c == record.country) {
            Some((_, group)) => group.push(record),
            None => groups.push((record.country.as_str(), vec![record])),
        }
    }
    groups
}

/// Build the grouped bar chart: x = year, y = life expectancy, one bar trace
/// per country colored from [`CountryPalette`].
///
/// An empty slice produces a figure with no traces but the full layout, so
/// the chart slot still renders axes and styling.
pub fn life_expectancy_bars(records: &[Record]) -> Figure {
    let data = group_by_country(records)
        .into_iter()
        .enumerate()
        .map(|(i, (country, group))| {
            Trace::Bar(BarTrace {
                name: country.to_string(),
                x: group.iter().map(|r| r.year).collect(),
                y: group.iter().map(|r| r.life_exp).collect(),
                marker: Marker {
                    color: CountryPalette::color(country, i).to_string(),
                },
                offsetgroup: country.to_string(),
                legendgroup: country.to_string(),
                showlegend: true,
                hovertemplate: format!(
                    "country={}<br>year=%{{x}}<br>lifeExp=%{{y}}<extra></extra>",
                    country
                ),
            })
        })
        .collect();

    let mut layout = Layout {
        title: Some(Title::new(TITLE)),
        height: Some(HEIGHT),
        barmode: Some("group".to_string()),
        xaxis: Some(Axis::titled("year")),
        yaxis: Some(Axis::titled("lifeExp")),
        legend: Some(Legend {
            title: Title::new("country"),
            tracegroupgap: 0,
        }),
        ..Default::default()
    };
    DarkTheme::apply(&mut layout);

    Figure {
        data,
        layout,
        frames: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32, life_exp: f64) -> Record {
        Record {
            country: country.to_string(),
            continent: "Europe".to_string(),
            year,
            life_exp,
            pop: 1,
            gdp_percap: 1.0,
            iso_alpha: "XXX".to_string(),
            iso_num: 0,
        }
    }

    #[test]
    fn one_trace_per_country_in_first_seen_order() {
        let records = vec![
            record("Denmark", 1952, 70.78),
            record("Germany", 1952, 67.5),
            record("Denmark", 1957, 71.81),
        ];
        let fig = life_expectancy_bars(&records);
        assert_eq!(fig.data.len(), 2);

        let Trace::Bar(denmark) = &fig.data[0] else {
            panic!("expected a bar trace");
        };
        assert_eq!(denmark.name, "Denmark");
        assert_eq!(denmark.x, vec![1952, 1957]);
        assert_eq!(denmark.y, vec![70.78, 71.81]);
        assert_eq!(denmark.marker.color, "#8690FF");

        let Trace::Bar(germany) = &fig.data[1] else {
            panic!("expected a bar trace");
        };
        assert_eq!(germany.marker.color, "#7FD4C1");
    }

    #[test]
    fn empty_input_renders_styled_empty_chart() {
        let fig = life_expectancy_bars(&[]);
        assert!(fig.data.is_empty());
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["layout"]["barmode"], "group");
        assert_eq!(json["layout"]["height"], 300);
        assert_eq!(json["layout"]["title"]["text"], TITLE);
        assert_eq!(json["layout"]["plot_bgcolor"], "#222222");
        assert_eq!(json["layout"]["paper_bgcolor"], "#222222");
        assert_eq!(json["layout"]["font"]["color"], "white");
    }
}
