//! Life-expectancy line chart with markers.

use crate::figure::{Axis, Figure, Layout, LineStyle, ScatterTrace, Title, Trace};
use crate::theme::{DarkTheme, DEFAULT_COLORWAY};
use gmd_data::Record;

pub const HEIGHT: u32 = 300;

/// Build a single line trace over `records` (x = year, y = life expectancy).
///
/// Records are plotted in the order given; callers pass a one-country view
/// ordered by year.
pub fn life_expectancy_line(records: &[Record], title: &str) -> Figure {
    let trace = ScatterTrace {
        name: String::new(),
        x: records.iter().map(|r| r.year).collect(),
        y: records.iter().map(|r| r.life_exp).collect(),
        mode: "lines+markers".to_string(),
        line: LineStyle {
            color: DEFAULT_COLORWAY[0].to_string(),
        },
        showlegend: false,
        hovertemplate: "year=%{x}<br>lifeExp=%{y}<extra></extra>".to_string(),
    };

    let mut layout = Layout {
        title: Some(Title::new(title)),
        height: Some(HEIGHT),
        xaxis: Some(Axis::titled("year")),
        yaxis: Some(Axis::titled("lifeExp")),
        ..Default::default()
    };
    DarkTheme::apply(&mut layout);

    Figure {
        data: vec![Trace::Scatter(trace)],
        layout,
        frames: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmd_data::{Country, GAPMINDER_CSV};

    #[test]
    fn line_follows_record_order_with_markers() {
        let germany: Vec<Record> = Record::parse_csv(GAPMINDER_CSV)
            .unwrap()
            .into_iter()
            .filter(|r| r.country == Country::Germany.name())
            .collect();
        let fig = life_expectancy_line(&germany, "Life Expectancy in Germany");

        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "lines+markers");
        assert_eq!(json["data"][0]["x"].as_array().unwrap().len(), 12);
        assert_eq!(json["data"][0]["x"][0], 1952);
        assert_eq!(json["layout"]["title"]["text"], "Life Expectancy in Germany");
        assert_eq!(json["layout"]["plot_bgcolor"], "#222222");
    }
}
