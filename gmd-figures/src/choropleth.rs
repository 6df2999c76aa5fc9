//! Animated life-expectancy choropleth over Europe, one frame per year.

use crate::figure::{
    ChoroplethTrace, ColorAxis, ColorBar, Domain, Figure, Frame, Geo, Layout, Legend, Projection,
    Title, Trace,
};
use crate::theme::{even_colorscale, DarkTheme, ICE_SCALE};
use gmd_data::Record;
use serde_json::{json, Value};
use std::collections::BTreeMap;

const FRAME_DURATION_MS: u32 = 500;

fn year_trace(year: i32, records: &[&Record]) -> Trace {
    Trace::Choropleth(ChoroplethTrace {
        name: year.to_string(),
        locations: records.iter().map(|r| r.iso_alpha.clone()).collect(),
        z: records.iter().map(|r| r.life_exp).collect(),
        locationmode: "ISO-3".to_string(),
        hovertext: records.iter().map(|r| r.country.clone()).collect(),
        coloraxis: "coloraxis".to_string(),
        geo: "geo".to_string(),
        hovertemplate: format!(
            "<b>%{{hovertext}}</b><br><br>year={}<br>iso_alpha=%{{location}}<br>lifeExp=%{{z}}<extra></extra>",
            year
        ),
    })
}

/// Play / pause buttons driving the frame animation.
fn play_controls() -> Value {
    json!({
        "type": "buttons",
        "direction": "left",
        "showactive": false,
        "x": 0.1,
        "xanchor": "right",
        "y": 0,
        "yanchor": "top",
        "pad": {"r": 10, "t": 70},
        "buttons": [
            {
                "label": "&#9654;",
                "method": "animate",
                "args": [null, {
                    "frame": {"duration": FRAME_DURATION_MS, "redraw": true},
                    "mode": "immediate",
                    "fromcurrent": true,
                    "transition": {"duration": FRAME_DURATION_MS, "easing": "linear"}
                }]
            },
            {
                "label": "&#9724;",
                "method": "animate",
                "args": [[null], {
                    "frame": {"duration": 0, "redraw": true},
                    "mode": "immediate",
                    "fromcurrent": true,
                    "transition": {"duration": 0, "easing": "linear"}
                }]
            }
        ]
    })
}

/// Year slider with one step per frame.
fn year_slider(years: &[i32]) -> Value {
    let steps: Vec<Value> = years
        .iter()
        .map(|year| {
            json!({
                "label": year.to_string(),
                "method": "animate",
                "args": [[year.to_string()], {
                    "frame": {"duration": 0, "redraw": true},
                    "mode": "immediate",
                    "fromcurrent": true,
                    "transition": {"duration": 0, "easing": "linear"}
                }]
            })
        })
        .collect();
    json!({
        "active": 0,
        "currentvalue": {"prefix": "year="},
        "len": 0.9,
        "x": 0.1,
        "xanchor": "left",
        "y": 0,
        "yanchor": "top",
        "pad": {"b": 10, "t": 60},
        "steps": steps
    })
}

/// Build the animated map. The first year is the initial state; every year
/// becomes a named frame. The color axis spans life expectancy across all
/// frames so colors stay comparable while the animation plays.
pub fn life_expectancy_map(records: &[Record]) -> Figure {
    let mut by_year: BTreeMap<i32, Vec<&Record>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().push(record);
    }

    let frames: Vec<Frame> = by_year
        .iter()
        .map(|(year, group)| Frame {
            name: year.to_string(),
            data: vec![year_trace(*year, group)],
        })
        .collect();
    let data = frames
        .first()
        .map(|f| f.data.clone())
        .unwrap_or_default();

    let (cmin, cmax) = records
        .iter()
        .map(|r| r.life_exp)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 1.0));

    let years: Vec<i32> = by_year.keys().copied().collect();
    let (updatemenus, sliders) = if years.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        (vec![play_controls()], vec![year_slider(&years)])
    };

    let mut layout = Layout {
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
        coloraxis: Some(ColorAxis {
            colorscale: even_colorscale(&ICE_SCALE),
            cmin,
            cmax,
            colorbar: ColorBar {
                title: Title::new("lifeExp"),
            },
        }),
        legend: Some(Legend {
            title: Title::new(""),
            tracegroupgap: 0,
        }),
        updatemenus,
        sliders,
        ..Default::default()
    };
    DarkTheme::apply(&mut layout);

    Figure {
        data,
        layout,
        frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmd_data::GAPMINDER_CSV;

    fn all_records() -> Vec<Record> {
        Record::parse_csv(GAPMINDER_CSV).unwrap()
    }

    #[test]
    fn one_frame_per_year_with_all_countries() {
        let fig = life_expectancy_map(&all_records());
        assert_eq!(fig.frames.len(), 12);
        assert_eq!(fig.frames[0].name, "1952");
        assert_eq!(fig.frames[11].name, "2007");

        let Trace::Choropleth(trace) = &fig.frames[0].data[0] else {
            panic!("expected a choropleth trace");
        };
        assert_eq!(trace.locations, vec!["BEL", "DNK", "DEU"]);
        assert_eq!(trace.locationmode, "ISO-3");

        // Initial data is the first frame
        assert_eq!(fig.data, fig.frames[0].data);
    }

    #[test]
    fn color_range_covers_every_frame() {
        let records = all_records();
        let fig = life_expectancy_map(&records);
        let axis = fig.layout.coloraxis.as_ref().unwrap();
        assert!((axis.cmin - 67.5).abs() < 1e-9);
        assert!((axis.cmax - 79.441).abs() < 1e-9);
        assert!(records
            .iter()
            .all(|r| axis.cmin <= r.life_exp && r.life_exp <= axis.cmax));
    }

    #[test]
    fn map_is_dark_and_scoped_to_europe() {
        let json = serde_json::to_value(life_expectancy_map(&all_records())).unwrap();
        assert_eq!(json["layout"]["geo"]["scope"], "europe");
        assert_eq!(json["layout"]["geo"]["projection"]["type"], "natural earth");
        assert_eq!(json["layout"]["geo"]["bgcolor"], "#222222");
        assert_eq!(json["layout"]["paper_bgcolor"], "#222222");
        assert_eq!(
            json["layout"]["sliders"][0]["steps"].as_array().unwrap().len(),
            12
        );
        assert_eq!(json["layout"]["updatemenus"][0]["buttons"][0]["method"], "animate");
    }

    #[test]
    fn empty_records_give_static_empty_map() {
        let fig = life_expectancy_map(&[]);
        assert!(fig.data.is_empty());
        assert!(fig.frames.is_empty());
        assert!(fig.layout.sliders.is_empty());
        assert!(fig.layout.updatemenus.is_empty());
    }
}
