//! Serializable subset of the plotly.js figure schema.
//!
//! Only the attributes the dashboard sets are modeled; anything left `None`
//! is omitted from the JSON so plotly.js falls back to its own defaults.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A trace, tagged with its plotly `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Choropleth(ChoroplethTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub marker: Marker,
    pub offsetgroup: String,
    pub legendgroup: String,
    pub showlegend: bool,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ScatterTrace {
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub mode: String,
    pub line: LineStyle,
    pub showlegend: bool,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ChoroplethTrace {
    pub name: String,
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub locationmode: String,
    pub hovertext: Vec<String>,
    pub coloraxis: String,
    pub geo: String,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<ColorAxis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
    pub tracegroupgap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub scope: String,
    pub projection: Projection,
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAxis {
    pub colorscale: Vec<(f64, String)>,
    pub cmin: f64,
    pub cmax: f64,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

/// One animation frame. `name` is what slider steps and play buttons refer to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_is_tagged_with_plotly_type() {
        let trace = Trace::Bar(BarTrace {
            name: "Belgium".to_string(),
            x: vec![1987],
            y: vec![75.35],
            ..Default::default()
        });
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["x"][0], 1987);
    }

    #[test]
    fn unset_layout_fields_are_omitted() {
        let json = serde_json::to_value(Figure::default()).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["layout"], serde_json::json!({}));
        assert!(json.get("frames").is_none());
    }

    #[test]
    fn projection_kind_serializes_as_type() {
        let json = serde_json::to_value(Projection {
            kind: "natural earth".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "natural earth");
    }
}
