use serde::Serialize;

/// Declarative chart specification, serialized as a Plotly `{data, layout}` figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout {
                title: Title::new(title),
                ..Default::default()
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Number of plotted points across all traces
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(XyTrace),
    Bar(BarTrace),
    Scattermap(MapTrace),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Scatter(t) => t.x.len(),
            Trace::Bar(t) => t.x.len(),
            Trace::Scattermap(t) => t.lat.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Scatter(t) => Some(&t.name),
            Trace::Bar(t) => t.name.as_deref(),
            Trace::Scattermap(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
    Markers,
}

/// Numeric x/y series, drawn as lines or markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyTrace {
    pub name: String,
    pub mode: Mode,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// Points on a tile map. A missing coordinate is sent as `null` and left to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapTrace {
    pub mode: Mode,
    pub lat: Vec<Option<f64>>,
    pub lon: Vec<Option<f64>>,
    pub hovertext: Vec<String>,
    pub marker: ColorMarker,
}

/// Continuous color scale as explicit `[position, color]` stops
pub type ColorScale = Vec<(f64, String)>;

/// Marker colored along a continuous scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMarker {
    pub color: Vec<f64>,
    pub colorscale: ColorScale,
    pub showscale: bool,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<MapView>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub style: String,
    pub zoom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}
