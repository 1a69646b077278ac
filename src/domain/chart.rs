// Declarative chart specification domain models

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Sunburst,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    /// Series stacked on top of each other
    Relative,
}

/// One marker of a scatter series
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl MarkerPoint {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }
}

/// A node of a sunburst hierarchy. Root nodes have no parent.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub id: String,
    pub label: String,
    pub parent: Option<String>,
    pub value: f64,
    pub color_value: f64,
    pub custom_data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Markers {
        name: String,
        points: Vec<MarkerPoint>,
    },
    Bars {
        name: String,
        color: String,
        categories: Vec<String>,
        values: Vec<f64>,
    },
    Hierarchy {
        nodes: Vec<HierarchyNode>,
        color_scale: String,
        color_label: String,
        hover_template: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend_title: Option<String>,
    pub bar_mode: Option<BarMode>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>, series: Vec<Series>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: None,
            y_label: None,
            legend_title: None,
            bar_mode: None,
            series,
        }
    }

    pub fn with_axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    pub fn with_legend_title(mut self, legend_title: impl Into<String>) -> Self {
        self.legend_title = Some(legend_title.into());
        self
    }

    pub fn with_bar_mode(mut self, bar_mode: BarMode) -> Self {
        self.bar_mode = Some(bar_mode);
        self
    }
}
