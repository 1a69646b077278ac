// Dashboard view model
use super::chart::ChartSpec;
use super::standings::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Chart(ChartSpec),
    Message { level: MessageLevel, text: String },
}

impl Panel {
    pub fn info(text: impl Into<String>) -> Self {
        Panel::Message {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Panel::Message {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }

    pub fn as_chart(&self) -> Option<&ChartSpec> {
        match self {
            Panel::Chart(chart) => Some(chart),
            Panel::Message { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    TwoColumn(Panel, Panel),
    FullWidth(Panel),
}

impl Row {
    pub fn panels(&self) -> Vec<&Panel> {
        match self {
            Row::TwoColumn(left, right) => vec![left, right],
            Row::FullWidth(panel) => vec![panel],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidePanel {
    pub heading: String,
    pub table: Table,
    pub note_heading: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: String,
    pub generated_at: String,
    pub side_panel: Option<SidePanel>,
    pub rows: Vec<Row>,
}

impl Dashboard {
    pub fn new(title: String, generated_at: String) -> Self {
        Self {
            title,
            generated_at,
            side_panel: None,
            rows: Vec::new(),
        }
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.rows.iter().flat_map(Row::panels)
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.panels().filter_map(Panel::as_chart)
    }

    pub fn messages(&self) -> impl Iterator<Item = (MessageLevel, &str)> {
        self.panels().filter_map(|p| match p {
            Panel::Message { level, text } => Some((*level, text.as_str())),
            Panel::Chart(_) => None,
        })
    }
}
