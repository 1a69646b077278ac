// Mapper to convert chart specs and dashboards into Plotly figure JSON
use crate::domain::chart::{BarMode, ChartKind, ChartSpec, HierarchyNode, MarkerPoint, Series};
use crate::domain::dashboard::{Dashboard, MessageLevel, Panel, Row, SidePanel};
use serde_json::{json, Value};

/// Largest marker diameter in pixels
const MAX_MARKER_SIZE: f64 = 20.0;

pub fn chart_to_plotly(chart: &ChartSpec) -> Value {
    let sizeref = marker_sizeref(chart);
    let data: Vec<Value> = chart
        .series
        .iter()
        .map(|s| series_to_trace(s, sizeref))
        .collect();

    let mut layout = json!({
        "title": { "text": chart.title },
    });
    if let Some(x_label) = &chart.x_label {
        layout["xaxis"] = json!({ "title": { "text": x_label } });
    }
    if let Some(y_label) = &chart.y_label {
        layout["yaxis"] = json!({ "title": { "text": y_label } });
    }
    if let Some(legend_title) = &chart.legend_title {
        layout["legend"] = json!({ "title": { "text": legend_title } });
    }
    if let Some(bar_mode) = chart.bar_mode {
        let mode = match bar_mode {
            BarMode::Relative => "relative",
        };
        layout["barmode"] = json!(mode);
    }

    json!({ "data": data, "layout": layout })
}

/// Area-mode scale so the largest marker is `MAX_MARKER_SIZE` across
fn marker_sizeref(chart: &ChartSpec) -> f64 {
    let max_size = chart
        .series
        .iter()
        .flat_map(|s| match s {
            Series::Markers { points, .. } => points.iter().map(|p| p.size).collect::<Vec<f64>>(),
            _ => Vec::new(),
        })
        .fold(0.0_f64, f64::max);

    if max_size > 0.0 {
        2.0 * max_size / (MAX_MARKER_SIZE * MAX_MARKER_SIZE)
    } else {
        1.0
    }
}

fn series_to_trace(series: &Series, sizeref: f64) -> Value {
    match series {
        Series::Markers { name, points } => markers_to_trace(name, points, sizeref),
        Series::Bars {
            name,
            color,
            categories,
            values,
        } => json!({
            "type": "bar",
            "name": name,
            "legendgroup": name,
            "x": categories,
            "y": values,
            "marker": { "color": color },
        }),
        Series::Hierarchy {
            nodes,
            color_scale,
            color_label,
            hover_template,
        } => hierarchy_to_trace(nodes, color_scale, color_label, hover_template),
    }
}

fn markers_to_trace(name: &str, points: &[MarkerPoint], sizeref: f64) -> Value {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();
    let size: Vec<f64> = points.iter().map(|p| p.size).collect();

    json!({
        "type": "scatter",
        "mode": "markers",
        "name": name,
        "legendgroup": name,
        "showlegend": true,
        "x": x,
        "y": y,
        "marker": {
            "size": size,
            "sizemode": "area",
            "sizeref": sizeref,
        },
    })
}

fn hierarchy_to_trace(
    nodes: &[HierarchyNode],
    color_scale: &str,
    color_label: &str,
    hover_template: &str,
) -> Value {
    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
    let parents: Vec<&str> = nodes.iter().map(|n| n.parent.as_deref().unwrap_or("")).collect();
    let values: Vec<f64> = nodes.iter().map(|n| n.value).collect();
    let colors: Vec<f64> = nodes.iter().map(|n| n.color_value).collect();
    let custom_data: Vec<&Vec<String>> = nodes.iter().map(|n| &n.custom_data).collect();

    json!({
        "type": "sunburst",
        "ids": ids,
        "labels": labels,
        "parents": parents,
        "values": values,
        "branchvalues": "total",
        "customdata": custom_data,
        "hovertemplate": hover_template,
        "marker": {
            "colors": colors,
            "colorscale": color_scale,
            "showscale": true,
            "colorbar": { "title": { "text": color_label } },
        },
    })
}

pub fn kind_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Scatter => "scatter",
        ChartKind::Sunburst => "sunburst",
        ChartKind::Bar => "bar",
    }
}

pub fn level_name(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "info",
        MessageLevel::Error => "error",
    }
}

fn panel_to_json(panel: &Panel) -> Value {
    match panel {
        Panel::Chart(chart) => json!({
            "kind": kind_name(chart.kind),
            "chart": chart_to_plotly(chart),
        }),
        Panel::Message { level, text } => json!({
            "message": { "level": level_name(*level), "text": text }
        }),
    }
}

fn row_to_json(row: &Row) -> Value {
    match row {
        Row::TwoColumn(left, right) => json!({
            "layout": "two_column",
            "panels": [panel_to_json(left), panel_to_json(right)],
        }),
        Row::FullWidth(panel) => json!({
            "layout": "full_width",
            "panels": [panel_to_json(panel)],
        }),
    }
}

fn side_panel_to_json(side: &SidePanel) -> Value {
    json!({
        "heading": side.heading,
        "table": side.table,
        "note_heading": side.note_heading,
        "note": side.note,
    })
}

pub fn dashboard_to_json(dashboard: &Dashboard) -> Value {
    let rows: Vec<Value> = dashboard.rows.iter().map(row_to_json).collect();

    json!({
        "title": dashboard.title,
        "generated_at": dashboard.generated_at,
        "side_panel": dashboard.side_panel.as_ref().map(side_panel_to_json),
        "rows": rows,
    })
}
