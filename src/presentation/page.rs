// HTML rendering of the dashboard view model; charts are drawn by plotly.js
use crate::domain::dashboard::{Dashboard, Panel, Row, SidePanel};
use crate::domain::standings::Table;
use crate::infrastructure::plotly_mapper::{chart_to_plotly, kind_name, level_name};
use std::fmt::Write;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = "\
body{margin:0;font-family:sans-serif;display:flex}\
aside{width:28rem;padding:1rem;background:#f0f2f6;min-height:100vh;overflow-x:auto}\
main{flex:1;padding:1rem 2rem}\
table{border-collapse:collapse;font-size:.8rem}\
th,td{border:1px solid #ddd;padding:.2rem .4rem;text-align:right}\
th:first-child,td:first-child{text-align:left}\
.row{display:flex;gap:1rem}.col{flex:1;min-width:0}\
.alert{padding:1rem;border-radius:.4rem;margin:1rem 0}\
.info{background:#e8f0fe;color:#1c4f9c}.error{background:#fde8e8;color:#9c1c1c}";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_table(out: &mut String, table: &Table) {
    out.push_str("<table><thead><tr>");
    for column in &table.columns {
        let _ = write!(out, "<th>{}</th>", escape_html(column));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn render_side_panel(out: &mut String, side: &SidePanel) {
    out.push_str("<aside>");
    let _ = write!(out, "<h3>{}</h3>", escape_html(&side.heading));
    render_table(out, &side.table);
    let _ = write!(out, "<h2>{}</h2>", escape_html(&side.note_heading));
    let _ = write!(out, "<div class=\"alert info\">{}</div>", escape_html(&side.note));
    out.push_str("</aside>");
}

/// Writes one panel; `chart_index` numbers the chart containers
fn render_panel(out: &mut String, panel: &Panel, chart_index: &mut usize) {
    match panel {
        Panel::Chart(chart) => {
            // `</` would close the script element early
            let figure = chart_to_plotly(chart).to_string().replace("</", "<\\/");
            let id = format!("chart-{}-{}", *chart_index, kind_name(chart.kind));
            *chart_index += 1;
            let _ = write!(
                out,
                "<div id=\"{id}\"></div><script>Plotly.newPlot(\"{id}\", {figure});</script>"
            );
        }
        Panel::Message { level, text } => {
            let _ = write!(
                out,
                "<div class=\"alert {}\">{}</div>",
                level_name(*level),
                escape_html(text)
            );
        }
    }
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let title = escape_html(&dashboard.title);

    let _ = write!(
        out,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title><script src=\"{PLOTLY_JS}\"></script><style>{STYLE}</style></head><body>"
    );

    if let Some(side) = &dashboard.side_panel {
        render_side_panel(&mut out, side);
    }

    let _ = write!(out, "<main><h2>{title}</h2>");
    let mut chart_index = 0;
    for row in &dashboard.rows {
        match row {
            Row::TwoColumn(left, right) => {
                out.push_str("<div class=\"row\"><div class=\"col\">");
                render_panel(&mut out, left, &mut chart_index);
                out.push_str("</div><div class=\"col\">");
                render_panel(&mut out, right, &mut chart_index);
                out.push_str("</div></div>");
            }
            Row::FullWidth(panel) => {
                out.push_str("<div class=\"row\"><div class=\"col\">");
                render_panel(&mut out, panel, &mut chart_index);
                out.push_str("</div></div>");
            }
        }
    }
    let _ = write!(
        out,
        "<footer><small>Updated {}</small></footer></main></body></html>",
        escape_html(&dashboard.generated_at)
    );

    out
}
