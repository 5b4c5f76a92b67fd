//! Plain-text rendering of chart tables for the terminal.

use crate::report::chart::{ChartKind, ChartSpec, Reduction};

const KEY_WIDTH: usize = 34;
const VALUE_WIDTH: usize = 16;

/// Render every chart as a small boxed table
///
/// **Public** - used by the report command's `--summary`
pub fn render_text_summary(charts: &[ChartSpec]) -> String {
    if charts.is_empty() {
        return "  (no charts for this selection)".to_string();
    }

    let mut lines = Vec::new();
    for (index, chart) in charts.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        render_chart(chart, &mut lines);
    }

    lines.join("\n")
}

fn render_chart(chart: &ChartSpec, lines: &mut Vec<String>) {
    let key_header = chart
        .table
        .group_by
        .iter()
        .map(|field| chart.label_for(field.column()))
        .collect::<Vec<_>>()
        .join(" / ");

    let reduction = match chart.table.reduction {
        Reduction::Mean => "mean",
        Reduction::Sum => "sum",
    };
    let value_header = format!("{} ({})", chart.label_for(chart.y_field.column()), reduction);

    let bar = "━".repeat(KEY_WIDTH + 2);
    let value_bar = "━".repeat(VALUE_WIDTH + 2);

    lines.push(format!("  {} [{}]", chart.title, chart.kind));
    lines.push(format!("  ┏{}┳{}┓", bar, value_bar));
    lines.push(format!(
        "  ┃ {:<kw$} ┃ {:>vw$} ┃",
        truncate(&key_header, KEY_WIDTH),
        truncate(&value_header, VALUE_WIDTH),
        kw = KEY_WIDTH,
        vw = VALUE_WIDTH
    ));
    lines.push(format!("  ┣{}╋{}┫", bar, value_bar));

    if chart.table.is_empty() {
        lines.push(format!(
            "  ┃ {:<kw$} ┃ {:>vw$} ┃",
            "(no data)",
            "",
            kw = KEY_WIDTH,
            vw = VALUE_WIDTH
        ));
    }

    // Pie slices also show their share of the whole
    let pie_total = match chart.kind {
        ChartKind::Pie => Some(chart.table.total()).filter(|t| *t != 0.0),
        _ => None,
    };

    for row in &chart.table.rows {
        let mut key = row
            .key
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(" / ");

        if let Some(total) = pie_total {
            key = format!("{} ({:.1}%)", key, row.value / total * 100.0);
        }

        lines.push(format!(
            "  ┃ {:<kw$} ┃ {:>vw$.2} ┃",
            truncate(&key, KEY_WIDTH),
            row.value,
            kw = KEY_WIDTH,
            vw = VALUE_WIDTH
        ));
    }

    lines.push(format!("  ┗{}┻{}┛", bar, value_bar));
}

// Keep the tail, it is usually the distinguishing part
fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    let tail: String = text.chars().skip(count - (width - 3)).collect();
    format!("...{}", tail)
}
