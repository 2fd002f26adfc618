//! Rendering of query results.

use anyhow::Result;
use mysqlite_core::OutputFormat;
use rusqlite::types::Value;
use serde_json::json;

/// Column names and rows of a finished query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

pub fn render(output: &QueryOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(output)),
        OutputFormat::Json => render_json(output),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("x'{}'", hex::encode(b)),
    }
}

/// Aligned columns with a header and a row count footer.
pub fn render_table(output: &QueryOutput) -> String {
    let cells: Vec<Vec<String>> = output
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let mut widths: Vec<usize> = output.columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_line = |values: &[String]| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 3);
    lines.push(format_line(&output.columns));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        lines.push(format_line(row));
    }
    let noun = if cells.len() == 1 { "row" } else { "rows" };
    lines.push(format!("({} {})", cells.len(), noun));

    lines.join("\n")
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => json!(i),
        Value::Real(f) => json!(f),
        Value::Text(s) => json!(s),
        Value::Blob(b) => json!(hex::encode(b)),
    }
}

/// `{"columns": [...], "rows": [[...], ...]}`, keeping column order.
pub fn render_json(output: &QueryOutput) -> Result<String> {
    let rows: Vec<Vec<serde_json::Value>> = output
        .rows
        .iter()
        .map(|row| row.iter().map(json_value).collect())
        .collect();
    let document = json!({
        "columns": output.columns,
        "rows": rows,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
