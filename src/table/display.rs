//! Terminal rendering of result tables.

use super::{ResultTable, Value};
use crate::i18n::tf;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Cell text limit when not showing everything
pub const MAX_CELL_CHARS: usize = 40;
const MIN_WIDTH: usize = 80;
const NULL_MARKER: &str = "--";

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Negative means all rows
    pub max_rows: i64,
    pub show_all_columns: bool,
    /// Terminal width in characters
    pub width: usize,
}

impl DisplayOptions {
    pub fn new(max_rows: i64, show_all_columns: bool) -> Self {
        let width = console::Term::stdout()
            .size_checked()
            .map(|(_, cols)| cols as usize)
            .unwrap_or(MIN_WIDTH);
        Self {
            max_rows,
            show_all_columns,
            width: width.max(MIN_WIDTH),
        }
    }

    fn row_limit(&self, total: usize) -> usize {
        if self.max_rows < 0 {
            total
        } else {
            (self.max_rows as usize).min(total)
        }
    }
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NULL_MARKER.to_string(),
        Value::Float(v) => format_float(*v),
        other => other.to_string(),
    }
}

fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e12).contains(&abs) {
        return format!("{:.6e}", v);
    }
    let text = format!("{:.6}", v);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

fn truncate(text: String, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text;
    }
    let mut out: String = text.chars().take(limit.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Render the table, with notes about hidden rows and columns.
pub fn render_table(table: &ResultTable, opts: &DisplayOptions) -> String {
    let shown_rows = opts.row_limit(table.len());
    let cell = |value: &Value| {
        let text = format_value(value);
        if opts.show_all_columns {
            text
        } else {
            truncate(text, MAX_CELL_CHARS)
        }
    };

    let headers: Vec<String> = table.columns().iter().map(|c| c.name.clone()).collect();
    let body: Vec<Vec<String>> = table.rows()[..shown_rows]
        .iter()
        .map(|row| row.iter().map(|v| cell(v)).collect())
        .collect();

    let visible_columns = if opts.show_all_columns {
        headers.len()
    } else {
        columns_that_fit(&headers, &body, opts.width)
    };

    let mut builder = Builder::default();
    builder.push_record(headers[..visible_columns].iter().cloned());
    for row in &body {
        builder.push_record(row[..visible_columns].iter().cloned());
    }
    let mut out = builder.build().with(Style::rounded()).to_string();

    let hidden_rows = table.len() - shown_rows;
    if hidden_rows > 0 {
        out.push('\n');
        out.push_str(&tf(
            "... {count} more rows (use --max-rows-display -1 to show all)",
            &[("count", &hidden_rows)],
        ));
    }
    let hidden_columns = headers.len() - visible_columns;
    if hidden_columns > 0 {
        out.push('\n');
        out.push_str(&tf(
            "... {count} more columns hidden (use --show-all-cols to show all)",
            &[("count", &hidden_columns)],
        ));
    }
    out
}

/// Number of leading columns whose rendered width fits in `width`.
fn columns_that_fit(headers: &[String], body: &[Vec<String>], width: usize) -> usize {
    // One leading border, then content + two padding + one border per column.
    let mut used = 1;
    for (i, header) in headers.iter().enumerate() {
        let content = body
            .iter()
            .map(|row| row[i].chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0);
        used += content + 3;
        if used > width {
            return i.max(1);
        }
    }
    headers.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::sample;
    use crate::table::{Column, DataType};

    fn opts(max_rows: i64, show_all: bool, width: usize) -> DisplayOptions {
        DisplayOptions {
            max_rows,
            show_all_columns: show_all,
            width,
        }
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_value(&Value::Null), "--");
        assert_eq!(format_value(&Value::Float(10.5)), "10.5");
        assert_eq!(format_value(&Value::Float(3.0)), "3");
        assert_eq!(format_value(&Value::Float(1.0e-7)), "1.000000e-7");
        assert_eq!(format_value(&Value::Int(-4)), "-4");
    }

    #[test]
    fn test_row_truncation_note() {
        let out = render_table(&sample(), &opts(2, false, 200));
        assert!(out.contains("J004245.00+411700.0"));
        assert!(!out.contains("J004246.10+411512.7"));
        assert!(out.contains("1 more rows"));
    }

    #[test]
    fn test_all_rows() {
        let out = render_table(&sample(), &opts(-1, false, 200));
        assert!(out.contains("J004246.10+411512.7"));
        assert!(!out.contains("more rows"));
    }

    #[test]
    fn test_narrow_terminal_hides_columns() {
        let out = render_table(&sample(), &opts(-1, false, 40));
        assert!(out.contains("designation"));
        assert!(!out.contains("ph_qual"));
        assert!(out.contains("more columns hidden"));

        let out = render_table(&sample(), &opts(-1, true, 40));
        assert!(out.contains("ph_qual"));
    }

    #[test]
    fn test_long_cells_truncated() {
        let mut table = ResultTable::new(vec![Column::new("title", DataType::Text)]);
        table.push_row(vec![Value::Text("x".repeat(100))]).unwrap();

        let out = render_table(&table, &opts(-1, false, 200));
        assert!(out.contains(&format!("{}...", "x".repeat(MAX_CELL_CHARS - 3))));
        assert!(!out.contains(&"x".repeat(MAX_CELL_CHARS)));

        let out = render_table(&table, &opts(-1, true, 200));
        assert!(out.contains(&"x".repeat(100)));
    }
}
