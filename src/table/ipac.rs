//! IPAC ASCII table decoding.
//!
//! Layout: `\keyword = value` and `\ comment` lines, then up to four
//! `|`-delimited header lines (names, types, units, null tokens) and
//! fixed-width data rows aligned to the header's `|` positions.

use super::{Column, DataType, ResultTable, Value};
use crate::{Error, Result};
use std::str::FromStr;

/// Character positions `(left, right)` of the `|` pair around each column.
fn boundaries(header: &str) -> Vec<(usize, usize)> {
    let pipes: Vec<usize> = header
        .chars()
        .enumerate()
        .filter(|(_, c)| *c == '|')
        .map(|(i, _)| i)
        .collect();
    pipes.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Characters `start..end` of a line, trimmed.
fn slice(line: &str, start: usize, end: usize) -> String {
    if start >= end {
        return String::new();
    }
    let cell: String = line.chars().skip(start).take(end - start).collect();
    cell.trim().to_string()
}

fn header_values(line: &str, bounds: &[(usize, usize)]) -> Vec<String> {
    bounds
        .iter()
        .map(|&(left, right)| slice(line, left + 1, right))
        .collect()
}

pub fn parse_ipac(text: &str) -> Result<ResultTable> {
    let mut headers: Vec<&str> = Vec::new();
    let mut data: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.starts_with('\\') || line.trim().is_empty() {
            continue;
        }
        if line.starts_with('|') && data.is_empty() {
            headers.push(line);
        } else {
            data.push(line);
        }
    }

    let Some(name_line) = headers.first() else {
        return Err(Error::Parse("IPAC table has no header line".to_string()));
    };
    let bounds = boundaries(name_line);
    if bounds.is_empty() {
        return Err(Error::Parse("IPAC header has no columns".to_string()));
    }

    let names = header_values(name_line, &bounds);
    let types = headers
        .get(1)
        .map(|l| header_values(l, &bounds))
        .unwrap_or_default();
    let units = headers
        .get(2)
        .map(|l| header_values(l, &bounds))
        .unwrap_or_default();
    let nulls = headers
        .get(3)
        .map(|l| header_values(l, &bounds))
        .unwrap_or_default();

    let columns = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let datatype = types
                .get(i)
                .and_then(|t| DataType::from_str(t).ok())
                .unwrap_or(DataType::Text);
            Column::new(name.clone(), datatype).with_unit(units.get(i).cloned().unwrap_or_default())
        })
        .collect();
    let mut table = ResultTable::new(columns);

    for line in data {
        let mut row = Vec::with_capacity(bounds.len());
        let last = bounds.len() - 1;
        let width = line.chars().count();
        for (i, &(left, right)) in bounds.iter().enumerate() {
            // A cell owns its left separator position; the last one runs
            // to the end of the line.
            let right = if i == last { width } else { right };
            let raw = slice(line, left, right);
            let null = nulls.get(i).map(String::as_str).unwrap_or("null");
            if raw == null {
                row.push(Value::Null);
            } else {
                row.push(Value::parse_as(&raw, table.columns()[i].datatype));
            }
        }
        table.push_row(row)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [usize; 6] = [11, 7, 18, 7, 16, 5];

    fn header(values: [&str; 6]) -> String {
        let mut line = String::from("|");
        for (v, w) in values.iter().zip(WIDTHS) {
            line.push_str(&format!("{:<w$}|", v, w = w));
        }
        line
    }

    fn data(values: [&str; 6]) -> String {
        let mut line = String::new();
        for (i, (v, w)) in values.iter().zip(WIDTHS).enumerate() {
            if i == 0 {
                line.push_str(&format!(" {:<w$}", v, w = w));
            } else {
                line.push_str(&format!(" {:>w$}", v, w = w));
            }
        }
        line
    }

    fn extinction() -> String {
        [
            "\\fixlen = T".to_string(),
            "\\ RA, Dec".to_string(),
            header(["Filter_name", "LamEff", "A_over_E_B_V_SandF", "A_SandF", "A_over_E_B_V_SFD", "A_SFD"]),
            header(["char", "double", "double", "double", "double", "double"]),
            header(["", "microns", "mags", "mags", "mags", "mags"]),
            header(["null", "null", "null", "null", "null", "null"]),
            data(["CTIO U", "0.3734", "4.107", "0.229", "4.968", "0.277"]),
            data(["CTIO B", "0.4309", "3.641", "0.203", "4.325", "0.241"]),
            data(["UKIRT K", "2.2088", "0.306", "null", "0.363", "0.020"]),
        ]
        .join("\n")
    }

    #[test]
    fn test_parse_extinction_table() {
        let table = parse_ipac(&extinction()).unwrap();
        assert_eq!(table.column_names()[0], "Filter_name");
        assert_eq!(table.columns().len(), 6);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0][0], Value::Text("CTIO U".into()));
        assert_eq!(table.rows()[1][1], Value::Float(0.4309));
        assert_eq!(table.column("LamEff").unwrap().unit.as_deref(), Some("microns"));
        assert!(table.column("Filter_name").unwrap().unit.is_none());
        assert!(table.rows()[2][3].is_null());
        assert_eq!(table.rows()[2][5], Value::Float(0.020));
    }

    #[test]
    fn test_multibyte_cells_keep_alignment() {
        let text = "|name      |value|\n|char      |int  |\n Ångström   42  \n Ω Cen      7   \n";
        let table = parse_ipac(text).unwrap();
        assert_eq!(table.rows()[0][0], Value::Text("Ångström".into()));
        assert_eq!(table.rows()[0][1], Value::Int(42));
        assert_eq!(table.rows()[1][0], Value::Text("Ω Cen".into()));
        assert_eq!(table.rows()[1][1], Value::Int(7));
    }

    #[test]
    fn test_missing_header() {
        assert!(parse_ipac("\\ only comments\n").is_err());
    }
}
