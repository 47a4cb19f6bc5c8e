//! `column OP value` row filters.
//!
//! Malformed expressions and filters that cannot be applied to a table are
//! skipped, never reported as errors.

use super::{DataType, ResultTable, Value};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static FILTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*(<=|>=|==|!=|<|>|=)\s*([\w.\-+]+)$").expect("valid filter regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "=" | "==" => Some(Op::Eq),
            "!=" => Some(Op::Ne),
            "<" => Some(Op::Lt),
            "<=" => Some(Op::Le),
            ">" => Some(Op::Gt),
            ">=" => Some(Op::Ge),
            _ => None,
        }
    }

    fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Lt => ordering == Ordering::Less,
            Op::Le => ordering != Ordering::Greater,
            Op::Gt => ordering == Ordering::Greater,
            Op::Ge => ordering != Ordering::Less,
        }
    }
}

/// A parsed `column OP value` predicate
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub column: String,
    pub op: Op,
    pub literal: String,
}

impl ColumnFilter {
    /// Returns `None` for anything that is not a well-formed predicate.
    pub fn parse(expr: &str) -> Option<Self> {
        let caps = FILTER_REGEX.captures(expr.trim())?;
        let op = Op::parse(&caps[2])?;
        Some(Self {
            column: caps[1].to_string(),
            op,
            literal: caps[3].to_string(),
        })
    }

    /// Coerce the literal to the column's type.
    fn coerce(&self, datatype: DataType) -> Option<Value> {
        let text = self.literal.as_str();
        match datatype {
            DataType::Int => text
                .parse::<i64>()
                .map(Value::Int)
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(Value::Float)),
            DataType::Float => text.parse::<f64>().ok().map(Value::Float),
            DataType::Bool => match text.to_ascii_lowercase().as_str() {
                "true" | "t" | "1" => Some(Value::Bool(true)),
                "false" | "f" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
            DataType::Text => Some(Value::Text(text.to_string())),
        }
    }

    /// Apply to a table. Returns `false` (table untouched) when the filter
    /// cannot be applied.
    pub fn apply(&self, table: &mut ResultTable) -> bool {
        let Some(idx) = table.column_index(&self.column) else {
            tracing::debug!("filter column '{}' not in table, ignoring", self.column);
            return false;
        };
        let datatype = effective_type(table, idx);
        let Some(literal) = self.coerce(datatype) else {
            tracing::debug!(
                "filter value '{}' is not a valid {} for '{}', ignoring",
                self.literal,
                datatype.as_str(),
                self.column
            );
            return false;
        };

        table.retain_rows(|row| {
            compare(&row[idx], &literal)
                .map(|ord| self.op.holds(ord))
                .unwrap_or(false)
        });
        true
    }
}

/// Declared type, unless the cells disagree with it (text in a numeric
/// column), in which case the first non-null cell decides.
fn effective_type(table: &ResultTable, idx: usize) -> DataType {
    let declared = table.columns()[idx].datatype;
    let observed = table
        .rows()
        .iter()
        .find_map(|row| row[idx].datatype());
    match observed {
        Some(DataType::Int) if declared == DataType::Float => DataType::Float,
        Some(observed) if observed != declared => observed,
        _ => declared,
    }
}

fn compare(cell: &Value, literal: &Value) -> Option<Ordering> {
    match (cell, literal) {
        (Value::Null, _) => None,
        (Value::Text(a), Value::Text(b)) => Some(a.as_str().cmp(b.as_str())),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (a, b) => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

/// Apply every well-formed filter in order; the rest are skipped.
pub fn apply_filters(table: &mut ResultTable, exprs: &[String]) -> usize {
    let mut applied = 0;
    for expr in exprs {
        match ColumnFilter::parse(expr) {
            Some(filter) => {
                if filter.apply(table) {
                    applied += 1;
                }
            }
            None => tracing::debug!("ignoring malformed filter '{}'", expr),
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::sample;

    #[test]
    fn test_parse() {
        let f = ColumnFilter::parse("w1mpro>10").unwrap();
        assert_eq!(f.column, "w1mpro");
        assert_eq!(f.op, Op::Gt);
        assert_eq!(f.literal, "10");

        let f = ColumnFilter::parse("ph_qual = A").unwrap();
        assert_eq!(f.op, Op::Eq);
        assert_eq!(ColumnFilter::parse("dec >= -5.5").unwrap().literal, "-5.5");
    }

    #[test]
    fn test_parse_malformed() {
        assert!(ColumnFilter::parse("w1mpro").is_none());
        assert!(ColumnFilter::parse("w1mpro => 3").is_none());
        assert!(ColumnFilter::parse("w1mpro <> 3").is_none());
        assert!(ColumnFilter::parse(">3").is_none());
        assert!(ColumnFilter::parse("a < b c").is_none());
        assert!(ColumnFilter::parse("x == 1; rm -rf").is_none());
    }

    #[test]
    fn test_numeric_filter() {
        let mut table = sample();
        assert_eq!(apply_filters(&mut table, &["w1mpro>10".into()]), 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0][1], Value::Float(12.25));
    }

    #[test]
    fn test_null_never_matches() {
        let mut table = sample();
        apply_filters(&mut table, &["w1mpro!=0".into()]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_text_equality() {
        let mut table = sample();
        apply_filters(&mut table, &["ph_qual=A".into()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0][2], Value::Int(2));
    }

    #[test]
    fn test_int_column_float_literal() {
        let mut table = sample();
        apply_filters(&mut table, &["nb<=1.5".into()]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_filters_combine() {
        let mut table = sample();
        let applied = apply_filters(&mut table, &["nb>=2".into(), "w1mpro<10".into()]);
        assert_eq!(applied, 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_invalid_filters_leave_table_intact() {
        let mut table = sample();
        let applied = apply_filters(
            &mut table,
            &[
                "garbage".into(),
                "missing>1".into(),
                "w1mpro>bright".into(),
                "".into(),
            ],
        );
        assert_eq!(applied, 0);
        assert_eq!(table, sample());
    }
}
