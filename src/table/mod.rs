//! Result table - the tabular payload every archive query produces.

pub mod display;
pub mod filter;
pub mod ipac;
pub mod votable;
pub mod write;

pub use display::{render_table, DisplayOptions};
pub use filter::{apply_filters, ColumnFilter};
pub use write::{save_table, OutputFormat};

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Column value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Int,
    Float,
    Bool,
    Text,
}

impl DataType {
    /// Map a VOTable `datatype` attribute to a column type.
    pub fn from_votable(datatype: &str, arraysize: Option<&str>) -> Self {
        let scalar = arraysize.is_none() || arraysize == Some("1");
        match datatype {
            "short" | "int" | "long" | "unsignedByte" if scalar => DataType::Int,
            "float" | "double" if scalar => DataType::Float,
            "boolean" if scalar => DataType::Bool,
            _ => DataType::Text,
        }
    }

    pub fn votable_name(&self) -> &'static str {
        match self {
            DataType::Int => "long",
            DataType::Float => "double",
            DataType::Bool => "boolean",
            DataType::Text => "char",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Bool => "bool",
            DataType::Text => "text",
        }
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" | "long" | "short" | "i" | "l" => Ok(DataType::Int),
            "float" | "double" | "real" | "r" | "d" | "f" => Ok(DataType::Float),
            "bool" | "boolean" => Ok(DataType::Bool),
            "char" | "text" | "string" | "c" | "date" => Ok(DataType::Text),
            other => Err(Error::Parse(format!("Unknown column type: {}", other))),
        }
    }
}

/// A single cell
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Parse text into a value of the given type. Empty text is Null.
    pub fn parse_as(text: &str, datatype: DataType) -> Value {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        match datatype {
            DataType::Int => trimmed
                .parse::<i64>()
                .map(Value::Int)
                .unwrap_or_else(|_| Value::Text(trimmed.to_string())),
            DataType::Float => match trimmed.parse::<f64>() {
                Ok(v) if v.is_nan() => Value::Null,
                Ok(v) => Value::Float(v),
                Err(_) => Value::Text(trimmed.to_string()),
            },
            DataType::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "t" | "1" => Value::Bool(true),
                "false" | "f" | "0" => Value::Bool(false),
                _ => Value::Null,
            },
            DataType::Text => Value::Text(trimmed.to_string()),
        }
    }

    /// Guess the type from the text (API responses without a schema).
    pub fn infer(text: &str) -> Value {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Value::Int(v);
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            if v.is_finite() {
                return Value::Float(v);
            }
        }
        Value::Text(trimmed.to_string())
    }

    pub fn from_json(value: &serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) if s.is_empty() => Value::Null,
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => Value::Text(
                items
                    .iter()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            serde_json::Value::Object(_) => Value::Text(value.to_string()),
        }
    }

    pub fn datatype(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(DataType::Bool),
            Value::Int(_) => Some(DataType::Int),
            Value::Float(_) => Some(DataType::Float),
            Value::Text(_) => Some(DataType::Text),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub datatype: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, datatype: DataType) -> Self {
        Self {
            name: name.into(),
            datatype,
            unit: None,
            description: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        if !unit.is_empty() {
            self.unit = Some(unit);
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(description);
        }
        self
    }
}

/// A fully materialized query result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl ResultTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table whose column types are inferred from the first
    /// non-null value of each column.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let datatype = rows
                    .iter()
                    .filter_map(|r| r.get(i).and_then(Value::datatype))
                    .next()
                    .unwrap_or(DataType::Text);
                Column::new(name, datatype)
            })
            .collect();
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::Parse(format!(
                "Row has {} values but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Values of one column, top to bottom
    pub fn column_values(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Keep only the named columns, in the order given. Unknown names are
    /// dropped; if none is known the table is returned unchanged.
    pub fn select(self, names: &[String]) -> Self {
        let mut indices = Vec::new();
        for name in names {
            if let Some(idx) = self.column_index(name) {
                if !indices.contains(&idx) {
                    indices.push(idx);
                }
            }
        }
        if indices.is_empty() {
            return self;
        }

        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Self { columns, rows }
    }

    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Value]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }
}

/// Flatten repeated and comma-separated `--col` values.
pub fn parse_column_args(args: &[String]) -> Option<Vec<String>> {
    let names: Vec<String> = args
        .iter()
        .flat_map(|a| a.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if names.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
        return None;
    }
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample() -> ResultTable {
        let mut table = ResultTable::new(vec![
            Column::new("designation", DataType::Text),
            Column::new("w1mpro", DataType::Float).with_unit("mag"),
            Column::new("nb", DataType::Int),
            Column::new("ph_qual", DataType::Text),
        ]);
        table
            .push_row(vec![
                Value::Text("J004244.31+411609.1".into()),
                Value::Float(9.5),
                Value::Int(3),
                Value::Text("AAA".into()),
            ])
            .unwrap();
        table
            .push_row(vec![
                Value::Text("J004245.00+411700.0".into()),
                Value::Float(12.25),
                Value::Int(1),
                Value::Text("ABU".into()),
            ])
            .unwrap();
        table
            .push_row(vec![
                Value::Text("J004246.10+411512.7".into()),
                Value::Null,
                Value::Int(2),
                Value::Text("A".into()),
            ])
            .unwrap();
        table
    }

    #[test]
    fn test_push_row_arity() {
        let mut table = ResultTable::new(vec![Column::new("a", DataType::Int)]);
        assert!(table.push_row(vec![Value::Int(1), Value::Int(2)]).is_err());
        assert!(table.push_row(vec![Value::Int(1)]).is_ok());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_select_keeps_order_and_drops_unknown() {
        let table = sample().select(&["ph_qual".into(), "bogus".into(), "designation".into()]);
        assert_eq!(table.column_names(), vec!["ph_qual", "designation"]);
        assert_eq!(table.rows()[0][0], Value::Text("AAA".into()));
    }

    #[test]
    fn test_select_nothing_known_is_noop() {
        let table = sample().select(&["bogus".into()]);
        assert_eq!(table.columns().len(), 4);
    }

    #[test]
    fn test_parse_column_args() {
        let args = vec!["ra,dec".to_string(), "w1mpro".to_string()];
        assert_eq!(parse_column_args(&args), Some(vec!["ra".into(), "dec".into(), "w1mpro".into()]));
        assert_eq!(parse_column_args(&["all".to_string()]), None);
        assert_eq!(parse_column_args(&[]), None);
    }

    #[test]
    fn test_value_parsing() {
        assert_eq!(Value::parse_as("  ", DataType::Float), Value::Null);
        assert_eq!(Value::parse_as("NaN", DataType::Float), Value::Null);
        assert_eq!(Value::parse_as("42", DataType::Int), Value::Int(42));
        assert_eq!(Value::parse_as("T", DataType::Bool), Value::Bool(true));
        assert_eq!(Value::infer("1.5e3"), Value::Float(1500.0));
        assert_eq!(Value::infer("M 31"), Value::Text("M 31".into()));
    }

    #[test]
    fn test_from_rows_infers_types() {
        let table = ResultTable::from_rows(
            vec!["name".into(), "mag".into()],
            vec![
                vec![Value::Text("a".into()), Value::Null],
                vec![Value::Text("b".into()), Value::Float(1.0)],
            ],
        )
        .unwrap();
        assert_eq!(table.columns()[1].datatype, DataType::Float);
    }

    #[test]
    fn test_datatype_from_votable() {
        assert_eq!(DataType::from_votable("double", None), DataType::Float);
        assert_eq!(DataType::from_votable("int", Some("1")), DataType::Int);
        assert_eq!(DataType::from_votable("double", Some("3")), DataType::Text);
        assert_eq!(DataType::from_votable("char", Some("*")), DataType::Text);
    }
}
