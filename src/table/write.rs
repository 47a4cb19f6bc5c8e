//! Saving result tables to files.

use super::display::format_value;
use super::{DataType, ResultTable, Value};
use crate::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
    VoTable,
    Ipac,
    Ascii,
}

impl OutputFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_str(ext).ok()
    }

    /// Explicit format, else the file extension, else CSV.
    pub fn resolve(path: &Path, explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(name) => Self::from_str(name),
            None => Ok(Self::from_extension(path).unwrap_or(OutputFormat::Csv)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" | "tab" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            "votable" | "vot" | "xml" => Ok(OutputFormat::VoTable),
            "ipac" | "tbl" => Ok(OutputFormat::Ipac),
            "ascii" | "txt" | "text" => Ok(OutputFormat::Ascii),
            other => Err(Error::Usage(format!(
                "Unsupported output format '{}' (expected csv, tsv, json, votable, ipac or ascii)",
                other
            ))),
        }
    }
}

pub fn save_table(table: &ResultTable, path: &Path, format: Option<&str>) -> Result<OutputFormat> {
    let format = OutputFormat::resolve(path, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let contents = serialize(table, format)?;
    std::fs::write(path, contents)?;
    tracing::debug!("wrote {} rows to {} as {:?}", table.len(), path.display(), format);
    Ok(format)
}

pub fn serialize(table: &ResultTable, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Csv => delimited(table, ','),
        OutputFormat::Tsv => delimited(table, '\t'),
        OutputFormat::Json => json(table)?,
        OutputFormat::VoTable => votable(table)?,
        OutputFormat::Ipac => ipac(table),
        OutputFormat::Ascii => ascii(table),
    })
}

fn raw(value: &Value) -> String {
    value.to_string()
}

fn delimited(table: &ResultTable, sep: char) -> String {
    let quote = |field: &str| -> String {
        if field.contains(sep) || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    };
    let mut out = String::new();
    let header: Vec<String> = table.columns().iter().map(|c| quote(&c.name)).collect();
    out.push_str(&header.join(&sep.to_string()));
    out.push('\n');
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|v| quote(&raw(v))).collect();
        out.push_str(&cells.join(&sep.to_string()));
        out.push('\n');
    }
    out
}

fn json(table: &ResultTable) -> Result<String> {
    let records: Vec<serde_json::Value> = table
        .rows()
        .iter()
        .map(|row| {
            let object: serde_json::Map<String, serde_json::Value> = table
                .columns()
                .iter()
                .zip(row)
                .map(|(col, value)| (col.name.clone(), value.to_json()))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

const VOTABLE_NS: &str = "http://www.ivoa.net/xml/VOTable/v1.3";

fn votable(table: &ResultTable) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 1);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("VOTABLE");
    root.push_attribute(("version", "1.4"));
    root.push_attribute(("xmlns", VOTABLE_NS));
    writer.write_event(Event::Start(root))?;
    let mut resource = BytesStart::new("RESOURCE");
    resource.push_attribute(("type", "results"));
    writer.write_event(Event::Start(resource))?;
    writer.write_event(Event::Start(BytesStart::new("TABLE")))?;

    for col in table.columns() {
        let mut field = BytesStart::new("FIELD");
        field.push_attribute(("name", col.name.as_str()));
        field.push_attribute(("datatype", col.datatype.votable_name()));
        if col.datatype == DataType::Text {
            field.push_attribute(("arraysize", "*"));
        }
        if let Some(unit) = &col.unit {
            field.push_attribute(("unit", unit.as_str()));
        }
        match &col.description {
            Some(desc) => {
                writer.write_event(Event::Start(field))?;
                writer.write_event(Event::Start(BytesStart::new("DESCRIPTION")))?;
                writer.write_event(Event::Text(BytesText::new(desc)))?;
                writer.write_event(Event::End(BytesEnd::new("DESCRIPTION")))?;
                writer.write_event(Event::End(BytesEnd::new("FIELD")))?;
            }
            None => writer.write_event(Event::Empty(field))?,
        }
    }

    writer.write_event(Event::Start(BytesStart::new("DATA")))?;
    writer.write_event(Event::Start(BytesStart::new("TABLEDATA")))?;
    for row in table.rows() {
        writer.write_event(Event::Start(BytesStart::new("TR")))?;
        for value in row {
            match value {
                Value::Null => writer.write_event(Event::Empty(BytesStart::new("TD")))?,
                other => {
                    writer.write_event(Event::Start(BytesStart::new("TD")))?;
                    writer.write_event(Event::Text(BytesText::new(&raw(other))))?;
                    writer.write_event(Event::End(BytesEnd::new("TD")))?;
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new("TR")))?;
    }
    for name in ["TABLEDATA", "DATA", "TABLE", "RESOURCE", "VOTABLE"] {
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }

    let mut out = String::from_utf8(writer.into_inner()).map_err(|e| Error::Parse(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

fn column_widths(table: &ResultTable, extra: &[Vec<String>], cells: &[Vec<String>]) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, col)| {
            extra
                .iter()
                .chain(cells)
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(col.name.chars().count()))
                .max()
                .unwrap_or(1)
        })
        .collect()
}

fn ipac(table: &ResultTable) -> String {
    let types: Vec<String> = table
        .columns()
        .iter()
        .map(|c| match c.datatype {
            DataType::Int => "long",
            DataType::Float => "double",
            DataType::Bool | DataType::Text => "char",
        }.to_string())
        .collect();
    let units: Vec<String> = table
        .columns()
        .iter()
        .map(|c| c.unit.clone().unwrap_or_default())
        .collect();
    let nulls: Vec<String> = table.columns().iter().map(|_| "null".to_string()).collect();
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| if v.is_null() { "null".to_string() } else { raw(v) })
                .collect()
        })
        .collect();
    let widths = column_widths(table, &[types.clone(), units.clone(), nulls.clone()], &cells);

    let header_line = |values: &[String]| -> String {
        let mut line = String::from("|");
        for (value, width) in values.iter().zip(&widths) {
            line.push_str(&format!("{:<width$}|", value, width = width));
        }
        line
    };
    let names: Vec<String> = table.columns().iter().map(|c| c.name.clone()).collect();

    let mut out = String::new();
    for line in [
        header_line(&names),
        header_line(&types),
        header_line(&units),
        header_line(&nulls),
    ] {
        out.push_str(&line);
        out.push('\n');
    }
    for row in &cells {
        out.push(' ');
        for (value, width) in row.iter().zip(&widths) {
            out.push_str(&format!("{:>width$} ", value, width = width));
        }
        out.push('\n');
    }
    out
}

fn ascii(table: &ResultTable) -> String {
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(format_value).collect())
        .collect();
    let widths = column_widths(table, &[], &cells);
    let mut out = String::new();

    let names: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:>w$}", c.name, w = w))
        .collect();
    out.push_str(names.join(" ").trim_end());
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join(" "));
    out.push('\n');
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:>w$}", v, w = w))
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ipac::parse_ipac;
    use crate::table::tests::sample;
    use crate::table::votable::parse_votable;

    #[test]
    fn test_format_resolution() {
        assert_eq!(OutputFormat::resolve(Path::new("out.json"), None).unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::resolve(Path::new("out.vot"), None).unwrap(), OutputFormat::VoTable);
        assert_eq!(OutputFormat::resolve(Path::new("out"), None).unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::resolve(Path::new("out.json"), Some("tsv")).unwrap(), OutputFormat::Tsv);
        assert!(matches!(OutputFormat::resolve(Path::new("x"), Some("fits")), Err(Error::Usage(_))));
    }

    #[test]
    fn test_csv_quoting_and_nulls() {
        let mut table = ResultTable::new(vec![
            super::super::Column::new("name", DataType::Text),
            super::super::Column::new("mag", DataType::Float),
        ]);
        table.push_row(vec![Value::Text("a, \"b\"".into()), Value::Null]).unwrap();
        let csv = serialize(&table, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "name,mag\n\"a, \"\"b\"\"\",\n");
    }

    #[test]
    fn test_json_records() {
        let json = serialize(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert_eq!(parsed[0]["nb"], 3);
        assert!(parsed[2]["w1mpro"].is_null());
    }

    #[test]
    fn test_votable_reads_back() {
        let xml = serialize(&sample(), OutputFormat::VoTable).unwrap();
        let table = parse_votable(&xml).unwrap();
        assert_eq!(table, sample());
    }

    #[test]
    fn test_votable_markup() {
        let mut table = ResultTable::new(vec![
            super::super::Column::new("name", DataType::Text).with_description("Object <main> id"),
            super::super::Column::new("mag", DataType::Float).with_unit("mag"),
        ]);
        table.push_row(vec![Value::Text("A & B".into()), Value::Null]).unwrap();
        let xml = serialize(&table, OutputFormat::VoTable).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<FIELD name=\"mag\" datatype=\"double\" unit=\"mag\"/>"));
        assert!(xml.contains("<DESCRIPTION>Object &lt;main&gt; id</DESCRIPTION>"));
        assert!(xml.contains("<TD>A &amp; B</TD>"));
        assert!(xml.contains("<TD/>"));
        assert!(xml.trim_end().ends_with("</VOTABLE>"));

        let back = parse_votable(&xml).unwrap();
        assert_eq!(back.rows()[0][0], Value::Text("A & B".into()));
        assert!(back.rows()[0][1].is_null());
        assert_eq!(back.column("name").unwrap().description.as_deref(), Some("Object <main> id"));
    }

    #[test]
    fn test_ipac_reads_back() {
        let text = serialize(&sample(), OutputFormat::Ipac).unwrap();
        let table = parse_ipac(&text).unwrap();
        assert_eq!(table.column_names(), sample().column_names());
        assert_eq!(table.rows()[1][1], Value::Float(12.25));
        assert!(table.rows()[2][1].is_null());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("result.csv");
        let format = save_table(&sample(), &path, None).unwrap();
        assert_eq!(format, OutputFormat::Csv);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("designation,w1mpro,nb,ph_qual\n"));
        assert_eq!(contents.lines().count(), 4);
    }
}
