//! VOTable decoding (TABLEDATA serialization).

use super::{Column, DataType, ResultTable, Value};
use crate::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Default)]
struct FieldSpec {
    name: String,
    datatype: String,
    arraysize: Option<String>,
    unit: String,
    description: String,
}

impl FieldSpec {
    fn into_column(self) -> Column {
        let datatype = DataType::from_votable(&self.datatype, self.arraysize.as_deref());
        Column::new(self.name, datatype)
            .with_unit(self.unit)
            .with_description(self.description.trim())
    }
}

fn attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match e.try_get_attribute(name)? {
        Some(a) => Ok(Some(a.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Decode the first table of a VOTable document.
///
/// An `INFO name="QUERY_STATUS" value="ERROR"` element anywhere in the
/// document is reported as [`Error::Service`].
pub fn parse_votable(xml: &str) -> Result<ResultTable> {
    let mut reader = Reader::from_str(xml);

    let mut fields: Vec<FieldSpec> = Vec::new();
    let mut current_field: Option<FieldSpec> = None;
    let mut table: Option<ResultTable> = None;
    let mut done = false;

    let mut row: Vec<Value> = Vec::new();
    let mut cell: Option<String> = None;
    let mut in_description = false;
    let mut error_info: Option<String> = None;
    let mut in_error_info = false;

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let empty = matches!(event, Event::Empty(_));
                match e.local_name().as_ref() {
                    b"TABLE" if table.is_some() => done = true,
                    // Fields of an earlier table without data do not carry over.
                    b"TABLE" => {
                        fields.clear();
                        current_field = None;
                    }
                    b"FIELD" if !done => {
                        let spec = FieldSpec {
                            name: attr(e, "name")?.or(attr(e, "ID")?).unwrap_or_default(),
                            datatype: attr(e, "datatype")?.unwrap_or_else(|| "char".to_string()),
                            arraysize: attr(e, "arraysize")?,
                            unit: attr(e, "unit")?.unwrap_or_default(),
                            description: String::new(),
                        };
                        if empty {
                            fields.push(spec);
                        } else {
                            current_field = Some(spec);
                        }
                    }
                    b"DESCRIPTION" if current_field.is_some() && !empty => in_description = true,
                    b"INFO" => {
                        let is_status = attr(e, "name")?.as_deref() == Some("QUERY_STATUS");
                        if is_status && attr(e, "value")?.as_deref() == Some("ERROR") {
                            error_info = Some(attr(e, "content")?.unwrap_or_default());
                            in_error_info = !empty;
                        }
                    }
                    b"TABLEDATA" if !done => {
                        let columns = fields.drain(..).map(FieldSpec::into_column).collect();
                        table = Some(ResultTable::new(columns));
                    }
                    b"BINARY" | b"BINARY2" | b"FITS" if !done => {
                        return Err(Error::Parse(
                            "Only TABLEDATA VOTable serialization is supported".to_string(),
                        ));
                    }
                    b"TR" if !done => row.clear(),
                    b"TD" if !done => {
                        if empty {
                            row.push(Value::Null);
                        } else {
                            cell = Some(String::new());
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                if let Some(buf) = cell.as_mut() {
                    buf.push_str(&text);
                } else if in_description {
                    if let Some(field) = current_field.as_mut() {
                        field.description.push_str(&text);
                    }
                } else if in_error_info {
                    if let Some(msg) = error_info.as_mut() {
                        msg.push_str(&text);
                    }
                }
            }
            Event::CData(ref e) => {
                if let Some(buf) = cell.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"FIELD" => {
                    if let Some(field) = current_field.take() {
                        fields.push(field);
                    }
                }
                b"DESCRIPTION" => in_description = false,
                b"INFO" => in_error_info = false,
                b"TD" => {
                    if let (Some(text), Some(t)) = (cell.take(), table.as_ref()) {
                        let datatype = t
                            .columns()
                            .get(row.len())
                            .map(|c| c.datatype)
                            .unwrap_or(DataType::Text);
                        row.push(Value::parse_as(&text, datatype));
                    }
                }
                b"TR" => {
                    if let Some(t) = table.as_mut() {
                        if !done {
                            t.push_row(std::mem::take(&mut row))?;
                        }
                    }
                }
                b"TABLE" if table.is_some() => done = true,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(message) = error_info {
        let message = message.trim();
        return Err(Error::Service(if message.is_empty() {
            "query failed".to_string()
        } else {
            message.to_string()
        }));
    }

    // A table declared with fields but no DATA element has no rows.
    match table {
        Some(table) => Ok(table),
        None if !fields.is_empty() => Ok(ResultTable::new(
            fields.into_iter().map(FieldSpec::into_column).collect(),
        )),
        None => Ok(ResultTable::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMBAD_TAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<VOTABLE version="1.4" xmlns="http://www.ivoa.net/xml/VOTable/v1.3">
<RESOURCE type="results">
<INFO name="QUERY_STATUS" value="OK"/>
<TABLE>
<FIELD name="main_id" datatype="char" arraysize="*">
  <DESCRIPTION>Main identifier for an object</DESCRIPTION>
</FIELD>
<FIELD name="ra" datatype="double" unit="deg"/>
<FIELD name="dec" datatype="double" unit="deg"/>
<FIELD name="plx_value" datatype="double" unit="mas"/>
<FIELD name="nbref" datatype="int"/>
<DATA><TABLEDATA>
<TR><TD>M  31</TD><TD>10.684708333333333</TD><TD>41.26875</TD><TD/><TD>12361</TD></TR>
<TR><TD>NAME Andromeda &amp; co</TD><TD>10.68</TD><TD>41.27</TD><TD></TD><TD>7</TD></TR>
</TABLEDATA></DATA>
</TABLE>
</RESOURCE>
</VOTABLE>"#;

    #[test]
    fn test_parse_tabledata() {
        let table = parse_votable(SIMBAD_TAP).unwrap();
        assert_eq!(table.column_names(), vec!["main_id", "ra", "dec", "plx_value", "nbref"]);
        assert_eq!(table.len(), 2);

        let main_id = table.column("main_id").unwrap();
        assert_eq!(main_id.description.as_deref(), Some("Main identifier for an object"));
        assert_eq!(table.column("ra").unwrap().unit.as_deref(), Some("deg"));

        assert_eq!(table.rows()[0][0], Value::Text("M  31".into()));
        assert_eq!(table.rows()[0][1], Value::Float(10.684708333333333));
        assert!(table.rows()[0][3].is_null());
        assert!(table.rows()[1][3].is_null());
        assert_eq!(table.rows()[0][4], Value::Int(12361));
        assert_eq!(table.rows()[1][0], Value::Text("NAME Andromeda & co".into()));
    }

    #[test]
    fn test_query_status_error() {
        let xml = r#"<VOTABLE><RESOURCE type="results">
<INFO name="QUERY_STATUS" value="ERROR">Incorrect ADQL query: table "foo" does not exist</INFO>
</RESOURCE></VOTABLE>"#;
        match parse_votable(xml) {
            Err(Error::Service(msg)) => assert!(msg.contains("does not exist")),
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_namespaced_and_empty() {
        let xml = r#"<vot:VOTABLE xmlns:vot="http://www.ivoa.net/xml/VOTable/v1.3">
<vot:RESOURCE><vot:TABLE>
<vot:FIELD name="source_id" datatype="long"/>
<vot:DATA><vot:TABLEDATA></vot:TABLEDATA></vot:DATA>
</vot:TABLE></vot:RESOURCE></vot:VOTABLE>"#;
        let table = parse_votable(xml).unwrap();
        assert_eq!(table.column_names(), vec!["source_id"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_only_first_table() {
        let xml = r#"<VOTABLE><RESOURCE>
<TABLE><FIELD name="a" datatype="int"/><DATA><TABLEDATA><TR><TD>1</TD></TR></TABLEDATA></DATA></TABLE>
<TABLE><FIELD name="b" datatype="int"/><DATA><TABLEDATA><TR><TD>2</TD></TR></TABLEDATA></DATA></TABLE>
</RESOURCE></VOTABLE>"#;
        let table = parse_votable(xml).unwrap();
        assert_eq!(table.column_names(), vec!["a"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_binary_rejected() {
        let xml = r#"<VOTABLE><RESOURCE><TABLE><FIELD name="a" datatype="int"/>
<DATA><BINARY2><STREAM encoding="base64">AAAA</STREAM></BINARY2></DATA></TABLE></RESOURCE></VOTABLE>"#;
        assert!(matches!(parse_votable(xml), Err(Error::Parse(_))));
    }

    #[test]
    fn test_metadata_table_before_results() {
        let xml = r#"<VOTABLE><RESOURCE type="meta">
<TABLE><FIELD name="a" datatype="char" arraysize="*"/></TABLE>
</RESOURCE><RESOURCE type="results">
<TABLE>
<FIELD name="x" datatype="int"/>
<FIELD name="y" datatype="int"/>
<DATA><TABLEDATA>
<TR><TD>1</TD><TD>2</TD></TR>
<TR><TD>3</TD><TD>4</TD></TR>
</TABLEDATA></DATA>
</TABLE></RESOURCE></VOTABLE>"#;
        let table = parse_votable(xml).unwrap();
        assert_eq!(table.column_names(), vec!["x", "y"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1][0], Value::Int(3));
    }
}
