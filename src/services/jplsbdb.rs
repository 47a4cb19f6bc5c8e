//! JPL Small-Body Database lookup.

use crate::client::ArchiveClient;
use crate::table::{Column, DataType, ResultTable, Value};
use crate::{Error, Result};
use serde::Deserialize;

pub const API_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb.api";
pub const PING_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb.api?sstr=1";

/// HTTP status used by the API for ambiguous search strings
const MULTIPLE_MATCHES: u16 = 300;

#[derive(Debug, Deserialize)]
struct SbdbReply {
    object: Option<SbdbObject>,
    orbit: Option<SbdbOrbit>,
    #[serde(default)]
    phys_par: Vec<SbdbParam>,
    discovery: Option<serde_json::Map<String, serde_json::Value>>,
    message: Option<String>,
    #[serde(default)]
    list: Vec<SbdbCandidate>,
}

#[derive(Debug, Deserialize)]
struct SbdbObject {
    fullname: Option<String>,
    des: Option<String>,
    kind: Option<String>,
    orbit_class: Option<OrbitClass>,
    #[serde(default)]
    neo: bool,
    #[serde(default)]
    pha: bool,
}

#[derive(Debug, Deserialize)]
struct OrbitClass {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SbdbOrbit {
    epoch: Option<String>,
    #[serde(default)]
    elements: Vec<SbdbParam>,
}

/// An orbital element or physical parameter
#[derive(Debug, Deserialize)]
struct SbdbParam {
    name: String,
    title: Option<String>,
    value: Option<serde_json::Value>,
    sigma: Option<serde_json::Value>,
    units: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SbdbCandidate {
    pdes: Option<String>,
    name: Option<String>,
}

/// One resolved small body
#[derive(Debug, Clone)]
pub struct SbdbRecord {
    /// Name, designation, class and flags
    pub summary: Vec<(String, String)>,
    pub elements: ResultTable,
    pub physical: Option<ResultTable>,
    pub discovery: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub enum SbdbLookup {
    Found(Box<SbdbRecord>),
    /// The search string matched several objects
    Multiple(ResultTable),
}

fn json_text(value: &Option<serde_json::Value>) -> Value {
    match value {
        None | Some(serde_json::Value::Null) => Value::Null,
        Some(serde_json::Value::String(s)) => Value::infer(s),
        Some(other) => Value::from_json(other),
    }
}

fn params_table(params: &[SbdbParam]) -> Result<ResultTable> {
    let mut table = ResultTable::new(vec![
        Column::new("name", DataType::Text),
        Column::new("title", DataType::Text),
        Column::new("value", DataType::Float),
        Column::new("sigma", DataType::Float),
        Column::new("units", DataType::Text),
    ]);
    for p in params {
        table.push_row(vec![
            Value::Text(p.name.clone()),
            p.title.clone().map(Value::Text).unwrap_or(Value::Null),
            json_text(&p.value),
            json_text(&p.sigma),
            p.units.clone().map(Value::Text).unwrap_or(Value::Null),
        ])?;
    }
    Ok(table)
}

fn yes_no(flag: bool) -> String {
    if flag { "Y" } else { "N" }.to_string()
}

pub fn parse_sbdb(status: u16, body: &str) -> Result<SbdbLookup> {
    let reply: SbdbReply = serde_json::from_str(body)?;

    if status == MULTIPLE_MATCHES || (!reply.list.is_empty() && reply.object.is_none()) {
        let rows = reply
            .list
            .iter()
            .map(|c| {
                vec![
                    c.pdes.clone().map(Value::Text).unwrap_or(Value::Null),
                    c.name.clone().map(Value::Text).unwrap_or(Value::Null),
                ]
            })
            .collect();
        let table = ResultTable::from_rows(vec!["pdes".into(), "name".into()], rows)?;
        return Ok(SbdbLookup::Multiple(table));
    }

    let object = reply.object.ok_or_else(|| {
        Error::Service(
            reply
                .message
                .clone()
                .unwrap_or_else(|| "object not found".to_string()),
        )
    })?;

    let mut summary = Vec::new();
    let mut push = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            summary.push((key.to_string(), value));
        }
    };
    push("fullname", object.fullname);
    push("designation", object.des);
    push("kind", object.kind);
    push("orbit_class", object.orbit_class.and_then(|c| c.name));
    push("neo", Some(yes_no(object.neo)));
    push("pha", Some(yes_no(object.pha)));
    let orbit = reply.orbit;
    push("epoch", orbit.as_ref().and_then(|o| o.epoch.clone()));

    let elements = params_table(orbit.as_ref().map(|o| o.elements.as_slice()).unwrap_or(&[]))?;
    let physical = if reply.phys_par.is_empty() {
        None
    } else {
        Some(params_table(&reply.phys_par)?)
    };
    let discovery = reply
        .discovery
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect();

    Ok(SbdbLookup::Found(Box::new(SbdbRecord {
        summary,
        elements,
        physical,
        discovery,
    })))
}

pub fn query_params(target: &str, phys: bool, discovery: bool) -> Vec<(&'static str, String)> {
    let mut params = vec![("sstr", target.trim().to_string())];
    if phys {
        params.push(("phys-par", "1".to_string()));
    }
    if discovery {
        params.push(("discovery", "1".to_string()));
    }
    params
}

pub struct JplSbdb<'a> {
    client: &'a ArchiveClient,
}

impl<'a> JplSbdb<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn query(&self, target: &str, phys: bool, discovery: bool) -> Result<SbdbLookup> {
        let (status, body) = self
            .client
            .get_text_any_status(API_URL, &query_params(target, phys, discovery))?;
        if status != MULTIPLE_MATCHES && !(200..300).contains(&status) {
            return Err(ArchiveClient::http_error(status, API_URL, &body));
        }
        parse_sbdb(status, &body)
    }
}
