//! MAST (Barbara A. Mikulski Archive for Space Telescopes) CAOM cone search.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::{Column, DataType, ResultTable, Value};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use std::thread;
use std::time::Duration;

pub const INVOKE_URL: &str = "https://mast.stsci.edu/api/v0/invoke";
pub const PING_URL: &str = "https://mast.stsci.edu/api/v0/";

pub const CONE_SERVICE: &str = "Mast.Caom.Cone";
/// Default search radius for name queries, in degrees
pub const DEFAULT_OBJECT_RADIUS_DEG: f64 = 0.2;

const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLLS: usize = 60;

#[derive(Debug, Deserialize)]
struct MastField {
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MastReply {
    status: String,
    msg: Option<String>,
    #[serde(default)]
    fields: Vec<MastField>,
    #[serde(default)]
    data: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// State of a MAST request after one round trip
#[derive(Debug)]
pub enum MastStatus {
    Complete(ResultTable),
    Executing,
}

fn field_type(kind: Option<&str>) -> DataType {
    match kind.unwrap_or("string") {
        "int" | "long" | "short" => DataType::Int,
        "float" | "double" => DataType::Float,
        "boolean" => DataType::Bool,
        _ => DataType::Text,
    }
}

pub fn cone_request(center: &SkyCoord, radius: &Angle, page_size: usize) -> serde_json::Value {
    json!({
        "service": CONE_SERVICE,
        "params": {
            "ra": center.ra_deg,
            "dec": center.dec_deg,
            "radius": radius.degrees(),
        },
        "format": "json",
        "pagesize": page_size,
        "page": 1,
        "removenullcolumns": true,
        "removecache": false,
    })
}

pub fn parse_reply(body: &str) -> Result<MastStatus> {
    let reply: MastReply = serde_json::from_str(body)?;
    match reply.status.as_str() {
        "EXECUTING" => return Ok(MastStatus::Executing),
        "COMPLETE" => {}
        _ => {
            return Err(Error::Service(
                reply.msg.unwrap_or_else(|| format!("MAST request status {}", reply.status)),
            ));
        }
    }

    let columns: Vec<Column> = reply
        .fields
        .iter()
        .map(|f| Column::new(f.name.clone(), field_type(f.kind.as_deref())))
        .collect();
    let mut table = ResultTable::new(columns);
    for record in &reply.data {
        let row = reply
            .fields
            .iter()
            .map(|f| record.get(&f.name).map(Value::from_json).unwrap_or(Value::Null))
            .collect();
        table.push_row(row)?;
    }
    Ok(MastStatus::Complete(table))
}

pub struct Mast<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Mast<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    /// Submit a request and re-submit it while MAST reports it as executing.
    fn invoke(&self, request: &serde_json::Value) -> Result<ResultTable> {
        let form = [("request", request.to_string())];
        for attempt in 0..MAX_POLLS {
            let body = self.client.post_form(INVOKE_URL, &form)?;
            match parse_reply(&body)? {
                MastStatus::Complete(table) => return Ok(table),
                MastStatus::Executing => {
                    tracing::debug!("MAST request still executing (poll {})", attempt + 1);
                    thread::sleep(POLL_INTERVAL);
                }
            }
        }
        Err(Error::Service(crate::t("MAST request did not complete in time.")))
    }

    pub fn query_region(&self, center: &SkyCoord, radius: &Angle) -> Result<ResultTable> {
        self.invoke(&cone_request(center, radius, self.client.row_limit()))
    }

    pub fn query_object(&self, name: &str, radius: Option<&Angle>) -> Result<ResultTable> {
        let center = crate::coords::resolve_name(self.client, name)?;
        let radius = radius
            .copied()
            .unwrap_or_else(|| Angle::from_degrees(DEFAULT_OBJECT_RADIUS_DEG));
        self.query_region(&center, &radius)
    }
}
