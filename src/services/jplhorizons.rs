//! JPL Horizons ephemeris service.

use crate::client::ArchiveClient;
use crate::table::{ResultTable, Value};
use crate::{Error, Result};
use serde::Deserialize;

pub const API_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";
pub const PING_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons.api?format=text&COMMAND='499'&OBJ_DATA='NO'&MAKE_EPHEM='NO'";

/// Geocentric observer
pub const DEFAULT_OBSERVER: &str = "500@399";
/// Heliocentric origin for elements and vectors
pub const DEFAULT_ORIGIN: &str = "500@10";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemType {
    Observer,
    Elements,
    Vectors,
}

impl EphemType {
    fn param(&self) -> &'static str {
        match self {
            EphemType::Observer => "OBSERVER",
            EphemType::Elements => "ELEMENTS",
            EphemType::Vectors => "VECTORS",
        }
    }

    fn default_center(&self) -> &'static str {
        match self {
            EphemType::Observer => DEFAULT_OBSERVER,
            EphemType::Elements | EphemType::Vectors => DEFAULT_ORIGIN,
        }
    }
}

/// Target, location and time window of a Horizons request.
///
/// Unset times fall back to the Horizons defaults.
#[derive(Debug, Clone, Default)]
pub struct HorizonsRequest {
    pub target: String,
    pub location: Option<String>,
    pub start: Option<String>,
    pub stop: Option<String>,
    pub step: Option<String>,
}

/// Horizons expects parameter values in single quotes.
fn quoted(value: &str) -> String {
    format!("'{}'", value.trim().replace('\'', ""))
}

impl HorizonsRequest {
    pub fn params(&self, kind: EphemType) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("COMMAND", quoted(&self.target)),
            ("OBJ_DATA", quoted("NO")),
            ("MAKE_EPHEM", quoted("YES")),
            ("EPHEM_TYPE", quoted(kind.param())),
            (
                "CENTER",
                quoted(self.location.as_deref().unwrap_or(kind.default_center())),
            ),
            ("CSV_FORMAT", quoted("YES")),
        ];
        if let Some(start) = &self.start {
            params.push(("START_TIME", quoted(start)));
        }
        if let Some(stop) = &self.stop {
            params.push(("STOP_TIME", quoted(stop)));
        }
        if let Some(step) = &self.step {
            params.push(("STEP_SIZE", quoted(step)));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
struct HorizonsReply {
    result: Option<String>,
    error: Option<String>,
}

/// Decode the CSV block between `$$SOE` and `$$EOE`.
///
/// Column names come from the last header line before `$$SOE`; blank
/// names become `col_N`.
pub fn parse_ephemeris(text: &str) -> Result<ResultTable> {
    let lines: Vec<&str> = text.lines().collect();
    let soe = lines
        .iter()
        .position(|l| l.trim() == "$$SOE")
        .ok_or_else(|| Error::Service(horizons_message(text)))?;
    let eoe = lines[soe..]
        .iter()
        .position(|l| l.trim() == "$$EOE")
        .map(|i| soe + i)
        .ok_or_else(|| Error::Parse("Horizons output has no $$EOE marker".to_string()))?;

    let header = lines[..soe]
        .iter()
        .rev()
        .map(|l| l.trim())
        .find(|l| !l.is_empty() && !l.starts_with('*'))
        .ok_or_else(|| Error::Parse("Horizons output has no column header".to_string()))?;

    let mut names: Vec<String> = split_csv(header);
    while names.last().is_some_and(|n| n.is_empty()) {
        names.pop();
    }
    let mut seen = std::collections::HashSet::new();
    for (i, name) in names.iter_mut().enumerate() {
        if name.is_empty() || !seen.insert(name.clone()) {
            *name = format!("col_{}", i + 1);
            seen.insert(name.clone());
        }
    }

    let rows: Vec<Vec<Value>> = lines[soe + 1..eoe]
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let mut cells: Vec<Value> = split_csv(line).iter().map(|c| Value::infer(c)).collect();
            cells.resize(names.len(), Value::Null);
            cells
        })
        .collect();

    ResultTable::from_rows(names, rows)
}

fn split_csv(line: &str) -> Vec<String> {
    line.split(',').map(|c| c.trim().to_string()).collect()
}

/// Horizons reports problems as free text in place of the ephemeris.
fn horizons_message(text: &str) -> String {
    let message = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('*') && !l.starts_with("API "))
        .take(6)
        .collect::<Vec<_>>()
        .join(" ");
    if message.is_empty() {
        "Horizons returned no ephemeris".to_string()
    } else {
        message
    }
}

pub struct JplHorizons<'a> {
    client: &'a ArchiveClient,
}

impl<'a> JplHorizons<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    fn fetch(&self, request: &HorizonsRequest, kind: EphemType) -> Result<ResultTable> {
        if request.target.trim().is_empty() {
            return Err(Error::Usage(crate::t("A target is required.")));
        }
        let reply: HorizonsReply = self.client.get_json(API_URL, &request.params(kind))?;
        if let Some(error) = reply.error {
            return Err(Error::Service(error));
        }
        let text = reply
            .result
            .ok_or_else(|| Error::Parse("Horizons reply has no result".to_string()))?;
        parse_ephemeris(&text)
    }

    pub fn ephemerides(&self, request: &HorizonsRequest) -> Result<ResultTable> {
        self.fetch(request, EphemType::Observer)
    }

    pub fn elements(&self, request: &HorizonsRequest) -> Result<ResultTable> {
        self.fetch(request, EphemType::Elements)
    }

    pub fn vectors(&self, request: &HorizonsRequest) -> Result<ResultTable> {
        self.fetch(request, EphemType::Vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DataType;

    const OUTPUT: &str = "\
*******************************************************************************
Target body name: Mars (499)                      {source: mar097}
*******************************************************************************
 Date__(UT)__HR:MN, , , R.A._____(ICRF), DEC______(ICRF),  APmag,  S-brt,
*******************************************************************************
$$SOE
 2024-Jan-01 00:00, , , 265.12345, -23.45678, 1.42, 4.10,
 2024-Jan-02 00:00,*, , 265.80001, -23.50002, 1.43, 4.11,
$$EOE
*******************************************************************************
";

    #[test]
    fn test_parse_ephemeris() {
        let table = parse_ephemeris(OUTPUT).unwrap();
        assert_eq!(
            table.column_names(),
            vec!["Date__(UT)__HR:MN", "col_2", "col_3", "R.A._____(ICRF)", "DEC______(ICRF)", "APmag", "S-brt"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][3], Value::Float(265.12345));
        assert_eq!(table.rows()[0][1], Value::Null);
        assert_eq!(table.column("APmag").unwrap().datatype, DataType::Float);
    }

    #[test]
    fn test_missing_ephemeris_is_service_error() {
        let text = "No matches found.\n*****\n";
        assert!(matches!(parse_ephemeris(text), Err(Error::Service(msg)) if msg.contains("No matches")));
    }

    #[test]
    fn test_params() {
        let request = HorizonsRequest {
            target: "499".into(),
            start: Some("2024-01-01".into()),
            ..Default::default()
        };
        let params = request.params(EphemType::Vectors);
        assert!(params.contains(&("COMMAND", "'499'".to_string())));
        assert!(params.contains(&("CENTER", "'500@10'".to_string())));
        assert!(params.contains(&("START_TIME", "'2024-01-01'".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "STOP_TIME"));
    }
}
