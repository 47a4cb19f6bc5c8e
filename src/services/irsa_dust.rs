//! IRSA Galactic dust reddening and extinction service.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::ipac::parse_ipac;
use crate::table::{Column, DataType, ResultTable, Value};
use crate::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

pub const DUST_URL: &str = "https://irsa.ipac.caltech.edu/cgi-bin/DUST/nph-dust";
pub const PING_URL: &str = DUST_URL;

/// Accepted region sizes, in degrees
pub const MIN_REGION_DEG: f64 = 2.0;
pub const MAX_REGION_DEG: f64 = 37.5;
pub const DEFAULT_REGION_DEG: f64 = 5.0;

/// One statistic reported for one map (reddening, emission, temperature)
#[derive(Debug, Clone, PartialEq)]
pub struct DustStatistic {
    pub quantity: String,
    pub statistic: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
}

/// Decoded `nph-dust` response
#[derive(Debug, Default)]
pub struct DustResponse {
    pub statistics: Vec<DustStatistic>,
    /// URL of the per-band extinction table (IPAC format)
    pub extinction_table_url: Option<String>,
}

impl DustResponse {
    pub fn statistics_table(&self) -> Result<ResultTable> {
        let mut table = ResultTable::new(vec![
            Column::new("quantity", DataType::Text),
            Column::new("statistic", DataType::Text),
            Column::new("value", DataType::Float),
            Column::new("unit", DataType::Text),
        ]);
        for stat in &self.statistics {
            let row = vec![
                Value::Text(stat.quantity.clone()),
                Value::Text(stat.statistic.clone()),
                stat.value.map(Value::Float).unwrap_or(Value::Null),
                stat.unit.clone().map(Value::Text).unwrap_or(Value::Null),
            ];
            table.push_row(row)?;
        }
        Ok(table)
    }
}

/// Split `"0.0623 (mag)"` into value and unit.
fn split_value(text: &str) -> (Option<f64>, Option<String>) {
    let text = text.trim();
    let (number, unit) = match text.find('(') {
        Some(idx) => (
            text[..idx].trim(),
            Some(text[idx + 1..].trim_end_matches(')').trim().to_string()),
        ),
        None => (text, None),
    };
    (number.parse().ok(), unit.filter(|u| !u.is_empty()))
}

pub fn parse_dust_response(xml: &str) -> Result<DustResponse> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut response = DustResponse::default();
    let mut status_error = false;
    let mut message = String::new();
    let mut desc = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if name == "results" {
                    if let Some(attr) = e.try_get_attribute("status")? {
                        status_error = attr.unescape_value()?.trim() == "error";
                    }
                }
                if name == "result" {
                    desc.clear();
                }
                path.push(name);
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                let parent = path.len().checked_sub(2).map(|i| path[i].as_str());
                match (parent, path.last().map(String::as_str)) {
                    (_, Some("message")) => message.push_str(text),
                    (Some("result"), Some("desc")) => desc.push_str(text),
                    (Some("data"), Some("table")) if response.extinction_table_url.is_none() => {
                        response.extinction_table_url = Some(text.to_string());
                    }
                    (Some("statistic"), Some(stat)) => {
                        let (value, unit) = split_value(text);
                        response.statistics.push(DustStatistic {
                            quantity: desc.clone(),
                            statistic: stat.to_string(),
                            value,
                            unit,
                        });
                    }
                    _ => {}
                }
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if status_error {
        let message = if message.is_empty() { "unknown error".to_string() } else { message };
        return Err(Error::Service(message));
    }
    Ok(response)
}

pub fn query_params(center: &SkyCoord, region: Option<&Angle>) -> Result<Vec<(&'static str, String)>> {
    let size = region.map(Angle::degrees).unwrap_or(DEFAULT_REGION_DEG);
    if !(MIN_REGION_DEG..=MAX_REGION_DEG).contains(&size) {
        return Err(Error::InvalidAngle(crate::tf(
            "Region size must be between {min} and {max} degrees.",
            &[("min", &MIN_REGION_DEG), ("max", &MAX_REGION_DEG)],
        )));
    }
    Ok(vec![
        ("locstr", format!("{} {:+}", center.ra_deg, center.dec_deg)),
        ("regSize", size.to_string()),
    ])
}

pub struct IrsaDust<'a> {
    client: &'a ArchiveClient,
}

impl<'a> IrsaDust<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    fn fetch(&self, center: &SkyCoord, region: Option<&Angle>) -> Result<DustResponse> {
        let body = self.client.get_text(DUST_URL, &query_params(center, region)?)?;
        parse_dust_response(&body)
    }

    /// Reddening, emission and temperature statistics around a position.
    pub fn query(&self, center: &SkyCoord, region: Option<&Angle>) -> Result<ResultTable> {
        self.fetch(center, region)?.statistics_table()
    }

    /// Per-band extinction at a position.
    pub fn extinction(&self, center: &SkyCoord) -> Result<ResultTable> {
        let response = self.fetch(center, None)?;
        let url = response
            .extinction_table_url
            .ok_or_else(|| Error::Service("no extinction table in response".to_string()))?;
        let text = self.client.get_text(url.trim(), &[])?;
        parse_ipac(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"<?xml version="1.0"?>
<results status="ok">
  <input><locstr>10.68 +41.27</locstr><regSize>5.0 deg</regSize></input>
  <result>
    <desc>E(B-V) Reddening</desc>
    <data>
      <image>https://irsa.ipac.caltech.edu/workspace/ebv.fits</image>
      <table>
        https://irsa.ipac.caltech.edu/workspace/extinction.tbl
      </table>
    </data>
    <statistic>
      <refPixelValueSFD>  0.0623 (mag)</refPixelValueSFD>
      <meanValueSFD>0.0700 (mag)</meanValueSFD>
    </statistic>
  </result>
  <result>
    <desc>Dust Temperature</desc>
    <statistic>
      <refPixelValue>18.5 (K)</refPixelValue>
    </statistic>
  </result>
</results>"#;

    #[test]
    fn test_parse_dust_response() {
        let response = parse_dust_response(RESPONSE).unwrap();
        assert_eq!(
            response.extinction_table_url.as_deref(),
            Some("https://irsa.ipac.caltech.edu/workspace/extinction.tbl")
        );
        assert_eq!(response.statistics.len(), 3);
        let first = &response.statistics[0];
        assert_eq!(first.quantity, "E(B-V) Reddening");
        assert_eq!(first.statistic, "refPixelValueSFD");
        assert_eq!(first.value, Some(0.0623));
        assert_eq!(first.unit.as_deref(), Some("mag"));
        assert_eq!(response.statistics[2].quantity, "Dust Temperature");

        let table = response.statistics_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column_names(), vec!["quantity", "statistic", "value", "unit"]);
    }

    #[test]
    fn test_error_status() {
        let xml = r#"<results status="error"><message>Invalid location</message></results>"#;
        match parse_dust_response(xml) {
            Err(Error::Service(msg)) => assert_eq!(msg, "Invalid location"),
            other => panic!("unexpected: {:?}", other.map(|r| r.statistics.len())),
        }
    }

    #[test]
    fn test_region_size_bounds() {
        let center = SkyCoord::new(10.0, 10.0).unwrap();
        assert!(query_params(&center, Some(&Angle::from_degrees(1.0))).is_err());
        let params = query_params(&center, None).unwrap();
        assert_eq!(params[1], ("regSize", "5".to_string()));
    }
}
