//! NASA Astrophysics Data System literature search.

use crate::client::ArchiveClient;
use crate::table::{ResultTable, Value};
use crate::{Error, Result};
use serde::Deserialize;

pub const SEARCH_URL: &str = "https://api.adsabs.harvard.edu/v1/search/query";
pub const PING_URL: &str = "https://api.adsabs.harvard.edu/v1/";

/// Environment variables checked for the API token, in order
pub const TOKEN_VARS: &[&str] = &["ADS_DEV_KEY", "ADS_API_TOKEN"];

pub const DEFAULT_FIELDS: &[&str] = &["bibcode", "title", "author", "year", "pub", "citation_count"];
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_SORT: &str = "date desc";

/// Authors listed before abbreviating with "et al."
const MAX_AUTHORS: usize = 3;

#[derive(Debug, Deserialize)]
struct AdsReply {
    response: AdsResponse,
}

#[derive(Debug, Deserialize)]
struct AdsResponse {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// A search result page and the total number of matches
#[derive(Debug)]
pub struct AdsResults {
    pub num_found: u64,
    pub table: ResultTable,
}

/// Token from the environment, else from the config file.
pub fn resolve_token<F>(env: F, config_token: Option<&str>) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_VARS
        .iter()
        .filter_map(|var| env(var))
        .chain(config_token.map(str::to_string))
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
        .ok_or_else(|| {
            Error::MissingToken(crate::t(
                "Set ADS_DEV_KEY or ADS_API_TOKEN, or add ads_token to the config file.",
            ))
        })
}

/// Field list from `--fields` arguments, falling back to the defaults.
pub fn field_list(requested: &[String]) -> Vec<String> {
    let fields: Vec<String> = requested
        .iter()
        .flat_map(|f| f.split(','))
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();
    if fields.is_empty() {
        DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
    } else {
        fields
    }
}

fn cell(field: &str, value: Option<&serde_json::Value>) -> Value {
    match value {
        None => Value::Null,
        Some(serde_json::Value::Array(items)) => {
            let mut parts: Vec<String> = items
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            if field == "author" && parts.len() > MAX_AUTHORS {
                parts.truncate(MAX_AUTHORS);
                parts.push("et al.".to_string());
            }
            Value::Text(parts.join("; "))
        }
        Some(other) => Value::from_json(other),
    }
}

pub fn parse_search(body: &str, fields: &[String]) -> Result<AdsResults> {
    let reply: AdsReply = serde_json::from_str(body)?;
    let rows = reply
        .response
        .docs
        .iter()
        .map(|doc| fields.iter().map(|f| cell(f, doc.get(f))).collect())
        .collect();
    Ok(AdsResults {
        num_found: reply.response.num_found,
        table: ResultTable::from_rows(fields.to_vec(), rows)?,
    })
}

pub struct NasaAds<'a> {
    client: &'a ArchiveClient,
    token: String,
}

impl<'a> NasaAds<'a> {
    /// Fails with [`Error::MissingToken`] when no token is configured.
    pub fn new(client: &'a ArchiveClient) -> Result<Self> {
        let token = resolve_token(|var| std::env::var(var).ok(), client.ads_token())?;
        Ok(Self { client, token })
    }

    pub fn query(&self, query: &str, rows: usize, sort: &str, fields: &[String]) -> Result<AdsResults> {
        let params = vec![
            ("q", query.to_string()),
            ("rows", rows.to_string()),
            ("sort", sort.to_string()),
            ("fl", fields.join(",")),
        ];
        let headers = [("Authorization", format!("Bearer {}", self.token))];
        let body = self.client.get_text_with_headers(SEARCH_URL, &params, &headers)?;
        parse_search(&body, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_token_order() {
        let env = |var: &str| match var {
            "ADS_API_TOKEN" => Some("from-env".to_string()),
            _ => None,
        };
        assert_eq!(resolve_token(env, Some("from-config")).unwrap(), "from-env");
        assert_eq!(resolve_token(|_| None, Some("from-config")).unwrap(), "from-config");
        assert!(matches!(resolve_token(|_| None, None), Err(Error::MissingToken(_))));
        assert!(resolve_token(|_| Some("  ".into()), None).is_err());
    }

    #[test]
    fn test_field_list() {
        assert_eq!(field_list(&[]).len(), DEFAULT_FIELDS.len());
        assert_eq!(field_list(&["bibcode, year".into()]), vec!["bibcode", "year"]);
    }

    #[test]
    fn test_parse_search() {
        let body = r#"{"responseHeader": {"status": 0},
            "response": {"numFound": 1234, "start": 0, "docs": [
                {"bibcode": "2020ApJ...1A", "title": ["A paper"], "year": "2020",
                 "author": ["A, B.", "C, D.", "E, F.", "G, H."]}
            ]}}"#;
        let fields = field_list(&["bibcode,title,author,year,citation_count".into()]);
        let results = parse_search(body, &fields).unwrap();
        assert_eq!(results.num_found, 1234);
        let row = &results.table.rows()[0];
        assert_eq!(row[1], Value::Text("A paper".into()));
        assert_eq!(row[2], Value::Text("A, B.; C, D.; E, F.; et al.".into()));
        assert_eq!(row[4], Value::Null);
    }
}
