//! IVOA Table Access Protocol (synchronous ADQL queries).

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::votable::parse_votable;
use crate::table::{ResultTable, Value};
use crate::Result;

/// A TAP service endpoint
#[derive(Debug, Clone, Copy)]
pub struct TapService {
    pub name: &'static str,
    /// Base URL, without the trailing `/sync`
    pub base_url: &'static str,
    /// Value of the `FORMAT` parameter that yields TABLEDATA VOTables
    pub format: &'static str,
}

impl TapService {
    pub const fn new(name: &'static str, base_url: &'static str) -> Self {
        Self {
            name,
            base_url,
            format: "votable/td",
        }
    }

    pub const fn with_format(mut self, format: &'static str) -> Self {
        self.format = format;
        self
    }

    pub fn sync_url(&self) -> String {
        format!("{}/sync", self.base_url.trim_end_matches('/'))
    }

    /// Run an ADQL query, optionally capped at `maxrec` rows.
    pub fn query(&self, client: &ArchiveClient, adql: &str, maxrec: Option<usize>) -> Result<ResultTable> {
        tracing::debug!("{} ADQL: {}", self.name, adql);
        let mut form = vec![
            ("REQUEST", "doQuery".to_string()),
            ("LANG", "ADQL".to_string()),
            ("FORMAT", self.format.to_string()),
            ("QUERY", adql.to_string()),
        ];
        if let Some(maxrec) = maxrec {
            form.push(("MAXREC", maxrec.to_string()));
        }
        let body = client.post_form(&self.sync_url(), &form)?;
        parse_votable(&body)
    }

    /// Column names of a table, from `TAP_SCHEMA.columns`.
    pub fn table_columns(&self, client: &ArchiveClient, table: &str) -> Result<Vec<String>> {
        let adql = format!(
            "SELECT column_name FROM TAP_SCHEMA.columns WHERE table_name = {}",
            quote(table)
        );
        let result = self.query(client, &adql, None)?;
        Ok(text_column(&result, "column_name"))
    }

    /// Tables published by the service, optionally restricted to a schema.
    pub fn tables(&self, client: &ArchiveClient, schema: Option<&str>) -> Result<ResultTable> {
        let mut adql = "SELECT table_name, description FROM TAP_SCHEMA.tables".to_string();
        if let Some(schema) = schema {
            adql.push_str(&format!(" WHERE schema_name = {}", quote(schema)));
        }
        adql.push_str(" ORDER BY table_name");
        self.query(client, &adql, None)
    }
}

/// ADQL string literal
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Cone predicate over the given position columns.
pub fn cone_condition(ra_col: &str, dec_col: &str, center: &SkyCoord, radius: &Angle) -> String {
    format!(
        "CONTAINS(POINT('ICRS', {}, {}), CIRCLE('ICRS', {}, {}, {})) = 1",
        ra_col,
        dec_col,
        center.ra_deg,
        center.dec_deg,
        radius.degrees()
    )
}

/// Comma-separated select list, `*` when empty.
pub fn select_list(columns: &[&str]) -> String {
    if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(", ")
    }
}

/// Text cells of one column (for metadata queries).
pub fn text_column(table: &ResultTable, name: &str) -> Vec<String> {
    table
        .column_values(name)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("M31"), "'M31'");
        assert_eq!(quote("Barnard's Star"), "'Barnard''s Star'");
    }

    #[test]
    fn test_cone_condition() {
        let center = SkyCoord::new(10.5, -2.25).unwrap();
        let cond = cone_condition("ra", "dec", &center, &Angle::from_degrees(0.1));
        assert_eq!(cond, "CONTAINS(POINT('ICRS', ra, dec), CIRCLE('ICRS', 10.5, -2.25, 0.1)) = 1");
    }

    #[test]
    fn test_sync_url() {
        let svc = TapService::new("test", "https://example.org/tap/");
        assert_eq!(svc.sync_url(), "https://example.org/tap/sync");
        assert_eq!(svc.format, "votable/td");
        assert_eq!(svc.with_format("votable_plain").format, "votable_plain");
    }

    #[test]
    fn test_select_list() {
        assert_eq!(select_list(&[]), "*");
        assert_eq!(select_list(&["ra", "dec"]), "ra, dec");
    }
}
