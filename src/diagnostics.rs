//! Connectivity and field-list checks behind `--ping` and `--field`.

use crate::client::ArchiveClient;
use crate::i18n::{t, tf};
use crate::services::{check_fields, endpoints, field_lists, Endpoint, FieldList};
use crate::ui::TableBuilder;
use std::time::Duration;

/// Outcome of probing one endpoint
#[derive(Debug, Clone)]
pub struct PingResult {
    pub service: &'static str,
    pub url: &'static str,
    pub outcome: std::result::Result<(u16, Duration), String>,
}

impl PingResult {
    /// Any HTTP answer below 500 means the service is up.
    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, Ok((status, _)) if status < 500)
    }
}

pub fn ping_endpoint(client: &ArchiveClient, endpoint: &Endpoint) -> PingResult {
    tracing::debug!("pinging {} at {}", endpoint.service, endpoint.url);
    PingResult {
        service: endpoint.service,
        url: endpoint.url,
        outcome: client.ping(endpoint.url),
    }
}

pub fn ping_all(client: &ArchiveClient) -> Vec<PingResult> {
    endpoints().iter().map(|e| ping_endpoint(client, e)).collect()
}

pub fn ping_table(results: &[PingResult]) -> String {
    let mut table = TableBuilder::new(&[t("Service").as_str(), t("Status").as_str(), t("Latency").as_str()]);
    for result in results {
        let (status, latency) = match &result.outcome {
            Ok((code, elapsed)) => (code.to_string(), format!("{} ms", elapsed.as_millis())),
            Err(err) => (t("unreachable"), err.clone()),
        };
        table.add_row(vec![result.service.to_string(), status, latency]);
    }
    table.build()
}

/// Local fields of one archive that the service does not publish
#[derive(Debug, Clone)]
pub struct FieldReport {
    pub service: &'static str,
    pub table: &'static str,
    pub invalid: Vec<String>,
    /// Set when the official list could not be fetched
    pub error: Option<String>,
}

impl FieldReport {
    pub fn is_ok(&self) -> bool {
        self.invalid.is_empty() && self.error.is_none()
    }
}

pub fn check_field_list(client: &ArchiveClient, list: &FieldList) -> FieldReport {
    match list.tap.table_columns(client, list.table) {
        Ok(official) if official.is_empty() => FieldReport {
            service: list.service,
            table: list.table,
            invalid: Vec::new(),
            error: Some(tf("{table} publishes no columns", &[("table", &list.table)])),
        },
        Ok(official) => FieldReport {
            service: list.service,
            table: list.table,
            invalid: check_fields(list.fields, &official),
            error: None,
        },
        Err(err) => FieldReport {
            service: list.service,
            table: list.table,
            invalid: Vec::new(),
            error: Some(err.to_string()),
        },
    }
}

pub fn check_all_fields(client: &ArchiveClient) -> Vec<FieldReport> {
    field_lists().iter().map(|l| check_field_list(client, l)).collect()
}

pub fn field_table(reports: &[FieldReport]) -> String {
    let mut table = TableBuilder::new(&[t("Service").as_str(), t("Table").as_str(), t("Result").as_str()]);
    for report in reports {
        let result = match (&report.error, report.invalid.is_empty()) {
            (Some(err), _) => tf("check failed: {error}", &[("error", err)]),
            (None, true) => t("all fields valid"),
            (None, false) => tf(
                "invalid fields: {fields}",
                &[("fields", &report.invalid.join(", "))],
            ),
        };
        table.add_row(vec![report.service.to_string(), report.table.to_string(), result]);
    }
    table.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_reachability() {
        let up = PingResult {
            service: "SIMBAD",
            url: "https://example.org",
            outcome: Ok((404, Duration::from_millis(12))),
        };
        let down = PingResult {
            outcome: Err("connection refused".into()),
            ..up.clone()
        };
        let broken = PingResult {
            outcome: Ok((503, Duration::from_millis(5))),
            ..up.clone()
        };
        assert!(up.is_reachable());
        assert!(!down.is_reachable());
        assert!(!broken.is_reachable());

        let out = ping_table(&[up, down]);
        assert!(out.contains("12 ms"));
        assert!(out.contains("connection refused"));
    }

    #[test]
    fn test_field_table() {
        let reports = vec![
            FieldReport {
                service: "Gaia",
                table: "gaiadr3.gaia_source",
                invalid: vec![],
                error: None,
            },
            FieldReport {
                service: "IRSA",
                table: "allwise_p3as_psd",
                invalid: vec!["bogus".into()],
                error: None,
            },
        ];
        assert!(reports[0].is_ok());
        assert!(!reports[1].is_ok());
        let out = field_table(&reports);
        assert!(out.contains("all fields valid"));
        assert!(out.contains("invalid fields: bogus"));
    }
}
