//! Live checks of the locally declared field lists.
//!
//! These talk to the real archives, so they are ignored by default:
//! `cargo test -- --ignored`.

use aqc::config::AqcConfig;
use aqc::diagnostics::{check_all_fields, check_field_list};
use aqc::services::field_lists;
use aqc::ArchiveClient;

fn client() -> ArchiveClient {
    ArchiveClient::new(&AqcConfig::default())
}

#[test]
#[ignore = "requires network access"]
fn local_fields_are_published_by_every_archive() {
    let reports = check_all_fields(&client());
    assert_eq!(reports.len(), field_lists().len());
    for report in reports {
        assert!(
            report.is_ok(),
            "{} {}: invalid {:?}, error {:?}",
            report.service,
            report.table,
            report.invalid,
            report.error
        );
    }
}

#[test]
#[ignore = "requires network access"]
fn simbad_basic_fields_are_published() {
    let client = client();
    let list = field_lists()
        .into_iter()
        .find(|l| l.service == "SIMBAD")
        .expect("SIMBAD field list");
    let report = check_field_list(&client, &list);
    assert!(report.invalid.is_empty(), "invalid SIMBAD fields: {:?}", report.invalid);
}
