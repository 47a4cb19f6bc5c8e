//! SIMBAD astronomical database (CDS) via TAP.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::ResultTable;
use crate::tap::{self, TapService};
use crate::Result;

pub const TAP: TapService = TapService::new("SIMBAD", "https://simbad.cds.unistra.fr/simbad/sim-tap");
pub const PING_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-tap/availability";

/// Columns of the `basic` table returned by default
pub const SIMBAD_FIELDS: &[&str] = &[
    "main_id",
    "ra",
    "dec",
    "otype",
    "sp_type",
    "plx_value",
    "pmra",
    "pmdec",
    "rvz_redshift",
    "rvz_radvel",
    "galdim_majaxis",
    "galdim_minaxis",
    "morph_type",
    "nbref",
];

/// Split requested extra fields into usable column names and rejects.
pub fn extra_fields(requested: &[String]) -> (Vec<String>, Vec<String>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();
    for field in requested.iter().flat_map(|f| f.split(',')).map(str::trim) {
        if field.is_empty() {
            continue;
        }
        let is_identifier = field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !field.starts_with(|c: char| c.is_ascii_digit());
        if !is_identifier {
            rejected.push(field.to_string());
        } else if !SIMBAD_FIELDS.contains(&field) && !valid.iter().any(|v| v == field) {
            valid.push(field.to_string());
        }
    }
    (valid, rejected)
}

fn columns(extra: &[String]) -> String {
    SIMBAD_FIELDS
        .iter()
        .map(|f| f.to_string())
        .chain(extra.iter().cloned())
        .map(|f| format!("basic.{}", f))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn object_adql(name: &str, extra: &[String]) -> String {
    format!(
        "SELECT {} FROM basic JOIN ident ON ident.oidref = basic.oid WHERE ident.id = {}",
        columns(extra),
        tap::quote(name.trim())
    )
}

pub fn region_adql(center: &SkyCoord, radius: &Angle, extra: &[String]) -> String {
    format!(
        "SELECT {}, DISTANCE(POINT('ICRS', basic.ra, basic.dec), POINT('ICRS', {}, {})) AS dist \
         FROM basic WHERE {} ORDER BY dist",
        columns(extra),
        center.ra_deg,
        center.dec_deg,
        tap::cone_condition("basic.ra", "basic.dec", center, radius)
    )
}

pub struct Simbad<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Simbad<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn query_object(&self, name: &str, extra: &[String]) -> Result<ResultTable> {
        TAP.query(self.client, &object_adql(name, extra), None)
    }

    pub fn query_region(&self, center: &SkyCoord, radius: &Angle, extra: &[String]) -> Result<ResultTable> {
        TAP.query(
            self.client,
            &region_adql(center, radius, extra),
            Some(self.client.row_limit()),
        )
    }

    /// Columns of the `basic` table with their descriptions.
    pub fn list_fields(&self) -> Result<ResultTable> {
        let adql = "SELECT column_name, datatype, unit, description FROM TAP_SCHEMA.columns \
                    WHERE table_name = 'basic' ORDER BY column_name";
        TAP.query(self.client, adql, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_adql() {
        let adql = object_adql(" M 31 ", &[]);
        assert!(adql.starts_with("SELECT basic.main_id, basic.ra, basic.dec"));
        assert!(adql.ends_with("WHERE ident.id = 'M 31'"));
    }

    #[test]
    fn test_region_adql() {
        let center = SkyCoord::new(10.68, 41.27).unwrap();
        let adql = region_adql(&center, &Angle::from_arcmin(6.0), &["coo_bibcode".into()]);
        assert!(adql.contains("basic.coo_bibcode"));
        assert!(adql.contains("CIRCLE('ICRS', 10.68, 41.27, 0.1)"));
        assert!(adql.ends_with("ORDER BY dist"));
    }

    #[test]
    fn test_extra_fields_rejects_injection() {
        let (valid, rejected) = extra_fields(&[
            "otype,coo_bibcode".into(),
            "v) FROM x; --".into(),
            "main_id".into(),
            "coo_bibcode".into(),
        ]);
        assert_eq!(valid, vec!["coo_bibcode"]);
        assert_eq!(rejected, vec!["v) FROM x; --"]);
    }
}
