//! ESASky (ESA multi-mission archive) via TAP.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::ResultTable;
use crate::tap::{self, TapService};
use crate::{Error, Result};

pub const TAP: TapService =
    TapService::new("ESASky", "https://sky.esa.int/esasky-tap/tap").with_format("votable_plain");
pub const PING_URL: &str = "https://sky.esa.int/esasky-tap/tap/availability";

pub const CATALOG_SCHEMA: &str = "catalogues";
pub const MAP_SCHEMA: &str = "observations";

/// Table names are used unquoted in ADQL, so they are validated first.
pub fn validate_table_name(name: &str) -> Result<&str> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if ok {
        Ok(name)
    } else {
        Err(Error::Usage(format!("Invalid table name: {}", name)))
    }
}

/// Column names follow the same rule as table names, without dots.
pub fn validate_column_name(name: &str) -> Result<&str> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(name)
    } else {
        Err(Error::Usage(format!("Invalid column name: {}", name)))
    }
}

pub fn region_adql(table: &str, ra_col: &str, dec_col: &str, center: &SkyCoord, radius: &Angle) -> Result<String> {
    let table = validate_table_name(table)?;
    let ra_col = validate_column_name(ra_col)?;
    let dec_col = validate_column_name(dec_col)?;
    Ok(format!(
        "SELECT * FROM {} WHERE {}",
        table,
        tap::cone_condition(ra_col, dec_col, center, radius)
    ))
}

pub struct EsaSky<'a> {
    client: &'a ArchiveClient,
}

impl<'a> EsaSky<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn list_catalogs(&self) -> Result<ResultTable> {
        TAP.tables(self.client, Some(CATALOG_SCHEMA))
    }

    pub fn list_maps(&self) -> Result<ResultTable> {
        TAP.tables(self.client, Some(MAP_SCHEMA))
    }

    pub fn query_region(
        &self,
        table: &str,
        ra_col: &str,
        dec_col: &str,
        center: &SkyCoord,
        radius: &Angle,
    ) -> Result<ResultTable> {
        let adql = region_adql(table, ra_col, dec_col, center, radius)?;
        TAP.query(self.client, &adql, Some(self.client.row_limit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_adql() {
        let center = SkyCoord::new(83.63, 22.01).unwrap();
        let adql = region_adql("catalogues.mv_v_esasky_xmm_om_optuv_fdw", "ra", "dec", &center, &Angle::from_degrees(0.1)).unwrap();
        assert!(adql.starts_with("SELECT * FROM catalogues.mv_v_esasky_xmm_om_optuv_fdw WHERE CONTAINS"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let center = SkyCoord::new(0.0, 0.0).unwrap();
        let radius = Angle::from_degrees(0.1);
        assert!(region_adql("x; DROP", "ra", "dec", &center, &radius).is_err());
        assert!(region_adql("cat", "ra)", "dec", &center, &radius).is_err());
    }
}
