//! NASA/IPAC Infrared Science Archive via TAP.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::services::esasky::validate_table_name;
use crate::table::ResultTable;
use crate::tap::{self, TapService};
use crate::Result;

pub const TAP: TapService = TapService::new("IRSA", "https://irsa.ipac.caltech.edu/TAP");
pub const PING_URL: &str = "https://irsa.ipac.caltech.edu/TAP/availability";

/// Catalog queries are capped at this many rows
pub const ROW_LIMIT: usize = 500;

/// AllWISE source columns shown by default
pub const IRSA_FIELDS: &[&str] = &[
    "ra",
    "dec",
    "designation",
    "w1mpro",
    "w2mpro",
    "w3mpro",
    "w4mpro",
    "ph_qual",
    "cc_flags",
    "ext_flg",
];

pub fn gator_adql(catalog: &str, center: &SkyCoord, radius: &Angle) -> Result<String> {
    let catalog = validate_table_name(catalog)?;
    Ok(format!(
        "SELECT * FROM {} WHERE {}",
        catalog,
        tap::cone_condition("ra", "dec", center, radius)
    ))
}

pub fn region_adql(center: &SkyCoord, radius: &Angle, collection: Option<&str>) -> String {
    let mut adql = format!(
        "SELECT * FROM ivoa.obscore WHERE {}",
        tap::cone_condition("s_ra", "s_dec", center, radius)
    );
    if let Some(collection) = collection {
        adql.push_str(&format!(
            " AND LOWER(obs_collection) = {}",
            tap::quote(&collection.to_lowercase())
        ));
    }
    adql
}

pub fn catalogs_adql(mission: Option<&str>) -> String {
    let mut adql = "SELECT table_name, description FROM TAP_SCHEMA.tables".to_string();
    if let Some(mission) = mission {
        let pattern = tap::quote(&format!("%{}%", mission.to_lowercase()));
        adql.push_str(&format!(
            " WHERE LOWER(table_name) LIKE {0} OR LOWER(description) LIKE {0}",
            pattern
        ));
    }
    adql.push_str(" ORDER BY table_name");
    adql
}

pub struct Irsa<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Irsa<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    fn row_limit(&self) -> usize {
        self.client.row_limit().min(ROW_LIMIT)
    }

    pub fn query_gator(&self, catalog: &str, center: &SkyCoord, radius: &Angle) -> Result<ResultTable> {
        let adql = gator_adql(catalog, center, radius)?;
        TAP.query(self.client, &adql, Some(self.row_limit()))
    }

    pub fn query_region(&self, center: &SkyCoord, radius: &Angle, collection: Option<&str>) -> Result<ResultTable> {
        TAP.query(
            self.client,
            &region_adql(center, radius, collection),
            Some(self.row_limit()),
        )
    }

    pub fn list_gator_catalogs(&self, mission: Option<&str>) -> Result<ResultTable> {
        TAP.query(self.client, &catalogs_adql(mission), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gator_adql() {
        let center = SkyCoord::new(202.48, 47.23).unwrap();
        let adql = gator_adql("allwise_p3as_psd", &center, &Angle::from_arcsec(10.0)).unwrap();
        assert!(adql.starts_with("SELECT * FROM allwise_p3as_psd WHERE CONTAINS(POINT('ICRS', ra, dec)"));
        assert!(gator_adql("allwise'--", &center, &Angle::from_arcsec(10.0)).is_err());
    }

    #[test]
    fn test_region_collection() {
        let center = SkyCoord::new(10.68, 41.27).unwrap();
        let adql = region_adql(&center, &Angle::from_arcmin(1.0), Some("AllWISE"));
        assert!(adql.ends_with("AND LOWER(obs_collection) = 'allwise'"));
        assert!(!region_adql(&center, &Angle::from_arcmin(1.0), None).contains("obs_collection"));
    }

    #[test]
    fn test_catalogs_adql() {
        assert_eq!(
            catalogs_adql(None),
            "SELECT table_name, description FROM TAP_SCHEMA.tables ORDER BY table_name"
        );
        let adql = catalogs_adql(Some("WISE"));
        assert!(adql.contains("LOWER(table_name) LIKE '%wise%'"));
    }
}
