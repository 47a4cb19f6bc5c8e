//! VizieR catalogue service (CDS).

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::votable::parse_votable;
use crate::table::ResultTable;
use crate::tap::{self, TapService};
use crate::{Error, Result};

pub const VOTABLE_URL: &str = "https://vizier.cds.unistra.fr/viz-bin/votable";
pub const TAP: TapService = TapService::new("TAPVizieR", "https://tapvizier.cds.unistra.fr/TAPVizieR/tap");
pub const PING_URL: &str = "https://vizier.cds.unistra.fr/viz-bin/VizieR";

/// Default search radius for name queries
pub const DEFAULT_OBJECT_RADIUS_ARCSEC: f64 = 10.0;

/// Query parameters of a VizieR cone search.
pub fn cone_params(catalog: &str, center: &SkyCoord, radius: &Angle, max_rows: usize) -> Vec<(&'static str, String)> {
    vec![
        ("-source", catalog.to_string()),
        ("-c", format!("{} {:+}", center.ra_deg, center.dec_deg)),
        ("-c.eq", "J2000".to_string()),
        ("-c.rs", format!("{}", radius.arcsec())),
        ("-out.max", max_rows.to_string()),
        ("-out.add", "_r".to_string()),
        ("-sort", "_r".to_string()),
    ]
}

pub fn find_catalogs_adql(keyword: &str) -> String {
    let pattern = tap::quote(&format!("%{}%", keyword.trim().to_lowercase()));
    format!(
        "SELECT table_name, description FROM TAP_SCHEMA.tables \
         WHERE LOWER(description) LIKE {0} OR LOWER(table_name) LIKE {0} ORDER BY table_name",
        pattern
    )
}

pub struct Vizier<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Vizier<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn query_region(&self, catalog: &str, center: &SkyCoord, radius: &Angle) -> Result<ResultTable> {
        if catalog.trim().is_empty() {
            return Err(Error::Usage(crate::t("A catalog is required.")));
        }
        let params = cone_params(catalog.trim(), center, radius, self.client.row_limit());
        let body = self.client.get_text(VOTABLE_URL, &params)?;
        parse_votable(&body)
    }

    pub fn query_object(&self, name: &str, catalog: &str, radius: Option<&Angle>) -> Result<ResultTable> {
        let center = crate::coords::resolve_name(self.client, name)?;
        let radius = radius
            .copied()
            .unwrap_or_else(|| Angle::from_arcsec(DEFAULT_OBJECT_RADIUS_ARCSEC));
        self.query_region(catalog, &center, &radius)
    }

    pub fn find_catalogs(&self, keyword: &str) -> Result<ResultTable> {
        TAP.query(self.client, &find_catalogs_adql(keyword), Some(self.client.row_limit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_params() {
        let center = SkyCoord::new(10.5, -2.5).unwrap();
        let params = cone_params("I/239/hip_main", &center, &Angle::from_arcmin(1.0), 50);
        assert!(params.contains(&("-source", "I/239/hip_main".to_string())));
        assert!(params.contains(&("-c", "10.5 -2.5".to_string())));
        assert!(params.contains(&("-c.rs", "60".to_string())));
        assert!(params.contains(&("-out.max", "50".to_string())));
    }

    #[test]
    fn test_find_catalogs_adql() {
        let adql = find_catalogs_adql(" Gaia's ");
        assert!(adql.contains("LOWER(description) LIKE '%gaia''s%'"));
    }
}
