//! Gaia archive (ESA) via TAP.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::ResultTable;
use crate::tap::{self, TapService};
use crate::Result;

pub const TAP: TapService =
    TapService::new("Gaia", "https://gea.esac.esa.int/tap-server/tap").with_format("votable_plain");
pub const PING_URL: &str = "https://gea.esac.esa.int/tap-server/tap/availability";

pub const SOURCE_TABLE: &str = "gaiadr3.gaia_source";

/// Default search radius for name queries, in degrees
pub const DEFAULT_OBJECT_RADIUS_DEG: f64 = 5.0 / 3600.0;

pub const GAIA_FIELDS: &[&str] = &[
    "source_id",
    "ra",
    "dec",
    "parallax",
    "parallax_error",
    "pmra",
    "pmdec",
    "phot_g_mean_mag",
    "phot_bp_mean_mag",
    "phot_rp_mean_mag",
    "bp_rp",
    "radial_velocity",
    "ruwe",
];

pub fn cone_adql(center: &SkyCoord, radius: &Angle, table: &str) -> String {
    format!(
        "SELECT {}, DISTANCE(POINT('ICRS', ra, dec), POINT('ICRS', {}, {})) AS dist \
         FROM {} WHERE {} ORDER BY dist ASC",
        tap::select_list(GAIA_FIELDS),
        center.ra_deg,
        center.dec_deg,
        table,
        tap::cone_condition("ra", "dec", center, radius)
    )
}

pub struct Gaia<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Gaia<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn cone_search(&self, center: &SkyCoord, radius: &Angle) -> Result<ResultTable> {
        TAP.query(
            self.client,
            &cone_adql(center, radius, SOURCE_TABLE),
            Some(self.client.row_limit()),
        )
    }

    pub fn query_object(&self, name: &str, radius: Option<&Angle>) -> Result<ResultTable> {
        let center = crate::coords::resolve_name(self.client, name)?;
        let radius = radius
            .copied()
            .unwrap_or_else(|| Angle::from_degrees(DEFAULT_OBJECT_RADIUS_DEG));
        self.cone_search(&center, &radius)
    }

    /// Run a user-supplied ADQL query.
    pub fn adql(&self, query: &str) -> Result<ResultTable> {
        TAP.query(self.client, query, Some(self.client.row_limit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_adql() {
        let center = SkyCoord::new(56.75, 24.12).unwrap();
        let adql = cone_adql(&center, &Angle::from_degrees(0.5), SOURCE_TABLE);
        assert!(adql.starts_with("SELECT source_id, ra, dec, parallax"));
        assert!(adql.contains("FROM gaiadr3.gaia_source WHERE CONTAINS"));
        assert!(adql.contains("CIRCLE('ICRS', 56.75, 24.12, 0.5)"));
        assert!(adql.ends_with("ORDER BY dist ASC"));
    }
}
