//! ALMA science archive via its ObsCore TAP service.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::ResultTable;
use crate::tap::{self, TapService};
use crate::Result;

pub const TAP: TapService = TapService::new("ALMA", "https://almascience.eso.org/tap");
pub const PING_URL: &str = "https://almascience.eso.org/tap/availability";

/// Default search radius for name queries, in degrees
pub const DEFAULT_OBJECT_RADIUS_DEG: f64 = 1.0 / 60.0;

pub const ALMA_FIELDS: &[&str] = &[
    "obs_id",
    "target_name",
    "s_ra",
    "s_dec",
    "band_list",
    "frequency",
    "t_exptime",
    "spatial_resolution",
    "proposal_id",
    "obs_release_date",
    "data_rights",
];

pub fn region_adql(center: &SkyCoord, radius: &Angle, public_only: bool) -> String {
    let mut adql = format!(
        "SELECT {} FROM ivoa.obscore WHERE {}",
        tap::select_list(ALMA_FIELDS),
        tap::cone_condition("s_ra", "s_dec", center, radius)
    );
    if public_only {
        adql.push_str(" AND data_rights = 'Public'");
    }
    adql
}

pub struct Alma<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Alma<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn query_region(&self, center: &SkyCoord, radius: &Angle, public_only: bool) -> Result<ResultTable> {
        TAP.query(
            self.client,
            &region_adql(center, radius, public_only),
            Some(self.client.row_limit()),
        )
    }

    /// Resolve the name, then search around it.
    pub fn query_object(&self, name: &str, radius: Option<&Angle>, public_only: bool) -> Result<ResultTable> {
        let center = crate::coords::resolve_name(self.client, name)?;
        let radius = radius
            .copied()
            .unwrap_or_else(|| Angle::from_degrees(DEFAULT_OBJECT_RADIUS_DEG));
        self.query_region(&center, &radius, public_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_adql() {
        let center = SkyCoord::new(204.25, -29.87).unwrap();
        let adql = region_adql(&center, &Angle::from_degrees(0.05), true);
        assert!(adql.starts_with("SELECT obs_id, target_name, s_ra, s_dec"));
        assert!(adql.contains("POINT('ICRS', s_ra, s_dec)"));
        assert!(adql.ends_with("AND data_rights = 'Public'"));

        let adql = region_adql(&center, &Angle::from_degrees(0.05), false);
        assert!(!adql.contains("data_rights ="));
    }
}
