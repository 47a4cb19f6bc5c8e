//! HEASARC (NASA high energy archive) via the Xamin TAP service.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::services::esasky::validate_table_name;
use crate::table::ResultTable;
use crate::tap::{self, TapService};
use crate::{Error, Result};

pub const TAP: TapService = TapService::new("HEASARC", "https://heasarc.gsfc.nasa.gov/xamin/vo/tap");
pub const PING_URL: &str = "https://heasarc.gsfc.nasa.gov/xamin/vo/tap/availability";

/// A mission query: either a cone around a position or the first rows.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionQuery {
    Cone { center: SkyCoord, radius: Angle },
    All,
}

impl MissionQuery {
    /// Build from the optional `--ra/--dec/--radius` options.
    ///
    /// A position without a radius is a usage error.
    pub fn from_options(ra: Option<f64>, dec: Option<f64>, radius: Option<f64>) -> Result<Self> {
        match (ra, dec) {
            (Some(ra), Some(dec)) => {
                let radius = radius.ok_or_else(|| {
                    Error::Usage(crate::t(
                        "--radius is required when --ra and --dec are provided for a cone search.",
                    ))
                })?;
                if radius < 0.0 {
                    return Err(Error::InvalidAngle(radius.to_string()));
                }
                Ok(Self::Cone {
                    center: SkyCoord::new(ra, dec)?,
                    radius: Angle::from_degrees(radius),
                })
            }
            _ => Ok(Self::All),
        }
    }
}

pub fn mission_adql(mission: &str, query: &MissionQuery, row_limit: usize) -> Result<String> {
    let table = validate_table_name(mission)?;
    Ok(match query {
        MissionQuery::Cone { center, radius } => format!(
            "SELECT * FROM {} WHERE {}",
            table,
            tap::cone_condition("ra", "dec", center, radius)
        ),
        MissionQuery::All => format!("SELECT TOP {} * FROM {}", row_limit, table),
    })
}

pub struct Heasarc<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Heasarc<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn query(&self, mission: &str, query: &MissionQuery) -> Result<ResultTable> {
        let row_limit = self.client.row_limit();
        let adql = mission_adql(mission, query, row_limit)?;
        TAP.query(self.client, &adql, Some(row_limit))
    }

    /// Mission tables with their descriptions.
    pub fn list_missions(&self) -> Result<ResultTable> {
        TAP.tables(self.client, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_required_with_position() {
        let err = MissionQuery::from_options(Some(10.0), Some(20.0), None).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert_eq!(MissionQuery::from_options(None, None, None).unwrap(), MissionQuery::All);
        assert_eq!(MissionQuery::from_options(Some(10.0), None, Some(1.0)).unwrap(), MissionQuery::All);
    }

    #[test]
    fn test_mission_adql() {
        let cone = MissionQuery::from_options(Some(83.6), Some(22.0), Some(0.2)).unwrap();
        let adql = mission_adql("chanmaster", &cone, 500).unwrap();
        assert!(adql.starts_with("SELECT * FROM chanmaster WHERE CONTAINS"));
        assert_eq!(
            mission_adql("xmmmaster", &MissionQuery::All, 25).unwrap(),
            "SELECT TOP 25 * FROM xmmmaster"
        );
        assert!(mission_adql("chan master", &MissionQuery::All, 25).is_err());
    }
}
