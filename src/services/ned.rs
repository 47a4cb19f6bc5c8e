//! NASA/IPAC Extragalactic Database object search.

use crate::client::ArchiveClient;
use crate::coords::{Angle, SkyCoord};
use crate::table::votable::parse_votable;
use crate::table::ResultTable;
use crate::Result;

pub const OBJSEARCH_URL: &str = "https://ned.ipac.caltech.edu/cgi-bin/objsearch";
pub const PING_URL: &str = "https://ned.ipac.caltech.edu/";

pub fn object_params(name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("objname", name.trim().to_string()),
        ("extend", "no".to_string()),
        ("of", "xml_main".to_string()),
    ]
}

pub fn region_params(center: &SkyCoord, radius: &Angle) -> Vec<(&'static str, String)> {
    vec![
        ("search_type", "Near Position Search".to_string()),
        ("in_csys", "Equatorial".to_string()),
        ("in_equinox", "J2000.0".to_string()),
        ("lon", format!("{}d", center.ra_deg)),
        ("lat", format!("{}d", center.dec_deg)),
        ("radius", format!("{}", radius.arcmin())),
        ("of", "xml_main".to_string()),
    ]
}

pub struct Ned<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Ned<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn query_object(&self, name: &str) -> Result<ResultTable> {
        let body = self.client.get_text(OBJSEARCH_URL, &object_params(name))?;
        parse_votable(&body)
    }

    pub fn query_region(&self, center: &SkyCoord, radius: &Angle) -> Result<ResultTable> {
        let body = self.client.get_text(OBJSEARCH_URL, &region_params(center, radius))?;
        parse_votable(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_params_use_arcmin() {
        let center = SkyCoord::new(148.97, 69.68).unwrap();
        let params = region_params(&center, &Angle::from_degrees(0.05));
        assert!(params.contains(&("lon", "148.97d".to_string())));
        assert!(params.contains(&("radius", "3".to_string())));
    }

    #[test]
    fn test_object_params() {
        let params = object_params(" M81 ");
        assert_eq!(params[0], ("objname", "M81".to_string()));
    }
}
