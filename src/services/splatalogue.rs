//! Splatalogue spectral line database via SLAP.

use crate::client::ArchiveClient;
use crate::table::votable::parse_votable;
use crate::table::ResultTable;
use crate::{Error, Result};

pub const SLAP_URL: &str = "https://find.nrao.edu/splata-slap/slap";
pub const PING_URL: &str = "https://find.nrao.edu/splata-slap/slap?REQUEST=queryData&WAVELENGTH=0.0026/0.00261&MAXREC=1";

const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Frequency in GHz to wavelength in metres.
pub fn ghz_to_metres(ghz: f64) -> f64 {
    SPEED_OF_LIGHT_M_S / (ghz * 1e9)
}

/// SLAP `WAVELENGTH` range for a frequency window.
pub fn wavelength_range(min_ghz: f64, max_ghz: f64) -> Result<String> {
    if !(min_ghz > 0.0 && max_ghz > 0.0) {
        return Err(Error::Usage(crate::t("Frequencies must be positive.")));
    }
    if min_ghz > max_ghz {
        return Err(Error::Usage(crate::t("--min-freq must not exceed --max-freq.")));
    }
    // higher frequency gives the shorter wavelength
    Ok(format!("{:e}/{:e}", ghz_to_metres(max_ghz), ghz_to_metres(min_ghz)))
}

pub fn query_params(
    min_ghz: f64,
    max_ghz: f64,
    chemical_name: Option<&str>,
    max_rows: usize,
) -> Result<Vec<(&'static str, String)>> {
    let mut params = vec![
        ("REQUEST", "queryData".to_string()),
        ("WAVELENGTH", wavelength_range(min_ghz, max_ghz)?),
        ("MAXREC", max_rows.to_string()),
    ];
    if let Some(name) = chemical_name.map(str::trim).filter(|n| !n.is_empty()) {
        params.push(("CHEMICAL_ELEMENT", name.to_string()));
    }
    Ok(params)
}

pub struct Splatalogue<'a> {
    client: &'a ArchiveClient,
}

impl<'a> Splatalogue<'a> {
    pub fn new(client: &'a ArchiveClient) -> Self {
        Self { client }
    }

    pub fn query_lines(&self, min_ghz: f64, max_ghz: f64, chemical_name: Option<&str>) -> Result<ResultTable> {
        let params = query_params(min_ghz, max_ghz, chemical_name, self.client.row_limit())?;
        let body = self.client.get_text(SLAP_URL, &params)?;
        parse_votable(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghz_to_metres() {
        assert!((ghz_to_metres(115.271) - 0.0026007).abs() < 1e-6);
    }

    #[test]
    fn test_wavelength_range_order() {
        let range = wavelength_range(100.0, 200.0).unwrap();
        let (lo, hi) = range.split_once('/').unwrap();
        let lo: f64 = lo.parse().unwrap();
        let hi: f64 = hi.parse().unwrap();
        assert!(lo < hi);
        assert!((hi - ghz_to_metres(100.0)).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_window() {
        assert!(wavelength_range(200.0, 100.0).is_err());
        assert!(wavelength_range(0.0, 100.0).is_err());
        let params = query_params(100.0, 101.0, Some(" CO "), 10).unwrap();
        assert!(params.contains(&("CHEMICAL_ELEMENT", "CO".to_string())));
    }
}
