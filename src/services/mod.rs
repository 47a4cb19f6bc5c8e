//! Archive clients, one module per service.
//!
//! Every client borrows the shared [`ArchiveClient`](crate::ArchiveClient)
//! and returns [`ResultTable`](crate::ResultTable)s.

pub mod alma;
pub mod esasky;
pub mod gaia;
pub mod heasarc;
pub mod irsa;
pub mod irsa_dust;
pub mod jplhorizons;
pub mod jplsbdb;
pub mod mast;
pub mod nasa_ads;
pub mod ned;
pub mod simbad;
pub mod splatalogue;
pub mod vizier;

use crate::tap::TapService;

/// An archive endpoint probed by `--ping`
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub service: &'static str,
    pub url: &'static str,
}

/// A locally declared field list and the TAP table it must be a subset of
#[derive(Debug, Clone, Copy)]
pub struct FieldList {
    pub service: &'static str,
    pub tap: TapService,
    pub table: &'static str,
    pub fields: &'static [&'static str],
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint { service: "SIMBAD", url: simbad::PING_URL },
        Endpoint { service: "ALMA", url: alma::PING_URL },
        Endpoint { service: "ESASky", url: esasky::PING_URL },
        Endpoint { service: "Gaia", url: gaia::PING_URL },
        Endpoint { service: "HEASARC", url: heasarc::PING_URL },
        Endpoint { service: "IRSA", url: irsa::PING_URL },
        Endpoint { service: "IRSA Dust", url: irsa_dust::PING_URL },
        Endpoint { service: "JPL Horizons", url: jplhorizons::PING_URL },
        Endpoint { service: "JPL SBDB", url: jplsbdb::PING_URL },
        Endpoint { service: "MAST", url: mast::PING_URL },
        Endpoint { service: "NASA ADS", url: nasa_ads::PING_URL },
        Endpoint { service: "NED", url: ned::PING_URL },
        Endpoint { service: "Splatalogue", url: splatalogue::PING_URL },
        Endpoint { service: "VizieR", url: vizier::PING_URL },
        Endpoint { service: "Sesame", url: crate::coords::SESAME_URL },
    ]
}

pub fn field_lists() -> Vec<FieldList> {
    vec![
        FieldList {
            service: "SIMBAD",
            tap: simbad::TAP,
            table: "basic",
            fields: simbad::SIMBAD_FIELDS,
        },
        FieldList {
            service: "ALMA",
            tap: alma::TAP,
            table: "ivoa.obscore",
            fields: alma::ALMA_FIELDS,
        },
        FieldList {
            service: "Gaia",
            tap: gaia::TAP,
            table: gaia::SOURCE_TABLE,
            fields: gaia::GAIA_FIELDS,
        },
        FieldList {
            service: "IRSA",
            tap: irsa::TAP,
            table: "allwise_p3as_psd",
            fields: irsa::IRSA_FIELDS,
        },
    ]
}

/// Local fields absent from the official list, sorted.
pub fn check_fields(local: &[&str], official: &[String]) -> Vec<String> {
    let mut bad: Vec<String> = local
        .iter()
        .filter(|f| !official.iter().any(|o| o.eq_ignore_ascii_case(f)))
        .map(|f| f.to_string())
        .collect();
    bad.sort();
    bad.dedup();
    bad
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fields() {
        let official = vec!["ra".to_string(), "dec".to_string(), "main_id".to_string()];
        assert!(check_fields(&["ra", "DEC"], &official).is_empty());
        assert_eq!(check_fields(&["ra", "flux_v", "bogus"], &official), vec!["bogus", "flux_v"]);
    }

    #[test]
    fn test_registry_is_complete() {
        let names: Vec<&str> = endpoints().iter().map(|e| e.service).collect();
        assert_eq!(names.len(), 15);
        assert!(endpoints().iter().all(|e| e.url.starts_with("https://")));
        for list in field_lists() {
            assert!(!list.fields.is_empty(), "{} has no fields", list.service);
        }
    }
}
