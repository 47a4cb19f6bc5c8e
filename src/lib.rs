//! # aqc - Astronomical archive queries from the command line
//!
//! aqc exposes a set of public astronomical archives as uniform subcommands.
//!
//! aqc provides:
//! - Typed clients for SIMBAD, ALMA, ESASky, Gaia, HEASARC, IRSA, IRSA dust,
//!   JPL Horizons, JPL SBDB, MAST, NASA ADS, NED, Splatalogue and VizieR
//! - A shared result table with VOTable and IPAC decoders
//! - Column selection and `column OP value` row filters
//! - Terminal rendering and file export (CSV, TSV, JSON, VOTable, IPAC, ASCII)
//! - Runtime-selectable output language

pub mod client;
pub mod config;
pub mod coords;
pub mod diagnostics;
pub mod i18n;
pub mod services;
pub mod table;
pub mod tap;
pub mod ui;

// Re-exports for convenient access
pub use client::ArchiveClient;
pub use coords::{Angle, SkyCoord};
pub use i18n::{t, tf, Language};
pub use table::{Column, DataType, ResultTable, Value};

/// Result type alias for aqc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for aqc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid angle: {0}")]
    InvalidAngle(String),

    #[error("Could not resolve object name: {0}")]
    NameResolution(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),

    #[error("Missing API token: {0}")]
    MissingToken(String),

    #[error("{context}: {source}")]
    Query {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an archive error with the name of the operation that failed.
    pub fn during(self, context: impl Into<String>) -> Self {
        match self {
            // Usage errors are reported as-is.
            Error::Usage(_) => self,
            other => Error::Query {
                context: context.into(),
                source: Box::new(other),
            },
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(quick_xml::Error::InvalidAttr(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_during_keeps_usage_errors() {
        let err = Error::Usage("Both --ra and --dec are required.".into()).during("HEASARC query");
        match err {
            Error::Usage(msg) => assert_eq!(msg, "Both --ra and --dec are required."),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_during_wraps_archive_errors() {
        let err = Error::Service("table not found".into()).during("Gaia ADQL query");
        assert_eq!(err.to_string(), "Gaia ADQL query: Service error: table not found");
        match err {
            Error::Query { context, source } => {
                assert_eq!(context, "Gaia ADQL query");
                assert!(matches!(*source, Error::Service(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
