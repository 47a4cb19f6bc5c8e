//! Subcommand definitions and the shared presentation path.

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

use aqc::coords::{parse_radius, resolve};
use aqc::table::{apply_filters, parse_column_args, render_table, save_table, DisplayOptions};
use aqc::{tf, ui, Angle, ArchiveClient, ResultTable, SkyCoord};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Rows shown unless `--max-rows-display` says otherwise
pub const DEFAULT_MAX_ROWS: i64 = 20;

#[derive(Subcommand)]
pub enum Commands {
    /// Query the SIMBAD astronomical database.
    Simbad {
        #[command(subcommand)]
        action: simbad::Action,
    },
    /// Query the ALMA science archive.
    Alma {
        #[command(subcommand)]
        action: alma::Action,
    },
    /// Query the ESASky multi-mission archive.
    Esasky {
        #[command(subcommand)]
        action: esasky::Action,
    },
    /// Query the Gaia archive.
    Gaia {
        #[command(subcommand)]
        action: gaia::Action,
    },
    /// Query the HEASARC database.
    Heasarc {
        #[command(subcommand)]
        action: heasarc::Action,
    },
    /// Query NASA/IPAC Infrared Science Archive (IRSA).
    Irsa {
        #[command(subcommand)]
        action: irsa::Action,
    },
    /// Query IRSA Galactic dust reddening and extinction.
    #[command(name = "irsa_dust")]
    IrsaDust {
        #[command(subcommand)]
        action: irsa_dust::Action,
    },
    /// Query JPL Horizons for ephemerides, elements and vectors.
    Jplhorizons {
        #[command(subcommand)]
        action: jplhorizons::Action,
    },
    /// Query the JPL Small-Body Database.
    Jplsbdb {
        #[command(subcommand)]
        action: jplsbdb::Action,
    },
    /// Query the MAST archive.
    Mast {
        #[command(subcommand)]
        action: mast::Action,
    },
    /// Search the NASA Astrophysics Data System.
    #[command(name = "nasa_ads")]
    NasaAds {
        #[command(subcommand)]
        action: nasa_ads::Action,
    },
    /// Query the NASA/IPAC Extragalactic Database (NED).
    Ned {
        #[command(subcommand)]
        action: ned::Action,
    },
    /// Query the Splatalogue spectral line database.
    Splatalogue {
        #[command(subcommand)]
        action: splatalogue::Action,
    },
    /// Query the VizieR catalogue service.
    Vizier {
        #[command(subcommand)]
        action: vizier::Action,
    },
}

/// Output options shared by every table-producing action
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Save the results to this file.
    #[arg(short = 'o', long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Output file format (csv, tsv, json, votable, ipac, ascii).
    #[arg(long = "output-format", value_name = "FORMAT")]
    pub output_format: Option<String>,

    /// Maximum number of rows to display. Use -1 for all rows.
    #[arg(long = "max-rows-display", value_name = "N", allow_negative_numbers = true)]
    pub max_rows_display: Option<i64>,

    /// Show all columns in the output table.
    #[arg(long = "show-all-cols")]
    pub show_all_cols: bool,

    /// Columns to keep (repeatable or comma separated). Use 'all' for all columns.
    #[arg(long = "col", value_name = "COLUMN")]
    pub columns: Vec<String>,

    /// Column filters such as 'w1mpro>10' or 'ph_qual=A'. Can be repeated.
    #[arg(long = "filter", value_name = "EXPR")]
    pub filters: Vec<String>,
}

impl TableArgs {
    pub fn display_options(&self, default_rows: i64) -> DisplayOptions {
        DisplayOptions::new(self.max_rows_display.unwrap_or(default_rows), self.show_all_cols)
    }

    /// Listings show every row unless a limit was given.
    pub fn with_all_rows(&self) -> Self {
        Self {
            max_rows_display: Some(self.max_rows_display.unwrap_or(-1)),
            ..self.clone()
        }
    }
}

/// Labels for one result table
pub struct View<F>
where
    F: FnOnce(usize) -> String,
{
    pub title: String,
    /// Builds the "Found N ..." line from the row count
    pub found: F,
    pub empty: String,
    pub default_rows: i64,
}

impl<F> View<F>
where
    F: FnOnce(usize) -> String,
{
    pub fn new(title: String, found: F, empty: String) -> Self {
        Self {
            title,
            found,
            empty,
            default_rows: DEFAULT_MAX_ROWS,
        }
    }

    pub fn rows(mut self, default_rows: i64) -> Self {
        self.default_rows = default_rows;
        self
    }
}

/// Select columns, filter rows, then print and optionally save the table.
pub fn present<F>(table: ResultTable, args: &TableArgs, view: View<F>) -> aqc::Result<()>
where
    F: FnOnce(usize) -> String,
{
    let mut table = match parse_column_args(&args.columns) {
        Some(columns) => table.select(&columns),
        None => table,
    };
    let applied = apply_filters(&mut table, &args.filters);
    tracing::debug!("{} filter(s) applied, {} row(s) left", applied, table.len());

    if table.is_empty() {
        ui::no_results(&view.empty);
        return Ok(());
    }

    ui::found(&(view.found)(table.len()));
    ui::header(&view.title);
    println!("{}", render_table(&table, &args.display_options(view.default_rows)));

    if let Some(path) = &args.output_file {
        let format = save_table(&table, path, args.output_format.as_deref())?;
        tracing::debug!("saved {} rows as {:?}", table.len(), format);
        ui::saved(&tf("Results saved to {path}", &[("path", &path.display())]));
    }
    Ok(())
}

/// Run a request behind a spinner.
pub fn with_spinner<T, F>(message: &str, request: F) -> aqc::Result<T>
where
    F: FnOnce() -> aqc::Result<T>,
{
    let spinner = ui::Spinner::new(message);
    let result = request();
    spinner.finish();
    result
}

/// Parse a position-and-radius pair from the command line.
pub fn region(client: &ArchiveClient, coordinates: &str, radius: &str) -> aqc::Result<(SkyCoord, Angle)> {
    let radius = parse_radius(radius)?;
    let center = resolve(client, coordinates)?;
    tracing::debug!("region center {} radius {}", center, radius);
    Ok((center, radius))
}

/// Parse an optional radius option.
pub fn optional_radius(radius: Option<&str>) -> aqc::Result<Option<Angle>> {
    radius.map(parse_radius).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqc::Value;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        table: TableArgs,
    }

    fn stars() -> ResultTable {
        ResultTable::from_rows(
            vec!["name".into(), "ra".into(), "mag".into()],
            vec![
                vec![Value::Text("Vega".into()), Value::Float(279.23), Value::Float(0.03)],
                vec![Value::Text("Polaris".into()), Value::Float(37.95), Value::Float(1.98)],
                vec![Value::Text("Mizar".into()), Value::Float(200.98), Value::Float(2.23)],
            ],
        )
        .unwrap()
    }

    fn view() -> View<impl FnOnce(usize) -> String> {
        View::new("Stars".into(), |n| format!("Found {} stars", n), "No stars".into())
    }

    #[test]
    fn test_present_selects_filters_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bright.csv");
        let args = TableArgs {
            output_file: Some(path.clone()),
            columns: vec!["name,mag".into()],
            filters: vec!["mag>1".into()],
            ..Default::default()
        };

        present(stars(), &args, view()).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "name,mag\nPolaris,1.98\nMizar,2.23\n");
    }

    #[test]
    fn test_present_empty_result_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.csv");
        let args = TableArgs {
            output_file: Some(path.clone()),
            filters: vec!["mag>10".into()],
            ..Default::default()
        };

        present(stars(), &args, view()).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_table_args_accept_negative_rows() {
        let parsed = Harness::try_parse_from([
            "aqc",
            "--max-rows-display",
            "-1",
            "--col",
            "ra,dec",
            "--filter",
            "w1mpro>10",
            "--filter",
            "ph_qual=A",
        ])
        .unwrap();
        assert_eq!(parsed.table.max_rows_display, Some(-1));
        assert_eq!(parsed.table.filters.len(), 2);
        assert_eq!(parsed.table.display_options(DEFAULT_MAX_ROWS).max_rows, -1);
    }

    #[test]
    fn test_default_rows() {
        let args = TableArgs::default();
        assert_eq!(args.display_options(25).max_rows, 25);
    }

    #[test]
    fn test_optional_radius() {
        assert!(optional_radius(None).unwrap().is_none());
        let radius = optional_radius(Some("30arcsec")).unwrap().unwrap();
        assert!((radius.arcsec() - 30.0).abs() < 1e-9);
        assert!(optional_radius(Some("-1deg")).is_err());
    }
}
