use super::{present, region, with_spinner, TableArgs, View};
use aqc::services::esasky::EsaSky;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// List the catalogs available in ESASky.
    #[command(name = "list-catalogs")]
    ListCatalogs {
        #[command(flatten)]
        table: TableArgs,
    },
    /// List the observation (map) tables available in ESASky.
    #[command(name = "list-maps")]
    ListMaps {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query an ESASky catalog around a position.
    #[command(name = "query-region")]
    QueryRegion {
        /// Coordinates (e.g., '10.68 41.26', '00h42m44s +41d16m09s') or an object name.
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        /// Catalog table to search (see list-catalogs).
        #[arg(long)]
        catalog: String,
        /// Name of the right ascension column.
        #[arg(long = "ra-col", default_value = "ra")]
        ra_col: String,
        /// Name of the declination column.
        #[arg(long = "dec-col", default_value = "dec")]
        dec_col: String,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let esasky = EsaSky::new(client);
    match action {
        Action::ListCatalogs { table } => {
            ui::querying(&t("Fetching ESASky catalog list..."));
            let result = with_spinner(&t("Waiting for ESASky..."), || esasky.list_catalogs())
                .map_err(|e| e.during(t("ESASky list catalogs")))?;
            present(
                result,
                &table.with_all_rows(),
                View::new(
                    t("ESASky catalogs"),
                    |count| tf("Found {count} catalog(s).", &[("count", &count)]),
                    t("No catalogs found."),
                ),
            )
        }
        Action::ListMaps { table } => {
            ui::querying(&t("Fetching ESASky map list..."));
            let result = with_spinner(&t("Waiting for ESASky..."), || esasky.list_maps())
                .map_err(|e| e.during(t("ESASky list maps")))?;
            present(
                result,
                &table.with_all_rows(),
                View::new(
                    t("ESASky maps"),
                    |count| tf("Found {count} map table(s).", &[("count", &count)]),
                    t("No maps found."),
                ),
            )
        }
        Action::QueryRegion {
            coordinates,
            radius,
            catalog,
            ra_col,
            dec_col,
            table,
        } => {
            ui::querying(&tf(
                "Querying ESASky catalog '{catalog}' for region: '{coordinates}' with radius '{radius}'...",
                &[("catalog", &catalog), ("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for ESASky..."), || {
                        esasky.query_region(&catalog, &ra_col, &dec_col, &center, &radius)
                    })
                })
                .map_err(|e| e.during(t("ESASky region query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("ESASky: {catalog}", &[("catalog", &catalog)]),
                    |count| tf("Found {count} match(es) in '{catalog}'.", &[("count", &count), ("catalog", &catalog)]),
                    tf("No sources found in '{catalog}' for the specified region.", &[("catalog", &catalog)]),
                ),
            )
        }
    }
}
