use super::{present, region, with_spinner, TableArgs, View};
use aqc::services::irsa::Irsa;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query a specific catalog in IRSA using Gator.
    Gator {
        /// Name of the IRSA catalog (e.g., 'allwise_p3as_psd').
        catalog: String,
        /// Coordinates (e.g., '10.68h +41.26d', 'M51').
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Perform a cone search across multiple IRSA collections.
    Region {
        /// Coordinates (e.g., '10.68h +41.26d', 'M31').
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        /// Specify a collection (e.g., 'allwise', '2MASS'). Leave blank for a general search.
        #[arg(long)]
        collection: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// List available catalogs in IRSA Gator for a mission.
    #[command(name = "list-gator-catalogs")]
    ListGatorCatalogs {
        /// Filter catalogs by mission code (e.g., 'WISE', 'SPITZER').
        #[arg(long)]
        mission: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let irsa = Irsa::new(client);
    match action {
        Action::Gator {
            catalog,
            coordinates,
            radius,
            table,
        } => {
            ui::querying(&tf(
                "Querying IRSA catalog '{catalog}' via Gator for region: '{coordinates}' with radius '{radius}'...",
                &[("catalog", &catalog), ("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for IRSA..."), || irsa.query_gator(&catalog, &center, &radius))
                })
                .map_err(|e| {
                    e.during(tf("IRSA Gator query for catalog {catalog}", &[("catalog", &catalog)]))
                })?;
            present(
                result,
                &table,
                View::new(
                    tf("IRSA Gator: {catalog}", &[("catalog", &catalog)]),
                    |count| tf("Found {count} match(es) in '{catalog}'.", &[("count", &count), ("catalog", &catalog)]),
                    tf(
                        "No information found in '{catalog}' for the specified region.",
                        &[("catalog", &catalog)],
                    ),
                ),
            )
        }
        Action::Region {
            coordinates,
            radius,
            collection,
            table,
        } => {
            ui::querying(&tf(
                "Performing IRSA cone search for region: '{coordinates}' with radius '{radius}'...",
                &[("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for IRSA..."), || {
                        irsa.query_region(&center, &radius, collection.as_deref())
                    })
                })
                .map_err(|e| e.during(t("IRSA query_region")))?;
            let collection_info = match &collection {
                Some(c) => tf(" in collection {collection}", &[("collection", c)]),
                None => String::new(),
            };
            present(
                result,
                &table,
                View::new(
                    t("IRSA Cone Search Results"),
                    |count| tf("Found {count} match(es) in IRSA holdings.", &[("count", &count)]),
                    tf(
                        "No information found in IRSA for the specified region{collection_info}.",
                        &[("collection_info", &collection_info)],
                    ),
                ),
            )
        }
        Action::ListGatorCatalogs { mission, table } => {
            let mission_info = match &mission {
                Some(m) => tf("for mission {mission}", &[("mission", m)]),
                None => String::new(),
            };
            ui::querying(&tf(
                "Fetching list of available IRSA Gator catalogs {mission_info}...",
                &[("mission_info", &mission_info)],
            ));
            let result = with_spinner(&t("Waiting for IRSA..."), || irsa.list_gator_catalogs(mission.as_deref()))
                .map_err(|e| e.during(t("IRSA list_gator_catalogs")))?;
            present(
                result,
                &table.with_all_rows(),
                View::new(
                    t("IRSA catalogs"),
                    |count| tf("Found {count} catalog(s).", &[("count", &count)]),
                    t("No catalogs found."),
                ),
            )
        }
    }
}
