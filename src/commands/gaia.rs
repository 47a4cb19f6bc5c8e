use super::{optional_radius, present, region, with_spinner, TableArgs, View};
use aqc::services::gaia::Gaia;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Cone search in Gaia DR3.
    #[command(name = "cone-search")]
    ConeSearch {
        /// Coordinates (e.g., '10.68 41.26', '00h42m44s +41d16m09s') or an object name.
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query Gaia DR3 sources around a named object.
    #[command(name = "query-object")]
    QueryObject {
        /// Name of the object (e.g., 'Pleiades').
        object_name: String,
        /// Search radius around the object (default 5 arcsec).
        #[arg(long)]
        radius: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Run an ADQL query against the Gaia archive.
    Adql {
        /// ADQL query text.
        query: String,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let gaia = Gaia::new(client);
    let found = |count: usize| tf("Found {count} source(s) in Gaia.", &[("count", &count)]);
    match action {
        Action::ConeSearch {
            coordinates,
            radius,
            table,
        } => {
            ui::querying(&tf(
                "Performing Gaia cone search around '{coordinates}' with radius '{radius}'...",
                &[("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for Gaia..."), || gaia.cone_search(&center, &radius))
                })
                .map_err(|e| e.during(t("Gaia cone search")))?;
            present(
                result,
                &table,
                View::new(
                    t("Gaia cone search results"),
                    found,
                    t("No Gaia sources found in the specified region."),
                ),
            )
        }
        Action::QueryObject {
            object_name,
            radius,
            table,
        } => {
            ui::querying(&tf("Querying Gaia for object: {name}...", &[("name", &object_name)]));
            let result = optional_radius(radius.as_deref())
                .and_then(|radius| {
                    with_spinner(&t("Waiting for Gaia..."), || gaia.query_object(&object_name, radius.as_ref()))
                })
                .map_err(|e| e.during(t("Gaia object query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("Gaia sources near {name}", &[("name", &object_name)]),
                    found,
                    tf("No Gaia sources found near '{name}'.", &[("name", &object_name)]),
                ),
            )
        }
        Action::Adql { query, table } => {
            ui::querying(&t("Running ADQL query on the Gaia archive..."));
            let result = with_spinner(&t("Waiting for Gaia..."), || gaia.adql(&query))
                .map_err(|e| e.during(t("Gaia ADQL query")))?;
            present(
                result,
                &table,
                View::new(
                    t("Gaia ADQL results"),
                    |count| tf("Query returned {count} row(s).", &[("count", &count)]),
                    t("The query returned no rows."),
                ),
            )
        }
    }
}
