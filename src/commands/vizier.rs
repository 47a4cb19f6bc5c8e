use super::{optional_radius, present, region, with_spinner, TableArgs, View};
use aqc::services::vizier::Vizier;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query a VizieR catalog around a named object.
    #[command(name = "query-object")]
    QueryObject {
        /// Name of the object (e.g., 'M45').
        object_name: String,
        /// VizieR catalog identifier (e.g., 'I/239/hip_main').
        #[arg(long)]
        catalog: String,
        /// Search radius around the object (default 10 arcsec).
        #[arg(long)]
        radius: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query a VizieR catalog around a position.
    #[command(name = "query-region")]
    QueryRegion {
        /// Coordinates (e.g., '10.68 41.26', '00h42m44s +41d16m09s') or an object name.
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        /// VizieR catalog identifier (e.g., 'I/239/hip_main').
        #[arg(long)]
        catalog: String,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Find VizieR catalogs whose description matches a keyword.
    #[command(name = "find-catalogs")]
    FindCatalogs {
        /// Keyword to search for (e.g., 'Hipparcos').
        keyword: String,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let vizier = Vizier::new(client);
    match action {
        Action::QueryObject {
            object_name,
            catalog,
            radius,
            table,
        } => {
            ui::querying(&tf(
                "Querying VizieR catalog '{catalog}' for object: {name}...",
                &[("catalog", &catalog), ("name", &object_name)],
            ));
            let result = optional_radius(radius.as_deref())
                .and_then(|radius| {
                    with_spinner(&t("Waiting for VizieR..."), || {
                        vizier.query_object(&object_name, &catalog, radius.as_ref())
                    })
                })
                .map_err(|e| e.during(t("VizieR object query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("VizieR: {catalog}", &[("catalog", &catalog)]),
                    |count| tf("Found {count} match(es) in '{catalog}'.", &[("count", &count), ("catalog", &catalog)]),
                    tf("No sources found in '{catalog}' near '{name}'.", &[("catalog", &catalog), ("name", &object_name)]),
                ),
            )
        }
        Action::QueryRegion {
            coordinates,
            radius,
            catalog,
            table,
        } => {
            ui::querying(&tf(
                "Querying VizieR catalog '{catalog}' for region: '{coordinates}' with radius '{radius}'...",
                &[("catalog", &catalog), ("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for VizieR..."), || vizier.query_region(&catalog, &center, &radius))
                })
                .map_err(|e| e.during(t("VizieR region query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("VizieR: {catalog}", &[("catalog", &catalog)]),
                    |count| tf("Found {count} match(es) in '{catalog}'.", &[("count", &count), ("catalog", &catalog)]),
                    tf("No sources found in '{catalog}' for the specified region.", &[("catalog", &catalog)]),
                ),
            )
        }
        Action::FindCatalogs { keyword, table } => {
            ui::querying(&tf("Searching VizieR catalogs for: {keyword}...", &[("keyword", &keyword)]));
            let result = with_spinner(&t("Waiting for VizieR..."), || vizier.find_catalogs(&keyword))
                .map_err(|e| e.during(t("VizieR catalog search")))?;
            present(
                result,
                &table,
                View::new(
                    t("VizieR catalogs"),
                    |count| tf("Found {count} catalog(s).", &[("count", &count)]),
                    tf("No catalogs found matching '{keyword}'.", &[("keyword", &keyword)]),
                ),
            )
        }
    }
}
