use super::{optional_radius, present, region, with_spinner, TableArgs, View};
use aqc::services::mast::Mast;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query MAST observations of a named object.
    #[command(name = "query-object")]
    QueryObject {
        /// Name of the object (e.g., 'M101').
        object_name: String,
        /// Search radius around the object (default 0.2 deg).
        #[arg(long)]
        radius: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query MAST observations around a position.
    #[command(name = "query-region")]
    QueryRegion {
        /// Coordinates (e.g., '10.68 41.26', '00h42m44s +41d16m09s') or an object name.
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let mast = Mast::new(client);
    let found = |count: usize| tf("Found {count} observation(s) in MAST.", &[("count", &count)]);
    match action {
        Action::QueryObject {
            object_name,
            radius,
            table,
        } => {
            ui::querying(&tf("Querying MAST for object: {name}...", &[("name", &object_name)]));
            let result = optional_radius(radius.as_deref())
                .and_then(|radius| {
                    with_spinner(&t("Waiting for MAST..."), || mast.query_object(&object_name, radius.as_ref()))
                })
                .map_err(|e| e.during(t("MAST object query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("MAST observations of {name}", &[("name", &object_name)]),
                    found,
                    tf("No MAST observations found for '{name}'.", &[("name", &object_name)]),
                ),
            )
        }
        Action::QueryRegion {
            coordinates,
            radius,
            table,
        } => {
            ui::querying(&tf(
                "Querying MAST for region: '{coordinates}' with radius '{radius}'...",
                &[("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for MAST..."), || mast.query_region(&center, &radius))
                })
                .map_err(|e| e.during(t("MAST region query")))?;
            present(
                result,
                &table,
                View::new(
                    t("MAST region results"),
                    found,
                    t("No MAST observations found in the specified region."),
                ),
            )
        }
    }
}
