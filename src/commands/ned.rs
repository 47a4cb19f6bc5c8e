use super::{present, region, with_spinner, TableArgs, View};
use aqc::services::ned::Ned;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query NED for an object by name.
    #[command(name = "query-object")]
    QueryObject {
        /// Name of the object (e.g., 'M81', 'NGC 1068').
        object_name: String,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query NED objects around a position.
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
    let ned = Ned::new(client);
    match action {
        Action::QueryObject { object_name, table } => {
            ui::querying(&tf("Querying NED for object: {name}...", &[("name", &object_name)]));
            let result = with_spinner(&t("Waiting for NED..."), || ned.query_object(&object_name))
                .map_err(|e| e.during(t("NED object query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("NED data for {name}", &[("name", &object_name)]),
                    |count| tf("Found {count} result(s) from NED.", &[("count", &count)]),
                    tf("No information found for object '{name}'.", &[("name", &object_name)]),
                ),
            )
        }
        Action::QueryRegion {
            coordinates,
            radius,
            table,
        } => {
            ui::querying(&tf(
                "Querying NED for region: '{coordinates}' with radius '{radius}'...",
                &[("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for NED..."), || ned.query_region(&center, &radius))
                })
                .map_err(|e| e.during(t("NED region query")))?;
            present(
                result,
                &table,
                View::new(
                    t("NED region results"),
                    |count| tf("Found {count} object(s) in the specified region.", &[("count", &count)]),
                    t("No objects found in the specified region."),
                ),
            )
        }
    }
}
