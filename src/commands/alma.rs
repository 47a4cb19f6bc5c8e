use super::{optional_radius, present, region, with_spinner, TableArgs, View};
use aqc::services::alma::Alma;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query ALMA observations of a named object.
    #[command(name = "query-object")]
    QueryObject {
        /// Name of the target (e.g., 'M83').
        object_name: String,
        /// Search radius around the object (default 1 arcmin).
        #[arg(long)]
        radius: Option<String>,
        /// Only return publicly available data.
        #[arg(long)]
        public: bool,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query ALMA observations around a position.
    #[command(name = "query-region")]
    QueryRegion {
        /// Coordinates (e.g., '10.68 41.26', '00h42m44s +41d16m09s') or an object name.
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        /// Only return publicly available data.
        #[arg(long)]
        public: bool,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let alma = Alma::new(client);
    let found = |count: usize| tf("Found {count} observation(s) in the ALMA archive.", &[("count", &count)]);
    match action {
        Action::QueryObject {
            object_name,
            radius,
            public,
            table,
        } => {
            ui::querying(&tf("Querying ALMA for object: {name}...", &[("name", &object_name)]));
            let result = optional_radius(radius.as_deref())
                .and_then(|radius| {
                    with_spinner(&t("Waiting for ALMA..."), || {
                        alma.query_object(&object_name, radius.as_ref(), public)
                    })
                })
                .map_err(|e| e.during(t("ALMA object query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("ALMA observations of {name}", &[("name", &object_name)]),
                    found,
                    tf("No ALMA observations found for '{name}'.", &[("name", &object_name)]),
                ),
            )
        }
        Action::QueryRegion {
            coordinates,
            radius,
            public,
            table,
        } => {
            ui::querying(&tf(
                "Querying ALMA for region: '{coordinates}' with radius '{radius}'...",
                &[("coordinates", &coordinates), ("radius", &radius)],
            ));
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for ALMA..."), || alma.query_region(&center, &radius, public))
                })
                .map_err(|e| e.during(t("ALMA region query")))?;
            present(
                result,
                &table,
                View::new(
                    t("ALMA region results"),
                    found,
                    t("No ALMA observations found in the specified region."),
                ),
            )
        }
    }
}
