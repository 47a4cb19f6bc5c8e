use super::{present, region, with_spinner, TableArgs, View};
use aqc::services::simbad::{extra_fields, Simbad};
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query basic data for an object by name.
    #[command(name = "query-object")]
    QueryObject {
        /// Name of the object (e.g., 'M31', 'Betelgeuse').
        object_name: String,
        /// Extra columns of the basic table to include (repeatable).
        #[arg(long = "field", value_name = "FIELD")]
        fields: Vec<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query objects around a position.
    #[command(name = "query-region")]
    QueryRegion {
        /// Coordinates (e.g., '10.68 41.26', '00h42m44s +41d16m09s') or an object name.
        coordinates: String,
        /// Search radius (e.g., '10arcsec', '0.5deg').
        radius: String,
        /// Extra columns of the basic table to include (repeatable).
        #[arg(long = "field", value_name = "FIELD")]
        fields: Vec<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// List the columns of the SIMBAD basic table.
    #[command(name = "list-fields")]
    ListFields {
        #[command(flatten)]
        table: TableArgs,
    },
}

fn checked_fields(requested: &[String]) -> Vec<String> {
    let (valid, rejected) = extra_fields(requested);
    for field in rejected {
        ui::warn(&tf("Ignoring invalid field name: {field}", &[("field", &field)]));
    }
    valid
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let simbad = Simbad::new(client);
    match action {
        Action::QueryObject {
            object_name,
            fields,
            table,
        } => {
            ui::querying(&tf("Querying SIMBAD for object: {name}...", &[("name", &object_name)]));
            let extra = checked_fields(&fields);
            let result = with_spinner(&t("Waiting for SIMBAD..."), || simbad.query_object(&object_name, &extra))
                .map_err(|e| e.during(t("SIMBAD object query")))?;
            present(
                result,
                &table,
                View::new(
                    tf("SIMBAD data for {name}", &[("name", &object_name)]),
                    |count| tf("Found {count} result(s) from SIMBAD.", &[("count", &count)]),
                    tf("No information found for object '{name}'.", &[("name", &object_name)]),
                ),
            )
        }
        Action::QueryRegion {
            coordinates,
            radius,
            fields,
            table,
        } => {
            ui::querying(&tf(
                "Querying SIMBAD for region: '{coordinates}' with radius '{radius}'...",
                &[("coordinates", &coordinates), ("radius", &radius)],
            ));
            let extra = checked_fields(&fields);
            let result = region(client, &coordinates, &radius)
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for SIMBAD..."), || simbad.query_region(&center, &radius, &extra))
                })
                .map_err(|e| e.during(t("SIMBAD region query")))?;
            present(
                result,
                &table,
                View::new(
                    t("SIMBAD region results"),
                    |count| tf("Found {count} object(s) in the specified region.", &[("count", &count)]),
                    t("No objects found in the specified region."),
                ),
            )
        }
        Action::ListFields { table } => {
            ui::querying(&t("Fetching SIMBAD field list..."));
            let result = with_spinner(&t("Waiting for SIMBAD..."), || simbad.list_fields())
                .map_err(|e| e.during(t("SIMBAD list fields")))?;
            present(
                result,
                &table.with_all_rows(),
                View::new(
                    t("SIMBAD basic table fields"),
                    |count| tf("Found {count} field(s).", &[("count", &count)]),
                    t("No fields found."),
                ),
            )
        }
    }
}
