use super::{present, with_spinner, TableArgs, View};
use aqc::services::jplsbdb::{JplSbdb, SbdbLookup};
use aqc::table::{render_table, DisplayOptions};
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Look up a small body (asteroid or comet).
    Query {
        /// Name, number or designation (e.g., 'Ceres', '433', '2024 AB').
        target: String,
        /// Include physical parameters.
        #[arg(long)]
        phys: bool,
        /// Include discovery circumstances.
        #[arg(long)]
        discovery: bool,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let sbdb = JplSbdb::new(client);
    let Action::Query {
        target,
        phys,
        discovery,
        table,
    } = action;

    ui::querying(&tf("Querying JPL SBDB for: {target}...", &[("target", &target)]));
    let lookup = with_spinner(&t("Waiting for JPL SBDB..."), || sbdb.query(&target, phys, discovery))
        .map_err(|e| e.during(t("JPL SBDB query")))?;

    match lookup {
        SbdbLookup::Multiple(candidates) => {
            ui::warn(&tf(
                "'{target}' matches several objects; use one of the designations below.",
                &[("target", &target)],
            ));
            println!("{}", render_table(&candidates, &DisplayOptions::new(-1, false)));
            Ok(())
        }
        SbdbLookup::Found(record) => {
            ui::header(&t("Object summary"));
            println!("{}", ui::key_value_table(&t("Field"), &t("Value"), &record.summary));

            if let Some(physical) = &record.physical {
                ui::header(&t("Physical parameters"));
                println!("{}", render_table(physical, &table.display_options(-1)));
            }
            if !record.discovery.is_empty() {
                ui::header(&t("Discovery"));
                println!("{}", ui::key_value_table(&t("Field"), &t("Value"), &record.discovery));
            }

            present(
                record.elements,
                &table.with_all_rows(),
                View::new(
                    t("Orbital elements"),
                    |count| tf("Found {count} orbital element(s).", &[("count", &count)]),
                    t("No orbital elements available."),
                ),
            )
        }
    }
}
