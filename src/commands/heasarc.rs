use super::{present, with_spinner, TableArgs, View};
use aqc::services::heasarc::{Heasarc, MissionQuery};
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

/// HEASARC tables are wide, so more rows fit on screen
const HEASARC_MAX_ROWS: i64 = 25;

#[derive(Subcommand)]
pub enum Action {
    /// Perform a query on HEASARC.
    Query {
        /// HEASARC mission table (e.g., 'chanmaster', 'xmmmaster').
        mission: String,
        /// Right Ascension in degrees.
        #[arg(long, allow_negative_numbers = true)]
        ra: Option<f64>,
        /// Declination in degrees.
        #[arg(long, allow_negative_numbers = true)]
        dec: Option<f64>,
        /// Search radius in degrees (for cone search).
        #[arg(long)]
        radius: Option<f64>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// List available HEASARC missions.
    #[command(name = "list-missions")]
    ListMissions {
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let heasarc = Heasarc::new(client);
    match action {
        Action::Query {
            mission,
            ra,
            dec,
            radius,
            table,
        } => {
            ui::querying(&tf("Querying HEASARC mission: {mission}...", &[("mission", &mission)]));
            let query = MissionQuery::from_options(ra, dec, radius)?;
            let result = with_spinner(&t("Waiting for HEASARC..."), || heasarc.query(&mission, &query))
                .map_err(|e| e.during(t("HEASARC query")))?;
            present(
                result,
                &table,
                View::new(
                    t("HEASARC Query Results"),
                    |count| tf("Found {count} result(s) from HEASARC.", &[("count", &count)]),
                    t("No results found for your HEASARC query."),
                )
                .rows(HEASARC_MAX_ROWS),
            )
        }
        Action::ListMissions { table } => {
            ui::querying(&t("Listing HEASARC missions..."));
            let result = with_spinner(&t("Waiting for HEASARC..."), || heasarc.list_missions())
                .map_err(|e| e.during(t("HEASARC list missions")))?;
            present(
                result,
                &table.with_all_rows(),
                View::new(
                    t("Available HEASARC Missions"),
                    |count| tf("Found {count} mission table(s).", &[("count", &count)]),
                    t("No HEASARC missions found."),
                ),
            )
        }
    }
}
