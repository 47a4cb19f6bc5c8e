use super::{optional_radius, present, with_spinner, TableArgs, View};
use aqc::coords::resolve;
use aqc::services::irsa_dust::IrsaDust;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query E(B-V) reddening, emission and dust temperature statistics.
    Query {
        /// Coordinates (e.g., '10.68 41.26') or an object name.
        coordinates: String,
        /// Size of the region (2 to 37.5 degrees, default 5 degrees).
        #[arg(long)]
        radius: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Query the per-band extinction table at a position.
    Extinction {
        /// Coordinates (e.g., '10.68 41.26') or an object name.
        coordinates: String,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let dust = IrsaDust::new(client);
    match action {
        Action::Query {
            coordinates,
            radius,
            table,
        } => {
            ui::querying(&tf("Querying IRSA dust maps at '{coordinates}'...", &[("coordinates", &coordinates)]));
            let result = optional_radius(radius.as_deref())
                .and_then(|radius| Ok((resolve(client, &coordinates)?, radius)))
                .and_then(|(center, radius)| {
                    with_spinner(&t("Waiting for IRSA..."), || dust.query(&center, radius.as_ref()))
                })
                .map_err(|e| e.during(t("IRSA dust query")))?;
            present(
                result,
                &table.with_all_rows(),
                View::new(
                    tf("Dust statistics at {coordinates}", &[("coordinates", &coordinates)]),
                    |count| tf("Found {count} statistic(s).", &[("count", &count)]),
                    t("No dust statistics returned."),
                ),
            )
        }
        Action::Extinction { coordinates, table } => {
            ui::querying(&tf(
                "Querying IRSA extinction table at '{coordinates}'...",
                &[("coordinates", &coordinates)],
            ));
            let result = resolve(client, &coordinates)
                .and_then(|center| with_spinner(&t("Waiting for IRSA..."), || dust.extinction(&center)))
                .map_err(|e| e.during(t("IRSA extinction query")))?;
            present(
                result,
                &table.with_all_rows(),
                View::new(
                    tf("Extinction at {coordinates}", &[("coordinates", &coordinates)]),
                    |count| tf("Found {count} band(s).", &[("count", &count)]),
                    t("No extinction data returned."),
                ),
            )
        }
    }
}
