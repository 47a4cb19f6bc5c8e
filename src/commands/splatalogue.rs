use super::{present, with_spinner, TableArgs, View};
use aqc::services::splatalogue::Splatalogue;
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Query spectral lines in a frequency range.
    Query {
        /// Lower frequency bound in GHz.
        #[arg(long = "min-freq", value_name = "GHZ")]
        min_freq: f64,
        /// Upper frequency bound in GHz.
        #[arg(long = "max-freq", value_name = "GHZ")]
        max_freq: f64,
        /// Restrict to one species (e.g., 'CO').
        #[arg(long = "chemical-name")]
        chemical_name: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let splatalogue = Splatalogue::new(client);
    let Action::Query {
        min_freq,
        max_freq,
        chemical_name,
        table,
    } = action;

    ui::querying(&tf(
        "Querying Splatalogue for lines between {min} and {max} GHz...",
        &[("min", &min_freq), ("max", &max_freq)],
    ));
    let result = with_spinner(&t("Waiting for Splatalogue..."), || {
        splatalogue.query_lines(min_freq, max_freq, chemical_name.as_deref())
    })
    .map_err(|e| e.during(t("Splatalogue query")))?;

    present(
        result,
        &table,
        View::new(
            t("Splatalogue spectral lines"),
            |count| tf("Found {count} spectral line(s).", &[("count", &count)]),
            t("No spectral lines found in the given range."),
        ),
    )
}
