use super::{present, with_spinner, TableArgs, View};
use aqc::services::jplhorizons::{EphemType, HorizonsRequest, JplHorizons};
use aqc::{t, tf, ui, ArchiveClient};
use clap::{Args, Subcommand};

/// Target and time window shared by all Horizons queries
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Target body (e.g., '499' for Mars, 'Ceres', '1P').
    target: String,
    /// Observer location or coordinate origin (e.g., '500@399', '568').
    #[arg(long)]
    location: Option<String>,
    /// Start time (e.g., '2024-01-01').
    #[arg(long)]
    start: Option<String>,
    /// Stop time (e.g., '2024-01-10').
    #[arg(long)]
    stop: Option<String>,
    /// Step size (e.g., '1d', '1h').
    #[arg(long)]
    step: Option<String>,
}

impl From<TargetArgs> for HorizonsRequest {
    fn from(args: TargetArgs) -> Self {
        HorizonsRequest {
            target: args.target,
            location: args.location,
            start: args.start,
            stop: args.stop,
            step: args.step,
        }
    }
}

#[derive(Subcommand)]
pub enum Action {
    /// Observer ephemerides of a target.
    Ephemerides {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Osculating orbital elements of a target.
    Elements {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        table: TableArgs,
    },
    /// State vectors of a target.
    Vectors {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let horizons = JplHorizons::new(client);
    let (kind, target, table) = match action {
        Action::Ephemerides { target, table } => (EphemType::Observer, target, table),
        Action::Elements { target, table } => (EphemType::Elements, target, table),
        Action::Vectors { target, table } => (EphemType::Vectors, target, table),
    };
    let label = match kind {
        EphemType::Observer => t("ephemerides"),
        EphemType::Elements => t("orbital elements"),
        EphemType::Vectors => t("state vectors"),
    };
    let name = target.target.clone();
    let request = HorizonsRequest::from(target);

    ui::querying(&tf(
        "Querying JPL Horizons {kind} for target: {target}...",
        &[("kind", &label), ("target", &name)],
    ));
    let result = with_spinner(&t("Waiting for JPL Horizons..."), || match kind {
        EphemType::Observer => horizons.ephemerides(&request),
        EphemType::Elements => horizons.elements(&request),
        EphemType::Vectors => horizons.vectors(&request),
    })
    .map_err(|e| e.during(t("JPL Horizons query")))?;

    present(
        result,
        &table,
        View::new(
            tf("JPL Horizons {kind}: {target}", &[("kind", &label), ("target", &name)]),
            |count| tf("Found {count} row(s) from JPL Horizons.", &[("count", &count)]),
            tf("No {kind} returned for '{target}'.", &[("kind", &label), ("target", &name)]),
        ),
    )
}
