//! aqc - query astronomical archives from the command line

mod commands;

use aqc::config::{load_config, save_default_lang, AqcConfig};
use aqc::i18n::{self, localize_command, resolve_language, Language};
use aqc::{diagnostics, t, tf, ui, ArchiveClient};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use commands::Commands;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "aqc")]
#[command(version)]
#[command(about = "Query astronomical archives from the command line.")]
#[command(long_about = r#"
aqc queries public astronomical archives and prints the results as tables:
  SIMBAD, ALMA, ESASky, Gaia, HEASARC, IRSA, IRSA dust, JPL Horizons,
  JPL SBDB, MAST, NASA ADS, NED, Splatalogue and VizieR.

Example usage:
  aqc simbad query-object M31
  aqc gaia cone-search "10.68 41.26" 1arcmin --max-rows-display 5
  aqc irsa gator fp_psc "M51" 30arcsec --filter "j_m<12" -o m51.csv
"#)]
struct Cli {
    /// Output language (e.g., 'en', 'zh').
    #[arg(short = 'l', long = "lang", visible_alias = "language", value_name = "LANG", global = true)]
    lang: Option<String>,

    /// Save LANG as the default output language.
    #[arg(short = 'd', long = "default", value_name = "LANG")]
    default_lang: Option<String>,

    /// Test connectivity to every archive.
    #[arg(short = 'p', long = "ping")]
    ping: bool,

    /// Check local field lists against the fields each archive publishes.
    #[arg(short = 'f', long = "field")]
    field: bool,

    /// Enable verbose logging.
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Enable debug logging.
    #[arg(
        short = 't',
        long = "debug",
        global = true,
        env = "AQC_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    debug: bool,

    /// Print the elapsed time after the command.
    #[arg(long = "test", global = true, hide = true)]
    test: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool, debug: bool) {
    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Exit with 130 on Ctrl-C, leaving the terminal usable.
#[cfg(unix)]
fn install_interrupt_handler() {
    use signal_hook::consts::SIGINT;
    use signal_hook::iterator::Signals;

    let mut signals = match Signals::new([SIGINT]) {
        Ok(signals) => signals,
        Err(err) => {
            tracing::warn!("could not install the interrupt handler: {}", err);
            return;
        }
    };
    std::thread::spawn(move || {
        if signals.forever().next().is_some() {
            let _ = console::Term::stderr().show_cursor();
            eprintln!();
            ui::warn(&t("User interrupted the query. Exiting safely."));
            std::process::exit(130);
        }
    });
}

#[cfg(not(unix))]
fn install_interrupt_handler() {}

fn dispatch(client: &ArchiveClient, command: Commands) -> aqc::Result<()> {
    match command {
        Commands::Simbad { action } => commands::simbad::run(client, action),
        Commands::Alma { action } => commands::alma::run(client, action),
        Commands::Esasky { action } => commands::esasky::run(client, action),
        Commands::Gaia { action } => commands::gaia::run(client, action),
        Commands::Heasarc { action } => commands::heasarc::run(client, action),
        Commands::Irsa { action } => commands::irsa::run(client, action),
        Commands::IrsaDust { action } => commands::irsa_dust::run(client, action),
        Commands::Jplhorizons { action } => commands::jplhorizons::run(client, action),
        Commands::Jplsbdb { action } => commands::jplsbdb::run(client, action),
        Commands::Mast { action } => commands::mast::run(client, action),
        Commands::NasaAds { action } => commands::nasa_ads::run(client, action),
        Commands::Ned { action } => commands::ned::run(client, action),
        Commands::Splatalogue { action } => commands::splatalogue::run(client, action),
        Commands::Vizier { action } => commands::vizier::run(client, action),
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let started = Instant::now();
    let args: Vec<String> = std::env::args().collect();

    // The language has to be known before clap renders any help text.
    let (config, config_error) = match load_config(None) {
        Ok(config) => (config, None),
        Err(err) => (None, Some(err)),
    };
    let code = resolve_language(&args, |var| std::env::var(var).ok(), config.as_ref());
    i18n::init(&code);

    let matches = localize_command(Cli::command()).get_matches_from(&args);
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    // The pre-scan only sees literal argv; the parsed flag is authoritative.
    if let Some(lang) = cli.lang.as_deref() {
        if Language::from_code(lang) != i18n::current() {
            i18n::init(lang);
        }
    }

    init_logging(cli.verbose, cli.debug);
    if let Some(err) = config_error {
        tracing::warn!("ignoring unreadable config file: {}", err);
    }
    install_interrupt_handler();

    if let Some(lang) = &cli.default_lang {
        let path = save_default_lang(None, lang)?;
        i18n::init(lang);
        tracing::info!("default language written to {}", path.display());
        ui::success(&tf("Default language set to '{lang}'.", &[("lang", lang)]));
    }

    let config = config.unwrap_or_else(AqcConfig::default);
    let client = ArchiveClient::new(&config);
    let mut exit = ExitCode::SUCCESS;

    if cli.ping {
        ui::header(&t("Archive connectivity"));
        let results = diagnostics::ping_all(&client);
        println!("{}", diagnostics::ping_table(&results));
    } else if cli.field {
        ui::header(&t("Field list check"));
        let reports = diagnostics::check_all_fields(&client);
        println!("{}", diagnostics::field_table(&reports));
        if reports.iter().any(|r| !r.is_ok()) {
            exit = ExitCode::from(1);
        }
    } else if let Some(command) = cli.command {
        dispatch(&client, command)?;
    } else if cli.default_lang.is_none() {
        localize_command(Cli::command()).print_help()?;
        println!();
    }

    if cli.test {
        let elapsed = format!("{:.2}s", started.elapsed().as_secs_f64());
        ui::timing(&tf("Elapsed time: {elapsed}", &[("elapsed", &elapsed)]));
    }
    Ok(exit)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<aqc::Error>() {
                Some(aqc::Error::Query { context, source }) => ui::error(&tf(
                    "Error during {context}: {error}",
                    &[("context", context), ("error", source)],
                )),
                _ => ui::error(&err.to_string()),
            }
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqc::i18n::{lang_from_args, localize_for};

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    fn both_paths(args: &[&str]) -> (Language, Language) {
        let args = argv(args);
        let cli = Cli::try_parse_from(&args).unwrap();
        let parsed = Language::from_code(cli.lang.as_deref().unwrap_or("en"));
        let scanned = Language::from_code(lang_from_args(&args).as_deref().unwrap_or("en"));
        (parsed, scanned)
    }

    #[test]
    fn test_lang_flag_agrees_with_prescan() {
        for args in [
            &["aqc", "-l", "zh", "simbad", "list-fields"][..],
            &["aqc", "--lang", "zh", "simbad", "list-fields"],
            &["aqc", "--language", "zh", "simbad", "list-fields"],
            &["aqc", "simbad", "list-fields", "--lang=zh"],
        ] {
            assert_eq!(both_paths(args), (Language::Chinese, Language::Chinese), "{:?}", args);
        }
        assert_eq!(
            both_paths(&["aqc", "simbad", "list-fields"]),
            (Language::English, Language::English)
        );
    }

    #[test]
    fn test_cli_help_localizes() {
        let cmd = localize_for(Cli::command(), Language::Chinese);
        let about = cmd.get_about().map(|a| a.to_string()).unwrap_or_default();
        assert_eq!(about.trim_end_matches('。'), "在命令行中查询天文数据档案");
        let verbose = cmd.get_arguments().find(|a| a.get_id() == "verbose").unwrap();
        let help = verbose.get_help().map(|h| h.to_string()).unwrap_or_default();
        assert_eq!(help.trim_end_matches('。'), "启用详细日志");
    }
}
