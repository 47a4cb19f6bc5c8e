use super::{present, with_spinner, TableArgs, View};
use aqc::services::nasa_ads::{field_list, NasaAds, DEFAULT_ROWS, DEFAULT_SORT};
use aqc::{t, tf, ui, ArchiveClient};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Action {
    /// Search the ADS literature database.
    Query {
        /// ADS query string (e.g., 'author:"Hubble, E" year:1929').
        query: String,
        /// Number of records to return.
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        /// Sort order (e.g., 'date desc', 'citation_count desc').
        #[arg(long, default_value = DEFAULT_SORT)]
        sort: String,
        /// Fields to return (repeatable or comma separated).
        #[arg(long = "fields", value_name = "FIELD")]
        fields: Vec<String>,
        #[command(flatten)]
        table: TableArgs,
    },
}

pub fn run(client: &ArchiveClient, action: Action) -> aqc::Result<()> {
    let Action::Query {
        query,
        rows,
        sort,
        fields,
        table,
    } = action;

    ui::querying(&tf("Querying NASA ADS: {query}...", &[("query", &query)]));
    let fields = field_list(&fields);
    let results = NasaAds::new(client)
        .and_then(|ads| with_spinner(&t("Waiting for NASA ADS..."), || ads.query(&query, rows, &sort, &fields)))
        .map_err(|e| e.during(t("NASA ADS query")))?;

    let total = results.num_found;
    present(
        results.table,
        &table,
        View::new(
            t("NASA ADS results"),
            |count| tf("Showing {count} of {total} record(s).", &[("count", &count), ("total", &total)]),
            tf("No records found for '{query}'.", &[("query", &query)]),
        ),
    )
}
