use chrono::Utc;
use iex_client::application::services::{stats, symbols, tops};
use iex_client::prelude::*;
use tracing::info;

/// Calls endpoints statelessly, passing token and version per call
///
/// Run with: IEX_TOKEN=Tsk_... cargo run --bin free_functions_example
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new().with_version("sandbox");
    let transport = HttpClient::new(&config.rest_api)?;
    let options = config.request_options();

    let exchanges = symbols::international_exchanges(&transport, &options).await?;
    info!("International exchanges: {}", exchanges);

    let last = tops::last(&transport, ["AAPL", "MSFT"], &options).await?;
    info!("Last sale: {}", last);

    let today = Utc::now().date_naive();
    let hist = tops::hist(&transport, Some(today.into()), &options).await?;
    info!("HIST files for {}: {}", today, hist);

    let recent_options = options.clone().with_filter("date,volume");
    let recent = stats::stats_recent(&transport, &recent_options).await?;
    info!("Recent stats: {}", recent);

    Ok(())
}
