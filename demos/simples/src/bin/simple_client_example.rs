use iex_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting simple client example");

    // Token and version come from IEX_TOKEN / IEX_API_VERSION or a .env file
    let client = Client::from_env()?;
    info!("✓ Client created for version {}", client.config().version);

    let tickers = client.symbols_list().await?;
    info!("{} symbols available", tickers.len());

    let fx = client.fx_symbols_list().await?;
    info!("{} currencies, {} pairs", fx.currencies.len(), fx.pairs.len());

    let deep = client.deep("AAPL".into(), None).await?;
    info!("DEEP for AAPL: {:#}", deep);

    let book = client.book(vec!["AAPL", "MSFT"].into(), None).await?;
    info!("Book: {}", book);

    Ok(())
}
