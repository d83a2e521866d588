//! Fetch filtered super-admin stats from a running backend.
//!
//! Usage:
//!   XQUISITO_API_BASE_URL=https://api.example.com \
//!   XQUISITO_TOKEN=<bearer> cargo run --example super_admin_stats

use shared::Service;
use shared::models::StatsQuery;
use xquisito_client::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,xquisito_client=debug".into()),
        )
        .init();

    let mut config = ClientConfig::from_env();
    if let Ok(token) = std::env::var("XQUISITO_TOKEN") {
        config = config.with_token(token);
    }
    let client = config.build_http_client();

    let query = StatsQuery::new().service(Service::TapOrderPay);
    let stats = client.super_admin_stats(&query).await?;

    println!("total volume:       {}", stats.total_volume);
    println!("total orders:       {}", stats.total_orders);
    println!("total transactions: {}", stats.total_transactions);
    for split in &stats.payment_methods {
        println!("  {}: {} ({} tx)", split.method, split.volume, split.transactions);
    }

    Ok(())
}
