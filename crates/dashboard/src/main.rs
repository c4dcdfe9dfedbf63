use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dashboard::client::{HttpMetricsSource, MetricsSource};
use dashboard::views::{EngagementView, SalesView, SocialView};
use shared::format::{count_noun, thousands};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url =
        std::env::var("TALENT_PORTAL_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let timeout_ms = std::env::var("TALENT_PORTAL_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_MS);

    let source = HttpMetricsSource::new(&base_url, Duration::from_millis(timeout_ms))?;
    info!(base_url = %base_url, timeout_ms, "Fetching dashboard");

    let mut social = SocialView::new();
    social.refresh(&source).await;

    let mut engagement = EngagementView::new();
    engagement.refresh(&source).await;

    let mut sales = SalesView::new();
    sales.load(&source).await;

    println!("== Social Media Metrics ==\n{}\n", social.state());
    println!("== Engagement Metrics ==\n{}\n", engagement.state());
    println!("== Sales Metrics ==\n{}\n", sales.state());

    println!("== SMS Campaigns ==");
    match source.sms().await {
        Ok(campaigns) => {
            println!("{}", count_noun(campaigns.len(), "campaign"));
            for c in campaigns {
                println!(
                    "  {} ({}) {}% delivered, {}% response, {} sent",
                    c.name,
                    c.artist,
                    c.delivery_rate,
                    c.response_rate,
                    thousands(c.total_sent)
                );
            }
        }
        Err(e) => println!("Failed to load metrics: {}", e),
    }

    Ok(())
}
