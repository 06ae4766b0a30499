use std::env;

use anyhow::Result;
use placard_client::FetchClient;
use placard_core::{Page, RESPONSE_ELEMENT_ID};
use tracing::info;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let base_url = env::var("PLACARD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    info!("Fetching message from {}", base_url);

    let client = FetchClient::new(base_url);
    let mut page = Page::new();
    client.fetch_and_render(&mut page).await;

    match page.text(RESPONSE_ELEMENT_ID) {
        Some(text) if !text.is_empty() => println!("#{}: {}", RESPONSE_ELEMENT_ID, text),
        _ => println!("#{}: <unchanged>", RESPONSE_ELEMENT_ID),
    }

    Ok(())
}
