//! Job Feed Viewer
//!
//! Hosts the jobs page: fetches the public job feed once, renders it into
//! the page's status line and jobs table, and writes the page out.
//! Render failures are page state (an "unavailable" status), not process
//! errors.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;

use adapters::{FeedClient, HtmlPage};
use app::{FeedRenderer, RenderOutcome};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout may carry the page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jobfeed_viewer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(feed_url = %config.feed_url, "Starting job feed viewer");

    let client = FeedClient::new(&config.feed_url).context("Failed to build HTTP client")?;
    let renderer = FeedRenderer::new(Arc::new(client), config.locale.clone());

    let mut page = HtmlPage::default();
    let outcome = {
        let (status, table) = page.elements_mut();
        renderer.init(status, table).await
    };

    if outcome == RenderOutcome::Unavailable {
        tracing::warn!("Page written with unavailable status");
    }

    let html = page.to_html();
    match &config.output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            tracing::info!(path = %path.display(), ?outcome, "Page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
