//! Render the bookstore home page to stdout.
//!
//! Points at the API server named by `API_SERVER_URL` and streams the home
//! page as it would be sent to a browser, chunk by chunk.

use std::io::Write;

use anyhow::Result;
use bookstore::{handle_home, Bookstore};
use futures::channel::mpsc;
use futures::StreamExt;
use shelf_core::ApiConfig;
use shelf_streaming::StreamingSink;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ApiConfig::from_env()?;
    let app = Bookstore::new(config)?;

    let (tx, mut rx) = mpsc::unbounded::<Vec<u8>>();
    let writer = tokio::spawn(async move {
        let mut stdout = std::io::stdout();
        while let Some(chunk) = rx.next().await {
            if stdout.write_all(&chunk).is_err() {
                break;
            }
            let _ = stdout.flush();
        }
    });

    let mut sink = StreamingSink::new(tx);
    handle_home(&app, &mut sink).await?;
    drop(sink);
    writer.await?;
    Ok(())
}
