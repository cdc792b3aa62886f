//! List library example
//!
//! This example demonstrates the core functionality of gphotos-dl:
//! - Creating a client with the default configuration
//! - Building the deduplicated catalog of albums and categories
//! - Printing the catalog as JSON
//! - Optionally downloading every item to a directory
//!
//! ```bash
//! GOOGLE_OAUTH_ACCESS_TOKEN=... cargo run --example list_library -- ./photos
//! ```
//!
//! Set `GPHOTOS_ALBUMS` to a comma-separated list of album titles to restrict
//! the catalog to those albums.

use gphotos_dl::{Config, FetchParams, PhotoLibrary};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    let access_token = std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN")
        .map_err(|_| "GOOGLE_OAUTH_ACCESS_TOKEN must be set")?;
    let album_titles = std::env::var("GPHOTOS_ALBUMS")
        .map(|titles| {
            titles
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();
    let destination = std::env::args().nth(1).map(PathBuf::from);

    let library = PhotoLibrary::new(Config::default())?;

    let items = match library
        .fetch_list(&FetchParams {
            access_token,
            album_titles,
        })
        .await
    {
        Ok(items) => items,
        Err(e) => {
            eprintln!("✗ {} [{}]", e, e.error_code());
            std::process::exit(e.exit_code());
        }
    };

    println!("{}", serde_json::to_string_pretty(&items)?);
    eprintln!("✓ {} items in catalog", items.len());

    if let Some(destination) = destination {
        if let Err(e) = library.download_all(&items, &destination).await {
            eprintln!("✗ {} [{}]", e, e.error_code());
            std::process::exit(e.exit_code());
        }
        eprintln!("✓ Downloaded to {}", destination.display());
    }

    Ok(())
}
