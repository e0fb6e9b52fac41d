//! CLI command implementations

use std::time::Duration;

use reelscan_core::{extract_variants, ManifestFetcher, NotAMasterManifest};
use tracing::debug;
use url::Url;

use crate::output;

/// List the variant streams advertised by a master manifest
pub async fn variants(manifest_url: &str, timeout: u64, format: &str) -> anyhow::Result<()> {
    println!("Analyzing manifest: {}", output::truncate_url(manifest_url));

    let url = Url::parse(manifest_url)?;
    let fetcher = ManifestFetcher::new(Duration::from_secs(timeout))?;
    let text = fetcher.fetch(&url).await?;
    debug!(%url, bytes = text.len(), "manifest retrieved");

    match extract_variants(&text, &url) {
        Ok(variants) => {
            println!("{}", output::render_variants(&variants, format)?);
        }
        Err(NotAMasterManifest) => {
            println!(
                "This appears to be a media playlist (single rendition), not a master manifest."
            );
        }
    }

    Ok(())
}
