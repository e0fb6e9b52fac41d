//! HLS master manifest parsing and variant extraction
//!
//! A master manifest advertises one `#EXT-X-STREAM-INF` tag line per
//! rendition, each immediately followed by the rendition's playlist URI.
//! Extraction is a pure pass over the text: detect the master marker, then
//! scan tag/URI line pairs and resolve each URI against the manifest's own
//! URL.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Tag prefix carrying the variant attribute list
const STREAM_INF_PREFIX: &str = "#EXT-X-STREAM-INF:";

/// Marker distinguishing master manifests from media playlists
const MASTER_MARKER: &str = "#EXT-X-STREAM-INF";

/// One advertised rendition of the stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Peak bitrate in bits per second, as declared by the tag
    pub bandwidth: u64,
    /// Literal `WIDTHxHEIGHT` token, absent for audio-only renditions
    pub resolution: Option<String>,
    /// Absolute playlist URL, resolved against the manifest location
    pub url: Url,
}

/// The document is a media playlist (single rendition), not a master manifest.
///
/// This is a classification, not a failure: callers are expected to take a
/// different handling path rather than report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("document is a media playlist, not a master manifest")]
pub struct NotAMasterManifest;

/// Returns true if the text advertises variant streams
pub fn is_master_manifest(manifest: &str) -> bool {
    manifest.contains(MASTER_MARKER)
}

/// Extract the variant streams advertised by a master manifest.
///
/// `base_url` is the absolute URL the manifest was fetched from; relative
/// variant URIs are resolved against it. The returned sequence preserves
/// manifest order, which generally reflects the source's quality ladder.
///
/// Tag lines missing a parseable `BANDWIDTH` attribute, and a trailing tag
/// line with no URI line after it, yield no variant; the rest of the
/// manifest is still processed.
pub fn extract_variants(
    manifest: &str,
    base_url: &Url,
) -> Result<Vec<Variant>, NotAMasterManifest> {
    if !is_master_manifest(manifest) {
        return Err(NotAMasterManifest);
    }

    let lines: Vec<&str> = manifest.lines().collect();
    let mut variants = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(attributes) = line.trim().strip_prefix(STREAM_INF_PREFIX) else {
            continue;
        };
        // The URI is the very next line of text, no skipping. A tag at the
        // end of the document has no URI and yields nothing.
        let Some(uri) = lines.get(index + 1).map(|next| next.trim()) else {
            continue;
        };
        let Some(bandwidth) = attribute_value(attributes, "BANDWIDTH")
            .and_then(|value| value.parse::<u64>().ok())
        else {
            debug!(line = index + 1, "skipping variant without parseable BANDWIDTH");
            continue;
        };
        let resolution = attribute_value(attributes, "RESOLUTION").map(str::to_owned);
        let url = match base_url.join(uri) {
            Ok(url) => url,
            Err(e) => {
                debug!(uri, error = %e, "skipping variant with unresolvable URI");
                continue;
            }
        };

        variants.push(Variant {
            bandwidth,
            resolution,
            url,
        });
    }

    Ok(variants)
}

/// Look up one attribute in a comma-separated HLS attribute list.
///
/// Commas inside double-quoted values (e.g. `CODECS="mp4a.40.2,avc1.4d401f"`)
/// do not split attributes. Matching is order-independent.
fn attribute_value<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    let mut in_quotes = false;
    let mut start = 0;
    let mut pairs = Vec::new();

    for (i, byte) in attributes.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                pairs.push(&attributes[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pairs.push(&attributes[start..]);

    pairs.into_iter().find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().trim_matches('"'))
    })
}
