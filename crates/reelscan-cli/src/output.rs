//! Output formatting for CLI

use std::fmt::Write;

use reelscan_core::Variant;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Display length for URLs in text/table output
const URL_DISPLAY_LEN: usize = 60;

/// Output format options
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Tabled)]
struct VariantRow {
    #[tabled(rename = "RESOLUTION")]
    resolution: String,
    #[tabled(rename = "BITRATE (Mbps)")]
    bitrate: String,
    #[tabled(rename = "SOURCE URL")]
    url: String,
}

impl From<&Variant> for VariantRow {
    fn from(variant: &Variant) -> Self {
        Self {
            resolution: resolution_label(variant),
            bitrate: mbps(variant.bandwidth),
            url: truncate_url(variant.url.as_str()),
        }
    }
}

/// Render the variant ladder in the selected format.
///
/// JSON output carries the untruncated records; text and table output
/// convert bitrates to Mbps and truncate URLs for display.
pub fn render_variants(variants: &[Variant], format: &str) -> anyhow::Result<String> {
    match OutputFormat::from(format) {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(variants)?),
        OutputFormat::Table => {
            let rows: Vec<VariantRow> = variants.iter().map(VariantRow::from).collect();
            Ok(Table::new(rows).with(Style::sharp()).to_string())
        }
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(
                out,
                "{:<15} | {:<15} | {}",
                "RESOLUTION", "BITRATE (Mbps)", "SOURCE URL"
            )?;
            writeln!(out, "{}", "-".repeat(100))?;
            for variant in variants {
                writeln!(
                    out,
                    "{:<15} | {:<15} | {}",
                    resolution_label(variant),
                    mbps(variant.bandwidth),
                    truncate_url(variant.url.as_str())
                )?;
            }
            Ok(out)
        }
    }
}

/// Resolution token, or the conventional label for untagged/audio variants
fn resolution_label(variant: &Variant) -> String {
    variant
        .resolution
        .clone()
        .unwrap_or_else(|| "Audio/Other".to_string())
}

/// Bits per second rendered as Mbps with two decimals
fn mbps(bandwidth: u64) -> String {
    format!("{:.2}", bandwidth as f64 / 1_000_000.0)
}

/// Shorten long URLs for single-line display
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() <= URL_DISPLAY_LEN {
        url.to_string()
    } else {
        let head: String = url.chars().take(URL_DISPLAY_LEN).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn variant(bandwidth: u64, resolution: Option<&str>) -> Variant {
        Variant {
            bandwidth,
            resolution: resolution.map(str::to_owned),
            url: Url::parse("https://cdn.test/live/720p/index.m3u8").unwrap(),
        }
    }

    #[test]
    fn mbps_rounds_to_two_decimals() {
        assert_eq!(mbps(2_000_000), "2.00");
        assert_eq!(mbps(128_000), "0.13");
        assert_eq!(mbps(0), "0.00");
    }

    #[test]
    fn missing_resolution_labels_as_audio_other() {
        assert_eq!(resolution_label(&variant(128_000, None)), "Audio/Other");
        assert_eq!(
            resolution_label(&variant(2_000_000, Some("1280x720"))),
            "1280x720"
        );
    }

    #[test]
    fn short_urls_are_not_truncated() {
        let url = "https://cdn.test/master.m3u8";
        assert_eq!(truncate_url(url), url);
    }

    #[test]
    fn long_urls_are_truncated_with_ellipsis() {
        let url = format!("https://cdn.test/{}/master.m3u8", "a".repeat(80));
        let shown = truncate_url(&url);
        assert_eq!(shown.chars().count(), URL_DISPLAY_LEN + 3);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn text_output_has_one_row_per_variant() {
        let variants = vec![
            variant(2_000_000, Some("1280x720")),
            variant(800_000, None),
        ];

        let text = render_variants(&variants, "text").unwrap();
        assert!(text.contains("1280x720"));
        assert!(text.contains("Audio/Other"));
        assert!(text.contains("2.00"));
        assert!(text.contains("0.80"));
    }

    #[test]
    fn json_output_carries_full_urls() {
        let variants = vec![variant(2_000_000, Some("1280x720"))];

        let json = render_variants(&variants, "json").unwrap();
        assert!(json.contains("https://cdn.test/live/720p/index.m3u8"));
        assert!(json.contains("2000000"));
    }
}
