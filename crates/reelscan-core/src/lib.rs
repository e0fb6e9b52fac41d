//! Reelscan Core - HLS Manifest Analysis Library
//!
//! This crate provides the core functionality for inspecting HLS streams:
//! - Master manifest detection and variant extraction
//! - Relative URI resolution against the manifest location
//! - HTTP manifest fetching with explicit timeouts
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌─────────────────────┐
//! │  ManifestFetcher │ ───▶ │  extract_variants   │
//! │  (HTTP, timeout) │ text │  (pure, one pass)   │
//! └──────────────────┘      └──────────┬──────────┘
//!                                      │
//!                              Vec<Variant> or
//!                              NotAMasterManifest
//! ```
//!
//! The fetch step is the only I/O; extraction is a pure function over the
//! manifest text and the URL it was retrieved from.

pub mod error;
pub mod fetch;
pub mod manifest;

pub use error::{Error, Result};
pub use fetch::ManifestFetcher;
pub use manifest::{extract_variants, is_master_manifest, NotAMasterManifest, Variant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
