//! Cloudflare zone export client for Zoneflow
//!
//! This crate talks to the Cloudflare v4 API to discover every zone in an
//! account and to pull each zone's DNS records as an opaque zone-file text,
//! which the export pipeline writes to per-zone files.
//!
//! # Authentication
//!
//! The legacy header pair `X-Auth-Email` / `X-Auth-Key` is used, loaded
//! from a `.env` file by `zoneflow-config`.
//!
//! # Example
//!
//! ```ignore
//! use zoneflow_cloudflare::{export_zones, CloudflareClient};
//! use zoneflow_config::load_credentials;
//!
//! let credentials = load_credentials(None)?;
//! let client = CloudflareClient::new(&credentials)?;
//!
//! // List every zone, then export them with at most 4 in flight
//! let zones = client.list_zones().await?;
//! let summary = export_zones(&client, &zones, "./domains".as_ref(), 4).await?;
//! println!("{} exported, {} failed", summary.exported.len(), summary.failed.len());
//! ```

pub mod client;
pub mod error;
pub mod export;

pub use client::{CloudflareClient, Zone};
pub use error::{CloudflareError, Result};
pub use export::{ExportSummary, export_zones};
