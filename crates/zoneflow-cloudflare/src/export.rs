//! Per-zone export pipeline
//!
//! Fetches the zone-file export for every listed zone and writes it to
//! `<output_dir>/<zone name>.txt`. The batch runs with a bounded number of
//! exports in flight; a single zone failing is logged and recorded but
//! never aborts the rest of the batch.

use std::path::{Path, PathBuf};

use futures_util::{StreamExt, stream};

use crate::client::{CloudflareClient, Zone};
use crate::error::Result;

/// Outcome of an export batch
///
/// Entries appear in completion order, which with concurrent exports is
/// not necessarily the listing order.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Zone names whose file was written
    pub exported: Vec<String>,
    /// Zone names that failed, with the error message that was logged
    pub failed: Vec<(String, String)>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Export every zone's DNS records to `<output_dir>/<zone name>.txt`.
///
/// The output directory is created if absent. Existing files are
/// unconditionally overwritten. At most `concurrency` exports are in
/// flight at once (clamped to 1). No retries; a failed fetch produces no
/// file, a failed write is logged without cleanup.
pub async fn export_zones(
    client: &CloudflareClient,
    zones: &[Zone],
    output_dir: &Path,
    concurrency: usize,
) -> Result<ExportSummary> {
    tokio::fs::create_dir_all(output_dir).await?;

    let outcomes = stream::iter(zones)
        .map(|zone| async move {
            match export_zone(client, zone, output_dir).await {
                Ok(path) => {
                    tracing::info!("Exported {} to {}", zone.name, path.display());
                    (zone.name.clone(), Ok(()))
                }
                Err(e) => {
                    tracing::error!("Export failed for {}: {e}", zone.name);
                    (zone.name.clone(), Err(e.to_string()))
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let mut summary = ExportSummary::default();
    for (name, outcome) in outcomes {
        match outcome {
            Ok(()) => summary.exported.push(name),
            Err(message) => summary.failed.push((name, message)),
        }
    }

    Ok(summary)
}

async fn export_zone(
    client: &CloudflareClient,
    zone: &Zone,
    output_dir: &Path,
) -> Result<PathBuf> {
    let records = client.export_dns_records(&zone.id).await?;
    let path = output_dir.join(format!("{}.txt", zone.name));
    tokio::fs::write(&path, records).await?;
    Ok(path)
}
