//! Cloudflare API client
//!
//! Zone listing walks the paginated `/zones` endpoint one page at a time;
//! record export uses the per-zone `dns_records/export` endpoint and keeps
//! the response body as opaque text.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::error::{CloudflareError, Result};
use zoneflow_config::Credentials;

const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare API client
pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
}

/// A zone as discovered by listing: opaque id plus human-readable name
#[derive(Debug, Clone)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

impl CloudflareClient {
    /// Create a client against the production Cloudflare API
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_base_url(credentials, CLOUDFLARE_API_BASE)
    }

    /// Create a client against a custom API base URL (used by tests)
    pub fn with_base_url(credentials: &Credentials, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Auth-Email",
            HeaderValue::from_str(&credentials.user_email).map_err(|_| {
                CloudflareError::InvalidCredentials(
                    "user email is not a valid header value".to_string(),
                )
            })?,
        );
        let mut api_key = HeaderValue::from_str(&credentials.api_key).map_err(|_| {
            CloudflareError::InvalidCredentials("API key is not a valid header value".to_string())
        })?;
        api_key.set_sensitive(true);
        headers.insert("X-Auth-Key", api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// List every zone in the account, walking all pages in page order.
    ///
    /// The accumulator is threaded through the loop; page N+1 is requested
    /// only after page N has been processed. Any page failure aborts the
    /// whole listing and yields no zones.
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        let mut zones = Vec::new();
        let mut page = 1u32;

        loop {
            let (batch, info) = self.fetch_zone_page(page).await?;
            tracing::info!(
                "Fetched page {}/{} ({} zones)",
                info.page,
                info.total_pages.max(1),
                info.count
            );
            zones.extend(batch);

            if info.page >= info.total_pages {
                tracing::info!("Listed {} zones in total", info.total_count);
                break;
            }
            page = info.page + 1;
        }

        Ok(zones)
    }

    /// Fetch one page of the zone listing.
    async fn fetch_zone_page(&self, page: u32) -> Result<(Vec<Zone>, ResultInfo)> {
        let url = format!("{}/zones?page={}", self.base_url, page);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Response Status: {status}");

        let response_text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let messages = error_messages(&response_text);
            for message in &messages {
                tracing::error!("Cloudflare API: {message}");
            }
            return Err(CloudflareError::AuthenticationFailed(summarize(
                &messages,
                || format!("status {status}"),
            )));
        }

        let body: ZoneListResponse = serde_json::from_str(&response_text).inspect_err(|e| {
            tracing::error!("Failed to parse zone listing: {e}");
            tracing::debug!("Raw response: {response_text}");
        })?;

        if !body.success {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            for message in &messages {
                tracing::error!("Cloudflare API: {message}");
            }
            return Err(CloudflareError::ApiError(summarize(&messages, || {
                "unsuccessful response".to_string()
            })));
        }

        let batch = body
            .result
            .into_iter()
            .map(|z| Zone { id: z.id, name: z.name })
            .collect();

        Ok((batch, body.result_info))
    }

    /// Fetch the zone-file export for a zone. The body is opaque text and
    /// is returned without any transformation.
    pub async fn export_dns_records(&self, zone_id: &str) -> Result<String> {
        let url = format!("{}/zones/{}/dns_records/export", self.base_url, zone_id);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CloudflareError::ApiError(format!(
                "export returned status {status} for zone {zone_id}"
            )));
        }

        Ok(response.text().await?)
    }
}

/// Pull the error messages out of an API response body, if it has the
/// standard envelope shape.
fn error_messages(body: &str) -> Vec<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default()
}

fn summarize(messages: &[String], fallback: impl FnOnce() -> String) -> String {
    if messages.is_empty() {
        fallback()
    } else {
        messages.join("; ")
    }
}

// ============ API Types ============

#[derive(Debug, Deserialize)]
struct ZoneListResponse {
    success: bool,
    #[serde(default)]
    result: Vec<ApiZone>,
    #[serde(default)]
    errors: Vec<ApiError>,
    #[serde(default)]
    result_info: ResultInfo,
}

#[derive(Debug, Deserialize)]
struct ApiZone {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// Pagination metadata as reported by the listing endpoint
#[derive(Debug, Default, Deserialize)]
struct ResultInfo {
    page: u32,
    total_pages: u32,
    count: u32,
    total_count: u32,
}
