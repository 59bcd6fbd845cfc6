use crate::{config::Config, error::AppError, models::Skip};
use reqwest::Client;
use std::time::Duration;

/// Fetch the skip options available at the configured location.
///
/// Issues a single GET request; the caller decides when a fresh fetch is
/// warranted. Non-success statuses, transport failures, and bodies that do
/// not parse as an array of skip records all surface as errors.
pub async fn fetch_skips(client: &Client, config: &Config) -> Result<Vec<Skip>, AppError> {
    let url = format!("{}/api/skips/by-location", config.api.base_url);

    let response = client
        .get(&url)
        .query(&[
            ("postcode", config.location.postcode.as_str()),
            ("area", config.location.area.as_str()),
        ])
        .timeout(Duration::from_secs(config.api.timeout_seconds))
        .send()
        .await?;

    // Check for HTTP errors
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::UpstreamError {
            status,
            message: error_text,
        });
    }

    let body = response.text().await?;
    let skips: Vec<Skip> = serde_json::from_str(&body)?;

    Ok(skips)
}
