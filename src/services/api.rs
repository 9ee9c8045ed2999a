use anyhow::Result;
use crate::models::fear_greed::{FearGreedResponse, FearGreedData};
use crate::services::logger::Logger;

/// Fetches the full fear and greed index history from the alternative.me API.
///
/// A non-2xx status, an unparseable body, or an error reported in the response
/// metadata all fail the call; nothing is retried.
pub async fn fetch_fear_greed(
    client: &reqwest::Client,
    url: &str,
    logger: &Logger,
) -> Result<Vec<FearGreedData>> {
    logger.log_info("Fear & Greed", &format!("Fetching historical data from {}", url));

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let msg = format!("Unexpected response status {} from {}", status.as_u16(), url);
        logger.log_error("Fear & Greed HTTP Error", &msg);
        anyhow::bail!(msg);
    }

    let response_text = response.text().await?;

    // Don't log the full response, just log the status
    logger.log_info("Fear & Greed", "Response received successfully");

    match serde_json::from_str::<FearGreedResponse>(&response_text) {
        Ok(parsed) => {
            if let Some(error) = parsed.metadata.and_then(|m| m.error).filter(|e| !e.is_empty()) {
                logger.log_error("Fear & Greed API Error", &error);
                anyhow::bail!("API Error: {}", error);
            }

            logger.log_info("Fear & Greed",
                &format!("Successfully fetched {} data points", parsed.data.len()));

            Ok(parsed.data)
        },
        Err(e) => {
            logger.log_error("Fear & Greed Parse Error", &e.to_string());
            anyhow::bail!("Failed to parse Fear & Greed response: {}", e)
        }
    }
}
