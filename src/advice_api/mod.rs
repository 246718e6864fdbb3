use httpclient::{Client, InMemoryResponseExt as _};
use serde::Serialize;
use serde_json::Value;

use crate::config::AdviceConfig;
use crate::model::{Summary, Transaction};

mod prompt;

const API_KEY_HEADER: &str = "X-goog-api-key";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

/// Ask the advice endpoint for an analysis of the filtered period.
///
/// Every failure path (network, HTTP status, unexpected response shape)
/// degrades to `None`; the dashboard keeps working without advice.
pub async fn get_financial_advice(
    client: &Client,
    config: &AdviceConfig,
    summary: &Summary,
    transactions: &[Transaction],
    period_label: &str,
) -> Option<String> {
    let request = GenerateContentRequest::from_prompt(prompt::build_prompt(
        summary,
        transactions,
        period_label,
    ));
    log::info!("Requesting financial advice...");
    let response = match client
        .post(&config.url)
        .header(API_KEY_HEADER, &config.api_key)
        .json(&request)
        .await
    {
        Ok(response) => response,
        Err(err) => {
            log::error!("Advice request failed: {err}");
            return None;
        }
    };
    if !response.status().is_success() {
        log::error!("Advice request failed with status {}", response.status());
        return None;
    }
    let response: Value = match response.json() {
        Ok(response) => response,
        Err(err) => {
            log::error!("Advice response was not valid JSON: {err}");
            return None;
        }
    };
    extract_advice(&response)
}

/// The advice text lives at `candidates[0].content.parts[0].text`. Anything
/// missing along that path, or an empty text, means no advice.
fn extract_advice(response: &Value) -> Option<String> {
    let text = response
        .pointer("/candidates/0/content/parts/0/text")?
        .as_str()?;
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}
