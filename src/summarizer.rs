use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, Result};

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    min_length: u32,
    max_length: u32,
    truncation: bool,
}

/// One generated summary, as returned by the model.
///
/// The inference API responds with an ordered list of these; any extra
/// metadata fields it includes are kept so the result passes through to
/// the caller unmodified.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SummaryOutput {
    pub summary_text: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Summarize `input_text` with the pretrained model named in `config`.
///
/// The input is sent as-is: no validation, no length check. Inputs longer
/// than the model's context window are truncated by the model itself when
/// `config.truncation` is set. Any failure from the inference API surfaces
/// as an error carrying the upstream message; there is no retry or fallback.
///
/// A fresh HTTP client is built on every call, so nothing is shared between
/// invocations.
pub async fn summarize(config: &Config, input_text: &str) -> Result<Vec<SummaryOutput>> {
    let client = Client::new();
    let body = SummarizeRequest {
        inputs: input_text,
        parameters: GenerationParameters {
            min_length: config.min_length,
            max_length: config.max_length,
            truncation: config.truncation,
        },
    };

    let mut request = client.post(config.model_url()).json(&body);

    if let Some(token) = &config.api_token {
        request = request.bearer_auth(token);
    }

    let res = request.send().await?;

    let status = res.status();
    if !status.is_success() {
        let message = res.text().await.unwrap_or_default();
        return Err(AppError::ModelError(format!("{}: {}", status, message)));
    }

    let output = res.json::<Vec<SummaryOutput>>().await?;
    Ok(output)
}
