//! IBM watsonx text-generation tier.

use serde::{Deserialize, Serialize};

use super::{GenerateOptions, ProviderError, TextGenerator};

/// IBM watsonx client. Needs both an API key and a deployment URL;
/// missing either leaves the tier unconfigured.
pub struct WatsonxClient {
    api_key: Option<String>,
    url: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl WatsonxClient {
    pub fn new(api_key: Option<String>, url: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            url: url
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
            client,
            timeout_secs,
        }
    }
}

#[derive(Serialize)]
struct WatsonGenerateRequest<'a> {
    input: &'a str,
    parameters: WatsonParameters,
}

#[derive(Serialize)]
struct WatsonParameters {
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct WatsonGenerateResponse {
    #[serde(default)]
    results: Vec<WatsonResult>,
}

#[derive(Deserialize)]
struct WatsonResult {
    #[serde(default)]
    generated_text: String,
}

impl TextGenerator for WatsonxClient {
    fn label(&self) -> &'static str {
        "ibm-watson"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.url.is_some()
    }

    fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, ProviderError> {
        let (api_key, url) = match (&self.api_key, &self.url) {
            (Some(key), Some(url)) => (key, url),
            _ => return Err(ProviderError::NotConfigured),
        };

        let endpoint = format!("{url}/ml/v1/text/generation");
        let body = WatsonGenerateRequest {
            input: prompt,
            parameters: WatsonParameters {
                max_new_tokens: options.max_length,
                temperature: options.temperature,
            },
        };

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::Connection(url.clone())
                } else if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_secs)
                } else {
                    ProviderError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: WatsonGenerateResponse = response
            .json()
            .map_err(|e| ProviderError::ResponseParsing(e.to_string()))?;

        let generated = parsed
            .results
            .first()
            .map(|r| r.generated_text.trim().to_string())
            .unwrap_or_default();

        if generated.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(generated)
    }
}
