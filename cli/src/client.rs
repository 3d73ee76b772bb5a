//! Blocking HTTP clients for the hosted vision, chart, and narration
//! services, all speaking the chat-completions wire format.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

use undoc::{ChartService, Error, NarrationService, Result, VisionService};

/// VLM endpoint that describes an image in plain English.
pub const DESCRIBE_ENDPOINT: &str = "https://ai.api.nvidia.com/v1/vlm/nvidia/neva-22b";

/// VLM endpoint that linearizes a chart into a data table.
pub const DEPLOT_ENDPOINT: &str = "https://ai.api.nvidia.com/v1/vlm/google/deplot";

/// Chat endpoint used to narrate linearized tables.
pub const CHAT_ENDPOINT: &str = "https://integrate.api.nvidia.com/v1/chat/completions";

/// Default narration model.
pub const NARRATION_MODEL: &str = "mistralai/mixtral-8x7b-instruct-v0.1";

/// Shared POST-and-parse plumbing for the chat-style endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl ApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Service(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    fn invoke(&self, endpoint: &str, payload: Value) -> Result<String> {
        let response = self
            .http
            .post(endpoint)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| Error::Service(format!("request to {endpoint} failed: {e}")))?
            .error_for_status()
            .map_err(|e| Error::Service(format!("{endpoint} rejected the request: {e}")))?;

        let body: Value = response
            .json()
            .map_err(|e| Error::Service(format!("invalid JSON from {endpoint}: {e}")))?;

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::Service(format!("unexpected response shape from {endpoint}")))
    }
}

/// Image description backed by a hosted VLM.
pub struct RemoteVision {
    client: ApiClient,
    endpoint: String,
}

impl RemoteVision {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            endpoint: DESCRIBE_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(client: ApiClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl VisionService for RemoteVision {
    fn describe(&self, image: &[u8]) -> Result<String> {
        let image_b64 = STANDARD.encode(image);
        let payload = json!({
            "messages": [{
                "role": "user",
                "content": format!(
                    "Describe what you see in this image. \
                     <img src=\"data:image/png;base64,{image_b64}\" />"
                ),
            }],
            "max_tokens": 1024,
            "temperature": 0.20,
            "top_p": 0.70,
            "seed": 0,
            "stream": false,
        });
        self.client.invoke(&self.endpoint, payload)
    }
}

/// Chart-to-table extraction backed by a hosted deplot model.
pub struct RemoteChart {
    client: ApiClient,
    endpoint: String,
}

impl RemoteChart {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            endpoint: DEPLOT_ENDPOINT.to_string(),
        }
    }
}

impl ChartService for RemoteChart {
    fn deplot(&self, image: &[u8]) -> Result<String> {
        let image_b64 = STANDARD.encode(image);
        let payload = json!({
            "messages": [{
                "role": "user",
                "content": format!(
                    "Generate underlying data table of the figure below: \
                     <img src=\"data:image/png;base64,{image_b64}\" />"
                ),
            }],
            "max_tokens": 1024,
            "temperature": 0.20,
            "top_p": 0.20,
            "stream": false,
        });
        self.client.invoke(&self.endpoint, payload)
    }
}

/// Table narration backed by a hosted chat model.
pub struct RemoteNarration {
    client: ApiClient,
    endpoint: String,
    model: String,
}

impl RemoteNarration {
    pub fn new(client: ApiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: CHAT_ENDPOINT.to_string(),
            model: model.into(),
        }
    }
}

impl NarrationService for RemoteNarration {
    fn narrate(&self, table_text: &str) -> Result<String> {
        let payload = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": format!(
                    "Your responsibility is to explain charts. You are an expert in \
                     describing the responses of linearized tables into plain English \
                     text for LLMs to use. Explain the following linearized table. \
                     {table_text}"
                ),
            }],
            "max_tokens": 1024,
            "stream": false,
        });
        self.client.invoke(&self.endpoint, payload)
    }
}
