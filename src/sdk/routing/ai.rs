use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::sdk::config::RideConfig;
use crate::sdk::util::rate_limit::Limiter;

use super::error::RideError;
use super::route::Coordinate;
use super::service::RouteSource;

const ROUTE_SYSTEM_PROMPT: &str = "Generate a complete JSON response without truncation in the \
content response field. You are a motorbike route planner. The user is starting from a given \
location and wants to take a scenic ride within a specified distance range. Generate a list of \
waypoints for a motorbike route, with locations that are within 100 to 120 miles of the starting \
point. Describe each waypoint with the following fields: 'name' (location name), 'latitude' \
(latitude in decimal format), 'longitude' (longitude in decimal format). Add the route distance \
in miles in the distance property. Start and finish at the same location and include the start \
and end waypoints. Give preference to more circular routes. Ensure that the JSON is valid and do \
not put any extra characters before or after the JSON in the content field. Do not send an \
incomplete response - ensure the full JSON is sent in the content field. The response should be \
structured as follows: {\"waypoints\": [{\"name\": String, \"latitude\": Double, \"longitude\": \
Double}], \"distance\": Double}";

/// Chat-completion client. Sends fixed-shape requests to the model endpoint
/// and hands back the content text, which is untrusted and parsed elsewhere.
pub struct ChatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    limiter: Limiter,
}

impl ChatClient {
    pub fn new(config: &RideConfig, limiter: Limiter) -> Self {
        Self {
            // Transport defaults only; the model endpoint sets its own pace.
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
            model: config.openai_model.clone(),
            limiter,
        }
    }

    /// Sends a prepared chat body and returns the answer text embedded in
    /// the response envelope. One outbound call, no retry.
    pub async fn complete(&self, body: serde_json::Value) -> Result<String, RideError> {
        self.limiter.until_ready().await;
        let url = format!("{}/chat/completions", self.base_url);
        log::debug!("[CHAT] POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let text = response.text().await?;

        extract_content(&text)
    }

    fn route_request_body(&self, start: Coordinate) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": ROUTE_SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": format!(
                        "Starting location: LATITUDE: {}, LONGITUDE: {}. The trip should be a \
                         scenic ride within 100 to 120 miles of the starting point. Provide the \
                         waypoints in JSON format suitable for road navigation.",
                        start.latitude, start.longitude
                    )
                }
            ],
            "temperature": 0.7,
            "max_tokens": 400,
            "stream": false
        })
    }
}

#[async_trait]
impl RouteSource for ChatClient {
    async fn scenic_route_text(&self, start: Coordinate) -> Result<String, RideError> {
        let body = self.route_request_body(start);
        self.complete(body).await
    }
}

// --- Transport envelope; the content field stays untrusted text ---

#[derive(Deserialize)]
struct ChatEnvelope {
    choices: Vec<ChatChoice>,
}
#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// Pulls `choices[0].message.content` out of the transport envelope.
///
/// The returned string is the model's answer and still has to survive its
/// own parse; a body that is not an envelope with that path is
/// [`RideError::InvalidResponse`], independent of the second decode stage.
pub fn extract_content(body: &str) -> Result<String, RideError> {
    let envelope: ChatEnvelope = serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse chat envelope: {}. Body: {}", e, body);
        RideError::InvalidResponse
    })?;

    envelope
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(RideError::InvalidResponse)
}
