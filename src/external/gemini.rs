use serde::{Deserialize, Serialize};

use crate::{
    config::GeminiSettings,
    entities::{Coordinates, GroundingChunk},
    error::{empty_response_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    tools: Vec<Tool>,
    tool_config: ToolConfig,
}

#[derive(Clone, Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Clone, Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: GoogleMaps,
}

#[derive(Clone, Debug, Serialize)]
struct GoogleMaps {}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: Coordinates,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

/// Raw model output: the reply text plus its map citations, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideResponse {
    pub text: String,
    pub grounding: Vec<GroundingChunk>,
}

impl From<GenerateContentResponse> for GuideResponse {
    fn from(response: GenerateContentResponse) -> Self {
        let candidate = response.candidates.into_iter().next().unwrap_or_default();

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let grounding = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default();

        Self { text, grounding }
    }
}

/// Asks the model for the guide, grounded on Maps results near `location`.
/// An answer without text or without citations is an error.
#[tracing::instrument(skip(client, settings, prompt))]
pub async fn generate_guide(
    client: &reqwest::Client,
    settings: &GeminiSettings,
    prompt: &str,
    location: Coordinates,
) -> Result<GuideResponse, Error> {
    let body = GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        tools: vec![Tool {
            google_maps: GoogleMaps {},
        }],
        tool_config: ToolConfig {
            retrieval_config: RetrievalConfig { lat_lng: location },
        },
    };

    let res = client
        .post(settings.endpoint())
        .query(&[("key", &settings.api_key)])
        .json(&body)
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code != 200 {
        tracing::warn!(status_code, "generateContent rejected");
        return Err(upstream_error());
    }

    let data: GenerateContentResponse = res.json().await?;
    let response = GuideResponse::from(data);

    if response.text.trim().is_empty() || response.grounding.is_empty() {
        return Err(empty_response_error());
    }

    tracing::info!(
        chars = response.text.len(),
        grounding = response.grounding.len(),
        "received guide"
    );

    Ok(response)
}
