//! Semantic emergency-likelihood confidence from a hosted classifier.
//!
//! Builds a short prompt from region, hazard, and the resolved weather, and
//! reads the top-label score from the Hugging Face inference router.

use async_trait::async_trait;
use serde::Deserialize;

use risk_engine::{HazardType, Region, SemanticSignal, WeatherSnapshot};

use crate::hub::SemanticSource;
use crate::SourceError;

const HF_ROUTER_URL: &str =
    "https://router.huggingface.co/api-inference/models/AventIQ-AI/Bert-Disaster-SOS-Message-Classifier";

/// Hugging Face inference client. Without a token every fetch fails fast
/// and the caller substitutes the neutral 0.5 confidence.
pub struct SemanticClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Classification {
    score: f64,
}

/// The router returns either a flat label list or one list per input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifierResponse {
    Flat(Vec<Classification>),
    Nested(Vec<Vec<Classification>>),
}

impl ClassifierResponse {
    fn top_score(&self) -> Option<f64> {
        match self {
            Self::Flat(labels) => labels.first().map(|c| c.score),
            Self::Nested(batches) => batches.first().and_then(|b| b.first()).map(|c| c.score),
        }
    }
}

impl SemanticClient {
    pub fn new(client: reqwest::Client, token: Option<String>) -> Self {
        Self {
            client,
            endpoint: HF_ROUTER_URL.to_string(),
            token,
        }
    }

    pub async fn classify(
        &self,
        region: &Region,
        hazard: &HazardType,
        weather: &WeatherSnapshot,
    ) -> Result<SemanticSignal, SourceError> {
        let token = self
            .token
            .as_deref()
            .ok_or(SourceError::MissingCredential("HF_TOKEN"))?;

        let prompt = build_prompt(region, hazard, weather);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::ApiStatus(response.status().as_u16()));
        }

        let parsed: ClassifierResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        let score = parsed
            .top_score()
            .ok_or_else(|| SourceError::Parse("empty classifier output".to_string()))?;

        Ok(SemanticSignal::new(score))
    }
}

fn build_prompt(region: &Region, hazard: &HazardType, weather: &WeatherSnapshot) -> String {
    format!(
        "{} emergency in {}, weather: {:.1}C, {:.0}% humidity, {:.1}mm precipitation, {:.1} km/h wind",
        hazard.label(),
        region.name,
        weather.temperature_or_default(),
        weather.humidity_or_default(),
        weather.precipitation_or_default(),
        weather.wind_speed_or_default(),
    )
}

#[async_trait]
impl SemanticSource for SemanticClient {
    async fn fetch_confidence(
        &self,
        region: &Region,
        hazard: &HazardType,
        weather: &WeatherSnapshot,
    ) -> Result<SemanticSignal, SourceError> {
        self.classify(region, hazard, weather).await
    }
}
