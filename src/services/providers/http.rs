/// HTTP recommendation provider
///
/// Posts the encoded feature vector to the strategy's endpoint and decodes
/// the body to JSON. This layer only distinguishes transport, status, and
/// decode failures; payload shape interpretation happens in the normalizer.
use reqwest::Client as HttpClient;
use std::time::Duration;

use crate::{
    config::Config,
    error::RequestError,
    models::{RawResponse, Strategy},
    services::{encoder::FeatureVector, providers::RecommendationProvider},
};

#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendationClient {
    /// Creates a client for the configured recommendation service
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.recommender_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, strategy: Strategy) -> String {
        format!("{}{}", self.base_url, strategy.endpoint_path())
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationClient {
    async fn submit(
        &self,
        vector: &FeatureVector,
        strategy: Strategy,
    ) -> Result<RawResponse, RequestError> {
        let url = self.endpoint_url(strategy);

        let response = self
            .http_client
            .post(&url)
            .json(vector)
            .send()
            .await
            .map_err(RequestError::NetworkFailure)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                strategy = %strategy,
                body = %body,
                "Recommendation endpoint rejected the request"
            );
            return Err(RequestError::HttpFailure(status.as_u16()));
        }

        let body = response.text().await.map_err(RequestError::NetworkFailure)?;
        let raw: RawResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                strategy = %strategy,
                "Recommendation response is not valid JSON"
            );
            RequestError::MalformedResponse(e)
        })?;

        tracing::info!(
            strategy = %strategy,
            status = status.as_u16(),
            provider = "http",
            "Recommendation request completed"
        );

        Ok(raw)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
