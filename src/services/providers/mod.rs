/// Recommendation transport abstraction
///
/// The seam between orchestration and transport: the session drives a
/// provider without knowing how submissions travel, and tests swap in a
/// mock without a live service.
use crate::{
    error::RequestError,
    models::{RawResponse, Strategy},
    services::encoder::FeatureVector,
};

pub mod http;

/// Trait for recommendation transports
///
/// One invocation issues exactly one outbound call; there are no retries,
/// and transient failures are terminal for the current submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Submit one encoded profile to the strategy's endpoint
    ///
    /// Returns the decoded response body; shape interpretation belongs to
    /// the normalizer.
    async fn submit(
        &self,
        vector: &FeatureVector,
        strategy: Strategy,
    ) -> Result<RawResponse, RequestError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
