use crate::models::Strategy;

/// Pre-flight validation failures
///
/// Raised by the feature encoder before any network activity; the user can
/// recover by correcting the form input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown value for {field}: {value}")]
    UnknownValue { field: &'static str, value: String },

    #[error("{0} must be a positive integer")]
    NonPositive(&'static str),
}

/// Transport and HTTP-level failures from the recommendation service
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("network failure: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    #[error("recommendation endpoint returned HTTP {0}")]
    HttpFailure(u16),

    #[error("response body is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Contract mismatches: the body decoded as JSON but matches neither shape
/// the strategy is known to produce
#[derive(thiserror::Error, Debug)]
pub enum NormalizationError {
    #[error("unexpected {strategy} response shape: {detail}")]
    UnexpectedShape { strategy: Strategy, detail: String },
}

/// Any failure that ends the current submission cycle
///
/// None of these are retried automatically; the next user-initiated
/// submission starts a fresh cycle.
#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("request failed: {0}")]
    Request(#[from] RequestError),

    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizationError),
}

pub type RecommendResult<T> = Result<T, RecommendError>;
