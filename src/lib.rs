//! Client library for the agile-metrics recommendation service.
//!
//! Encodes a user's organizational profile into the feature vector one of
//! three backend strategies expects, submits it over HTTP, folds the
//! differently-shaped responses into one record type, and tracks the
//! submission lifecycle for the embedding presentation layer.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{
    NormalizationError, RecommendError, RecommendResult, RequestError, ValidationError,
};
pub use models::{
    ProfileSelection, RawResponse, RecommendationRecord, RecommendationSet, Strategy,
    DEFAULT_SIMILARITY_THRESHOLD,
};
pub use services::{
    encode, normalize, FeatureVector, HttpRecommendationClient, RecommendationProvider,
};
pub use session::{FailureKind, RecommendationSession, SessionError, SessionState};

use tracing_subscriber::EnvFilter;

/// Initializes diagnostic logging for the embedding application
///
/// Respects `RUST_LOG`; defaults to `info` for this crate. Safe to call
/// more than once.
pub fn init_diagnostics() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("metrics_recommender=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
