pub mod encoder;
pub mod normalizer;
pub mod providers;

pub use encoder::{encode, FeatureVector};
pub use normalizer::normalize;
pub use providers::http::HttpRecommendationClient;
pub use providers::RecommendationProvider;
