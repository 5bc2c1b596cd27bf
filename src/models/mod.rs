use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod options;
pub mod selection;

pub use selection::{ProfileSelection, DEFAULT_SIMILARITY_THRESHOLD};

/// Backend recommendation strategy
///
/// Each variant maps to one endpoint path and one request/response
/// contract. This enum is the only place that mapping lives; call sites
/// never hardcode paths, defaults, or response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plain content-based filtering over the profile features
    ContentFilter,
    /// Multi-label classification into metric categories
    MultiLabelClassification,
    /// Collaborative filtering by similarity to stored profiles
    CollaborativeFiltering,
}

impl Strategy {
    /// Endpoint path relative to the configured base URL
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Strategy::ContentFilter => "/recommend_metrics",
            Strategy::MultiLabelClassification => "/recommend_metrics_multilabel",
            Strategy::CollaborativeFiltering => "/recommend_metrics_collaborative",
        }
    }

    /// Default result limit for strategies that bound the result count
    pub fn default_top_n(&self) -> Option<u32> {
        match self {
            Strategy::ContentFilter => Some(8),
            Strategy::MultiLabelClassification => None,
            Strategy::CollaborativeFiltering => Some(5),
        }
    }

    /// Whether the request carries the category indicator block
    pub fn sends_categories(&self) -> bool {
        matches!(
            self,
            Strategy::ContentFilter | Strategy::CollaborativeFiltering
        )
    }

    /// Whether the strategy rejects empty method and ritual sets
    pub fn requires_practices(&self) -> bool {
        matches!(
            self,
            Strategy::MultiLabelClassification | Strategy::CollaborativeFiltering
        )
    }

    /// Whether response affinities arrive on a 0-100 scale instead of 0.0-1.0
    pub fn percent_scaled_affinity(&self) -> bool {
        matches!(self, Strategy::CollaborativeFiltering)
    }

    /// User-facing message for a valid empty result
    pub fn empty_message(&self) -> &'static str {
        match self {
            Strategy::MultiLabelClassification => "Nenhuma métrica recomendada.",
            Strategy::ContentFilter | Strategy::CollaborativeFiltering => {
                "Nenhum perfil encontrado com similaridade suficiente. Tente fornecer mais informações."
            }
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::ContentFilter => "content_filter",
            Strategy::MultiLabelClassification => "multi_label_classification",
            Strategy::CollaborativeFiltering => "collaborative_filtering",
        };
        write!(f, "{}", name)
    }
}

/// Raw decoded response body, prior to shape interpretation
pub type RawResponse = serde_json::Value;

/// One recommended metric, normalized across strategies
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationRecord {
    pub metric: String,
    /// Affinity on a 0.0-1.0 scale regardless of source strategy; the
    /// presentation layer multiplies by 100 for display.
    pub affinity: f64,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Index of the similar stored profile (collaborative only).
    pub source_profile_index: Option<i64>,
}

/// A batch of recommendations from one successful submission
///
/// Discarded wholesale when the next submission starts validating.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationSet {
    pub records: Vec<RecommendationRecord>,
    pub received_at: DateTime<Utc>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// A recommendation record as the endpoints emit it
#[derive(Debug, Clone, Deserialize)]
pub struct WireRecommendation {
    pub metric: String,
    pub affinity: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub similar_profile_index: Option<i64>,
}

impl WireRecommendation {
    /// Converts to the internal record, rescaling percent affinities to
    /// the 0.0-1.0 unit
    pub fn into_record(self, strategy: Strategy) -> RecommendationRecord {
        let affinity = if strategy.percent_scaled_affinity() {
            self.affinity / 100.0
        } else {
            self.affinity
        };

        RecommendationRecord {
            metric: self.metric,
            affinity: affinity.clamp(0.0, 1.0),
            category: self.category,
            description: self.description,
            source_profile_index: self.similar_profile_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths_are_distinct() {
        assert_eq!(Strategy::ContentFilter.endpoint_path(), "/recommend_metrics");
        assert_eq!(
            Strategy::MultiLabelClassification.endpoint_path(),
            "/recommend_metrics_multilabel"
        );
        assert_eq!(
            Strategy::CollaborativeFiltering.endpoint_path(),
            "/recommend_metrics_collaborative"
        );
    }

    #[test]
    fn test_default_top_n() {
        assert_eq!(Strategy::ContentFilter.default_top_n(), Some(8));
        assert_eq!(Strategy::MultiLabelClassification.default_top_n(), None);
        assert_eq!(Strategy::CollaborativeFiltering.default_top_n(), Some(5));
    }

    #[test]
    fn test_strategy_serde() {
        let json = serde_json::to_string(&Strategy::CollaborativeFiltering).unwrap();
        assert_eq!(json, r#""collaborative_filtering""#);

        let deserialized: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Strategy::CollaborativeFiltering);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(format!("{}", Strategy::ContentFilter), "content_filter");
    }

    #[test]
    fn test_into_record_fractional_scale() {
        let wire = WireRecommendation {
            metric: "Lead Time".to_string(),
            affinity: 0.82,
            category: Some("Processo".to_string()),
            description: None,
            similar_profile_index: None,
        };

        let record = wire.into_record(Strategy::MultiLabelClassification);
        assert_eq!(record.affinity, 0.82);
        assert_eq!(record.category.as_deref(), Some("Processo"));
    }

    #[test]
    fn test_into_record_percent_scale() {
        let wire = WireRecommendation {
            metric: "Velocity".to_string(),
            affinity: 73.5,
            category: None,
            description: Some("Story points per sprint".to_string()),
            similar_profile_index: Some(42),
        };

        let record = wire.into_record(Strategy::CollaborativeFiltering);
        assert_eq!(record.affinity, 0.735);
        assert_eq!(record.source_profile_index, Some(42));
    }

    #[test]
    fn test_into_record_clamps_out_of_range() {
        let wire = WireRecommendation {
            metric: "Throughput".to_string(),
            affinity: 120.0,
            category: None,
            description: None,
            similar_profile_index: None,
        };

        let record = wire.into_record(Strategy::CollaborativeFiltering);
        assert_eq!(record.affinity, 1.0);
    }

    #[test]
    fn test_wire_record_deserialization_minimal() {
        let json = r#"{"metric": "Cycle Time", "affinity": 0.6}"#;
        let wire: WireRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(wire.metric, "Cycle Time");
        assert!(wire.category.is_none());
        assert!(wire.similar_profile_index.is_none());
    }
}
