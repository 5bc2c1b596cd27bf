use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::Config;

/// Default similarity threshold in UI units (0-100).
pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 50;

/// A snapshot of the user's profile form
///
/// The presentation layer holds exactly one value and replaces it wholesale
/// through the `with_*` builders on every field edit, so the encoder always
/// sees a complete, consistent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSelection {
    pub role: Option<String>,
    pub experience_bracket: Option<String>,
    pub company_size: Option<String>,
    pub agile_methods: BTreeSet<String>,
    pub rituals: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    /// Similarity threshold in UI units (0-100); transmitted as a 0.0-1.0
    /// fraction where the strategy uses it.
    pub similarity_threshold: u8,
    /// Maximum number of recommendations; `None` falls back to the
    /// strategy default.
    pub top_n: Option<u32>,
    /// Per-feature similarity weights for the collaborative endpoint.
    pub feature_weights: Option<BTreeMap<String, f64>>,
}

impl Default for ProfileSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSelection {
    /// Creates an empty selection with default control parameters
    pub fn new() -> Self {
        Self {
            role: None,
            experience_bracket: None,
            company_size: None,
            agile_methods: BTreeSet::new(),
            rituals: BTreeSet::new(),
            categories: BTreeSet::new(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_n: None,
            feature_weights: None,
        }
    }

    /// Creates an empty selection seeded with the configured threshold
    pub fn from_config(config: &Config) -> Self {
        Self {
            similarity_threshold: config.similarity_threshold,
            ..Self::new()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_experience_bracket(mut self, bracket: impl Into<String>) -> Self {
        self.experience_bracket = Some(bracket.into());
        self
    }

    pub fn with_company_size(mut self, size: impl Into<String>) -> Self {
        self.company_size = Some(size.into());
        self
    }

    pub fn with_agile_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agile_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rituals<I, S>(mut self, rituals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rituals = rituals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: u8) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: u32) -> Self {
        self.top_n = Some(top_n);
        self
    }

    pub fn with_feature_weights(mut self, weights: BTreeMap<String, f64>) -> Self {
        self.feature_weights = Some(weights);
        self
    }
}
