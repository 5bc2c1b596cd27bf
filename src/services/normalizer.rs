/// Response normalization
///
/// Folds the three endpoint payload shapes into one list of
/// `RecommendationRecord`s. Affinity leaves this module on a 0.0-1.0 scale
/// regardless of the strategy that produced it. An empty list is a valid
/// no-match outcome, never an error; the caller distinguishes the two.
use serde_json::Value;

use crate::{
    error::NormalizationError,
    models::{RawResponse, RecommendationRecord, Strategy, WireRecommendation},
};

/// Key the multilabel endpoint may nest its batch result map under.
const MULTILABEL_WRAPPER_KEY: &str = "metric_recommendations";

/// Single-profile submissions occupy index "0" of the multilabel batch map.
const MULTILABEL_BATCH_INDEX: &str = "0";

/// Extracts the uniform record list from a strategy's raw response
pub fn normalize(
    raw: &RawResponse,
    strategy: Strategy,
) -> Result<Vec<RecommendationRecord>, NormalizationError> {
    let items = match strategy {
        Strategy::ContentFilter | Strategy::CollaborativeFiltering => match raw {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            other => return Err(unexpected(strategy, other, "expected a list or null")),
        },
        Strategy::MultiLabelClassification => {
            let map = match raw {
                Value::Object(map) => map,
                other => return Err(unexpected(strategy, other, "expected an object")),
            };

            // The service nests the batch map under a wrapper key alongside
            // an echoed threshold; accept both the bare and wrapped forms.
            let map = match map.get(MULTILABEL_WRAPPER_KEY) {
                Some(Value::Object(inner)) => inner,
                Some(Value::Null) | None => map,
                Some(other) => {
                    return Err(unexpected(strategy, other, "batch wrapper is not an object"))
                }
            };

            match map.get(MULTILABEL_BATCH_INDEX) {
                None | Some(Value::Null) => return Ok(Vec::new()),
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(unexpected(strategy, other, "batch entry is not a list"))
                }
            }
        }
    };

    items
        .iter()
        .map(|item| {
            let wire: WireRecommendation = serde_json::from_value(item.clone()).map_err(|e| {
                NormalizationError::UnexpectedShape {
                    strategy,
                    detail: format!("undecodable record: {}", e),
                }
            })?;
            Ok(wire.into_record(strategy))
        })
        .collect()
}

fn unexpected(strategy: Strategy, value: &Value, detail: &str) -> NormalizationError {
    NormalizationError::UnexpectedShape {
        strategy,
        detail: format!("{}, got {}", detail, json_kind(value)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
