/// Feature encoding
///
/// Maps a validated `ProfileSelection` snapshot onto the flat feature
/// vector a strategy's endpoint expects. Field names and the 1/0 indicator
/// scheme come from the backend training data and must not drift.
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::{
    error::ValidationError,
    models::{
        options::{self, categories, methods, rituals},
        ProfileSelection, Strategy,
    },
};

/// Flat request payload for one submission
///
/// Serialized field order is fixed by declaration order, so the same
/// selection and strategy always produce identical bytes. Optional blocks
/// are omitted entirely for strategies that do not transmit them; indicator
/// fields a strategy does transmit are always present, 0 when unselected.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureVector {
    pub role: String,
    pub years_exp: String,
    pub org_size: String,
    pub use_metrics_planning: u8,
    pub use_metrics_review: u8,
    pub use_metrics_weekly: u8,
    pub use_metrics_daily: u8,
    pub use_metrics_retro: u8,
    pub agile_methods_scrum: u8,
    pub agile_methods_kanban: u8,
    pub agile_methods_scrumban: u8,
    pub agile_methods_xp: u8,
    pub agile_methods_safe: u8,
    pub agile_methods_lean: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_category_cronograma_e_progresso: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_category_produto: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_category_processo: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_category_tecnologia: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_category_cliente: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_category_pessoas: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_weights: Option<BTreeMap<String, f64>>,
}

/// Encodes a selection into the feature vector for one strategy
///
/// Validation happens entirely here, before any network activity: required
/// categorical fields must be registry members, selected set values must be
/// registry members, and the multi-label and collaborative strategies
/// reject empty method or ritual sets.
pub fn encode(
    selection: &ProfileSelection,
    strategy: Strategy,
) -> Result<FeatureVector, ValidationError> {
    let role = required_member("role", selection.role.as_deref(), options::ROLES)?;
    let years_exp = required_member(
        "experience_bracket",
        selection.experience_bracket.as_deref(),
        options::EXPERIENCE_BRACKETS,
    )?;

    let org_size_raw = match selection.company_size.as_deref() {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(ValidationError::MissingField("company_size")),
    };
    let org_size = options::strip_size_qualifier(org_size_raw);
    if !options::known(options::COMPANY_SIZES, org_size) {
        return Err(ValidationError::UnknownValue {
            field: "company_size",
            value: org_size_raw.to_string(),
        });
    }

    check_members("agile_methods", &selection.agile_methods, options::AGILE_METHODS)?;
    check_members("rituals", &selection.rituals, options::RITUALS)?;
    check_members("categories", &selection.categories, options::CATEGORIES)?;

    if strategy.requires_practices() {
        if selection.agile_methods.is_empty() {
            return Err(ValidationError::MissingField("agile_methods"));
        }
        if selection.rituals.is_empty() {
            return Err(ValidationError::MissingField("rituals"));
        }
    }

    let top_n = match strategy.default_top_n() {
        Some(default) => {
            let top_n = selection.top_n.unwrap_or(default);
            if top_n == 0 {
                return Err(ValidationError::NonPositive("top_n"));
            }
            Some(top_n)
        }
        None => None,
    };

    let threshold = matches!(strategy, Strategy::MultiLabelClassification)
        .then(|| (f64::from(selection.similarity_threshold) / 100.0).clamp(0.0, 1.0));

    let feature_weights = matches!(strategy, Strategy::CollaborativeFiltering)
        .then(|| selection.feature_weights.clone())
        .flatten();

    let ritual = |label: &str| u8::from(selection.rituals.contains(label));
    let method = |label: &str| u8::from(selection.agile_methods.contains(label));
    let category = |label: &str| {
        strategy
            .sends_categories()
            .then(|| u8::from(selection.categories.contains(label)))
    };

    Ok(FeatureVector {
        role: role.to_string(),
        years_exp: years_exp.to_string(),
        org_size: org_size.to_string(),
        use_metrics_planning: ritual(rituals::PLANNING),
        use_metrics_review: ritual(rituals::REVIEW),
        use_metrics_weekly: ritual(rituals::WEEKLY),
        use_metrics_daily: ritual(rituals::DAILY),
        use_metrics_retro: ritual(rituals::RETRO),
        agile_methods_scrum: method(methods::SCRUM),
        agile_methods_kanban: method(methods::KANBAN),
        agile_methods_scrumban: method(methods::SCRUMBAN),
        agile_methods_xp: method(methods::XP),
        agile_methods_safe: method(methods::SAFE),
        agile_methods_lean: method(methods::LEAN),
        metrics_category_cronograma_e_progresso: category(categories::SCHEDULE),
        metrics_category_produto: category(categories::PRODUCT),
        metrics_category_processo: category(categories::PROCESS),
        metrics_category_tecnologia: category(categories::TECHNOLOGY),
        metrics_category_cliente: category(categories::CUSTOMER),
        metrics_category_pessoas: category(categories::PEOPLE),
        top_n,
        threshold,
        feature_weights,
    })
}

fn required_member<'a>(
    field: &'static str,
    value: Option<&'a str>,
    table: &[&str],
) -> Result<&'a str, ValidationError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(ValidationError::MissingField(field)),
    };

    if !options::known(table, value) {
        return Err(ValidationError::UnknownValue {
            field,
            value: value.to_string(),
        });
    }

    Ok(value)
}

fn check_members(
    field: &'static str,
    values: &BTreeSet<String>,
    table: &[&str],
) -> Result<(), ValidationError> {
    for value in values {
        if !options::known(table, value) {
            return Err(ValidationError::UnknownValue {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_selection() -> ProfileSelection {
        ProfileSelection::new()
            .with_role("Scrum master")
            .with_experience_bracket("6 a 9")
            .with_company_size("Grande empresa (>500 empregados)")
            .with_agile_methods(["Scrum", "Kanban"])
            .with_rituals(["Retrospectiva", "Sprint Review"])
            .with_categories(["Eficiência dos Processos"])
    }

    #[test]
    fn test_encode_is_deterministic() {
        let selection = complete_selection();
        let first = encode(&selection, Strategy::ContentFilter).unwrap();
        let second = encode(&selection, Strategy::ContentFilter).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_encode_content_filter_exact_payload() {
        let vector = encode(&complete_selection(), Strategy::ContentFilter).unwrap();
        let json = serde_json::to_string(&vector).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"role":"Scrum master","years_exp":"6 a 9","org_size":"Grande empresa","#,
                r#""use_metrics_planning":0,"use_metrics_review":1,"use_metrics_weekly":0,"#,
                r#""use_metrics_daily":0,"use_metrics_retro":1,"#,
                r#""agile_methods_scrum":1,"agile_methods_kanban":1,"agile_methods_scrumban":0,"#,
                r#""agile_methods_xp":0,"agile_methods_safe":0,"agile_methods_lean":0,"#,
                r#""metrics_category_cronograma_e_progresso":0,"metrics_category_produto":0,"#,
                r#""metrics_category_processo":1,"metrics_category_tecnologia":0,"#,
                r#""metrics_category_cliente":0,"metrics_category_pessoas":0,"top_n":8}"#
            )
        );
    }

    #[test]
    fn test_encode_strips_company_size_qualifier() {
        let vector = encode(&complete_selection(), Strategy::CollaborativeFiltering).unwrap();
        assert_eq!(vector.org_size, "Grande empresa");

        let selection = complete_selection().with_company_size("Pequena empresa");
        let vector = encode(&selection, Strategy::CollaborativeFiltering).unwrap();
        assert_eq!(vector.org_size, "Pequena empresa");
    }

    #[test]
    fn test_encode_multilabel_threshold_mapping() {
        for (ui, wire) in [(50u8, 0.5f64), (0, 0.0), (100, 1.0), (82, 0.82)] {
            let selection = complete_selection().with_similarity_threshold(ui);
            let vector = encode(&selection, Strategy::MultiLabelClassification).unwrap();
            assert_eq!(vector.threshold, Some(wire));
        }
    }

    #[test]
    fn test_encode_multilabel_omits_categories_and_top_n() {
        let vector = encode(&complete_selection(), Strategy::MultiLabelClassification).unwrap();
        assert!(vector.metrics_category_processo.is_none());
        assert!(vector.top_n.is_none());

        let json = serde_json::to_string(&vector).unwrap();
        assert!(!json.contains("metrics_category"));
        assert!(!json.contains("top_n"));
        assert!(json.contains(r#""threshold":0.5"#));
    }

    #[test]
    fn test_encode_list_strategies_omit_threshold() {
        for strategy in [Strategy::ContentFilter, Strategy::CollaborativeFiltering] {
            let vector = encode(&complete_selection(), strategy).unwrap();
            assert!(vector.threshold.is_none());
        }
    }

    #[test]
    fn test_encode_people_category_indicator() {
        let selection = complete_selection().with_categories(["Gestão de Equipes"]);
        let vector = encode(&selection, Strategy::ContentFilter).unwrap();
        assert_eq!(vector.metrics_category_pessoas, Some(1));
        assert_eq!(vector.metrics_category_cliente, Some(0));
    }

    #[test]
    fn test_encode_top_n_defaults_per_strategy() {
        let vector = encode(&complete_selection(), Strategy::ContentFilter).unwrap();
        assert_eq!(vector.top_n, Some(8));

        let vector = encode(&complete_selection(), Strategy::CollaborativeFiltering).unwrap();
        assert_eq!(vector.top_n, Some(5));

        let selection = complete_selection().with_top_n(3);
        let vector = encode(&selection, Strategy::CollaborativeFiltering).unwrap();
        assert_eq!(vector.top_n, Some(3));
    }

    #[test]
    fn test_encode_rejects_zero_top_n() {
        let selection = complete_selection().with_top_n(0);
        let result = encode(&selection, Strategy::ContentFilter);
        assert_eq!(result, Err(ValidationError::NonPositive("top_n")));
    }

    #[test]
    fn test_encode_rejects_missing_role() {
        let mut selection = complete_selection();
        selection.role = None;
        let result = encode(&selection, Strategy::ContentFilter);
        assert_eq!(result, Err(ValidationError::MissingField("role")));
    }

    #[test]
    fn test_encode_rejects_blank_experience() {
        let selection = complete_selection().with_experience_bracket("  ");
        let result = encode(&selection, Strategy::ContentFilter);
        assert_eq!(
            result,
            Err(ValidationError::MissingField("experience_bracket"))
        );
    }

    #[test]
    fn test_encode_rejects_unknown_company_size() {
        let selection = complete_selection().with_company_size("Multinacional");
        let result = encode(&selection, Strategy::ContentFilter);
        assert_eq!(
            result,
            Err(ValidationError::UnknownValue {
                field: "company_size",
                value: "Multinacional".to_string(),
            })
        );
    }

    #[test]
    fn test_encode_rejects_unknown_method() {
        let selection = complete_selection().with_agile_methods(["Scrum", "Waterfall"]);
        let result = encode(&selection, Strategy::ContentFilter);
        assert_eq!(
            result,
            Err(ValidationError::UnknownValue {
                field: "agile_methods",
                value: "Waterfall".to_string(),
            })
        );
    }

    #[test]
    fn test_encode_empty_practices_by_strategy() {
        let selection = complete_selection()
            .with_agile_methods(Vec::<String>::new())
            .with_rituals(Vec::<String>::new());

        // Content filtering tolerates empty sets.
        assert!(encode(&selection, Strategy::ContentFilter).is_ok());

        assert_eq!(
            encode(&selection, Strategy::MultiLabelClassification),
            Err(ValidationError::MissingField("agile_methods"))
        );
        assert_eq!(
            encode(&selection, Strategy::CollaborativeFiltering),
            Err(ValidationError::MissingField("agile_methods"))
        );

        let selection = selection.with_agile_methods(["Scrum"]);
        assert_eq!(
            encode(&selection, Strategy::CollaborativeFiltering),
            Err(ValidationError::MissingField("rituals"))
        );
    }

    #[test]
    fn test_encode_feature_weights_collaborative_only() {
        let weights = std::collections::BTreeMap::from([("role".to_string(), 2.0)]);
        let selection = complete_selection().with_feature_weights(weights);

        let vector = encode(&selection, Strategy::CollaborativeFiltering).unwrap();
        assert!(vector.feature_weights.is_some());

        let vector = encode(&selection, Strategy::ContentFilter).unwrap();
        assert!(vector.feature_weights.is_none());
    }

    #[test]
    fn test_encode_absent_indicators_are_zero_not_omitted() {
        let selection = complete_selection()
            .with_agile_methods(Vec::<String>::new())
            .with_rituals(Vec::<String>::new());
        let json =
            serde_json::to_string(&encode(&selection, Strategy::ContentFilter).unwrap()).unwrap();

        assert!(json.contains(r#""use_metrics_daily":0"#));
        assert!(json.contains(r#""agile_methods_lean":0"#));
    }
}
