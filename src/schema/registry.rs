//! Process-wide table of the seven predefined pipeline steps.
//!
//! The table is built once on first access and never mutated afterwards.
//! Lookups never fail: any step number outside `1..=7` resolves to the
//! single-field "Custom Step" schema.

use super::definition::{ParameterDefinition, ParameterKind, StepSchema};
use ahash::AHashMap;
use std::sync::LazyLock;

use ParameterKind::{Boolean, Number, Select, Text};

/// Number of predefined pipeline steps.
pub const PREDEFINED_STEPS: u32 = 7;

static CUSTOM_STEP: LazyLock<StepSchema> = LazyLock::new(|| StepSchema {
    title: "Custom Step",
    parameters: vec![ParameterDefinition::new("custom_param", Text)],
});

static REGISTRY: LazyLock<AHashMap<u32, StepSchema>> = LazyLock::new(|| {
    let mut registry = AHashMap::new();
    registry.insert(
        1,
        StepSchema {
            title: "Data Collection",
            parameters: vec![
                ParameterDefinition::new(
                    "source_type",
                    Select(&["csv", "api", "database", "web_scraping"]),
                ),
                ParameterDefinition::new("path", Text),
                ParameterDefinition::new("delimiter", Text),
                ParameterDefinition::new("headers", Boolean),
                ParameterDefinition::new("sample_size", Number),
                ParameterDefinition::new("label_column", Text),
            ],
        },
    );
    registry.insert(
        2,
        StepSchema {
            title: "Data Preprocessing",
            parameters: vec![
                ParameterDefinition::new("missing_data", Select(&["drop", "mean", "median", "mode"])),
                ParameterDefinition::new("categorical_encoding", Select(&["one_hot", "label"])),
                ParameterDefinition::new("feature_scaling", Select(&["standard", "minmax", "none"])),
                ParameterDefinition::new("text_processing", Select(&["tfidf", "count_vectorizer"])),
                ParameterDefinition::new("outlier_removal", Select(&["zscore", "iqr", "none"])),
                ParameterDefinition::new("test_size", Number),
            ],
        },
    );
    registry.insert(
        3,
        StepSchema {
            title: "Model Selection",
            parameters: vec![
                ParameterDefinition::new(
                    "problem_type",
                    Select(&["classification", "regression", "clustering"]),
                ),
                ParameterDefinition::new(
                    "algorithm",
                    Select(&[
                        "random_forest",
                        "logistic_regression",
                        "xgboost",
                        "svm",
                        "knn",
                        "decision_tree",
                        "naive_bayes",
                        "linear_regression",
                        "kmeans",
                        "ridge_regression",
                        "lasso_regression",
                    ]),
                ),
                ParameterDefinition::new("interpretability", Select(&["high", "medium", "low"])),
                ParameterDefinition::new("training_speed", Select(&["fast", "medium", "slow"])),
            ],
        },
    );
    registry.insert(
        4,
        StepSchema {
            title: "Model Training",
            parameters: vec![
                ParameterDefinition::new("n_estimators", Number),
                ParameterDefinition::new("max_depth", Number),
                ParameterDefinition::new("learning_rate", Number),
                ParameterDefinition::new("cross_validation", Number),
                ParameterDefinition::new("early_stopping", Boolean),
                ParameterDefinition::new("random_state", Number),
            ],
        },
    );
    registry.insert(
        5,
        StepSchema {
            title: "Model Evaluation",
            parameters: vec![
                ParameterDefinition::new(
                    "metrics",
                    Select(&[
                        "accuracy", "f1", "roc_auc", "precision", "recall", "mse", "rmse", "r2",
                        "mae",
                    ]),
                ),
                ParameterDefinition::new("confusion_matrix", Boolean),
                ParameterDefinition::new("feature_importance", Boolean),
                ParameterDefinition::new("shap_analysis", Boolean),
            ],
        },
    );
    registry.insert(
        6,
        StepSchema {
            title: "Model Tuning",
            parameters: vec![
                ParameterDefinition::new(
                    "method",
                    Select(&["grid_search", "random_search", "bayesian"]),
                ),
                ParameterDefinition::new("n_iter", Number),
            ],
        },
    );
    registry.insert(
        7,
        StepSchema {
            title: "Deployment",
            parameters: vec![
                ParameterDefinition::new("format", Select(&["flask_api", "fastapi", "pickle"])),
                ParameterDefinition::new("monitoring", Select(&["drift", "performance", "none"])),
            ],
        },
    );
    registry
});

/// Returns the schema for `step`, or the "Custom Step" schema if the step is unknown.
pub fn lookup(step: u32) -> &'static StepSchema {
    REGISTRY.get(&step).unwrap_or(&*CUSTOM_STEP)
}

/// Returns `true` if `step` names one of the predefined pipeline steps.
pub fn is_predefined(step: u32) -> bool {
    REGISTRY.contains_key(&step)
}

/// Iterates the predefined steps in pipeline order.
pub fn steps() -> impl Iterator<Item = (u32, &'static StepSchema)> {
    (1..=PREDEFINED_STEPS).map(|step| (step, lookup(step)))
}

/// The fallback schema used for custom nodes and unknown step numbers.
pub fn custom_schema() -> &'static StepSchema {
    &*CUSTOM_STEP
}
