//! Builder for `EligibilityEngine`

use std::sync::Arc;

use eligo_repository::RulesRepository;
use eligo_runtime::{BooleanRuleEngine, RuleEvaluator};

use crate::engine::EligibilityEngine;
use crate::error::{Result, SdkError};

/// Wires a repository and an evaluator into an [`EligibilityEngine`].
///
/// The repository is required; the evaluator defaults to the shipped
/// [`BooleanRuleEngine`].
#[derive(Default)]
pub struct EligibilityEngineBuilder {
    repository: Option<Arc<dyn RulesRepository>>,
    evaluator: Option<Arc<dyn RuleEvaluator>>,
}

impl EligibilityEngineBuilder {
    pub fn new() -> Self {
        EligibilityEngineBuilder::default()
    }

    /// Set the rule-row source
    pub fn with_repository(mut self, repository: Arc<dyn RulesRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set the evaluation engine
    pub fn with_evaluator(mut self, evaluator: Arc<dyn RuleEvaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Build the engine; a missing repository is a configuration error
    pub fn build(self) -> Result<EligibilityEngine> {
        let repository = self
            .repository
            .ok_or_else(|| SdkError::Config("a rules repository is required".to_string()))?;
        let evaluator = self
            .evaluator
            .unwrap_or_else(|| Arc::new(BooleanRuleEngine::new()));

        Ok(EligibilityEngine::new(repository, evaluator))
    }
}
