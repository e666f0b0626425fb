//! EligibilityEngine - the evaluation-request orchestrator

use std::collections::HashMap;
use std::sync::Arc;

use eligo_core::assemble;
use eligo_repository::RulesRepository;
use eligo_runtime::RuleEvaluator;
use tracing::{debug, info};

use crate::error::Result;

/// Orchestrates one eligibility evaluation: fetch the workflow's rows,
/// assemble the rule tree, evaluate the subject batch, reduce the
/// outcomes to a `rule name -> bool` mapping keyed by root rule.
///
/// Every call is all-or-nothing and self-contained: rows are fetched
/// fresh, the tree is request-scoped, and a failure at any stage discards
/// the whole request. Nothing is cached across calls.
pub struct EligibilityEngine {
    repository: Arc<dyn RulesRepository>,
    evaluator: Arc<dyn RuleEvaluator>,
}

impl std::fmt::Debug for EligibilityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityEngine").finish_non_exhaustive()
    }
}

impl EligibilityEngine {
    pub fn new(repository: Arc<dyn RulesRepository>, evaluator: Arc<dyn RuleEvaluator>) -> Self {
        EligibilityEngine {
            repository,
            evaluator,
        }
    }

    /// Evaluate one subject batch against a workflow.
    ///
    /// The mapping carries one entry per root rule the engine reported on;
    /// a root the engine stays silent about is omitted, never defaulted to
    /// false. Transient row-source failures were already retried inside
    /// the repository; assembly failures are data-quality failures and
    /// must not be retried at all.
    pub async fn evaluate(
        &self,
        workflow_name: &str,
        subjects: &[String],
    ) -> Result<HashMap<String, bool>> {
        let rows = self.repository.fetch_rows(workflow_name).await?;
        debug!(
            "fetched {} rule rows for workflow '{}'",
            rows.len(),
            workflow_name
        );

        let tree = assemble(&rows)?;

        let outcomes = self.evaluator.evaluate(&tree, subjects).await?;
        info!(
            "workflow '{}': {} root rules evaluated against {} subjects",
            workflow_name,
            outcomes.len(),
            subjects.len()
        );

        Ok(outcomes
            .into_iter()
            .map(|outcome| (outcome.rule_name, outcome.passed))
            .collect())
    }
}
