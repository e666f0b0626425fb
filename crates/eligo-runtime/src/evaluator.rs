//! Evaluation-engine contract consumed by the orchestrator

use async_trait::async_trait;
use eligo_core::RuleTree;
use serde::{Deserialize, Serialize};

use crate::error::RuntimeResult;

/// Boolean verdict for one root rule over one subject batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Root rule the verdict belongs to
    pub rule_name: String,

    /// Whether the batch satisfied the rule
    pub passed: bool,
}

impl RuleOutcome {
    pub fn new(rule_name: String, passed: bool) -> Self {
        RuleOutcome { rule_name, passed }
    }
}

/// Evaluates an assembled rule tree against one subject batch.
///
/// One call covers the whole batch: implementations report one outcome per
/// root rule, never per subject. An error discards the whole evaluation;
/// implementations must not return a partial outcome set.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait RuleEvaluator: Send + Sync {
    /// Evaluate every root rule of `tree` against `subjects`
    async fn evaluate(&self, tree: &RuleTree, subjects: &[String])
        -> RuntimeResult<Vec<RuleOutcome>>;
}
