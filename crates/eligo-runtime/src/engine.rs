//! Boolean rule engine
//!
//! Walks an assembled tree once per batch: composite rules fold their
//! enabled children's results through the boolean operator, leaf rules
//! delegate to the expression evaluator. Disabled rules do not
//! participate; a disabled root is not reported at all.

use async_trait::async_trait;
use eligo_core::{RuleKind, RuleNode, RuleTree};
use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};
use crate::evaluator::{RuleEvaluator, RuleOutcome};
use crate::expression::{ContainsEvaluator, ExpressionEvaluator};
use crate::operator::BoolOperator;

/// The shipped evaluation engine.
///
/// Generic over the leaf evaluator so deployments with a richer expression
/// dialect can swap it without touching tree traversal.
pub struct BooleanRuleEngine<E = ContainsEvaluator> {
    expressions: E,
}

impl BooleanRuleEngine<ContainsEvaluator> {
    /// Engine with the default membership-predicate evaluator
    pub fn new() -> Self {
        BooleanRuleEngine {
            expressions: ContainsEvaluator::new(),
        }
    }
}

impl Default for BooleanRuleEngine<ContainsEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ExpressionEvaluator> BooleanRuleEngine<E> {
    /// Engine with a custom leaf-expression evaluator
    pub fn with_evaluator(expressions: E) -> Self {
        BooleanRuleEngine { expressions }
    }

    fn evaluate_node(&self, node: &RuleNode, subjects: &[String]) -> RuntimeResult<bool> {
        match node.kind() {
            RuleKind::Leaf { expression } => self
                .expressions
                .evaluate(expression, subjects)
                .map_err(|err| RuntimeError::Expression {
                    rule: node.name().to_string(),
                    detail: err.to_string(),
                }),
            RuleKind::Composite { operator } => {
                let op = BoolOperator::parse(operator).ok_or_else(|| {
                    RuntimeError::UnknownOperator {
                        rule: node.name().to_string(),
                        operator: operator.clone(),
                    }
                })?;

                let mut results = Vec::with_capacity(node.children().len());
                for child in node.children() {
                    if !child.meta().enabled {
                        continue;
                    }
                    results.push(self.evaluate_node(child, subjects)?);
                }
                Ok(op.apply(results))
            }
        }
    }
}

#[async_trait]
impl<E: ExpressionEvaluator> RuleEvaluator for BooleanRuleEngine<E> {
    async fn evaluate(
        &self,
        tree: &RuleTree,
        subjects: &[String],
    ) -> RuntimeResult<Vec<RuleOutcome>> {
        let mut outcomes = Vec::with_capacity(tree.len());
        for root in tree.roots() {
            if !root.meta().enabled {
                debug!("skipping disabled rule '{}'", root.name());
                continue;
            }
            let passed = self.evaluate_node(root, subjects)?;
            debug!("rule '{}' evaluated to {}", root.name(), passed);
            outcomes.push(RuleOutcome::new(root.name().to_string(), passed));
        }
        Ok(outcomes)
    }
}
