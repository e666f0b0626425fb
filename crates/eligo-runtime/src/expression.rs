//! Leaf predicate evaluation

use crate::error::ExpressionError;

/// Evaluates one leaf expression against the subject batch.
///
/// This is the seam for plugging a richer expression dialect: the engine
/// treats leaf expressions as opaque text and forwards them here together
/// with the batch.
pub trait ExpressionEvaluator: Send + Sync {
    /// Evaluate `expression` over the subject attribute tokens
    fn evaluate(&self, expression: &str, subjects: &[String]) -> Result<bool, ExpressionError>;
}

/// Membership predicates over the subject batch.
///
/// Supports the predicate forms found in stored rule data:
/// `input1.Contains("token")` and `!input1.Contains("token")`, where
/// `input1` is the posted list of attribute tokens. Anything else is
/// rejected rather than guessed at.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsEvaluator;

impl ContainsEvaluator {
    pub fn new() -> Self {
        ContainsEvaluator
    }
}

impl ExpressionEvaluator for ContainsEvaluator {
    fn evaluate(&self, expression: &str, subjects: &[String]) -> Result<bool, ExpressionError> {
        let trimmed = expression.trim();
        let (negated, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let token = body
            .strip_prefix("input1.Contains(\"")
            .and_then(|rest| rest.strip_suffix("\")"))
            .ok_or_else(|| {
                ExpressionError(format!("expected a membership predicate, got '{}'", trimmed))
            })?;

        let present = subjects.iter().any(|subject| subject == token);
        Ok(present != negated)
    }
}
