//! Error types for the ELIGO runtime

use thiserror::Error;

/// Result type alias for runtime operations
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

/// Errors raised while evaluating an assembled rule tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A composite rule carries an operator the engine does not know
    #[error("rule '{rule}' uses unknown operator '{operator}'")]
    UnknownOperator { rule: String, operator: String },

    /// A leaf expression is outside the dialect the evaluator supports
    #[error("rule '{rule}' has an unsupported expression: {detail}")]
    Expression { rule: String, detail: String },
}

/// Why a leaf expression could not be evaluated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ExpressionError(pub String);
