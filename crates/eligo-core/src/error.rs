//! Error types for ELIGO Core

use std::fmt;
use thiserror::Error;

/// Which side of the operator/expression discriminant a rule row violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeProblem {
    /// Both operator and expression are set
    OperatorAndExpression,
    /// Neither operator nor expression is set
    Neither,
}

impl fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeProblem::OperatorAndExpression => {
                write!(f, "both operator and expression are set")
            }
            ShapeProblem::Neither => write!(f, "neither operator nor expression is set"),
        }
    }
}

/// Assembly error type
///
/// One variant per structural invariant, so callers can branch on the kind
/// without matching message strings. Assembly failures are data-quality
/// failures: retrying never fixes them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// A row arrived without a rule name
    #[error("rule row {index} has an empty rule name")]
    MissingRuleName { index: usize },

    /// A row violates the composite/leaf discriminant
    #[error("rule '{name}': {problem}")]
    InvalidShape { name: String, problem: ShapeProblem },

    /// Two rows share a rule name
    #[error("duplicate rule name '{name}'")]
    DuplicateRuleName { name: String },

    /// A row references a parent that is not among the input rows
    #[error("rule '{name}' references unknown parent '{parent}'")]
    MissingParent { name: String, parent: String },

    /// A rule is its own ancestor
    #[error("rule '{name}' is its own ancestor")]
    CycleDetected { name: String },
}

/// Result type for assembly operations
pub type Result<T> = std::result::Result<T, AssemblyError>;
