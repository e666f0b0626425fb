//! ELIGO Core - Core types and rule-tree assembly
//!
//! This crate provides the fundamental types of the ELIGO eligibility engine:
//! - `RuleRow`: the flat, storage-shaped form of one rule
//! - `RuleNode` / `RuleTree`: the assembled, tree-shaped form
//! - `assemble`: validation, linking, cycle check and root extraction
//! - Error types

pub mod error;
pub mod rules;

// Re-export commonly used types
pub use error::{AssemblyError, ShapeProblem};
pub use rules::assembler::assemble;
pub use rules::node::{RuleKind, RuleMeta, RuleNode, RuleTree};
pub use rules::row::RuleRow;
