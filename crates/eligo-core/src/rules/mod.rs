//! Rule definitions: storage-shaped rows, assembled trees, and the assembler

pub mod assembler;
pub mod node;
pub mod row;

pub use assembler::assemble;
pub use node::{RuleKind, RuleMeta, RuleNode, RuleTree};
pub use row::RuleRow;
