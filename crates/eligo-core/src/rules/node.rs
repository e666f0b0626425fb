//! Assembled rule-tree definitions

use serde::{Deserialize, Serialize};

use super::row::RuleRow;

/// Discriminant of an assembled rule node, mutually exclusive by construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Combines child results with a boolean operator
    Composite {
        /// Operator text as stored; interpreted by the evaluation engine
        operator: String,
    },
    /// Evaluated directly from a predicate expression, no children
    Leaf {
        /// Predicate text as stored; interpreted by the evaluation engine
        expression: String,
    },
}

/// Descriptive row fields carried through to the evaluation engine untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMeta {
    pub properties: String,
    pub error_message: String,
    pub enabled: bool,
    pub rule_expression_type: i32,
    pub actions: String,
    pub success_event: String,
}

impl From<&RuleRow> for RuleMeta {
    fn from(row: &RuleRow) -> Self {
        RuleMeta {
            properties: row.properties.clone(),
            error_message: row.error_message.clone(),
            enabled: row.enabled,
            rule_expression_type: row.rule_expression_type,
            actions: row.actions.clone(),
            success_event: row.success_event.clone(),
        }
    }
}

/// One node of an assembled rule tree.
///
/// Children are fixed at assembly time and only exposed as an immutable
/// view; the node cannot be grown or re-parented after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleNode {
    name: String,
    kind: RuleKind,
    meta: RuleMeta,
    children: Vec<RuleNode>,
}

impl RuleNode {
    pub(crate) fn new(name: String, kind: RuleKind, meta: RuleMeta, children: Vec<RuleNode>) -> Self {
        RuleNode {
            name,
            kind,
            meta,
            children,
        }
    }

    /// Rule name, unique within the tree
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Composite or leaf discriminant
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Carried-through descriptive fields
    pub fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    /// Child nodes in row-processing order; empty for leaves
    pub fn children(&self) -> &[RuleNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, RuleKind::Leaf { .. })
    }
}

/// A fully assembled rule tree: the ordered roots of one workflow.
///
/// Each root's subtree covers all rows reachable from it via parent links;
/// together the roots partition the input rows. The tree is request-scoped
/// and owns no external resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleTree {
    roots: Vec<RuleNode>,
}

impl RuleTree {
    pub(crate) fn new(roots: Vec<RuleNode>) -> Self {
        RuleTree { roots }
    }

    /// Root rules in first-seen row order
    pub fn roots(&self) -> &[RuleNode] {
        &self.roots
    }

    /// Number of root rules
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
