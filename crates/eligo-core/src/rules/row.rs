//! Storage-shaped rule records

use serde::{Deserialize, Serialize};

/// One rule as stored in the relational row source.
///
/// Rows are flat: the tree shape lives entirely in `rule_name_fk`, which
/// names the parent rule (empty for roots). Exactly one of `operator` and
/// `expression` must be set; the assembler enforces this. Nullable text
/// columns arrive as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRow {
    /// Unique rule name within a workflow
    pub rule_name: String,

    /// Boolean combinator for composite rules (e.g. "And", "Or"); empty for leaves
    #[serde(default)]
    pub operator: String,

    /// Leaf predicate text; empty for composite rules
    #[serde(default)]
    pub expression: String,

    /// Parent rule name; empty means this row is a root
    #[serde(default)]
    pub rule_name_fk: String,

    /// Partitioning key; assembly operates on rows already filtered to one workflow
    #[serde(default)]
    pub workflow_name: String,

    /// Opaque rule properties, carried through to the evaluation engine
    #[serde(default)]
    pub properties: String,

    /// Message reported when the rule fails, carried through
    #[serde(default)]
    pub error_message: String,

    /// Whether the rule participates in evaluation; carried through, the
    /// engine interprets it
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Expression dialect discriminant, carried through
    #[serde(default)]
    pub rule_expression_type: i32,

    /// Opaque action configuration, carried through
    #[serde(default)]
    pub actions: String,

    /// Event emitted on success, carried through
    #[serde(default)]
    pub success_event: String,
}

fn default_enabled() -> bool {
    true
}

impl Default for RuleRow {
    fn default() -> Self {
        RuleRow {
            rule_name: String::new(),
            operator: String::new(),
            expression: String::new(),
            rule_name_fk: String::new(),
            workflow_name: String::new(),
            properties: String::new(),
            error_message: String::new(),
            enabled: true,
            rule_expression_type: 0,
            actions: String::new(),
            success_event: String::new(),
        }
    }
}

impl RuleRow {
    /// Create a leaf rule evaluated from a predicate expression
    pub fn leaf(rule_name: String, expression: String) -> Self {
        RuleRow {
            rule_name,
            expression,
            ..RuleRow::default()
        }
    }

    /// Create a composite rule combining its children with an operator
    pub fn composite(rule_name: String, operator: String) -> Self {
        RuleRow {
            rule_name,
            operator,
            ..RuleRow::default()
        }
    }

    /// Set the parent rule name
    pub fn with_parent(mut self, parent: String) -> Self {
        self.rule_name_fk = parent;
        self
    }

    /// Set the workflow the rule belongs to
    pub fn with_workflow(mut self, workflow: String) -> Self {
        self.workflow_name = workflow;
        self
    }

    /// Enable or disable the rule
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether this row has a parent link
    pub fn has_parent(&self) -> bool {
        !self.rule_name_fk.is_empty()
    }
}
