//! Rule-tree assembly
//!
//! Converts an unordered, flat collection of `RuleRow`s into a `RuleTree`,
//! enforcing the referential and structural invariants of the row format.
//! Assembly is a pure function of the rows: identical input yields a
//! structurally identical tree, with roots and children in row order.

use std::collections::HashMap;

use crate::error::{AssemblyError, Result, ShapeProblem};
use crate::rules::node::{RuleKind, RuleMeta, RuleNode, RuleTree};
use crate::rules::row::RuleRow;

/// Assemble rule rows into a tree.
///
/// Fails with the first invariant violation instead of producing a
/// malformed tree:
/// - empty rule name → [`AssemblyError::MissingRuleName`]
/// - both or neither of operator/expression → [`AssemblyError::InvalidShape`]
/// - repeated rule name → [`AssemblyError::DuplicateRuleName`]
/// - parent link to an unknown rule → [`AssemblyError::MissingParent`]
/// - a rule among its own ancestors → [`AssemblyError::CycleDetected`]
///
/// An empty row slice assembles to an empty tree. No I/O, no mutation of
/// caller-owned data.
pub fn assemble(rows: &[RuleRow]) -> Result<RuleTree> {
    // Pass 1: validate each row and index it by name.
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        if row.rule_name.is_empty() {
            return Err(AssemblyError::MissingRuleName { index: i });
        }
        match (row.operator.is_empty(), row.expression.is_empty()) {
            (false, false) => {
                return Err(AssemblyError::InvalidShape {
                    name: row.rule_name.clone(),
                    problem: ShapeProblem::OperatorAndExpression,
                })
            }
            (true, true) => {
                return Err(AssemblyError::InvalidShape {
                    name: row.rule_name.clone(),
                    problem: ShapeProblem::Neither,
                })
            }
            _ => {}
        }
        if index.insert(row.rule_name.as_str(), i).is_some() {
            return Err(AssemblyError::DuplicateRuleName {
                name: row.rule_name.clone(),
            });
        }
    }

    // Pass 2: resolve parent links. The children buffer is mutable only
    // here; the finished tree exposes immutable views.
    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        if !row.has_parent() {
            continue;
        }
        let parent = *index.get(row.rule_name_fk.as_str()).ok_or_else(|| {
            AssemblyError::MissingParent {
                name: row.rule_name.clone(),
                parent: row.rule_name_fk.clone(),
            }
        })?;
        children.entry(parent).or_default().push(i);
    }

    // Pass 3: bounded ancestor walk. An acyclic chain visits at most
    // rows.len() distinct rules before reaching a root; coming back to the
    // starting rule means the parent graph has a cycle. A walk that merely
    // runs into a cycle further up terminates at the bound; the cycle
    // members themselves report it, first one in row order wins.
    for row in rows {
        if !row.has_parent() {
            continue;
        }
        let mut current = row.rule_name_fk.as_str();
        for _ in 0..rows.len() {
            if current == row.rule_name {
                return Err(AssemblyError::CycleDetected {
                    name: row.rule_name.clone(),
                });
            }
            let up = &rows[index[current]].rule_name_fk;
            if up.is_empty() {
                break;
            }
            current = up.as_str();
        }
    }

    // Pass 4: roots are the rows without a parent, in row order. Building
    // recursively is safe now that acyclicity is proven.
    let roots = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.has_parent())
        .map(|(i, _)| build_node(i, rows, &children))
        .collect();

    Ok(RuleTree::new(roots))
}

fn build_node(i: usize, rows: &[RuleRow], children: &HashMap<usize, Vec<usize>>) -> RuleNode {
    let row = &rows[i];
    let kind = if row.operator.is_empty() {
        RuleKind::Leaf {
            expression: row.expression.clone(),
        }
    } else {
        RuleKind::Composite {
            operator: row.operator.clone(),
        }
    };
    let built = children
        .get(&i)
        .map(|ids| {
            ids.iter()
                .map(|&child| build_node(child, rows, children))
                .collect()
        })
        .unwrap_or_default();

    RuleNode::new(row.rule_name.clone(), kind, RuleMeta::from(row), built)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, expression: &str) -> RuleRow {
        RuleRow::leaf(name.to_string(), expression.to_string())
    }

    fn leaf_under(name: &str, expression: &str, parent: &str) -> RuleRow {
        leaf(name, expression).with_parent(parent.to_string())
    }

    fn composite(name: &str, operator: &str) -> RuleRow {
        RuleRow::composite(name.to_string(), operator.to_string())
    }

    #[test]
    fn test_single_root_with_children_in_row_order() {
        let rows = vec![
            composite("A", "And"),
            leaf_under("B", "x>1", "A"),
            leaf_under("C", "y<5", "A"),
        ];

        let tree = assemble(&rows).unwrap();

        assert_eq!(tree.len(), 1);
        let root = &tree.roots()[0];
        assert_eq!(root.name(), "A");
        assert_eq!(
            root.kind(),
            &RuleKind::Composite {
                operator: "And".to_string()
            }
        );
        let names: Vec<&str> = root.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert!(root.children().iter().all(|c| c.is_leaf()));
    }

    #[test]
    fn test_independent_roots_keep_row_order() {
        let rows = vec![leaf("A", "z==1"), leaf("B", "w==2")];

        let tree = assemble(&rows).unwrap();

        let names: Vec<&str> = tree.roots().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(tree.roots().iter().all(|r| r.children().is_empty()));
    }

    #[test]
    fn test_empty_rows_assemble_to_empty_tree() {
        let tree = assemble(&[]).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_nested_composites() {
        let rows = vec![
            composite("Top", "Or"),
            composite("Inner", "And").with_parent("Top".to_string()),
            leaf_under("L1", "a", "Inner"),
            leaf_under("L2", "b", "Inner"),
            leaf_under("L3", "c", "Top"),
        ];

        let tree = assemble(&rows).unwrap();

        assert_eq!(tree.len(), 1);
        let top = &tree.roots()[0];
        assert_eq!(top.children().len(), 2);
        assert_eq!(top.children()[0].name(), "Inner");
        assert_eq!(top.children()[0].children().len(), 2);
        assert_eq!(top.children()[1].name(), "L3");
    }

    #[test]
    fn test_child_rows_before_parent_rows() {
        // Assembly must not depend on rows arriving parents-first.
        let rows = vec![
            leaf_under("B", "x", "A"),
            leaf_under("C", "y", "A"),
            composite("A", "And"),
        ];

        let tree = assemble(&rows).unwrap();

        assert_eq!(tree.len(), 1);
        let root = &tree.roots()[0];
        assert_eq!(root.name(), "A");
        let names: Vec<&str> = root.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_empty_rule_name_rejected() {
        let rows = vec![leaf("A", "x"), leaf("", "y")];

        assert_eq!(
            assemble(&rows).unwrap_err(),
            AssemblyError::MissingRuleName { index: 1 }
        );
    }

    #[test]
    fn test_operator_and_expression_rejected() {
        let mut row = composite("A", "And");
        row.expression = "x>1".to_string();

        assert_eq!(
            assemble(&[row]).unwrap_err(),
            AssemblyError::InvalidShape {
                name: "A".to_string(),
                problem: ShapeProblem::OperatorAndExpression,
            }
        );
    }

    #[test]
    fn test_neither_operator_nor_expression_rejected() {
        let row = RuleRow {
            rule_name: "A".to_string(),
            ..RuleRow::default()
        };

        assert_eq!(
            assemble(&[row]).unwrap_err(),
            AssemblyError::InvalidShape {
                name: "A".to_string(),
                problem: ShapeProblem::Neither,
            }
        );
    }

    #[test]
    fn test_duplicate_rule_name_rejected() {
        let rows = vec![leaf("A", "x"), leaf("A", "y")];

        assert_eq!(
            assemble(&rows).unwrap_err(),
            AssemblyError::DuplicateRuleName {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_dangling_parent_rejected() {
        let rows = vec![leaf_under("B", "x", "Ghost")];

        assert_eq!(
            assemble(&rows).unwrap_err(),
            AssemblyError::MissingParent {
                name: "B".to_string(),
                parent: "Ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_two_rule_cycle_rejected() {
        let rows = vec![
            composite("A", "And").with_parent("B".to_string()),
            composite("B", "Or").with_parent("A".to_string()),
        ];

        assert_eq!(
            assemble(&rows).unwrap_err(),
            AssemblyError::CycleDetected {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_self_cycle_rejected() {
        let rows = vec![composite("A", "And").with_parent("A".to_string())];

        assert_eq!(
            assemble(&rows).unwrap_err(),
            AssemblyError::CycleDetected {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_cycle_behind_a_valid_chain_rejected() {
        // D hangs off the B<->C cycle; walking from D terminates at the
        // bound, the cycle members report it.
        let rows = vec![
            leaf("A", "x"),
            composite("B", "And").with_parent("C".to_string()),
            composite("C", "Or").with_parent("B".to_string()),
            leaf_under("D", "y", "B"),
        ];

        assert_eq!(
            assemble(&rows).unwrap_err(),
            AssemblyError::CycleDetected {
                name: "B".to_string()
            }
        );
    }

    #[test]
    fn test_roots_partition_all_rows() {
        let rows = vec![
            composite("R1", "And"),
            leaf_under("A", "x", "R1"),
            composite("R2", "Or"),
            leaf_under("B", "y", "R2"),
            leaf_under("C", "z", "R1"),
            leaf("R3", "w"),
        ];

        let tree = assemble(&rows).unwrap();

        fn collect<'a>(node: &'a RuleNode, into: &mut Vec<&'a str>) {
            into.push(node.name());
            for child in node.children() {
                collect(child, into);
            }
        }

        let mut seen = Vec::new();
        for root in tree.roots() {
            collect(root, &mut seen);
        }
        seen.sort_unstable();

        // Every row appears exactly once across the disjoint subtrees.
        assert_eq!(seen, vec!["A", "B", "C", "R1", "R2", "R3"]);
        let root_names: Vec<&str> = tree.roots().iter().map(|r| r.name()).collect();
        assert_eq!(root_names, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let rows = vec![
            composite("A", "And"),
            leaf_under("B", "x>1", "A"),
            leaf_under("C", "y<5", "A"),
            leaf("D", "z"),
        ];

        let first = assemble(&rows).unwrap();
        let second = assemble(&rows).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_meta_carried_through_to_nodes() {
        let mut row = leaf("A", "x");
        row.error_message = "ineligible".to_string();
        row.success_event = "eligible".to_string();
        row.enabled = false;

        let tree = assemble(&[row]).unwrap();
        let meta = tree.roots()[0].meta();

        assert_eq!(meta.error_message, "ineligible");
        assert_eq!(meta.success_event, "eligible");
        assert!(!meta.enabled);
    }
}
