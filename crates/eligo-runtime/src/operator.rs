//! Boolean combination operators for composite rules

/// Boolean operator of a composite rule.
///
/// The row source stores operators as text. The stored dialect uses the
/// spellings `And`/`AndAlso` and `Or`/`OrElse`; matching is
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOperator {
    And,
    Or,
}

impl BoolOperator {
    /// Parse an operator string, `None` if it is not a known spelling
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("and") || text.eq_ignore_ascii_case("andalso") {
            Some(BoolOperator::And)
        } else if text.eq_ignore_ascii_case("or") || text.eq_ignore_ascii_case("orelse") {
            Some(BoolOperator::Or)
        } else {
            None
        }
    }

    /// Fold child results per the operator.
    ///
    /// `And` over an empty set is true and `Or` false, matching all/any
    /// semantics.
    pub fn apply(self, results: impl IntoIterator<Item = bool>) -> bool {
        match self {
            BoolOperator::And => results.into_iter().all(|passed| passed),
            BoolOperator::Or => results.into_iter().any(|passed| passed),
        }
    }
}
