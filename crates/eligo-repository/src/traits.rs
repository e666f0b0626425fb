//! Repository contract consumed by the orchestrator

use async_trait::async_trait;
use eligo_core::RuleRow;

use crate::RepositoryResult;

/// Retrieves the rule rows of one workflow.
///
/// Implementations own the entire transient-failure story: they retry with
/// bounded exponential backoff internally and surface one terminal error,
/// never a partial row set. Callers must not retry on top.
///
/// An unknown workflow is not an error; it fetches zero rows (and
/// assembles into an empty tree downstream).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait RulesRepository: Send + Sync {
    /// Fetch every rule row whose workflow matches `workflow_name`
    async fn fetch_rows(&self, workflow_name: &str) -> RepositoryResult<Vec<RuleRow>>;
}
