//! In-memory repository for tests and embedding

use std::collections::HashMap;

use async_trait::async_trait;
use eligo_core::RuleRow;

use crate::traits::RulesRepository;
use crate::RepositoryResult;

/// Rule rows held in process memory, keyed by exact workflow name.
///
/// Useful for tests and for embedding the engine without a database.
/// Fetching an unregistered workflow yields zero rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    workflows: HashMap<String, Vec<RuleRow>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        MemoryRepository::default()
    }

    /// Register the rows of one workflow, replacing any previous set
    pub fn with_workflow(mut self, workflow_name: String, rows: Vec<RuleRow>) -> Self {
        self.workflows.insert(workflow_name, rows);
        self
    }
}

#[async_trait]
impl RulesRepository for MemoryRepository {
    async fn fetch_rows(&self, workflow_name: &str) -> RepositoryResult<Vec<RuleRow>> {
        Ok(self
            .workflows
            .get(workflow_name)
            .cloned()
            .unwrap_or_default())
    }
}
