//! Repository layer for the ELIGO eligibility engine
//!
//! Retrieves the flat rule rows of one workflow from a storage backend.
//! Transient backend failures are retried internally with bounded
//! exponential backoff; a terminal failure surfaces as a single
//! `RepositoryError`, never a partial row set. Callers (the orchestrator
//! included) must not add a second retry layer on top.
//!
//! Backends:
//! - [`PostgresRepository`] (feature `postgres`): the production row source
//! - [`MemoryRepository`]: in-process rows for tests and embedding

pub mod error;
pub mod memory;
pub mod retry;
pub mod traits;

#[cfg(feature = "postgres")]
pub mod postgres;

// Re-exports
pub use error::{RepositoryError, RepositoryResult};
pub use memory::MemoryRepository;
pub use retry::{retry_with_policy, RetryPolicy};
pub use traits::RulesRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;
