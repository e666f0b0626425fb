//! ELIGO SDK - High-level API for eligibility evaluation
//!
//! Wires a rules repository and an evaluation engine into the per-request
//! orchestration pipeline: fetch the workflow's rows, assemble the rule
//! tree, evaluate the subject batch, reduce the outcomes to a
//! `rule name -> bool` mapping.

pub mod builder;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use builder::EligibilityEngineBuilder;
pub use engine::EligibilityEngine;
pub use error::{Result, SdkError};
