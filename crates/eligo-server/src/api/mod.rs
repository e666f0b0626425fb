//! API surface
//!
//! REST endpoints for eligibility evaluation.

pub mod rest;
