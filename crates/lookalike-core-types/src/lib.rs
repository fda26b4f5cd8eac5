//! Core types shared across Lookalike facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical field keys, event names and
//!   reconciliation outcome labels

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
