//! Structured logging facility for Lookalike
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use lookalike_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Events are written to stderr so that JSON results on stdout stay parseable.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
