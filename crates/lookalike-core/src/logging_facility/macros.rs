//! Canonical logging macros
//!
//! Callers must depend on `tracing` directly; field names come from
//! `lookalike_core_types::schema` via `$crate::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use lookalike_core::log_op_start;
/// log_op_start!("reconcile");
/// log_op_start!("reconcile", spec = "login", name = "form");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use lookalike_core::log_op_end;
/// log_op_end!("reconcile", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `LkError`.
///
/// ```ignore
/// # use lookalike_core::{log_op_error, errors::SnapshotError};
/// let err = SnapshotError::ScreenshotMissing { path: "shot.png".into() };
/// log_op_error!("reconcile", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let lk_err: $crate::errors::LkError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?lk_err.kind(),
            err.code = lk_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let lk_err: $crate::errors::LkError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?lk_err.kind(),
            err.code = lk_err.code(),
            $($field)*
        );
    }};
}
