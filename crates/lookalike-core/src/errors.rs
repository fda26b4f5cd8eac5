use lookalike_core_types::RequestId;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using LkError
pub type Result<T> = std::result::Result<T, LkError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every fatal condition of a reconciliation maps onto one of these kinds.
/// A mismatch between baseline and screenshot is not an error and has no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LkErrorKind {
    // Preconditions
    InvalidInput,
    MissingScreenshot,
    UnresolvableIdentity,

    // Collaborators
    /// The comparison capability failed (corrupt image, decoder crash)
    Comparison,

    // Integration/IO
    Io,
    Serialization,
    Config,

    // Internal
    Internal,
}

impl LkErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LkErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            LkErrorKind::MissingScreenshot => "ERR_MISSING_SCREENSHOT",
            LkErrorKind::UnresolvableIdentity => "ERR_UNRESOLVABLE_IDENTITY",
            LkErrorKind::Comparison => "ERR_COMPARISON",
            LkErrorKind::Io => "ERR_IO",
            LkErrorKind::Serialization => "ERR_SERIALIZATION",
            LkErrorKind::Config => "ERR_CONFIG",
            LkErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the caller broke the reconcile contract (as opposed to a
    /// collaborator or the filesystem failing underneath it)
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            LkErrorKind::InvalidInput
                | LkErrorKind::MissingScreenshot
                | LkErrorKind::UnresolvableIdentity
        )
    }
}

/// Canonical structured error type
///
/// Carries a stable kind plus the context needed to find the offending
/// snapshot on disk.
#[derive(Debug, Clone)]
pub struct LkError {
    kind: LkErrorKind,
    op: Option<String>,
    snapshot: Option<String>,
    path: Option<PathBuf>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<LkError>>,
}

impl LkError {
    /// Create a new error with the specified kind
    pub fn new(kind: LkErrorKind) -> Self {
        Self {
            kind,
            op: None,
            snapshot: None,
            path: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snapshot context (the `"<spec> - <name>"` stem)
    pub fn with_snapshot(mut self, snapshot: impl Into<String>) -> Self {
        self.snapshot = Some(snapshot.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: LkError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> LkErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&LkError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for LkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(snapshot) = &self.snapshot {
            write!(f, " (snapshot: {})", snapshot)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for LkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Typed snapshot-domain failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// The captured screenshot the caller pointed at does not exist
    #[error("Screenshot not found: {path}")]
    ScreenshotMissing { path: PathBuf },

    /// Identity component is empty or would escape the snapshot directory
    #[error("Invalid snapshot {field} '{value}': {reason}")]
    InvalidIdentity {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Screenshot is not located under the screenshots root
    #[error("Screenshot {path} is outside the screenshots root {root}")]
    OutsideScreenshotsRoot { path: PathBuf, root: PathBuf },

    /// Match option failed validation
    #[error("Invalid match option {option}: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    /// Settings file could not be read or parsed
    #[error("Invalid settings in {path}: {reason}")]
    InvalidSettings { path: PathBuf, reason: String },

    /// Image could not be decoded or encoded
    #[error("Image error for {path}: {reason}")]
    Image { path: PathBuf, reason: String },
}

impl From<SnapshotError> for LkError {
    fn from(err: SnapshotError) -> Self {
        let message = err.to_string();
        match err {
            SnapshotError::ScreenshotMissing { path } => {
                LkError::new(LkErrorKind::MissingScreenshot)
                    .with_path(path)
                    .with_message(message)
            }
            SnapshotError::InvalidIdentity { .. } => {
                LkError::new(LkErrorKind::UnresolvableIdentity).with_message(message)
            }
            SnapshotError::OutsideScreenshotsRoot { path, .. } => {
                LkError::new(LkErrorKind::UnresolvableIdentity)
                    .with_path(path)
                    .with_message(message)
            }
            SnapshotError::InvalidOption { .. } => {
                LkError::new(LkErrorKind::InvalidInput).with_message(message)
            }
            SnapshotError::InvalidSettings { path, .. } => LkError::new(LkErrorKind::Config)
                .with_path(path)
                .with_message(message),
            SnapshotError::Image { path, .. } => LkError::new(LkErrorKind::Comparison)
                .with_path(path)
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_context() {
        let err = LkError::new(LkErrorKind::Io)
            .with_op("move_file")
            .with_snapshot("login - form")
            .with_path("/tmp/x.png")
            .with_message("permission denied");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_IO] in operation 'move_file': permission denied"));
        assert!(rendered.contains("(snapshot: login - form)"));
        assert!(rendered.contains("(path: /tmp/x.png)"));
    }

    #[test]
    fn test_source_is_exposed_through_std_error() {
        use std::error::Error as _;

        let inner = LkError::new(LkErrorKind::Io).with_message("disk full");
        let outer = LkError::new(LkErrorKind::Comparison).with_source(inner);

        let source = outer.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("[ERR_IO]: disk full"));
    }

    #[test]
    fn test_precondition_kinds() {
        assert!(LkErrorKind::MissingScreenshot.is_precondition());
        assert!(LkErrorKind::UnresolvableIdentity.is_precondition());
        assert!(!LkErrorKind::Comparison.is_precondition());
        assert!(!LkErrorKind::Io.is_precondition());
    }
}
