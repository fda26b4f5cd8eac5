use crate::errors::{Result, SnapshotError};

/// Characters that split a stem into nested path segments
pub(crate) const SEPARATORS: [char; 2] = ['/', '\\'];

/// Logical identity of a snapshot: the test it belongs to and its name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotIdentity {
    spec: String,
    name: String,
}

impl SnapshotIdentity {
    /// Create a validated identity
    ///
    /// Both parts end up in a file path. Separators are allowed and nest the
    /// snapshot below its directory, but no segment may be `.` or `..`.
    pub fn new(spec: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let spec = spec.into();
        let name = name.into();
        check_component("spec", &spec)?;
        check_component("name", &name)?;
        Ok(Self { spec, name })
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File stem shared by the baseline, actual and diff images
    pub fn stem(&self) -> String {
        format!("{} - {}", self.spec, self.name)
    }
}

impl std::fmt::Display for SnapshotIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.spec, self.name)
    }
}

fn check_component(field: &'static str, value: &str) -> Result<()> {
    let reason = if value.trim().is_empty() {
        Some("must not be empty")
    } else if value
        .split(SEPARATORS)
        .any(|segment| segment == "." || segment == "..")
    {
        Some("must not contain a relative directory reference")
    } else if value.contains('\0') {
        Some("must not contain NUL")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SnapshotError::InvalidIdentity {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
