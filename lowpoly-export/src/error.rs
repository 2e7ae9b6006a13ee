//! Export errors

use std::fmt;

use thiserror::Error;

/// Fatal export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no export formats requested")]
    EmptyFormatSet,

    #[error("invalid model name {0:?}: must be non-empty and free of path separators and control characters")]
    InvalidName(String),

    #[error("mesh cannot be exported: {0}")]
    InvalidMesh(#[from] lowpoly_core::GenerateError),

    #[error("every requested format failed: {}", FailureList(.0))]
    AllFormatsFailed(Vec<FormatFailure>),

    #[error("failed to serialize glTF document: {0}")]
    Glb(#[from] serde_json::Error),

    #[error("failed to write archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One requested format that did not make it into the bundle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{requested}: {reason}")]
pub struct FormatFailure {
    /// The format string as the caller passed it
    pub requested: String,
    pub reason: FormatFailureReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatFailureReason {
    #[error("unsupported format")]
    UnsupportedFormat,

    #[error("encoding failed: {0}")]
    EncodeFailed(String),
}

impl FormatFailure {
    pub fn unsupported(requested: impl Into<String>) -> Self {
        Self {
            requested: requested.into(),
            reason: FormatFailureReason::UnsupportedFormat,
        }
    }
}

struct FailureList<'a>(&'a [FormatFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
