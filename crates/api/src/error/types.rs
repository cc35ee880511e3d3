//! Error type definitions for catalog lookup, derivation and instantiation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for scheme generation
#[derive(Debug, Error)]
pub enum Error {
    /// Selector outside the catalog
    #[error("unknown scheme selector {id} (valid selectors are 1..={max})")]
    UnknownScheme { id: u32, max: u32 },

    /// Template file absent from the template directory
    #[error("template not found: {}", path.display())]
    MissingTemplate { path: PathBuf },

    /// The template was copied but substituting its tokens failed
    #[error("partial write to {}: {source}", path.display())]
    PartialWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Security level with no hash/key size mapping
    #[error("unsupported security level {0} (expected 128, 192 or 256)")]
    InvalidSecurityLevel(u32),

    /// A catalog value that cannot drive a derivation
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A placeholder survived substitution
    #[error("unresolved placeholder {token} in {}", path.display())]
    UnresolvedPlaceholder { token: String, path: PathBuf },

    /// A selection line that is not an integer
    #[error("invalid selection input {0:?}")]
    InvalidInput(String),

    /// A registry entry wired to the generator of another scheme kind
    #[error("scheme {name} cannot be generated by the {generator} generator")]
    SchemeMismatch {
        name: &'static str,
        generator: &'static str,
    },

    /// Filesystem failure outside of substitution
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Unreadable or malformed configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for generation operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build an [`Error::InvalidParameter`]
    pub fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name of the error kind, used in session reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownScheme { .. } => "unknown-scheme",
            Self::MissingTemplate { .. } => "missing-template",
            Self::PartialWrite { .. } => "partial-write",
            Self::InvalidSecurityLevel(_) => "invalid-security-level",
            Self::InvalidParameter { .. } => "invalid-parameter",
            Self::UnresolvedPlaceholder { .. } => "unresolved-placeholder",
            Self::InvalidInput(_) => "invalid-input",
            Self::SchemeMismatch { .. } => "scheme-mismatch",
            Self::Io { .. } => "io",
            Self::Config(_) => "config",
        }
    }
}
