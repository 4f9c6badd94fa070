//! Structured error types shared across the IFN crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`IfnError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (row indices, dimensions, totals, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller repair the input network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the ideal flow network engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum IfnError {
    /// Malformed input matrices (non-square, mismatched dimensions,
    /// non-finite entries).
    #[error("shape error: {0}")]
    Shape(ErrorInfo),
    /// A node with no outgoing weight, which cannot be row normalised.
    #[error("dangling node error: {0}")]
    DanglingNode(ErrorInfo),
    /// The stationary solve produced a vector inconsistent with an
    /// irreducible network.
    #[error("reducible network error: {0}")]
    ReducibleNetwork(ErrorInfo),
    /// Rescaling failures, including integer basis reconstruction.
    #[error("scaling error: {0}")]
    Scaling(ErrorInfo),
    /// Random network generator errors.
    #[error("generator error: {0}")]
    Generator(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl IfnError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            IfnError::Shape(info)
            | IfnError::DanglingNode(info)
            | IfnError::ReducibleNetwork(info)
            | IfnError::Scaling(info)
            | IfnError::Generator(info)
            | IfnError::Serde(info) => info,
        }
    }
}
