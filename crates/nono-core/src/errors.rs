//! Structured error types shared across the extraction crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NonoError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (grid sizes, counts, paths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
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
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for puzzle extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NonoError {
    /// Unsupported grid sizes and invalid run parameters.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Raw rows whose length or contents do not match the configured grid.
    #[error("shape error: {0}")]
    Shape(ErrorInfo),
    /// Fewer valid puzzles than requested were found.
    #[error("insufficient candidates: {0}")]
    Insufficient(ErrorInfo),
    /// Dataset files that cannot be opened or decoded.
    #[error("dataset error: {0}")]
    Dataset(ErrorInfo),
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

impl NonoError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NonoError::Config(info)
            | NonoError::Shape(info)
            | NonoError::Insufficient(info)
            | NonoError::Dataset(info)
            | NonoError::Serde(info) => info,
        }
    }

    /// Builds the error raised when a sampling run finds too few valid puzzles.
    pub fn insufficient(grid_size: usize, found: usize, requested: usize) -> Self {
        NonoError::Insufficient(
            ErrorInfo::new(
                "insufficient-valid-puzzles",
                format!("only found {found} valid puzzles, need {requested}"),
            )
            .with_context("grid_size", grid_size)
            .with_context("found", found)
            .with_context("requested", requested)
            .with_hint("increase the candidate pool size or request fewer puzzles"),
        )
    }

    /// Builds a shape error for a row whose length does not match the grid.
    pub fn row_length(kind: &str, index: Option<usize>, expected: usize, actual: usize) -> Self {
        let mut info = ErrorInfo::new(
            format!("{kind}-row-shape"),
            format!("{kind} row has {actual} values, expected {expected}"),
        )
        .with_context("expected", expected)
        .with_context("actual", actual);
        if let Some(index) = index {
            info = info.with_context("index", index);
        }
        NonoError::Shape(info)
    }
}
