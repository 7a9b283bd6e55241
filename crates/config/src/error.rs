//! Error types for configuration loading and validation.

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
    result::Result as StdResult,
};

use thiserror::Error;

/// Result alias for configuration operations.
pub type Result<T> = StdResult<T, Error>;

/// Lines of context shown above the failing line in an excerpt.
const CONTEXT_BEFORE: usize = 2;

/// Width of the line-number gutter in an excerpt.
const GUTTER: usize = 4;

#[derive(Debug, Error, Clone, PartialEq)]
/// Errors produced while loading, parsing, or validating a tooltip configuration.
pub enum Error {
    /// The file could not be read, or is not a `.ron` file.
    #[error("{message}")]
    Read {
        /// File involved, when known.
        path: Option<PathBuf>,
        /// What went wrong.
        message: String,
    },

    /// RON syntax or shape error.
    #[error("{message}")]
    Parse {
        /// File involved, when known.
        path: Option<PathBuf>,
        /// 1-based line.
        line: usize,
        /// 1-based column.
        col: usize,
        /// What the parser reported.
        message: String,
        /// Source lines around the failure with a caret under `col`.
        excerpt: String,
    },

    /// A field parsed but holds an unacceptable value.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl Error {
    /// Validation error on `field`.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Multi-line rendering for terminals: where, what, and the excerpt for parse errors.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => {
                format!("Read error{}: {message}", at(path.as_deref(), None))
            }
            Self::Parse {
                path,
                line,
                col,
                message,
                excerpt,
            } => format!(
                "Config parse error{}\n{message}\n{excerpt}",
                at(path.as_deref(), Some((*line, *col)))
            ),
            Self::Validation { field, message } => {
                format!("Config validation error in `{field}`\n{message}")
            }
        }
    }

    /// File the error relates to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path.as_deref(),
            Self::Validation { .. } => None,
        }
    }
}

/// `" at <path>:<line>:<col>"`, `" at line L, column C"`, or empty.
fn at(path: Option<&Path>, pos: Option<(usize, usize)>) -> String {
    match (path, pos) {
        (Some(p), Some((line, col))) => format!(" at {}:{line}:{col}", p.display()),
        (Some(p), None) => format!(" at {}", p.display()),
        (None, Some((line, col))) => format!(" at line {line}, column {col}"),
        (None, None) => String::new(),
    }
}

/// Render the lines around `(line_no, col_no)` with a caret under the column.
///
/// Shows up to two lines before and one after the failing line, each prefixed
/// with its number.
pub fn excerpt_at(source: &str, line_no: usize, col_no: usize) -> String {
    let first = line_no.saturating_sub(CONTEXT_BEFORE).max(1);
    let mut out = String::new();
    for (n, text) in source
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .skip(first - 1)
        .take_while(|(n, _)| *n <= line_no + 1)
    {
        let gutter = format!(" {n:>GUTTER$} | ");
        let _ignored = writeln!(out, "{gutter}{text}");
        if n == line_no {
            let pad = gutter.len() + col_no.saturating_sub(1);
            let _ignored = writeln!(out, "{:pad$}^", "");
        }
    }
    out
}
