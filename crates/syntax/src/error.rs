// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse error type.

use thiserror::Error;

fn file_prefix(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("{}:", name)
    }
}

/// An error found while parsing a source file.
///
/// Exactly one error is reported per [`parse`](crate::parse) call: the first
/// one encountered. It renders as `filename:line:column: message`, with the
/// filename and its colon omitted when no filename was given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}{}:{}: {}", file_prefix(.filename), .line, .column, .text)]
pub struct ParseError {
    /// Name the source was parsed under; may be empty.
    pub filename: String,
    /// 1-based line of the offending token or construct.
    pub line: usize,
    /// 1-based byte column within that line.
    pub column: usize,
    /// Human-readable description.
    pub text: String,
}
