// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// Errors produced while resolving a location or range expression.
///
/// Scan and parse errors carry the cursor offset (a character index
/// into the original command text) so the caller can render a
/// caret-style diagnostic, see `error_printer`.
#[derive(Debug, PartialEq)]
pub enum ResolveError {
    /// The scanner found a character sequence it does not recognize.
    Scan(String, /* cursor offset */ usize),

    /// The token stream matches no production of the entry grammar.
    Parse(String, /* cursor offset */ usize),

    /// The syntax tree contains a node kind or child arrangement the
    /// semantic walker has no rule for. This signals a grammar/walker
    /// mismatch and is not recoverable for the current call.
    SemanticShape(String),

    /// A syntactically valid breakpoint expression resolved to a
    /// location identifying neither a line number nor a function.
    Validation(String),
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResolveError::Scan(message, offset) => {
                write!(f, "Scan error at offset {}: {}", offset, message)
            }
            ResolveError::Parse(message, offset) => {
                write!(f, "Parse error at offset {}: {}", offset, message)
            }
            ResolveError::SemanticShape(message) => {
                write!(f, "Malformed expression structure: {}", message)
            }
            ResolveError::Validation(message) => {
                write!(f, "Invalid location: {}", message)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
