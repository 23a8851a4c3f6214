// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Semantic resolution for a debugger's location and range command
//! languages.
//!
//! Two mini-languages are supported: breakpoint location expressions
//! (`foo.py:12`, `gcd()`, `foo.py:5 if x > 1`) and source range
//! expressions (`foo.py:5`, `6,+2`, `,foo.py:5`, `-`). The entry
//! points scan and parse the expression text into a syntax tree, walk
//! the tree, and return typed domain values the breakpoint-setting and
//! source-listing commands consume directly.

mod char_with_index;
mod peekableiter;
mod range;
mod scanner;
mod tree_printer;

pub mod error;
pub mod error_printer;
pub mod parser;
pub mod resolver;
pub mod semantics;
pub mod token;
pub mod tree;

pub use resolver::{resolve_breakpoint_expression, resolve_range_expression};

/// Switches for debugging the scanner and parser themselves.
///
/// None of these affect the returned value; the intermediate artifacts
/// are printed to stderr.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Diagnostics {
    /// Print the scanned token list.
    pub show_tokens: bool,

    /// Print the syntax tree.
    pub show_ast: bool,

    /// Trace each recognized grammar production.
    pub show_grammar: bool,
}
