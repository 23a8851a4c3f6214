// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::range::Range;

/// Represents a token of the debugger's location and range mini-languages.
///
/// The same token vocabulary serves both grammars: breakpoint location
/// expressions (`bp_start`) and source range expressions (`range_start`).
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // A path-like word, e.g. `foo.py`, `/tmp/foo.py`, `../foo.py`.
    //
    // A filename may also be written as a double-quoted string to allow
    // spaces, colons and commas in the name, e.g. `"my file.py"`.
    // The stored value has the quotes stripped.
    //
    // Loose words in a trailing condition (e.g. `x`, `>`) are also
    // scanned as filenames. The condition text is recovered from the
    // original input by offset, so these tokens are never interpreted.
    Filename(String),

    // A function name with its call marker, e.g. `gcd()`.
    //
    // The stored value keeps the trailing `()`; the semantic walker
    // strips the marker when building a `Location`.
    FuncName(String),

    // An unsigned decimal number, used as a line number.
    Number(usize),

    // An explicitly signed count, e.g. `+2`.
    //
    // Used in range expressions as a line-count offset from the first
    // location, e.g. `6,+2`.
    Offset(usize),

    // A bare `+` or `-`, meaning "relative to the last shown position".
    // Only meaningful in range expressions.
    Direction(Direction),

    // The keyword `if`, introducing a trailing breakpoint condition.
    If,

    // `,`
    Comma,

    // `:`
    Colon,

    // A run of whitespace characters, collapsed into a single token.
    Space,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    Forward,  // `+`
    Backward, // `-`
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "+",
            Direction::Backward => "-",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Filename(value) => write!(f, "{}", value),
            Token::FuncName(value) => write!(f, "{}", value),
            Token::Number(value) => write!(f, "{}", value),
            Token::Offset(value) => write!(f, "+{}", value),
            Token::Direction(direction) => write!(f, "{}", direction),
            Token::If => write!(f, "if"),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),
            Token::Space => write!(f, " "),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TokenWithRange {
    pub token: Token,
    pub range: Range,
}

impl TokenWithRange {
    pub fn new(token: Token, range: Range) -> Self {
        Self { token, range }
    }
}
