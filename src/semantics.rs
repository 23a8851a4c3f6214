// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    error::ResolveError,
    token::{Direction, Token, TokenWithRange},
    tree::{Node, NodeKind},
};

/// A position in source code: a file (optionally with a line), a bare
/// line number, or a function name.
///
/// A location used as a breakpoint target must have `line_number` or
/// `method` set; a path alone is never sufficient. The breakpoint
/// builder enforces this.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Location {
    pub path: Option<String>,
    pub line_number: Option<usize>,
    pub method: Option<String>,
}

impl Location {
    pub fn new(
        path: Option<String>,
        line_number: Option<usize>,
        method: Option<String>,
    ) -> Self {
        Self {
            path,
            line_number,
            method,
        }
    }

    pub fn from_line_number(line_number: usize) -> Self {
        Self {
            path: None,
            line_number: Some(line_number),
            method: None,
        }
    }

    pub fn from_method(method: String) -> Self {
        Self {
            path: None,
            line_number: None,
            method: Some(method),
        }
    }

    /// True when the location identifies a line number or a function,
    /// i.e. it is usable as a breakpoint target.
    pub fn is_resolvable(&self) -> bool {
        self.line_number.is_some() || self.method.is_some()
    }
}

/// A resolved breakpoint location expression.
///
/// `condition` is the verbatim trailing text after the `if` keyword,
/// preserved unparsed for later evaluation by the debugger.
#[derive(Debug, PartialEq, Clone)]
pub struct BreakpointLocation {
    pub location: Location,
    pub condition: Option<String>,
}

impl BreakpointLocation {
    pub fn new(location: Location, condition: Option<String>) -> Self {
        Self {
            location,
            condition,
        }
    }
}

/// What a range expression names after the comma (or on its own, for
/// the direction shorthand).
#[derive(Debug, PartialEq, Clone)]
pub enum RangeEnd {
    /// A full location, e.g. `,foo.py:5`.
    Location(Location),

    /// A bare line count from the first location, e.g. the `2` of `6,+2`.
    Offset(usize),

    /// `+` or `-`: relative to the last shown position.
    Direction(Direction),
}

/// A resolved source range expression.
///
/// The shapes are:
/// - single point: `first` set, `last` empty;
/// - direction-only: `first` empty, `last` is a direction;
/// - end-only: `first` empty, `last` is a location;
/// - start-only: `first` set, `last` empty;
/// - explicit pair: both set, `last` is a location's line count offset.
#[derive(Debug, PartialEq, Clone)]
pub struct ListRange {
    pub first: Option<Location>,
    pub last: Option<RangeEnd>,
}

impl ListRange {
    pub fn new(first: Option<Location>, last: Option<RangeEnd>) -> Self {
        Self { first, last }
    }
}

/// Resolves syntax trees into typed domain values.
///
/// The walker holds the original command text only to support the
/// offset-based extraction of condition text. Resolution is a pure
/// post-order recursion: a node's children are resolved before the
/// node itself, each node is visited once, and nothing is written back
/// onto the tree.
pub struct LocationWalker<'a> {
    text: &'a str,
}

impl<'a> LocationWalker<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Resolves a `bp_start` tree into a breakpoint location.
    ///
    /// The caller (the breakpoint builder) still has to validate that
    /// the resolved location identifies a line or a function.
    pub fn resolve_breakpoint(&self, root: &Node) -> Result<BreakpointLocation, ResolveError> {
        if !root.is(NodeKind::BpStart) {
            return Err(unrecognized_node(root));
        }

        let inner = root
            .children
            .iter()
            .find(|child| !is_passthrough(child))
            .ok_or_else(|| {
                ResolveError::SemanticShape(
                    "The breakpoint expression contains no location.".to_owned(),
                )
            })?;

        match inner.kind {
            NodeKind::LocationIf => self.resolve_location_if(inner),
            // A grammar without the `if` clause yields a bare location;
            // normalize it into a breakpoint location with no condition.
            NodeKind::Location => Ok(BreakpointLocation::new(
                self.resolve_location(inner)?,
                None,
            )),
            NodeKind::Number | NodeKind::FuncName => Ok(BreakpointLocation::new(
                self.resolve_leaf_location(inner)?,
                None,
            )),
            _ => Err(unrecognized_node(inner)),
        }
    }

    /// Resolves a `range_start` tree into a list range.
    pub fn resolve_range(&self, root: &Node) -> Result<ListRange, ResolveError> {
        if !root.is(NodeKind::RangeStart) {
            return Err(unrecognized_node(root));
        }

        let inner = root
            .children
            .iter()
            .find(|child| !is_passthrough(child))
            .ok_or_else(|| {
                ResolveError::SemanticShape(
                    "The range expression contains no range production.".to_owned(),
                )
            })?;

        if !inner.is(NodeKind::Range) {
            return Err(unrecognized_node(inner));
        }

        self.resolve_range_node(inner)
    }

    /// Handler for `location_if`: an optional leading location followed
    /// by an optional `if` condition.
    fn resolve_location_if(&self, node: &Node) -> Result<BreakpointLocation, ResolveError> {
        let mut location = Location::default();
        let mut condition = None;

        for child in &node.children {
            match child.kind {
                NodeKind::Location => {
                    location = self.resolve_location(child)?;
                }
                NodeKind::Number | NodeKind::FuncName => {
                    location = self.resolve_leaf_location(child)?;
                }
                NodeKind::If => {
                    condition = self.condition_after(child)?;
                }
                _ if is_passthrough(child) => {
                    // whitespace and the verbatim condition tokens
                }
                _ => {
                    return Err(unrecognized_node(child));
                }
            }
        }

        Ok(BreakpointLocation::new(location, condition))
    }

    /// Handler for `location`: dispatch on the first child's kind.
    fn resolve_location(&self, node: &Node) -> Result<Location, ResolveError> {
        let first = node.first_child().ok_or_else(|| {
            ResolveError::SemanticShape("A location production has no children.".to_owned())
        })?;

        match (first.kind, leaf_token(first)) {
            (NodeKind::Filename, Some(Token::Filename(path))) => {
                // If there is a line number, it is the last child of the location.
                let line_number = match node.last_child() {
                    Some(last) => match leaf_token(last) {
                        Some(Token::Number(value)) => Some(*value),
                        _ => None,
                    },
                    None => None,
                };

                Ok(Location::new(Some(path.clone()), line_number, None))
            }
            (NodeKind::FuncName, _) | (NodeKind::Number, _) => self.resolve_leaf_location(first),
            _ => Err(unrecognized_node(first)),
        }
    }

    /// Resolves a bare `NUMBER` or `FUNCNAME` leaf into a location.
    fn resolve_leaf_location(&self, node: &Node) -> Result<Location, ResolveError> {
        match leaf_token(node) {
            Some(Token::Number(value)) => Ok(Location::from_line_number(*value)),
            Some(Token::FuncName(value)) => {
                // Strip the grammar's `()` call marker from the name.
                let name = value.strip_suffix("()").unwrap_or(value);
                Ok(Location::from_method(name.to_owned()))
            }
            _ => Err(unrecognized_node(node)),
        }
    }

    /// Handler for `range`: productions are keyed by child count.
    fn resolve_range_node(&self, node: &Node) -> Result<ListRange, ResolveError> {
        match node.children.len() {
            1 | 2 => {
                // range ::= location | FUNCNAME | NUMBER | OFFSET | DIRECTION
                let last = node.last_child().ok_or_else(|| {
                    ResolveError::SemanticShape("A range production has no children.".to_owned())
                })?;

                match last.kind {
                    NodeKind::Location => Ok(ListRange::new(
                        Some(self.resolve_location(last)?),
                        None,
                    )),
                    NodeKind::FuncName | NodeKind::Number => Ok(ListRange::new(
                        Some(self.resolve_leaf_location(last)?),
                        None,
                    )),
                    NodeKind::Offset => match leaf_token(last) {
                        Some(Token::Offset(value)) => Ok(ListRange::new(
                            Some(Location::from_line_number(*value)),
                            None,
                        )),
                        _ => Err(unrecognized_node(last)),
                    },
                    NodeKind::Direction => match leaf_token(last) {
                        Some(Token::Direction(direction)) => Ok(ListRange::new(
                            None,
                            Some(RangeEnd::Direction(*direction)),
                        )),
                        _ => Err(unrecognized_node(last)),
                    },
                    _ => Err(unrecognized_node(last)),
                }
            }
            3 => {
                // range ::= COMMA opt_space location
                // range ::= location opt_space COMMA
                let first = &node.children[0];
                let last = &node.children[2];

                if !node.children[1].is(NodeKind::OptSpace) {
                    return Err(range_structure_error(node));
                }

                if first.is(NodeKind::Comma) && last.is(NodeKind::Location) {
                    // end-only: list up to the location
                    Ok(ListRange::new(
                        None,
                        Some(RangeEnd::Location(self.resolve_location(last)?)),
                    ))
                } else if first.is(NodeKind::Location) && last.is(NodeKind::Comma) {
                    // start-only: list from the location
                    Ok(ListRange::new(Some(self.resolve_location(first)?), None))
                } else {
                    Err(range_structure_error(node))
                }
            }
            5 => {
                // range ::= location opt_space COMMA opt_space (NUMBER | OFFSET)
                let first = &node.children[0];
                let comma = &node.children[2];
                let last = &node.children[4];

                if !first.is(NodeKind::Location)
                    || !comma.is(NodeKind::Comma)
                    || !node.children[1].is(NodeKind::OptSpace)
                    || !node.children[3].is(NodeKind::OptSpace)
                {
                    return Err(range_structure_error(node));
                }

                let count = match leaf_token(last) {
                    Some(Token::Number(value)) => *value,
                    Some(Token::Offset(value)) => *value,
                    _ => return Err(range_structure_error(node)),
                };

                Ok(ListRange::new(
                    Some(self.resolve_location(first)?),
                    Some(RangeEnd::Offset(count)),
                ))
            }
            _ => Err(range_structure_error(node)),
        }
    }

    /// Extracts the condition text following an `IF` leaf: the raw
    /// slice of the original input after the token, left-trimmed. Not
    /// a sub-parse.
    fn condition_after(&self, if_node: &Node) -> Result<Option<String>, ResolveError> {
        let range = match &if_node.token {
            Some(TokenWithRange { range, .. }) => range,
            None => {
                return Err(ResolveError::SemanticShape(
                    "An IF node carries no token.".to_owned(),
                ));
            }
        };

        let condition = self
            .slice_from_char_offset(range.end_included + 1)
            .trim_start();

        if condition.is_empty() {
            Ok(None)
        } else {
            Ok(Some(condition.to_owned()))
        }
    }

    /// Slices the original text from a character offset to the end.
    /// Token ranges are character indexes, not byte indexes.
    fn slice_from_char_offset(&self, char_offset: usize) -> &str {
        match self.text.char_indices().nth(char_offset) {
            Some((byte_offset, _)) => &self.text[byte_offset..],
            None => "",
        }
    }
}

/// Structural kinds the walker may step over without resolving:
/// whitespace, punctuation, and the verbatim condition tokens.
fn is_passthrough(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::OptSpace
            | NodeKind::Tokens
            | NodeKind::Space
            | NodeKind::Comma
            | NodeKind::Colon
    )
}

fn leaf_token(node: &Node) -> Option<&Token> {
    match &node.token {
        Some(TokenWithRange { token, .. }) => Some(token),
        None => None,
    }
}

/// The grammar produced a node the walker has no rule for. This is a
/// grammar/walker mismatch, reported loudly instead of defaulting.
fn unrecognized_node(node: &Node) -> ResolveError {
    ResolveError::SemanticShape(format!(
        "No semantic rule for a \"{}\" node here.",
        node.kind
    ))
}

fn range_structure_error(node: &Node) -> ResolveError {
    ResolveError::SemanticShape(format!(
        "Malformed range production with {} children.",
        node.children.len()
    ))
}
