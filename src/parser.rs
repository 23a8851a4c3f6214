// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    Diagnostics,
    error::ResolveError,
    peekableiter::PeekableIter,
    range::Range,
    scanner::scan_from_str,
    token::{Token, TokenWithRange},
    tree::{Node, NodeKind},
    tree_printer::{join_tokens, print_tree},
};

// Buffer size for lookahead while parsing.
// The longest decision needs 4 tokens: `FILENAME SPACE line SPACE NUMBER`.
const PEEK_BUFFER_LENGTH_PARSER: usize = 4;

/// Parses a breakpoint location expression (entry symbol `bp_start`).
///
/// Grammar:
///
/// ```text
/// bp_start    ::= opt_space location_if opt_space
/// location_if ::= location (SPACE IF tokens)?
/// location    ::= FILENAME (COLON NUMBER | SPACE ("line" SPACE)? NUMBER)?
///               | FUNCNAME
///               | NUMBER
/// tokens      ::= token+
/// ```
pub fn parse_location_expression(
    text: &str,
    diagnostics: &Diagnostics,
) -> Result<Node, ResolveError> {
    let tokens = scan_from_str(text)?;
    if diagnostics.show_tokens {
        eprintln!("tokens: {}", join_tokens(&tokens));
    }

    let mut token_iter = tokens.into_iter();
    let mut peekable_token_iter = PeekableIter::new(&mut token_iter, PEEK_BUFFER_LENGTH_PARSER);
    let mut parser = Parser::new(&mut peekable_token_iter, diagnostics.show_grammar);
    let tree = parser.parse_bp_start()?;

    if diagnostics.show_ast {
        eprintln!("{}", print_tree(&tree));
    }

    Ok(tree)
}

/// Parses a source range expression (entry symbol `range_start`).
///
/// Grammar:
///
/// ```text
/// range_start ::= opt_space range opt_space
/// range       ::= location | FUNCNAME | NUMBER | OFFSET | DIRECTION
///               | COMMA opt_space location
///               | location opt_space COMMA
///               | location opt_space COMMA opt_space (NUMBER | OFFSET)
/// ```
///
/// In the comma productions the `opt_space` node is always present
/// (empty when no whitespace was written), so the `range` node's child
/// count is deterministically 1, 3 or 5.
pub fn parse_range_expression(
    text: &str,
    diagnostics: &Diagnostics,
) -> Result<Node, ResolveError> {
    let tokens = scan_from_str(text)?;
    if diagnostics.show_tokens {
        eprintln!("tokens: {}", join_tokens(&tokens));
    }

    let mut token_iter = tokens.into_iter();
    let mut peekable_token_iter = PeekableIter::new(&mut token_iter, PEEK_BUFFER_LENGTH_PARSER);
    let mut parser = Parser::new(&mut peekable_token_iter, diagnostics.show_grammar);
    let tree = parser.parse_range_start()?;

    if diagnostics.show_ast {
        eprintln!("{}", print_tree(&tree));
    }

    Ok(tree)
}

struct Parser<'a> {
    upstream: &'a mut PeekableIter<'a, TokenWithRange>,

    // The range of the token consumed by the latest `next_token()`.
    last_range: Range,

    // True once any token has been consumed. Used to report a sensible
    // cursor offset for errors on empty input.
    consumed_any: bool,

    // Trace each recognized production to stderr (`show_grammar`).
    show_grammar: bool,
}

impl<'a> Parser<'a> {
    fn new(upstream: &'a mut PeekableIter<'a, TokenWithRange>, show_grammar: bool) -> Self {
        Self {
            upstream,
            last_range: Range::default(),
            consumed_any: false,
            show_grammar,
        }
    }

    fn next_token(&mut self) -> Option<TokenWithRange> {
        match self.upstream.next() {
            Some(token_with_range) => {
                self.last_range = token_with_range.range;
                self.consumed_any = true;
                Some(token_with_range)
            }
            None => None,
        }
    }

    fn peek_token(&self, offset: usize) -> Option<&Token> {
        match self.upstream.peek(offset) {
            Some(TokenWithRange { token, .. }) => Some(token),
            None => None,
        }
    }

    /// The character offset to report for an error at the current
    /// parsing position.
    fn cursor(&self) -> usize {
        match self.upstream.peek(0) {
            Some(TokenWithRange { range, .. }) => range.start,
            None if self.consumed_any => self.last_range.end_included + 1,
            None => 0,
        }
    }

    /// Consumes the next token into a leaf node.
    fn consume_leaf(&mut self) -> Result<Node, ResolveError> {
        match self.next_token() {
            Some(token_with_range) => Ok(Node::leaf(token_with_range)),
            None => Err(ResolveError::Parse(
                "Unexpected end of the expression.".to_owned(),
                self.cursor(),
            )),
        }
    }

    /// Consumes a `SPACE` token into an `opt_space` node, if present.
    fn optional_space_node(&mut self) -> Option<Node> {
        if matches!(self.peek_token(0), Some(Token::Space)) {
            self.next_token()
                .map(|token_with_range| {
                    Node::interior(NodeKind::OptSpace, vec![Node::leaf(token_with_range)])
                })
        } else {
            None
        }
    }

    /// Like `optional_space_node`, but always yields an `opt_space`
    /// node (empty when no whitespace is present). Used in the comma
    /// productions of `range` to keep the child count deterministic.
    fn opt_space_node(&mut self) -> Node {
        match self.optional_space_node() {
            Some(node) => node,
            None => Node::interior(NodeKind::OptSpace, vec![]),
        }
    }

    fn expect_end(&mut self) -> Result<(), ResolveError> {
        match self.peek_token(0) {
            Some(token) => Err(ResolveError::Parse(
                format!("Unexpected trailing input \"{}\".", token),
                self.cursor(),
            )),
            None => Ok(()),
        }
    }

    fn trace(&self, production: &str) {
        if self.show_grammar {
            eprintln!("reduce: {}", production);
        }
    }
}

impl Parser<'_> {
    fn parse_bp_start(&mut self) -> Result<Node, ResolveError> {
        let mut children = vec![];

        if let Some(opt_space) = self.optional_space_node() {
            children.push(opt_space);
        }

        children.push(self.parse_location_if()?);

        if let Some(opt_space) = self.optional_space_node() {
            children.push(opt_space);
        }

        self.expect_end()?;
        self.trace("bp_start ::= opt_space location_if opt_space");

        Ok(Node::interior(NodeKind::BpStart, children))
    }

    fn parse_location_if(&mut self) -> Result<Node, ResolveError> {
        let mut children = vec![self.parse_location()?];

        // An optional trailing condition, introduced by the `if` keyword.
        let if_follows = matches!(self.peek_token(0), Some(Token::If))
            || (matches!(self.peek_token(0), Some(Token::Space))
                && matches!(self.peek_token(1), Some(Token::If)));

        if if_follows {
            if matches!(self.peek_token(0), Some(Token::Space)) {
                children.push(self.consume_leaf()?); // SPACE
            }
            children.push(self.consume_leaf()?); // IF

            // Collect the remaining tokens verbatim. The condition text is
            // recovered from the original input by offset, so these leaves
            // are never interpreted.
            let mut rest = vec![];
            while self.peek_token(0).is_some() {
                rest.push(self.consume_leaf()?);
            }
            if !rest.is_empty() {
                children.push(Node::interior(NodeKind::Tokens, rest));
            }

            self.trace("location_if ::= location SPACE IF tokens");
        } else {
            self.trace("location_if ::= location");
        }

        Ok(Node::interior(NodeKind::LocationIf, children))
    }

    fn parse_location(&mut self) -> Result<Node, ResolveError> {
        match self.peek_token(0) {
            Some(Token::Filename(_)) => {
                let mut children = vec![self.consume_leaf()?];

                if matches!(self.peek_token(0), Some(Token::Colon))
                    && matches!(self.peek_token(1), Some(Token::Number(_)))
                {
                    children.push(self.consume_leaf()?); // COLON
                    children.push(self.consume_leaf()?); // NUMBER
                    self.trace("location ::= FILENAME COLON NUMBER");
                } else if matches!(self.peek_token(0), Some(Token::Space))
                    && matches!(self.peek_token(1), Some(Token::Number(_)))
                {
                    children.push(self.consume_leaf()?); // SPACE
                    children.push(self.consume_leaf()?); // NUMBER
                    self.trace("location ::= FILENAME SPACE NUMBER");
                } else if matches!(self.peek_token(0), Some(Token::Space))
                    && matches!(self.peek_token(1), Some(Token::Filename(word)) if word == "line")
                    && matches!(self.peek_token(2), Some(Token::Space))
                    && matches!(self.peek_token(3), Some(Token::Number(_)))
                {
                    // e.g. `/tmp/foo.py line 12`
                    children.push(self.consume_leaf()?); // SPACE
                    children.push(self.consume_leaf()?); // FILENAME "line"
                    children.push(self.consume_leaf()?); // SPACE
                    children.push(self.consume_leaf()?); // NUMBER
                    self.trace("location ::= FILENAME SPACE line SPACE NUMBER");
                } else {
                    self.trace("location ::= FILENAME");
                }

                Ok(Node::interior(NodeKind::Location, children))
            }
            Some(Token::FuncName(_)) => {
                let leaf = self.consume_leaf()?;
                self.trace("location ::= FUNCNAME");
                Ok(Node::interior(NodeKind::Location, vec![leaf]))
            }
            Some(Token::Number(_)) => {
                let leaf = self.consume_leaf()?;
                self.trace("location ::= NUMBER");
                Ok(Node::interior(NodeKind::Location, vec![leaf]))
            }
            Some(_) => Err(ResolveError::Parse(
                "Expect a filename, function name, or line number.".to_owned(),
                self.cursor(),
            )),
            None => Err(ResolveError::Parse(
                "Expect a location expression.".to_owned(),
                self.cursor(),
            )),
        }
    }

    fn parse_range_start(&mut self) -> Result<Node, ResolveError> {
        let mut children = vec![];

        if let Some(opt_space) = self.optional_space_node() {
            children.push(opt_space);
        }

        children.push(self.parse_range()?);

        if let Some(opt_space) = self.optional_space_node() {
            children.push(opt_space);
        }

        self.expect_end()?;
        self.trace("range_start ::= opt_space range opt_space");

        Ok(Node::interior(NodeKind::RangeStart, children))
    }

    fn parse_range(&mut self) -> Result<Node, ResolveError> {
        match self.peek_token(0) {
            Some(Token::Comma) => {
                // range ::= COMMA opt_space location
                let comma = self.consume_leaf()?;
                let opt_space = self.opt_space_node();
                let location = self.parse_location()?;

                self.trace("range ::= COMMA opt_space location");
                Ok(Node::interior(
                    NodeKind::Range,
                    vec![comma, opt_space, location],
                ))
            }
            Some(Token::Direction(_)) => {
                let leaf = self.consume_leaf()?;
                self.trace("range ::= DIRECTION");
                Ok(Node::interior(NodeKind::Range, vec![leaf]))
            }
            Some(Token::Offset(_)) => {
                let leaf = self.consume_leaf()?;
                self.trace("range ::= OFFSET");
                Ok(Node::interior(NodeKind::Range, vec![leaf]))
            }
            Some(Token::FuncName(_)) if !self.range_continues_with_comma() => {
                let leaf = self.consume_leaf()?;
                self.trace("range ::= FUNCNAME");
                Ok(Node::interior(NodeKind::Range, vec![leaf]))
            }
            Some(Token::Number(_)) if !self.range_continues_with_comma() => {
                let leaf = self.consume_leaf()?;
                self.trace("range ::= NUMBER");
                Ok(Node::interior(NodeKind::Range, vec![leaf]))
            }
            Some(Token::Filename(_)) | Some(Token::FuncName(_)) | Some(Token::Number(_)) => {
                self.parse_range_from_location()
            }
            Some(_) => Err(ResolveError::Parse(
                "Expect a range expression.".to_owned(),
                self.cursor(),
            )),
            None => Err(ResolveError::Parse(
                "Expect a range expression.".to_owned(),
                self.cursor(),
            )),
        }
    }

    /// True when the next location is followed by a comma (with
    /// optional whitespace in between), i.e. the range continues with
    /// a start-only or explicit-pair production.
    fn range_continues_with_comma(&self) -> bool {
        matches!(self.peek_token(1), Some(Token::Comma))
            || (matches!(self.peek_token(1), Some(Token::Space))
                && matches!(self.peek_token(2), Some(Token::Comma)))
    }

    fn parse_range_from_location(&mut self) -> Result<Node, ResolveError> {
        let location = self.parse_location()?;

        // `location` alone is a single-point range. A trailing space is
        // left for `range_start` to consume.
        if self.peek_token(0).is_none()
            || (matches!(self.peek_token(0), Some(Token::Space)) && self.peek_token(1).is_none())
        {
            self.trace("range ::= location");
            return Ok(Node::interior(NodeKind::Range, vec![location]));
        }

        let mut children = vec![location];
        children.push(self.opt_space_node());

        if matches!(self.peek_token(0), Some(Token::Comma)) {
            children.push(self.consume_leaf()?); // COMMA
        } else {
            return Err(ResolveError::Parse(
                "Expect a comma after the first location of a range.".to_owned(),
                self.cursor(),
            ));
        }

        // `location ,` is a start-only range.
        if self.peek_token(0).is_none()
            || (matches!(self.peek_token(0), Some(Token::Space)) && self.peek_token(1).is_none())
        {
            self.trace("range ::= location opt_space COMMA");
            return Ok(Node::interior(NodeKind::Range, children));
        }

        children.push(self.opt_space_node());

        match self.peek_token(0) {
            Some(Token::Number(_)) | Some(Token::Offset(_)) => {
                children.push(self.consume_leaf()?); // NUMBER or OFFSET
            }
            _ => {
                return Err(ResolveError::Parse(
                    "Expect a line number or a +offset as the end of a range.".to_owned(),
                    self.cursor(),
                ));
            }
        }

        self.trace("range ::= location opt_space COMMA opt_space NUMBER");
        Ok(Node::interior(NodeKind::Range, children))
    }
}
