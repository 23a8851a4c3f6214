// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::token::{Token, TokenWithRange};

/// The grammar symbol of a syntax-tree node.
///
/// Interior kinds mirror the productions of the two entry grammars,
/// leaf kinds mirror the scanner's token vocabulary. The `Display`
/// names follow the grammar's own spelling: lowercase for productions,
/// uppercase for terminals.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NodeKind {
    // Productions
    BpStart,
    RangeStart,
    LocationIf,
    Location,
    Range,
    OptSpace,
    Tokens,

    // Terminals
    Filename,
    FuncName,
    Number,
    Offset,
    Direction,
    If,
    Comma,
    Colon,
    Space,
}

impl NodeKind {
    pub fn from_token(token: &Token) -> Self {
        match token {
            Token::Filename(_) => NodeKind::Filename,
            Token::FuncName(_) => NodeKind::FuncName,
            Token::Number(_) => NodeKind::Number,
            Token::Offset(_) => NodeKind::Offset,
            Token::Direction(_) => NodeKind::Direction,
            Token::If => NodeKind::If,
            Token::Comma => NodeKind::Comma,
            Token::Colon => NodeKind::Colon,
            Token::Space => NodeKind::Space,
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            NodeKind::BpStart => "bp_start",
            NodeKind::RangeStart => "range_start",
            NodeKind::LocationIf => "location_if",
            NodeKind::Location => "location",
            NodeKind::Range => "range",
            NodeKind::OptSpace => "opt_space",
            NodeKind::Tokens => "tokens",
            NodeKind::Filename => "FILENAME",
            NodeKind::FuncName => "FUNCNAME",
            NodeKind::Number => "NUMBER",
            NodeKind::Offset => "OFFSET",
            NodeKind::Direction => "DIRECTION",
            NodeKind::If => "IF",
            NodeKind::Comma => "COMMA",
            NodeKind::Colon => "COLON",
            NodeKind::Space => "SPACE",
        };
        write!(f, "{}", name)
    }
}

/// A node of the concrete syntax tree produced by the grammar parser.
///
/// Interior nodes carry children, leaf nodes carry the token they were
/// built from (with its source range). The tree is immutable once
/// built; the semantic walker resolves values without writing back.
#[derive(Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub token: Option<TokenWithRange>,
}

impl Node {
    pub fn interior(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children,
            token: None,
        }
    }

    pub fn leaf(token_with_range: TokenWithRange) -> Self {
        Self {
            kind: NodeKind::from_token(&token_with_range.token),
            children: vec![],
            token: Some(token_with_range),
        }
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }
}
