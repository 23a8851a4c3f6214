// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    token::TokenWithRange,
    tree::Node,
};

const DEFAULT_INDENT_CHARS: &str = "    ";

/// Join tokens with spaces.
/// Used by the `show_tokens` diagnostic.
pub fn join_tokens(tokens: &[TokenWithRange]) -> String {
    tokens
        .iter()
        .map(|TokenWithRange { token, .. }| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the syntax tree one node per line, children indented under
/// their parent. Used by the `show_ast` diagnostic.
pub fn print_tree(node: &Node) -> String {
    let mut lines = vec![];
    print_node(node, 0, &mut lines);
    lines.join("\n")
}

fn print_node(node: &Node, indent_level: usize, lines: &mut Vec<String>) {
    let indent = DEFAULT_INDENT_CHARS.repeat(indent_level);

    match &node.token {
        Some(TokenWithRange { token, range }) => {
            lines.push(format!(
                "{}{} \"{}\" [{}..{}]",
                indent, node.kind, token, range.start, range.end_included
            ));
        }
        None => {
            lines.push(format!("{}{}", indent, node.kind));
            for child in &node.children {
                print_node(child, indent_level + 1, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        range::Range,
        token::{Token, TokenWithRange},
        tree::{Node, NodeKind},
        tree_printer::{join_tokens, print_tree},
    };

    #[test]
    fn test_join_tokens() {
        let tokens = vec![
            TokenWithRange::new(Token::Filename("foo.py".to_owned()), Range::new(0, 5)),
            TokenWithRange::new(Token::Colon, Range::from_position(6)),
            TokenWithRange::new(Token::Number(12), Range::new(7, 8)),
        ];

        assert_eq!(join_tokens(&tokens), "foo.py : 12");
    }

    #[test]
    fn test_print_tree() {
        let tree = Node::interior(
            NodeKind::Location,
            vec![
                Node::leaf(TokenWithRange::new(
                    Token::Filename("foo.py".to_owned()),
                    Range::new(0, 5),
                )),
                Node::leaf(TokenWithRange::new(Token::Colon, Range::from_position(6))),
                Node::leaf(TokenWithRange::new(Token::Number(12), Range::new(7, 8))),
            ],
        );

        assert_eq!(
            print_tree(&tree),
            "location\n    \
             FILENAME \"foo.py\" [0..5]\n    \
             COLON \":\" [6..6]\n    \
             NUMBER \"12\" [7..8]"
        );
    }
}
