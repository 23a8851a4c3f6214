// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    char_with_index::{CharWithIndex, CharsWithIndexIter},
    error::ResolveError,
    peekableiter::PeekableIter,
    range::Range,
    token::{Direction, Token, TokenWithRange},
};

use unicode_normalization::UnicodeNormalization;

// Buffer size for lookahead while scanning.
const PEEK_BUFFER_LENGTH_SCAN: usize = 2;

pub fn scan_from_str(text: &str) -> Result<Vec<TokenWithRange>, ResolveError> {
    let mut chars = text.chars();
    let mut char_index_iter = CharsWithIndexIter::new(&mut chars);
    let mut peekable_char_iter = PeekableIter::new(&mut char_index_iter, PEEK_BUFFER_LENGTH_SCAN);
    let mut scanner = Scanner::new(&mut peekable_char_iter);
    scanner.scan()
}

/// Returns true when the character terminates a word.
///
/// Colons and commas are structural in both grammars, so a bare
/// filename never contains them; quoted filenames may.
fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ':' || c == '"'
}

struct Scanner<'a> {
    upstream: &'a mut PeekableIter<'a, CharWithIndex>,

    // The index of the character consumed by the latest `next_char()`.
    last_index: usize,
}

impl<'a> Scanner<'a> {
    fn new(upstream: &'a mut PeekableIter<'a, CharWithIndex>) -> Self {
        Self {
            upstream,
            last_index: 0,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        match self.upstream.next() {
            Some(CharWithIndex { character, index }) => {
                self.last_index = index;
                Some(character)
            }
            None => None,
        }
    }

    fn peek_char(&self, offset: usize) -> Option<&char> {
        match self.upstream.peek(offset) {
            Some(CharWithIndex { character, .. }) => Some(character),
            None => None,
        }
    }
}

impl Scanner<'_> {
    fn scan(&mut self) -> Result<Vec<TokenWithRange>, ResolveError> {
        let mut output = vec![];

        while let Some(current_char) = self.peek_char(0) {
            match current_char {
                c if c.is_whitespace() => {
                    output.push(self.scan_whitespace());
                }
                ',' => {
                    self.next_char(); // consume ','

                    output.push(TokenWithRange::new(
                        Token::Comma,
                        Range::from_position(self.last_index),
                    ));
                }
                ':' => {
                    self.next_char(); // consume ':'

                    output.push(TokenWithRange::new(
                        Token::Colon,
                        Range::from_position(self.last_index),
                    ));
                }
                '"' => {
                    output.push(self.scan_quoted_filename()?);
                }
                '+' if matches!(self.peek_char(1), Some(c) if c.is_ascii_digit()) => {
                    output.push(self.scan_offset()?);
                }
                '+' | '-' => {
                    let direction = if *current_char == '+' {
                        Direction::Forward
                    } else {
                        Direction::Backward
                    };

                    self.next_char(); // consume '+' or '-'

                    output.push(TokenWithRange::new(
                        Token::Direction(direction),
                        Range::from_position(self.last_index),
                    ));
                }
                _ => {
                    output.push(self.scan_word()?);
                }
            }
        }

        Ok(output)
    }

    /// Collapses a run of whitespace characters into a single `Space` token.
    fn scan_whitespace(&mut self) -> TokenWithRange {
        self.next_char(); // consume the first whitespace character
        let start = self.last_index;

        while let Some(c) = self.peek_char(0) {
            if c.is_whitespace() {
                self.next_char(); // consume the whitespace character
            } else {
                break;
            }
        }

        TokenWithRange::new(Token::Space, Range::new(start, self.last_index))
    }

    /// Scans a double-quoted filename. Quoting allows spaces, colons and
    /// commas within the name. Escape sequences are not supported.
    fn scan_quoted_filename(&mut self) -> Result<TokenWithRange, ResolveError> {
        self.next_char(); // consume the opening '"'
        let start = self.last_index;

        let mut name = String::new();
        loop {
            match self.next_char() {
                Some('"') => {
                    break;
                }
                Some(c) => {
                    name.push(c);
                }
                None => {
                    return Err(ResolveError::Scan(
                        "Missing the closing quote of a quoted filename.".to_owned(),
                        start,
                    ));
                }
            }
        }

        Ok(TokenWithRange::new(
            Token::Filename(name),
            Range::new(start, self.last_index),
        ))
    }

    /// Scans `+` followed by decimal digits, e.g. `+2`.
    fn scan_offset(&mut self) -> Result<TokenWithRange, ResolveError> {
        self.next_char(); // consume '+'
        let start = self.last_index;

        let mut digits = String::new();
        while let Some(c) = self.peek_char(0) {
            if c.is_ascii_digit() {
                digits.push(*c);
                self.next_char(); // consume the digit
            } else if is_word_boundary(*c) {
                break;
            } else {
                return Err(ResolveError::Scan(
                    "An offset may only contain decimal digits.".to_owned(),
                    start,
                ));
            }
        }

        let value = digits
            .parse::<usize>()
            .map_err(|_| ResolveError::Scan("The offset number is too large.".to_owned(), start))?;

        Ok(TokenWithRange::new(
            Token::Offset(value),
            Range::new(start, self.last_index),
        ))
    }

    /// Scans a bare word: anything up to whitespace, `,`, `:` or `"`.
    ///
    /// A word of decimal digits becomes a `Number`, the word `if`
    /// becomes the `If` keyword token, a word ending with `()` becomes
    /// a function name, everything else is a filename.
    fn scan_word(&mut self) -> Result<TokenWithRange, ResolveError> {
        let mut word = String::new();

        if let Some(c) = self.next_char() {
            word.push(c);
        }
        let start = self.last_index;

        while let Some(c) = self.peek_char(0) {
            if is_word_boundary(*c) {
                break;
            }
            word.push(*c);
            self.next_char(); // consume the character
        }

        let range = Range::new(start, self.last_index);

        let token = if word.chars().all(|c| c.is_ascii_digit()) {
            let value = word.parse::<usize>().map_err(|_| {
                ResolveError::Scan("The line number is too large.".to_owned(), start)
            })?;
            Token::Number(value)
        } else if word == "if" {
            Token::If
        } else if word.len() > 2 && word.ends_with("()") {
            // Function names are NFC-normalized so that visually identical
            // names compare equal regardless of the input encoding form.
            Token::FuncName(word.nfc().collect::<String>())
        } else {
            Token::Filename(word)
        };

        Ok(TokenWithRange::new(token, range))
    }
}
