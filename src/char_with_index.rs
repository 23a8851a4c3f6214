// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

#[derive(Debug, PartialEq)]
/// Represents a character along with its index in the command text.
pub struct CharWithIndex {
    /// The character from the command text.
    pub character: char,

    /// The absolute character index in the command text.
    pub index: usize,
}

impl CharWithIndex {
    pub fn new(character: char, index: usize) -> Self {
        Self { character, index }
    }
}

/// An iterator that yields each character from the upstream iterator
/// along with its index in the command text.
pub struct CharsWithIndexIter<'a> {
    /// The underlying iterator that provides characters.
    upstream: &'a mut dyn Iterator<Item = char>,

    /// The index of the next character to be returned.
    current_index: usize,
}

impl<'a> CharsWithIndexIter<'a> {
    pub fn new(upstream: &'a mut dyn Iterator<Item = char>) -> Self {
        Self {
            upstream,
            current_index: 0,
        }
    }
}

impl Iterator for CharsWithIndexIter<'_> {
    type Item = CharWithIndex;

    fn next(&mut self) -> Option<Self::Item> {
        match self.upstream.next() {
            Some(c) => {
                let index = self.current_index;
                self.current_index += 1;
                Some(CharWithIndex::new(c, index))
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::char_with_index::{CharWithIndex, CharsWithIndexIter};

    #[test]
    fn test_chars_with_index_iter() {
        let mut chars = "a:12".chars();
        let mut char_index_iter = CharsWithIndexIter::new(&mut chars);

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new('a', 0))
        );

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new(':', 1))
        );

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new('1', 2))
        );

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new('2', 3))
        );

        assert!(char_index_iter.next().is_none());
    }

    #[test]
    fn test_chars_with_index_iter_counts_characters_not_bytes() {
        let mut chars = "中.py".chars();
        let mut char_index_iter = CharsWithIndexIter::new(&mut chars);

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new('中', 0))
        );

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new('.', 1))
        );

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new('p', 2))
        );

        assert_eq!(
            char_index_iter.next(),
            Some(CharWithIndex::new('y', 3))
        );

        assert!(char_index_iter.next().is_none());
    }
}
