// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::collections::VecDeque;

/// `PeekableIter` extends the functionality of `std::iter::Peekable` by allowing
/// peeking at elements at any specified offset, not just the next one.
pub struct PeekableIter<'a, T> {
    upstream: &'a mut dyn Iterator<Item = T>,
    buffer: VecDeque<T>,
    buffer_size: usize,
}

impl<'a, T> PeekableIter<'a, T> {
    /// Creates a new PeekableIter with the specified buffer size.
    /// The buffer is pre-filled with elements from the upstream iterator.
    ///
    /// `buffer_size` is the maximum lookahead. For example, if `buffer_size`
    /// is 2, you can peek with offsets 0 and 1.
    pub fn new(upstream: &'a mut dyn Iterator<Item = T>, buffer_size: usize) -> Self {
        let mut buffer = VecDeque::with_capacity(buffer_size);

        // Pre-fill the buffer with the first `buffer_size` elements from the upstream iterator.
        for _ in 0..buffer_size {
            match upstream.next() {
                Some(value) => buffer.push_back(value),
                None => break,
            }
        }

        Self {
            upstream,
            buffer,
            buffer_size,
        }
    }

    /// Returns a reference to the element at the specified offset in the buffer,
    /// or None if that position is empty. The offset must be less than the buffer size.
    pub fn peek(&self, offset: usize) -> Option<&T> {
        assert!(offset < self.buffer_size);
        self.buffer.get(offset)
    }
}

impl<T> Iterator for PeekableIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // The buffer is pre-filled during initialization, so we always dequeue
        // first, then fetch the next value from the upstream iterator.
        let value = self.buffer.pop_front();

        if let Some(next_value) = self.upstream.next() {
            self.buffer.push_back(next_value);
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use crate::peekableiter::PeekableIter;

    #[test]
    fn test_peekable_iter() {
        let s = "0123";
        let mut chars = s.chars();
        let mut iter = PeekableIter::new(&mut chars, 3);

        // Initial state: buffer contains '0', '1', '2'
        assert_eq!(Some(&'0'), iter.peek(0));
        assert_eq!(Some(&'1'), iter.peek(1));
        assert_eq!(Some(&'2'), iter.peek(2));

        // Consume '0'
        assert_eq!(Some('0'), iter.next());
        assert_eq!(Some(&'1'), iter.peek(0));
        assert_eq!(Some(&'2'), iter.peek(1));
        assert_eq!(Some(&'3'), iter.peek(2));

        // Consume '1'
        assert_eq!(Some('1'), iter.next());
        assert_eq!(Some(&'2'), iter.peek(0));
        assert_eq!(Some(&'3'), iter.peek(1));
        assert_eq!(None, iter.peek(2));

        // Consume '2'
        assert_eq!(Some('2'), iter.next());
        assert_eq!(Some(&'3'), iter.peek(0));
        assert_eq!(None, iter.peek(1));

        // Consume '3'
        assert_eq!(Some('3'), iter.next());
        assert_eq!(None, iter.peek(0));

        // Iterator is now empty
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.peek(0));
    }

    #[test]
    fn test_nested_peekable_iter() {
        let s = "0123";
        let mut chars = s.chars();
        let mut iter1 = PeekableIter::new(&mut chars, 3);
        let mut iter2 = PeekableIter::new(&mut iter1, 2);

        assert_eq!(Some(&'0'), iter2.peek(0));
        assert_eq!(Some(&'1'), iter2.peek(1));

        assert_eq!(Some('0'), iter2.next());
        assert_eq!(Some(&'1'), iter2.peek(0));

        assert_eq!(Some('1'), iter2.next());
        assert_eq!(Some('2'), iter2.next());
        assert_eq!(Some('3'), iter2.next());

        assert_eq!(None, iter2.next());
        assert_eq!(None, iter2.peek(0));
    }
}
