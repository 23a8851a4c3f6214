// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// A span of characters within a command expression.
///
/// Command expressions are single-line, so a position is a plain
/// character index into the source text.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Range {
    pub start: usize,        // The index of the first character.
    pub end_included: usize, // The index of the last character.
}

impl Range {
    pub fn new(start: usize, end_included: usize) -> Self {
        Self {
            start,
            end_included,
        }
    }

    pub fn from_position(position: usize) -> Self {
        Self {
            start: position,
            end_included: position,
        }
    }
}
