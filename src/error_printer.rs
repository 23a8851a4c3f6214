// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::error::ResolveError;

// A struct representing the visible window of the command text.
//
// ```diagram
//                 /-- snippet offset in the command text
//                 |
//                 |           |-- snippet length
//                 v           v
// prefix -->   ...snippet_text...  <-- suffix
//                     ^
//                     |-- caret offset in the snippet
// ```
struct SnippetAndIndication {
    prefix_ellipsis: bool, // Whether the snippet should start with an ellipsis.
    suffix_ellipsis: bool, // Whether the snippet should end with an ellipsis.
    snippet_offset_in_source: usize, // The starting index of the snippet in the command text.
    snippet_length: usize, // The length of the snippet in the command text.
    caret_offset_in_snippet: usize, // The offset of the caret within the snippet.
}

/// Calculates the snippet window around the caret position.
/// All quantities are character counts.
fn calculate_snippet_and_indication(
    caret_in_source: usize,
    source_text_length: usize,
) -> SnippetAndIndication {
    const LEADING_LENGTH: usize = 15;
    const SNIPPET_LENGTH: usize = 40;

    let (prefix_ellipsis, snippet_offset_in_source, caret_offset_in_snippet) =
        if source_text_length < SNIPPET_LENGTH || caret_in_source < LEADING_LENGTH {
            (false, 0, caret_in_source)
        } else if caret_in_source + SNIPPET_LENGTH > source_text_length {
            (
                true,
                source_text_length - SNIPPET_LENGTH,
                caret_in_source - (source_text_length - SNIPPET_LENGTH),
            )
        } else {
            (true, caret_in_source - LEADING_LENGTH, LEADING_LENGTH)
        };

    let (suffix_ellipsis, snippet_length) =
        if snippet_offset_in_source + SNIPPET_LENGTH >= source_text_length {
            (false, source_text_length - snippet_offset_in_source)
        } else {
            (true, SNIPPET_LENGTH)
        };

    SnippetAndIndication {
        prefix_ellipsis,
        suffix_ellipsis,
        snippet_offset_in_source,
        snippet_length,
        caret_offset_in_snippet,
    }
}

/// Generates the two-line caret paragraph: the snippet of the command
/// text and an indication line with `^` under the offending position.
fn generate_error_text_paragraph(
    source_text: &str,
    snippet_and_indication: &SnippetAndIndication,
) -> (
    /* snippet line */ String,
    /* indication line */ String,
) {
    let mut snippet = String::new();
    if snippet_and_indication.prefix_ellipsis {
        snippet.push_str("...");
    }

    let mut caret_padding = snippet.chars().count();

    snippet.extend(
        source_text
            .chars()
            .skip(snippet_and_indication.snippet_offset_in_source)
            .take(snippet_and_indication.snippet_length),
    );

    if snippet_and_indication.suffix_ellipsis {
        snippet.push_str("...");
    }

    caret_padding += snippet_and_indication.caret_offset_in_snippet;

    let mut indication = " ".repeat(caret_padding);
    indication.push('^');

    (snippet, indication)
}

/// Renders an error for command-line display.
///
/// Scan and parse errors include a snippet of the command text and a
/// caret under the offending position; semantic and validation errors
/// are a single message line.
pub fn print_error(error: &ResolveError, source_text: &str) -> String {
    match error {
        ResolveError::Scan(_, offset) | ResolveError::Parse(_, offset) => {
            let source_text_length = source_text.chars().count();

            // The cursor may point one past the end of the text
            // (e.g. an unexpected end of the expression).
            let caret_in_source = (*offset).min(source_text_length);

            let snippet_and_indication =
                calculate_snippet_and_indication(caret_in_source, source_text_length.max(1));
            let (snippet, indication) =
                generate_error_text_paragraph(source_text, &snippet_and_indication);

            format!("{}\n{}\n{}", error, snippet, indication)
        }
        ResolveError::SemanticShape(_) | ResolveError::Validation(_) => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::ResolveError,
        error_printer::print_error,
    };

    #[test]
    fn test_print_error_with_caret() {
        let text = "foo.py:bad";
        let error = ResolveError::Parse("Expect a line number.".to_owned(), 7);

        assert_eq!(
            print_error(&error, text),
            "Parse error at offset 7: Expect a line number.\n\
             foo.py:bad\n       ^"
        );
    }

    #[test]
    fn test_print_error_with_long_input_window() {
        let text = "a".repeat(60) + ",bad";
        let error = ResolveError::Parse("Expect a location expression.".to_owned(), 61);

        let rendered = print_error(&error, &text);
        let mut lines = rendered.lines();

        assert_eq!(
            lines.next(),
            Some("Parse error at offset 61: Expect a location expression.")
        );

        // the snippet is windowed to the tail of the input
        let snippet = lines.next().unwrap();
        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with(",bad"));

        // the caret lands under the offending character
        let indication = lines.next().unwrap();
        let caret_column = indication.chars().count() - 1;
        assert_eq!(snippet.chars().nth(caret_column), Some('b'));
    }

    #[test]
    fn test_print_error_without_offset() {
        let error = ResolveError::Validation(
            "The expression identifies neither a line number nor a function.".to_owned(),
        );

        assert_eq!(
            print_error(&error, "foo.py"),
            "Invalid location: The expression identifies neither a line number nor a function."
        );
    }
}
