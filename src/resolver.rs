// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    Diagnostics,
    error::ResolveError,
    parser::{parse_location_expression, parse_range_expression},
    semantics::{BreakpointLocation, ListRange, LocationWalker},
};

/// Resolves a breakpoint location expression, e.g. `foo.py:5 if x > 1`.
///
/// Scan and parse failures are propagated unchanged: the caller needs
/// the original cursor offset to render a caret-style diagnostic.
///
/// A syntactically valid expression that identifies neither a line
/// number nor a function (e.g. a bare filename) fails with
/// `ResolveError::Validation`.
pub fn resolve_breakpoint_expression(
    text: &str,
    diagnostics: &Diagnostics,
) -> Result<BreakpointLocation, ResolveError> {
    let tree = parse_location_expression(text, diagnostics)?;

    let walker = LocationWalker::new(text);
    let bp_expr = walker.resolve_breakpoint(&tree)?;

    if !bp_expr.location.is_resolvable() {
        return Err(ResolveError::Validation(
            "The expression identifies neither a line number nor a function.".to_owned(),
        ));
    }

    Ok(bp_expr)
}

/// Resolves a source range expression, e.g. `foo.py:5`, `6,+2`, `-`.
///
/// Unlike the breakpoint builder, no post-validation is performed: any
/// range shape the grammar accepts is returned as resolved.
pub fn resolve_range_expression(
    text: &str,
    diagnostics: &Diagnostics,
) -> Result<ListRange, ResolveError> {
    let tree = parse_range_expression(text, diagnostics)?;

    let walker = LocationWalker::new(text);
    walker.resolve_range(&tree)
}
