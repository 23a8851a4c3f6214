// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use pretty_assertions::assert_eq;

use dbgloc::{
    Diagnostics,
    error::ResolveError,
    resolve_breakpoint_expression, resolve_range_expression,
    semantics::{ListRange, Location, RangeEnd},
    token::Direction,
};

fn resolve_bp(text: &str) -> Result<dbgloc::semantics::BreakpointLocation, ResolveError> {
    resolve_breakpoint_expression(text, &Diagnostics::default())
}

fn resolve_range(text: &str) -> Result<ListRange, ResolveError> {
    resolve_range_expression(text, &Diagnostics::default())
}

#[test]
fn test_breakpoint_filename_and_line() {
    let bp_expr = resolve_bp("foo.py:12").unwrap();

    assert_eq!(
        bp_expr.location,
        Location::new(Some("foo.py".to_owned()), Some(12), None)
    );
    assert_eq!(bp_expr.condition, None);
}

#[test]
fn test_breakpoint_path_forms() {
    let bp_expr = resolve_bp("/tmp/foo.py:12").unwrap();
    assert_eq!(
        bp_expr.location,
        Location::new(Some("/tmp/foo.py".to_owned()), Some(12), None)
    );

    let bp_expr = resolve_bp("../foo.py:5").unwrap();
    assert_eq!(
        bp_expr.location,
        Location::new(Some("../foo.py".to_owned()), Some(5), None)
    );

    // the wordy `line` form
    let bp_expr = resolve_bp("/tmp/foo.py line 12").unwrap();
    assert_eq!(
        bp_expr.location,
        Location::new(Some("/tmp/foo.py".to_owned()), Some(12), None)
    );

    // quoting allows spaces in the filename
    let bp_expr = resolve_bp("\"my file.py\":7").unwrap();
    assert_eq!(
        bp_expr.location,
        Location::new(Some("my file.py".to_owned()), Some(7), None)
    );
}

#[test]
fn test_breakpoint_function_name() {
    let bp_expr = resolve_bp("gcd()").unwrap();

    // the call marker is stripped from the stored name
    assert_eq!(
        bp_expr.location,
        Location::new(None, None, Some("gcd".to_owned()))
    );
    assert_eq!(bp_expr.condition, None);
}

#[test]
fn test_breakpoint_bare_line_number() {
    let bp_expr = resolve_bp("12").unwrap();

    assert_eq!(bp_expr.location, Location::new(None, Some(12), None));
    assert_eq!(bp_expr.condition, None);
}

#[test]
fn test_breakpoint_condition_is_verbatim() {
    let bp_expr = resolve_bp("foo.py:5 if x > 1").unwrap();

    assert_eq!(
        bp_expr.location,
        Location::new(Some("foo.py".to_owned()), Some(5), None)
    );
    assert_eq!(bp_expr.condition, Some("x > 1".to_owned()));

    // inner whitespace of the condition is preserved exactly
    let bp_expr = resolve_bp("gcd() if a   ==  b").unwrap();
    assert_eq!(bp_expr.condition, Some("a   ==  b".to_owned()));

    // a condition may itself contain the word `if`
    let bp_expr = resolve_bp("12 if x if y").unwrap();
    assert_eq!(bp_expr.condition, Some("x if y".to_owned()));
}

#[test]
fn test_breakpoint_validation() {
    // a bare filename identifies neither a line nor a function
    assert_eq!(
        resolve_bp("foo.py"),
        Err(ResolveError::Validation(
            "The expression identifies neither a line number nor a function.".to_owned(),
        ))
    );

    // even with a condition attached
    assert_eq!(
        resolve_bp("foo.py if x > 1"),
        Err(ResolveError::Validation(
            "The expression identifies neither a line number nor a function.".to_owned(),
        ))
    );
}

#[test]
fn test_breakpoint_scan_and_parse_errors_carry_offsets() {
    // unterminated quoted filename
    assert_eq!(
        resolve_bp("\"my file.py"),
        Err(ResolveError::Scan(
            "Missing the closing quote of a quoted filename.".to_owned(),
            0
        ))
    );

    // trailing garbage after a complete location
    assert_eq!(
        resolve_bp("foo.py:5 12"),
        Err(ResolveError::Parse(
            "Unexpected trailing input \"12\".".to_owned(),
            9
        ))
    );
}

#[test]
fn test_range_single_point() {
    assert_eq!(
        resolve_range("foo.py:5").unwrap(),
        ListRange::new(
            Some(Location::new(Some("foo.py".to_owned()), Some(5), None)),
            None
        )
    );

    assert_eq!(
        resolve_range("gcd()").unwrap(),
        ListRange::new(Some(Location::new(None, None, Some("gcd".to_owned()))), None)
    );

    assert_eq!(
        resolve_range("12").unwrap(),
        ListRange::new(Some(Location::new(None, Some(12), None)), None)
    );
}

#[test]
fn test_range_start_only() {
    assert_eq!(
        resolve_range("foo.py:5,").unwrap(),
        ListRange::new(
            Some(Location::new(Some("foo.py".to_owned()), Some(5), None)),
            None
        )
    );

    // with whitespace around the comma
    assert_eq!(
        resolve_range("../foo.py:5 ,").unwrap(),
        ListRange::new(
            Some(Location::new(Some("../foo.py".to_owned()), Some(5), None)),
            None
        )
    );
}

#[test]
fn test_range_end_only() {
    assert_eq!(
        resolve_range(",foo.py:5").unwrap(),
        ListRange::new(
            None,
            Some(RangeEnd::Location(Location::new(
                Some("foo.py".to_owned()),
                Some(5),
                None
            )))
        )
    );

    assert_eq!(
        resolve_range(", 5").unwrap(),
        ListRange::new(
            None,
            Some(RangeEnd::Location(Location::new(None, Some(5), None)))
        )
    );
}

#[test]
fn test_range_explicit_pair() {
    assert_eq!(
        resolve_range("6,+2").unwrap(),
        ListRange::new(
            Some(Location::new(None, Some(6), None)),
            Some(RangeEnd::Offset(2))
        )
    );

    assert_eq!(
        resolve_range("/tmp/foo.py:12 , 5").unwrap(),
        ListRange::new(
            Some(Location::new(Some("/tmp/foo.py".to_owned()), Some(12), None)),
            Some(RangeEnd::Offset(5))
        )
    );
}

#[test]
fn test_range_direction_only() {
    assert_eq!(
        resolve_range("-").unwrap(),
        ListRange::new(None, Some(RangeEnd::Direction(Direction::Backward)))
    );

    assert_eq!(
        resolve_range("+").unwrap(),
        ListRange::new(None, Some(RangeEnd::Direction(Direction::Forward)))
    );
}

#[test]
fn test_range_builder_performs_no_validation() {
    // Unlike the breakpoint builder, the range builder accepts a
    // location with no line number: a bare filename lists around the
    // start of the file.
    assert_eq!(
        resolve_range("foo.py").unwrap(),
        ListRange::new(
            Some(Location::new(Some("foo.py".to_owned()), None, None)),
            None
        )
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let first = resolve_bp("foo.py:5 if x > 1").unwrap();
    let second = resolve_bp("foo.py:5 if x > 1").unwrap();
    assert_eq!(first, second);

    let first = resolve_range("6,+2").unwrap();
    let second = resolve_range("6,+2").unwrap();
    assert_eq!(first, second);
}
