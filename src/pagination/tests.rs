//! Tests for pagination module

use super::*;
use serde_json::json;

// ============================================================================
// NextPage / Continuation Tests
// ============================================================================

#[test]
fn test_next_page_states() {
    let next = NextPage::Continue(Continuation::after("X"));
    assert!(next.is_continue());
    assert!(!next.is_done());
    assert_eq!(next.into_continuation(), Some(Continuation::after("X")));

    let done = NextPage::Done;
    assert!(done.is_done());
    assert_eq!(done.into_continuation(), None);
}

#[test]
fn test_continuation_serde() {
    let continuation: Continuation = serde_json::from_value(json!({"after": "123"})).unwrap();
    assert_eq!(continuation.after, "123");
    assert_eq!(
        serde_json::to_value(&continuation).unwrap(),
        json!({"after": "123"})
    );
}

// ============================================================================
// Path extraction
// ============================================================================

#[test]
fn test_extract_path() {
    let body = json!({"meta": {"cursor": {"after": 42, "before": 0}}});
    assert_eq!(extract_path(&body, "meta.cursor.after"), Some(&json!(42)));
    assert_eq!(extract_path(&body, "$.meta.cursor.before"), Some(&json!(0)));
    assert_eq!(extract_path(&body, "meta.missing"), None);
    assert_eq!(extract_path(&body, "meta.cursor.after.deeper"), None);
}

#[test]
fn test_extract_string_renders_numbers() {
    let body = json!({"meta": {"cursor": {"after": 42}}});
    assert_eq!(
        extract_string(&body, "meta.cursor.after"),
        Some("42".to_string())
    );
}

// ============================================================================
// Cursor Paginator
// ============================================================================

#[test]
fn test_cursor_request_params() {
    let paginator = CursorPaginator::default();

    assert!(paginator.request_params(None).is_empty());
    assert_eq!(
        paginator.request_params(Some(&Continuation::after("X"))),
        vec![("after".to_string(), "X".to_string())]
    );
    assert!(paginator
        .request_params(Some(&Continuation::after("")))
        .is_empty());
}

#[test]
fn test_cursor_continues_when_after_present() {
    let paginator = CursorPaginator::default();
    let body = json!({"meta": {"components": [], "cursor": {"after": "X"}}});

    assert_eq!(
        paginator.process_response(&body),
        NextPage::Continue(Continuation::after("X"))
    );
}

#[test]
fn test_cursor_numeric_after() {
    let paginator = CursorPaginator::default();
    let body = json!({"meta": {"cursor": {"before": 1, "after": 31}}});

    assert_eq!(
        paginator.process_response(&body),
        NextPage::Continue(Continuation::after("31"))
    );
}

#[test]
fn test_cursor_done_when_cursor_missing() {
    let paginator = CursorPaginator::default();

    assert!(paginator
        .process_response(&json!({"meta": {"components": []}}))
        .is_done());
    assert!(paginator.process_response(&json!({})).is_done());
}

#[test]
fn test_cursor_done_when_after_missing_or_empty() {
    let paginator = CursorPaginator::default();

    assert!(paginator
        .process_response(&json!({"meta": {"cursor": {"before": 3}}}))
        .is_done());
    assert!(paginator
        .process_response(&json!({"meta": {"cursor": {"after": ""}}}))
        .is_done());
    assert!(paginator
        .process_response(&json!({"meta": {"cursor": {"after": null}}}))
        .is_done());
}

// ============================================================================
// No Paginator
// ============================================================================

#[test]
fn test_no_paginator_always_done() {
    let paginator = NoPaginator;
    let body = json!({"projects": [{"id": 1}], "meta": {"cursor": {"after": "X"}}});

    assert!(paginator
        .request_params(Some(&Continuation::after("X")))
        .is_empty());
    assert!(paginator.process_response(&body).is_done());
}

#[test]
fn test_build_paginator() {
    let cursor = build_paginator(&PaginationConfig::figma_cursor());
    let body = json!({"meta": {"cursor": {"after": "N"}}});
    assert!(cursor.process_response(&body).is_continue());

    let single = build_paginator(&PaginationConfig::None);
    assert!(single.process_response(&body).is_done());
}
