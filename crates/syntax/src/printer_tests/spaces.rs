// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Indentation configuration.

use super::fmt_spaces;

#[yare::parameterized(
    tabs      = { 0, "{\n\tfoo \\\n\t\tbar\n}\n" },
    none      = { -1, "{\nfoo \\\nbar\n}\n" },
    two_wide  = { 2, "{\n  foo \\\n    bar\n}\n" },
    four_wide = { 4, "{\n    foo \\\n        bar\n}\n" },
)]
fn indent_config(spaces: i32, want: &str) {
    assert_eq!(fmt_spaces("{\nfoo \\\nbar\n}", spaces), want);
}

#[test]
fn negative_spaces_still_break_lines() {
    assert_eq!(fmt_spaces("if a\nthen\nb\nfi", -1), "if a; then\nb\nfi\n");
}
