// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{lookup, Pos};
use crate::{parse, ParseMode};

#[test]
fn lookup_single_line() {
    let lines = vec![0];
    let p = lookup(&lines, Pos(1));
    assert_eq!((p.line, p.column), (1, 1));
    let p = lookup(&lines, Pos(5));
    assert_eq!((p.line, p.column), (1, 5));
}

#[test]
fn lookup_multi_line() {
    // "ab\ncd\n" -> line starts at 0, 3, 6
    let lines = vec![0, 3, 6];
    assert_eq!(lookup(&lines, Pos(1)).line, 1);
    assert_eq!(lookup(&lines, Pos(3)).line, 1);
    let p = lookup(&lines, Pos(4));
    assert_eq!((p.line, p.column), (2, 1));
    let p = lookup(&lines, Pos(5));
    assert_eq!((p.line, p.column), (2, 2));
    let p = lookup(&lines, Pos(7));
    assert_eq!((p.line, p.column), (3, 1));
}

#[test]
fn none_position() {
    assert!(Pos::NONE.is_none());
    assert!(!Pos(1).is_none());
    assert_eq!(Pos::default(), Pos::NONE);
}

#[test]
fn file_records_line_starts() {
    let f = parse("a\nb\nc", "", ParseMode::DEFAULT).unwrap();
    assert_eq!(f.lines, vec![0, 2, 4]);
}

#[test]
fn line_table_covers_single_quoted_newlines() {
    let f = parse("a 'x\ny' b\nc", "", ParseMode::DEFAULT).unwrap();
    assert_eq!(f.lines, vec![0, 5, 10]);
    // the statement on the last line starts at line 3
    assert_eq!(f.position(f.stmts[1].pos()).line, 3);
}

#[test]
fn line_table_covers_continuations() {
    let f = parse("a b\\\nc d", "", ParseMode::DEFAULT).unwrap();
    assert_eq!(f.lines, vec![0, 5]);
}

#[test]
fn positions_resolve_columns_in_bytes() {
    let src = "echo ${foo}";
    let f = parse(src, "", ParseMode::DEFAULT).unwrap();
    let stmt = &f.stmts[0];
    assert_eq!(f.position(stmt.pos()).column, 1);
    assert_eq!(f.position(stmt.end()).column, src.len() + 1);
}
