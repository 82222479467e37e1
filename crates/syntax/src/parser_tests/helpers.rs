// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for parser tests.

use crate::ast::{CallExpr, Command, File, Stmt, Word, WordPart};
use crate::{parse, ParseMode};

pub(crate) fn parse_ok(src: &str) -> File {
    parse(src, "", ParseMode::DEFAULT)
        .unwrap_or_else(|e| panic!("parse of {:?} failed: {}", src, e))
}

pub(crate) fn parse_posix_ok(src: &str) -> File {
    parse(src, "", ParseMode::POSIX_CONFORMANT)
        .unwrap_or_else(|e| panic!("posix parse of {:?} failed: {}", src, e))
}

pub(crate) fn single_stmt(src: &str) -> Stmt {
    let mut f = parse_ok(src);
    assert_eq!(f.stmts.len(), 1, "want one statement in {:?}", src);
    f.stmts.remove(0)
}

pub(crate) fn get_call(s: &Stmt) -> &CallExpr {
    match &s.cmd {
        Some(Command::Call(c)) => c,
        other => panic!("want a call, got {:?}", other),
    }
}

/// The word's single unquoted literal value.
pub(crate) fn lit_of(w: &Word) -> &str {
    match &w.parts[..] {
        [WordPart::Lit(l)] => &l.value,
        parts => panic!("want a single literal, got {:?}", parts),
    }
}

pub(crate) fn assert_call(s: &Stmt, words: &[&str]) {
    let call = get_call(s);
    let got: Vec<&str> = call.args.iter().map(lit_of).collect();
    assert_eq!(got, words);
}
