// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{parse, ParseMode};

fn parse_one(src: &str) -> Stmt {
    let mut f = parse(src, "", ParseMode::DEFAULT).unwrap_or_else(|e| {
        panic!("parse of {:?} failed: {}", src, e);
    });
    assert_eq!(f.stmts.len(), 1, "want one statement in {:?}", src);
    f.stmts.remove(0)
}

#[test]
fn call_spans_cover_words() {
    let s = parse_one("echo foo bar");
    assert_eq!(s.pos(), Pos(1));
    assert_eq!(s.end(), Pos(13));
    let Some(Command::Call(call)) = &s.cmd else {
        panic!("want call");
    };
    assert_eq!(call.args.len(), 3);
    assert_eq!(call.args[1].pos(), Pos(6));
    assert_eq!(call.args[1].end(), Pos(9));
}

#[test]
fn stmt_end_ignores_semicolon() {
    let s = parse_one("foo;");
    assert_eq!(s.semi_pos, Pos(4));
    assert_eq!(s.end(), Pos(4));
}

#[test]
fn subshell_end_is_past_rparen() {
    let s = parse_one("(foo)");
    let Some(Command::Subshell(sub)) = &s.cmd else {
        panic!("want subshell");
    };
    assert_eq!(sub.lparen, Pos(1));
    assert_eq!(sub.rparen, Pos(5));
    assert_eq!(s.cmd.as_ref().map(Command::end), Some(Pos(6)));
}

#[test]
fn if_end_covers_fi() {
    let s = parse_one("if a; then b; fi");
    assert_eq!(s.end(), Pos(17));
}

#[test]
fn single_quoted_end_counts_quotes() {
    let s = parse_one("echo 'ab' $'c'");
    let Some(Command::Call(call)) = &s.cmd else {
        panic!("want call");
    };
    assert_eq!(call.args[1].end(), Pos(10));
    assert_eq!(call.args[2].pos(), Pos(11));
    assert_eq!(call.args[2].end(), Pos(15));
}

#[test]
fn param_exp_end_short_and_braced() {
    let s = parse_one("echo $foo ${bar}");
    let Some(Command::Call(call)) = &s.cmd else {
        panic!("want call");
    };
    assert_eq!(call.args[1].end(), Pos(10));
    assert_eq!(call.args[2].end(), Pos(17));
}

#[test]
fn arithm_exp_end_counts_closer() {
    let s = parse_one("echo $((1 + 2))");
    let Some(Command::Call(call)) = &s.cmd else {
        panic!("want call");
    };
    let WordPart::ArithmExp(a) = &call.args[1].parts[0] else {
        panic!("want arithmetic expansion");
    };
    assert!(!a.bracket);
    assert_eq!(call.args[1].end(), Pos(16));
}

#[test]
fn redirect_pos_prefers_fd() {
    let s = parse_one("foo 2>err");
    let r = &s.redirs[0];
    assert_eq!(r.pos(), Pos(5));
    assert_eq!(r.op_pos, Pos(6));
    assert_eq!(r.end(), Pos(10));
}

#[test]
fn assign_end_without_value() {
    let s = parse_one("a= b+=c");
    assert_eq!(s.assigns.len(), 2);
    assert_eq!(s.assigns[0].end(), Pos(3));
    assert!(s.assigns[1].append);
    assert_eq!(s.assigns[1].end(), Pos(8));
    assert!(s.cmd.is_none());
}

#[test]
fn file_pos_and_end() {
    let f = parse("foo\nbar", "", ParseMode::DEFAULT).unwrap();
    assert_eq!(f.pos(), Pos(1));
    assert_eq!(f.end(), Pos(8));
    let empty = parse("", "", ParseMode::DEFAULT).unwrap();
    assert_eq!(empty.pos(), Pos::NONE);
    assert!(empty.stmts.is_empty());
}

#[test]
fn comment_end() {
    let c = Comment { hash: Pos(1), text: " foo".into() };
    assert_eq!(c.pos(), Pos(1));
    assert_eq!(c.end(), Pos(6));
}
