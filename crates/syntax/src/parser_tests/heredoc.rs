// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heredocs: deferred bodies, stop words, expansion control.

use super::helpers::{assert_call, lit_of, parse_ok, single_stmt};
use crate::ast::{Command, Stmt, WordPart};
use crate::RedirOp;

fn hdoc_body(s: &Stmt, idx: usize) -> &crate::ast::Word {
    s.redirs[idx]
        .hdoc
        .as_ref()
        .unwrap_or_else(|| panic!("redirect {} has no heredoc body", idx))
}

#[test]
fn basic_body_and_stop_word() {
    let s = single_stmt("foo <<EOF\nhello\nEOF");
    assert_eq!(s.redirs.len(), 1);
    assert_eq!(s.redirs[0].op, RedirOp::Hdoc);
    assert_eq!(lit_of(&s.redirs[0].word), "EOF");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "hello\n");
}

#[test]
fn body_keeps_inner_lines() {
    let s = single_stmt("foo <<EOF\na\nb\nEOF");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "a\nb\n");
}

#[test]
fn empty_body() {
    let s = single_stmt("foo <<EOF\nEOF");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "");
}

#[test]
fn missing_stop_word_takes_the_rest() {
    let s = single_stmt("foo <<EOF\nrest of input");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "rest of input");
    let s = single_stmt("foo <<EOF");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "");
}

#[test]
fn unquoted_stop_word_expands_body() {
    let s = single_stmt("foo <<EOF\na $b c\nEOF");
    let body = hdoc_body(&s, 0);
    assert_eq!(body.parts.len(), 3);
    assert!(matches!(&body.parts[0], WordPart::Lit(l) if l.value == "a "));
    assert!(matches!(&body.parts[1], WordPart::ParamExp(_)));
    assert!(matches!(&body.parts[2], WordPart::Lit(l) if l.value == " c\n"));
}

#[test]
fn quoted_stop_word_keeps_body_verbatim() {
    let s = single_stmt("foo <<'EOF'\na $b c\nEOF");
    let body = hdoc_body(&s, 0);
    assert_eq!(lit_of(body), "a $b c\n");
}

#[test]
fn escaped_stop_word_keeps_body_verbatim() {
    let s = single_stmt("foo <<\\EOF\n$x\nEOF");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "$x\n");
}

#[test]
fn dash_variant_strips_tabs_for_comparison_only() {
    let s = single_stmt("foo <<-EOF\n\tbody\n\tEOF");
    assert_eq!(s.redirs[0].op, RedirOp::DashHdoc);
    assert_eq!(lit_of(hdoc_body(&s, 0)), "\tbody\n");
}

#[test]
fn stop_word_must_match_whole_line() {
    let s = single_stmt("foo <<EOF\nEOF2\nEOF");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "EOF2\n");
}

#[test]
fn two_heredocs_on_one_line() {
    let s = single_stmt("foo <<A <<B\none\nA\ntwo\nB");
    assert_eq!(lit_of(hdoc_body(&s, 0)), "one\n");
    assert_eq!(lit_of(hdoc_body(&s, 1)), "two\n");
}

#[test]
fn heredoc_then_more_statements() {
    let f = parse_ok("foo <<EOF\nbody\nEOF\nbar");
    assert_eq!(f.stmts.len(), 2);
    assert_call(&f.stmts[1], &["bar"]);
}

#[test]
fn heredoc_in_binary_chain() {
    let s = single_stmt("foo <<EOF && bar\nbody\nEOF");
    let Some(Command::Binary(b)) = &s.cmd else {
        panic!("want binary");
    };
    assert_eq!(lit_of(hdoc_body(&b.x, 0)), "body\n");
}

#[test]
fn heredoc_inside_command_substitution() {
    let s = single_stmt("echo $(cat <<A\ninner\nA\n) after");
    let call = match &s.cmd {
        Some(Command::Call(c)) => c,
        other => panic!("want call, got {:?}", other),
    };
    let WordPart::CmdSubst(cs) = &call.args[1].parts[0] else {
        panic!("want command substitution");
    };
    assert_eq!(lit_of(hdoc_body(&cs.stmts[0], 0)), "inner\n");
    assert_eq!(lit_of(&call.args[2]), "after");
}

#[test]
fn outer_and_inner_heredocs_pair_up() {
    let f = parse_ok("foo <<B $(bar <<A\ninner\nA\n)\nouter\nB");
    let s = &f.stmts[0];
    assert_eq!(lit_of(hdoc_body(s, 0)), "outer\n");
    let call = match &s.cmd {
        Some(Command::Call(c)) => c,
        other => panic!("want call, got {:?}", other),
    };
    let WordPart::CmdSubst(cs) = &call.args[1].parts[0] else {
        panic!("want command substitution");
    };
    assert_eq!(lit_of(hdoc_body(&cs.stmts[0], 0)), "inner\n");
}

#[test]
fn here_string_is_not_deferred() {
    let s = single_stmt("foo <<<word");
    assert_eq!(s.redirs[0].op, RedirOp::WordHdoc);
    assert_eq!(lit_of(&s.redirs[0].word), "word");
    assert!(s.redirs[0].hdoc.is_none());
}

#[test]
fn heredoc_body_line_table() {
    let f = parse_ok("foo <<EOF\na\nb\nEOF\nbar");
    assert_eq!(f.lines, vec![0, 10, 12, 14, 18]);
    assert_eq!(f.position(f.stmts[1].pos()).line, 5);
}
