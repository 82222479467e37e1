// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple commands: words, assignments, redirects, separators.

use super::helpers::{assert_call, get_call, lit_of, parse_ok, single_stmt};
use super::macros::parse_tests;
use crate::ast::{Command, WordPart};
use crate::RedirOp;
use crate::token::BinCmdOp;

parse_tests! {
    empty: "" => stmts: 0,
    blank: "  \n\t\n" => stmts: 0,
    comment_only: "# foo" => stmts: 0,
    one_cmd: "echo" => stmts: 1,
    two_cmds_semi: "a; b" => stmts: 2,
    two_cmds_newline: "a\nb" => stmts: 2,
    background: "a & b" => stmts: 2,
}

#[test]
fn leading_semicolon_is_an_error() {
    assert!(crate::parse(";a", "", crate::ParseMode::DEFAULT).is_err());
}

#[test]
fn words_and_args() {
    let s = single_stmt("ls -la /tmp");
    assert_call(&s, &["ls", "-la", "/tmp"]);
}

#[test]
fn negation_and_background() {
    let s = single_stmt("! foo &");
    assert!(s.negated);
    assert!(s.background);
    assert_call(&s, &["foo"]);
}

#[test]
fn semicolon_position_is_kept() {
    let s = single_stmt("foo;");
    assert_eq!(s.semi_pos.0, 4);
}

#[test]
fn assignments_before_command() {
    let s = single_stmt("FOO=bar BAZ= cmd");
    assert_eq!(s.assigns.len(), 2);
    let a = &s.assigns[0];
    assert_eq!(a.name.as_ref().map(|n| n.value.as_str()), Some("FOO"));
    assert!(!a.append);
    assert_eq!(a.value.as_ref().map(lit_of), Some("bar"));
    assert!(s.assigns[1].value.is_none());
    assert_call(&s, &["cmd"]);
}

#[test]
fn append_assignment() {
    let s = single_stmt("PATH+=:/bin");
    assert!(s.assigns[0].append);
    assert_eq!(s.assigns[0].value.as_ref().map(lit_of), Some(":/bin"));
    assert!(s.cmd.is_none());
}

#[test]
fn assignment_value_concatenates_parts() {
    let s = single_stmt("a=b$c");
    let value = s.assigns[0].value.as_ref().unwrap();
    assert_eq!(value.parts.len(), 2);
    assert!(matches!(&value.parts[1], WordPart::ParamExp(pe) if pe.short));
}

#[test]
fn array_assignment() {
    let s = single_stmt("a=(1 2 3)");
    let arr = s.assigns[0].array.as_ref().unwrap();
    assert_eq!(arr.elems.len(), 3);
    assert_eq!(lit_of(&arr.elems[2]), "3");
}

#[test]
fn redirects_with_fds() {
    let s = single_stmt("foo 2>err <in");
    assert_eq!(s.redirs.len(), 2);
    assert_eq!(s.redirs[0].n.as_ref().map(|n| n.value.as_str()), Some("2"));
    assert_eq!(s.redirs[0].op, RedirOp::Out);
    assert_eq!(s.redirs[1].op, RedirOp::In);
    assert!(s.redirs[1].n.is_none());
}

#[test]
fn redirect_only_statement() {
    let s = single_stmt(">out");
    assert!(s.cmd.is_none());
    assert_eq!(s.redirs[0].op, RedirOp::Out);
    assert_eq!(lit_of(&s.redirs[0].word), "out");
}

#[test]
fn dup_and_clobber_ops() {
    let s = single_stmt("foo 2>&1 >|f <>g");
    let ops: Vec<RedirOp> = s.redirs.iter().map(|r| r.op).collect();
    assert_eq!(ops, vec![RedirOp::DupOut, RedirOp::Clobber, RedirOp::InOut]);
}

#[test]
fn pipes_are_left_associative() {
    let s = single_stmt("a | b | c");
    let Some(Command::Binary(outer)) = &s.cmd else {
        panic!("want binary");
    };
    assert_eq!(outer.op, BinCmdOp::Pipe);
    assert_call(&outer.y, &["c"]);
    let Some(Command::Binary(inner)) = &outer.x.cmd else {
        panic!("want nested binary");
    };
    assert_call(&inner.x, &["a"]);
    assert_call(&inner.y, &["b"]);
}

#[test]
fn pipe_binds_tighter_than_and() {
    let s = single_stmt("a | b && c");
    let Some(Command::Binary(and)) = &s.cmd else {
        panic!("want binary");
    };
    assert_eq!(and.op, BinCmdOp::AndStmt);
    let Some(Command::Binary(pipe)) = &and.x.cmd else {
        panic!("want pipe on the left");
    };
    assert_eq!(pipe.op, BinCmdOp::Pipe);
}

#[test]
fn negation_stays_on_pipe_head() {
    let s = single_stmt("! foo | bar");
    let Some(Command::Binary(b)) = &s.cmd else {
        panic!("want binary");
    };
    assert!(b.x.negated);
    assert!(!s.negated);
}

#[test]
fn keywords_mid_command_are_words() {
    let s = single_stmt("echo if then fi");
    assert_call(&s, &["echo", "if", "then", "fi"]);
}

#[test]
fn comments_are_collected_with_flag() {
    let f = crate::parse("# foo\ncmd\n# bar", "", crate::ParseMode::PARSE_COMMENTS).unwrap();
    assert_eq!(f.comments.len(), 2);
    assert_eq!(f.comments[0].text, " foo");
    assert_eq!(f.comments[1].text, " bar");
    assert_eq!(f.position(f.comments[0].hash).line, 1);
    assert_eq!(f.position(f.comments[0].hash).column, 1);
    assert_eq!(f.position(f.comments[1].hash).line, 3);
    assert_eq!(f.stmts.len(), 1);
    let call = get_call(&f.stmts[0]);
    assert_eq!(lit_of(&call.args[0]), "cmd");
}

#[test]
fn comments_are_dropped_without_flag() {
    let f = parse_ok("# foo\ncmd");
    assert!(f.comments.is_empty());
}
