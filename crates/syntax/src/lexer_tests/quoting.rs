// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote scanning through the full parse pipeline, where the mode switches
//! actually happen.

use crate::ast::{Command, Stmt, Word, WordPart};
use crate::{parse, ParseMode};

fn arg_parts(src: &str, idx: usize) -> Vec<WordPart> {
    let f = parse(src, "", ParseMode::DEFAULT)
        .unwrap_or_else(|e| panic!("parse of {:?} failed: {}", src, e));
    let Some(Stmt { cmd: Some(Command::Call(call)), .. }) = f.stmts.first() else {
        panic!("want a call in {:?}", src);
    };
    let Word { parts } = &call.args[idx];
    parts.clone()
}

#[test]
fn single_quotes_are_verbatim() {
    let parts = arg_parts(r"echo 'a \ b'", 1);
    let [WordPart::SglQuoted(q)] = &parts[..] else {
        panic!("want one single-quoted part");
    };
    assert!(!q.dollar);
    assert_eq!(q.value, r"a \ b");
}

#[test]
fn single_quotes_span_newlines() {
    let parts = arg_parts("echo 'a\nb'", 1);
    let [WordPart::SglQuoted(q)] = &parts[..] else {
        panic!("want one single-quoted part");
    };
    assert_eq!(q.value, "a\nb");
}

#[test]
fn dollar_single_quotes_keep_escapes() {
    let parts = arg_parts(r"echo $'a\'b'", 1);
    let [WordPart::SglQuoted(q)] = &parts[..] else {
        panic!("want one single-quoted part");
    };
    assert!(q.dollar);
    assert_eq!(q.value, r"a\'b");
}

#[test]
fn double_quotes_mix_literals_and_expansions() {
    let parts = arg_parts(r#"echo "a $b c""#, 1);
    let [WordPart::DblQuoted(q)] = &parts[..] else {
        panic!("want one double-quoted part");
    };
    assert_eq!(q.parts.len(), 3);
    assert!(matches!(&q.parts[0], WordPart::Lit(l) if l.value == "a "));
    assert!(matches!(&q.parts[1], WordPart::ParamExp(pe) if pe.short));
    assert!(matches!(&q.parts[2], WordPart::Lit(l) if l.value == " c"));
}

#[test]
fn double_quote_escapes_stay_verbatim() {
    let parts = arg_parts(r#"echo "a\$b\\c""#, 1);
    let [WordPart::DblQuoted(q)] = &parts[..] else {
        panic!("want one double-quoted part");
    };
    assert!(matches!(&q.parts[0], WordPart::Lit(l) if l.value == r"a\$b\\c"));
}

#[test]
fn quoted_line_continuation_is_content() {
    let parts = arg_parts("echo \"a\\\nb\"", 1);
    let [WordPart::DblQuoted(q)] = &parts[..] else {
        panic!("want one double-quoted part");
    };
    assert!(matches!(&q.parts[0], WordPart::Lit(l) if l.value == "a\\\nb"));
}

#[test]
fn adjacent_quotes_concatenate_parts() {
    let parts = arg_parts(r#"echo a'b'"c""#, 1);
    assert_eq!(parts.len(), 3);
    assert!(matches!(&parts[0], WordPart::Lit(l) if l.value == "a"));
    assert!(matches!(&parts[1], WordPart::SglQuoted(_)));
    assert!(matches!(&parts[2], WordPart::DblQuoted(_)));
}

#[test]
fn backquotes_become_command_substitutions() {
    let parts = arg_parts("echo `date`", 1);
    let [WordPart::CmdSubst(cs)] = &parts[..] else {
        panic!("want a command substitution");
    };
    assert_eq!(cs.stmts.len(), 1);
}

#[test]
fn dollar_before_quote_is_literal_in_posix() {
    let f = parse("echo $'a'", "", ParseMode::POSIX_CONFORMANT).unwrap();
    let Some(Stmt { cmd: Some(Command::Call(call)), .. }) = f.stmts.first() else {
        panic!("want a call");
    };
    let parts = &call.args[1].parts;
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], WordPart::Lit(l) if l.value == "$"));
    assert!(matches!(&parts[1], WordPart::SglQuoted(q) if q.value == "a"));
}

#[test]
fn empty_quotes() {
    let parts = arg_parts(r#"echo '' """#, 1);
    assert!(matches!(&parts[..], [WordPart::SglQuoted(q)] if q.value.is_empty()));
    let parts = arg_parts(r#"echo '' """#, 2);
    assert!(matches!(&parts[..], [WordPart::DblQuoted(q)] if q.parts.is_empty()));
}
