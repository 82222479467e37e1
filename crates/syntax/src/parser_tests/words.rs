// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word parts: parameter expansions, substitutions, globs.

use super::helpers::{get_call, lit_of, single_stmt};
use crate::ast::{ParamExp, WordPart};
use crate::token::{GlobOp, ParExpOp, ProcOp};

fn arg_part(src: &str, idx: usize) -> WordPart {
    let s = single_stmt(src);
    let call = get_call(&s);
    let parts = &call.args[idx].parts;
    assert_eq!(parts.len(), 1, "want one part in arg {} of {:?}", idx, src);
    parts[0].clone()
}

fn param(src: &str) -> ParamExp {
    match arg_part(src, 1) {
        WordPart::ParamExp(pe) => *pe,
        other => panic!("want a parameter expansion, got {:?}", other),
    }
}

#[test]
fn short_params() {
    for (src, name) in [
        ("echo $foo", "foo"),
        ("echo $?", "?"),
        ("echo $#", "#"),
        ("echo $$", "$"),
        ("echo $!", "!"),
        ("echo $-", "-"),
        ("echo $0", "0"),
        ("echo $@", "@"),
        ("echo $*", "*"),
    ] {
        let pe = param(src);
        assert!(pe.short, "{:?} should be short", src);
        assert_eq!(pe.param.as_ref().map(|p| p.value.as_str()), Some(name), "in {:?}", src);
    }
}

#[test]
fn digit_params_take_one_digit() {
    let s = single_stmt("echo $12");
    let call = get_call(&s);
    let parts = &call.args[1].parts;
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], WordPart::ParamExp(pe) if
        pe.param.as_ref().map(|p| p.value.as_str()) == Some("1")));
    assert!(matches!(&parts[1], WordPart::Lit(l) if l.value == "2"));
}

#[test]
fn lone_dollar_is_literal() {
    let s = single_stmt("echo $ $\"x\"");
    let call = get_call(&s);
    assert!(matches!(&call.args[1].parts[0], WordPart::Lit(l) if l.value == "$"));
}

#[test]
fn braced_param() {
    let pe = param("echo ${foo}");
    assert!(!pe.short);
    assert_eq!(pe.param.as_ref().map(|p| p.value.as_str()), Some("foo"));
    assert!(pe.exp.is_none() && pe.slice.is_none() && pe.repl.is_none() && pe.ind.is_none());
}

#[test]
fn param_length() {
    let pe = param("echo ${#foo}");
    assert!(pe.length);
    assert_eq!(pe.param.as_ref().map(|p| p.value.as_str()), Some("foo"));
    let pe = param("echo ${#}");
    assert!(!pe.length);
    assert_eq!(pe.param.as_ref().map(|p| p.value.as_str()), Some("#"));
}

#[test]
fn param_indirection_stays_in_name() {
    let pe = param("echo ${!foo}");
    assert_eq!(pe.param.as_ref().map(|p| p.value.as_str()), Some("!foo"));
}

#[test]
fn param_expansion_operators() {
    for (src, op, word) in [
        ("echo ${a-d}", ParExpOp::DefaultUnset, "d"),
        ("echo ${a:-d}", ParExpOp::DefaultUnsetOrNull, "d"),
        ("echo ${a:=d}", ParExpOp::AssignUnsetOrNull, "d"),
        ("echo ${a:?msg}", ParExpOp::ErrorUnsetOrNull, "msg"),
        ("echo ${a:+alt}", ParExpOp::AlternateUnsetOrNull, "alt"),
        ("echo ${a##p}", ParExpOp::RemLargePrefix, "p"),
        ("echo ${a%s}", ParExpOp::RemSmallSuffix, "s"),
        ("echo ${a^^}", ParExpOp::UpperAll, ""),
        ("echo ${a,,}", ParExpOp::LowerAll, ""),
    ] {
        let pe = param(src);
        let exp = pe.exp.as_ref().unwrap_or_else(|| panic!("no exp in {:?}", src));
        assert_eq!(exp.op, op, "in {:?}", src);
        assert_eq!(lit_of(&exp.word), word, "in {:?}", src);
    }
}

#[test]
fn param_slice() {
    let pe = param("echo ${a:1:2}");
    let slice = pe.slice.unwrap();
    assert!(slice.offset.is_some());
    assert!(slice.length.is_some());

    let pe = param("echo ${a:1}");
    let slice = pe.slice.unwrap();
    assert!(slice.offset.is_some());
    assert!(slice.length.is_none());
}

#[test]
fn param_replace() {
    let pe = param("echo ${a/b/c}");
    let repl = pe.repl.unwrap();
    assert!(!repl.all);
    assert_eq!(lit_of(&repl.orig), "b");
    assert_eq!(lit_of(&repl.with), "c");

    let pe = param("echo ${a//b}");
    let repl = pe.repl.unwrap();
    assert!(repl.all);
    assert_eq!(lit_of(&repl.with), "");
}

#[test]
fn param_index() {
    let pe = param("echo ${a[1]}");
    assert!(pe.ind.is_some());
    let pe = param("echo ${a[*]}");
    assert!(pe.ind.is_some());
    let pe = param("echo ${a[@]}");
    assert!(pe.ind.is_some());
}

#[test]
fn command_substitutions() {
    let part = arg_part("echo $(foo bar)", 1);
    let WordPart::CmdSubst(cs) = part else {
        panic!("want command substitution");
    };
    assert_eq!(cs.stmts.len(), 1);
}

#[test]
fn process_substitutions() {
    let part = arg_part("cmp <(a) bar", 1);
    let WordPart::ProcSubst(ps) = part else {
        panic!("want process substitution");
    };
    assert_eq!(ps.op, ProcOp::CmdIn);
    assert_eq!(ps.stmts.len(), 1);
}

#[test]
fn ext_globs() {
    let part = arg_part("rm !(*.txt)", 1);
    let WordPart::ExtGlob(eg) = part else {
        panic!("want extended glob");
    };
    assert_eq!(eg.op, GlobOp::Negate);
    assert_eq!(eg.pattern.value, "*.txt");
}

#[test]
fn nested_ext_glob_parens() {
    let part = arg_part("rm @(a|@(b))", 1);
    let WordPart::ExtGlob(eg) = part else {
        panic!("want extended glob");
    };
    assert_eq!(eg.pattern.value, "a|@(b)");
}

#[test]
fn dollar_bracket_arithmetic() {
    let part = arg_part("echo $[1+2]", 1);
    let WordPart::ArithmExp(a) = part else {
        panic!("want arithmetic expansion");
    };
    assert!(a.bracket);
    assert!(a.x.is_some());
}
