// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Strict-dialect rejections and reinterpretations.

use super::helpers::{parse_ok, parse_posix_ok};
use super::macros::posix_error_tests;
use crate::ast::Command;

posix_error_tests! {
    arithm_cmd: "((foo" => "1:2: reached EOF without matching ( with )",
    arithm_cmd_mid_call: "echo ((foo" => "1:1: \"foo(\" must be followed by )",
    function_keyword: "function foo() { bar; }" =>
        "1:13: a command can only contain words and redirects",
    proc_subst_in: "foo <(" => "1:5: < must be followed by a word",
    proc_subst_out: "foo >(" => "1:5: > must be followed by a word",
    pipe_all: "foo |&" => "1:5: | must be followed by a statement",
    semi_fall: "foo ;&" => "1:6: & can only immediately follow a statement",
    dbl_semi_fall: "foo ;;&" => "1:5: ;; can only be used in a case clause",
    ext_glob: "echo !(a)" => "1:7: a command can only contain words and redirects",
    arrays: "foo=(1 2)" => "1:5: arrays are a bash feature",
    array_index: "echo ${foo[1]}" => "1:11: arrays are a bash feature",
    replace: "echo ${foo/a/b}" => "1:11: search and replace is a bash feature",
    slice: "echo ${foo:1}" => "1:11: slicing is a bash feature",
    case_mod: "echo ${foo,bar}" => "1:11: case expansions are a bash feature",
}

#[test]
fn double_paren_is_nested_subshells() {
    let f = parse_posix_ok("((foo))");
    let Some(Command::Subshell(outer)) = &f.stmts[0].cmd else {
        panic!("want subshell");
    };
    assert!(matches!(&outer.stmts[0].cmd, Some(Command::Subshell(_))));
}

#[test]
fn keywords_become_plain_words() {
    for src in ["[[ a ]]", "let x=1", "coproc foo", "eval foo", "declare x=1", "local x"] {
        let f = parse_posix_ok(src);
        assert!(
            matches!(&f.stmts[0].cmd, Some(Command::Call(_))),
            "{:?} should be a plain call in the strict dialect",
            src
        );
    }
}

#[test]
fn posix_arithmetic_expansion_still_works() {
    // $(( )) is POSIX; only the (( )) command form is not
    let f = parse_posix_ok("echo $((1+2))");
    assert_eq!(f.stmts.len(), 1);
}

#[test]
fn dialect_monotonicity() {
    // anything the strict dialect accepts, the extended one accepts too
    let inputs = [
        "foo | bar && baz",
        "if a; then b; fi",
        "for i in 1 2; do echo; done",
        "case x in a) b ;; esac",
        "foo <<EOF\nbody\nEOF",
        "echo ${x:-default} $((1+2)) $(sub) `old`",
        "a=1 b= c cmd >out 2>&1",
    ];
    for src in inputs {
        parse_posix_ok(src);
        parse_ok(src);
    }
}
