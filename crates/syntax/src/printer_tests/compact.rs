// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical single-line forms print back unchanged (plus the final
//! newline).

use super::fmt;

#[test]
fn canonical_forms_are_fixed_points() {
    let canonical = [
        "foo",
        "foo bar baz",
        "! foo &",
        "foo | bar && baz || qux",
        "a=b c= cmd",
        "PATH+=:/bin",
        "a=(1 2 3)",
        "cmd >out 2>&1 <in",
        "foo 2>err >>log <>both >|clob",
        "foo <&3 >&4",
        "(foo)",
        "{ foo; }",
        "( (foo))",
        "if a; then b; fi",
        "if a; then b; else c; fi",
        "if a; then b; elif c; then d; fi",
        "while a; do b; done",
        "until a; do b; done",
        "for i in 1 2 3; do echo $i; done",
        "for i; do echo; done",
        "foo() { bar; }",
        "function foo() { bar; }",
        "echo 'single' \"double $x\"",
        "echo $'esc' $\"loc\"",
        "echo $foo ${bar} ${#baz}",
        "echo ${a:-d} ${b##p} ${c/x/y} ${d:1:2} ${e[1]}",
        "echo $(sub) $((1 + 2)) $[3]",
        "echo a?(b|c) @(d)",
        "cmp <(a) >(b)",
        "[[ -f x && a == b ]]",
        "[[ ! a =~ b ]]",
        "[[ (a && b) || c ]]",
        "((x > 1))",
        "let x=1 y++",
        "declare -r x=1",
        "local x=1",
        "export FOO=bar",
        "readonly x",
        "eval foo bar",
        "coproc foo bar",
        "coproc name { foo; }",
        "for ((i = 0; i < 3; i++)); do echo; done",
        "echo \"\" ''",
        "foo <<<word",
        "foo &>all &>>app",
        "a | b |& c",
    ];
    for src in canonical {
        let want = format!("{}\n", src);
        assert_eq!(fmt(src), want, "not a fixed point: {:?}", src);
    }
}

#[test]
fn backquotes_canonicalise_to_dollar_parens() {
    assert_eq!(fmt("echo `date`"), "echo $(date)\n");
}

#[test]
fn typeset_canonicalises_to_declare() {
    assert_eq!(fmt("typeset -r x"), "declare -r x\n");
}
