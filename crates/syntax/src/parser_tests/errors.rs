// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exact diagnostics, byte for byte. These strings are load-bearing: tools
//! match on them, so changing one is a breaking change.

use super::macros::parse_error_tests;
use crate::{parse, ParseMode};

parse_error_tests! {
    unclosed_single: "'" => "1:1: reached EOF without closing quote '",
    unclosed_double: "\"" => "1:1: reached EOF without closing quote \"",
    backslash_in_single: "'\\''" => "1:4: reached EOF without closing quote '",
    lone_semi: ";" => "1:1: ; can only immediately follow a statement",
    semi_in_block: "{ ; }" => "1:3: ; can only immediately follow a statement",
    quoted_func_name: "\"foo\"(){}" => "1:1: invalid func name: \"\\\"foo\\\"\"",
    expanded_func_name: "foo$bar(){}" => "1:1: invalid func name: \"foo$bar\"",
    unclosed_block: "{" => "1:1: reached EOF without matching { with }",
    lone_rbrace: "}" => "1:1: } can only be used to close a block",
    comment_eats_rbrace: "{ #}" => "1:1: reached EOF without matching { with }",
    unclosed_subshell: "(" => "1:1: reached EOF without matching ( with )",
    lone_rparen: ")" => "1:1: ) can only be used to close a subshell",
    unclosed_backquote: "`" => "1:1: reached EOF without closing quote `",
    lone_dbl_semi: ";;" => "1:1: ;; can only be used in a case clause",
    unclosed_subshell_stmt: "( foo;" => "1:1: reached EOF without matching ( with )",
    lone_amp: "&" => "1:1: & can only immediately follow a statement",
    lone_pipe: "|" => "1:1: | can only immediately follow a statement",
    lone_and: "&&" => "1:1: && can only immediately follow a statement",
    lone_or: "||" => "1:1: || can only immediately follow a statement",
    or_after_semi: "foo; || bar" => "1:6: || can only immediately follow a statement",
    or_after_amp: "foo & || bar" => "1:7: || can only immediately follow a statement",
    semi_after_amp: "foo & ; bar" => "1:7: ; can only immediately follow a statement",
    dbl_semi_after_stmt: "foo;;" => "1:4: ;; can only be used in a case clause",
    unclosed_func_paren: "foo(" => "1:1: \"foo(\" must be followed by )",
    func_paren_word: "foo(bar" => "1:1: \"foo(\" must be followed by )",
    multibyte_func: "à(" => "1:1: \"foo(\" must be followed by )",
    quote_after_word: "foo'" => "1:4: reached EOF without closing quote '",
    dquote_after_word: "foo\"" => "1:4: reached EOF without closing quote \"",
    unclosed_dquote_word: "\"foo" => "1:1: reached EOF without closing quote \"",
    trailing_backslash_dquote: "\"foobar\\" => "1:1: reached EOF without closing quote \"",
    escape_in_dquote: "\"foo\\a" => "1:1: reached EOF without closing quote \"",
    func_needs_body: "foo()" => "1:1: \"foo()\" must be followed by a statement",
    func_unclosed_body: "foo() {" => "1:7: reached EOF without matching { with }",
    paren_mid_call: "echo foo(" => "1:9: a command can only contain words and redirects",
    and_needs_stmt: "foo &&" => "1:5: && must be followed by a statement",
    pipe_needs_stmt: "foo |" => "1:5: | must be followed by a statement",
    or_needs_stmt: "foo ||" => "1:5: || must be followed by a statement",
    rdr_out_needs_word: "foo >" => "1:5: > must be followed by a word",
    rdr_app_needs_word: "foo >>" => "1:5: >> must be followed by a word",
    rdr_in_needs_word: "foo <" => "1:5: < must be followed by a word",
    rdr_fd_needs_word: "foo 2>" => "1:6: > must be followed by a word",
    rdr_word_next_line: "foo <\nbar" => "2:1: redirect word must be on the same line",
    hdoc_needs_word: "foo <<" => "1:5: << must be followed by a word",
    hdoc_word_next_line: "foo <<\nEOF\nbar\nEOF" =>
        "2:1: heredoc stop word must be on the same line",
    bare_if: "if" => "1:1: \"if\" must be followed by a statement list",
    if_needs_then: "if foo;" => "1:1: \"if <cond>\" must be followed by \"then\"",
    if_then_same_word: "if foo then" => "1:1: \"if <cond>\" must be followed by \"then\"",
    if_needs_fi: "if foo; then bar;" => "1:1: if statement must end with \"fi\"",
    fi_in_commentless_word: "if foo; then bar; fi#etc" =>
        "1:1: if statement must end with \"fi\"",
    elif_needs_then: "if a; then b; elif c;" =>
        "1:15: \"elif <cond>\" must be followed by \"then\"",
    second_quote_unclosed: "'foo' '" => "1:7: reached EOF without closing quote '",
    quote_unclosed_line_two: "'foo\n' '" => "2:3: reached EOF without closing quote '",
    bare_while: "while" => "1:1: \"while\" must be followed by a statement list",
    while_needs_do: "while foo;" => "1:1: \"while <cond>\" must be followed by \"do\"",
    while_needs_done: "while foo; do bar" => "1:1: while statement must end with \"done\"",
    while_needs_done_semi: "while foo; do bar;" =>
        "1:1: while statement must end with \"done\"",
    bare_until: "until" => "1:1: \"until\" must be followed by a statement list",
    until_needs_do: "until foo;" => "1:1: \"until <cond>\" must be followed by \"do\"",
    until_needs_done: "until foo; do bar" => "1:1: until statement must end with \"done\"",
    bare_for: "for" => "1:1: \"for\" must be followed by a literal",
    for_needs_in: "for i" => "1:1: \"for foo\" must be followed by \"in\", ; or a newline",
    for_needs_do: "for i in;" => "1:1: \"for foo [in words]\" must be followed by \"do\"",
    for_words_need_do: "for i in 1 2 3;" =>
        "1:1: \"for foo [in words]\" must be followed by \"do\"",
    for_amp_in_words: "for i in 1 2 &" => "1:14: word list can only contain words",
    for_needs_done: "for i in 1 2 3; do echo $i;" =>
        "1:1: for statement must end with \"done\"",
    for_missing_do: "for i in 1 2 3; echo $i;" =>
        "1:1: \"for foo [in words]\" must be followed by \"do\"",
    for_quoted_name: "for 'i' in 1 2 3; do echo $i; done" =>
        "1:1: \"for\" must be followed by a literal",
    for_name_is_in: "for in 1 2 3; do echo $i; done" =>
        "1:1: \"for foo\" must be followed by \"in\", ; or a newline",
    semi_after_background: "foo &\n;" => "2:1: ; can only immediately follow a statement",
    unclosed_cmd_subst: "echo $(foo" => "1:6: reached EOF without matching ( with )",
    unclosed_arithm_exp: "echo $((foo" => "1:6: reached EOF without matching $(( with ))",
    arithm_backslash: "foo $((\\" => "1:5: reached EOF without matching $(( with ))",
    arithm_backslash_word: "fo $((o\\" => "1:4: reached EOF without matching $(( with ))",
    arithm_escape: "echo $((foo\\a" => "1:6: reached EOF without matching $(( with ))",
    arithm_dquote: "$((\"" => "1:1: reached EOF without matching $(( with ))",
    arithm_word_dquote: "$((a\"" => "1:1: reached EOF without matching $(( with ))",
    arithm_nested_dquote: "$(($((a\"" => "1:1: reached EOF without matching $(( with ))",
    arithm_squote: "$(('" => "1:1: reached EOF without matching $(( with ))",
    arithm_amp_subst: "$((& $(" => "1:1: reached EOF without matching $(( with ))",
    arithm_amp_zero: "$((& 0 $(" => "1:1: reached EOF without matching $(( with ))",
    arithm_word_squote: "$((a'" => "1:1: reached EOF without matching $(( with ))",
    arithm_two_words: "$((a b\"" => "1:1: reached EOF without matching $(( with ))",
    empty_parens: "echo $((()))" => "1:9: parentheses must enclose an expression",
    arithm_extra_paren: "echo $(((3))" => "1:6: reached EOF without matching $(( with ))",
    plus_needs_expr: "echo $((+))" => "1:9: + must be followed by an expression",
    arithm_two_operands: "echo $((a b c))" => "1:11: not a valid arithmetic operator: b",
    arithm_semi: "echo $((a ; c))" => "1:11: not a valid arithmetic operator: ;",
    star_needs_expr: "echo $((a *))" => "1:11: * must be followed by an expression",
    inc_needs_expr: "echo $((++))" => "1:9: ++ must be followed by an expression",
    hdoc_body_arithm: "<<EOF\n$(()a" => "2:1: reached EOF without matching $(( with ))",
    hdoc_body_backquote: "<<EOF\n`))" => "2:2: ) can only be used to close a subshell",
    unclosed_param: "echo ${foo" => "1:6: reached EOF without matching ${ with }",
    empty_param: "echo $foo ${}" => "1:11: parameter expansion requires a literal",
    unclosed_param_exp: "echo ${foo-bar" => "1:6: reached EOF without matching ${ with }",
    block_after_comment: "#foo\n{" => "2:1: reached EOF without matching { with }",
    param_in_dquotes: "echo \"foo${bar\"" => "1:10: reached EOF without matching ${ with }",
    semi_second_line: "foo\n;" => "2:1: ; can only immediately follow a statement",
    word_after_subshell: "(foo) bar" =>
        "1:7: statements must be separated by &, ; or a newline",
    word_after_block: "{ foo; } bar" =>
        "1:10: statements must be separated by &, ; or a newline",
    word_after_fi: "if foo; then bar; fi bar" =>
        "1:22: statements must be separated by &, ; or a newline",
    bare_case: "case" => "1:1: \"case\" must be followed by a word",
    case_needs_in: "case i" => "1:1: \"case x\" must be followed by \"in\"",
    case_needs_esac: "case i in 3) foo;" => "1:1: case statement must end with \"esac\"",
    case_pattern_midword: "case i in 3) foo; 4) bar; esac" =>
        "1:20: a command can only contain words and redirects",
    case_pattern_sep: "case i in 3&) foo;" => "1:12: case patterns must be separated with |",
    case_pattern_word: "case $i in &) foo;" => "1:12: case patterns must consist of words",
    dquote_backquote: "\"`\"" => "1:3: reached EOF without closing quote \"",
    backquote_dquote: "`\"`" => "1:3: reached EOF without closing quote `",
    backquote_block: "`{\n`" => "1:2: reached ` without matching { with }",
    rparen_in_backquote: "echo \"`)`\"" => "1:8: ) can only be used to close a subshell",
    hdoc_word_subst: "foo <<$(bar)" => "1:7: nested statements not allowed in heredoc words",
    hdoc_word_backquote: "foo <<`bar`" =>
        "1:7: nested statements not allowed in heredoc words",
    empty_func_name: "\"\"()" => "1:1: invalid func name: \"\\\"\\\"\"",
    trailing_semi_after_if: "if; then bar; fi; ;" =>
        "1:19: ; can only immediately follow a statement",
    // extended-dialect constructs
    unclosed_arithm_cmd: "((foo" => "1:1: reached EOF without matching (( with ))",
    arithm_cmd_mid_call: "echo ((foo" => "1:6: a command can only contain words and redirects",
    pipe_all_needs_stmt: "foo |&" => "1:5: |& must be followed by a statement",
    bare_let: "let" => "1:1: let clause requires at least one expression",
    let_spaced_op: "let a+ b" => "1:6: + must be followed by an expression",
    let_leading_op: "let + a" => "1:5: + must be followed by an expression",
    let_spaced_inc: "let a ++" => "1:7: ++ must be followed by an expression",
    let_op_at_newline: "let a+\n" => "1:6: + must be followed by an expression",
    let_arithm_end: "let ))" => "1:1: let clause requires at least one expression",
    let_not_in_backquote: "`let !`" => "1:6: ! must be followed by an expression",
    let_then_unclosed_quote: "let 'foo'\n'" => "2:1: reached EOF without closing quote '",
    bare_test_clause: "[[" => "1:1: test clause requires at least one expression",
    empty_test_clause: "[[ ]]" => "1:1: test clause requires at least one expression",
    unclosed_test: "[[ a" => "1:1: reached EOF without matching [[ with ]]",
    unclosed_test_unary: "[[ -f a" => "1:1: reached EOF without matching [[ with ]]",
    unclosed_test_binary: "[[ a -nt b" => "1:1: reached EOF without matching [[ with ]]",
    unclosed_test_regex: "[[ a =~ b" => "1:1: reached EOF without matching [[ with ]]",
    test_extra_word: "[[ a b c ]]" => "1:6: not a valid test operator: b",
    test_amp: "[[ a & b ]]" => "1:6: not a valid test operator: &",
    test_empty_parens: "[[ true && () ]]" => "1:12: parentheses must enclose an expression",
    local_needs_words: "local (" => "1:7: \"local\" must be followed by words",
    declare_then_rparen: "declare 0=${o})" =>
        "1:15: statements must be separated by &, ; or a newline",
    array_elem_redirect: "a=(<)" => "1:4: array elements must be words",
    bare_function: "function" => "1:1: \"function\" must be followed by a word",
    function_unclosed_paren: "function foo(" => "1:10: \"foo(\" must be followed by )",
    function_in_backquote: "function `function" =>
        "1:11: \"function\" must be followed by a word",
    function_quoted_name: "function \"foo\"(){}" => "1:10: invalid func name: \"\\\"foo\\\"\"",
    function_needs_body: "function foo()" => "1:1: \"foo()\" must be followed by a statement",
    herestring_needs_word: "foo <<<" => "1:5: <<< must be followed by a word",
    unclosed_brack_arithm: "echo $[foo" => "1:6: reached EOF without matching $[ with ]",
    unclosed_dollar_single: "echo $'" => "1:6: reached EOF without closing quote '",
    unclosed_dollar_double: "echo $\"" => "1:6: reached EOF without closing quote \"",
    unclosed_extglob: "echo @(" => "1:6: reached EOF without matching @( with )",
    unclosed_extglob_word: "echo @(a" => "1:6: reached EOF without matching @( with )",
    bare_coproc: "coproc" => "1:1: coproc clause requires a command",
    coproc_then_newline: "coproc\n$" => "1:1: coproc clause requires a command",
    coproc_declare: "coproc declare (" => "1:16: \"declare\" must be followed by words",
    backquoted_let: "`let` { foo; }" => "1:2: let clause requires at least one expression",
    index_two_operands: "echo ${foo[1 2]}" => "1:14: not a valid arithmetic operator: 2",
    index_needs_expr: "echo ${foo[}" => "1:11: [ must be followed by an expression",
    index_empty: "echo ${foo[]}" => "1:11: [ must be followed by an expression",
    replace_at_newline: "echo ${a/\n" => "1:6: reached EOF without matching ${ with }",
    expansion_at_newline: "echo ${a-\n" => "1:6: reached EOF without matching ${ with }",
    slice_needs_expr: "echo ${foo:" => "1:11: : must be followed by an expression",
    slice_two_operands: "echo ${foo:1 2}" => "1:14: not a valid arithmetic operator: 2",
    slice_unclosed: "echo ${foo:1" => "1:6: reached EOF without matching ${ with }",
    slice_len_needs_expr: "echo ${foo:1:" => "1:13: : must be followed by an expression",
    slice_len_unclosed: "echo ${foo:1:2" => "1:6: reached EOF without matching ${ with }",
}

#[test]
fn filename_prefixes_errors() {
    let err = parse("'", "some-file.sh", ParseMode::DEFAULT).unwrap_err();
    assert_eq!(err.to_string(), "some-file.sh:1:1: reached EOF without closing quote '");
    assert_eq!(err.filename, "some-file.sh");
    assert_eq!((err.line, err.column), (1, 1));
}

#[test]
fn error_fields_match_rendering() {
    let err = parse("foo &&", "", ParseMode::DEFAULT).unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 5);
    assert_eq!(err.text, "&& must be followed by a statement");
}
