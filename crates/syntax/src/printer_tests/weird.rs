// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Messy input, canonical output.

use super::fmt_tests;

fmt_tests! {
    semi_to_newline: "foo; bar" => "foo\nbar",
    blank_runs_collapse: "foo\n\n\nbar" => "foo\n\nbar",
    trailing_blanks_strip: "foo\n\n" => "foo",
    leading_blanks_strip: "\n\nfoo" => "foo",
    comments_reindent: "# foo\n # bar" => "# foo\n# bar",
    inline_comment_after_assign: "a=b # inline\nbar" => "a=b # inline\nbar",
    inline_comment_after_subst: "a=$(b) # inline" => "a=$(b) # inline",
    substs_stay_inline: "$(a) $(b)" => "$(a) $(b)",
    if_cond_joins: "if a\nthen\n\tb\nfi" => "if a; then\n\tb\nfi",
    empty_else_drops: "if a; then\nb\nelse\nfi" => "if a; then\n\tb\nfi",
    redirs_before_second_word: "foo >&2 <f bar" => "foo >&2 <f bar",
    redirs_after_args: "foo >&2 bar <f" => "foo >&2 bar <f",
    late_redirs_move_last: "foo >&2 bar <f bar2" => "foo >&2 bar bar2 <f",
    hdoc_moves_past_words: "foo <<EOF bar\nl1\nEOF" => "foo bar <<EOF\nl1\nEOF",
    hdoc_in_chain: "foo <<EOF && bar\nl1\nEOF" => "foo <<EOF && bar\nl1\nEOF",
    hdoc_pulls_chain_inline: "foo <<EOF &&\nl1\nEOF\nbar" => "foo <<EOF && bar\nl1\nEOF",
    hdoc_keeps_blank_after: "foo <<EOF\nl1\nEOF\n\nfoo2" => "foo <<EOF\nl1\nEOF\n\nfoo2",
    bare_hdoc_gets_stop: "<<EOF" => "<<EOF\nEOF",
    empty_hdoc_blank_after: "foo <<EOF\nEOF\n\nbar" => "foo <<EOF\nEOF\n\nbar",
    quoted_hdoc_blank_after: "foo <<'EOF'\nEOF\n\nbar" => "foo <<'EOF'\nEOF\n\nbar",
    block_expands: "{ foo; bar; }" => "{\n\tfoo\n\tbar\n}",
    block_then_comment: "{ foo; bar; }\n#etc" => "{\n\tfoo\n\tbar\n}\n#etc",
    block_half_inline: "{\n\tfoo; }" => "{\n\tfoo\n}",
    block_late_close: "{ foo\n}" => "{\n\tfoo\n}",
    subshell_late_close: "(foo\n)" => "(\n\tfoo\n)",
    subst_late_close: "$(foo\n)" => "$(\n\tfoo\n)",
    blank_before_comment: "a\n\n\n# etc\nb" => "a\n\n# etc\nb",
    continuation_joins_words: "a b\\\nc d" => "a bc \\\n\td",
    continuation_joins_longer: "a bb\\\ncc d" => "a bbcc \\\n\td",
    continuations_keep: "a \\\n\tb \\\n\tc \\\n\t;" => "a \\\n\tb \\\n\tc \\\n\t;",
    assign_continuations_keep: "a=1 \\\n\tb=2 \\\n\tc=3 \\\n\t;" =>
        "a=1 \\\n\tb=2 \\\n\tc=3 \\\n\t;",
    semi_on_own_line: "if a \\\n\t; then b; fi" => "if a \\\n\t; then b; fi",
    multiline_single_quotes: "a 'b\nb' c" => "a 'b\nb' c",
    subshell_expands: "(foo; bar)" => "(\n\tfoo\n\tbar\n)",
    block_mixed: "{\nfoo\nbar; }" => "{\n\tfoo\n\tbar\n}",
    quoted_then_block: "\"$foo\"\n{\n\tbar\n}" => "\"$foo\"\n{\n\tbar\n}",
    comment_in_block: "{\nbar\n# extra\n}" => "{\n\tbar\n\t# extra\n}",
    trailing_comment_tightens: "foo\nbar  # extra" => "foo\nbar # extra",
    comments_align: "foo # 1\nfooo # 2\nfo # 3" => "foo  # 1\nfooo # 2\nfo   # 3",
    comments_align_indented: " foo # 1\n fooo # 2\n fo # 3" =>
        "foo  # 1\nfooo # 2\nfo   # 3",
    comments_align_tighten: "foo   # 1\nfooo  # 2\nfo    # 3" =>
        "foo  # 1\nfooo # 2\nfo   # 3",
    comments_align_bounded: "fooooo\nfoo # 1\nfooo # 2\nfo # 3\nfooooo" =>
        "fooooo\nfoo  # 1\nfooo # 2\nfo   # 3\nfooooo",
    comments_align_tail: "foo\nbar\nfoo # 1\nfooo # 2" => "foo\nbar\nfoo  # 1\nfooo # 2",
    plain_line_breaks_group: "foobar # 1\nfoo\nfoo # 2" => "foobar # 1\nfoo\nfoo # 2",
    comment_line_breaks_group: "foobar # 1\n#foo\nfoo # 2" => "foobar # 1\n#foo\nfoo # 2",
    blank_line_breaks_group: "foobar # 1\n\nfoo # 2" => "foobar # 1\n\nfoo # 2",
    group_aligns_up: "foo # 2\nfoo2 bar # 1" => "foo      # 2\nfoo2 bar # 1",
    group_with_negation: "foo bar # 1\n! foo # 2" => "foo bar # 1\n! foo   # 2",
    groups_split_and_align: "aa #b\nc  #d\ne\nf #g" => "aa #b\nc  #d\ne\nf #g",
    semi_then_comment: "foo; foooo # 1" => "foo\nfoooo # 1",
    groups_across_splits: "aaa; b #1\nc #2" => "aaa\nb #1\nc #2",
    groups_across_splits_more: "a #1\nbbb; c #2\nd #3" => "a #1\nbbb\nc #2\nd #3",
    comment_in_subshell: "(\nbar\n# extra\n)" => "(\n\tbar\n\t# extra\n)",
    for_empty_body_comment: "for a in 1 2\ndo\n\t# bar\ndone" =>
        "for a in 1 2; do\n\t# bar\ndone",
    for_blank_kept: "for a in 1 2; do\n\n\tbar\ndone" => "for a in 1 2; do\n\n\tbar\ndone",
    chain_break_keeps: "a \\\n\t&& b" => "a \\\n\t&& b",
    chain_break_then_stmt: "a \\\n\t&& b\nc" => "a \\\n\t&& b\nc",
    chain_in_block: "{\n(a \\\n&& b)\nc\n}" => "{\n\t(a \\\n\t\t&& b)\n\tc\n}",
    chain_partial_breaks: "a && b \\\n&& c" => "a && b \\\n\t&& c",
    chain_mixed_breaks: "a \\\n&& $(b) && c \\\n&& d" => "a \\\n\t&& $(b) && c \\\n\t&& d",
    chain_two_stmts: "a \\\n&& b\nc \\\n&& d" => "a \\\n\t&& b\nc \\\n\t&& d",
    pipe_chain_in_block: "a | {\nb \\\n| c\n}" => "a | {\n\tb \\\n\t\t| c\n}",
    chain_into_if: "a \\\n\t&& if foo; then\nbar\nfi" =>
        "a \\\n\t&& if foo; then\n\t\tbar\n\tfi",
    if_fully_expanded: "if\nfoo\nthen\nbar\nfi" => "if\n\tfoo\nthen\n\tbar\nfi",
    if_cond_continuation: "if foo \\\nbar\nthen\nbar\nfi" =>
        "if foo \\\n\tbar; then\n\tbar\nfi",
    if_cond_chain_break: "if foo \\\n&& bar\nthen\nbar\nfi" =>
        "if foo \\\n\t&& bar; then\n\tbar\nfi",
    pipes_break_backslashed: "a |\nb |\nc" => "a \\\n\t| b \\\n\t| c",
    comment_after_pipe: "foo |\n# misplaced\nbar" => "foo \\\n\t| bar # misplaced",
    pipe_into_while: "foo | while read l; do\nbar\ndone" =>
        "foo | while read l; do\n\tbar\ndone",
    quoted_continuations_keep: "\"\\\nfoo\\\n  bar\"" => "\"\\\nfoo\\\n  bar\"",
    redirect_on_next_line: "foo \\\n>bar\netc" => "foo \\\n\t>bar\netc",
    redirect_after_continuations: "foo \\\nfoo2 \\\n>bar" => "foo \\\n\tfoo2 \\\n\t>bar",
    case_expanded: "case $i in\n1)\nfoo\n;;\nesac" =>
        "case $i in\n\t1)\n\t\tfoo\n\t\t;;\nesac",
    case_gets_terminator: "case $i in\n1)\nfoo\nesac" =>
        "case $i in\n\t1)\n\t\tfoo\n\t\t;;\nesac",
    case_inline_arm: "case $i in\n1) foo\nesac" => "case $i in\n\t1) foo ;;\nesac",
    case_two_stmts_expand: "case $i in\n1) foo; bar\nesac" =>
        "case $i in\n\t1)\n\t\tfoo\n\t\tbar\n\t\t;;\nesac",
    case_two_stmts_terminated: "case $i in\n1) foo; bar;;\nesac" =>
        "case $i in\n\t1)\n\t\tfoo\n\t\tbar\n\t\t;;\nesac",
    case_empty_arm_comment: "case $i in\n1)\n#foo\n;;\nesac" =>
        "case $i in\n\t1) ;; #foo\nesac",
    array_multiline: "a=(\nb\nc\n) foo" => "a=(\n\tb\n\tc\n) foo",
    array_comments: "a=(\n\tb #foo\n\tc #bar\n)" => "a=(\n\tb #foo\n\tc #bar\n)",
    hdoc_with_pipe: "foo <<EOF | $(bar)\n3\nEOF" => "foo <<EOF | $(bar)\n3\nEOF",
    subst_in_hdoc_body: "a <<EOF\n$(\n\tb\n\tc)\nEOF" => "a <<EOF\n$(\n\tb\n\tc\n)\nEOF",
    lparen_spacing: "( (foo) )\n$( (foo) )\n<( (foo) )" => "( (foo))\n$( (foo))\n<((foo))",
    multiline_string_with_subst: "\"foo\n$(bar)\"" => "\"foo\n$(bar)\"",
    string_continuation_subst: "\"foo\\\n$(bar)\"" => "\"foo\\\n$(bar)\"",
    assign_continuations: "a=b \\\nc=d \\\nfoo" => "a=b \\\n\tc=d \\\n\tfoo",
    assign_continuations_args: "a=b \\\nc=d \\\nfoo \\\nbar" =>
        "a=b \\\n\tc=d \\\n\tfoo \\\n\tbar",
    multiline_string_then_stmt: "\"foo\nbar\"\netc" => "\"foo\nbar\"\netc",
    three_line_string: "\"foo\nbar\nbar2\"\netc" => "\"foo\nbar\nbar2\"\netc",
    string_in_assign: "a=\"$b\n\"\nd=e" => "a=\"$b\n\"\nd=e",
    empty_multiline_string: "\"\n\"\n\nfoo" => "\"\n\"\n\nfoo",
    empty_multiline_dollar_string: "$\"\n\"\n\nfoo" => "$\"\n\"\n\nfoo",
    empty_multiline_squote: "'\n'\n\nfoo" => "'\n'\n\nfoo",
    empty_multiline_dollar_squote: "$'\n'\n\nfoo" => "$'\n'\n\nfoo",
    long_hdoc_then_block: "foo <<EOF\na\nb\nc\nd\nEOF\n{\n\tbar\n}" =>
        "foo <<EOF\na\nb\nc\nd\nEOF\n{\n\tbar\n}",
    comment_groups_around_if: "foo bar # one\nif a; then\n\tb\nfi # two" =>
        "foo bar # one\nif a; then\n\tb\nfi # two",
}
