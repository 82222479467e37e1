// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based parser invariants.

use proptest::prelude::*;

use crate::ast::{ArithmExpr, Command, File, Loop, Stmt, TestExpr, Word, WordPart};
use crate::{parse, print, ParseMode, Pos};

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
        .prop_filter("reserved words change the grammar", |w| !is_reserved(w))
        .prop_map(String::from)
}

fn is_reserved(w: &str) -> bool {
    matches!(
        w,
        "if" | "then"
            | "elif"
            | "else"
            | "fi"
            | "while"
            | "until"
            | "do"
            | "done"
            | "for"
            | "in"
            | "case"
            | "esac"
            | "function"
            | "coproc"
            | "let"
            | "eval"
            | "declare"
            | "local"
            | "export"
            | "readonly"
            | "typeset"
            | "nameref"
    )
}

fn command_strategy() -> impl Strategy<Value = String> {
    (word_strategy(), prop::collection::vec(word_strategy(), 0..4)).prop_map(|(name, args)| {
        if args.is_empty() {
            name
        } else {
            format!("{} {}", name, args.join(" "))
        }
    })
}

fn script_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(command_strategy(), 1..5), 0usize..4).prop_map(|(cmds, sep)| {
        let seps = ["; ", "\n", " && ", " | "];
        cmds.join(seps[sep % seps.len()])
    })
}

/// One statement exercising a broader slice of the AST, always safe to
/// stack on its own line.
fn structured_snippet() -> impl Strategy<Value = String> {
    let w = word_strategy();
    prop_oneof![
        command_strategy(),
        w.clone().prop_map(|a| format!("! {} &", a)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("{}={}", a, b)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("{} >{} 2>&1", a, b)),
        (w.clone(), w.clone(), w.clone())
            .prop_map(|(a, b, c)| format!("{} | {} && {}", a, b, c)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("if {}; then {}; fi", a, b)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("while {}; do {}; done", a, b)),
        (w.clone(), w.clone(), w.clone())
            .prop_map(|(a, b, c)| format!("for {} in {} {}; do x; done", a, b, c)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("case {} in {}) x ;; esac", a, b)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("{{ {}; {}; }}", a, b)),
        w.clone().prop_map(|a| format!("({})", a)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("echo \"{} ${}\"", a, b)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("{} <<X\n{} $x\nX", a, b)),
        w.clone().prop_map(|a| format!("echo $(({} + 1))", a)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("echo ${{{}:-{}}}", a, b)),
        (w.clone(), w.clone()).prop_map(|(a, b)| format!("{}() {{ {}; }}", a, b)),
    ]
}

fn structured_script() -> impl Strategy<Value = String> {
    prop::collection::vec(structured_snippet(), 1..4).prop_map(|parts| parts.join("\n"))
}

proptest! {
    #[test]
    fn parser_never_panics(input in "[ -~\\n\\t]{0,160}") {
        let _ = parse(&input, "", ParseMode::DEFAULT);
        let _ = parse(&input, "", ParseMode::POSIX_CONFORMANT);
        let _ = parse(&input, "", ParseMode::PARSE_COMMENTS);
    }

    #[test]
    fn parser_handles_multibyte(input in "[a-z àé日本語$\"'{}\\n]{0,60}") {
        let _ = parse(&input, "", ParseMode::DEFAULT);
    }

    #[test]
    fn generated_scripts_parse(input in script_strategy()) {
        let f = parse(&input, "", ParseMode::DEFAULT);
        prop_assert!(f.is_ok(), "failed to parse {:?}: {:?}", input, f.err());
    }

    #[test]
    fn positions_are_bounded(input in "[ -~\\n\\t]{0,160}") {
        if let Ok(f) = parse(&input, "", ParseMode::PARSE_COMMENTS) {
            check_file(&f, input.len());
        }
    }

    #[test]
    fn dialect_is_monotonic(input in script_strategy()) {
        if parse(&input, "", ParseMode::POSIX_CONFORMANT).is_ok() {
            prop_assert!(parse(&input, "", ParseMode::DEFAULT).is_ok());
        }
    }

    #[test]
    fn ast_equal_after_reparse(src in structured_script()) {
        let first = parse(&src, "", ParseMode::DEFAULT);
        prop_assert!(
            first.is_ok(),
            "failed to parse {:?}: {:?}",
            src,
            first.as_ref().err()
        );
        let mut first = first.unwrap();
        let mut out = Vec::new();
        print(&mut out, &first).expect("printing to a Vec cannot fail");
        let printed = String::from_utf8(out).expect("printer output is UTF-8");
        let second = parse(&printed, "", ParseMode::DEFAULT);
        prop_assert!(
            second.is_ok(),
            "output {:?} of {:?} fails to reparse: {:?}",
            printed,
            src,
            second.as_ref().err()
        );
        let mut second = second.unwrap();
        strip_file(&mut first);
        strip_file(&mut second);
        prop_assert_eq!(first, second, "reparse of {:?} changed the tree", src);
    }

    #[test]
    fn error_stable_under_truncation(input in "[ -\\[\\]-~\\n]{0,120}") {
        if let Err(err) = parse(&input, "", ParseMode::DEFAULT) {
            // cut away everything below the error, keeping its whole line;
            // the failure must survive, on the same or an earlier line.
            // The comparison matches the cut's line granularity: cutting a
            // multi-line quote or glob can shift the column within the
            // error's line, as the inner construct's own anchor surfaces
            // first. The alphabet omits backslashes, since a cut right
            // after a trailing continuation would re-join what it
            // separated.
            let prefix = input.split('\n').take(err.line).collect::<Vec<_>>().join("\n");
            let trimmed = parse(&prefix, "", ParseMode::DEFAULT);
            prop_assert!(
                trimmed.is_err(),
                "prefix {:?} of {:?} parsed cleanly, original error {}:{}",
                prefix,
                input,
                err.line,
                err.column
            );
            let e = trimmed.unwrap_err();
            prop_assert!(
                e.line <= err.line,
                "error moved from {}:{} to {}:{} after truncating {:?}",
                err.line,
                err.column,
                e.line,
                e.column,
                input
            );
        }
    }

    #[test]
    fn error_positions_in_bounds(input in "[ -~\\n]{0,120}") {
        if let Err(err) = parse(&input, "", ParseMode::DEFAULT) {
            let line_count = input.split('\n').count();
            prop_assert!(err.line >= 1 && err.line <= line_count.max(1));
            prop_assert!(err.column >= 1);
            let line = input.split('\n').nth(err.line - 1).unwrap_or("");
            prop_assert!(
                err.column <= line.len() + 1,
                "column {} beyond line {:?} in {:?}",
                err.column,
                line,
                input
            );
        }
    }
}

// ── Position bounds walk ─────────────────────────────────────────────────

fn check_node(pos: crate::Pos, end: crate::Pos, len: usize, what: &str) {
    assert!(pos.0 >= 1, "{}: pos {:?} below 1", what, pos);
    assert!(pos <= end, "{}: pos {:?} after end {:?}", what, pos, end);
    assert!(end.0 <= len + 1, "{}: end {:?} beyond input ({})", what, end, len);
}

fn check_file(f: &File, len: usize) {
    for c in &f.comments {
        check_node(c.pos(), c.end(), len, "comment");
    }
    for s in &f.stmts {
        check_stmt(s, len);
    }
}

fn check_stmt(s: &Stmt, len: usize) {
    check_node(s.pos(), s.end(), len, "stmt");
    for a in &s.assigns {
        check_node(a.pos(), a.end(), len, "assign");
        if let Some(w) = &a.value {
            check_word(w, len);
        }
        if let Some(arr) = &a.array {
            for w in &arr.elems {
                check_word(w, len);
            }
        }
    }
    for r in &s.redirs {
        check_node(r.pos(), r.end(), len, "redirect");
        check_word(&r.word, len);
        if let Some(h) = &r.hdoc {
            check_word(h, len);
        }
    }
    if let Some(cmd) = &s.cmd {
        check_cmd(cmd, len);
    }
}

fn check_stmts(stmts: &[Stmt], len: usize) {
    for s in stmts {
        check_stmt(s, len);
    }
}

fn check_cmd(cmd: &Command, len: usize) {
    check_node(cmd.pos(), cmd.end(), len, "command");
    match cmd {
        Command::Call(c) => {
            for w in &c.args {
                check_word(w, len);
            }
        }
        Command::Block(c) => check_stmts(&c.stmts, len),
        Command::Subshell(c) => check_stmts(&c.stmts, len),
        Command::If(c) => {
            check_stmts(&c.cond_stmts, len);
            check_stmts(&c.then_stmts, len);
            for e in &c.elifs {
                check_stmts(&e.cond_stmts, len);
                check_stmts(&e.then_stmts, len);
            }
            check_stmts(&c.else_stmts, len);
        }
        Command::While(c) => {
            check_stmts(&c.cond_stmts, len);
            check_stmts(&c.do_stmts, len);
        }
        Command::Until(c) => {
            check_stmts(&c.cond_stmts, len);
            check_stmts(&c.do_stmts, len);
        }
        Command::For(c) => {
            if let Loop::WordIter(wi) = &c.iter {
                for w in &wi.list {
                    check_word(w, len);
                }
            }
            check_stmts(&c.do_stmts, len);
        }
        Command::Case(c) => {
            check_word(&c.word, len);
            for pl in &c.list {
                for w in &pl.patterns {
                    check_word(w, len);
                }
                check_stmts(&pl.stmts, len);
            }
        }
        Command::Binary(c) => {
            check_stmt(&c.x, len);
            check_stmt(&c.y, len);
        }
        Command::FuncDecl(c) => check_stmt(&c.body, len),
        Command::Arithm(c) => {
            if let Some(x) = &c.x {
                check_arithm(x, len);
            }
        }
        Command::Test(c) => check_test(&c.x, len),
        Command::Decl(c) => {
            for w in &c.opts {
                check_word(w, len);
            }
            for a in &c.assigns {
                if let Some(w) = &a.value {
                    check_word(w, len);
                }
            }
        }
        Command::Eval(c) => {
            if let Some(s) = &c.stmt {
                check_stmt(s, len);
            }
        }
        Command::Coproc(c) => check_stmt(&c.stmt, len),
        Command::Let(c) => {
            for x in &c.exprs {
                check_arithm(x, len);
            }
        }
    }
}

fn check_word(w: &Word, len: usize) {
    check_node(w.pos(), w.end(), len, "word");
    for part in &w.parts {
        check_node(part.pos(), part.end(), len, "word part");
        match part {
            WordPart::DblQuoted(q) => {
                for p in &q.parts {
                    check_node(p.pos(), p.end(), len, "quoted part");
                }
            }
            WordPart::CmdSubst(c) => check_stmts(&c.stmts, len),
            WordPart::ProcSubst(c) => check_stmts(&c.stmts, len),
            WordPart::ParamExp(pe) => {
                if let Some(ind) = &pe.ind {
                    check_arithm(&ind.expr, len);
                }
                if let Some(s) = &pe.slice {
                    if let Some(x) = &s.offset {
                        check_arithm(x, len);
                    }
                    if let Some(x) = &s.length {
                        check_arithm(x, len);
                    }
                }
                if let Some(r) = &pe.repl {
                    check_word(&r.orig, len);
                    check_word(&r.with, len);
                }
                if let Some(e) = &pe.exp {
                    check_word(&e.word, len);
                }
            }
            WordPart::ArithmExp(a) => {
                if let Some(x) = &a.x {
                    check_arithm(x, len);
                }
            }
            _ => {}
        }
    }
}

fn check_arithm(x: &ArithmExpr, len: usize) {
    check_node(x.pos(), x.end(), len, "arithmetic");
    match x {
        ArithmExpr::Binary(b) => {
            check_arithm(&b.x, len);
            check_arithm(&b.y, len);
        }
        ArithmExpr::Unary(u) => check_arithm(&u.x, len),
        ArithmExpr::Paren(p) => check_arithm(&p.x, len),
        ArithmExpr::Word(w) => check_word(w, len),
    }
}

fn check_test(x: &TestExpr, len: usize) {
    check_node(x.pos(), x.end(), len, "test expression");
    match x {
        TestExpr::Binary(b) => {
            check_test(&b.x, len);
            check_test(&b.y, len);
        }
        TestExpr::Unary(u) => check_test(&u.x, len),
        TestExpr::Paren(p) => check_test(&p.x, len),
        TestExpr::Word(w) => check_word(w, len),
    }
}

// ── Position stripping, for modulo-positions tree comparison ─────────────

fn strip_file(f: &mut File) {
    f.lines.clear();
    for c in &mut f.comments {
        c.hash = Pos::NONE;
    }
    for s in &mut f.stmts {
        strip_stmt(s);
    }
}

fn strip_stmts(stmts: &mut [Stmt]) {
    for s in stmts {
        strip_stmt(s);
    }
}

fn strip_stmt(s: &mut Stmt) {
    s.position = Pos::NONE;
    s.semi_pos = Pos::NONE;
    for a in &mut s.assigns {
        strip_assign(a);
    }
    for r in &mut s.redirs {
        if let Some(n) = &mut r.n {
            strip_lit(n);
        }
        r.op_pos = Pos::NONE;
        strip_word(&mut r.word);
        if let Some(h) = &mut r.hdoc {
            strip_word(h);
        }
    }
    if let Some(cmd) = &mut s.cmd {
        strip_cmd(cmd);
    }
}

fn strip_assign(a: &mut crate::ast::Assign) {
    if let Some(n) = &mut a.name {
        strip_lit(n);
    }
    if let Some(w) = &mut a.value {
        strip_word(w);
    }
    if let Some(arr) = &mut a.array {
        arr.lparen = Pos::NONE;
        arr.rparen = Pos::NONE;
        for w in &mut arr.elems {
            strip_word(w);
        }
    }
}

fn strip_lit(l: &mut crate::ast::Lit) {
    l.value_pos = Pos::NONE;
    l.value_end = Pos::NONE;
}

fn strip_cmd(cmd: &mut Command) {
    match cmd {
        Command::Call(c) => {
            for w in &mut c.args {
                strip_word(w);
            }
        }
        Command::Block(c) => {
            c.lbrace = Pos::NONE;
            c.rbrace = Pos::NONE;
            strip_stmts(&mut c.stmts);
        }
        Command::Subshell(c) => {
            c.lparen = Pos::NONE;
            c.rparen = Pos::NONE;
            strip_stmts(&mut c.stmts);
        }
        Command::If(c) => {
            c.if_pos = Pos::NONE;
            c.then_pos = Pos::NONE;
            c.else_pos = Pos::NONE;
            c.fi_pos = Pos::NONE;
            strip_stmts(&mut c.cond_stmts);
            strip_stmts(&mut c.then_stmts);
            for e in &mut c.elifs {
                e.elif_pos = Pos::NONE;
                e.then_pos = Pos::NONE;
                strip_stmts(&mut e.cond_stmts);
                strip_stmts(&mut e.then_stmts);
            }
            strip_stmts(&mut c.else_stmts);
        }
        Command::While(c) => {
            c.while_pos = Pos::NONE;
            c.do_pos = Pos::NONE;
            c.done_pos = Pos::NONE;
            strip_stmts(&mut c.cond_stmts);
            strip_stmts(&mut c.do_stmts);
        }
        Command::Until(c) => {
            c.until_pos = Pos::NONE;
            c.do_pos = Pos::NONE;
            c.done_pos = Pos::NONE;
            strip_stmts(&mut c.cond_stmts);
            strip_stmts(&mut c.do_stmts);
        }
        Command::For(c) => {
            c.for_pos = Pos::NONE;
            c.do_pos = Pos::NONE;
            c.done_pos = Pos::NONE;
            match &mut c.iter {
                Loop::WordIter(wi) => {
                    strip_lit(&mut wi.name);
                    for w in &mut wi.list {
                        strip_word(w);
                    }
                }
                Loop::CStyle(cl) => {
                    cl.lparen = Pos::NONE;
                    cl.rparen = Pos::NONE;
                    for x in [&mut cl.init, &mut cl.cond, &mut cl.post].into_iter().flatten() {
                        strip_arithm(x);
                    }
                }
            }
            strip_stmts(&mut c.do_stmts);
        }
        Command::Case(c) => {
            c.case_pos = Pos::NONE;
            c.esac_pos = Pos::NONE;
            strip_word(&mut c.word);
            for pl in &mut c.list {
                pl.op_pos = Pos::NONE;
                for w in &mut pl.patterns {
                    strip_word(w);
                }
                strip_stmts(&mut pl.stmts);
            }
        }
        Command::Binary(c) => {
            c.op_pos = Pos::NONE;
            strip_stmt(&mut c.x);
            strip_stmt(&mut c.y);
        }
        Command::FuncDecl(c) => {
            c.position = Pos::NONE;
            strip_lit(&mut c.name);
            strip_stmt(&mut c.body);
        }
        Command::Arithm(c) => {
            c.left = Pos::NONE;
            c.right = Pos::NONE;
            if let Some(x) = &mut c.x {
                strip_arithm(x);
            }
        }
        Command::Test(c) => {
            c.left = Pos::NONE;
            c.right = Pos::NONE;
            strip_test(&mut c.x);
        }
        Command::Decl(c) => {
            c.position = Pos::NONE;
            for w in &mut c.opts {
                strip_word(w);
            }
            for a in &mut c.assigns {
                strip_assign(a);
            }
        }
        Command::Eval(c) => {
            c.eval_pos = Pos::NONE;
            if let Some(s) = &mut c.stmt {
                strip_stmt(s);
            }
        }
        Command::Coproc(c) => {
            c.coproc_pos = Pos::NONE;
            if let Some(n) = &mut c.name {
                strip_lit(n);
            }
            strip_stmt(&mut c.stmt);
        }
        Command::Let(c) => {
            c.let_pos = Pos::NONE;
            for x in &mut c.exprs {
                strip_arithm(x);
            }
        }
    }
}

fn strip_word(w: &mut Word) {
    for part in &mut w.parts {
        strip_part(part);
    }
}

fn strip_part(part: &mut WordPart) {
    match part {
        WordPart::Lit(l) => strip_lit(l),
        WordPart::SglQuoted(q) => q.position = Pos::NONE,
        WordPart::DblQuoted(q) => {
            q.position = Pos::NONE;
            for p in &mut q.parts {
                strip_part(p);
            }
        }
        WordPart::CmdSubst(c) => {
            c.left = Pos::NONE;
            c.right = Pos::NONE;
            strip_stmts(&mut c.stmts);
        }
        WordPart::ParamExp(pe) => {
            pe.dollar = Pos::NONE;
            pe.rbrace = Pos::NONE;
            if let Some(p) = &mut pe.param {
                strip_lit(p);
            }
            if let Some(ind) = &mut pe.ind {
                strip_arithm(&mut ind.expr);
            }
            if let Some(slice) = &mut pe.slice {
                for x in [&mut slice.offset, &mut slice.length].into_iter().flatten() {
                    strip_arithm(x);
                }
            }
            if let Some(repl) = &mut pe.repl {
                strip_word(&mut repl.orig);
                strip_word(&mut repl.with);
            }
            if let Some(exp) = &mut pe.exp {
                strip_word(&mut exp.word);
            }
        }
        WordPart::ArithmExp(a) => {
            a.left = Pos::NONE;
            a.right = Pos::NONE;
            if let Some(x) = &mut a.x {
                strip_arithm(x);
            }
        }
        WordPart::ProcSubst(ps) => {
            ps.op_pos = Pos::NONE;
            ps.rparen = Pos::NONE;
            strip_stmts(&mut ps.stmts);
        }
        WordPart::ExtGlob(eg) => {
            eg.op_pos = Pos::NONE;
            strip_lit(&mut eg.pattern);
        }
    }
}

fn strip_arithm(x: &mut ArithmExpr) {
    match x {
        ArithmExpr::Binary(b) => {
            b.op_pos = Pos::NONE;
            strip_arithm(&mut b.x);
            strip_arithm(&mut b.y);
        }
        ArithmExpr::Unary(u) => {
            u.op_pos = Pos::NONE;
            strip_arithm(&mut u.x);
        }
        ArithmExpr::Paren(p) => {
            p.lparen = Pos::NONE;
            p.rparen = Pos::NONE;
            strip_arithm(&mut p.x);
        }
        ArithmExpr::Word(w) => strip_word(w),
    }
}

fn strip_test(x: &mut TestExpr) {
    match x {
        TestExpr::Binary(b) => {
            b.op_pos = Pos::NONE;
            strip_test(&mut b.x);
            strip_test(&mut b.y);
        }
        TestExpr::Unary(u) => {
            u.op_pos = Pos::NONE;
            strip_test(&mut u.x);
        }
        TestExpr::Paren(p) => {
            p.lparen = Pos::NONE;
            p.rparen = Pos::NONE;
            strip_test(&mut p.x);
        }
        TestExpr::Word(w) => strip_word(w),
    }
}
