// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compound commands.

use super::helpers::{assert_call, lit_of, single_stmt};
use crate::ast::{Command, Loop, TestExpr};
use crate::token::{BinTestOp, CaseOp, UnTestOp};

#[test]
fn if_clause_shape() {
    let s = single_stmt("if a; then b; fi");
    let Some(Command::If(ic)) = &s.cmd else {
        panic!("want if");
    };
    assert_eq!(ic.cond_stmts.len(), 1);
    assert_call(&ic.cond_stmts[0], &["a"]);
    assert_eq!(ic.then_stmts.len(), 1);
    assert_call(&ic.then_stmts[0], &["b"]);
    assert!(ic.elifs.is_empty());
    assert!(ic.else_stmts.is_empty());
    assert!(ic.else_pos.is_none());
}

#[test]
fn if_elif_else() {
    let s = single_stmt("if a; then b; elif c; then d; else e; fi");
    let Some(Command::If(ic)) = &s.cmd else {
        panic!("want if");
    };
    assert_eq!(ic.elifs.len(), 1);
    assert_call(&ic.elifs[0].cond_stmts[0], &["c"]);
    assert_call(&ic.else_stmts[0], &["e"]);
    assert!(!ic.else_pos.is_none());
}

#[test]
fn while_and_until() {
    let s = single_stmt("while a; do b; done");
    assert!(matches!(&s.cmd, Some(Command::While(_))));
    let s = single_stmt("until a; do b; done");
    assert!(matches!(&s.cmd, Some(Command::Until(_))));
}

#[test]
fn for_word_iteration() {
    let s = single_stmt("for i in 1 2 3; do echo $i; done");
    let Some(Command::For(fc)) = &s.cmd else {
        panic!("want for");
    };
    let Loop::WordIter(wi) = &fc.iter else {
        panic!("want word iteration");
    };
    assert_eq!(wi.name.value, "i");
    assert_eq!(wi.list.len(), 3);
    assert_eq!(lit_of(&wi.list[1]), "2");
    assert_eq!(fc.do_stmts.len(), 1);
}

#[test]
fn for_without_words() {
    let s = single_stmt("for i; do echo; done");
    let Some(Command::For(fc)) = &s.cmd else {
        panic!("want for");
    };
    let Loop::WordIter(wi) = &fc.iter else {
        panic!("want word iteration");
    };
    assert!(wi.list.is_empty());
}

#[test]
fn for_c_style() {
    let s = single_stmt("for ((i = 0; i < 3; i++)); do echo; done");
    let Some(Command::For(fc)) = &s.cmd else {
        panic!("want for");
    };
    let Loop::CStyle(cl) = &fc.iter else {
        panic!("want c-style loop");
    };
    assert!(cl.init.is_some());
    assert!(cl.cond.is_some());
    assert!(cl.post.is_some());
}

#[test]
fn for_c_style_empty_sections() {
    let s = single_stmt("for ((;;)); do echo; done");
    let Some(Command::For(fc)) = &s.cmd else {
        panic!("want for");
    };
    let Loop::CStyle(cl) = &fc.iter else {
        panic!("want c-style loop");
    };
    assert!(cl.init.is_none() && cl.cond.is_none() && cl.post.is_none());
}

#[test]
fn case_arms_and_terminators() {
    let s = single_stmt("case $x in a|b) one ;; c) two ;& d) ;; esac");
    let Some(Command::Case(cc)) = &s.cmd else {
        panic!("want case");
    };
    assert_eq!(cc.list.len(), 3);
    assert_eq!(cc.list[0].patterns.len(), 2);
    assert_eq!(cc.list[0].op, CaseOp::Break);
    assert_eq!(cc.list[1].op, CaseOp::Fallthrough);
    assert!(cc.list[2].stmts.is_empty());
}

#[test]
fn case_with_open_parens() {
    let s = single_stmt("case x in (a) foo ;; esac");
    let Some(Command::Case(cc)) = &s.cmd else {
        panic!("want case");
    };
    assert_eq!(lit_of(&cc.list[0].patterns[0]), "a");
}

#[test]
fn case_missing_last_terminator() {
    let s = single_stmt("case x in a) foo\nesac");
    let Some(Command::Case(cc)) = &s.cmd else {
        panic!("want case");
    };
    assert_eq!(cc.list[0].op, CaseOp::Break);
}

#[test]
fn block_and_subshell() {
    let s = single_stmt("{ foo; bar; }");
    let Some(Command::Block(b)) = &s.cmd else {
        panic!("want block");
    };
    assert_eq!(b.stmts.len(), 2);
    let s = single_stmt("(foo; bar)");
    let Some(Command::Subshell(sub)) = &s.cmd else {
        panic!("want subshell");
    };
    assert_eq!(sub.stmts.len(), 2);
}

#[test]
fn nested_subshells() {
    let s = single_stmt("((foo) )");
    // `(( ... ) )` is two subshells, not arithmetic: the lookahead sees no
    // `))` closer immediately after balance
    let Some(Command::Subshell(outer)) = &s.cmd else {
        panic!("want subshell, got {:?}", s.cmd);
    };
    assert!(matches!(&outer.stmts[0].cmd, Some(Command::Subshell(_))));
}

#[test]
fn arithmetic_command() {
    let s = single_stmt("((x > 1))");
    let Some(Command::Arithm(ac)) = &s.cmd else {
        panic!("want arithmetic command, got {:?}", s.cmd);
    };
    assert!(ac.x.is_some());
}

#[test]
fn function_declarations() {
    let s = single_stmt("foo() { bar; }");
    let Some(Command::FuncDecl(fd)) = &s.cmd else {
        panic!("want function");
    };
    assert!(!fd.bash_style);
    assert_eq!(fd.name.value, "foo");
    assert!(matches!(&fd.body.cmd, Some(Command::Block(_))));

    let s = single_stmt("function foo() { bar; }");
    let Some(Command::FuncDecl(fd)) = &s.cmd else {
        panic!("want function");
    };
    assert!(fd.bash_style);

    let s = single_stmt("function foo { bar; }");
    let Some(Command::FuncDecl(fd)) = &s.cmd else {
        panic!("want function");
    };
    assert!(fd.bash_style);
}

#[test]
fn test_clause_binary_and_unary() {
    let s = single_stmt("[[ -f foo && a == b ]]");
    let Some(Command::Test(tc)) = &s.cmd else {
        panic!("want test clause");
    };
    let TestExpr::Binary(and) = &tc.x else {
        panic!("want binary &&");
    };
    assert_eq!(and.op, BinTestOp::AndTest);
    let TestExpr::Unary(u) = &and.x else {
        panic!("want unary -f");
    };
    assert_eq!(u.op, UnTestOp::RegFile);
    let TestExpr::Binary(eq) = &and.y else {
        panic!("want binary ==");
    };
    assert_eq!(eq.op, BinTestOp::Match);
}

#[test]
fn test_clause_regex() {
    let s = single_stmt("[[ $x =~ fo+(o|a) ]]");
    let Some(Command::Test(tc)) = &s.cmd else {
        panic!("want test clause");
    };
    let TestExpr::Binary(b) = &tc.x else {
        panic!("want binary");
    };
    assert_eq!(b.op, BinTestOp::ReMatch);
    let TestExpr::Word(w) = &b.y else {
        panic!("want regex word");
    };
    assert_eq!(lit_of(w), "fo+(o|a)");
}

#[test]
fn declare_family() {
    let s = single_stmt("declare -r x=1 y");
    let Some(Command::Decl(dc)) = &s.cmd else {
        panic!("want declare");
    };
    assert!(dc.variant.is_empty());
    assert_eq!(dc.opts.len(), 1);
    assert_eq!(dc.assigns.len(), 2);
    assert!(dc.assigns[1].name.is_none());

    let s = single_stmt("local x=1");
    let Some(Command::Decl(dc)) = &s.cmd else {
        panic!("want local");
    };
    assert_eq!(dc.variant, "local");

    let s = single_stmt("typeset x");
    let Some(Command::Decl(dc)) = &s.cmd else {
        panic!("want typeset as declare");
    };
    assert!(dc.variant.is_empty());
}

#[test]
fn eval_and_coproc() {
    let s = single_stmt("eval foo bar");
    let Some(Command::Eval(ec)) = &s.cmd else {
        panic!("want eval");
    };
    assert!(ec.stmt.is_some());

    let s = single_stmt("coproc foo bar");
    let Some(Command::Coproc(cc)) = &s.cmd else {
        panic!("want coproc");
    };
    // "foo" folds into the call; it was the command, not the name
    assert!(cc.name.is_none());
    assert_call(&cc.stmt, &["foo", "bar"]);

    let s = single_stmt("coproc name { foo; }");
    let Some(Command::Coproc(cc)) = &s.cmd else {
        panic!("want coproc");
    };
    assert_eq!(cc.name.as_ref().map(|n| n.value.as_str()), Some("name"));

    let s = single_stmt("coproc while a; do b; done");
    let Some(Command::Coproc(cc)) = &s.cmd else {
        panic!("want coproc");
    };
    assert!(cc.name.is_none());
    assert!(matches!(&cc.stmt.cmd, Some(Command::While(_))));
}

#[test]
fn coproc_name_only() {
    let s = single_stmt("coproc foo");
    let Some(Command::Coproc(cc)) = &s.cmd else {
        panic!("want coproc");
    };
    assert!(cc.name.is_none());
    assert_call(&cc.stmt, &["foo"]);
}

#[test]
fn let_clause_exprs() {
    let s = single_stmt("let x=1 y++");
    let Some(Command::Let(lc)) = &s.cmd else {
        panic!("want let");
    };
    assert_eq!(lc.exprs.len(), 2);
}
