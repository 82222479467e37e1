// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic expression structure and precedence.

use super::helpers::{get_call, lit_of, single_stmt};
use crate::ast::{ArithmExpr, WordPart};
use crate::token::{BinAritOp, UnAritOp};

fn arithm(src: &str) -> ArithmExpr {
    let s = single_stmt(src);
    let call = get_call(&s);
    let WordPart::ArithmExp(a) = &call.args[1].parts[0] else {
        panic!("want arithmetic expansion in {:?}", src);
    };
    a.x.clone().unwrap_or_else(|| panic!("empty arithmetic in {:?}", src))
}

fn word_val(x: &ArithmExpr) -> &str {
    match x {
        ArithmExpr::Word(w) => lit_of(w),
        other => panic!("want a word, got {:?}", other),
    }
}

#[test]
fn mul_binds_tighter_than_add() {
    let ArithmExpr::Binary(add) = arithm("echo $((1+2*3))") else {
        panic!("want binary");
    };
    assert_eq!(add.op, BinAritOp::Add);
    assert_eq!(word_val(&add.x), "1");
    let ArithmExpr::Binary(mul) = &add.y else {
        panic!("want nested binary");
    };
    assert_eq!(mul.op, BinAritOp::Mul);
    assert_eq!(word_val(&mul.x), "2");
    assert_eq!(word_val(&mul.y), "3");
}

#[test]
fn assignment_is_right_associative() {
    let ArithmExpr::Binary(outer) = arithm("echo $((a = b = c))") else {
        panic!("want binary");
    };
    assert_eq!(outer.op, BinAritOp::Assgn);
    assert_eq!(word_val(&outer.x), "a");
    let ArithmExpr::Binary(inner) = &outer.y else {
        panic!("want nested assignment");
    };
    assert_eq!(inner.op, BinAritOp::Assgn);
}

#[test]
fn addition_is_left_associative() {
    let ArithmExpr::Binary(outer) = arithm("echo $((a + b + c))") else {
        panic!("want binary");
    };
    assert_eq!(word_val(&outer.y), "c");
    assert!(matches!(&outer.x, ArithmExpr::Binary(_)));
}

#[test]
fn ternary_shape() {
    let ArithmExpr::Binary(quest) = arithm("echo $((a ? b : c))") else {
        panic!("want binary");
    };
    assert_eq!(quest.op, BinAritOp::Quest);
    let ArithmExpr::Binary(colon) = &quest.y else {
        panic!("want colon arm");
    };
    assert_eq!(colon.op, BinAritOp::Colon);
    assert_eq!(word_val(&colon.x), "b");
    assert_eq!(word_val(&colon.y), "c");
}

#[test]
fn prefix_and_postfix() {
    let ArithmExpr::Unary(u) = arithm("echo $((++x))") else {
        panic!("want unary");
    };
    assert_eq!(u.op, UnAritOp::Inc);
    assert!(!u.post);

    let ArithmExpr::Unary(u) = arithm("echo $((x--))") else {
        panic!("want unary");
    };
    assert_eq!(u.op, UnAritOp::Dec);
    assert!(u.post);
}

#[test]
fn parens_group() {
    let ArithmExpr::Binary(mul) = arithm("echo $(((1+2)*3))") else {
        panic!("want binary");
    };
    assert_eq!(mul.op, BinAritOp::Mul);
    assert!(matches!(&mul.x, ArithmExpr::Paren(_)));
}

#[test]
fn shifts_and_comparisons() {
    let ArithmExpr::Binary(b) = arithm("echo $((a << 2))") else {
        panic!("want binary");
    };
    assert_eq!(b.op, BinAritOp::Shl);
    let ArithmExpr::Binary(b) = arithm("echo $((a <= b))") else {
        panic!("want binary");
    };
    assert_eq!(b.op, BinAritOp::Leq);
    let ArithmExpr::Binary(b) = arithm("echo $((a ** b))") else {
        panic!("want binary");
    };
    assert_eq!(b.op, BinAritOp::Pow);
}

#[test]
fn compound_assignment() {
    let ArithmExpr::Binary(b) = arithm("echo $((a += 1))") else {
        panic!("want binary");
    };
    assert_eq!(b.op, BinAritOp::AddAssgn);
}

#[test]
fn comma_is_loosest() {
    let ArithmExpr::Binary(b) = arithm("echo $((a = 1, b = 2))") else {
        panic!("want binary");
    };
    assert_eq!(b.op, BinAritOp::Comma);
}

#[test]
fn words_can_hold_expansions() {
    let ArithmExpr::Binary(b) = arithm("echo $(($x + ${y}))") else {
        panic!("want binary");
    };
    assert!(matches!(&b.x, ArithmExpr::Word(w)
        if matches!(&w.parts[0], WordPart::ParamExp(_))));
}

#[test]
fn empty_arithmetic_is_allowed() {
    let s = single_stmt("echo $(( ))");
    let call = get_call(&s);
    let WordPart::ArithmExp(a) = &call.args[1].parts[0] else {
        panic!("want arithmetic expansion");
    };
    assert!(a.x.is_none());
}
