// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator scanning in the regular modes.

use super::{kinds, toks, toks_posix};
use crate::token::Token;

macro_rules! kind_tests {
    ($($name:ident: $input:expr => [$($tok:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                assert_eq!(kinds($input), vec![$($tok),*], "input: {:?}", $input);
            }
        )*
    };
}

kind_tests! {
    separators: "a;b&c" => [
        Token::LitWord, Token::Semicolon, Token::LitWord, Token::And, Token::LitWord,
    ],
    logic_ops: "a && b || c" => [
        Token::LitWord, Token::AndAnd, Token::LitWord, Token::OrOr, Token::LitWord,
    ],
    pipes: "a | b |& c" => [
        Token::LitWord, Token::Or, Token::LitWord, Token::PipeAll, Token::LitWord,
    ],
    case_terminators: ";; ;& ;;&" => [
        Token::DblSemicolon, Token::SemiFall, Token::DblSemiFall,
    ],
    redirects: "> >> < <& >& >| <> << <<- <<< &> &>>" => [
        Token::RdrOut, Token::AppOut, Token::RdrIn, Token::DplIn, Token::DplOut,
        Token::ClbOut, Token::RdrInOut, Token::Hdoc, Token::DashHdoc, Token::WordHdoc,
        Token::RdrAll, Token::AppAll,
    ],
    proc_subst: "<(a) >(b)" => [
        Token::CmdIn, Token::LitWord, Token::RightParen,
        Token::CmdOut, Token::LitWord, Token::RightParen,
    ],
    dollar_forms: "$ ${ $( $(( $[ $' $\"" => [
        Token::Dollar, Token::DollBrace, Token::DollParen, Token::DollDblParen,
        Token::DollBrack, Token::DollSglQuote, Token::DollDblQuote,
    ],
    parens: "( (( )" => [Token::LeftParen, Token::DblLeftParen, Token::RightParen],
    ext_globs: "?(a) !(b)" => [
        Token::GlobQuest, Token::LitWord, Token::RightParen,
        Token::GlobExcl, Token::LitWord, Token::RightParen,
    ],
}

#[test]
fn posix_drops_extended_operators() {
    // |&, ;& and &> split apart in the strict dialect
    let posix: Vec<Token> = toks_posix("a |& b").into_iter().map(|(t, _)| t).collect();
    assert_eq!(posix, vec![Token::LitWord, Token::Or, Token::And, Token::LitWord]);
    let posix: Vec<Token> = toks_posix(";&").into_iter().map(|(t, _)| t).collect();
    assert_eq!(posix, vec![Token::Semicolon, Token::And]);
    let posix: Vec<Token> = toks_posix("&>x").into_iter().map(|(t, _)| t).collect();
    assert_eq!(posix, vec![Token::And, Token::RdrOut, Token::LitWord]);
}

#[test]
fn double_semi_fall_needs_bash() {
    let posix: Vec<Token> = toks_posix(";;&").into_iter().map(|(t, _)| t).collect();
    assert_eq!(posix, vec![Token::DblSemicolon, Token::And]);
}

#[test]
fn comments_are_skipped_without_flag() {
    let ts = toks("foo # rest of line\nbar");
    let words: Vec<&str> = ts.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(words, vec!["foo", "bar"]);
}

#[test]
fn hash_inside_word_is_literal() {
    let ts = toks("foo#bar");
    assert_eq!(ts, vec![(Token::LitWord, "foo#bar".to_string())]);
}

#[test]
fn escaped_newline_joins_literals() {
    let ts = toks("ab\\\ncd");
    assert_eq!(ts, vec![(Token::LitWord, "abcd".to_string())]);
}

#[test]
fn escapes_are_kept_verbatim() {
    let ts = toks("a\\ b");
    assert_eq!(ts, vec![(Token::LitWord, "a\\ b".to_string())]);
}
