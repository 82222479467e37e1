// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Literal scanning: word boundaries and assignment prefix detection.

use super::{toks, toks_mode};
use crate::parser::Parser;
use crate::token::Token;
use crate::ParseMode;

#[test]
fn words_split_on_breaks() {
    let ts = toks("foo bar\tbaz");
    let words: Vec<&str> = ts.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(words, vec!["foo", "bar", "baz"]);
    assert!(ts.iter().all(|(t, _)| *t == Token::LitWord));
}

#[test]
fn braces_and_brackets_stay_literal() {
    let ts = toks("{foo} a[0] x}y");
    let words: Vec<&str> = ts.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(words, vec!["{foo}", "a[0]", "x}y"]);
}

#[test]
fn lit_stops_before_expansions() {
    let ts = toks("pre$var");
    assert_eq!(ts[0], (Token::Lit, "pre".to_string()));
    assert_eq!(ts[1].0, Token::Dollar);
}

#[test]
fn lit_stops_before_quotes() {
    let ts = toks("pre'q'");
    assert_eq!(ts[0], (Token::Lit, "pre".to_string()));
    assert_eq!(ts[1].0, Token::SglQuote);
}

fn as_pos_of(src: &str) -> usize {
    let mut p = Parser::new(src.as_bytes(), "", ParseMode::DEFAULT);
    p.next().expect("scan");
    p.as_pos
}

#[test]
fn assignment_equals_is_recorded() {
    assert_eq!(as_pos_of("a=b"), 1);
    assert_eq!(as_pos_of("abc=1"), 3);
    assert_eq!(as_pos_of("a+=b"), 1);
    assert_eq!(as_pos_of("plain"), 0);
    // a leading = can never start an assignment
    assert_eq!(as_pos_of("=x"), 0);
}

#[test]
fn assignment_split_survives_continuation() {
    // the elided backslash-newline must not shift the recorded index
    let mut p = Parser::new(b"a\\\n=b", "", ParseMode::DEFAULT);
    p.next().expect("scan");
    assert_eq!(p.val, "a=b");
    assert_eq!(p.as_pos, 1);
}

#[test]
fn glob_openers_split_words_only_in_bash() {
    let ts = toks("foo@(x)");
    assert_eq!(ts[0], (Token::Lit, "foo".to_string()));
    assert_eq!(ts[1].0, Token::GlobAt);
    let ts = toks_mode("foo@(x)", ParseMode::POSIX_CONFORMANT);
    assert_eq!(ts[0], (Token::LitWord, "foo@".to_string()));
}
