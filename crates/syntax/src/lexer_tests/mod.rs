// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod quoting;
mod tokens;
mod words;

use crate::parser::Parser;
use crate::token::Token;
use crate::ParseMode;

/// Drive the scanner over `src` in the default (extended) dialect,
/// collecting every token with its literal value.
fn toks(src: &str) -> Vec<(Token, String)> {
    toks_mode(src, ParseMode::DEFAULT)
}

fn toks_posix(src: &str) -> Vec<(Token, String)> {
    toks_mode(src, ParseMode::POSIX_CONFORMANT)
}

fn toks_mode(src: &str, mode: ParseMode) -> Vec<(Token, String)> {
    let mut p = Parser::new(src.as_bytes(), "", mode);
    let mut out = Vec::new();
    for _ in 0..10_000 {
        p.next().expect("scanning must not fail");
        if p.tok == Token::Eof {
            return out;
        }
        out.push((p.tok, p.val.clone()));
    }
    panic!("scanner did not reach EOF for {:?}", src);
}

fn kinds(src: &str) -> Vec<Token> {
    toks(src).into_iter().map(|(t, _)| t).collect()
}
