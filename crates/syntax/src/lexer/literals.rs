// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Literal scanning.
//!
//! Each function consumes bytes into `val` until a byte that is special in
//! the given mode. Escaped pairs are kept verbatim, except that a
//! backslash-newline outside quotes is a line continuation and is elided.

use crate::parser::Parser;
use crate::token::{word_break, LexMode, Token};

impl Parser<'_> {
    fn finish(&mut self, bytes: Vec<u8>, tok: Token) {
        self.val = String::from_utf8_lossy(&bytes).into_owned();
        self.tok = tok;
    }

    /// Literals of the regular modes. Records the position of a `=` or `+=`
    /// so an assignment prefix can be split without rescanning.
    pub(super) fn advance_lit_none(&mut self) {
        let mut bytes = Vec::new();
        loop {
            if self.npos >= self.src.len() {
                return self.finish(bytes, Token::LitWord);
            }
            let b = self.src[self.npos];
            match b {
                b'\\' => {
                    if self.npos + 1 >= self.src.len() {
                        bytes.push(b'\\');
                        self.npos += 1;
                        continue;
                    }
                    let b2 = self.src[self.npos + 1];
                    if b2 == b'\n' {
                        self.npos += 2;
                        self.lines.push(self.npos);
                    } else {
                        bytes.push(b'\\');
                        bytes.push(b2);
                        self.npos += 2;
                    }
                }
                b'`' | b'$' | b'\'' | b'"' => return self.finish(bytes, Token::Lit),
                b'?' | b'*' | b'+' | b'@' | b'!'
                    if self.bash() && self.byte_at(self.npos + 1) == Some(b'(') =>
                {
                    return self.finish(bytes, Token::Lit);
                }
                b'=' => {
                    if self.as_pos == 0 && !bytes.is_empty() {
                        self.as_pos = bytes.len();
                        if bytes.ends_with(b"+") {
                            self.as_pos -= 1;
                        }
                    }
                    bytes.push(b'=');
                    self.npos += 1;
                }
                _ if word_break(b) => return self.finish(bytes, Token::LitWord),
                _ => {
                    bytes.push(b);
                    self.npos += 1;
                }
            }
        }
    }

    /// Literals inside double quotes; `\` pairs stay verbatim, including a
    /// quoted backslash-newline, which changes the content.
    pub(super) fn advance_lit_dquote(&mut self) {
        let mut bytes = Vec::new();
        loop {
            if self.npos >= self.src.len() {
                return self.finish(bytes, Token::LitWord);
            }
            let b = self.src[self.npos];
            match b {
                b'\\' => {
                    bytes.push(b'\\');
                    self.npos += 1;
                    if self.npos >= self.src.len() {
                        continue;
                    }
                    let b2 = self.src[self.npos];
                    bytes.push(b2);
                    self.npos += 1;
                    if b2 == b'\n' {
                        self.lines.push(self.npos);
                    }
                }
                b'"' => return self.finish(bytes, Token::LitWord),
                b'`' | b'$' => return self.finish(bytes, Token::Lit),
                b'\n' => {
                    bytes.push(b'\n');
                    self.npos += 1;
                    self.lines.push(self.npos);
                }
                _ => {
                    bytes.push(b);
                    self.npos += 1;
                }
            }
        }
    }

    /// Literals of the quoted and parameter-expansion modes.
    pub(super) fn advance_lit_other(&mut self, q: LexMode) {
        let mut bytes = Vec::new();
        loop {
            if self.npos >= self.src.len() {
                return self.finish(bytes, Token::LitWord);
            }
            let b = self.src[self.npos];
            if b == b'\\' {
                self.npos += 1;
                if self.npos >= self.src.len() {
                    bytes.push(b'\\');
                    continue;
                }
                let b2 = self.src[self.npos];
                self.npos += 1;
                if b2 == b'\n' {
                    self.lines.push(self.npos);
                }
                bytes.push(b'\\');
                bytes.push(b2);
                continue;
            }
            if q == LexMode::SglQuotes {
                match b {
                    b'\'' => return self.finish(bytes, Token::LitWord),
                    b'\n' => {
                        bytes.push(b'\n');
                        self.npos += 1;
                        self.lines.push(self.npos);
                    }
                    _ => {
                        bytes.push(b);
                        self.npos += 1;
                    }
                }
                continue;
            }
            if b == b'`' || b == b'$' {
                return self.finish(bytes, Token::Lit);
            }
            let stop = match q {
                // a parameter name runs until an operator or whitespace;
                // quotes and parens are (invalid) name bytes, left for the
                // closing-brace check to report
                LexMode::ParamExpName => matches!(
                    b,
                    b'}' | b':'
                        | b'+'
                        | b'-'
                        | b'?'
                        | b'='
                        | b'%'
                        | b'#'
                        | b'^'
                        | b','
                        | b'/'
                        | b'['
                        | b' '
                        | b'\t'
                        | b'\n'
                ),
                LexMode::ParamExpRepl => matches!(b, b'/' | b'}' | b'"'),
                LexMode::ParamExpExp => matches!(b, b'}' | b'"'),
                _ => {
                    // arithmetic modes
                    word_break(b)
                        || matches!(
                            b,
                            b'+' | b'-'
                                | b'*'
                                | b'/'
                                | b'%'
                                | b'^'
                                | b'='
                                | b'!'
                                | b'?'
                                | b':'
                                | b','
                                | b'}'
                                | b'\''
                                | b'"'
                        )
                        || (b == b']' && q.closes_brack())
                }
            };
            if stop {
                return self.finish(bytes, Token::Lit);
            }
            bytes.push(b);
            self.npos += 1;
            if b == b'\n' {
                self.lines.push(self.npos);
            }
        }
    }

    /// One whole regular-expression word after `=~`; parentheses nest, and
    /// whitespace only ends it at depth zero.
    pub(super) fn advance_lit_re(&mut self) {
        let mut bytes = Vec::new();
        let mut lparens = 0i32;
        loop {
            if self.npos >= self.src.len() {
                return self.finish(bytes, Token::LitWord);
            }
            let b = self.src[self.npos];
            match b {
                b'(' => lparens += 1,
                b')' => lparens -= 1,
                b' ' | b'\t' | b'\n' if lparens <= 0 => {
                    return self.finish(bytes, Token::LitWord)
                }
                _ => {}
            }
            bytes.push(b);
            self.npos += 1;
        }
    }

    /// The name of a short `$name` expansion: a single digit, or an
    /// identifier run. The caller has already checked the first byte.
    pub(crate) fn advance_param_name(&mut self) {
        let start = self.npos;
        if self.src[self.npos].is_ascii_digit() {
            self.npos += 1;
        } else {
            while self.npos < self.src.len()
                && (self.src[self.npos].is_ascii_alphanumeric() || self.src[self.npos] == b'_')
            {
                self.npos += 1;
            }
        }
        let bytes = self.src[start..self.npos].to_vec();
        self.finish(bytes, Token::Lit);
    }
}
