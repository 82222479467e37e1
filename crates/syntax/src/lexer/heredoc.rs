// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heredoc body scanning.
//!
//! Heredoc redirects queue up while their line is parsed; the first newline
//! at the current nesting level drains the queue in order. A body never
//! fails at EOF: a missing stop word takes the rest of the input.

use crate::ast::{Lit, Word, WordPart};
use crate::parser::{PResult, Parser};
use crate::pos::Pos;
use crate::token::{LexMode, Token};

impl Parser<'_> {
    /// Drain the heredocs queued at the current nesting level, scanning one
    /// body per pending redirect.
    pub(crate) fn do_heredocs(&mut self) -> PResult<()> {
        let old_quote = self.quote;
        let pending = self.heredocs.split_off(self.buried_hdocs);
        for (i, h) in pending.into_iter().enumerate() {
            self.quote = if h.tabs { LexMode::HdocBodyTabs } else { LexMode::HdocBody };
            let (stop, quoted) = unquoted_word_bytes(self.src, &h.word);
            if i > 0 && self.npos < self.src.len() && self.src[self.npos] == b'\n' {
                self.npos += 1;
                self.lines.push(self.npos);
            }
            let body = if quoted {
                self.hdoc_lit_word(&stop)
            } else {
                self.hdoc_stop = Some(stop);
                self.next()?;
                let w = self.get_word_or_empty()?;
                self.hdoc_stop = None;
                w
            };
            self.hdoc_bodies.push((h.seq, body));
        }
        self.quote = old_quote;
        Ok(())
    }

    #[inline]
    fn at_line_start(&self) -> bool {
        self.npos == 0 || self.src[self.npos - 1] == b'\n'
    }

    /// Match the stop word at the current line start, tab-stripped for the
    /// `<<-` variant. Returns the cursor position just past it.
    fn stop_line_end(&self, stop: &[u8], tabs: bool) -> Option<usize> {
        let mut i = self.npos;
        if tabs {
            while i < self.src.len() && self.src[i] == b'\t' {
                i += 1;
            }
        }
        let end = i + stop.len();
        if self.src[i..].starts_with(stop)
            && (end == self.src.len() || self.src[end] == b'\n')
        {
            Some(end)
        } else {
            None
        }
    }

    /// Body scanning for an unquoted stop word: literal bytes until an
    /// expansion or the terminator line.
    pub(super) fn advance_lit_hdoc(&mut self) {
        let tabs = self.quote == LexMode::HdocBodyTabs;
        let stop = self.hdoc_stop.clone().unwrap_or_default();
        let mut bytes = Vec::new();
        loop {
            if self.at_line_start() {
                if let Some(end) = self.stop_line_end(&stop, tabs) {
                    self.npos = end;
                    self.hdoc_stop = None;
                    self.val = String::from_utf8_lossy(&bytes).into_owned();
                    self.tok = Token::Lit;
                    return;
                }
            }
            if self.npos >= self.src.len() {
                self.hdoc_stop = None;
                self.val = String::from_utf8_lossy(&bytes).into_owned();
                self.tok = Token::LitWord;
                return;
            }
            let b = self.src[self.npos];
            match b {
                b'`' | b'$' => {
                    self.val = String::from_utf8_lossy(&bytes).into_owned();
                    self.tok = Token::Lit;
                    return;
                }
                b'\\' => {
                    bytes.push(b'\\');
                    self.npos += 1;
                    if self.npos < self.src.len() {
                        let b2 = self.src[self.npos];
                        bytes.push(b2);
                        self.npos += 1;
                        if b2 == b'\n' {
                            self.lines.push(self.npos);
                        }
                    }
                }
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

    /// Body scanning for a quoted stop word: everything is verbatim, as a
    /// single literal.
    pub(super) fn hdoc_lit_word(&mut self, stop: &[u8]) -> Word {
        let tabs = self.quote == LexMode::HdocBodyTabs;
        let pos = Pos::from_offset(self.npos);
        let mut bytes = Vec::new();
        loop {
            if self.at_line_start() {
                if let Some(end) = self.stop_line_end(stop, tabs) {
                    let value_end = Pos::from_offset(self.npos);
                    self.npos = end;
                    return lit_body(pos, value_end, bytes);
                }
            }
            if self.npos >= self.src.len() {
                let value_end = Pos::from_offset(self.npos);
                return lit_body(pos, value_end, bytes);
            }
            let b = self.src[self.npos];
            bytes.push(b);
            self.npos += 1;
            if b == b'\n' {
                self.lines.push(self.npos);
            }
        }
    }
}

fn lit_body(value_pos: Pos, value_end: Pos, bytes: Vec<u8>) -> Word {
    let value = String::from_utf8_lossy(&bytes).into_owned();
    Word { parts: vec![WordPart::Lit(Lit { value_pos, value_end, value })] }
}

/// The stop word's unquoted bytes, and whether any part was quoted; a
/// quoted stop word disables expansion in the body.
fn unquoted_word_bytes(src: &[u8], w: &Word) -> (Vec<u8>, bool) {
    let mut bytes = Vec::new();
    let mut quoted = false;
    for part in &w.parts {
        if unquoted_part(src, part, &mut bytes) {
            quoted = true;
        }
    }
    (bytes, quoted)
}

fn unquoted_part(src: &[u8], part: &WordPart, out: &mut Vec<u8>) -> bool {
    match part {
        WordPart::Lit(l) => {
            if let Some(rest) = l.value.strip_prefix('\\') {
                out.extend_from_slice(rest.as_bytes());
                true
            } else {
                out.extend_from_slice(l.value.as_bytes());
                false
            }
        }
        WordPart::SglQuoted(s) => {
            out.extend_from_slice(s.value.as_bytes());
            true
        }
        WordPart::DblQuoted(d) => {
            for p in &d.parts {
                unquoted_part(src, p, out);
            }
            true
        }
        other => {
            out.extend_from_slice(&src[other.pos().offset()..other.end().offset()]);
            false
        }
    }
}
