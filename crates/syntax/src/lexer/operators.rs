// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator scanning, one table per family of modes.

use crate::parser::Parser;
use crate::token::{LexMode, Token};

impl Parser<'_> {
    fn set(&mut self, len: usize, tok: Token) {
        self.npos += len;
        self.tok = tok;
    }

    /// Operators of the regular modes (top level, `$(...)`, backquotes,
    /// heredoc stop words, case bodies).
    pub(super) fn reg_token(&mut self, b: u8) {
        let b2 = self.byte_at(self.npos + 1);
        match b {
            b';' => match b2 {
                Some(b';') => {
                    if self.bash() && self.byte_at(self.npos + 2) == Some(b'&') {
                        self.set(3, Token::DblSemiFall)
                    } else {
                        self.set(2, Token::DblSemicolon)
                    }
                }
                Some(b'&') if self.bash() => self.set(2, Token::SemiFall),
                _ => self.set(1, Token::Semicolon),
            },
            b'"' => self.set(1, Token::DblQuote),
            b'\'' => self.set(1, Token::SglQuote),
            b'`' => self.set(1, Token::BckQuote),
            b'(' => {
                if self.bash() && b2 == Some(b'(') {
                    self.set(2, Token::DblLeftParen)
                } else {
                    self.set(1, Token::LeftParen)
                }
            }
            b')' => self.set(1, Token::RightParen),
            b'$' => self.dollar_token(),
            b'|' => match b2 {
                Some(b'|') => self.set(2, Token::OrOr),
                Some(b'&') if self.bash() => self.set(2, Token::PipeAll),
                _ => self.set(1, Token::Or),
            },
            b'&' => match b2 {
                Some(b'&') => self.set(2, Token::AndAnd),
                Some(b'>') if self.bash() => {
                    if self.byte_at(self.npos + 2) == Some(b'>') {
                        self.set(3, Token::AppAll)
                    } else {
                        self.set(2, Token::RdrAll)
                    }
                }
                _ => self.set(1, Token::And),
            },
            b'>' => match b2 {
                Some(b'>') => self.set(2, Token::AppOut),
                Some(b'&') => self.set(2, Token::DplOut),
                Some(b'|') => self.set(2, Token::ClbOut),
                Some(b'(') if self.bash() => self.set(2, Token::CmdOut),
                _ => self.set(1, Token::RdrOut),
            },
            b'<' => match b2 {
                Some(b'<') => match self.byte_at(self.npos + 2) {
                    Some(b'-') => self.set(3, Token::DashHdoc),
                    Some(b'<') if self.bash() => self.set(3, Token::WordHdoc),
                    _ => self.set(2, Token::Hdoc),
                },
                Some(b'&') => self.set(2, Token::DplIn),
                Some(b'>') => self.set(2, Token::RdrInOut),
                Some(b'(') if self.bash() => self.set(2, Token::CmdIn),
                _ => self.set(1, Token::RdrIn),
            },
            _ => unreachable!("reg_token dispatched on a non-operator byte"),
        }
    }

    fn dollar_token(&mut self) {
        match self.byte_at(self.npos + 1) {
            Some(b'\'') if self.bash() => self.set(2, Token::DollSglQuote),
            Some(b'"') if self.bash() => self.set(2, Token::DollDblQuote),
            Some(b'{') => self.set(2, Token::DollBrace),
            Some(b'[') if self.bash() => self.set(2, Token::DollBrack),
            Some(b'(') => {
                if self.byte_at(self.npos + 2) == Some(b'(') {
                    self.set(3, Token::DollDblParen)
                } else {
                    self.set(2, Token::DollParen)
                }
            }
            _ => self.set(1, Token::Dollar),
        }
    }

    /// `$`-form and quote tokens valid inside double quotes, heredoc bodies
    /// and parameter-expansion words.
    pub(super) fn dq_token(&mut self, b: u8) {
        match b {
            b'"' => self.set(1, Token::DblQuote),
            b'`' => self.set(1, Token::BckQuote),
            _ => match self.byte_at(self.npos + 1) {
                Some(b'{') => self.set(2, Token::DollBrace),
                Some(b'(') => {
                    if self.byte_at(self.npos + 2) == Some(b'(') {
                        self.set(3, Token::DollDblParen)
                    } else {
                        self.set(2, Token::DollParen)
                    }
                }
                _ => self.set(1, Token::Dollar),
            },
        }
    }

    /// Operators of the `${...}` name section.
    pub(super) fn param_token(&mut self, b: u8) {
        let b2 = self.byte_at(self.npos + 1);
        match b {
            b'}' => self.set(1, Token::RightBrace),
            b':' => match b2 {
                Some(b'+') => self.set(2, Token::ColPlus),
                Some(b'-') => self.set(2, Token::ColMinus),
                Some(b'?') => self.set(2, Token::ColQuest),
                Some(b'=') => self.set(2, Token::ColAssgn),
                _ => self.set(1, Token::Colon),
            },
            b'+' => self.set(1, Token::Plus),
            b'-' => self.set(1, Token::Minus),
            b'?' => self.set(1, Token::Quest),
            b'=' => self.set(1, Token::Assgn),
            b'%' => {
                if b2 == Some(b'%') {
                    self.set(2, Token::DblPerc)
                } else {
                    self.set(1, Token::Perc)
                }
            }
            b'#' => {
                if b2 == Some(b'#') {
                    self.set(2, Token::DblHash)
                } else {
                    self.set(1, Token::Hash)
                }
            }
            b'^' => {
                if b2 == Some(b'^') {
                    self.set(2, Token::DblCaret)
                } else {
                    self.set(1, Token::Caret)
                }
            }
            b',' => {
                if b2 == Some(b',') {
                    self.set(2, Token::DblComma)
                } else {
                    self.set(1, Token::Comma)
                }
            }
            b'/' => {
                if b2 == Some(b'/') {
                    self.set(2, Token::DblSlash)
                } else {
                    self.set(1, Token::Slash)
                }
            }
            b'[' => self.set(1, Token::LeftBrack),
            b'$' => self.set(1, Token::Dollar),
            b'`' => self.set(1, Token::BckQuote),
            b'"' => self.set(1, Token::DblQuote),
            b'\'' => self.set(1, Token::SglQuote),
            _ => self.advance_lit_other(LexMode::ParamExpName),
        }
    }

    /// Operators of the arithmetic modes, including `${...}` index, offset
    /// and length sub-expressions.
    pub(super) fn arithm_token(&mut self, b: u8) {
        let b2 = self.byte_at(self.npos + 1);
        match b {
            b'!' => {
                if b2 == Some(b'=') {
                    self.set(2, Token::Neq)
                } else {
                    self.set(1, Token::ExclMark)
                }
            }
            b'=' => {
                if b2 == Some(b'=') {
                    self.set(2, Token::Eql)
                } else {
                    self.set(1, Token::Assgn)
                }
            }
            b'(' => self.set(1, Token::LeftParen),
            b')' => self.set(1, Token::RightParen),
            b';' => {
                if b2 == Some(b';') {
                    self.set(2, Token::DblSemicolon)
                } else {
                    self.set(1, Token::Semicolon)
                }
            }
            b'&' => match b2 {
                Some(b'&') => self.set(2, Token::AndAnd),
                Some(b'=') => self.set(2, Token::AndAssgn),
                _ => self.set(1, Token::And),
            },
            b'|' => match b2 {
                Some(b'|') => self.set(2, Token::OrOr),
                Some(b'=') => self.set(2, Token::OrAssgn),
                _ => self.set(1, Token::Or),
            },
            b'<' => match b2 {
                Some(b'<') => {
                    if self.byte_at(self.npos + 2) == Some(b'=') {
                        self.set(3, Token::ShlAssgn)
                    } else {
                        self.set(2, Token::Hdoc)
                    }
                }
                Some(b'=') => self.set(2, Token::Leq),
                _ => self.set(1, Token::RdrIn),
            },
            b'>' => match b2 {
                Some(b'>') => {
                    if self.byte_at(self.npos + 2) == Some(b'=') {
                        self.set(3, Token::ShrAssgn)
                    } else {
                        self.set(2, Token::AppOut)
                    }
                }
                Some(b'=') => self.set(2, Token::Geq),
                _ => self.set(1, Token::RdrOut),
            },
            b'+' => match b2 {
                Some(b'+') => self.set(2, Token::AddAdd),
                Some(b'=') => self.set(2, Token::AddAssgn),
                _ => self.set(1, Token::Plus),
            },
            b'-' => match b2 {
                Some(b'-') => self.set(2, Token::SubSub),
                Some(b'=') => self.set(2, Token::SubAssgn),
                _ => self.set(1, Token::Minus),
            },
            b'%' => {
                if b2 == Some(b'=') {
                    self.set(2, Token::RemAssgn)
                } else {
                    self.set(1, Token::Perc)
                }
            }
            b'*' => match b2 {
                Some(b'*') => self.set(2, Token::DblStar),
                Some(b'=') => self.set(2, Token::MulAssgn),
                _ => self.set(1, Token::Star),
            },
            b'/' => {
                if b2 == Some(b'=') {
                    self.set(2, Token::QuoAssgn)
                } else {
                    self.set(1, Token::Slash)
                }
            }
            b'^' => {
                if b2 == Some(b'=') {
                    self.set(2, Token::XorAssgn)
                } else {
                    self.set(1, Token::Caret)
                }
            }
            b',' => self.set(1, Token::Comma),
            b'?' => self.set(1, Token::Quest),
            b':' => self.set(1, Token::Colon),
            b'}' => self.set(1, Token::RightBrace),
            b']' if self.quote.closes_brack() => self.set(1, Token::RightBrack),
            b'$' | b'`' => self.dq_token(b),
            b'"' => self.set(1, Token::DblQuote),
            b'\'' => self.set(1, Token::SglQuote),
            _ => self.advance_lit_other(self.quote),
        }
    }
}
