// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic expressions: precedence climbing plus the bounded lookahead
//! that tells `((arith))` apart from `( (subshells) )`.

use crate::ast::{
    ArithmCmd, ArithmExp, ArithmExpr, BinaryArithm, Command, ParenArithm, UnaryArithm, WordPart,
};
use crate::parser::{PResult, Parser, SaveState};
use crate::pos::Pos;
use crate::token::{BinAritOp, LexMode, Token, UnAritOp};

/// Precedence levels, 0 (comma, loosest) through 11 (`**`, tightest).
fn arithm_op_level(op: BinAritOp) -> i32 {
    match op {
        BinAritOp::Comma => 0,
        BinAritOp::AddAssgn
        | BinAritOp::SubAssgn
        | BinAritOp::MulAssgn
        | BinAritOp::QuoAssgn
        | BinAritOp::RemAssgn
        | BinAritOp::AndAssgn
        | BinAritOp::OrAssgn
        | BinAritOp::XorAssgn
        | BinAritOp::ShlAssgn
        | BinAritOp::ShrAssgn => 1,
        BinAritOp::Assgn => 2,
        BinAritOp::Quest | BinAritOp::Colon => 3,
        BinAritOp::AndArit | BinAritOp::OrArit => 4,
        BinAritOp::And | BinAritOp::Or | BinAritOp::Xor => 5,
        BinAritOp::Eql | BinAritOp::Neq => 6,
        BinAritOp::Lss | BinAritOp::Gtr | BinAritOp::Leq | BinAritOp::Geq => 7,
        BinAritOp::Shl | BinAritOp::Shr => 8,
        BinAritOp::Add | BinAritOp::Sub => 9,
        BinAritOp::Mul | BinAritOp::Quo | BinAritOp::Rem => 10,
        BinAritOp::Pow => 11,
    }
}

impl Parser<'_> {
    /// Parse at the given precedence level. `compact` forbids spaces within
    /// an expression (the `let` rule); `tern` allows `:` as the pending
    /// second half of a `?`.
    pub(crate) fn arithm_expr(
        &mut self,
        level: i32,
        compact: bool,
        tern: bool,
    ) -> PResult<Option<ArithmExpr>> {
        if self.tok == Token::Eof || self.peek_arithm_end() {
            return Ok(None);
        }
        let left = if level > 11 {
            self.arithm_expr_base(compact)?
        } else {
            self.arithm_expr(level + 1, compact, false)?
        };
        if compact && self.spaced {
            return Ok(left);
        }
        let mut new_level = match BinAritOp::from_token(self.tok) {
            Some(op) => arithm_op_level(op),
            None => -1,
        };
        if !tern && self.tok == Token::Colon && self.quote.is_param_arith() {
            new_level = -1;
        }
        if new_level < 0 {
            match self.tok {
                Token::Lit | Token::LitWord => {
                    return Err(
                        self.cur_err(format!("not a valid arithmetic operator: {}", self.val))
                    );
                }
                Token::RightParen | Token::Eof => {}
                _ => {
                    if self.quote == LexMode::ArithmExpr {
                        return Err(self.cur_err(format!(
                            "not a valid arithmetic operator: {}",
                            self.tok
                        )));
                    }
                }
            }
        }
        if new_level < 0 || new_level < level {
            return Ok(left);
        }
        let Some(x) = left else {
            return Ok(None);
        };
        let Some(op) = BinAritOp::from_token(self.tok) else {
            return Ok(None);
        };
        let op_pos = self.pos;
        self.next()?;
        if compact && self.spaced {
            return Err(self.follow_err_exp(op_pos, &op.to_string()));
        }
        let y = self.arithm_expr(new_level, compact, op == BinAritOp::Quest)?;
        let Some(y) = y else {
            return Err(self.follow_err_exp(op_pos, &op.to_string()));
        };
        Ok(Some(ArithmExpr::Binary(Box::new(BinaryArithm { op, op_pos, x, y }))))
    }

    fn arithm_expr_base(&mut self, compact: bool) -> PResult<Option<ArithmExpr>> {
        let mut x: Option<ArithmExpr> = None;
        match self.tok {
            Token::AddAdd | Token::SubSub | Token::ExclMark => {
                let op = UnAritOp::from_token(self.tok).unwrap_or(UnAritOp::Not);
                let op_pos = self.pos;
                self.next()?;
                let inner = self.arithm_expr_base(compact)?;
                let Some(inner) = inner else {
                    return Err(self.follow_err_exp(op_pos, &op.to_string()));
                };
                return Ok(Some(ArithmExpr::Unary(Box::new(UnaryArithm {
                    op,
                    op_pos,
                    post: false,
                    x: inner,
                }))));
            }
            Token::LeftParen => {
                let lparen = self.pos;
                self.next()?;
                let inner = self.arithm_expr(0, false, false)?;
                let Some(inner) = inner else {
                    return Err(self.pos_err(lparen, "parentheses must enclose an expression".into()));
                };
                let rparen = self.matched(lparen, Token::LeftParen, Token::RightParen)?;
                x = Some(ArithmExpr::Paren(Box::new(ParenArithm { lparen, rparen, x: inner })));
            }
            Token::Plus | Token::Minus => {
                let op =
                    if self.tok == Token::Plus { UnAritOp::Plus } else { UnAritOp::Minus };
                let op_pos = self.pos;
                self.next()?;
                if compact && self.spaced {
                    return Err(self.follow_err_exp(op_pos, &op.to_string()));
                }
                let inner = self.arithm_expr(0, compact, false)?;
                let Some(inner) = inner else {
                    return Err(self.follow_err_exp(op_pos, &op.to_string()));
                };
                x = Some(ArithmExpr::Unary(Box::new(UnaryArithm {
                    op,
                    op_pos,
                    post: false,
                    x: inner,
                })));
            }
            Token::BckQuote if self.quote == LexMode::ArithmExprLet => return Ok(None),
            _ => {
                if let Some(w) = self.get_word()? {
                    x = Some(ArithmExpr::Word(w));
                }
            }
        }
        if compact && self.spaced {
            return Ok(x);
        }
        if self.tok == Token::AddAdd || self.tok == Token::SubSub {
            if let Some(inner) = x {
                let op =
                    if self.tok == Token::AddAdd { UnAritOp::Inc } else { UnAritOp::Dec };
                let op_pos = self.pos;
                self.next()?;
                return Ok(Some(ArithmExpr::Unary(Box::new(UnaryArithm {
                    op,
                    op_pos,
                    post: true,
                    x: inner,
                }))));
            }
        }
        Ok(x)
    }

    /// True when the current `)` is the first half of a closing `))`.
    pub(crate) fn peek_arithm_end(&self) -> bool {
        self.tok == Token::RightParen && self.byte_at(self.npos) == Some(b')')
    }

    pub(crate) fn arithm_end(&mut self, left: &str, lpos: Pos, old: SaveState) -> PResult<Pos> {
        if !self.peek_arithm_end() {
            return Err(self.matching_err(lpos, left, "))"));
        }
        self.npos += 1;
        self.post_nested(old);
        let pos = self.pos;
        self.next()?;
        Ok(pos)
    }

    /// Bounded lookahead: scan forward balancing parentheses and check for
    /// a `))` closer, rolling back the cursor, token and line table.
    fn could_be_arithm(&mut self) -> PResult<bool> {
        let old_tok = self.tok;
        let old_npos = self.npos;
        let old_lines = self.lines.len();
        self.next()?;
        let mut could = false;
        let mut lparens = 0i32;
        while self.tok != Token::Eof {
            match self.tok {
                Token::LeftParen | Token::DollParen => lparens += 1,
                Token::DollDblParen | Token::DblLeftParen => lparens += 2,
                Token::RightParen => {
                    if lparens == 0 {
                        could = self.peek_arithm_end();
                        break;
                    }
                    lparens -= 1;
                }
                _ => {}
            }
            self.next()?;
        }
        self.tok = old_tok;
        self.npos = old_npos;
        self.lines.truncate(old_lines);
        Ok(could)
    }

    /// `$((expr))` or `$[expr]` word part. A `$((` that does not close with
    /// `))` is reinterpreted as `$(` followed by `(`.
    pub(crate) fn arithm_exp_part(&mut self) -> PResult<Option<WordPart>> {
        let bracket = self.tok == Token::DollBrack;
        let left = self.pos;
        let old = self.pre_nested(LexMode::ArithmExpr);
        if bracket {
            self.quote = LexMode::ArithmExprBrack;
        } else if !self.could_be_arithm()? {
            self.post_nested(old);
            self.npos = left.offset() + 2;
            self.tok = Token::DollParen;
            self.pos = left;
            return match self.word_part() {
                Ok(wp) => Ok(wp),
                Err(_) => Err(self.matching_err_eof(left, "$((", "))")),
            };
        }
        self.next()?;
        let x = self.arithm_expr(0, false, false)?;
        let right;
        if bracket {
            if self.tok != Token::RightBrack {
                return Err(self.matching_err(left, "$[", "]"));
            }
            self.post_nested(old);
            right = self.pos;
            self.next()?;
        } else {
            right = self.arithm_end("$((", left, old)?;
        }
        Ok(Some(WordPart::ArithmExp(ArithmExp { left, right, bracket, x })))
    }

    /// `((expr))` command. Reinterpreted as nested subshells when it does
    /// not close with `))`.
    pub(crate) fn arithm_exp_cmd(&mut self) -> PResult<Command> {
        let left = self.pos;
        let old = self.pre_nested(LexMode::ArithmExprCmd);
        if !self.could_be_arithm()? {
            self.post_nested(old);
            self.npos = left.offset() + 1;
            self.tok = Token::LeftParen;
            self.pos = left;
            return match self.subshell() {
                Ok(s) => Ok(s),
                Err(_) => Err(self.matching_err_eof(left, "((", "))")),
            };
        }
        self.next()?;
        let x = self.arithm_expr(0, false, false)?;
        let right = self.arithm_end("((", left, old)?;
        Ok(Command::Arithm(ArithmCmd { left, right, x }))
    }
}
