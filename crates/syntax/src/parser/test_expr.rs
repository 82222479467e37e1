// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `[[ ... ]]` test clauses.

use crate::ast::{BinaryTest, Command, ParenTest, TestClause, TestExpr, UnaryTest};
use crate::parser::{PResult, Parser};
use crate::pos::Pos;
use crate::token::{BinTestOp, LexMode, Token, UnTestOp};

impl Parser<'_> {
    pub(crate) fn test_clause(&mut self) -> PResult<Command> {
        let left = self.pos;
        self.next()?;
        if self.tok == Token::Eof || self.got_rsrv("]]")? {
            return Err(self.pos_err(left, "test clause requires at least one expression".into()));
        }
        let x = self.test_expr("[[", left, 0)?;
        let right = self.pos;
        if !self.got_rsrv("]]")? {
            return Err(self.matching_err(left, "[[", "]]"));
        }
        let x = match x {
            Some(x) => x,
            None => {
                return Err(
                    self.pos_err(left, "test clause requires at least one expression".into())
                )
            }
        };
        Ok(Command::Test(Box::new(TestClause { left, right, x })))
    }

    fn test_expr(&mut self, fop: &str, fpos: Pos, level: i32) -> PResult<Option<TestExpr>> {
        let left = if level > 1 {
            self.test_expr_base(fop, fpos)?
        } else {
            self.test_expr(fop, fpos, level + 1)?
        };
        let Some(left) = left else {
            return Ok(None);
        };
        let new_level = match self.tok {
            Token::AndAnd | Token::OrOr => 0,
            Token::LitWord => {
                if self.val == "]]" {
                    return Ok(Some(left));
                }
                1
            }
            Token::RdrIn | Token::RdrOut => 1,
            Token::Eof | Token::RightParen => return Ok(Some(left)),
            tok => {
                return Err(self.cur_err(format!("not a valid test operator: {}", tok)));
            }
        };
        if new_level < level {
            return Ok(Some(left));
        }
        let op = if self.tok == Token::LitWord {
            match BinTestOp::from_word(&self.val) {
                Some(op) => op,
                None => {
                    return Err(self.cur_err(format!("not a valid test operator: {}", self.val)))
                }
            }
        } else {
            match BinTestOp::from_token(self.tok) {
                Some(op) => op,
                None => return Ok(Some(left)),
            }
        };
        let op_pos = self.pos;
        if op == BinTestOp::ReMatch {
            let old = self.pre_nested(LexMode::TestRegexp);
            self.next()?;
            self.post_nested(old);
        } else {
            self.next()?;
        }
        let y = self.test_expr(&op.to_string(), op_pos, new_level)?;
        let Some(y) = y else {
            return Err(self.follow_err_exp(op_pos, &op.to_string()));
        };
        Ok(Some(TestExpr::Binary(Box::new(BinaryTest { op, op_pos, x: left, y }))))
    }

    fn test_expr_base(&mut self, fop: &str, fpos: Pos) -> PResult<Option<TestExpr>> {
        match self.tok {
            Token::Eof => Ok(None),
            Token::RightParen => Ok(None),
            Token::LeftParen => {
                let lparen = self.pos;
                self.next()?;
                let x = self.test_expr("(", lparen, 0)?;
                let Some(x) = x else {
                    return Err(
                        self.pos_err(lparen, "parentheses must enclose an expression".into())
                    );
                };
                let rparen = self.matched(lparen, Token::LeftParen, Token::RightParen)?;
                Ok(Some(TestExpr::Paren(Box::new(ParenTest { lparen, rparen, x }))))
            }
            Token::LitWord => {
                match UnTestOp::from_word(&self.val) {
                    Some(op) => {
                        let op_pos = self.pos;
                        self.next()?;
                        let x = self.follow_word(&op.to_string(), op_pos)?;
                        Ok(Some(TestExpr::Unary(Box::new(UnaryTest {
                            op,
                            op_pos,
                            x: TestExpr::Word(x),
                        }))))
                    }
                    None if self.val == "!" => {
                        let op_pos = self.pos;
                        self.next()?;
                        let x = self.test_expr("!", op_pos, 0)?;
                        let Some(x) = x else {
                            return Err(self.follow_err_exp(op_pos, "!"));
                        };
                        Ok(Some(TestExpr::Unary(Box::new(UnaryTest {
                            op: UnTestOp::Not,
                            op_pos,
                            x,
                        }))))
                    }
                    None => Ok(self.follow_word(fop, fpos).map(TestExpr::Word).map(Some)?),
                }
            }
            _ => Ok(self.follow_word(fop, fpos).map(TestExpr::Word).map(Some)?),
        }
    }
}
