// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compound commands and simple-command argument gathering.

use crate::ast::{
    Assign, Block, CallExpr, CaseClause, Command, CoprocClause, CStyleLoop, DeclClause, Elif,
    EvalClause, ForClause, FuncDecl, IfClause, LetClause, Lit, Loop, PatternList, Stmt, Subshell,
    UntilClause, WhileClause, Word, WordIter, WordPart,
};
use crate::parser::{is_bash_compound_start, lit_redir, PResult, Parser};
use crate::pos::Pos;
use crate::token::{CaseOp, LexMode, Token};

impl Parser<'_> {
    pub(crate) fn subshell(&mut self) -> PResult<Command> {
        let lparen = self.pos;
        let old = self.pre_nested(LexMode::SubCmd);
        self.next()?;
        let stmts = self.stmts(&[])?;
        self.post_nested(old);
        let rparen = self.matched(lparen, Token::LeftParen, Token::RightParen)?;
        Ok(Command::Subshell(Subshell { lparen, rparen, stmts }))
    }

    pub(crate) fn block(&mut self) -> PResult<Command> {
        let lbrace = self.pos;
        self.next()?;
        let stmts = self.stmts(&["}"])?;
        let rbrace = self.pos;
        if !self.got_rsrv("}")? {
            return Err(self.matching_err(lbrace, "{", "}"));
        }
        Ok(Command::Block(Block { lbrace, rbrace, stmts }))
    }

    pub(crate) fn if_clause(&mut self) -> PResult<Command> {
        let if_pos = self.pos;
        self.next()?;
        let cond_stmts = self.follow_stmts("if", if_pos, &["then"])?;
        let then_pos = self.follow_rsrv(if_pos, "if <cond>", "then")?;
        let then_stmts = self.follow_stmts("then", then_pos, &["fi", "elif", "else"])?;
        let mut elifs = Vec::new();
        let mut elif_pos = self.pos;
        while self.got_rsrv("elif")? {
            let cond_stmts = self.follow_stmts("elif", elif_pos, &["then"])?;
            let then_pos = self.follow_rsrv(elif_pos, "elif <cond>", "then")?;
            let then_stmts = self.follow_stmts("then", then_pos, &["fi", "elif", "else"])?;
            elifs.push(Elif { elif_pos, then_pos, cond_stmts, then_stmts });
            elif_pos = self.pos;
        }
        let mut else_pos = Pos::NONE;
        let mut else_stmts = Vec::new();
        let maybe_else = self.pos;
        if self.got_rsrv("else")? {
            else_pos = maybe_else;
            else_stmts = self.follow_stmts("else", else_pos, &["fi"])?;
        }
        let fi_pos = self.stmt_end(if_pos, "if", "fi")?;
        Ok(Command::If(Box::new(IfClause {
            if_pos,
            then_pos,
            else_pos,
            fi_pos,
            cond_stmts,
            then_stmts,
            elifs,
            else_stmts,
        })))
    }

    pub(crate) fn while_clause(&mut self) -> PResult<Command> {
        let while_pos = self.pos;
        self.next()?;
        let cond_stmts = self.follow_stmts("while", while_pos, &["do"])?;
        let do_pos = self.follow_rsrv(while_pos, "while <cond>", "do")?;
        let do_stmts = self.follow_stmts("do", do_pos, &["done"])?;
        let done_pos = self.stmt_end(while_pos, "while", "done")?;
        Ok(Command::While(WhileClause { while_pos, do_pos, done_pos, cond_stmts, do_stmts }))
    }

    pub(crate) fn until_clause(&mut self) -> PResult<Command> {
        let until_pos = self.pos;
        self.next()?;
        let cond_stmts = self.follow_stmts("until", until_pos, &["do"])?;
        let do_pos = self.follow_rsrv(until_pos, "until <cond>", "do")?;
        let do_stmts = self.follow_stmts("do", do_pos, &["done"])?;
        let done_pos = self.stmt_end(until_pos, "until", "done")?;
        Ok(Command::Until(UntilClause { until_pos, do_pos, done_pos, cond_stmts, do_stmts }))
    }

    pub(crate) fn for_clause(&mut self) -> PResult<Command> {
        let for_pos = self.pos;
        self.next()?;
        let iter = self.loop_head(for_pos)?;
        let do_pos = self.follow_rsrv(for_pos, "for foo [in words]", "do")?;
        let do_stmts = self.follow_stmts("do", do_pos, &["done"])?;
        let done_pos = self.stmt_end(for_pos, "for", "done")?;
        Ok(Command::For(Box::new(ForClause { for_pos, do_pos, done_pos, iter, do_stmts })))
    }

    fn loop_head(&mut self, for_pos: Pos) -> PResult<Loop> {
        if self.tok == Token::DblLeftParen {
            let lparen = self.pos;
            let old = self.pre_nested(LexMode::ArithmExprCmd);
            self.next()?;
            if self.tok == Token::DblSemicolon {
                self.npos -= 1;
                self.tok = Token::Semicolon;
            }
            let mut init = None;
            if self.tok != Token::Semicolon {
                init = self.arithm_expr(0, false, false)?;
            }
            self.follow(self.pos, "expression", Token::Semicolon)?;
            let mut cond = None;
            if self.tok != Token::Semicolon {
                cond = self.arithm_expr(0, false, false)?;
            }
            self.follow(self.pos, "expression", Token::Semicolon)?;
            let mut post = None;
            if self.tok != Token::Semicolon {
                post = self.arithm_expr(0, false, false)?;
            }
            let rparen = self.arithm_end("((", lparen, old)?;
            self.got_same_line(Token::Semicolon)?;
            return Ok(Loop::CStyle(CStyleLoop { lparen, rparen, init, cond, post }));
        }
        let name = match self.get_lit()? {
            Some(l) => l,
            None => return Err(self.follow_err(for_pos, "for", "a literal")),
        };
        let mut list = Vec::new();
        if self.got_rsrv("in")? {
            while !self.new_line && self.tok != Token::Eof && self.tok != Token::Semicolon {
                match self.get_word()? {
                    Some(w) => list.push(w),
                    None => return Err(self.cur_err("word list can only contain words".into())),
                }
            }
            self.got_same_line(Token::Semicolon)?;
        } else if !self.new_line && !self.got(Token::Semicolon)? {
            return Err(self.follow_err(for_pos, "for foo", "\"in\", ; or a newline"));
        }
        Ok(Loop::WordIter(WordIter { name, list }))
    }

    pub(crate) fn case_clause(&mut self) -> PResult<Command> {
        let case_pos = self.pos;
        self.next()?;
        let word = self.follow_word("case", case_pos)?;
        self.follow_rsrv(case_pos, "case x", "in")?;
        let list = self.pattern_lists()?;
        let esac_pos = self.stmt_end(case_pos, "case", "esac")?;
        Ok(Command::Case(Box::new(CaseClause { case_pos, esac_pos, word, list })))
    }

    fn pattern_lists(&mut self) -> PResult<Vec<PatternList>> {
        let mut pls = Vec::new();
        while self.tok != Token::Eof && !(self.tok == Token::LitWord && self.val == "esac") {
            let mut patterns = Vec::new();
            self.got(Token::LeftParen)?;
            while self.tok != Token::Eof {
                match self.get_word()? {
                    Some(w) => patterns.push(w),
                    None => {
                        return Err(self.cur_err("case patterns must consist of words".into()))
                    }
                }
                if self.tok == Token::RightParen {
                    break;
                }
                if !self.got(Token::Or)? {
                    return Err(self.cur_err("case patterns must be separated with |".into()));
                }
            }
            let old = self.pre_nested(LexMode::SwitchCase);
            self.next()?;
            let stmts = self.stmts(&["esac"])?;
            self.post_nested(old);
            let op_pos = self.pos;
            match CaseOp::from_token(self.tok) {
                Some(op) => {
                    self.next()?;
                    pls.push(PatternList { op, op_pos, patterns, stmts });
                }
                None => {
                    pls.push(PatternList { op: CaseOp::Break, op_pos, patterns, stmts });
                    break;
                }
            }
        }
        Ok(pls)
    }

    pub(crate) fn decl_clause(&mut self) -> PResult<Command> {
        let position = self.pos;
        let name = self.val.clone();
        let variant = match name.as_str() {
            // typeset is an obsolete synonym
            "declare" | "typeset" => String::new(),
            other => other.to_string(),
        };
        self.next()?;
        let mut opts = Vec::new();
        while self.tok == Token::LitWord && self.val.starts_with('-') {
            if let Some(w) = self.get_word()? {
                opts.push(w);
            }
        }
        let mut assigns = Vec::new();
        while !self.new_line && !self.tok.stops_stmt() && !self.peek_redir() {
            if (self.tok == Token::Lit || self.tok == Token::LitWord) && self.valid_ident() {
                assigns.push(self.get_assign()?);
            } else if let Some(w) = self.get_word()? {
                assigns.push(Assign { append: false, name: None, value: Some(w), array: None });
            } else {
                return Err(self.follow_err(self.pos, &name, "words"));
            }
        }
        Ok(Command::Decl(DeclClause { position, variant, opts, assigns }))
    }

    pub(crate) fn eval_clause(&mut self) -> PResult<Command> {
        let eval_pos = self.pos;
        self.next()?;
        let (stmt, _) = self.get_stmt(false)?;
        Ok(Command::Eval(Box::new(EvalClause { eval_pos, stmt })))
    }

    pub(crate) fn coproc_clause(&mut self) -> PResult<Command> {
        let coproc_pos = self.pos;
        self.next()?;
        if is_bash_compound_start(self.tok, &self.val) {
            // unnamed coproc
            let (stmt, _) = self.get_stmt(false)?;
            let stmt = match stmt {
                Some(s) => s,
                None => {
                    return Err(
                        self.pos_err(coproc_pos, "coproc clause requires a command".into())
                    )
                }
            };
            return Ok(Command::Coproc(Box::new(CoprocClause { coproc_pos, name: None, stmt })));
        }
        if self.new_line {
            return Err(self.pos_err(coproc_pos, "coproc clause requires a command".into()));
        }
        let mut name = self.get_lit()?;
        let (stmt, _) = self.get_stmt(false)?;
        let stmt = match stmt {
            Some(mut s) => {
                if let Some(Command::Call(call)) = &mut s.cmd {
                    if let Some(n) = name.take() {
                        // the name was in fact the start of a call
                        call.args.insert(0, Word { parts: vec![WordPart::Lit(n)] });
                        s.position = call.pos();
                    }
                }
                s
            }
            None => match name.take() {
                Some(n) => {
                    // the name was in fact the whole command
                    let mut s = Stmt {
                        position: n.value_pos,
                        semi_pos: Pos::NONE,
                        negated: false,
                        background: false,
                        assigns: Vec::new(),
                        redirs: Vec::new(),
                        cmd: None,
                    };
                    s.cmd = Some(Command::Call(CallExpr {
                        args: vec![Word { parts: vec![WordPart::Lit(n)] }],
                    }));
                    s
                }
                None => {
                    return Err(
                        self.pos_err(coproc_pos, "coproc clause requires a command".into())
                    )
                }
            },
        };
        Ok(Command::Coproc(Box::new(CoprocClause { coproc_pos, name, stmt })))
    }

    pub(crate) fn let_clause(&mut self) -> PResult<Command> {
        let let_pos = self.pos;
        let old = self.pre_nested(LexMode::ArithmExprLet);
        self.next()?;
        let mut exprs = Vec::new();
        while !self.new_line && !self.tok.stops_stmt() && !self.peek_redir() {
            match self.arithm_expr(0, true, false)? {
                Some(x) => exprs.push(x),
                None => break,
            }
        }
        if exprs.is_empty() {
            return Err(self.pos_err(let_pos, "let clause requires at least one expression".into()));
        }
        self.post_nested(old);
        if self.tok == Token::Illegal {
            self.next()?;
        }
        Ok(Command::Let(LetClause { let_pos, exprs }))
    }

    pub(crate) fn bash_func_decl(&mut self) -> PResult<Command> {
        let fpos = self.pos;
        self.next()?;
        if self.tok != Token::LitWord {
            let w = self.follow_word("function", fpos)?;
            let raw = self.src_slice(w.pos(), w.end()).to_string();
            return Err(self.pos_err(w.pos(), format!("invalid func name: {:?}", raw)));
        }
        let name = self.lit_here();
        let name_pos = name.value_pos;
        self.next()?;
        if self.got_same_line(Token::LeftParen)? {
            self.follow(name_pos, "foo(", Token::RightParen)?;
        }
        self.func_decl(name, fpos, true)
    }

    pub(crate) fn func_decl(&mut self, name: Lit, pos: Pos, bash_style: bool) -> PResult<Command> {
        let (body, _) = self.get_stmt(false)?;
        let body = match body {
            Some(b) => b,
            None => return Err(self.follow_err(pos, "foo()", "a statement")),
        };
        Ok(Command::FuncDecl(Box::new(FuncDecl { position: pos, bash_style, name, body })))
    }

    pub(crate) fn call_expr(&mut self, s: &mut Stmt, w: Word) -> PResult<Command> {
        let mut args = vec![w];
        while !self.new_line {
            match self.tok {
                Token::Eof
                | Token::Semicolon
                | Token::And
                | Token::Or
                | Token::AndAnd
                | Token::OrOr
                | Token::PipeAll
                | Token::DblSemicolon
                | Token::SemiFall
                | Token::DblSemiFall => break,
                Token::LitWord => {
                    if lit_redir(self.src, self.npos) {
                        self.do_redirect(s)?;
                        continue;
                    }
                    let l = self.lit_here();
                    args.push(Word { parts: vec![WordPart::Lit(l)] });
                    self.next()?;
                }
                Token::BckQuote if self.quote == LexMode::SubCmdBckquo => break,
                Token::Lit
                | Token::BckQuote
                | Token::DollBrace
                | Token::DollDblParen
                | Token::DollParen
                | Token::Dollar
                | Token::CmdIn
                | Token::CmdOut
                | Token::SglQuote
                | Token::DollSglQuote
                | Token::DblQuote
                | Token::DollDblQuote
                | Token::DollBrack
                | Token::GlobQuest
                | Token::GlobStar
                | Token::GlobPlus
                | Token::GlobAt
                | Token::GlobExcl => {
                    let parts = self.word_parts()?;
                    args.push(Word { parts });
                }
                tok if tok.is_redirect() => self.do_redirect(s)?,
                Token::RightParen if self.quote == LexMode::SubCmd => break,
                _ => {
                    return Err(self.cur_err("a command can only contain words and redirects".into()))
                }
            }
        }
        Ok(Command::Call(CallExpr { args }))
    }
}
