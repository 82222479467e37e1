// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Words, word parts, parameter expansions and assignment prefixes.

use crate::ast::{
    ArrayExpr, Assign, CmdSubst, DblQuoted, Expansion, ExtGlob, Index, Lit, ParamExp, ProcSubst,
    Replace, SglQuoted, Slice, Word, WordPart,
};
use crate::parser::{PResult, Parser};
use crate::pos::Pos;
use crate::token::{GlobOp, LexMode, ParExpOp, ProcOp, Token};

impl Parser<'_> {
    /// A literal node for the current token, without advancing.
    pub(crate) fn lit_here(&mut self) -> Lit {
        Lit {
            value_pos: self.pos,
            value_end: self.tok_end(),
            value: std::mem::take(&mut self.val),
        }
    }

    pub(crate) fn get_lit(&mut self) -> PResult<Option<Lit>> {
        if self.tok == Token::Lit || self.tok == Token::LitWord {
            let l = self.lit_here();
            self.next()?;
            return Ok(Some(l));
        }
        Ok(None)
    }

    pub(crate) fn get_word(&mut self) -> PResult<Option<Word>> {
        if self.tok == Token::LitWord {
            let l = self.lit_here();
            self.next()?;
            return Ok(Some(Word { parts: vec![WordPart::Lit(l)] }));
        }
        let parts = self.word_parts()?;
        if parts.is_empty() {
            return Ok(None);
        }
        Ok(Some(Word { parts }))
    }

    /// Like [`Self::get_word`], but yields an empty literal at the current
    /// position when no parts follow; used where the grammar always wants a
    /// word, such as expansion operands and heredoc bodies.
    pub(crate) fn get_word_or_empty(&mut self) -> PResult<Word> {
        let parts = self.word_parts()?;
        if parts.is_empty() {
            let lit = Lit { value_pos: self.pos, value_end: self.pos, value: String::new() };
            return Ok(Word { parts: vec![WordPart::Lit(lit)] });
        }
        Ok(Word { parts })
    }

    pub(crate) fn word_parts(&mut self) -> PResult<Vec<WordPart>> {
        let mut parts = Vec::new();
        loop {
            match self.word_part()? {
                Some(part) => parts.push(part),
                None => return Ok(parts),
            }
            if self.spaced {
                return Ok(parts);
            }
        }
    }

    pub(crate) fn word_part(&mut self) -> PResult<Option<WordPart>> {
        match self.tok {
            Token::Lit | Token::LitWord => {
                let l = self.lit_here();
                self.next()?;
                Ok(Some(WordPart::Lit(l)))
            }
            Token::DollBrace => Ok(Some(WordPart::ParamExp(Box::new(self.param_exp()?)))),
            Token::DollDblParen | Token::DollBrack => self.arithm_exp_part(),
            Token::DollParen => {
                if self.quote == LexMode::HdocWord {
                    return Err(self.cur_err("nested statements not allowed in heredoc words".into()));
                }
                let left = self.pos;
                let old = self.pre_nested(LexMode::SubCmd);
                self.next()?;
                let stmts = self.stmts(&[])?;
                self.post_nested(old);
                let right = self.matched(left, Token::LeftParen, Token::RightParen)?;
                Ok(Some(WordPart::CmdSubst(CmdSubst { left, right, stmts })))
            }
            Token::Dollar => self.short_param_exp(),
            Token::CmdIn | Token::CmdOut => {
                let op = if self.tok == Token::CmdIn { ProcOp::CmdIn } else { ProcOp::CmdOut };
                let op_pos = self.pos;
                let old = self.pre_nested(LexMode::SubCmd);
                self.next()?;
                let stmts = self.stmts(&[])?;
                self.post_nested(old);
                let rparen = self.pos;
                if !self.got(Token::RightParen)? {
                    return Err(self.matching_err(op_pos, &op.to_string(), ")"));
                }
                Ok(Some(WordPart::ProcSubst(ProcSubst { op, op_pos, rparen, stmts })))
            }
            Token::SglQuote => self.single_quoted(),
            Token::DollSglQuote => self.dollar_single_quoted(),
            Token::DblQuote | Token::DollDblQuote => {
                if self.tok == Token::DblQuote && self.quote == LexMode::DblQuotes {
                    return Ok(None);
                }
                self.double_quoted()
            }
            Token::BckQuote => {
                match self.quote {
                    LexMode::HdocWord => {
                        return Err(
                            self.cur_err("nested statements not allowed in heredoc words".into())
                        );
                    }
                    LexMode::SubCmdBckquo => return Ok(None),
                    _ => {}
                }
                let left = self.pos;
                let old = self.pre_nested(LexMode::SubCmdBckquo);
                self.next()?;
                let stmts = self.stmts(&[])?;
                self.post_nested(old);
                let right = self.pos;
                if !self.got(Token::BckQuote)? {
                    return Err(self.quote_err(left, Token::BckQuote));
                }
                Ok(Some(WordPart::CmdSubst(CmdSubst { left, right, stmts })))
            }
            Token::GlobQuest
            | Token::GlobStar
            | Token::GlobPlus
            | Token::GlobAt
            | Token::GlobExcl => self.ext_glob(),
            _ => Ok(None),
        }
    }

    fn short_param_exp(&mut self) -> PResult<Option<WordPart>> {
        let dollar = self.pos;
        let b = self.byte_at(self.npos);
        let is_special = matches!(
            b,
            Some(b'@' | b'*' | b'#' | b'$' | b'?' | b'!' | b'0' | b'-')
        );
        let is_name = b.is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !is_special && !is_name {
            let l = Lit { value_pos: dollar, value_end: self.tok_end(), value: "$".into() };
            self.next()?;
            return Ok(Some(WordPart::Lit(l)));
        }
        self.pos = Pos(self.pos.0 + 1);
        if is_special {
            self.npos += 1;
            self.tok = Token::Lit;
            self.val = (b.unwrap_or(b'?') as char).to_string();
        } else {
            self.advance_param_name();
        }
        let param = self.get_lit()?;
        Ok(Some(WordPart::ParamExp(Box::new(ParamExp {
            dollar,
            rbrace: Pos::NONE,
            short: true,
            length: false,
            param,
            ind: None,
            slice: None,
            repl: None,
            exp: None,
        }))))
    }

    fn single_quoted(&mut self) -> PResult<Option<WordPart>> {
        let position = self.pos;
        let start = self.npos;
        let mut i = start;
        let mut found = false;
        while i < self.src.len() {
            match self.src[i] {
                b'\'' => {
                    found = true;
                    break;
                }
                b'\n' => self.lines.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        self.npos = i;
        if !found {
            return Err(self.pos_err(position, "reached EOF without closing quote '".into()));
        }
        let value = String::from_utf8_lossy(&self.src[start..i]).into_owned();
        self.npos = i + 1;
        self.next()?;
        Ok(Some(WordPart::SglQuoted(SglQuoted { position, dollar: false, value })))
    }

    fn dollar_single_quoted(&mut self) -> PResult<Option<WordPart>> {
        let position = self.pos;
        let old = self.quote;
        self.quote = LexMode::SglQuotes;
        self.next()?;
        self.quote = old;
        let mut value = String::new();
        if self.tok != Token::SglQuote {
            value = std::mem::take(&mut self.val);
            self.next()?;
        }
        if !self.got(Token::SglQuote)? {
            return Err(self.quote_err(position, Token::SglQuote));
        }
        Ok(Some(WordPart::SglQuoted(SglQuoted { position, dollar: true, value })))
    }

    fn double_quoted(&mut self) -> PResult<Option<WordPart>> {
        let position = self.pos;
        let dollar = self.tok == Token::DollDblQuote;
        let old = self.quote;
        self.quote = LexMode::DblQuotes;
        self.next()?;
        let parts = if self.tok == Token::LitWord {
            let l = self.lit_here();
            self.next()?;
            vec![WordPart::Lit(l)]
        } else {
            self.word_parts()?
        };
        self.quote = old;
        if !self.got(Token::DblQuote)? {
            return Err(self.quote_err(position, Token::DblQuote));
        }
        Ok(Some(WordPart::DblQuoted(DblQuoted { position, dollar, parts })))
    }

    fn ext_glob(&mut self) -> PResult<Option<WordPart>> {
        let op = match self.tok {
            Token::GlobQuest => GlobOp::Question,
            Token::GlobStar => GlobOp::Star,
            Token::GlobPlus => GlobOp::Plus,
            Token::GlobAt => GlobOp::At,
            _ => GlobOp::Negate,
        };
        let op_pos = self.pos;
        let start = self.npos;
        let mut lparens = 0i32;
        let mut pattern = None;
        while self.npos < self.src.len() {
            match self.src[self.npos] {
                b'(' => lparens += 1,
                b')' => {
                    lparens -= 1;
                    if lparens < 0 {
                        pattern = Some(Lit {
                            value_pos: Pos::from_offset(start),
                            value_end: Pos::from_offset(self.npos),
                            value: String::from_utf8_lossy(&self.src[start..self.npos])
                                .into_owned(),
                        });
                        self.npos += 1;
                        break;
                    }
                }
                _ => {}
            }
            self.npos += 1;
        }
        self.next()?;
        let Some(pattern) = pattern else {
            return Err(self.matching_err(self.pos, &op.to_string(), ")"));
        };
        Ok(Some(WordPart::ExtGlob(ExtGlob { op, op_pos, pattern })))
    }

    // ── Parameter expansion ──────────────────────────────────────────────

    fn param_exp(&mut self) -> PResult<ParamExp> {
        let dollar = self.pos;
        let old = self.pre_nested(LexMode::ParamExpName);
        self.next()?;
        let mut pe = ParamExp {
            dollar,
            rbrace: Pos::NONE,
            short: false,
            length: false,
            param: None,
            ind: None,
            slice: None,
            repl: None,
            exp: None,
        };
        if self.tok == Token::DblHash {
            self.tok = Token::Hash;
            self.npos -= 1;
        }
        if self.tok == Token::Hash
            && self.npos < self.src.len()
            && self.src[self.npos] != b'}'
        {
            pe.length = true;
            self.next()?;
        }
        match self.tok {
            Token::Lit | Token::LitWord => {
                pe.param = Some(self.lit_here());
                self.next()?;
            }
            Token::Dollar | Token::Quest | Token::Hash | Token::Minus => {
                let value = self.tok.to_string();
                pe.param = Some(Lit {
                    value_pos: self.pos,
                    value_end: Pos(self.pos.0 + value.len()),
                    value,
                });
                self.next()?;
            }
            _ => {
                if !pe.length {
                    return Err(
                        self.pos_err(pe.dollar, "parameter expansion requires a literal".into())
                    );
                }
            }
        }
        if self.tok == Token::RightBrace {
            pe.rbrace = self.pos;
            self.post_nested(old);
            self.next()?;
            return Ok(pe);
        }
        if self.tok == Token::LeftBrack {
            if !self.bash() {
                return Err(self.cur_err("arrays are a bash feature".into()));
            }
            let lpos = self.pos;
            self.quote = LexMode::ParamExpInd;
            self.next()?;
            if self.tok == Token::Star {
                self.tok = Token::LitWord;
                self.val = "*".into();
            }
            let expr = self.arithm_expr(0, false, false)?;
            let expr = match expr {
                Some(e) => e,
                None => return Err(self.follow_err_exp(lpos, "[")),
            };
            pe.ind = Some(Index { expr });
            self.quote = LexMode::ParamExpName;
            self.matched(lpos, Token::LeftBrack, Token::RightBrack)?;
        }
        match self.tok {
            Token::RightBrace => {
                pe.rbrace = self.pos;
                self.post_nested(old);
                self.next()?;
                return Ok(pe);
            }
            Token::Slash | Token::DblSlash => {
                if !self.bash() {
                    return Err(self.cur_err("search and replace is a bash feature".into()));
                }
                let all = self.tok == Token::DblSlash;
                self.quote = LexMode::ParamExpRepl;
                self.next()?;
                let orig = self.get_word_or_empty()?;
                if self.tok == Token::Slash {
                    self.quote = LexMode::ParamExpExp;
                    self.next()?;
                }
                let with = self.get_word_or_empty()?;
                pe.repl = Some(Replace { all, orig, with });
            }
            Token::Colon => {
                if !self.bash() {
                    return Err(self.cur_err("slicing is a bash feature".into()));
                }
                let mut slice = Slice { offset: None, length: None };
                let colon_pos = self.pos;
                self.quote = LexMode::ParamExpOff;
                self.next()?;
                if self.tok != Token::Colon {
                    match self.arithm_expr(0, false, false)? {
                        Some(e) => slice.offset = Some(e),
                        None => return Err(self.follow_err_exp(colon_pos, ":")),
                    }
                }
                let colon_pos = self.pos;
                self.quote = LexMode::ParamExpLen;
                if self.got(Token::Colon)? {
                    match self.arithm_expr(0, false, false)? {
                        Some(e) => slice.length = Some(e),
                        None => return Err(self.follow_err_exp(colon_pos, ":")),
                    }
                }
                pe.slice = Some(slice);
            }
            tok => {
                let op = match ParExpOp::from_token(tok) {
                    Some(op) => op,
                    None if tok == Token::Eof => {
                        return Err(self.matching_err(pe.dollar, "${", "}"))
                    }
                    None => {
                        return Err(self.cur_err(format!(
                            "not a valid parameter expansion operator: {}",
                            tok
                        )))
                    }
                };
                if op.is_case_modification() && !self.bash() {
                    return Err(self.cur_err("case expansions are a bash feature".into()));
                }
                self.quote = LexMode::ParamExpExp;
                self.next()?;
                let word = self.get_word_or_empty()?;
                pe.exp = Some(Expansion { op, word });
            }
        }
        self.post_nested(old);
        pe.rbrace = self.pos;
        self.matched(pe.dollar, Token::DollBrace, Token::RightBrace)?;
        Ok(pe)
    }

    // ── Assignments ──────────────────────────────────────────────────────

    /// Whether the current literal starts with a valid assignment name
    /// ending at the recorded `=`.
    pub(crate) fn valid_ident(&self) -> bool {
        if self.as_pos == 0 || self.as_pos > self.val.len() {
            return false;
        }
        let s = &self.val[..self.as_pos];
        for (i, c) in s.char_indices() {
            match c {
                'a'..='z' | 'A'..='Z' | '_' => {}
                '0'..='9' if i > 0 => {}
                '[' | ']' if i > 0 && self.bash() => {}
                _ => return false,
            }
        }
        true
    }

    pub(crate) fn get_assign(&mut self) -> PResult<Assign> {
        let mut as_pos = self.as_pos;
        let tok_pos = self.pos;
        let tok_end = self.tok_end();
        let val = std::mem::take(&mut self.val);
        let name = Lit {
            value_pos: tok_pos,
            value_end: Pos(tok_pos.0 + as_pos),
            value: val[..as_pos].into(),
        };
        let mut append = false;
        if val.as_bytes()[as_pos] == b'+' {
            append = true;
            as_pos += 1;
        }
        let mut a = Assign { append, name: Some(name), value: None, array: None };
        let start_val = &val[as_pos + 1..];
        if !start_val.is_empty() {
            let lit = Lit {
                value_pos: Pos(tok_pos.0 + as_pos + 1),
                value_end: tok_end,
                value: start_val.into(),
            };
            a.value = Some(Word { parts: vec![WordPart::Lit(lit)] });
        }
        self.next()?;
        if self.spaced {
            return Ok(a);
        }
        if start_val.is_empty() && self.tok == Token::LeftParen {
            if !self.bash() {
                return Err(self.cur_err("arrays are a bash feature".into()));
            }
            let lparen = self.pos;
            self.next()?;
            let mut elems = Vec::new();
            while self.tok != Token::Eof && self.tok != Token::RightParen {
                match self.get_word()? {
                    Some(w) => elems.push(w),
                    None => return Err(self.cur_err("array elements must be words".into())),
                }
            }
            let rparen = self.matched(lparen, Token::LeftParen, Token::RightParen)?;
            a.array = Some(ArrayExpr { lparen, rparen, elems });
        } else if !self.new_line && !self.tok.stops_stmt() {
            if let Some(w) = self.get_word()? {
                match &mut a.value {
                    None => a.value = Some(w),
                    Some(v) => v.parts.extend(w.parts),
                }
            }
        }
        Ok(a)
    }
}
