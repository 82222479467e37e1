// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent shell parser.
//!
//! One `Parser` drives both scanning and parsing: the grammar methods below
//! pull tokens one at a time from the scanning methods in [`crate::lexer`],
//! steering them through the current [`LexMode`]. Nested constructs save and
//! restore the mode together with the count of heredocs buried beneath them.

mod arithm;
mod clause;
mod test_expr;
mod word;

use crate::ast::{BinaryCmd, Command, File, Redirect, Stmt, Word};
use crate::error::ParseError;
use crate::pos::{lookup, Pos};
use crate::token::{BinCmdOp, LexMode, RedirOp, Token};
use crate::ParseMode;

pub(crate) type PResult<T> = Result<T, ParseError>;

/// A heredoc whose body has not been scanned yet.
pub(crate) struct HdocPending {
    /// Queue order; pairs the scanned body back up with its redirect.
    pub(crate) seq: usize,
    pub(crate) tabs: bool,
    pub(crate) word: Word,
}

pub(crate) struct Parser<'a> {
    pub(crate) src: &'a [u8],
    name: &'a str,
    pub(crate) mode: ParseMode,

    pub(crate) lines: Vec<usize>,
    pub(crate) comments: Vec<crate::ast::Comment>,

    pub(crate) tok: Token,
    pub(crate) val: String,
    pub(crate) pos: Pos,
    pub(crate) npos: usize,

    pub(crate) spaced: bool,
    pub(crate) new_line: bool,

    pub(crate) quote: LexMode,
    /// Index in `val` of the `=` (or the `+` of `+=`) of a candidate
    /// assignment prefix; 0 when there is none.
    pub(crate) as_pos: usize,

    pub(crate) buried_hdocs: usize,
    pub(crate) heredocs: Vec<HdocPending>,
    pub(crate) hdoc_stop: Option<Vec<u8>>,
    hdoc_seq: usize,
    pub(crate) hdoc_bodies: Vec<(usize, Word)>,
}

pub(crate) struct SaveState {
    quote: LexMode,
    buried_hdocs: usize,
}

pub(crate) fn parse(src: &str, name: &str, mode: ParseMode) -> Result<File, ParseError> {
    let mut p = Parser::new(src.as_bytes(), name, mode);
    p.next()?;
    let stmts = p.stmts(&[])?;
    // EOF right after a heredoc word leaves no newline to trigger draining
    p.do_heredocs()?;
    let mut f = File {
        name: name.to_string(),
        lines: std::mem::take(&mut p.lines),
        comments: std::mem::take(&mut p.comments),
        stmts,
    };
    p.attach_heredocs(&mut f);
    Ok(f)
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a [u8], name: &'a str, mode: ParseMode) -> Self {
        Parser {
            src,
            name,
            mode,
            lines: vec![0],
            comments: Vec::new(),
            tok: Token::Illegal,
            val: String::new(),
            pos: Pos::NONE,
            npos: 0,
            spaced: false,
            new_line: false,
            quote: LexMode::Regular,
            as_pos: 0,
            buried_hdocs: 0,
            heredocs: Vec::new(),
            hdoc_stop: None,
            hdoc_seq: 0,
            hdoc_bodies: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn bash(&self) -> bool {
        !self.mode.contains(ParseMode::POSIX_CONFORMANT)
    }

    pub(crate) fn pre_nested(&mut self, quote: LexMode) -> SaveState {
        let s = SaveState { quote: self.quote, buried_hdocs: self.buried_hdocs };
        self.buried_hdocs = self.heredocs.len();
        self.quote = quote;
        s
    }

    pub(crate) fn post_nested(&mut self, s: SaveState) {
        self.quote = s.quote;
        self.buried_hdocs = s.buried_hdocs;
    }

    // ── Errors ───────────────────────────────────────────────────────────

    pub(crate) fn pos_err(&self, pos: Pos, text: String) -> ParseError {
        let position = lookup(&self.lines, pos);
        ParseError {
            filename: self.name.to_string(),
            line: position.line,
            column: position.column,
            text,
        }
    }

    pub(crate) fn cur_err(&self, text: String) -> ParseError {
        self.pos_err(self.pos, text)
    }

    pub(crate) fn follow_err(&self, pos: Pos, left: &str, right: &str) -> ParseError {
        self.pos_err(pos, format!("{} must be followed by {}", readable_str(left), right))
    }

    pub(crate) fn follow_err_exp(&self, pos: Pos, left: &str) -> ParseError {
        self.follow_err(pos, left, "an expression")
    }

    pub(crate) fn quote_err(&self, lpos: Pos, quote: Token) -> ParseError {
        self.pos_err(lpos, format!("reached {} without closing quote {}", self.tok, quote))
    }

    pub(crate) fn matching_err(&self, lpos: Pos, left: &str, right: &str) -> ParseError {
        self.pos_err(lpos, format!("reached {} without matching {} with {}", self.tok, left, right))
    }

    /// The diagnostic used when a speculative `((`-family reinterpretation
    /// consumed a nested parse error. The first error stops token
    /// production, so these always read as reaching EOF.
    pub(crate) fn matching_err_eof(&self, lpos: Pos, left: &str, right: &str) -> ParseError {
        self.pos_err(lpos, format!("reached EOF without matching {} with {}", left, right))
    }

    // ── Token helpers ────────────────────────────────────────────────────

    pub(crate) fn got(&mut self, tok: Token) -> PResult<bool> {
        if self.tok == tok {
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub(crate) fn got_rsrv(&mut self, val: &str) -> PResult<bool> {
        if self.tok == Token::LitWord && self.val == val {
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub(crate) fn got_same_line(&mut self, tok: Token) -> PResult<bool> {
        if !self.new_line && self.tok == tok {
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub(crate) fn follow(&mut self, lpos: Pos, left: &str, tok: Token) -> PResult<Pos> {
        let pos = self.pos;
        if !self.got(tok)? {
            return Err(self.follow_err(lpos, left, &tok.to_string()));
        }
        Ok(pos)
    }

    pub(crate) fn follow_rsrv(&mut self, lpos: Pos, left: &str, val: &str) -> PResult<Pos> {
        let pos = self.pos;
        if !self.got_rsrv(val)? {
            return Err(self.follow_err(lpos, left, &format!("{:?}", val)));
        }
        Ok(pos)
    }

    pub(crate) fn follow_stmts(
        &mut self,
        left: &str,
        lpos: Pos,
        stops: &[&str],
    ) -> PResult<Vec<Stmt>> {
        if self.got_same_line(Token::Semicolon)? {
            return Ok(Vec::new());
        }
        let sts = self.stmts(stops)?;
        if sts.is_empty() && !self.new_line {
            return Err(self.follow_err(lpos, left, "a statement list"));
        }
        Ok(sts)
    }

    pub(crate) fn follow_word(&mut self, left: &str, pos: Pos) -> PResult<Word> {
        match self.get_word()? {
            Some(w) => Ok(w),
            None => Err(self.follow_err(pos, left, "a word")),
        }
    }

    pub(crate) fn stmt_end(&mut self, pos: Pos, start: &str, end: &str) -> PResult<Pos> {
        let epos = self.pos;
        if !self.got_rsrv(end)? {
            return Err(self.pos_err(pos, format!("{} statement must end with {:?}", start, end)));
        }
        Ok(epos)
    }

    pub(crate) fn matched(&mut self, lpos: Pos, left: Token, right: Token) -> PResult<Pos> {
        let pos = self.pos;
        if !self.got(right)? {
            return Err(self.matching_err(lpos, &left.to_string(), &right.to_string()));
        }
        Ok(pos)
    }

    // ── Statements ───────────────────────────────────────────────────────

    pub(crate) fn stmts(&mut self, stops: &[&str]) -> PResult<Vec<Stmt>> {
        let mut sts: Vec<Stmt> = Vec::new();
        let mut got_end = true;
        while self.tok != Token::Eof {
            match self.tok {
                Token::LitWord => {
                    if stops.contains(&self.val.as_str()) {
                        return Ok(sts);
                    }
                }
                Token::RightParen => {
                    if self.quote == LexMode::SubCmd {
                        return Ok(sts);
                    }
                }
                Token::BckQuote => {
                    if self.quote == LexMode::SubCmdBckquo {
                        return Ok(sts);
                    }
                }
                Token::DblSemicolon | Token::SemiFall | Token::DblSemiFall => {
                    if self.quote == LexMode::SwitchCase {
                        return Ok(sts);
                    }
                    return Err(
                        self.cur_err(format!("{} can only be used in a case clause", self.tok))
                    );
                }
                _ => {}
            }
            if !self.new_line && !got_end {
                return Err(self.cur_err("statements must be separated by &, ; or a newline".into()));
            }
            match self.get_stmt(true)? {
                (Some(s), end) => {
                    sts.push(s);
                    got_end = end;
                }
                (None, _) => return Err(self.invalid_stmt_start()),
            }
        }
        Ok(sts)
    }

    fn invalid_stmt_start(&self) -> ParseError {
        match self.tok {
            Token::Semicolon | Token::And | Token::Or | Token::AndAnd | Token::OrOr => {
                self.cur_err(format!("{} can only immediately follow a statement", self.tok))
            }
            Token::RightParen => self.cur_err(") can only be used to close a subshell".into()),
            _ => self.cur_err(format!("{} is not a valid start for a statement", self.tok)),
        }
    }

    fn empty_stmt(pos: Pos) -> Stmt {
        Stmt {
            position: pos,
            semi_pos: Pos::NONE,
            negated: false,
            background: false,
            assigns: Vec::new(),
            redirs: Vec::new(),
            cmd: None,
        }
    }

    pub(crate) fn get_stmt(&mut self, read_end: bool) -> PResult<(Option<Stmt>, bool)> {
        let mut s = Self::empty_stmt(self.pos);
        if self.got_rsrv("!")? {
            s.negated = true;
        }
        loop {
            match self.tok {
                Token::Lit | Token::LitWord => {
                    if self.valid_ident() {
                        let a = self.get_assign()?;
                        s.assigns.push(a);
                    } else if lit_redir(self.src, self.npos) {
                        self.do_redirect(&mut s)?;
                    } else {
                        break;
                    }
                }
                tok if tok.is_redirect() => self.do_redirect(&mut s)?,
                _ => break,
            }
            if self.new_line || self.tok == Token::Eof {
                return Ok((Some(s), false));
            }
            if self.tok == Token::Semicolon {
                if read_end {
                    s.semi_pos = self.pos;
                    self.next()?;
                    return Ok((Some(s), true));
                }
                return Ok((Some(s), false));
            }
        }
        let mut s = match self.got_stmt_pipe(s)? {
            Some(s) => s,
            None => return Ok((None, false)),
        };
        let mut got_end = false;
        match self.tok {
            Token::AndAnd | Token::OrOr => {
                let op = BinCmdOp::from_token(self.tok).unwrap_or(BinCmdOp::AndStmt);
                let op_pos = self.pos;
                self.next()?;
                let y = match self.get_stmt(false)? {
                    (Some(y), _) => y,
                    (None, _) => {
                        return Err(self.follow_err(op_pos, &op.to_string(), "a statement"))
                    }
                };
                let position = s.position;
                let b = BinaryCmd { op, op_pos, x: s, y };
                s = Self::empty_stmt(position);
                s.cmd = Some(Command::Binary(Box::new(b)));
                if read_end && self.got_same_line(Token::Semicolon)? {
                    got_end = true;
                }
            }
            Token::And => {
                self.next()?;
                s.background = true;
                got_end = true;
            }
            Token::Semicolon => {
                if !self.new_line && read_end {
                    s.semi_pos = self.pos;
                    self.next()?;
                    got_end = true;
                }
            }
            _ => {}
        }
        Ok((Some(s), got_end))
    }

    fn got_stmt_pipe(&mut self, mut s: Stmt) -> PResult<Option<Stmt>> {
        match self.tok {
            Token::LeftParen => s.cmd = Some(self.subshell()?),
            Token::DblLeftParen => s.cmd = Some(self.arithm_exp_cmd()?),
            Token::LitWord => match self.val.as_str() {
                "}" => return Err(self.cur_err("} can only be used to close a block".into())),
                "{" => s.cmd = Some(self.block()?),
                "if" => s.cmd = Some(self.if_clause()?),
                "while" => s.cmd = Some(self.while_clause()?),
                "until" => s.cmd = Some(self.until_clause()?),
                "for" => s.cmd = Some(self.for_clause()?),
                "case" => s.cmd = Some(self.case_clause()?),
                "[[" if self.bash() => s.cmd = Some(self.test_clause()?),
                "eval" if self.bash() => s.cmd = Some(self.eval_clause()?),
                "coproc" if self.bash() => s.cmd = Some(self.coproc_clause()?),
                "let" if self.bash() => s.cmd = Some(self.let_clause()?),
                "function" if self.bash() => s.cmd = Some(self.bash_func_decl()?),
                v if self.bash() && is_decl_word(v) => s.cmd = Some(self.decl_clause()?),
                _ => {
                    let name = self.lit_here();
                    self.next()?;
                    if self.got_same_line(Token::LeftParen)? {
                        self.follow(name.value_pos, "foo(", Token::RightParen)?;
                        let name_pos = name.value_pos;
                        s.cmd = Some(self.func_decl(name, name_pos, false)?);
                    } else {
                        let w = Word { parts: vec![crate::ast::WordPart::Lit(name)] };
                        s.cmd = Some(self.call_expr(&mut s, w)?);
                    }
                }
            },
            Token::BckQuote if self.quote == LexMode::SubCmdBckquo => {}
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
                let w = Word { parts };
                if self.got_same_line(Token::LeftParen)? {
                    let raw = self.src_slice(w.pos(), w.end());
                    return Err(self.pos_err(w.pos(), format!("invalid func name: {:?}", raw)));
                }
                s.cmd = Some(self.call_expr(&mut s, w)?);
            }
            _ => {}
        }
        while !self.new_line && self.peek_redir() {
            self.do_redirect(&mut s)?;
        }
        if s.cmd.is_none() && s.redirs.is_empty() && !s.negated && s.assigns.is_empty() {
            return Ok(None);
        }
        if self.tok == Token::Or || self.tok == Token::PipeAll {
            let op = BinCmdOp::from_token(self.tok).unwrap_or(BinCmdOp::Pipe);
            let op_pos = self.pos;
            self.next()?;
            let y = match self.got_stmt_pipe(Self::empty_stmt(self.pos))? {
                Some(y) => y,
                None => return Err(self.follow_err(op_pos, &op.to_string(), "a statement")),
            };
            let position = s.position;
            let b = BinaryCmd { op, op_pos, x: s, y };
            s = Self::empty_stmt(position);
            s.cmd = Some(Command::Binary(Box::new(b)));
        }
        Ok(Some(s))
    }

    /// Raw source text between two positions, for diagnostics.
    pub(crate) fn src_slice(&self, pos: Pos, end: Pos) -> &str {
        std::str::from_utf8(&self.src[pos.offset()..end.offset()]).unwrap_or("")
    }

    // ── Redirects ────────────────────────────────────────────────────────

    pub(crate) fn peek_redir(&self) -> bool {
        match self.tok {
            Token::LitWord => lit_redir(self.src, self.npos),
            tok => tok.is_redirect(),
        }
    }

    pub(crate) fn do_redirect(&mut self, s: &mut Stmt) -> PResult<()> {
        let n = self.get_lit()?;
        let Some(op) = RedirOp::from_token(self.tok) else {
            unreachable!("do_redirect called without a redirect operator");
        };
        let op_pos = self.pos;
        self.next()?;
        let word = if op.is_heredoc() {
            let old = self.quote;
            self.quote = LexMode::HdocWord;
            if self.new_line {
                return Err(self.cur_err("heredoc stop word must be on the same line".into()));
            }
            let word = match self.follow_word(&op.to_string(), op_pos) {
                Ok(w) => w,
                Err(e) => {
                    self.quote = old;
                    return Err(e);
                }
            };
            self.heredocs.push(HdocPending {
                seq: self.hdoc_seq,
                tabs: op == RedirOp::DashHdoc,
                word: word.clone(),
            });
            self.hdoc_seq += 1;
            self.quote = old;
            self.next()?;
            word
        } else {
            if self.new_line {
                return Err(self.cur_err("redirect word must be on the same line".into()));
            }
            self.follow_word(&op.to_string(), op_pos)?
        };
        s.redirs.push(Redirect { n, op, op_pos, word, hdoc: None });
        Ok(())
    }

    // ── Heredoc body attachment ──────────────────────────────────────────

    /// Pair scanned heredoc bodies back up with their redirects.
    ///
    /// Bodies are scanned while the owning statements are still being built,
    /// so they are collected on the side, keyed by queue order. Heredoc
    /// operators are queued strictly left to right, so the k-th heredoc
    /// redirect in position order owns sequence number k.
    fn attach_heredocs(&mut self, f: &mut File) {
        if self.hdoc_bodies.is_empty() {
            return;
        }
        let mut redirs: Vec<&mut Redirect> = Vec::new();
        collect_heredoc_redirs(&mut f.stmts, &mut redirs);
        redirs.sort_by_key(|r| r.op_pos);
        let bodies = std::mem::take(&mut self.hdoc_bodies);
        for (seq, body) in bodies {
            if let Some(r) = redirs.get_mut(seq) {
                r.hdoc = Some(body);
            }
        }
    }
}

fn readable_str(s: &str) -> String {
    // quote keyword-like names, leave symbols as-is
    match s.as_bytes().first() {
        Some(b'a'..=b'z') => format!("{:?}", s),
        _ => s.to_string(),
    }
}

pub(crate) fn lit_redir(src: &[u8], npos: usize) -> bool {
    npos + 1 < src.len() && (src[npos] == b'>' || src[npos] == b'<') && src[npos + 1] != b'('
}

fn is_decl_word(val: &str) -> bool {
    matches!(val, "declare" | "local" | "export" | "readonly" | "typeset" | "nameref")
}

pub(crate) fn is_bash_compound_start(tok: Token, val: &str) -> bool {
    match tok {
        Token::LeftParen | Token::DblLeftParen => true,
        Token::LitWord => {
            matches!(
                val,
                "{" | "if" | "while" | "until" | "for" | "case" | "[[" | "eval" | "coproc"
                    | "let" | "function"
            ) || is_decl_word(val)
        }
        _ => false,
    }
}

// ── Mutable heredoc-redirect walk ────────────────────────────────────────

fn collect_heredoc_redirs<'a, 'x>(stmts: &'a mut [Stmt], out: &mut Vec<&'x mut Redirect>)
where
    'a: 'x,
{
    for s in stmts {
        collect_stmt(s, out);
    }
}

fn collect_stmt<'a, 'x>(s: &'a mut Stmt, out: &mut Vec<&'x mut Redirect>)
where
    'a: 'x,
{
    for a in &mut s.assigns {
        if let Some(w) = &mut a.value {
            collect_word(w, out);
        }
        if let Some(a) = &mut a.array {
            for w in &mut a.elems {
                collect_word(w, out);
            }
        }
    }
    for r in &mut s.redirs {
        if r.op.is_heredoc() {
            // Heredoc stop words can't contain command substitutions
            // (rejected during parsing), so there is nothing to recurse into.
            out.push(r);
        } else {
            collect_word(&mut r.word, out);
        }
    }
    if let Some(cmd) = &mut s.cmd {
        collect_cmd(cmd, out);
    }
}

fn collect_cmd<'a, 'x>(cmd: &'a mut Command, out: &mut Vec<&'x mut Redirect>)
where
    'a: 'x,
{
    use crate::ast::Loop;
    match cmd {
        Command::Call(c) => {
            for w in &mut c.args {
                collect_word(w, out);
            }
        }
        Command::Block(c) => collect_heredoc_redirs(&mut c.stmts, out),
        Command::Subshell(c) => collect_heredoc_redirs(&mut c.stmts, out),
        Command::If(c) => {
            collect_heredoc_redirs(&mut c.cond_stmts, out);
            collect_heredoc_redirs(&mut c.then_stmts, out);
            for e in &mut c.elifs {
                collect_heredoc_redirs(&mut e.cond_stmts, out);
                collect_heredoc_redirs(&mut e.then_stmts, out);
            }
            collect_heredoc_redirs(&mut c.else_stmts, out);
        }
        Command::While(c) => {
            collect_heredoc_redirs(&mut c.cond_stmts, out);
            collect_heredoc_redirs(&mut c.do_stmts, out);
        }
        Command::Until(c) => {
            collect_heredoc_redirs(&mut c.cond_stmts, out);
            collect_heredoc_redirs(&mut c.do_stmts, out);
        }
        Command::For(c) => {
            if let Loop::WordIter(wi) = &mut c.iter {
                for w in &mut wi.list {
                    collect_word(w, out);
                }
            }
            collect_heredoc_redirs(&mut c.do_stmts, out);
        }
        Command::Case(c) => {
            collect_word(&mut c.word, out);
            for pl in &mut c.list {
                for w in &mut pl.patterns {
                    collect_word(w, out);
                }
                collect_heredoc_redirs(&mut pl.stmts, out);
            }
        }
        Command::Binary(c) => {
            collect_stmt(&mut c.x, out);
            collect_stmt(&mut c.y, out);
        }
        Command::FuncDecl(c) => collect_stmt(&mut c.body, out),
        Command::Arithm(_) | Command::Let(_) => {}
        Command::Test(_) => {}
        Command::Decl(c) => {
            for w in &mut c.opts {
                collect_word(w, out);
            }
            for a in &mut c.assigns {
                if let Some(w) = &mut a.value {
                    collect_word(w, out);
                }
                if let Some(arr) = &mut a.array {
                    for w in &mut arr.elems {
                        collect_word(w, out);
                    }
                }
            }
        }
        Command::Eval(c) => {
            if let Some(s) = &mut c.stmt {
                collect_stmt(s, out);
            }
        }
        Command::Coproc(c) => collect_stmt(&mut c.stmt, out),
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;

fn collect_word<'a, 'x>(w: &'a mut Word, out: &mut Vec<&'x mut Redirect>)
where
    'a: 'x,
{
    use crate::ast::WordPart;
    for part in &mut w.parts {
        match part {
            WordPart::CmdSubst(c) => collect_heredoc_redirs(&mut c.stmts, out),
            WordPart::ProcSubst(c) => collect_heredoc_redirs(&mut c.stmts, out),
            WordPart::DblQuoted(q) => {
                for p in &mut q.parts {
                    if let WordPart::CmdSubst(c) = p {
                        collect_heredoc_redirs(&mut c.stmts, out);
                    }
                }
            }
            _ => {}
        }
    }
}
