// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AST to canonical source.
//!
//! The printer walks the tree emitting bytes, deciding line structure from
//! source positions: a construct that spanned lines stays multi-line, runs
//! of blank lines collapse to one, word sequences broken across lines keep
//! a backslash continuation with one extra indent level, and trailing
//! comments on consecutive lines align as a group.

use std::io;

use crate::ast::{
    ArithmExpr, ArrayExpr, Assign, BinaryCmd, Block, CaseClause, Command, CoprocClause,
    CStyleLoop, DeclClause, File, ForClause, IfClause, LetClause, Loop, ParamExp, PatternList,
    Redirect, Stmt, Subshell, TestExpr, Word, WordPart,
};
use crate::pos::{lookup, Pos};
use crate::token::{BinAritOp, CaseOp};

/// Printer configuration.
///
/// `spaces == 0` indents with one tab per level, `> 0` with that many
/// spaces, `< 0` not at all (line breaks are still emitted).
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintConfig {
    pub spaces: i32,
}

impl PrintConfig {
    /// Format `f` into `w`. Write errors abort printing.
    pub fn print<W: io::Write>(&self, mut w: W, f: &File) -> io::Result<()> {
        let mut p = Printer {
            f,
            spaces: self.spaces,
            out: Vec::new(),
            line_start: 0,
            group: Vec::new(),
            pending_comment: None,
            next_comment: 0,
            pending_hdocs: Vec::new(),
            src_line: 1,
            level: 0,
            cont_bumped: false,
            want_space: false,
            want_newline: false,
            wrote_semi: false,
        };
        p.file();
        w.write_all(&p.out)
    }
}

/// Format `f` into `w` with the default configuration (tab indentation).
pub fn print<W: io::Write>(w: W, f: &File) -> io::Result<()> {
    PrintConfig::default().print(w, f)
}

struct Printer<'a> {
    f: &'a File,
    spaces: i32,
    out: Vec<u8>,
    /// Offset in `out` where the current line begins; completed lines of a
    /// trailing-comment group are held aside and re-inserted here.
    line_start: usize,
    group: Vec<(Vec<u8>, String)>,
    pending_comment: Option<String>,
    next_comment: usize,
    pending_hdocs: Vec<&'a Redirect>,
    /// Source line of the printing cursor; drives blank-line collapsing and
    /// same-line decisions.
    src_line: usize,
    level: usize,
    /// Whether the current statement already added its continuation indent.
    cont_bumped: bool,
    want_space: bool,
    want_newline: bool,
    wrote_semi: bool,
}

impl<'a> Printer<'a> {
    // ── Low-level output ─────────────────────────────────────────────────

    fn out_str(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    fn file_line(&self, pos: Pos) -> usize {
        if pos.is_none() {
            return 0;
        }
        lookup(&self.f.lines, pos).line
    }

    fn at_start(&self) -> bool {
        self.out.is_empty() && self.group.is_empty() && self.pending_comment.is_none()
    }

    fn indent(&mut self) {
        if self.spaces == 0 {
            for _ in 0..self.level {
                self.out.push(b'\t');
            }
        } else if self.spaces > 0 {
            for _ in 0..self.level * self.spaces as usize {
                self.out.push(b' ');
            }
        }
        self.want_space = false;
    }

    fn inc_level(&mut self) {
        self.level += 1;
    }

    fn dec_level(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Emit the held trailing-comment group, aligning every `#` one column
    /// after the group's widest line.
    fn flush_group(&mut self) {
        if self.group.is_empty() {
            return;
        }
        let max = self.group.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
        let mut block = Vec::new();
        for (content, text) in self.group.drain(..) {
            let pad = max - content.len() + 1;
            block.extend_from_slice(&content);
            block.extend(std::iter::repeat(b' ').take(pad));
            block.push(b'#');
            block.extend_from_slice(text.as_bytes());
            block.push(b'\n');
        }
        let tail = self.out.split_off(self.line_start);
        self.out.extend_from_slice(&block);
        self.out.extend_from_slice(&tail);
        self.line_start = self.out.len() - tail.len();
    }

    /// End the current line, then write any pending heredoc bodies with
    /// their stop words.
    fn newline(&mut self) {
        if let Some(text) = self.pending_comment.take() {
            let content = self.out.split_off(self.line_start);
            self.group.push((content, text));
        } else {
            self.flush_group();
            if !self.out.is_empty() {
                self.out.push(b'\n');
            }
            self.line_start = self.out.len();
        }
        if !self.pending_hdocs.is_empty() {
            self.flush_group();
            let hdocs = std::mem::take(&mut self.pending_hdocs);
            for r in hdocs {
                if let Some(body) = &r.hdoc {
                    self.word(body);
                    self.src_line = self.file_line(body.end());
                }
                // a body truncated at EOF may lack its final newline
                if self.out.last() != Some(&b'\n') {
                    self.out.push(b'\n');
                }
                self.unquoted_word(&r.word);
                self.out.push(b'\n');
                self.line_start = self.out.len();
            }
        }
        self.want_space = false;
    }

    fn blank_line(&mut self) {
        self.flush_group();
        self.out.push(b'\n');
        self.line_start = self.out.len();
    }

    /// Line break before a node: newline, at most one preserved blank line,
    /// then indentation.
    fn newline_before(&mut self, pos: Pos) {
        let line = self.file_line(pos);
        if self.at_start() {
            self.indent();
            self.src_line = line;
            return;
        }
        self.newline();
        if line > self.src_line + 1 {
            self.blank_line();
        }
        self.indent();
        self.src_line = line;
    }

    /// Backslash continuation: ` \` + newline + one extra indent level for
    /// the rest of the statement.
    fn bslash_newl(&mut self) {
        self.out_str(" \\");
        self.newline();
        if !self.cont_bumped {
            self.inc_level();
            self.cont_bumped = true;
        }
        self.indent();
    }

    /// Space separator, or a continuation break when the node sits on a
    /// later source line. Heredoc intro lines never break.
    fn space_or_break(&mut self, pos: Pos) {
        if !pos.is_none()
            && self.pending_hdocs.is_empty()
            && self.file_line(pos) > self.src_line
        {
            self.bslash_newl();
            self.src_line = self.file_line(pos);
        } else if self.want_space {
            self.out.push(b' ');
        }
        self.want_space = false;
    }

    // ── Comments ─────────────────────────────────────────────────────────

    /// Print comments positioned before `limit` (source line; 0 = all).
    /// A comment on the line just printed becomes a trailing comment.
    fn comments_until(&mut self, limit: usize) {
        let f = self.f;
        while self.next_comment < f.comments.len() {
            let c = &f.comments[self.next_comment];
            let cline = self.file_line(c.hash);
            if limit > 0 && cline >= limit {
                return;
            }
            self.next_comment += 1;
            if cline <= self.src_line && !self.at_start() {
                self.pending_comment = Some(c.text.clone());
            } else {
                if !self.at_start() {
                    self.newline();
                    if cline > self.src_line + 1 {
                        self.blank_line();
                    }
                }
                self.indent();
                self.out.push(b'#');
                self.out_str(&c.text);
                self.src_line = cline;
            }
        }
    }

    // ── Statements ───────────────────────────────────────────────────────

    fn file(&mut self) {
        let f = self.f;
        for s in &f.stmts {
            self.comments_until(self.file_line(s.pos()));
            self.newline_before(s.pos());
            self.stmt(s);
        }
        self.comments_until(0);
        self.newline();
        self.flush_group();
    }

    fn stmt(&mut self, s: &'a Stmt) {
        let saved_bump = self.cont_bumped;
        self.cont_bumped = false;
        self.wrote_semi = false;
        if s.negated {
            self.space_or_break(s.position);
            self.out_str("!");
            self.want_space = true;
        }
        for a in &s.assigns {
            self.space_or_break(a.pos());
            self.assign(a);
            self.want_space = true;
        }
        let start_redirs = match &s.cmd {
            Some(cmd) => self.command(cmd, s),
            None => 0,
        };
        for r in s.redirs.iter().skip(start_redirs) {
            self.redirect(r);
        }
        if !s.semi_pos.is_none() && self.file_line(s.semi_pos) > self.src_line {
            self.bslash_newl();
            self.out_str(";");
            self.wrote_semi = true;
            self.src_line = self.file_line(s.semi_pos);
        }
        if s.background {
            self.out_str(" &");
        }
        if self.cont_bumped {
            self.dec_level();
        }
        self.cont_bumped = saved_bump;
    }

    fn redirect(&mut self, r: &'a Redirect) {
        self.space_or_break(r.pos());
        if let Some(n) = &r.n {
            self.out_str(&n.value);
        }
        let op = r.op.to_string();
        self.out_str(&op);
        self.word(&r.word);
        if r.op.is_heredoc() {
            self.pending_hdocs.push(r);
        }
        self.want_space = true;
    }

    /// Keyword or `; `-joined keyword, e.g. `then` after a condition.
    fn semi_or_newl(&mut self, word: &str, pos: Pos) {
        if self.wrote_semi {
            self.wrote_semi = false;
            self.out_str(" ");
            self.out_str(word);
        } else if self.want_newline {
            self.newline();
            self.indent();
            self.out_str(word);
        } else {
            self.out_str("; ");
            self.out_str(word);
        }
        self.want_newline = false;
        self.src_line = self.file_line(pos);
        self.want_space = true;
    }

    /// Closing keyword: on its own line after a multi-line body, `; `-joined
    /// after an inline one.
    fn semi_rsrv(&mut self, word: &str, pos: Pos) {
        self.comments_until(self.file_line(pos));
        if self.want_newline || self.file_line(pos) > self.src_line {
            self.newline();
            self.indent();
            self.out_str(word);
        } else {
            self.out_str("; ");
            self.out_str(word);
        }
        self.want_newline = false;
        self.src_line = self.file_line(pos);
        self.want_space = true;
    }

    fn comment_before(&self, line: usize) -> bool {
        self.next_comment < self.f.comments.len()
            && self.file_line(self.f.comments[self.next_comment].hash) < line
    }

    /// A condition or body list: inline with `; ` separators when every
    /// statement starts on the current source line, indented otherwise.
    fn nested_stmts(&mut self, stmts: &'a [Stmt], closing: Pos) {
        let closing_line = self.file_line(closing);
        let inline = if stmts.is_empty() {
            !self.comment_before(closing_line)
        } else {
            stmts.iter().all(|s| self.file_line(s.pos()) == self.src_line)
        };
        if inline {
            for (i, s) in stmts.iter().enumerate() {
                if i > 0 {
                    self.out_str(";");
                    self.want_space = true;
                }
                self.stmt(s);
            }
            self.want_newline = false;
            return;
        }
        self.inc_level();
        for s in stmts {
            self.comments_until(self.file_line(s.pos()));
            self.newline_before(s.pos());
            self.stmt(s);
        }
        self.comments_until(closing_line);
        self.dec_level();
        self.want_newline = true;
    }

    /// Statement group of a block, subshell or command substitution:
    /// multi-line for more than one statement, a statement on its own line,
    /// or a closer below the last statement. A statement joined to the
    /// opener by escaped newlines stays inline.
    fn group_multiline(&self, stmts: &[Stmt], opening: Pos, closing: Pos) -> bool {
        if self.comment_before(self.file_line(closing)) {
            return true;
        }
        match stmts {
            [] => false,
            [s] => {
                self.file_line(s.pos()) > self.file_line(opening)
                    || self.file_line(closing) > self.file_line(s.end())
            }
            _ => true,
        }
    }

    fn group_stmts(&mut self, stmts: &'a [Stmt], closing: Pos) {
        self.inc_level();
        for s in stmts {
            self.comments_until(self.file_line(s.pos()));
            self.newline_before(s.pos());
            self.stmt(s);
        }
        self.comments_until(self.file_line(closing));
        self.dec_level();
        self.newline();
        self.indent();
    }

    // ── Commands ─────────────────────────────────────────────────────────

    fn command(&mut self, cmd: &'a Command, s: &'a Stmt) -> usize {
        match cmd {
            Command::Call(c) => {
                let Some(first) = c.args.first() else {
                    return 0;
                };
                self.space_or_break(first.pos());
                self.word(first);
                self.want_space = true;
                let mut start_redirs = 0;
                if c.args.len() > 1 {
                    for r in &s.redirs {
                        if r.pos() > c.args[1].pos() || r.op.is_heredoc() {
                            break;
                        }
                        self.redirect(r);
                        start_redirs += 1;
                    }
                    for w in &c.args[1..] {
                        self.space_or_break(w.pos());
                        self.word(w);
                        self.want_space = true;
                    }
                }
                start_redirs
            }
            Command::Block(x) => {
                self.block(x);
                0
            }
            Command::Subshell(x) => {
                self.subshell(x);
                0
            }
            Command::If(x) => {
                self.if_clause(x);
                0
            }
            Command::While(x) => {
                self.space_or_break(x.while_pos);
                self.out_str("while");
                self.want_space = true;
                self.nested_stmts(&x.cond_stmts, x.do_pos);
                self.semi_or_newl("do", x.do_pos);
                self.nested_stmts(&x.do_stmts, x.done_pos);
                self.semi_rsrv("done", x.done_pos);
                0
            }
            Command::Until(x) => {
                self.space_or_break(x.until_pos);
                self.out_str("until");
                self.want_space = true;
                self.nested_stmts(&x.cond_stmts, x.do_pos);
                self.semi_or_newl("do", x.do_pos);
                self.nested_stmts(&x.do_stmts, x.done_pos);
                self.semi_rsrv("done", x.done_pos);
                0
            }
            Command::For(x) => {
                self.for_clause(x);
                0
            }
            Command::Case(x) => {
                self.case_clause(x);
                0
            }
            Command::Binary(x) => {
                self.binary_cmd(x);
                0
            }
            Command::FuncDecl(x) => {
                self.space_or_break(x.position);
                if x.bash_style {
                    self.out_str("function ");
                }
                self.out_str(&x.name.value);
                self.out_str("() ");
                self.want_space = false;
                self.stmt(&x.body);
                0
            }
            Command::Arithm(x) => {
                self.space_or_break(x.left);
                self.out_str("((");
                if let Some(expr) = &x.x {
                    self.arithm(expr, false);
                }
                self.out_str("))");
                self.src_line = self.file_line(x.right);
                0
            }
            Command::Test(x) => {
                self.space_or_break(x.left);
                self.out_str("[[ ");
                self.test_expr(&x.x);
                self.out_str(" ]]");
                self.src_line = self.file_line(x.right);
                0
            }
            Command::Decl(x) => {
                self.decl_clause(x);
                0
            }
            Command::Eval(x) => {
                self.space_or_break(x.eval_pos);
                self.out_str("eval");
                self.want_space = true;
                if let Some(stmt) = &x.stmt {
                    self.stmt(stmt);
                }
                0
            }
            Command::Coproc(x) => {
                self.coproc_clause(x);
                0
            }
            Command::Let(x) => {
                self.let_clause(x);
                0
            }
        }
    }

    fn block(&mut self, x: &'a Block) {
        self.space_or_break(x.lbrace);
        if self.group_multiline(&x.stmts, x.lbrace, x.rbrace) {
            self.out_str("{");
            self.group_stmts(&x.stmts, x.rbrace);
            self.out_str("}");
        } else {
            self.out_str("{ ");
            self.want_space = false;
            if let Some(s) = x.stmts.first() {
                self.stmt(s);
                self.out_str("; ");
            }
            self.out_str("}");
        }
        self.src_line = self.file_line(x.rbrace);
        self.want_space = true;
    }

    fn subshell(&mut self, x: &'a Subshell) {
        self.space_or_break(x.lparen);
        self.out_str("(");
        if self.group_multiline(&x.stmts, x.lparen, x.rparen) {
            self.group_stmts(&x.stmts, x.rparen);
        } else {
            self.want_space = false;
            if starts_with_lparen(&x.stmts) {
                self.out_str(" ");
            }
            if let Some(s) = x.stmts.first() {
                self.stmt(s);
            }
        }
        self.out_str(")");
        self.src_line = self.file_line(x.rparen);
        self.want_space = true;
    }

    fn if_clause(&mut self, x: &'a IfClause) {
        self.space_or_break(x.if_pos);
        self.out_str("if");
        self.want_space = true;
        self.nested_stmts(&x.cond_stmts, x.then_pos);
        self.semi_or_newl("then", x.then_pos);
        let then_closing = x
            .elifs
            .first()
            .map(|e| e.elif_pos)
            .unwrap_or(if x.else_pos.is_none() { x.fi_pos } else { x.else_pos });
        self.nested_stmts(&x.then_stmts, then_closing);
        for (i, elif) in x.elifs.iter().enumerate() {
            self.semi_rsrv("elif", elif.elif_pos);
            self.want_space = true;
            self.nested_stmts(&elif.cond_stmts, elif.then_pos);
            self.semi_or_newl("then", elif.then_pos);
            let closing = x
                .elifs
                .get(i + 1)
                .map(|e| e.elif_pos)
                .unwrap_or(if x.else_pos.is_none() { x.fi_pos } else { x.else_pos });
            self.nested_stmts(&elif.then_stmts, closing);
        }
        if !x.else_stmts.is_empty() {
            self.semi_rsrv("else", x.else_pos);
            self.nested_stmts(&x.else_stmts, x.fi_pos);
        }
        self.semi_rsrv("fi", x.fi_pos);
    }

    fn for_clause(&mut self, x: &'a ForClause) {
        self.space_or_break(x.for_pos);
        self.out_str("for ");
        match &x.iter {
            Loop::WordIter(wi) => {
                self.out_str(&wi.name.value);
                if !wi.list.is_empty() {
                    self.out_str(" in");
                    self.want_space = true;
                    for w in &wi.list {
                        self.space_or_break(w.pos());
                        self.word(w);
                        self.want_space = true;
                    }
                }
            }
            Loop::CStyle(cl) => self.cstyle_loop(cl),
        }
        self.want_newline = false;
        self.semi_or_newl("do", x.do_pos);
        self.nested_stmts(&x.do_stmts, x.done_pos);
        self.semi_rsrv("done", x.done_pos);
    }

    fn cstyle_loop(&mut self, cl: &'a CStyleLoop) {
        self.out_str("((");
        if let Some(init) = &cl.init {
            self.arithm(init, false);
        }
        self.out_str("; ");
        if let Some(cond) = &cl.cond {
            self.arithm(cond, false);
        }
        self.out_str("; ");
        if let Some(post) = &cl.post {
            self.arithm(post, false);
        }
        self.out_str("))");
        self.src_line = self.file_line(cl.rparen);
    }

    fn case_clause(&mut self, x: &'a CaseClause) {
        self.space_or_break(x.case_pos);
        self.out_str("case ");
        self.want_space = false;
        self.word(&x.word);
        self.out_str(" in");
        self.inc_level();
        for pl in &x.list {
            self.case_arm(pl);
        }
        self.dec_level();
        self.want_newline = true;
        self.semi_rsrv("esac", x.esac_pos);
    }

    fn case_arm(&mut self, pl: &'a PatternList) {
        let Some(first_pat) = pl.patterns.first() else {
            return;
        };
        self.comments_until(self.file_line(first_pat.pos()));
        self.newline_before(first_pat.pos());
        let pat_line = self.file_line(first_pat.pos());
        for (i, w) in pl.patterns.iter().enumerate() {
            if i > 0 {
                self.out_str(" | ");
            }
            self.word(w);
        }
        self.out_str(")");
        let op = match pl.op {
            CaseOp::Break => ";;",
            CaseOp::Fallthrough => ";&",
            CaseOp::Resume => ";;&",
        };
        let inline = match &pl.stmts[..] {
            [] => true,
            [s] => {
                self.file_line(s.pos()) == pat_line && self.file_line(s.end()) == pat_line
            }
            _ => false,
        };
        if inline {
            if let Some(s) = pl.stmts.first() {
                self.want_space = true;
                self.space_or_break(s.pos());
                self.stmt(s);
            }
            self.out_str(" ");
            self.out_str(op);
        } else {
            self.inc_level();
            for s in &pl.stmts {
                self.comments_until(self.file_line(s.pos()));
                self.newline_before(s.pos());
                self.stmt(s);
            }
            self.comments_until(self.file_line(pl.op_pos));
            self.newline();
            self.indent();
            self.out_str(op);
            self.dec_level();
        }
        self.src_line = self.file_line(pl.op_pos);
        self.want_space = true;
    }

    fn binary_cmd(&mut self, b: &'a BinaryCmd) {
        self.stmt(&b.x);
        let op = b.op.to_string();
        if self.pending_hdocs.is_empty() && self.file_line(b.y.pos()) > self.src_line {
            self.bslash_newl();
            self.out_str(&op);
            self.out_str(" ");
        } else {
            self.out_str(" ");
            self.out_str(&op);
            self.out_str(" ");
        }
        self.src_line = self.file_line(b.y.pos());
        self.want_space = false;
        self.stmt(&b.y);
    }

    fn decl_clause(&mut self, x: &'a DeclClause) {
        self.space_or_break(x.position);
        if x.variant.is_empty() {
            self.out_str("declare");
        } else {
            self.out_str(&x.variant);
        }
        self.want_space = true;
        for w in &x.opts {
            self.space_or_break(w.pos());
            self.word(w);
            self.want_space = true;
        }
        for a in &x.assigns {
            self.space_or_break(a.pos());
            self.assign(a);
            self.want_space = true;
        }
    }

    fn coproc_clause(&mut self, x: &'a CoprocClause) {
        self.space_or_break(x.coproc_pos);
        self.out_str("coproc");
        self.want_space = true;
        if let Some(n) = &x.name {
            self.space_or_break(n.pos());
            self.out_str(&n.value);
            self.want_space = true;
        }
        self.stmt(&x.stmt);
    }

    fn let_clause(&mut self, x: &'a LetClause) {
        self.space_or_break(x.let_pos);
        self.out_str("let");
        for expr in &x.exprs {
            self.out_str(" ");
            self.arithm(expr, true);
        }
        self.want_space = true;
    }

    // ── Words ────────────────────────────────────────────────────────────

    fn word(&mut self, w: &'a Word) {
        for part in &w.parts {
            self.word_part(part);
        }
    }

    fn word_part(&mut self, part: &'a WordPart) {
        match part {
            WordPart::Lit(l) => self.out_str(&l.value),
            WordPart::SglQuoted(q) => {
                if q.dollar {
                    self.out_str("$");
                }
                self.out_str("'");
                self.out_str(&q.value);
                self.out_str("'");
                self.src_line = self.file_line(part.end()).max(self.src_line);
            }
            WordPart::DblQuoted(q) => {
                if q.dollar {
                    self.out_str("$");
                }
                self.out_str("\"");
                for p in &q.parts {
                    self.word_part(p);
                }
                self.out_str("\"");
                self.src_line = self.file_line(part.end()).max(self.src_line);
            }
            WordPart::CmdSubst(c) => {
                self.out_str("$(");
                if self.group_multiline(&c.stmts, c.left, c.right) {
                    self.group_stmts(&c.stmts, c.right);
                } else {
                    self.want_space = false;
                    if starts_with_lparen(&c.stmts) {
                        self.out_str(" ");
                    }
                    if let Some(s) = c.stmts.first() {
                        self.stmt(s);
                    }
                }
                self.out_str(")");
                self.src_line = self.file_line(c.right).max(self.src_line);
            }
            WordPart::ParamExp(pe) => self.param_exp(pe),
            WordPart::ArithmExp(a) => {
                self.out_str(if a.bracket { "$[" } else { "$((" });
                if let Some(x) = &a.x {
                    self.arithm(x, false);
                }
                self.out_str(if a.bracket { "]" } else { "))" });
            }
            WordPart::ProcSubst(ps) => {
                self.out_str(&ps.op.to_string());
                if self.group_multiline(&ps.stmts, ps.op_pos, ps.rparen) {
                    self.group_stmts(&ps.stmts, ps.rparen);
                } else {
                    self.want_space = false;
                    if let Some(s) = ps.stmts.first() {
                        self.stmt(s);
                    }
                }
                self.out_str(")");
                self.src_line = self.file_line(ps.rparen).max(self.src_line);
            }
            WordPart::ExtGlob(eg) => {
                self.out_str(&eg.op.to_string());
                self.out_str(&eg.pattern.value);
                self.out_str(")");
            }
        }
    }

    fn param_exp(&mut self, pe: &'a ParamExp) {
        if pe.short {
            self.out_str("$");
            if let Some(p) = &pe.param {
                self.out_str(&p.value);
            }
            return;
        }
        self.out_str("${");
        if pe.length {
            self.out_str("#");
        }
        if let Some(p) = &pe.param {
            self.out_str(&p.value);
        }
        if let Some(ind) = &pe.ind {
            self.out_str("[");
            self.arithm(&ind.expr, true);
            self.out_str("]");
        }
        if let Some(slice) = &pe.slice {
            self.out_str(":");
            if let Some(off) = &slice.offset {
                self.arithm(off, true);
            }
            if let Some(len) = &slice.length {
                self.out_str(":");
                self.arithm(len, true);
            }
        }
        if let Some(repl) = &pe.repl {
            self.out_str("/");
            if repl.all {
                self.out_str("/");
            }
            self.word(&repl.orig);
            self.out_str("/");
            self.word(&repl.with);
        }
        if let Some(exp) = &pe.exp {
            self.out_str(&exp.op.to_string());
            self.word(&exp.word);
        }
        self.out_str("}");
    }

    /// The word with one layer of quoting removed; used for heredoc stop
    /// words on their terminating line.
    fn unquoted_word(&mut self, w: &Word) {
        for part in &w.parts {
            match part {
                WordPart::Lit(l) => match l.value.strip_prefix('\\') {
                    Some(rest) => self.out_str(rest),
                    None => self.out_str(&l.value),
                },
                WordPart::SglQuoted(q) => self.out_str(&q.value),
                WordPart::DblQuoted(q) => {
                    for p in &q.parts {
                        if let WordPart::Lit(l) = p {
                            self.out_str(&l.value);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    // ── Expressions ──────────────────────────────────────────────────────

    fn arithm(&mut self, x: &'a ArithmExpr, compact: bool) {
        match x {
            ArithmExpr::Word(w) => self.word(w),
            ArithmExpr::Binary(b) => {
                self.arithm(&b.x, compact);
                if compact {
                    self.out_str(&b.op.to_string());
                } else if b.op == BinAritOp::Comma {
                    self.out_str(", ");
                } else {
                    self.out_str(" ");
                    self.out_str(&b.op.to_string());
                    self.out_str(" ");
                }
                self.arithm(&b.y, compact);
            }
            ArithmExpr::Unary(u) => {
                if u.post {
                    self.arithm(&u.x, compact);
                    self.out_str(&u.op.to_string());
                } else {
                    self.out_str(&u.op.to_string());
                    // keep sign runs from merging into -- or ++
                    if !compact && matches!(&u.x, ArithmExpr::Unary(i) if !i.post) {
                        self.out_str(" ");
                    }
                    self.arithm(&u.x, compact);
                }
            }
            ArithmExpr::Paren(p) => {
                self.out_str("(");
                self.arithm(&p.x, compact);
                self.out_str(")");
            }
        }
    }

    fn test_expr(&mut self, x: &'a TestExpr) {
        match x {
            TestExpr::Word(w) => self.word(w),
            TestExpr::Binary(b) => {
                self.test_expr(&b.x);
                self.out_str(" ");
                self.out_str(&b.op.to_string());
                self.out_str(" ");
                self.test_expr(&b.y);
            }
            TestExpr::Unary(u) => {
                self.out_str(&u.op.to_string());
                self.out_str(" ");
                self.test_expr(&u.x);
            }
            TestExpr::Paren(p) => {
                self.out_str("(");
                self.test_expr(&p.x);
                self.out_str(")");
            }
        }
    }

    fn assign(&mut self, a: &'a Assign) {
        if let Some(name) = &a.name {
            self.out_str(&name.value);
            self.out_str(if a.append { "+=" } else { "=" });
        }
        if let Some(arr) = &a.array {
            self.array_expr(arr);
        } else if let Some(w) = &a.value {
            self.word(w);
        }
    }

    fn array_expr(&mut self, arr: &'a ArrayExpr) {
        self.out_str("(");
        if self.file_line(arr.rparen) > self.file_line(arr.lparen) {
            self.inc_level();
            for w in &arr.elems {
                self.comments_until(self.file_line(w.pos()));
                self.newline_before(w.pos());
                self.word(w);
            }
            self.comments_until(self.file_line(arr.rparen));
            self.dec_level();
            self.newline();
            self.indent();
        } else {
            for (i, w) in arr.elems.iter().enumerate() {
                if i > 0 {
                    self.out_str(" ");
                }
                self.word(w);
            }
        }
        self.out_str(")");
        self.src_line = self.file_line(arr.rparen);
    }
}

/// Whether the group opens with a `(`-starting command, which would collide
/// with the enclosing `(` without a separating space.
fn starts_with_lparen(stmts: &[Stmt]) -> bool {
    let Some(s) = stmts.first() else {
        return false;
    };
    match &s.cmd {
        Some(Command::Subshell(_)) | Some(Command::Arithm(_)) => true,
        Some(Command::Binary(b)) => starts_with_lparen(std::slice::from_ref(&b.x)),
        _ => false,
    }
}

#[cfg(test)]
#[path = "printer_tests/mod.rs"]
mod tests;
