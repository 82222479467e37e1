// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract syntax tree for shell programs.
//!
//! Every node reports its half-open source extent through `pos()` and
//! `end()`: `pos()` is the first byte of the node, `end()` the byte just past
//! its last one. Both are 1-based and stable for the lifetime of the owning
//! [`File`].

use crate::pos::{lookup, Pos, Position};
use crate::token::{
    BinAritOp, BinCmdOp, BinTestOp, CaseOp, GlobOp, ParExpOp, ProcOp, RedirOp, UnAritOp, UnTestOp,
};

/// A parsed shell program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    /// Name the source was parsed under; may be empty.
    pub name: String,
    /// 0-based byte offsets of line starts; entry 0 is always 0.
    pub lines: Vec<usize>,
    /// Comments, in source order. Empty unless parsing retained them.
    pub comments: Vec<Comment>,
    pub stmts: Vec<Stmt>,
}

impl File {
    /// Resolve a [`Pos`] to its line and column.
    pub fn position(&self, pos: Pos) -> Position {
        lookup(&self.lines, pos)
    }

    pub fn pos(&self) -> Pos {
        self.stmts.first().map_or(Pos::NONE, Stmt::pos)
    }

    pub fn end(&self) -> Pos {
        self.stmts.last().map_or(Pos::NONE, Stmt::end)
    }
}

/// A `#` comment, body stored without the leading `#`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub hash: Pos,
    pub text: String,
}

impl Comment {
    pub fn pos(&self) -> Pos {
        self.hash
    }

    pub fn end(&self) -> Pos {
        Pos(self.hash.0 + 1 + self.text.len())
    }
}

/// A statement: one command with its prefixes and suffixes.
///
/// Separators are not stored; a trailing `;` leaves its position in
/// `semi_pos`, a trailing `&` sets `background`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub position: Pos,
    /// Position of the terminating `;`, or [`Pos::NONE`].
    pub semi_pos: Pos,
    /// `!` prefix.
    pub negated: bool,
    pub background: bool,
    pub assigns: Vec<Assign>,
    pub redirs: Vec<Redirect>,
    /// `None` for assignment-only or redirect-only statements.
    pub cmd: Option<Command>,
}

impl Stmt {
    pub fn pos(&self) -> Pos {
        self.position
    }

    pub fn end(&self) -> Pos {
        let mut end = self.position;
        if self.negated {
            end = Pos(end.0 + 1);
        }
        if let Some(cmd) = &self.cmd {
            end = end.max(cmd.end());
        }
        if let Some(a) = self.assigns.last() {
            end = end.max(a.end());
        }
        if let Some(r) = self.redirs.last() {
            end = end.max(r.end());
        }
        end
    }
}

/// The command head of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Call(CallExpr),
    Block(Block),
    Subshell(Subshell),
    If(Box<IfClause>),
    While(WhileClause),
    Until(UntilClause),
    For(Box<ForClause>),
    Case(Box<CaseClause>),
    Binary(Box<BinaryCmd>),
    FuncDecl(Box<FuncDecl>),
    Arithm(ArithmCmd),
    Test(Box<TestClause>),
    Decl(DeclClause),
    Eval(Box<EvalClause>),
    Coproc(Box<CoprocClause>),
    Let(LetClause),
}

impl Command {
    pub fn pos(&self) -> Pos {
        match self {
            Command::Call(c) => c.pos(),
            Command::Block(c) => c.lbrace,
            Command::Subshell(c) => c.lparen,
            Command::If(c) => c.if_pos,
            Command::While(c) => c.while_pos,
            Command::Until(c) => c.until_pos,
            Command::For(c) => c.for_pos,
            Command::Case(c) => c.case_pos,
            Command::Binary(c) => c.x.pos(),
            Command::FuncDecl(c) => c.position,
            Command::Arithm(c) => c.left,
            Command::Test(c) => c.left,
            Command::Decl(c) => c.position,
            Command::Eval(c) => c.eval_pos,
            Command::Coproc(c) => c.coproc_pos,
            Command::Let(c) => c.let_pos,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Command::Call(c) => c.end(),
            Command::Block(c) => Pos(c.rbrace.0 + 1),
            Command::Subshell(c) => Pos(c.rparen.0 + 1),
            Command::If(c) => Pos(c.fi_pos.0 + 2),
            Command::While(c) => Pos(c.done_pos.0 + 4),
            Command::Until(c) => Pos(c.done_pos.0 + 4),
            Command::For(c) => Pos(c.done_pos.0 + 4),
            Command::Case(c) => Pos(c.esac_pos.0 + 4),
            Command::Binary(c) => c.y.end(),
            Command::FuncDecl(c) => c.body.end(),
            Command::Arithm(c) => Pos(c.right.0 + 2),
            Command::Test(c) => Pos(c.right.0 + 2),
            Command::Decl(c) => c.end(),
            Command::Eval(c) => c.stmt.as_ref().map_or(Pos(c.eval_pos.0 + 4), Stmt::end),
            Command::Coproc(c) => c.stmt.end(),
            Command::Let(c) => c.exprs.last().map_or(Pos(c.let_pos.0 + 3), ArithmExpr::end),
        }
    }
}

/// A simple command: a list of words, the first being the command name.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub args: Vec<Word>,
}

impl CallExpr {
    pub fn pos(&self) -> Pos {
        self.args.first().map_or(Pos::NONE, Word::pos)
    }

    pub fn end(&self) -> Pos {
        self.args.last().map_or(Pos::NONE, Word::end)
    }
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub lbrace: Pos,
    pub rbrace: Pos,
    pub stmts: Vec<Stmt>,
}

/// `( ... )`
#[derive(Debug, Clone, PartialEq)]
pub struct Subshell {
    pub lparen: Pos,
    pub rparen: Pos,
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub if_pos: Pos,
    pub then_pos: Pos,
    /// Position of `else`, or [`Pos::NONE`].
    pub else_pos: Pos,
    pub fi_pos: Pos,
    pub cond_stmts: Vec<Stmt>,
    pub then_stmts: Vec<Stmt>,
    pub elifs: Vec<Elif>,
    pub else_stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Elif {
    pub elif_pos: Pos,
    pub then_pos: Pos,
    pub cond_stmts: Vec<Stmt>,
    pub then_stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileClause {
    pub while_pos: Pos,
    pub do_pos: Pos,
    pub done_pos: Pos,
    pub cond_stmts: Vec<Stmt>,
    pub do_stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UntilClause {
    pub until_pos: Pos,
    pub do_pos: Pos,
    pub done_pos: Pos,
    pub cond_stmts: Vec<Stmt>,
    pub do_stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForClause {
    pub for_pos: Pos,
    pub do_pos: Pos,
    pub done_pos: Pos,
    pub iter: Loop,
    pub do_stmts: Vec<Stmt>,
}

/// The header of a `for` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Loop {
    /// `for name [in word...]`
    WordIter(WordIter),
    /// `for ((init; cond; post))`
    CStyle(CStyleLoop),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordIter {
    pub name: Lit,
    pub list: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CStyleLoop {
    pub lparen: Pos,
    pub rparen: Pos,
    pub init: Option<ArithmExpr>,
    pub cond: Option<ArithmExpr>,
    pub post: Option<ArithmExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub case_pos: Pos,
    pub esac_pos: Pos,
    pub word: Word,
    pub list: Vec<PatternList>,
}

/// One `pattern[|pattern...]) body ;;` arm of a case clause.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternList {
    pub op: CaseOp,
    pub op_pos: Pos,
    pub patterns: Vec<Word>,
    pub stmts: Vec<Stmt>,
}

/// Two statements joined by `&&`, `||`, `|` or `|&`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCmd {
    pub op: BinCmdOp,
    pub op_pos: Pos,
    pub x: Stmt,
    pub y: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub position: Pos,
    /// Declared with the `function` keyword.
    pub bash_style: bool,
    pub name: Lit,
    pub body: Stmt,
}

/// `((expr))`
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmCmd {
    pub left: Pos,
    pub right: Pos,
    pub x: Option<ArithmExpr>,
}

/// `[[ expr ]]`
#[derive(Debug, Clone, PartialEq)]
pub struct TestClause {
    pub left: Pos,
    pub right: Pos,
    pub x: TestExpr,
}

/// `declare`-family command. `variant` is empty for `declare` itself
/// (`typeset` normalises to it) and holds the keyword for `local`,
/// `export`, `readonly` and `nameref`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclClause {
    pub position: Pos,
    pub variant: String,
    pub opts: Vec<Word>,
    pub assigns: Vec<Assign>,
}

impl DeclClause {
    fn end(&self) -> Pos {
        let name_len = if self.variant.is_empty() { 7 } else { self.variant.len() };
        let mut end = Pos(self.position.0 + name_len);
        if let Some(w) = self.opts.last() {
            end = end.max(w.end());
        }
        if let Some(a) = self.assigns.last() {
            end = end.max(a.end());
        }
        end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalClause {
    pub eval_pos: Pos,
    pub stmt: Option<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoprocClause {
    pub coproc_pos: Pos,
    pub name: Option<Lit>,
    pub stmt: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetClause {
    pub let_pos: Pos,
    pub exprs: Vec<ArithmExpr>,
}

// ── Words ────────────────────────────────────────────────────────────────

/// An ordered, non-empty sequence of parts forming one shell word.
///
/// Adjacent unquoted literals are merged during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub parts: Vec<WordPart>,
}

impl Word {
    pub fn pos(&self) -> Pos {
        self.parts.first().map_or(Pos::NONE, WordPart::pos)
    }

    pub fn end(&self) -> Pos {
        self.parts.last().map_or(Pos::NONE, WordPart::end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WordPart {
    Lit(Lit),
    SglQuoted(SglQuoted),
    DblQuoted(DblQuoted),
    CmdSubst(CmdSubst),
    ParamExp(Box<ParamExp>),
    ArithmExp(ArithmExp),
    ProcSubst(ProcSubst),
    ExtGlob(ExtGlob),
}

impl WordPart {
    pub fn pos(&self) -> Pos {
        match self {
            WordPart::Lit(p) => p.value_pos,
            WordPart::SglQuoted(p) => p.position,
            WordPart::DblQuoted(p) => p.position,
            WordPart::CmdSubst(p) => p.left,
            WordPart::ParamExp(p) => p.dollar,
            WordPart::ArithmExp(p) => p.left,
            WordPart::ProcSubst(p) => p.op_pos,
            WordPart::ExtGlob(p) => p.op_pos,
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            WordPart::Lit(p) => p.value_end,
            WordPart::SglQuoted(p) => {
                let quotes = if p.dollar { 3 } else { 2 };
                Pos(p.position.0 + p.value.len() + quotes)
            }
            WordPart::DblQuoted(p) => match p.parts.last() {
                Some(last) => Pos(last.end().0 + 1),
                None => Pos(p.position.0 + if p.dollar { 3 } else { 2 }),
            },
            WordPart::CmdSubst(p) => Pos(p.right.0 + 1),
            WordPart::ParamExp(p) => p.end(),
            WordPart::ArithmExp(p) => Pos(p.right.0 + if p.bracket { 1 } else { 2 }),
            WordPart::ProcSubst(p) => Pos(p.rparen.0 + 1),
            WordPart::ExtGlob(p) => Pos(p.pattern.value_end.0 + 1),
        }
    }
}

/// A raw literal fragment.
///
/// `value` keeps source escapes; its length can differ from the span when a
/// backslash-newline continuation was elided.
#[derive(Debug, Clone, PartialEq)]
pub struct Lit {
    pub value_pos: Pos,
    pub value_end: Pos,
    pub value: String,
}

impl Lit {
    pub fn pos(&self) -> Pos {
        self.value_pos
    }

    pub fn end(&self) -> Pos {
        self.value_end
    }
}

/// `'...'`, or `$'...'` when `dollar` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SglQuoted {
    pub position: Pos,
    pub dollar: bool,
    pub value: String,
}

/// `"..."`, or `$"..."` when `dollar` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct DblQuoted {
    pub position: Pos,
    pub dollar: bool,
    pub parts: Vec<WordPart>,
}

/// `$(...)` or `` `...` ``; backquote form is canonicalised on print.
#[derive(Debug, Clone, PartialEq)]
pub struct CmdSubst {
    pub left: Pos,
    pub right: Pos,
    pub stmts: Vec<Stmt>,
}

/// `${...}`, or the short `$name` form when `short` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamExp {
    pub dollar: Pos,
    pub rbrace: Pos,
    pub short: bool,
    /// `${#...}` length form.
    pub length: bool,
    pub param: Option<Lit>,
    pub ind: Option<Index>,
    pub slice: Option<Slice>,
    pub repl: Option<Replace>,
    pub exp: Option<Expansion>,
}

impl ParamExp {
    pub fn pos(&self) -> Pos {
        self.dollar
    }

    pub fn end(&self) -> Pos {
        if self.short {
            self.param.as_ref().map_or(Pos(self.dollar.0 + 1), Lit::end)
        } else {
            Pos(self.rbrace.0 + 1)
        }
    }
}

/// `[expr]` array index.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub expr: ArithmExpr,
}

/// `:offset[:length]` slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub offset: Option<ArithmExpr>,
    pub length: Option<ArithmExpr>,
}

/// `/orig/with` search and replace; `//` replaces all matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Replace {
    pub all: bool,
    pub orig: Word,
    pub with: Word,
}

/// An expansion operator and its word, e.g. `:-default`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub op: ParExpOp,
    pub word: Word,
}

/// `$((expr))`, or `$[expr]` when `bracket` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmExp {
    pub left: Pos,
    pub right: Pos,
    pub bracket: bool,
    pub x: Option<ArithmExpr>,
}

/// `<(...)` or `>(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcSubst {
    pub op: ProcOp,
    pub op_pos: Pos,
    pub rparen: Pos,
    pub stmts: Vec<Stmt>,
}

/// `?(...)`-family extended glob; the pattern is kept raw.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtGlob {
    pub op: GlobOp,
    pub op_pos: Pos,
    pub pattern: Lit,
}

// ── Arithmetic expressions ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ArithmExpr {
    Binary(Box<BinaryArithm>),
    Unary(Box<UnaryArithm>),
    Paren(Box<ParenArithm>),
    Word(Word),
}

impl ArithmExpr {
    pub fn pos(&self) -> Pos {
        match self {
            ArithmExpr::Binary(x) => x.x.pos(),
            ArithmExpr::Unary(x) => {
                if x.post {
                    x.x.pos()
                } else {
                    x.op_pos
                }
            }
            ArithmExpr::Paren(x) => x.lparen,
            ArithmExpr::Word(w) => w.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            ArithmExpr::Binary(x) => x.y.end(),
            ArithmExpr::Unary(x) => {
                if x.post {
                    Pos(x.op_pos.0 + 2)
                } else {
                    x.x.end()
                }
            }
            ArithmExpr::Paren(x) => Pos(x.rparen.0 + 1),
            ArithmExpr::Word(w) => w.end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryArithm {
    pub op: BinAritOp,
    pub op_pos: Pos,
    pub x: ArithmExpr,
    pub y: ArithmExpr,
}

/// Prefix operator application, or postfix `++`/`--` when `post` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryArithm {
    pub op: UnAritOp,
    pub op_pos: Pos,
    pub post: bool,
    pub x: ArithmExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenArithm {
    pub lparen: Pos,
    pub rparen: Pos,
    pub x: ArithmExpr,
}

// ── Test expressions ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TestExpr {
    Binary(Box<BinaryTest>),
    Unary(Box<UnaryTest>),
    Paren(Box<ParenTest>),
    Word(Word),
}

impl TestExpr {
    pub fn pos(&self) -> Pos {
        match self {
            TestExpr::Binary(x) => x.x.pos(),
            TestExpr::Unary(x) => x.op_pos,
            TestExpr::Paren(x) => x.lparen,
            TestExpr::Word(w) => w.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            TestExpr::Binary(x) => x.y.end(),
            TestExpr::Unary(x) => x.x.end(),
            TestExpr::Paren(x) => Pos(x.rparen.0 + 1),
            TestExpr::Word(w) => w.end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryTest {
    pub op: BinTestOp,
    pub op_pos: Pos,
    pub x: TestExpr,
    pub y: TestExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryTest {
    pub op: UnTestOp,
    pub op_pos: Pos,
    pub x: TestExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenTest {
    pub lparen: Pos,
    pub rparen: Pos,
    pub x: TestExpr,
}

// ── Redirects and assignments ────────────────────────────────────────────

/// One redirection.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    /// Optional file descriptor literal, as in `2>`.
    pub n: Option<Lit>,
    pub op: RedirOp,
    pub op_pos: Pos,
    /// Target word, or the stop word for heredocs.
    pub word: Word,
    /// Heredoc body; attached before `parse` returns.
    pub hdoc: Option<Word>,
}

impl Redirect {
    pub fn pos(&self) -> Pos {
        self.n.as_ref().map_or(self.op_pos, Lit::pos)
    }

    pub fn end(&self) -> Pos {
        self.word.end()
    }
}

/// `name=value`, `name+=value`, or a free word in declare context.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub append: bool,
    pub name: Option<Lit>,
    pub value: Option<Word>,
    pub array: Option<ArrayExpr>,
}

impl Assign {
    pub fn pos(&self) -> Pos {
        match (&self.name, &self.value) {
            (Some(name), _) => name.pos(),
            (None, Some(w)) => w.pos(),
            (None, None) => Pos::NONE,
        }
    }

    pub fn end(&self) -> Pos {
        if let Some(a) = &self.array {
            return Pos(a.rparen.0 + 1);
        }
        if let Some(w) = &self.value {
            return w.end();
        }
        match &self.name {
            Some(name) => Pos(name.end().0 + if self.append { 2 } else { 1 }),
            None => Pos::NONE,
        }
    }
}

/// `(a b c)` array literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub lparen: Pos,
    pub rparen: Pos,
    pub elems: Vec<Word>,
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
