// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token set, operator enums, and lexical modes.

use std::fmt;

/// A lexical token.
///
/// Reserved words (`if`, `{`, `[[`, ...) are not tokens; they arrive as
/// [`Token::LitWord`] values and are matched by the parser. Statement
/// separators likewise never survive into the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Sentinel: no token, or token production stopped.
    Illegal,
    Eof,
    /// A literal fragment; more word parts may follow without a break.
    Lit,
    /// A literal that was terminated by a word break.
    LitWord,

    SglQuote,
    DblQuote,
    BckQuote,

    Dollar,
    DollSglQuote,
    DollDblQuote,
    DollBrace,
    DollBrack,
    DollParen,
    DollDblParen,

    LeftParen,
    RightParen,
    DblLeftParen,
    DblRightParen,
    LeftBrack,
    RightBrack,
    RightBrace,

    Semicolon,
    DblSemicolon,
    SemiFall,
    DblSemiFall,

    And,
    AndAnd,
    Or,
    OrOr,
    PipeAll,

    RdrOut,
    AppOut,
    RdrIn,
    RdrInOut,
    DplIn,
    DplOut,
    ClbOut,
    Hdoc,
    DashHdoc,
    WordHdoc,
    RdrAll,
    AppAll,
    CmdIn,
    CmdOut,

    GlobQuest,
    GlobStar,
    GlobPlus,
    GlobAt,
    GlobExcl,

    Colon,
    ColPlus,
    ColMinus,
    ColQuest,
    ColAssgn,
    Plus,
    Minus,
    Quest,
    Assgn,
    Perc,
    DblPerc,
    Hash,
    DblHash,
    Caret,
    DblCaret,
    Comma,
    DblComma,
    Slash,
    DblSlash,
    Star,
    DblStar,

    ExclMark,
    AddAdd,
    SubSub,
    Eql,
    Neq,
    Leq,
    Geq,
    AddAssgn,
    SubAssgn,
    MulAssgn,
    QuoAssgn,
    RemAssgn,
    AndAssgn,
    OrAssgn,
    XorAssgn,
    ShlAssgn,
    ShrAssgn,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Token::Illegal => "token",
            Token::Eof => "EOF",
            Token::Lit | Token::LitWord => "word",
            Token::SglQuote => "'",
            Token::DblQuote => "\"",
            Token::BckQuote => "`",
            Token::Dollar => "$",
            Token::DollSglQuote => "$'",
            Token::DollDblQuote => "$\"",
            Token::DollBrace => "${",
            Token::DollBrack => "$[",
            Token::DollParen => "$(",
            Token::DollDblParen => "$((",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::DblLeftParen => "((",
            Token::DblRightParen => "))",
            Token::LeftBrack => "[",
            Token::RightBrack => "]",
            Token::RightBrace => "}",
            Token::Semicolon => ";",
            Token::DblSemicolon => ";;",
            Token::SemiFall => ";&",
            Token::DblSemiFall => ";;&",
            Token::And => "&",
            Token::AndAnd => "&&",
            Token::Or => "|",
            Token::OrOr => "||",
            Token::PipeAll => "|&",
            Token::RdrOut => ">",
            Token::AppOut => ">>",
            Token::RdrIn => "<",
            Token::RdrInOut => "<>",
            Token::DplIn => "<&",
            Token::DplOut => ">&",
            Token::ClbOut => ">|",
            Token::Hdoc => "<<",
            Token::DashHdoc => "<<-",
            Token::WordHdoc => "<<<",
            Token::RdrAll => "&>",
            Token::AppAll => "&>>",
            Token::CmdIn => "<(",
            Token::CmdOut => ">(",
            Token::GlobQuest => "?(",
            Token::GlobStar => "*(",
            Token::GlobPlus => "+(",
            Token::GlobAt => "@(",
            Token::GlobExcl => "!(",
            Token::Colon => ":",
            Token::ColPlus => ":+",
            Token::ColMinus => ":-",
            Token::ColQuest => ":?",
            Token::ColAssgn => ":=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Quest => "?",
            Token::Assgn => "=",
            Token::Perc => "%",
            Token::DblPerc => "%%",
            Token::Hash => "#",
            Token::DblHash => "##",
            Token::Caret => "^",
            Token::DblCaret => "^^",
            Token::Comma => ",",
            Token::DblComma => ",,",
            Token::Slash => "/",
            Token::DblSlash => "//",
            Token::Star => "*",
            Token::DblStar => "**",
            Token::ExclMark => "!",
            Token::AddAdd => "++",
            Token::SubSub => "--",
            Token::Eql => "==",
            Token::Neq => "!=",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::AddAssgn => "+=",
            Token::SubAssgn => "-=",
            Token::MulAssgn => "*=",
            Token::QuoAssgn => "/=",
            Token::RemAssgn => "%=",
            Token::AndAssgn => "&=",
            Token::OrAssgn => "|=",
            Token::XorAssgn => "^=",
            Token::ShlAssgn => "<<=",
            Token::ShrAssgn => ">>=",
        })
    }
}

impl Token {
    pub(crate) fn is_redirect(&self) -> bool {
        matches!(
            self,
            Token::RdrOut
                | Token::AppOut
                | Token::RdrIn
                | Token::RdrInOut
                | Token::DplIn
                | Token::DplOut
                | Token::ClbOut
                | Token::Hdoc
                | Token::DashHdoc
                | Token::WordHdoc
                | Token::RdrAll
                | Token::AppAll
        )
    }

    /// Tokens that terminate a word sequence inside a statement.
    pub(crate) fn stops_stmt(&self) -> bool {
        matches!(
            self,
            Token::Eof
                | Token::Semicolon
                | Token::And
                | Token::Or
                | Token::AndAnd
                | Token::OrOr
                | Token::PipeAll
                | Token::DblSemicolon
                | Token::SemiFall
                | Token::DblSemiFall
                | Token::RightParen
        )
    }
}

/// Bytes that end an unquoted word.
#[inline]
pub(crate) fn word_break(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b';' | b'&' | b'>' | b'<' | b'|' | b'(' | b')')
}

/// The lexical mode driving token production.
///
/// The parser saves and restores modes around nested constructs; the lexer
/// itself only ever looks at the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LexMode {
    /// Top level and plain command words.
    #[default]
    Regular,
    /// Inside `$(...)`; closes on `)`.
    SubCmd,
    /// Inside backquotes; closes on `` ` ``.
    SubCmdBckquo,
    /// Inside `$'...'`.
    SglQuotes,
    /// Inside `"..."`.
    DblQuotes,
    /// Scanning the stop word of a heredoc.
    HdocWord,
    /// Scanning a heredoc body.
    HdocBody,
    /// Scanning a `<<-` heredoc body; tabs are stripped before comparing
    /// lines against the stop word.
    HdocBodyTabs,
    ArithmExpr,
    ArithmExprLet,
    ArithmExprCmd,
    ArithmExprBrack,
    /// Right-hand side of `=~`.
    TestRegexp,
    /// Case clause body; `;;`-family tokens close it.
    SwitchCase,
    ParamExpName,
    ParamExpInd,
    ParamExpOff,
    ParamExpLen,
    ParamExpRepl,
    ParamExpExp,
}

impl LexMode {
    /// Modes whose tokens come from the regular operator table.
    pub(crate) fn is_reg(self) -> bool {
        matches!(
            self,
            LexMode::Regular
                | LexMode::SubCmd
                | LexMode::SubCmdBckquo
                | LexMode::HdocWord
                | LexMode::SwitchCase
        )
    }

    /// All arithmetic-expression modes, including `${...}` index, offset
    /// and length sub-expressions.
    pub(crate) fn is_arithm(self) -> bool {
        matches!(
            self,
            LexMode::ArithmExpr
                | LexMode::ArithmExprLet
                | LexMode::ArithmExprCmd
                | LexMode::ArithmExprBrack
                | LexMode::ParamExpInd
                | LexMode::ParamExpOff
                | LexMode::ParamExpLen
        )
    }

    /// Modes in which `]` closes the expression.
    pub(crate) fn closes_brack(self) -> bool {
        matches!(self, LexMode::ArithmExprBrack | LexMode::ParamExpInd)
    }

    /// Arithmetic sub-expressions of `${...}` where `:` terminates rather
    /// than acting as the ternary operator.
    pub(crate) fn is_param_arith(self) -> bool {
        matches!(self, LexMode::ParamExpInd | LexMode::ParamExpOff | LexMode::ParamExpLen)
    }
}

// ── Operator enums ───────────────────────────────────────────────────────

macro_rules! op_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $($name::$variant => $str),+
                })
            }
        }
    };
}

op_enum! {
    /// Redirection operators.
    RedirOp {
        Out => ">",
        Append => ">>",
        In => "<",
        InOut => "<>",
        DupIn => "<&",
        DupOut => ">&",
        Clobber => ">|",
        Hdoc => "<<",
        DashHdoc => "<<-",
        WordHdoc => "<<<",
        All => "&>",
        AppendAll => "&>>",
    }
}

impl RedirOp {
    pub(crate) fn from_token(tok: Token) -> Option<RedirOp> {
        Some(match tok {
            Token::RdrOut => RedirOp::Out,
            Token::AppOut => RedirOp::Append,
            Token::RdrIn => RedirOp::In,
            Token::RdrInOut => RedirOp::InOut,
            Token::DplIn => RedirOp::DupIn,
            Token::DplOut => RedirOp::DupOut,
            Token::ClbOut => RedirOp::Clobber,
            Token::Hdoc => RedirOp::Hdoc,
            Token::DashHdoc => RedirOp::DashHdoc,
            Token::WordHdoc => RedirOp::WordHdoc,
            Token::RdrAll => RedirOp::All,
            Token::AppAll => RedirOp::AppendAll,
            _ => return None,
        })
    }

    pub(crate) fn is_heredoc(&self) -> bool {
        matches!(self, RedirOp::Hdoc | RedirOp::DashHdoc)
    }
}

op_enum! {
    /// Binary statement operators: logical chains and pipes.
    BinCmdOp {
        AndStmt => "&&",
        OrStmt => "||",
        Pipe => "|",
        PipeAll => "|&",
    }
}

impl BinCmdOp {
    pub(crate) fn from_token(tok: Token) -> Option<BinCmdOp> {
        Some(match tok {
            Token::AndAnd => BinCmdOp::AndStmt,
            Token::OrOr => BinCmdOp::OrStmt,
            Token::Or => BinCmdOp::Pipe,
            Token::PipeAll => BinCmdOp::PipeAll,
            _ => return None,
        })
    }
}

op_enum! {
    /// Case pattern-list terminators.
    CaseOp {
        Break => ";;",
        Fallthrough => ";&",
        Resume => ";;&",
    }
}

impl CaseOp {
    pub(crate) fn from_token(tok: Token) -> Option<CaseOp> {
        Some(match tok {
            Token::DblSemicolon => CaseOp::Break,
            Token::SemiFall => CaseOp::Fallthrough,
            Token::DblSemiFall => CaseOp::Resume,
            _ => return None,
        })
    }
}

op_enum! {
    /// Extended glob openers; the pattern runs to the matching `)`.
    GlobOp {
        Question => "?(",
        Star => "*(",
        Plus => "+(",
        At => "@(",
        Negate => "!(",
    }
}

op_enum! {
    /// Process substitution operators.
    ProcOp {
        CmdIn => "<(",
        CmdOut => ">(",
    }
}

op_enum! {
    /// Unary arithmetic operators; `Inc` and `Dec` may also be postfix.
    UnAritOp {
        Not => "!",
        Inc => "++",
        Dec => "--",
        Plus => "+",
        Minus => "-",
    }
}

impl UnAritOp {
    pub(crate) fn from_token(tok: Token) -> Option<UnAritOp> {
        Some(match tok {
            Token::ExclMark => UnAritOp::Not,
            Token::AddAdd => UnAritOp::Inc,
            Token::SubSub => UnAritOp::Dec,
            Token::Plus => UnAritOp::Plus,
            Token::Minus => UnAritOp::Minus,
            _ => return None,
        })
    }
}

op_enum! {
    /// Binary arithmetic operators, from `,` (loosest) to `**` (tightest).
    BinAritOp {
        Comma => ",",
        AddAssgn => "+=",
        SubAssgn => "-=",
        MulAssgn => "*=",
        QuoAssgn => "/=",
        RemAssgn => "%=",
        AndAssgn => "&=",
        OrAssgn => "|=",
        XorAssgn => "^=",
        ShlAssgn => "<<=",
        ShrAssgn => ">>=",
        Assgn => "=",
        Quest => "?",
        Colon => ":",
        AndArit => "&&",
        OrArit => "||",
        And => "&",
        Or => "|",
        Xor => "^",
        Eql => "==",
        Neq => "!=",
        Lss => "<",
        Gtr => ">",
        Leq => "<=",
        Geq => ">=",
        Shl => "<<",
        Shr => ">>",
        Add => "+",
        Sub => "-",
        Mul => "*",
        Quo => "/",
        Rem => "%",
        Pow => "**",
    }
}

impl BinAritOp {
    pub(crate) fn from_token(tok: Token) -> Option<BinAritOp> {
        Some(match tok {
            Token::Comma => BinAritOp::Comma,
            Token::AddAssgn => BinAritOp::AddAssgn,
            Token::SubAssgn => BinAritOp::SubAssgn,
            Token::MulAssgn => BinAritOp::MulAssgn,
            Token::QuoAssgn => BinAritOp::QuoAssgn,
            Token::RemAssgn => BinAritOp::RemAssgn,
            Token::AndAssgn => BinAritOp::AndAssgn,
            Token::OrAssgn => BinAritOp::OrAssgn,
            Token::XorAssgn => BinAritOp::XorAssgn,
            Token::ShlAssgn => BinAritOp::ShlAssgn,
            Token::ShrAssgn => BinAritOp::ShrAssgn,
            Token::Assgn => BinAritOp::Assgn,
            Token::Quest => BinAritOp::Quest,
            Token::Colon => BinAritOp::Colon,
            Token::AndAnd => BinAritOp::AndArit,
            Token::OrOr => BinAritOp::OrArit,
            Token::And => BinAritOp::And,
            Token::Or => BinAritOp::Or,
            Token::Caret => BinAritOp::Xor,
            Token::Eql => BinAritOp::Eql,
            Token::Neq => BinAritOp::Neq,
            Token::RdrIn => BinAritOp::Lss,
            Token::RdrOut => BinAritOp::Gtr,
            Token::Leq => BinAritOp::Leq,
            Token::Geq => BinAritOp::Geq,
            Token::Hdoc => BinAritOp::Shl,
            Token::AppOut => BinAritOp::Shr,
            Token::Plus => BinAritOp::Add,
            Token::Minus => BinAritOp::Sub,
            Token::Star => BinAritOp::Mul,
            Token::Slash => BinAritOp::Quo,
            Token::Perc => BinAritOp::Rem,
            Token::DblStar => BinAritOp::Pow,
            _ => return None,
        })
    }
}

op_enum! {
    /// `${...}` expansion operators.
    ParExpOp {
        AlternateUnset => "+",
        AlternateUnsetOrNull => ":+",
        DefaultUnset => "-",
        DefaultUnsetOrNull => ":-",
        ErrorUnset => "?",
        ErrorUnsetOrNull => ":?",
        AssignUnset => "=",
        AssignUnsetOrNull => ":=",
        RemSmallSuffix => "%",
        RemLargeSuffix => "%%",
        RemSmallPrefix => "#",
        RemLargePrefix => "##",
        UpperFirst => "^",
        UpperAll => "^^",
        LowerFirst => ",",
        LowerAll => ",,",
    }
}

impl ParExpOp {
    pub(crate) fn from_token(tok: Token) -> Option<ParExpOp> {
        Some(match tok {
            Token::Plus => ParExpOp::AlternateUnset,
            Token::ColPlus => ParExpOp::AlternateUnsetOrNull,
            Token::Minus => ParExpOp::DefaultUnset,
            Token::ColMinus => ParExpOp::DefaultUnsetOrNull,
            Token::Quest => ParExpOp::ErrorUnset,
            Token::ColQuest => ParExpOp::ErrorUnsetOrNull,
            Token::Assgn => ParExpOp::AssignUnset,
            Token::ColAssgn => ParExpOp::AssignUnsetOrNull,
            Token::Perc => ParExpOp::RemSmallSuffix,
            Token::DblPerc => ParExpOp::RemLargeSuffix,
            Token::Hash => ParExpOp::RemSmallPrefix,
            Token::DblHash => ParExpOp::RemLargePrefix,
            Token::Caret => ParExpOp::UpperFirst,
            Token::DblCaret => ParExpOp::UpperAll,
            Token::Comma => ParExpOp::LowerFirst,
            Token::DblComma => ParExpOp::LowerAll,
            _ => return None,
        })
    }

    /// Operators that only exist in the extended dialect.
    pub(crate) fn is_case_modification(&self) -> bool {
        matches!(
            self,
            ParExpOp::UpperFirst | ParExpOp::UpperAll | ParExpOp::LowerFirst | ParExpOp::LowerAll
        )
    }
}

op_enum! {
    /// Unary test operators inside `[[ ... ]]`.
    UnTestOp {
        Exists => "-e",
        RegFile => "-f",
        Direct => "-d",
        CharSp => "-c",
        BlckSp => "-b",
        NmPipe => "-p",
        Socket => "-S",
        SmbLink => "-L",
        GidSet => "-g",
        UidSet => "-u",
        Read => "-r",
        Write => "-w",
        Exec => "-x",
        NoEmpty => "-s",
        FdTerm => "-t",
        EmpStr => "-z",
        NempStr => "-n",
        OptSet => "-o",
        VarSet => "-v",
        RefVar => "-R",
        Not => "!",
    }
}

impl UnTestOp {
    pub(crate) fn from_word(val: &str) -> Option<UnTestOp> {
        Some(match val {
            "-e" | "-a" => UnTestOp::Exists,
            "-f" => UnTestOp::RegFile,
            "-d" => UnTestOp::Direct,
            "-c" => UnTestOp::CharSp,
            "-b" => UnTestOp::BlckSp,
            "-p" => UnTestOp::NmPipe,
            "-S" => UnTestOp::Socket,
            "-L" | "-h" => UnTestOp::SmbLink,
            "-g" => UnTestOp::GidSet,
            "-u" => UnTestOp::UidSet,
            "-r" => UnTestOp::Read,
            "-w" => UnTestOp::Write,
            "-x" => UnTestOp::Exec,
            "-s" => UnTestOp::NoEmpty,
            "-t" => UnTestOp::FdTerm,
            "-z" => UnTestOp::EmpStr,
            "-n" => UnTestOp::NempStr,
            "-o" => UnTestOp::OptSet,
            "-v" => UnTestOp::VarSet,
            "-R" => UnTestOp::RefVar,
            _ => return None,
        })
    }
}

op_enum! {
    /// Binary test operators inside `[[ ... ]]`.
    BinTestOp {
        ReMatch => "=~",
        NewerThan => "-nt",
        OlderThan => "-ot",
        DevIno => "-ef",
        EqlNum => "-eq",
        NeqNum => "-ne",
        LeqNum => "-le",
        GeqNum => "-ge",
        LssNum => "-lt",
        GtrNum => "-gt",
        Match => "==",
        NoMatch => "!=",
        LssStr => "<",
        GtrStr => ">",
        AndTest => "&&",
        OrTest => "||",
    }
}

impl BinTestOp {
    pub(crate) fn from_word(val: &str) -> Option<BinTestOp> {
        Some(match val {
            "=~" => BinTestOp::ReMatch,
            "-nt" => BinTestOp::NewerThan,
            "-ot" => BinTestOp::OlderThan,
            "-ef" => BinTestOp::DevIno,
            "-eq" => BinTestOp::EqlNum,
            "-ne" => BinTestOp::NeqNum,
            "-le" => BinTestOp::LeqNum,
            "-ge" => BinTestOp::GeqNum,
            "-lt" => BinTestOp::LssNum,
            "-gt" => BinTestOp::GtrNum,
            "==" | "=" => BinTestOp::Match,
            "!=" => BinTestOp::NoMatch,
            _ => return None,
        })
    }

    pub(crate) fn from_token(tok: Token) -> Option<BinTestOp> {
        Some(match tok {
            Token::AndAnd => BinTestOp::AndTest,
            Token::OrOr => BinTestOp::OrTest,
            Token::RdrIn => BinTestOp::LssStr,
            Token::RdrOut => BinTestOp::GtrStr,
            _ => return None,
        })
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
