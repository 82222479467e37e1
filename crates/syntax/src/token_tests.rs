// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    semicolons  = { Token::DblSemicolon, ";;" },
    semi_fall   = { Token::SemiFall, ";&" },
    pipe_all    = { Token::PipeAll, "|&" },
    dash_hdoc   = { Token::DashHdoc, "<<-" },
    word_hdoc   = { Token::WordHdoc, "<<<" },
    app_all     = { Token::AppAll, "&>>" },
    doll_dbl    = { Token::DollDblParen, "$((" },
    glob_at     = { Token::GlobAt, "@(" },
    col_assign  = { Token::ColAssgn, ":=" },
    shl_assign  = { Token::ShlAssgn, "<<=" },
    eof         = { Token::Eof, "EOF" },
)]
fn token_display(tok: Token, want: &str) {
    assert_eq!(tok.to_string(), want);
}

#[test]
fn word_break_bytes() {
    for b in [b' ', b'\t', b'\n', b';', b'&', b'|', b'<', b'>', b'(', b')'] {
        assert!(word_break(b), "{:?} should break words", b as char);
    }
    for b in [b'a', b'=', b'{', b'}', b'[', b']', b'#', b'!', b'\\'] {
        assert!(!word_break(b), "{:?} should not break words", b as char);
    }
}

#[test]
fn redirect_tokens_map_to_ops() {
    assert_eq!(RedirOp::from_token(Token::RdrAll), Some(RedirOp::All));
    assert_eq!(RedirOp::from_token(Token::ClbOut), Some(RedirOp::Clobber));
    assert_eq!(RedirOp::from_token(Token::DashHdoc), Some(RedirOp::DashHdoc));
    assert_eq!(RedirOp::from_token(Token::Semicolon), None);
    assert!(RedirOp::Hdoc.is_heredoc());
    assert!(RedirOp::DashHdoc.is_heredoc());
    assert!(!RedirOp::WordHdoc.is_heredoc());
}

#[test]
fn arithmetic_reuses_redirect_tokens() {
    // < > << >> serve as comparison and shift operators in arithmetic modes
    assert_eq!(BinAritOp::from_token(Token::RdrIn), Some(BinAritOp::Lss));
    assert_eq!(BinAritOp::from_token(Token::RdrOut), Some(BinAritOp::Gtr));
    assert_eq!(BinAritOp::from_token(Token::Hdoc), Some(BinAritOp::Shl));
    assert_eq!(BinAritOp::from_token(Token::AppOut), Some(BinAritOp::Shr));
    assert_eq!(BinAritOp::from_token(Token::Caret), Some(BinAritOp::Xor));
}

#[yare::parameterized(
    exists   = { "-e", UnTestOp::Exists },
    exists_a = { "-a", UnTestOp::Exists },
    symlink  = { "-L", UnTestOp::SmbLink },
    symlink_h = { "-h", UnTestOp::SmbLink },
    var_set  = { "-v", UnTestOp::VarSet },
    term     = { "-t", UnTestOp::FdTerm },
)]
fn unary_test_ops(word: &str, want: UnTestOp) {
    assert_eq!(UnTestOp::from_word(word), Some(want));
}

#[test]
fn binary_test_ops() {
    assert_eq!(BinTestOp::from_word("=~"), Some(BinTestOp::ReMatch));
    assert_eq!(BinTestOp::from_word("=="), Some(BinTestOp::Match));
    assert_eq!(BinTestOp::from_word("="), Some(BinTestOp::Match));
    assert_eq!(BinTestOp::from_word("-nt"), Some(BinTestOp::NewerThan));
    assert_eq!(BinTestOp::from_word("-x"), None);
    assert_eq!(BinTestOp::from_token(Token::RdrIn), Some(BinTestOp::LssStr));
}

#[test]
fn param_expansion_ops() {
    assert_eq!(ParExpOp::from_token(Token::ColMinus), Some(ParExpOp::DefaultUnsetOrNull));
    assert_eq!(ParExpOp::from_token(Token::DblHash), Some(ParExpOp::RemLargePrefix));
    assert_eq!(ParExpOp::from_token(Token::RightBrace), None);
    assert!(ParExpOp::from_token(Token::DblCaret)
        .is_some_and(|op| op.is_case_modification()));
    assert!(!ParExpOp::AssignUnset.is_case_modification());
}

#[test]
fn mode_classes() {
    assert!(LexMode::Regular.is_reg());
    assert!(LexMode::SwitchCase.is_reg());
    assert!(!LexMode::DblQuotes.is_reg());
    assert!(LexMode::ParamExpInd.is_arithm());
    assert!(LexMode::ParamExpInd.is_param_arith());
    assert!(!LexMode::ArithmExpr.is_param_arith());
    assert!(LexMode::ArithmExprBrack.closes_brack());
    assert!(!LexMode::ParamExpName.is_arithm());
}
