// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative test tables for the parser suites.

/// Assert statement counts for inputs that must parse.
macro_rules! parse_tests {
    ($($name:ident: $input:expr => stmts: $count:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let f = super::helpers::parse_ok($input);
                assert_eq!(
                    f.stmts.len(), $count,
                    "input: {:?}, expected {} statements, got {}",
                    $input, $count, f.stmts.len()
                );
            }
        )*
    };
}

/// Assert the exact rendered error, `line:col: message`.
macro_rules! parse_error_tests {
    ($($name:ident: $input:expr => $want:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let err = crate::parse($input, "", crate::ParseMode::DEFAULT)
                    .err()
                    .unwrap_or_else(|| panic!("expected error for {:?}", $input));
                assert_eq!(err.to_string(), $want, "input: {:?}", $input);
            }
        )*
    };
}

/// Like [`parse_error_tests!`], under `POSIX_CONFORMANT`.
macro_rules! posix_error_tests {
    ($($name:ident: $input:expr => $want:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let err = crate::parse($input, "", crate::ParseMode::POSIX_CONFORMANT)
                    .err()
                    .unwrap_or_else(|| panic!("expected posix error for {:?}", $input));
                assert_eq!(err.to_string(), $want, "input: {:?}", $input);
            }
        )*
    };
}

pub(crate) use {parse_error_tests, parse_tests, posix_error_tests};
