// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod compact;
mod roundtrip;
mod spaces;
mod weird;

use crate::{parse, print, ParseMode, PrintConfig};

/// Parse (keeping comments) and print with the default configuration.
fn fmt(src: &str) -> String {
    let f = parse(src, "", ParseMode::PARSE_COMMENTS)
        .unwrap_or_else(|e| panic!("parse of {:?} failed: {}", src, e));
    let mut out = Vec::new();
    print(&mut out, &f).expect("printing to a Vec cannot fail");
    String::from_utf8(out).expect("printer output is UTF-8")
}

fn fmt_spaces(src: &str, spaces: i32) -> String {
    let f = parse(src, "", ParseMode::PARSE_COMMENTS)
        .unwrap_or_else(|e| panic!("parse of {:?} failed: {}", src, e));
    let mut out = Vec::new();
    PrintConfig { spaces }.print(&mut out, &f).expect("printing to a Vec cannot fail");
    String::from_utf8(out).expect("printer output is UTF-8")
}

/// Assert the canonical form, and that the canonical form is a fixed point.
macro_rules! fmt_tests {
    ($($name:ident: $input:expr => $want:literal),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let want = concat!($want, "\n");
                assert_eq!(crate::printer::tests::fmt($input), want, "input: {:?}", $input);
                // formatting is idempotent
                assert_eq!(crate::printer::tests::fmt(want), want, "reformat of {:?}", want);
                // stray surrounding blank lines change nothing
                let padded = format!("\n{}\n", $input);
                assert_eq!(crate::printer::tests::fmt(&padded), want, "padded {:?}", $input);
            }
        )*
    };
}

pub(crate) use fmt_tests;
