// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Round-trip properties: printed output reparses, and reformatting a
//! formatted program changes nothing.

use proptest::prelude::*;

use super::fmt;
use crate::{parse, ParseMode};

fn word() -> impl Strategy<Value = String> + Clone {
    "[a-zA-Z_][a-zA-Z0-9_]{0,6}"
        .prop_filter("reserved words change the grammar", |w| {
            !matches!(
                w.as_str(),
                "if" | "then"
                    | "elif"
                    | "else"
                    | "fi"
                    | "while"
                    | "until"
                    | "do"
                    | "done"
                    | "for"
                    | "in"
                    | "case"
                    | "esac"
                    | "function"
                    | "coproc"
                    | "let"
                    | "eval"
                    | "declare"
                    | "local"
                    | "export"
                    | "readonly"
                    | "typeset"
                    | "nameref"
            )
        })
        .prop_map(String::from)
}

fn snippet() -> impl Strategy<Value = String> {
    let w = word();
    prop_oneof![
        (w.clone(), prop::collection::vec(word(), 0..3))
            .prop_map(|(n, args)| format!("{} {}", n, args.join(" "))),
        (w.clone(), word()).prop_map(|(a, b)| format!("{}={}", a, b)),
        (w.clone(), word()).prop_map(|(a, b)| format!("{} >{}", a, b)),
        (w.clone(), word()).prop_map(|(a, b)| format!("{} | {}", a, b)),
        (w.clone(), word()).prop_map(|(a, b)| format!("if {}; then {}; fi", a, b)),
        (w.clone(), word()).prop_map(|(a, b)| format!("while {}; do {}; done", a, b)),
        (w.clone(), word()).prop_map(|(a, b)| format!("echo \"{} ${}\"", a, b)),
        (w.clone(), word()).prop_map(|(a, b)| format!("{} <<X\n{}\nX", a, b)),
        w.prop_map(|a| format!("echo $(({} + 1))", a)),
    ]
}

fn script() -> impl Strategy<Value = String> {
    (prop::collection::vec(snippet(), 1..4), 0usize..3).prop_map(|(parts, sep)| {
        let seps = ["\n", "; ", "\n\n"];
        parts.join(seps[sep % seps.len()])
    })
}

proptest! {
    #[test]
    fn printed_output_reparses(src in script()) {
        let out = fmt(&src);
        let reparsed = parse(&out, "", ParseMode::PARSE_COMMENTS);
        prop_assert!(reparsed.is_ok(), "output of {:?} fails to reparse: {:?}", src, out);
    }

    #[test]
    fn formatting_is_idempotent(src in script()) {
        let once = fmt(&src);
        let twice = fmt(&once);
        prop_assert_eq!(&once, &twice, "formatting {:?} is not a fixed point", src);
    }

    #[test]
    fn canonical_ends_with_one_newline(src in script()) {
        let out = fmt(&src);
        prop_assert!(out.is_empty() || out.ends_with('\n'));
        prop_assert!(!out.ends_with("\n\n"));
    }
}

#[test]
fn write_errors_surface() {
    struct FailWriter;
    impl std::io::Write for FailWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "write: expected error"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let f = parse("foo >bar", "", ParseMode::DEFAULT).unwrap();
    let err = crate::print(FailWriter, &f).unwrap_err();
    assert_eq!(err.to_string(), "write: expected error");
}

#[test]
fn empty_file_prints_nothing() {
    assert_eq!(fmt(""), "");
    assert_eq!(fmt("\n\n"), "");
}
