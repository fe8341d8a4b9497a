/*
 * ==========================================================================
 * WREN-SYNTAX - Lexer and parser for the Wren scripting language
 * ==========================================================================
 * 
 * License:
 * This file is part of the wren-syntax project.
 * 
 * wren-syntax is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */


//! Property tests over generated input.
//!
//! 1. Any input parses without panicking and prints back byte for byte.
//! 2. Parsing is deterministic.
//! 3. Error spans stay inside the input.
//! 4. Comments and whitespace between tokens never change the tree.

use proptest::prelude::*;
use wren_syntax::{parse, ParseOptions};

/// Valid statements that stay valid when glued together with any trivia.
const FRAGMENTS: &[&str] = &[
    "var x = 1",
    "x = y + 2 * z",
    "foo { 1 }",
    "list.map {|a| a * 2 }",
    "System.print(\"hi %(name)\")",
    "if (a) b else c",
    "for (i in 0...n) sum = sum + i",
    "while (x < 10) { x = x + 1 }",
    "class Point { construct new(x) { _x = x } x { _x } }",
    "import \"os\" for Platform",
    "{ var t = [1, 2] }",
    "a ? b : c",
    "m = {\"k\": 1, 2: [3]}",
    "#key = 1 class C is B { foreign static f(a) }",
    "-x.y",
    "__all[0, 1] = null",
];

const SEPARATORS: &[&str] = &[" ", "\n", " /* note */ ", "\t// line\n", " \\\n ", "/*/**/*/"];

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FRAGMENTS)
}

/// Fragments plus, for each gap, a separator to put there.
fn program() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>)> {
    prop::collection::vec(fragment(), 1..6).prop_flat_map(|fragments| {
        let gaps = fragments.len();
        (
            Just(fragments),
            prop::collection::vec(prop::sample::select(SEPARATORS), gaps),
        )
    })
}

/// A valid fragment cut short at a random character.
fn truncated() -> impl Strategy<Value = String> {
    fragment().prop_flat_map(|s| {
        let chars = s.chars().count();
        (0..=chars).prop_map(move |cut| s.chars().take(cut).collect::<String>())
    })
}

fn join(fragments: &[&str], separators: &[&str]) -> String {
    let mut out = String::new();
    for (fragment, separator) in fragments.iter().zip(separators) {
        out.push_str(fragment);
        out.push_str(separator);
    }
    out
}

proptest! {
    #[test]
    fn any_input_round_trips(source in any::<String>()) {
        let parse = parse(&source);
        prop_assert_eq!(parse.tree.to_source(), source);
    }

    #[test]
    fn wren_like_input_round_trips(source in "[a-zA-Z_0-9 \n(){}\\[\\].,:?!=<>+*/%\"#|&-]{0,64}") {
        let parse = parse(&source);
        prop_assert_eq!(parse.tree.to_source(), source);
    }

    #[test]
    fn truncated_input_round_trips(source in truncated()) {
        let parse = parse(&source);
        prop_assert_eq!(parse.tree.to_source(), source);
    }

    #[test]
    fn parsing_is_deterministic(source in any::<String>()) {
        prop_assert_eq!(parse(&source), parse(&source));
    }

    #[test]
    fn error_spans_are_inside_the_input(source in any::<String>()) {
        let parse = parse(&source);
        for error in &parse.errors {
            let span = error.span();
            prop_assert!(span.start <= span.end);
            prop_assert!(span.end <= source.len());
        }
        if parse.tree.has_error() {
            prop_assert!(!parse.errors.is_empty());
        }
    }

    #[test]
    fn trivia_never_changes_the_tree((fragments, separators) in program()) {
        let spaced = join(&fragments, &vec![" "; fragments.len()]);
        let baseline = parse(&spaced);
        prop_assert!(baseline.is_ok(), "{:?}", baseline.errors);

        let varied = join(&fragments, &separators);
        let reparsed = parse(&varied);
        prop_assert!(reparsed.is_ok(), "{:?}", reparsed.errors);
        prop_assert_eq!(baseline.sexp(), reparsed.sexp());
    }

    #[test]
    fn shallow_limit_never_panics(source in "[(\\[{x}\\])]{0,200}") {
        let parse = wren_syntax::parse_with(&source, &ParseOptions::new().max_depth(8));
        prop_assert_eq!(parse.tree.to_source(), source);
    }
}
