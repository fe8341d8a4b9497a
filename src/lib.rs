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


//! Lexer and error-recovering parser for the Wren scripting language.
//!
//! ```
//! let parse = wren_syntax::parse("System.print(1 + 2)");
//! assert!(parse.is_ok());
//! assert_eq!(parse.tree.to_source(), "System.print(1 + 2)");
//! ```
//!
//! The tree is concrete: every byte of the input, comments and whitespace
//! included, sits on some token in it. Malformed input still produces a
//! tree, with the bad regions wrapped in `ERROR` nodes and the problems
//! listed in [`Parse::errors`].

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod span;

pub use ast::{to_pretty_sexp, to_sexp, Field, Node, NodeKind};
pub use error::{LexError, LexErrorKind, ParseError, SyntaxError};
pub use lexer::{tokenize, Token, TokenKind, Trivia, TriviaKind};
pub use span::Span;

use serde::Serialize;
use tracing::debug;

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat a leading `#!` line as a shebang rather than an attribute.
    pub allow_shebang: bool,
    /// Deepest nesting of expressions and blocks before the parser gives up
    /// on a statement.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_shebang: true,
            max_depth: parser::DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_shebang(mut self, allow: bool) -> Self {
        self.allow_shebang = allow;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// The outcome of parsing one source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parse {
    pub tree: Node,
    /// Lexical and syntax errors, ordered by position.
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The tree if there were no errors, otherwise the errors.
    pub fn into_result(self) -> Result<Node, Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(self.tree)
        } else {
            Err(self.errors)
        }
    }

    pub fn sexp(&self) -> String {
        to_sexp(&self.tree)
    }
}

/// Parses `source` with default options.
pub fn parse(source: &str) -> Parse {
    parse_with(source, &ParseOptions::default())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> Parse {
    let (tokens, lex_errors) = tokenize(source, options.allow_shebang);
    let (tree, parse_errors) = parser::parse(tokens, options.max_depth);

    let mut errors: Vec<SyntaxError> = lex_errors
        .into_iter()
        .map(SyntaxError::from)
        .chain(parse_errors)
        .collect();
    // Stable, so a lex error stays ahead of a parse error at the same offset.
    errors.sort_by_key(|e| e.span().start);

    debug!(bytes = source.len(), errors = errors.len(), "parsed");
    Parse { tree, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_builder() {
        let options = ParseOptions::new().allow_shebang(false).max_depth(4);
        assert!(!options.allow_shebang);
        assert_eq!(options.max_depth, 4);
        assert_eq!(ParseOptions::default().max_depth, parser::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn errors_are_ordered_by_position() {
        let parse = parse("var = 1\n\"open");
        let starts: Vec<_> = parse.errors.iter().map(|e| e.span().start).collect();
        assert_eq!(parse.errors.len(), 2);
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        assert!(!parse.errors[0].is_lex());
        assert!(parse.errors[1].is_lex());
    }

    #[test]
    fn shebang_can_be_disabled() {
        let source = "#!ready\nclass A {}";
        assert_eq!(parse(source).tree.child_nodes().next().unwrap().kind, NodeKind::Shebang);

        let parse = parse_with(source, &ParseOptions::new().allow_shebang(false));
        assert!(parse.is_ok(), "{:?}", parse.errors);
        let class = parse.tree.child_of_kind(NodeKind::ClassDefinition).unwrap();
        assert!(class.child_of_kind(NodeKind::RuntimeAttribute).is_some());
    }

    #[test]
    fn into_result() {
        assert!(parse("x").into_result().is_ok());
        assert_eq!(parse("x(").into_result().unwrap_err().len(), 1);
    }
}
