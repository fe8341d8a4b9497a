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

// Spurious warnings from the miette derive expansion
#![allow(unused_assignments)]

use std::fmt;

use crate::span::Span;
use miette::{Diagnostic, LabeledSpan};
use serde::Serialize;
use thiserror::Error;

/// A malformed token.
///
/// The lexer never stops on these: it records the error, emits an error
/// token covering the bad text, and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl Diagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("here".to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated raw string literal")]
    UnterminatedRawString,

    #[error("unterminated block comment")]
    UnterminatedComment,

    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),

    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),

    #[error("invalid escape sequence `{0}`")]
    InvalidEscape(String),

    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
}

impl LexErrorKind {
    /// Diagnostic code, one per kind.
    pub fn code(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "wren::lex::unterminated_string",
            LexErrorKind::UnterminatedRawString => "wren::lex::unterminated_raw_string",
            LexErrorKind::UnterminatedComment => "wren::lex::unterminated_comment",
            LexErrorKind::InvalidNumber(_) => "wren::lex::invalid_number",
            LexErrorKind::InvalidIdentifier(_) => "wren::lex::invalid_identifier",
            LexErrorKind::InvalidEscape(_) => "wren::lex::invalid_escape",
            LexErrorKind::UnexpectedCharacter(_) => "wren::lex::unexpected_character",
        }
    }
}

/// A token that is not valid where it appears.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[error("expected {expected}, found {found}")]
#[diagnostic(code(wren::parse))]
pub struct ParseError {
    pub expected: String,
    pub found: String,
    #[label("unexpected here")]
    pub span: Span,
    #[help]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl ParseError {
    pub fn new(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
            span,
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Any error produced while turning source text into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Stable short code, used by the plain diagnostic printer.
    pub fn code(&self) -> &'static str {
        match self {
            SyntaxError::Lex(_) => "E_LEX",
            SyntaxError::Parse(_) => "E_PARSE",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span,
            SyntaxError::Parse(e) => e.span,
        }
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            SyntaxError::Lex(_) => None,
            SyntaxError::Parse(e) => e.help.as_deref(),
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, SyntaxError::Lex(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_names_both_sides() {
        let err = ParseError::new("`)`", "`}`", Span::new(4, 5));
        assert_eq!(err.to_string(), "expected `)`, found `}`");
    }

    #[test]
    fn syntax_error_is_transparent() {
        let err: SyntaxError = LexError::new(LexErrorKind::UnterminatedString, Span::new(0, 4)).into();
        assert_eq!(err.to_string(), "unterminated string literal");
        assert_eq!(err.code(), "E_LEX");
        assert_eq!(err.span(), Span::new(0, 4));
    }

    #[test]
    fn lex_diagnostics_carry_a_code_per_kind() {
        let err = LexError::new(LexErrorKind::InvalidNumber("1e5".into()), Span::new(0, 3));
        let code = Diagnostic::code(&err).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("wren::lex::invalid_number"));

        let labels: Vec<_> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[0].len(), 3);

        let wrapped: SyntaxError = err.into();
        let code = Diagnostic::code(&wrapped).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("wren::lex::invalid_number"));
    }

    #[test]
    fn help_is_carried_through() {
        let err: SyntaxError = ParseError::new("expression", "`]`", Span::at(3))
            .with_help("remove the trailing comma")
            .into();
        assert_eq!(err.help(), Some("remove the trailing comma"));
    }
}
