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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The lexical category of a token.
///
/// Identifier-shaped words are split into five categories by pattern alone;
/// see [`Grammar::classify_word`](crate::grammar::Grammar::classify_word)
/// for the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `count`, `isEmpty`, `a1`
    Name,
    /// `_count`
    Field,
    /// `__instances`
    StaticField,
    /// `MAX_SIZE`
    ConstantName,
    /// `List`, `Fiber`
    ClassName,

    /// Decimal or hex numeric literal, sign included when folded in.
    Number,

    /// A complete `"..."` literal with no interpolation.
    String,
    /// `"text %(`: opens a string that contains interpolation.
    StringStart,
    /// `) text %(`: text between two interpolations.
    StringMiddle,
    /// `) text"`: closes an interpolated string.
    StringEnd,
    /// `"""..."""`
    RawString,

    /// A reserved word such as `class`, `while` or `true`.
    Keyword,

    /// Operators and punctuation: `(`, `...`, `>=`, `#!`.
    Symbol,

    /// `#!` line at the very start of the file.
    Shebang,

    /// Malformed input. A matching [`crate::error::LexError`] was recorded.
    Error,

    /// Always the last token. Carries the trailing trivia of the file.
    Eof,
}

/// The category of a skipped piece of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriviaKind {
    Whitespace,
    /// `\` followed by a newline.
    LineContinuation,
    LineComment,
    BlockComment,
}

/// Whitespace or a comment sitting in front of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
    pub span: Span,
}

impl Trivia {
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TriviaKind::LineComment | TriviaKind::BlockComment)
    }
}

/// A single lexical token.
///
/// `lexeme` is the exact source text of the token, so the tree can be
/// printed back byte-for-byte together with `leading_trivia`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leading_trivia: Vec<Trivia>,
}

impl Token {
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme == symbol
    }

    /// Any of the five identifier categories.
    pub fn is_identifier(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Name
                | TokenKind::Field
                | TokenKind::StaticField
                | TokenKind::ConstantName
                | TokenKind::ClassName
        )
    }

    /// Tokens accepted where the grammar asks for a `name`.
    ///
    /// Class names and constants read as names in declaration positions
    /// (`class Foo`, `import "x" for Bar`), so they qualify too.
    pub fn is_name_like(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Name | TokenKind::ConstantName | TokenKind::ClassName
        )
    }

    pub fn is_string_start(&self) -> bool {
        matches!(self.kind, TokenKind::String | TokenKind::StringStart)
    }

    /// True when a line break separates this token from the previous one.
    ///
    /// Line continuations do not count.
    pub fn has_leading_newline(&self) -> bool {
        self.leading_trivia
            .iter()
            .any(|t| t.kind == TriviaKind::Whitespace && t.text.contains('\n'))
    }

    /// Whether this token can be the last token of an operand.
    ///
    /// The lexer uses this to decide if a following `-1` is a signed
    /// number or a minus operator.
    pub fn ends_operand(&self) -> bool {
        match self.kind {
            TokenKind::Name
            | TokenKind::Field
            | TokenKind::StaticField
            | TokenKind::ConstantName
            | TokenKind::ClassName
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::StringEnd
            | TokenKind::RawString
            | TokenKind::Error => true,
            TokenKind::Keyword => matches!(self.lexeme.as_str(), "true" | "false" | "null"),
            TokenKind::Symbol => matches!(self.lexeme.as_str(), ")" | "]" | "}"),
            _ => false,
        }
    }

    /// Short human-readable description used in "found ..." messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Error => format!("invalid token `{}`", self.lexeme),
            TokenKind::String
            | TokenKind::StringStart
            | TokenKind::StringMiddle
            | TokenKind::StringEnd
            | TokenKind::RawString => "string".to_string(),
            _ => format!("`{}`", self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            span: Span::new(0, lexeme.len()),
            leading_trivia: Vec::new(),
        }
    }

    #[test]
    fn literal_keywords_end_operands() {
        assert!(token(TokenKind::Keyword, "null").ends_operand());
        assert!(!token(TokenKind::Keyword, "return").ends_operand());
        assert!(token(TokenKind::Symbol, ")").ends_operand());
        assert!(!token(TokenKind::Symbol, "(").ends_operand());
    }

    #[test]
    fn continuation_is_not_a_newline() {
        let mut tok = token(TokenKind::Name, "x");
        tok.leading_trivia.push(Trivia {
            kind: TriviaKind::LineContinuation,
            text: "\\\n".to_string(),
            span: Span::new(0, 2),
        });
        assert!(!tok.has_leading_newline());
    }
}
