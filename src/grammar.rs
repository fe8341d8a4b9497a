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

//! The process-wide grammar table.
//!
//! Everything the lexer and parser need to look up rather than hard-code
//! lives here: the identifier category patterns, the infix operator table
//! with its binding powers, and the overloadable operator sets used inside
//! class bodies. The table is built once on first use and only read after.

use crate::lexer::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Binding power of the conditional and range tier.
pub const LOW_TIER: (u8, u8) = (1, 2);

/// Binding power of every binary operator. The levels are deliberately
/// flat, so `1 + 2 * 3` groups as `(1 + 2) * 3`.
pub const BINARY_TIER: (u8, u8) = (3, 4);

/// Operators that may appear between two expressions.
pub const BINARY_OPERATORS: &[&str] = &[
    "+", "-", "==", "!=", "<=", ">=", "&&", "||", "/", "*", "%", ">>", "<<", "&", "<", ">",
    "is", "|",
];

/// Prefix operators usable in expressions.
pub const PREFIX_OPERATORS: &[&str] = &["!", "-", "~"];

/// Operators a class may define as prefix (`- { ... }`).
pub const OVERLOADABLE_PREFIX: &[&str] = &["-", "!", "~", "+"];

/// Operators a class may define as infix (`+(other) { ... }`).
pub const OVERLOADABLE_INFIX: &[&str] = &[
    "+", "-", "*", "/", "%", "<", ">", "<=", ">=", "==", "!=", "&", "|", "<<", ">>", "..", "...",
];

/// What kind of node an infix operator builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixKind {
    Binary,
    Range,
    Conditional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixOperator {
    pub kind: InfixKind,
    pub left_power: u8,
    pub right_power: u8,
}

pub struct Grammar {
    /// Anchored patterns in tie-break order: the first full match wins.
    identifier_patterns: Vec<(TokenKind, Regex)>,
    infix: HashMap<&'static str, InfixOperator>,
}

static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::build);

/// Returns the shared grammar table.
pub fn grammar() -> &'static Grammar {
    &GRAMMAR
}

impl Grammar {
    fn build() -> Self {
        let patterns = [
            (TokenKind::StaticField, r"^__[0-9A-Za-z]+[0-9A-Za-z_]*$"),
            (TokenKind::Field, r"^_[0-9A-Za-z]+[0-9A-Za-z_]*$"),
            (TokenKind::ConstantName, r"^[_A-Z]+[0-9A-Z_]*$"),
            (TokenKind::ClassName, r"^[A-Z]+[0-9A-Za-z_]*$"),
            (TokenKind::Name, r"^[a-zA-Z]+[0-9A-Za-z_]*$"),
        ];

        let identifier_patterns = patterns
            .into_iter()
            .map(|(kind, pattern)| {
                // The patterns are literals above; a failure here is a typo.
                let regex = Regex::new(pattern).unwrap_or_else(|e| {
                    unreachable!("identifier pattern {pattern:?} is invalid: {e}")
                });
                (kind, regex)
            })
            .collect();

        let mut infix = HashMap::new();
        for op in BINARY_OPERATORS {
            infix.insert(
                *op,
                InfixOperator {
                    kind: InfixKind::Binary,
                    left_power: BINARY_TIER.0,
                    right_power: BINARY_TIER.1,
                },
            );
        }
        for op in ["..", "..."] {
            infix.insert(
                op,
                InfixOperator {
                    kind: InfixKind::Range,
                    left_power: LOW_TIER.0,
                    right_power: LOW_TIER.1,
                },
            );
        }
        infix.insert(
            "?",
            InfixOperator {
                kind: InfixKind::Conditional,
                left_power: LOW_TIER.0,
                right_power: LOW_TIER.1,
            },
        );

        Self {
            identifier_patterns,
            infix,
        }
    }

    /// Classifies an identifier-shaped word.
    ///
    /// Returns `None` when no category matches the whole word (`___x`).
    pub fn classify_word(&self, word: &str) -> Option<TokenKind> {
        self.identifier_patterns
            .iter()
            .find(|(_, regex)| regex.is_match(word))
            .map(|(kind, _)| *kind)
    }

    /// Looks up the infix operator a token stands for, if any.
    pub fn infix(&self, token: &Token) -> Option<InfixOperator> {
        match token.kind {
            TokenKind::Symbol => self.infix.get(token.lexeme.as_str()).copied(),
            TokenKind::Keyword if token.lexeme == "is" => self.infix.get("is").copied(),
            _ => None,
        }
    }

    pub fn is_prefix_operator(&self, token: &Token) -> bool {
        token.kind == TokenKind::Symbol && PREFIX_OPERATORS.contains(&token.lexeme.as_str())
    }

    pub fn is_overloadable_prefix(&self, token: &Token) -> bool {
        token.kind == TokenKind::Symbol && OVERLOADABLE_PREFIX.contains(&token.lexeme.as_str())
    }

    pub fn is_overloadable_infix(&self, token: &Token) -> bool {
        token.kind == TokenKind::Symbol && OVERLOADABLE_INFIX.contains(&token.lexeme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn symbol(lexeme: &str) -> Token {
        Token {
            kind: TokenKind::Symbol,
            lexeme: lexeme.to_string(),
            span: Span::new(0, lexeme.len()),
            leading_trivia: Vec::new(),
        }
    }

    #[test]
    fn identifier_tie_break_order() {
        let g = grammar();
        assert_eq!(g.classify_word("__count"), Some(TokenKind::StaticField));
        assert_eq!(g.classify_word("_count"), Some(TokenKind::Field));
        assert_eq!(g.classify_word("_FOO"), Some(TokenKind::Field));
        assert_eq!(g.classify_word("MAX_SIZE"), Some(TokenKind::ConstantName));
        assert_eq!(g.classify_word("A"), Some(TokenKind::ConstantName));
        assert_eq!(g.classify_word("Fiber"), Some(TokenKind::ClassName));
        assert_eq!(g.classify_word("A_b"), Some(TokenKind::ClassName));
        assert_eq!(g.classify_word("count"), Some(TokenKind::Name));
        assert_eq!(g.classify_word("__"), Some(TokenKind::ConstantName));
        assert_eq!(g.classify_word("___x"), None);
    }

    #[test]
    fn binary_operators_share_one_level() {
        let g = grammar();
        let plus = g.infix(&symbol("+")).unwrap();
        let times = g.infix(&symbol("*")).unwrap();
        assert_eq!(plus, times);
        assert_eq!(plus.kind, InfixKind::Binary);
    }

    #[test]
    fn range_and_conditional_bind_loosest() {
        let g = grammar();
        let range = g.infix(&symbol("...")).unwrap();
        let cond = g.infix(&symbol("?")).unwrap();
        assert_eq!(range.kind, InfixKind::Range);
        assert_eq!(cond.kind, InfixKind::Conditional);
        assert!(range.left_power < BINARY_TIER.0);
        assert!(g.infix(&symbol("=")).is_none());
    }
}
