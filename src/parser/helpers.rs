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


use crate::ast::{Node, NodeKind};
use crate::error::{ParseError, SyntaxError};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{ParseResult, Parser};

impl Parser {
    /// The current token. The stream always ends in `Eof`, which is never
    /// stepped past.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Looks `offset` tokens ahead, clamped to `Eof`.
    pub fn peek_at(&self, offset: usize) -> &Token {
        let index = (self.current + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Advances one token forward, returning the token left behind.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Checks for a symbol without consuming it.
    pub fn check_symbol(&self, symbol: &str) -> bool {
        self.peek().is_symbol(symbol)
    }

    /// Checks for a keyword without consuming it.
    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.peek().is_keyword(keyword)
    }

    /// Consumes the symbol if it is next.
    pub fn match_symbol(&mut self, symbol: &str) -> Option<Token> {
        if self.check_symbol(symbol) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes the keyword if it is next.
    pub fn match_keyword(&mut self, keyword: &str) -> Option<Token> {
        if self.check_keyword(keyword) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a required symbol.
    pub fn consume_symbol(&mut self, symbol: &str) -> ParseResult<Token> {
        self.match_symbol(symbol)
            .ok_or_else(|| self.error_here(format!("`{symbol}`")))
    }

    /// Consumes a required keyword.
    pub fn consume_keyword(&mut self, keyword: &str) -> ParseResult<Token> {
        self.match_keyword(keyword)
            .ok_or_else(|| self.error_here(format!("`{keyword}`")))
    }

    /// Consumes a name and wraps it in a `name` node.
    ///
    /// Class names and constants are accepted too: `class Foo` declares a
    /// name that happens to be capitalised.
    pub fn consume_name(&mut self) -> ParseResult<Node> {
        if self.peek().is_name_like() {
            Ok(Node::leaf(NodeKind::Name, self.advance()))
        } else {
            Err(self.error_here("a name"))
        }
    }

    /// Consumes a name in parameter position.
    pub fn consume_parameter(&mut self) -> ParseResult<Node> {
        if self.peek().is_name_like() {
            Ok(Node::leaf(NodeKind::Parameter, self.advance()))
        } else {
            Err(self.error_here("a parameter name"))
        }
    }

    /// An error pointing at the current token.
    pub fn error_here(&self, expected: impl Into<String>) -> SyntaxError {
        let token = self.peek();
        ParseError::new(expected, token.describe(), token.span).into()
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Fails instead of recursing once `max_depth` levels are open, so
    /// hostile input cannot overflow the stack.
    pub fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            let token = self.peek();
            return Err(ParseError::new("shallower nesting", token.describe(), token.span)
                .with_help(format!("nesting is limited to {} levels", self.max_depth))
                .into());
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// True if the current token can begin an expression.
    pub fn at_expression_start(&self) -> bool {
        let token = self.peek();
        match token.kind {
            TokenKind::Name
            | TokenKind::Field
            | TokenKind::StaticField
            | TokenKind::ConstantName
            | TokenKind::ClassName
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::StringStart
            | TokenKind::RawString
            | TokenKind::Error => true,
            TokenKind::Keyword => matches!(token.lexeme.as_str(), "true" | "false" | "null"),
            TokenKind::Symbol => matches!(token.lexeme.as_str(), "(" | "[" | "{" | "!" | "-" | "~"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::parser::parser::Parser;

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source, false).0)
    }

    #[test]
    fn advance_stops_at_eof() {
        let mut p = parser("x");
        assert_eq!(p.advance().lexeme, "x");
        assert!(p.is_at_end());
        p.advance();
        assert!(p.is_at_end());
    }

    #[test]
    fn peek_at_clamps() {
        let p = parser("a b");
        assert_eq!(p.peek_at(1).lexeme, "b");
        assert!(p.peek_at(10).lexeme.is_empty());
    }

    #[test]
    fn consume_reports_expected_and_found() {
        let mut p = parser("x");
        let error = p.consume_symbol("(").unwrap_err();
        assert_eq!(error.to_string(), "expected `(`, found `x`");
    }

    #[test]
    fn class_name_is_accepted_as_name() {
        let mut p = parser("Foo");
        let name = p.consume_name().unwrap();
        assert_eq!(name.text(), "Foo");
    }

    #[test]
    fn nesting_limit() {
        let mut p = parser("x").with_max_depth(1);
        let outer = p.nested(|p| p.nested(|_| Ok(())));
        assert!(outer.is_err());
        assert_eq!(p.depth, 0);
        assert!(p.nested(|_| Ok(())).is_ok());
    }
}
