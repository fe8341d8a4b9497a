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

use crate::error::{LexError, LexErrorKind};
use crate::grammar::grammar;
use crate::lexer::keywords::is_keyword;
use crate::lexer::token::{Token, TokenKind, Trivia, TriviaKind};
use crate::span::Span;
use tracing::{debug, trace};

/// Converts Wren source text into a flat token stream.
///
/// Trivia (whitespace, comments, line continuations) is not emitted as
/// tokens; it is attached to the next token's `leading_trivia`, and whatever
/// is left at the end of the file rides on the `Eof` token. Concatenating
/// trivia and lexemes in order therefore reproduces the input exactly.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset where the token being scanned began.
    start: usize,
    /// Byte offset of the next unread character.
    current: usize,
    allow_shebang: bool,
    pending_trivia: Vec<Trivia>,
    /// One entry per open `%(`: how many plain `(` are open inside it.
    interpolations: Vec<usize>,
    /// One entry per open plain `(`: whether it opens an `if`, `while` or
    /// `for` header.
    parens: Vec<bool>,
    /// Index of the last `)` that closed such a header.
    closed_header: Option<usize>,
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lexes `source` in one go.
///
/// `allow_shebang` permits a `#!` line at the very start of the input.
pub fn tokenize(source: &str, allow_shebang: bool) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(source).with_shebang(allow_shebang);
    lexer.scan_tokens();
    (lexer.tokens, lexer.errors)
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            allow_shebang: true,
            pending_trivia: Vec::new(),
            interpolations: Vec::new(),
            parens: Vec::new(),
            closed_header: None,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Whether a leading `#!` line is read as a shebang.
    pub fn with_shebang(mut self, allow: bool) -> Self {
        self.allow_shebang = allow;
        self
    }

    /// Scans the whole input, always finishing with an `Eof` token.
    ///
    /// Must be called exactly once per lexer.
    pub fn scan_tokens(&mut self) {
        if self.allow_shebang && self.source.starts_with("#!") {
            while !self.is_at_end() && self.peek() != '\n' {
                self.advance();
            }
            self.add_token(TokenKind::Shebang);
        }

        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.start = self.current;
        self.add_token(TokenKind::Eof);
        trace!(tokens = self.tokens.len(), errors = self.errors.len(), "lexed source");
    }

    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            c if c.is_whitespace() => {
                while !self.is_at_end() && self.peek().is_whitespace() {
                    self.advance();
                }
                self.add_trivia(TriviaKind::Whitespace);
            }

            '\\' => {
                if self.peek() == '\n' {
                    self.advance();
                    self.add_trivia(TriviaKind::LineContinuation);
                } else if self.peek() == '\r' && self.peek_next() == '\n' {
                    self.advance();
                    self.advance();
                    self.add_trivia(TriviaKind::LineContinuation);
                } else {
                    self.error_token(LexErrorKind::UnexpectedCharacter('\\'));
                }
            }

            '/' => {
                if self.match_char('/') {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                    self.add_trivia(TriviaKind::LineComment);
                } else if self.match_char('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Symbol);
                }
            }

            '"' => {
                if self.peek() == '"' && self.peek_next() == '"' {
                    self.advance();
                    self.advance();
                    self.raw_string();
                } else {
                    self.string_body(true);
                }
            }

            '0'..='9' => self.number(false),

            '+' | '-' if self.sign_starts_number() => self.number(true),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

            '(' => {
                if let Some(depth) = self.interpolations.last_mut() {
                    *depth += 1;
                }
                let header = self.tokens.last().is_some_and(|t| {
                    t.kind == TokenKind::Keyword && matches!(t.lexeme.as_str(), "if" | "while" | "for")
                });
                self.parens.push(header);
                self.add_token(TokenKind::Symbol);
            }

            ')' => {
                if self.interpolations.last() == Some(&0) {
                    // This paren closes `%(`: the string picks up again.
                    self.interpolations.pop();
                    self.string_body(false);
                } else {
                    if let Some(depth) = self.interpolations.last_mut() {
                        *depth -= 1;
                    }
                    if self.parens.pop() == Some(true) {
                        self.closed_header = Some(self.tokens.len());
                    }
                    self.add_token(TokenKind::Symbol);
                }
            }

            '.' => {
                if self.match_char('.') {
                    self.match_char('.');
                }
                self.add_token(TokenKind::Symbol);
            }

            '=' | '!' => {
                self.match_char('=');
                self.add_token(TokenKind::Symbol);
            }

            '<' => {
                if !self.match_char('=') {
                    self.match_char('<');
                }
                self.add_token(TokenKind::Symbol);
            }

            '>' => {
                if !self.match_char('=') {
                    self.match_char('>');
                }
                self.add_token(TokenKind::Symbol);
            }

            '&' | '|' => {
                self.match_char(ch);
                self.add_token(TokenKind::Symbol);
            }

            '#' => {
                self.match_char('!');
                self.add_token(TokenKind::Symbol);
            }

            '[' | ']' | '{' | '}' | ',' | ':' | '?' | '*' | '%' | '~' | '+' | '-' => {
                self.add_token(TokenKind::Symbol);
            }

            other => self.error_token(LexErrorKind::UnexpectedCharacter(other)),
        }
    }

    /// Scans string text up to the closing quote or the next `%(`.
    ///
    /// `opened_by_quote` is false when resuming after an interpolation's
    /// closing paren, which decides between the start/middle/end kinds.
    fn string_body(&mut self, opened_by_quote: bool) {
        loop {
            if self.is_at_end() {
                self.unterminated(LexErrorKind::UnterminatedString);
                return;
            }

            match self.advance() {
                '"' => {
                    let kind = if opened_by_quote {
                        TokenKind::String
                    } else {
                        TokenKind::StringEnd
                    };
                    self.add_token(kind);
                    return;
                }
                '\\' => {
                    if self.is_at_end() {
                        self.unterminated(LexErrorKind::UnterminatedString);
                        return;
                    }
                    // Escapes are only checked for shape here; decoding
                    // happens in `literal::decode_escapes`.
                    self.advance();
                }
                '%' => {
                    if self.match_char('(') {
                        let kind = if opened_by_quote {
                            TokenKind::StringStart
                        } else {
                            TokenKind::StringMiddle
                        };
                        self.add_token(kind);
                        self.interpolations.push(0);
                        return;
                    }
                    let at = self.current - 1;
                    self.record_error(LexErrorKind::UnexpectedCharacter('%'), Span::new(at, at + 1));
                }
                _ => {}
            }
        }
    }

    fn raw_string(&mut self) {
        while !self.is_at_end() {
            if self.source[self.current..].starts_with("\"\"\"") {
                self.current += 3;
                self.add_token(TokenKind::RawString);
                return;
            }
            self.advance();
        }
        self.unterminated(LexErrorKind::UnterminatedRawString);
    }

    /// Reports an unterminated literal without swallowing the whole file.
    ///
    /// The error token stops at the end of the line that opened it and
    /// scanning resumes from there.
    fn unterminated(&mut self, kind: LexErrorKind) {
        let end = self.source[self.start..]
            .find('\n')
            .map_or(self.source.len(), |i| self.start + i);
        self.current = end;
        self.error_token(kind);
    }

    /// Skips a `/* ... */` comment, honouring nested comments.
    fn block_comment(&mut self) {
        let mut depth = 1usize;

        while !self.is_at_end() {
            if self.peek() == '/' && self.peek_next() == '*' {
                self.advance();
                self.advance();
                depth += 1;
            } else if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                depth -= 1;
                if depth == 0 {
                    self.add_trivia(TriviaKind::BlockComment);
                    return;
                }
            } else {
                self.advance();
            }
        }

        let span = Span::new(self.start, self.current);
        self.record_error(LexErrorKind::UnterminatedComment, span);
        self.add_trivia(TriviaKind::BlockComment);
    }

    /// A `+` or `-` folds into a number only where an operand may start.
    /// The `)` of an `if`, `while` or `for` header ends no operand.
    fn sign_starts_number(&self) -> bool {
        if !self.peek().is_ascii_digit() {
            return false;
        }
        if self.peek() == '0' && self.peek_next() == 'x' {
            return false;
        }
        if self.closed_header.is_some_and(|i| i + 1 == self.tokens.len()) {
            return true;
        }
        !self.tokens.last().is_some_and(Token::ends_operand)
    }

    /// Scans a numeric literal; the first character is already consumed.
    fn number(&mut self, signed: bool) {
        let first = self.source[self.start..].chars().next().unwrap_or('0');

        if !signed && first == '0' && self.peek() == 'x' {
            self.advance();
            while self.peek().is_ascii_hexdigit() {
                self.advance();
            }
            self.add_token(TokenKind::Number);
            return;
        }

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        if self.peek() == 'e' {
            let rest = &self.source[self.current + 1..];
            let sign_len = usize::from(rest.starts_with(&['+', '-'][..]));
            let digits = rest[sign_len..]
                .chars()
                .take_while(char::is_ascii_digit)
                .count();

            if digits > 0 {
                self.current += 1 + sign_len + digits;
                if digits != 2 {
                    let text = self.source[self.start..self.current].to_string();
                    self.error_token(LexErrorKind::InvalidNumber(text));
                    return;
                }
            }
        }

        self.add_token(TokenKind::Number);
    }

    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text = &self.source[self.start..self.current];

        if is_keyword(text) {
            self.add_token(TokenKind::Keyword);
            return;
        }

        match grammar().classify_word(text) {
            Some(kind) => self.add_token(kind),
            None => {
                let text = text.to_string();
                self.error_token(LexErrorKind::InvalidIdentifier(text));
            }
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let span = Span::new(self.start, self.current);
        self.tokens.push(Token {
            kind,
            lexeme: self.source[span.as_range()].to_string(),
            span,
            leading_trivia: std::mem::take(&mut self.pending_trivia),
        });
    }

    fn add_trivia(&mut self, kind: TriviaKind) {
        let span = Span::new(self.start, self.current);
        self.pending_trivia.push(Trivia {
            kind,
            text: self.source[span.as_range()].to_string(),
            span,
        });
    }

    fn error_token(&mut self, kind: LexErrorKind) {
        let span = Span::new(self.start, self.current);
        self.record_error(kind, span);
        self.add_token(TokenKind::Error);
    }

    fn record_error(&mut self, kind: LexErrorKind, span: Span) {
        debug!(error = %kind, start = span.start, end = span.end, "lex error");
        self.errors.push(LexError::new(kind, span));
    }

    /// Conditionally consumes the next character.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes one character. Callers check `is_at_end` first.
    fn advance(&mut self) -> char {
        let ch = self.peek();
        self.current += ch.len_utf8();
        ch
    }

    /// The next character, or `'\0'` at end of input.
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    /// The character after `peek()`, or `'\0'`.
    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
