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


use crate::ast::{Field, Node, NodeKind};
use crate::error::SyntaxError;
use crate::lexer::keywords::starts_statement;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use tracing::{debug, trace};

/// Nesting limit used when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Result type shared by every grammar rule.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Recursive-descent parser over a lexed token stream.
///
/// Grammar rules live in `impl Parser` blocks spread across the sibling
/// modules. A rule either returns its node or an error; the statement loops
/// here turn errors into `ERROR` nodes and keep going, so one pass finds
/// every problem in a file.
pub struct Parser {
    pub tokens: Vec<Token>,
    pub current: usize,
    pub errors: Vec<SyntaxError>,
    pub(crate) depth: usize,
    pub(crate) max_depth: usize,
}

/// Parses a token stream into a `source_file` tree.
///
/// The stream normally comes from [`crate::lexer::tokenize`]; a missing
/// trailing `Eof` token is supplied.
pub fn parse(tokens: Vec<Token>, max_depth: usize) -> (Node, Vec<SyntaxError>) {
    let mut parser = Parser::new(tokens).with_max_depth(max_depth);
    let tree = parser.source_file();
    (tree, parser.errors)
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                span: Span::at(end),
                leading_trivia: Vec::new(),
            });
        }

        Self {
            tokens,
            current: 0,
            errors: Vec::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole stream.
    ///
    /// The tree spans the entire input and its last child is the `Eof`
    /// token, which carries any trailing comments and whitespace.
    pub fn source_file(&mut self) -> Node {
        let mut file = Node::new(NodeKind::SourceFile);

        if self.peek().kind == TokenKind::Shebang {
            let token = self.advance();
            file.push(Node::leaf(NodeKind::Shebang, token));
        }

        self.statement_list(&mut file, None, false);

        let eof = self.advance();
        let end = eof.span.end;
        file.push(eof);
        file.span = Span::new(0, end);

        trace!(errors = self.errors.len(), "parsed source file");
        file
    }

    /// Parses statements into `node` until end of input, or until a `}`
    /// when `in_braces` is set. The closing brace is left for the caller.
    pub(crate) fn statement_list(&mut self, node: &mut Node, field: Option<Field>, in_braces: bool) {
        loop {
            if self.is_at_end() || (in_braces && self.check_symbol("}")) {
                break;
            }

            let start = self.current;
            let item = match self.statement() {
                Ok(item) => item,
                Err(error) => {
                    self.report(error);
                    self.recover(start)
                }
            };

            match field {
                Some(field) => node.push_field(field, item),
                None => node.push(item),
            }
        }
    }

    /// Records an error unless it only restates a malformed token the lexer
    /// already reported.
    pub(crate) fn report(&mut self, error: SyntaxError) {
        let span = error.span();
        let restates_lex_error = !error.is_lex()
            && self
                .tokens
                .iter()
                .any(|t| t.kind == TokenKind::Error && t.span == span);

        if restates_lex_error {
            trace!(?span, "dropping parse error at a lexer error token");
            return;
        }

        debug!(code = error.code(), %error, "syntax error");
        self.errors.push(error);
    }

    /// Rewinds to `start` and skips tokens into an `ERROR` node.
    ///
    /// Skipping stops before the next recovery point outside any braces the
    /// skipped text opened: a statement keyword, a closing brace, or a token
    /// on a new line. At least one token is always consumed.
    pub(crate) fn recover(&mut self, start: usize) -> Node {
        self.current = start;
        let mut error = Node::new(NodeKind::Error);
        let mut braces = 0usize;

        while !self.is_at_end() {
            if !error.children.is_empty() && braces == 0 && self.at_recovery_point() {
                break;
            }

            let token = self.advance();
            if token.is_symbol("{") {
                braces += 1;
            } else if token.is_symbol("}") {
                braces = braces.saturating_sub(1);
            }
            error.push(token);
        }

        debug!(
            skipped = error.children.len(),
            start = error.span.start,
            end = error.span.end,
            "recovered"
        );
        error
    }

    fn at_recovery_point(&self) -> bool {
        let token = self.peek();
        token.is_symbol("}")
            || token.has_leading_newline()
            || (token.kind == TokenKind::Keyword && starts_statement(&token.lexeme))
    }
}
