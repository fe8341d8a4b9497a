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


//! Expressions, by binding power.
//!
//! The loop in [`Parser::expression_bp`] handles the infix tiers from
//! [`crate::grammar`]: conditionals and ranges bind loosest, every binary
//! operator shares one flat left-associative level above them. Prefix
//! operators come next and postfix index, subscript and call bind tightest.

use crate::ast::{Field, Node, NodeKind};
use crate::error::ParseError;
use crate::grammar::{grammar, InfixKind};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{ParseResult, Parser};

impl Parser {
    pub fn expression(&mut self) -> ParseResult<Node> {
        self.nested(|p| p.expression_bp(0))
    }

    /// Parses operators whose left binding power is at least `min_power`.
    fn expression_bp(&mut self, min_power: u8) -> ParseResult<Node> {
        let mut left = self.unary()?;

        while let Some(infix) = grammar().infix(self.peek()) {
            if infix.left_power < min_power {
                break;
            }

            let operator = self.advance();
            left = match infix.kind {
                InfixKind::Conditional => self.conditional(left, operator, infix.right_power)?,
                InfixKind::Binary | InfixKind::Range => {
                    let right = self.nested(|p| p.expression_bp(infix.right_power))?;
                    let kind = if infix.kind == InfixKind::Range {
                        NodeKind::Range
                    } else {
                        NodeKind::BinaryExpression
                    };

                    let mut node = Node::new(kind);
                    node.push_field(Field::Left, left);
                    node.push_field(Field::Operator, operator);
                    node.push_field(Field::Right, right);
                    node
                }
            };
        }

        Ok(left)
    }

    /// `condition ? then : else`, with `?` already consumed.
    fn conditional(&mut self, condition: Node, question: Token, power: u8) -> ParseResult<Node> {
        let mut node = Node::new(NodeKind::Conditional);
        node.push_field(Field::Condition, condition);
        node.push(question);
        node.push(self.expression()?);
        node.push(self.consume_symbol(":")?);
        node.push(self.nested(|p| p.expression_bp(power))?);
        Ok(node)
    }

    fn unary(&mut self) -> ParseResult<Node> {
        if !grammar().is_prefix_operator(self.peek()) {
            return self.postfix();
        }

        let operator = self.advance();
        let operand = self.nested(Self::unary)?;

        let mut node = Node::new(NodeKind::UnaryExpression);
        node.push_field(Field::Operator, operator);
        node.push_field(Field::Operand, operand);
        Ok(node)
    }

    fn postfix(&mut self) -> ParseResult<Node> {
        let mut expr = self.primary()?;

        loop {
            if self.check_symbol(".") {
                let dot = self.advance();
                let index = self.consume_name()?;

                let mut node = Node::new(NodeKind::IndexExpression);
                node.push_field(Field::Indexee, expr);
                node.push(dot);
                node.push_field(Field::Index, index);
                expr = node;
            } else if self.check_symbol("[") {
                let mut node = Node::new(NodeKind::Subscript);
                node.push_field(Field::Indexee, expr);
                node.push(self.advance());
                node.push(self.argument_list()?);
                node.push(self.consume_symbol("]")?);
                expr = node;
            } else if is_callee(&expr) && self.check_symbol("(") {
                let mut node = Node::new(NodeKind::CallExpression);
                node.push_field(Field::Function, expr);
                node.push(self.advance());
                if !self.check_symbol(")") {
                    node.push(self.argument_list()?);
                }
                node.push(self.consume_symbol(")")?);
                if self.check_symbol("{") {
                    node.push(self.call_body()?);
                }
                expr = node;
            } else if is_callee(&expr) && self.check_symbol("{") {
                let mut node = Node::new(NodeKind::CallExpression);
                node.push_field(Field::Function, expr);
                node.push(self.call_body()?);
                expr = node;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn primary(&mut self) -> ParseResult<Node> {
        let token = self.peek();
        let leaf = match token.kind {
            TokenKind::Number => Some(NodeKind::Number),
            TokenKind::RawString => Some(NodeKind::RawString),
            TokenKind::Name => Some(NodeKind::Name),
            TokenKind::Field => Some(NodeKind::Field),
            TokenKind::StaticField => Some(NodeKind::StaticField),
            TokenKind::ConstantName => Some(NodeKind::ConstantName),
            TokenKind::ClassName => Some(NodeKind::ClassName),
            // Already reported by the lexer.
            TokenKind::Error => Some(NodeKind::Error),
            TokenKind::Keyword => match token.lexeme.as_str() {
                "true" | "false" => Some(NodeKind::Boolean),
                "null" => Some(NodeKind::Null),
                _ => None,
            },
            _ => None,
        };

        if let Some(kind) = leaf {
            return Ok(Node::leaf(kind, self.advance()));
        }

        if self.peek().is_string_start() {
            self.string()
        } else if self.check_symbol("(") {
            self.parenthetical()
        } else if self.check_symbol("[") {
            self.list()
        } else if self.check_symbol("{") {
            self.map()
        } else {
            Err(self.error_here("an expression"))
        }
    }

    /// A plain string, or the pieces of an interpolated one with the
    /// embedded expressions between them. An interpolation may hold any
    /// number of expressions, including none.
    fn string(&mut self) -> ParseResult<Node> {
        let first = self.advance();
        let interpolated = first.kind == TokenKind::StringStart;
        let mut string = Node::leaf(NodeKind::String, first);
        if !interpolated {
            return Ok(string);
        }

        loop {
            match self.peek().kind {
                TokenKind::StringMiddle => string.push(self.advance()),
                TokenKind::StringEnd => {
                    string.push(self.advance());
                    return Ok(string);
                }
                // The text after a closed `%(...)` never found its quote.
                // The lexer has already reported it.
                TokenKind::Error if self.peek().lexeme.starts_with(')') => {
                    string.push(Node::leaf(NodeKind::Error, self.advance()));
                    return Ok(string);
                }
                _ if self.at_expression_start() => string.push(self.expression()?),
                _ => {
                    let token = self.peek();
                    return Err(ParseError::new(
                        "`)` closing the interpolation",
                        token.describe(),
                        token.span,
                    )
                    .with_help("every `%(` inside a string needs a matching `)`")
                    .into());
                }
            }
        }
    }

    fn parenthetical(&mut self) -> ParseResult<Node> {
        let mut node = Node::new(NodeKind::Parenthetical);
        node.push(self.consume_symbol("(")?);
        node.push(self.expression()?);
        node.push(self.consume_symbol(")")?);
        Ok(node)
    }

    fn list(&mut self) -> ParseResult<Node> {
        let mut list = Node::new(NodeKind::List);
        list.push(self.consume_symbol("[")?);

        if !self.check_symbol("]") {
            list.push(self.expression()?);
            while let Some(comma) = self.match_symbol(",") {
                list.push(comma);
                if self.check_symbol("]") {
                    let token = self.peek();
                    return Err(ParseError::new("an expression", token.describe(), token.span)
                        .with_help("list literals do not take a trailing comma")
                        .into());
                }
                list.push(self.expression()?);
            }
        }

        list.push(self.consume_symbol("]")?);
        Ok(list)
    }

    /// `{ key: value, ... }`, trailing comma allowed.
    pub(crate) fn map(&mut self) -> ParseResult<Node> {
        let mut map = Node::new(NodeKind::Map);
        map.push(self.consume_symbol("{")?);

        while !self.check_symbol("}") {
            map.push(self.pair()?);
            match self.match_symbol(",") {
                Some(comma) => map.push(comma),
                None => break,
            }
        }

        map.push(self.consume_symbol("}")?);
        Ok(map)
    }

    fn pair(&mut self) -> ParseResult<Node> {
        let mut pair = Node::new(NodeKind::Pair);
        pair.push_field(Field::Key, self.expression()?);
        pair.push(self.consume_symbol(":")?);
        pair.push_field(Field::Value, self.expression()?);
        Ok(pair)
    }

    /// One or more comma-separated expressions.
    fn argument_list(&mut self) -> ParseResult<Node> {
        let mut arguments = Node::new(NodeKind::ArgumentList);
        arguments.push(self.expression()?);
        while let Some(comma) = self.match_symbol(",") {
            arguments.push(comma);
            arguments.push(self.expression()?);
        }
        Ok(arguments)
    }

    /// `{ |params| items }`, the trailing block of a call.
    pub(crate) fn call_body(&mut self) -> ParseResult<Node> {
        self.nested(|p| {
            let mut body = Node::new(NodeKind::CallBody);
            body.push(p.consume_symbol("{")?);

            if let Some(bar) = p.match_symbol("|") {
                body.push(bar);
                body.push(p.parameter_list()?);
                body.push(p.consume_symbol("|")?);
            }

            p.statement_list(&mut body, Some(Field::Body), true);
            body.push(p.consume_symbol("}")?);
            Ok(body)
        })
    }
}

/// Only a bare name or a method access can be called.
fn is_callee(expr: &Node) -> bool {
    matches!(expr.kind, NodeKind::Name | NodeKind::IndexExpression)
}
