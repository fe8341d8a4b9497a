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
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{ParseResult, Parser};

impl Parser {
    /// Zero or more `#` / `#!` attributes.
    pub(crate) fn attributes(&mut self) -> ParseResult<Vec<Node>> {
        let mut attributes = Vec::new();
        loop {
            if let Some(hash) = self.match_symbol("#") {
                attributes.push(self.attribute(NodeKind::Attribute, hash)?);
            } else if let Some(hash) = self.match_symbol("#!") {
                attributes.push(self.attribute(NodeKind::RuntimeAttribute, hash)?);
            } else {
                return Ok(attributes);
            }
        }
    }

    /// The rest of an attribute after its `#` or `#!`.
    ///
    /// Accepts `value`, `name(value, ...)` and, for runtime attributes,
    /// a bare `(value, ...)` group.
    fn attribute(&mut self, kind: NodeKind, hash: Token) -> ParseResult<Node> {
        let mut attribute = Node::new(kind);
        attribute.push(hash);

        if kind == NodeKind::RuntimeAttribute && self.check_symbol("(") {
            self.attribute_group(&mut attribute)?;
        } else if self.peek().is_name_like() && self.peek_at(1).is_symbol("(") {
            attribute.push(self.consume_name()?);
            self.attribute_group(&mut attribute)?;
        } else {
            attribute.push(self.attribute_value()?);
        }

        Ok(attribute)
    }

    fn attribute_group(&mut self, attribute: &mut Node) -> ParseResult<()> {
        attribute.push(self.consume_symbol("(")?);
        if !self.check_symbol(")") {
            attribute.push(self.attribute_value()?);
            while let Some(comma) = self.match_symbol(",") {
                attribute.push(comma);
                attribute.push(self.attribute_value()?);
            }
        }
        attribute.push(self.consume_symbol(")")?);
        Ok(())
    }

    /// `name` or `key = literal`.
    fn attribute_value(&mut self) -> ParseResult<Node> {
        let name = self.consume_name()?;
        let Some(equals) = self.match_symbol("=") else {
            return Ok(Node::wrap(NodeKind::AttributeValue, name));
        };

        let mut value = Node::new(NodeKind::AttributeValue);
        value.push_field(Field::Key, name);
        value.push(equals);
        value.push_field(Field::Value, self.attribute_literal()?);
        Ok(value)
    }

    fn attribute_literal(&mut self) -> ParseResult<Node> {
        let token = self.peek();
        let kind = match token.kind {
            TokenKind::Name | TokenKind::ConstantName | TokenKind::ClassName => NodeKind::Name,
            TokenKind::String => NodeKind::String,
            TokenKind::Number => NodeKind::Number,
            TokenKind::Keyword if token.lexeme == "true" || token.lexeme == "false" => {
                NodeKind::Boolean
            }
            _ => return Err(self.error_here("a name, string, boolean or number")),
        };
        Ok(Node::leaf(kind, self.advance()))
    }
}
