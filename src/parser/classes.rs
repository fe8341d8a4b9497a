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


//! Class definitions and class members.
//!
//! Members are told apart by a couple of tokens of lookahead: the keyword
//! in front (`foreign`, `construct`, `static`), then the token after the
//! member name (`(` for methods, `=` for setters, anything else for
//! getters). Operators and subscripts are recognised by their first token.

use crate::ast::{Field, Node, NodeKind};
use crate::grammar::grammar;
use crate::parser::parser::{ParseResult, Parser};
use tracing::trace;

/// What follows a member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberShape {
    Method,
    Getter,
    Setter,
}

impl Parser {
    /// `[attributes] [foreign] class Name [is Super] { members }`.
    pub(crate) fn class_definition(&mut self, attributes: Vec<Node>) -> ParseResult<Node> {
        let mut class = Node::new(NodeKind::ClassDefinition);
        for attribute in attributes {
            class.push(attribute);
        }

        if let Some(foreign) = self.match_keyword("foreign") {
            class.push(foreign);
        }
        class.push(self.consume_keyword("class")?);
        class.push_field(Field::Name, self.consume_name()?);

        if let Some(is) = self.match_keyword("is") {
            class.push(is);
            class.push_field(Field::SuperclassName, self.consume_name()?);
        }

        class.push(self.class_body()?);
        Ok(class)
    }

    fn class_body(&mut self) -> ParseResult<Node> {
        let mut body = Node::new(NodeKind::ClassBody);
        body.push(self.consume_symbol("{")?);

        while !self.is_at_end() && !self.check_symbol("}") {
            let start = self.current;
            match self.class_member() {
                Ok(nodes) => {
                    for node in nodes {
                        body.push(node);
                    }
                }
                Err(error) => {
                    self.report(error);
                    body.push(self.recover(start));
                }
            }
        }

        body.push(self.consume_symbol("}")?);
        Ok(body)
    }

    /// A member with the attributes in front of it.
    fn class_member(&mut self) -> ParseResult<Vec<Node>> {
        let mut nodes = self.attributes()?;
        let member = self.member()?;
        trace!(kind = %member.kind, "class member");
        nodes.push(member);
        Ok(nodes)
    }

    fn member(&mut self) -> ParseResult<Node> {
        if self.check_keyword("foreign") {
            return self.foreign_member();
        }

        if let Some(construct) = self.match_keyword("construct") {
            let mut node = Node::leaf(NodeKind::Constructor, construct);
            node.push(self.method_definition()?);
            return Ok(node);
        }

        if let Some(keyword) = self.match_keyword("static") {
            let (kind, definition) = match self.member_shape()? {
                MemberShape::Method => (NodeKind::StaticMethodDefinition, self.method_definition()?),
                MemberShape::Getter => (NodeKind::StaticGetterDefinition, self.getter_definition()?),
                MemberShape::Setter => (NodeKind::StaticSetterDefinition, self.setter_definition()?),
            };
            let mut node = Node::leaf(kind, keyword);
            node.push(definition);
            return Ok(node);
        }

        if self.check_symbol("[") {
            return self.subscript_definition();
        }

        if grammar().is_overloadable_prefix(self.peek()) && self.peek_at(1).is_symbol("{") {
            let mut node = Node::new(NodeKind::PrefixOperatorDefinition);
            node.push_field(Field::Operator, self.advance());
            node.push_field(Field::Body, self.block()?);
            return Ok(node);
        }

        if grammar().is_overloadable_infix(self.peek()) && self.peek_at(1).is_symbol("(") {
            let mut node = Node::new(NodeKind::InfixOperatorDefinition);
            node.push_field(Field::Operator, self.advance());
            node.push(self.consume_symbol("(")?);
            node.push(self.consume_parameter()?);
            node.push(self.consume_symbol(")")?);
            node.push_field(Field::Body, self.block()?);
            return Ok(node);
        }

        match self.member_shape()? {
            MemberShape::Method => self.method_definition(),
            MemberShape::Getter => self.getter_definition(),
            MemberShape::Setter => self.setter_definition(),
        }
    }

    fn member_shape(&self) -> ParseResult<MemberShape> {
        if !self.peek().is_name_like() {
            return Err(self.error_here("a class member"));
        }

        let next = self.peek_at(1);
        Ok(if next.is_symbol("(") {
            MemberShape::Method
        } else if next.is_symbol("=") {
            MemberShape::Setter
        } else {
            MemberShape::Getter
        })
    }

    /// `foreign [static] signature`, or a foreign subscript.
    fn foreign_member(&mut self) -> ParseResult<Node> {
        let foreign = self.consume_keyword("foreign")?;

        if self.check_symbol("[") {
            let mut node = Node::leaf(NodeKind::ForeignSubscriptOperatorDeclaration, foreign);
            self.subscript_parameters(&mut node)?;
            if self.check_symbol("=") {
                node.kind = NodeKind::ForeignSubscriptSetterDeclaration;
                self.setter_parameter(&mut node)?;
            }
            return Ok(node);
        }

        let static_keyword = self.match_keyword("static");
        let (kind, declaration) = match self.member_shape()? {
            MemberShape::Method => (NodeKind::ForeignMethodDeclaration, self.method_declaration()?),
            MemberShape::Getter => (NodeKind::ForeignGetterDeclaration, self.getter_declaration()?),
            MemberShape::Setter => (NodeKind::ForeignSetterDeclaration, self.setter_declaration()?),
        };

        let mut node = Node::leaf(kind, foreign);
        if let Some(keyword) = static_keyword {
            node.push(keyword);
        }
        node.push(declaration);
        Ok(node)
    }

    /// `[params] { body }` or `[params]=(value) { body }`.
    fn subscript_definition(&mut self) -> ParseResult<Node> {
        let mut node = Node::new(NodeKind::SubscriptOperatorDefinition);
        self.subscript_parameters(&mut node)?;
        if self.check_symbol("=") {
            node.kind = NodeKind::SubscriptSetterDefinition;
            self.setter_parameter(&mut node)?;
        }
        node.push_field(Field::Body, self.block()?);
        Ok(node)
    }

    fn subscript_parameters(&mut self, node: &mut Node) -> ParseResult<()> {
        node.push(self.consume_symbol("[")?);
        node.push(self.parameter_list()?);
        node.push(self.consume_symbol("]")?);
        Ok(())
    }

    /// `= ( value )`.
    fn setter_parameter(&mut self, node: &mut Node) -> ParseResult<()> {
        node.push(self.consume_symbol("=")?);
        node.push(self.consume_symbol("(")?);
        node.push(self.consume_parameter()?);
        node.push(self.consume_symbol(")")?);
        Ok(())
    }

    fn method_declaration(&mut self) -> ParseResult<Node> {
        let mut declaration = Node::wrap(NodeKind::MethodDeclaration, self.consume_name()?);
        declaration.push(self.consume_symbol("(")?);
        if !self.check_symbol(")") {
            declaration.push(self.parameter_list()?);
        }
        declaration.push(self.consume_symbol(")")?);
        Ok(declaration)
    }

    fn method_definition(&mut self) -> ParseResult<Node> {
        let mut definition = Node::wrap(NodeKind::MethodDefinition, self.method_declaration()?);
        definition.push_field(Field::Body, self.block()?);
        Ok(definition)
    }

    fn getter_declaration(&mut self) -> ParseResult<Node> {
        Ok(Node::wrap(NodeKind::GetterDeclaration, self.consume_name()?))
    }

    fn getter_definition(&mut self) -> ParseResult<Node> {
        let mut definition = Node::wrap(NodeKind::GetterDefinition, self.getter_declaration()?);
        definition.push_field(Field::Body, self.block()?);
        Ok(definition)
    }

    fn setter_declaration(&mut self) -> ParseResult<Node> {
        let mut declaration = Node::wrap(NodeKind::SetterDeclaration, self.consume_name()?);
        self.setter_parameter(&mut declaration)?;
        Ok(declaration)
    }

    fn setter_definition(&mut self) -> ParseResult<Node> {
        let mut definition = Node::wrap(NodeKind::SetterDefinition, self.setter_declaration()?);
        definition.push_field(Field::Body, self.block()?);
        Ok(definition)
    }

    /// `a, b, c` in method signatures and call bodies.
    pub(crate) fn parameter_list(&mut self) -> ParseResult<Node> {
        let mut list = Node::wrap(NodeKind::ParameterList, self.consume_parameter()?);
        while let Some(comma) = self.match_symbol(",") {
            list.push(comma);
            list.push(self.consume_parameter()?);
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{to_sexp, Field, Node, NodeKind};
    use crate::error::SyntaxError;
    use crate::lexer::tokenize;
    use crate::parser::{parse, DEFAULT_MAX_DEPTH};

    fn parse_source(source: &str) -> (Node, Vec<SyntaxError>) {
        let (tokens, lex_errors) = tokenize(source, false);
        assert!(lex_errors.is_empty(), "{lex_errors:?}");
        parse(tokens, DEFAULT_MAX_DEPTH)
    }

    /// The members of the first class in `source`.
    fn members(source: &str) -> Vec<String> {
        let (tree, errors) = parse_source(source);
        assert!(errors.is_empty(), "{errors:?}");
        let class = tree.child_of_kind(NodeKind::ClassDefinition).expect("a class");
        let body = class.child_of_kind(NodeKind::ClassBody).expect("a body");
        body.child_nodes().map(to_sexp).collect()
    }

    #[test]
    fn class_with_superclass_and_constructor() {
        let (tree, errors) = parse_source("class Foo is Bar { construct new() {} }");
        assert!(errors.is_empty());

        let class = tree.child_of_kind(NodeKind::ClassDefinition).unwrap();
        assert_eq!(class.node_by_field(Field::Name).unwrap().text(), "Foo");
        assert_eq!(class.node_by_field(Field::SuperclassName).unwrap().text(), "Bar");

        let body = class.child_of_kind(NodeKind::ClassBody).unwrap();
        let members: Vec<_> = body.child_nodes().collect();
        assert_eq!(members.len(), 1);
        assert_eq!(
            to_sexp(members[0]),
            r#"(constructor (method_definition (method_declaration (name "new")) body: (block)))"#
        );
    }

    #[test]
    fn getters_setters_and_methods() {
        let got = members("class A {\n  x { _x }\n  x=(value) { _x = value }\n  add(a, b) { a + b }\n}");
        assert_eq!(
            got,
            [
                r#"(getter_definition (getter_declaration (name "x")) body: (block (field "_x")))"#,
                r#"(setter_definition (setter_declaration (name "x") (parameter "value")) body: (block (assignment left: (field "_x") right: (name "value"))))"#,
                r#"(method_definition (method_declaration (name "add") (parameter_list (parameter "a") (parameter "b"))) body: (block (binary_expression left: (name "a") operator: "+" right: (name "b"))))"#,
            ]
        );
    }

    #[test]
    fn static_members() {
        let got = members("class A {\n  static create() { A.new() }\n  static count { __count }\n  static count=(n) { __count = n }\n}");
        let kinds: Vec<_> = got.iter().map(|s| s.split_whitespace().next().unwrap()).collect();
        assert_eq!(
            kinds,
            [
                "(static_method_definition",
                "(static_getter_definition",
                "(static_setter_definition",
            ]
        );
    }

    #[test]
    fn operators() {
        let got = members("class V {\n  -{ V.new(-x) }\n  +(other) { x }\n  ==(other) { true }\n  ..(other) { x }\n}");
        assert_eq!(
            got,
            [
                r#"(prefix_operator_definition operator: "-" body: (block (call_expression function: (index_expression indexee: (constant_name "V") index: (name "new")) (argument_list (unary_expression operator: "-" operand: (name "x"))))))"#,
                r#"(infix_operator_definition operator: "+" (parameter "other") body: (block (name "x")))"#,
                r#"(infix_operator_definition operator: "==" (parameter "other") body: (block (boolean "true")))"#,
                r#"(infix_operator_definition operator: ".." (parameter "other") body: (block (name "x")))"#,
            ]
        );
    }

    #[test]
    fn subscripts() {
        let got = members("class Grid {\n  [x, y] { 0 }\n  [x, y]=(value) { value }\n}");
        assert_eq!(
            got,
            [
                r#"(subscript_operator_definition (parameter_list (parameter "x") (parameter "y")) body: (block (number "0")))"#,
                r#"(subscript_setter_definition (parameter_list (parameter "x") (parameter "y")) (parameter "value") body: (block (name "value")))"#,
            ]
        );
    }

    #[test]
    fn foreign_declarations() {
        let got = members(
            "foreign class File {\n  foreign static open(path)\n  foreign size\n  foreign mode=(m)\n  foreign [i]\n  foreign [i]=(v)\n}",
        );
        assert_eq!(
            got,
            [
                r#"(foreign_method_declaration (method_declaration (name "open") (parameter_list (parameter "path"))))"#,
                r#"(foreign_getter_declaration (getter_declaration (name "size")))"#,
                r#"(foreign_setter_declaration (setter_declaration (name "mode") (parameter "m")))"#,
                r#"(foreign_subscript_operator_declaration (parameter_list (parameter "i")))"#,
                r#"(foreign_subscript_setter_declaration (parameter_list (parameter "i")) (parameter "v"))"#,
            ]
        );
    }

    #[test]
    fn member_attributes() {
        let got = members("class A {\n  #doc = \"getter\"\n  x { 1 }\n}");
        assert_eq!(
            got,
            [
                r#"(attribute (attribute_value key: (name "doc") value: (string "\"getter\"")))"#,
                r#"(getter_definition (getter_declaration (name "x")) body: (block (number "1")))"#,
            ]
        );
    }

    #[test]
    fn bad_member_is_skipped() {
        let (tree, errors) = parse_source("class A {\n  1 + 2\n  x { 1 }\n}");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "expected a class member, found `1`");

        let class = tree.child_of_kind(NodeKind::ClassDefinition).unwrap();
        let body = class.child_of_kind(NodeKind::ClassBody).unwrap();
        let kinds: Vec<_> = body.child_nodes().map(|n| n.kind).collect();
        assert_eq!(kinds, [NodeKind::Error, NodeKind::GetterDefinition]);
    }
}
