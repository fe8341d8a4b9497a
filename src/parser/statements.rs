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
use crate::lexer::keywords::starts_statement;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{ParseResult, Parser};

impl Parser {
    /// Parses one statement, or an expression standing as a statement.
    pub fn statement(&mut self) -> ParseResult<Node> {
        self.nested(Self::statement_inner)
    }

    fn statement_inner(&mut self) -> ParseResult<Node> {
        let keyword = (self.peek().kind == TokenKind::Keyword).then(|| self.peek().lexeme.clone());

        match keyword.as_deref() {
            Some("return") => return self.return_statement(),
            Some("break") => return Ok(Node::leaf(NodeKind::BreakStatement, self.advance())),
            Some("continue") => return Ok(Node::leaf(NodeKind::ContinueStatement, self.advance())),
            Some("var") => return self.variable_definition(),
            Some("if") => return self.if_statement(),
            Some("for") => return self.for_statement(),
            Some("while") => return self.while_statement(),
            Some("import") => return self.import_statement(),
            Some("class") | Some("foreign") => return self.class_definition(Vec::new()),
            _ => {}
        }

        if self.check_symbol("#") || self.check_symbol("#!") {
            let attributes = self.attributes()?;
            return self.class_definition(attributes);
        }

        if self.check_symbol("{") && !self.at_map_start() {
            return self.block();
        }

        self.expression_statement()
    }

    /// `{` opens a map rather than a block when its first entry has the
    /// shape of a pair: a `:` outside any brackets that no `?` claims,
    /// reached before a `}`, an `=`, or a statement keyword.
    fn at_map_start(&self) -> bool {
        if !self.check_symbol("{") {
            return false;
        }

        let mut depth = 0usize;
        let mut conditionals = 0usize;
        for token in &self.tokens[self.current + 1..] {
            match token.kind {
                TokenKind::Eof => return false,
                TokenKind::StringStart => depth += 1,
                TokenKind::StringEnd => depth = depth.saturating_sub(1),
                TokenKind::Keyword if depth == 0 && starts_statement(&token.lexeme) => {
                    return false
                }
                TokenKind::Symbol => match token.lexeme.as_str() {
                    "(" | "[" | "{" => depth += 1,
                    "}" if depth == 0 => return false,
                    ")" | "]" | "}" => depth = depth.saturating_sub(1),
                    "=" if depth == 0 => return false,
                    "?" if depth == 0 => conditionals += 1,
                    ":" if depth == 0 && conditionals == 0 => return true,
                    ":" if depth == 0 => conditionals -= 1,
                    _ => {}
                },
                _ => {}
            }
        }
        false
    }

    /// An expression, or an assignment when `=` follows it.
    fn expression_statement(&mut self) -> ParseResult<Node> {
        let target = self.expression()?;

        let Some(equals) = self.match_symbol("=") else {
            return Ok(target);
        };

        let mut assignment = Node::new(NodeKind::Assignment);
        assignment.push_field(Field::Left, target);
        assignment.push(equals);
        assignment.push_field(Field::Right, self.expression()?);
        Ok(assignment)
    }

    /// `{ items }`. The braces stay in the node.
    pub(crate) fn block(&mut self) -> ParseResult<Node> {
        let mut block = Node::new(NodeKind::Block);
        block.push(self.consume_symbol("{")?);
        self.statement_list(&mut block, None, true);
        block.push(self.consume_symbol("}")?);
        Ok(block)
    }

    /// `return` with an optional value. The value is left out when nothing
    /// that can start an expression follows.
    fn return_statement(&mut self) -> ParseResult<Node> {
        let mut node = Node::leaf(NodeKind::ReturnStatement, self.advance());
        if self.at_expression_start() {
            node.push(self.expression()?);
        }
        Ok(node)
    }

    fn variable_definition(&mut self) -> ParseResult<Node> {
        let mut node = Node::leaf(NodeKind::VariableDefinition, self.advance());
        node.push_field(Field::Name, self.consume_name()?);

        if let Some(equals) = self.match_symbol("=") {
            node.push(equals);
            node.push(self.expression()?);
        }

        Ok(node)
    }

    fn if_statement(&mut self) -> ParseResult<Node> {
        let mut node = Node::leaf(NodeKind::IfStatement, self.advance());
        node.push(self.consume_symbol("(")?);
        node.push_field(Field::Condition, self.expression()?);
        node.push(self.consume_symbol(")")?);
        node.push(self.statement()?);

        // The nearest `if` takes the `else`.
        if let Some(else_keyword) = self.match_keyword("else") {
            let mut branch = Node::leaf(NodeKind::ElseBranch, else_keyword);
            branch.push(self.statement()?);
            node.push(branch);
        }

        Ok(node)
    }

    fn for_statement(&mut self) -> ParseResult<Node> {
        let mut node = Node::leaf(NodeKind::ForStatement, self.advance());
        node.push(self.consume_symbol("(")?);
        node.push_field(Field::LoopVariable, self.consume_name()?);
        node.push(self.consume_keyword("in")?);
        node.push(self.expression()?);
        node.push(self.consume_symbol(")")?);
        node.push(self.statement()?);
        Ok(node)
    }

    fn while_statement(&mut self) -> ParseResult<Node> {
        let mut node = Node::leaf(NodeKind::WhileStatement, self.advance());
        node.push(self.consume_symbol("(")?);
        node.push_field(Field::Condition, self.expression()?);
        node.push(self.consume_symbol(")")?);
        node.push(self.statement()?);
        Ok(node)
    }

    /// `import "path" for A, B as C`.
    fn import_statement(&mut self) -> ParseResult<Node> {
        let mut node = Node::leaf(NodeKind::ImportStatement, self.advance());

        if self.peek().kind != TokenKind::String {
            return Err(self.error_here("a module path string"));
        }
        node.push(Node::leaf(NodeKind::String, self.advance()));

        if let Some(for_keyword) = self.match_keyword("for") {
            node.push_field(Field::For, for_keyword);
            node.push(self.import_entry()?);
            while let Some(comma) = self.match_symbol(",") {
                node.push(comma);
                node.push(self.import_entry()?);
            }
        }

        Ok(node)
    }

    fn import_entry(&mut self) -> ParseResult<Node> {
        let name = self.consume_name()?;
        let Some(as_keyword) = self.match_keyword("as") else {
            return Ok(name);
        };

        let mut rename = Node::wrap(NodeKind::Rename, name);
        rename.push(as_keyword);
        rename.push(self.consume_name()?);
        Ok(rename)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{to_sexp, Node, NodeKind};
    use crate::error::SyntaxError;
    use crate::lexer::tokenize;
    use crate::parser::{parse, DEFAULT_MAX_DEPTH};

    fn parse_source(source: &str) -> (Node, Vec<SyntaxError>) {
        let (tokens, lex_errors) = tokenize(source, false);
        assert!(lex_errors.is_empty(), "{lex_errors:?}");
        parse(tokens, DEFAULT_MAX_DEPTH)
    }

    fn sexp(source: &str) -> String {
        let (tree, errors) = parse_source(source);
        assert!(errors.is_empty(), "{errors:?}");
        to_sexp(&tree)
    }

    #[test]
    fn variable_definition() {
        assert_eq!(
            sexp("var x = 1"),
            r#"(source_file (variable_definition name: (name "x") (number "1")))"#
        );
        assert_eq!(sexp("var x"), r#"(source_file (variable_definition name: (name "x")))"#);
    }

    #[test]
    fn assignment() {
        assert_eq!(
            sexp("a.b = c"),
            r#"(source_file (assignment left: (index_expression indexee: (name "a") index: (name "b")) right: (name "c")))"#
        );
    }

    #[test]
    fn if_else() {
        assert_eq!(
            sexp("if (a) b else { c }"),
            r#"(source_file (if_statement condition: (name "a") (name "b") (else_branch (block (name "c")))))"#
        );
    }

    #[test]
    fn negative_literal_after_a_header_matches_other_positions() {
        assert_eq!(
            sexp("if (x) -1"),
            r#"(source_file (if_statement condition: (name "x") (number "-1")))"#
        );
        assert_eq!(
            sexp("x = -1"),
            r#"(source_file (assignment left: (name "x") right: (number "-1")))"#
        );
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        assert_eq!(
            sexp("if (a) if (b) c else d"),
            r#"(source_file (if_statement condition: (name "a") (if_statement condition: (name "b") (name "c") (else_branch (name "d")))))"#
        );
    }

    #[test]
    fn for_loop() {
        assert_eq!(
            sexp("for (i in 1..3) { System.print(i) }"),
            r#"(source_file (for_statement loop_variable: (name "i") (range left: (number "1") operator: ".." right: (number "3")) (block (call_expression function: (index_expression indexee: (class_name "System") index: (name "print")) (argument_list (name "i"))))))"#
        );
    }

    #[test]
    fn while_loop_with_control_flow() {
        assert_eq!(
            sexp("while (true) {\n  if (x) break\n  continue\n}"),
            r#"(source_file (while_statement condition: (boolean "true") (block (if_statement condition: (name "x") (break_statement)) (continue_statement))))"#
        );
    }

    #[test]
    fn return_with_and_without_value() {
        assert_eq!(
            sexp("{ return x }"),
            r#"(source_file (block (return_statement (name "x"))))"#
        );
        assert_eq!(sexp("{ return }"), "(source_file (block (return_statement)))");
        assert_eq!(
            sexp("{ return\nvar y }"),
            r#"(source_file (block (return_statement) (variable_definition name: (name "y"))))"#
        );
    }

    #[test]
    fn imports() {
        assert_eq!(
            sexp(r#"import "io" for File, Directory as Dir"#),
            r#"(source_file (import_statement (string "\"io\"") for: "for" (name "File") (rename (name "Directory") (name "Dir"))))"#
        );
        assert_eq!(
            sexp(r#"import "meta""#),
            r#"(source_file (import_statement (string "\"meta\"")))"#
        );
    }

    #[test]
    fn import_needs_a_plain_string() {
        let (tree, errors) = parse_source("import foo");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "expected a module path string, found `foo`");
        assert!(tree.has_error());
    }

    #[test]
    fn map_or_block_at_statement_start() {
        assert_eq!(
            sexp("{a: 1}"),
            r#"(source_file (map (pair key: (name "a") value: (number "1"))))"#
        );
        assert_eq!(sexp("{}"), "(source_file (block))");
        assert_eq!(sexp("{ a }"), r#"(source_file (block (name "a")))"#);
    }

    #[test]
    fn map_keys_longer_than_one_token_at_statement_start() {
        for source in ["{a.b: 1}", "{-x: 1}", r#"{"k%(x)": 1}"#, "{f(1, 2): 3, g: 4}", "{a ? b : c: 1}"] {
            let (tree, errors) = parse_source(source);
            assert!(errors.is_empty(), "{source}: {errors:?}");
            assert!(tree.child_of_kind(NodeKind::Map).is_some(), "{source}: {}", to_sexp(&tree));
        }
    }

    #[test]
    fn conditional_inside_a_block_is_not_a_pair() {
        for source in ["{ a ? b : c }", "{ x = a ? b : c }", "{ {a: 1} }", "{ return a ? b : c }"] {
            let (tree, errors) = parse_source(source);
            assert!(errors.is_empty(), "{source}: {errors:?}");
            assert!(tree.child_of_kind(NodeKind::Block).is_some(), "{source}: {}", to_sexp(&tree));
        }
    }

    #[test]
    fn errors_inside_a_block_stay_inside() {
        let (tree, errors) = parse_source("{\n  var = 1\n  x\n}\ny");
        assert_eq!(errors.len(), 1);
        let block = tree.child_of_kind(NodeKind::Block).expect("block survives");
        assert!(block.child_of_kind(NodeKind::Error).is_some());
        assert!(block.child_of_kind(NodeKind::Name).is_some());
        assert!(tree.child_of_kind(NodeKind::Name).is_some());
    }

    #[test]
    fn every_error_is_reported_in_one_pass() {
        let (_, errors) = parse_source("var = 1\nif x\nfor (1 in y) z");
        assert_eq!(errors.len(), 3);
    }
}
