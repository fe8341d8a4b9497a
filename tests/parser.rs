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


use wren_syntax::{parse, parse_with, Field, NodeKind, ParseOptions};

const COUNTER: &str = include_str!("fixtures/counter.wren");

fn sexp(source: &str) -> String {
    let parse = parse(source);
    assert!(parse.is_ok(), "{:?}", parse.errors);
    parse.sexp()
}

#[test]
fn flat_binary_precedence() {
    assert_eq!(
        sexp("1 + 2 * 3"),
        r#"(source_file (binary_expression left: (binary_expression left: (number "1") operator: "+" right: (number "2")) operator: "*" right: (number "3")))"#
    );
}

#[test]
fn call_with_block_is_one_call() {
    let parse = parse("foo { 1 }");
    assert!(parse.is_ok());

    let statements: Vec<_> = parse.tree.child_nodes().collect();
    assert_eq!(statements.len(), 1);
    let call = statements[0];
    assert_eq!(call.kind, NodeKind::CallExpression);
    assert_eq!(call.node_by_field(Field::Function).unwrap().text(), "foo");

    let body = call.child_of_kind(NodeKind::CallBody).unwrap();
    let items: Vec<_> = body.children_by_field(Field::Body).collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].as_node().unwrap().kind, NodeKind::Number);
}

#[test]
fn class_with_constructor() {
    assert_eq!(
        sexp("class Foo is Bar { construct new() {} }"),
        r#"(source_file (class_definition name: (name "Foo") superclass_name: (name "Bar") (class_body (constructor (method_definition (method_declaration (name "new")) body: (block))))))"#
    );
}

#[test]
fn unterminated_string_is_one_lex_error() {
    let parse = parse("\"abc");
    assert_eq!(parse.errors.len(), 1);
    assert!(parse.errors[0].is_lex());
    assert_eq!(parse.errors[0].to_string(), "unterminated string literal");
    assert_eq!(parse.tree.to_source(), "\"abc");
}

#[test]
fn unterminated_string_does_not_swallow_the_file() {
    let parse = parse("var a = \"abc\nvar b = 2");
    assert_eq!(parse.errors.len(), 1);
    let definitions = parse.tree.find_all(NodeKind::VariableDefinition);
    assert_eq!(definitions.len(), 2);
}

#[test]
fn nested_block_comment_is_one_comment() {
    let source = "/* a /* b */ c */";
    let parse = parse(source);
    assert!(parse.is_ok());
    assert_eq!(parse.sexp(), "(source_file)");

    let tokens = parse.tree.tokens();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].leading_trivia.len(), 1);
    assert_eq!(tokens[0].leading_trivia[0].text, source);
    assert!(tokens[0].leading_trivia[0].is_comment());
}

#[test]
fn full_program() {
    let parse = parse(COUNTER);
    assert!(parse.is_ok(), "{:?}", parse.errors);
    assert_eq!(parse.tree.to_source(), COUNTER);

    let tree = &parse.tree;
    assert_eq!(tree.find_all(NodeKind::Shebang).len(), 1);
    assert_eq!(tree.find_all(NodeKind::ImportStatement).len(), 1);
    assert_eq!(tree.find_all(NodeKind::Attribute).len(), 1);
    assert_eq!(tree.find_all(NodeKind::Constructor).len(), 1);
    // `count` plus the one inside `static zero`.
    assert_eq!(tree.find_all(NodeKind::GetterDefinition).len(), 2);
    assert_eq!(tree.find_all(NodeKind::SetterDefinition).len(), 1);
    assert_eq!(tree.find_all(NodeKind::InfixOperatorDefinition).len(), 1);
    assert_eq!(tree.find_all(NodeKind::SubscriptOperatorDefinition).len(), 1);
    assert_eq!(tree.find_all(NodeKind::StaticGetterDefinition).len(), 1);
    assert_eq!(tree.find_all(NodeKind::ForeignGetterDeclaration).len(), 1);
    assert_eq!(tree.find_all(NodeKind::ForStatement).len(), 1);
    assert_eq!(tree.find_all(NodeKind::CallBody).len(), 1);

    let class = tree.child_of_kind(NodeKind::ClassDefinition).unwrap();
    assert_eq!(class.node_by_field(Field::Name).unwrap().text(), "Counter");
    assert_eq!(class.node_by_field(Field::SuperclassName).unwrap().text(), "Object");

    // The block comment inside the string literal is string text.
    let interpolated = tree
        .find_all(NodeKind::String)
        .into_iter()
        .find(|s| s.child_nodes().next().is_some())
        .unwrap();
    assert!(interpolated.text().contains("/* not a comment */"));
}

#[test]
fn errors_are_collected_in_one_pass() {
    let source = include_str!("fixtures/broken.wren");
    let parse = parse(source);

    assert_eq!(parse.errors.len(), 2, "{:?}", parse.errors);
    assert_eq!(parse.tree.to_source(), source);
    assert_eq!(parse.tree.find_all(NodeKind::Error).len(), 2);
    // The valid statement between the two broken ones survives.
    assert_eq!(parse.tree.find_all(NodeKind::CallExpression).len(), 1);
}

#[test]
fn max_depth_is_configurable() {
    let source = "[[[[[[x]]]]]]";
    assert!(parse(source).is_ok());

    let shallow = parse_with(source, &ParseOptions::new().max_depth(4));
    assert_eq!(shallow.errors.len(), 1);
    assert!(shallow.errors[0].help().unwrap().contains("4 levels"));
}

#[test]
fn pathological_nesting_does_not_overflow() {
    let source = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    let parse = parse_with(&source, &ParseOptions::new().max_depth(64));
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.tree.to_source(), source);
}

#[test]
fn json_serialisation() {
    let parse = parse("x");
    let json = serde_json::to_value(&parse).unwrap();
    assert_eq!(json["tree"]["kind"], "source_file");
    assert_eq!(json["tree"]["children"][0]["element"]["node"]["kind"], "name");
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);
}
