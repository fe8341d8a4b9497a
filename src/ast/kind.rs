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

use serde::Serialize;
use std::fmt;

/// Every grammar rule that produces a node in the tree.
///
/// Names print in snake_case (`binary_expression`), matching the rule they
/// stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    SourceFile,
    Shebang,

    // Literals and identifiers
    String,
    RawString,
    Number,
    Boolean,
    Null,
    Name,
    Field,
    StaticField,
    ConstantName,
    ClassName,

    // Expressions
    Parenthetical,
    UnaryExpression,
    BinaryExpression,
    Conditional,
    Range,
    List,
    Map,
    Pair,
    IndexExpression,
    Subscript,
    CallExpression,
    ArgumentList,
    CallBody,

    // Statements
    Assignment,
    Block,
    VariableDefinition,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    IfStatement,
    ElseBranch,
    ForStatement,
    WhileStatement,
    ImportStatement,
    Rename,

    // Classes
    ClassDefinition,
    ClassBody,
    Parameter,
    ParameterList,
    MethodDeclaration,
    MethodDefinition,
    GetterDeclaration,
    GetterDefinition,
    SetterDeclaration,
    SetterDefinition,
    Constructor,
    PrefixOperatorDefinition,
    InfixOperatorDefinition,
    SubscriptOperatorDefinition,
    SubscriptSetterDefinition,
    StaticMethodDefinition,
    StaticGetterDefinition,
    StaticSetterDefinition,
    ForeignMethodDeclaration,
    ForeignGetterDeclaration,
    ForeignSetterDeclaration,
    ForeignSubscriptOperatorDeclaration,
    ForeignSubscriptSetterDeclaration,

    // Attributes
    Attribute,
    RuntimeAttribute,
    AttributeValue,

    /// Tokens skipped during error recovery, or a malformed token.
    Error,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::SourceFile => "source_file",
            NodeKind::Shebang => "shebang",
            NodeKind::String => "string",
            NodeKind::RawString => "raw_string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
            NodeKind::Name => "name",
            NodeKind::Field => "field",
            NodeKind::StaticField => "static_field",
            NodeKind::ConstantName => "constant_name",
            NodeKind::ClassName => "class_name",
            NodeKind::Parenthetical => "parenthetical",
            NodeKind::UnaryExpression => "unary_expression",
            NodeKind::BinaryExpression => "binary_expression",
            NodeKind::Conditional => "conditional",
            NodeKind::Range => "range",
            NodeKind::List => "list",
            NodeKind::Map => "map",
            NodeKind::Pair => "pair",
            NodeKind::IndexExpression => "index_expression",
            NodeKind::Subscript => "subscript",
            NodeKind::CallExpression => "call_expression",
            NodeKind::ArgumentList => "argument_list",
            NodeKind::CallBody => "call_body",
            NodeKind::Assignment => "assignment",
            NodeKind::Block => "block",
            NodeKind::VariableDefinition => "variable_definition",
            NodeKind::ReturnStatement => "return_statement",
            NodeKind::BreakStatement => "break_statement",
            NodeKind::ContinueStatement => "continue_statement",
            NodeKind::IfStatement => "if_statement",
            NodeKind::ElseBranch => "else_branch",
            NodeKind::ForStatement => "for_statement",
            NodeKind::WhileStatement => "while_statement",
            NodeKind::ImportStatement => "import_statement",
            NodeKind::Rename => "rename",
            NodeKind::ClassDefinition => "class_definition",
            NodeKind::ClassBody => "class_body",
            NodeKind::Parameter => "parameter",
            NodeKind::ParameterList => "parameter_list",
            NodeKind::MethodDeclaration => "method_declaration",
            NodeKind::MethodDefinition => "method_definition",
            NodeKind::GetterDeclaration => "getter_declaration",
            NodeKind::GetterDefinition => "getter_definition",
            NodeKind::SetterDeclaration => "setter_declaration",
            NodeKind::SetterDefinition => "setter_definition",
            NodeKind::Constructor => "constructor",
            NodeKind::PrefixOperatorDefinition => "prefix_operator_definition",
            NodeKind::InfixOperatorDefinition => "infix_operator_definition",
            NodeKind::SubscriptOperatorDefinition => "subscript_operator_definition",
            NodeKind::SubscriptSetterDefinition => "subscript_setter_definition",
            NodeKind::StaticMethodDefinition => "static_method_definition",
            NodeKind::StaticGetterDefinition => "static_getter_definition",
            NodeKind::StaticSetterDefinition => "static_setter_definition",
            NodeKind::ForeignMethodDeclaration => "foreign_method_declaration",
            NodeKind::ForeignGetterDeclaration => "foreign_getter_declaration",
            NodeKind::ForeignSetterDeclaration => "foreign_setter_declaration",
            NodeKind::ForeignSubscriptOperatorDeclaration => {
                "foreign_subscript_operator_declaration"
            }
            NodeKind::ForeignSubscriptSetterDeclaration => "foreign_subscript_setter_declaration",
            NodeKind::Attribute => "attribute",
            NodeKind::RuntimeAttribute => "runtime_attribute",
            NodeKind::AttributeValue => "attribute_value",
            NodeKind::Error => "ERROR",
        }
    }

    /// Kinds printed together with their source text.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Shebang
                | NodeKind::String
                | NodeKind::RawString
                | NodeKind::Number
                | NodeKind::Boolean
                | NodeKind::Null
                | NodeKind::Name
                | NodeKind::Field
                | NodeKind::StaticField
                | NodeKind::ConstantName
                | NodeKind::ClassName
                | NodeKind::Parameter
                | NodeKind::Error
        )
    }

    /// Kinds that are statements rather than expressions.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::Assignment
                | NodeKind::Block
                | NodeKind::VariableDefinition
                | NodeKind::ReturnStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::IfStatement
                | NodeKind::ForStatement
                | NodeKind::WhileStatement
                | NodeKind::ImportStatement
                | NodeKind::ClassDefinition
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named roles a child plays inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Left,
    Right,
    Operator,
    Operand,
    Condition,
    Name,
    SuperclassName,
    Body,
    Function,
    Indexee,
    Index,
    LoopVariable,
    Key,
    Value,
    For,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Left => "left",
            Field::Right => "right",
            Field::Operator => "operator",
            Field::Operand => "operand",
            Field::Condition => "condition",
            Field::Name => "name",
            Field::SuperclassName => "superclass_name",
            Field::Body => "body",
            Field::Function => "function",
            Field::Indexee => "indexee",
            Field::Index => "index",
            Field::LoopVariable => "loop_variable",
            Field::Key => "key",
            Field::Value => "value",
            Field::For => "for",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
