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

use crate::ast::kind::{Field, NodeKind};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use serde::Serialize;

/// One recognised grammar rule instance.
///
/// A node owns its children outright. Leaves are always tokens, so walking
/// the tree in order visits every token of the input exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub children: Vec<Child>,
}

/// A child slot, optionally labelled with the role it plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Child {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    pub element: Element,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Node(Node),
    Token(Token),
}

impl Element {
    pub fn span(&self) -> Span {
        match self {
            Element::Node(node) => node.span,
            Element::Token(token) => token.span,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Element::Token(token) => Some(token),
            Element::Node(_) => None,
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Token> for Element {
    fn from(token: Token) -> Self {
        Element::Token(token)
    }
}

impl Node {
    /// Creates an empty node. Its span grows as children are pushed.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            span: Span::default(),
            children: Vec::new(),
        }
    }

    /// A node wrapping a single token, e.g. `name` or `number`.
    pub fn leaf(kind: NodeKind, token: Token) -> Self {
        let mut node = Node::new(kind);
        node.push(token);
        node
    }

    /// A node wrapping a single child node, e.g. `constructor`.
    pub fn wrap(kind: NodeKind, inner: Node) -> Self {
        let mut node = Node::new(kind);
        node.push(inner);
        node
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.push_child(None, element.into());
    }

    pub fn push_field(&mut self, field: Field, element: impl Into<Element>) {
        self.push_child(Some(field), element.into());
    }

    fn push_child(&mut self, field: Option<Field>, element: Element) {
        let span = element.span();
        // The Eof token has an empty span at the end of input; it must not
        // stretch a node over trailing trivia.
        let counts = !matches!(&element, Element::Token(t) if t.kind == TokenKind::Eof);
        if counts {
            self.span = if self.children.iter().any(|c| !is_eof(c)) {
                self.span.merge(span)
            } else {
                span
            };
        }
        self.children.push(Child { field, element });
    }

    /// The first child labelled `field`.
    pub fn child_by_field(&self, field: Field) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.field == Some(field))
            .map(|c| &c.element)
    }

    /// The first child node labelled `field`.
    pub fn node_by_field(&self, field: Field) -> Option<&Node> {
        self.child_by_field(field).and_then(Element::as_node)
    }

    /// All children labelled `field`, in order.
    pub fn children_by_field(&self, field: Field) -> impl Iterator<Item = &Element> {
        self.children
            .iter()
            .filter(move |c| c.field == Some(field))
            .map(|c| &c.element)
    }

    /// Direct child nodes, skipping tokens.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| c.element.as_node())
    }

    /// The first direct child node of the given kind.
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&Node> {
        self.child_nodes().find(|n| n.kind == kind)
    }

    /// All descendants of `kind` in pre-order, including `self`.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_kind(kind, &mut found);
        found
    }

    fn collect_kind<'n>(&'n self, kind: NodeKind, found: &mut Vec<&'n Node>) {
        if self.kind == kind {
            found.push(self);
        }
        for child in self.child_nodes() {
            child.collect_kind(kind, found);
        }
    }

    /// Every leaf token under this node, in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'n>(&'n self, tokens: &mut Vec<&'n Token>) {
        for child in &self.children {
            match &child.element {
                Element::Node(node) => node.collect_tokens(tokens),
                Element::Token(token) => tokens.push(token),
            }
        }
    }

    /// The source text covered by this node, without its leading trivia.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens().into_iter().enumerate() {
            if i > 0 {
                for trivia in &token.leading_trivia {
                    out.push_str(&trivia.text);
                }
            }
            out.push_str(&token.lexeme);
        }
        out
    }

    /// The source text of this node including all trivia.
    ///
    /// For a `source_file` this is the original input, byte for byte.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for token in self.tokens() {
            for trivia in &token.leading_trivia {
                out.push_str(&trivia.text);
            }
            out.push_str(&token.lexeme);
        }
        out
    }

    /// True if this node or any descendant is an `ERROR` node.
    pub fn has_error(&self) -> bool {
        self.kind == NodeKind::Error || self.child_nodes().any(Node::has_error)
    }
}

fn is_eof(child: &Child) -> bool {
    matches!(&child.element, Element::Token(t) if t.kind == TokenKind::Eof)
}
