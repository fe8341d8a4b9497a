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

//! S-expression rendering of syntax trees.
//!
//! Named leaves print with their text, `(number "1")`. Anonymous tokens
//! (keywords, punctuation) are left out unless they fill a named field, in
//! which case they print as `field: "text"`.

use crate::ast::node::{Element, Node};
use std::fmt::Write;

/// Renders `node` on a single line.
pub fn to_sexp(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, None, 0);
    out
}

/// Renders `node` with one child per line, indented two spaces per level.
pub fn to_pretty_sexp(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, Some(0), 0);
    out
}

fn write_node(out: &mut String, node: &Node, indent: Option<usize>, depth: usize) {
    if node.kind.is_leaf() && node.child_nodes().next().is_none() {
        let _ = write!(out, "({} {:?})", node.kind, node.text());
        return;
    }

    let _ = write!(out, "({}", node.kind);

    for child in &node.children {
        let label = child.field.map(|f| format!("{f}: ")).unwrap_or_default();
        match &child.element {
            Element::Node(inner) => {
                separator(out, indent, depth + 1);
                out.push_str(&label);
                write_node(out, inner, indent, depth + 1);
            }
            Element::Token(token) if child.field.is_some() => {
                separator(out, indent, depth + 1);
                let _ = write!(out, "{label}{:?}", token.lexeme);
            }
            Element::Token(_) => {}
        }
    }

    out.push(')');
}

fn separator(out: &mut String, indent: Option<usize>, depth: usize) {
    match indent {
        Some(base) => {
            out.push('\n');
            out.push_str(&"  ".repeat(base + depth));
        }
        None => out.push(' '),
    }
}
