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

/// Node kinds and field labels.
pub mod kind;

/// The tree itself: nodes, child slots and traversal helpers.
pub mod node;

/// S-expression rendering.
pub mod printer;

pub use kind::{Field, NodeKind};
pub use node::{Child, Element, Node};
pub use printer::{to_pretty_sexp, to_sexp};
