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


/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Runs the statement loops and error recovery
pub mod parser;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - nesting depth guard
pub mod helpers;

/// Expression-level parsing:
/// - conditional / range → binary → unary → postfix → primary
/// - strings with interpolation, lists, maps, call bodies
pub mod expressions;

/// Statement-level parsing:
/// - if / for / while / return / break / continue
/// - var, import, blocks and assignments
pub mod statements;

/// Class definitions and every kind of class member.
pub mod classes;

/// `#` and `#!` attributes.
pub mod attributes;

pub use parser::{parse, Parser, DEFAULT_MAX_DEPTH};
