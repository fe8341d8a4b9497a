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

/// The scanner itself: source text in, tokens and lex errors out.
pub mod lexer;

/// Token and trivia types.
pub mod token;

/// Reserved word tables.
pub mod keywords;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind, Trivia, TriviaKind};
