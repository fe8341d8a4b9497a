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

/// Determines whether a word is a reserved Wren keyword.
///
/// Reserved words never lex as identifiers. `this` and `super` are left out
/// on purpose: the grammar reads them as plain names.
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "as" |
        "break" |
        "class" |
        "construct" |
        "continue" |
        "else" |
        "false" |
        "for" |
        "foreign" |
        "if" |
        "import" |
        "in" |
        "is" |
        "null" |
        "return" |
        "static" |
        "true" |
        "var" |
        "while"
    )
}

/// Keywords that open a statement. The parser resynchronises on these
/// after an error.
pub fn starts_statement(word: &str) -> bool {
    matches!(
        word,
        "break" |
        "class" |
        "continue" |
        "for" |
        "foreign" |
        "if" |
        "import" |
        "return" |
        "var" |
        "while"
    )
}
