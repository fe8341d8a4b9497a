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


use crate::error::SyntaxError;
use crate::span::line_col;
use std::fmt::Write;

/// Renders compiler-style diagnostics for syntax errors without colour.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Underlines the error span with carets (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The CLI uses miette's graphical reports by default; this plain form is
/// for logs and terminals that cannot render them.
pub struct DiagnosticPrinter {
    /// Full source code of the file that was parsed.
    source: String,

    /// Name of the source file (e.g. `main.wren`), for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats one error.
    ///
    /// # Output Example
    /// ```text
    /// error[E_PARSE]: expected `)`, found `}`
    ///   --> example.wren:3:10
    ///    |
    ///  3 | if (ready }
    ///    |           ^
    /// ```
    pub fn render(&self, error: &SyntaxError) -> String {
        let span = error.span();
        let (line, column) = line_col(&self.source, span.start);
        let src_line = self.source.lines().nth(line - 1).unwrap_or("");

        // Underline up to the end of the span or the end of the line,
        // whichever comes first, and always at least one caret.
        let line_chars = src_line.chars().count();
        let span_chars = self
            .source
            .get(span.start..span.end)
            .map_or(0, |text| text.chars().take_while(|&c| c != '\n').count());
        let width = span_chars.min(line_chars.saturating_sub(column)).max(1);

        let mut out = String::new();
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code(),
            error,
            self.file_name,
            line,
            column + 1
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "   | {}{}", " ".repeat(column), "^".repeat(width));

        if let Some(help) = error.help() {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints one error to stderr.
    pub fn print(&self, error: &SyntaxError) {
        eprint!("{}", self.render(error));
    }
}
