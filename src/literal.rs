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


//! Values of literal tokens.
//!
//! The lexer only checks string escapes for shape. Consumers that need the
//! actual value of a string or number token decode it here.

use crate::error::{LexError, LexErrorKind};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The bytes a string token stands for, with escapes resolved.
///
/// Works on plain strings, raw strings and each literal piece of an
/// interpolated string. The result is bytes rather than a `String` because
/// `\xhh` may produce bytes that are not valid UTF-8 on their own.
pub fn string_value(token: &Token) -> Result<Vec<u8>, LexError> {
    let lexeme = token.lexeme.as_str();
    let (open, close) = match token.kind {
        TokenKind::String => (1, 1),
        TokenKind::StringStart => (1, 2),
        TokenKind::StringMiddle => (1, 2),
        TokenKind::StringEnd => (1, 1),
        TokenKind::RawString => {
            let inner = lexeme.get(3..lexeme.len().saturating_sub(3)).unwrap_or("");
            return Ok(inner.as_bytes().to_vec());
        }
        _ => {
            return Err(LexError::new(
                LexErrorKind::InvalidEscape(lexeme.to_string()),
                token.span,
            ))
        }
    };

    let inner = lexeme
        .get(open..lexeme.len().saturating_sub(close))
        .unwrap_or("");
    decode_escapes(inner, token.span.start + open)
}

/// Resolves Wren escape sequences in `text`.
///
/// `offset` is the byte position of `text` in the source, used for error
/// spans.
pub fn decode_escapes(text: &str, offset: usize) -> Result<Vec<u8>, LexError> {
    let mut out = Vec::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch != '\\' {
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let invalid = |end: usize| {
            LexError::new(
                LexErrorKind::InvalidEscape(text[start..end].to_string()),
                Span::new(offset + start, offset + end),
            )
        };

        let Some((escape_at, escape)) = chars.next() else {
            return Err(invalid(text.len()));
        };
        let after_escape = escape_at + escape.len_utf8();

        let byte = match escape {
            '0' => 0x00,
            '"' => b'"',
            '\\' => b'\\',
            '%' => b'%',
            'a' => 0x07,
            'b' => 0x08,
            'e' => 0x1b,
            'f' => 0x0c,
            'n' => b'\n',
            'r' => b'\r',
            't' => b'\t',
            'v' => 0x0b,
            'x' | 'u' | 'U' => {
                let digits = match escape {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let mut hex = String::with_capacity(digits);
                while hex.len() < digits {
                    match chars.next_if(|(_, c)| c.is_ascii_hexdigit()) {
                        Some((_, c)) => hex.push(c),
                        None => break,
                    }
                }
                let end = after_escape + hex.len();
                if hex.len() != digits {
                    return Err(invalid(end));
                }

                let value = u32::from_str_radix(&hex, 16).map_err(|_| invalid(end))?;
                if escape == 'x' {
                    out.push(value as u8);
                } else {
                    let ch = char::from_u32(value).ok_or_else(|| invalid(end))?;
                    let mut buf = [0u8; 4];
                    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                }
                continue;
            }
            _ => return Err(invalid(after_escape)),
        };
        out.push(byte);
    }

    Ok(out)
}

/// The numeric value of a number token.
///
/// Wren has a single number type, a double. Hex literals go through `u64`
/// first; `0x` with no digits is rejected.
pub fn number_value(token: &Token) -> Result<f64, LexError> {
    let invalid = || {
        LexError::new(
            LexErrorKind::InvalidNumber(token.lexeme.clone()),
            token.span,
        )
    };

    let text = token.lexeme.as_str();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let magnitude = match unsigned.strip_prefix("0x") {
        Some(hex) if !hex.is_empty() => {
            u64::from_str_radix(hex, 16).map_err(|_| invalid())? as f64
        }
        Some(_) => return Err(invalid()),
        None => unsigned.parse::<f64>().map_err(|_| invalid())?,
    };

    Ok(if negative { -magnitude } else { magnitude })
}
