/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 *
 * License:
 * This file is part of the LOXCHECK project.
 *
 * LOXCHECK is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use serde::Serialize;
use thiserror::Error;

/// A failure while turning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexError {
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("unterminated string")]
    UnterminatedString { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } | LexError::UnterminatedString { span } => *span,
        }
    }
}

/// The first grammar violation found by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// The token at the cursor is not one of the kinds the grammar allows.
    #[error("unexpected {found}, expected {}", describe_expected(.expected))]
    UnexpectedToken { expected: Vec<TokenKind>, found: Token },

    /// A token was required but the cursor is already past the end marker,
    /// which a trailing `print` without `;` consumes as its terminator.
    #[error("no input left after the final statement, expected {}", describe_expected(.expected))]
    UnexpectedEndOfInput { expected: Vec<TokenKind> },

    /// No `primary` alternative starts with the token at the cursor.
    #[error("unexpected {found}, expected primary expression")]
    ExpectedPrimary { found: Token },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Renders an expected-kind set as `';'`, `';' or end of input`, or
/// `one of 'a', 'b', 'c'`.
fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.describe().to_string(),
        [first, second] => format!("{} or {}", first.describe(), second.describe()),
        many => {
            let names: Vec<&str> = many.iter().map(|kind| kind.describe()).collect();
            format!("one of {}", names.join(", "))
        }
    }
}

/// Everything that can make a source text fail the check.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(untagged)]
pub enum CheckError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CheckError {
    /// Stable error code (E0001, E0101, …)
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::Lex(LexError::UnexpectedCharacter { .. }) => "E0001",
            CheckError::Lex(LexError::UnterminatedString { .. }) => "E0002",
            CheckError::Parse(ParseError::UnexpectedToken { .. }) => "E0101",
            CheckError::Parse(ParseError::UnexpectedEndOfInput { .. }) => "E0102",
            CheckError::Parse(ParseError::ExpectedPrimary { .. }) => "E0103",
        }
    }

    /// Primary source location, if the error points at a token or character.
    ///
    /// `None` for end-of-input errors; the caller knows where the source ends.
    pub fn span(&self) -> Option<Span> {
        match self {
            CheckError::Lex(err) => Some(err.span()),
            CheckError::Parse(ParseError::UnexpectedToken { found, .. })
            | CheckError::Parse(ParseError::ExpectedPrimary { found }) => Some(found.span),
            CheckError::Parse(ParseError::UnexpectedEndOfInput { .. }) => None,
        }
    }

    /// Optional follow-up hint for the diagnostic.
    pub fn help(&self) -> Option<String> {
        match self {
            CheckError::Lex(LexError::UnterminatedString { .. }) => {
                Some("strings must be closed with '\"' on the line they start".to_string())
            }
            CheckError::Parse(ParseError::UnexpectedToken { expected, found })
                if expected.contains(&TokenKind::Semicolon) && found.kind == TokenKind::Eof =>
            {
                Some("add ';' to terminate the statement".to_string())
            }
            CheckError::Parse(ParseError::UnexpectedEndOfInput { expected })
                if expected.contains(&TokenKind::RightBrace) =>
            {
                Some("a block is still open; close it with '}'".to_string())
            }
            CheckError::Parse(ParseError::UnexpectedToken { expected, found })
                if expected.contains(&TokenKind::RightBrace) && found.kind == TokenKind::Eof =>
            {
                Some("a block is still open; close it with '}'".to_string())
            }
            _ => None,
        }
    }
}
