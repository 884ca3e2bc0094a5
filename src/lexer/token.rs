/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token categories and the token value
 *            produced by the lexer and consumed by the parser.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The **category of a lexical token**.
///
/// The set is closed: every token the lexer emits carries exactly one of
/// these kinds, and the grammar is written entirely in terms of them.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → accept / reject
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Keywords
    True,
    False,
    Nil,
    This,
    Super,
    While,
    Print,
    Return,
    If,
    Else,
    For,
    Var,
    Fun,
    And,
    Or,

    // Operators
    Bang,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    BangEqual,
    EqualEqual,
    Plus,
    Minus,
    Star,
    Slash,
    Equal,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Dot,
    Comma,
    Semicolon,

    /// A numeric literal: `42`, `3.14`.
    Number,

    /// A double-quoted string literal. The lexeme keeps its quotes.
    String,

    /// A user-defined name.
    Identifier,

    /// End-of-input marker.
    ///
    /// Always the **final token** of a lexed sequence, with an empty lexeme.
    Eof,
}

impl TokenKind {
    /// Human-readable description used in syntax error messages.
    ///
    /// Fixed-spelling kinds render as their quoted source text (`';'`,
    /// `'while'`); the open-ended kinds render as a category name.
    pub fn describe(self) -> &'static str {
        use TokenKind::*;

        match self {
            True => "'true'",
            False => "'false'",
            Nil => "'nil'",
            This => "'this'",
            Super => "'super'",
            While => "'while'",
            Print => "'print'",
            Return => "'return'",
            If => "'if'",
            Else => "'else'",
            For => "'for'",
            Var => "'var'",
            Fun => "'fun'",
            And => "'and'",
            Or => "'or'",
            Bang => "'!'",
            Greater => "'>'",
            GreaterEqual => "'>='",
            Less => "'<'",
            LessEqual => "'<='",
            BangEqual => "'!='",
            EqualEqual => "'=='",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Equal => "'='",
            LeftParen => "'('",
            RightParen => "')'",
            LeftBrace => "'{'",
            RightBrace => "'}'",
            Dot => "'.'",
            Comma => "','",
            Semicolon => "';'",
            Number => "number",
            String => "string",
            Identifier => "identifier",
            Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A **single lexical token**.
///
/// # Example Tokens
/// ```text
/// var    →  { kind: Var,        lexeme: "var",   span: 1:1 }
/// a      →  { kind: Identifier, lexeme: "a",     span: 1:5 }
/// 1.5    →  { kind: Number,     lexeme: "1.5",   span: 1:9 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token starts in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Prints the quoted lexeme, or `end of input` for the sentinel, rather
    /// than the full internal structure:
    /// ```text
    /// unexpected ';', expected primary expression
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str(TokenKind::Eof.describe()),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}
