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

use crate::error::LexError;
use crate::lexer::rules::matcher;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use tracing::{debug, trace};

/// Converts source text into a token sequence.
///
/// This is the **entry point for lexical analysis**. The returned sequence
/// is never empty and always ends with exactly one `TokenKind::Eof`.
///
/// # Errors
/// - [`LexError::UnterminatedString`] for a `"` with no closing quote on
///   the same line
/// - [`LexError::UnexpectedCharacter`] for any other character that starts
///   no token and is not whitespace
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    match Lexer::new(source).scan_tokens() {
        Ok(tokens) => {
            debug!(count = tokens.len(), "tokenized source");
            Ok(tokens)
        }
        Err(err) => {
            debug!(%err, "tokenization failed");
            Err(err)
        }
    }
}

pub struct Lexer<'src> {
    source: &'src str,
    /// Byte offset of the next unread character.
    current: usize,
    line: usize,
    /// Characters consumed since the start of the current line.
    column: usize,
    /// Position just past the last emitted token.
    last_end: Span,
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, line 1.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 0,
            last_end: Span::new(1, 0),
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Repeatedly skips whitespace and scans one token until the source is
    /// exhausted, then appends the `Eof` marker. The marker sits right after
    /// the last token, so trailing blank lines do not move it.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            self.scan_token()?;
        }

        self.tokens.push(Token::new(TokenKind::Eof, "", self.last_end));
        Ok(self.tokens)
    }

    /// Scans and emits a single token starting at the cursor.
    ///
    /// The winning rule is chosen by the order of the rule table, not by
    /// match length.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let rest = &self.source[self.current..];
        let span = self.span();

        let Some((kind, len)) = matcher().match_at_start(rest) else {
            return Err(self.no_match(rest, span));
        };

        let lexeme = &rest[..len];
        trace!(?kind, lexeme, %span, "token");

        self.tokens.push(Token::new(kind, lexeme, span));
        self.current += len;
        // No rule matches a newline, so a token never leaves its line.
        self.column += lexeme.chars().count();
        self.last_end = self.span();
        Ok(())
    }

    /// Builds the error for a position where no rule matched.
    ///
    /// A lone `"` can only fail to match when its closing quote is missing.
    fn no_match(&self, rest: &str, span: Span) -> LexError {
        match rest.chars().next() {
            Some('"') => LexError::UnterminatedString { span },
            Some(ch) => LexError::UnexpectedCharacter { ch, span },
            None => unreachable!("scan_token is never called at end of input"),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }

            self.current += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    /// Location of the cursor, with the column counted in characters.
    fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
