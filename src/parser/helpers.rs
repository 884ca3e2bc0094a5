/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
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

use crate::error::{ParseError, ParseResult};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use tracing::trace;

impl<'t> Parser<'t> {
    /// Returns the token at the cursor without consuming it.
    ///
    /// `None` once the cursor has moved past the last token, which only
    /// happens after the `Eof` marker itself was consumed.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Lookahead: is the token at the cursor one of `kinds`?
    ///
    /// Pure. The cursor is never moved, whatever the answer.
    pub fn check(&self, kinds: &[TokenKind]) -> bool {
        let found = self.peek();
        trace!(expected = ?kinds, found = ?found.map(|t| t.kind), pos = self.current, "check");

        found.is_some_and(|token| kinds.contains(&token.kind))
    }

    /// Expect-and-consume: the token at the cursor must be one of `kinds`.
    ///
    /// On success the cursor advances by **exactly one** and the consumed
    /// token is returned.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] when the token is of another kind
    /// - [`ParseError::UnexpectedEndOfInput`] when no token is left
    pub fn consume(&mut self, kinds: &[TokenKind]) -> ParseResult<&'t Token> {
        trace!(expected = ?kinds, found = ?self.peek().map(|t| t.kind), pos = self.current, "consume");

        let Some(token) = self.peek() else {
            return Err(ParseError::UnexpectedEndOfInput {
                expected: kinds.to_vec(),
            });
        };

        if !kinds.contains(&token.kind) {
            return Err(ParseError::UnexpectedToken {
                expected: kinds.to_vec(),
                found: token.clone(),
            });
        }

        self.current += 1;
        Ok(token)
    }

    /// Consumes the token at the cursor if it is one of `kinds`.
    ///
    /// Lookahead followed by consumption of the **same** token; returns
    /// whether anything was consumed.
    pub fn match_kind(&mut self, kinds: &[TokenKind]) -> ParseResult<bool> {
        if self.check(kinds) {
            self.consume(kinds)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// True once the cursor sits on the `Eof` marker or past it.
    pub fn is_at_end(&self) -> bool {
        self.peek().map_or(true, |token| token.kind == TokenKind::Eof)
    }

    /// True when the last consumed token was the `Eof` marker.
    pub(crate) fn consumed_end(&self) -> bool {
        self.current
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .is_some_and(|token| token.kind == TokenKind::Eof)
    }
}
