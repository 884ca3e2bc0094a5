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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire expression grammar**.
 *
 * Parsing order follows strict precedence, loosest first:
 *
 *   assignment → logic_or → logic_and → equality → comparison
 *              → term → factor → unary → call → primary
 *
 * Binary levels loop, so they are left-associative; assignment recurses on
 * its right-hand side, so it is right-associative.
 *
 * ==========================================================================
 */

use crate::error::{ParseError, ParseResult};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::stack::ensure_sufficient_stack;
use tracing::instrument;

/// Kinds that form a complete `primary` on their own.
const LITERALS: &[TokenKind] = &[
    TokenKind::True,
    TokenKind::False,
    TokenKind::Nil,
    TokenKind::This,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Identifier,
];

/// Every kind a `primary` can start with.
const PRIMARY_START: &[TokenKind] = &[
    TokenKind::True,
    TokenKind::False,
    TokenKind::Nil,
    TokenKind::This,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Identifier,
    TokenKind::LeftParen,
    TokenKind::Super,
];

impl<'t> Parser<'t> {
    /// expression → assignment
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub fn expression(&mut self) -> ParseResult<()> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// assignment → logic_or ( "=" assignment )?
    ///
    /// The target is not checked here: `a.b = 1`, `a = 1` and `1 = 2` all
    /// parse. Whether a target is assignable is a semantic question.
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn assignment(&mut self) -> ParseResult<()> {
        self.logic_or()?;

        if self.match_kind(&[TokenKind::Equal])? {
            self.assignment()?;
        }

        Ok(())
    }

    /// logic_or → logic_and ( "or" logic_and )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn logic_or(&mut self) -> ParseResult<()> {
        self.logic_and()?;

        while self.match_kind(&[TokenKind::Or])? {
            self.logic_and()?;
        }

        Ok(())
    }

    /// logic_and → equality ( "and" equality )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn logic_and(&mut self) -> ParseResult<()> {
        self.equality()?;

        while self.match_kind(&[TokenKind::And])? {
            self.equality()?;
        }

        Ok(())
    }

    /// equality → comparison ( ( "!=" | "==" ) comparison )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn equality(&mut self) -> ParseResult<()> {
        self.comparison()?;

        while self.match_kind(&[TokenKind::BangEqual, TokenKind::EqualEqual])? {
            self.comparison()?;
        }

        Ok(())
    }

    /// comparison → term ( ( "<" | "<=" | ">" | ">=" ) term )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn comparison(&mut self) -> ParseResult<()> {
        self.term()?;

        while self.match_kind(&[
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
        ])? {
            self.term()?;
        }

        Ok(())
    }

    /// term → factor ( ( "+" | "-" ) factor )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn term(&mut self) -> ParseResult<()> {
        self.factor()?;

        while self.match_kind(&[TokenKind::Plus, TokenKind::Minus])? {
            self.factor()?;
        }

        Ok(())
    }

    /// factor → unary ( ( "*" | "/" ) unary )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn factor(&mut self) -> ParseResult<()> {
        self.unary()?;

        while self.match_kind(&[TokenKind::Star, TokenKind::Slash])? {
            self.unary()?;
        }

        Ok(())
    }

    /// unary → ( "!" | "-" ) unary | call
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn unary(&mut self) -> ParseResult<()> {
        ensure_sufficient_stack(|| -> ParseResult<()> {
            if self.match_kind(&[TokenKind::Bang, TokenKind::Minus])? {
                self.unary()
            } else {
                self.call()
            }
        })
    }

    /// call → primary ( "(" arguments? ")" | "." IDENTIFIER )*
    ///
    /// Suffixes chain without limit: `a.b(c)(d).e`.
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn call(&mut self) -> ParseResult<()> {
        self.primary()?;

        loop {
            if self.match_kind(&[TokenKind::LeftParen])? {
                if !self.check(&[TokenKind::RightParen]) {
                    self.arguments()?;
                }
                self.consume(&[TokenKind::RightParen])?;
            } else if self.match_kind(&[TokenKind::Dot])? {
                self.consume(&[TokenKind::Identifier])?;
            } else {
                break;
            }
        }

        Ok(())
    }

    /// primary → "true" | "false" | "nil" | "this" | NUMBER | STRING
    ///         | IDENTIFIER | "(" expression ")" | "super" "." IDENTIFIER
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn primary(&mut self) -> ParseResult<()> {
        if self.match_kind(LITERALS)? {
            return Ok(());
        }

        if self.match_kind(&[TokenKind::LeftParen])? {
            self.expression()?;
            self.consume(&[TokenKind::RightParen])?;
            return Ok(());
        }

        if self.match_kind(&[TokenKind::Super])? {
            self.consume(&[TokenKind::Dot])?;
            self.consume(&[TokenKind::Identifier])?;
            return Ok(());
        }

        match self.peek() {
            Some(found) => Err(ParseError::ExpectedPrimary {
                found: found.clone(),
            }),
            None => Err(ParseError::UnexpectedEndOfInput {
                expected: PRIMARY_START.to_vec(),
            }),
        }
    }

    /// arguments → expression ( "," expression )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn arguments(&mut self) -> ParseResult<()> {
        self.expression()?;

        while self.match_kind(&[TokenKind::Comma])? {
            self.expression()?;
        }

        Ok(())
    }
}
