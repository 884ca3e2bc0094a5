/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the `Parser` structure and the public `parse()` driver
 * used to validate a token stream against the Lox grammar.
 *
 * The grammar itself is split across multiple modules:
 * - `statements.rs`   → Declarations and statements
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Cursor primitives: lookahead and consumption
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::error::ParseResult;
use crate::lexer::token::{Token, TokenKind};
use tracing::instrument;

/// The recursive-descent recognizer.
///
/// This structure holds:
/// - A read-only view of the token stream produced by the lexer
/// - The cursor: the index of the next unconsumed token
///
/// The cursor is the parser's only mutable state. It never moves backwards,
/// and only `consume` moves it forwards. Several parsers may borrow the same
/// token stream at once; each owns its own cursor.
///
/// The grammar procedures live in extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<'t> {
    pub(crate) tokens: &'t [Token],
    pub(crate) current: usize,
}

/// Validates a complete token stream.
///
/// # Returns
/// - `Ok(())` when the whole stream is a valid program
/// - the first syntax violation otherwise
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → accept / reject
/// ```
///
/// # Example
/// ```
/// use loxcheck::lexer::tokenize;
/// use loxcheck::parser::parse;
///
/// let tokens = tokenize("print 1 + 2;").unwrap();
/// assert!(parse(&tokens).is_ok());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<()> {
    Parser::new(tokens).program()
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    /// The cursor: how many tokens have been consumed so far.
    pub fn position(&self) -> usize {
        self.current
    }

    /// program → declaration* END
    ///
    /// On acceptance the cursor equals the length of the token stream.
    /// `END` may already have been consumed by a trailing `print` that had
    /// no `;`; it is not required a second time.
    #[instrument(level = "trace", skip(self))]
    pub fn program(&mut self) -> ParseResult<()> {
        while !self.is_at_end() {
            self.declaration()?;
        }

        if !self.consumed_end() {
            self.consume(&[TokenKind::Eof])?;
        }

        Ok(())
    }
}
