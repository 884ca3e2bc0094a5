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

use crate::error::ParseResult;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::stack::ensure_sufficient_stack;
use tracing::instrument;

impl<'t> Parser<'t> {
    /// declaration → funDecl | varDecl | statement
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub fn declaration(&mut self) -> ParseResult<()> {
        if self.check(&[TokenKind::Fun]) {
            self.fun_decl()
        } else if self.check(&[TokenKind::Var]) {
            self.var_decl()
        } else {
            self.statement()
        }
    }

    /// funDecl → "fun" function
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn fun_decl(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::Fun])?;
        self.function()
    }

    /// varDecl → "var" IDENTIFIER ( "=" expression )? ";"
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn var_decl(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::Var])?;
        self.consume(&[TokenKind::Identifier])?;

        if self.match_kind(&[TokenKind::Equal])? {
            self.expression()?;
        }

        self.consume(&[TokenKind::Semicolon])?;
        Ok(())
    }

    /// Parses a single statement.
    ///
    /// The **dispatcher** for statement forms: the leading token is
    /// inspected (never consumed) and routed to the matching procedure.
    /// Anything unrecognized is an expression statement.
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub fn statement(&mut self) -> ParseResult<()> {
        ensure_sufficient_stack(|| {
            if self.check(&[TokenKind::For]) {
                self.for_stmt()
            } else if self.check(&[TokenKind::If]) {
                self.if_stmt()
            } else if self.check(&[TokenKind::Print]) {
                self.print_stmt()
            } else if self.check(&[TokenKind::Return]) {
                self.return_stmt()
            } else if self.check(&[TokenKind::While]) {
                self.while_stmt()
            } else if self.check(&[TokenKind::LeftBrace]) {
                self.block()
            } else {
                self.expr_stmt()
            }
        })
    }

    /// exprStmt → expression ";"
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn expr_stmt(&mut self) -> ParseResult<()> {
        self.expression()?;
        self.consume(&[TokenKind::Semicolon])?;
        Ok(())
    }

    /// forStmt → "for" "(" ( varDecl | exprStmt | ";" )
    ///           expression? ";" expression? ")" statement
    ///
    /// The initializer clause owns its `;`: `varDecl` and `exprStmt` consume
    /// it themselves, and the bare form consumes it here.
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn for_stmt(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::For])?;
        self.consume(&[TokenKind::LeftParen])?;

        if self.check(&[TokenKind::Var]) {
            self.var_decl()?;
        } else if !self.match_kind(&[TokenKind::Semicolon])? {
            self.expr_stmt()?;
        }

        if !self.check(&[TokenKind::Semicolon]) {
            self.expression()?;
        }
        self.consume(&[TokenKind::Semicolon])?;

        if !self.check(&[TokenKind::RightParen]) {
            self.expression()?;
        }
        self.consume(&[TokenKind::RightParen])?;

        self.statement()
    }

    /// ifStmt → "if" "(" expression ")" statement ( "else" statement )?
    ///
    /// A dangling `else` binds to the nearest `if`.
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn if_stmt(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::If])?;
        self.consume(&[TokenKind::LeftParen])?;
        self.expression()?;
        self.consume(&[TokenKind::RightParen])?;
        self.statement()?;

        if self.match_kind(&[TokenKind::Else])? {
            self.statement()?;
        }

        Ok(())
    }

    /// printStmt → "print" expression ( ";" | END )
    ///
    /// A final `print` in the file may omit its `;`, in which case the end
    /// marker itself is consumed as the terminator.
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn print_stmt(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::Print])?;
        self.expression()?;
        self.consume(&[TokenKind::Semicolon, TokenKind::Eof])?;
        Ok(())
    }

    /// returnStmt → "return" expression? ";"
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn return_stmt(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::Return])?;

        if !self.check(&[TokenKind::Semicolon]) {
            self.expression()?;
        }

        self.consume(&[TokenKind::Semicolon])?;
        Ok(())
    }

    /// whileStmt → "while" "(" expression ")" statement
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn while_stmt(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::While])?;
        self.consume(&[TokenKind::LeftParen])?;
        self.expression()?;
        self.consume(&[TokenKind::RightParen])?;
        self.statement()
    }

    /// block → "{" declaration* "}"
    ///
    /// The declaration loop also stops at END so that an unclosed block
    /// reports the missing `}` instead of descending into `primary`.
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn block(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::LeftBrace])?;

        while !self.check(&[TokenKind::RightBrace]) && !self.is_at_end() {
            self.declaration()?;
        }

        self.consume(&[TokenKind::RightBrace])?;
        Ok(())
    }

    /// function → IDENTIFIER "(" parameters? ")" block
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn function(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::Identifier])?;
        self.consume(&[TokenKind::LeftParen])?;

        if self.check(&[TokenKind::Identifier]) {
            self.parameters()?;
        }

        self.consume(&[TokenKind::RightParen])?;
        self.block()
    }

    /// parameters → IDENTIFIER ( "," IDENTIFIER )*
    #[instrument(level = "trace", skip(self), fields(pos = self.current))]
    pub(super) fn parameters(&mut self) -> ParseResult<()> {
        self.consume(&[TokenKind::Identifier])?;

        while self.match_kind(&[TokenKind::Comma])? {
            self.consume(&[TokenKind::Identifier])?;
        }

        Ok(())
    }
}
