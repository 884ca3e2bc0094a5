/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for lexical analysis.
 *
 * This module wires together:
 *   - Token kinds and token values
 *   - The ordered rule table and its compiled matcher
 *   - The scanning loop
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

pub mod token;

/// Ordered `(TokenKind, pattern)` table and the regex compiled from it.
pub mod rules;

/// Scanning loop: whitespace skipping, span tracking, token emission.
pub mod lexer;


pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
