/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root. Tells whether a Lox source text is syntactically
 *            valid.
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

//! Syntax recognizer for Lox.
//!
//! ```text
//! Source → lexer::tokenize → Vec<Token> → parser::parse → accept / reject
//! ```
//!
//! No syntax tree is built. The only output is acceptance or the first
//! lexical or grammar violation, in left-to-right order.

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
mod stack;

pub use error::{CheckError, LexError, ParseError};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, Parser};
pub use span::Span;

/// Tokenizes and parses `source` in one step.
///
/// # Example
/// ```
/// assert!(loxcheck::check("var a = 1;").is_ok());
/// assert!(loxcheck::check("var a = 1").is_err());
/// ```
pub fn check(source: &str) -> Result<(), CheckError> {
    let tokens = tokenize(source)?;
    parse(&tokens)?;
    Ok(())
}
