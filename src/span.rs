/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source locations attached to tokens and lexical errors.
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

use serde::Serialize;
use std::fmt;

/// A position in the source text.
///
/// - `line` is 1-based
/// - `column` is 0-based and counted in characters, not bytes
///
/// Spans are diagnostic metadata only. The parser never looks at them when
/// choosing between grammar alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Computes the span of the character just past the end of `source`.
    ///
    /// Used when an error has no token to point at (end of input).
    pub fn end_of(source: &str) -> Self {
        let line = 1 + source.matches('\n').count();
        let tail = source.rsplit('\n').next().unwrap_or("");
        Self::new(line, tail.chars().count())
    }
}

impl fmt::Display for Span {
    /// Renders as `line:column` with a 1-based column, matching the
    /// `file:line:column` convention used in diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}
