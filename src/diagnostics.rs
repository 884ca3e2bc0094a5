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

use crate::error::CheckError;
use crate::span::Span;
use serde_json::{json, Value};
use std::fmt::Write;

/// Renders human-friendly, compiler-style diagnostics for check errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a follow-up hint
///
/// The output is inspired by `rustc` diagnostics, simplified and readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source text that was checked.
    source: String,

    /// Name shown in the `-->` location line (e.g. `main.lox`, `<stdin>`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Where the diagnostic points: the error's own span, or the end of
    /// the last non-blank text for end-of-input errors.
    pub fn location(&self, error: &CheckError) -> Span {
        error
            .span()
            .unwrap_or_else(|| Span::end_of(self.source.trim_end()))
    }

    /// Formats a diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E0103]: unexpected ';', expected primary expression
    ///   --> example.lox:1:9
    ///     |
    ///   1 | var a = ;
    ///     |         ^
    /// ```
    pub fn render(&self, error: &CheckError) -> String {
        let Span { line, column } = self.location(error);

        // Lines are 1-indexed in diagnostics, but the iterator is 0-indexed.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code(),
            error,
            self.file_name,
            line,
            column + 1
        );
        let _ = writeln!(out, "    |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "    | {}^", " ".repeat(column));

        if let Some(help) = error.help() {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &CheckError) {
        eprint!("{}", self.render(error));
    }

    /// Machine-readable outcome of a check.
    ///
    /// ```text
    /// { "file": "a.lox", "accepted": false,
    ///   "error": { "code": "E0101", "message": "...", "line": 1, "column": 10, "detail": {...} } }
    /// ```
    pub fn to_json(&self, outcome: Result<(), &CheckError>) -> Value {
        match outcome {
            Ok(()) => json!({
                "file": self.file_name,
                "accepted": true,
            }),
            Err(error) => {
                let Span { line, column } = self.location(error);
                json!({
                    "file": self.file_name,
                    "accepted": false,
                    "error": {
                        "code": error.code(),
                        "message": error.to_string(),
                        "line": line,
                        "column": column + 1,
                        "help": error.help(),
                        "detail": error,
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests;
