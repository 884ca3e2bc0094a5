/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * File:      rules.rs
 * Purpose:   The ordered table of lexical rules and the compiled matcher
 *            built from it.
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

use crate::lexer::token::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// Every lexical rule, **in priority order**.
///
/// At each input position the first rule whose pattern matches wins, even
/// when a later rule would match more text. Two orderings are load-bearing:
///
/// - keywords come before `Identifier`, so `while` is never an identifier
///   (the trailing `\b` keeps `whiley` out of the keyword rule)
/// - `>=`, `<=`, `!=`, `==` come before `>`, `<`, `!`, `=`
///
/// Patterns must not match the empty string.
pub const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::True, r"true\b"),
    (TokenKind::False, r"false\b"),
    (TokenKind::Nil, r"nil\b"),
    (TokenKind::This, r"this\b"),
    (TokenKind::Super, r"super\b"),
    (TokenKind::While, r"while\b"),
    (TokenKind::Print, r"print\b"),
    (TokenKind::Return, r"return\b"),
    (TokenKind::If, r"if\b"),
    (TokenKind::Else, r"else\b"),
    (TokenKind::For, r"for\b"),
    (TokenKind::Var, r"var\b"),
    (TokenKind::Fun, r"fun\b"),
    (TokenKind::And, r"and\b"),
    (TokenKind::Or, r"or\b"),
    (TokenKind::GreaterEqual, r">="),
    (TokenKind::LessEqual, r"<="),
    (TokenKind::BangEqual, r"!="),
    (TokenKind::EqualEqual, r"=="),
    (TokenKind::Bang, r"!"),
    (TokenKind::Greater, r">"),
    (TokenKind::Less, r"<"),
    (TokenKind::Plus, r"\+"),
    (TokenKind::Minus, r"-"),
    (TokenKind::Star, r"\*"),
    (TokenKind::Slash, r"/"),
    (TokenKind::Equal, r"="),
    (TokenKind::LeftParen, r"\("),
    (TokenKind::RightParen, r"\)"),
    (TokenKind::LeftBrace, r"\{"),
    (TokenKind::RightBrace, r"\}"),
    (TokenKind::Dot, r"\."),
    (TokenKind::Comma, r","),
    (TokenKind::Semicolon, r";"),
    (TokenKind::Number, r"\d+(?:\.\d+)?"),
    (TokenKind::String, r#"".*?""#),
    (TokenKind::Identifier, r"[a-zA-Z_]\w*"),
];

/// The compiled form of [`RULES`].
///
/// One alternation with a named group per rule, anchored at the start of
/// the haystack. The `regex` crate resolves alternations leftmost-first,
/// so the first participating group is the rule that won.
pub struct Matcher {
    regex: Regex,
    groups: Vec<String>,
}

impl Matcher {
    fn build() -> Self {
        let groups: Vec<String> = (0..RULES.len()).map(|i| format!("r{i}")).collect();

        let alternation = RULES
            .iter()
            .zip(&groups)
            .map(|((_, pattern), name)| format!("(?P<{name}>{pattern})"))
            .collect::<Vec<_>>()
            .join("|");

        // The table is static; a bad pattern is a build defect, not an input error.
        let regex = Regex::new(&format!("^(?:{alternation})")).expect("lexical rules must compile");

        Self { regex, groups }
    }

    /// Matches one token at the very start of `rest`.
    ///
    /// Returns the winning kind and the length in bytes of its lexeme, or
    /// `None` when no rule matches there.
    pub fn match_at_start(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let caps = self.regex.captures(rest)?;

        RULES
            .iter()
            .zip(&self.groups)
            .find_map(|((kind, _), name)| caps.name(name).map(|m| (*kind, m.end())))
    }
}

/// Returns the process-wide matcher, compiling it on first use.
pub fn matcher() -> &'static Matcher {
    static MATCHER: OnceLock<Matcher> = OnceLock::new();
    MATCHER.get_or_init(Matcher::build)
}
