/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the recursive-descent recognizer.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Statement grammar
 *   - Expression grammar
 *   - Cursor primitives
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens)` entry point and `program`
pub mod parser;

/// Declaration and statement grammar:
/// - fun / var declarations
/// - for / if / print / return / while / block / expression statements
pub mod statements;

/// Expression grammar:
/// - assignment → logic_or → … → unary → call → primary
pub mod expressions;

/// Cursor primitives:
/// - pure lookahead (`check`)
/// - expect-and-consume (`consume`)
pub mod helpers;


pub use parser::{parse, Parser};
