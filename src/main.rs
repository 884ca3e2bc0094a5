/*
 * ==========================================================================
 * LOXCHECK - Syntax checking for Lox
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Command-line driver: reads a source file, checks it, and
 *            reports the outcome.
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

use loxcheck::diagnostics::DiagnosticPrinter;
use loxcheck::{check, tokenize, CheckError};
use std::io::Read;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "\
Usage: loxcheck [OPTIONS] <FILE | ->

Options:
  --tokens     Print the token sequence as JSON and exit
  --json       Print the outcome as JSON instead of a diagnostic
  --trace      Log grammar procedure entry/exit to stderr
  -h, --help   Show this message

Exit status: 0 accepted, 1 rejected, 2 usage or I/O error.
Set RUST_LOG (e.g. RUST_LOG=loxcheck=debug) to control logging.";

#[derive(Debug, Default)]
struct Options {
    path: Option<String>,
    tokens: bool,
    json: bool,
    trace: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--tokens" => options.tokens = true,
            "--json" => options.json = true,
            "--trace" => options.trace = true,
            "-h" | "--help" => options.help = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ if options.path.is_some() => return Err(format!("unexpected argument '{arg}'")),
            _ => options.path = Some(arg),
        }
    }

    Ok(options)
}

/// Installs the stderr logger.
///
/// `--trace` forces `loxcheck=trace` with span enter/exit events, which
/// prints one line per grammar procedure entered and left. Otherwise the
/// filter comes from `RUST_LOG`, defaulting to `warn`.
fn init_tracing(trace: bool) {
    let (filter, span_events) = if trace {
        (EnvFilter::new("loxcheck=trace"), FmtSpan::ENTER | FmtSpan::EXIT)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        (filter, FmtSpan::NONE)
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_span_events(span_events),
        )
        .with(filter)
        .init();
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let Some(path) = options.path.as_deref() else {
        eprintln!("error: missing file path\n\n{USAGE}");
        return ExitCode::from(2);
    };

    init_tracing(options.trace);

    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            return ExitCode::from(2);
        }
    };

    let file_name = if path == "-" { "<stdin>" } else { path };
    let printer = DiagnosticPrinter::new(file_name, source.as_str());

    if options.tokens {
        return dump_tokens(&printer, &source, options.json);
    }

    let outcome = check(&source);
    info!(file = file_name, accepted = outcome.is_ok(), "check finished");

    if options.json {
        println!("{}", printer.to_json(outcome.as_ref().map(|_| ())));
    } else if let Err(error) = &outcome {
        printer.print(error);
    } else {
        println!("{file_name}: ok");
    }

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn dump_tokens(printer: &DiagnosticPrinter, source: &str, json: bool) -> ExitCode {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            let error = CheckError::from(err);
            if json {
                println!("{}", printer.to_json(Err(&error)));
            } else {
                printer.print(&error);
            }
            return ExitCode::from(1);
        }
    };

    match serde_json::to_string_pretty(&tokens) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: cannot serialize tokens: {err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_path() {
        let options = parse_args(args(&["--json", "prog.lox", "--trace"])).unwrap();
        assert_eq!(options.path.as_deref(), Some("prog.lox"));
        assert!(options.json);
        assert!(options.trace);
        assert!(!options.tokens);
    }

    #[test]
    fn stdin_dash_is_a_path() {
        let options = parse_args(args(&["-"])).unwrap();
        assert_eq!(options.path.as_deref(), Some("-"));
    }

    #[test]
    fn rejects_unknown_flag_and_second_path() {
        assert!(parse_args(args(&["--fast"])).is_err());
        assert!(parse_args(args(&["a.lox", "b.lox"])).is_err());
    }
}
