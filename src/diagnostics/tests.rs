use super::DiagnosticPrinter;
use crate::check;
use crate::error::CheckError;
use crate::span::Span;
use pretty_assertions::assert_eq;

fn failure(source: &str) -> CheckError {
    check(source).unwrap_err()
}

#[test]
fn renders_caret_under_offending_token() {
    let source = "var a = ;";
    let printer = DiagnosticPrinter::new("prog.lox", source);

    assert_eq!(
        printer.render(&failure(source)),
        "\
error[E0103]: unexpected ';', expected primary expression
  --> prog.lox:1:9
    |
  1 | var a = ;
    |         ^
"
    );
}

#[test]
fn renders_missing_semicolon_with_help() {
    let source = "var a = 1";
    let printer = DiagnosticPrinter::new("prog.lox", source);

    assert_eq!(
        printer.render(&failure(source)),
        "\
error[E0101]: unexpected end of input, expected ';'
  --> prog.lox:1:10
    |
  1 | var a = 1
    |          ^
help: add ';' to terminate the statement
"
    );
}

#[test]
fn end_of_input_points_past_last_line() {
    let source = "{\n  print a";
    let printer = DiagnosticPrinter::new("prog.lox", source);
    let error = failure(source);

    assert_eq!(error.code(), "E0102");
    assert_eq!(error.span(), None);
    assert_eq!(printer.location(&error), Span::new(2, 9));
    assert!(printer.render(&error).contains("help: a block is still open"));
}

#[test]
fn lexical_errors_use_their_own_codes() {
    let source = "print 1 # 2;";
    let printer = DiagnosticPrinter::new("<stdin>", source);
    let rendered = printer.render(&failure(source));

    assert!(rendered.starts_with("error[E0001]: unexpected character '#'\n  --> <stdin>:1:9\n"));

    assert_eq!(failure("print \"oops").code(), "E0002");
}

#[test]
fn json_outcome() {
    let source = "var a = 1";
    let printer = DiagnosticPrinter::new("prog.lox", source);

    let accepted = printer.to_json(Ok(()));
    assert_eq!(accepted["accepted"], true);
    assert_eq!(accepted["file"], "prog.lox");

    let error = failure(source);
    let rejected = printer.to_json(Err(&error));
    assert_eq!(rejected["accepted"], false);
    assert_eq!(rejected["error"]["code"], "E0101");
    assert_eq!(rejected["error"]["line"], 1);
    assert_eq!(rejected["error"]["column"], 10);
    assert_eq!(rejected["error"]["detail"]["kind"], "unexpected_token");
    assert_eq!(rejected["error"]["detail"]["expected"][0], "SEMICOLON");
    assert_eq!(rejected["error"]["detail"]["found"]["kind"], "EOF");
}

#[test]
fn trailing_newlines_do_not_move_the_caret() {
    let source = "var a = 1\n\n";
    let printer = DiagnosticPrinter::new("prog.lox", source);

    assert_eq!(
        printer.render(&failure(source)),
        "\
error[E0101]: unexpected end of input, expected ';'
  --> prog.lox:1:10
    |
  1 | var a = 1
    |          ^
help: add ';' to terminate the statement
"
    );
}

#[test]
fn end_of_input_ignores_trailing_blank_lines() {
    let source = "{\n  print a\n\n";
    let printer = DiagnosticPrinter::new("prog.lox", source);

    assert_eq!(printer.location(&failure(source)), Span::new(2, 9));
}

#[test]
fn unclosed_block_gets_a_hint() {
    let source = "{ var a;\n";
    let printer = DiagnosticPrinter::new("prog.lox", source);
    let error = failure(source);

    assert_eq!(error.code(), "E0101");
    assert_eq!(
        error.help().as_deref(),
        Some("a block is still open; close it with '}'")
    );
    assert!(printer.render(&error).contains("  --> prog.lox:1:9\n"));
}

#[test]
fn end_of_input_codes_read_differently() {
    let past_end = failure("{ print a").to_string();
    let at_end = failure("{ var a;").to_string();

    assert_eq!(failure("{ print a").code(), "E0102");
    assert_ne!(past_end, at_end);
    assert_eq!(
        past_end,
        "no input left after the final statement, expected '}'"
    );
}
