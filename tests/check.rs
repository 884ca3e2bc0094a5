//! End-to-end checks through the public `check` entry point.

use loxcheck::{check, parse, tokenize, CheckError, LexError, ParseError, Span, Token, TokenKind};
use pretty_assertions::assert_eq;

const CLASSES: &str = r#"
fun Point(x, y) {
  this.x = x;
  this.y = y;
  return this;
}

fun dist(p, q) {
  var dx = p.x - q.x;
  var dy = p.y - q.y;
  return dx * dx + dy * dy;
}

var origin = Point(0, 0);
var far = Point(3.5, -4);
if (dist(origin, far) >= 25 and !false) {
  print "far away";
} else {
  print super.describe(far);
}

for (var i = 0; i < 3; i = i + 1) {
  origin.x = origin.x + i;
}

while (origin.x != 3 or nil == nil) origin.x = 3;
print origin.x
"#;

#[test]
fn accepts_a_realistic_program() {
    assert_eq!(check(CLASSES), Ok(()));
}

#[test]
fn sample_program_from_the_docs() {
    let source = "var a = 1;\nwhile (a < 10) {\n  print a;\n  a = a + 1;\n}\n";
    assert_eq!(check(source), Ok(()));
}

#[test]
fn rejects_missing_terminator() {
    assert_eq!(
        check("var a = 1"),
        Err(CheckError::Parse(ParseError::UnexpectedToken {
            expected: vec![TokenKind::Semicolon],
            found: Token::new(TokenKind::Eof, "", Span::new(1, 9)),
        }))
    );
}

#[test]
fn rejects_missing_primary() {
    let err = check("var a = ;").unwrap_err();
    assert_eq!(
        err,
        CheckError::Parse(ParseError::ExpectedPrimary {
            found: Token::new(TokenKind::Semicolon, ";", Span::new(1, 8)),
        })
    );
    assert_eq!(err.to_string(), "unexpected ';', expected primary expression");
}

#[test]
fn lexical_errors_stop_before_parsing() {
    assert_eq!(
        check("var a = 1;\nvar b = $;"),
        Err(CheckError::Lex(LexError::UnexpectedCharacter {
            ch: '$',
            span: Span::new(2, 8),
        }))
    );
}

#[test]
fn outcomes_are_idempotent() {
    for source in [CLASSES, "var a = 1", "var a = ;", "{ print a", "x = \"open"] {
        assert_eq!(check(source), check(source), "source: {source:?}");
    }
}

#[test]
fn one_token_stream_can_feed_many_parsers() {
    let tokens = tokenize("print 1 + 2;").unwrap();
    assert_eq!(parse(&tokens), Ok(()));
    assert_eq!(parse(&tokens), Ok(()));
}

#[test]
fn error_messages() {
    let message = |source: &str| check(source).unwrap_err().to_string();

    assert_eq!(message("var 1;"), "unexpected '1', expected identifier");
    assert_eq!(
        message("{ print 1"),
        "no input left after the final statement, expected '}'"
    );
    assert_eq!(message("{ var a;"), "unexpected end of input, expected '}'");
    assert_eq!(message("\"abc"), "unterminated string");
    assert_eq!(message("~"), "unexpected character '~'");
}
