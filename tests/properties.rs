//! Property tests over arbitrary and generated sources.

use loxcheck::{check, parse, tokenize, TokenKind};
use proptest::prelude::*;

const KEYWORDS: &[&str] = &[
    "true", "false", "nil", "this", "super", "while", "print", "return", "if", "else", "for",
    "var", "fun", "and", "or",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,6}".prop_filter("keywords are reserved", |name| {
        !KEYWORDS.contains(&name.as_str())
    })
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        identifier(),
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        "\"[a-z ]{0,8}\"",
        Just("true".to_string()),
        Just("nil".to_string()),
        Just("this".to_string()),
        identifier().prop_map(|name| format!("super.{name}")),
    ];

    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), "==|!=|<=|>=|<|>|\\+|-|\\*|/|and|or", inner.clone())
                .prop_map(|(lhs, op, rhs)| format!("{lhs} {op} {rhs}")),
            (prop_oneof![Just("!"), Just("-")], inner.clone())
                .prop_map(|(op, operand)| format!("{op}{operand}")),
            inner.clone().prop_map(|expr| format!("({expr})")),
            (inner.clone(), identifier()).prop_map(|(target, field)| format!("{target}.{field}")),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, args)| format!("{callee}({})", args.join(", "))),
            (identifier(), inner).prop_map(|(name, value)| format!("{name} = {value}")),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    let simple = prop_oneof![
        expression().prop_map(|expr| format!("print {expr};")),
        expression().prop_map(|expr| format!("{expr};")),
        (identifier(), expression()).prop_map(|(name, expr)| format!("var {name} = {expr};")),
        identifier().prop_map(|name| format!("var {name};")),
    ];

    simple.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|body| format!("{{ {} }}", body.join(" "))),
            (expression(), inner.clone())
                .prop_map(|(cond, body)| format!("while ({cond}) {{ {body} }}")),
            (expression(), inner.clone(), inner.clone()).prop_map(|(cond, then, other)| {
                format!("if ({cond}) {{ {then} }} else {{ {other} }}")
            }),
            (expression(), inner.clone())
                .prop_map(|(cond, body)| format!("for (; {cond};) {{ {body} }}")),
            (
                identifier(),
                prop::collection::vec(identifier(), 0..3),
                prop::collection::vec(inner, 0..3),
            )
                .prop_map(|(name, params, body)| {
                    format!("fun {name}({}) {{ {} return; }}", params.join(", "), body.join(" "))
                }),
        ]
    })
}

proptest! {
    #[test]
    fn check_never_panics(source in "\\PC*") {
        let _ = check(&source);
    }

    #[test]
    fn check_is_deterministic(source in "[ -~\n]{0,64}") {
        prop_assert_eq!(check(&source), check(&source));
    }

    #[test]
    fn tokenize_ends_with_a_single_eof(source in "[ -~\n]{0,64}") {
        if let Ok(tokens) = tokenize(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
        }
    }

    #[test]
    fn generated_programs_are_accepted(body in prop::collection::vec(statement(), 0..6)) {
        let source = body.join("\n");
        let tokens = tokenize(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parse(&tokens), Ok(()), "source: {}", source);
    }

    #[test]
    fn dropping_the_final_semicolon_is_rejected(
        name in identifier(),
        value in expression(),
    ) {
        let source = format!("var {name} = {value}");
        prop_assert!(check(&source).is_err());
    }
}
