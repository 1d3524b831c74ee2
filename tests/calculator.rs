//! End-to-end worked example: a textbook arithmetic calculator.
//!
//! Tokens: number, `+`, `-`, `*`, `/`, `(`, `)`; whitespace is skipped.
//! Left-associative `+`/`-` over `*`/`/` over atoms, where an atom is a
//! number or a parenthesised expression. Left recursion is rewritten as a
//! head followed by repeated tails:
//!
//! ```text
//! expr = term ((`+` | `-`) term)*
//! term = atom ((`*` | `/`) atom)*
//! atom = number | `(` expr `)`
//! ```

use std::sync::Arc;

use once_cell::sync::Lazy;
use parlex::{
    shared_rule, Any, DynRule, Either, Forward, Language, Lexeme, Not, Outcome, ParseError, Rule, Sequence, TokenList,
    TokenRule, ZeroOrMore,
};

struct CalcTokens {
    list: TokenList,
    number: Arc<TokenRule>,
    plus: Arc<TokenRule>,
    minus: Arc<TokenRule>,
    star: Arc<TokenRule>,
    slash: Arc<TokenRule>,
    lparen: Arc<TokenRule>,
    rparen: Arc<TokenRule>,
}

static CALC: Lazy<CalcTokens> = Lazy::new(|| {
    let mut list = TokenList::new();
    let number = list.add(r"[0-9]+(?:\.[0-9]+)?");
    let plus = list.literal("+");
    let minus = list.literal("-");
    let star = list.literal("*");
    let slash = list.literal("/");
    let lparen = list.literal("(");
    let rparen = list.literal(")");
    list.skip(r"[ \t\r\n]+");
    CalcTokens { list, number, plus, minus, star, slash, lparen, rparen }
});

fn atom() -> &'static DynRule<f64> {
    shared_rule!(f64, {
        let number = CALC.number.clone().transform(|lexeme: Lexeme| match lexeme.text().parse::<f64>() {
            Ok(value) => Outcome::Match(value),
            Err(_) => Outcome::NoMatch,
        });
        let grouped =
            Sequence((CALC.lparen.clone(), Forward(expr), CALC.rparen.clone())).map(|(_, value, _)| value);
        Either((number, grouped)).named("atom")
    })
}

fn term() -> &'static DynRule<f64> {
    shared_rule!(f64, {
        let operator = Either((CALC.star.clone(), CALC.slash.clone()));
        let tails = ZeroOrMore(Sequence((operator, Forward(atom))));
        Sequence((Forward(atom), tails))
            .map(|(first, tails): (f64, Vec<(Lexeme, f64)>)| {
                tails.into_iter().fold(
                    first,
                    |acc, (op, rhs)| if op.text() == "*" { acc * rhs } else { acc / rhs },
                )
            })
            .named("term")
    })
}

fn expr() -> &'static DynRule<f64> {
    shared_rule!(f64, {
        let operator = Either((CALC.plus.clone(), CALC.minus.clone()));
        let tails = ZeroOrMore(Sequence((operator, Forward(term))));
        Sequence((Forward(term), tails))
            .map(|(first, tails): (f64, Vec<(Lexeme, f64)>)| {
                tails.into_iter().fold(
                    first,
                    |acc, (op, rhs)| if op.text() == "+" { acc + rhs } else { acc - rhs },
                )
            })
            .named("expression")
    })
}

/// The full calculator: an expression that must consume the entire input.
fn calculator() -> Language<impl Rule<Output = f64>> {
    let complete = Sequence((Forward(expr), Not(Any))).map(|(value, _)| value);
    Language::new(complete, CALC.list.clone())
}

#[test]
fn adds_two_numbers() {
    assert_eq!(calculator().parse("1 + 2").unwrap(), 3.0);
}

#[test]
fn honours_precedence_and_grouping() {
    assert_eq!(calculator().parse("  2 * (2 + 1)   + 10 / 2    ").unwrap(), 11.0);
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(calculator().parse("10 - 2 - 3").unwrap(), 5.0);
}

#[test]
fn dangling_operator_fails_at_the_operator() {
    match calculator().parse("2 + 3 * 2\n+\n") {
        Err(ParseError::ParseFailed { line, column, text }) => {
            assert_eq!((line, column), (2, 1));
            assert_eq!(text, "+");
        }
        other => panic!("expected ParseFailed, got {other:?}"),
    }
}

#[test]
fn unlexable_byte_is_illegal_input() {
    match calculator().parse("  52 !  ") {
        Err(ParseError::IllegalInput { line, column, byte }) => {
            assert_eq!((line, column), (1, 6));
            assert_eq!(byte, 5);
        }
        other => panic!("expected IllegalInput, got {other:?}"),
    }
}

#[test]
fn empty_input_fails_at_origin() {
    match calculator().parse("") {
        Err(ParseError::ParseFailed { line, column, text }) => {
            assert_eq!((line, column), (1, 1));
            assert_eq!(text, "");
        }
        other => panic!("expected ParseFailed, got {other:?}"),
    }
}

#[test]
fn deep_nesting_backtracks_without_retokenising() {
    let run = calculator().parse_with_metrics("((((1 + 2)))) * 3").unwrap();
    assert_eq!(run.value, 9.0);
    // Every alternative retried over the same bytes replays memoised
    // lexemes; production happens once per lexeme.
    assert_eq!(run.metrics.lexemes_produced, 17);
    assert!(run.metrics.lookups > run.metrics.lexemes_produced);
    assert_eq!(run.metrics.saves, run.metrics.commits + run.metrics.rollbacks);
}

#[test]
fn decimal_numbers_parse() {
    assert_eq!(calculator().parse("1.5 * 4").unwrap(), 6.0);
}
