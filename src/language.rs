//! The top-level entry coupling a grammar with its token alphabet.

use std::time::Instant;

use crate::error::ParseError;
use crate::input::Input;
use crate::metrics::ParseRun;
use crate::rule::Rule;
use crate::token::TokenList;
use crate::Outcome;

/// A top rule paired with the [`TokenList`] it parses over.
///
/// This is the only place no-match turns into a user-visible fault: the top
/// rule either consumes the whole input (skippable lexemes aside) or the
/// parse fails with a position. Nested languages with a different alphabet
/// are not supported: a parse owns one [`Input`] over one token list from
/// start to finish.
pub struct Language<R> {
    top: R,
    tokens: TokenList,
}

impl<R: Rule> Language<R> {
    /// Couple `top` with the alphabet `tokens`.
    pub fn new(top: R, tokens: TokenList) -> Self {
        Language { top, tokens }
    }

    /// Parse `source` to completion.
    ///
    /// Errors:
    /// - [`ParseError::IllegalInput`] when the lexer gets stuck on a byte no
    ///   token rule matches;
    /// - [`ParseError::ParseFailed`] when the top rule does not apply;
    /// - [`ParseError::UnexpectedInput`] when it applies but a non-skippable
    ///   lexeme remains.
    ///
    /// The latter two point at the furthest lexeme seen, which after a
    /// partial rollback is far more informative than the final cursor
    /// position.
    pub fn parse(&self, source: &str) -> Result<R::Output, ParseError> {
        let mut input = Input::new(self.tokens.clone());
        input.feed(source);
        self.execute(&mut input)
    }

    /// As [`parse`](Language::parse), bundling counters and timing with the
    /// result.
    pub fn parse_with_metrics(&self, source: &str) -> Result<ParseRun<R::Output>, ParseError> {
        let started = Instant::now();
        let mut input = Input::new(self.tokens.clone());
        input.feed(source);
        let value = self.execute(&mut input)?;
        let mut metrics = input.metrics();
        metrics.total = started.elapsed();
        Ok(ParseRun { value, metrics })
    }

    fn execute(&self, input: &mut Input) -> Result<R::Output, ParseError> {
        match self.top.exec(input)? {
            Outcome::Match(value) => {
                if input.peek()?.is_some() {
                    let (line, column, text) = input.error_position();
                    return Err(ParseError::UnexpectedInput { line, column, text });
                }
                Ok(value)
            }
            Outcome::NoMatch => {
                let (line, column, text) = input.error_position();
                Err(ParseError::ParseFailed { line, column, text })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Rule, Sequence};

    fn word_number() -> (TokenList, impl Rule<Output = (String, i64)>) {
        let mut tokens = TokenList::new();
        let word = tokens.add("[a-z]+");
        let number = tokens.add("[0-9]+");
        tokens.skip(" +");

        let assignment = Sequence((
            word.text(),
            number.transform(|lexeme| match lexeme.text().parse::<i64>() {
                Ok(value) => Outcome::Match(value),
                Err(_) => Outcome::NoMatch,
            }),
        ));
        (tokens, assignment)
    }

    #[test]
    fn returns_the_typed_result() {
        let (tokens, assignment) = word_number();
        let language = Language::new(assignment, tokens);
        assert_eq!(language.parse("answer 42").unwrap(), ("answer".to_string(), 42));
    }

    #[test]
    fn leftover_input_is_unexpected() {
        let (tokens, assignment) = word_number();
        let language = Language::new(assignment, tokens);
        match language.parse("answer 42 junk") {
            Err(ParseError::UnexpectedInput { line, column, text }) => {
                assert_eq!((line, column), (1, 11));
                assert_eq!(text, "junk");
            }
            other => panic!("expected UnexpectedInput, got {other:?}"),
        }
    }

    #[test]
    fn trailing_skippables_are_not_leftover() {
        let (tokens, assignment) = word_number();
        let language = Language::new(assignment, tokens);
        assert!(language.parse("answer 42   ").is_ok());
    }

    #[test]
    fn top_level_no_match_is_parse_failed() {
        let (tokens, assignment) = word_number();
        let language = Language::new(assignment, tokens);
        match language.parse("answer answer") {
            Err(ParseError::ParseFailed { text, .. }) => assert_eq!(text, "answer"),
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_fails_at_origin() {
        let (tokens, assignment) = word_number();
        let language = Language::new(assignment, tokens);
        match language.parse("") {
            Err(ParseError::ParseFailed { line, column, text }) => {
                assert_eq!((line, column), (1, 1));
                assert_eq!(text, "");
            }
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn metrics_reflect_the_run() {
        let (tokens, assignment) = word_number();
        let language = Language::new(assignment, tokens);
        let run = language.parse_with_metrics("answer 42").unwrap();
        assert_eq!(run.value, ("answer".to_string(), 42));
        assert_eq!(run.metrics.lexemes_produced, 3);
        assert_eq!(run.metrics.saves, run.metrics.commits + run.metrics.rollbacks);
    }
}
