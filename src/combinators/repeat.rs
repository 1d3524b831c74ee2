//! Repetition.

use crate::input::Input;
use crate::rule::Rule;
use crate::{Outcome, Parsed};

/// Runs the inner rule until it no-matches; always succeeds, possibly with
/// an empty vector.
///
/// A successful iteration that consumes nothing stops the loop; a rule
/// that can match empty must not spin forever.
pub struct ZeroOrMore<R>(pub R);

impl<R: Rule> Rule for ZeroOrMore<R> {
    type Output = Vec<R::Output>;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        let mut items = Vec::new();
        loop {
            let before = input.cursor();
            match self.0.exec(input)? {
                Outcome::Match(value) => {
                    items.push(value);
                    if input.cursor() == before {
                        break;
                    }
                }
                Outcome::NoMatch => break,
            }
        }
        Ok(Outcome::Match(items))
    }
}

/// As [`ZeroOrMore`], but no-match when the inner rule never applies.
pub struct OneOrMore<R>(pub R);

impl<R: Rule> Rule for OneOrMore<R> {
    type Output = Vec<R::Output>;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        let mut items = Vec::new();
        loop {
            let before = input.cursor();
            match self.0.exec(input)? {
                Outcome::Match(value) => {
                    items.push(value);
                    if input.cursor() == before {
                        break;
                    }
                }
                Outcome::NoMatch => break,
            }
        }
        if items.is_empty() {
            Ok(Outcome::NoMatch)
        } else {
            Ok(Outcome::Match(items))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenList;

    fn digits() -> (TokenList, std::sync::Arc<crate::TokenRule>) {
        let mut list = TokenList::new();
        let digit = list.add("[0-9]");
        list.skip(" +");
        (list, digit)
    }

    #[test]
    fn zero_or_more_collects_until_no_match() {
        let (list, digit) = digits();
        let all = ZeroOrMore(digit.text());
        let mut input = Input::new(list);
        input.feed("1 2 3");
        assert_eq!(all.exec(&mut input).unwrap().into_option().unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn zero_or_more_accepts_nothing_and_consumes_nothing() {
        let mut list = TokenList::new();
        let digit = list.add("[0-9]");
        let word = list.add("[a-z]+");

        let all = ZeroOrMore(digit);
        let mut input = Input::new(list);
        input.feed("ab");
        assert_eq!(all.exec(&mut input).unwrap().into_option().unwrap().len(), 0);
        assert_eq!(input.cursor(), -1);
        assert!(matches!(word.exec(&mut input), Ok(Outcome::Match(_))));
    }

    #[test]
    fn zero_or_more_stops_on_zero_progress() {
        let (list, digit) = digits();
        // A lookahead matches without consuming; the guard must stop the loop.
        let stuck = ZeroOrMore(crate::LookAhead(digit));
        let mut input = Input::new(list);
        input.feed("1");
        let seen = stuck.exec(&mut input).unwrap().into_option().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(input.cursor(), -1);
    }

    #[test]
    fn one_or_more_requires_at_least_one() {
        let (list, digit) = digits();
        let some = OneOrMore(digit.clone());
        let mut input = Input::new(list.clone());
        input.feed("1 2");
        assert_eq!(some.exec(&mut input).unwrap().into_option().unwrap().len(), 2);

        let some = OneOrMore(digit);
        let mut input = Input::new(list);
        input.feed("");
        assert!(matches!(some.exec(&mut input), Ok(Outcome::NoMatch)));
    }
}
