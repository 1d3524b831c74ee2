//! Optionality.

use crate::input::Input;
use crate::rule::Rule;
use crate::{Outcome, Parsed};

/// Wraps the inner result in `Option`; never no-matches.
pub struct Optional<R>(pub R);

impl<R: Rule> Rule for Optional<R> {
    type Output = Option<R::Output>;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        match self.0.exec(input)? {
            Outcome::Match(value) => Ok(Outcome::Match(Some(value))),
            Outcome::NoMatch => Ok(Outcome::Match(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenList;

    #[test]
    fn present_and_absent() {
        let mut list = TokenList::new();
        let digit = list.add("[0-9]");
        let word = list.add("[a-z]+");
        list.skip(" +");

        let sign = Optional(digit);
        let mut input = Input::new(list);
        input.feed("1 ab");

        assert_eq!(sign.exec(&mut input).unwrap().into_option().unwrap().map(|l| l.text().to_string()), Some("1".to_string()));
        // Absent: still a match, nothing consumed.
        let absent = sign.exec(&mut input).unwrap().into_option().unwrap();
        assert!(absent.is_none());
        assert!(matches!(word.exec(&mut input), Ok(Outcome::Match(_))));
    }
}
