//! The wildcard leaf.

use crate::input::Input;
use crate::rule::Rule;
use crate::token::Lexeme;
use crate::{Outcome, Parsed};

/// Consumes one lexeme of any kind; no-match only at end of input.
pub struct Any;

impl Rule for Any {
    type Output = Lexeme;

    fn run(&self, input: &mut Input) -> Parsed<Lexeme> {
        match input.next()? {
            Some(lexeme) => Ok(Outcome::Match(lexeme)),
            None => Ok(Outcome::NoMatch),
        }
    }
}
