//! Positive and negative lookahead.
//!
//! Both run their inner rule and then restore the cursor unconditionally,
//! so they never consume input regardless of outcome. The explicit
//! save/rollback here is deliberate: the protection in
//! [`Rule::exec`](crate::Rule::exec) only restores on failure.

use crate::input::Input;
use crate::rule::Rule;
use crate::{Outcome, Parsed};

/// Runs the inner rule, restores the cursor, and passes the outcome
/// through unchanged.
pub struct LookAhead<R>(pub R);

impl<R: Rule> Rule for LookAhead<R> {
    type Output = R::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        input.save();
        let result = self.0.exec(input);
        input.rollback();
        result
    }
}

/// Negative lookahead: matches (with `()`) exactly when the inner rule
/// does not. Never consumes input.
pub struct Not<R>(pub R);

impl<R: Rule> Rule for Not<R> {
    type Output = ();

    fn run(&self, input: &mut Input) -> Parsed<()> {
        input.save();
        let result = self.0.exec(input);
        input.rollback();
        match result? {
            Outcome::Match(_) => Ok(Outcome::NoMatch),
            Outcome::NoMatch => Ok(Outcome::Match(())),
        }
    }
}
