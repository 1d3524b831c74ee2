//! Ordered alternation.

use crate::input::Input;
use crate::rule::Rule;
use crate::{Outcome, Parsed};

/// Tries each rule of a tuple in order and commits to the first match;
/// no-match only if every alternative fails.
///
/// All members share one output type. Supported for tuples of 2 to 8
/// rules; nest or use [`Rule::or`] for longer chains.
pub struct Either<T>(pub T);

/// A tuple of same-output rules tried in order. Implemented for arities
/// 2..=8.
pub trait RuleAlternatives {
    /// The shared output type of the members.
    type Output;

    fn run_alternatives(&self, input: &mut Input) -> Parsed<Self::Output>;
}

impl<T: RuleAlternatives> Rule for Either<T> {
    type Output = T::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        self.0.run_alternatives(input)
    }
}

macro_rules! impl_rule_alternatives {
    ($($member:ident $idx:tt),+) => {
        impl<Out, $($member: Rule<Output = Out>),+> RuleAlternatives for ($($member,)+) {
            type Output = Out;

            fn run_alternatives(&self, input: &mut Input) -> Parsed<Out> {
                $(
                    if let Outcome::Match(value) = self.$idx.exec(input)? {
                        return Ok(Outcome::Match(value));
                    }
                )+
                Ok(Outcome::NoMatch)
            }
        }
    };
}

impl_rule_alternatives!(A 0, B 1);
impl_rule_alternatives!(A 0, B 1, C 2);
impl_rule_alternatives!(A 0, B 1, C 2, D 3);
impl_rule_alternatives!(A 0, B 1, C 2, D 3, E 4);
impl_rule_alternatives!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_rule_alternatives!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_rule_alternatives!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
