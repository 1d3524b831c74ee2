//! Ordered conjunction of rules.

use crate::input::Input;
use crate::rule::Rule;
use crate::{Outcome, Parsed};

/// Runs a tuple of rules in order and yields the tuple of their results.
///
/// No-match on the first member that fails, rolling the input back to
/// before the whole sequence. Supported for tuples of 2 to 8 rules; nest
/// sequences for longer chains.
pub struct Sequence<T>(pub T);

/// A tuple of rules runnable in order. Implemented for arities 2..=8.
pub trait RuleChain {
    /// Tuple of the member outputs.
    type Output;

    fn run_chain(&self, input: &mut Input) -> Parsed<Self::Output>;
}

impl<T: RuleChain> Rule for Sequence<T> {
    type Output = T::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        self.0.run_chain(input)
    }
}

macro_rules! impl_rule_chain {
    ($($member:ident $idx:tt),+) => {
        impl<$($member: Rule),+> RuleChain for ($($member,)+) {
            type Output = ($($member::Output,)+);

            fn run_chain(&self, input: &mut Input) -> Parsed<Self::Output> {
                Ok(Outcome::Match(($(try_match!(self.$idx.exec(input)),)+)))
            }
        }
    };
}

impl_rule_chain!(A 0, B 1);
impl_rule_chain!(A 0, B 1, C 2);
impl_rule_chain!(A 0, B 1, C 2, D 3);
impl_rule_chain!(A 0, B 1, C 2, D 3, E 4);
impl_rule_chain!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_rule_chain!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_rule_chain!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
