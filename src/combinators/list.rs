//! Separator-interleaved repetition.

use crate::input::Input;
use crate::rule::{protect, Rule};
use crate::{Outcome, Parsed};

/// `item (separator item)*`: collects the item results, discarding the
/// separators. No-match when the first item is absent.
pub struct List<R, S> {
    item: R,
    separator: S,
}

impl<R, S> List<R, S> {
    pub fn new(item: R, separator: S) -> Self {
        List { item, separator }
    }
}

impl<R: Rule, S: Rule> Rule for List<R, S> {
    type Output = Vec<R::Output>;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        let first = try_match!(self.item.exec(input));
        let mut items = vec![first];
        loop {
            let before = input.cursor();
            // The separator only counts if an item follows it; otherwise the
            // pair rolls back as a unit and the list ends cleanly.
            let tail = protect(input, |i| match self.separator.exec(i)? {
                Outcome::Match(_) => self.item.exec(i),
                Outcome::NoMatch => Ok(Outcome::NoMatch),
            });
            match tail? {
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
