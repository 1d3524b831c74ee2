//! Result mapping and diagnostic naming.

use crate::input::Input;
use crate::rule::Rule;
use crate::{Outcome, Parsed};

/// Maps a successful result through a fallible function: the function
/// returns an [`Outcome`], so it can reject a structurally valid match
/// (an out-of-range number, an unknown keyword) as an ordinary no-match.
///
/// Built by [`Rule::transform`] / [`Rule::tf`].
pub struct Transform<R, F> {
    inner: R,
    transform: F,
}

impl<R, F> Transform<R, F> {
    pub(crate) fn new(inner: R, transform: F) -> Self {
        Transform { inner, transform }
    }
}

impl<R, U, F> Rule for Transform<R, F>
where
    R: Rule,
    F: Fn(R::Output) -> Outcome<U>,
{
    type Output = U;

    fn run(&self, input: &mut Input) -> Parsed<U> {
        let value = try_match!(self.inner.exec(input));
        Ok((self.transform)(value))
    }
}

/// Maps a successful result through an infallible function. Built by
/// [`Rule::map`].
pub struct Map<R, F> {
    inner: R,
    map: F,
}

impl<R, F> Map<R, F> {
    pub(crate) fn new(inner: R, map: F) -> Self {
        Map { inner, map }
    }
}

impl<R, U, F> Rule for Map<R, F>
where
    R: Rule,
    F: Fn(R::Output) -> U,
{
    type Output = U;

    fn run(&self, input: &mut Input) -> Parsed<U> {
        let value = try_match!(self.inner.exec(input));
        Ok(Outcome::Match((self.map)(value)))
    }
}

/// Attaches a display name, surfaced in `PARLEX_DEBUG=1` traces. Built by
/// [`Rule::named`].
pub struct Named<R> {
    inner: R,
    label: &'static str,
}

impl<R> Named<R> {
    pub(crate) fn new(inner: R, label: &'static str) -> Self {
        Named { inner, label }
    }
}

impl<R: Rule> Rule for Named<R> {
    type Output = R::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        self.inner.run(input)
    }

    fn label(&self) -> Option<&str> {
        Some(self.label)
    }
}
