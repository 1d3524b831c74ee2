//! The `Rule` abstraction and the state-protection discipline.
//!
//! A rule's `run` is its body; `exec` is `run` wrapped in
//! save/rollback/commit so that a no-match (or a fatal error) leaves the
//! input exactly where the rule found it. Combinators always call `exec` on
//! their children, never `run`, which keeps the save stack balanced by
//! construction:
//!
//! ```text
//! exec:  save ──► run ──► Match    ──► commit   (position kept)
//!                     └─► NoMatch  ──► rollback (position restored)
//!                     └─► Err      ──► rollback, propagate
//! ```

use std::sync::Arc;

use crate::combinators::{Either, Map, Named, OneOrMore, Optional, Sequence, Transform, ZeroOrMore};
use crate::input::{trace_enabled, Input};
use crate::token::{Lexeme, Matching, OneOf};
use crate::{Outcome, Parsed};

/// Run `body` between a save and its resolving commit or rollback: rolled
/// back on no-match and on error, committed on match.
pub(crate) fn protect<T>(input: &mut Input, body: impl FnOnce(&mut Input) -> Parsed<T>) -> Parsed<T> {
    input.save();
    match body(input) {
        Ok(Outcome::Match(value)) => {
            input.commit();
            Ok(Outcome::Match(value))
        }
        Ok(Outcome::NoMatch) => {
            input.rollback();
            Ok(Outcome::NoMatch)
        }
        Err(err) => {
            input.rollback();
            Err(err)
        }
    }
}

/// A parser combinator producing a typed result.
///
/// Rules are values: immutable once built, freely shareable (they are also
/// implemented for `&R`, `Box<R>`, `Arc<R>`, and [`DynRule`]), and
/// referentially transparent: executing the same rule twice against the
/// same input state produces the same outcome and the same final state.
pub trait Rule {
    /// Result type on a successful match.
    type Output;

    /// The rule body. It may leave the input advanced on no-match;
    /// [`exec`](Rule::exec) restores it.
    fn run(&self, input: &mut Input) -> Parsed<Self::Output>;

    /// Display name used only in diagnostics.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Execute with state protection: save before the body, roll back on
    /// no-match or error, commit on match.
    fn exec(&self, input: &mut Input) -> Parsed<Self::Output> {
        let outcome = protect(input, |i| self.run(i));
        if trace_enabled() {
            if let Some(label) = self.label() {
                match &outcome {
                    Ok(Outcome::Match(_)) => eprintln!("[rule:match] name={label:?} cursor={}", input.cursor()),
                    Ok(Outcome::NoMatch) => eprintln!("[rule:no_match] name={label:?} cursor={}", input.cursor()),
                    Err(_) => {}
                }
            }
        }
        outcome
    }

    // --- Adapters ------------------------------------------------------------

    /// Map a successful result through `f`; `f` may itself signal no-match,
    /// which propagates as an ordinary no-match.
    fn transform<U, F>(self, f: F) -> Transform<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Outcome<U>,
    {
        Transform::new(self, f)
    }

    /// Shorthand for [`transform`](Rule::transform).
    fn tf<U, F>(self, f: F) -> Transform<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Outcome<U>,
    {
        self.transform(f)
    }

    /// Map a successful result through an infallible function.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Attach a display name used only in diagnostics.
    fn named(self, label: &'static str) -> Named<Self>
    where
        Self: Sized,
    {
        Named::new(self, label)
    }

    /// This rule, or `other` where it does not apply.
    fn or<R>(self, other: R) -> Either<(Self, R)>
    where
        Self: Sized,
        R: Rule<Output = Self::Output>,
    {
        Either((self, other))
    }

    /// This rule followed by `other`.
    fn then<R>(self, other: R) -> Sequence<(Self, R)>
    where
        Self: Sized,
        R: Rule,
    {
        Sequence((self, other))
    }

    /// Make the rule optional; the result never no-matches.
    fn opt(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional(self)
    }

    /// Zero or more occurrences.
    fn repeated(self) -> ZeroOrMore<Self>
    where
        Self: Sized,
    {
        ZeroOrMore(self)
    }

    /// One or more occurrences.
    fn at_least_once(self) -> OneOrMore<Self>
    where
        Self: Sized,
    {
        OneOrMore(self)
    }

    /// The matched text of a lexeme-producing rule.
    fn text(self) -> Map<Self, fn(Lexeme) -> String>
    where
        Self: Sized + Rule<Output = Lexeme>,
    {
        Map::new(self, Lexeme::into_text as fn(Lexeme) -> String)
    }

    /// Keep the lexeme only if its text equals one of `texts`.
    fn one_of(self, texts: &[&str]) -> OneOf<Self>
    where
        Self: Sized + Rule<Output = Lexeme>,
    {
        OneOf::new(self, texts)
    }

    /// Keep the lexeme only if its whole text matches `pattern`.
    fn matching(self, pattern: &str) -> Matching<Self>
    where
        Self: Sized + Rule<Output = Lexeme>,
    {
        Matching::new(self, pattern)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    type Output = R::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        (**self).run(input)
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Output = R::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        (**self).run(input)
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    type Output = R::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        (**self).run(input)
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

/// A type-erased, shareable rule.
///
/// Grammars stored in statics use this (usually through the
/// [`shared_rule!`](crate::shared_rule) macro) to give forward references a
/// single concrete type; cloning shares the underlying rule.
pub struct DynRule<T> {
    inner: Arc<dyn Rule<Output = T> + Send + Sync>,
}

impl<T> DynRule<T> {
    /// Erase `rule` behind a shareable handle.
    pub fn new(rule: impl Rule<Output = T> + Send + Sync + 'static) -> Self {
        DynRule { inner: Arc::new(rule) }
    }
}

impl<T> Clone for DynRule<T> {
    fn clone(&self) -> Self {
        DynRule { inner: self.inner.clone() }
    }
}

impl<T> Rule for DynRule<T> {
    type Output = T;

    fn run(&self, input: &mut Input) -> Parsed<T> {
        self.inner.run(input)
    }

    fn label(&self) -> Option<&str> {
        self.inner.label()
    }
}
