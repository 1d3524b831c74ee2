//! Typed parser combinators over a lazy, backtracking regex lexer.
//!
//! A grammar is built from two coupled pieces:
//!
//! - a [`TokenList`] of regex [`TokenRule`]s, the alphabet the lexer slices
//!   the source into, and
//! - a tree of [`Rule`]s combining those tokens into a recursive-descent
//!   parser with unlimited backtracking and a typed result.
//!
//! At a high level, a parse is a pipeline:
//!
//! ```text
//! source ── Input::feed ──┐
//!                         │   Rule::exec (top rule)
//!                         └──────────┬─────────────
//!                                    │  peek/next
//!                                    v
//!                         Input: lazy lexer + cursor
//!                           - runs TokenRules at last_index on demand
//!                           - memoises every Lexeme ever produced
//!                           - save/rollback/commit for backtracking
//!                                    │
//!                                    v
//!                         typed results flow back up the rule tree
//! ```
//!
//! Backtracking costs nothing beyond cursor reassignment: the lexeme vector
//! is never truncated, so each byte of the source is tokenised at most once
//! no matter how many alternatives are tried.
//!
//! ## Example
//!
//! ```
//! use parlex::{Language, Outcome, Rule, Sequence, TokenList};
//!
//! let mut tokens = TokenList::new();
//! let number = tokens.add("[0-9]+");
//! let plus = tokens.literal("+");
//! tokens.skip(r"[ \t]+");
//!
//! let lhs = number.clone().transform(|lexeme| match lexeme.text().parse::<i64>() {
//!     Ok(value) => Outcome::Match(value),
//!     Err(_) => Outcome::NoMatch,
//! });
//! let rhs = number.transform(|lexeme| match lexeme.text().parse::<i64>() {
//!     Ok(value) => Outcome::Match(value),
//!     Err(_) => Outcome::NoMatch,
//! });
//!
//! let sum = Sequence((lhs, plus, rhs)).map(|(a, _, b)| a + b);
//! let language = Language::new(sum, tokens);
//! assert_eq!(language.parse("12 + 30").unwrap(), 42);
//! ```
//!
//! Grammars are immutable once built and `Send + Sync`; any number of
//! concurrent parses may share one. Left recursion is not supported; write
//! `E = E op T | T` as a head followed by repeated tails, as in the example
//! grammars under `tests/`. Set `PARLEX_DEBUG=1` to print lexer and
//! named-rule traces.

#[macro_use]
mod macros;

mod combinators;
mod error;
mod input;
mod language;
mod metrics;
mod pattern;
mod rule;
mod token;


pub use combinators::{
    Any, Either, Forward, List, LookAhead, Map, Named, Not, OneOrMore, Optional, RuleAlternatives, RuleChain,
    Sequence, Transform, ZeroOrMore,
};
pub use error::ParseError;
pub use input::Input;
pub use language::Language;
pub use metrics::{ParseMetrics, ParseRun};
pub use rule::{DynRule, Rule};
pub use token::{Lexeme, Matching, OneOf, TokenList, TokenRule};

// --- Core outcome types ------------------------------------------------------

/// Result of executing a rule: a typed match, or the ordinary, recoverable
/// no-match signal every combinator routes on.
///
/// No-match is cheap control flow, not a fault; it must never be conflated
/// with a [`ParseError`] (and never encoded as a sentinel value of `T`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The rule applied and produced a value.
    Match(T),
    /// The rule did not apply here; the caller may try an alternative.
    NoMatch,
}

impl<T> Outcome<T> {
    /// Map the matched value, passing no-match through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Match(value) => Outcome::Match(f(value)),
            Outcome::NoMatch => Outcome::NoMatch,
        }
    }

    /// True if this is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Match(_))
    }

    /// True if this is a no-match.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Outcome::NoMatch)
    }

    /// The matched value, or `None` on no-match.
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Match(value) => Some(value),
            Outcome::NoMatch => None,
        }
    }
}

/// What every rule execution returns: `?` propagates fatal [`ParseError`]s,
/// the [`Outcome`] carries no-match control flow.
pub type Parsed<T> = Result<Outcome<T>, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_map_and_accessors() {
        let matched: Outcome<i32> = Outcome::Match(2);
        assert!(matched.is_match());
        assert_eq!(matched.map(|n| n * 2), Outcome::Match(4));
        assert_eq!(matched.into_option(), Some(2));

        let missed: Outcome<i32> = Outcome::NoMatch;
        assert!(missed.is_no_match());
        assert_eq!(missed.map(|n| n * 2), Outcome::NoMatch);
        assert_eq!(missed.into_option(), None);
    }
}
