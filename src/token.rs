//! Token rules, token lists, and lexemes.
//!
//! A [`TokenRule`] is the smallest unit the parser recognises: a regex
//! pattern compiled to match at an exact byte offset, plus a `skippable`
//! flag. A [`TokenList`] owns the rules and fixes their priority: the lexer
//! tries rules in list order and accepts the first non-empty match.
//! [`Lexeme`]s are the occurrences, produced exclusively by
//! [`Input`](crate::Input) as the source is tokenised on demand.
//!
//! A `TokenRule` doubles as a [`Rule`] producing the `Lexeme` it recognises,
//! so grammars can use tokens directly as leaves of the combinator tree.

use std::sync::Arc;

use regex::Regex;

use crate::input::Input;
use crate::pattern;
use crate::rule::Rule;
use crate::{Outcome, Parsed};

/// A token occurrence in the source: matched text, the rule that produced
/// it, and its position.
///
/// Lexemes are created by [`Input`] while extending its lexeme vector and
/// never mutated afterwards. `line` and `column` are 1-based; `column`
/// counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct Lexeme {
    text: String,
    token: Arc<TokenRule>,
    index: usize,
    line: u32,
    column: u32,
    groups: Vec<String>,
}

impl Lexeme {
    pub(crate) fn new(
        text: String,
        token: Arc<TokenRule>,
        index: usize,
        line: u32,
        column: u32,
        groups: Vec<String>,
    ) -> Self {
        Lexeme { text, token, index, line, column, groups }
    }

    /// The matched source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The matched text, consuming the lexeme.
    pub fn into_text(self) -> String {
        self.text
    }

    /// The rule that produced this lexeme.
    pub fn token(&self) -> &Arc<TokenRule> {
        &self.token
    }

    /// Byte offset of the match in the source.
    pub fn index(&self) -> usize {
        self.index
    }

    /// End byte offset of the match (exclusive).
    pub fn end(&self) -> usize {
        self.index + self.text.len()
    }

    /// 1-based line of the first matched character.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the first matched character.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Captured regex groups, participating groups only, in order. Group 0
    /// is [`text`](Lexeme::text) and is not repeated here.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// True if this lexeme was produced by `rule`. Token identity is the
    /// allocation handed out by the [`TokenList`], never pattern equality.
    pub fn is(&self, rule: &TokenRule) -> bool {
        std::ptr::eq(Arc::as_ptr(&self.token), rule)
    }
}

/// A named regex pattern anchored at the lexer's current byte offset.
///
/// Rules are created through [`TokenList::add`], [`TokenList::skip`], or
/// [`TokenList::literal`] and are immutable afterwards, so a grammar can be
/// shared between concurrent parses. Skippable rules (whitespace, comments)
/// have their lexemes silently elided unless a grammar asks for the token
/// explicitly.
#[derive(Debug)]
pub struct TokenRule {
    pattern: Regex,
    source: String,
    skippable: bool,
}

impl TokenRule {
    fn new(pattern: &str, skippable: bool) -> Self {
        TokenRule { pattern: pattern::compile_anchored(pattern), source: pattern.to_string(), skippable }
    }

    /// The pattern this rule was built from.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Whether lexemes of this rule are elided by default.
    pub fn skippable(&self) -> bool {
        self.skippable
    }

    /// Try to match at `start` in `source`; returns matched text plus
    /// captured groups. The compiled pattern is `\A`-anchored, so a match
    /// can only begin exactly at `start`.
    pub(crate) fn match_at(&self, source: &str, start: usize) -> Option<(String, Vec<String>)> {
        let caps = self.pattern.captures(&source[start..])?;
        let whole = caps.get(0)?;
        let groups = (1..caps.len()).filter_map(|i| caps.get(i).map(|g| g.as_str().to_string())).collect();
        Some((whole.as_str().to_string(), groups))
    }
}

impl Rule for TokenRule {
    type Output = Lexeme;

    fn run(&self, input: &mut Input) -> Parsed<Lexeme> {
        // The skip filter is bypassed for exactly this rule, so a grammar
        // can ask for a token that is otherwise in the skip set.
        match input.next_required(self)? {
            Some(lexeme) if lexeme.is(self) => Ok(Outcome::Match(lexeme)),
            _ => Ok(Outcome::NoMatch),
        }
    }

    fn label(&self) -> Option<&str> {
        Some(&self.source)
    }
}

/// Ordered collection of token rules; order of addition is lexing priority.
///
/// Cloning is cheap (the rules are shared), and a clone refers to the same
/// rule identities, so rules obtained from the original list still match
/// lexemes produced through the clone.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    rules: Vec<Arc<TokenRule>>,
}

impl TokenList {
    /// An empty token list.
    pub fn new() -> Self {
        TokenList { rules: Vec::new() }
    }

    /// Append a rule matching `pattern` and return it.
    pub fn add(&mut self, pattern: &str) -> Arc<TokenRule> {
        self.push(TokenRule::new(pattern, false))
    }

    /// Append a rule whose lexemes are skipped by default.
    pub fn skip(&mut self, pattern: &str) -> Arc<TokenRule> {
        self.push(TokenRule::new(pattern, true))
    }

    /// Append a rule matching `text` verbatim, quoting regex
    /// metacharacters.
    pub fn literal(&mut self, text: &str) -> Arc<TokenRule> {
        self.push(TokenRule::new(&pattern::quote(text), false))
    }

    fn push(&mut self, rule: TokenRule) -> Arc<TokenRule> {
        let rule = Arc::new(rule);
        self.rules.push(rule.clone());
        rule
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[Arc<TokenRule>] {
        &self.rules
    }
}

// --- Lexeme-text filters -----------------------------------------------------

/// Keeps a lexeme only if its text equals one of the given literals.
/// Built by [`Rule::one_of`].
pub struct OneOf<R> {
    inner: R,
    texts: Vec<String>,
}

impl<R> OneOf<R> {
    pub(crate) fn new(inner: R, texts: &[&str]) -> Self {
        OneOf { inner, texts: texts.iter().map(|t| (*t).to_string()).collect() }
    }
}

impl<R: Rule<Output = Lexeme>> Rule for OneOf<R> {
    type Output = Lexeme;

    fn run(&self, input: &mut Input) -> Parsed<Lexeme> {
        let lexeme = try_match!(self.inner.exec(input));
        if self.texts.iter().any(|t| t == lexeme.text()) {
            Ok(Outcome::Match(lexeme))
        } else {
            Ok(Outcome::NoMatch)
        }
    }
}

/// Keeps a lexeme only if its whole text matches a regex.
/// Built by [`Rule::matching`].
pub struct Matching<R> {
    inner: R,
    pattern: Regex,
}

impl<R> Matching<R> {
    pub(crate) fn new(inner: R, pattern: &str) -> Self {
        Matching { inner, pattern: pattern::compile_full(pattern) }
    }
}

impl<R: Rule<Output = Lexeme>> Rule for Matching<R> {
    type Output = Lexeme;

    fn run(&self, input: &mut Input) -> Parsed<Lexeme> {
        let lexeme = try_match!(self.inner.exec(input));
        if self.pattern.is_match(lexeme.text()) {
            Ok(Outcome::Match(lexeme))
        } else {
            Ok(Outcome::NoMatch)
        }
    }
}
