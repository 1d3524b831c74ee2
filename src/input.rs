//! The lazy lexer and backtracking cursor.
//!
//! `Input` owns the source string and a growing vector of [`Lexeme`]s,
//! produced on demand by running the [`TokenList`]'s rules at `last_index`:
//!
//! ```text
//! source:  "2 * (1 + 3)"
//! lexemes: [2] [ ] [*] [ ] [(] [1] ...      ← extended lazily
//!               ▲ skippable, elided by the skip filter
//! lex_position ─┘ (index of the last consumed lexeme; starts at -1)
//! last_index ──────────────► next byte offset to tokenise from
//! ```
//!
//! Backtracking is a cursor move: `save` pushes `lex_position`, `rollback`
//! pops and restores it, `commit` pops and discards. The lexeme vector is
//! never truncated, so a retry replays memoised lexemes instead of running
//! the token regexes again; each byte of the source is tokenised at most
//! once.
//!
//! Nested languages with a different token alphabet are not supported: one
//! parse owns one `Input` over one `TokenList` from start to finish.

use crate::error::ParseError;
use crate::metrics::ParseMetrics;
use crate::token::{Lexeme, TokenList, TokenRule};

pub(crate) fn trace_enabled() -> bool {
    std::env::var_os("PARLEX_DEBUG").is_some()
}

/// Lazy lexer plus backtracking cursor. Created per parse; combinators
/// only ever see it through [`peek`](Input::peek), [`next`](Input::next),
/// and the save/rollback/commit discipline.
#[derive(Debug)]
pub struct Input {
    source: String,
    tokens: TokenList,
    lexemes: Vec<Lexeme>,
    /// Index into `lexemes` of the last consumed lexeme; -1 before the
    /// first `next`.
    lex_position: isize,
    /// Next byte offset to attempt tokenisation from.
    last_index: usize,
    stack: Vec<isize>,
    current_line: u32,
    current_column: u32,
    /// Maximum-index lexeme ever returned, for error reporting: after a
    /// partial rollback this points closer to the real problem than the
    /// current position does.
    furthest: Option<Lexeme>,
    metrics: ParseMetrics,
}

impl Input {
    /// A fresh input over `tokens` with no source yet.
    pub fn new(tokens: TokenList) -> Self {
        Input {
            source: String::new(),
            tokens,
            lexemes: Vec::new(),
            lex_position: -1,
            last_index: 0,
            stack: Vec::new(),
            current_line: 1,
            current_column: 1,
            furthest: None,
            metrics: ParseMetrics::default(),
        }
    }

    /// Reset the cursor and hand the lexer a new source string.
    pub fn feed(&mut self, source: &str) {
        self.source = source.to_string();
        self.lexemes.clear();
        self.lex_position = -1;
        self.last_index = 0;
        self.stack.clear();
        self.current_line = 1;
        self.current_column = 1;
        self.furthest = None;
        self.metrics = ParseMetrics::default();
    }

    /// Consume and return the next non-skippable lexeme, or `None` at end
    /// of input.
    pub fn next(&mut self) -> Result<Option<Lexeme>, ParseError> {
        self.next_lexeme(true, None)
    }

    /// Return the next non-skippable lexeme without consuming it.
    pub fn peek(&mut self) -> Result<Option<Lexeme>, ParseError> {
        self.next_lexeme(false, None)
    }

    /// Consume and return the next lexeme with the skip filter bypassed for
    /// `required` only. The bypass is per-lookup parse state, never a
    /// grammar mutation, so nothing leaks if the surrounding rule rolls
    /// back.
    pub(crate) fn next_required(&mut self, required: &TokenRule) -> Result<Option<Lexeme>, ParseError> {
        self.next_lexeme(true, Some(required))
    }

    /// Common lookup: scan forward from `lex_position + 1` through memoised
    /// lexemes (extending lazily) to the first lexeme the skip filter lets
    /// through; advance the cursor iff `update_position`.
    fn next_lexeme(&mut self, update_position: bool, required: Option<&TokenRule>) -> Result<Option<Lexeme>, ParseError> {
        self.metrics.lookups += 1;
        let mut pos = (self.lex_position + 1) as usize;
        loop {
            if pos >= self.lexemes.len() && !self.extend()? {
                return Ok(None);
            }
            let skip = {
                let lexeme = &self.lexemes[pos];
                lexeme.token().skippable() && !required.is_some_and(|rule| lexeme.is(rule))
            };
            if skip {
                pos += 1;
                continue;
            }
            if update_position {
                self.lex_position = pos as isize;
            }
            let lexeme = self.lexemes[pos].clone();
            self.note_furthest(&lexeme);
            return Ok(Some(lexeme));
        }
    }

    /// Produce one more lexeme, trying every token rule in priority order
    /// at `last_index`. Zero-length matches are rejected so a pathological
    /// pattern cannot stall the lexer. Returns `false` at end of source.
    fn extend(&mut self) -> Result<bool, ParseError> {
        if self.last_index >= self.source.len() {
            return Ok(false);
        }
        for i in 0..self.tokens.rules().len() {
            let rule = self.tokens.rules()[i].clone();
            let Some((text, groups)) = rule.match_at(&self.source, self.last_index) else { continue };
            if text.is_empty() {
                continue;
            }
            let lexeme = Lexeme::new(text, rule.clone(), self.last_index, self.current_line, self.current_column, groups);
            if trace_enabled() {
                eprintln!(
                    "[lexer:emit] pattern={:?} text={:?} at={}:{}",
                    rule.pattern(),
                    lexeme.text(),
                    lexeme.line(),
                    lexeme.column()
                );
            }
            self.advance_location(lexeme.text());
            self.last_index = lexeme.end();
            self.metrics.lexemes_produced += 1;
            self.lexemes.push(lexeme);
            return Ok(true);
        }
        if trace_enabled() {
            eprintln!(
                "[lexer:stuck] no token rule matches at {}:{} (byte {})",
                self.current_line, self.current_column, self.last_index
            );
        }
        Err(ParseError::IllegalInput { line: self.current_line, column: self.current_column, byte: self.last_index })
    }

    fn advance_location(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.current_line += 1;
                self.current_column = 1;
            } else {
                self.current_column += 1;
            }
        }
    }

    fn note_furthest(&mut self, lexeme: &Lexeme) {
        let further = self.furthest.as_ref().map_or(true, |f| lexeme.index() > f.index());
        if further {
            self.furthest = Some(lexeme.clone());
        }
    }

    /// Push the cursor; pair with [`rollback`](Input::rollback) or
    /// [`commit`](Input::commit).
    pub fn save(&mut self) {
        self.stack.push(self.lex_position);
        self.metrics.saves += 1;
        if self.stack.len() > self.metrics.max_stack_depth {
            self.metrics.max_stack_depth = self.stack.len();
        }
    }

    /// Pop and restore the cursor. Already-produced lexemes are kept, so
    /// the retry replays them instead of re-tokenising.
    pub fn rollback(&mut self) {
        debug_assert!(!self.stack.is_empty(), "rollback without a matching save");
        if let Some(position) = self.stack.pop() {
            self.lex_position = position;
        }
        self.metrics.rollbacks += 1;
    }

    /// Pop and discard the saved cursor.
    pub fn commit(&mut self) {
        debug_assert!(!self.stack.is_empty(), "commit without a matching save");
        self.stack.pop();
        self.metrics.commits += 1;
    }

    /// Current cursor value. Repetition combinators compare this across
    /// iterations to detect zero progress.
    pub fn cursor(&self) -> isize {
        self.lex_position
    }

    /// Position and text of the furthest lexeme ever returned, or `(1, 1,
    /// "")` when the source never yielded one.
    pub(crate) fn error_position(&self) -> (u32, u32, String) {
        match &self.furthest {
            Some(lexeme) => (lexeme.line(), lexeme.column(), lexeme.text().to_string()),
            None => (1, 1, String::new()),
        }
    }

    pub(crate) fn metrics(&self) -> ParseMetrics {
        self.metrics
    }

    #[cfg(test)]
    pub(crate) fn produced_lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }
}
