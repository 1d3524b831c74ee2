//! Parse run metrics.
//!
//! A small set of counters collected by [`Input`](crate::Input) as a parse
//! runs, surfaced through
//! [`Language::parse_with_metrics`](crate::Language::parse_with_metrics).
//! Collection is counter bumps only, so the hot path is unaffected; callers
//! that don't ask for metrics never see them.
//!
//! The interesting number is usually `lexemes_produced` versus `lookups`:
//! production counts actual tokenisation work (each byte at most once),
//! while lookups count every peek/next including memoised replays after a
//! rollback.

use std::time::Duration;

/// Counters and timing for a single parse run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseMetrics {
    /// Total elapsed time for the parse.
    pub total: Duration,
    /// Lexemes tokenised from the source.
    pub lexemes_produced: usize,
    /// Peek/next lookups served, including memoised replays.
    pub lookups: usize,
    /// Cursor saves.
    pub saves: usize,
    /// Saves resolved by rolling back.
    pub rollbacks: usize,
    /// Saves resolved by committing.
    pub commits: usize,
    /// Deepest save stack observed (rule nesting depth).
    pub max_stack_depth: usize,
}

/// A successful parse bundled with its metrics.
#[derive(Debug, Clone)]
pub struct ParseRun<T> {
    /// The top rule's result.
    pub value: T,
    /// Measurements for the run.
    pub metrics: ParseMetrics,
}
