//! Suffix-rewrite stemming for English word tokens.
//!
//! A token passes through a fixed sequence of stages, each an ordered table of
//! suffix rules gated by the stem's vowel structure. The tables follow the
//! shape of the classic Porter steps but reproduce this project's own variant
//! exactly, including its quirks: stage 1a drops the last character of any
//! token not ending in `sses`, `ies` or `ss`; stage 4 removes a fixed number of
//! characters per suffix group; the weight counts vowel runs rather than
//! vowel-consonant pairs; and the tail predicate tests vowel-consonant-vowel.
//!
//! # How it works
//! 1. 1a plural reduction.
//! 2. 1b `eed`/`ed`/`ing` removal, chaining into the 1b-helper repair.
//! 3. 1c terminal `y` to `i`.
//! 4. 2 and 3 derivational suffix normalization, gated on weight > 0.
//! 5. 4 suffix stripping, gated on remainder weight > 1.
//! 6. 5 final `e` / `ll` cleanup.
//!
//! Every stage is total: empty, one-character and non-ASCII tokens fall
//! through without panicking. Matching is case-sensitive; lowercase upstream.
//!
//! # Example
//! ```
//! use arivu_stem::{stem, stem_all, stem_traced};
//!
//! assert_eq!(stem("caresses"), "caress");
//! assert_eq!(stem_all(&["ponies", "cats"]), vec!["poni", "cat"]);
//!
//! let trace = stem_traced("hoppings");
//! assert_eq!(trace.output(), "hop");
//! for step in trace.changes() {
//!     println!("{}: {} -> {}", step.stage.label(), step.input, step.output);
//! }
//! ```
//!
//! For a runnable demo, see `cargo run -p arivu-stem --example trace -- <word>...`.

mod measure;
pub mod rules;

use arivu_types::{Rewrite, Stage};
use rayon::prelude::*;

pub use measure::{has_tail_pattern, has_vowel, is_double_consonant, weight};
pub use rules::{Gate, Matching, Rule, StageRules, rules_for};

/// Stem a single token.
pub fn stem(token: &str) -> String {
    Stage::SEQUENCE
        .into_iter()
        .fold(token.to_string(), |word, stage| rules::run(stage, &word, None))
}

/// Apply one stage in isolation. `Stage::Verbal` also runs the 1b-helper when
/// its `ed`/`ing` rules fire.
pub fn apply_stage(stage: Stage, word: &str) -> String {
    rules::run(stage, word, None)
}

/// Per-stage record of how a token was stemmed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trace {
    pub input: String,
    pub rewrites: Vec<Rewrite>,
}

impl Trace {
    /// Final stem; identical to [`stem`] on the same input.
    pub fn output(&self) -> &str {
        self.rewrites
            .last()
            .map_or(self.input.as_str(), |r| r.output.as_str())
    }

    /// Only the stages that changed the stem.
    pub fn changes(&self) -> impl Iterator<Item = &Rewrite> {
        self.rewrites.iter().filter(|r| r.changed())
    }
}

/// Stem a token, recording every stage application along the way.
pub fn stem_traced(token: &str) -> Trace {
    let mut rewrites = Vec::with_capacity(Stage::SEQUENCE.len() + 1);
    let mut word = token.to_string();
    for stage in Stage::SEQUENCE {
        word = rules::run(stage, &word, Some(&mut rewrites));
    }
    Trace {
        input: token.to_string(),
        rewrites,
    }
}

/// Stem every token, preserving order and length.
pub fn stem_all<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| stem(t.as_ref())).collect()
}

/// Parallel [`stem_all`]; output order matches input order.
pub fn par_stem_all<S: AsRef<str> + Sync>(tokens: &[S]) -> Vec<String> {
    tokens.par_iter().map(|t| stem(t.as_ref())).collect()
}
