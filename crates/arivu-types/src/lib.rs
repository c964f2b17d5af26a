//! Shared vocabulary for the arivu stemming pipeline.
//!
//! The stemmer runs a fixed sequence of suffix-rewrite stages. [`Stage`] names
//! each of them using the conventional step labels (`1a`, `1b`, `1b-helper`,
//! `1c`, `2`..`5`) and [`Rewrite`] records what a single stage did to a token,
//! including which suffix rule fired. Both are plain data so that the engine,
//! the text pipeline, and the HTTP layer can pass them around without pulling
//! in each other's dependencies.
//!
//! ```rust
//! use arivu_types::Stage;
//!
//! let stage = Stage::from_label("1b-helper").unwrap();
//! assert_eq!(stage, Stage::VerbalCleanup);
//! assert_eq!(stage.label(), "1b-helper");
//! assert_eq!(Stage::SEQUENCE.len(), 7);
//! ```

use std::fmt;

/// One phase of the suffix-rewrite sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// `1a`: plural reduction (`sses`, `ies`, `ss`, default truncation).
    Plural,
    /// `1b`: `eed` / `ed` / `ing` removal.
    Verbal,
    /// `1b-helper`: repair applied after `ed`/`ing` removal.
    VerbalCleanup,
    /// `1c`: terminal `y` to `i`.
    TerminalY,
    /// `2`: derivational suffix normalization.
    Derivational,
    /// `3`: secondary derivational suffixes.
    SecondaryDerivational,
    /// `4`: weight-gated suffix stripping.
    SuffixStrip,
    /// `5`: final `e` / `ll` cleanup.
    Cleanup,
}

impl Stage {
    /// Stages run by the driver, in order. `VerbalCleanup` is absent because it
    /// only ever runs from inside `Verbal`.
    pub const SEQUENCE: [Stage; 7] = [
        Stage::Plural,
        Stage::Verbal,
        Stage::TerminalY,
        Stage::Derivational,
        Stage::SecondaryDerivational,
        Stage::SuffixStrip,
        Stage::Cleanup,
    ];

    /// Parse a conventional step label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1a" => Some(Stage::Plural),
            "1b" => Some(Stage::Verbal),
            "1b-helper" => Some(Stage::VerbalCleanup),
            "1c" => Some(Stage::TerminalY),
            "2" => Some(Stage::Derivational),
            "3" => Some(Stage::SecondaryDerivational),
            "4" => Some(Stage::SuffixStrip),
            "5" => Some(Stage::Cleanup),
            _ => None,
        }
    }

    /// Emit the conventional step label.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Plural => "1a",
            Stage::Verbal => "1b",
            Stage::VerbalCleanup => "1b-helper",
            Stage::TerminalY => "1c",
            Stage::Derivational => "2",
            Stage::SecondaryDerivational => "3",
            Stage::SuffixStrip => "4",
            Stage::Cleanup => "5",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Plural => "plural",
            Stage::Verbal => "verbal",
            Stage::VerbalCleanup => "verbal-cleanup",
            Stage::TerminalY => "terminal-y",
            Stage::Derivational => "derivational",
            Stage::SecondaryDerivational => "secondary-derivational",
            Stage::SuffixStrip => "suffix-strip",
            Stage::Cleanup => "cleanup",
        })
    }
}

/// What one stage did to a stem.
///
/// `suffix` is the pattern of the rule that fired, or `None` when no rule
/// matched or the matching rule's gate rejected the stem. An empty suffix means
/// a catch-all rule (the stage-1a default or a 1b-helper predicate rule).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rewrite {
    pub stage: Stage,
    pub input: String,
    pub output: String,
    pub suffix: Option<&'static str>,
}

impl Rewrite {
    /// Whether the stage produced a different string.
    pub fn changed(&self) -> bool {
        self.input != self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for stage in Stage::SEQUENCE
            .into_iter()
            .chain(std::iter::once(Stage::VerbalCleanup))
        {
            assert_eq!(Stage::from_label(stage.label()), Some(stage));
        }
        assert_eq!(Stage::from_label("6"), None);
        assert_eq!(Stage::from_label(""), None);
    }

    #[test]
    fn sequence_is_ordered_and_skips_helper() {
        assert!(Stage::SEQUENCE.windows(2).all(|w| w[0] < w[1]));
        assert!(!Stage::SEQUENCE.contains(&Stage::VerbalCleanup));
        assert_eq!(Stage::SEQUENCE[0].to_string(), "plural");
    }

    #[test]
    fn rewrite_reports_change() {
        let rewrite = Rewrite {
            stage: Stage::Plural,
            input: "cats".into(),
            output: "cat".into(),
            suffix: Some(""),
        };
        assert!(rewrite.changed());
    }
}
