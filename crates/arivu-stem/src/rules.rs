//! Ordered suffix-rule tables, one per stage.
//!
//! Every stage is a static slice of [`Rule`]s plus a [`Matching`] policy. A rule
//! rewrites a stem by removing a fixed number of trailing characters and then
//! appending a literal. The removal count is stored separately from the suffix
//! because some stages match on one suffix and remove a different amount (the
//! `eed` rule keeps two of its three letters; stage 4 removes a fixed count per
//! group whatever the matched suffix length).

use arivu_types::{Rewrite, Stage};

use crate::measure::{has_tail_pattern, has_vowel, is_double_consonant, weight};

/// Condition a matched rule must satisfy before its rewrite applies.
///
/// "Stem" is the word with the matched suffix cut off; "remainder" is the word
/// with the rule's removal count cut off.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gate {
    Always,
    StemHasVowel,
    StemWeightAbove(usize),
    RemainderWeightAbove(usize),
    /// Remainder weight above 1, or exactly 1 without the tail pattern.
    SoftFinalE,
    /// Double consonant other than `ll`, `ss`, `zz`.
    Undouble,
    /// Weight exactly 1 and the tail pattern.
    ShortTail,
}

/// How a stage chooses among its rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Matching {
    /// The first rule whose suffix matches decides; a failed gate leaves the
    /// stem unchanged.
    FirstSuffix,
    /// Rules are tried until one matches and passes its gate.
    FirstAdmitted,
}

/// A single suffix rewrite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rule {
    /// Pattern the stem must end with; empty matches every stem.
    pub suffix: &'static str,
    /// Characters removed from the end of the stem.
    pub remove: usize,
    /// Literal appended after removal.
    pub append: &'static str,
    pub gate: Gate,
    /// Stage run on the rewritten stem when this rule fires.
    pub follow: Option<Stage>,
}

impl Rule {
    fn matches(&self, word: &str) -> bool {
        word.ends_with(self.suffix)
    }

    fn admits(&self, word: &str) -> bool {
        // `suffix` matched, so this is a char boundary.
        let stem = &word[..word.len() - self.suffix.len()];
        let remainder = drop_chars(word, self.remove);
        match self.gate {
            Gate::Always => true,
            Gate::StemHasVowel => has_vowel(stem),
            Gate::StemWeightAbove(min) => weight(stem) > min,
            Gate::RemainderWeightAbove(min) => weight(remainder) > min,
            Gate::SoftFinalE => {
                let w = weight(remainder);
                w > 1 || (w == 1 && !has_tail_pattern(remainder))
            }
            Gate::Undouble => {
                is_double_consonant(word)
                    && !(word.ends_with('l') || word.ends_with('s') || word.ends_with('z'))
            }
            Gate::ShortTail => weight(word) == 1 && has_tail_pattern(word),
        }
    }

    fn rewrite(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + self.append.len());
        out.push_str(drop_chars(word, self.remove));
        out.push_str(self.append);
        out
    }
}

/// The rules and matching policy of one stage.
#[derive(Debug)]
pub struct StageRules {
    pub stage: Stage,
    pub matching: Matching,
    pub rules: &'static [Rule],
}

impl StageRules {
    /// The rule that rewrites `word`, if any.
    pub fn select(&self, word: &str) -> Option<&'static Rule> {
        match self.matching {
            Matching::FirstSuffix => self
                .rules
                .iter()
                .find(|rule| rule.matches(word))
                .filter(|rule| rule.admits(word)),
            Matching::FirstAdmitted => self
                .rules
                .iter()
                .find(|rule| rule.matches(word) && rule.admits(word)),
        }
    }
}

/// Drop the last `n` characters of `word`, saturating at the empty string.
fn drop_chars(word: &str, n: usize) -> &str {
    if n == 0 {
        return word;
    }
    match word.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &word[..idx],
        None => "",
    }
}

const fn rule(suffix: &'static str, remove: usize, append: &'static str, gate: Gate) -> Rule {
    Rule {
        suffix,
        remove,
        append,
        gate,
        follow: None,
    }
}

const fn then_cleanup(suffix: &'static str, remove: usize) -> Rule {
    Rule {
        suffix,
        remove,
        append: "",
        gate: Gate::StemHasVowel,
        follow: Some(Stage::VerbalCleanup),
    }
}

/// Replace `suffix` when the stem in front of it has non-zero weight.
const fn map(suffix: &'static str, replacement: &'static str) -> Rule {
    rule(suffix, suffix.len(), replacement, Gate::StemWeightAbove(0))
}

/// Remove `remove` characters when what is left has weight above 1.
const fn strip(suffix: &'static str, remove: usize) -> Rule {
    rule(suffix, remove, "", Gate::RemainderWeightAbove(1))
}

static PLURAL: [Rule; 4] = [
    rule("sses", 2, "", Gate::Always),
    rule("ies", 2, "", Gate::Always),
    rule("ss", 0, "", Gate::Always),
    // Drops the final character of anything else, `s` or not.
    rule("", 1, "", Gate::Always),
];

static VERBAL: [Rule; 3] = [
    rule("eed", 1, "", Gate::StemWeightAbove(0)),
    then_cleanup("ed", 2),
    then_cleanup("ing", 3),
];

static VERBAL_CLEANUP: [Rule; 5] = [
    rule("at", 0, "e", Gate::Always),
    rule("bl", 0, "e", Gate::Always),
    rule("iz", 0, "e", Gate::Always),
    rule("", 1, "", Gate::Undouble),
    rule("", 0, "e", Gate::ShortTail),
];

static TERMINAL_Y: [Rule; 1] = [rule("y", 1, "i", Gate::StemHasVowel)];

static DERIVATIONAL: [Rule; 20] = [
    map("ational", "ate"),
    map("tional", "tion"),
    map("enci", "ence"),
    map("anci", "ance"),
    map("izer", "ize"),
    map("bli", "ble"),
    map("alli", "al"),
    map("entli", "ent"),
    map("eli", "e"),
    map("ousli", "ous"),
    map("ization", "ize"),
    map("ation", "ate"),
    map("ator", "ate"),
    map("alism", "al"),
    map("iveness", "ive"),
    map("fulness", "ful"),
    map("ousness", "ous"),
    map("aliti", "al"),
    map("iviti", "ive"),
    map("biliti", "ble"),
];

static SECONDARY_DERIVATIONAL: [Rule; 7] = [
    map("icate", "ic"),
    map("ative", ""),
    map("alize", "al"),
    map("iciti", "ic"),
    map("ical", "ic"),
    map("ful", ""),
    map("ness", ""),
];

static SUFFIX_STRIP: [Rule; 21] = [
    strip("al", 2),
    strip("ance", 2),
    strip("ence", 2),
    strip("er", 2),
    strip("ic", 2),
    strip("able", 2),
    strip("ible", 2),
    strip("ant", 2),
    strip("ement", 2),
    strip("ment", 2),
    strip("ent", 2),
    strip("ion", 2),
    strip("ou", 2),
    strip("ism", 3),
    strip("ate", 3),
    strip("iti", 3),
    strip("ous", 3),
    strip("ive", 3),
    strip("ize", 3),
    strip("sion", 4),
    strip("tion", 4),
];

static CLEANUP: [Rule; 2] = [
    rule("e", 1, "", Gate::SoftFinalE),
    rule("ll", 1, "", Gate::RemainderWeightAbove(1)),
];

static TABLES: [StageRules; 8] = [
    StageRules {
        stage: Stage::Plural,
        matching: Matching::FirstSuffix,
        rules: &PLURAL,
    },
    StageRules {
        stage: Stage::Verbal,
        matching: Matching::FirstSuffix,
        rules: &VERBAL,
    },
    StageRules {
        stage: Stage::VerbalCleanup,
        matching: Matching::FirstAdmitted,
        rules: &VERBAL_CLEANUP,
    },
    StageRules {
        stage: Stage::TerminalY,
        matching: Matching::FirstSuffix,
        rules: &TERMINAL_Y,
    },
    StageRules {
        stage: Stage::Derivational,
        matching: Matching::FirstSuffix,
        rules: &DERIVATIONAL,
    },
    StageRules {
        stage: Stage::SecondaryDerivational,
        matching: Matching::FirstSuffix,
        rules: &SECONDARY_DERIVATIONAL,
    },
    StageRules {
        stage: Stage::SuffixStrip,
        matching: Matching::FirstSuffix,
        rules: &SUFFIX_STRIP,
    },
    StageRules {
        stage: Stage::Cleanup,
        matching: Matching::FirstSuffix,
        rules: &CLEANUP,
    },
];

/// The rule table for `stage`.
pub fn rules_for(stage: Stage) -> &'static StageRules {
    let idx = match stage {
        Stage::Plural => 0,
        Stage::Verbal => 1,
        Stage::VerbalCleanup => 2,
        Stage::TerminalY => 3,
        Stage::Derivational => 4,
        Stage::SecondaryDerivational => 5,
        Stage::SuffixStrip => 6,
        Stage::Cleanup => 7,
    };
    &TABLES[idx]
}

/// Run one stage (and any stage its rule chains into) on `word`.
pub(crate) fn run(stage: Stage, word: &str, mut log: Option<&mut Vec<Rewrite>>) -> String {
    let rule = rules_for(stage).select(word);
    let output = match rule {
        Some(rule) => rule.rewrite(word),
        None => word.to_string(),
    };

    if let Some(log) = log.as_deref_mut() {
        log.push(Rewrite {
            stage,
            input: word.to_string(),
            output: output.clone(),
            suffix: rule.map(|r| r.suffix),
        });
    }

    match rule.and_then(|r| r.follow) {
        Some(next) => run(next, &output, log),
        None => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(stage: Stage, word: &str) -> String {
        run(stage, word, None)
    }

    #[test]
    fn tables_are_indexed_by_their_stage() {
        for stage in Stage::SEQUENCE
            .into_iter()
            .chain(std::iter::once(Stage::VerbalCleanup))
        {
            assert_eq!(rules_for(stage).stage, stage);
        }
    }

    #[test]
    fn overlapping_derivational_suffixes_are_longest_first() {
        let rules = rules_for(Stage::Derivational).rules;
        for (i, earlier) in rules.iter().enumerate() {
            for later in &rules[i + 1..] {
                assert!(
                    !later.suffix.ends_with(earlier.suffix),
                    "{} shadows {}",
                    earlier.suffix,
                    later.suffix
                );
            }
        }
    }

    #[test]
    fn drop_chars_is_char_aware() {
        assert_eq!(drop_chars("café", 1), "caf");
        assert_eq!(drop_chars("ab", 5), "");
        assert_eq!(drop_chars("", 1), "");
        assert_eq!(drop_chars("abc", 0), "abc");
    }

    #[test]
    fn plural_reduction() {
        assert_eq!(apply(Stage::Plural, "caresses"), "caress");
        assert_eq!(apply(Stage::Plural, "ponies"), "poni");
        assert_eq!(apply(Stage::Plural, "ties"), "ti");
        assert_eq!(apply(Stage::Plural, "caress"), "caress");
        assert_eq!(apply(Stage::Plural, "cats"), "cat");
        // The default truncates whatever the last character is.
        assert_eq!(apply(Stage::Plural, "dog"), "do");
        assert_eq!(apply(Stage::Plural, "a"), "");
        assert_eq!(apply(Stage::Plural, ""), "");
    }

    #[test]
    fn verbal_eed_is_weight_gated() {
        assert_eq!(apply(Stage::Verbal, "agreed"), "agree");
        assert_eq!(apply(Stage::Verbal, "feed"), "feed");
    }

    #[test]
    fn verbal_ed_and_ing_chain_into_cleanup() {
        assert_eq!(apply(Stage::Verbal, "hopped"), "hop");
        assert_eq!(apply(Stage::Verbal, "hopping"), "hop");
        assert_eq!(apply(Stage::Verbal, "conflated"), "conflate");
        assert_eq!(apply(Stage::Verbal, "troubled"), "trouble");
        assert_eq!(apply(Stage::Verbal, "sized"), "size");
        assert_eq!(apply(Stage::Verbal, "motoring"), "motor");
        assert_eq!(apply(Stage::Verbal, "falling"), "fall");
        assert_eq!(apply(Stage::Verbal, "hissing"), "hiss");
        assert_eq!(apply(Stage::Verbal, "fizzed"), "fizz");
        assert_eq!(apply(Stage::Verbal, "feeding"), "feed");
    }

    #[test]
    fn verbal_requires_vowel_before_suffix() {
        assert_eq!(apply(Stage::Verbal, "sing"), "sing");
        assert_eq!(apply(Stage::Verbal, "bled"), "bled");
        assert_eq!(apply(Stage::Verbal, "ed"), "ed");
        assert_eq!(apply(Stage::Verbal, "cat"), "cat");
    }

    #[test]
    fn terminal_y() {
        assert_eq!(apply(Stage::TerminalY, "happy"), "happi");
        assert_eq!(apply(Stage::TerminalY, "sky"), "sky");
        assert_eq!(apply(Stage::TerminalY, "y"), "y");
    }

    #[test]
    fn derivational_stage() {
        assert_eq!(apply(Stage::Derivational, "relational"), "relate");
        assert_eq!(apply(Stage::Derivational, "conditional"), "condition");
        assert_eq!(apply(Stage::Derivational, "generalization"), "generalize");
        assert_eq!(apply(Stage::Derivational, "valenci"), "valence");
        // `r` has no weight, so `ational` is left alone.
        assert_eq!(apply(Stage::Derivational, "rational"), "rational");
    }

    #[test]
    fn secondary_derivational_stage() {
        assert_eq!(apply(Stage::SecondaryDerivational, "hopeful"), "hope");
        assert_eq!(apply(Stage::SecondaryDerivational, "goodness"), "good");
        assert_eq!(apply(Stage::SecondaryDerivational, "electrical"), "electric");
        assert_eq!(apply(Stage::SecondaryDerivational, "generalize"), "general");
        assert_eq!(apply(Stage::SecondaryDerivational, "ful"), "ful");
    }

    #[test]
    fn suffix_strip_removes_fixed_counts() {
        assert_eq!(apply(Stage::SuffixStrip, "revival"), "reviv");
        assert_eq!(apply(Stage::SuffixStrip, "activate"), "activ");
        assert_eq!(apply(Stage::SuffixStrip, "bowdlerize"), "bowdler");
        // Longer suffixes in the first group still lose only two characters.
        assert_eq!(apply(Stage::SuffixStrip, "allowance"), "allowan");
        assert_eq!(apply(Stage::SuffixStrip, "adoption"), "adopti");
        assert_eq!(apply(Stage::SuffixStrip, "general"), "gener");
        assert_eq!(apply(Stage::SuffixStrip, "gener"), "gener");
        // Remainder weight must exceed 1.
        assert_eq!(apply(Stage::SuffixStrip, "total"), "total");
    }

    #[test]
    fn cleanup_stage() {
        assert_eq!(apply(Stage::Cleanup, "probate"), "probat");
        assert_eq!(apply(Stage::Cleanup, "rate"), "rat");
        assert_eq!(apply(Stage::Cleanup, "the"), "the");
        assert_eq!(apply(Stage::Cleanup, "controll"), "control");
        assert_eq!(apply(Stage::Cleanup, "roll"), "roll");
    }

    #[test]
    fn cleanup_chain_is_logged() {
        let mut log = Vec::new();
        let out = run(Stage::Verbal, "hopped", Some(&mut log));
        assert_eq!(out, "hop");
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].stage, Stage::Verbal);
        assert_eq!(log[0].suffix, Some("ed"));
        assert_eq!(log[0].output, "hopp");
        assert_eq!(log[1].stage, Stage::VerbalCleanup);
        assert_eq!(log[1].output, "hop");
    }

    #[test]
    fn rejected_gate_is_logged_without_suffix() {
        let mut log = Vec::new();
        run(Stage::Verbal, "feed", Some(&mut log));
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].suffix, None);
        assert!(!log[0].changed());
    }
}
