//! Contraction and abbreviation expansion.
//!
//! Both expanders look tokens up case-insensitively and split multi-word
//! expansions into separate tokens, so `"ttyl"` becomes four tokens rather
//! than one token containing spaces.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

static CONTRACTIONS: [(&str, &str); 73] = [
    ("ain't", "is not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("i'd", "I would"),
    ("i'll", "I will"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("isn't", "is not"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("might've", "might have"),
    ("mightn't", "might not"),
    ("must've", "must have"),
    ("mustn't", "must not"),
    ("needn't", "need not"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("where's", "where is"),
    ("who'd", "who would"),
    ("who'll", "who will"),
    ("who're", "who are"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all", "you all"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
    ("it'd've", "it would have"),
    ("it'll've", "it will have"),
    ("can't've", "cannot have"),
    ("couldn't've", "could not have"),
    ("hadn't've", "had not have"),
];

static DEFAULT_ABBREVIATIONS: [(&str, &str); 41] = [
    ("dr", "doctor"),
    ("mr", "mister"),
    ("mrs", "missus"),
    ("ms", "miss"),
    ("prof", "professor"),
    ("dept", "department"),
    ("corp", "corporation"),
    ("inc", "incorporated"),
    ("ltd", "limited"),
    ("co", "company"),
    ("gov", "government"),
    ("ave", "avenue"),
    ("blvd", "boulevard"),
    ("st", "street"),
    ("rd", "road"),
    ("apt", "apartment"),
    ("bldg", "building"),
    ("fig", "figure"),
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
    ("sun", "sunday"),
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("k", "ok"),
    ("thx", "thanks"),
    ("ttyl", "talk to you later"),
    ("tmrw", "tomorrow"),
    ("etc", "et cetera"),
];

/// Expansion of a contraction such as `won't`, if known.
pub fn contraction(token: &str) -> Option<&'static str> {
    let key = token.to_lowercase();
    CONTRACTIONS
        .iter()
        .find(|(short, _)| *short == key)
        .map(|(_, long)| *long)
}

/// Replace known contractions with their expanded words.
pub fn expand_contractions<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        match contraction(token) {
            Some(long) => out.extend(long.split_whitespace().map(str::to_string)),
            None => out.push(token.to_string()),
        }
    }
    out
}

/// Abbreviation table keyed by lowercase short form.
#[derive(Clone, Debug)]
pub struct Abbreviations {
    rules: HashMap<String, Vec<String>>,
}

impl Default for Abbreviations {
    fn default() -> Self {
        let rules = DEFAULT_ABBREVIATIONS
            .iter()
            .map(|(short, long)| {
                (
                    short.to_string(),
                    long.split_whitespace().map(str::to_string).collect(),
                )
            })
            .collect();
        Self { rules }
    }
}

impl Abbreviations {
    /// A table with no rules at all.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Built-in rules overlaid with rules read from `path`.
    ///
    /// Each line is `<abbreviation> <expansion words...>`. Blank lines and lines
    /// starting with `#` are skipped. File rules replace built-in ones.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut table = Self::default();
        table.extend_from_file(path)?;
        Ok(table)
    }

    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("open abbreviation file {}", path.display()))?;
        let reader = BufReader::new(file);
        for (lineno, line) in reader.lines().enumerate() {
            let line =
                line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(short) = parts.next() else {
                continue;
            };
            let expansion: Vec<String> = parts.map(str::to_string).collect();
            if expansion.is_empty() {
                bail!(
                    "{}:{} abbreviation {short:?} has no expansion",
                    path.display(),
                    lineno + 1
                );
            }
            self.insert(short, expansion);
        }
        Ok(())
    }

    pub fn insert(&mut self, short: &str, expansion: Vec<String>) {
        self.rules.insert(short.to_lowercase(), expansion);
    }

    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.rules.get(&token.to_lowercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace known abbreviations with their expansion words.
    pub fn expand<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            match self.get(token) {
                Some(words) => out.extend(words.iter().cloned()),
                None => out.push(token.to_string()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_contractions_case_insensitively() {
        assert_eq!(
            expand_contractions(&["I'm", "sure", "they", "won't", "go"]),
            vec!["I", "am", "sure", "they", "will", "not", "go"]
        );
        assert_eq!(expand_contractions(&["Can't"]), vec!["cannot"]);
        assert_eq!(contraction("nope"), None);
    }

    #[test]
    fn default_abbreviations() {
        let abbr = Abbreviations::default();
        assert_eq!(abbr.len(), DEFAULT_ABBREVIATIONS.len());
        assert_eq!(
            abbr.expand(&["Dr", "Smith", "ttyl"]),
            vec!["doctor", "Smith", "talk", "to", "you", "later"]
        );
    }

    #[test]
    fn empty_table_passes_tokens_through() {
        let abbr = Abbreviations::empty();
        assert!(abbr.is_empty());
        assert_eq!(abbr.expand(&["dr"]), vec!["dr"]);
    }

    #[test]
    fn inserted_rules_override_defaults() {
        let mut abbr = Abbreviations::default();
        abbr.insert("DR", vec!["drive".into()]);
        assert_eq!(abbr.get("dr"), Some(&["drive".to_string()][..]));
    }
}
