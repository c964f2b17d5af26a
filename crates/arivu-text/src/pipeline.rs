use arivu_stem::{par_stem_all, stem_all};

use crate::expand::{Abbreviations, expand_contractions};
use crate::normalize::{lowercase, remove_stopwords, strip_accents, strip_special};
use crate::tokenize::tokenize;

/// Batches at least this long are stemmed on the rayon pool.
pub const PARALLEL_STEM_THRESHOLD: usize = 4096;

/// Which steps a [`Pipeline`] runs. Everything is on by default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PipelineOptions {
    pub expand_contractions: bool,
    pub expand_abbreviations: bool,
    pub lowercase: bool,
    /// Also drops tokens left empty, such as bare punctuation.
    pub strip_special: bool,
    pub remove_stopwords: bool,
    pub stem: bool,
    pub strip_accents: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            expand_contractions: true,
            expand_abbreviations: true,
            lowercase: true,
            strip_special: true,
            remove_stopwords: true,
            stem: true,
            strip_accents: true,
        }
    }
}

/// Tokenize and normalize text, then stem it.
///
/// Steps run in a fixed order: contractions, abbreviations, lowercase,
/// special characters, stopwords, stemming, accents.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    options: PipelineOptions,
    abbreviations: Abbreviations,
}

impl Pipeline {
    pub fn new(options: PipelineOptions, abbreviations: Abbreviations) -> Self {
        Self {
            options,
            abbreviations,
        }
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    pub fn abbreviations(&self) -> &Abbreviations {
        &self.abbreviations
    }

    pub fn process(&self, text: &str) -> Vec<String> {
        self.process_tokens(&tokenize(text))
    }

    pub fn process_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let opts = &self.options;
        let mut tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();

        if opts.expand_contractions {
            tokens = expand_contractions(&tokens);
        }
        if opts.expand_abbreviations {
            tokens = self.abbreviations.expand(&tokens);
        }
        if opts.lowercase {
            tokens = lowercase(&tokens);
        }
        if opts.strip_special {
            tokens = strip_special(&tokens);
            tokens.retain(|t| !t.is_empty());
        }
        if opts.remove_stopwords {
            tokens = remove_stopwords(&tokens);
        }
        if opts.stem {
            tokens = if tokens.len() >= PARALLEL_STEM_THRESHOLD {
                par_stem_all(&tokens)
            } else {
                stem_all(&tokens)
            };
        }
        if opts.strip_accents {
            tokens = strip_accents(&tokens);
        }
        tokens
    }
}
