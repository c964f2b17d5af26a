//! Token-level text preparation around the arivu stemmer.
//!
//! Each step is a plain function over a token slice, so callers can assemble
//! their own sequence; [`Pipeline`] wires them together in the usual order:
//!
//! 1. [`tokenize`] splits words from punctuation.
//! 2. [`expand_contractions`] and [`Abbreviations::expand`] rewrite short forms.
//! 3. [`lowercase`] and [`strip_special`] normalize case and characters.
//! 4. [`remove_stopwords`] drops function words.
//! 5. [`arivu_stem::stem_all`] stems what is left.
//! 6. [`strip_accents`] folds diacritics.
//!
//! # Example
//! ```
//! use arivu_text::Pipeline;
//!
//! let tokens = Pipeline::default().process("She doesn't like the caresses.");
//! assert_eq!(tokens, vec!["lik", "caress"]);
//! ```
//!
//! Extra abbreviation rules can be loaded from a text file with
//! [`Abbreviations::load`].

pub mod expand;
pub mod normalize;
pub mod pipeline;
pub mod tokenize;

pub use expand::{Abbreviations, contraction, expand_contractions};
pub use normalize::{
    fold_accent, is_stopword, lowercase, remove_stopwords, strip_accents, strip_special,
};
pub use pipeline::{PARALLEL_STEM_THRESHOLD, Pipeline, PipelineOptions};
pub use tokenize::tokenize;
