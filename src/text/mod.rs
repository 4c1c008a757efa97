//! Text processing module for token normalization and word tokenization.

mod normalizer;
mod tokenizer;

pub use normalizer::{canonical_form, Normalizer};
pub use tokenizer::Tokenizer;
