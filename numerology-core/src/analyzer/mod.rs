//! Name analysis.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Cleans a raw name down to `[0-9a-z-]`
//! - **Words**: Extracts the initial of each space-delimited word

pub mod normalizer;
pub mod words;

pub use normalizer::{normalize, NameNormalizer, NormalizerConfig};
pub use words::for_each_initial;
