//! Dictionaries for text analysis.
//!
//! Curated word sets used by sentence splitting and syllable estimation.

pub mod abbreviations;
pub mod silent_e;
