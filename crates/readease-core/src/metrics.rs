//! Readability metrics: Flesch Reading Ease and Flesch-Kincaid Grade Level.
//!
//! Formulas:
//!
//! - Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//! - Grade: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Higher ease = more readable; lower grade = more readable.
//!
//! Words and sentences come from [`text`], syllables from the vowel-group
//! heuristic in [`syllables`].

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::{self, WordCount};
use crate::syllables;
use crate::text;

/// Number of top words reported when none is configured.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Conventional interpretation of a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EaseBand {
    /// 90 and above.
    VeryEasy,
    /// 80 to 90.
    Easy,
    /// 70 to 80.
    FairlyEasy,
    /// 60 to 70.
    Standard,
    /// 50 to 60.
    FairlyDifficult,
    /// 30 to 50.
    Difficult,
    /// Below 30.
    VeryConfusing,
}

impl EaseBand {
    /// Classify a reading ease score.
    pub fn from_score(ease: f64) -> Self {
        match ease {
            e if e >= 90.0 => Self::VeryEasy,
            e if e >= 80.0 => Self::Easy,
            e if e >= 70.0 => Self::FairlyEasy,
            e if e >= 60.0 => Self::Standard,
            e if e >= 50.0 => Self::FairlyDifficult,
            e if e >= 30.0 => Self::Difficult,
            _ => Self::VeryConfusing,
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::FairlyEasy => "fairly easy",
            Self::Standard => "standard",
            Self::FairlyDifficult => "fairly difficult",
            Self::Difficult => "difficult",
            Self::VeryConfusing => "very confusing",
        }
    }
}

impl std::fmt::Display for EaseBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of text metrics analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Total syllable count.
    pub total_syllables: usize,
    /// Number of words detected.
    pub total_words: usize,
    /// Number of sentences detected.
    pub total_sentences: usize,
    /// Flesch Reading Ease score.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level score.
    pub flesch_kincaid_grade: f64,
    /// Interpretation of the reading ease score.
    pub ease_band: EaseBand,
    /// Most frequent words, most frequent first.
    pub top_words: Vec<WordCount>,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the grade exceeds the maximum.
    pub over_max: bool,
}

/// Options for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsOptions {
    /// Number of most frequent words to report.
    pub top_n: usize,
    /// Maximum acceptable grade level.
    pub max_grade: Option<f64>,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_WORDS,
            max_grade: None,
        }
    }
}

/// Compute readability metrics and the `top_n` most frequent words.
///
/// Fails with [`AnalysisError::DivideByZero`] when the text has no words or
/// no sentences.
pub fn compute_metrics(text: &str, top_n: usize) -> AnalysisResult<MetricsReport> {
    analyze(
        text,
        MetricsOptions {
            top_n,
            ..MetricsOptions::default()
        },
    )
}

/// Compute metrics and check the grade against `options.max_grade`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, options: MetricsOptions) -> AnalysisResult<MetricsReport> {
    let total_sentences = text::count_sentences(text);
    let total_words = text::count_words(text);
    let total_syllables = syllables::count_text_syllables(text);

    let flesch_reading_ease = flesch_reading_ease(total_syllables, total_words, total_sentences)?;
    let flesch_kincaid_grade =
        flesch_kincaid_grade(total_syllables, total_words, total_sentences)?;
    let top_words = frequency::top_words(text, options.top_n);

    let over_max = options
        .max_grade
        .is_some_and(|max| flesch_kincaid_grade > max);

    tracing::debug!(
        total_syllables,
        total_words,
        total_sentences,
        flesch_reading_ease,
        flesch_kincaid_grade,
        "metrics computed"
    );

    Ok(MetricsReport {
        total_syllables,
        total_words,
        total_sentences,
        flesch_reading_ease,
        flesch_kincaid_grade,
        ease_band: EaseBand::from_score(flesch_reading_ease),
        top_words,
        max_grade: options.max_grade,
        over_max,
    })
}

/// Flesch Reading Ease for the given counts.
///
/// Evaluated in the published order, not fused into `mul_add`.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_reading_ease(
    syllables: usize,
    words: usize,
    sentences: usize,
) -> AnalysisResult<f64> {
    let (words_per_sentence, syllables_per_word) = ratios(syllables, words, sentences)?;
    Ok(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Flesch-Kincaid Grade Level for the given counts.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_kincaid_grade(
    syllables: usize,
    words: usize,
    sentences: usize,
) -> AnalysisResult<f64> {
    let (words_per_sentence, syllables_per_word) = ratios(syllables, words, sentences)?;
    Ok(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Words per sentence and syllables per word.
fn ratios(syllables: usize, words: usize, sentences: usize) -> AnalysisResult<(f64, f64)> {
    if words == 0 || sentences == 0 {
        return Err(AnalysisError::DivideByZero { words, sentences });
    }
    Ok((
        words as f64 / sentences as f64,
        syllables as f64 / words as f64,
    ))
}
