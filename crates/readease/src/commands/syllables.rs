//! Syllables command: show the estimate for individual words.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readease_core::syllables::count_syllables;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

fn estimate(words: &[String]) -> Vec<WordSyllables> {
    words
        .iter()
        .map(|word| WordSyllables {
            word: word.clone(),
            syllables: count_syllables(word),
        })
        .collect()
}

/// Print the estimated syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing syllables command");

    let estimates = estimate(&args.words);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
    } else {
        let width = estimates.iter().map(|e| e.word.len()).max().unwrap_or(0);
        for e in &estimates {
            println!("{:<width$}  {}", e.word, e.syllables);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates_each_word() {
        let words = vec!["table".to_string(), "make".to_string()];
        assert_eq!(
            estimate(&words),
            vec![
                WordSyllables {
                    word: "table".to_string(),
                    syllables: 2
                },
                WordSyllables {
                    word: "make".to_string(),
                    syllables: 1
                },
            ]
        );
    }

    #[test]
    fn json_output_succeeds() {
        let args = SyllablesArgs {
            words: vec!["hello".to_string()],
        };
        assert!(cmd_syllables(args, true).is_ok());
    }
}
