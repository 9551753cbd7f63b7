//! Command implementations.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};

pub mod info;
pub mod report;
pub mod syllables;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Ask for a filename until one that exists is given.
///
/// Prompts go to `output`; answers are read line by line from `input`.
/// End of input before an existing file is named is an error.
pub fn prompt_for_file<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> anyhow::Result<Utf8PathBuf> {
    write!(output, "Enter filename: ")?;
    loop {
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read filename")? == 0 {
            writeln!(output)?;
            bail!("no input file given");
        }

        let name = line.trim();
        if !name.is_empty() && Utf8Path::new(name).is_file() {
            tracing::debug!(file = name, "filename accepted");
            return Ok(Utf8PathBuf::from(name));
        }

        writeln!(output, "Sorry, the file '{name}' does not exist.")?;
        write!(output, "Try another filename: ")?;
    }
}
