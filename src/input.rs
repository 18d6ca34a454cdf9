use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    num::ParseIntError,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number of top codes {text:?}: {source}")]
    InvalidTopK { text: String, source: ParseIntError },
    #[error("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to read log lines: {0}")]
    Read(#[from] io::Error),
}

/// Parse the requested number of top codes. Surrounding whitespace is ignored; negative numbers are allowed.
pub fn parse_top_k(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|source| InputError::InvalidTopK {
        text: trimmed.to_owned(),
        source,
    })
}

/// Top-k given up front: the command-line value wins over the environment. `None` if neither was set.
pub fn configured_top_k(flag: Option<String>, env_value: Option<String>) -> Result<Option<i64>, InputError> {
    flag.or(env_value).map(|text| parse_top_k(&text)).transpose()
}

/// Ask for the number of top codes on `writer` and read the answer from `reader`.
pub fn prompt_top_k(mut reader: impl BufRead, mut writer: impl Write) -> Result<i64, InputError> {
    write!(writer, "Enter how many top codes to show: ")?;
    writer.flush()?;
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    parse_top_k(&answer)
}

/// Read lines until the first blank (or whitespace-only) line, or the end of the input.
/// The blank line itself is consumed but not returned.
pub fn read_until_blank(reader: impl BufRead) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Read every line of a file, blank ones included.
pub fn read_file_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let read_error = |source: io::Error| InputError::ReadFile {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    BufReader::new(file).lines().collect::<io::Result<_>>().map_err(read_error)
}
