use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,]+").unwrap());

/// Reads a whole text file as lines, without their line endings.
pub fn read_lines(path: impl AsRef<Path>) -> std::io::Result<Vec<String>> {
    Ok(std::fs::read_to_string(path)?.lines().map(String::from).collect())
}

/// Splits a line into its whitespace- and/or comma-separated tokens.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    SEPARATOR.split(line.trim()).filter(|token| !token.is_empty())
}
