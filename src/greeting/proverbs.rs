use rand::Rng;
use thiserror::Error;

/// Proverb list compiled into the binary.
pub const EMBEDDED_PROVERBS: &str = include_str!("proverbs.txt");

const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("embedded proverb data is empty")]
    EmptySource,
    #[error("no valid proverbs found in embedded data")]
    NoValidLines,
}

/// Non-empty, immutable list of proverbs in resource order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverbSet {
    proverbs: Vec<String>,
}

impl ProverbSet {
    /// Parses newline-delimited text, trimming each line and skipping blank
    /// lines and `#` comments.
    pub fn parse(source: &str) -> Result<Self, DataError> {
        if source.trim().is_empty() {
            return Err(DataError::EmptySource);
        }

        let proverbs: Vec<String> = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
            .map(str::to_owned)
            .collect();

        if proverbs.is_empty() {
            return Err(DataError::NoValidLines);
        }

        Ok(Self { proverbs })
    }

    pub fn len(&self) -> usize {
        self.proverbs.len()
    }

    /// Never true for a successfully parsed set.
    pub fn is_empty(&self) -> bool {
        self.proverbs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.proverbs.iter().map(String::as_str)
    }

    /// Uniformly random entry.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        &self.proverbs[rng.gen_range(0..self.proverbs.len())]
    }
}
