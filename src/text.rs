use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Number of words per line when the caller gives no width.
pub const DEFAULT_WORDS_PER_LINE: usize = 50;

/// Marker placed between line groups.
pub const LINE_BREAK: &str = "<br>";

// Space, tab, newline, carriage return, vertical tab, form feed.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\r\x0B\x0C]+").expect("whitespace pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Checks a words-per-line value coming from an untyped source (template
/// argument, config file, command line).
pub fn validate_words_per_line(value: i64) -> Result<usize, WrapError> {
    if value <= 0 {
        return Err(WrapError::InvalidArgument(format!(
            "words per line must be a positive integer, got {}",
            value
        )));
    }

    usize::try_from(value).map_err(|_| {
        WrapError::InvalidArgument(format!("words per line is out of range: {}", value))
    })
}

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    /// Splits `text` on runs of whitespace, skipping empty fragments.
    pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
        WHITESPACE.split(text).filter(|word| !word.is_empty())
    }

    /// Groups the words of `text` into lines of at most `words_per_line`
    /// words each, joined with single spaces.
    pub fn lines(text: &str, words_per_line: usize) -> Result<Vec<String>, WrapError> {
        if words_per_line == 0 {
            return Err(WrapError::InvalidArgument(
                "words per line must be a positive integer, got 0".to_string(),
            ));
        }

        let words: Vec<&str> = Self::words(text).collect();

        Ok(words
            .chunks(words_per_line)
            .map(|group| group.join(" "))
            .collect())
    }

    /// Wraps `input` into lines of `words_per_line` words separated by
    /// [`LINE_BREAK`].
    ///
    /// Absent input yields an empty string without looking at the width.
    /// `None` for the width means [`DEFAULT_WORDS_PER_LINE`].
    pub fn wrap(input: Option<&str>, words_per_line: Option<usize>) -> Result<String, WrapError> {
        let Some(text) = input else {
            return Ok(String::new());
        };

        let lines = Self::lines(text, words_per_line.unwrap_or(DEFAULT_WORDS_PER_LINE))?;

        Ok(lines.join(LINE_BREAK))
    }
}
