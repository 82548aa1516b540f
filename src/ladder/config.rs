//! Ladder generation parameters

use std::fmt;

/// Word length selected from the input by default
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Maximum number of words in an enumerated ladder by default
pub const DEFAULT_MAX_LENGTH: usize = 7;

/// Interest filters applied after deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Drop ladders of exactly two words (a single step)
    pub skip_single_step: bool,
    /// Drop ladders whose first and last words share a leading letter
    pub require_first_letter_change: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            skip_single_step: true,
            require_first_letter_change: true,
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderConfig {
    pub word_length: usize,
    pub max_length: usize,
    pub selection: SelectionConfig,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            selection: SelectionConfig::default(),
        }
    }
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    MaxLengthTooSmall(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::MaxLengthTooSmall(len) => {
                write!(f, "Maximum ladder length must be at least 2 words, got {len}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl LadderConfig {
    /// Check that the configuration can produce ladders
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `word_length` is zero
    /// - `max_length` is below two words
    ///
    /// # Examples
    /// ```
    /// use word_ladders::ladder::LadderConfig;
    ///
    /// assert!(LadderConfig::default().validate().is_ok());
    ///
    /// let config = LadderConfig { max_length: 1, ..LadderConfig::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_length < 2 {
            return Err(ConfigError::MaxLengthTooSmall(self.max_length));
        }
        Ok(())
    }
}
