//! Parser configuration.

/// Configuration for [`Did::parse_with_config`](crate::Did::parse_with_config).
///
/// The default accepts any length of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum accepted input length in bytes.
    ///
    /// Inputs longer than this are rejected before scanning.
    /// Default: None
    pub max_length: Option<usize>,
}

impl ParseConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted input length.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Removes the length limit.
    #[must_use]
    pub const fn without_max_length(mut self) -> Self {
        self.max_length = None;
        self
    }
}
