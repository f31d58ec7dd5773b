//! Error types for DID parsing and building.

use std::fmt;

/// Classification of a [`ParseError`].
///
/// Every grammar violation is malformed input; finer detail lives in
/// [`ParseError::section`] and [`ParseError::reason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input does not match the DID URL grammar.
    MalformedInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "malformed input"),
        }
    }
}

/// The part of a DID URL in which a parse failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The `did:` prefix and whole-input checks.
    Scheme,
    /// The method name.
    Method,
    /// The method-specific identifier.
    Id,
    /// The path after the first `/`.
    Path,
    /// The query after `?`.
    Query,
    /// The fragment after `#`.
    Fragment,
}

impl Section {
    /// Returns the section name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Method => "method",
            Self::Id => "method-specific id",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Input is empty
    Empty,
    /// Input exceeds the configured maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Input is shorter than the shortest possible DID
    TooShort {
        /// Minimum required length
        min: usize,
        /// Actual length
        actual: usize,
    },
    /// Input does not start with `did:`
    MissingScheme,
    /// No `:` terminates the method
    MissingMethodSeparator,
    /// A section was introduced but holds no characters
    EmptySection,
    /// An identifier component between `:` separators is empty
    EmptyIdString {
        /// Index of the empty component
        index: usize,
    },
    /// Character not allowed in this section
    InvalidChar {
        /// The invalid character
        char: char,
        /// Byte offset in the input
        position: usize,
    },
    /// `%` not followed by two hex digits
    InvalidPercentEncoding {
        /// Byte offset of the `%`
        position: usize,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::TooLong { max, actual } => {
                write!(f, "length {actual} exceeds maximum {max}")
            }
            Self::TooShort { min, actual } => {
                write!(f, "length {actual} is below minimum {min}")
            }
            Self::MissingScheme => write!(f, "input must start with 'did:'"),
            Self::MissingMethodSeparator => {
                write!(f, "missing ':' after method")
            }
            Self::EmptySection => write!(f, "cannot be empty"),
            Self::EmptyIdString { index } => {
                write!(f, "component {index} between ':' separators is empty")
            }
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::InvalidPercentEncoding { position } => {
                write!(
                    f,
                    "'%' at position {position} is not followed by two hex digits"
                )
            }
        }
    }
}

/// Error returned when a string is not a valid DID or DID URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// Where the failure was detected
    pub section: Section,
    /// What was wrong
    pub reason: MalformedReason,
}

impl ParseError {
    /// Returns the error classification, always [`ErrorKind::MalformedInput`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedInput
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}': {}: {}",
            self.kind(),
            self.input,
            self.section,
            self.reason
        )
    }
}

impl std::error::Error for ParseError {}

/// Errors from [`DidBuilder::build`](crate::DidBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Method or identifier resolved to an empty string
    NotSerializable,
    /// The assembled DID was rejected by the parser
    InvalidComponent(ParseError),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSerializable => {
                write!(f, "DID needs a non-empty method and identifier")
            }
            Self::InvalidComponent(e) => write!(f, "invalid component: {e}"),
        }
    }
}

impl std::error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotSerializable => None,
            Self::InvalidComponent(e) => Some(e),
        }
    }
}

impl From<ParseError> for BuilderError {
    fn from(e: ParseError) -> Self {
        Self::InvalidComponent(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_names_section() {
        let err = ParseError {
            input: "did:a:1/%zz".to_string(),
            section: Section::Path,
            reason: MalformedReason::InvalidPercentEncoding { position: 8 },
        };
        assert_eq!(
            err.to_string(),
            "malformed input 'did:a:1/%zz': path: '%' at position 8 is not followed by two hex digits"
        );
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn builder_error_exposes_source() {
        use std::error::Error;

        let parse = ParseError {
            input: "did:A:1".to_string(),
            section: Section::Method,
            reason: MalformedReason::InvalidChar {
                char: 'A',
                position: 4,
            },
        };
        let err = BuilderError::from(parse.clone());
        assert!(err.source().is_some());
        assert_eq!(err, BuilderError::InvalidComponent(parse));
        assert!(BuilderError::NotSerializable.source().is_none());
    }
}
