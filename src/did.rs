//! The parsed DID record and its canonical serializer.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::config::ParseConfig;
use crate::constants::{ENCODED_ID_SEPARATOR, PATH_SEPARATOR, SCHEME};
use crate::error::ParseError;
use crate::scanner::Scanner;

/// A parsed DID or DID URL.
///
/// Fields are plain values and may be set directly. An empty string or
/// empty vector means the component is absent.
///
/// `id` and `path` are the authoritative forms. `id_strings` and
/// `path_segments` are split views of them; they are only consulted when
/// serializing a record whose `id` or `path` is empty.
///
/// # Structure
///
/// ```text
/// did:<method>:<method-specific-id>[/<path>][?<query>][#<fragment>]
/// ```
///
/// # Examples
///
/// ```
/// use did_url::Did;
///
/// let did = Did::parse("did:example:123:456/keys/1?v2#key-1").unwrap();
/// assert_eq!(did.method, "example");
/// assert_eq!(did.id, "123:456");
/// assert_eq!(did.id_strings, vec!["123", "456"]);
/// assert_eq!(did.path_segments, vec!["keys", "1"]);
/// assert_eq!(did.query, "v2");
/// assert_eq!(did.fragment, "key-1");
/// assert!(did.is_url());
///
/// assert_eq!(did.to_string(), "did:example:123:456/keys/1?v2#key-1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Did {
    /// Method name, lowercase alphanumeric.
    pub method: String,
    /// Method-specific identifier, percent-encoded form kept verbatim.
    pub id: String,
    /// Identifier components split on `:`.
    pub id_strings: Vec<String>,
    /// Path without the leading `/`, percent-encoded form kept verbatim.
    pub path: String,
    /// Path segments split on `/`.
    pub path_segments: Vec<String>,
    /// Raw query without the leading `?`.
    pub query: String,
    /// Raw fragment without the leading `#`.
    pub fragment: String,
}

impl Did {
    /// Parses a DID or DID URL.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty, shorter than `did:x:y`, or lacks the `did:` prefix
    /// - The method is missing, empty, or has characters other than `0-9a-z`
    /// - The identifier, path, query, or fragment has a disallowed character
    ///   or a `%` not followed by two hex digits
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(input, &ParseConfig::default())
    }

    /// Parses a DID or DID URL with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for every case listed on [`Did::parse`], and if
    /// the input is longer than `config.max_length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use did_url::{Did, ParseConfig};
    ///
    /// let config = ParseConfig::new().with_max_length(16);
    /// assert!(Did::parse_with_config("did:web:example", &config).is_ok());
    /// assert!(Did::parse_with_config("did:web:example.com:users:alice", &config).is_err());
    /// ```
    pub fn parse_with_config(input: &str, config: &ParseConfig) -> Result<Self, ParseError> {
        match Scanner::new(input).scan(config) {
            Ok(did) => {
                tracing::trace!(method = %did.method, is_url = did.is_url(), "parsed DID");
                Ok(did)
            }
            Err(rejection) => {
                tracing::debug!(
                    section = %rejection.section,
                    reason = %rejection.reason,
                    "rejected malformed DID"
                );
                Err(ParseError {
                    input: input.to_string(),
                    section: rejection.section,
                    reason: rejection.reason,
                })
            }
        }
    }

    /// Creates a bare DID from a method and identifier.
    ///
    /// No validation happens here; use [`Did::parse`] or
    /// [`DidBuilder`](crate::DidBuilder) for validated construction.
    #[must_use]
    pub fn new(method: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the identifier used for serialization.
    ///
    /// This is `id` when set, otherwise `id_strings` joined with `%3A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use did_url::Did;
    ///
    /// let did = Did {
    ///     method: "example".to_string(),
    ///     id_strings: vec!["123".to_string(), "456".to_string()],
    ///     ..Did::default()
    /// };
    /// assert_eq!(did.resolved_id(), "123%3A456");
    /// ```
    #[must_use]
    pub fn resolved_id(&self) -> Cow<'_, str> {
        if self.id.is_empty() {
            Cow::Owned(self.id_strings.join(ENCODED_ID_SEPARATOR))
        } else {
            Cow::Borrowed(&self.id)
        }
    }

    /// Returns the path used for serialization.
    ///
    /// This is `path` when set, otherwise `path_segments` joined with `/`.
    #[must_use]
    pub fn resolved_path(&self) -> Cow<'_, str> {
        if self.path.is_empty() {
            Cow::Owned(self.path_segments.join(PATH_SEPARATOR))
        } else {
            Cow::Borrowed(&self.path)
        }
    }

    /// Returns true if the record serializes to a non-empty string.
    ///
    /// That requires a method and a non-empty resolved identifier.
    #[must_use]
    pub fn is_serializable(&self) -> bool {
        !self.method.is_empty() && !self.resolved_id().is_empty()
    }

    /// Returns true if any of path, path segments, query, or fragment is set.
    ///
    /// A bare `did:method:id` is not a URL.
    #[must_use]
    pub fn is_url(&self) -> bool {
        !self.path.is_empty()
            || !self.path_segments.is_empty()
            || !self.query.is_empty()
            || !self.fragment.is_empty()
    }

    /// Returns the DID this record refers to, without path, query, or fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use did_url::Did;
    ///
    /// let url = Did::parse("did:example:123/service?x#frag").unwrap();
    /// assert_eq!(url.to_did().to_string(), "did:example:123");
    /// ```
    #[must_use]
    pub fn to_did(&self) -> Self {
        Self {
            method: self.method.clone(),
            id: self.id.clone(),
            id_strings: self.id_strings.clone(),
            ..Self::default()
        }
    }
}

/// Writes the canonical form, or nothing if the record is not serializable.
impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.method.is_empty() {
            return Ok(());
        }
        let id = self.resolved_id();
        if id.is_empty() {
            return Ok(());
        }

        write!(f, "{SCHEME}:{}:{id}", self.method)?;

        let path = self.resolved_path();
        if !path.is_empty() {
            write!(f, "{PATH_SEPARATOR}{path}")?;
        }
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

impl FromStr for Did {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Did {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Did {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if !self.is_serializable() {
            return Err(serde::ser::Error::custom(
                "DID needs a non-empty method and identifier",
            ));
        }
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Did {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
