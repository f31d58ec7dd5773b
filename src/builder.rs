//! Typestate builder for constructing validated [`Did`] instances.
//!
//! The builder requires a method and then an identifier before `build()`
//! becomes available. Path, query, and fragment may be set in any state.

use std::marker::PhantomData;

use crate::did::Did;
use crate::error::BuilderError;

/// Marker: No components set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Method has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasMethod;

/// Marker: Method and identifier are set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for [`Did`] records.
///
/// `build()` checks that the assembled record serializes to a string the
/// parser accepts, then returns the record exactly as it was assembled.
///
/// # Examples
///
/// ```
/// use did_url::DidBuilder;
///
/// let did = DidBuilder::new()
///     .method("example")
///     .id_strings(["123", "456"])
///     .path_segments(["keys", "1"])
///     .fragment("key-1")
///     .build()
///     .unwrap();
///
/// assert_eq!(did.to_string(), "did:example:123%3A456/keys/1#key-1");
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use did_url::DidBuilder;
///
/// // Error: cannot set an identifier before the method
/// let builder = DidBuilder::new().id("123");
/// ```
///
/// ```compile_fail
/// use did_url::DidBuilder;
///
/// // Error: cannot call build() without an identifier
/// let did = DidBuilder::new().method("example").build();
/// ```
#[derive(Debug, Clone)]
pub struct DidBuilder<State = Empty> {
    did: Did,
    _state: PhantomData<State>,
}

impl DidBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            did: Did::default(),
            _state: PhantomData,
        }
    }

    /// Sets the method and advances to the [`HasMethod`] state.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> DidBuilder<HasMethod> {
        self.did.method = method.into();
        self.advance()
    }
}

impl Default for DidBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl DidBuilder<HasMethod> {
    /// Sets the method-specific identifier and advances to the [`Ready`] state.
    ///
    /// `id` is kept verbatim, so `:` separates identifier components.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> DidBuilder<Ready> {
        self.did.id = id.into();
        self.advance()
    }

    /// Sets the identifier components and advances to the [`Ready`] state.
    ///
    /// Components are joined with `%3A` when serialized.
    #[must_use]
    pub fn id_strings<I, S>(mut self, parts: I) -> DidBuilder<Ready>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.did.id_strings = parts.into_iter().map(Into::into).collect();
        self.advance()
    }
}

impl DidBuilder<Ready> {
    /// Builds the final [`Did`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::NotSerializable`] if the method or resolved
    ///   identifier is empty
    /// - [`BuilderError::InvalidComponent`] if a component holds characters
    ///   the grammar does not allow
    pub fn build(self) -> Result<Did, BuilderError> {
        if !self.did.is_serializable() {
            tracing::debug!(method = %self.did.method, "builder missing method or identifier");
            return Err(BuilderError::NotSerializable);
        }

        let canonical = self.did.to_string();
        if let Err(e) = Did::parse(&canonical) {
            tracing::debug!(section = %e.section, "builder produced an invalid DID");
            return Err(e.into());
        }

        Ok(self.did)
    }
}

/// Methods available in all states for optional components.
impl<State> DidBuilder<State> {
    /// Sets the path (without the leading `/`).
    ///
    /// A non-empty path takes precedence over path segments.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.did.path = path.into();
        self
    }

    /// Sets the path segments, joined with `/` when serialized.
    #[must_use]
    pub fn path_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.did.path_segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the raw query (without the leading `?`).
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.did.query = query.into();
        self
    }

    /// Sets the raw fragment (without the leading `#`).
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.did.fragment = fragment.into();
        self
    }

    /// Sets the query if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_query(self, query: Option<impl Into<String>>) -> Self {
        match query {
            Some(q) => self.query(q),
            None => self,
        }
    }

    /// Sets the fragment if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_fragment(self, fragment: Option<impl Into<String>>) -> Self {
        match fragment {
            Some(f) => self.fragment(f),
            None => self,
        }
    }

    fn advance<Next>(self) -> DidBuilder<Next> {
        DidBuilder {
            did: self.did,
            _state: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Section;

    #[test]
    fn builder_basic() {
        let did = DidBuilder::new().method("example").id("123").build().unwrap();
        assert_eq!(did, Did::new("example", "123"));
        assert_eq!(did.to_string(), "did:example:123");
    }

    #[test]
    fn builder_with_all_components() {
        let did = DidBuilder::new()
            .query("v1")
            .method("example")
            .id("123:456")
            .path("a/b")
            .fragment("key-1")
            .build()
            .unwrap();

        assert_eq!(did.to_string(), "did:example:123:456/a/b?v1#key-1");
        assert!(did.is_url());
    }

    #[test]
    fn builder_keeps_fields_as_given() {
        let did = DidBuilder::new()
            .method("example")
            .id_strings(["a", "b"])
            .build()
            .unwrap();

        assert!(did.id.is_empty());
        assert_eq!(did.id_strings, vec!["a", "b"]);
        assert_eq!(did.to_string(), "did:example:a%3Ab");
    }

    #[test]
    fn builder_maybe_methods() {
        let did = DidBuilder::new()
            .method("example")
            .id("1")
            .maybe_query(Some("q"))
            .maybe_fragment(None::<String>)
            .build()
            .unwrap();

        assert_eq!(did.query, "q");
        assert!(did.fragment.is_empty());
    }

    #[test]
    fn builder_empty_method_not_serializable() {
        let result = DidBuilder::new().method("").id("1").build();
        assert_eq!(result, Err(BuilderError::NotSerializable));
    }

    #[test]
    fn builder_empty_id_strings_not_serializable() {
        let result = DidBuilder::new()
            .method("example")
            .id_strings(Vec::<String>::new())
            .build();
        assert_eq!(result, Err(BuilderError::NotSerializable));
    }

    #[test]
    fn builder_rejects_invalid_method() {
        let result = DidBuilder::new().method("Example").id("1").build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidComponent(ref e)) if e.section == Section::Method
        ));
    }

    #[test]
    fn builder_rejects_invalid_fragment() {
        let result = DidBuilder::new()
            .method("example")
            .id("1")
            .fragment("a b")
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidComponent(ref e)) if e.section == Section::Fragment
        ));
    }
}
