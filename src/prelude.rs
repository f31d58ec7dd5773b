//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use did_url::prelude::*;
//!
//! let did = Did::parse("did:example:123").unwrap();
//! assert!(!did.is_url());
//! ```
//!
//! Builder state markers (`Empty`, `HasMethod`, `Ready`) are intentionally
//! excluded as they are implementation details.

pub use crate::{
    // Core types
    Did, ParseConfig,
    // Builder
    DidBuilder,
    // Errors
    BuilderError, ErrorKind, MalformedReason, ParseError, Section,
    // Constants
    ENCODED_ID_SEPARATOR, ID_SEPARATOR, MIN_DID_LENGTH, PATH_SEPARATOR, SCHEME,
    SCHEME_PREFIX_LENGTH,
};
