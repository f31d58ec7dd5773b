//! Parser and serializer for Decentralized Identifiers (DIDs) and DID URLs.
//!
//! This crate turns DID strings into a structured [`Did`] record that can be
//! inspected, edited component by component, and written back in canonical
//! form.
//!
//! # Overview
//!
//! A DID URL has the structure:
//!
//! ```text
//! did:<method>:<method-specific-id>[/<path>][?<query>][#<fragment>]
//! ```
//!
//! Method and identifier are lowercase; path, query and fragment also accept
//! uppercase letters. Query and fragment are kept as raw, still
//! percent-encoded strings. Method
//! registration, resolution to DID documents and query parameter semantics
//! are out of scope.
//!
//! # Quick Start
//!
//! ```rust
//! use did_url::Did;
//!
//! // Parse a DID URL
//! let mut did = Did::parse("did:example:123456/path?version-1#key-1").unwrap();
//!
//! // Access components
//! assert_eq!(did.method, "example");
//! assert_eq!(did.id, "123456");
//! assert_eq!(did.path, "path");
//! assert!(did.is_url());
//!
//! // Edit and serialize
//! did.fragment = "key-2".to_string();
//! assert_eq!(did.to_string(), "did:example:123456/path?version-1#key-2");
//! ```
//!
//! # Builder Pattern
//!
//! Use the typestate builder for validated construction:
//!
//! ```rust
//! use did_url::DidBuilder;
//!
//! let did = DidBuilder::new()
//!     .method("web")
//!     .id("example.com:users:alice")
//!     .fragment("key-1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(did.to_string(), "did:web:example.com:users:alice#key-1");
//! ```
//!
//! # Serialization Precedence
//!
//! | Explicit field | Split view      | Join used when explicit field is empty |
//! |----------------|-----------------|----------------------------------------|
//! | `id`           | `id_strings`    | `%3A`                                  |
//! | `path`         | `path_segments` | `/`                                    |
//!
//! A record without a method or identifier serializes to an empty string;
//! see [`Did::is_serializable`].
//!
//! # Grammar
//!
//! The accepted grammar is written out in `grammar.abnf` at the crate root.
//! Every grammar violation is reported as a [`ParseError`] whose
//! [`kind`](ParseError::kind) is [`ErrorKind::MalformedInput`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod chars;
mod config;
mod constants;
mod did;
mod error;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod scanner;

pub use builder::{DidBuilder, Empty, HasMethod, Ready};
pub use config::ParseConfig;
pub use constants::{
    ENCODED_ID_SEPARATOR, ID_SEPARATOR, MIN_DID_LENGTH, PATH_SEPARATOR, SCHEME,
    SCHEME_PREFIX_LENGTH,
};
pub use did::Did;
pub use error::{BuilderError, ErrorKind, MalformedReason, ParseError, Section};
