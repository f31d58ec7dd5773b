//! Constants for DID parsing and serialization.

/// The URI scheme.
pub const SCHEME: &str = "did";

/// Length of the `did:` prefix.
pub const SCHEME_PREFIX_LENGTH: usize = SCHEME.len() + 1;

/// Length of the shortest accepted DID, `did:x:y`.
pub const MIN_DID_LENGTH: usize = 7;

/// Separator between method-specific identifier components.
pub const ID_SEPARATOR: char = ':';

/// Percent-encoded colon used to join `id_strings` during serialization.
pub const ENCODED_ID_SEPARATOR: &str = "%3A";

/// Separator between path segments.
pub const PATH_SEPARATOR: &str = "/";
