//! Character classes shared by the scanner and the builder.
//!
//! All classes are ASCII-only. Percent-encoding triples are handled
//! separately by [`is_pct_encoded_at`] because `%` is never valid on its own.

/// Returns true for `0-9` and `a-z`.
#[must_use]
pub const fn is_method_char(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_lowercase()
}

/// Returns true for a single `idchar` other than a percent-encoding triple.
#[must_use]
pub const fn is_id_char(b: u8) -> bool {
    is_method_char(b) || matches!(b, b'.' | b'-' | b'_')
}

/// Identifier section alphabet: `idchar` plus the `:` component separator.
#[must_use]
pub const fn is_id_section_char(b: u8) -> bool {
    is_id_char(b) || b == b':'
}

/// Path, query and fragment alphabet: ASCII alphanumerics, `.`, `-`, `_`,
/// `:` and `/`.
///
/// Unlike the method and identifier, these sections accept uppercase letters.
#[must_use]
pub const fn is_path_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_' | b':' | b'/')
}

/// Returns true if `bytes[index]` starts a `%` followed by two hex digits.
#[must_use]
pub fn is_pct_encoded_at(bytes: &[u8], index: usize) -> bool {
    bytes.get(index) == Some(&b'%')
        && bytes.get(index + 1).is_some_and(u8::is_ascii_hexdigit)
        && bytes.get(index + 2).is_some_and(u8::is_ascii_hexdigit)
}
