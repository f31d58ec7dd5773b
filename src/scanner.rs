//! Single-pass scanner for the DID URL grammar.
//!
//! ```text
//! did:<method>:<method-specific-id>[/<path>][?<query>][#<fragment>]
//! ```
//!
//! The scanner walks the input byte by byte with a cursor. Each section has
//! its own alphabet and set of terminators; `%` must always start a complete
//! percent-encoding triple. Every byte accepted by the scanner is ASCII, so
//! the cursor always sits on a `char` boundary.

use crate::chars::{is_id_section_char, is_method_char, is_path_char, is_pct_encoded_at};
use crate::config::ParseConfig;
use crate::constants::{
    ID_SEPARATOR, MIN_DID_LENGTH, PATH_SEPARATOR, SCHEME, SCHEME_PREFIX_LENGTH,
};
use crate::did::Did;
use crate::error::{MalformedReason, Section};

/// A scan failure before it is attached to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rejection {
    pub(crate) section: Section,
    pub(crate) reason: MalformedReason,
}

impl Rejection {
    const fn new(section: Section, reason: MalformedReason) -> Self {
        Self { section, reason }
    }
}

pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn scan(mut self, config: &ParseConfig) -> Result<Did, Rejection> {
        self.scheme(config)?;
        let method = self.method()?;
        let id = self.section(Section::Id, is_id_section_char, b"/?#")?;
        let id_strings = Self::id_strings(id)?;

        let path = if self.eat(b'/') {
            self.section(Section::Path, is_path_char, b"?#")?
        } else {
            ""
        };
        let query = if self.eat(b'?') {
            self.section(Section::Query, is_path_char, b"#")?
        } else {
            ""
        };
        let fragment = if self.eat(b'#') {
            self.section(Section::Fragment, is_path_char, b"")?
        } else {
            ""
        };

        // Each section stops only at the delimiter of a later section, so
        // reaching this point means the whole input was consumed.
        let path_segments = if path.is_empty() {
            Vec::new()
        } else {
            path.split(PATH_SEPARATOR).map(str::to_owned).collect()
        };

        Ok(Did {
            method: method.to_owned(),
            id: id.to_owned(),
            id_strings,
            path: path.to_owned(),
            path_segments,
            query: query.to_owned(),
            fragment: fragment.to_owned(),
        })
    }

    fn scheme(&mut self, config: &ParseConfig) -> Result<(), Rejection> {
        let len = self.input.len();
        if len == 0 {
            return Err(Rejection::new(Section::Scheme, MalformedReason::Empty));
        }

        if let Some(max) = config.max_length.filter(|&max| len > max) {
            return Err(Rejection::new(
                Section::Scheme,
                MalformedReason::TooLong { max, actual: len },
            ));
        }

        let bytes = self.input.as_bytes();
        if !bytes.starts_with(SCHEME.as_bytes()) || bytes.get(SCHEME.len()) != Some(&b':') {
            return Err(Rejection::new(
                Section::Scheme,
                MalformedReason::MissingScheme,
            ));
        }

        if len < MIN_DID_LENGTH {
            return Err(Rejection::new(
                Section::Scheme,
                MalformedReason::TooShort {
                    min: MIN_DID_LENGTH,
                    actual: len,
                },
            ));
        }

        self.pos = SCHEME_PREFIX_LENGTH;
        Ok(())
    }

    fn method(&mut self) -> Result<&'a str, Rejection> {
        let start = self.pos;
        loop {
            match self.peek() {
                None => {
                    return Err(Rejection::new(
                        Section::Method,
                        MalformedReason::MissingMethodSeparator,
                    ));
                }
                Some(b':') => break,
                Some(b) if is_method_char(b) => self.pos += 1,
                Some(_) => return Err(self.invalid_char(Section::Method)),
            }
        }

        let method = &self.input[start..self.pos];
        if method.is_empty() {
            return Err(Rejection::new(
                Section::Method,
                MalformedReason::EmptySection,
            ));
        }

        // Skip the ':' that ends the method.
        self.pos += 1;
        Ok(method)
    }

    /// Scans a section up to one of `terminators` or the end of input.
    fn section(
        &mut self,
        section: Section,
        allowed: fn(u8) -> bool,
        terminators: &[u8],
    ) -> Result<&'a str, Rejection> {
        let bytes = self.input.as_bytes();
        let start = self.pos;

        while let Some(b) = self.peek() {
            if terminators.contains(&b) {
                break;
            }
            if b == b'%' {
                if !is_pct_encoded_at(bytes, self.pos) {
                    return Err(Rejection::new(
                        section,
                        MalformedReason::InvalidPercentEncoding { position: self.pos },
                    ));
                }
                self.pos += 3;
                continue;
            }
            if !allowed(b) {
                return Err(self.invalid_char(section));
            }
            self.pos += 1;
        }

        if self.pos == start {
            return Err(Rejection::new(section, MalformedReason::EmptySection));
        }
        Ok(&self.input[start..self.pos])
    }

    fn id_strings(id: &str) -> Result<Vec<String>, Rejection> {
        id.split(ID_SEPARATOR)
            .enumerate()
            .map(|(index, part)| {
                if part.is_empty() {
                    Err(Rejection::new(
                        Section::Id,
                        MalformedReason::EmptyIdString { index },
                    ))
                } else {
                    Ok(part.to_owned())
                }
            })
            .collect()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn invalid_char(&self, section: Section) -> Rejection {
        let char = self.input[self.pos..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Rejection::new(
            section,
            MalformedReason::InvalidChar {
                char,
                position: self.pos,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Result<Did, Rejection> {
        Scanner::new(input).scan(&ParseConfig::default())
    }

    fn rejected(input: &str) -> Rejection {
        scan(input).expect_err(input)
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            rejected(""),
            Rejection::new(Section::Scheme, MalformedReason::Empty)
        );
    }

    #[test]
    fn scheme_checked_before_length() {
        assert_eq!(rejected("a:12345").reason, MalformedReason::MissingScheme);
        assert_eq!(rejected("di").reason, MalformedReason::MissingScheme);
        assert_eq!(rejected("DID:a:1").reason, MalformedReason::MissingScheme);
    }

    #[test]
    fn short_inputs() {
        for input in ["did:", "did:a", "did:a:"] {
            assert!(
                matches!(rejected(input).reason, MalformedReason::TooShort { min: 7, .. }),
                "{input}"
            );
        }
    }

    #[test]
    fn max_length_applies_before_scanning() {
        let config = ParseConfig::new().with_max_length(8);
        let err = Scanner::new("did:abc:123").scan(&config).unwrap_err();
        assert_eq!(
            err.reason,
            MalformedReason::TooLong { max: 8, actual: 11 }
        );
        assert!(Scanner::new("did:a:12").scan(&config).is_ok());
    }

    #[test]
    fn missing_method_separator() {
        assert_eq!(
            rejected("did:aaaaaaaaaaa"),
            Rejection::new(Section::Method, MalformedReason::MissingMethodSeparator)
        );
    }

    #[test]
    fn empty_method() {
        assert_eq!(
            rejected("did::aaaaaaaaaaa"),
            Rejection::new(Section::Method, MalformedReason::EmptySection)
        );
    }

    #[test]
    fn method_invalid_char_position() {
        assert_eq!(
            rejected("did:aA:1"),
            Rejection::new(
                Section::Method,
                MalformedReason::InvalidChar {
                    char: 'A',
                    position: 5
                }
            )
        );
    }

    #[test]
    fn empty_id_after_method() {
        assert_eq!(
            rejected("did:abcd:"),
            Rejection::new(Section::Id, MalformedReason::EmptySection)
        );
        assert_eq!(
            rejected("did:abcd:/path"),
            Rejection::new(Section::Id, MalformedReason::EmptySection)
        );
    }

    #[test]
    fn empty_id_components() {
        assert_eq!(
            rejected("did:a:123:"),
            Rejection::new(Section::Id, MalformedReason::EmptyIdString { index: 1 })
        );
        assert_eq!(
            rejected("did:a:1::2"),
            Rejection::new(Section::Id, MalformedReason::EmptyIdString { index: 1 })
        );
        assert_eq!(
            rejected("did:abc::1"),
            Rejection::new(Section::Id, MalformedReason::EmptyIdString { index: 0 })
        );
    }

    #[test]
    fn introduced_but_empty_sections() {
        assert_eq!(rejected("did:a:1/").section, Section::Path);
        assert_eq!(rejected("did:a:1?").section, Section::Query);
        assert_eq!(rejected("did:a:1#").section, Section::Fragment);
        assert_eq!(rejected("did:a:1/x?#y").section, Section::Query);
    }

    #[test]
    fn percent_encoding_names_section() {
        assert_eq!(
            rejected("did:a:1%2"),
            Rejection::new(
                Section::Id,
                MalformedReason::InvalidPercentEncoding { position: 7 }
            )
        );
        assert_eq!(rejected("did:a:123:456/%").section, Section::Path);
        assert_eq!(rejected("did:a:123:456?%a").section, Section::Query);
        assert_eq!(rejected("did:xyz:pqr#%A!").section, Section::Fragment);
    }

    #[test]
    fn non_ascii_reported_as_char() {
        assert_eq!(
            rejected("did:a:1/caf\u{e9}"),
            Rejection::new(
                Section::Path,
                MalformedReason::InvalidChar {
                    char: '\u{e9}',
                    position: 11
                }
            )
        );
    }

    #[test]
    fn stray_delimiters_in_later_sections() {
        assert_eq!(
            rejected("did:a:1#frag#more"),
            Rejection::new(
                Section::Fragment,
                MalformedReason::InvalidChar {
                    char: '#',
                    position: 12
                }
            )
        );
        assert_eq!(
            rejected("did:a:1#frag?q"),
            Rejection::new(
                Section::Fragment,
                MalformedReason::InvalidChar {
                    char: '?',
                    position: 12
                }
            )
        );
        assert_eq!(rejected("did:a:1?q?r").section, Section::Query);
    }

    #[test]
    fn split_views() {
        let did = scan("did:a:123:456/a//b/?q#f").unwrap();
        assert_eq!(did.id_strings, vec!["123", "456"]);
        assert_eq!(did.path, "a//b/");
        assert_eq!(did.path_segments, vec!["a", "", "b", ""]);
        assert_eq!(did.query, "q");
        assert_eq!(did.fragment, "f");
    }

    #[test]
    fn no_path_means_no_segments() {
        let did = scan("did:a:1?q").unwrap();
        assert!(did.path.is_empty());
        assert!(did.path_segments.is_empty());
    }
}
