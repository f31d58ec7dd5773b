//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::Did;

/// Valid method characters: digits and lowercase letters
const METHOD_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Valid identifier characters, excluding percent-encoding triples
const ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz.-_";

/// Valid fragment characters: both letter cases, digits and `.-_:/`
const FRAGMENT_CHARS: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-_:/";

fn arbitrary_from(alphabet: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            alphabet[idx % alphabet.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for Did {
    fn any() -> Self {
        let method = arbitrary_from(METHOD_CHARS, 3);
        let id = arbitrary_from(ID_CHARS, 3);
        let with_fragment: bool = kani::any();
        let fragment = if with_fragment {
            arbitrary_from(FRAGMENT_CHARS, 2)
        } else {
            String::new()
        };

        let mut did = Did::parse(&format!("did:{method}:{id}")).expect("valid by construction");
        did.fragment = fragment;
        did
    }
}

#[kani::proof]
#[kani::unwind(10)]
fn parse_never_panics() {
    let bytes: [u8; 8] = kani::any();
    if let Ok(input) = std::str::from_utf8(&bytes) {
        let _ = Did::parse(input);
    }
}

#[kani::proof]
#[kani::unwind(16)]
fn serialized_did_reparses() {
    let did: Did = kani::any();
    let serialized = did.to_string();
    let reparsed = Did::parse(&serialized).expect("serialized DID must parse");
    assert_eq!(reparsed.to_string(), serialized);
}
