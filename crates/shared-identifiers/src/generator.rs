//! Identifier generation.
//!
//! Two separate operations:
//!
//! - [`derive_identifier`]: deterministic, character `i` is
//!   `alphabet[(seed + i) % alphabet.len()]`.
//! - [`random_identifier`]: uniform per-character draw from a non-cryptographic
//!   thread-local RNG. Display stand-in only, not a security primitive.

use crate::kind::IdentifierKind;
use rand::Rng;

/// Derive an identifier of `kind` from `seed`.
///
/// The same `(kind, seed)` pair always yields the same string.
pub fn derive_identifier(kind: IdentifierKind, seed: u64) -> String {
    let alphabet = kind.alphabet();
    let len = alphabet.len() as u64;
    let base = seed % len;

    let mut out = String::with_capacity(kind.total_len());
    out.push_str(kind.prefix());
    for i in 0..kind.body_len() as u64 {
        let idx = (base + i % len) % len;
        out.push(alphabet[idx as usize] as char);
    }
    out
}

/// Generate a random identifier of `kind` using the thread-local RNG.
pub fn random_identifier(kind: IdentifierKind) -> String {
    random_identifier_with(kind, &mut rand::thread_rng())
}

/// Generate a random identifier of `kind` drawing from `rng`.
pub fn random_identifier_with<R: Rng + ?Sized>(kind: IdentifierKind, rng: &mut R) -> String {
    let alphabet = kind.alphabet();
    let mut out = String::with_capacity(kind.total_len());
    out.push_str(kind.prefix());
    for _ in 0..kind.body_len() {
        out.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
    }
    out
}

/// Shorthand for a random `0x` address.
pub fn random_address() -> String {
    random_identifier(IdentifierKind::Address)
}
