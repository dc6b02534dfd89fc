//! Seed extraction from existing identifiers.
//!
//! Addresses seed from their last 8 hex characters; record ids (millisecond
//! timestamps) seed from their last 8 decimal digits. Malformed input yields
//! `None` and the caller picks the fallback.

use crate::kind::IdentifierKind;

/// Number of trailing characters that make up a seed.
pub const SEED_WIDTH: usize = 8;

/// Fallback seed for addresses that carry no usable suffix.
///
/// A constant keeps lookups of the same malformed address reproducible.
pub const DEFAULT_ADDRESS_SEED: u64 = 0;

/// Seed from the last 8 hex characters of `address`.
pub fn seed_from_address(address: &str) -> Option<u64> {
    let tail = trailing(address.trim(), SEED_WIDTH)?;
    if !tail.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(tail, 16).ok()
}

/// Seed from the last 8 hex characters of `address`, or [`DEFAULT_ADDRESS_SEED`].
pub fn seed_from_address_or_default(address: &str) -> u64 {
    seed_from_address(address).unwrap_or(DEFAULT_ADDRESS_SEED)
}

/// Seed from the last 8 characters of a record id.
///
/// The leading decimal digits of that tail are the seed (`"12ab"` gives 12).
/// A tail without leading digits, or one that parses to 0, has no seed and
/// callers fall back to the clock.
pub fn seed_from_record_id(id: &str) -> Option<u64> {
    let id = id.trim();
    let tail = trailing(id, SEED_WIDTH).unwrap_or(id).trim_start();
    let digits = tail
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(tail, |(end, _)| &tail[..end]);
    digits.parse().ok().filter(|&seed| seed != 0)
}

/// Shape check for a `0x` address, accepting either hex case.
pub fn is_address_shaped(value: &str) -> bool {
    IdentifierKind::Address.matches(&value.to_ascii_lowercase())
}

/// Last `n` characters of `s`, or `None` if `s` is shorter.
fn trailing(s: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    s.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(start, _)| &s[start..])
}
