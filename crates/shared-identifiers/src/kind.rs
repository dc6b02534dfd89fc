//! Identifier shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase hexadecimal digits.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Base58 alphabet (no `0`, `O`, `I`, `l`).
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The three pseudo identifier shapes handed out by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentifierKind {
    /// `0x` + 40 hex digits.
    Address,
    /// `0x` + 64 hex digits.
    TxHash,
    /// `Qm` + 44 base58 characters.
    ContentHash,
}

impl IdentifierKind {
    /// Fixed prefix preceding the generated body.
    pub const fn prefix(self) -> &'static str {
        match self {
            IdentifierKind::Address | IdentifierKind::TxHash => "0x",
            IdentifierKind::ContentHash => "Qm",
        }
    }

    /// Number of generated characters after the prefix.
    pub const fn body_len(self) -> usize {
        match self {
            IdentifierKind::Address => 40,
            IdentifierKind::TxHash => 64,
            IdentifierKind::ContentHash => 44,
        }
    }

    /// Alphabet the body characters are drawn from.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            IdentifierKind::Address | IdentifierKind::TxHash => HEX_ALPHABET,
            IdentifierKind::ContentHash => BASE58_ALPHABET,
        }
    }

    /// Total length of a well-formed identifier of this kind.
    pub const fn total_len(self) -> usize {
        self.prefix().len() + self.body_len()
    }

    /// Check that `value` has the exact shape this kind produces.
    pub fn matches(self, value: &str) -> bool {
        let Some(body) = value.strip_prefix(self.prefix()) else {
            return false;
        };
        body.len() == self.body_len() && body.bytes().all(|b| self.alphabet().contains(&b))
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentifierKind::Address => "address",
            IdentifierKind::TxHash => "txHash",
            IdentifierKind::ContentHash => "contentHash",
        };
        f.write_str(name)
    }
}
