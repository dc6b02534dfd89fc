//! # Shared Identifiers - Pseudo Blockchain Identifiers
//!
//! Stand-in identifiers for the file transfer demo. None of these values are
//! cryptographic: they only have to look right to the frontend.
//!
//! ## Components
//!
//! | Module | Provides | Shape |
//! |--------|----------|-------|
//! | `kind` | [`IdentifierKind`] | `0x`+40 hex, `0x`+64 hex, `Qm`+44 base58 |
//! | `generator` | [`derive_identifier`], [`random_identifier`] | seeded or random body |
//! | `seed` | [`seed_from_address`], [`seed_from_record_id`] | trailing 8 characters |
//! | `profile` | [`DerivedProfile`] | `User_<n>`, `user<n>@example.com` |

#![warn(clippy::all)]

pub mod generator;
pub mod kind;
pub mod profile;
pub mod seed;

// Re-exports
pub use generator::{derive_identifier, random_address, random_identifier, random_identifier_with};
pub use kind::{IdentifierKind, BASE58_ALPHABET, HEX_ALPHABET};
pub use profile::{derive_email, derive_username, DerivedProfile};
pub use seed::{
    is_address_shaped, seed_from_address, seed_from_address_or_default, seed_from_record_id,
    DEFAULT_ADDRESS_SEED,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
