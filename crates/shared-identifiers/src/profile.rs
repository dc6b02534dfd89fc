//! Display profiles derived from a seed.

use serde::{Deserialize, Serialize};

/// Modulus applied to seeds when deriving display names.
pub const PROFILE_MODULUS: u64 = 1000;

/// Username shown for an address with no registered owner.
pub fn derive_username(seed: u64) -> String {
    format!("User_{}", seed % PROFILE_MODULUS)
}

/// Placeholder email for a derived profile.
pub fn derive_email(seed: u64) -> String {
    format!("user{}@example.com", seed % PROFILE_MODULUS)
}

/// A stand-in user profile, stable for a given seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedProfile {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl DerivedProfile {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            id: format!("user_{}", seed % PROFILE_MODULUS),
            username: derive_username(seed),
            email: derive_email(seed),
        }
    }
}
