//! Repository bindings for the stored records.

use super::types::{FileRecord, User};
use crate::ports::Record;

/// Queryable user fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Email,
    BlockchainAddress,
}

impl Record for User {
    type Field = UserField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: UserField) -> Option<&str> {
        match field {
            UserField::Email => Some(&self.email),
            UserField::BlockchainAddress => Some(&self.blockchain_address),
        }
    }

    fn unique_fields() -> &'static [UserField] {
        &[UserField::Email]
    }
}

/// Queryable file fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    SenderId,
    ReceiverAddress,
}

impl Record for FileRecord {
    type Field = FileField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: FileField) -> Option<&str> {
        match field {
            FileField::SenderId => Some(&self.sender_id),
            FileField::ReceiverAddress => Some(&self.receiver_address),
        }
    }

    fn field_matches(&self, field: FileField, value: &str) -> bool {
        match field {
            // Hex addresses compare case-insensitively
            FileField::ReceiverAddress => self.receiver_address.eq_ignore_ascii_case(value),
            FileField::SenderId => self.sender_id == value,
        }
    }
}
