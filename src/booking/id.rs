use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const MAX_ID_LENGTH: usize = 16;

pub const DEFAULT_ID_LENGTH: usize = 7;

/// Opaque booking identifier.
///
/// Generated ids are short lowercase base-36 strings drawn from a v4 UUID.
/// Nothing checks them for collisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate(length: usize) -> Self {
        let length = length.clamp(1, MAX_ID_LENGTH);
        let mut bits = Uuid::new_v4().as_u128();
        let mut id = String::with_capacity(length);

        for _ in 0..length {
            id.push(ALPHABET[(bits % 36) as usize] as char);
            bits /= 36;
        }

        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BookingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_requested_length() {
        let id = BookingId::generate(DEFAULT_ID_LENGTH);
        assert_eq!(id.as_str().len(), DEFAULT_ID_LENGTH);
    }

    #[test]
    fn generated_id_is_lowercase_base36() {
        let id = BookingId::generate(12);
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_id_length_is_clamped() {
        assert_eq!(BookingId::generate(0).as_str().len(), 1);
        assert_eq!(BookingId::generate(64).as_str().len(), MAX_ID_LENGTH);
    }

    #[test]
    fn consecutive_ids_differ() {
        let first = BookingId::generate(10);
        let second = BookingId::generate(10);
        assert_ne!(first, second);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = BookingId::new("x1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"x1\"");
    }
}
