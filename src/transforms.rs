//! Conversions between human values and their fixed-width wire fields.

use thiserror::Error;
use uuid::Uuid;

use crate::records::{BET_ID_BYTES, PLAYER_BYTES};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Byte length, not character count: a multi-byte name can overflow the
    /// field at fewer than four characters and must never be truncated.
    #[error("player name is {actual} bytes encoded, the wire field holds {max}")]
    TooLong { actual: usize, max: usize },
}

/// Encode a player name into the fixed 4-byte field, zero-padded.
pub fn player_to_bytes(name: &str) -> Result<[u8; PLAYER_BYTES], TransformError> {
    let encoded = name.as_bytes();
    if encoded.len() > PLAYER_BYTES {
        return Err(TransformError::TooLong {
            actual: encoded.len(),
            max: PLAYER_BYTES,
        });
    }
    let mut out = [0u8; PLAYER_BYTES];
    out[..encoded.len()].copy_from_slice(encoded);
    Ok(out)
}

/// Decode the fixed player field; all zeros means no player and maps to the
/// empty string. Zero padding is stripped before decoding.
pub fn player_from_bytes(bytes: &[u8; PLAYER_BYTES]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Fresh random bet id for a new bet.
pub fn new_bet_id() -> [u8; BET_ID_BYTES] {
    Uuid::new_v4().into_bytes()
}

/// Parse a canonical UUID string into the wire field.
pub fn parse_bet_id(bet_id: &str) -> Result<[u8; BET_ID_BYTES], uuid::Error> {
    Ok(Uuid::parse_str(bet_id)?.into_bytes())
}

/// Canonical hyphenated form of a wire bet id.
pub fn format_bet_id(bet_id: &[u8; BET_ID_BYTES]) -> String {
    Uuid::from_bytes(*bet_id).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_round_trip() {
        let bytes = player_to_bytes("LBJ").unwrap();
        assert_eq!(bytes, [b'L', b'B', b'J', 0]);
        assert_eq!(player_from_bytes(&bytes), "LBJ");

        let full = player_to_bytes("CURY").unwrap();
        assert_eq!(player_from_bytes(&full), "CURY");
    }

    #[test]
    fn test_empty_player_is_all_zero() {
        let bytes = player_to_bytes("").unwrap();
        assert_eq!(bytes, [0; PLAYER_BYTES]);
        assert_eq!(player_from_bytes(&bytes), "");
    }

    #[test]
    fn test_player_too_long_by_bytes() {
        assert_eq!(
            player_to_bytes("CURRY").unwrap_err(),
            TransformError::TooLong { actual: 5, max: 4 }
        );
        // Two characters, six encoded bytes.
        assert_eq!(
            player_to_bytes("東京").unwrap_err(),
            TransformError::TooLong { actual: 6, max: 4 }
        );
    }

    #[test]
    fn test_multibyte_player_within_capacity() {
        let bytes = player_to_bytes("éa").unwrap();
        assert_eq!(player_from_bytes(&bytes), "éa");
    }

    #[test]
    fn test_bet_id_round_trip() {
        let id = "0193a1b2-4d5e-7f80-9102-a3b4c5d6e7f8";
        let bytes = parse_bet_id(id).unwrap();
        assert_eq!(format_bet_id(&bytes), id);
    }

    #[test]
    fn test_bet_id_rejects_garbage() {
        assert!(parse_bet_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_new_bet_ids_are_distinct() {
        assert_ne!(new_bet_id(), new_bet_id());
    }
}
