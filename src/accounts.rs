//! Decoding of raw account buffers fetched from the chain.
//!
//! Batches decode with skip-and-continue semantics: one malformed account
//! must never abort a whole fetch, so failures are collected alongside the
//! successes and surfaced to the caller.

use thiserror::Error;
use tracing::warn;

use crate::codec::{CodecError, WireDecode};
use crate::records::{Bet, OperationalStatus, ProgramConfig, MIN_BET_WIRE_BYTES};
use crate::transforms::format_bet_id;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("bet account is {len} bytes, expected at least {min}")]
    TooShort { len: usize, min: usize },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// A bet account paired with its on-chain address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBetAccount {
    pub pubkey: String,
    pub bet: Bet,
}

impl DecodedBetAccount {
    pub fn bet_id(&self) -> String {
        format_bet_id(&self.bet.bet_id)
    }
}

/// An account that failed to decode, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAccount {
    pub pubkey: String,
    pub reason: String,
}

/// Decode a single bet account buffer. Buffers under the minimum bet size
/// are rejected before any field decoding runs.
pub fn decode_bet_account(pubkey: &str, data: &[u8]) -> Result<DecodedBetAccount, AccountError> {
    if data.len() < MIN_BET_WIRE_BYTES {
        return Err(AccountError::TooShort {
            len: data.len(),
            min: MIN_BET_WIRE_BYTES,
        });
    }
    let bet = Bet::from_bytes(data)?;
    Ok(DecodedBetAccount {
        pubkey: pubkey.to_string(),
        bet,
    })
}

/// Decode a batch of `(pubkey, data)` pairs, skipping accounts that fail.
pub fn decode_bet_accounts<I>(accounts: I) -> (Vec<DecodedBetAccount>, Vec<SkippedAccount>)
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let mut decoded = Vec::new();
    let mut skipped = Vec::new();
    for (pubkey, data) in accounts {
        match decode_bet_account(&pubkey, &data) {
            Ok(account) => decoded.push(account),
            Err(err) => skipped.push(SkippedAccount {
                pubkey,
                reason: err.to_string(),
            }),
        }
    }
    if !skipped.is_empty() {
        warn!(
            "skipped {} of {} bet accounts that failed to decode",
            skipped.len(),
            skipped.len() + decoded.len()
        );
    }
    (decoded, skipped)
}

pub fn decode_program_config(data: &[u8]) -> Result<ProgramConfig, AccountError> {
    Ok(ProgramConfig::from_bytes(data)?)
}

pub fn decode_operational_status(data: &[u8]) -> Result<OperationalStatus, AccountError> {
    Ok(OperationalStatus::from_bytes(data)?)
}
