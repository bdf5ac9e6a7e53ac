//! The instruction payload envelope: a tagged union over every operation the
//! program accepts. The leading discriminant byte and the variant order it
//! indexes are part of the wire contract.

use crate::codec::{ByteReader, ByteWriter, CodecError, WireDecode, WireEncode};
use crate::records::{BetData, Offer, PUBKEY_BYTES};

pub const SIGNATURE_BYTES: usize = 64;

/// Payload of [`Action::MatchBet`]: an offer plus the market maker's
/// signature over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBet {
    pub amount: u64,
    pub signature: [u8; SIGNATURE_BYTES],
    pub signer_pubkey: [u8; PUBKEY_BYTES],
    pub offer: Offer,
}

impl WireEncode for MatchBet {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_u64(self.amount);
        w.put_fixed(&self.signature, SIGNATURE_BYTES)?;
        w.put_fixed(&self.signer_pubkey, PUBKEY_BYTES)?;
        self.offer.encode(w)
    }
}

impl WireDecode for MatchBet {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            amount: r.read_u64()?,
            signature: r.read_array()?,
            signer_pubkey: r.read_array()?,
            offer: Offer::decode(r)?,
        })
    }
}

/// Payload of [`Action::SettleBet`]. `results` is opaque to the client and
/// carried as a length-prefixed blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettleBet {
    pub is_modified_payout: bool,
    pub payout: u64,
    pub results: Vec<u8>,
}

impl WireEncode for SettleBet {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_bool(self.is_modified_payout);
        w.put_u64(self.payout);
        w.put_var_bytes(&self.results);
        Ok(())
    }
}

impl WireDecode for SettleBet {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            is_modified_payout: r.read_bool()?,
            payout: r.read_u64()?,
            results: r.read_var_bytes()?,
        })
    }
}

/// Every operation the program accepts, in discriminant order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 0
    PlaceBet(BetData),
    /// 1
    PlaceFreeBet(BetData),
    /// 2 — true when the cancellation is admin-initiated.
    CancelBet { is_admin: bool },
    /// 3
    MatchBet(MatchBet),
    /// 4
    SettleBet(SettleBet),
    /// 5
    InitMM,
    /// 6
    MmWithdraw { amount: u64 },
}

impl Action {
    pub fn discriminant(&self) -> u8 {
        match self {
            Action::PlaceBet(_) => 0,
            Action::PlaceFreeBet(_) => 1,
            Action::CancelBet { .. } => 2,
            Action::MatchBet(_) => 3,
            Action::SettleBet(_) => 4,
            Action::InitMM => 5,
            Action::MmWithdraw { .. } => 6,
        }
    }
}

impl WireEncode for Action {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_u8(self.discriminant());
        match self {
            Action::PlaceBet(data) | Action::PlaceFreeBet(data) => data.encode(w),
            Action::CancelBet { is_admin } => {
                w.put_bool(*is_admin);
                Ok(())
            }
            Action::MatchBet(payload) => payload.encode(w),
            Action::SettleBet(payload) => payload.encode(w),
            Action::InitMM => Ok(()),
            Action::MmWithdraw { amount } => {
                w.put_u64(*amount);
                Ok(())
            }
        }
    }
}

impl WireDecode for Action {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        match r.read_u8()? {
            0 => Ok(Action::PlaceBet(BetData::decode(r)?)),
            1 => Ok(Action::PlaceFreeBet(BetData::decode(r)?)),
            2 => Ok(Action::CancelBet {
                is_admin: r.read_bool()?,
            }),
            3 => Ok(Action::MatchBet(MatchBet::decode(r)?)),
            4 => Ok(Action::SettleBet(SettleBet::decode(r)?)),
            5 => Ok(Action::InitMM),
            6 => Ok(Action::MmWithdraw {
                amount: r.read_u64()?,
            }),
            other => Err(CodecError::InvalidDiscriminant(other)),
        }
    }
}
