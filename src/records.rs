//! Account records exchanged with the Parlay program.
//!
//! Every record is an immutable value with a fixed field order; the order is
//! the on-chain layout and must never change. Sizes in bytes:
//!
//! | record | layout |
//! |---|---|
//! | `Selection` | 20 fixed |
//! | `Matcher` | 52 fixed |
//! | `Bet` | 92 fixed + two prefixed sequences |
//! | `BetData` | 40 fixed + one prefixed sequence |
//! | `Offer` | 28 fixed + one prefixed sequence |
//! | `ProgramConfig` | 25 fixed |

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::{ByteReader, ByteWriter, CodecError, WireDecode, WireEncode};
use crate::transforms::player_from_bytes;

pub const BET_ID_BYTES: usize = 16;
pub const PLAYER_BYTES: usize = 4;
pub const PUBKEY_BYTES: usize = 32;

pub const SELECTION_WIRE_BYTES: usize = 20;
pub const MATCHER_WIRE_BYTES: usize = 52;

/// Smallest possible bet account: the fixed header, one selection, and an
/// empty matcher list. The account-fetch layer rejects anything shorter
/// before decoding.
pub const MIN_BET_WIRE_BYTES: usize = 120;

/// One leg of a bet: which outcome of which event, at which granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub sport: u8,
    pub league: u16,
    pub event: u64,
    pub period: u8,
    pub market: u16,
    /// Four raw UTF-8 bytes; all-zero means no player.
    pub player: [u8; PLAYER_BYTES],
    pub side: bool,
    pub is_live: bool,
}

impl Selection {
    /// Decoded player name; empty when the field is all zeros.
    pub fn player_name(&self) -> String {
        player_from_bytes(&self.player)
    }
}

impl WireEncode for Selection {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_u8(self.sport);
        w.put_u16(self.league);
        w.put_u64(self.event);
        w.put_u8(self.period);
        w.put_u16(self.market);
        w.put_fixed(&self.player, PLAYER_BYTES)?;
        w.put_bool(self.side);
        w.put_bool(self.is_live);
        Ok(())
    }
}

impl WireDecode for Selection {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            sport: r.read_u8()?,
            league: r.read_u16()?,
            event: r.read_u64()?,
            period: r.read_u8()?,
            market: r.read_u16()?,
            player: r.read_array()?,
            side: r.read_bool()?,
            is_live: r.read_bool()?,
        })
    }
}

/// A market maker's matched slice of a bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matcher {
    pub offer_id: u64,
    pub counterparty: [u8; PUBKEY_BYTES],
    pub amount: u64,
    pub odds: u32,
}

impl WireEncode for Matcher {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_u64(self.offer_id);
        w.put_fixed(&self.counterparty, PUBKEY_BYTES)?;
        w.put_u64(self.amount);
        w.put_u32(self.odds);
        Ok(())
    }
}

impl WireDecode for Matcher {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            offer_id: r.read_u64()?,
            counterparty: r.read_array()?,
            amount: r.read_u64()?,
            odds: r.read_u32()?,
        })
    }
}

/// Full on-chain bet account state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub bet_id: [u8; BET_ID_BYTES],
    pub requester: [u8; PUBKEY_BYTES],
    pub requested_stake: u64,
    pub requested_odds: u32,
    pub matched_stake: u64,
    pub matched_odds: u32,
    /// 0 = not a freebet.
    pub freebet_id: u32,
    pub is_sol_free: bool,
    pub keep_open: bool,
    pub bet_token: u8,
    pub placed_at: i64,
    pub frontend_id: u8,
    pub referral: u32,
    pub selections: Vec<Selection>,
    pub matchers: Vec<Matcher>,
}

impl Bet {
    pub fn bet_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.bet_id)
    }
}

impl WireEncode for Bet {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_fixed(&self.bet_id, BET_ID_BYTES)?;
        w.put_fixed(&self.requester, PUBKEY_BYTES)?;
        w.put_u64(self.requested_stake);
        w.put_u32(self.requested_odds);
        w.put_u64(self.matched_stake);
        w.put_u32(self.matched_odds);
        w.put_u32(self.freebet_id);
        w.put_bool(self.is_sol_free);
        w.put_bool(self.keep_open);
        w.put_u8(self.bet_token);
        w.put_i64(self.placed_at);
        w.put_u8(self.frontend_id);
        w.put_u32(self.referral);
        w.put_vec(&self.selections)?;
        w.put_vec(&self.matchers)?;
        Ok(())
    }
}

impl WireDecode for Bet {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            bet_id: r.read_array()?,
            requester: r.read_array()?,
            requested_stake: r.read_u64()?,
            requested_odds: r.read_u32()?,
            matched_stake: r.read_u64()?,
            matched_odds: r.read_u32()?,
            freebet_id: r.read_u32()?,
            is_sol_free: r.read_bool()?,
            keep_open: r.read_bool()?,
            bet_token: r.read_u8()?,
            placed_at: r.read_i64()?,
            frontend_id: r.read_u8()?,
            referral: r.read_u32()?,
            selections: r.read_vec()?,
            matchers: r.read_vec()?,
        })
    }
}

/// The caller-supplied subset of [`Bet`] needed to place one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetData {
    pub bet_id: [u8; BET_ID_BYTES],
    pub amount: u64,
    pub min_odds: u32,
    pub freebet_id: u32,
    pub is_sol_free: bool,
    pub frontend_id: u8,
    pub referral: u32,
    pub keep_open: bool,
    pub bet_token: u8,
    pub selections: Vec<Selection>,
}

impl BetData {
    pub fn bet_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.bet_id)
    }
}

impl WireEncode for BetData {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_fixed(&self.bet_id, BET_ID_BYTES)?;
        w.put_u64(self.amount);
        w.put_u32(self.min_odds);
        w.put_u32(self.freebet_id);
        w.put_bool(self.is_sol_free);
        w.put_u8(self.frontend_id);
        w.put_u32(self.referral);
        w.put_bool(self.keep_open);
        w.put_u8(self.bet_token);
        w.put_vec(&self.selections)?;
        Ok(())
    }
}

impl WireDecode for BetData {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            bet_id: r.read_array()?,
            amount: r.read_u64()?,
            min_odds: r.read_u32()?,
            freebet_id: r.read_u32()?,
            is_sol_free: r.read_bool()?,
            frontend_id: r.read_u8()?,
            referral: r.read_u32()?,
            keep_open: r.read_bool()?,
            bet_token: r.read_u8()?,
            selections: r.read_vec()?,
        })
    }
}

/// A market maker's standing offer to match bets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub offer_id: u64,
    pub max_amount: u64,
    pub max_odds: u32,
    pub expiry: u64,
    pub selections: Vec<Selection>,
}

impl WireEncode for Offer {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_u64(self.offer_id);
        w.put_u64(self.max_amount);
        w.put_u32(self.max_odds);
        w.put_u64(self.expiry);
        w.put_vec(&self.selections)?;
        Ok(())
    }
}

impl WireDecode for Offer {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            offer_id: r.read_u64()?,
            max_amount: r.read_u64()?,
            max_odds: r.read_u32()?,
            expiry: r.read_u64()?,
            selections: r.read_vec()?,
        })
    }
}

/// A market maker's ledger of standing offers, keyed by offer id. Encoded as
/// a count-prefixed sequence of `(offer_id, amount)` pairs; the map keeps the
/// encoding canonical (sorted by key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MMOfferAccount {
    pub existing_offers: std::collections::BTreeMap<u64, u64>,
}

impl WireEncode for MMOfferAccount {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_u32(self.existing_offers.len() as u32);
        for (offer_id, amount) in &self.existing_offers {
            w.put_u64(*offer_id);
            w.put_u64(*amount);
        }
        Ok(())
    }
}

impl WireDecode for MMOfferAccount {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let count = r.read_u32()?;
        let mut existing_offers = std::collections::BTreeMap::new();
        for _ in 0..count {
            let offer_id = r.read_u64()?;
            let amount = r.read_u64()?;
            existing_offers.insert(offer_id, amount);
        }
        Ok(Self { existing_offers })
    }
}

/// Program-wide betting switch. Unrecognized bytes decode to `Unknown`
/// rather than failing, so a client built before a new status keeps working.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationalStatus {
    #[default]
    Unknown = 0,
    Active = 1,
    MMingPaused = 2,
    PreBettingPaused = 3,
    LiveBettingPaused = 4,
    BettingPaused = 5,
    Paused = 6,
}

impl OperationalStatus {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Self::Active,
            2 => Self::MMingPaused,
            3 => Self::PreBettingPaused,
            4 => Self::LiveBettingPaused,
            5 => Self::BettingPaused,
            6 => Self::Paused,
            _ => Self::Unknown,
        }
    }
}

impl WireEncode for OperationalStatus {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        w.put_u8(*self as u8);
        Ok(())
    }
}

impl WireDecode for OperationalStatus {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self::from_byte(r.read_u8()?))
    }
}

/// Fee schedule and operational switches held in the program authority PDA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfig {
    pub operational_status: OperationalStatus,
    pub flat_fee: u64,
    pub place_fee: u32,
    pub win_fee: u32,
    pub cancellation_delay: i64,
}

impl WireEncode for ProgramConfig {
    fn encode(&self, w: &mut ByteWriter) -> Result<(), CodecError> {
        self.operational_status.encode(w)?;
        w.put_u64(self.flat_fee);
        w.put_u32(self.place_fee);
        w.put_u32(self.win_fee);
        w.put_i64(self.cancellation_delay);
        Ok(())
    }
}

impl WireDecode for ProgramConfig {
    fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            operational_status: OperationalStatus::decode(r)?,
            flat_fee: r.read_u64()?,
            place_fee: r.read_u32()?,
            win_fee: r.read_u32()?,
            cancellation_delay: r.read_i64()?,
        })
    }
}
