//! # parlay-rs
//!
//! A Rust client library for the Parlay on-chain wagering program, covering
//! the binary account codecs, market and period decoding, instruction
//! assembly, and account fetching.
//!
//! ## Quick Start
//!
//! ```no_run
//! use parlay_rs::{decode_market, decode_period, format_selection, RpcClient};
//! use parlay_rs::constants::Network;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Decode a market code into a human descriptor
//! let market = decode_market(220, "Lakers", "Celtics")?;
//! println!("{} ({})", market.name, market.kind.tag());
//!
//! // Fetch and decode a user's bets; malformed accounts are skipped
//! let client = RpcClient::new(Network::Mainnet);
//! let bettor = "9B4dm1N1Ssn1Yukphpq8MCZcA8FiJagZTRRr5c4Vyv1Y".parse()?;
//! let (bets, skipped) = client.fetch_user_bets(&bettor, false, None).await?;
//! for bet in &bets {
//!     for selection in &bet.bet.selections {
//!         println!("{}", format_selection(selection, "Home", "Away", None)?);
//!     }
//! }
//! println!("{} decoded, {} skipped", bets.len(), skipped.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Building instructions
//!
//! ```no_run
//! use parlay_rs::constants::Network;
//! use parlay_rs::instructions::build_place_bet;
//! use parlay_rs::records::{BetData, Selection};
//! use parlay_rs::transforms::new_bet_id;
//!
//! # fn example(bettor: solana_program::pubkey::Pubkey) -> anyhow::Result<()> {
//! let bet_data = BetData {
//!     bet_id: new_bet_id(),
//!     amount: 5_000_000,
//!     min_odds: 1850,
//!     freebet_id: 0,
//!     is_sol_free: false,
//!     frontend_id: 1,
//!     referral: 0,
//!     keep_open: false,
//!     bet_token: 0,
//!     selections: vec![/* ... */],
//! };
//! let instruction = build_place_bet(&bettor, &bet_data, Network::Mainnet)?;
//! # Ok(())
//! # }
//! ```
//!
//! The wire format is bit-exact with the on-chain program: little-endian
//! scalars, fixed byte blocks, `u32` count-prefixed sequences, and a one-byte
//! action discriminant. Field order in every record is a wire contract.

pub mod accounts;
pub mod actions;
pub mod codec;
pub mod config;
pub mod constants;
pub mod format;
pub mod instructions;
pub mod markets;
pub mod periods;
pub mod player_props;
pub mod records;
pub mod rpc;
pub mod transforms;

// Re-export the types most callers touch at the crate root.
pub use accounts::{decode_bet_account, decode_bet_accounts, DecodedBetAccount, SkippedAccount};
pub use actions::Action;
pub use codec::{CodecError, WireDecode, WireEncode};
pub use config::Config;
pub use format::format_selection;
pub use markets::{decode_market, MarketDescriptor, MarketError};
pub use periods::{decode_period, sport_name, PeriodDescriptor};
pub use records::{
    Bet, BetData, MMOfferAccount, Matcher, Offer, OperationalStatus, ProgramConfig, Selection,
};
pub use rpc::RpcClient;
