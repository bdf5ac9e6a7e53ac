//! Well-known addresses and seeds for the Parlay program, per network.
//!
//! These are process-wide read-only tables; nothing here is derived at
//! runtime except PDAs (see `instructions`).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use solana_program::pubkey;
use solana_program::pubkey::Pubkey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Devnet,
}

impl Network {
    pub fn addresses(self) -> &'static ProgramAddresses {
        match self {
            Network::Mainnet => &MAINNET,
            Network::Devnet => &DEVNET,
        }
    }

    pub fn default_rpc_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.mainnet-beta.solana.com",
            Network::Devnet => "https://api.devnet.solana.com",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Devnet => write!(f, "devnet"),
        }
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Network::Mainnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(anyhow::anyhow!("unknown network: {other}")),
        }
    }
}

/// Everything an instruction builder needs to address the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramAddresses {
    pub program: Pubkey,
    /// Authority PDA holding the `ProgramConfig` account.
    pub auth_pda: Pubkey,
    pub fee_vault: Pubkey,
    pub token_mint: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
    pub sol_free_signer: Pubkey,
    pub freebet_program: Pubkey,
    pub frontend: Pubkey,
    pub admin: Pubkey,
}

pub static MAINNET: ProgramAddresses = ProgramAddresses {
    program: pubkey!("9bB3TADcwZEweUUcrp46FEpwMfLbwkEFQnc4patHPApp"),
    auth_pda: pubkey!("4ZYXmTcU7ndtQYQ8kstt7zZXJtFueCfXFiW6Fc8UJZg5"),
    fee_vault: pubkey!("9bF33qdYyXtdzfJVjqTxXQzbiXXSqPShgtwZLKtnDrku"),
    token_mint: pubkey!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
    token_program: pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
    associated_token_program: pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
    system_program: pubkey!("11111111111111111111111111111111"),
    sol_free_signer: pubkey!("pBSFcwP9RdohjJxZ2BuNhTTp88QvjQ1U4zJEd5ydEuX"),
    freebet_program: pubkey!("PBFb7DsfQvM1Qb49B3JWu5XSdyknUzprWJqdpCHHX6v"),
    frontend: pubkey!("pbfEPvHrDu5bsgmVZSyc6YySV62EDDMYdYTkywjruuP"),
    admin: pubkey!("9B4dm1N1Ssn1Yukphpq8MCZcA8FiJagZTRRr5c4Vyv1Y"),
};

pub static DEVNET: ProgramAddresses = ProgramAddresses {
    program: pubkey!("8rtbc6yZ8fvDhQaK2nrxraUpVVQM6ySFuBpzkqXLYz24"),
    auth_pda: pubkey!("2wMakfeDrHWMB7u3WQs9wV8FbmRBazcCgmB45oCuoJpA"),
    fee_vault: pubkey!("8uvG33CkKKLZLbc4aphwtqgjkMBrAZqQqrXLcHnDWhCp"),
    token_mint: pubkey!("Gh9ZwEmdLJ8DscKNTkTqPbNwLNNBjuSzaG9Vp2KGtKJr"),
    token_program: pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
    associated_token_program: pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
    system_program: pubkey!("11111111111111111111111111111111"),
    sol_free_signer: pubkey!("612L6VLWCfsyb6CidqDHg7pRxsUEbTKAzMeeLjy65NVV"),
    freebet_program: pubkey!("DpksNR6nnqrXzqSraTjS8qGUtPZUrKBZjxJu6NZUE8Hk"),
    frontend: pubkey!("7mjvQ5vvHUvj8B7uDM23ZitNEqT7Gqim9Yz8kHgWwhAd"),
    admin: pubkey!("AdmkgFyD3RhJfELVNv7VaXnDbxrCEqZGEYAfGVUhTVnj"),
};

// PDA seeds.
pub const BET_ACCOUNT_SEED: &[u8] = b"bet";
pub const MM_PDA_SEED: &[u8] = b"mm_pda_acc";
pub const FREEBET_ACCOUNT_SEED: &[u8] = b"freebet_account";
pub const FREEBET_AUTHORITY_SEED: &[u8] = b"freebet_authority";
