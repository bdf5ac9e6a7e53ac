//! Instruction assembly for the program's client-facing operations.
//!
//! Each builder derives the operation's PDAs, lays out the account list in
//! the order the program expects, and encodes the action payload. Account
//! order is part of the program interface.

use anyhow::{bail, Result};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::actions::Action;
use crate::codec::WireEncode;
use crate::constants::{
    Network, BET_ACCOUNT_SEED, FREEBET_ACCOUNT_SEED, FREEBET_AUTHORITY_SEED,
};
use crate::records::{BetData, BET_ID_BYTES};

/// A frontend operator sponsoring freebets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontend {
    pub id: u8,
    pub address: Pubkey,
}

/// PDA of the bet account for a bet id.
pub fn derive_bet_pda(bet_id: &[u8; BET_ID_BYTES], network: Network) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[bet_id, BET_ACCOUNT_SEED], &network.addresses().program)
}

/// Associated token account of `owner` for the program's settlement mint.
pub fn derive_associated_token_account(owner: &Pubkey, network: Network) -> Pubkey {
    let addrs = network.addresses();
    Pubkey::find_program_address(
        &[
            owner.as_ref(),
            addrs.token_program.as_ref(),
            addrs.token_mint.as_ref(),
        ],
        &addrs.associated_token_program,
    )
    .0
}

/// Freebet balance PDA of a bettor.
pub fn derive_freebet_account(bettor: &Pubkey, network: Network) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[bettor.as_ref(), FREEBET_ACCOUNT_SEED],
        &network.addresses().freebet_program,
    )
}

/// Build the PlaceBet instruction for `bettor`.
pub fn build_place_bet(
    bettor: &Pubkey,
    bet_data: &BetData,
    network: Network,
) -> Result<Instruction> {
    let addrs = network.addresses();
    let (bet_pda, _) = derive_bet_pda(&bet_data.bet_id, network);
    let bet_ata = derive_associated_token_account(&bet_pda, network);
    let bettor_ata = derive_associated_token_account(bettor, network);

    let data = Action::PlaceBet(bet_data.clone()).to_bytes()?;

    Ok(Instruction {
        program_id: addrs.program,
        accounts: vec![
            AccountMeta::new(*bettor, true),
            AccountMeta::new(bet_pda, false),
            AccountMeta::new(bet_ata, false),
            AccountMeta::new_readonly(addrs.auth_pda, false),
            AccountMeta::new(addrs.fee_vault, false),
            AccountMeta::new(bettor_ata, false),
            AccountMeta::new_readonly(addrs.token_program, false),
            AccountMeta::new_readonly(addrs.token_mint, false),
            AccountMeta::new_readonly(addrs.system_program, false),
            AccountMeta::new_readonly(addrs.associated_token_program, false),
        ],
        data,
    })
}

/// Build the PlaceFreeBet instruction. The bet data must reference a freebet
/// and the sponsoring frontend.
pub fn build_place_freebet(
    bettor: &Pubkey,
    bet_data: &BetData,
    network: Network,
    frontend: Frontend,
) -> Result<Instruction> {
    if bet_data.freebet_id == 0 {
        bail!("freebet id is required to place a freebet");
    }
    if bet_data.frontend_id != frontend.id {
        bail!(
            "bet data names frontend {} but the sponsoring frontend is {}",
            bet_data.frontend_id,
            frontend.id
        );
    }

    let addrs = network.addresses();
    let (bet_pda, _) = derive_bet_pda(&bet_data.bet_id, network);
    let bet_ata = derive_associated_token_account(&bet_pda, network);
    let (user_freebet_pda, _) = derive_freebet_account(bettor, network);
    let (frontend_pda, _) = Pubkey::find_program_address(
        &[
            frontend.address.as_ref(),
            FREEBET_AUTHORITY_SEED,
            &[bet_data.frontend_id],
        ],
        &frontend.address,
    );
    let frontend_ata = derive_associated_token_account(&frontend_pda, network);

    let data = Action::PlaceFreeBet(bet_data.clone()).to_bytes()?;

    Ok(Instruction {
        program_id: addrs.program,
        accounts: vec![
            AccountMeta::new(*bettor, true),
            AccountMeta::new(bet_pda, false),
            AccountMeta::new(bet_ata, false),
            AccountMeta::new_readonly(addrs.auth_pda, false),
            AccountMeta::new(user_freebet_pda, false),
            AccountMeta::new_readonly(addrs.freebet_program, false),
            AccountMeta::new_readonly(addrs.frontend, false),
            AccountMeta::new(frontend_pda, false),
            AccountMeta::new(frontend_ata, false),
            AccountMeta::new_readonly(addrs.token_program, false),
            AccountMeta::new_readonly(addrs.token_mint, false),
            AccountMeta::new_readonly(addrs.system_program, false),
            AccountMeta::new_readonly(addrs.associated_token_program, false),
        ],
        data,
    })
}

/// Build the CancelBet instruction. Admin-initiated cancellations sign with
/// the admin key and prepend it to the account list; freebet cancellations
/// route the refund through the sponsoring frontend instead of the bettor's
/// token account.
pub fn build_cancel_bet(
    is_admin: bool,
    bet: &Pubkey,
    bettor: &Pubkey,
    network: Network,
    freebet_frontend: Option<Frontend>,
) -> Result<Instruction> {
    let addrs = network.addresses();
    let bet_ata = derive_associated_token_account(bet, network);

    let mut accounts = vec![
        AccountMeta {
            pubkey: *bettor,
            is_signer: !is_admin,
            is_writable: true,
        },
        AccountMeta::new(*bet, false),
        AccountMeta::new(bet_ata, false),
        AccountMeta::new_readonly(addrs.auth_pda, false),
        AccountMeta::new_readonly(addrs.token_mint, false),
        AccountMeta::new_readonly(addrs.token_program, false),
    ];
    if is_admin {
        accounts.insert(0, AccountMeta::new(addrs.admin, true));
    }

    match freebet_frontend {
        None => {
            let bettor_ata = derive_associated_token_account(bettor, network);
            accounts.push(AccountMeta::new(addrs.fee_vault, false));
            accounts.push(AccountMeta::new(bettor_ata, false));
        }
        Some(frontend) => {
            let (bettor_freebet_pda, _) = derive_freebet_account(bettor, network);
            let (frontend_pda, _) = Pubkey::find_program_address(
                &[
                    addrs.frontend.as_ref(),
                    FREEBET_AUTHORITY_SEED,
                    &[frontend.id],
                ],
                &frontend.address,
            );
            let frontend_ata = derive_associated_token_account(&frontend_pda, network);
            accounts.push(AccountMeta::new(bettor_freebet_pda, false));
            accounts.push(AccountMeta::new_readonly(addrs.freebet_program, false));
            accounts.push(AccountMeta::new_readonly(frontend_pda, false));
            accounts.push(AccountMeta::new(frontend_ata, false));
        }
    }

    let data = Action::CancelBet { is_admin }.to_bytes()?;

    Ok(Instruction {
        program_id: addrs.program,
        accounts,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Selection, PLAYER_BYTES};
    use pretty_assertions::assert_eq;

    fn sample_bet_data(freebet_id: u32, frontend_id: u8) -> BetData {
        BetData {
            bet_id: [9; BET_ID_BYTES],
            amount: 1_000_000,
            min_odds: 1850,
            freebet_id,
            is_sol_free: false,
            frontend_id,
            referral: 0,
            keep_open: false,
            bet_token: 0,
            selections: vec![Selection {
                sport: 29,
                league: 1,
                event: 55,
                period: 1,
                market: 0,
                player: [0; PLAYER_BYTES],
                side: true,
                is_live: false,
            }],
        }
    }

    fn bettor() -> Pubkey {
        Pubkey::new_from_array([0x42; 32])
    }

    #[test]
    fn test_bet_pda_is_deterministic() {
        let data = sample_bet_data(0, 1);
        let (pda, bump) = derive_bet_pda(&data.bet_id, Network::Mainnet);
        let (again, bump_again) = derive_bet_pda(&data.bet_id, Network::Mainnet);
        assert_eq!(pda, again);
        assert_eq!(bump, bump_again);
        // Different program id on devnet, different PDA.
        assert_ne!(pda, derive_bet_pda(&data.bet_id, Network::Devnet).0);
    }

    #[test]
    fn test_place_bet_account_layout() {
        let data = sample_bet_data(0, 1);
        let ix = build_place_bet(&bettor(), &data, Network::Mainnet).unwrap();
        let addrs = Network::Mainnet.addresses();

        assert_eq!(ix.program_id, addrs.program);
        assert_eq!(ix.accounts.len(), 10);
        assert_eq!(ix.accounts[0].pubkey, bettor());
        assert!(ix.accounts[0].is_signer);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(
            ix.accounts[1].pubkey,
            derive_bet_pda(&data.bet_id, Network::Mainnet).0
        );
        assert_eq!(ix.accounts[3].pubkey, addrs.auth_pda);
        assert!(!ix.accounts[3].is_writable);
        assert_eq!(ix.accounts[4].pubkey, addrs.fee_vault);
        assert_eq!(ix.accounts[8].pubkey, addrs.system_program);

        // Payload is the PlaceBet discriminant followed by the bet data.
        assert_eq!(ix.data[0], 0);
        assert_eq!(
            ix.data,
            Action::PlaceBet(data).to_bytes().unwrap()
        );
    }

    #[test]
    fn test_place_freebet_requires_freebet_id() {
        let data = sample_bet_data(0, 1);
        let frontend = Frontend {
            id: 1,
            address: Pubkey::new_from_array([7; 32]),
        };
        assert!(build_place_freebet(&bettor(), &data, Network::Mainnet, frontend).is_err());
    }

    #[test]
    fn test_place_freebet_rejects_frontend_mismatch() {
        let data = sample_bet_data(12, 2);
        let frontend = Frontend {
            id: 1,
            address: Pubkey::new_from_array([7; 32]),
        };
        assert!(build_place_freebet(&bettor(), &data, Network::Mainnet, frontend).is_err());
    }

    #[test]
    fn test_place_freebet_account_layout() {
        let data = sample_bet_data(12, 1);
        let frontend = Frontend {
            id: 1,
            address: Pubkey::new_from_array([7; 32]),
        };
        let ix = build_place_freebet(&bettor(), &data, Network::Mainnet, frontend).unwrap();
        let addrs = Network::Mainnet.addresses();

        assert_eq!(ix.accounts.len(), 13);
        assert_eq!(ix.accounts[0].pubkey, bettor());
        assert_eq!(
            ix.accounts[4].pubkey,
            derive_freebet_account(&bettor(), Network::Mainnet).0
        );
        assert_eq!(ix.accounts[5].pubkey, addrs.freebet_program);
        assert_eq!(ix.accounts[6].pubkey, addrs.frontend);
        assert_eq!(ix.data[0], 1);
    }

    #[test]
    fn test_cancel_bet_user_initiated() {
        let bet = Pubkey::new_from_array([0x0b; 32]);
        let ix = build_cancel_bet(false, &bet, &bettor(), Network::Mainnet, None).unwrap();
        let addrs = Network::Mainnet.addresses();

        assert_eq!(ix.accounts.len(), 8);
        assert_eq!(ix.accounts[0].pubkey, bettor());
        assert!(ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[1].pubkey, bet);
        assert_eq!(ix.accounts[6].pubkey, addrs.fee_vault);
        assert_eq!(ix.data, vec![2, 0]);
    }

    #[test]
    fn test_cancel_bet_admin_prepends_admin_signer() {
        let bet = Pubkey::new_from_array([0x0b; 32]);
        let ix = build_cancel_bet(true, &bet, &bettor(), Network::Mainnet, None).unwrap();
        let addrs = Network::Mainnet.addresses();

        assert_eq!(ix.accounts.len(), 9);
        assert_eq!(ix.accounts[0].pubkey, addrs.admin);
        assert!(ix.accounts[0].is_signer);
        // Bettor no longer signs but still receives the refund.
        assert_eq!(ix.accounts[1].pubkey, bettor());
        assert!(!ix.accounts[1].is_signer);
        assert!(ix.accounts[1].is_writable);
        assert_eq!(ix.data, vec![2, 1]);
    }

    #[test]
    fn test_cancel_bet_freebet_routes_through_frontend() {
        let bet = Pubkey::new_from_array([0x0b; 32]);
        let frontend = Frontend {
            id: 3,
            address: Pubkey::new_from_array([7; 32]),
        };
        let ix =
            build_cancel_bet(false, &bet, &bettor(), Network::Mainnet, Some(frontend)).unwrap();
        let addrs = Network::Mainnet.addresses();

        assert_eq!(ix.accounts.len(), 10);
        assert_eq!(
            ix.accounts[6].pubkey,
            derive_freebet_account(&bettor(), Network::Mainnet).0
        );
        assert_eq!(ix.accounts[7].pubkey, addrs.freebet_program);
        // No fee vault or bettor token account on the freebet path.
        assert!(ix.accounts.iter().all(|a| a.pubkey != addrs.fee_vault));
    }
}
