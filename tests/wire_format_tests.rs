use parlay_rs::actions::{Action, MatchBet, SettleBet, SIGNATURE_BYTES};
use parlay_rs::codec::CodecError;
use parlay_rs::records::{
    Bet, BetData, Matcher, Offer, OperationalStatus, ProgramConfig, Selection, BET_ID_BYTES,
    MATCHER_WIRE_BYTES, PUBKEY_BYTES, SELECTION_WIRE_BYTES,
};
use parlay_rs::transforms::player_to_bytes;
use parlay_rs::{WireDecode, WireEncode};
use pretty_assertions::assert_eq;

fn selection(market: u16, player: &str) -> Selection {
    Selection {
        sport: 15,
        league: 2,
        event: 555_000_111,
        period: 14,
        market,
        player: player_to_bytes(player).unwrap(),
        side: true,
        is_live: false,
    }
}

fn offer() -> Offer {
    Offer {
        offer_id: 31,
        max_amount: 750_000_000,
        max_odds: 2150,
        expiry: 1_750_000_000,
        selections: vec![selection(1050, ""), selection(220, "")],
    }
}

#[test]
fn test_bet_exact_length_law() {
    let bet = Bet {
        bet_id: [5; BET_ID_BYTES],
        requester: [6; PUBKEY_BYTES],
        requested_stake: 1,
        requested_odds: 2,
        matched_stake: 3,
        matched_odds: 4,
        freebet_id: 5,
        is_sol_free: true,
        keep_open: false,
        bet_token: 6,
        placed_at: -7,
        frontend_id: 8,
        referral: 9,
        selections: vec![selection(0, ""), selection(42600, "QB1"), selection(612, "")],
        matchers: vec![Matcher {
            offer_id: 1,
            counterparty: [1; PUBKEY_BYTES],
            amount: 2,
            odds: 3,
        }],
    };
    let bytes = bet.to_bytes().unwrap();
    assert_eq!(
        bytes.len(),
        92 + 4 + 3 * SELECTION_WIRE_BYTES + 4 + MATCHER_WIRE_BYTES
    );
    assert_eq!(Bet::from_bytes(&bytes).unwrap(), bet);
}

#[test]
fn test_offer_truncation_never_yields_partial_values() {
    let bytes = offer().to_bytes().unwrap();
    for cut in 0..bytes.len() {
        assert!(
            matches!(
                Offer::from_bytes(&bytes[..cut]),
                Err(CodecError::InsufficientBytes { .. })
            ),
            "prefix length {cut}"
        );
    }
}

#[test]
fn test_action_envelope_discriminants_are_stable() {
    let bet_data = BetData {
        bet_id: [0xaa; BET_ID_BYTES],
        amount: 10,
        min_odds: 20,
        freebet_id: 0,
        is_sol_free: false,
        frontend_id: 1,
        referral: 0,
        keep_open: true,
        bet_token: 0,
        selections: vec![selection(4, "")],
    };
    let cases: Vec<(u8, Action)> = vec![
        (0, Action::PlaceBet(bet_data.clone())),
        (1, Action::PlaceFreeBet(bet_data)),
        (2, Action::CancelBet { is_admin: false }),
        (
            3,
            Action::MatchBet(MatchBet {
                amount: 1_000,
                signature: [1; SIGNATURE_BYTES],
                signer_pubkey: [2; PUBKEY_BYTES],
                offer: offer(),
            }),
        ),
        (
            4,
            Action::SettleBet(SettleBet {
                is_modified_payout: true,
                payout: 123,
                results: vec![0, 1, 1, 0],
            }),
        ),
        (5, Action::InitMM),
        (6, Action::MmWithdraw { amount: 9 }),
    ];
    for (discriminant, action) in cases {
        let bytes = action.to_bytes().unwrap();
        assert_eq!(bytes[0], discriminant);
        assert_eq!(action.discriminant(), discriminant);
        assert_eq!(Action::from_bytes(&bytes).unwrap(), action);
    }
    assert_eq!(
        Action::from_bytes(&[7]).unwrap_err(),
        CodecError::InvalidDiscriminant(7)
    );
}

#[test]
fn test_match_bet_fixed_signature_widths() {
    let action = Action::MatchBet(MatchBet {
        amount: 5,
        signature: [0xee; SIGNATURE_BYTES],
        signer_pubkey: [0xdd; PUBKEY_BYTES],
        offer: Offer {
            offer_id: 1,
            max_amount: 2,
            max_odds: 3,
            expiry: 4,
            selections: vec![],
        },
    });
    let bytes = action.to_bytes().unwrap();
    // disc + amount + sig + signer + offer header + empty selection count
    assert_eq!(bytes.len(), 1 + 8 + 64 + 32 + 28 + 4);
    assert_eq!(&bytes[9..73], &[0xee; 64]);
    assert_eq!(&bytes[73..105], &[0xdd; 32]);
}

#[test]
fn test_program_config_status_is_forward_compatible() {
    let config = ProgramConfig {
        operational_status: OperationalStatus::Paused,
        flat_fee: 1,
        place_fee: 2,
        win_fee: 3,
        cancellation_delay: 4,
    };
    let mut bytes = config.to_bytes().unwrap();
    // A status byte from a newer program version decodes as Unknown.
    bytes[0] = 42;
    let decoded = ProgramConfig::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.operational_status, OperationalStatus::Unknown);
    assert_eq!(decoded.flat_fee, 1);
}
