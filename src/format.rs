//! Display formatting for decoded selections.

use crate::markets::{decode_market, MarketError};
use crate::periods::decode_period;
use crate::records::Selection;
use crate::transforms::player_from_bytes;

/// Render a selection as a one-line display string:
/// `"<player - ><market> - <period> <side> (LIVE)"`.
///
/// The player segment appears only when the selection carries a player (or
/// `player_override` supplies a fuller name), the period segment only when
/// the period code has a label, the side segment only for two-sided markets,
/// and the live suffix only for in-play selections.
pub fn format_selection(
    selection: &Selection,
    home: &str,
    away: &str,
    player_override: Option<&str>,
) -> Result<String, MarketError> {
    let market = decode_market(selection.market, home, away)?;
    let period = decode_period(
        u16::from(selection.period),
        Some(u16::from(selection.sport)),
    );
    let player = match player_override {
        Some(name) => name.to_string(),
        None => player_from_bytes(&selection.player),
    };

    let mut out = String::new();
    if !player.is_empty() {
        out.push_str(&player);
        out.push_str(" - ");
    }
    out.push_str(&market.name);
    if let Some(period) = &period {
        out.push_str(" - ");
        out.push_str(&period.abbreviation);
    }
    if let Some(side) = market.sides.label(selection.side) {
        out.push(' ');
        out.push_str(side);
    }
    if selection.is_live {
        out.push_str(" (LIVE)");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::periods::{SPORT_BASKETBALL, SPORT_SOCCER};
    use crate::records::PLAYER_BYTES;
    use crate::transforms::player_to_bytes;
    use pretty_assertions::assert_eq;

    fn selection(market: u16, period: u8, sport: u8) -> Selection {
        Selection {
            sport,
            league: 1,
            event: 100,
            period,
            market,
            player: [0; PLAYER_BYTES],
            side: true,
            is_live: false,
        }
    }

    #[test]
    fn test_plain_moneyline() {
        let sel = selection(0, 0, SPORT_BASKETBALL as u8);
        assert_eq!(
            format_selection(&sel, "Lakers", "Celtics", None).unwrap(),
            "Moneyline - FT Lakers"
        );
    }

    #[test]
    fn test_away_side_label() {
        let mut sel = selection(0, 0, SPORT_BASKETBALL as u8);
        sel.side = false;
        assert_eq!(
            format_selection(&sel, "Lakers", "Celtics", None).unwrap(),
            "Moneyline - FT Celtics"
        );
    }

    #[test]
    fn test_player_segment_and_live_suffix() {
        let mut sel = selection(30025, 0, SPORT_BASKETBALL as u8);
        sel.player = player_to_bytes("AD").unwrap();
        sel.is_live = true;
        assert_eq!(
            format_selection(&sel, "Lakers", "Celtics", None).unwrap(),
            "AD - Rebounds Over/Under 12.5 - FT Over (LIVE)"
        );
    }

    #[test]
    fn test_player_override_wins() {
        let mut sel = selection(30025, 0, SPORT_BASKETBALL as u8);
        sel.player = player_to_bytes("AD").unwrap();
        assert_eq!(
            format_selection(&sel, "Lakers", "Celtics", Some("Anthony Davis")).unwrap(),
            "Anthony Davis - Rebounds Over/Under 12.5 - FT Over"
        );
    }

    #[test]
    fn test_composite_market_has_no_side() {
        let sel = selection(612, 1, SPORT_SOCCER as u8);
        assert_eq!(
            format_selection(&sel, "Roma", "Lazio", None).unwrap(),
            "Roma/Draw - REG"
        );
    }

    #[test]
    fn test_unlabeled_period_is_omitted() {
        let sel = selection(0, 99, SPORT_SOCCER as u8);
        assert_eq!(
            format_selection(&sel, "Roma", "Lazio", None).unwrap(),
            "Moneyline Roma"
        );
    }

    #[test]
    fn test_bad_market_propagates() {
        let sel = selection(300, 0, SPORT_SOCCER as u8);
        assert!(matches!(
            format_selection(&sel, "A", "B", None),
            Err(MarketError::OutOfDomain(300))
        ));
    }
}
