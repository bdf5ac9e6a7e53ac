//! Static registry of player-prop market bands.
//!
//! Player-prop market codes live above 11000 in 500-wide bands; the band's
//! base code selects the statistic and the offset inside the band carries the
//! line (half-point granularity). The table is built once at startup and
//! never mutated.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerProp {
    /// Base market code of the band.
    pub band: u16,
    pub name: &'static str,
    pub sports: &'static [&'static str],
    pub in_use: bool,
    pub detail: Option<&'static str>,
}

const fn prop(
    band: u16,
    name: &'static str,
    sports: &'static [&'static str],
    in_use: bool,
    detail: Option<&'static str>,
) -> PlayerProp {
    PlayerProp {
        band,
        name,
        sports,
        in_use,
        detail,
    }
}

/// Passing-yard lines overflow a single 500-wide band; codes in the 42500
/// band decode against the 42000 base so the line keeps counting upward.
pub const PASSING_YARDS_OVERFLOW_BAND: u16 = 42500;
pub const PASSING_YARDS_BAND: u16 = 42000;

pub static PLAYER_PROPS: &[PlayerProp] = &[
    // General
    prop(11000, "Points", &["basketball", "hockey"], true, Some("Points by a player")),
    prop(11500, "Goals", &["hockey", "soccer"], true, None),
    prop(12000, "Assists", &["basketball", "hockey", "soccer"], true, Some("Assists by a player")),
    prop(12500, "Saves", &["hockey", "soccer"], true, Some("Saves by a player")),
    // Esports
    prop(15000, "Kills", &["esports"], false, None),
    prop(15500, "Headshots", &["esports"], false, None),
    prop(16000, "Deaths", &["esports"], false, None),
    // Baseball
    prop(20000, "Home Runs", &["baseball"], true, None),
    prop(20500, "Strikeouts", &["baseball"], true, Some("Strikeouts by a pitcher")),
    prop(21000, "Total Bases", &["baseball"], true, None),
    prop(21500, "Pitching Outs", &["baseball"], true, Some("Total outs by a pitcher")),
    // Basketball
    prop(30000, "Rebounds", &["basketball"], true, Some("Rebounds by a player")),
    prop(30500, "Steals", &["basketball"], false, None),
    prop(31000, "Turnovers", &["basketball"], false, None),
    prop(31500, "Blocks", &["basketball"], false, None),
    prop(32000, "Three Point Made", &["basketball"], true, Some("Three point field goals made by a player")),
    prop(32500, "Double Double", &["basketball"], true, Some("Double double by a player")),
    prop(33000, "Triple Double", &["basketball"], false, None),
    prop(33500, "Points+Assists", &["basketball"], false, None),
    prop(34000, "Points+Rebounds", &["basketball"], false, None),
    prop(34500, "Assists+Rebounds", &["basketball"], false, None),
    prop(35000, "Points+Rebounds+Assist", &["basketball"], true, Some("Points + Rebounds + Assists by a player")),
    // American football
    prop(40000, "Touchdowns", &["football"], true, None),
    prop(40500, "Field Goals", &["football"], false, None),
    prop(41000, "Rushing Yards", &["football"], true, None),
    prop(41500, "Rushing Attempts", &["football"], true, None),
    prop(42000, "Passing Yards", &["football"], true, None),
    prop(42500, "Passing Yards", &["football"], true, None),
    prop(43000, "Receiving Yards", &["football"], true, None),
    prop(43500, "Rush Attempts", &["football"], false, None),
    prop(44000, "Pass Attempts", &["football"], true, None),
    prop(44500, "FG Attempts", &["football"], false, None),
    prop(45000, "Rushes", &["football"], false, None),
    prop(45500, "Receptions", &["football"], true, None),
    prop(46000, "Pass Completions", &["football"], true, None),
    prop(46500, "Ints", &["football"], false, None),
    prop(47000, "Ints Thrown", &["football"], false, None),
    prop(47500, "Passing Touchdowns", &["football"], true, Some("Passes that result in a touchdown by a QB")),
    // Ice hockey
    prop(50000, "Shots On Goal", &["hockey"], true, Some("Shots on goal by a player")),
    prop(50500, "PP Points", &["hockey"], false, None),
    prop(51000, "Blocked Shots", &["hockey"], false, None),
    // Soccer
    prop(52000, "First Goal Scorer", &["soccer"], false, None),
    prop(52500, "Yellow Card", &["soccer"], false, None),
    prop(53000, "Goals+Assists", &["soccer"], false, None),
    prop(53500, "Red Card", &["soccer"], false, None),
    prop(54000, "Shots", &["hockey", "soccer"], false, None),
    prop(54500, "Shots On Target", &["soccer"], false, None),
    prop(55000, "Fouls", &["soccer"], false, None),
    prop(55500, "Tackles", &["soccer"], false, None),
    prop(56000, "Passes", &["soccer"], false, None),
];

static PROPS_BY_BAND: Lazy<HashMap<u16, &'static PlayerProp>> =
    Lazy::new(|| PLAYER_PROPS.iter().map(|p| (p.band, p)).collect());

pub fn prop_for_band(band: u16) -> Option<&'static PlayerProp> {
    PROPS_BY_BAND.get(&band).copied()
}
