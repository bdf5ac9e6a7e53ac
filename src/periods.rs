//! Period code classification and the sport registry.
//!
//! Unlike market codes, an unrecognized period is not an error: the program
//! mints new period codes ahead of client releases, and a selection with an
//! unlabeled period is still a valid bet. Callers get `None` and render
//! nothing.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

pub const SPORT_BASEBALL: u16 = 3;
pub const SPORT_BASKETBALL: u16 = 4;
pub const SPORT_BOXING: u16 = 6;
pub const SPORT_CRICKET: u16 = 8;
pub const SPORT_ESPORTS: u16 = 12;
pub const SPORT_AMERICAN_FOOTBALL: u16 = 15;
pub const SPORT_HOCKEY: u16 = 19;
pub const SPORT_MMA: u16 = 22;
pub const SPORT_RUGBY_UNION: u16 = 27;
pub const SPORT_SOCCER: u16 = 29;
pub const SPORT_TENNIS: u16 = 33;
pub const SPORT_COUNTER_STRIKE: u16 = 40;
pub const SPORT_DOTA: u16 = 41;
pub const SPORT_LEAGUE_OF_LEGENDS: u16 = 42;

static SPORTS: &[(u16, &str)] = &[
    (SPORT_BASEBALL, "Baseball"),
    (SPORT_BASKETBALL, "Basketball"),
    (SPORT_BOXING, "Boxing"),
    (SPORT_CRICKET, "Cricket"),
    (SPORT_ESPORTS, "Esports"),
    (SPORT_AMERICAN_FOOTBALL, "American Football"),
    (SPORT_HOCKEY, "Hockey"),
    (SPORT_MMA, "MMA"),
    (SPORT_RUGBY_UNION, "Rugby Union"),
    (SPORT_SOCCER, "Soccer"),
    (SPORT_TENNIS, "Tennis"),
    (SPORT_COUNTER_STRIKE, "Counter-Strike 2"),
    (SPORT_DOTA, "Dota 2"),
    (SPORT_LEAGUE_OF_LEGENDS, "League of Legends"),
];

static SPORT_NAMES: Lazy<HashMap<u16, &'static str>> =
    Lazy::new(|| SPORTS.iter().copied().collect());

pub fn sport_name(sport: u16) -> Option<&'static str> {
    SPORT_NAMES.get(&sport).copied()
}

pub fn sport_id(name: &str) -> Option<u16> {
    SPORTS
        .iter()
        .find(|(_, sport)| sport.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodDescriptor {
    pub long_name: String,
    pub short_name: String,
    pub abbreviation: String,
    pub description: String,
}

fn descriptor(
    long_name: &str,
    short_name: &str,
    abbreviation: &str,
    description: &str,
) -> PeriodDescriptor {
    PeriodDescriptor {
        long_name: long_name.to_string(),
        short_name: short_name.to_string(),
        abbreviation: abbreviation.to_string(),
        description: description.to_string(),
    }
}

/// Noun and letter for the sport's natural scoring interval.
fn interval_noun(sport: Option<u16>) -> (&'static str, &'static str) {
    match sport {
        Some(SPORT_BASEBALL) => ("Inning", "I"),
        Some(SPORT_TENNIS) => ("Set", "S"),
        Some(SPORT_HOCKEY) => ("Period", "P"),
        Some(SPORT_BASKETBALL) | Some(SPORT_AMERICAN_FOOTBALL) => ("Quarter", "Q"),
        Some(SPORT_ESPORTS) => ("Game", "G"),
        Some(SPORT_COUNTER_STRIKE) | Some(SPORT_DOTA) | Some(SPORT_LEAGUE_OF_LEGENDS) => {
            ("Map", "M")
        }
        _ => ("Interval", "I"),
    }
}

/// Map a period code to its labels. The sport refines interval naming and
/// gates the soccer and tennis extensions.
pub fn decode_period(code: u16, sport: Option<u16>) -> Option<PeriodDescriptor> {
    let soccer = sport == Some(SPORT_SOCCER);
    let tennis = sport == Some(SPORT_TENNIS);
    match code {
        0 => Some(descriptor("Full Match incl. Overtime", "Full Game", "FT", "")),
        1 => Some(descriptor(
            "Full Match",
            "Regulation",
            "REG",
            "Regulation time including injury time, not including overtime or extra time.",
        )),
        2 => Some(descriptor("First Half", "1st Half", "1H", "First Half")),
        3 => Some(descriptor("Second Half", "2nd Half", "2H", "Second Half")),
        10 => Some(descriptor(
            "To Win Outright",
            "Outright win",
            "OUT",
            "Win the competition",
        )),
        11..=19 => {
            let n = code - 10;
            let (noun, letter) = interval_noun(sport);
            Some(PeriodDescriptor {
                long_name: format!("{noun} {n}"),
                short_name: format!("{letter} {n}"),
                abbreviation: format!("{letter}{n}"),
                description: format!(
                    "Winner of {noun} {n} (only points scored in this period count)"
                ),
            })
        }
        21 if soccer => Some(descriptor(
            "Extra time",
            "ET",
            "ET",
            "Only goals scored in Extra Time count",
        )),
        21 => Some(descriptor(
            "Overtime",
            "OT",
            "OT",
            "Only points scored in Overtime count",
        )),
        22 if soccer => Some(descriptor(
            "First half of Extra time",
            "1H ET",
            "1HET",
            "Only goals scored in First Half of Extra Time count",
        )),
        23 if soccer => Some(descriptor(
            "Second half of Extra time",
            "2H ET",
            "2HET",
            "Only goals scored in Second Half of Extra Time count",
        )),
        24 if soccer => Some(descriptor(
            "Penalty Shootout",
            "Penalties",
            "PEN",
            "Winner of the penalty shootout",
        )),
        25 if soccer => Some(descriptor(
            "First 10 penalties",
            "10 Penalties",
            "PEN10",
            "Winner of the first 10 penalties",
        )),
        30 if tennis => Some(descriptor("Games", "Games", "G", "Games")),
        31..=39 if tennis => {
            let n = code - 30;
            Some(PeriodDescriptor {
                long_name: format!("Set {n} Games"),
                short_name: format!("Set {n} Games"),
                abbreviation: format!("S{n}G"),
                description: format!("Set {n} Games"),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed_codes() {
        assert_eq!(
            decode_period(0, None).unwrap().long_name,
            "Full Match incl. Overtime"
        );
        assert_eq!(decode_period(1, None).unwrap().short_name, "Regulation");
        assert_eq!(decode_period(2, None).unwrap().abbreviation, "1H");
        assert_eq!(decode_period(3, None).unwrap().abbreviation, "2H");
        assert_eq!(decode_period(10, None).unwrap().short_name, "Outright win");
    }

    #[test]
    fn test_intervals_take_the_sport_noun() {
        let inning = decode_period(11, Some(SPORT_BASEBALL)).unwrap();
        assert_eq!(inning.long_name, "Inning 1");
        assert_eq!(inning.abbreviation, "I1");

        let quarter = decode_period(14, Some(SPORT_BASKETBALL)).unwrap();
        assert_eq!(quarter.long_name, "Quarter 4");
        assert_eq!(quarter.short_name, "Q 4");

        let map = decode_period(12, Some(SPORT_COUNTER_STRIKE)).unwrap();
        assert_eq!(map.long_name, "Map 2");

        let generic = decode_period(13, Some(SPORT_CRICKET)).unwrap();
        assert_eq!(generic.long_name, "Interval 3");

        let no_sport = decode_period(19, None).unwrap();
        assert_eq!(no_sport.long_name, "Interval 9");
    }

    #[test]
    fn test_soccer_extensions() {
        assert_eq!(
            decode_period(21, Some(SPORT_SOCCER)).unwrap().long_name,
            "Extra time"
        );
        assert_eq!(
            decode_period(22, Some(SPORT_SOCCER)).unwrap().abbreviation,
            "1HET"
        );
        assert_eq!(
            decode_period(24, Some(SPORT_SOCCER)).unwrap().short_name,
            "Penalties"
        );
        assert_eq!(
            decode_period(25, Some(SPORT_SOCCER)).unwrap().long_name,
            "First 10 penalties"
        );
    }

    #[test]
    fn test_overtime_outside_soccer() {
        assert_eq!(
            decode_period(21, Some(SPORT_HOCKEY)).unwrap().long_name,
            "Overtime"
        );
        assert_eq!(decode_period(21, None).unwrap().abbreviation, "OT");
        // Extra-time halves only exist for soccer.
        assert_eq!(decode_period(22, Some(SPORT_HOCKEY)), None);
        assert_eq!(decode_period(24, Some(SPORT_BASKETBALL)), None);
    }

    #[test]
    fn test_tennis_games() {
        assert_eq!(
            decode_period(30, Some(SPORT_TENNIS)).unwrap().long_name,
            "Games"
        );
        let set_games = decode_period(32, Some(SPORT_TENNIS)).unwrap();
        assert_eq!(set_games.long_name, "Set 2 Games");
        assert_eq!(set_games.abbreviation, "S2G");
        assert_eq!(decode_period(30, Some(SPORT_SOCCER)), None);
        assert_eq!(decode_period(31, None), None);
    }

    #[test]
    fn test_unknown_codes_have_no_label() {
        for code in [4u16, 9, 20, 26, 40, 99, 1000] {
            assert_eq!(decode_period(code, Some(SPORT_SOCCER)), None, "code {code}");
        }
    }

    #[test]
    fn test_sport_registry() {
        assert_eq!(sport_name(SPORT_BASEBALL), Some("Baseball"));
        assert_eq!(sport_name(SPORT_DOTA), Some("Dota 2"));
        assert_eq!(sport_name(999), None);
        assert_eq!(sport_id("Tennis"), Some(SPORT_TENNIS));
        assert_eq!(sport_id("tennis"), Some(SPORT_TENNIS));
        assert_eq!(sport_id("Curling"), None);
    }
}
