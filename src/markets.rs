//! Market code classification.
//!
//! A market code is a dense `u16`: contiguous numeric bands select the market
//! family and the offset inside the band carries the parameter (a handicap or
//! total line at half-point granularity, a decomposed digit pattern, or a
//! player-prop line). The checks below run in band order with early return;
//! several bands deliberately special-case their neighbours (the passing-yard
//! overflow band), so this must stay an explicit range ladder rather than a
//! table lookup.

use serde::Serialize;
use thiserror::Error;

use crate::player_props::{prop_for_band, PASSING_YARDS_BAND, PASSING_YARDS_OVERFLOW_BAND};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("market code {0} is outside every known range")]
    OutOfDomain(u16),
    #[error("market code {code}: {reason}")]
    InvalidDigitPattern { code: u16, reason: &'static str },
}

/// Market family, tagged with the short code the display layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketKind {
    Moneyline,
    ThreeWay,
    BothTeamsToScore,
    MultiOutcome,
    Handicap,
    BttsOverUnder,
    HalfTimeFullTime,
    FullTimeBtts,
    OverUnder,
    TeamOverUnder,
    WinnerOverUnder,
    CorrectScore,
    PlayerProp,
}

impl MarketKind {
    pub fn tag(self) -> &'static str {
        match self {
            MarketKind::Moneyline => "ML",
            MarketKind::ThreeWay => "1X2",
            MarketKind::BothTeamsToScore => "BTTS",
            MarketKind::MultiOutcome => "MSO",
            MarketKind::Handicap => "AH",
            MarketKind::BttsOverUnder => "BTTS+OU",
            MarketKind::HalfTimeFullTime => "HTFT",
            MarketKind::FullTimeBtts => "FT+BTTS",
            MarketKind::OverUnder => "OU",
            MarketKind::TeamOverUnder => "TOU",
            MarketKind::WinnerOverUnder => "FT+OU",
            MarketKind::CorrectScore => "CS",
            MarketKind::PlayerProp => "PP",
        }
    }

    /// Title of the market group the family is listed under.
    pub fn group(self) -> &'static str {
        match self {
            MarketKind::Moneyline | MarketKind::ThreeWay => "Main",
            MarketKind::BothTeamsToScore => "Goals",
            MarketKind::MultiOutcome => "Outcomes",
            MarketKind::Handicap => "Handicaps",
            MarketKind::BttsOverUnder
            | MarketKind::HalfTimeFullTime
            | MarketKind::FullTimeBtts
            | MarketKind::WinnerOverUnder => "Combos",
            MarketKind::OverUnder | MarketKind::TeamOverUnder => "Totals",
            MarketKind::CorrectScore => "Correct Score",
            MarketKind::PlayerProp => "Player Props",
        }
    }
}

/// How a front end should render the market's price widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum DisplayKind {
    /// Two plain sides (yes/no, home/away).
    Binary = 0,
    /// Two sides around a numeric line.
    Line = 1,
    /// One selection against the field.
    Outcome = 2,
    /// A single composite outcome with no side pair.
    Composite = 3,
}

impl DisplayKind {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The two tradable sides, or a marker for markets that have only one
/// composite outcome (correct score, combination markets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MarketSides {
    Pair(String, String),
    Composite,
}

impl MarketSides {
    /// Label for the chosen side; `None` for composite markets.
    pub fn label(&self, side: bool) -> Option<&str> {
        match self {
            MarketSides::Pair(first, second) => Some(if side { first } else { second }),
            MarketSides::Composite => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MarketValue {
    /// Numeric line at half-point granularity.
    Line(f64),
    /// Decomposed pattern such as `Home/Draw` or `2-1`.
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketDescriptor {
    pub name: String,
    pub kind: MarketKind,
    pub description: String,
    pub group: &'static str,
    pub sides: MarketSides,
    pub display: DisplayKind,
    pub value: Option<MarketValue>,
    pub detail: Option<&'static str>,
}

fn pair(first: impl Into<String>, second: impl Into<String>) -> MarketSides {
    MarketSides::Pair(first.into(), second.into())
}

/// 1 = home, 2 = draw, 3 = away.
fn winner_label(digit: u16, home: &str, away: &str) -> Option<String> {
    match digit {
        1 => Some(home.to_string()),
        2 => Some("Draw".to_string()),
        3 => Some(away.to_string()),
        _ => None,
    }
}

fn half_line(code: u16, band: u16) -> f64 {
    f64::from(code - band) / 2.0
}

/// Classify a market code into its family and derive the human descriptor.
/// `home` and `away` name the event's competitors and feed the side labels.
pub fn decode_market(code: u16, home: &str, away: &str) -> Result<MarketDescriptor, MarketError> {
    match code {
        0 => Ok(MarketDescriptor {
            name: "Moneyline".to_string(),
            kind: MarketKind::Moneyline,
            description: "Moneyline".to_string(),
            group: MarketKind::Moneyline.group(),
            sides: pair(home, away),
            display: DisplayKind::Binary,
            value: None,
            detail: None,
        }),
        1..=3 => {
            let (name, description, sides) = match code {
                1 => (
                    format!("{home} Win"),
                    "Home Win in Regular Time",
                    pair(format!("{home} win"), format!("{away}/Draw")),
                ),
                2 => (
                    "Draw".to_string(),
                    "Draw in Regular Time",
                    pair("Draw", format!("{home}/{away}")),
                ),
                _ => (
                    format!("{away} Win"),
                    "Away Win in Regular Time",
                    pair(format!("{away} win"), format!("{home}/Draw")),
                ),
            };
            Ok(MarketDescriptor {
                name,
                kind: MarketKind::ThreeWay,
                description: description.to_string(),
                group: MarketKind::ThreeWay.group(),
                sides,
                display: DisplayKind::Outcome,
                value: None,
                detail: None,
            })
        }
        4 => Ok(MarketDescriptor {
            name: "Both Teams To Score".to_string(),
            kind: MarketKind::BothTeamsToScore,
            description: "Both Teams To Score".to_string(),
            group: MarketKind::BothTeamsToScore.group(),
            sides: pair("Yes", "No"),
            display: DisplayKind::Binary,
            value: None,
            detail: None,
        }),
        10..=50 => {
            let outcome = code - 10;
            Ok(MarketDescriptor {
                name: format!("Outcome {outcome}"),
                kind: MarketKind::MultiOutcome,
                description: "Multi-Selection Outcome".to_string(),
                group: MarketKind::MultiOutcome.group(),
                sides: pair("Win", "Not win"),
                display: DisplayKind::Outcome,
                value: Some(MarketValue::Line(f64::from(outcome))),
                detail: None,
            })
        }
        100..=299 => {
            // Codes below 200 are home-negative lines, above are positive.
            let line = f64::from(i32::from(code) - 200) / 2.0;
            Ok(MarketDescriptor {
                name: format!("Handicap {line}"),
                kind: MarketKind::Handicap,
                description: "Handicap".to_string(),
                group: MarketKind::Handicap.group(),
                sides: pair(home, away),
                display: DisplayKind::Line,
                value: Some(MarketValue::Line(line)),
                detail: None,
            })
        }
        400..=599 => {
            let (band, btts, over_under) = match code {
                400..=449 => (400, "Yes", "Over"),
                450..=499 => (450, "Yes", "Under"),
                500..=549 => (500, "No", "Over"),
                _ => (550, "No", "Under"),
            };
            let line = half_line(code, band);
            Ok(MarketDescriptor {
                name: format!("Both Teams To Score ({btts}) & {over_under} {line}"),
                kind: MarketKind::BttsOverUnder,
                description: format!("Both Teams To Score ({btts}) & Over/Under"),
                group: MarketKind::BttsOverUnder.group(),
                sides: MarketSides::Composite,
                display: DisplayKind::Composite,
                value: Some(MarketValue::Line(line)),
                detail: None,
            })
        }
        600..=649 => {
            let half_time = winner_label((code / 10) % 10, home, away).ok_or(
                MarketError::InvalidDigitPattern {
                    code,
                    reason: "half-time digit must be 1, 2, or 3 (home, draw, away)",
                },
            )?;
            let full_time = winner_label(code % 10, home, away).ok_or(
                MarketError::InvalidDigitPattern {
                    code,
                    reason: "full-time digit must be 1, 2, or 3 (home, draw, away)",
                },
            )?;
            let label = format!("{half_time}/{full_time}");
            Ok(MarketDescriptor {
                name: label.clone(),
                kind: MarketKind::HalfTimeFullTime,
                description: "Half Time/Full Time".to_string(),
                group: MarketKind::HalfTimeFullTime.group(),
                sides: MarketSides::Composite,
                display: DisplayKind::Composite,
                value: Some(MarketValue::Label(label)),
                detail: None,
            })
        }
        650..=699 => {
            // Winner digit runs 5..=7 in this band, offset by four.
            let winner = winner_label((code / 10) % 10 - 4, home, away).ok_or(
                MarketError::InvalidDigitPattern {
                    code,
                    reason: "winner digit must decode to home, draw, or away",
                },
            )?;
            let btts = match code % 10 {
                0 => "Yes",
                1 => "No",
                _ => {
                    return Err(MarketError::InvalidDigitPattern {
                        code,
                        reason: "both-teams-to-score digit must be 0 or 1",
                    })
                }
            };
            Ok(MarketDescriptor {
                name: format!("{winner} & {btts}"),
                kind: MarketKind::FullTimeBtts,
                description: "Full Time & Both Teams To Score".to_string(),
                group: MarketKind::FullTimeBtts.group(),
                sides: MarketSides::Composite,
                display: DisplayKind::Composite,
                value: Some(MarketValue::Label(format!("{winner}/{btts}"))),
                detail: None,
            })
        }
        1000..=1999 => {
            let line = half_line(code, 1000);
            Ok(MarketDescriptor {
                name: format!("Over/Under {line}"),
                kind: MarketKind::OverUnder,
                description: "Over/Under".to_string(),
                group: MarketKind::OverUnder.group(),
                sides: pair("Over", "Under"),
                display: DisplayKind::Line,
                value: Some(MarketValue::Line(line)),
                detail: None,
            })
        }
        2000..=3999 => {
            let (band, team, description) = if code < 3000 {
                (2000, home, "Home over/under")
            } else {
                (3000, away, "Away over/under")
            };
            let line = half_line(code, band);
            Ok(MarketDescriptor {
                name: format!("{team} over/under {line}"),
                kind: MarketKind::TeamOverUnder,
                description: description.to_string(),
                group: MarketKind::TeamOverUnder.group(),
                sides: pair("Over", "Under"),
                display: DisplayKind::Line,
                value: Some(MarketValue::Line(line)),
                detail: None,
            })
        }
        5000..=7999 => {
            let (band, winner, description) = match code {
                5000..=5499 => (5000, format!("{home} win"), "Home win & over/under"),
                5500..=5999 => (5500, format!("{home} win"), "Home win & over/under"),
                6000..=6499 => (6000, "Draw".to_string(), "Draw & over/under"),
                6500..=6999 => (6500, "Draw".to_string(), "Draw & over/under"),
                7000..=7499 => (7000, format!("{away} win"), "Away win & over/under"),
                _ => (7500, format!("{away} win"), "Away win & over/under"),
            };
            let over_under = if (code - 5000) % 1000 < 500 {
                "over"
            } else {
                "under"
            };
            let line = half_line(code, band);
            Ok(MarketDescriptor {
                name: format!("{winner} & {over_under} {line}"),
                kind: MarketKind::WinnerOverUnder,
                description: description.to_string(),
                group: MarketKind::WinnerOverUnder.group(),
                sides: MarketSides::Composite,
                display: DisplayKind::Composite,
                value: Some(MarketValue::Line(line)),
                detail: None,
            })
        }
        10000..=10999 => {
            let home_score = (code / 100) % 100;
            let away_score = code % 100;
            let label = format!("{home_score}-{away_score}");
            Ok(MarketDescriptor {
                name: format!("Correct Score {label}"),
                kind: MarketKind::CorrectScore,
                description: "Correct Score".to_string(),
                group: MarketKind::CorrectScore.group(),
                sides: MarketSides::Composite,
                display: DisplayKind::Composite,
                value: Some(MarketValue::Label(label)),
                detail: None,
            })
        }
        11000..=u16::MAX => {
            let mut band = code - code % 500;
            if band == PASSING_YARDS_OVERFLOW_BAND {
                band = PASSING_YARDS_BAND;
            }
            let prop = prop_for_band(band).ok_or(MarketError::OutOfDomain(code))?;
            let line = half_line(code, band);
            Ok(MarketDescriptor {
                name: format!("{} Over/Under {line}", prop.name),
                kind: MarketKind::PlayerProp,
                description: format!("Player Prop: {}", prop.name),
                group: MarketKind::PlayerProp.group(),
                sides: pair("Over", "Under"),
                display: DisplayKind::Line,
                value: Some(MarketValue::Line(line)),
                detail: prop.detail,
            })
        }
        _ => Err(MarketError::OutOfDomain(code)),
    }
}
