//! Ability-score generation methods.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ability::{AbilityScores, ABILITY_COUNT};
use crate::dice::{roll_4d6_drop_lowest, shuffle_with};
use crate::error::DomainError;

/// The standard array, before shuffling.
pub const STANDARD_ARRAY: [i32; ABILITY_COUNT] = [15, 14, 13, 12, 10, 8];

/// Point-buy budget and limits.
pub const POINT_BUY_BUDGET: i32 = 27;
const POINT_BUY_FLOOR: i32 = 8;
const POINT_BUY_CAP: i32 = 15;

/// How the six ability scores are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatMethod {
    /// Roll 4d6 and drop the lowest die, six times
    #[default]
    #[serde(rename = "4d6")]
    FourD6,
    /// Shuffle of [`STANDARD_ARRAY`]
    #[serde(rename = "standard")]
    Standard,
    /// Greedy 27-point buy, shuffled
    #[serde(rename = "pointbuy")]
    PointBuy,
}

impl StatMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FourD6 => "4d6",
            Self::Standard => "standard",
            Self::PointBuy => "pointbuy",
        }
    }

    /// Resolve a requested method, falling back to 4d6 for anything unknown.
    pub fn from_request(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Produce six scores with the injected generator.
    pub fn roll_scores(&self, roll: &mut impl FnMut(i32, i32) -> i32) -> AbilityScores {
        match self {
            Self::FourD6 => roll_4d6_scores(roll),
            Self::Standard => {
                let mut scores = STANDARD_ARRAY;
                shuffle_with(&mut scores, roll);
                AbilityScores::new(scores)
            }
            Self::PointBuy => {
                let mut scores = point_buy();
                shuffle_with(&mut scores, roll);
                AbilityScores::new(scores)
            }
        }
    }
}

impl fmt::Display for StatMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StatMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4d6" => Ok(Self::FourD6),
            "standard" => Ok(Self::Standard),
            "pointbuy" | "point-buy" | "point_buy" => Ok(Self::PointBuy),
            other => Err(DomainError::parse(format!("Unknown stat method: {other}"))),
        }
    }
}

/// Six independent 4d6-drop-lowest scores.
pub fn roll_4d6_scores(roll: &mut impl FnMut(i32, i32) -> i32) -> AbilityScores {
    let mut scores = [0; ABILITY_COUNT];
    for score in scores.iter_mut() {
        *score = roll_4d6_drop_lowest(roll);
    }
    AbilityScores::new(scores)
}

/// Cost of raising a score by one step to `target`.
fn point_buy_step_cost(target: i32) -> Option<i32> {
    match target {
        9 => Some(1),
        10 => Some(2),
        11 => Some(3),
        12 => Some(4),
        13 => Some(5),
        14 => Some(7),
        15 => Some(9),
        _ => None,
    }
}

/// Spend the budget by repeatedly raising the first lowest score.
///
/// Stops at the first step that is unaffordable or would exceed the cap, so the
/// result is deterministic (before shuffling).
fn point_buy() -> [i32; ABILITY_COUNT] {
    let mut scores = [POINT_BUY_FLOOR; ABILITY_COUNT];
    let mut points = POINT_BUY_BUDGET;

    while points > 0 {
        let Some((index, lowest)) = scores
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(i, score)| (score, i))
        else {
            break;
        };
        let target = lowest + 1;
        if target > POINT_BUY_CAP {
            break;
        }
        match point_buy_step_cost(target) {
            Some(cost) if cost <= points => {
                scores[index] = target;
                points -= cost;
            }
            _ => break,
        }
    }

    scores
}
