//! Coins and money totals, valued in gold pieces.

use serde::{Deserialize, Serialize};

/// Coin purse by denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coins {
    #[serde(default)]
    pub gp: u32,
    #[serde(default)]
    pub sp: u32,
    #[serde(default)]
    pub cp: u32,
}

impl Coins {
    /// Total value in gold pieces (10 sp or 100 cp per gp).
    pub fn total_gp(&self) -> f64 {
        f64::from(self.gp) + f64::from(self.sp) / 10.0 + f64::from(self.cp) / 100.0
    }

    /// Non-zero denominations in gp, sp, cp order.
    pub fn denominations(&self) -> impl Iterator<Item = (u32, &'static str)> {
        [(self.gp, "gp"), (self.sp, "sp"), (self.cp, "cp")]
            .into_iter()
            .filter(|(amount, _)| *amount > 0)
    }
}

/// The generator's `money` field: a number of gold pieces or a text like "25 gp".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Money {
    Amount(f64),
    Text(String),
}

impl Money {
    /// Value in gold pieces when it can be read.
    pub fn gp_value(&self) -> Option<f64> {
        match self {
            Self::Amount(amount) => amount.is_finite().then_some(*amount),
            Self::Text(text) => parse_gp_text(text),
        }
    }
}

/// Parse "25 gp", "25gp" or "25" into gold pieces.
fn parse_gp_text(text: &str) -> Option<f64> {
    let lower = text.trim().to_ascii_lowercase();
    let number = lower.strip_suffix("gp").unwrap_or(&lower).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_gp_converts_denominations() {
        let coins = Coins {
            gp: 12,
            sp: 5,
            cp: 7,
        };
        assert!((coins.total_gp() - 12.57).abs() < 1e-9);
    }

    #[test]
    fn denominations_skip_zero() {
        let coins = Coins { gp: 3, sp: 0, cp: 9 };
        let listed: Vec<_> = coins.denominations().collect();
        assert_eq!(listed, vec![(3, "gp"), (9, "cp")]);
    }

    #[test]
    fn money_text_parses() {
        assert_eq!(Money::Text("25 gp".into()).gp_value(), Some(25.0));
        assert_eq!(Money::Text("7GP".into()).gp_value(), Some(7.0));
        assert_eq!(Money::Text("10".into()).gp_value(), Some(10.0));
        assert_eq!(Money::Text("a fortune".into()).gp_value(), None);
        assert_eq!(Money::Amount(2.5).gp_value(), Some(2.5));
    }
}
