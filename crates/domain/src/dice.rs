//! Dice formulas and rolls.
//!
//! Randomness is injected as a closure `roll(min, max)` returning an integer in
//! the inclusive range, so the domain stays free of an RNG dependency and tests
//! can script every die.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dice formula like "4d6" or "1d20+5"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Size of each die (Y in XdY)
    pub die_size: u8,
    /// Modifier to add/subtract after rolling
    pub modifier: i32,
}

impl DiceFormula {
    /// The ability-score roll: four six-sided dice.
    pub const FOUR_D6: DiceFormula = DiceFormula {
        dice_count: 4,
        die_size: 6,
        modifier: 0,
    };

    /// Roll every die through the injected generator.
    pub fn roll_with(&self, roll: &mut impl FnMut(i32, i32) -> i32) -> DiceRollResult {
        let individual_rolls: Vec<i32> = (0..self.dice_count)
            .map(|_| roll(1, i32::from(self.die_size)))
            .collect();
        let dice_total: i32 = individual_rolls.iter().sum();

        DiceRollResult {
            formula: *self,
            individual_rolls,
            dropped: Vec::new(),
            dice_total,
            total: dice_total + self.modifier,
        }
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == 0 {
            write!(f, "{}d{}", self.dice_count, self.die_size)
        } else if self.modifier > 0 {
            write!(f, "{}d{}+{}", self.dice_count, self.die_size, self.modifier)
        } else {
            write!(f, "{}d{}{}", self.dice_count, self.die_size, self.modifier)
        }
    }
}

/// Result of rolling dice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResult {
    pub formula: DiceFormula,
    /// Dice that count toward the total
    pub individual_rolls: Vec<i32>,
    /// Dice discarded by [`DiceRollResult::keep_highest`]
    pub dropped: Vec<i32>,
    /// Sum of kept dice before modifier
    pub dice_total: i32,
    /// Final total (dice_total + modifier)
    pub total: i32,
}

impl DiceRollResult {
    /// Keep only the `count` highest dice; the rest move to `dropped`.
    pub fn keep_highest(mut self, count: usize) -> Self {
        let mut sorted = self.individual_rolls.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let cut = count.min(sorted.len());
        let dropped = sorted.split_off(cut);

        self.dice_total = sorted.iter().sum();
        self.total = self.dice_total + self.formula.modifier;
        self.individual_rolls = sorted;
        self.dropped.extend(dropped);
        self
    }
}

/// Roll 4d6 and sum the three highest dice.
pub fn roll_4d6_drop_lowest(roll: &mut impl FnMut(i32, i32) -> i32) -> i32 {
    DiceFormula::FOUR_D6.roll_with(roll).keep_highest(3).total
}

/// Shuffle a slice in place (Fisher-Yates) using the injected generator.
pub fn shuffle_with<T>(items: &mut [T], roll: &mut impl FnMut(i32, i32) -> i32) {
    for i in (1..items.len()).rev() {
        let upper = i32::try_from(i).unwrap_or(i32::MAX);
        let j = usize::try_from(roll(0, upper)).unwrap_or(0).min(i);
        items.swap(i, j);
    }
}

/// Pick one element from a non-empty slice.
pub fn choose_with<'a, T>(items: &'a [T], roll: &mut impl FnMut(i32, i32) -> i32) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let upper = i32::try_from(items.len() - 1).unwrap_or(i32::MAX);
    let index = usize::try_from(roll(0, upper)).unwrap_or(0).min(items.len() - 1);
    items.get(index)
}

/// Pick up to `count` distinct elements, in draw order.
pub fn sample_with<T: Clone>(
    items: &[T],
    count: usize,
    roll: &mut impl FnMut(i32, i32) -> i32,
) -> Vec<T> {
    let mut pool: Vec<T> = items.to_vec();
    shuffle_with(&mut pool, roll);
    pool.truncate(count);
    pool
}

#[cfg(test)]
pub(crate) mod testing {
    /// A scripted generator that replays `values` in order and then repeats the last.
    pub fn scripted(values: Vec<i32>) -> impl FnMut(i32, i32) -> i32 {
        let mut index = 0;
        move |min, max| {
            let value = values
                .get(index)
                .or_else(|| values.last())
                .copied()
                .unwrap_or(min);
            index += 1;
            value.clamp(min, max)
        }
    }

    /// A generator that always returns the lower bound.
    pub fn lowest() -> impl FnMut(i32, i32) -> i32 {
        |min, _max| min
    }
}
