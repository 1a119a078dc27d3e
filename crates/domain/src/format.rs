//! Human-readable formatting for sheets and text export.
//!
//! All functions here are pure and total.

use crate::equipment::EquipmentItem;
use crate::money::Coins;

/// Render an equipment entry.
///
/// Structured items render as `"<name> x<qty> (<type>) - <notes> contains: <a, b>"`,
/// leaving out every part whose field is absent; the quantity only appears when
/// it is greater than one.
pub fn equipment_to_string(item: &EquipmentItem) -> String {
    let item = match item {
        EquipmentItem::Plain(text) => return text.clone(),
        EquipmentItem::Structured(item) => item,
    };

    let mut out = item.name.clone();
    if let Some(qty) = item.qty.filter(|q| *q > 1) {
        out.push_str(&format!(" x{qty}"));
    }
    if let Some(item_type) = &item.item_type {
        out.push_str(&format!(" ({item_type})"));
    }
    if let Some(notes) = &item.notes {
        out.push_str(&format!(" - {notes}"));
    }
    if let Some(contents) = item.contents.as_ref().filter(|c| !c.is_empty()) {
        out.push_str(&format!(" contains: {}", contents.join(", ")));
    }
    out
}

/// Render a gold-piece amount.
///
/// The amount is rounded to two decimals; a value within 0.005 of a whole
/// number renders without decimals. Non-finite amounts are rendered as is.
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.round();
    if (rounded - whole).abs() < 0.005 {
        // `as i64` of -0.0 is 0, so "-0 gp" cannot appear.
        format!("{} gp", whole as i64)
    } else {
        format!("{rounded:.2} gp")
    }
}

/// Signed modifier text, e.g. "+2", "+0", "-1".
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// One line per non-zero denomination, e.g. `["25 gp", "3 sp"]`.
pub fn coin_lines(coins: &Coins) -> Vec<String> {
    coins
        .denominations()
        .map(|(amount, code)| format!("{amount} {code}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::StructuredItem;

    #[test]
    fn plain_equipment_is_unchanged() {
        let item = EquipmentItem::from("Explorer's Pack");
        assert_eq!(equipment_to_string(&item), "Explorer's Pack");
    }

    #[test]
    fn structured_equipment_with_qty_and_type() {
        let item = EquipmentItem::Structured(StructuredItem::new("Rope").with_qty(2).with_type("gear"));
        assert_eq!(equipment_to_string(&item), "Rope x2 (gear)");
    }

    #[test]
    fn quantity_of_one_is_hidden() {
        let item = EquipmentItem::Structured(StructuredItem::new("Shield").with_qty(1));
        assert_eq!(equipment_to_string(&item), "Shield");
    }

    #[test]
    fn structured_equipment_with_all_parts() {
        let item = EquipmentItem::Structured(
            StructuredItem::new("Backpack")
                .with_type("container")
                .with_notes("worn")
                .with_contents(vec!["Bedroll".into(), "Rations".into()]),
        );
        assert_eq!(
            equipment_to_string(&item),
            "Backpack (container) - worn contains: Bedroll, Rations"
        );
    }

    #[test]
    fn money_whole_numbers_drop_decimals() {
        assert_eq!(format_money(5.0), "5 gp");
        assert_eq!(format_money(5.004), "5 gp");
        assert_eq!(format_money(0.0), "0 gp");
        assert_eq!(format_money(4.999), "5 gp");
    }

    #[test]
    fn money_fractions_keep_two_decimals() {
        assert_eq!(format_money(5.25), "5.25 gp");
        assert_eq!(format_money(5.1), "5.10 gp");
        assert_eq!(format_money(12.57), "12.57 gp");
    }

    #[test]
    fn money_non_finite_passes_through() {
        assert_eq!(format_money(f64::NAN), "NaN");
        assert_eq!(format_money(f64::INFINITY), "inf");
    }

    #[test]
    fn modifier_sign() {
        assert_eq!(format_modifier(2), "+2");
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(-1), "-1");
    }

    #[test]
    fn coin_lines_in_denomination_order() {
        let coins = Coins { gp: 25, sp: 3, cp: 0 };
        assert_eq!(coin_lines(&coins), vec!["25 gp", "3 sp"]);
    }
}
