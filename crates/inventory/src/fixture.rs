//! Text fixture: a known inventory and a plain-text rendering of how it ages.
//!
//! The rendering is stable so it can serve as a golden master when the update
//! rules are refactored.

use core::fmt::Write as _;

use gildedrose_core::{DomainError, DomainResult};

use crate::gilded_rose::GildedRose;
use crate::item::Item;

/// The standard inventory used by the text fixture.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse a JSON array of items (`[{"name": .., "sellIn": .., "quality": ..}]`).
pub fn load_items(json: &str) -> DomainResult<Vec<Item>> {
    let items: Vec<Item> =
        serde_json::from_str(json).map_err(|e| DomainError::invalid_fixture(e.to_string()))?;

    if let Some(pos) = items.iter().position(|i| i.name.trim().is_empty()) {
        return Err(DomainError::validation(format!(
            "item {pos}: name cannot be empty"
        )));
    }

    tracing::debug!(items = items.len(), "fixture loaded");
    Ok(items)
}

/// Render one day of the inventory.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "-------- day {day} --------");
    let _ = writeln!(out, "name, sellIn, quality");
    for item in items {
        let _ = writeln!(out, "{item}");
    }
    out.push('\n');
    out
}

/// Render `days` consecutive days, starting with the untouched inventory as day 0.
pub fn simulate(items: Vec<Item>, days: u32) -> String {
    let mut shop = GildedRose::new(items);
    let mut out = String::new();
    for day in 0..days {
        out.push_str(&render_day(day, shop.items()));
        shop.update_quality();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fixture_has_every_category() {
        use crate::category::ItemCategory;

        let categories: Vec<ItemCategory> =
            default_items().iter().map(Item::category).collect();
        for expected in [
            ItemCategory::Normal,
            ItemCategory::AgedBrie,
            ItemCategory::BackstagePass,
            ItemCategory::Legendary,
            ItemCategory::Conjured,
        ] {
            assert!(categories.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn load_items_parses_camel_case_json() {
        let items = load_items(
            r#"[{"name": "Aged Brie", "sellIn": 2, "quality": 0},
                {"name": "foo", "sellIn": -1, "quality": 3}]"#,
        )
        .unwrap();
        assert_eq!(items, vec![Item::new("Aged Brie", 2, 0), Item::new("foo", -1, 3)]);
    }

    #[test]
    fn load_items_rejects_malformed_json() {
        let err = load_items(r#"{"name": "foo"}"#).unwrap_err();
        match err {
            DomainError::InvalidFixture(_) => {}
            _ => panic!("Expected InvalidFixture error"),
        }
    }

    #[test]
    fn load_items_rejects_blank_name() {
        let err = load_items(r#"[{"name": "  ", "sellIn": 1, "quality": 1}]"#).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("item 0") => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn load_items_accepts_empty_array() {
        assert!(load_items("[]").unwrap().is_empty());
    }

    #[test]
    fn render_day_layout() {
        let text = render_day(3, &[Item::new("foo", 1, 2)]);
        assert_eq!(text, "-------- day 3 --------\nname, sellIn, quality\nfoo, 1, 2\n\n");
    }

    #[test]
    fn simulate_zero_days_renders_nothing() {
        assert_eq!(simulate(default_items(), 0), "");
    }

    #[test]
    fn simulate_one_day_renders_initial_state() {
        let items = vec![Item::new("foo", 1, 2)];
        assert_eq!(simulate(items.clone(), 1), render_day(0, &items));
    }
}
