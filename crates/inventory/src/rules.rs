//! Per-category daily update rules.
//!
//! Each rule advances a single item by one day: adjust quality for the day,
//! move the sell-by date, then apply the post-expiry adjustment against the
//! already-decremented `sell_in`.

use crate::item::{Item, MIN_QUALITY};

/// One day of aging for a category of items.
pub trait UpdateRule: Send + Sync {
    fn daily_update(&self, item: &mut Item);
}

/// Anything without a special rule: loses 1 per day, 2 once expired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalRule;

impl UpdateRule for NormalRule {
    fn daily_update(&self, item: &mut Item) {
        degrade(item, 1);
    }
}

/// Degrades at double the normal rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConjuredRule;

impl UpdateRule for ConjuredRule {
    fn daily_update(&self, item: &mut Item) {
        degrade(item, 2);
    }
}

/// Gains 1 per day, 2 once expired.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgedBrieRule;

impl UpdateRule for AgedBrieRule {
    fn daily_update(&self, item: &mut Item) {
        item.raise_quality(1);
        item.sell_in = item.sell_in.saturating_sub(1);
        if item.is_expired() {
            item.raise_quality(1);
        }
    }
}

/// Gains value as the concert approaches, worthless afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackstagePassRule;

impl UpdateRule for BackstagePassRule {
    fn daily_update(&self, item: &mut Item) {
        item.raise_quality(1);
        if item.sell_in < 11 {
            item.raise_quality(1);
        }
        if item.sell_in < 6 {
            item.raise_quality(1);
        }
        item.sell_in = item.sell_in.saturating_sub(1);
        if item.is_expired() {
            item.quality = MIN_QUALITY;
        }
    }
}

/// Sulfuras never changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendaryRule;

impl UpdateRule for LegendaryRule {
    fn daily_update(&self, _item: &mut Item) {}
}

fn degrade(item: &mut Item, rate: i32) {
    item.lower_quality(rate);
    item.sell_in = item.sell_in.saturating_sub(1);
    if item.is_expired() {
        item.lower_quality(rate);
    }
}
