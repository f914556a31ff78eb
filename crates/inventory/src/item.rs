use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;

/// Upper bound for the quality of any non-legendary item.
pub const MAX_QUALITY: i32 = 50;

/// Lower bound for the quality of any item.
pub const MIN_QUALITY: i32 = 0;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// An inventory item tracked by the inn.
///
/// Fields are public: the updater mutates them in place, and callers build
/// items directly with whatever starting values they have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Days left to sell the item (or until the event happens).
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> ItemCategory {
        ItemCategory::of(&self.name)
    }

    /// The sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Raise quality by `amount`, one step at a time, never past [`MAX_QUALITY`].
    ///
    /// A quality already above the cap is left untouched.
    pub(crate) fn raise_quality(&mut self, amount: i32) {
        for _ in 0..amount {
            if self.quality < MAX_QUALITY {
                self.quality += 1;
            }
        }
    }

    /// Lower quality by `amount`, one step at a time, never below [`MIN_QUALITY`].
    pub(crate) fn lower_quality(&mut self, amount: i32) {
        for _ in 0..amount {
            if self.quality > MIN_QUALITY {
                self.quality -= 1;
            }
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
