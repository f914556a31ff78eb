use crate::rules::{
    AgedBrieRule, BackstagePassRule, ConjuredRule, LegendaryRule, NormalRule, UpdateRule,
};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";
pub const CONJURED_PREFIX: &str = "Conjured";

/// How an item ages, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Normal,
    AgedBrie,
    BackstagePass,
    /// Sulfuras: never sold, never degrades.
    Legendary,
    Conjured,
}

impl ItemCategory {
    /// Classify an item name. Unknown names are [`ItemCategory::Normal`].
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemCategory::AgedBrie,
            SULFURAS => ItemCategory::Legendary,
            n if n.starts_with(BACKSTAGE_PASS_PREFIX) => ItemCategory::BackstagePass,
            n if n.starts_with(CONJURED_PREFIX) => ItemCategory::Conjured,
            _ => ItemCategory::Normal,
        }
    }

    /// The update rule applied to items of this category.
    pub fn rule(self) -> &'static dyn UpdateRule {
        match self {
            ItemCategory::Normal => &NormalRule,
            ItemCategory::AgedBrie => &AgedBrieRule,
            ItemCategory::BackstagePass => &BackstagePassRule,
            ItemCategory::Legendary => &LegendaryRule,
            ItemCategory::Conjured => &ConjuredRule,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Normal => "normal",
            ItemCategory::AgedBrie => "aged_brie",
            ItemCategory::BackstagePass => "backstage_pass",
            ItemCategory::Legendary => "legendary",
            ItemCategory::Conjured => "conjured",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
