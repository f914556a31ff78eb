use crate::item::Item;

/// Advance every item by one day, in input order.
///
/// Infallible: unknown names age like normal items and out-of-range values
/// are not validated.
pub fn update_quality(items: &mut [Item]) {
    for item in items.iter_mut() {
        let category = item.category();
        let (sell_in, quality) = (item.sell_in, item.quality);

        category.rule().daily_update(item);

        tracing::trace!(
            item = %item.name,
            category = %category,
            sell_in_before = sell_in,
            sell_in = item.sell_in,
            quality_before = quality,
            quality = item.quality,
            "item aged"
        );
    }
}

/// The inn's inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    days_elapsed: u32,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            days_elapsed: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of times [`GildedRose::update_quality`] has run.
    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    /// Advance the whole inventory by one day and return the updated items.
    pub fn update_quality(&mut self) -> &[Item] {
        update_quality(&mut self.items);
        self.days_elapsed += 1;

        tracing::debug!(
            day = self.days_elapsed,
            items = self.items.len(),
            "inventory updated"
        );

        &self.items
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
