//! Inventory domain module for the Gilded Rose.
//!
//! This crate contains the daily aging rules for the inn's stock, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod fixture;
pub mod gilded_rose;
pub mod item;
pub mod rules;

pub use category::ItemCategory;
pub use gilded_rose::{GildedRose, update_quality};
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use rules::UpdateRule;
