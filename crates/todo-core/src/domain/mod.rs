//! Domain Layer
//!
//! List entries and the rules on their text. No storage concerns here.

mod item;

pub use item::{validate_text, Item, ItemId};
