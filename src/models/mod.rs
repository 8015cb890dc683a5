pub mod item;
pub mod list;

pub use item::{Item, ItemDraft, ItemPatch};
pub use list::{List, ListDraft, ListPatch};
