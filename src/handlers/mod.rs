pub mod items;
pub mod lists;
