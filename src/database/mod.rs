pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryListStore;
pub use postgres::PgListStore;
pub use store::{ListStore, StoreError};
