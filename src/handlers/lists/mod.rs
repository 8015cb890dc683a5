// List-level CRUD for the parent documents the item handlers operate on.

mod create;
mod destroy;
mod index;
mod show;
mod update;

pub use create::create;
pub use destroy::destroy;
pub use index::index;
pub use show::show;
pub use update::update;
