// Item subdocument lifecycle: list, create, update, destroy.
// Every mutation loads the parent list, applies the change in memory, and
// re-saves the whole document.

mod create;
mod destroy;
mod index;
mod update;

pub use create::create;
pub use destroy::destroy;
pub use index::index;
pub use update::update;
