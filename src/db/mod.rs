pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod stats;
pub mod store;

pub use memory::MemorySheetStore;
pub use store::{SheetStore, SqliteSheetStore};
