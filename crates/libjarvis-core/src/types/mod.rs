pub mod context;

pub use context::{FileRecord, HistoryEntry, ProjectContext};
