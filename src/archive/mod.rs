pub mod entry;
pub mod read;

pub use entry::ArchiveEntry;
pub use read::read_entries;
