pub mod entry;
pub mod habit;

pub use entry::{filter_kind, parse_entries, EntryKind, QaPair, RawEntry, ReflectionEntry};
pub use habit::Habit;
