//! Static knowledge base: pattern, framework, and memory strategy catalogs.
//! Hand-authored, read-only data; initialized once and never mutated.

pub mod framework;
pub mod memory;
pub mod pattern;

pub use framework::{FrameworkEntry, FrameworkKey};
pub use memory::{MemoryEntry, MemoryKey};
pub use pattern::{PatternEntry, PatternKey};

/// All interaction pattern entries, in catalog order.
pub fn patterns() -> impl Iterator<Item = &'static PatternEntry> {
    PatternKey::all().iter().map(|k| pattern::entry_for(*k))
}

/// All host framework entries, in catalog order.
pub fn frameworks() -> impl Iterator<Item = &'static FrameworkEntry> {
    FrameworkKey::all().iter().map(|k| framework::entry_for(*k))
}

/// All memory strategy entries, in catalog order.
pub fn memory_strategies() -> impl Iterator<Item = &'static MemoryEntry> {
    MemoryKey::all().iter().map(|k| memory::entry_for(*k))
}
