//! Memory strategy catalog.

use serde::{Deserialize, Serialize};

/// Stable identifiers for the supported memory strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemoryKey {
    Simple,
    FileBased,
    VectorDb,
    Hybrid,
}

impl MemoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryKey::Simple => "simple",
            MemoryKey::FileBased => "fileBased",
            MemoryKey::VectorDb => "vectorDb",
            MemoryKey::Hybrid => "hybrid",
        }
    }

    /// All keys, in catalog order.
    pub fn all() -> &'static [MemoryKey] {
        &[
            MemoryKey::Simple,
            MemoryKey::FileBased,
            MemoryKey::VectorDb,
            MemoryKey::Hybrid,
        ]
    }
}

/// Short-term and long-term recall description for one memory strategy.
#[derive(Debug, Clone, Copy)]
pub struct MemoryEntry {
    pub key: MemoryKey,
    pub short_term: &'static str,
    pub long_term: &'static str,
    pub suitable: &'static [&'static str],
}

/// Look up the catalog entry for a memory key. Total over the closed key set.
pub fn entry_for(key: MemoryKey) -> &'static MemoryEntry {
    match key {
        MemoryKey::Simple => &SIMPLE,
        MemoryKey::FileBased => &FILE_BASED,
        MemoryKey::VectorDb => &VECTOR_DB,
        MemoryKey::Hybrid => &HYBRID,
    }
}

static SIMPLE: MemoryEntry = MemoryEntry {
    key: MemoryKey::Simple,
    short_term: "Context window only",
    long_term: "None",
    suitable: &["one-off conversations", "stateless tasks"],
};

static FILE_BASED: MemoryEntry = MemoryEntry {
    key: MemoryKey::FileBased,
    short_term: "Context + current session",
    long_term: "Markdown files in the workspace",
    suitable: &[
        "personal assistants",
        "long-running projects",
        "recommended with OpenClaw",
    ],
};

static VECTOR_DB: MemoryEntry = MemoryEntry {
    key: MemoryKey::VectorDb,
    short_term: "Context + recent items",
    long_term: "Vector database with semantic search",
    suitable: &[
        "large knowledge bases",
        "semantic retrieval",
        "recommended with LangChain",
    ],
};

static HYBRID: MemoryEntry = MemoryEntry {
    key: MemoryKey::Hybrid,
    short_term: "Context + working memory",
    long_term: "Vector DB + structured storage",
    suitable: &["complex agents", "enterprise applications"],
};
