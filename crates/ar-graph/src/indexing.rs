//! Stable key interning.
//!
//! Maps equipment keys (the string ids used in project files) to contiguous
//! vertex IDs (0..N).

use std::collections::HashMap;

use ar_core::VertexId;

/// Key index providing stable, contiguous vertex IDs for string keys.
///
/// IDs are handed out in first-seen order, so interning the declared nodes
/// first keeps their vertex order equal to the project's node order.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    lookup: HashMap<String, VertexId>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the ID for `key`, allocating the next one if it's new.
    pub fn intern(&mut self, key: &str) -> VertexId {
        if let Some(&id) = self.lookup.get(key) {
            return id;
        }
        let id = VertexId::from_index(self.lookup.len() as u32);
        self.lookup.insert(key.to_string(), id);
        id
    }

    /// Number of interned keys.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Look up the ID of a key without interning it.
    pub fn get(&self, key: &str) -> Option<VertexId> {
        self.lookup.get(key).copied()
    }

}
