use std::collections::HashMap;

/// First-seen rank of an interned string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringId(usize);

impl StringId {
    pub fn rank(self) -> usize {
        self.0
    }
}

/// Outcome of interning a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interned {
    pub id: StringId,
    /// True when the string was not present before this call
    pub fresh: bool,
}

/// String storage that ranks strings by first appearance
///
/// Used by the resolver to give repeated punctuation the code of its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct StringStorage {
    strings: Vec<String>,
    index: HashMap<String, StringId>,
}

impl StringStorage {
    /// Create a new empty string storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string
    /// Existing strings keep their original rank; new strings take the next rank
    pub fn intern(&mut self, s: &str) -> Interned {
        if let Some(&id) = self.index.get(s) {
            return Interned { id, fresh: false };
        }

        let id = StringId(self.strings.len());
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), id);
        Interned { id, fresh: true }
    }

    /// Get number of unique strings stored
    pub fn len(&self) -> usize {
        self.strings.len()
    }

}
