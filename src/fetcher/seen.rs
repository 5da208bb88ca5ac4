use crate::utils::images::ContentHash;
use std::collections::HashSet;

/// Hashes of images already written during the current run.
///
/// Insert-only. A hash is present exactly when its content has been saved.
#[derive(Debug, Default, Clone)]
pub struct SeenHashes {
    hashes: HashSet<ContentHash>,
}

impl SeenHashes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hash: &ContentHash) -> bool {
        self.hashes.contains(hash)
    }

    /// Returns false if the hash was already recorded
    pub fn insert(&mut self, hash: ContentHash) -> bool {
        self.hashes.insert(hash)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }
}
