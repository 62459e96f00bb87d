use std::collections::HashMap;
use std::sync::RwLock;

use crate::document::{Document, DocumentStore};

/// In-memory document collection for dev/test.
///
/// Iteration order (and therefore `find_all` order) is the map's order and
/// carries no contractual meaning.
#[derive(Debug)]
pub struct InMemoryStore<D> {
    inner: RwLock<HashMap<String, D>>,
}

impl<D> InMemoryStore<D> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<D> Default for InMemoryStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> DocumentStore<D> for InMemoryStore<D> {
    fn find_by_id(&self, id: &str) -> Option<D> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn find_by(&self, pred: &dyn Fn(&D) -> bool) -> Option<D> {
        let map = self.inner.read().ok()?;
        map.values().find(|d| pred(d)).cloned()
    }

    fn find_all(&self) -> Vec<D> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values().cloned().collect()
    }

    fn save(&self, doc: D) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(doc.id().to_string(), doc);
        }
    }

    fn delete(&self, id: &str) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        }
    }
}
