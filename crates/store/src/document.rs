use std::sync::Arc;

use userd_core::{Role, User};

/// A record that can live in a document collection.
pub trait Document: Clone + Send + Sync + 'static {
    /// Opaque string identifier the collection is keyed by.
    fn id(&self) -> &str;
}

impl Document for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Document for Role {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// One collection of documents keyed by string id.
///
/// `find_by` serves unique-field lookups (username, email, role name); the
/// store itself enforces no uniqueness below the application layer, so a
/// predicate returns the first match in iteration order.
pub trait DocumentStore<D: Document>: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<D>;
    fn find_by(&self, pred: &dyn Fn(&D) -> bool) -> Option<D>;
    fn find_all(&self) -> Vec<D>;
    /// Insert or overwrite the document under its own id.
    fn save(&self, doc: D);
    /// Remove the document; returns whether anything was deleted.
    fn delete(&self, id: &str) -> bool;
}

impl<D, S> DocumentStore<D> for Arc<S>
where
    D: Document,
    S: DocumentStore<D> + ?Sized,
{
    fn find_by_id(&self, id: &str) -> Option<D> {
        (**self).find_by_id(id)
    }

    fn find_by(&self, pred: &dyn Fn(&D) -> bool) -> Option<D> {
        (**self).find_by(pred)
    }

    fn find_all(&self) -> Vec<D> {
        (**self).find_all()
    }

    fn save(&self, doc: D) {
        (**self).save(doc)
    }

    fn delete(&self, id: &str) -> bool {
        (**self).delete(id)
    }
}
