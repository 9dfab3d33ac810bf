//! Per-resolver resolved-element cache

use parking_lot::Mutex;
use uigrip_core_types::ElementHandle;

/// Holds at most one cached single handle and one cached handle list.
///
/// Write discipline is set-once, read-thereafter: the first stored value
/// sticks for the resolver's lifetime and is never re-validated against the
/// live tree. Deliberate staleness trade-off; callers that cannot accept it
/// disable caching in the locator config.
#[derive(Debug, Default)]
pub struct ResolvedElementCache {
    single: Mutex<Option<ElementHandle>>,
    list: Mutex<Option<Vec<ElementHandle>>>,
}

impl ResolvedElementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached_single(&self) -> Option<ElementHandle> {
        self.single.lock().clone()
    }

    pub fn cached_list(&self) -> Option<Vec<ElementHandle>> {
        self.list.lock().clone()
    }

    /// Store a single handle. First write wins.
    pub fn store_single(&self, handle: &ElementHandle) {
        let mut slot = self.single.lock();
        if slot.is_none() {
            *slot = Some(handle.clone());
        }
    }

    /// Store a handle list. First write wins; an empty list is a valid
    /// cacheable result.
    pub fn store_list(&self, handles: &[ElementHandle]) {
        let mut slot = self.list.lock();
        if slot.is_none() {
            *slot = Some(handles.to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_wins() {
        let cache = ResolvedElementCache::new();
        cache.store_single(&ElementHandle::new("first"));
        cache.store_single(&ElementHandle::new("second"));
        assert_eq!(cache.cached_single(), Some(ElementHandle::new("first")));
    }

    #[test]
    fn empty_list_is_cacheable() {
        let cache = ResolvedElementCache::new();
        assert_eq!(cache.cached_list(), None);
        cache.store_list(&[]);
        assert_eq!(cache.cached_list(), Some(Vec::new()));
    }

    #[test]
    fn slots_are_independent() {
        let cache = ResolvedElementCache::new();
        cache.store_list(&[ElementHandle::new("a")]);
        assert_eq!(cache.cached_single(), None);
    }
}
