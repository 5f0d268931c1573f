//! # Content Cache
//!
//! Each view (the public skills section, the blog list, the admin tables) holds a
//! [`ContentCache`] for the content type it shows. The cache is the view's copy of
//! the store: the last successful fetch, whether a fetch is running, and which
//! category filter is selected.
//!
//! ## Refresh Protocol
//!
//! A refresh is split in two so that the request itself can run anywhere:
//!
//! 1. [`ContentCache::begin_refresh`] sets `loading` and hands out a
//!    [`RefreshTicket`].
//! 2. [`ContentCache::complete_refresh`] takes the ticket and the fetch result.
//!
//! Only the newest ticket may apply its result. An older ticket, or any ticket
//! that completes after [`ContentCache::unmount`], is discarded without touching
//! items, loading or notices. [`ContentCache::refresh`] runs both halves
//! back to back against a store.
//!
//! A failed fetch never clears what is already shown: the previous items stay and
//! an error notice is raised instead.
//!
//! ## Derived State
//!
//! The category index and the visible list are functions of `items` and the
//! selected category. They are recomputed on every call and never cached.

use crate::categories::{category_index, filter_by_category};
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::notify::{Notice, Notifier};
use crate::store::ContentStore;
use tracing::{debug, warn};

/// Identifies one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Items replaced with this many records.
    Applied(usize),
    /// Fetch failed; previous items kept.
    Failed,
    /// Result arrived for a superseded request or an unmounted view.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ContentCache<T: Record> {
    items: Vec<T>,
    loading: bool,
    selected_category: Option<String>,
    mounted: bool,
    generation: u64,
}

impl<T: Record> Default for ContentCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            selected_category: None,
            mounted: false,
            generation: 0,
        }
    }
}

impl<T: Record> ContentCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Attach the view and load its content.
    pub fn mount<S, N>(&mut self, store: &S, notifier: &mut N) -> RefreshOutcome
    where
        S: ContentStore<T> + ?Sized,
        N: Notifier,
    {
        self.mounted = true;
        self.refresh(store, notifier)
    }

    /// Detach the view. Refreshes still in flight will be discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.loading = false;
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.loading = true;
        RefreshTicket(self.generation)
    }

    pub fn complete_refresh<N: Notifier>(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<T>>,
        notifier: &mut N,
    ) -> RefreshOutcome {
        if !self.mounted || ticket.0 != self.generation {
            debug!(kind = %T::KIND, ticket = ticket.0, latest = self.generation, "discarding refresh");
            return RefreshOutcome::Discarded;
        }
        self.loading = false;

        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                RefreshOutcome::Applied(count)
            }
            Err(e) => {
                warn!(kind = %T::KIND, error = %e, "refresh failed, keeping previous items");
                notifier.notify(Notice::error(format!(
                    "Failed to load {}: {}",
                    T::KIND.plural(),
                    e
                )));
                RefreshOutcome::Failed
            }
        }
    }

    /// Fetch with the content type's default order and apply the result.
    pub fn refresh<S, N>(&mut self, store: &S, notifier: &mut N) -> RefreshOutcome
    where
        S: ContentStore<T> + ?Sized,
        N: Notifier,
    {
        let ticket = self.begin_refresh();
        let result = store.fetch_all(T::KIND.default_order());
        self.complete_refresh(ticket, result, notifier)
    }

    /// Set or clear the category filter. Any string is accepted; one that
    /// matches nothing simply yields an empty visible list.
    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    pub fn categories(&self) -> Vec<String> {
        category_index(&self.items)
    }

    pub fn visible(&self) -> Vec<&T> {
        filter_by_category(&self.items, self.selected_category.as_deref())
    }

    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::model::Skill;
    use crate::store::local_store::LocalStore;
    use crate::store::mem_backend::MemBackend;

    fn seeded_store() -> LocalStore<MemBackend> {
        let mut store = LocalStore::with_backend(MemBackend::new());
        store.insert(&Skill::new("React", 90, "Frontend")).unwrap();
        store.insert(&Skill::new("Node.js", 80, "Backend")).unwrap();
        store.insert(&Skill::new("CSS", 90, "Frontend")).unwrap();
        store
    }

    #[test]
    fn mount_loads_in_default_order() {
        let store = seeded_store();
        let mut cache = ContentCache::<Skill>::new();
        let mut notices: Vec<Notice> = Vec::new();

        assert_eq!(cache.mount(&store, &mut notices), RefreshOutcome::Applied(3));
        assert!(!cache.is_loading());
        let names: Vec<_> = cache.items().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Node.js", "React", "CSS"]);
        assert!(notices.is_empty());
    }

    #[test]
    fn begin_refresh_sets_loading() {
        let mut cache = ContentCache::<Skill>::new();
        cache.begin_refresh();
        assert!(cache.is_loading());
    }

    #[test]
    fn failed_refresh_keeps_items_and_notifies() {
        let store = seeded_store();
        let mut cache = ContentCache::<Skill>::new();
        let mut notices: Vec<Notice> = Vec::new();
        cache.mount(&store, &mut notices);

        store.backend().set_simulate_read_error(true);
        assert_eq!(cache.refresh(&store, &mut notices), RefreshOutcome::Failed);

        assert_eq!(cache.items().len(), 3);
        assert!(!cache.is_loading());
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
        assert!(notices[0].content.starts_with("Failed to load skills"));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut cache = ContentCache::<Skill>::new();
        let mut notices: Vec<Notice> = Vec::new();
        cache.mount(&LocalStore::with_backend(MemBackend::new()), &mut notices);

        let first = cache.begin_refresh();
        let second = cache.begin_refresh();

        let newer = vec![Skill::new("Rust", 80, "Languages").with_id(1)];
        assert_eq!(
            cache.complete_refresh(second, Ok(newer.clone()), &mut notices),
            RefreshOutcome::Applied(1)
        );
        assert_eq!(
            cache.complete_refresh(first, Ok(Vec::new()), &mut notices),
            RefreshOutcome::Discarded
        );
        assert_eq!(cache.items(), newer.as_slice());
    }

    #[test]
    fn completion_after_unmount_is_discarded() {
        let store = seeded_store();
        let mut cache = ContentCache::<Skill>::new();
        let mut notices: Vec<Notice> = Vec::new();
        cache.mount(&store, &mut notices);

        let ticket = cache.begin_refresh();
        cache.unmount();
        let outcome = cache.complete_refresh(
            ticket,
            Err(FolioError::StoreUnavailable("gone".into())),
            &mut notices,
        );

        assert_eq!(outcome, RefreshOutcome::Discarded);
        assert!(notices.is_empty());
        assert_eq!(cache.items().len(), 3);
        assert!(!cache.is_loading());
    }

    #[test]
    fn visible_list_follows_selected_category() {
        let store = seeded_store();
        let mut cache = ContentCache::<Skill>::new();
        let mut notices: Vec<Notice> = Vec::new();
        cache.mount(&store, &mut notices);

        assert_eq!(cache.categories(), vec!["Backend", "Frontend"]);
        assert_eq!(cache.visible().len(), 3);

        cache.select_category(Some("Frontend".into()));
        let visible: Vec<_> = cache.visible().iter().map(|s| s.name.clone()).collect();
        assert_eq!(visible, vec!["React", "CSS"]);

        cache.select_category(Some("Nothing".into()));
        assert!(cache.visible().is_empty());

        cache.select_category(None);
        assert_eq!(cache.visible().len(), 3);
    }

    #[test]
    fn derived_state_tracks_new_items() {
        let mut store = seeded_store();
        let mut cache = ContentCache::<Skill>::new();
        let mut notices: Vec<Notice> = Vec::new();
        cache.mount(&store, &mut notices);

        store.insert(&Skill::new("Figma", 70, "Design")).unwrap();
        cache.refresh(&store, &mut notices);
        assert_eq!(cache.categories(), vec!["Backend", "Design", "Frontend"]);
    }

    #[test]
    fn find_looks_up_by_id() {
        let store = seeded_store();
        let mut cache = ContentCache::<Skill>::new();
        let mut notices: Vec<Notice> = Vec::new();
        cache.mount(&store, &mut notices);
        assert_eq!(cache.find(2).map(|s| s.name.as_str()), Some("Node.js"));
        assert!(cache.find(99).is_none());
    }
}
