use crate::cache::{ContentCache, RefreshOutcome};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::notify::{Notice, Notifier};
use crate::store::ContentStore;
use tracing::warn;

/// Remove record `id` once the user has confirmed.
///
/// Without confirmation nothing is touched. A confirmed delete always reaches the
/// store, even when the cache could not be loaded; the store treats a missing id
/// as a no-op. The "does not exist" notice is only given when a successful load
/// shows the id is absent. After a delete the cache is refreshed so the record
/// disappears from the listed records.
pub fn run<T, S>(store: &mut S, id: RecordId, confirmed: bool) -> Result<CmdResult<T>>
where
    T: Record,
    S: ContentStore<T> + ?Sized,
{
    let mut messages: Vec<Notice> = Vec::new();
    let mut cache = ContentCache::<T>::new();
    let loaded = matches!(cache.mount(&*store, &mut messages), RefreshOutcome::Applied(_));
    let kind = T::KIND;

    if !confirmed {
        messages.notify(Notice::info(format!(
            "Not deleted: confirm removing {} {}",
            kind.label().to_lowercase(),
            id
        )));
        return Ok(CmdResult::default()
            .with_listed(cache.items().to_vec())
            .with_messages(messages));
    }

    let target = cache.find(id).cloned();
    if loaded && target.is_none() {
        messages.notify(Notice::info(format!("{} {} does not exist, nothing to delete", kind, id)));
        return Ok(CmdResult::default()
            .with_listed(cache.items().to_vec())
            .with_messages(messages));
    }

    if let Err(e) = store.delete(id) {
        warn!(%kind, id, error = %e, "delete failed");
        messages.notify(Notice::error(format!(
            "Failed to delete {}: {}",
            kind.label().to_lowercase(),
            e
        )));
        return Err(e);
    }

    cache.refresh(&*store, &mut messages);
    messages.notify(Notice::success(format!("{} deleted successfully", kind)));

    Ok(CmdResult::default()
        .with_affected(target.into_iter().collect())
        .with_listed(cache.items().to_vec())
        .with_messages(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::model::{OrderKey, Skill};
    use crate::store::local_store::LocalStore;
    use crate::store::mem_backend::MemBackend;
    use crate::store::mem_table::MemTable;
    use crate::store::remote_store::RemoteStore;

    fn store_with_two() -> (LocalStore<MemBackend>, Skill, Skill) {
        let mut store = LocalStore::with_backend(MemBackend::new());
        let a = store.insert(&Skill::new("Go", 70, "Backend")).unwrap();
        let b = store.insert(&Skill::new("Rust", 80, "Backend")).unwrap();
        (store, a, b)
    }

    #[test]
    fn confirmed_delete_removes_record() {
        let (mut store, a, b) = store_with_two();
        let result = run::<Skill, _>(&mut store, a.id, true).unwrap();

        assert_eq!(result.affected, vec![a]);
        assert_eq!(result.listed, vec![b]);
        assert_eq!(result.messages, vec![Notice::success("Skill deleted successfully")]);
    }

    #[test]
    fn unconfirmed_delete_keeps_record() {
        let (mut store, _, _) = store_with_two();
        let result = run::<Skill, _>(&mut store, 1, false).unwrap();

        assert!(result.affected.is_empty());
        let stored: Vec<Skill> = store.fetch_all(OrderKey::Insertion).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn deleting_twice_is_harmless() {
        let (mut store, a, _) = store_with_two();
        run::<Skill, _>(&mut store, a.id, true).unwrap();
        let second = run::<Skill, _>(&mut store, a.id, true).unwrap();

        assert!(second.affected.is_empty());
        assert!(!second.has_errors());
        assert_eq!(second.listed.len(), 1);
    }

    #[test]
    fn write_failure_is_reported() {
        let (mut store, a, _) = store_with_two();
        store.backend().set_simulate_write_error(true);
        let err = run::<Skill, _>(&mut store, a.id, true).unwrap_err();
        assert!(matches!(err, FolioError::WriteFailure(_)));
    }

    #[test]
    fn confirmed_delete_reaches_store_when_load_fails() {
        let mut store = RemoteStore::new(MemTable::new());
        let saved = store.insert(&Skill::new("Go", 70, "Backend")).unwrap();
        store.api().set_fail_reads(true);

        let result = run::<Skill, _>(&mut store, saved.id, true).unwrap();

        assert!(store.api().rows("skills").is_empty());
        assert!(result.has_errors());
        assert_eq!(
            result.messages.last(),
            Some(&Notice::success("Skill deleted successfully"))
        );
        assert!(!result
            .messages
            .iter()
            .any(|m| m.content.contains("does not exist")));
    }

    #[test]
    fn missing_id_after_successful_load_is_reported() {
        let (mut store, _, _) = store_with_two();
        let result = run::<Skill, _>(&mut store, 42, true).unwrap();

        assert!(result.affected.is_empty());
        assert_eq!(
            result.messages,
            vec![Notice::info("Skill 42 does not exist, nothing to delete")]
        );
    }
}
