use crate::commands::CmdResult;
use crate::error::{FolioError, Result};
use crate::model::{Record, RecordId};
use crate::store::ContentStore;

/// Detail view of one record, such as a full blog post.
pub fn run<T, S>(store: &S, id: RecordId) -> Result<CmdResult<T>>
where
    T: Record,
    S: ContentStore<T> + ?Sized,
{
    let record = find(store, id)?;
    Ok(CmdResult::default().with_listed(vec![record]))
}

/// The stored record with `id`, or `NotFound`.
pub(crate) fn find<T, S>(store: &S, id: RecordId) -> Result<T>
where
    T: Record,
    S: ContentStore<T> + ?Sized,
{
    store
        .fetch_all(T::KIND.default_order())?
        .into_iter()
        .find(|r| r.id() == id)
        .ok_or(FolioError::NotFound { kind: T::KIND, id })
}
