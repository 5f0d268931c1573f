use crate::cache::ContentCache;
use crate::commands::show::find;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::{Editable, FieldOf, FormController};
use crate::model::RecordId;
use crate::notify::Notice;
use crate::store::ContentStore;

/// Open the stored record `id` in a form, apply `fields` and submit.
///
/// Fields not named keep their stored values. The whole record is written back.
pub fn run<T, S>(
    store: &mut S,
    id: RecordId,
    fields: Vec<(FieldOf<T>, String)>,
) -> Result<CmdResult<T>>
where
    T: Editable,
    S: ContentStore<T> + ?Sized,
{
    let record = find::<T, S>(store, id)?;

    let mut messages: Vec<Notice> = Vec::new();
    let mut cache = ContentCache::<T>::new();
    cache.mount(&*store, &mut messages);

    let mut form = FormController::<T::Draft>::new();
    form.edit(&record);
    for (field, value) in fields {
        form.set(field, value)?;
    }
    let saved = form.submit(store, &mut cache, &mut messages)?;

    Ok(CmdResult::default()
        .with_affected(vec![saved])
        .with_listed(cache.items().to_vec())
        .with_messages(messages))
}
