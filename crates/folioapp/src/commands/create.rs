use crate::cache::ContentCache;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::{Editable, FieldOf, FormController};
use crate::notify::Notice;
use crate::store::ContentStore;

/// Open a blank form, apply `fields` in order and submit.
///
/// A validation or write failure is returned as the error; its notice is the
/// last one the form raised.
pub fn run<T, S>(store: &mut S, fields: Vec<(FieldOf<T>, String)>) -> Result<CmdResult<T>>
where
    T: Editable,
    S: ContentStore<T> + ?Sized,
{
    let mut messages: Vec<Notice> = Vec::new();
    let mut cache = ContentCache::<T>::new();
    cache.mount(&*store, &mut messages);

    let mut form = FormController::<T::Draft>::new();
    form.create();
    for (field, value) in fields {
        form.set(field, value)?;
    }
    let saved = form.submit(store, &mut cache, &mut messages)?;

    Ok(CmdResult::default()
        .with_affected(vec![saved])
        .with_listed(cache.items().to_vec())
        .with_messages(messages))
}
