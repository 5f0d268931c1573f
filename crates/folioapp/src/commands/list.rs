use crate::cache::ContentCache;
use crate::categories::category_counts;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::notify::Notice;
use crate::store::ContentStore;

/// What a view shows after mounting: the visible records for `category` (all
/// of them when `None`) and the full category index.
///
/// A failed fetch is not an `Err`: the view just shows nothing, and the error
/// notice ends up in the messages.
pub fn run<T, S>(store: &S, category: Option<&str>) -> Result<CmdResult<T>>
where
    T: Record,
    S: ContentStore<T> + ?Sized,
{
    let mut messages: Vec<Notice> = Vec::new();
    let mut cache = ContentCache::<T>::new();
    cache.mount(store, &mut messages);
    cache.select_category(category.map(str::to_string));

    let listed = cache.visible().into_iter().cloned().collect();
    let mut result = CmdResult::default()
        .with_listed(listed)
        .with_messages(messages);
    result.categories = category_counts(cache.items());
    Ok(result)
}
