use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{OrderKey, UNASSIGNED_ID};
use crate::notify::Notice;
use crate::seed::SampleContent;
use crate::store::ContentStore;
use tracing::info;

/// Insert the sample records of `T` into an empty store.
///
/// A store that already holds records of this type, or already serves the
/// samples without having stored them, is left alone. Sample ids are dropped so
/// the store assigns its own.
pub fn run<T, S>(store: &mut S) -> Result<CmdResult<T>>
where
    T: SampleContent,
    S: ContentStore<T> + ?Sized,
{
    let kind = T::KIND;
    let mut result = CmdResult::default();

    if store.serves_samples()? {
        result.add_message(Notice::info(format!(
            "Skipped {}: sample content is already being served",
            kind.plural()
        )));
        return Ok(result);
    }

    let existing = store.fetch_all(OrderKey::Insertion)?;

    if !existing.is_empty() {
        result.add_message(Notice::info(format!(
            "Skipped {}: {} already stored",
            kind.plural(),
            existing.len()
        )));
        return Ok(result);
    }

    for mut sample in T::samples() {
        sample.set_id(UNASSIGNED_ID);
        let saved = store.insert(&sample)?;
        result.affected.push(saved);
    }

    info!(%kind, count = result.affected.len(), "seeded");
    result.add_message(Notice::success(format!(
        "Added {} sample {}",
        result.affected.len(),
        kind.plural()
    )));
    Ok(result)
}
