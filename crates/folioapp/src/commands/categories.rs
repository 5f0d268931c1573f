use crate::categories::category_counts;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::ContentStore;

/// Category index of a content type, with how many records use each category.
pub fn run<T, S>(store: &S) -> Result<CmdResult<T>>
where
    T: Record,
    S: ContentStore<T> + ?Sized,
{
    let items = store.fetch_all(T::KIND.default_order())?;
    let mut result = CmdResult::default();
    result.categories = category_counts(&items);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::model::BlogPost;
    use crate::seed::SampleContent;
    use crate::store::local_store::LocalStore;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn counts_sample_posts() {
        let mut store = LocalStore::with_backend(MemBackend::new());
        for post in BlogPost::samples() {
            store.insert(&post).unwrap();
        }
        let result: CmdResult<BlogPost> = run(&store).unwrap();
        let names: Vec<_> = result.categories.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["React", "CSS", "TypeScript", "Accessibility"]);
        assert!(result.categories.iter().all(|(_, n)| *n == 1));
    }

    #[test]
    fn unavailable_store_is_an_error() {
        let store = LocalStore::with_backend(MemBackend::new());
        store.backend().set_simulate_read_error(true);
        let err = run::<BlogPost, _>(&store).unwrap_err();
        assert!(matches!(err, FolioError::StoreUnavailable(_)));
    }
}
