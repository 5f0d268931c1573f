//! # Category Index
//!
//! Categories are free text on each record; there is no category table. The
//! index is therefore derived from whatever records are in hand, and it is
//! recomputed every time it is asked for. Nothing here is ever stored.
//!
//! Order is first-seen order of the input list. Since skills are fetched by
//! category and posts by creation time, the filter bar of each view follows
//! the same order its records are shown in.

use crate::model::Record;
use std::collections::HashSet;

/// Distinct non-empty categories of `items`, in first-seen order.
pub fn category_index<T: Record>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(Record::category)
        .filter(|category| !category.is_empty() && seen.insert(*category))
        .map(str::to_string)
        .collect()
}

/// Records whose category equals `selected` exactly, or all of them when no
/// category is selected.
pub fn filter_by_category<'a, T: Record>(items: &'a [T], selected: Option<&str>) -> Vec<&'a T> {
    match selected {
        None => items.iter().collect(),
        Some(category) => items.iter().filter(|r| r.category() == category).collect(),
    }
}

/// `(category, count)` pairs in category-index order.
pub fn category_counts<T: Record>(items: &[T]) -> Vec<(String, usize)> {
    category_index(items)
        .into_iter()
        .map(|category| {
            let count = items.iter().filter(|r| r.category() == category).count();
            (category, count)
        })
        .collect()
}
