//! Per-collection id allocation.

use crate::types::DbId;

/// Allocate the next id for a collection given its current ids.
///
/// Returns `1` for an empty collection, otherwise one more than the largest
/// id present. Gaps left by deletions are never filled. A collection that
/// already holds `DbId::MAX` gets `DbId::MAX` back rather than overflowing.
///
/// # Examples
///
/// ```
/// use folio_core::ids::next_id;
///
/// assert_eq!(next_id([]), 1);
/// assert_eq!(next_id([1, 3]), 4);
/// ```
pub fn next_id<I>(ids: I) -> DbId
where
    I: IntoIterator<Item = DbId>,
{
    ids.into_iter().max().map_or(1, |max| max.saturating_add(1))
}
