//! Negative-aware element access and mutation over the capability traits.

use crate::error::{CollectionError, Result};
use crate::index::{insertion_point, position};
use crate::traits::{SequenceBase, SequenceMut};

/// # Errors
///
/// [`CollectionError::IndexOutOfRange`] when `index` does not address an
/// element after normalization.
pub fn element_at<S: SequenceBase + ?Sized>(seq: &S, index: isize) -> Result<&S::Item> {
    let len = seq.len();
    position(len, index)
        .and_then(|at| seq.get(at))
        .ok_or(CollectionError::IndexOutOfRange { index, len })
}

pub fn opt_at<S: SequenceBase + ?Sized>(seq: &S, index: isize) -> Option<&S::Item> {
    position(seq.len(), index).and_then(|at| seq.get(at))
}

/// # Errors
///
/// [`CollectionError::EmptyCollection`] on an empty sequence.
pub fn first<S: SequenceBase + ?Sized>(seq: &S) -> Result<&S::Item> {
    opt_at(seq, 0).ok_or(CollectionError::EmptyCollection)
}

/// # Errors
///
/// [`CollectionError::EmptyCollection`] on an empty sequence.
pub fn last<S: SequenceBase + ?Sized>(seq: &S) -> Result<&S::Item> {
    opt_at(seq, -1).ok_or(CollectionError::EmptyCollection)
}

/// Inserts before the element currently at `index`; `-1` inserts before the
/// last element and `len` appends.
///
/// # Errors
///
/// [`CollectionError::IndexOutOfRange`] outside `[0, len]` after
/// normalization, or whatever the store reports when it refuses the mutation.
pub fn insert_at<S: SequenceMut + ?Sized>(seq: &mut S, index: isize, item: S::Item) -> Result<()> {
    let at = insertion_point(seq.len(), index)?;
    seq.insert(at, item)
}

/// # Errors
///
/// [`CollectionError::IndexOutOfRange`] when `index` does not address an
/// element, or whatever the store reports when it refuses the mutation.
pub fn remove_at<S: SequenceMut + ?Sized>(seq: &mut S, index: isize) -> Result<S::Item> {
    let len = seq.len();
    let at = position(len, index).ok_or(CollectionError::IndexOutOfRange { index, len })?;
    seq.remove(at)
}

/// Replaces the element at `index` with `f(&old)`.
///
/// Returns `Ok(false)` without calling `f` when `index` addresses nothing.
///
/// # Errors
///
/// Only when the store refuses the mutation.
pub fn update_at<S, F>(seq: &mut S, index: isize, f: F) -> Result<bool>
where
    S: SequenceMut + ?Sized,
    F: FnOnce(&S::Item) -> S::Item,
{
    let Some(at) = position(seq.len(), index) else {
        return Ok(false);
    };
    let Some(current) = seq.get(at) else {
        return Ok(false);
    };
    let next = f(current);
    seq.replace(at, next)?;
    Ok(true)
}

/// Removes every element matching `pred` and returns how many went.
///
/// # Errors
///
/// Only when the store refuses the mutation; see
/// [`SequenceMut::remove_matching`] for what a partial run leaves behind.
pub fn remove_where<S, F>(seq: &mut S, pred: F) -> Result<usize>
where
    S: SequenceMut + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    let removed = seq.remove_matching(pred)?;
    tracing::trace!(removed, "remove_where");
    Ok(removed)
}

/// Removes every occurrence of each of `values`; a repeat call removes
/// nothing.
///
/// # Errors
///
/// Same as [`remove_where`].
pub fn delete_values<S, I>(seq: &mut S, values: I) -> Result<usize>
where
    S: SequenceMut + ?Sized,
    S::Item: PartialEq,
    I: IntoIterator<Item = S::Item>,
{
    let values = values.into_iter().collect::<Vec<_>>();
    if values.is_empty() {
        return Ok(0);
    }
    remove_where(seq, |item| values.contains(item))
}
