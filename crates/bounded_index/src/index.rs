use std::ops::Range;

use crate::error::{CollectionError, Result};

/// Turns a possibly negative index into a forward offset.
///
/// `-1` addresses the last element. The result is not clamped, so a value
/// that is still negative means the index reached past the front.
pub fn normalize(len: usize, index: isize) -> isize {
    if index < 0 {
        signed(len) + index
    } else {
        index
    }
}

/// Normalized position of an existing element, `None` outside `[0, len)`.
pub fn position(len: usize, index: isize) -> Option<usize> {
    let i = normalize(len, index);
    if 0 <= i && i < signed(len) {
        Some(i as usize)
    } else {
        None
    }
}

/// Normalized insertion point in `[0, len]`.
///
/// # Errors
///
/// [`CollectionError::IndexOutOfRange`] when the normalized index falls
/// outside `[0, len]`.
pub fn insertion_point(len: usize, index: isize) -> Result<usize> {
    let i = normalize(len, index);
    if 0 <= i && i <= signed(len) {
        Ok(i as usize)
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

/// Half-open range for `from..to` that is always inside `[0, len]`.
///
/// Both ends are normalized independently. `from` is floored at zero and `to`
/// is capped at `len`. When `from` was negative and `to` normalizes to exactly
/// zero, `to` becomes `len`, so `(-n, 0)` reads as "the last n elements".
/// Inverted bounds give an empty range instead of an error.
pub fn bounded_range(len: usize, from: isize, to: isize) -> Range<usize> {
    let start = normalize(len, from).max(0);
    let mut end = normalize(len, to);

    if from < 0 && end == 0 {
        tracing::trace!(len, from, to, "zero end bound after negative start, extending to len");
        end = signed(len);
    }
    let end = end.min(signed(len));

    if end < start {
        tracing::trace!(len, from, to, "inverted bounds, empty range");
        let anchor = start.min(signed(len)) as usize;
        return anchor..anchor;
    }

    start as usize..end as usize
}

/// `bounded_range(len, from, len)`.
pub fn bounded_range_from(len: usize, from: isize) -> Range<usize> {
    bounded_range(len, from, signed(len))
}

/// Live window over `range`. Out-of-bounds ranges give an empty window.
pub fn view<T>(seq: &[T], range: Range<usize>) -> &[T] {
    seq.get(range).unwrap_or_default()
}

pub fn view_mut<T>(seq: &mut [T], range: Range<usize>) -> &mut [T] {
    seq.get_mut(range).unwrap_or_default()
}

/// Copies the visible elements of a view into independently owned storage.
pub fn detach<T: Clone>(view: &[T]) -> Vec<T> {
    view.to_vec()
}

pub fn narrow<T>(seq: &[T], from: isize, to: isize) -> &[T] {
    let range = bounded_range(seq.len(), from, to);
    view(seq, range)
}

pub fn narrow_mut<T>(seq: &mut [T], from: isize, to: isize) -> &mut [T] {
    let range = bounded_range(seq.len(), from, to);
    view_mut(seq, range)
}

pub fn slice<T: Clone>(seq: &[T], from: isize, to: isize) -> Vec<T> {
    detach(narrow(seq, from, to))
}

// Collections never hold more than `isize::MAX` elements.
fn signed(len: usize) -> isize {
    len as isize
}
