use bounded_index::{CollectionError, Result};

use crate::list::List;

/// Every integer between `from` and `to`, both ends included.
///
/// Counts down when `from > to`.
pub fn range(from: i64, to: i64) -> List<i64> {
    if from <= to {
        ascending(from, to, 1)
    } else {
        descending(from, to, 1)
    }
}

/// Like [`range`] but stepping by `step`.
///
/// A descending range is the ascending one from `to` reversed, so it starts at
/// the last stepped value below `from` rather than at `from` itself:
/// `range_step(5, 2, 2)` is `[4, 2]`.
///
/// # Errors
///
/// `CollectionError::InvalidArgument` when `step <= 0`.
pub fn range_step(from: i64, to: i64, step: i64) -> Result<List<i64>> {
    if step <= 0 {
        tracing::trace!(step, "range_step rejected");
        return Err(CollectionError::InvalidArgument(format!(
            "(step = {step}) <= 0"
        )));
    }
    Ok(if from <= to {
        ascending(from, to, step)
    } else {
        descending(from, to, step)
    })
}

fn ascending(from: i64, to: i64, step: i64) -> List<i64> {
    let mut values = List::new();
    let mut current = Some(from);
    while let Some(value) = current.filter(|&v| v <= to) {
        values.push(value);
        current = value.checked_add(step);
    }
    values
}

fn descending(from: i64, to: i64, step: i64) -> List<i64> {
    let mut values = ascending(to, from, step);
    values.reverse();
    values
}
