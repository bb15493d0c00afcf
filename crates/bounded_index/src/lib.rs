//! Negative-aware indexing and clamped sub-ranges over ordered collections.
//!
//! Single-element access fails loudly with [`CollectionError`]; range
//! operations ([`bounded_range`], [`narrow`], [`slice`]) never fail and clamp
//! instead.

mod access;
mod error;
mod index;
mod traits;

pub use access::{
    delete_values, element_at, first, insert_at, last, opt_at, remove_at, remove_where, update_at,
};
pub use error::{CollectionError, Result};
pub use index::{
    bounded_range, bounded_range_from, detach, insertion_point, narrow, narrow_mut, normalize,
    position, slice, view, view_mut,
};
pub use traits::{SequenceBase, SequenceMut};
