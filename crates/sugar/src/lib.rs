//! `List`, `Set` and `Map` wrappers with negative indices, clamped views,
//! optional-aware mutators and frozen snapshots.
//!
//! ```
//! let mut values = sugar::list![10, 20, 30];
//! assert_eq!(values.opt(-1), Some(&30));
//! assert_eq!(values.narrow(-2, 0), &[20, 30]);
//! values.push_opt(None).push(40);
//! assert_eq!(values.last(), Ok(&40));
//! ```

mod frozen;
mod list;
mod macros;
mod map;
mod range;
mod set;

pub use bounded_index::{
    CollectionError, Result, SequenceBase, SequenceMut, bounded_range, delete_values, element_at,
    insert_at, normalize, opt_at, remove_at, remove_where, update_at,
};
pub use frozen::Frozen;
pub use list::List;
pub use map::Map;
pub use range::{range, range_step};
pub use set::Set;
