use std::hash::BuildHasher;

use indexmap::IndexSet;

use crate::error::{CollectionError, Result};

/// Read access by forward position.
pub trait SequenceBase {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Self::Item>;
}

/// Positional mutation.
///
/// Indices are already normalized; implementations report a miss with
/// [`CollectionError::IndexOutOfRange`] and may refuse the mutation outright
/// with [`CollectionError::UnsupportedOperation`].
pub trait SequenceMut: SequenceBase {
    /// `index` may equal `len`.
    fn insert(&mut self, index: usize, item: Self::Item) -> Result<()>;
    fn remove(&mut self, index: usize) -> Result<Self::Item>;
    fn replace(&mut self, index: usize, item: Self::Item) -> Result<Self::Item>;

    /// Removes every element matching `pred` and returns how many went.
    ///
    /// The default walks backwards through `remove`, so elements removed
    /// before a refusal stay removed.
    fn remove_matching<F: FnMut(&Self::Item) -> bool>(&mut self, mut pred: F) -> Result<usize> {
        let mut removed = 0;
        let mut index = self.len();
        while index > 0 {
            index -= 1;
            if self.get(index).is_some_and(&mut pred) {
                self.remove(index)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

pub(crate) fn out_of_range(index: usize, len: usize) -> CollectionError {
    CollectionError::IndexOutOfRange {
        index: isize::try_from(index).unwrap_or(isize::MAX),
        len,
    }
}

impl<T> SequenceBase for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> SequenceBase for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> SequenceMut for Vec<T> {
    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > Vec::len(self) {
            return Err(out_of_range(index, Vec::len(self)));
        }
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if index >= Vec::len(self) {
            return Err(out_of_range(index, Vec::len(self)));
        }
        Ok(Vec::remove(self, index))
    }

    fn replace(&mut self, index: usize, item: T) -> Result<T> {
        let len = Vec::len(self);
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;
        Ok(std::mem::replace(slot, item))
    }

    fn remove_matching<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Result<usize> {
        let before = Vec::len(self);
        self.retain(|item| !pred(item));
        Ok(before - Vec::len(self))
    }
}

impl<T, S: BuildHasher> SequenceBase for IndexSet<T, S> {
    type Item = T;

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.get_index(index)
    }
}

impl<T> SequenceBase for indexmap::set::Slice<T> {
    type Item = T;

    fn len(&self) -> usize {
        indexmap::set::Slice::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.get_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{SequenceBase, SequenceMut};
    use crate::error::{CollectionError, Result};
    use indexmap::IndexSet;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn vec_rejects_bad_positions() {
        let mut values = vec![1, 2, 3];
        assert_eq!(
            SequenceMut::insert(&mut values, 4, 9),
            Err(CollectionError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(
            SequenceMut::remove(&mut values, 3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            values.replace(3, 0),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(values, vec![1, 2, 3]);
    }

    /// Store that only provides the required methods.
    struct Tape(Vec<i64>);

    impl SequenceBase for Tape {
        type Item = i64;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn get(&self, index: usize) -> Option<&i64> {
            self.0.get(index)
        }
    }

    impl SequenceMut for Tape {
        fn insert(&mut self, index: usize, item: i64) -> Result<()> {
            SequenceMut::insert(&mut self.0, index, item)
        }

        fn remove(&mut self, index: usize) -> Result<i64> {
            SequenceMut::remove(&mut self.0, index)
        }

        fn replace(&mut self, index: usize, item: i64) -> Result<i64> {
            self.0.replace(index, item)
        }
    }

    #[test]
    fn default_remove_matching_agrees_with_retain() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for _ in 0..300 {
            let len = rng.random_range(0..48);
            let values = (0..len)
                .map(|_| rng.random_range(-4..=4))
                .collect::<Vec<i64>>();
            let threshold = rng.random_range(-4..=4);

            let mut tape = Tape(values.clone());
            let mut vec = values;
            assert_eq!(
                tape.remove_matching(|&x| x < threshold),
                vec.remove_matching(|&x| x < threshold)
            );
            assert_eq!(tape.0, vec);
        }
    }

    #[test]
    fn index_set_reads_in_insertion_order() {
        let set = ["b", "a", "c"].into_iter().collect::<IndexSet<_>>();
        assert_eq!(SequenceBase::len(&set), 3);
        assert_eq!(SequenceBase::get(&set, 1), Some(&"a"));
        assert_eq!(SequenceBase::get(&set, 3), None);
        let tail = set.get_range(1..).unwrap();
        assert_eq!(SequenceBase::get(tail, 0), Some(&"a"));
    }
}
