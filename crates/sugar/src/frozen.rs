use std::ops::Deref;

use bounded_index::{CollectionError, Result, SequenceBase, SequenceMut};

/// Read-only snapshot of a collection.
///
/// Reads go through `Deref`. Every mutation fails with
/// [`CollectionError::UnsupportedOperation`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Frozen<C> {
    inner: C,
}

impl<C> Frozen<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Mutable copy of the snapshot.
    #[must_use]
    pub fn thaw(&self) -> C
    where
        C: Clone,
    {
        self.inner.clone()
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    /// The error every mutator of a frozen collection returns.
    pub(crate) fn reject<T>(&self, operation: &'static str) -> Result<T> {
        tracing::trace!(operation, "mutation rejected on frozen collection");
        Err(CollectionError::UnsupportedOperation { operation })
    }
}

impl<C> Deref for Frozen<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.inner
    }
}

impl<C> AsRef<C> for Frozen<C> {
    fn as_ref(&self) -> &C {
        &self.inner
    }
}

impl<'a, C> IntoIterator for &'a Frozen<C>
where
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;
    type IntoIter = <&'a C as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.inner).into_iter()
    }
}

impl<C: SequenceBase> SequenceBase for Frozen<C> {
    type Item = C::Item;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Option<&C::Item> {
        self.inner.get(index)
    }
}

impl<C: SequenceBase> SequenceMut for Frozen<C> {
    fn insert(&mut self, _index: usize, _item: C::Item) -> Result<()> {
        self.reject("insert")
    }

    fn remove(&mut self, _index: usize) -> Result<C::Item> {
        self.reject("remove")
    }

    fn replace(&mut self, _index: usize, _item: C::Item) -> Result<C::Item> {
        self.reject("replace")
    }
}

#[cfg(test)]
mod tests {
    use super::Frozen;
    use bounded_index::{CollectionError, element_at, insert_at, remove_at, remove_where, update_at};

    #[test]
    fn reads_pass_through() {
        let frozen = Frozen::new(vec![10, 20, 30]);
        assert_eq!(frozen.len(), 3);
        assert_eq!(element_at(&frozen, -1), Ok(&30));
        assert_eq!((&frozen).into_iter().sum::<i32>(), 60);
    }

    #[test]
    fn mutations_are_rejected() {
        let mut frozen = Frozen::new(vec![10, 20, 30]);
        assert_eq!(
            insert_at(&mut frozen, 0, 5),
            Err(CollectionError::UnsupportedOperation { operation: "insert" })
        );
        assert_eq!(
            remove_at(&mut frozen, 0),
            Err(CollectionError::UnsupportedOperation { operation: "remove" })
        );
        assert_eq!(
            update_at(&mut frozen, 0, |x| x + 1),
            Err(CollectionError::UnsupportedOperation { operation: "replace" })
        );
        assert_eq!(
            remove_where(&mut frozen, |&x| x == 20),
            Err(CollectionError::UnsupportedOperation { operation: "remove" })
        );
        assert_eq!(*frozen, vec![10, 20, 30]);
    }

    #[test]
    fn thaw_is_independent() {
        let frozen = Frozen::new(vec![1, 2]);
        let mut thawed = frozen.thaw();
        thawed.push(3);
        assert_eq!(thawed, vec![1, 2, 3]);
        assert_eq!(*frozen, vec![1, 2]);
        assert_eq!(frozen.into_inner(), vec![1, 2]);
    }
}
