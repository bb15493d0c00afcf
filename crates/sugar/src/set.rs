use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use bounded_index::{Result, SequenceBase, bounded_range};
use indexmap::IndexSet;

use crate::frozen::Frozen;
use crate::list::List;
use crate::map::Map;

/// Set that remembers insertion order, so it can be addressed by position
/// like a [`List`].
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(deserialize = "T: serde::Deserialize<'de> + Eq + Hash")
    )
)]
pub struct Set<T> {
    items: IndexSet<T>,
}

impl<T> Set<T> {
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    pub fn as_index_set(&self) -> &IndexSet<T> {
        &self.items
    }

    pub fn into_index_set(self) -> IndexSet<T> {
        self.items
    }

    /// # Errors
    ///
    /// `CollectionError::IndexOutOfRange` when `index` addresses nothing.
    pub fn element_at(&self, index: isize) -> Result<&T> {
        bounded_index::element_at(&self.items, index)
    }

    pub fn opt(&self, index: isize) -> Option<&T> {
        bounded_index::opt_at(&self.items, index)
    }

    /// # Errors
    ///
    /// `CollectionError::EmptyCollection` on an empty set.
    pub fn first(&self) -> Result<&T> {
        bounded_index::first(&self.items)
    }

    /// # Errors
    ///
    /// `CollectionError::EmptyCollection` on an empty set.
    pub fn last(&self) -> Result<&T> {
        bounded_index::last(&self.items)
    }

    /// Positional view over `from..to`, clamped like [`List::narrow`].
    pub fn narrow(&self, from: isize, to: isize) -> &indexmap::set::Slice<T> {
        let range = bounded_range(self.items.len(), from, to);
        // `bounded_range` stays within `0..=len`.
        &self.items.as_slice()[range]
    }

    pub fn some<F: FnMut(&T) -> bool>(&self, f: F) -> bool {
        self.items.iter().any(f)
    }

    pub fn every<F: FnMut(&T) -> bool>(&self, f: F) -> bool {
        self.items.iter().all(f)
    }

    #[must_use]
    pub fn into_frozen(self) -> Frozen<Self> {
        Frozen::new(self)
    }
}

impl<T: Hash + Eq> Set<T> {
    pub fn from_opt(value: Option<T>) -> Self {
        value.into_iter().collect()
    }

    /// Adding an element already present keeps its original position.
    pub fn push(&mut self, value: T) -> &mut Self {
        self.items.insert(value);
        self
    }

    pub fn push_opt(&mut self, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.items.insert(value);
        }
        self
    }

    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        self.items.extend(values);
        self
    }

    pub fn push_all_opt<I: IntoIterator<Item = T>>(&mut self, values: Option<I>) -> &mut Self {
        if let Some(values) = values {
            self.items.extend(values);
        }
        self
    }

    /// Removes each of `values`; the rest keep their relative order.
    pub fn delete<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        for value in values {
            self.items.shift_remove(&value);
        }
        self
    }

    pub fn delete_if<F: FnMut(&T) -> bool>(&mut self, mut f: F) -> &mut Self {
        self.items.retain(|item| !f(item));
        self
    }

    pub fn has(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn map<R: Hash + Eq, F: FnMut(&T) -> R>(&self, f: F) -> Set<R> {
        self.items.iter().map(f).collect()
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    #[must_use]
    pub fn slice(&self, from: isize, to: isize) -> Self {
        self.narrow(from, to).iter().cloned().collect()
    }

    #[must_use]
    pub fn filter<F: FnMut(&T) -> bool>(&self, mut f: F) -> Self {
        self.items.iter().filter(|item| f(item)).cloned().collect()
    }

    /// Elements of `self` followed by the new ones of `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.items.union(&other.items).cloned().collect()
    }

    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.items.intersection(&other.items).cloned().collect()
    }

    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        self.items.difference(&other.items).cloned().collect()
    }

    /// Buckets elements by `key`, keeping first-seen order.
    ///
    /// ```
    /// let groups = sugar::set![1, 2, 3, 4, 5].group(|x| x % 2 == 0);
    /// assert_eq!(groups.keys().to_list(), [false, true]);
    /// assert_eq!(groups.opt(&false).map(|odd| odd.to_list()), Some(sugar::list![1, 3, 5]));
    /// ```
    pub fn group<K: Hash + Eq, F: FnMut(&T) -> K>(&self, mut key: F) -> Map<K, Self> {
        let mut groups = Map::<K, Self>::new();
        for item in &self.items {
            groups.bucket(key(item)).items.insert(item.clone());
        }
        groups
    }

    pub fn to_list(&self) -> List<T> {
        self.items.iter().cloned().collect()
    }

    #[must_use]
    pub fn freeze(&self) -> Frozen<Self> {
        Frozen::new(self.clone())
    }
}

impl<T: Hash + Eq + Ord + Clone> Set<T> {
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.items.sort();
        copy
    }
}

impl<T: Hash + Eq> Frozen<Set<T>> {
    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn push(&mut self, _value: T) -> Result<&mut Self> {
        self.reject("push")
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, _values: I) -> Result<&mut Self> {
        self.reject("push_all")
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn delete<I: IntoIterator<Item = T>>(&mut self, _values: I) -> Result<&mut Self> {
        self.reject("delete")
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T> Deref for Set<T> {
    type Target = IndexSet<T>;

    fn deref(&self) -> &IndexSet<T> {
        &self.items
    }
}

impl<T> DerefMut for Set<T> {
    fn deref_mut(&mut self) -> &mut IndexSet<T> {
        &mut self.items
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<IndexSet<T>> for Set<T> {
    fn from(items: IndexSet<T>) -> Self {
        Self { items }
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> SequenceBase for Set<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::Set;
    use crate::set;
    use bounded_index::CollectionError;
    use pretty_assertions::assert_eq;

    fn items<T: Clone>(set: &Set<T>) -> Vec<T> {
        set.iter().cloned().collect()
    }

    #[test]
    fn keeps_insertion_order_and_uniqueness() {
        let mut s = set![3, 1, 2];
        s.push(1).push(5).push_all([2, 7]);
        assert_eq!(items(&s), vec![3, 1, 2, 5, 7]);
        assert!(s.has(&7));
        assert!(!s.has(&4));
    }

    #[test]
    fn positional_reads() {
        let s = set![10, 20, 30];
        assert_eq!(s.opt(-1), Some(&30));
        assert_eq!(s.element_at(0), Ok(&10));
        assert_eq!(
            s.element_at(-4),
            Err(CollectionError::IndexOutOfRange { index: -4, len: 3 })
        );
        assert_eq!(s.first(), Ok(&10));
        assert_eq!(s.last(), Ok(&30));
        assert_eq!(
            Set::<i32>::new().first(),
            Err(CollectionError::EmptyCollection)
        );
        assert_eq!(
            s.narrow(-2, 0).iter().copied().collect::<Vec<_>>(),
            vec![20, 30]
        );
        assert!(s.narrow(1, 1).is_empty());
        assert!(s.slice(5, -9).is_empty());
        assert_eq!(items(&s.slice(0, -1)), vec![10, 20]);
    }

    #[test]
    fn optional_and_delete() {
        let mut s = set!["a", "b", "c"];
        s.push_opt(None).push_all_opt(None::<Vec<&str>>);
        assert_eq!(s.len(), 3);
        s.push_opt(Some("d")).delete(["b", "x"]);
        assert_eq!(items(&s), vec!["a", "c", "d"]);
        s.delete(["b"]);
        assert_eq!(items(&s), vec!["a", "c", "d"]);
        s.delete_if(|x| *x == "a");
        assert_eq!(items(&s), vec!["c", "d"]);
        assert_eq!(items(&Set::from_opt(Some(1))), vec![1]);
        assert!(Set::<i32>::from_opt(None).is_empty());
    }

    #[test]
    fn set_algebra() {
        let a = set![1, 2, 3, 4];
        let b = set![3, 4, 5];
        assert_eq!(items(&a.union(&b)), vec![1, 2, 3, 4, 5]);
        assert_eq!(items(&a.intersect(&b)), vec![3, 4]);
        assert_eq!(items(&a.diff(&b)), vec![1, 2]);
        assert_eq!(items(&b.map(|x| x % 2)), vec![1, 0]);
        assert_eq!(items(&a.filter(|x| x % 2 == 0)), vec![2, 4]);
        assert_eq!(items(&set![3, 1, 2].sorted()), vec![1, 2, 3]);
        assert!(a.some(|x| *x == 4));
        assert!(!a.every(|x| *x < 4));
    }

    #[test]
    fn group_by_parity() {
        let groups = set![1, 2, 3, 4, 5].group(|x| x % 2 == 0);
        assert_eq!(groups.keys().to_list(), [false, true]);
        assert_eq!(groups.opt(&true).map(items), Some(vec![2, 4]));
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(set![1, 2, 3], set![3, 2, 1]);
    }

    #[test]
    fn freeze_rejects_mutation() {
        let mut s = set![1, 2];
        let mut frozen = s.freeze();
        assert_eq!(
            frozen.push(3).map(|_| ()),
            Err(CollectionError::UnsupportedOperation { operation: "push" })
        );
        assert!(frozen.push_all([3]).is_err());
        assert!(frozen.delete([1]).is_err());
        assert_eq!(frozen.opt(-1), Some(&2));
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(frozen.len(), 2);
    }

    #[test]
    fn into_frozen_moves_the_set() {
        let mut frozen = set!["a", "b"].into_frozen();
        assert!(frozen.delete(["a"]).is_err());
        assert!(frozen.has(&"a"));
        assert_eq!(items(&frozen.into_inner()), vec!["a", "b"]);
    }
}
