use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use bounded_index::{
    Result, SequenceBase, SequenceMut, bounded_range_from, delete_values, insert_at,
    insertion_point, remove_at, update_at,
};
use indexmap::IndexSet;

use crate::frozen::Frozen;
use crate::map::Map;
use crate::set::Set;

/// Growable sequence with negative indexing and chainable mutators.
///
/// Mutators return `&mut Self`; constructive operations (`slice`, `map`,
/// `filter`, `reversed`, ...) return a new, independently owned `List`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Empty when `value` is absent.
    pub fn from_opt(value: Option<T>) -> Self {
        Self {
            items: value.into_iter().collect(),
        }
    }

    pub fn from_opt_iter<I: IntoIterator<Item = T>>(values: Option<I>) -> Self {
        let mut list = Self::new();
        list.push_all_opt(values);
        list
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn push(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    pub fn push_opt(&mut self, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.items.push(value);
        }
        self
    }

    /// Inserts before the element at `index`; `-1` means before the last one.
    ///
    /// # Errors
    ///
    /// `CollectionError::IndexOutOfRange` outside `[0, len]` after
    /// normalization.
    pub fn insert(&mut self, index: isize, value: T) -> Result<&mut Self> {
        insert_at(&mut self.items, index, value)?;
        Ok(self)
    }

    /// No-op when `value` is absent, whatever `index` is.
    ///
    /// # Errors
    ///
    /// Same as [`List::insert`] when `value` is present.
    pub fn insert_opt(&mut self, index: isize, value: Option<T>) -> Result<&mut Self> {
        match value {
            Some(value) => self.insert(index, value),
            None => Ok(self),
        }
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

    /// # Errors
    ///
    /// `CollectionError::IndexOutOfRange` outside `[0, len]` after
    /// normalization.
    pub fn insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: isize,
        values: I,
    ) -> Result<&mut Self> {
        let at = insertion_point(self.items.len(), index)?;
        self.items.splice(at..at, values);
        Ok(self)
    }

    /// # Errors
    ///
    /// Same as [`List::insert_all`] when `values` is present.
    pub fn insert_all_opt<I: IntoIterator<Item = T>>(
        &mut self,
        index: isize,
        values: Option<I>,
    ) -> Result<&mut Self> {
        match values {
            Some(values) => self.insert_all(index, values),
            None => Ok(self),
        }
    }

    /// # Errors
    ///
    /// `CollectionError::IndexOutOfRange` when `index` addresses nothing.
    pub fn remove(&mut self, index: isize) -> Result<T> {
        remove_at(&mut self.items, index)
    }

    pub fn delete_if<F: FnMut(&T) -> bool>(&mut self, mut f: F) -> &mut Self {
        self.items.retain(|item| !f(item));
        self
    }

    /// Removes every occurrence of each of `values`.
    ///
    /// # Errors
    ///
    /// Only what the backing store reports; a plain list never refuses.
    pub fn delete<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<&mut Self>
    where
        T: PartialEq,
    {
        delete_values(&mut self.items, values)?;
        Ok(self)
    }

    /// Replaces the element at `index` with `f(&old)`; no-op when `index`
    /// addresses nothing.
    ///
    /// # Errors
    ///
    /// Only what the backing store reports; a plain list never refuses.
    pub fn update<F: FnOnce(&T) -> T>(&mut self, index: isize, f: F) -> Result<&mut Self> {
        update_at(&mut self.items, index, f)?;
        Ok(self)
    }

    pub fn update_all<F: FnMut(&T) -> T>(&mut self, mut f: F) -> &mut Self {
        for slot in &mut self.items {
            *slot = f(slot);
        }
        self
    }

    /// # Errors
    ///
    /// `CollectionError::IndexOutOfRange` when `index` addresses nothing.
    pub fn element_at(&self, index: isize) -> Result<&T> {
        bounded_index::element_at(self.as_slice(), index)
    }

    /// Like [`List::element_at`] but absent instead of failing.
    pub fn opt(&self, index: isize) -> Option<&T> {
        bounded_index::opt_at(self.as_slice(), index)
    }

    /// # Errors
    ///
    /// `CollectionError::EmptyCollection` on an empty list.
    pub fn first(&self) -> Result<&T> {
        bounded_index::first(self.as_slice())
    }

    /// # Errors
    ///
    /// `CollectionError::EmptyCollection` on an empty list.
    pub fn last(&self) -> Result<&T> {
        bounded_index::last(self.as_slice())
    }

    /// Live view over `from..to`. Out-of-range bounds are clamped, never an error.
    pub fn narrow(&self, from: isize, to: isize) -> &[T] {
        bounded_index::narrow(&self.items, from, to)
    }

    pub fn narrow_from(&self, from: isize) -> &[T] {
        let range = bounded_range_from(self.items.len(), from);
        bounded_index::view(&self.items, range)
    }

    /// Writes through the returned view land in this list.
    pub fn narrow_mut(&mut self, from: isize, to: isize) -> &mut [T] {
        bounded_index::narrow_mut(&mut self.items, from, to)
    }

    pub fn find<F: FnMut(&T) -> bool>(&self, mut f: F) -> Option<&T> {
        self.items.iter().find(|item| f(item))
    }

    pub fn find_last<F: FnMut(&T) -> bool>(&self, mut f: F) -> Option<&T> {
        self.items.iter().rev().find(|item| f(item))
    }

    pub fn index_where<F: FnMut(&T) -> bool>(&self, f: F) -> Option<usize> {
        self.items.iter().position(f)
    }

    pub fn last_index_where<F: FnMut(&T) -> bool>(&self, f: F) -> Option<usize> {
        self.items.iter().rposition(f)
    }

    pub fn some<F: FnMut(&T) -> bool>(&self, f: F) -> bool {
        self.items.iter().any(f)
    }

    pub fn every<F: FnMut(&T) -> bool>(&self, f: F) -> bool {
        self.items.iter().all(f)
    }

    pub fn count_where<F: FnMut(&T) -> bool>(&self, mut f: F) -> usize {
        self.items.iter().filter(|item| f(item)).count()
    }

    pub fn map<R, F: FnMut(&T) -> R>(&self, f: F) -> List<R> {
        self.items.iter().map(f).collect()
    }

    /// `f` receives the forward index along with each element.
    pub fn map_indexed<R, F: FnMut(usize, &T) -> R>(&self, mut f: F) -> List<R> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| f(i, item))
            .collect()
    }

    pub fn flat_map<R, I, F>(&self, f: F) -> List<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&T) -> I,
    {
        self.items.iter().flat_map(f).collect()
    }

    #[must_use]
    pub fn into_frozen(self) -> Frozen<Self> {
        Frozen::new(self)
    }
}

impl<T: Clone> List<T> {
    /// Detached copy of `narrow(from, to)`.
    #[must_use]
    pub fn slice(&self, from: isize, to: isize) -> Self {
        Self::from(self.narrow(from, to).to_vec())
    }

    #[must_use]
    pub fn slice_from(&self, from: isize) -> Self {
        Self::from(self.narrow_from(from).to_vec())
    }

    /// Everything but the first element.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.slice_from(1)
    }

    /// Copy with the element at `index` replaced by `f(&old)`.
    ///
    /// # Errors
    ///
    /// Same as [`List::update`].
    pub fn map_at<F: FnOnce(&T) -> T>(&self, index: isize, f: F) -> Result<Self> {
        let mut copy = self.clone();
        copy.update(index, f)?;
        Ok(copy)
    }

    #[must_use]
    pub fn filter<F: FnMut(&T) -> bool>(&self, mut f: F) -> Self {
        self.items.iter().filter(|item| f(item)).cloned().collect()
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Keeps an element unless `same` matches it against one already kept.
    #[must_use]
    pub fn uniq_by<F: FnMut(&T, &T) -> bool>(&self, mut same: F) -> Self {
        let mut kept = Self::with_capacity(self.items.len());
        for item in &self.items {
            if !kept.items.iter().any(|k| same(k, item)) {
                kept.items.push(item.clone());
            }
        }
        kept
    }

    /// Stable sort of a copy.
    #[must_use]
    pub fn sorted_by<F: FnMut(&T, &T) -> Ordering>(&self, f: F) -> Self {
        let mut copy = self.clone();
        copy.items.sort_by(f);
        copy
    }

    #[must_use]
    pub fn sorted_by_key<K: Ord, F: FnMut(&T) -> K>(&self, f: F) -> Self {
        let mut copy = self.clone();
        copy.items.sort_by_key(f);
        copy
    }

    /// This list when non-empty, otherwise a copy of `other`.
    #[must_use]
    pub fn or_else(&self, other: &[T]) -> Self {
        if self.items.is_empty() {
            Self::from(other.to_vec())
        } else {
            self.clone()
        }
    }

    #[must_use]
    pub fn or_else_with<I, F>(&self, other: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnOnce() -> I,
    {
        if self.items.is_empty() {
            other().into_iter().collect()
        } else {
            self.clone()
        }
    }

    /// Buckets elements by `key` in a single pass; buckets keep first-seen
    /// key order and element order.
    pub fn group<K: Hash + Eq, F: FnMut(&T) -> K>(&self, mut key: F) -> Map<K, Self> {
        let mut groups = Map::<K, Self>::new();
        for item in &self.items {
            groups.bucket(key(item)).items.push(item.clone());
        }
        groups
    }

    /// Read-only snapshot; this list stays mutable.
    #[must_use]
    pub fn freeze(&self) -> Frozen<Self> {
        Frozen::new(self.clone())
    }
}

impl<T: PartialEq> List<T> {
    pub fn starts_with_all(&self, other: &[T]) -> bool {
        self.narrow(0, signed(other.len())) == other
    }

    /// Compares against `narrow(-n, 0)`, the last `n` elements.
    pub fn ends_with_all(&self, other: &[T]) -> bool {
        self.narrow(-signed(other.len()), 0) == other
    }
}

impl<T: Ord + Clone> List<T> {
    #[must_use]
    pub fn sorted(&self) -> Self {
        self.sorted_by(Ord::cmp)
    }
}

impl<T: Hash + Eq + Clone> List<T> {
    /// First occurrence of each element, in order.
    #[must_use]
    pub fn uniq(&self) -> Self {
        self.items
            .iter()
            .cloned()
            .collect::<IndexSet<T>>()
            .into_iter()
            .collect()
    }

    pub fn to_set(&self) -> Set<T> {
        self.items.iter().cloned().collect()
    }
}

fn signed(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

impl<T> Frozen<List<T>> {
    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn push(&mut self, _value: T) -> Result<&mut Self> {
        self.reject("push")
    }

    /// No-op when `value` is absent.
    ///
    /// # Errors
    ///
    /// `CollectionError::UnsupportedOperation` when `value` is present.
    pub fn push_opt(&mut self, value: Option<T>) -> Result<&mut Self> {
        match value {
            Some(_) => self.reject("push_opt"),
            None => Ok(self),
        }
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn insert(&mut self, _index: isize, _value: T) -> Result<&mut Self> {
        self.reject("insert")
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
    pub fn remove(&mut self, _index: isize) -> Result<T> {
        self.reject("remove")
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn delete<I: IntoIterator<Item = T>>(&mut self, _values: I) -> Result<&mut Self> {
        self.reject("delete")
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn update<F: FnOnce(&T) -> T>(&mut self, _index: isize, _f: F) -> Result<&mut Self> {
        self.reject("update")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for List<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: PartialEq> PartialEq<[T]> for List<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for List<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for List<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

impl<T> SequenceBase for List<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T> SequenceMut for List<T> {
    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        SequenceMut::insert(&mut self.items, index, item)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        SequenceMut::remove(&mut self.items, index)
    }

    fn replace(&mut self, index: usize, item: T) -> Result<T> {
        self.items.replace(index, item)
    }

    fn remove_matching<F: FnMut(&T) -> bool>(&mut self, pred: F) -> Result<usize> {
        self.items.remove_matching(pred)
    }
}
