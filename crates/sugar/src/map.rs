use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use bounded_index::{CollectionError, Result, bounded_range, position};
use indexmap::IndexMap;

use crate::frozen::Frozen;
use crate::list::List;
use crate::set::Set;

/// Map that remembers insertion order. Entries can be addressed by key or by
/// (possibly negative) position.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(deserialize = "K: serde::Deserialize<'de> + Eq + Hash, V: serde::Deserialize<'de>")
    )
)]
pub struct Map<K, V> {
    entries: IndexMap<K, V>,
}

impl<K, V> Map<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn as_index_map(&self) -> &IndexMap<K, V> {
        &self.entries
    }

    pub fn into_index_map(self) -> IndexMap<K, V> {
        self.entries
    }

    /// # Errors
    ///
    /// `CollectionError::IndexOutOfRange` when `index` addresses nothing.
    pub fn entry_at(&self, index: isize) -> Result<(&K, &V)> {
        let len = self.entries.len();
        self.opt_entry_at(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    pub fn opt_entry_at(&self, index: isize) -> Option<(&K, &V)> {
        position(self.entries.len(), index).and_then(|at| self.entries.get_index(at))
    }

    /// # Errors
    ///
    /// `CollectionError::EmptyCollection` on an empty map.
    pub fn first(&self) -> Result<(&K, &V)> {
        self.entries.first().ok_or(CollectionError::EmptyCollection)
    }

    /// # Errors
    ///
    /// `CollectionError::EmptyCollection` on an empty map.
    pub fn last(&self) -> Result<(&K, &V)> {
        self.entries.last().ok_or(CollectionError::EmptyCollection)
    }

    /// Positional view over `from..to`, clamped like [`List::narrow`].
    pub fn narrow(&self, from: isize, to: isize) -> &indexmap::map::Slice<K, V> {
        let range = bounded_range(self.entries.len(), from, to);
        // `bounded_range` stays within `0..=len`.
        &self.entries.as_slice()[range]
    }

    pub fn some<F: FnMut(&K, &V) -> bool>(&self, mut f: F) -> bool {
        self.entries.iter().any(|(k, v)| f(k, v))
    }

    pub fn every<F: FnMut(&K, &V) -> bool>(&self, mut f: F) -> bool {
        self.entries.iter().all(|(k, v)| f(k, v))
    }

    pub fn count_where<F: FnMut(&K, &V) -> bool>(&self, mut f: F) -> usize {
        self.entries.iter().filter(|(k, v)| f(k, v)).count()
    }

    pub fn update_all<F: FnMut(&K, &V) -> V>(&mut self, mut f: F) -> &mut Self {
        for (key, slot) in &mut self.entries {
            *slot = f(key, slot);
        }
        self
    }

    #[must_use]
    pub fn into_frozen(self) -> Frozen<Self> {
        Frozen::new(self)
    }
}

impl<K: Hash + Eq, V> Map<K, V> {
    /// Overwrites the value of an existing key in place.
    pub fn push(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// No-op when `value` is absent.
    pub fn push_opt(&mut self, key: K, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.entries.insert(key, value);
        }
        self
    }

    pub fn push_all<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) -> &mut Self {
        self.entries.extend(entries);
        self
    }

    pub fn push_all_opt<I: IntoIterator<Item = (K, V)>>(&mut self, entries: Option<I>) -> &mut Self {
        if let Some(entries) = entries {
            self.entries.extend(entries);
        }
        self
    }

    /// Removes each of `keys`; the remaining entries keep their order.
    pub fn delete<I: IntoIterator<Item = K>>(&mut self, keys: I) -> &mut Self {
        for key in keys {
            self.entries.shift_remove(&key);
        }
        self
    }

    pub fn delete_if<F: FnMut(&K, &V) -> bool>(&mut self, mut f: F) -> &mut Self {
        self.entries.retain(|k, v| !f(k, v));
        self
    }

    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn opt(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Replaces the value under `key` with `f(&old)`; no-op for a missing key.
    pub fn update<F: FnOnce(&V) -> V>(&mut self, key: &K, f: F) -> &mut Self {
        if let Some(slot) = self.entries.get_mut(key) {
            *slot = f(slot);
        }
        self
    }

    pub fn map_entries<K2, V2, F>(&self, mut f: F) -> Map<K2, V2>
    where
        K2: Hash + Eq,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        self.entries.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// The bucket for `key`, created empty on first use.
    pub(crate) fn bucket(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entries.entry(key).or_default()
    }
}

impl<K: Hash + Eq + Clone, V> Map<K, V> {
    pub fn keys(&self) -> Set<K> {
        self.entries.keys().cloned().collect()
    }

    pub fn map_values<R, F: FnMut(&K, &V) -> R>(&self, mut f: F) -> Map<K, R> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), f(k, v)))
            .collect()
    }
}

impl<K, V: Clone> Map<K, V> {
    pub fn vals(&self) -> List<V> {
        self.entries.values().cloned().collect()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Map<K, V> {
    /// Entries at positions `from..to`, clamped like [`List::slice`].
    #[must_use]
    pub fn slice(&self, from: isize, to: isize) -> Self {
        self.narrow(from, to)
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Entries whose key is among `keys`, in this map's order.
    #[must_use]
    pub fn slice_keys<I: IntoIterator<Item = K>>(&self, keys: I) -> Self {
        let wanted = keys.into_iter().collect::<Set<K>>();
        self.filter(|k, _| wanted.has(k))
    }

    #[must_use]
    pub fn filter<F: FnMut(&K, &V) -> bool>(&self, mut f: F) -> Self {
        self.entries
            .iter()
            .filter(|(k, v)| f(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Copy with the value under `key` replaced by `f(&old)`.
    #[must_use]
    pub fn map_at<F: FnOnce(&V) -> V>(&self, key: &K, f: F) -> Self {
        let mut copy = self.clone();
        copy.update(key, f);
        copy
    }

    #[must_use]
    pub fn sorted_by<F: FnMut(&K, &K) -> Ordering>(&self, mut f: F) -> Self {
        let mut copy = self.clone();
        copy.entries.sort_by(|k1, _, k2, _| f(k1, k2));
        copy
    }

    #[must_use]
    pub fn freeze(&self) -> Frozen<Self> {
        Frozen::new(self.clone())
    }
}

impl<K: Hash + Eq + Ord + Clone, V: Clone> Map<K, V> {
    /// Copy ordered by key.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.entries.sort_keys();
        copy
    }
}

impl<K: Hash + Eq, V> Frozen<Map<K, V>> {
    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn push(&mut self, _key: K, _value: V) -> Result<&mut Self> {
        self.reject("push")
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn push_all<I: IntoIterator<Item = (K, V)>>(&mut self, _entries: I) -> Result<&mut Self> {
        self.reject("push_all")
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn delete<I: IntoIterator<Item = K>>(&mut self, _keys: I) -> Result<&mut Self> {
        self.reject("delete")
    }

    /// # Errors
    ///
    /// Always `CollectionError::UnsupportedOperation`.
    pub fn update<F: FnOnce(&V) -> V>(&mut self, _key: &K, _f: F) -> Result<&mut Self> {
        self.reject("update")
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Map<K, V> {}

impl<K, V> Deref for Map<K, V> {
    type Target = IndexMap<K, V>;

    fn deref(&self) -> &IndexMap<K, V> {
        &self.entries
    }
}

impl<K, V> DerefMut for Map<K, V> {
    fn deref_mut(&mut self) -> &mut IndexMap<K, V> {
        &mut self.entries
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V> From<IndexMap<K, V>> for Map<K, V> {
    fn from(entries: IndexMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Map;
    use crate::list;
    use bounded_index::CollectionError;
    use pretty_assertions::assert_eq;

    fn sample() -> Map<&'static str, i32> {
        [("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
    }

    fn pairs<K: Clone, V: Clone>(map: &Map<K, V>) -> Vec<(K, V)> {
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    #[test]
    fn push_and_lookup() {
        let mut m = Map::new();
        m.push("x", 1).push("y", 2).push("x", 10);
        assert_eq!(pairs(&m), vec![("x", 10), ("y", 2)]);
        assert!(m.has(&"x"));
        assert_eq!(m.opt(&"y"), Some(&2));
        assert_eq!(m.opt(&"z"), None);
    }

    #[test]
    fn absent_optionals_are_identity() {
        let mut m = sample();
        m.push_opt("d", None).push_all_opt(None::<Vec<(&str, i32)>>);
        assert_eq!(m, sample());
        m.push_opt("d", Some(4)).push_all_opt(Some([("e", 5)]));
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn positional_access() {
        let m = sample();
        assert_eq!(m.entry_at(-1), Ok((&"c", &3)));
        assert_eq!(m.opt_entry_at(-4), None);
        assert_eq!(
            m.entry_at(3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(m.first(), Ok((&"a", &1)));
        assert_eq!(m.last(), Ok((&"c", &3)));
        assert_eq!(
            Map::<i32, i32>::new().last(),
            Err(CollectionError::EmptyCollection)
        );
        let tail = m.narrow(-2, 0);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail.get_index(0), Some((&"b", &2)));
        assert_eq!(pairs(&m.slice(0, -1)), vec![("a", 1), ("b", 2)]);
        assert!(m.slice(2, 1).is_empty());
    }

    #[test]
    fn delete_by_key_and_predicate() {
        let mut m = sample();
        m.delete(["b", "zz"]);
        assert_eq!(pairs(&m), vec![("a", 1), ("c", 3)]);
        m.delete(["b"]);
        assert_eq!(m.len(), 2);
        m.delete_if(|_, v| *v > 2);
        assert_eq!(pairs(&m), vec![("a", 1)]);
    }

    #[test]
    fn updates() {
        let mut m = sample();
        m.update(&"b", |v| v * 10).update(&"zz", |_| unreachable!());
        assert_eq!(m.opt(&"b"), Some(&20));
        m.update_all(|_, v| v + 1);
        assert_eq!(m.vals(), [2, 21, 4]);
        let copy = m.map_at(&"a", |_| 0);
        assert_eq!(copy.opt(&"a"), Some(&0));
        assert_eq!(m.opt(&"a"), Some(&2));
    }

    #[test]
    fn projections() {
        let m = sample();
        assert_eq!(m.keys().to_list(), ["a", "b", "c"]);
        assert_eq!(m.vals(), list![1, 2, 3]);
        assert_eq!(pairs(&m.filter(|_, v| v % 2 == 1)), vec![("a", 1), ("c", 3)]);
        assert_eq!(
            pairs(&m.map_values(|k, v| format!("{k}{v}"))),
            vec![
                ("a", "a1".to_string()),
                ("b", "b2".to_string()),
                ("c", "c3".to_string())
            ]
        );
        assert_eq!(
            pairs(&m.map_entries(|k, v| (*v, *k))),
            vec![(1, "a"), (2, "b"), (3, "c")]
        );
        assert_eq!(pairs(&m.slice_keys(["c", "a", "q"])), vec![("a", 1), ("c", 3)]);
        assert!(m.some(|k, _| *k == "b"));
        assert!(m.every(|_, v| *v > 0));
        assert_eq!(m.count_where(|_, v| *v >= 2), 2);
    }

    #[test]
    fn sorting_copies() {
        let m: Map<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        assert_eq!(m.sorted().keys().to_list(), [1, 2, 3]);
        assert_eq!(m.sorted_by(|a, b| b.cmp(a)).keys().to_list(), [3, 2, 1]);
        assert_eq!(m.keys().to_list(), [3, 1, 2]);
    }

    #[test]
    fn freeze_rejects_mutation() {
        let mut m = sample();
        let mut frozen = m.freeze();
        assert_eq!(
            frozen.push("d", 4).map(|_| ()),
            Err(CollectionError::UnsupportedOperation { operation: "push" })
        );
        assert!(frozen.push_all([("d", 4)]).is_err());
        assert!(frozen.delete(["a"]).is_err());
        assert!(frozen.update(&"a", |v| *v).is_err());
        assert_eq!(frozen.entry_at(-1), Ok((&"c", &3)));
        m.push("d", 4);
        assert_eq!(m.len(), 4);
        assert_eq!(frozen.len(), 3);
    }

    #[test]
    fn into_frozen_moves_the_map() {
        let mut frozen = sample().into_frozen();
        assert!(frozen.update(&"a", |v| v + 1).is_err());
        assert_eq!(frozen.opt(&"a"), Some(&1));
        assert_eq!(frozen.into_inner(), sample());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_object() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2,"c":3}"#);
        let back: Map<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keys().to_list(), ["a", "b", "c"]);
    }
}
