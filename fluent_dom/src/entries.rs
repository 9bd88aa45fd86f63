// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use crate::Attribute;

/// A trait to make [`Element::set_attributes`](crate::Element::set_attributes) and
/// [`Element::set_style`](crate::Element::set_style) generic over collection types.
///
/// Nested collections are flattened in order, so e.g. `[map_a, map_b]` yields all entries of
/// `map_a` first.
pub trait EntryIter {
    /// Iterates over key value pairs, in the iteration order of the underlying collection.
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)>;
}

impl<K: AsRef<str>, V: AsRef<str>> EntryIter for (K, V) {
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once((self.0.as_ref(), self.1.as_ref()))
    }
}

impl EntryIter for Attribute {
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once((self.key.as_str(), self.value.as_str()))
    }
}

impl<T: EntryIter> EntryIter for Option<T> {
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|e| e.entries_iter())
    }
}

impl<T: EntryIter> EntryIter for Vec<T> {
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|e| e.entries_iter())
    }
}

impl<T: EntryIter, const N: usize> EntryIter for [T; N] {
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|e| e.entries_iter())
    }
}

impl<T: EntryIter> EntryIter for &[T] {
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|e| e.entries_iter())
    }
}

impl<K, V, S> EntryIter for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> EntryIter for BTreeMap<K, V> {
    fn entries_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}
