// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

/// Types implementing this trait can be passed to [`Element::add_class`](crate::Element::add_class).
pub trait ClassIter {
    /// Returns an iterator of class tokens (e.g. the strings aren't allowed to contain spaces).
    fn class_iter(&self) -> impl Iterator<Item = &str>;
}

impl<C: ClassIter> ClassIter for Option<C> {
    fn class_iter(&self) -> impl Iterator<Item = &str> {
        self.iter().flat_map(|c| c.class_iter())
    }
}

impl ClassIter for String {
    fn class_iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.as_str())
    }
}

impl ClassIter for &str {
    fn class_iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(*self)
    }
}

impl ClassIter for Cow<'_, str> {
    fn class_iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.as_ref())
    }
}

impl<C: ClassIter> ClassIter for Vec<C> {
    fn class_iter(&self) -> impl Iterator<Item = &str> {
        self.iter().flat_map(|c| c.class_iter())
    }
}

impl<C: ClassIter, const N: usize> ClassIter for [C; N] {
    fn class_iter(&self) -> impl Iterator<Item = &str> {
        self.iter().flat_map(|c| c.class_iter())
    }
}

impl<C: ClassIter> ClassIter for &[C] {
    fn class_iter(&self) -> impl Iterator<Item = &str> {
        self.iter().flat_map(|c| c.class_iter())
    }
}
