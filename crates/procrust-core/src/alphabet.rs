//! Insertion-ordered finite symbol sets.

use indexmap::IndexSet;
use std::hash::Hash;

/// A finite, insertion-ordered set of symbols.
///
/// Used for all three declared sets of a filter: states
/// (`Alphabet<State>`), observations (`Alphabet<Obs>`), and outputs
/// (`Alphabet<Out>`). Iteration order is declaration order, which is
/// semantic: one-step candidate extension enumerates the observation
/// alphabet in exactly this order.
///
/// # Examples
///
/// ```
/// use procrust_core::{Alphabet, Obs};
///
/// let y: Alphabet<Obs> = ["a", "b", "c"].into_iter().map(Obs::from).collect();
/// assert_eq!(y.len(), 3);
/// assert!(y.contains(&Obs::from("b")));
/// assert_eq!(y.index_of(&Obs::from("c")), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet<T: Eq + Hash> {
    items: IndexSet<T>,
}

impl<T: Eq + Hash> Alphabet<T> {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    /// Insert a symbol, keeping the first occurrence's position.
    /// Returns `false` if the symbol was already present.
    pub fn insert(&mut self, symbol: T) -> bool {
        self.items.insert(symbol)
    }

    /// Membership test.
    pub fn contains(&self, symbol: &T) -> bool {
        self.items.contains(symbol)
    }

    /// Position of `symbol` in declaration order, if present.
    pub fn index_of(&self, symbol: &T) -> Option<usize> {
        self.items.get_index_of(symbol)
    }

    /// The symbol at `index` in declaration order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash> Default for Alphabet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Alphabet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Alphabet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Obs;

    #[test]
    fn iteration_follows_declaration_order() {
        let y: Alphabet<Obs> = ["q", "a", "m"].into_iter().map(Obs::from).collect();
        let names: Vec<&str> = y.iter().map(Obs::as_str).collect();
        assert_eq!(names, ["q", "a", "m"]);
    }

    #[test]
    fn duplicate_insertion_keeps_first_position() {
        let mut y: Alphabet<Obs> = Alphabet::new();
        assert!(y.insert(Obs::from("a")));
        assert!(y.insert(Obs::from("b")));
        assert!(!y.insert(Obs::from("a")));
        assert_eq!(y.len(), 2);
        assert_eq!(y.index_of(&Obs::from("a")), Some(0));
    }

    #[test]
    fn index_lookup_round_trips() {
        let y: Alphabet<Obs> = ["a", "b"].into_iter().map(Obs::from).collect();
        let i = y.index_of(&Obs::from("b")).unwrap();
        assert_eq!(y.get(i), Some(&Obs::from("b")));
        assert_eq!(y.get(2), None);
    }
}
