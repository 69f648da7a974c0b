//! Order-independent operand bags for N-ary nodes.
//!
//! Operands are grouped by equality with a count per distinct operand, so two
//! multisets compare equal whenever they hold the same operands the same number
//! of times, whatever the insertion order. Only `PartialEq` is required: field
//! values such as `f64` are neither `Hash` nor `Ord`.

/// A count-keyed multiset
#[derive(Clone, Debug)]
pub struct Multiset<E> {
    entries: Vec<(E, usize)>,
}

impl<E> Multiset<E> {
    /// Create an empty multiset
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Total number of elements, counting multiplicity
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every element, repeated by its multiplicity.
    ///
    /// Elements come out grouped, in order of first insertion.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries
            .iter()
            .flat_map(|(elem, count)| std::iter::repeat_n(elem, *count))
    }

    /// Iterate over distinct elements with their multiplicity
    pub fn counts(&self) -> impl Iterator<Item = (&E, usize)> {
        self.entries.iter().map(|(elem, count)| (elem, *count))
    }
}

impl<E: PartialEq> Multiset<E> {
    /// Add one occurrence of `elem`
    pub fn insert(&mut self, elem: E) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == elem) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((elem, 1)),
        }
    }

    /// Multiplicity of `elem` (zero when absent)
    pub fn count(&self, elem: &E) -> usize {
        self.entries
            .iter()
            .find(|(existing, _)| existing == elem)
            .map_or(0, |(_, count)| *count)
    }
}

impl<E> Default for Multiset<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartialEq> FromIterator<E> for Multiset<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Multiset::new();
        for elem in iter {
            set.insert(elem);
        }
        set
    }
}

impl<E: PartialEq> PartialEq for Multiset<E> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(elem, count)| other.count(elem) == *count)
    }
}
