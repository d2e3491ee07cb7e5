use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use log::{debug, trace};

use super::{Index, PartitionError, Result};

/// Vector-based partition of the elements `0 .. n` into disjoint sets.
///
/// Each set is identified by its representative, the root of a
/// parent-pointer tree. Merges are balanced by rank, and
/// [`find_compress`](#method.find_compress) flattens the paths it walks.
#[derive(Clone, PartialEq, Eq)]
pub struct Partition<I: Index = usize> {
    parents: Vec<I>,
    ranks: Vec<u8>,
    sets: usize,
}
// Invariants:
//  - self.parents.len() == self.ranks.len(), and that length fits in I
//  - self.sets is the number of roots, i.e. of e with parents[e] == e
//  - self.ranks[e] <= log2(self.len()) < 64, so a u8 rank never saturates

impl<I: Index> Debug for Partition<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Partition({:?})", self.parents)
    }
}

impl<I: Index> Default for Partition<I> {
    fn default() -> Self {
        Partition {
            parents: Vec::new(),
            ranks: Vec::new(),
            sets: 0,
        }
    }
}

// Callers pass only counts and elements at most `self.len()`, which fits
// in `I` by the invariant above; `insert` is the one place the length
// grows, and it checks the new length first.
fn to_index<I: Index>(n: usize) -> I {
    I::from_usize(n).expect("Partition: count exceeds index type")
}

impl<I: Index> Partition<I> {
    /// Creates a partition of `size` elements, each in its own set.
    pub fn new(size: I) -> Self {
        let size = size.to_usize();
        Partition {
            parents: (0 .. size).map(to_index).collect(),
            ranks: vec![0; size],
            sets: size,
        }
    }

    /// Discards all merges and makes this a partition of `size`
    /// singleton sets.
    pub fn reset(&mut self, size: I) {
        let size = size.to_usize();
        debug!("resetting partition of {} elements to {} singletons",
               self.len(), size);

        self.parents.clear();
        self.parents.extend((0 .. size).map(to_index::<I>));
        self.ranks.clear();
        self.ranks.resize(size, 0);
        self.sets = size;
    }

    /// The number of elements in all the sets.
    pub fn number_of_elements(&self) -> I {
        to_index(self.len())
    }

    /// The number of disjoint sets.
    pub fn number_of_sets(&self) -> I {
        to_index(self.sets)
    }

    /// The number of elements, as a `usize`.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Is the partition devoid of elements?
    ///
    /// An empty partition can grow with [`insert`](#method.insert).
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Appends `count` new elements, each in its own set.
    ///
    /// Existing elements keep their sets. Fails without modifying the
    /// partition if the new element count would not fit in `I`.
    pub fn insert(&mut self, count: I) -> Result<()> {
        let len = self.len();
        let count = count.to_usize();

        let new_len = len.checked_add(count)
            .filter(|&n| I::from_usize(n).is_some())
            .ok_or(PartitionError::Overflow { len, count })?;

        debug!("inserting {} singletons after {} elements", count, len);

        self.parents.extend((len .. new_len).map(to_index::<I>));
        self.ranks.resize(new_len, 0);
        self.sets += count;
        Ok(())
    }

    /// Finds the representative of the given element’s set without
    /// modifying the partition.
    ///
    /// Takes time proportional to the element’s depth, which
    /// [`find_compress`](#method.find_compress) keeps short.
    pub fn find(&self, element: I) -> Result<I> {
        let element = self.check(element)?;
        Ok(self.parents[self.root(element)])
    }

    /// Finds the representative of the given element’s set, pointing
    /// every element on the way directly at it.
    ///
    /// Returns the same representative as [`find`](#method.find). Only
    /// parent links change; sets, ranks and the set count do not.
    pub fn find_compress(&mut self, element: I) -> Result<I> {
        let element = self.check(element)?;
        let root = self.compress_path(element);
        Ok(self.parents[root])
    }

    /// Joins the sets of the two given elements.
    ///
    /// Returns `true` if the sets were different and `false` if they
    /// were already the same. The root of lower rank goes under the
    /// other; on equal ranks, `a`’s root becomes the representative.
    pub fn merge(&mut self, a: I, b: I) -> Result<bool> {
        let a = self.check(a)?;
        let b = self.check(b)?;

        let a = self.compress_path(a);
        let b = self.compress_path(b);

        if a == b { return Ok(false); }

        let rank_a = self.rank(a);
        let rank_b = self.rank(b);

        if rank_a < rank_b {
            self.set_root(a, b);
        } else if rank_a > rank_b {
            self.set_root(b, a);
        } else {
            self.set_root(b, a);
            self.increment_rank(a);
        }

        self.sets -= 1;
        Ok(true)
    }

    /// Determines whether two elements are in the same set.
    pub fn equiv(&self, a: I, b: I) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Points every element directly at its representative.
    pub fn compress(&mut self) {
        for element in 0 .. self.len() {
            let root = self.root(element);
            self.parents[element] = self.parents[root];
        }
    }

    /// The representatives of all sets, in ascending order.
    pub fn representatives(&self) -> Vec<I> {
        self.parents.iter().enumerate()
            .filter(|&(element, parent)| parent.to_usize() == element)
            .map(|(_, &parent)| parent)
            .collect()
    }

    /// Numbers the sets `0 .. number_of_sets()` by representative.
    ///
    /// The smallest representative gets label 0, the next label 1, and
    /// so on, so the labeling does not depend on the order of merges
    /// that produced the same sets and representatives.
    pub fn representative_labeling(&self) -> BTreeMap<I, I> {
        self.representatives().into_iter().enumerate()
            .map(|(label, root)| (root, to_index(label)))
            .collect()
    }

    /// Labels every element with its set’s label from
    /// [`representative_labeling`](#method.representative_labeling).
    ///
    /// Entry `e` of the result is the label of element `e`.
    pub fn element_labeling(&self) -> Vec<I> {
        // Only the slots of roots are read back.
        let mut labels = self.parents.clone();
        for (label, root) in self.representatives().into_iter().enumerate() {
            labels[root.to_usize()] = to_index(label);
        }

        (0 .. self.len())
            .map(|element| labels[self.root(element)])
            .collect()
    }

    // HELPERS

    // Compares in `I`, so an element never passes by way of a lossy cast.
    fn check(&self, element: I) -> Result<usize> {
        if element < self.number_of_elements() {
            Ok(element.to_usize())
        } else {
            Err(PartitionError::OutOfRange {
                element: element.to_usize(),
                len: self.len(),
            })
        }
    }

    fn root(&self, mut element: usize) -> usize {
        loop {
            let parent = self.parent(element);
            if parent == element { return element; }
            element = parent;
        }
    }

    fn compress_path(&mut self, mut element: usize) -> usize {
        let root = self.root(element);

        while element != root {
            let parent = self.parent(element);
            self.parents[element] = self.parents[root];
            element = parent;
        }

        root
    }

    fn parent(&self, element: usize) -> usize {
        self.parents[element].to_usize()
    }

    // `root` must be a root; its parent slot holds its own index.
    fn set_root(&mut self, child: usize, root: usize) {
        trace!("attaching root {} under root {}", child, root);
        self.parents[child] = self.parents[root];
    }

    fn rank(&self, element: usize) -> u8 {
        self.ranks[element]
    }

    fn increment_rank(&mut self, element: usize) {
        self.ranks[element] = self.ranks[element].saturating_add(1);
    }
}
