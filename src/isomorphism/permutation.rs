use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
};

/// A bijection on `0..len`, stored in one-line notation: position `i` holds
/// the image of `i`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Option<Self> {
        let vec: Vec<usize> = values.into_iter().collect();

        let n = vec.len();
        let mut seen = vec![false; n];

        for &value in &vec {
            if value >= n || seen[value] {
                return None;
            }
            seen[value] = true;
        }

        Some(Self(vec))
    }

    /// Wraps values already known to form a permutation, such as those
    /// produced by [`itertools::Itertools::permutations`].
    pub(crate) fn new_unchecked(values: Vec<usize>) -> Self {
        debug_assert!(Self::new(values.iter().copied()).is_some());
        Self(values)
    }

    pub fn identity(size: usize) -> Self {
        Self((0..size).collect())
    }

    /// Builds a permutation of `0..size` from disjoint cycles. Elements that
    /// appear in no cycle are fixed.
    pub fn from_cycles(cycles: &[Vec<usize>], size: usize) -> Option<Self> {
        let mut images: Vec<usize> = (0..size).collect();
        let mut seen = vec![false; size];

        for cycle in cycles {
            for (i, &element) in cycle.iter().enumerate() {
                if element >= size || seen[element] {
                    return None;
                }
                seen[element] = true;
                images[element] = cycle[(i + 1) % cycle.len()];
            }
        }

        Some(Self(images))
    }

    pub fn apply(&self, element: usize) -> usize {
        self.0[element]
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &image)| i == image)
    }

    /// `self ∘ other`: applies `other` first, then `self`. Returns `None` if
    /// the two act on sets of different sizes.
    pub fn compose(&self, other: &Permutation) -> Option<Self> {
        if self.len() != other.len() {
            return None;
        }
        Some(Self(other.0.iter().map(|&x| self.apply(x)).collect()))
    }

    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.len()];
        for (i, &image) in self.0.iter().enumerate() {
            inverse[image] = i;
        }
        Self(inverse)
    }

    /// Disjoint cycle notation. Fixed points are kept as cycles of length one,
    /// each cycle starts at its smallest element and cycles are ordered by
    /// that element.
    pub fn to_cycles(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.len()];
        let mut cycles = vec![];

        for start in 0..self.len() {
            if seen[start] {
                continue;
            }
            let mut cycle = vec![start];
            seen[start] = true;
            let mut current = self.apply(start);
            while current != start {
                cycle.push(current);
                seen[current] = true;
                current = self.apply(current);
            }
            cycles.push(cycle);
        }

        cycles
    }

    /// Lengths of the disjoint cycles, fixed points included, longest first.
    pub fn cycle_type(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.to_cycles().iter().map(Vec::len).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths
    }

    /// A permutation with cycle type `l1, ..., lk` has the parity of
    /// `l1 + ... + lk - k`.
    pub fn is_even(&self) -> bool {
        let cycle_type = self.cycle_type();
        (cycle_type.iter().sum::<usize>() - cycle_type.len()) % 2 == 0
    }

    /// The subgroup generated by this permutation, as its powers
    /// `self, self^2, ...` up to and including the identity.
    pub fn cyclic_subgroup(&self) -> Vec<Self> {
        let mut powers = vec![self.clone()];
        let mut current = self.clone();
        while !current.is_identity() {
            current = Self(self.0.iter().map(|&x| current.apply(x)).collect());
            powers.push(current.clone());
        }
        powers
    }

    /// The smallest `k > 0` such that applying the permutation `k` times is
    /// the identity.
    pub fn order(&self) -> usize {
        self.to_cycles()
            .iter()
            .map(Vec::len)
            .fold(1, |acc, len| acc / gcd(acc, len) * len)
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Deref for Permutation {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Permutation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        for cycle in self.to_cycles() {
            let elements: Vec<String> = cycle.iter().map(usize::to_string).collect();
            write!(f, "({})", elements.join(" "))?;
        }
        Ok(())
    }
}
