//! Iterative lexicographic permutation generation.
//!
//! Orderings are index sequences over `0..n`, produced in lexicographic
//! order starting from the identity. This is the same sequence a standard
//! permutation generator yields over the input list. There are `n!`
//! orderings; callers are expected to keep `n` small.

/// Returns `n!`, or `None` if it does not fit in a `u64` (n > 20).
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Rearranges `s` into the next lexicographically greater permutation.
///
/// Returns false (leaving `s` untouched) if `s` is already the last one.
pub fn next_permutation(s: &mut [usize]) -> bool {
    if s.len() < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `i`.
    let mut i = s.len() - 1;
    while i > 0 && s[i - 1] >= s[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = s.len() - 1;
    while s[j] <= s[i - 1] {
        j -= 1;
    }
    s.swap(i - 1, j);
    s[i..].reverse();
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

/// Explicit permutation generator.
///
/// Yields borrowed index slices so the search loop does not allocate per
/// ordering. Positions before `fixed` never move, which lets a caller
/// enumerate one contiguous lexicographic block.
#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    fixed: usize,
    state: State,
}

impl Permutations {
    /// All orderings of `0..n`, starting from the identity.
    pub fn new(n: usize) -> Self {
        Permutations {
            indices: (0..n).collect(),
            fixed: 0,
            state: State::Fresh,
        }
    }

    /// The block of orderings of `0..n` whose first index is `first`.
    ///
    /// Blocks for `first = 0, 1, .., n-1` concatenated in that order give
    /// exactly the sequence of `Permutations::new(n)`.
    pub fn with_leading(n: usize, first: usize) -> Self {
        assert!(first < n, "leading index {first} out of range for {n} items");
        let mut indices = Vec::with_capacity(n);
        indices.push(first);
        indices.extend((0..n).filter(|&i| i != first));
        Permutations {
            indices,
            fixed: 1,
            state: State::Fresh,
        }
    }

    /// Advances to the next ordering and returns it.
    pub fn next_order(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Fresh => self.state = State::Running,
            State::Running => {
                if !next_permutation(&mut self.indices[self.fixed..]) {
                    self.state = State::Exhausted;
                    return None;
                }
            }
            State::Exhausted => return None,
        }
        Some(&self.indices)
    }
}
