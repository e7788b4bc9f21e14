/// Low-level lexicographic permutation enumerator which rewrites an external
/// buffer in place. [`Permutations`] wraps it into an owning iterator; the
/// manipulation scan and the efficient-set search drive it directly through
/// [`Permutations::next_lending`] to avoid cloning every candidate.
#[derive(Debug, Clone)]
pub(crate) struct PermutationState {
    started: bool,
    done: bool,
}

impl PermutationState {
    pub(crate) fn new() -> Self {
        Self { started: false, done: false }
    }

    /// Advances `perm` to its lexicographic successor.
    ///
    /// The first call leaves `perm` untouched (it must start sorted). Returns
    /// `false` once the last permutation has been produced.
    pub(crate) fn next_permutation(&mut self, perm: &mut [usize]) -> bool {
        if self.done {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }
        let n = perm.len();
        // Rightmost ascent perm[i] < perm[i + 1].
        let Some(i) = (0..n.saturating_sub(1)).rev().find(|&i| perm[i] < perm[i + 1]) else {
            self.done = true;
            return false;
        };
        let j = (i + 1..n)
            .rev()
            .find(|&j| perm[j] > perm[i])
            .unwrap_or(i + 1);
        perm.swap(i, j);
        perm[i + 1..].reverse();
        true
    }
}

/// All permutations of `0..n` in lexicographic order.
///
/// For `n = 0` the single empty permutation is produced.
pub struct Permutations {
    perm: Vec<usize>,
    state: PermutationState,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            perm: (0..n).collect(),
            state: PermutationState::new(),
        }
    }

    /// Advances and borrows the current permutation.
    pub fn next_lending(&mut self) -> Option<&[usize]> {
        if self.state.next_permutation(&mut self.perm) { Some(self.perm.as_slice()) } else { None }
    }

    /// Number of permutations of `0..n`, saturating at `usize::MAX`.
    pub fn total(n: usize) -> usize {
        (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k))
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lending().map(|p| p.to_vec())
    }
}
