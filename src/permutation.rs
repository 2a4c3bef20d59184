//! Index sequences and permutations.
//!
//! - [`sequence`]: deterministic `[start, start + n)` index run
//! - [`random_permutation`]: uniform shuffle of a sequence
//! - [`limited_permutations`]: lexicographic enumeration capped at a budget
//! - [`reverse_segment`]: 2-opt move on a route
//!
//! Routes are `Vec<usize>` index vectors into a point base; nothing here
//! knows about points or costs.

use rand::Rng;

/// Returns the integers `[start, start + n)` in ascending order.
pub fn sequence(n: usize, start: usize) -> Vec<usize> {
    (start..start + n).collect()
}

/// Returns a uniformly shuffled copy of `items` (Fisher–Yates).
pub fn random_permutation<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut perm = items.to_vec();
    u_numflow::random::shuffle(&mut perm, rng);
    perm
}

/// Lazily enumerates permutations of `items` in lexicographic order of
/// their positions, yielding at most `limit` of them.
///
/// The first permutation yielded is `items` in its given order. When
/// `n! <= limit` the enumeration is exhaustive; otherwise it stops after
/// `limit` permutations, all of which share a fixed prefix ordering.
///
/// # Examples
///
/// ```
/// use tsp_anneal::permutation::limited_permutations;
///
/// let perms: Vec<Vec<char>> = limited_permutations(&['a', 'b', 'c'], 10).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec!['a', 'b', 'c']);
/// assert_eq!(perms[1], vec!['a', 'c', 'b']);
/// ```
pub fn limited_permutations<T: Clone>(items: &[T], limit: usize) -> LimitedPermutations<'_, T> {
    LimitedPermutations {
        items,
        indices: Some(sequence(items.len(), 0)),
        remaining: limit,
    }
}

/// Iterator returned by [`limited_permutations`].
#[derive(Debug, Clone)]
pub struct LimitedPermutations<'a, T> {
    items: &'a [T],
    indices: Option<Vec<usize>>,
    remaining: usize,
}

impl<T: Clone> Iterator for LimitedPermutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.remaining == 0 {
            return None;
        }
        let indices = self.indices.as_mut()?;
        let perm = indices.iter().map(|&i| self.items[i].clone()).collect();
        self.remaining -= 1;
        if !next_lexicographic(indices) {
            self.indices = None;
        }
        Some(perm)
    }
}

/// Advances `indices` to the next permutation in lexicographic order.
/// Returns `false` when `indices` was already the last one.
fn next_lexicographic(indices: &mut [usize]) -> bool {
    let n = indices.len();
    if n < 2 {
        return false;
    }
    let mut pivot = n - 1;
    while pivot > 0 && indices[pivot - 1] >= indices[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let mut successor = n - 1;
    while indices[successor] <= indices[pivot - 1] {
        successor -= 1;
    }
    indices.swap(pivot - 1, successor);
    indices[pivot..].reverse();
    true
}

/// 2-opt perturbation: picks boundaries `a <= b` uniformly from `0..=n`
/// and returns a copy of `route` with the half-open range `[a, b)` reversed.
///
/// `a == b` leaves the route unchanged. Empty routes are returned as-is.
pub fn reverse_segment<R: Rng>(route: &[usize], rng: &mut R) -> Vec<usize> {
    let mut candidate = route.to_vec();
    let n = candidate.len();
    if n == 0 {
        return candidate;
    }
    let a = rng.random_range(0..=n);
    let b = rng.random_range(0..=n);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    candidate[start..end].reverse();
    candidate
}

/// Whether `route` contains every index of `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in route {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
