//! Integer Partitions
//! =========================================
//!
//! Problem
//! -------
//! Count the partitions of a non-negative integer `n`: the distinct ways to
//! write `n` as an unordered sum of positive integers. Derive from that the
//! number of ways to write `n` as a sum of at least two positive integers,
//! which is the full count minus one for the single-part partition {n}.
//!
//! Approach
//! --------
//! 1) Recurrence over (n, max_part):
//!    - `count(n, m)` is the number of partitions of `n` whose parts are all
//!      <= `m`. Spend `k` copies of `m` (k = n/m down to 0) and partition the
//!      leftover with parts <= m - 1:
//!        count(n, m) = sum over k of count(n - k*m, m - 1)
//!    - Base cases: count(0, _) = 1 (the empty partition) and
//!      count(n, 1) = 1 (the all-ones partition).
//!
//! 2) Memoization:
//!    - Results live in a hash map keyed by the normalized (n, max_part)
//!      pair, owned by [`PartitionCounter`]. Bounds are clamped to
//!      max(1, min(n, max_part)) before any lookup or store, so every query
//!      with max_part >= n lands on the same cell and each distinct cell is
//!      written exactly once.
//!
//! 3) Worklist evaluation:
//!    - The recurrence is evaluated with an explicit stack of pending cells
//!      rather than call recursion. A popped cell either resolves from
//!      already-memoized dependents or re-queues itself beneath its missing
//!      dependents. Call depth stays flat no matter how large `n` gets;
//!      memory is bounded by the number of distinct cells, O(n^2).
//!
//! Performance notes
//! -----------------
//! - Filling the table for `n` touches ~n^2/2 cells with an O(n/m) dependent
//!   sweep per cell; a warm query is a single hash lookup.
//! - Build with release settings (opt-level=3, lto=thin, codegen-units=1,
//!   panic=abort) for timing work; `benches/partition_count.rs` compares the
//!   worklist against the plain evaluations in [`naive`].
//!
//! Correctness notes
//! -----------------
//! - Counts are u64, which holds p(n) exactly through n = 416; larger `n`
//!   overflows and is outside this crate's scope.
//! - `count_at_least_two_parts(0)` is the one rejected input: 0 has no
//!   representation as a sum of two or more positive parts, so the -1
//!   adjustment would be meaningless there.
//! - [`naive`] holds a direct-recursion twin of the recurrence and an
//!   exhaustive enumerator; the tests cross-check this module against both.

use std::collections::HashMap;

pub mod naive;

/// Result type alias for partition counting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The one failure mode: an argument outside an operation's domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A memo cell: (target sum, largest allowed part), always normalized.
type Cell = (u32, u32);

/// Clamp a part-size bound into its canonical range for `n`.
///
/// No partition of `n` can use a part larger than `n`, so any bound >= n is
/// the same query as bound = n. A bound of 0 is lifted to 1; the base cases
/// rely on 1 being the floor.
#[inline(always)]
fn clamp_bound(n: u32, max_part: u32) -> Cell {
    (n, max_part.min(n).max(1))
}

/// Memoized partition counter.
///
/// Owns the (n, max_part) -> count table. Construct one with
/// [`PartitionCounter::new`] and reuse it across queries to keep the memo
/// warm; the table only ever grows, and dropping the counter is the only way
/// to discard it. All methods take `&mut self`, so sharing a counter between
/// threads means wrapping it in a `Mutex` (computation is deterministic, so
/// that costs nothing but the lock).
#[derive(Debug, Default)]
pub struct PartitionCounter {
    memo: HashMap<Cell, u64>,
}

impl PartitionCounter {
    pub fn new() -> Self {
        Self {
            memo: HashMap::new(),
        }
    }

    /// Count of all partitions of `n`.
    ///
    /// `count(0)` is 1: the empty partition. Equivalent to
    /// [`count_with_max_part`](Self::count_with_max_part) with the bound at
    /// its cap of `n`.
    #[inline]
    pub fn count(&mut self, n: u32) -> u64 {
        self.count_with_max_part(n, n)
    }

    /// Count of partitions of `n` whose parts are all <= `max_part`.
    ///
    /// The bound is clamped to max(1, min(n, max_part)) first: bounds above
    /// `n` change nothing, and a bound of 0 is treated as 1.
    #[inline]
    pub fn count_with_max_part(&mut self, n: u32, max_part: u32) -> u64 {
        let root = clamp_bound(n, max_part);
        if let Some(&cached) = self.memo.get(&root) {
            return cached;
        }
        self.fill(root)
    }

    /// Count of the ways to write `n` as a sum of at least two positive
    /// integers: every partition of `n` except {n} itself.
    ///
    /// Fails with [`Error::InvalidArgument`] for n = 0, which has no
    /// multi-part representation to count.
    pub fn count_at_least_two_parts(&mut self, n: u32) -> Result<u64> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "n must be positive to be split into two or more parts".into(),
            ));
        }
        Ok(self.count(n) - 1)
    }

    /// Resolve `root` and every cell it transitively depends on, then return
    /// its count.
    ///
    /// Pending cells live on an explicit stack; nothing here recurses. A
    /// popped cell with unresolved dependents re-queues itself and then its
    /// missing dependents above it, so by the time it pops again the sweep
    /// finds every value in the memo. Pops of already-memoized cells are
    /// speculative duplicates and are dropped.
    fn fill(&mut self, root: Cell) -> u64 {
        let mut pending: Vec<Cell> = vec![root];

        while let Some(cell) = pending.pop() {
            if self.memo.contains_key(&cell) {
                continue;
            }
            let (n, bound) = cell;
            debug_assert_eq!(cell, clamp_bound(n, bound));

            if n == 0 || bound == 1 {
                // Empty partition / all-ones partition.
                self.memo.insert(cell, 1);
                continue;
            }

            // Spend k = n/bound down to 0 copies of `bound`; the leftover
            // n - k*bound sweeps n % bound, n % bound + bound, ..., n.
            let mut total: u64 = 0;
            let mut deferred = false;
            let mut rest = n % bound;
            loop {
                let dep = clamp_bound(rest, bound - 1);
                match self.memo.get(&dep) {
                    Some(&ways) if !deferred => total += ways,
                    Some(_) => {}
                    None => {
                        if !deferred {
                            pending.push(cell);
                            deferred = true;
                        }
                        pending.push(dep);
                    }
                }
                if rest == n {
                    break;
                }
                rest += bound;
            }

            if !deferred {
                self.memo.insert(cell, total);
            }
        }

        self.memo[&root]
    }
}
