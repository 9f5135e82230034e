//! Plain evaluations of the partition count.
//!
//! Two deliberately simple twins of the worklist engine in the crate root: a
//! direct-recursion version of the same recurrence, and an exhaustive
//! enumerator that materializes every partition. Both serve as oracles for
//! the test suite and as baselines for `benches/partition_count.rs`. Neither
//! is meant for large `n`: the recursion leans on the call stack the
//! worklist exists to avoid, and the enumerator's output grows as fast as
//! p(n) itself.

/// Direct-recursion count of the partitions of `n` with parts <= `max_part`.
///
/// Same recurrence and bound clamping as [`crate::PartitionCounter`], no
/// memo, call depth proportional to the clamped bound.
pub fn count_recursive(n: u32, max_part: u32) -> u64 {
    let bound = max_part.min(n).max(1);
    if n == 0 || bound == 1 {
        return 1;
    }
    let mut total = 0;
    let mut rest = n % bound;
    loop {
        total += count_recursive(rest, bound - 1);
        if rest == n {
            return total;
        }
        rest += bound;
    }
}

/// Every partition of `n`, parts in non-increasing order.
pub fn partitions(n: u32) -> Vec<Vec<u32>> {
    partitions_with_max_part(n, n)
}

/// Every partition of `n` whose parts are all <= `max_part`, parts in
/// non-increasing order.
///
/// Unlike the counter, this does not lift a bound of 0 to 1: with no parts
/// allowed there is nothing to enumerate, so for n > 0 the result is empty.
pub fn partitions_with_max_part(n: u32, max_part: u32) -> Vec<Vec<u32>> {
    let mut found = Vec::new();
    let mut prefix = Vec::new();
    extend(n, max_part.min(n), &mut prefix, &mut found);
    found
}

/// Backtracking helper: grow `prefix` with parts <= `largest` until the
/// remainder reaches zero.
fn extend(remainder: u32, largest: u32, prefix: &mut Vec<u32>, found: &mut Vec<Vec<u32>>) {
    if remainder == 0 {
        found.push(prefix.clone());
        return;
    }
    let mut part = largest.min(remainder);
    while part >= 1 {
        prefix.push(part);
        extend(remainder - part, part, prefix, found);
        prefix.pop();
        part -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartitionCounter;

    #[test]
    fn enumerates_the_partitions_of_four() {
        let expected = [
            vec![4],
            vec![3, 1],
            vec![2, 2],
            vec![2, 1, 1],
            vec![1, 1, 1, 1],
        ];
        assert_eq!(partitions(4), expected);
    }

    #[test]
    fn zero_has_exactly_the_empty_partition() {
        assert_eq!(partitions(0), vec![Vec::<u32>::new()]);
    }

    #[test]
    fn every_enumerated_partition_is_ordered_and_sums_to_n() {
        for n in 0..=12 {
            for partition in partitions(n) {
                assert_eq!(partition.iter().sum::<u32>(), n);
                assert!(partition.windows(2).all(|w| w[0] >= w[1]), "{partition:?}");
            }
        }
    }

    #[test]
    fn bound_of_zero_enumerates_nothing() {
        assert!(partitions_with_max_part(5, 0).is_empty());
    }

    #[test]
    fn recursive_count_matches_known_values() {
        assert_eq!(count_recursive(0, 0), 1);
        assert_eq!(count_recursive(5, 5), 7);
        assert_eq!(count_recursive(5, 2), 3);
        assert_eq!(count_recursive(10, 10), 42);
    }

    #[test]
    fn recursive_count_agrees_with_the_worklist() {
        let mut counter = PartitionCounter::new();
        for n in 0..=30 {
            assert_eq!(count_recursive(n, n), counter.count(n), "n = {n}");
        }
        for n in 0..=15 {
            for k in 1..=n + 2 {
                assert_eq!(
                    count_recursive(n, k),
                    counter.count_with_max_part(n, k),
                    "n = {n}, k = {k}"
                );
            }
        }
    }

    #[test]
    fn enumeration_agrees_with_the_worklist() {
        let mut counter = PartitionCounter::new();
        for n in 0..=20 {
            assert_eq!(partitions(n).len() as u64, counter.count(n), "n = {n}");
        }
        for n in 0..=15 {
            for k in 1..=n + 2 {
                assert_eq!(
                    partitions_with_max_part(n, k).len() as u64,
                    counter.count_with_max_part(n, k),
                    "n = {n}, k = {k}"
                );
            }
        }
    }
}
