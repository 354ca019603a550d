// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Partition-based (quick) sort with an explicit work stack.

/// Sorts `items` in place using a midpoint-pivot partition sort.
///
/// The pivot is taken from the middle of each range, which keeps already-sorted and
/// reverse-sorted input at `O(n log n)`. Ranges are processed from an explicit stack
/// that always defers the larger side, so the stack never holds more than
/// `O(log n)` ranges regardless of the input order.
///
/// The sort is not stable. Callers that need reproducible output for equal elements
/// must make `less` a total order (for example by adding an index tie-breaker).
///
/// # Arguments
///
/// * `items` - The slice to sort.
/// * `less` - Returns `true` when the first argument is ordered before the second.
pub fn partition_sort<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }

    // Inclusive (left, right) ranges still to be partitioned.
    let mut pending: Vec<(usize, usize)> = Vec::new();
    pending.push((0, items.len() - 1));

    while let Some((left, right)) = pending.pop() {
        if left >= right {
            continue;
        }

        let pivot = partition(items, left, right, &mut less);

        let lower = (pivot > left).then(|| (left, pivot - 1));
        let upper = (pivot < right).then(|| (pivot + 1, right));

        match (lower, upper) {
            (Some(lower), Some(upper)) => {
                // Push the larger range first so the smaller one is handled next.
                if lower.1 - lower.0 > upper.1 - upper.0 {
                    pending.push(lower);
                    pending.push(upper);
                } else {
                    pending.push(upper);
                    pending.push(lower);
                }
            }
            (Some(range), None) | (None, Some(range)) => pending.push(range),
            (None, None) => {}
        }
    }
}

/// Lomuto partition of `items[left..=right]` around the midpoint element.
///
/// Returns the final position of the pivot. Every element before it compares less
/// than the pivot; every element after it does not.
fn partition<T, F>(items: &mut [T], left: usize, right: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let midpoint = left + (right - left) / 2;
    items.swap(midpoint, right);

    let mut store = left;
    for index in left..right {
        if less(&items[index], &items[right]) {
            items.swap(index, store);
            store += 1;
        }
    }
    items.swap(store, right);
    store
}
