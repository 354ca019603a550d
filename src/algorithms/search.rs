// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Binary search over sorted sequences.

/// Returns the first position in `items` whose element is not ordered before `value`.
///
/// `items` must be sorted with respect to `less`. The search window is at least halved
/// on every step, so the loop runs at most `ceil(log2(len + 1))` times and its only
/// branch is the comparison itself.
///
/// Returns `items.len()` when every element is ordered before `value`.
///
/// # Arguments
///
/// * `items` - Sorted sequence to search.
/// * `value` - The probe value. May be a different type than the elements.
/// * `less` - Returns `true` when an element is ordered before the probe value.
pub fn lower_bound<T, Q, F>(items: &[T], value: &Q, mut less: F) -> usize
where
    Q: ?Sized,
    F: FnMut(&T, &Q) -> bool,
{
    let mut first = 0;
    let mut count = items.len();

    while count > 0 {
        let step = count / 2;
        let probe = first + step;
        if less(&items[probe], value) {
            first = probe + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    first
}

/// [`lower_bound`] over an array whose length is fixed at compile time.
pub fn lower_bound_array<T, Q, F, const N: usize>(items: &[T; N], value: &Q, less: F) -> usize
where
    Q: ?Sized,
    F: FnMut(&T, &Q) -> bool,
{
    lower_bound(items.as_slice(), value, less)
}

/// Returns `true` if an element equivalent to `value` exists in the sorted `items`.
///
/// Two values are equivalent when neither is ordered before the other.
pub fn binary_search<T, F>(items: &[T], value: &T, mut less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let position = lower_bound(items, value, &mut less);
    items
        .get(position)
        .map_or(false, |found| !less(value, found))
}

/// Returns `true` if no element of `items` is ordered before its predecessor.
pub fn is_sorted_by<T, F>(items: &[T], mut less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    items.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}
