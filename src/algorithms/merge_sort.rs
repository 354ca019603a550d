// Copyright (c) 2025 Paa Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Stable top-down merge sort.

/// Sorts `items` in place with a stable merge sort.
///
/// Worst case is `O(n log n)` comparisons on any input ordering, with one scratch
/// buffer of `items.len()` clones. Recursion depth is `ceil(log2(n))`. Elements that
/// compare equal keep their relative order.
///
/// The first half of each split takes the extra element for odd lengths.
pub fn merge_sort<T, F>(items: &mut [T], mut less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }

    let mut scratch = items.to_vec();
    sort_into(&mut scratch, items, &mut less);
}

/// Sorts `dst`, using `src` as scratch space.
///
/// On entry `src` and `dst` hold the same sequence. On exit `dst` is sorted and the
/// contents of `src` are unspecified.
fn sort_into<T, F>(src: &mut [T], dst: &mut [T], less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = dst.len();
    if len < 2 {
        return;
    }

    let mid = len / 2 + len % 2;
    // Sort each half of `src`, borrowing the matching half of `dst` as scratch.
    sort_into(&mut dst[..mid], &mut src[..mid], less);
    sort_into(&mut dst[mid..], &mut src[mid..], less);

    let (left, right) = src.split_at(mid);
    merge(left, right, dst, less);
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // Take from the left run unless the right element is strictly smaller.
        let take_left = j >= right.len() || (i < left.len() && !less(&right[j], &left[i]));
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
