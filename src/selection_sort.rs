use std::collections::VecDeque;

use crate::Compare;

/// Returns the index of the greatest element of `v` under `compare`.
///
/// The scan keeps the current candidate unless a later element compares strictly greater, so among
/// equal greatest elements the first one encountered is picked. `v` must not be empty.
fn max_index<T, F>(v: &[T], compare: &mut F) -> usize
where
    F: Compare<T>,
{
    debug_assert!(!v.is_empty());
    let mut max = 0;
    for (i, el) in v.iter().enumerate().skip(1) {
        if compare(&v[max], el).is_lt() {
            max = i;
        }
    }
    max
}

/// Selection sort building the result back to front: every pass removes the greatest remaining
/// element and prepends it to the sorted region.
pub(crate) fn selection_sort<T, F>(mut unsorted: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: Compare<T>,
{
    let mut sorted = VecDeque::with_capacity(unsorted.len());
    while !unsorted.is_empty() {
        let max = max_index(&unsorted, compare);
        // Positional removal, duplicates of the greatest value stay where they are.
        sorted.push_front(unsorted.remove(max));
    }
    sorted.into()
}
