use crate::Compare;

/// First index `i` with `sorted[i] >= element`, or `sorted.len()` if every element is smaller.
fn insertion_index<T, F>(sorted: &[T], element: &T, compare: &mut F) -> usize
where
    F: Compare<T>,
{
    sorted
        .iter()
        .position(|el| !compare(el, element).is_lt())
        .unwrap_or(sorted.len())
}

/// Takes the input elements front to back and inserts each one into a growing sorted region.
pub(crate) fn insertion_sort<T, F>(unsorted: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: Compare<T>,
{
    let mut sorted = Vec::with_capacity(unsorted.len());
    for element in unsorted {
        let index = insertion_index(&sorted, &element, compare);
        sorted.insert(index, element);
    }
    sorted
}
