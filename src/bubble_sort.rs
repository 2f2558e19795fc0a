use crate::Compare;

/// Carries a candidate from the front of `v` to its end.
///
/// The candidate stays behind as soon as the next element compares strictly greater, which then
/// becomes the new candidate. Otherwise the two are exchanged. Afterwards the last position holds
/// the greatest element of `v`.
fn carry_pass<T, F>(v: &mut [T], compare: &mut F)
where
    F: Compare<T>,
{
    for next in 1..v.len() {
        if !compare(&v[next - 1], &v[next]).is_lt() {
            v.swap(next - 1, next);
        }
    }
}

pub(crate) fn bubble_sort<T, F>(mut v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: Compare<T>,
{
    let mut unprocessed = v.len();
    while unprocessed > 0 {
        carry_pass(&mut v[..unprocessed], compare);
        unprocessed -= 1;
    }
    v
}
