//! Selection, insertion and bubble sort over a caller supplied three-way comparator.
//!
//! Every entry point leaves its input untouched and returns a freshly allocated, sorted `Vec`.
//! An absent input (`None`) is rejected with [`SortError::InvalidArgument`] before the comparator
//! is called even once.
use std::{cmp::Ordering, fmt, str::FromStr};

mod bubble_sort;
mod error;
mod insertion_sort;
mod selection_sort;
#[cfg(test)]
mod proptests;

pub use error::{Result, SortError};

pub(crate) trait Compare<T>: FnMut(&T, &T) -> Ordering {}
impl<T, F: FnMut(&T, &T) -> Ordering> Compare<T> for F {}

/// Sorts a copy of `input` with selection sort.
///
/// Each pass extracts the greatest remaining element and prepends it to the result, which yields
/// ascending order under `compare`. Equal elements are not kept in input order.
#[inline]
pub fn selection_sort<T, F>(input: Option<&[T]>, compare: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    Algorithm::Selection.sort_by(input, compare)
}

/// Sorts a copy of `input` with insertion sort.
///
/// Elements are inserted in input order, each in front of the first element of the sorted region
/// that does not compare less than it.
#[inline]
pub fn insertion_sort<T, F>(input: Option<&[T]>, compare: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    Algorithm::Insertion.sort_by(input, compare)
}

/// Sorts a copy of `input` with bubble sort, one carry pass per element.
#[inline]
pub fn bubble_sort<T, F>(input: Option<&[T]>, compare: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    Algorithm::Bubble.sort_by(input, compare)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
}

impl Algorithm {
    /// Every algorithm, in a fixed order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
    ];

    /// Name of the matching free function, e.g. `bubble_sort`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Bubble => "bubble_sort",
        }
    }

    /// Sorts a copy of `input` by `compare`, rejecting an absent input before comparing anything.
    pub fn sort_by<T, F>(self, input: Option<&[T]>, mut compare: F) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let Some(input) = input else {
            log::debug!("{self}: rejected absent input");
            return Err(SortError::InvalidArgument {
                algorithm: self.name(),
            });
        };
        Ok(self.run(input.to_vec(), &mut compare))
    }

    /// Sorts a copy of `v` ascending by `Ord`.
    pub fn sorted<T>(self, v: &[T]) -> Vec<T>
    where
        T: Ord + Clone,
    {
        self.run(v.to_vec(), &mut |a: &T, b: &T| a.cmp(b))
    }

    /// Sorts a copy of `v` ascending by the key `key` extracts.
    pub fn sorted_by_key<T, K, F>(self, v: &[T], mut key: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.run(v.to_vec(), &mut |a: &T, b: &T| key(a).cmp(&key(b)))
    }

    fn run<T, F>(self, v: Vec<T>, compare: &mut F) -> Vec<T>
    where
        F: Compare<T>,
    {
        log::trace!("{self}: sorting {} elements", v.len());
        match self {
            Algorithm::Selection => selection_sort::selection_sort(v, compare),
            Algorithm::Insertion => insertion_sort::insertion_sort(v, compare),
            Algorithm::Bubble => bubble_sort::bubble_sort(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `selection`, `insertion` and `bubble`, with or without a `_sort` suffix, in any
    /// case.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix("_sort").unwrap_or(&lower);
        match name {
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "bubble" => Ok(Algorithm::Bubble),
            _ => Err(SortError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
