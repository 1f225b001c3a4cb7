use crate::heap::{Comparator, Heap};

/// Heapsort through an auxiliary heap: build in O(n) from a copy of the
/// input, then extract the root until empty. O(n log n) time, O(n) extra
/// space.
pub fn heap_sort<T>(input: &[T], ascending: bool) -> Vec<T>
where
    T: std::cmp::PartialOrd + Clone,
{
    let mut heap = if ascending {
        Heap::min_from(input.to_vec())
    } else {
        Heap::max_from(input.to_vec())
    };

    let mut sorted = Vec::with_capacity(input.len());
    while let Ok(value) = heap.extract() {
        sorted.push(value);
    }
    sorted
}

/// In-place heapsort on the caller's slice. The heap direction is the
/// inverse of the output order (max-heap for ascending) because each round
/// swaps the root, the most extreme live element, into the tail: swap
/// `data[0]` with `data[end]`, shrink the live range to `[0, end)`, re-sift
/// the new root. O(n log n) time, O(1) extra space.
pub fn heap_sort_inplace<T>(data: &mut [T], ascending: bool)
where
    T: std::cmp::PartialOrd,
{
    let before: Comparator<T> = if ascending {
        |a, b| a > b
    } else {
        |a, b| a < b
    };

    let n = data.len();
    for i in (0..n / 2).rev() {
        Heap::sift_down(data, i, n, before);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        Heap::sift_down(data, 0, end, before);
    }
}
