use itertools::Itertools;

/// Vec of length `length` containing `element` `length` times
pub fn unit_slice<T: Clone>(element: T, length: usize) -> Vec<T> {
    std::iter::repeat(element).take(length).collect()
}

/// Sorted, deduplicated copy of a set of indices, ready for `contains`
pub fn sorted_indices(indices: &[usize]) -> Vec<usize> {
    indices.iter().copied().sorted().dedup().collect()
}

// `sorted` must be sorted ascending (see `sorted_indices`)
#[inline(always)]
pub fn contains(sorted: &[usize], target: usize) -> bool {
    sorted.binary_search(&target).is_ok()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
