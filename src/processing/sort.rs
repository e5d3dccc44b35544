//! Stable top-down merge sort.

/// Sort `items` into a new vector in non-decreasing order.
///
/// Splits at the midpoint, sorts each half recursively and merges. On ties the element from
/// the left half is taken first, which makes the sort stable. `O(n log n)` comparisons and
/// `O(n)` extra space per merge level.
pub fn merge_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }

    out
}
