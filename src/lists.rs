//! Flat list accessors and the sorted union of two lists.

/// Returns the first element of `list`.
///
/// # Returns
/// - `None` if `list` is empty.
///
/// # Examples
/// ```
/// use u_lists::lists::head;
/// assert_eq!(head(&[1, 2, 3]), Some(&1));
/// assert_eq!(head::<i32>(&[]), None);
/// ```
#[inline]
pub fn head<T>(list: &[T]) -> Option<&T> {
    list.first()
}

/// Returns every element of `list` after the first.
///
/// An empty or single-element list has an empty tail.
///
/// # Examples
/// ```
/// use u_lists::lists::tail;
/// assert_eq!(tail(&[1, 2, 3]), &[2, 3]);
/// assert_eq!(tail(&[1]), &[] as &[i32]);
/// ```
#[inline]
pub fn tail<T>(list: &[T]) -> &[T] {
    list.get(1..).unwrap_or(&[])
}

/// Concatenates `a` and `b` and sorts the result in ascending order.
///
/// Duplicates are kept. The sort is stable, so equal elements from `a`
/// precede equal elements from `b`.
///
/// # Returns
/// - `None` if either `a` or `b` is `None`. A present list is never merged
///   on its own.
///
/// # Complexity
/// Time: O((n + m) log(n + m)), Space: O(n + m)
///
/// # Examples
/// ```
/// use u_lists::lists::merge;
/// assert_eq!(merge(Some(&[1, 3, 5][..]), Some(&[2, 4][..])), Some(vec![1, 2, 3, 4, 5]));
/// assert_eq!(merge(None, Some(&[1][..])), None);
/// ```
pub fn merge<T: Ord + Clone>(a: Option<&[T]>, b: Option<&[T]>) -> Option<Vec<T>> {
    let (a, b) = (a?, b?);
    let mut merged = Vec::with_capacity(a.len() + b.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(b);
    merged.sort();
    Some(merged)
}
