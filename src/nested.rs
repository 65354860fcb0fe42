//! Operations over lists of optional sublists.
//!
//! A nested list is `&[Option<Vec<i32>>]`: the outer list may itself be
//! absent, and each sublist may be absent independently. Absent sublists
//! are skipped rather than treated as errors.
//!
//! # Folding
//!
//! [`list_apply`] reduces each sublist with a binary function, seeding the
//! accumulator with the first two elements. A single-element sublist passes
//! through unchanged; an empty one has nothing to seed from and is a caller
//! contract violation. [`try_list_apply`] reports that case as
//! [`ListError::EmptySublist`] instead of panicking.

use crate::error::ListError;
use crate::sequences::counting_numbers;

/// Builds the prefixes `[1]`, `[1, 2]`, ..., `[1, ..., k]` where `k` is the
/// last element of `a`.
///
/// Only the last element (by position) of `a` matters; the other values
/// are ignored. The `i`-th sublist is `counting_numbers(Some(i))`.
///
/// # Returns
/// - `None` if `a` is `None`.
/// - An empty list if `a` is empty or its last element is `<= 0`.
///
/// # Complexity
/// Time: O(k²), Space: O(k²)
///
/// # Examples
/// ```
/// use u_lists::nested::sub_lists;
/// assert_eq!(
///     sub_lists(Some(&[1, 2, 3][..])),
///     Some(vec![Some(vec![1]), Some(vec![1, 2]), Some(vec![1, 2, 3])])
/// );
/// assert_eq!(sub_lists(Some(&[][..])), Some(vec![]));
/// assert_eq!(sub_lists(None), None);
/// ```
pub fn sub_lists(a: Option<&[i32]>) -> Option<Vec<Option<Vec<i32>>>> {
    let a = a?;
    let Some(&last) = a.last() else {
        return Some(Vec::new());
    };
    Some((1..=last).map(|k| counting_numbers(Some(k))).collect())
}

/// Counts the elements across every present sublist.
///
/// Absent and empty sublists contribute zero. Never absent itself.
///
/// # Returns
/// - `0` if `a` is `None` or empty.
///
/// # Examples
/// ```
/// use u_lists::nested::count_elements;
/// let nested = [Some(vec![1, 2]), None, Some(vec![1, 2, 3])];
/// assert_eq!(count_elements(Some(&nested[..])), 5);
/// assert_eq!(count_elements(None), 0);
/// ```
pub fn count_elements(a: Option<&[Option<Vec<i32>>]>) -> usize {
    a.unwrap_or_default()
        .iter()
        .flatten()
        .map(Vec::len)
        .sum()
}

/// Folds each present sublist of `a` with `f` and collects the results.
///
/// A sublist `[x]` yields `x`; a sublist `[x0, x1, ..., xn]` yields
/// `f(...f(f(x0, x1), x2)..., xn)`. Absent sublists are skipped, so the
/// output may be shorter than `a`.
///
/// # Returns
/// - `None` if `a` is `None` or empty.
///
/// # Panics
/// Panics if any present sublist is empty. Use [`try_list_apply`] to get
/// an error instead.
///
/// # Examples
/// ```
/// use u_lists::nested::list_apply;
/// let nested = [Some(vec![1, 2, 3]), None, Some(vec![5])];
/// assert_eq!(list_apply(|a, b| a + b, Some(&nested[..])), Some(vec![6, 5]));
/// ```
pub fn list_apply<F>(f: F, a: Option<&[Option<Vec<i32>>]>) -> Option<Vec<i32>>
where
    F: Fn(i32, i32) -> i32,
{
    try_list_apply(f, a).unwrap_or_else(|err| panic!("list_apply: {err}"))
}

/// Fallible form of [`list_apply`].
///
/// # Errors
/// Returns [`ListError::EmptySublist`] with the position of the first
/// present sublist that has no elements. Nothing before it is returned.
///
/// # Examples
/// ```
/// use u_lists::{nested::try_list_apply, ListError};
/// let nested = [Some(vec![2, 3]), Some(vec![])];
/// assert_eq!(
///     try_list_apply(|a, b| a * b, Some(&nested[..])),
///     Err(ListError::EmptySublist { index: 1 })
/// );
/// ```
pub fn try_list_apply<F>(
    f: F,
    a: Option<&[Option<Vec<i32>>]>,
) -> Result<Option<Vec<i32>>, ListError>
where
    F: Fn(i32, i32) -> i32,
{
    let a = match a {
        Some(a) if !a.is_empty() => a,
        _ => return Ok(None),
    };

    let mut folded = Vec::with_capacity(a.len());
    for (index, item) in a.iter().enumerate() {
        let Some(item) = item else { continue };
        let Some((&first, rest)) = item.split_first() else {
            tracing::debug!(index, sublists = a.len(), "rejected empty sublist");
            return Err(ListError::EmptySublist { index });
        };
        folded.push(rest.iter().fold(first, |acc, &x| f(acc, x)));
    }
    Ok(Some(folded))
}
