//! Ascending integer sequences: counting, even, and prime numbers.
//!
//! Every generator takes an optional upper bound and propagates absence:
//! `None` in, `None` out. A bound of zero or below yields an empty list,
//! which is distinct from `None`.
//!
//! [`even_numbers`] and [`prime_numbers`] are filters over
//! [`counting_numbers`], so all three agree on the range they cover.

use crate::primes::is_prime;

/// Returns `[1, 2, ..., limit]` in ascending order.
///
/// # Returns
/// - `None` if `limit` is `None`.
/// - An empty list if `limit <= 0`.
///
/// # Complexity
/// Time: O(limit), Space: O(limit)
///
/// # Examples
/// ```
/// use u_lists::sequences::counting_numbers;
/// assert_eq!(counting_numbers(Some(5)), Some(vec![1, 2, 3, 4, 5]));
/// assert_eq!(counting_numbers(Some(0)), Some(vec![]));
/// assert_eq!(counting_numbers(None), None);
/// ```
pub fn counting_numbers(limit: Option<i32>) -> Option<Vec<i32>> {
    limit.map(|limit| (1..=limit).collect())
}

/// Returns the even values of `[1, limit]` in ascending order.
///
/// # Returns
/// - `None` if `n` is `None`.
///
/// # Examples
/// ```
/// use u_lists::sequences::even_numbers;
/// assert_eq!(even_numbers(Some(10)), Some(vec![2, 4, 6, 8, 10]));
/// assert_eq!(even_numbers(Some(9)), Some(vec![2, 4, 6, 8]));
/// assert_eq!(even_numbers(None), None);
/// ```
pub fn even_numbers(n: Option<i32>) -> Option<Vec<i32>> {
    counting_numbers(n).map(|seq| seq.into_iter().filter(|x| x % 2 == 0).collect())
}

/// Returns the primes in `[1, n]` in ascending order.
///
/// Keeps the values that pass [`is_prime`] and are not `1`.
///
/// # Returns
/// - `None` if `n` is `None`.
///
/// # Complexity
/// Time: O(n·√n), Space: O(n)
///
/// # Examples
/// ```
/// use u_lists::sequences::prime_numbers;
/// assert_eq!(prime_numbers(Some(10)), Some(vec![2, 3, 5, 7]));
/// assert_eq!(prime_numbers(Some(1)), Some(vec![]));
/// assert_eq!(prime_numbers(None), None);
/// ```
pub fn prime_numbers(n: Option<i32>) -> Option<Vec<i32>> {
    counting_numbers(n).map(|seq| {
        seq.into_iter()
            .filter(|&x| is_prime(x) && x != 1)
            .collect()
    })
}
