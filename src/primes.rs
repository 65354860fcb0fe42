//! Trial-division primality.
//!
//! # Convention
//!
//! [`is_prime`] answers "does any integer in `[2, x - 1]` divide `x`?" and
//! nothing more. Values below 2 have no candidate divisors and therefore
//! test as prime. Callers that need the mathematical definition must exclude
//! them themselves, as [`prime_numbers`](crate::sequences::prime_numbers)
//! does for `1`.

/// Returns `true` if no integer in `[2, x - 1]` divides `x` evenly.
///
/// # Algorithm
/// Trial division. Candidates stop at `⌊√x⌋`: any divisor above the square
/// root pairs with one below it, so the answer matches a scan of the full
/// `[2, x - 1]` range.
///
/// # Complexity
/// Time: O(√x), Space: O(1)
///
/// # Edge cases
/// - `x = 2`: the candidate range is empty, returns `true`.
/// - `x <= 1` (including `0` and negatives): the candidate range is empty,
///   returns `true`.
///
/// # Examples
/// ```
/// use u_lists::primes::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(17));
/// assert!(!is_prime(4));
/// assert!(is_prime(1)); // no candidates in [2, 0]
/// ```
pub fn is_prime(x: i32) -> bool {
    (2..x)
        .take_while(|&i| i <= x / i)
        .all(|i| x % i != 0)
}
