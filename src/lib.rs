//! # u-lists
//!
//! List generators, nested-list folds, and function composition for the
//! U-Engine ecosystem.
//!
//! Every operation is a pure function over small in-memory lists: inputs
//! are borrowed and never mutated, results are freshly allocated.
//!
//! ## Modules
//!
//! - [`primes`]: Trial-division primality
//! - [`sequences`]: Counting, even, and prime number ranges
//! - [`lists`]: `head`/`tail` accessors and sorted merge
//! - [`nested`]: Prefix generation, element counts, and per-sublist folds
//! - [`compose`](mod@compose): Pairwise and list-wide function composition
//! - [`error`]: Contract violations reported by the `try_` operations
//!
//! ## Design Philosophy
//!
//! - **Absence is data**: a `None` input yields a `None` output, never an
//!   error. An empty list is not the same as an absent one.
//! - **Contract violations are loud**: folding an empty sublist or composing
//!   zero functions panics; the `try_` variants return [`ListError`] instead.
//! - **Property-based testing**: invariants verified via proptest

pub mod compose;
pub mod error;
pub mod lists;
pub mod nested;
pub mod primes;
pub mod sequences;

pub use compose::{compose, compose_list, try_compose_list, UnaryFn};
pub use error::ListError;
pub use lists::{head, merge, tail};
pub use nested::{count_elements, list_apply, sub_lists, try_list_apply};
pub use primes::is_prime;
pub use sequences::{counting_numbers, even_numbers, prime_numbers};
