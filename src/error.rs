use thiserror::Error;

/// Caller contract violations reported by the `try_` operations.
///
/// Absence (`None`) is never an error in this crate; these variants only
/// cover inputs the plain operations would panic on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A present sublist had no elements, so there is nothing to fold.
    #[error("sublist at index {index} is empty; folding needs at least one element")]
    EmptySublist { index: usize },
    /// No functions were supplied to compose.
    #[error("cannot compose an empty list of functions")]
    EmptyFunctionList,
}
