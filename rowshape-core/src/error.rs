use thiserror::Error;

/// Contract violations detected at runtime.
///
/// Typed tuples reject these at compile time, the variants surface only through
/// the type-erased paths ([`Record`](crate::Record), [`IndexSet`](crate::IndexSet)).
/// They travel inside [`crate::Error`], use `downcast_ref::<SequenceError>()` to inspect them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Arity mismatch: expected {expected} elements, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("Type mismatch at position {position}: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Index out of range: position {position} in a set of length {len}")]
    IndexOutOfRange { position: usize, len: usize },
}
