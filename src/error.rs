use thiserror::Error;

/// Failure to obtain a greeting from the native side.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingError {
    /// The C routine returned a null pointer.
    #[error("C-function gave back null!")]
    NativeGreetingUnavailable,
}
