//! Core types shared by the action and the invoker

/// Reference to a procedure that accepts one integer and returns nothing.
///
/// Function pointers are non-nullable and always point at `'static` code, so
/// any value of this type is safe to hand to [`crate::use_it`].
pub type Proc = fn(i32);

/// Argument the invoker passes to every action it calls
pub const INVOKE_ARG: i32 = 0;

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, InvokerError>;

/// Errors that can occur while emitting action output
#[derive(Debug, thiserror::Error)]
pub enum InvokerError {
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
