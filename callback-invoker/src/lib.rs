//! Callback Invoker Library
//!
//! Demonstrates storing a reference to a function in a typed variable,
//! passing it to another function, and calling it indirectly.
//!
//! # Architecture
//!
//! - [`Proc`] is the action reference type: `fn(i32)`
//! - [`do_it`] is the action, it prints its argument
//! - [`use_it`] is the invoker, it calls an action with [`INVOKE_ARG`]
//!
//! All process setup (argument parsing, logging) lives in the
//! application layer (callback-invoker-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use callback_invoker::{do_it, use_it, Proc};
//!
//! // Through a stored reference
//! let ptr: Proc = do_it;
//! use_it(ptr);
//!
//! // Through a reference formed at the call site
//! use_it(do_it);
//! ```

// Public modules
pub mod action;
pub mod invoker;
pub mod types;

// Re-export main types for convenience
pub use action::{do_it, write_value};
pub use invoker::use_it;
pub use types::{InvokerError, Proc, Result, INVOKE_ARG};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the demonstration: invoke [`do_it`] once through a stored reference
/// and once through a reference formed in place.
pub fn run() {
    let ptr: Proc = do_it;
    log::debug!("Invoking through stored reference");
    use_it(ptr);

    log::debug!("Invoking through direct reference");
    use_it(do_it);
}
