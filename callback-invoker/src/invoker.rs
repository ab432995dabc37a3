//! Indirect invocation of an action reference

use crate::types::{Proc, INVOKE_ARG};

/// Call `p` once with [`INVOKE_ARG`]
pub fn use_it(p: Proc) {
    log::trace!("Invoking action with {}", INVOKE_ARG);
    p(INVOKE_ARG);
}
