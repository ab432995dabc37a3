//! The int-accepting action
//!
//! [`do_it`] has exactly the shape of [`crate::Proc`], so it can be stored in a
//! variable of that type or passed straight to the invoker.

use crate::types::Result;
use std::io::{self, Write};

/// Write `value` in decimal followed by a newline
pub fn write_value<W: Write>(out: &mut W, value: i32) -> Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()?;
    Ok(())
}

/// Print `value` on its own line to standard output.
///
/// Write failures are logged and otherwise ignored; the action has no way to
/// report them to its caller.
pub fn do_it(value: i32) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_value(&mut out, value) {
        log::warn!("Could not print {}: {}", value, e);
    }
}
