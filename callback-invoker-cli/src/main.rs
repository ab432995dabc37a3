//! Callback Invoker CLI Application
//!
//! Runs the callback-invoker demonstration: the action is invoked once
//! through a stored function pointer and once through a direct reference,
//! printing `0` each time.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

/// Callback Invoker - call a function through a function pointer
///
/// Help and version flags are disabled: no argument changes stdout.
#[derive(Parser, Debug, Default)]
#[command(name = "callback-invoker-cli")]
#[command(about = "Invoke an int-accepting action through a function pointer", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, overrides_with = "quiet")]
    quiet: bool,

    /// Additional arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

fn main() -> Result<()> {
    // Parse command line arguments; anything clap rejects falls back to defaults
    let (args, parse_error) = match Args::try_parse() {
        Ok(args) => (args, None),
        Err(e) => (Args::default(), Some(e)),
    };

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    if let Some(e) = parse_error {
        log::debug!("Ignoring unparsed arguments: {:?}", e.kind());
    }

    log::info!("Callback Invoker CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using invoker library v{}", callback_invoker::VERSION);
    if !args.rest.is_empty() {
        log::debug!("Ignoring arguments: {:?}", args.rest);
    }

    callback_invoker::run();

    Ok(())
}

/// Map verbosity flags to a log level. Stdout carries program output, so the
/// default stays quiet on stderr.
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use std::io::Write;

    Builder::new()
        .filter_level(log_level(verbose, quiet))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
