//! Logger setup shared by the binaries

use env_logger::{Builder, Env};

/// Install the `env_logger` backend
///
/// `RUST_LOG` wins when set. Otherwise `verbosity` picks the default
/// filter: warnings only, then debug, then trace.
pub fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info,huedra_tools=debug",
        _ => "trace",
    };

    if let Err(e) = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
    {
        log::debug!("env_logger already initialized: {}", e);
    }
}
