//! Logger wiring for binaries and test harnesses.
//!
//! The library itself only talks to the `log` facade: a `trace!` record is
//! emitted whenever a zoom or move is clamped by a limit. Enable the `logger`
//! feature to get [`init_logging`], which installs `env_logger` on stderr.

use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};

/// Which records reach stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// `RUST_LOG` / `RUST_LOG_STYLE`, falling back to `warn`.
    #[default]
    FromEnv,
    /// Every clamp decision made by this crate; warnings from everything else.
    TraceGeometry,
    /// An `env_logger` filter string, e.g. `"info,marduk_geom=debug"`.
    Filter(String),
}

impl Verbosity {
    fn builder(&self) -> Builder {
        match self {
            Self::FromEnv => Builder::from_env(Env::default().default_filter_or("warn")),
            Self::TraceGeometry => {
                let mut b = Builder::new();
                b.filter_level(LevelFilter::Warn)
                    .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Trace);
                b
            }
            Self::Filter(filters) => {
                let mut b = Builder::new();
                b.parse_filters(filters);
                b
            }
        }
    }
}

/// Installs `env_logger` as the global logger.
///
/// Fails if a logger is already installed, by this function or anyone else.
pub fn init_logging(verbosity: Verbosity) -> Result<(), SetLoggerError> {
    verbosity.builder().format_timestamp(None).try_init()?;
    log::debug!("logger installed ({verbosity:?})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_environment() {
        assert_eq!(Verbosity::default(), Verbosity::FromEnv);
    }

    #[test]
    fn second_install_is_rejected() {
        let _ = init_logging(Verbosity::TraceGeometry);
        assert!(init_logging(Verbosity::Filter("off".to_owned())).is_err());
        log::trace!("still alive");
    }
}
