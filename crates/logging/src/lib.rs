#![warn(missing_docs)]

//! Logging setup shared by the tipkit binaries.
//!
//! A binary flattens [`LogArgs`] into its CLI and calls [`init`] once at
//! startup. Filter precedence, highest first:
//!
//! 1. `--log-filter`, used verbatim
//! 2. `--trace`, `--debug` or `--log-level`, applied to [`our_crates`]
//! 3. a non-empty `RUST_LOG`
//! 4. `info` for [`our_crates`]

use std::{env, io};

use clap::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Explicit tracing filter directive, overriding the other flags,
    /// e.g. "tipkit=trace,tipkit_anim=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Level requested by `--trace`, `--debug` or `--log-level`, if any.
    fn level(&self) -> Option<&str> {
        if self.trace {
            Some("trace")
        } else if self.debug {
            Some("debug")
        } else {
            self.log_level.as_deref()
        }
    }

    /// Filter directive these flags resolve to, consulting `RUST_LOG` last.
    pub fn spec(&self) -> String {
        compute_spec(
            self.trace,
            self.debug,
            self.log_level.as_deref(),
            self.log_filter.as_deref(),
        )
    }
}

/// Tracing targets that make up "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &[
        "tipkit",
        "tipkit_geom",
        "tipkit_anim",
        "config",
        "logging",
        "tipsim",
    ]
}

/// Directive setting `level` on every crate in [`our_crates`].
pub fn level_spec_for(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve the filter directive from individual flag values.
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
) -> String {
    let args = LogArgs {
        trace,
        debug,
        log_level: log_level.map(str::to_string),
        log_filter: None,
    };
    log_filter
        .map(str::to_string)
        .or_else(|| args.level().map(level_spec_for))
        .or_else(|| env::var("RUST_LOG").ok().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| level_spec_for("info"))
}

/// Create an `EnvFilter` from a directive string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

/// Install a compact stderr subscriber filtered by `args`.
///
/// A second call is a no-op.
pub fn init(args: &LogArgs) {
    tracing_subscriber::registry()
        .with(env_filter_from_spec(&args.spec()))
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();
}
