use std::ffi::OsString;

use clap::{ArgGroup, Parser};

pub mod global;

pub use global::{GlobalFlags, Mode, OutputFormat};

/// Top-level CLI parser for the `msync` binary.
#[derive(Debug, Parser)]
#[command(
    name = "msync",
    version,
    about = "Check cached models against the remote registry and re-pull stale ones",
    after_help = "Mode flags also accept a single dash: -check, -update, -interactive."
)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(true)
        .args(["check", "update", "interactive"])
))]
pub struct Cli {
    /// Report models whose local digest no longer matches the registry
    #[arg(long)]
    pub check: bool,

    /// Report, then pull every out-of-date model (implies --check)
    #[arg(long)]
    pub update: bool,

    /// Report, then choose which out-of-date models to pull
    #[arg(short, long, conflicts_with_all = ["check", "update"])]
    pub interactive: bool,

    /// Output format: json, table, raw
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress bars)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Local model server URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub local_url: Option<String>,

    /// Remote registry URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,
}

impl Cli {
    /// Which mode to run. `--update` wins over `--check`, which it already
    /// includes.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.update {
            Mode::Update
        } else if self.interactive {
            Mode::Interactive
        } else {
            Mode::Check
        }
    }

    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            local_url: self.local_url.clone(),
            registry_url: self.registry_url.clone(),
        }
    }
}

/// Rewrite single-dash mode flags (`-check`) to their long form so clap
/// accepts them. Everything after `--` is left alone.
#[must_use]
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(flag @ ("-check" | "-update" | "-interactive")) => {
                    OsString::from(format!("-{flag}"))
                }
                _ => arg,
            }
        })
        .collect()
}
