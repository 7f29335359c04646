use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// What a run should do after reconciling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Print the staleness report.
    Check,
    /// Print the report, then pull every stale model.
    Update,
    /// Print the report, then let the user pick which stale models to pull.
    Interactive,
}

/// Global flags passed to command handlers.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub local_url: Option<String>,
    pub registry_url: Option<String>,
}
