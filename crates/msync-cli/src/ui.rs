use std::io::IsTerminal;

use crate::cli::{GlobalFlags, OutputFormat};

/// Terminal capabilities resolved once at startup and handed to every
/// component that draws.
#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub prompts: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    #[must_use]
    pub fn detect(flags: &GlobalFlags) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let stderr_tty = std::io::stderr().is_terminal();
        let stdin_tty = std::io::stdin().is_terminal();

        let table_color = stdout_tty
            && flags.format == OutputFormat::Table
            && !flags.quiet
            && std::env::var_os("NO_COLOR").is_none();

        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self {
            table_color,
            progress: stderr_tty && !flags.quiet,
            prompts: stdin_tty && stderr_tty,
            term_width,
        }
    }

    /// Preferences with every terminal feature off.
    #[cfg(test)]
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            table_color: false,
            progress: false,
            prompts: false,
            term_width: None,
        }
    }
}
