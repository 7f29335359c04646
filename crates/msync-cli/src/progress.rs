use indicatif::{ProgressBar, ProgressStyle};

use crate::ui::UiPrefs;

/// Optional indicatif bar; every method is a no-op when progress is off.
pub struct Progress {
    bar: Option<ProgressBar>,
}

fn bar_template(prefs: &UiPrefs) -> &'static str {
    match prefs.term_width {
        Some(cols) if cols >= 110 => "{bar:40.cyan/blue} {pos}/{len} {msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {pos}/{len} {msg}",
        _ => "{wide_bar:.cyan/blue} {percent}% {msg}",
    }
}

impl Progress {
    #[must_use]
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    /// Item counter, e.g. models checked so far.
    #[must_use]
    pub fn bar(prefs: &UiPrefs, total: u64, message: &str) -> Self {
        if !prefs.progress {
            return Self::hidden();
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(bar_template(prefs))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    /// Byte transfer with unknown size until the first sized event arrives.
    #[must_use]
    pub fn transfer(prefs: &UiPrefs, message: &str) -> Self {
        if !prefs.progress {
            return Self::hidden();
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} {prefix} {wide_bar:.cyan/blue} {bytes}/{total_bytes} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_prefix(message.to_string());
        Self { bar: Some(bar) }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    pub fn set_length(&self, total: u64) {
        if let Some(bar) = &self.bar {
            bar.set_length(total);
        }
    }

    pub fn set_position(&self, position: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(position);
        }
    }

    pub fn inc(&self, delta: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(delta);
        }
    }

    /// Print a line above the bar without tearing it.
    pub fn println(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.println(line),
            None => eprintln!("{line}"),
        }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}
