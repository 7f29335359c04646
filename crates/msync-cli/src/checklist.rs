//! Selection state for the interactive update picker.
//!
//! Entry 0 is the "All" pseudo-item; entries `1..=n` are models. Checking
//! "All" checks and locks every model. Touching a model while "All" holds
//! the lock releases it: "All" is unchecked and every model unlocked before
//! the touched model is toggled. Otherwise "All" is re-derived after each
//! toggle and is checked exactly when every model is checked.
//!
//! The focused entry lives here too, so render and input handlers share one
//! explicitly passed value.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    all_checked: bool,
    locked: bool,
    focus: usize,
}

/// Index of the "All" entry.
pub const ALL: usize = 0;

impl Checklist {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = labels
            .into_iter()
            .map(|label| ChecklistItem {
                label: label.into(),
                checked: false,
                enabled: true,
            })
            .collect();
        Self {
            items,
            all_checked: false,
            locked: false,
            focus: ALL,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    #[must_use]
    pub const fn all_checked(&self) -> bool {
        self.all_checked
    }

    /// "All" can be toggled whenever there is something to select.
    #[must_use]
    pub fn all_enabled(&self) -> bool {
        !self.items.is_empty()
    }

    /// Number of entries including "All".
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.items.len() + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.entry_count() - 1);
    }

    /// Toggle whichever entry has focus.
    pub fn toggle_focused(&mut self) {
        self.toggle(self.focus);
    }

    /// Toggle entry `index` (0 is "All"). Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index == ALL {
            self.toggle_all();
        } else if index <= self.items.len() {
            self.toggle_item(index - 1);
        }
    }

    fn toggle_all(&mut self) {
        if !self.all_enabled() {
            return;
        }
        let checked = !self.all_checked;
        for item in &mut self.items {
            item.checked = checked;
            item.enabled = !checked;
        }
        self.all_checked = checked;
        self.locked = checked;
    }

    fn toggle_item(&mut self, position: usize) {
        if self.locked {
            for item in &mut self.items {
                item.enabled = true;
            }
            self.locked = false;
        }
        if let Some(item) = self.items.get_mut(position) {
            item.checked = !item.checked;
        }
        self.all_checked = self.items.iter().all(|item| item.checked);
    }

    /// Labels of checked models, in list order.
    #[must_use]
    pub fn selected(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.label.clone())
            .collect()
    }

    /// One display line per entry, "All" first.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entry_count());
        lines.push(format!("{} All", checkbox(self.all_checked)));
        for item in self.items() {
            let suffix = if item.enabled { "" } else { " (locked)" };
            lines.push(format!("{} {}{suffix}", checkbox(item.checked), item.label));
        }
        lines
    }
}

const fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
