//! Human-readable listings of combobox state.
//!
//! [`SnapshotDebug`] renders a [`ComboboxSnapshot`] as a header followed by
//! one line per option:
//!
//! ```text
//! autocomplete [open] "Apple" (typed "Ap", selected "ple")
//! ├── >  Apple
//! ├──    Apricot
//! └──    Banana (hidden)
//! ```
//!
//! The active option is marked with `>` and the committed option with `*`.

use std::fmt::{self, Write};

use crate::snapshot::ComboboxSnapshot;

/// Style options for option listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStyle {
    /// ASCII characters for branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed lines.
    Compact,
}

/// Configuration for snapshot listings.
#[derive(Debug, Clone)]
pub struct ListingFormatOptions {
    /// The branch style.
    pub style: ListingStyle,
    /// Whether to list options hidden by the current filter.
    pub show_hidden: bool,
    /// Whether to prefix each option with its catalog index.
    pub show_indices: bool,
}

impl Default for ListingFormatOptions {
    fn default() -> Self {
        Self {
            style: ListingStyle::default(),
            show_hidden: true,
            show_indices: false,
        }
    }
}

impl ListingFormatOptions {
    /// Options for detailed output.
    pub fn detailed() -> Self {
        Self {
            show_indices: true,
            ..Default::default()
        }
    }

    /// Options listing only what the menu would show.
    pub fn visible_only() -> Self {
        Self {
            style: ListingStyle::Compact,
            show_hidden: false,
            ..Default::default()
        }
    }
}

/// Formats combobox snapshots for logs and terminals.
#[derive(Debug, Clone, Default)]
pub struct SnapshotDebug {
    options: ListingFormatOptions,
}

impl SnapshotDebug {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom options.
    pub fn with_options(options: ListingFormatOptions) -> Self {
        Self { options }
    }

    /// Render `snapshot` as a multi-line listing.
    pub fn format(&self, snapshot: &ComboboxSnapshot) -> String {
        let mut output = String::new();
        self.format_header(snapshot, &mut output);

        let rows: Vec<_> = snapshot
            .options
            .iter()
            .filter(|row| self.options.show_hidden || row.visible)
            .collect();

        if rows.is_empty() {
            writeln!(output, "  (no options)").expect("write to String");
        }

        let row_count = rows.len();
        for (i, row) in rows.into_iter().enumerate() {
            output.push_str(self.branch(i == row_count - 1));

            let marker = match (row.active, row.selected) {
                (true, true) => ">*",
                (true, false) => "> ",
                (false, true) => " *",
                (false, false) => "  ",
            };
            output.push_str(marker);
            output.push(' ');

            if self.options.show_indices {
                write!(output, "[{}] ", row.index).expect("write to String");
            }
            output.push_str(&row.text);
            if !row.visible {
                output.push_str(" (hidden)");
            }
            output.push('\n');
        }

        output
    }

    fn format_header(&self, snapshot: &ComboboxSnapshot, output: &mut String) {
        let state = if snapshot.is_open { "open" } else { "closed" };
        write!(output, "{} [{}] {:?}", snapshot.variant, state, snapshot.displayed_value)
            .expect("write to String");

        let mut details = Vec::new();
        if !snapshot.typed_value.is_empty() {
            details.push(format!("typed {:?}", snapshot.typed_value));
        }
        if let Some(selection) = snapshot.text_selection
            && !selection.is_empty()
        {
            details.push(format!("selected {:?}", selection.slice(&snapshot.displayed_value)));
        }
        if !details.is_empty() {
            write!(output, " ({})", details.join(", ")).expect("write to String");
        }
        output.push('\n');
    }

    fn branch(&self, is_last: bool) -> &'static str {
        match (self.options.style, is_last) {
            (ListingStyle::Ascii, false) => "+-- ",
            (ListingStyle::Ascii, true) => "`-- ",
            (ListingStyle::Unicode, false) => "\u{251c}\u{2500}\u{2500} ",
            (ListingStyle::Unicode, true) => "\u{2514}\u{2500}\u{2500} ",
            (ListingStyle::Compact, _) => "- ",
        }
    }
}

/// A snapshot paired with a formatter, for use with `{}`.
#[derive(Debug)]
pub struct Listing<'a> {
    debug: &'a SnapshotDebug,
    snapshot: &'a ComboboxSnapshot,
}

impl SnapshotDebug {
    /// Wrap `snapshot` so it can be formatted with `{}`.
    pub fn display<'a>(&'a self, snapshot: &'a ComboboxSnapshot) -> Listing<'a> {
        Listing {
            debug: self,
            snapshot,
        }
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug.format(self.snapshot))
    }
}
