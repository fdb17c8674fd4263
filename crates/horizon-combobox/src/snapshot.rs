//! Immutable views of combobox state.
//!
//! A [`ComboboxSnapshot`] carries everything a renderer needs to project a
//! combobox without reaching back into the engine: open state, the active
//! option, the input text and its highlighted completion, and one row per
//! catalog option.

use unicode_segmentation::UnicodeSegmentation;

use crate::policy::{ExpandedOwner, Variant};

/// A highlighted span of the input text, in grapheme offsets.
///
/// Inline completion selects the completed tail (`start..end`) so the next
/// keystroke replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSelection {
    /// First selected grapheme.
    pub start: usize,
    /// One past the last selected grapheme.
    pub end: usize,
}

impl TextSelection {
    /// Create a selection; `end` is raised to `start` if smaller.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of selected graphemes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the selection is a bare caret.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The selected slice of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let mut offsets = text
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()));
        let start = offsets.nth(self.start).unwrap_or(text.len());
        let end = if self.is_empty() {
            start
        } else {
            offsets.nth(self.len() - 1).unwrap_or(text.len())
        };
        &text[start..end]
    }
}

/// Number of graphemes in `text`.
pub(crate) fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// One catalog option as the renderer should show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// Catalog index.
    pub index: usize,
    /// Display text.
    pub text: String,
    /// Whether the option passes the current filter.
    pub visible: bool,
    /// Whether the keyboard cursor rests on this option.
    pub active: bool,
    /// Whether this option is the committed value (`aria-selected`).
    pub selected: bool,
}

/// Everything observable about a combobox after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxSnapshot {
    /// The variant that produced this state.
    pub variant: Variant,
    /// Whether the option list is shown.
    pub is_open: bool,
    /// Catalog index of the active option, or `-1`.
    pub active_index: i32,
    /// What the input should display.
    pub displayed_value: String,
    /// Highlighted part of the displayed value, if any.
    pub text_selection: Option<TextSelection>,
    /// What the user actually typed (inline completion only; empty otherwise).
    pub typed_value: String,
    /// Catalog index of the committed option.
    pub selected_index: Option<usize>,
    /// Every catalog option, in catalog order.
    pub options: Vec<OptionRow>,
    /// Where `aria-expanded` belongs.
    pub expanded_owner: ExpandedOwner,
    /// Prefix for option element ids.
    pub id_base: String,
}

impl ComboboxSnapshot {
    /// The active option's text.
    pub fn active_option(&self) -> Option<&str> {
        usize::try_from(self.active_index)
            .ok()
            .and_then(|index| self.options.get(index))
            .map(|row| row.text.as_str())
    }

    /// The committed option's text.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.options.get(index))
            .map(|row| row.text.as_str())
    }

    /// Rows that pass the current filter.
    pub fn visible_options(&self) -> impl Iterator<Item = &OptionRow> {
        self.options.iter().filter(|row| row.visible)
    }

    /// Text of the rows that pass the current filter.
    pub fn visible_texts(&self) -> Vec<&str> {
        self.visible_options().map(|row| row.text.as_str()).collect()
    }

    /// Element id of the option at `index`.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-{}", self.id_base, index)
    }

    /// Element id of the active option, for `aria-activedescendant`.
    pub fn active_descendant(&self) -> Option<String> {
        usize::try_from(self.active_index)
            .ok()
            .map(|index| self.option_id(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ComboboxSnapshot {
        let texts = ["Apple", "Apricot", "Banana"];
        ComboboxSnapshot {
            variant: Variant::Filter,
            is_open: true,
            active_index: 1,
            displayed_value: "Ap".to_string(),
            text_selection: None,
            typed_value: String::new(),
            selected_index: Some(0),
            options: texts
                .iter()
                .enumerate()
                .map(|(index, text)| OptionRow {
                    index,
                    text: text.to_string(),
                    visible: index < 2,
                    active: index == 1,
                    selected: index == 0,
                })
                .collect(),
            expanded_owner: ExpandedOwner::Wrapper,
            id_base: "fruit".to_string(),
        }
    }

    #[test]
    fn test_snapshot_accessors() {
        let snapshot = snapshot();
        assert_eq!(snapshot.active_option(), Some("Apricot"));
        assert_eq!(snapshot.selected_option(), Some("Apple"));
        assert_eq!(snapshot.visible_texts(), vec!["Apple", "Apricot"]);
        assert_eq!(snapshot.active_descendant().as_deref(), Some("fruit-1"));
        assert_eq!(snapshot.option_id(2), "fruit-2");
    }

    #[test]
    fn test_snapshot_without_active_option() {
        let snapshot = ComboboxSnapshot {
            active_index: -1,
            selected_index: None,
            ..snapshot()
        };
        assert_eq!(snapshot.active_option(), None);
        assert_eq!(snapshot.selected_option(), None);
        assert_eq!(snapshot.active_descendant(), None);
    }

    #[test]
    fn test_text_selection_slice() {
        let selection = TextSelection::new(2, 5);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.slice("Apple"), "ple");
        assert_eq!(TextSelection::new(5, 5).slice("Apple"), "");
        assert!(TextSelection::new(4, 1).is_empty());
    }

    #[test]
    fn test_text_selection_counts_graphemes() {
        // "e" + combining acute accent is one grapheme.
        let text = "Cafe\u{301} au lait";
        assert_eq!(grapheme_len("Cafe\u{301}"), 4);
        assert_eq!(TextSelection::new(4, 12).slice(text), " au lait");
        assert_eq!(TextSelection::new(3, 4).slice(text), "e\u{301}");
    }
}
