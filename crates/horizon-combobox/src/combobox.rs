//! The combobox interaction engine.
//!
//! [`Combobox`] is an editable input paired with a keyboard-navigable option
//! list. It owns no UI: hosts feed it input events and render the state it
//! exposes (see [`ComboboxSnapshot`]).
//!
//! # Events
//!
//! - [`on_type`](Combobox::on_type): the input text changed
//! - [`on_key_down`](Combobox::on_key_down): a key was pressed in the input
//! - [`on_click`](Combobox::on_click): the input was clicked
//! - [`on_option_pointer_down`](Combobox::on_option_pointer_down): a pointer
//!   went down on an option (fires before the input loses focus)
//! - [`on_option_click`](Combobox::on_option_click): an option was clicked
//! - [`on_blur`](Combobox::on_blur): the input lost focus
//!
//! # State
//!
//! The active option is tracked as a catalog index (`-1` when there is none).
//! For filtering variants it always points into the filtered set; when typing
//! leaves the active option filtered out, the first match becomes active. The
//! menu is never left open over an empty result set.
//!
//! # Signals
//!
//! - `active_changed(i32)`: the active option changed
//! - `option_selected((usize, String))`: an option was committed
//! - `menu_toggled(bool)`: the menu opened or closed
//! - `ensure_visible(usize)`: the active option moved while the menu is open
//! - `state_changed(ComboboxSnapshot)`: emitted after every handled event
//!
//! # Example
//!
//! ```
//! use horizon_combobox::{Combobox, Key, Variant};
//!
//! let mut combo = Combobox::new(["Apple", "Apricot", "Banana"], Variant::Autocomplete);
//!
//! combo.on_type("Ap");
//! assert!(combo.is_open());
//! assert_eq!(combo.displayed_value(), "Apple");
//! assert_eq!(combo.filtered_options(), vec!["Apple", "Apricot"]);
//!
//! combo.on_key_down(Key::ArrowDown);
//! combo.on_key_down(Key::Enter);
//! assert_eq!(combo.selected_option(), Some("Apricot"));
//! assert!(!combo.is_open());
//! ```

use horizon_combobox_core::{Signal, TransitionSpan, combo_debug, combo_trace, combo_warn};

use crate::catalog::{OptionCatalog, matches_prefix};
use crate::index::updated_index;
use crate::keys::{Key, MenuAction, action_from_key};
use crate::policy::{BlurCommit, EscapeBehavior, Variant, VariantPolicy};
use crate::snapshot::{ComboboxSnapshot, OptionRow, TextSelection, grapheme_len};

/// Default prefix for option element ids.
pub const DEFAULT_ID_BASE: &str = "combo";

/// One-shot guard that swallows the blur caused by pressing on an option.
///
/// Pressing on an option moves focus away from the input, so the input's blur
/// arrives before the option's click. Arming the latch on pointer-down makes
/// that blur a no-op and leaves the commit to the click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BlurLatch {
    armed: bool,
}

impl BlurLatch {
    fn arm(&mut self) {
        self.armed = true;
    }

    /// Disarm the latch, reporting whether it was armed.
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

/// An editable combobox driven by input events.
pub struct Combobox {
    /// The frozen option list.
    catalog: OptionCatalog,

    /// Which behaviour this instance has.
    variant: Variant,

    /// The decisions derived from `variant`.
    policy: VariantPolicy,

    /// Prefix for option element ids.
    id_base: String,

    /// Catalog indices passing the current filter, in catalog order.
    filtered: Vec<usize>,

    /// Catalog index of the active option (-1 means none).
    active_index: i32,

    /// Catalog index of the committed option.
    selected_index: Option<usize>,

    /// Whether the menu is open.
    open: bool,

    /// Text shown in the input.
    input_value: String,

    /// Text the user typed, before any inline completion.
    typed_value: String,

    /// Completed tail highlighted in the input.
    text_selection: Option<TextSelection>,

    /// Guard against the blur caused by pressing an option.
    blur_latch: BlurLatch,

    // Signals
    /// Signal emitted when the active option changes.
    pub active_changed: Signal<i32>,
    /// Signal emitted when an option is committed.
    pub option_selected: Signal<(usize, String)>,
    /// Signal emitted when the menu opens or closes.
    pub menu_toggled: Signal<bool>,
    /// Signal emitted when the open menu should scroll an option into view.
    pub ensure_visible: Signal<usize>,
    /// Signal emitted with a fresh snapshot after every handled event.
    pub state_changed: Signal<ComboboxSnapshot>,
}

impl Combobox {
    /// Create a combobox over `catalog` with the given behaviour.
    pub fn new(catalog: impl Into<OptionCatalog>, variant: Variant) -> Self {
        let catalog = catalog.into();
        let policy = variant.policy();
        let has_options = !catalog.is_empty();

        let mut combo = Self {
            filtered: catalog.all_indices(),
            active_index: if has_options { 0 } else { -1 },
            selected_index: None,
            open: false,
            input_value: String::new(),
            typed_value: String::new(),
            text_selection: None,
            blur_latch: BlurLatch::default(),
            id_base: DEFAULT_ID_BASE.to_string(),
            catalog,
            variant,
            policy,
            active_changed: Signal::new(),
            option_selected: Signal::new(),
            menu_toggled: Signal::new(),
            ensure_visible: Signal::new(),
            state_changed: Signal::new(),
        };

        if policy.seed_first_option && has_options {
            combo.selected_index = Some(0);
            combo.input_value = combo.catalog[0].to_string();
        }

        combo_debug!(
            variant = %variant,
            options = combo.catalog.len(),
            "combobox created"
        );
        combo
    }

    /// Set the prefix used for option element ids.
    pub fn set_id_base(&mut self, id_base: impl Into<String>) {
        self.id_base = id_base.into();
    }

    /// Set the id prefix using builder pattern.
    pub fn with_id_base(mut self, id_base: impl Into<String>) -> Self {
        self.set_id_base(id_base);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The option catalog.
    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// The variant this combobox runs.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The policy this combobox runs with.
    pub fn policy(&self) -> &VariantPolicy {
        &self.policy
    }

    /// The prefix for option element ids.
    pub fn id_base(&self) -> &str {
        &self.id_base
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Catalog index of the active option (-1 if none).
    pub fn active_index(&self) -> i32 {
        self.active_index
    }

    /// Text of the active option.
    pub fn active_option(&self) -> Option<&str> {
        self.active().and_then(|index| self.catalog.get(index))
    }

    /// Text the input should display.
    pub fn displayed_value(&self) -> &str {
        &self.input_value
    }

    /// Text the user typed, without inline completion.
    pub fn typed_value(&self) -> &str {
        &self.typed_value
    }

    /// Highlighted completion in the displayed value.
    pub fn text_selection(&self) -> Option<TextSelection> {
        self.text_selection
    }

    /// Catalog index of the committed option.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Text of the committed option.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_index.and_then(|index| self.catalog.get(index))
    }

    /// Catalog indices passing the current filter.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// Texts passing the current filter, in catalog order.
    pub fn filtered_options(&self) -> Vec<&str> {
        self.filtered.iter().map(|&index| &self.catalog[index]).collect()
    }

    /// Whether the option at `index` passes the current filter.
    pub fn is_option_visible(&self, index: usize) -> bool {
        self.filtered.binary_search(&index).is_ok()
    }

    /// Capture the current observable state.
    pub fn snapshot(&self) -> ComboboxSnapshot {
        let active = self.active();
        let options = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, text)| OptionRow {
                index,
                text: text.to_string(),
                visible: self.is_option_visible(index),
                active: active == Some(index),
                selected: self.selected_index == Some(index),
            })
            .collect();

        ComboboxSnapshot {
            variant: self.variant,
            is_open: self.open,
            active_index: self.active_index,
            displayed_value: self.input_value.clone(),
            text_selection: self.text_selection,
            typed_value: self.typed_value.clone(),
            selected_index: self.selected_index,
            options,
            expanded_owner: self.policy.expanded_owner,
            id_base: self.id_base.clone(),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// The input text changed to `text`.
    #[tracing::instrument(skip(self, text), target = "horizon_combobox::engine", level = "trace")]
    pub fn on_type(&mut self, text: impl Into<String>) {
        let _span = TransitionSpan::new("on_type");
        let text = text.into();
        let is_deleting = matches_prefix(&self.typed_value, &text);

        self.input_value = text.clone();
        self.text_selection = None;

        let matches = self.catalog.filter_indices(&text);
        if self.policy.filters_on_input {
            self.filtered = matches;
            if !self.active_is_listed() {
                self.set_active(self.first_listed(), false);
            }
        } else if let Some(&first) = matches.first()
            && !self.active().is_some_and(|active| matches.contains(&active))
        {
            self.set_active(first as i32, false);
        }

        if self.policy.inline_completion {
            if !is_deleting && !text.trim().is_empty() {
                self.complete_inline(&text);
            }
            self.typed_value = text;
        }

        self.set_open(self.has_results());
        self.emit_state();
    }

    /// A key was pressed in the input.
    ///
    /// Returns `true` when the combobox consumed the key and the host should
    /// suppress its default editing behaviour.
    #[tracing::instrument(skip(self), target = "horizon_combobox::engine", level = "trace")]
    pub fn on_key_down(&mut self, key: Key) -> bool {
        let Some(action) = action_from_key(key, self.open) else {
            return false;
        };
        let _span = TransitionSpan::new("on_key_down");

        let consumed = match action {
            MenuAction::Next | MenuAction::Previous | MenuAction::First | MenuAction::Last => {
                if self.policy.inline_completion {
                    self.typed_value.clear();
                }
                let next = self.navigate(action);
                self.set_active(next, self.policy.active_mirrors_input);
                true
            }
            MenuAction::CloseAndSelect => {
                self.commit_active();
                self.set_open(false);
                true
            }
            MenuAction::Close => {
                if self.policy.escape == EscapeBehavior::RevertToSelection {
                    self.revert_to_selection();
                }
                self.set_open(false);
                true
            }
            MenuAction::Open => {
                self.open_menu();
                false
            }
            MenuAction::Type => false,
        };

        self.emit_state();
        consumed
    }

    /// The input was clicked.
    #[tracing::instrument(skip(self), target = "horizon_combobox::engine", level = "trace")]
    pub fn on_click(&mut self) {
        self.open_menu();
        self.emit_state();
    }

    /// A pointer went down on an option.
    ///
    /// The blur this causes on the input is ignored.
    pub fn on_option_pointer_down(&mut self) {
        self.blur_latch.arm();
        combo_trace!("blur latch armed");
    }

    /// The option at catalog `index` was clicked.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `index` is outside the catalog. Release
    /// builds log the violation and ignore the click.
    #[tracing::instrument(skip(self), target = "horizon_combobox::engine", level = "trace")]
    pub fn on_option_click(&mut self, index: usize) {
        debug_assert!(
            index < self.catalog.len(),
            "option index {index} out of bounds for {} options",
            self.catalog.len()
        );
        if index >= self.catalog.len() {
            combo_warn!(index, "ignoring click on nonexistent option");
            return;
        }
        let _span = TransitionSpan::new("on_option_click");

        // A click always follows its pointer-down and any blur that caused.
        self.blur_latch.take();

        self.set_active(index as i32, self.policy.active_mirrors_input);
        self.select_option(index);
        self.set_open(false);
        self.emit_state();
    }

    /// The input lost focus.
    #[tracing::instrument(skip(self), target = "horizon_combobox::engine", level = "trace")]
    pub fn on_blur(&mut self) {
        if self.blur_latch.take() {
            combo_trace!("blur swallowed by option press");
            return;
        }
        let _span = TransitionSpan::new("on_blur");

        if self.policy.inline_completion {
            self.typed_value.clear();
        }

        if self.open {
            let commit = match self.policy.blur_commit {
                BlurCommit::Never => false,
                BlurCommit::Always => true,
                BlurCommit::WhenInputNonEmpty => !self.input_value.is_empty(),
            };
            if commit {
                self.commit_active();
            }
            self.set_open(false);
        }
        self.emit_state();
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn active(&self) -> Option<usize> {
        usize::try_from(self.active_index).ok()
    }

    /// Whether the active option is among the options the menu lists.
    fn active_is_listed(&self) -> bool {
        self.active().is_some_and(|active| self.is_option_visible(active))
    }

    /// Catalog index of the first listed option, or -1.
    fn first_listed(&self) -> i32 {
        self.filtered.first().map_or(-1, |&index| index as i32)
    }

    /// Whether opening the menu would show anything.
    fn has_results(&self) -> bool {
        if self.policy.filters_on_input {
            !self.filtered.is_empty()
        } else {
            !self.catalog.is_empty()
        }
    }

    /// Resolve a navigation action to the next active catalog index.
    fn navigate(&self, action: MenuAction) -> i32 {
        if self.policy.filters_on_input {
            let max = self.filtered.len() as i32 - 1;
            let current = self
                .active()
                .and_then(|active| self.filtered.iter().position(|&index| index == active))
                .map_or(-1, |position| position as i32);
            let next = updated_index(current, max, action);
            usize::try_from(next)
                .ok()
                .and_then(|position| self.filtered.get(position))
                .map_or(-1, |&index| index as i32)
        } else if self.catalog.is_empty() {
            -1
        } else {
            updated_index(self.active_index, self.catalog.len() as i32 - 1, action)
        }
    }

    fn open_menu(&mut self) {
        if !self.has_results() {
            combo_trace!("nothing to show, menu stays closed");
            return;
        }
        if self.policy.filters_on_input && !self.active_is_listed() {
            self.set_active(self.first_listed(), false);
        }
        self.set_open(true);
    }

    fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        combo_debug!(open, "menu toggled");
        self.menu_toggled.emit(open);
    }

    fn set_active(&mut self, index: i32, mirror_into_input: bool) {
        let option = usize::try_from(index).ok();

        if mirror_into_input && let Some(option) = option {
            self.input_value = self.catalog[option].to_string();
            self.text_selection = None;
        }

        if self.active_index != index {
            self.active_index = index;
            self.active_changed.emit(index);
        }

        if self.open && let Some(option) = option {
            self.ensure_visible.emit(option);
        }
    }

    /// Suggest the first match inline, highlighting the completed tail.
    fn complete_inline(&mut self, typed: &str) {
        let Some(&first) = self.filtered.first() else {
            return;
        };
        let suggestion = self.catalog[first].to_string();
        let selection = TextSelection::new(grapheme_len(typed), grapheme_len(&suggestion));
        combo_debug!(typed, %suggestion, "inline completion");
        self.input_value = suggestion;
        self.text_selection = Some(selection);
    }

    fn commit_active(&mut self) {
        match self.active() {
            Some(index) => self.select_option(index),
            None => combo_trace!("no active option to commit"),
        }
    }

    /// Commit the option at `index` as the combobox value.
    fn select_option(&mut self, index: usize) {
        let value = self.catalog[index].to_string();
        self.apply_selection(index);
        combo_debug!(index, %value, "option selected");
        self.option_selected.emit((index, value));
    }

    fn apply_selection(&mut self, index: usize) {
        let value = &self.catalog[index];
        self.input_value = value.to_string();
        self.text_selection = None;
        self.selected_index = Some(index);
        if self.policy.inline_completion {
            self.typed_value.clear();
        }
        if self.policy.filters_on_input {
            self.filtered = self.catalog.filter_indices(value);
        }
        if self.active_index != index as i32 {
            self.active_index = index as i32;
            self.active_changed.emit(self.active_index);
        }
    }

    /// Put the last committed option back and show the whole catalog again.
    fn revert_to_selection(&mut self) {
        if let Some(index) = self.selected_index {
            combo_debug!(index, "reverting to committed option");
            self.apply_selection(index);
        }
        if self.policy.filters_on_input {
            self.filtered = self.catalog.all_indices();
        }
    }

    fn emit_state(&self) {
        if self.state_changed.has_connections() {
            self.state_changed.emit(self.snapshot());
        }
    }
}

impl std::fmt::Debug for Combobox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combobox")
            .field("variant", &self.variant)
            .field("options", &self.catalog.len())
            .field("open", &self.open)
            .field("active_index", &self.active_index)
            .field("selected_index", &self.selected_index)
            .field("input_value", &self.input_value)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    const FRUIT: [&str; 6] = ["Apple", "Apricot", "Banana", "Blackberry", "Blueberry", "Cherry"];

    fn combo(variant: Variant) -> Combobox {
        Combobox::new(FRUIT, variant)
    }

    #[test]
    fn test_combobox_creation() {
        let combo = combo(Variant::Filter);
        assert!(!combo.is_open());
        assert_eq!(combo.active_index(), 0);
        assert_eq!(combo.displayed_value(), "");
        assert_eq!(combo.selected_option(), None);
        assert_eq!(combo.filtered_options().len(), FRUIT.len());
    }

    #[test]
    fn test_autoselect_starts_with_first_option_committed() {
        let combo = combo(Variant::Autoselect);
        assert_eq!(combo.displayed_value(), "Apple");
        assert_eq!(combo.selected_option(), Some("Apple"));
        assert!(combo.snapshot().options[0].selected);
    }

    #[test]
    fn test_empty_catalog() {
        let mut combo = Combobox::new(Vec::<String>::new(), Variant::Autoselect);
        assert_eq!(combo.active_index(), -1);
        assert_eq!(combo.selected_option(), None);

        combo.on_click();
        assert!(!combo.is_open());
        assert!(!combo.on_key_down(Key::ArrowDown));
        assert!(combo.on_key_down(Key::ArrowUp));
        assert_eq!(combo.active_index(), -1);
        assert!(combo.on_key_down(Key::Enter));
        combo.on_blur();
        assert_eq!(combo.selected_option(), None);
    }

    #[test]
    fn test_click_and_down_open_the_menu() {
        let mut combo = combo(Variant::NoFilter);
        combo.on_click();
        assert!(combo.is_open());

        let mut combo = Combobox::new(FRUIT, Variant::Filter);
        // Opening is not a consumed key.
        assert!(!combo.on_key_down(Key::ArrowDown));
        assert!(combo.is_open());
        assert_eq!(combo.active_index(), 0);
    }

    #[test]
    fn test_navigation_clamps_on_catalog() {
        let mut combo = combo(Variant::NoFilter);
        combo.on_click();

        assert!(combo.on_key_down(Key::End));
        assert_eq!(combo.active_index(), 5);
        combo.on_key_down(Key::ArrowDown);
        assert_eq!(combo.active_index(), 5);
        combo.on_key_down(Key::Home);
        assert_eq!(combo.active_index(), 0);
        combo.on_key_down(Key::ArrowUp);
        assert_eq!(combo.active_index(), 0);
    }

    #[test]
    fn test_navigation_walks_filtered_set() {
        let mut combo = combo(Variant::Filter);
        combo.on_type("b");
        assert_eq!(combo.filtered_options(), vec!["Banana", "Blackberry", "Blueberry"]);
        assert_eq!(combo.active_index(), 2);

        combo.on_key_down(Key::ArrowDown);
        assert_eq!(combo.active_option(), Some("Blackberry"));
        combo.on_key_down(Key::End);
        assert_eq!(combo.active_option(), Some("Blueberry"));
        combo.on_key_down(Key::ArrowDown);
        assert_eq!(combo.active_option(), Some("Blueberry"));
        combo.on_key_down(Key::Home);
        assert_eq!(combo.active_option(), Some("Banana"));
    }

    #[test]
    fn test_no_filter_moves_active_without_hiding() {
        let mut combo = combo(Variant::NoFilter);
        combo.on_type("bl");
        assert!(combo.is_open());
        assert_eq!(combo.active_option(), Some("Blackberry"));
        assert_eq!(combo.filtered_options().len(), FRUIT.len());
        assert!(combo.snapshot().options.iter().all(|row| row.visible));

        // The active option already matches, so it stays put.
        combo.on_key_down(Key::ArrowDown);
        combo.on_type("bl");
        assert_eq!(combo.active_option(), Some("Blueberry"));

        // No match leaves the active option alone and the menu open.
        combo.on_type("xyz");
        assert!(combo.is_open());
        assert_eq!(combo.active_option(), Some("Blueberry"));
    }

    #[test]
    fn test_typing_keeps_active_option_when_still_listed() {
        let mut combo = combo(Variant::Filter);
        combo.on_type("b");
        combo.on_key_down(Key::ArrowDown);
        assert_eq!(combo.active_option(), Some("Blackberry"));

        combo.on_type("bl");
        assert_eq!(combo.active_option(), Some("Blackberry"));
        combo.on_type("blu");
        assert_eq!(combo.active_option(), Some("Blueberry"));
    }

    #[test]
    fn test_empty_result_closes_menu() {
        let mut combo = combo(Variant::Filter);
        combo.on_type("a");
        assert!(combo.is_open());

        combo.on_type("xyz");
        assert!(!combo.is_open());
        assert!(combo.filtered_options().is_empty());
        assert_eq!(combo.active_index(), -1);

        // Nothing to open or move through.
        combo.on_key_down(Key::ArrowDown);
        assert!(!combo.is_open());
        combo.on_key_down(Key::ArrowUp);
        assert_eq!(combo.active_index(), -1);
        combo.on_click();
        assert!(!combo.is_open());
    }

    #[test]
    fn test_enter_commits_and_refilters() {
        let mut combo = combo(Variant::Filter);
        combo.on_type("b");
        combo.on_key_down(Key::ArrowDown);
        assert!(combo.on_key_down(Key::Enter));

        assert!(!combo.is_open());
        assert_eq!(combo.displayed_value(), "Blackberry");
        assert_eq!(combo.selected_index(), Some(3));
        assert_eq!(combo.filtered_options(), vec!["Blackberry"]);
    }

    #[test]
    fn test_no_filter_commit_keeps_full_list() {
        let mut combo = combo(Variant::NoFilter);
        combo.on_click();
        combo.on_key_down(Key::ArrowDown);
        combo.on_key_down(Key::Enter);
        assert_eq!(combo.displayed_value(), "Apricot");
        assert_eq!(combo.selected_option(), Some("Apricot"));
        assert_eq!(combo.filtered_options().len(), FRUIT.len());
    }

    #[test]
    fn test_escape_only_closes_for_filter() {
        let mut combo = combo(Variant::Filter);
        combo.on_type("ch");
        assert!(combo.on_key_down(Key::Escape));
        assert!(!combo.is_open());
        assert_eq!(combo.displayed_value(), "ch");
        assert_eq!(combo.filtered_options(), vec!["Cherry"]);
        assert_eq!(combo.selected_option(), None);
    }

    #[test]
    fn test_autoselect_escape_reverts() {
        let mut combo = combo(Variant::Autoselect);
        combo.on_click();
        combo.on_key_down(Key::End);
        combo.on_key_down(Key::Enter);
        assert_eq!(combo.selected_option(), Some("Cherry"));

        combo.on_click();
        combo.on_type("bl");
        assert_eq!(combo.active_option(), Some("Blackberry"));

        combo.on_key_down(Key::Escape);
        assert!(!combo.is_open());
        assert_eq!(combo.displayed_value(), "Cherry");
        assert_eq!(combo.active_option(), Some("Cherry"));
        assert_eq!(combo.filtered_options().len(), FRUIT.len());
    }

    #[test]
    fn test_autoselect_blur_commits_active() {
        let mut combo = combo(Variant::Autoselect);
        combo.on_type("ban");
        combo.on_blur();
        assert!(!combo.is_open());
        assert_eq!(combo.selected_option(), Some("Banana"));
        assert_eq!(combo.displayed_value(), "Banana");
        assert_eq!(combo.filtered_options(), vec!["Banana"]);
    }

    #[test]
    fn test_autoselect_enter_narrows_to_committed_option() {
        let mut combo = combo(Variant::Autoselect);
        combo.on_click();
        combo.on_key_down(Key::End);
        assert_eq!(combo.filtered_options().len(), FRUIT.len());

        combo.on_key_down(Key::Enter);
        assert_eq!(combo.selected_option(), Some("Cherry"));
        assert_eq!(combo.filtered_options(), vec!["Cherry"]);
        assert_eq!(combo.filtered_indices(), &[5]);
    }

    #[test]
    fn test_blur_when_closed_commits_nothing() {
        let mut combo = combo(Variant::Autoselect);
        combo.on_type("ban");
        combo.on_key_down(Key::Escape);
        combo.on_blur();
        assert_eq!(combo.selected_option(), Some("Apple"));
    }

    #[test]
    fn test_filter_blur_does_not_commit() {
        let mut combo = combo(Variant::Filter);
        combo.on_type("ban");
        combo.on_blur();
        assert!(!combo.is_open());
        assert_eq!(combo.selected_option(), None);
        assert_eq!(combo.displayed_value(), "ban");
    }

    #[test]
    fn test_autocomplete_blur_with_empty_input() {
        let mut combo = combo(Variant::Autocomplete);
        combo.on_type("");
        assert!(combo.is_open());
        combo.on_blur();
        assert!(!combo.is_open());
        assert_eq!(combo.selected_option(), None);

        combo.on_type("ch");
        combo.on_blur();
        assert_eq!(combo.selected_option(), Some("Cherry"));
        assert_eq!(combo.typed_value(), "");
    }

    #[test]
    fn test_autocomplete_inline_completion() {
        let mut combo = combo(Variant::Autocomplete);
        combo.on_type("Ap");
        assert_eq!(combo.displayed_value(), "Apple");
        assert_eq!(combo.typed_value(), "Ap");
        assert_eq!(combo.text_selection(), Some(TextSelection::new(2, 5)));

        // Backspace removed the highlighted tail: no new completion.
        combo.on_type("Ap");
        assert_eq!(combo.displayed_value(), "Ap");
        assert_eq!(combo.text_selection(), None);

        combo.on_type("A");
        assert_eq!(combo.displayed_value(), "A");

        combo.on_type("Apr");
        assert_eq!(combo.displayed_value(), "Apricot");
        assert_eq!(combo.active_option(), Some("Apricot"));
        assert_eq!(combo.text_selection(), Some(TextSelection::new(3, 7)));
    }

    #[test]
    fn test_autocomplete_blank_input_is_not_completed() {
        let mut combo = Combobox::new(["  padded", "Apple"], Variant::Autocomplete);
        combo.on_type("  ");
        assert_eq!(combo.filtered_options(), vec!["  padded"]);
        assert_eq!(combo.displayed_value(), "  ");
        assert_eq!(combo.text_selection(), None);
    }

    #[test]
    fn test_autocomplete_navigation_mirrors_into_input() {
        let mut combo = combo(Variant::Autocomplete);
        combo.on_type("b");
        assert_eq!(combo.displayed_value(), "Banana");

        combo.on_key_down(Key::ArrowDown);
        assert_eq!(combo.displayed_value(), "Blackberry");
        assert_eq!(combo.typed_value(), "");
        assert_eq!(combo.text_selection(), None);

        combo.on_key_down(Key::Enter);
        assert_eq!(combo.selected_option(), Some("Blackberry"));
        assert_eq!(combo.filtered_options(), vec!["Blackberry"]);
    }

    #[test]
    fn test_option_click_commits_and_closes() {
        let mut combo = combo(Variant::Filter);
        combo.on_click();
        combo.on_option_pointer_down();
        combo.on_blur();
        assert!(combo.is_open(), "blur after pointer-down is ignored");

        combo.on_option_click(4);
        assert!(!combo.is_open());
        assert_eq!(combo.active_index(), 4);
        assert_eq!(combo.selected_option(), Some("Blueberry"));
        assert_eq!(combo.displayed_value(), "Blueberry");
    }

    #[test]
    fn test_blur_latch_is_one_shot() {
        let mut combo = combo(Variant::Filter);
        combo.on_click();
        combo.on_option_pointer_down();
        combo.on_blur();
        assert!(combo.is_open());
        combo.on_blur();
        assert!(!combo.is_open());
    }

    #[test]
    fn test_option_click_clears_stale_latch() {
        let mut combo = combo(Variant::Autoselect);
        combo.on_click();
        combo.on_option_pointer_down();
        // Focus never left the input, so no blur arrived before the click.
        combo.on_option_click(2);

        combo.on_click();
        combo.on_type("ch");
        combo.on_blur();
        assert!(!combo.is_open());
        assert_eq!(combo.selected_option(), Some("Cherry"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_option_click_out_of_bounds_panics_in_debug() {
        let mut combo = combo(Variant::Filter);
        combo.on_option_click(FRUIT.len());
    }

    #[test]
    fn test_unhandled_keys_are_not_consumed() {
        let mut combo = combo(Variant::Filter);
        combo.on_click();
        assert!(!combo.on_key_down(Key::Tab));
        assert!(!combo.on_key_down(Key::Character('a')));
        assert!(!combo.on_key_down(Key::Unidentified));
        assert!(combo.is_open());
        assert_eq!(combo.active_index(), 0);
    }

    #[test]
    fn test_duplicate_options_are_distinct() {
        let mut combo = Combobox::new(["Date", "Durian", "Date"], Variant::Filter);
        combo.on_type("da");
        combo.on_key_down(Key::ArrowDown);
        assert_eq!(combo.active_index(), 2);
        combo.on_key_down(Key::Enter);
        assert_eq!(combo.selected_index(), Some(2));
        assert_eq!(combo.filtered_indices(), &[0, 2]);
    }

    #[test]
    fn test_signals() {
        let mut combo = combo(Variant::Filter);
        let toggles = Arc::new(Mutex::new(Vec::new()));
        let actives = Arc::new(Mutex::new(Vec::new()));
        let selections = Arc::new(Mutex::new(Vec::new()));
        let scrolls = Arc::new(Mutex::new(Vec::new()));

        let t = toggles.clone();
        combo.menu_toggled.connect(move |&open| t.lock().push(open));
        let a = actives.clone();
        combo.active_changed.connect(move |&index| a.lock().push(index));
        let s = selections.clone();
        combo.option_selected.connect(move |selection| s.lock().push(selection.clone()));
        let v = scrolls.clone();
        combo.ensure_visible.connect(move |&index| v.lock().push(index));

        combo.on_key_down(Key::ArrowDown); // open
        combo.on_key_down(Key::ArrowDown); // next
        combo.on_key_down(Key::Enter);

        assert_eq!(*toggles.lock(), vec![true, false]);
        assert_eq!(*actives.lock(), vec![1]);
        assert_eq!(*scrolls.lock(), vec![1]);
        assert_eq!(*selections.lock(), vec![(1, "Apricot".to_string())]);
    }

    #[test]
    fn test_state_changed_carries_snapshot() {
        let mut combo = combo(Variant::Aria12).with_id_base("fruit");
        let last = Arc::new(Mutex::new(None));

        let l = last.clone();
        combo.state_changed.connect(move |snapshot| *l.lock() = Some(snapshot.clone()));

        combo.on_type("bl");
        let snapshot = last.lock().clone().expect("state emitted");
        assert!(snapshot.is_open);
        assert_eq!(snapshot.visible_texts(), vec!["Blackberry", "Blueberry"]);
        assert_eq!(snapshot.active_descendant().as_deref(), Some("fruit-3"));
        assert_eq!(snapshot.expanded_owner, crate::policy::ExpandedOwner::Input);
        assert_eq!(snapshot, combo.snapshot());
    }
}
