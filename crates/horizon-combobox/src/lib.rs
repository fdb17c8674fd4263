//! Horizon Combobox: an editable, filterable combobox interaction engine.
//!
//! This crate models the behaviour of an accessible combobox (a text input
//! paired with a keyboard-navigable option list) without any UI attached:
//!
//! - **Catalog**: the immutable option list and prefix matching
//! - **Keys**: key names and the menu actions they translate to
//! - **Variants**: five behaviours from one parameterized state machine
//! - **Engine**: [`Combobox`], driven by input events, observed via signals
//! - **Snapshots**: immutable views a renderer projects onto real elements
//! - **Config**: TOML/JSON descriptions of a combobox
//!
//! # Variants
//!
//! | Variant        | Typing                         | Escape           | Blur                       |
//! |----------------|--------------------------------|------------------|----------------------------|
//! | `NoFilter`     | moves the active option        | closes           | closes                     |
//! | `Filter`       | hides non-matching options     | closes           | closes                     |
//! | `Aria12`       | as `Filter`                    | closes           | closes                     |
//! | `Autoselect`   | as `Filter`                    | reverts, closes  | commits the active option  |
//! | `Autocomplete` | filters and completes inline   | closes           | commits unless input empty |
//!
//! # Example
//!
//! ```
//! use horizon_combobox::{Combobox, Key, Variant};
//!
//! let mut combo = Combobox::new(["Apple", "Apricot", "Banana"], Variant::Filter);
//!
//! combo.menu_toggled.connect(|open| println!("menu open: {open}"));
//! combo.option_selected.connect(|(index, value)| println!("picked #{index}: {value}"));
//!
//! combo.on_type("b");
//! assert_eq!(combo.filtered_options(), vec!["Banana"]);
//!
//! assert!(combo.on_key_down(Key::Enter));
//! assert_eq!(combo.displayed_value(), "Banana");
//! ```

pub mod catalog;
pub mod combobox;
pub mod config;
pub mod debug;
pub mod error;
pub mod index;
pub mod keys;
pub mod policy;
pub mod snapshot;

pub use catalog::{OptionCatalog, exact_matches, filter_options};
pub use combobox::{Combobox, DEFAULT_ID_BASE};
pub use config::ComboboxConfig;
pub use debug::{ListingFormatOptions, ListingStyle, SnapshotDebug};
pub use error::{Error, Result};
pub use index::updated_index;
pub use keys::{Key, MenuAction, action_from_key};
pub use policy::{BlurCommit, EscapeBehavior, ExpandedOwner, Variant, VariantPolicy};
pub use snapshot::{ComboboxSnapshot, OptionRow, TextSelection};

pub use horizon_combobox_core::{ConnectionId, Signal};
