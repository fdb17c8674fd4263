//! Variant policies.
//!
//! The five combobox variants share one state machine and differ only in a
//! handful of decisions: whether typing filters the list, what Escape does,
//! whether losing focus commits the active option, and whether the input
//! receives inline completions. [`VariantPolicy`] spells those decisions out
//! as plain data so each one can be inspected and tested on its own.
//!
//! | Variant        | Filters | Escape            | Blur commits        | Inline completion |
//! |----------------|---------|-------------------|---------------------|-------------------|
//! | `NoFilter`     | no      | close             | never               | no                |
//! | `Filter`       | yes     | close             | never               | no                |
//! | `Aria12`       | yes     | close             | never               | no                |
//! | `Autoselect`   | yes     | revert and close  | always              | no                |
//! | `Autocomplete` | yes     | close             | when input nonempty | yes               |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The five combobox behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Typing moves the active option but never hides options.
    #[default]
    NoFilter,
    /// Typing hides options that do not match.
    Filter,
    /// Same as `Filter`, with `aria-expanded` on the input (ARIA 1.2 pattern).
    #[serde(rename = "aria12")]
    Aria12,
    /// The active option is the provisional value: blur commits, Escape reverts.
    Autoselect,
    /// Typing filters and completes the first match inline.
    Autocomplete,
}

impl Variant {
    /// Every variant, in table order.
    pub const ALL: [Variant; 5] = [
        Variant::NoFilter,
        Variant::Filter,
        Variant::Aria12,
        Variant::Autoselect,
        Variant::Autocomplete,
    ];

    /// The kebab-case name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::NoFilter => "no-filter",
            Variant::Filter => "filter",
            Variant::Aria12 => "aria12",
            Variant::Autoselect => "autoselect",
            Variant::Autocomplete => "autocomplete",
        }
    }

    /// The policy this variant runs with.
    pub fn policy(&self) -> VariantPolicy {
        VariantPolicy::for_variant(*self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == wanted)
            .ok_or_else(|| {
                let expected: Vec<&str> = Variant::ALL.iter().map(Variant::name).collect();
                Error::unknown_variant(s, &expected)
            })
    }
}

/// What Escape does besides closing the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeBehavior {
    /// Close the menu and leave the input alone.
    CloseOnly,
    /// Restore the last committed option into the input, reset the filter,
    /// then close.
    RevertToSelection,
}

/// Whether losing focus with the menu open commits the active option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlurCommit {
    /// Blur only closes the menu.
    Never,
    /// Blur commits the active option.
    Always,
    /// Blur commits the active option unless the input is empty.
    WhenInputNonEmpty,
}

/// Which element carries `aria-expanded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpandedOwner {
    /// The element with `role=combobox` that wraps the input.
    Wrapper,
    /// The input itself.
    Input,
}

/// The decisions that distinguish one combobox variant from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantPolicy {
    /// Typing narrows the visible options, and commits narrow them to the
    /// committed value.
    pub filters_on_input: bool,
    /// Escape handling.
    pub escape: EscapeBehavior,
    /// Blur handling while the menu is open.
    pub blur_commit: BlurCommit,
    /// The first option starts out committed.
    pub seed_first_option: bool,
    /// Typing completes the first match inline and selects the completed tail.
    pub inline_completion: bool,
    /// Moving the active option with the keyboard writes it into the input.
    pub active_mirrors_input: bool,
    /// Where `aria-expanded` lives.
    pub expanded_owner: ExpandedOwner,
}

impl VariantPolicy {
    /// The policy for `variant`.
    pub const fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::NoFilter => Self {
                filters_on_input: false,
                escape: EscapeBehavior::CloseOnly,
                blur_commit: BlurCommit::Never,
                seed_first_option: false,
                inline_completion: false,
                active_mirrors_input: false,
                expanded_owner: ExpandedOwner::Wrapper,
            },
            Variant::Filter => Self {
                filters_on_input: true,
                ..Self::for_variant(Variant::NoFilter)
            },
            Variant::Aria12 => Self {
                expanded_owner: ExpandedOwner::Input,
                ..Self::for_variant(Variant::Filter)
            },
            Variant::Autoselect => Self {
                escape: EscapeBehavior::RevertToSelection,
                blur_commit: BlurCommit::Always,
                seed_first_option: true,
                ..Self::for_variant(Variant::Filter)
            },
            Variant::Autocomplete => Self {
                blur_commit: BlurCommit::WhenInputNonEmpty,
                inline_completion: true,
                active_mirrors_input: true,
                ..Self::for_variant(Variant::Filter)
            },
        }
    }
}

impl From<Variant> for VariantPolicy {
    fn from(variant: Variant) -> Self {
        Self::for_variant(variant)
    }
}
