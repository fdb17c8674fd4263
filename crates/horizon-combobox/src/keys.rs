//! Keys and the menu actions they translate to.
//!
//! [`Key`] models the logical keys a combobox input can receive. Hosts that
//! see DOM-style key names (`KeyboardEvent.key`) can convert them with
//! [`Key::from_name`]; native toolkits can build `Key` values directly.
//!
//! [`action_from_key`] is the single place that decides which keys the
//! combobox reacts to. It is a pure function of the key and whether the menu
//! is currently open.

use std::fmt;

/// Keyboard keys relevant to a combobox input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Clear,
    Enter,
    Tab,

    // Control
    Escape,

    /// The space bar.
    Space,

    /// Any key that produces exactly one printable character.
    Character(char),

    /// A named key the combobox has no use for (modifiers, function keys, ...).
    Unidentified,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    ///
    /// Named keys map to their variants, a value of exactly one character maps
    /// to [`Key::Character`] (or [`Key::Space`]), and everything else maps to
    /// [`Key::Unidentified`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Clear" => Key::Clear,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            " " | "Spacebar" => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Character(ch),
                    _ => Key::Unidentified,
                }
            }
        }
    }

    /// The DOM key name for this key.
    pub fn name(&self) -> String {
        match self {
            Key::Character(ch) => ch.to_string(),
            other => other.static_name().to_string(),
        }
    }

    fn static_name(&self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::Backspace => "Backspace",
            Key::Delete => "Delete",
            Key::Clear => "Clear",
            Key::Enter => "Enter",
            Key::Tab => "Tab",
            Key::Escape => "Escape",
            Key::Space => " ",
            Key::Character(_) => "",
            Key::Unidentified => "Unidentified",
        }
    }

    /// Whether this key produces a single printable character.
    pub fn is_character(&self) -> bool {
        matches!(self, Key::Character(_) | Key::Space)
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Character(ch) => write!(f, "{ch}"),
            Key::Space => f.write_str("Space"),
            other => f.write_str(other.static_name()),
        }
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        if ch == ' ' {
            Key::Space
        } else {
            Key::Character(ch)
        }
    }
}

/// A symbolic menu action produced from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Open the closed menu.
    Open,
    /// Move to the next option.
    Next,
    /// Move to the previous option.
    Previous,
    /// Move to the first option.
    First,
    /// Move to the last option.
    Last,
    /// Close the menu.
    Close,
    /// Commit the active option and close the menu.
    CloseAndSelect,
    /// The key edits the input text.
    Type,
}

impl MenuAction {
    /// Whether this action moves the active option.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            MenuAction::Next | MenuAction::Previous | MenuAction::First | MenuAction::Last
        )
    }
}

/// Translate a key press into a menu action.
///
/// Returns `None` for keys the combobox does not intercept; the host should
/// let those through untouched.
pub fn action_from_key(key: Key, menu_open: bool) -> Option<MenuAction> {
    if !menu_open && key == Key::ArrowDown {
        return Some(MenuAction::Open);
    }

    match key {
        Key::ArrowDown => Some(MenuAction::Next),
        Key::ArrowUp => Some(MenuAction::Previous),
        Key::Home => Some(MenuAction::First),
        Key::End => Some(MenuAction::Last),
        Key::Escape => Some(MenuAction::Close),
        Key::Enter => Some(MenuAction::CloseAndSelect),
        Key::Backspace | Key::Clear | Key::Space | Key::Character(_) => Some(MenuAction::Type),
        _ => None,
    }
}
