//! Active-index arithmetic.

use crate::keys::MenuAction;

/// Compute the next active position for a navigation action.
///
/// `current` is the position of the active option within the navigable list
/// (`-1` when no option is active) and `max` is the last valid position
/// (`len - 1`, so `-1` for an empty list). Movement clamps at both ends and
/// never wraps. With nothing to move through (`max < 0`) the result is `0`;
/// callers resolve that against their list and find no option there.
///
/// Actions other than `First`, `Last`, `Next` and `Previous` leave `current`
/// unchanged.
pub fn updated_index(current: i32, max: i32, action: MenuAction) -> i32 {
    if max < 0 {
        return 0;
    }

    match action {
        MenuAction::First => 0,
        MenuAction::Last => max,
        MenuAction::Previous => (current - 1).clamp(0, max),
        MenuAction::Next => (current + 1).clamp(0, max),
        _ => current,
    }
}
