//! Internal start-menu keyboard shortcut helpers used by the window-level key handler.

use super::DesktopAction;

/// Maps a key press to the start-menu action it triggers, if any.
///
/// `Ctrl+Escape` toggles the start menu. A bare `Escape` closes it when it is open.
pub(super) fn start_menu_shortcut(
    key: &str,
    ctrl: bool,
    alt_or_meta: bool,
    start_menu_open: bool,
) -> Option<DesktopAction> {
    if key != "Escape" || alt_or_meta {
        return None;
    }
    if ctrl {
        return Some(DesktopAction::ToggleStartMenu);
    }
    start_menu_open.then_some(DesktopAction::CloseStartMenu)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ctrl_escape_toggles_start_menu_in_either_state() {
        assert_eq!(
            start_menu_shortcut("Escape", true, false, false),
            Some(DesktopAction::ToggleStartMenu)
        );
        assert_eq!(
            start_menu_shortcut("Escape", true, false, true),
            Some(DesktopAction::ToggleStartMenu)
        );
    }

    #[test]
    fn escape_only_closes_an_open_start_menu() {
        assert_eq!(
            start_menu_shortcut("Escape", false, false, true),
            Some(DesktopAction::CloseStartMenu)
        );
        assert_eq!(start_menu_shortcut("Escape", false, false, false), None);
    }

    #[test]
    fn modified_or_other_keys_are_ignored() {
        assert_eq!(start_menu_shortcut("Escape", true, true, true), None);
        assert_eq!(start_menu_shortcut("Enter", true, false, true), None);
    }
}
