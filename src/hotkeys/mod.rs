//! Hotkey system
//!
//! Centralized hotkey management for the caption editor.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Timeline
    // ═══════════════════════════════════════════════════════════════
    /// Halve the visible time span
    TimelineZoomIn,
    /// Double the visible time span
    TimelineZoomOut,
    /// Back to the default zoom, centred on the playhead
    TimelineZoomReset,
    /// Show or hide the location label column
    ToggleLocationLabels,

    // ═══════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════
    PlayPause,

    // ═══════════════════════════════════════════════════════════════
    // Project
    // ═══════════════════════════════════════════════════════════════
    SaveProject,
    OpenProject,

    // ═══════════════════════════════════════════════════════════════
    // Captions
    // ═══════════════════════════════════════════════════════════════
    /// Insert a blank caption above the selected row, or at the top
    InsertCaption,
    /// Remove the selected caption
    DeleteCaption,
    /// Swap the selected caption with the row above
    MoveCaptionUp,
    /// Swap the selected caption with the row below
    MoveCaptionDown,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a caption is selected in the list
    pub has_selection: bool,
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// # Returns
/// * `HotkeyResult::Action(action)` if a hotkey matched
/// * `HotkeyResult::NoMatch` if no binding exists
/// * `HotkeyResult::Suppressed` if input is focused
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    let command = ctrl || meta;

    // Save/open stay available while typing
    match key {
        Key::Character(c) if command && c.eq_ignore_ascii_case("s") => {
            return HotkeyResult::Action(HotkeyAction::SaveProject);
        }
        Key::Character(c) if command && c.eq_ignore_ascii_case("o") => {
            return HotkeyResult::Action(HotkeyAction::OpenProject);
        }
        _ => {}
    }

    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    // ═══════════════════════════════════════════════════════════════
    // Global Hotkeys (work regardless of context)
    // ═══════════════════════════════════════════════════════════════

    // Numpad +/- produce the same characters as the main row
    match key {
        Key::Character(c) if c == "+" || c == "=" => {
            return HotkeyResult::Action(HotkeyAction::TimelineZoomIn)
        }
        Key::Character(c) if c == "-" => return HotkeyResult::Action(HotkeyAction::TimelineZoomOut),
        Key::Character(c) if c == "0" && !command => {
            return HotkeyResult::Action(HotkeyAction::TimelineZoomReset)
        }
        Key::Character(c) if c == " " => return HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::Character(c) if !command && c.eq_ignore_ascii_case("l") => {
            return HotkeyResult::Action(HotkeyAction::ToggleLocationLabels)
        }
        Key::Insert => return HotkeyResult::Action(HotkeyAction::InsertCaption),
        _ => {}
    }

    // ═══════════════════════════════════════════════════════════════
    // Context-Specific Hotkeys
    // ═══════════════════════════════════════════════════════════════

    if context.has_selection {
        match key {
            Key::Delete => return HotkeyResult::Action(HotkeyAction::DeleteCaption),
            Key::ArrowUp if alt => return HotkeyResult::Action(HotkeyAction::MoveCaptionUp),
            Key::ArrowDown if alt => return HotkeyResult::Action(HotkeyAction::MoveCaptionDown),
            _ => {}
        }
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str) -> HotkeyResult {
        handle_hotkey(&Key::Character(key.to_string()), false, false, false, false, &HotkeyContext::default())
    }

    #[test]
    fn test_plus_zooms_in() {
        assert_eq!(press("+"), HotkeyResult::Action(HotkeyAction::TimelineZoomIn));
    }

    #[test]
    fn test_minus_zooms_out() {
        assert_eq!(press("-"), HotkeyResult::Action(HotkeyAction::TimelineZoomOut));
    }

    #[test]
    fn test_zero_resets_zoom() {
        assert_eq!(press("0"), HotkeyResult::Action(HotkeyAction::TimelineZoomReset));
    }

    #[test]
    fn test_l_toggles_labels() {
        assert_eq!(press("L"), HotkeyResult::Action(HotkeyAction::ToggleLocationLabels));
    }

    #[test]
    fn test_space_toggles_playback() {
        assert_eq!(press(" "), HotkeyResult::Action(HotkeyAction::PlayPause));
    }

    #[test]
    fn test_ctrl_s_and_ctrl_o() {
        let ctx = HotkeyContext::default();
        let save = handle_hotkey(&Key::Character("s".to_string()), false, true, false, false, &ctx);
        assert_eq!(save, HotkeyResult::Action(HotkeyAction::SaveProject));
        let open = handle_hotkey(&Key::Character("O".to_string()), true, false, false, true, &ctx);
        assert_eq!(open, HotkeyResult::Action(HotkeyAction::OpenProject));
    }

    #[test]
    fn test_insert_and_delete() {
        let ctx = HotkeyContext::default();
        assert_eq!(
            handle_hotkey(&Key::Insert, false, false, false, false, &ctx),
            HotkeyResult::Action(HotkeyAction::InsertCaption)
        );
        assert_eq!(handle_hotkey(&Key::Delete, false, false, false, false, &ctx), HotkeyResult::NoMatch);

        let selected = HotkeyContext {
            has_selection: true,
            ..Default::default()
        };
        assert_eq!(
            handle_hotkey(&Key::Delete, false, false, false, false, &selected),
            HotkeyResult::Action(HotkeyAction::DeleteCaption)
        );
    }

    #[test]
    fn test_alt_arrows_move_selected_caption() {
        let selected = HotkeyContext {
            has_selection: true,
            ..Default::default()
        };
        assert_eq!(
            handle_hotkey(&Key::ArrowUp, false, false, true, false, &selected),
            HotkeyResult::Action(HotkeyAction::MoveCaptionUp)
        );
        assert_eq!(
            handle_hotkey(&Key::ArrowDown, false, false, true, false, &selected),
            HotkeyResult::Action(HotkeyAction::MoveCaptionDown)
        );
        assert_eq!(handle_hotkey(&Key::ArrowUp, false, false, false, false, &selected), HotkeyResult::NoMatch);
        assert_eq!(
            handle_hotkey(&Key::ArrowUp, false, false, true, false, &HotkeyContext::default()),
            HotkeyResult::NoMatch
        );
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert_eq!(result, HotkeyResult::Suppressed);
        let save = handle_hotkey(&Key::Character("s".to_string()), false, true, false, false, &ctx);
        assert_eq!(save, HotkeyResult::Action(HotkeyAction::SaveProject));
    }
}
