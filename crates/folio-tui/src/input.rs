use crossterm::event::KeyEvent;

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    Select,
    NextLink,
    PrevLink,
    OpenLink,
    ToggleMenu,
    CloseMenu,
    MenuDown,
    MenuUp,
    Replay,
    OpenResume,
    OpenContact,
    /// Follow the nav item at this index
    Navigate(usize),
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let binding = KeyBinding::from_event(&key);

    if app.menu_open {
        return handle_menu_mode(&binding, keymap);
    }

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().copied().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Keys while the mobile menu overlay is open
fn handle_menu_mode(binding: &KeyBinding, keymap: &Keymap) -> Action {
    match keymap.get(binding) {
        Some(Action::MoveDown) => Action::MenuDown,
        Some(Action::MoveUp) => Action::MenuUp,
        Some(Action::Select) => Action::Select,
        Some(Action::ToggleMenu) | Some(Action::ExitMode) => Action::CloseMenu,
        Some(Action::Quit) => Action::Quit,
        Some(action @ Action::Navigate(_)) => *action,
        _ => Action::None,
    }
}
