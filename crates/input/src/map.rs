//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Left paddle
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::LeftUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::LeftDown),

        // Right paddle
        KeyCode::Up => Some(GameAction::RightUp),
        KeyCode::Down => Some(GameAction::RightDown),

        // Reset
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
