//! Terminal input → engine input.
//!
//! Any key flaps, `r` or a mouse click asks for a new round, `q`/`Esc`/Ctrl-C
//! quit. Key releases are ignored so a single press flaps once.

use crate::game::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Translate a crossterm event, or `None` if the engine has no use for it.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            Some(InputEvent::RestartRequest)
        }
        _ => None,
    }
}

pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Close);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Close),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::RestartRequest),
        _ => Some(InputEvent::Press),
    }
}
