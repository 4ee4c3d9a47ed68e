use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

/// Poll interval; also the spinner tick.
const POLL_MS: u64 = 120;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            let ev = if event::poll(std::time::Duration::from_millis(POLL_MS)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => {
                        Some(Event::Input(InputEvent::Key(k)))
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => Some(Event::Input(InputEvent::Mouse(m))),
                    Ok(CtEvent::Resize(_, _)) => Some(Event::Input(InputEvent::Resize)),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::debug!("terminal read failed: {e}");
                        None
                    }
                }
            } else {
                Some(Event::Tick)
            };

            if let Some(ev) = ev
                && tx.blocking_send(ev).is_err()
            {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        },
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    if state.show_help {
        return match k.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                Some(Action::ToggleHelp)
            }
            _ => None,
        };
    }

    if let Some(action) = handle_global(k) {
        return Some(action);
    }

    if state.focus.is_input() {
        handle_input_focus(k)
    } else {
        handle_favorites_focus(k)
    }
}

/// Keys that mean the same thing whatever has focus.
fn handle_global(k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    match k.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('l') if ctrl => Some(Action::Clear),
        KeyCode::Char('f') if ctrl => Some(Action::ToggleFavorite),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        _ => None,
    }
}

fn handle_input_focus(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Down => Some(Action::FocusNext),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::ClearInput),
        KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_favorites_focus(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Enter => Some(Action::OpenSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveSelected),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Char('J') => Some(Action::ScrollDown),
        KeyCode::Char('K') => Some(Action::ScrollUp),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusNext),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}
