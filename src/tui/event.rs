use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};

/// TUI input events delivered to the board one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Resize(u16, u16),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String), // Bracketed paste
    Tick,          // Poll timed out with no input
}

/// Canonical key names: `"q"`, `"ctrl+c"`, `"left"`, `"enter"`, `"/"`...
pub fn key_name(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => return "shift+tab".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => "unknown".to_string(),
    };

    // Shift is already folded into the character for printable keys
    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        name.push_str("shift+");
    }
    name.push_str(&base);
    name
}

/// Poll for an event, waiting at most `timeout`.
///
/// Returns `Tick` when nothing arrived in time and `None` for events the
/// board has no use for (key releases, focus changes).
pub fn poll_event(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(TuiEvent::Tick));
    }
    Ok(translate(event::read()?))
}

/// Poll for an already-queued event without blocking.
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    if event::poll(Duration::ZERO)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Some(TuiEvent::Key(key_event))
        }
        Event::Key(_) => None,
        Event::Mouse(mouse_event) => Some(TuiEvent::Mouse(mouse_event)),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_key_names() {
        assert_eq!(key_name(&key(KeyCode::Char('q'), KeyModifiers::NONE)), "q");
        assert_eq!(key_name(&key(KeyCode::Left, KeyModifiers::NONE)), "left");
        assert_eq!(key_name(&key(KeyCode::Right, KeyModifiers::NONE)), "right");
        assert_eq!(key_name(&key(KeyCode::Char('/'), KeyModifiers::NONE)), "/");
        assert_eq!(key_name(&key(KeyCode::PageDown, KeyModifiers::NONE)), "pgdown");
    }

    #[test]
    fn test_ctrl_c() {
        assert_eq!(
            key_name(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "ctrl+c"
        );
    }

    #[test]
    fn test_shifted_char_keeps_its_case() {
        assert_eq!(key_name(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)), "G");
        assert_eq!(key_name(&key(KeyCode::Up, KeyModifiers::SHIFT)), "shift+up");
    }

    #[test]
    fn test_translate_drops_key_release() {
        let mut release = key(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_translate_resize() {
        assert_eq!(
            translate(Event::Resize(120, 40)),
            Some(TuiEvent::Resize(120, 40))
        );
    }
}
