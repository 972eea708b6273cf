//! Event types for the quick panel loop.
//!
//! The panel only reacts to key presses and terminal resizes; every other
//! crossterm event is dropped during conversion.

use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Events that can be processed by the quick panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl Event {
    /// Converts a crossterm event, dropping the kinds the panel ignores.
    #[must_use]
    pub fn from_crossterm(event: &CrosstermEvent) -> Option<Self> {
        match event {
            // Only handle key press events, not release
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(*key)),
            CrosstermEvent::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;

    #[test]
    fn test_key_press_is_kept() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let event = Event::from_crossterm(&CrosstermEvent::Key(key));
        assert_eq!(event, Some(Event::Key(key)));
    }

    #[test]
    fn test_key_release_is_dropped() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Event::from_crossterm(&CrosstermEvent::Key(key)), None);
    }

    #[test]
    fn test_resize() {
        let event = Event::from_crossterm(&CrosstermEvent::Resize(120, 40));
        assert_eq!(
            event,
            Some(Event::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn test_focus_is_dropped() {
        assert_eq!(Event::from_crossterm(&CrosstermEvent::FocusGained), None);
        assert_eq!(
            Event::from_crossterm(&CrosstermEvent::Paste("x".to_owned())),
            None
        );
    }
}
