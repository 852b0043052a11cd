//! Normalised input: discrete per-frame events plus continuous held state.
//!
//! The simulation only ever sees [`InputEvent`] and [`HeldKeys`]; this module
//! also owns the mapping from terminal key events to those two types.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

/// One-shot action delivered on key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Shoot,
    Confirm,
    /// Leave the current game and return to the menu.
    Back,
    Quit,
}

/// Continuous "direction held" signal sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Translate a key press into a discrete game event.  Movement keys are not
/// events; they are tracked by [`HoldTracker`].
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<InputEvent> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(InputEvent::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(InputEvent::Jump),
        KeyCode::Char(' ') => Some(InputEvent::Shoot),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Esc => Some(InputEvent::Back),
        _ => None,
    }
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Derives held state from press/repeat/release events.
///
/// Terminals with keyboard enhancement report releases and keys are dropped
/// immediately.  Classic terminals only send repeated presses, so a key also
/// expires after a stretch of silence: `initial_window` frames after the
/// first press (covering the OS auto-repeat delay), then `repeat_window`
/// frames once the key is repeating.
#[derive(Debug, Clone)]
pub struct HoldTracker {
    last_seen: HashMap<KeyCode, Hold>,
    initial_window: u64,
    repeat_window: u64,
}

#[derive(Debug, Clone, Copy)]
struct Hold {
    frame: u64,
    repeating: bool,
}

impl HoldTracker {
    /// Same window before and after the first repeat.
    pub fn new(window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            initial_window: window,
            repeat_window: window,
        }
    }

    /// Hold a freshly pressed key for `frames` until its first repeat.
    pub fn with_initial_window(mut self, frames: u64) -> Self {
        self.initial_window = frames;
        self
    }

    /// Record a press or repeat of `code` during `frame`.  A press of a key
    /// that is still held counts as a repeat.
    pub fn press(&mut self, code: KeyCode, frame: u64) {
        let repeating = self.is_held(&code, frame);
        self.last_seen.insert(code, Hold { frame, repeating });
    }

    pub fn release(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
    }

    pub fn is_held(&self, code: &KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(code)
            .map(|hold| {
                let window = if hold.repeating {
                    self.repeat_window
                } else {
                    self.initial_window
                };
                frame.saturating_sub(hold.frame) <= window
            })
            .unwrap_or(false)
    }

    pub fn held(&self, frame: u64) -> HeldKeys {
        HeldKeys {
            left: LEFT_KEYS.iter().any(|k| self.is_held(k, frame)),
            right: RIGHT_KEYS.iter().any(|k| self.is_held(k, frame)),
        }
    }
}
