//! Keyboard injection backends.
//!
//! [`KeyInjector`] is the seam between the typing engine and the OS. The
//! real backend drives `enigo`; [`RecordingInjector`] captures the action
//! stream instead, which is what `--dry-run` and the tests use.

use crate::error::{Result, TyperError};
use enigo::{Direction, Enigo, Keyboard, Settings};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::trace;

/// The named keys the engine presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Backspace,
    Enter,
}

impl Key {
    pub fn name(self) -> &'static str {
        match self {
            Key::Space => "space",
            Key::Backspace => "backspace",
            Key::Enter => "enter",
        }
    }

    fn to_enigo(self) -> enigo::Key {
        match self {
            Key::Space => enigo::Key::Space,
            Key::Backspace => enigo::Key::Backspace,
            Key::Enter => enigo::Key::Return,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Longest uninterrupted sleep inside [`KeyInjector::wait`].
const WAIT_SLICE: Duration = Duration::from_millis(100);

/// Something that can deliver keystrokes and wait between them.
pub trait KeyInjector {
    /// Type `text` one character at a time, waiting `interval` after each.
    fn inject_text(&mut self, text: &str, interval: Duration) -> Result<()>;

    /// Press and release a single named key.
    fn press_key(&mut self, key: Key) -> Result<()>;

    /// Block for `duration`.
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    /// Block for `duration`, giving up early once `cancel` is raised.
    /// Returns `false` if the wait was cancelled.
    fn wait(&mut self, duration: Duration, cancel: &AtomicBool) -> bool {
        let mut remaining = duration;
        while !remaining.is_zero() {
            if cancel.load(Ordering::SeqCst) {
                return false;
            }
            let slice = remaining.min(WAIT_SLICE);
            self.pause(slice);
            remaining -= slice;
        }
        !cancel.load(Ordering::SeqCst)
    }
}

/// Sends real keystrokes to whatever window has focus.
pub struct EnigoInjector {
    enigo: Enigo,
}

impl EnigoInjector {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| TyperError::injection("keyboard", format!("failed to initialize: {e}")))?;
        Ok(Self { enigo })
    }
}

impl KeyInjector for EnigoInjector {
    fn inject_text(&mut self, text: &str, interval: Duration) -> Result<()> {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let s = ch.encode_utf8(&mut buf);
            self.enigo
                .text(s)
                .map_err(|e| TyperError::injection(s.to_string(), e.to_string()))?;
            self.pause(interval);
        }
        trace!(text, "typed");
        Ok(())
    }

    fn press_key(&mut self, key: Key) -> Result<()> {
        self.enigo
            .key(key.to_enigo(), Direction::Click)
            .map_err(|e| TyperError::injection(key.name(), e.to_string()))
    }
}

/// One observable step of a typing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Type { text: String, interval: Duration },
    Press(Key),
    Pause(Duration),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Type { text, interval } => {
                write!(f, "type {text:?} @{interval:?}")
            }
            Action::Press(key) => write!(f, "press {key}"),
            Action::Pause(duration) => write!(f, "pause {duration:?}"),
        }
    }
}

/// Records every action without touching the OS or sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingInjector {
    actions: Vec<Action>,
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// How many times `key` was pressed.
    pub fn presses(&self, key: Key) -> usize {
        self.actions
            .iter()
            .filter(|a| **a == Action::Press(key))
            .count()
    }

    /// The text of every `Type` action, in order.
    pub fn typed(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Type { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl KeyInjector for RecordingInjector {
    fn inject_text(&mut self, text: &str, interval: Duration) -> Result<()> {
        self.actions.push(Action::Type {
            text: text.to_string(),
            interval,
        });
        Ok(())
    }

    fn press_key(&mut self, key: Key) -> Result<()> {
        self.actions.push(Action::Press(key));
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.actions.push(Action::Pause(duration));
    }

    /// Recorded as a single pause, however long.
    fn wait(&mut self, duration: Duration, cancel: &AtomicBool) -> bool {
        if cancel.load(Ordering::SeqCst) {
            return false;
        }
        if !duration.is_zero() {
            self.pause(duration);
        }
        true
    }
}
