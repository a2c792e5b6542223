//! Disguise trigger: key parsing and the process-wide input listener.
//!
//! [`TriggerListener`] owns the crossterm event stream for the whole session.
//! It classifies every terminal event before any view sees it, so the trigger
//! key toggles the cover regardless of which view or input mode has focus.
//! Everything is forwarded on the single app event channel.

use std::fmt;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::events::AppEvent;

/// Errors from parsing a trigger key spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerParseError {
    #[error("Empty trigger key spec")]
    Empty,
    #[error("Unknown key {0:?}")]
    UnknownKey(String),
    #[error("Unknown modifier {0:?}")]
    UnknownModifier(String),
}

/// A single key chord, e.g. `Esc` or `Ctrl+G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Default for TriggerKey {
    fn default() -> Self {
        Self {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl TriggerKey {
    /// Parse a spec like `"esc"`, `"f12"`, `"ctrl+g"` or `"alt+shift+x"`.
    pub fn parse(spec: &str) -> Result<Self, TriggerParseError> {
        let spec = spec.trim().to_lowercase();
        if spec.is_empty() {
            return Err(TriggerParseError::Empty);
        }

        // A bare "+" is the plus key, not a separator.
        let (mods, key) = match spec.rsplit_once('+') {
            Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
            Some((mods, key)) => (mods, key),
            None => ("", spec.as_str()),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            modifiers |= match part {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                other => return Err(TriggerParseError::UnknownModifier(other.to_string())),
            };
        }

        Ok(Self {
            code: parse_key(key)?,
            modifiers,
        })
    }

    /// Parse the configured key spec, falling back to `Esc` with a warning.
    pub fn from_config(spec: &str) -> Self {
        Self::parse(spec).unwrap_or_else(|e| {
            log::warn!("Invalid disguise trigger {spec:?}: {e}; using Esc");
            Self::default()
        })
    }

    /// Whether `event` is a press of this chord.
    ///
    /// Shift is ignored for character keys since terminals disagree on
    /// whether to report it alongside the shifted character.
    pub fn matches(&self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match (self.code, *code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => {
                want.eq_ignore_ascii_case(&got)
                    && modifiers.difference(KeyModifiers::SHIFT)
                        == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            (want, got) => want == got && *modifiers == self.modifiers,
        }
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        match self.code {
            KeyCode::Esc => f.write_str("Esc"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            other => write!(f, "{other:?}"),
        }
    }
}

fn parse_key(key: &str) -> Result<KeyCode, TriggerParseError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match key {
        "esc" | "escape" => Ok(KeyCode::Esc),
        "tab" => Ok(KeyCode::Tab),
        "enter" | "return" => Ok(KeyCode::Enter),
        "space" => Ok(KeyCode::Char(' ')),
        "backspace" => Ok(KeyCode::Backspace),
        _ => key
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| TriggerParseError::UnknownKey(key.to_string())),
    }
}

/// Classify a terminal event for the app channel.
pub fn route(trigger: &TriggerKey, event: Event) -> AppEvent {
    if trigger.matches(&event) {
        AppEvent::Trigger
    } else {
        AppEvent::Input(event)
    }
}

/// The session's one terminal-input listener.
///
/// Installed once when the event loop starts. [`TriggerListener::remove`]
/// (or dropping the value) aborts the reader task, so a re-initialized
/// session never ends up with two listeners toggling on the same key.
pub struct TriggerListener {
    task: Option<JoinHandle<()>>,
}

impl TriggerListener {
    /// Spawn the reader task on the current tokio runtime.
    pub fn install(trigger: TriggerKey, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        log::info!("Installing disguise trigger listener ({trigger})");
        let task = tokio::spawn(async move {
            let mut events = EventStream::new();
            while let Some(next) = events.next().await {
                match next {
                    Ok(event) => {
                        if tx.send(route(&trigger, event)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::error!("Terminal event stream failed: {e}");
                        let _ = tx.send(AppEvent::Quit);
                        break;
                    }
                }
            }
        });
        Self { task: Some(task) }
    }

    /// Deregister the listener.
    pub fn remove(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::info!("Disguise trigger listener removed");
        }
    }
}

impl Drop for TriggerListener {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(TriggerKey::parse("esc").unwrap(), TriggerKey::default());
        assert_eq!(TriggerKey::parse("Escape").unwrap().code, KeyCode::Esc);
        assert_eq!(TriggerKey::parse("f12").unwrap().code, KeyCode::F(12));
        assert_eq!(TriggerKey::parse("space").unwrap().code, KeyCode::Char(' '));
    }

    #[test]
    fn test_parse_modifiers() {
        let key = TriggerKey::parse("ctrl+alt+g").unwrap();
        assert_eq!(key.code, KeyCode::Char('g'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(TriggerKey::parse("+").unwrap().code, KeyCode::Char('+'));
        let key = TriggerKey::parse("ctrl++").unwrap();
        assert_eq!(key.code, KeyCode::Char('+'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TriggerKey::parse("  "), Err(TriggerParseError::Empty));
        assert!(matches!(
            TriggerKey::parse("f13"),
            Err(TriggerParseError::UnknownKey(_))
        ));
        assert!(matches!(
            TriggerKey::parse("hyper+x"),
            Err(TriggerParseError::UnknownModifier(_))
        ));
    }

    #[test]
    fn test_from_config_falls_back_to_esc() {
        assert_eq!(TriggerKey::from_config("nonsense-key"), TriggerKey::default());
    }

    #[test]
    fn test_matches_press_only() {
        let trigger = TriggerKey::default();
        assert!(trigger.matches(&key(KeyCode::Esc, KeyModifiers::NONE)));

        let release = Event::Key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!trigger.matches(&release));
        assert!(!trigger.matches(&key(KeyCode::Esc, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_char_trigger_ignores_shift() {
        let trigger = TriggerKey::parse("ctrl+g").unwrap();
        assert!(trigger.matches(&key(
            KeyCode::Char('G'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
        assert!(!trigger.matches(&key(KeyCode::Char('g'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_route_splits_trigger_from_input() {
        let trigger = TriggerKey::default();
        assert!(matches!(
            route(&trigger, key(KeyCode::Esc, KeyModifiers::NONE)),
            AppEvent::Trigger
        ));
        assert!(matches!(
            route(&trigger, key(KeyCode::Char('q'), KeyModifiers::NONE)),
            AppEvent::Input(_)
        ));
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(route(&trigger, mouse), AppEvent::Input(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(TriggerKey::default().to_string(), "Esc");
        assert_eq!(TriggerKey::parse("ctrl+g").unwrap().to_string(), "Ctrl+G");
        assert_eq!(TriggerKey::parse("f9").unwrap().to_string(), "F9");
    }

    #[tokio::test]
    async fn test_listener_remove_aborts_task() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut listener = TriggerListener::install(TriggerKey::default(), tx);
        assert!(listener.task.is_some());
        listener.shutdown();
        assert!(listener.task.is_none());
        // Second shutdown is a no-op.
        listener.shutdown();
    }
}
