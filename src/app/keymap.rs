use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The `[keys]` table of the config file, e.g. `"ctrl+g" = "RunQuery"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub custom: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct KeyMap {
    // Bindings that work everywhere, including inside the editor and modals.
    pub global: HashMap<KeyEvent, Action>,
    // Bindings for the panels that do not take text.
    pub panel: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut panel = HashMap::new();

        // --- Global ---
        global.insert(ctrl('k'), Action::OpenCommandPalette);
        global.insert(ctrl(KeyCode::Enter), Action::RunQuery);
        global.insert(ctrl('r'), Action::RunQuery);
        global.insert(key(KeyCode::F(5)), Action::RunQuery);
        global.insert(ctrl('d'), Action::ToggleDarkMode);
        global.insert(ctrl('h'), Action::ToggleHistory);
        global.insert(key(KeyCode::F(3)), Action::ToggleHistory);
        global.insert(ctrl('b'), Action::ToggleBuilder);
        global.insert(ctrl('e'), Action::ExportResults);
        global.insert(ctrl('n'), Action::NextSample);
        global.insert(ctrl('p'), Action::PrevSample);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        global.insert(ctrl('q'), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('x'), Action::DismissToast);

        // --- Panels without text input ---
        panel.insert(key('?'), Action::ToggleHelp);
        panel.insert(key('q'), Action::CancelMode);
        panel.insert(key(KeyCode::Esc), Action::CancelMode);

        for (spec, name) in &config.custom {
            match (parse_key(spec), Action::from_name(name)) {
                (Some(event), Some(action)) => {
                    global.insert(event, action);
                }
                _ => tracing::warn!(key = %spec, action = %name, "ignoring invalid key binding"),
            }
        }

        Self { global, panel }
    }

    pub fn global_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&normalize(event)).cloned()
    }

    pub fn panel_action(&self, event: KeyEvent) -> Option<Action> {
        self.panel.get(&normalize(event)).cloned()
    }
}

/// Strips event details the map does not key on. Shift is dropped for
/// characters because it is already reflected in the char itself.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if let KeyCode::Char(c) = event.code {
        modifiers.remove(KeyModifiers::SHIFT);
        if modifiers.contains(KeyModifiers::CONTROL) {
            return KeyEvent::new(KeyCode::Char(c.to_ascii_lowercase()), modifiers);
        }
    }
    KeyEvent::new(event.code, modifiers)
}

/// Parses `"ctrl+shift+f5"`-style descriptions. Names are case-insensitive.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut code = None;
    for part in spec.split('+').map(str::trim) {
        let lower = part.to_lowercase();
        match lower.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ if code.is_some() => return None,
            "enter" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "tab" => code = Some(KeyCode::Tab),
            "backspace" => code = Some(KeyCode::Backspace),
            "space" => code = Some(KeyCode::Char(' ')),
            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            other => {
                if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    code = Some(KeyCode::F(n));
                } else {
                    let mut chars = part.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => code = Some(KeyCode::Char(c)),
                        _ => return None,
                    }
                }
            }
        }
    }
    code.map(|code| normalize(KeyEvent::new(code, modifiers)))
}

trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

fn ctrl(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_globals() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.global_action(ctrl('k')), Some(Action::OpenCommandPalette));
        assert_eq!(map.global_action(ctrl(KeyCode::Enter)), Some(Action::RunQuery));
        assert_eq!(map.global_action(key(KeyCode::F(5))), Some(Action::RunQuery));
        assert_eq!(map.global_action(key('k')), None);
    }

    #[test]
    fn test_ctrl_with_shift_still_matches() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let event = KeyEvent::new(
            KeyCode::Char('K'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(map.global_action(event), Some(Action::OpenCommandPalette));
    }

    #[test]
    fn test_shifted_char_matches_panel_binding() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(map.panel_action(event), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("ctrl+g"), Some(ctrl('g')));
        assert_eq!(parse_key("Ctrl+Enter"), Some(ctrl(KeyCode::Enter)));
        assert_eq!(parse_key("f9"), Some(key(KeyCode::F(9))));
        assert_eq!(parse_key("alt+space"), Some(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::ALT)));
        assert_eq!(parse_key("ctrl+"), None);
        assert_eq!(parse_key("ctrl+ab"), None);
        assert_eq!(parse_key("a+b"), None);
    }

    #[test]
    fn test_custom_bindings_override() {
        let mut custom = HashMap::new();
        custom.insert("ctrl+g".to_string(), "RunQuery".to_string());
        custom.insert("ctrl+d".to_string(), "ToggleHistory".to_string());
        custom.insert("ctrl+z".to_string(), "NotAnAction".to_string());
        let map = KeyMap::from_config(&KeyConfig { custom });
        assert_eq!(map.global_action(ctrl('g')), Some(Action::RunQuery));
        assert_eq!(map.global_action(ctrl('d')), Some(Action::ToggleHistory));
        assert_eq!(map.global_action(ctrl('z')), None);
    }
}
