//! Key mapping and action dispatch system for heft
//!
//! Defines key to action parsing from the config, and enum variants
//! for navigation, file and system actions.
//!
//! The confirm dialog has its own small map so that keys such as `Esc` can mean
//! "no" while confirming and "quit" otherwise.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any action in the table view: navigation, file, or system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Nav(NavAction),
    File(FileAction),
    System(SystemAction),
}

/// Selection movement
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavAction {
    GoUp,
    GoDown,
    GoToTop,
    GoToBottom,
}

/// File actions (delete, rescan)
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FileAction {
    Delete,
    Rescan,
}

/// System actions (quit)
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SystemAction {
    Quit,
}

/// Answers accepted by the confirm dialog
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfirmAction {
    Yes,
    No,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built from the config
pub struct Keymap {
    map: HashMap<Key, Action>,
    confirm_map: HashMap<Key, ConfirmAction>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let mut confirm_map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use FileAction as F;
        use SystemAction as S;

        // NavActions
        bind!(keys.go_up(),         Action::Nav(N::GoUp));
        bind!(keys.go_down(),       Action::Nav(N::GoDown));
        bind!(keys.go_to_top(),     Action::Nav(N::GoToTop));
        bind!(keys.go_to_bottom(),  Action::Nav(N::GoToBottom));

        // FileActions
        bind!(keys.delete(),        Action::File(F::Delete));
        bind!(keys.rescan(),        Action::File(F::Rescan));

        // SystemActions
        bind!(keys.quit(),          Action::System(S::Quit));

        // Confirm dialog
        bind(keys.confirm_yes(),    ConfirmAction::Yes, &mut confirm_map);
        bind(keys.confirm_no(),     ConfirmAction::No,  &mut confirm_map);

        Keymap { map, confirm_map }
    }

    /// Looks up the action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        lookup_in(&self.map, key)
    }

    /// Looks up the answer for a key pressed while the confirm dialog is open
    pub fn lookup_confirm(&self, key: KeyEvent) -> Option<ConfirmAction> {
        lookup_in(&self.confirm_map, key)
    }
}

/// Exact match first, then retry without SHIFT for characters, since terminals
/// report `D` as `Char('D')` with the SHIFT modifier set.
fn lookup_in<T: Copy>(map: &HashMap<Key, T>, key: KeyEvent) -> Option<T> {
    let k = Key {
        code: key.code,
        modifiers: key.modifiers,
    };

    if let Some(action) = map.get(&k).copied() {
        return Some(action);
    }

    if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
        let k2 = Key {
            code: key.code,
            modifiers: key.modifiers - KeyModifiers::SHIFT,
        };
        return map.get(&k2).copied();
    }
    None
}

/// Parses a key string such as `"k"`, `"Up"`, `"Ctrl+c"` or `"<c-c>"`.
pub fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "pageup" => code = Some(KeyCode::PageUp),
            "pagedown" => code = Some(KeyCode::PageDown),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

/// Display form of a key string for the help line, e.g. "Up" -> "↑".
pub fn key_label(s: &str) -> String {
    match s.to_lowercase().as_str() {
        "up" => "↑".into(),
        "down" => "↓".into(),
        "esc" => "esc".into(),
        "ctrl+c" | "<c-c>" => "ctrl+c".into(),
        _ => s.to_string(),
    }
}

fn bind<T: Copy>(key_list: &[String], action: T, map: &mut HashMap<Key, T>) {
    for k in key_list {
        if let Some(key) = parse_key(k) {
            map.insert(key, action);
        }
    }
}
