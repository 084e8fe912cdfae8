//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations and two-key sequences.
//!
//! - `KeyBinding`: a textual key pattern plus the command it triggers
//! - `ParsedKeyPattern`: the pattern in matchable form
//! - `Keymap`: all bindings with matching logic
//!
//! Key patterns are textual and serializable, so they can be read from a file.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::command_id::CommandId;

/// How long the first key of a sequence waits for the second one
const SEQUENCE_TIMEOUT_SECS: u64 = 2;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+k", "g g", "pagedown"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+K", "gg"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    /// Single key with optional modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g" -> press 'g', then 'g')
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "1", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+k", "super+k", "shift+tab"
/// - Special keys: "tab", "enter", "esc", "pageup", "up", "down", ...
/// - Two-key sequence: "g g" (space-separated)
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        if parts.len() == 2 && parts[0].chars().count() == 1 && parts[1].chars().count() == 1 {
            let first = parts[0].chars().next()?;
            let second = parts[1].chars().next()?;
            return Some(ParsedKeyPattern::Sequence { first, second });
        }
        return None;
    }

    // Single characters keep their case; uppercase arrives with SHIFT
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            "super" | "cmd" => modifiers |= KeyModifiers::SUPER,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// First key of a two-key sequence waiting for its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

/// Result of matching one key event against the keymap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMatch {
    /// Commands bound to the key, in binding order
    pub commands: Vec<CommandId>,
    /// First key of a sequence that is now pending
    pub pending: Option<char>,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparsable key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Try to match a key event against the keymap
    ///
    /// A valid pending key first gets a chance to complete a sequence. Single
    /// key matches win over starting a new sequence.
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && !key.modifiers.contains(KeyModifiers::SUPER) =>
            {
                Some(c)
            }
            _ => None,
        };

        let valid_pending =
            pending.filter(|p| p.timestamp.elapsed().as_secs() < SEQUENCE_TIMEOUT_SECS);

        if let (Some(pending), Some(current)) = (valid_pending, current_char) {
            for (binding, pattern) in &self.bindings {
                if let ParsedKeyPattern::Sequence { first, second } = pattern {
                    if *first == pending.key && *second == current {
                        return KeyMatch {
                            commands: vec![binding.command],
                            pending: None,
                        };
                    }
                }
            }
        }

        let mut commands = Vec::new();
        let mut new_pending = None;

        for (binding, pattern) in &self.bindings {
            match pattern {
                ParsedKeyPattern::Single { code, modifiers } => {
                    // BackTab arrives with or without SHIFT depending on the terminal
                    let key_matches = if *code == KeyCode::BackTab {
                        key.code == KeyCode::BackTab
                    } else {
                        key.code == *code && key.modifiers == *modifiers
                    };
                    if key_matches {
                        commands.push(binding.command);
                    }
                }
                ParsedKeyPattern::Sequence { first, .. } => {
                    if new_pending.is_none() && current_char == Some(*first) {
                        new_pending = Some(*first);
                    }
                }
            }
        }

        if !commands.is_empty() {
            return KeyMatch {
                commands,
                pending: None,
            };
        }

        KeyMatch {
            commands,
            pending: new_pending,
        }
    }

    /// Whether `key` is bound to `command` as a single key
    pub fn is_bound_to(&self, key: &KeyEvent, command: CommandId) -> bool {
        self.bindings.iter().any(|(binding, pattern)| {
            binding.command == command
                && matches!(
                    pattern,
                    ParsedKeyPattern::Single { code, modifiers }
                        if key.code == *code && key.modifiers == *modifiers
                )
        })
    }

    /// Find the hint for a specific command (returns first match)
    pub fn hint_for_command(&self, command: CommandId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
    }

    /// Compact hint for a command (e.g., "j/↓"), deduplicated and joined with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in self.bindings.iter().filter(|(b, _)| b.command == command) {
            if !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}
