//! User configuration — keybindings and list layout.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/mdify/config.toml` (default `~/.config/mdify/config.toml`).
//! A missing or unreadable file silently falls back to the defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default width of the filename column.
pub const DEFAULT_NAME_WIDTH: usize = 30;

// ───────────────────────────────────────── actions ───────────

/// Every input the selector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    Toggle,
    Confirm,
    Cancel,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::Toggle,
        Action::Confirm,
        Action::Cancel,
    ];

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),
            "toggle" => Some(Action::Toggle),
            "confirm" => Some(Action::Confirm),
            "cancel" => Some(Action::Cancel),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && self.modifiers == event.modifiers & MODIFIER_MASK
    }

    /// Label for the instruction line (e.g. `"↑"`, `"Ctrl+g"`, `"Space"`).
    pub fn display(&self) -> String {
        let mut s: String = MODIFIER_NAMES
            .iter()
            .filter(|(_, m)| self.modifiers.contains(*m))
            .map(|(name, _)| format!("{name}+"))
            .collect();
        match NAMED_KEYS.iter().find(|k| k.code == self.code) {
            Some(k) => s.push_str(k.label),
            None => match self.code {
                KeyCode::Char(c) => s.push(c),
                other => s.push_str(&format!("{other:?}")),
            },
        }
        s
    }

    /// Parse a key string like `"Ctrl+g"`, `"Up"`, `"k"`, `"Space"`.
    fn parse(s: &str) -> Option<Self> {
        let (mods, key) = match s.rsplit_once('+') {
            // A lone `+` is the plus key, not an empty modifier list.
            Some((mods, key)) if !key.is_empty() => (Some(mods), key),
            _ => (None, s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods.into_iter().flat_map(|m| m.split('+')) {
            let (_, m) = MODIFIER_NAMES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))?;
            modifiers |= *m;
        }

        let code = match NAMED_KEYS
            .iter()
            .find(|k| k.names.iter().any(|n| n.eq_ignore_ascii_case(key)))
        {
            Some(k) => k.code,
            // Single characters keep their case so `K` and `k` differ.
            None => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

const MODIFIER_NAMES: &[(&str, KeyModifiers)] = &[
    ("Ctrl", KeyModifiers::CONTROL),
    ("Alt", KeyModifiers::ALT),
    ("Shift", KeyModifiers::SHIFT),
];

/// Non-character keys a binding can name.  Only what the checklist needs.
struct NamedKey {
    names: &'static [&'static str],
    label: &'static str,
    code: KeyCode,
}

const NAMED_KEYS: &[NamedKey] = &[
    NamedKey { names: &["up"], label: "↑", code: KeyCode::Up },
    NamedKey { names: &["down"], label: "↓", code: KeyCode::Down },
    NamedKey { names: &["space"], label: "Space", code: KeyCode::Char(' ') },
    NamedKey { names: &["enter", "return"], label: "Enter", code: KeyCode::Enter },
    NamedKey { names: &["esc", "escape"], label: "Esc", code: KeyCode::Esc },
];

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Minimum width the filename column is padded to.
    pub name_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

impl AppConfig {
    /// Arrow keys, space, enter and escape.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(KeyCode::Up, n)]);
        m.insert(MoveDown, vec![KeyBind::new(KeyCode::Down, n)]);
        m.insert(Toggle, vec![KeyBind::new(KeyCode::Char(' '), n)]);
        m.insert(Confirm, vec![KeyBind::new(KeyCode::Enter, n)]);
        m.insert(Cancel, vec![KeyBind::new(KeyCode::Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for &action in Action::ALL {
            let Some(binds) = self.bindings.get(&action) else {
                continue;
            };
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Format the binding list for a given action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    /// Build the instruction line shown above the list.
    pub fn instructions(&self) -> String {
        format!(
            "Navigation: {}/{} Select: {} Confirm: {} Exit: {}",
            self.display_bindings(Action::MoveUp),
            self.display_bindings(Action::MoveDown),
            self.display_bindings(Action::Toggle),
            self.display_bindings(Action::Confirm),
            self.display_bindings(Action::Cancel),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!("loaded config from {}", path.display());
                Self::parse(&contents)
            }
            Err(e) => {
                tracing::debug!("no config at {} ({e}); using defaults", path.display());
                Self::default()
            }
        }
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if key == "name_width" {
                if let Ok(v) = value.parse::<usize>() {
                    config.name_width = v.clamp(1, 200);
                }
                continue;
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!("ignoring unknown config key {key:?}");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/mdify/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("mdify").join("config.toml")
}
