//! Light/dark theme model.
//!
//! The persisted value is a JSON boolean (`true` = dark) stored under a single
//! key. Storage is an injected capability so the model works without a
//! browser.

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// Colour set of one theme. Exported as `--color-{name}` CSS properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub card_background: &'static str,
    pub project_background: &'static str,
    pub actual_background: &'static str,
}

pub static LIGHT: Palette = Palette {
    primary: "#e5ecf6",
    secondary: "#a8c5da",
    background: "#ffffff",
    surface: "#ffffff",
    text: "#1A1D29",
    text_secondary: "#a8c5da",
    border: "#cfdeea",
    success: "#22C55E",
    warning: "#F59E0B",
    error: "#EF4444",
    card_background: "#f7f9fb",
    project_background: "#cfdeea",
    actual_background: "#a8c5da",
};

// project/actual backgrounds keep the light shades in dark mode; the bar
// chart binds them as SVG fill, where an empty value paints black
pub static DARK: Palette = Palette {
    primary: "#e5ecf6",
    secondary: "#a8c5da",
    background: "#0F172A",
    surface: "#1E293B",
    text: "#F1F5F9",
    text_secondary: "#94A3B8",
    border: "#334155",
    success: "#22C55E",
    warning: "#F59E0B",
    error: "#EF4444",
    card_background: "#f7f9fb",
    project_background: "#cfdeea",
    actual_background: "#a8c5da",
};

impl Palette {
    /// `(property, value)` pairs for `document.documentElement.style`.
    pub fn css_variables(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("--color-primary", self.primary),
            ("--color-secondary", self.secondary),
            ("--color-background", self.background),
            ("--color-surface", self.surface),
            ("--color-text", self.text),
            ("--color-textSecondary", self.text_secondary),
            ("--color-border", self.border),
            ("--color-success", self.success),
            ("--color-warning", self.warning),
            ("--color-error", self.error),
            ("--color-card_background", self.card_background),
            ("--color-project_background", self.project_background),
            ("--color-actual_background", self.actual_background),
        ]
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Key/value storage the theme flag is persisted in.
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Read the stored mode. Missing or unparsable values give `default`.
pub fn load_mode(storage: &dyn ThemeStorage, key: &str, default: ThemeMode) -> ThemeMode {
    storage
        .get(key)
        .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
        .map(ThemeMode::from_dark)
        .unwrap_or(default)
}

pub fn save_mode(storage: &dyn ThemeStorage, key: &str, mode: ThemeMode) {
    let raw = if mode.is_dark() { "true" } else { "false" };
    storage.set(key, raw);
}
