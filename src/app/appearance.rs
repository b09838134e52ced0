//! Appearance preferences: colour theme and dark mode.
//!
//! Rendering is a presentation concern; this module only owns the two
//! persisted values so every front end reads the same choice back.

use core::fmt;

use log::info;
use serde::Serialize;

use super::codec::{KEY_DARK_MODE, KEY_THEME, decode_bool, encode_bool, load_or, store_or_warn};
use super::ports::PreferenceStore;

/// Accent colour theme.  Persisted as its bare lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Orange,
    Pink,
    Cyan,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Blue,
        Theme::Green,
        Theme::Orange,
        Theme::Pink,
        Theme::Cyan,
    ];

    /// Persisted name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Ocean",
            Self::Green => "Forest",
            Self::Orange => "Sunset",
            Self::Pink => "Blossom",
            Self::Cyan => "Arctic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name.trim())
    }

    /// Next theme in declaration order, wrapping.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    theme: Theme,
    dark_mode: bool,
}

impl Appearance {
    /// Restore both preferences.  Unknown theme names fall back to blue.
    pub fn restore(store: &impl PreferenceStore) -> Self {
        let theme = load_or(store, KEY_THEME, Theme::Blue, Theme::from_name);
        let dark_mode = load_or(store, KEY_DARK_MODE, false, decode_bool);
        info!("Appearance restored: theme={} dark_mode={}", theme, dark_mode);
        Self { theme, dark_mode }
    }

    pub fn set_theme(&mut self, theme: Theme, store: &mut impl PreferenceStore) {
        self.theme = theme;
        store_or_warn(store, KEY_THEME, theme.name());
        info!("Theme: {}", theme);
    }

    /// Flip dark mode.  Returns the new value.
    pub fn toggle_dark_mode(&mut self, store: &mut impl PreferenceStore) -> bool {
        self.dark_mode = !self.dark_mode;
        store_or_warn(store, KEY_DARK_MODE, &encode_bool(self.dark_mode));
        info!("Dark mode {}", if self.dark_mode { "on" } else { "off" });
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}
