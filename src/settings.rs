//! Player preferences
//!
//! Each preference is its own LocalStorage entry so a corrupt value only
//! resets that one setting.

use serde::{Deserialize, Serialize};

use crate::clamp_board_size;
use crate::consts::DEFAULT_BOARD_SIZE;
use crate::persistence::{Store, keys, read_entry, write_entry};

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Game preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Side length for new games (3-6)
    pub board_size: usize,
    /// Sound effects muted
    pub sfx_muted: bool,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            sfx_muted: false,
            theme: Theme::Light,
        }
    }
}

impl Preferences {
    /// Load every preference, falling back per entry
    ///
    /// `prefers_dark` picks the theme when none was saved.
    pub fn load<S: Store + ?Sized>(store: &S, prefers_dark: bool) -> Self {
        let board_size = read_entry(store, keys::BOARD_SIZE)
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(clamp_board_size)
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let sfx_muted = read_entry(store, keys::SFX_MUTED).as_deref() == Some("true");

        let theme = read_entry(store, keys::THEME)
            .and_then(|s| Theme::from_str(&s))
            .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light });

        log::info!(
            "Preferences: size {}, muted {}, theme {}",
            board_size,
            sfx_muted,
            theme.as_str()
        );
        Self {
            board_size,
            sfx_muted,
            theme,
        }
    }

    /// Store a new board size, returning the clamped value
    pub fn set_board_size<S: Store + ?Sized>(&mut self, store: &mut S, size: usize) -> usize {
        self.board_size = clamp_board_size(size);
        write_entry(store, keys::BOARD_SIZE, &self.board_size.to_string());
        self.board_size
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_sfx<S: Store + ?Sized>(&mut self, store: &mut S) -> bool {
        self.sfx_muted = !self.sfx_muted;
        write_entry(store, keys::SFX_MUTED, if self.sfx_muted { "true" } else { "false" });
        self.sfx_muted
    }

    /// Switch light/dark, returning the new theme
    pub fn toggle_theme<S: Store + ?Sized>(&mut self, store: &mut S) -> Theme {
        self.theme = self.theme.toggled();
        write_entry(store, keys::THEME, self.theme.as_str());
        self.theme
    }
}
