//! Theme preference
//!
//! `light`, `dark` or `system`, persisted under `laritmo-theme`. The system
//! signal is supplied by the caller.

use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "laritmo-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Theme actually applied after resolving `System`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn effective(&self, system_prefers_dark: bool) -> EffectiveTheme {
        match self {
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::System if system_prefers_dark => EffectiveTheme::Dark,
            ThemePreference::System => EffectiveTheme::Light,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(format!("unknown theme `{}`", other)),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveTheme::Light => f.write_str("light"),
            EffectiveTheme::Dark => f.write_str("dark"),
        }
    }
}

/// Stored preference; missing or unknown values read as `System`
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> ThemePreference {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|e| {
            warn!("Ignoring stored theme: {}", e);
            ThemePreference::System
        }),
        Ok(None) => ThemePreference::System,
        Err(e) => {
            warn!("Failed to read theme preference: {}", e);
            ThemePreference::System
        }
    }
}

/// Persist `theme` and return the theme to apply
pub fn set_theme<S: KeyValueStore + ?Sized>(
    store: &mut S,
    theme: ThemePreference,
    system_prefers_dark: bool,
) -> EffectiveTheme {
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        warn!("Failed to persist theme preference: {}", e);
    }
    let effective = theme.effective(system_prefers_dark);
    debug!("Applying theme: {} ({})", effective, theme);
    effective
}

/// Flip the effective theme, storing the explicit result
pub fn toggle_theme<S: KeyValueStore + ?Sized>(
    store: &mut S,
    system_prefers_dark: bool,
) -> EffectiveTheme {
    let next = match load_theme(&*store).effective(system_prefers_dark) {
        EffectiveTheme::Dark => ThemePreference::Light,
        EffectiveTheme::Light => ThemePreference::Dark,
    };
    set_theme(store, next, system_prefers_dark)
}
