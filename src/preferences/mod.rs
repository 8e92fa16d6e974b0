//! User preferences kept in the client's durable store

pub mod theme;

pub use theme::{EffectiveTheme, THEME_KEY, ThemePreference, load_theme, set_theme, toggle_theme};
