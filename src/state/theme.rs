//! Light/dark visual mode and its persisted preference.
//!
//! DESIGN
//! ======
//! The preference is read once when the controller loads and written back on
//! every toggle through an injected [`KeyValueStore`]. Storage failures never
//! surface: an unreadable preference means light mode, and a failed write
//! still flips the mode on screen.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

/// Page visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted marker for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored marker. Only `"dark"` selects dark mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Which indicator icons are shown in this mode.
    #[must_use]
    pub fn icons(self) -> IconVisibility {
        IconVisibility {
            sun_visible: self.is_dark(),
            moon_visible: !self.is_dark(),
        }
    }
}

/// Visibility of the two theme indicator icons. Dark mode shows the sun
/// (the way back to light); light mode shows the moon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub sun_visible: bool,
    pub moon_visible: bool,
}

/// Owns the current theme and writes it through to `store` under `key`.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Read the persisted preference. Absent or unreadable values load as
    /// [`Theme::Light`].
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = match store.get(&key) {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("theme preference unreadable: {e}");
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        Self { store, key, theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn icons(&self) -> IconVisibility {
        self.theme.icons()
    }

    /// Flip the theme and persist the new marker. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(&self.key, self.theme.as_str()) {
            leptos::logging::warn!("theme preference not saved: {e}");
        }
        self.theme
    }
}
