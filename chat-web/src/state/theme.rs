//! Theme state management
//!
//! Light/dark preference, persisted independently of chat data. First
//! load falls back from the stored value to the platform's
//! `prefers-color-scheme` signal, then to light.

use crate::services::store::SnapshotStore;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
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

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
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

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Stored preference, else ambient platform preference, else light.
pub fn initial_theme(store: &dyn SnapshotStore) -> Theme {
    if let Some(theme) = store.load_theme().as_deref().and_then(Theme::from_str) {
        return theme;
    }

    if prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

// The ambient preference signal only exists in a browser.
#[cfg(not(target_arch = "wasm32"))]
fn prefers_dark() -> bool {
    false
}

/// Mirror the theme onto the `dark` class of the document element.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let result = if theme.is_dark() {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };

    if result.is_err() {
        log::warn!("Failed to update document theme class");
    }
}

/// Global theme context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self, store: &dyn SnapshotStore) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        apply_theme(next);
        store.save_theme(next.as_str());
    }
}

pub fn provide_theme_context(store: &dyn SnapshotStore) -> ThemeContext {
    let theme = initial_theme(store);
    apply_theme(theme);

    let context = ThemeContext {
        theme: RwSignal::new(theme),
    };
    provide_context(context);
    context
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::MemoryStore;

    #[test]
    fn stored_preference_wins() {
        let store = MemoryStore::new();
        store.save_theme("dark");

        assert_eq!(initial_theme(&store), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_falls_through() {
        let store = MemoryStore::new();
        store.save_theme("solarized");

        // No window in native tests, so the ambient signal is absent too.
        assert_eq!(initial_theme(&store), Theme::Light);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }
}
