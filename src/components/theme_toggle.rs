//! Toolbar button switching between light and dark mode.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::theme::ThemeController;
use crate::state::ui::UiState;
use crate::util::dark_mode::{self, BrowserStore};

/// Theme toggle button with sun and moon indicator icons.
///
/// The stored preference is loaded after mount so server-rendered markup
/// always starts light. Each click flips the theme, persists it, and updates
/// the dark class on `<html>`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = use_context::<RwSignal<UiState>>().unwrap_or_else(|| RwSignal::new(UiState::default()));
    let config = use_context::<PageConfig>().unwrap_or_default();
    let hidden_class = config.hidden_class.clone();
    let controller = StoredValue::new_local(None::<ThemeController<BrowserStore>>);

    let config_load = config.clone();
    Effect::new(move || {
        let loaded = dark_mode::load_controller(&config_load);
        let theme = loaded.theme();
        controller.set_value(Some(loaded));
        dark_mode::apply_root(theme, &config_load);
        ui.update(|u| u.theme = theme);
    });

    let on_click = move |_| {
        let mut toggled = None;
        controller.update_value(|c| toggled = c.as_mut().map(ThemeController::toggle));
        if let Some(theme) = toggled {
            dark_mode::apply_root(theme, &config);
            ui.update(|u| u.theme = theme);
        }
    };

    let hidden_sun = hidden_class.clone();
    let sun_class = move || icon_class(ui.get().theme.icons().sun_visible, &hidden_sun);
    let moon_class = move || icon_class(ui.get().theme.icons().moon_visible, &hidden_class);

    view! {
        <button class="btn theme-toggle" on:click=on_click title="Toggle dark mode">
            <span class=sun_class>"☀"</span>
            <span class=moon_class>"☾"</span>
        </button>
    }
}

fn icon_class(visible: bool, hidden_class: &str) -> String {
    if visible {
        "theme-toggle__icon".to_owned()
    } else {
        format!("theme-toggle__icon {hidden_class}")
    }
}
