use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::theme::{Theme, THEME_STORAGE_KEY};

/// The page-wide theme flag. Created once by `App` and handed to the
/// components that need it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeController {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeController {
    /// Reads the persisted theme; a missing or unrecognized value decodes to
    /// `Theme::Light`. Every write goes back to local storage.
    pub fn new() -> Self {
        let (theme, set_theme, _) =
            use_local_storage::<Theme, FromToStringCodec>(THEME_STORAGE_KEY);
        Self { theme, set_theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("switching theme to {next}");
        self.set_theme.set(next);
    }
}
