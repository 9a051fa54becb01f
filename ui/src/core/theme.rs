//! Dark-mode wiring.
//!
//! The in-memory dark/light boolean lives in the shell as a signal; this
//! module owns the persisted "visitor chose explicitly" marker and the DOM
//! side effects that make CSS pick the right palette.

use dioxus::logger::tracing::warn;

use super::storage;

/// Storage key marking that the visitor toggled the theme at least once.
/// Only ever written `true`; the value never flips back.
pub const THEME_SET_KEY: &str = "isThemeSet";

/// Class applied to the document element while dark mode is on.
const DARK_CLASS: &str = "dark-mode";

/// Record the visitor's explicit theme interaction. Storage failures are
/// logged and swallowed; the in-memory toggle must keep working without
/// persistence.
pub fn mark_theme_chosen() {
    if let Err(err) = storage::write_flag(THEME_SET_KEY, true) {
        warn!("theme: choice marker not persisted: {err}");
    }
}

/// Whether the visitor ever toggled the theme explicitly.
pub fn is_theme_set() -> bool {
    storage::read_flag(THEME_SET_KEY)
        .unwrap_or_default()
        .unwrap_or(false)
}

/// Startup value for the shell's dark-mode signal: follow the system color
/// scheme until the visitor has made an explicit choice, then start from the
/// light default. Only the marker is persisted, not the choice itself.
pub fn initial_dark_mode() -> bool {
    if is_theme_set() {
        false
    } else {
        prefers_dark()
    }
}

/// Toggle the `dark-mode` class on `<html>` so the CSS variables switch.
#[cfg(target_arch = "wasm32")]
pub fn apply(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if result.is_err() {
        warn!("theme: could not update the {DARK_CLASS} class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply(_dark: bool) {}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn prefers_dark() -> bool {
    false
}
