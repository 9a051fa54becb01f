//! Body scroll lock, held while the expand panel is open.

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

/// Class that sets `overflow: hidden` on `<body>`; see the theme stylesheet.
pub const LOCK_CLASS: &str = "scroll-locked";

/// Lock or unlock body scrolling. Class-based so the lock composes with
/// whatever other styling the body carries.
#[cfg(target_arch = "wasm32")]
pub fn set_body_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if locked {
        classes.add_1(LOCK_CLASS)
    } else {
        classes.remove_1(LOCK_CLASS)
    };
    if result.is_err() {
        warn!("scroll: could not update the {LOCK_CLASS} class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_body_locked(_locked: bool) {}
