//! Viewport width and the breakpoint the navbar's two layouts hang on.

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

/// Minimum width, in CSS pixels, at which the navbar shows the icon row and
/// opens the panel on hover. Narrower viewports get the textual trigger.
/// Keep in sync with the `max-width: 768px` media queries in the stylesheets.
pub const NAV_WIDE_MIN_PX: f64 = 769.0;

/// Width reported when no window exists (native test runs).
const FALLBACK_WIDTH_PX: f64 = 1280.0;

/// Which navbar trigger the current viewport gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    /// Narrow viewports: textual Menu/Close toggle, no hover behavior.
    Compact,
    /// Wide viewports: per-page icon links, hover opens the panel.
    Wide,
}

impl NavLayout {
    pub fn from_width(width: f64) -> Self {
        if width >= NAV_WIDE_MIN_PX {
            Self::Wide
        } else {
            Self::Compact
        }
    }
}

/// Current window inner width in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_WIDTH_PX)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_width() -> f64 {
    FALLBACK_WIDTH_PX
}

/// Install the app-wide `resize` listener, invoking `callback` with the new
/// width on every event. The closure is leaked: the listener lives exactly
/// as long as the page does.
#[cfg(target_arch = "wasm32")]
pub fn on_resize(mut callback: impl FnMut(f64) + 'static) {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn FnMut()>::new(move || callback(window_width()));
    if window
        .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("viewport: resize listener could not be installed");
    }
    handler.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_resize(_callback: impl FnMut(f64) + 'static) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_width_is_wide() {
        assert_eq!(NavLayout::from_width(769.0), NavLayout::Wide);
        assert_eq!(NavLayout::from_width(1024.0), NavLayout::Wide);
    }

    #[test]
    fn just_under_breakpoint_is_compact() {
        assert_eq!(NavLayout::from_width(768.0), NavLayout::Compact);
        assert_eq!(NavLayout::from_width(768.9), NavLayout::Compact);
    }

    #[test]
    fn extremes_map_sensibly() {
        assert_eq!(NavLayout::from_width(320.0), NavLayout::Compact);
        assert_eq!(NavLayout::from_width(2560.0), NavLayout::Wide);
    }

    #[test]
    fn native_fallback_width_counts_as_wide() {
        assert_eq!(NavLayout::from_width(window_width()), NavLayout::Wide);
    }
}
