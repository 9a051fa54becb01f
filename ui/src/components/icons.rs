//! Feather-style stroke icons used by the navigation chrome.
//!
//! The path data is inlined rather than loaded from files so every stroke
//! stays reachable from CSS, which the hover draw animation and the
//! active-route recolor rely on.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Award,
    Clipboard,
    Calendar,
    HelpCircle,
    Sun,
    Moon,
}

impl NavIcon {
    /// Render as a 24x24 stroke SVG; `class` lands on the `svg` element so
    /// callers can target it from their stylesheets.
    pub fn render(self, class: &str) -> Element {
        rsx! {
            svg {
                class: "{class}",
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                {self.strokes()}
            }
        }
    }

    fn strokes(self) -> Element {
        match self {
            Self::Home => rsx! {
                path { d: "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                polyline { points: "9 22 9 12 15 12 15 22" }
            },
            Self::Award => rsx! {
                circle { cx: "12", cy: "8", r: "7" }
                polyline { points: "8.21 13.89 7 23 12 20 17 23 15.79 13.88" }
            },
            Self::Clipboard => rsx! {
                path { d: "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2" }
                rect { x: "8", y: "2", width: "8", height: "4", rx: "1", ry: "1" }
            },
            Self::Calendar => rsx! {
                rect { x: "3", y: "4", width: "18", height: "18", rx: "2", ry: "2" }
                line { x1: "16", y1: "2", x2: "16", y2: "6" }
                line { x1: "8", y1: "2", x2: "8", y2: "6" }
                line { x1: "3", y1: "10", x2: "21", y2: "10" }
            },
            Self::HelpCircle => rsx! {
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
                line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
            },
            Self::Sun => rsx! {
                circle { cx: "12", cy: "12", r: "5" }
                line { x1: "12", y1: "1", x2: "12", y2: "3" }
                line { x1: "12", y1: "21", x2: "12", y2: "23" }
                line { x1: "4.22", y1: "4.22", x2: "5.64", y2: "5.64" }
                line { x1: "18.36", y1: "18.36", x2: "19.78", y2: "19.78" }
                line { x1: "1", y1: "12", x2: "3", y2: "12" }
                line { x1: "21", y1: "12", x2: "23", y2: "12" }
                line { x1: "4.22", y1: "19.78", x2: "5.64", y2: "18.36" }
                line { x1: "18.36", y1: "5.64", x2: "19.78", y2: "4.22" }
            },
            Self::Moon => rsx! {
                path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
            },
        }
    }
}
