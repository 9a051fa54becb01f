use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::t;

/// Shared page footer: brand mark, tagline, and the year-stamped notice.
#[component]
pub fn Footer() -> Element {
    let year = OffsetDateTime::now_utc().year();
    // Passed as a string so Fluent does not apply digit grouping to it.
    let year_text = year.to_string();

    rsx! {
        footer { class: "footer",
            h5 { class: "footer__brand",
                "PECACM "
                span { "SOCIETY" }
            }
            p { class: "footer__tagline", {t!("footer-tagline")} }
            p { class: "footer__note", {t!("footer-note", year = year_text)} }
        }
    }
}
