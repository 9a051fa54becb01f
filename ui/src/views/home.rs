use dioxus::prelude::*;

use crate::components::Footer;

/// Landing page. Owns the document title and description; the other pages
/// leave whatever metadata is already set.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Title { {crate::t!("home-doc-title")} }
        document::Meta { name: "description", content: crate::t!("home-doc-description") }

        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { class: "page-home__subtitle", {crate::t!("home-subtitle")} }
            p { {crate::t!("home-intro")} }
            p { class: "page-home__cta", {crate::t!("home-cta")} }
        }
        Footer {}
    }
}
