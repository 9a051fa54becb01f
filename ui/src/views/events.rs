use dioxus::prelude::*;

use crate::components::Footer;

#[component]
pub fn Events() -> Element {
    rsx! {
        section { class: "page page-events",
            h1 { {crate::t!("events-title")} }
            p { {crate::t!("events-intro")} }
        }
        Footer {}
    }
}
