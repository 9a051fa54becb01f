use dioxus::prelude::*;

use crate::components::Footer;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "page page-projects",
            h1 { {crate::t!("projects-title")} }
            p { {crate::t!("projects-intro")} }
        }
        Footer {}
    }
}
