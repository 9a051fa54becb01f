use dioxus::prelude::*;

use crate::components::Footer;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-intro")} }
        }
        Footer {}
    }
}
