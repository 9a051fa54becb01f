use dioxus::prelude::*;

use crate::components::Footer;

#[component]
pub fn Achievements() -> Element {
    rsx! {
        section { class: "page page-achievements",
            h1 { {crate::t!("achievements-title")} }
            p { {crate::t!("achievements-intro")} }
        }
        Footer {}
    }
}
