use dioxus::prelude::*;

use crate::core::pages::{visible_pages, PageDescriptor};
use crate::i18n;
use crate::t;

use super::navbar::{nav_link, panel_after, NavLink, PanelAction};

/// Slide-in navigation panel, mounted by the navbar only while expanded.
///
/// Mounting drives the animations: the panel's slide-in and each entry's
/// staggered fade play once per open, and reopening remounts the whole
/// panel so they play again. The pointer leaving the panel collapses it.
#[component]
pub fn Expand(pages: Vec<PageDescriptor>, current_path: String, expand: Signal<bool>) -> Element {
    let mut expand = expand;
    rsx! {
        div {
            class: "expand",
            onmouseleave: move |_| expand.set(panel_after(PanelAction::PointerLeave, expand())),
            for page in visible_pages(&pages) {
                {expand_entry(page, &current_path, expand)}
            }
            div { class: "expand__bottom fadeInUp", style: fade_delay_style(1.0),
                h5 { {t!("expand-tagline")} }
            }
        }
    }
}

fn expand_entry(page: &PageDescriptor, current_path: &str, expand: Signal<bool>) -> Element {
    let mut expand = expand;
    let focused = page.page_link == current_path;
    let label = i18n::tr(page.display_name);
    nav_link(NavLink {
        path: page.page_link,
        class: "expand__link".into(),
        style: String::new(),
        onclick: Some(EventHandler::new(move |_| {
            expand.set(panel_after(PanelAction::Navigate, expand()));
        })),
        children: rsx! {
            span {
                class: if focused { "fadeInUp focused" } else { "fadeInUp" },
                style: fade_delay_style(page.animation_delay_s),
                "{label}"
            }
        },
    })
}

/// Inline stagger for one entry's fade-in.
fn fade_delay_style(delay_s: f64) -> String {
    format!("animation-delay: {delay_s}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_style_formats_in_seconds() {
        assert_eq!(fade_delay_style(0.2), "animation-delay: 0.2s");
        assert_eq!(fade_delay_style(0.5), "animation-delay: 0.5s");
        assert_eq!(fade_delay_style(1.0), "animation-delay: 1s");
    }

    #[test]
    fn panel_renders_only_listed_pages() {
        let pages = vec![PageDescriptor {
            page_link: "/x",
            display_name: "X",
            show_in_navbar: true,
            animation_delay_s: 0.5,
        }];
        let entries: Vec<&PageDescriptor> = visible_pages(&pages).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].page_link, "/x");
        assert_eq!(fade_delay_style(entries[0].animation_delay_s), "animation-delay: 0.5s");
    }
}
