use dioxus::events::MouseEvent;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::pages::PageDescriptor;
use crate::core::scroll;
use crate::core::theme;
use crate::core::viewport::NavLayout;
use crate::i18n::{self};
use crate::t;

use super::expand::Expand;
use super::icons::NavIcon;

// Navbar + expand panel stylesheet.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Stagger between two adjacent icons' draw animations.
pub(crate) const ICON_DRAW_STAGGER_MS: usize = 250;

/// The wide layout's fixed icon row: route path and feather glyph, in
/// visual order. The expand panel is driven by [`PageDescriptor`]s instead,
/// so hiding a page there does not touch this row.
pub(crate) const NAV_ICON_TARGETS: [(&str, NavIcon); 5] = [
    ("/", NavIcon::Home),
    ("/achievements", NavIcon::Award),
    ("/projects", NavIcon::Clipboard),
    ("/events", NavIcon::Calendar),
    ("/about", NavIcon::HelpCircle),
];

/// Shells register a link constructor so this crate never needs to know
/// their `Route` enum. The navbar describes each link it wants as a
/// [`NavLink`] and the registered function turns it into a real router
/// `Link` element.
///
/// Registration happens once, before the root renders:
///
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// register_nav(NavBuilder { link: build_nav_link });
/// ```
///
/// Without a registered builder the navbar degrades to plain anchors, which
/// keeps component previews and unit tests free of router scaffolding.
pub struct NavBuilder {
    pub link: fn(NavLink) -> Element,
}

/// Everything the navbar knows about one link it wants rendered.
#[derive(Clone)]
pub struct NavLink {
    pub path: &'static str,
    pub class: String,
    pub style: String,
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Render one navigation link through the registered builder, or as a plain
/// anchor when no shell has registered one.
pub(crate) fn nav_link(link: NavLink) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(link),
        None => {
            let NavLink {
                path,
                class,
                style,
                onclick,
                children,
            } = link;
            rsx! {
                a {
                    class: "{class}",
                    style: "{style}",
                    href: "{path}",
                    onclick: move |evt| {
                        if let Some(handler) = onclick {
                            handler.call(evt);
                        }
                    },
                    {children}
                }
            }
        }
    }
}

/// Fluent id for the compact trigger's label.
pub(crate) fn trigger_label_key(expanded: bool) -> &'static str {
    if expanded {
        "nav-close"
    } else {
        "nav-menu"
    }
}

/// One pointer interaction on the chrome that can move the expand panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelAction {
    /// Click on the trigger zone.
    TriggerClick,
    /// Pointer entering the trigger zone under the given layout.
    HoverEnter(NavLayout),
    /// Click on the brand link or on a panel entry.
    Navigate,
    /// Pointer leaving the open panel.
    PointerLeave,
}

/// The panel's whole open/close behavior. Every handler on the navbar and
/// on the panel routes through here, so the transitions live in one
/// testable place.
pub(crate) fn panel_after(action: PanelAction, open: bool) -> bool {
    match action {
        PanelAction::TriggerClick => !open,
        PanelAction::HoverEnter(NavLayout::Wide) => true,
        PanelAction::HoverEnter(NavLayout::Compact) => open,
        PanelAction::Navigate | PanelAction::PointerLeave => false,
    }
}

/// Fixed three-zone site header: theme toggle, brand, menu trigger, plus
/// the conditionally mounted [`Expand`] panel.
///
/// The shell passes the current route path and viewport width as plain
/// props; the navbar itself never reads ambient browser state, which keeps
/// every layout decision reproducible in tests.
#[component]
pub fn Navbar(
    pages: Vec<PageDescriptor>,
    dark_mode: Signal<bool>,
    current_path: String,
    viewport_width: f64,
) -> Element {
    i18n::init();

    let mut dark_mode = dark_mode;
    let mut expand = use_signal(|| false);
    // Counts hover-entries; the icon row is keyed on it so every bump
    // remounts the icons and replays their one-shot draw animation.
    // Zero means "never hovered": the draw class is withheld so icons
    // render fully stroked on first paint.
    let mut draw_cycle = use_signal(|| 0u32);

    // Body scroll stays locked exactly while the panel is open.
    use_effect(move || scroll::set_body_locked(expand()));

    let layout = NavLayout::from_width(viewport_width);

    let on_theme_toggle = move |_: MouseEvent| {
        dark_mode.set(!dark_mode());
        theme::mark_theme_chosen();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "navbar",
            div {
                class: "navbar__theme",
                role: "button",
                aria_label: t!("nav-theme-toggle"),
                onclick: on_theme_toggle,
                if dark_mode() {
                    {NavIcon::Sun.render("navbar__theme-glyph navbar__theme-glyph--sun")}
                } else {
                    {NavIcon::Moon.render("navbar__theme-glyph")}
                }
            }

            div { class: "navbar__brand",
                {nav_link(NavLink {
                    path: "/",
                    class: "navbar__brand-link".into(),
                    style: String::new(),
                    onclick: Some(EventHandler::new(move |_| {
                        expand.set(panel_after(PanelAction::Navigate, expand()));
                    })),
                    children: rsx! {
                        "PECACM "
                        span { "SOCIETY" }
                    },
                })}
            }

            div {
                class: "navbar__trigger",
                onclick: move |_| expand.set(panel_after(PanelAction::TriggerClick, expand())),
                onmouseenter: move |_| {
                    expand.set(panel_after(PanelAction::HoverEnter(layout), expand()));
                    if layout == NavLayout::Wide {
                        draw_cycle.set(draw_cycle() + 1);
                    }
                },
                if layout == NavLayout::Compact {
                    span { class: "navbar__trigger-label",
                        {i18n::tr(trigger_label_key(expand()))}
                    }
                } else {
                    {wide_trigger_icons(&current_path, draw_cycle())}
                }
            }

            if expand() {
                Expand {
                    pages: pages.clone(),
                    current_path: current_path.clone(),
                    expand,
                }
            }
        }
    }
}

fn wide_trigger_icons(current_path: &str, draw_cycle: u32) -> Element {
    rsx! {
        for (index, (path, icon)) in NAV_ICON_TARGETS.iter().enumerate() {
            span {
                key: "{draw_cycle}-{path}",
                class: format!(
                    "navbar__icon{}{}",
                    if *path == current_path { " navbar__icon--active" } else { "" },
                    if draw_cycle > 0 { " navbar__icon--draw" } else { "" },
                ),
                style: format!("--draw-delay: {}ms", index * ICON_DRAW_STAGGER_MS),
                {nav_link(NavLink {
                    path: *path,
                    class: "navbar__icon-link".into(),
                    style: String::new(),
                    onclick: None,
                    children: icon.render("navbar__glyph"),
                })}
            }
        }
    }
}
