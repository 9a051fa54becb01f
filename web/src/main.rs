use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, NavLink, Navbar};
use ui::core::pages::PageDescriptor;
use ui::core::{theme, viewport};
use ui::views::{About, Achievements, Events, Home, Projects};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/achievements")]
    Achievements {},
    #[route("/projects")]
    Projects {},
    #[route("/events")]
    Events {},
    #[route("/about")]
    About {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Pages handed to the navigation chrome. Order here is the expand panel's
/// render order, and the delays produce its top-to-bottom stagger.
fn site_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor {
            page_link: "/",
            display_name: "nav-home",
            show_in_navbar: true,
            animation_delay_s: 0.2,
        },
        PageDescriptor {
            page_link: "/achievements",
            display_name: "nav-achievements",
            show_in_navbar: true,
            animation_delay_s: 0.3,
        },
        PageDescriptor {
            page_link: "/projects",
            display_name: "nav-projects",
            show_in_navbar: true,
            animation_delay_s: 0.4,
        },
        PageDescriptor {
            page_link: "/events",
            display_name: "nav-events",
            show_in_navbar: true,
            animation_delay_s: 0.5,
        },
        PageDescriptor {
            page_link: "/about",
            display_name: "nav-about",
            show_in_navbar: true,
            animation_delay_s: 0.6,
        },
    ]
}

/// Turns the chrome's link descriptions into real router links. Unroutable
/// paths fall back to home rather than panicking mid-render.
fn build_nav_link(link: NavLink) -> Element {
    let NavLink {
        path,
        class,
        style,
        onclick,
        children,
    } = link;
    let target = path.parse::<Route>().unwrap_or(Route::Home {});
    rsx! {
        Link {
            class: "{class}",
            style: "{style}",
            to: target,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            link: build_nav_link,
        });
    }

    // Theme: the system scheme seeds the first visit only; once the visitor
    // has toggled explicitly the site starts light and the toggle rules.
    let dark_mode = use_signal(theme::initial_dark_mode);
    use_effect(move || theme::apply(dark_mode()));
    use_context_provider(|| dark_mode);

    // Viewport width as state, kept current by a page-lifetime resize
    // listener, so layout decisions flow through props instead of ad-hoc
    // window reads.
    let mut viewport_width = use_signal(viewport::window_width);
    use_effect(move || {
        viewport::on_resize(move |width| viewport_width.set(width));
    });
    use_context_provider(|| viewport_width);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web-specific layout: the shared navbar above every routed page body.
/// Translates router and shell state into the plain props the ui crate
/// expects.
#[component]
fn SiteShell() -> Element {
    let route = use_route::<Route>();
    let dark_mode = use_context::<Signal<bool>>();
    let viewport_width = use_context::<Signal<f64>>();

    rsx! {
        Navbar {
            pages: site_pages(),
            dark_mode,
            current_path: route.to_string(),
            viewport_width: viewport_width(),
        }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_print_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Achievements {}.to_string(), "/achievements");
        assert_eq!(Route::Projects {}.to_string(), "/projects");
        assert_eq!(Route::Events {}.to_string(), "/events");
        assert_eq!(Route::About {}.to_string(), "/about");
    }

    #[test]
    fn every_page_descriptor_is_routable() {
        for page in site_pages() {
            assert!(
                page.page_link.parse::<Route>().is_ok(),
                "page link {} does not parse as a route",
                page.page_link
            );
        }
    }

    #[test]
    fn pages_table_matches_the_icon_row_order() {
        let pages = site_pages();
        let links: Vec<&str> = pages.iter().map(|page| page.page_link).collect();
        assert_eq!(links, ["/", "/achievements", "/projects", "/events", "/about"]);
    }

    #[test]
    fn panel_delays_stagger_top_to_bottom() {
        let pages = site_pages();
        assert!(pages.iter().all(|page| page.show_in_navbar));
        for pair in pages.windows(2) {
            assert!(pair[0].animation_delay_s < pair[1].animation_delay_s);
        }
    }
}
