//! Page descriptors handed to the navigation chrome by the shell.

/// One navigable page, as the navigation chrome sees it.
///
/// The shell owns the route table; this crate only consumes plain data, so
/// the chrome never needs to know any `Route` enum.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    /// Route path the link navigates to, e.g. `"/events"`.
    pub page_link: &'static str,
    /// Fluent message id for the visible label.
    pub display_name: &'static str,
    /// Whether the expand panel lists this page.
    pub show_in_navbar: bool,
    /// Fade-in stagger for this entry in the expand panel, in seconds.
    pub animation_delay_s: f64,
}

/// Descriptors the expand panel actually renders, in input order.
pub fn visible_pages(pages: &[PageDescriptor]) -> impl Iterator<Item = &PageDescriptor> {
    pages.iter().filter(|page| page.show_in_navbar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(link: &'static str, shown: bool) -> PageDescriptor {
        PageDescriptor {
            page_link: link,
            display_name: "nav-home",
            show_in_navbar: shown,
            animation_delay_s: 0.2,
        }
    }

    #[test]
    fn hidden_pages_are_skipped() {
        let pages = vec![page("/", true), page("/internal", false), page("/about", true)];
        let shown: Vec<&str> = visible_pages(&pages).map(|p| p.page_link).collect();
        assert_eq!(shown, ["/", "/about"]);
    }

    #[test]
    fn input_order_is_preserved() {
        let pages = vec![page("/events", true), page("/about", true), page("/", true)];
        let shown: Vec<&str> = visible_pages(&pages).map(|p| p.page_link).collect();
        assert_eq!(shown, ["/events", "/about", "/"]);
    }

    #[test]
    fn empty_input_yields_empty_panel() {
        assert_eq!(visible_pages(&[]).count(), 0);
    }
}
