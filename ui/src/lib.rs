//! Shared UI for the PEC ACM society site. Navigation chrome, page views,
//! and the small browser-facing helpers they sit on; application shells
//! provide routing and hand this crate plain data.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Three-zone navigation header (components/navbar.rs)
    pub mod navbar;
    pub use navbar::register_nav;
    pub use navbar::NavBuilder;
    pub use navbar::Navbar;
    pub use navbar::NavLink;

    // Slide-in panel listing the navigable pages (components/expand.rs)
    pub mod expand;
    pub use expand::Expand;

    // Shared page footer (components/footer.rs)
    pub mod footer;
    pub use footer::Footer;

    // Feather-style stroke icons (components/icons.rs)
    pub mod icons;
    pub use icons::NavIcon;
}
