//! Localization for the society site.
//!
//! Built on `i18n-embed` (locale negotiation + loading), `fluent` (message
//! formatting), `rust-embed` (compile-time embedding of the `.ftl` assets)
//! and `i18n-embed-fl` (compile-time checked `fl!` lookups).
//!
//! Folder layout, relative to this crate root:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/acm-society-ui.ftl   (fallback/reference)
//!   hi-IN/acm-society-ui.ftl   (additional locale)
//! ```
//!
//! Call [`init`] once at startup (idempotent), then use the [`t!`](crate::t)
//! macro for literal keys or [`tr`] when the key only exists at runtime, e.g.
//! the label ids carried by page descriptors.
//!
//! Adding a locale: copy `en-US/acm-society-ui.ftl` to
//! `i18n/<lang-id>/acm-society-ui.ftl`, translate the values (ids and
//! placeholders stay identical) and let the completeness tests confirm
//! nothing was missed.

use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export so `t!` can expand anywhere in the crate.

/// Ergonomic translation macro for literal message ids.
/// Examples:
///     t!("nav-menu")
///     t!("footer-note", year = year_text)
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup routes through the shared
/// loader and unknown ids fail the build.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the FTL filename, `i18n/<locale>/{DOMAIN}.ftl`.
const DOMAIN: &str = "acm-society-ui";

/// Embeds every locale folder under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader backing both `t!` and [`tr`].
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load localization bundles for the visitor's preferred languages.
/// Idempotent; components call it defensively.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("i18n: language selection failed ({err}); staying on the fallback locale");
        }
    });
}

/// Runtime lookup for message ids that are data, not literals.
///
/// Page descriptors name their labels by Fluent id, so the navigation chrome
/// resolves them here instead of through the compile-time checked macro.
pub fn tr(id: &str) -> String {
    LOADER.get(id)
}

/// Language identifiers with an embedded FTL file.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
