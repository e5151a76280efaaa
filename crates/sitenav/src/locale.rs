//! Per-locale navbar variants.
//!
//! A site may declare one navbar per locale (e.g. a `zh` navbar with
//! translated labels alongside the default). [`LocaleNavbars`] resolves
//! a locale code to its navbar, falling back to the primary language
//! subtag and then the default. Render-time fallback of individual
//! labels remains the framework's job.

use std::collections::HashMap;

use serde::Serialize;

use crate::navbar::Navbar;

/// Navbars for each site locale with fallback resolution.
///
/// Immutable after construction, like the navbars it holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocaleNavbars {
    /// Navbar used when no locale variant matches.
    default: Navbar,
    /// Locale code to navbar variant.
    locales: HashMap<String, Navbar>,
}

impl LocaleNavbars {
    /// Create from a default navbar and per-locale variants.
    #[must_use]
    pub fn new(default: Navbar, locales: HashMap<String, Navbar>) -> Self {
        Self { default, locales }
    }

    /// The default navbar.
    #[must_use]
    pub fn default_navbar(&self) -> &Navbar {
        &self.default
    }

    /// Locale codes with a declared variant, in no particular order.
    pub fn locale_codes(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Resolve the navbar for a locale.
    ///
    /// Resolution order: exact locale match, then the primary language
    /// subtag (`"zh-CN"` resolves to `"zh"`), then the default navbar.
    #[must_use]
    pub fn get(&self, locale: &str) -> &Navbar {
        if let Some(navbar) = self.locales.get(locale) {
            return navbar;
        }
        if let Some((language, _)) = locale.split_once('-')
            && let Some(navbar) = self.locales.get(language)
        {
            return navbar;
        }
        &self.default
    }
}
