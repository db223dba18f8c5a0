//! Colour-mode handling.
//!
//! The site is fixed to dark mode with no switch, so there is no stored
//! preference. The server renders `data-theme` on `<html>` and the client
//! re-applies it after hydration in case a cached page carried another value.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Colour modes understood by the site stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Dark,
    Light,
}

impl ColorMode {
    /// Value of the `data-theme` attribute.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// The only mode the site renders in.
pub const SITE_COLOR_MODE: ColorMode = ColorMode::Dark;

/// Apply `mode` as the `data-theme` attribute on `<html>`.
pub fn apply(mode: ColorMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", mode.attribute());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
