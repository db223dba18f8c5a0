//! Site and Auth API configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders and the browser hydrates the same tree, so both must
//! see identical configuration. Site configuration is therefore embedded at
//! compile time from `site.json`, and the Auth API base URL comes from the
//! build-time `AUTH_API_URL` variable rather than anything read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::nav::AuthType;

pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:8000";

const SITE_JSON: &str = include_str!("../site.json");

/// Where the external Auth API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthApiConfig {
    base_url: String,
}

impl AuthApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Base URL baked in at build time (`AUTH_API_URL`), or the local default.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("AUTH_API_URL").unwrap_or(DEFAULT_AUTH_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for AuthApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_API_URL)
    }
}

/// Top-level site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub footer: Option<FooterConfig>,
}

/// Site footer. The copyright line is fixed when the site is built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterConfig {
    pub copyright: String,
}

impl SiteConfig {
    /// Parse a site configuration document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the document is malformed or names an
    /// unknown navbar item type.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Embedded `site.json`, or the minimal default if it fails to parse.
    pub fn load() -> Self {
        Self::from_json(SITE_JSON).unwrap_or_else(|e| {
            log::error!("site.json is invalid, using defaults: {e}");
            Self::default()
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "RoboNerve AI Textbook".to_owned(),
            tagline: String::new(),
            navbar: NavbarConfig {
                title: "RoboNerve AI".to_owned(),
                logo: None,
                items: vec![NavbarItem::AuthLink { auth_type: AuthType::Login, position: NavbarPosition::Right }],
            },
            footer: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavbarConfig {
    pub title: String,
    #[serde(default)]
    pub logo: Option<NavbarLogo>,
    #[serde(default)]
    pub items: Vec<NavbarItem>,
}

impl NavbarConfig {
    /// Navbar items on one side, in configured order.
    pub fn items_at(&self, position: NavbarPosition) -> impl Iterator<Item = &NavbarItem> {
        self.items.iter().filter(move |item| item.position() == position)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavbarLogo {
    pub alt: String,
    pub src: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// One navbar entry, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum NavbarItem {
    /// Link to the first page of a docs sidebar.
    #[serde(rename = "docSidebar", rename_all = "camelCase")]
    DocSidebar {
        sidebar_id: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
    /// Plain link, internal or external.
    #[serde(rename = "link", alias = "default")]
    Link {
        href: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
    /// Session-aware login/signup entry. Any configured `label` is ignored:
    /// the text is derived from `authType` and the session.
    #[serde(rename = "custom-AuthLink", rename_all = "camelCase")]
    AuthLink {
        #[serde(default)]
        auth_type: AuthType,
        #[serde(default)]
        position: NavbarPosition,
    },
}

impl NavbarItem {
    pub fn position(&self) -> NavbarPosition {
        match self {
            Self::DocSidebar { position, .. } | Self::Link { position, .. } | Self::AuthLink { position, .. } => {
                *position
            }
        }
    }
}
