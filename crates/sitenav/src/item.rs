//! Navigation entry types.
//!
//! A navbar declaration mixes two entry shapes: bare link strings
//! (`"/"`) and full records with a display label and optional icon.
//! [`NavbarItem`] preserves the source shape so that serializing the
//! sequence back to the framework's record shape is lossless.

use serde::{Deserialize, Serialize};

/// Single navigation bar entry.
///
/// Untagged on the wire: a bare string deserializes to [`Link`],
/// a map to [`Entry`].
///
/// [`Link`]: NavbarItem::Link
/// [`Entry`]: NavbarItem::Entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavbarItem {
    /// Minimal entry: a bare link path. Label and icon resolution is
    /// delegated to the rendering framework.
    Link(String),
    /// Full entry with display label and optional icon.
    Entry {
        /// Display label (human-readable, localized).
        text: String,
        /// Symbolic icon identifier (e.g. `"lightbulb"`, `"fa-solid fa-sitemap"`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        /// Link target path.
        link: String,
    },
}

impl NavbarItem {
    /// Create a minimal entry from a link path.
    pub fn link(link: impl Into<String>) -> Self {
        Self::Link(link.into())
    }

    /// Create a full entry with label, optional icon, and link.
    pub fn entry(
        text: impl Into<String>,
        icon: Option<&str>,
        link: impl Into<String>,
    ) -> Self {
        Self::Entry {
            text: text.into(),
            icon: icon.map(ToOwned::to_owned),
            link: link.into(),
        }
    }

    /// Link target path for either entry shape.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Link(link) | Self::Entry { link, .. } => link,
        }
    }

    /// Display label, if this entry carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Link(_) => None,
            Self::Entry { text, .. } => Some(text),
        }
    }

    /// Icon identifier, if this entry carries one.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        match self {
            Self::Link(_) => None,
            Self::Entry { icon, .. } => icon.as_deref(),
        }
    }

    /// Return the entry with its link replaced.
    ///
    /// Used by the configuration loader after environment variable
    /// expansion. The entry shape is preserved.
    #[must_use]
    pub fn with_target(self, link: String) -> Self {
        match self {
            Self::Link(_) => Self::Link(link),
            Self::Entry { text, icon, .. } => Self::Entry { text, icon, link },
        }
    }
}

impl From<&str> for NavbarItem {
    fn from(link: &str) -> Self {
        Self::Link(link.to_owned())
    }
}
