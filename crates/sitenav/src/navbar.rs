//! Ordered, immutable navigation bar sequence.
//!
//! A [`Navbar`] is constructed once when the site configuration loads
//! and is read-only thereafter. Construction validates the sequence
//! invariants: every entry has a non-empty link, links are unique, and
//! the declared order is preserved.

use std::collections::HashMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::item::NavbarItem;

/// Validation error for navbar construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavbarError {
    /// Entry has an empty link target.
    #[error("navbar entry {index} has an empty link")]
    EmptyLink {
        /// Position of the offending entry.
        index: usize,
    },
    /// Full entry has an empty display label.
    #[error("navbar entry {index} has an empty text label")]
    EmptyText {
        /// Position of the offending entry.
        index: usize,
    },
    /// Two entries share the same link target.
    #[error("duplicate navbar link \"{link}\" (entries {first} and {second})")]
    DuplicateLink {
        /// The duplicated link value.
        link: String,
        /// Position of the first entry with this link.
        first: usize,
        /// Position of the second entry with this link.
        second: usize,
    },
}

/// Ordered, immutable navigation bar.
///
/// Entry order is display order and is stable after construction.
/// Serializes transparently as the entry sequence (the record shape the
/// rendering framework consumes); deserialization validates the sequence
/// so malformed declarations fail at load time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Navbar {
    items: Vec<NavbarItem>,
}

impl Navbar {
    /// Create a navbar from an ordered entry sequence.
    ///
    /// # Errors
    ///
    /// Returns [`NavbarError`] if any entry has an empty link, a full
    /// entry has an empty text label, or two entries share a link.
    pub fn new(items: Vec<NavbarItem>) -> Result<Self, NavbarError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let link = item.target();
            if link.is_empty() {
                return Err(NavbarError::EmptyLink { index });
            }
            if let Some(text) = item.text()
                && text.is_empty()
            {
                return Err(NavbarError::EmptyText { index });
            }
            if let Some(&first) = seen.get(link) {
                return Err(NavbarError::DuplicateLink {
                    link: link.to_owned(),
                    first,
                    second: index,
                });
            }
            seen.insert(link, index);
        }

        Ok(Self { items })
    }

    /// Entries in declared order.
    #[must_use]
    pub fn items(&self) -> &[NavbarItem] {
        &self.items
    }

    /// Entry at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NavbarItem> {
        self.items.get(index)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the navbar has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in declared order.
    pub fn iter(&self) -> std::slice::Iter<'_, NavbarItem> {
        self.items.iter()
    }
}

impl Deref for Navbar {
    type Target = [NavbarItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Navbar {
    type Item = &'a NavbarItem;
    type IntoIter = std::slice::Iter<'a, NavbarItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<Vec<NavbarItem>> for Navbar {
    type Error = NavbarError;

    fn try_from(items: Vec<NavbarItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<'de> Deserialize<'de> for Navbar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<NavbarItem>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    // Navbar is shared read-only after construction
    static_assertions::assert_impl_all!(super::Navbar: Send, Sync);

    use super::*;

    /// The navbar content this model was written for: a root shorthand
    /// followed by four labeled sections.
    fn sample_items() -> Vec<NavbarItem> {
        vec![
            NavbarItem::link("/"),
            NavbarItem::entry("快速入门", Some("lightbulb"), "/get-started/"),
            NavbarItem::entry("项目介绍", Some("code"), "/project-introduction/"),
            NavbarItem::entry("架构设计", Some("fa-solid fa-sitemap"), "/architecture/"),
            NavbarItem::entry("自定义", Some("fa-solid fa-wrench"), "/custom/"),
        ]
    }

    #[test]
    fn test_empty_navbar_is_valid() {
        let navbar = Navbar::new(Vec::new()).unwrap();
        assert!(navbar.is_empty());
        assert_eq!(navbar.len(), 0);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Navbar::default().is_empty());
    }

    #[test]
    fn test_new_preserves_declared_order() {
        let navbar = Navbar::new(sample_items()).unwrap();

        let links: Vec<_> = navbar.iter().map(NavbarItem::target).collect();
        assert_eq!(
            links,
            vec![
                "/",
                "/get-started/",
                "/project-introduction/",
                "/architecture/",
                "/custom/"
            ]
        );
        // Root entry declared first stays first
        assert_eq!(navbar[0], NavbarItem::link("/"));
    }

    #[test]
    fn test_new_rejects_empty_link_in_shorthand() {
        let err = Navbar::new(vec![NavbarItem::link("/"), NavbarItem::link("")]).unwrap_err();
        assert_eq!(err, NavbarError::EmptyLink { index: 1 });
    }

    #[test]
    fn test_new_rejects_empty_link_in_entry() {
        let err = Navbar::new(vec![NavbarItem::entry("Guide", None, "")]).unwrap_err();
        assert_eq!(err, NavbarError::EmptyLink { index: 0 });
    }

    #[test]
    fn test_new_rejects_empty_text() {
        let err = Navbar::new(vec![NavbarItem::entry("", Some("code"), "/guide/")]).unwrap_err();
        assert_eq!(err, NavbarError::EmptyText { index: 0 });
    }

    #[test]
    fn test_new_rejects_duplicate_link() {
        let err = Navbar::new(vec![
            NavbarItem::link("/"),
            NavbarItem::entry("Guide", None, "/guide/"),
            NavbarItem::entry("Guide Again", None, "/guide/"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            NavbarError::DuplicateLink {
                link: "/guide/".to_owned(),
                first: 1,
                second: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_across_entry_shapes_rejected() {
        // Shorthand and full entry pointing at the same path
        let err = Navbar::new(vec![
            NavbarItem::link("/guide/"),
            NavbarItem::entry("Guide", None, "/guide/"),
        ])
        .unwrap_err();

        assert!(matches!(err, NavbarError::DuplicateLink { .. }));
        assert!(err.to_string().contains("/guide/"));
    }

    #[test]
    fn test_deref_and_indexing() {
        let navbar = Navbar::new(sample_items()).unwrap();

        assert_eq!(navbar[1].text(), Some("快速入门"));
        assert_eq!(navbar.first(), Some(&NavbarItem::link("/")));
        assert_eq!(navbar.get(99), None);
    }

    #[test]
    fn test_serialize_matches_framework_record_shape() {
        let navbar = Navbar::new(vec![
            NavbarItem::link("/"),
            NavbarItem::entry("Get Started", Some("lightbulb"), "/get-started/"),
        ])
        .unwrap();

        let json = serde_json::to_value(&navbar).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                "/",
                {"text": "Get Started", "icon": "lightbulb", "link": "/get-started/"},
            ])
        );
    }

    #[test]
    fn test_round_trip_yields_identical_sequence() {
        let navbar = Navbar::new(sample_items()).unwrap();

        let json = serde_json::to_string(&navbar).unwrap();
        let restored: Navbar = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, navbar);
    }

    #[test]
    fn test_deserialize_rejects_invalid_sequence() {
        let json = r#"["/", "/"]"#;
        let result: Result<Navbar, _> = serde_json::from_str(json);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate navbar link"));
    }

    #[test]
    fn test_deserialize_rejects_empty_link() {
        let json = r#"[{"text": "Guide", "link": ""}]"#;
        let result: Result<Navbar, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
