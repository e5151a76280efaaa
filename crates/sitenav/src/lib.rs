//! Navigation bar data model for documentation sites.
//!
//! This crate provides:
//! - [`NavbarItem`]: a single navigation entry (bare link or full record)
//! - [`Navbar`]: an ordered, immutable, validated entry sequence
//! - [`LocaleNavbars`]: per-locale navbar variants with fallback resolution
//!
//! The model is pure data: it is built once when the site configuration
//! loads and handed read-only to the site-generation framework, which is
//! responsible for rendering, link resolution, and icon resolution.
//!
//! # Quick Start
//!
//! ```
//! use sitenav::{Navbar, NavbarItem};
//!
//! let navbar = Navbar::new(vec![
//!     NavbarItem::link("/"),
//!     NavbarItem::entry("Get Started", Some("lightbulb"), "/get-started/"),
//! ])?;
//!
//! assert_eq!(navbar.len(), 2);
//! assert_eq!(navbar[0].target(), "/");
//! # Ok::<(), sitenav::NavbarError>(())
//! ```

pub(crate) mod item;
pub(crate) mod locale;
pub(crate) mod navbar;

pub use item::NavbarItem;
pub use locale::LocaleNavbars;
pub use navbar::{Navbar, NavbarError};
