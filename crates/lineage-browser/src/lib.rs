//! Lineage Family Browser
//!
//! The interaction layer over a loaded family: which person the tree is
//! centered on, which view is active, which profile is open, and the
//! directory and search over everyone.
//!
//! # Overview
//!
//! ```text
//! EntityStore ─→ GraphBuilder ─→ DerivedRelationsIndex
//!                                   │
//!             FamilyBrowser ────────┼─→ LayoutEngine → TreeNode
//!               └─ Session          ├─→ Profile (+ timeline, sources)
//!                  root, view,      └─→ directory / search
//!                  selection, zoom
//! ```
//!
//! # Re-centering
//!
//! Re-centering on a person makes them the root and their first spouse the
//! co-root, closes any open profile and returns to the tree view. An unknown
//! id is reported as [`BrowserError::PersonNotFound`] and leaves the session
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use lineage_browser::{BrowserConfig, FamilyBrowser};
//! use lineage_store::EntityStore;
//!
//! let store = EntityStore::from_json_strs(
//!     r#"{"people": [{"id": "p1", "firstName": "Ann", "lastName": "Lee"},
//!                    {"id": "p2", "firstName": "Bo", "lastName": "Lee"}]}"#,
//!     r#"{"relationships": [{"type": "spouse", "person1": "p1", "person2": "p2"}]}"#,
//!     None,
//! )
//! .unwrap();
//!
//! let mut browser = FamilyBrowser::new(store, &BrowserConfig::default()).unwrap();
//! let tree = browser.recenter("p2").unwrap();
//! assert_eq!(tree.co_root.unwrap().as_str(), "p1");
//! assert!(browser.recenter("nobody").is_err());
//! assert_eq!(browser.session().root().root.as_str(), "p2");
//! ```

#![warn(missing_docs)]

mod browser;
mod config;
pub mod directory;
mod error;
mod profile;
mod session;

pub use browser::FamilyBrowser;
pub use config::{BrowserConfig, ZoomConfig};
pub use directory::SortKey;
pub use error::{BrowserError, Result};
pub use profile::{build_profile, PersonSummary, Profile, SpouseSummary};
pub use session::{recenter, Session, TreeRoot, View, Zoom};
