//! Lineage Relationship Graph
//!
//! Derives per-person parents, children, spouses and siblings from the raw
//! relationship edges, and builds chronological timelines from them.
//!
//! # Overview
//!
//! ```text
//! Person[] + RelationshipEdge[] → GraphBuilder → DerivedRelationsIndex
//!                                                  ├→ Tree layout
//!                                                  └→ Timeline
//! ```
//!
//! Derived relations are never attached to the person records: they live in
//! a [`DerivedRelationsIndex`] keyed by person id, so rebuilding is always
//! safe and yields an identical index for identical inputs.
//!
//! # Tolerance
//!
//! Edges that reference unknown person ids are dropped without error, as are
//! spouse edges pairing a person with themself. Children and parents are
//! deduplicated per person, preserving first-seen order.
//!
//! # Siblings
//!
//! By default siblings are the other children of the *first* listed parent
//! only ([`SiblingMode::FirstParent`]). A half-sibling through the second
//! parent is not surfaced in that mode; [`SiblingMode::AllParents`] widens
//! the rule.

#![warn(missing_docs)]

mod builder;
mod config;
mod derived;
mod timeline;

pub use builder::{BuildStats, GraphBuilder};
pub use config::{GraphConfig, SiblingMode};
pub use derived::{DerivedRelations, DerivedRelationsIndex, SpouseLink};
pub use timeline::{build_timeline, TimelineEvent, TimelineEventKind};
