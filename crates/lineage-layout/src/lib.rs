//! Lineage Tree Layout
//!
//! Turns the derived relations index into a render-agnostic generational
//! tree centered on a root person and their optional partner (the co-root).
//!
//! # Shape
//!
//! ```text
//!   [gp gp]  [gp gp]      ← ancestor generation 2 (grandparents)
//!      [parents]          ← ancestor generation 1
//!    [root  co-root]
//!   ├─ child + spouse     ← descendant branches, unbounded depth
//!   │   └─ grandchild ...
//!   └─ child
//! ```
//!
//! - Ancestors are walked a configurable number of generations (default 2).
//!   A lone recorded parent is paired with their first spouse so couples
//!   render complete.
//! - Descendants are walked recursively from the root's own children. The
//!   walk keeps the set of people on the current path and fails with
//!   [`LayoutError::Cycle`] instead of looping, and it stops at a hard depth
//!   ceiling.
//! - Output order follows edge-encounter order from the graph builder; no
//!   sorting is applied, so layout is deterministic.

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod tree;

pub use config::{LayoutConfig, MAX_ANCESTOR_GENERATIONS};
pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use tree::{Branch, BranchGroup, Couple, Generation, TreeNode};
