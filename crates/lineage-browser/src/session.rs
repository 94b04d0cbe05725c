//! Browsing session state: tree root, active view, selection and zoom

use crate::config::ZoomConfig;
use crate::directory::SortKey;
use crate::error::{BrowserError, Result};
use lineage_domain::PersonId;
use lineage_graph::DerivedRelationsIndex;
use tracing::{debug, info};

/// The person the tree is centered on, plus their partner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRoot {
    /// Centered person
    pub root: PersonId,

    /// Partner drawn beside the root
    pub co_root: Option<PersonId>,
}

impl TreeRoot {
    /// Root with an explicit partner
    pub fn new(root: PersonId, co_root: Option<PersonId>) -> Self {
        Self { root, co_root }
    }
}

/// Compute the tree root after re-centering on `person_id`
///
/// The co-root becomes the person's first spouse, or nothing when no spouse
/// is recorded.
///
/// # Errors
/// `PersonNotFound` if the id is not in the index.
pub fn recenter(person_id: &str, index: &DerivedRelationsIndex) -> Result<TreeRoot> {
    let derived = index
        .get(person_id)
        .ok_or_else(|| BrowserError::PersonNotFound(person_id.to_string()))?;
    let root =
        PersonId::new(person_id).map_err(|_| BrowserError::PersonNotFound(person_id.to_string()))?;

    Ok(TreeRoot {
        co_root: derived.first_spouse().filter(|s| **s != root).cloned(),
        root,
    })
}

/// Which screen the session shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Generational tree around the root
    #[default]
    Tree,
    /// Sorted directory of everyone
    List,
    /// Live search results
    Search,
    /// Detail panel for the selected person
    Profile,
}

impl View {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Tree => "tree",
            View::List => "list",
            View::Search => "search",
            View::Profile => "profile",
        }
    }
}

/// Zoom level of the tree view, clamped to configured bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    percent: u16,
    bounds: ZoomConfig,
}

impl Zoom {
    /// Zoom at 100% within the given bounds
    pub fn new(bounds: ZoomConfig) -> Self {
        Self {
            percent: 100,
            bounds,
        }
    }

    /// Current level in percent
    pub fn percent(&self) -> u16 {
        self.percent
    }

    /// Step up, stopping at the maximum
    pub fn zoom_in(&mut self) -> u16 {
        self.percent = self
            .percent
            .saturating_add(self.bounds.step_percent)
            .min(self.bounds.max_percent);
        self.percent
    }

    /// Step down, stopping at the minimum
    pub fn zoom_out(&mut self) -> u16 {
        self.percent = self
            .percent
            .saturating_sub(self.bounds.step_percent)
            .max(self.bounds.min_percent);
        self.percent
    }

    /// Back to 100%
    pub fn reset(&mut self) -> u16 {
        self.percent = 100;
        self.percent
    }
}

/// Mutable state of one browsing session
///
/// All mutation goes through methods; a failed re-center leaves every field
/// as it was.
#[derive(Debug, Clone)]
pub struct Session {
    root: TreeRoot,
    view: View,
    /// View to return to when the profile closes
    return_view: View,
    selected: Option<PersonId>,
    sort_key: SortKey,
    query: String,
    zoom: Zoom,
}

impl Session {
    /// Start a session on the given root, in tree view
    pub fn new(root: TreeRoot, zoom: ZoomConfig) -> Self {
        Self {
            root,
            view: View::Tree,
            return_view: View::Tree,
            selected: None,
            sort_key: SortKey::default(),
            query: String::new(),
            zoom: Zoom::new(zoom),
        }
    }

    /// Current tree root
    pub fn root(&self) -> &TreeRoot {
        &self.root
    }

    /// Active view
    pub fn view(&self) -> View {
        self.view
    }

    /// Person whose profile is open
    pub fn selected(&self) -> Option<&PersonId> {
        self.selected.as_ref()
    }

    /// Directory sort order
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Last search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Zoom state
    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    /// Re-center the tree on `person_id`
    ///
    /// On success the root and co-root are replaced, any open profile is
    /// closed and the tree view becomes active.
    ///
    /// # Errors
    /// `PersonNotFound` if the id is unknown; nothing changes.
    pub fn recenter(&mut self, person_id: &str, index: &DerivedRelationsIndex) -> Result<&TreeRoot> {
        let root = recenter(person_id, index)?;
        self.set_root(root);
        Ok(&self.root)
    }

    pub(crate) fn set_root(&mut self, root: TreeRoot) {
        info!(
            "Re-centered on {} (co-root: {})",
            root.root,
            root.co_root.as_ref().map_or("none", |c| c.as_str())
        );
        self.root = root;
        self.selected = None;
        self.view = View::Tree;
        self.return_view = View::Tree;
    }

    /// Open the profile of `person_id`
    ///
    /// # Errors
    /// `PersonNotFound` if the id is unknown.
    pub fn select(&mut self, person_id: &str, index: &DerivedRelationsIndex) -> Result<()> {
        if !index.contains(person_id) {
            return Err(BrowserError::PersonNotFound(person_id.to_string()));
        }
        let id =
            PersonId::new(person_id).map_err(|_| BrowserError::PersonNotFound(person_id.to_string()))?;
        if self.view != View::Profile {
            self.return_view = self.view;
        }
        debug!("Selected {}", id);
        self.selected = Some(id);
        self.view = View::Profile;
        Ok(())
    }

    /// Close the profile and return to the view it was opened from
    pub fn close_profile(&mut self) {
        if self.selected.take().is_some() {
            self.view = self.return_view;
        }
    }

    /// Switch the active view, closing any open profile
    ///
    /// Profiles open through [`Session::select`]; `View::Profile` is ignored.
    pub fn switch_view(&mut self, view: View) {
        if view == View::Profile {
            return;
        }
        self.selected = None;
        self.view = view;
        self.return_view = view;
    }

    /// Change the directory sort order
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Record a search query and show the search view
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
        self.selected = None;
        self.view = View::Search;
        self.return_view = View::Search;
    }

    /// Zoom in one step
    pub fn zoom_in(&mut self) -> u16 {
        self.zoom.zoom_in()
    }

    /// Zoom out one step
    pub fn zoom_out(&mut self) -> u16 {
        self.zoom.zoom_out()
    }

    /// Reset zoom to 100%
    pub fn reset_zoom(&mut self) -> u16 {
        self.zoom.reset()
    }
}
