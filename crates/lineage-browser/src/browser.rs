//! Family browser: loaded data, derived relations and session in one place

use crate::config::BrowserConfig;
use crate::directory::{self, SortKey};
use crate::error::{BrowserError, Result};
use crate::profile::{build_profile, Profile};
use crate::session::{recenter, Session, TreeRoot, View};
use lineage_domain::{Person, PersonId, PersonLookup};
use lineage_graph::{DerivedRelationsIndex, GraphBuilder};
use lineage_layout::{LayoutEngine, TreeNode};
use lineage_store::{DataPaths, EntityStore};
use tracing::{debug, info, warn};

/// Read-only family data plus one browsing session
///
/// The store and derived index never change after construction; only the
/// session mutates.
pub struct FamilyBrowser {
    store: EntityStore,
    index: DerivedRelationsIndex,
    engine: LayoutEngine,
    session: Session,
}

impl FamilyBrowser {
    /// Build a browser over a loaded store
    ///
    /// # Errors
    /// - `Config` if the configuration is invalid or names an unknown root
    /// - `Empty` if the store has no people and no default root is set
    pub fn new(store: EntityStore, config: &BrowserConfig) -> Result<Self> {
        config.validate().map_err(BrowserError::Config)?;

        let (index, stats) = GraphBuilder::new(config.graph.clone()).build_with_stats(store.people(), store.edges());
        if stats.dropped_edges > 0 {
            debug!("{} relationship edges reference unknown people", stats.dropped_edges);
        }
        let engine = LayoutEngine::new(config.layout.clone())?;
        let root = initial_root(&store, &index, config)?;

        info!(
            "Browser ready: {} people, {} spouse edges, {} parent-child edges, root {}",
            store.len(),
            stats.spouse_edges,
            stats.parent_child_edges,
            root.root
        );

        Ok(Self {
            store,
            index,
            engine,
            session: Session::new(root, config.zoom),
        })
    }

    /// Load the documents under `paths` and build a browser over them
    pub async fn load(paths: &DataPaths, config: &BrowserConfig) -> Result<Self> {
        let store = lineage_store::load(paths).await?;
        Self::new(store, config)
    }

    /// The loaded records
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Derived relations
    pub fn index(&self) -> &DerivedRelationsIndex {
        &self.index
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Look up a person
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.store.person(id)
    }

    /// Lay out the tree around the current root
    pub fn tree(&self) -> Result<TreeNode> {
        let root = self.session.root();
        let tree = self.engine.layout(
            root.root.as_str(),
            root.co_root.as_ref().map(PersonId::as_str),
            &self.index,
        )?;
        Ok(tree)
    }

    /// Re-center the tree on `person_id` and lay it out
    ///
    /// The session only changes when the new tree lays out cleanly; an
    /// unknown id or a layout failure leaves the previous root in place.
    pub fn recenter(&mut self, person_id: &str) -> Result<TreeNode> {
        self.recenter_with(person_id, None)
    }

    /// Re-center on `person_id` with an explicit partner beside them
    ///
    /// `None` picks the first spouse, as [`FamilyBrowser::recenter`] does.
    pub fn recenter_with(&mut self, person_id: &str, co_root: Option<&str>) -> Result<TreeNode> {
        let mut root = recenter(person_id, &self.index)?;
        if let Some(co_root) = co_root {
            if !self.index.contains(co_root) {
                return Err(BrowserError::PersonNotFound(co_root.to_string()));
            }
            root.co_root = PersonId::new(co_root).ok();
        }

        let tree = self.engine.layout(
            root.root.as_str(),
            root.co_root.as_ref().map(PersonId::as_str),
            &self.index,
        )?;
        self.session.set_root(root);
        Ok(tree)
    }

    /// Build the profile of `person_id` without touching the session
    pub fn profile(&self, person_id: &str) -> Result<Profile> {
        let person = self
            .store
            .person(person_id)
            .ok_or_else(|| BrowserError::PersonNotFound(person_id.to_string()))?;
        Ok(build_profile(person, &self.store, &self.index))
    }

    /// Open the profile of `person_id`
    pub fn show_profile(&mut self, person_id: &str) -> Result<Profile> {
        let profile = self.profile(person_id)?;
        self.session.select(person_id, &self.index)?;
        Ok(profile)
    }

    /// Close the open profile
    pub fn close_profile(&mut self) {
        self.session.close_profile();
    }

    /// Everyone in the session's sort order, switching to the list view
    pub fn list(&mut self) -> Vec<&Person> {
        self.session.switch_view(View::List);
        directory::sorted(self.store.people(), self.session.sort_key())
    }

    /// Change the directory sort order
    pub fn set_sort(&mut self, key: SortKey) {
        self.session.set_sort(key);
    }

    /// Search for people, switching to the search view
    pub fn search(&mut self, query: &str) -> Vec<&Person> {
        self.session.set_query(query);
        directory::search(self.store.people(), self.session.query())
    }

    /// Zoom in one step
    pub fn zoom_in(&mut self) -> u16 {
        self.session.zoom_in()
    }

    /// Zoom out one step
    pub fn zoom_out(&mut self) -> u16 {
        self.session.zoom_out()
    }

    /// Reset zoom
    pub fn reset_zoom(&mut self) -> u16 {
        self.session.reset_zoom()
    }
}

/// Starting root: the configured pair, or the first person and their first spouse
fn initial_root(store: &EntityStore, index: &DerivedRelationsIndex, config: &BrowserConfig) -> Result<TreeRoot> {
    let Some(root_id) = config.default_root.as_deref() else {
        let first = store.people().first().ok_or(BrowserError::Empty)?;
        return recenter(first.id.as_str(), index);
    };

    let mut root = recenter(root_id, index)
        .map_err(|_| BrowserError::Config(format!("default_root '{}' is not a known person", root_id)))?;

    if let Some(co_root_id) = config.default_co_root.as_deref() {
        if index.contains(co_root_id) {
            root.co_root = PersonId::new(co_root_id).ok();
        } else {
            warn!("default_co_root '{}' is not a known person, using first spouse", co_root_id);
        }
    }

    Ok(root)
}
