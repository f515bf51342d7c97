//! Selection state shared by the blog and tutorial browsers.
//!
//! The view's own state is authoritative. Navigation parameters flow in via
//! [`Selection::on_navigation`]; user clicks go through [`Selection::select`],
//! which hands back a [`NavigationRequest`] for the router to apply.

use crate::content::{Catalog, ContentItem, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Waiting for the navigation parameter; collapses on construction.
    Loading,
    Selected(String),
}

/// Route update requested after a user selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub section: Section,
    pub id: String,
}

impl NavigationRequest {
    pub fn path(&self) -> String {
        self.section.item_path(&self.id)
    }
}

/// Outcome of resolving the selection against its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'c> {
    Found(&'c ContentItem),
    /// The selected id is not in the catalog; render the fallback view.
    NotFound(&'c str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    section: Section,
    default_id: String,
    state: SelectionState,
}

impl Selection {
    /// Creates the state for a freshly mounted view.
    ///
    /// An absent parameter selects the catalog's first entry.
    pub fn from_navigation(catalog: &Catalog, param: Option<&str>) -> Self {
        let mut selection = Self {
            section: catalog.section(),
            default_id: catalog.default_id().to_string(),
            state: SelectionState::Loading,
        };
        let id = param.unwrap_or(&selection.default_id).to_string();
        selection.state = SelectionState::Selected(id);
        selection
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn selected_id(&self) -> &str {
        match &self.state {
            SelectionState::Selected(id) => id,
            SelectionState::Loading => &self.default_id,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        matches!(&self.state, SelectionState::Selected(current) if current == id)
    }

    /// Applies a navigation parameter change.
    ///
    /// Returns true when the selection changed. `None` leaves it untouched.
    pub fn on_navigation(&mut self, param: Option<&str>) -> bool {
        match param {
            Some(id) if !self.is_selected(id) => {
                self.state = SelectionState::Selected(id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Applies a user selection and returns the route update to request.
    pub fn select(&mut self, id: &str) -> NavigationRequest {
        self.state = SelectionState::Selected(id.to_string());
        NavigationRequest {
            section: self.section,
            id: id.to_string(),
        }
    }

    pub fn resolve<'c>(&'c self, catalog: &'c Catalog) -> Lookup<'c> {
        let id = self.selected_id();
        match catalog.get(id) {
            Some(item) => Lookup::Found(item),
            None => Lookup::NotFound(id),
        }
    }
}
