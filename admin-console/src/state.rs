//! Console application state
//!
//! One explicit state object owned by the application shell and passed to
//! view logic. Replaces the ambient provider the console previously relied
//! on; nothing in this crate reads globals.

use shared::models::{Branch, Client, Restaurant};
use thiserror::Error;

/// Errors raised by selection changes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("branch {branch_id} does not belong to the selected client")]
    BranchOutsideClient { branch_id: String },
    #[error("no client selected")]
    NoClientSelected,
}

/// Shared console state: current selection and loading flag
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    restaurants: Vec<Restaurant>,
    selected_client: Option<Client>,
    selected_branch: Option<Branch>,
    loading: bool,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached restaurant list (refetched after mutations)
    pub fn set_restaurants(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Select a client; any branch selection from another client is cleared
    pub fn select_client(&mut self, client: Client) {
        let same_client = self
            .selected_branch
            .as_ref()
            .is_some_and(|b| b.client_id == client.id);
        if !same_client {
            self.selected_branch = None;
        }
        self.selected_client = Some(client);
    }

    /// Select a branch of the currently selected client
    pub fn select_branch(&mut self, branch: Branch) -> Result<(), SelectionError> {
        let client = self
            .selected_client
            .as_ref()
            .ok_or(SelectionError::NoClientSelected)?;
        if branch.client_id != client.id {
            return Err(SelectionError::BranchOutsideClient {
                branch_id: branch.id,
            });
        }
        self.selected_branch = Some(branch);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_client = None;
        self.selected_branch = None;
    }

    pub fn selected_client(&self) -> Option<&Client> {
        self.selected_client.as_ref()
    }

    pub fn selected_branch(&self) -> Option<&Branch> {
        self.selected_branch.as_ref()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
