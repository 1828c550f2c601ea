//! Two-pane admin edit modal.
//!
//! DESIGN
//! ======
//! `Closed -> ListView <-> AddForm -> Closed`. The modal keeps its own copy of
//! the work list, fetched on open, independent of the gallery's. Opening an
//! already-open modal is a no-op. Results that land after the modal closed
//! are dropped.

#[cfg(test)]
#[path = "edit_modal_test.rs"]
mod edit_modal_test;

use std::collections::BTreeSet;

use super::add_work::AddWorkForm;
use crate::error::{ApiError, ValidationError};
use crate::net::types::{NewWork, Work};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPane {
    #[default]
    Closed,
    ListView,
    AddForm,
}

#[derive(Clone, Debug, Default)]
pub struct EditModalState {
    pub pane: ModalPane,
    pub works: Vec<Work>,
    pub loading: bool,
    pub list_error: Option<String>,
    /// Work ids with a delete request in flight.
    pub deleting: BTreeSet<i64>,
    pub form: AddWorkForm,
}

impl EditModalState {
    pub fn is_open(&self) -> bool {
        self.pane != ModalPane::Closed
    }

    /// Open on the list pane. Returns `false` (and changes nothing) when already
    /// open; the caller only fetches works on `true`.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Self { pane: ModalPane::ListView, loading: true, ..Self::default() };
        true
    }

    /// Tear down all per-instance state.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Apply the modal's own works fetch.
    pub fn apply_works(&mut self, result: Result<Vec<Work>, ApiError>) {
        if !self.is_open() {
            return;
        }
        self.loading = false;
        match result {
            Ok(works) => {
                self.works = works;
                self.list_error = None;
            }
            Err(e) => self.list_error = Some(e.to_string()),
        }
    }

    /// Mark a delete as in flight. Returns `false` if the id is unknown or
    /// already being deleted.
    pub fn begin_delete(&mut self, id: i64) -> bool {
        if self.pane != ModalPane::ListView || !self.works.iter().any(|w| w.id == id) {
            return false;
        }
        self.deleting.insert(id)
    }

    /// Apply a delete result. Returns `true` when the item was removed.
    pub fn apply_delete(&mut self, id: i64, result: &Result<(), ApiError>) -> bool {
        self.deleting.remove(&id);
        if result.is_err() {
            return false;
        }
        let before = self.works.len();
        self.works.retain(|w| w.id != id);
        self.works.len() != before
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.contains(&id)
    }

    /// Switch to the add-work pane with a fresh form.
    pub fn show_add_form(&mut self) {
        if self.pane == ModalPane::ListView {
            self.form = AddWorkForm::default();
            self.pane = ModalPane::AddForm;
        }
    }

    /// Return to the list pane, discarding the form. No re-fetch.
    pub fn back_to_list(&mut self) {
        if self.pane == ModalPane::AddForm {
            self.form = AddWorkForm::default();
            self.pane = ModalPane::ListView;
        }
    }

    /// Validate and mark the form as submitting. Yields `Ok(None)` when no
    /// submit is possible (wrong pane or one already in flight).
    ///
    /// # Errors
    ///
    /// Returns the validation failure; nothing is marked in flight.
    pub fn begin_submit(&mut self) -> Result<Option<NewWork>, ValidationError> {
        if self.pane != ModalPane::AddForm || self.form.submitting {
            return Ok(None);
        }
        let work = self.form.validate()?;
        self.form.submitting = true;
        Ok(Some(work))
    }

    /// Apply a create result: close on success, stay on the form otherwise.
    pub fn apply_submit(&mut self, result: &Result<(), ApiError>) {
        if self.pane != ModalPane::AddForm {
            return;
        }
        if result.is_ok() {
            self.close();
        } else {
            self.form.submitting = false;
        }
    }
}
