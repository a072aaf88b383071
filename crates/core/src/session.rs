//! Client-side paper session state.
//!
//! An explicit application-state object with designated mutation entry
//! points, replacing ad-hoc global state. Fetches are not cancelled
//! when the user switches papers, so a slow response for a previous
//! paper can arrive after the switch; every fetch result is therefore
//! tagged with the paper id it was requested for and discarded on
//! mismatch.

use crate::types::DbId;

/// State for the currently viewed paper and its annotations.
///
/// Generic over the annotation type so the UI layer can store whatever
/// record shape it receives from the API.
#[derive(Debug, Default)]
pub struct PaperSession<A> {
    active_paper: Option<DbId>,
    annotations: Vec<A>,
}

impl<A> PaperSession<A> {
    pub fn new() -> Self {
        Self {
            active_paper: None,
            annotations: Vec::new(),
        }
    }

    /// Switch to a paper. Clears the annotation list; the caller is
    /// expected to start a fetch tagged with this id.
    pub fn activate(&mut self, paper_id: DbId) {
        self.active_paper = Some(paper_id);
        self.annotations.clear();
    }

    /// Leave the paper view entirely.
    pub fn deactivate(&mut self) {
        self.active_paper = None;
        self.annotations.clear();
    }

    pub fn active_paper(&self) -> Option<DbId> {
        self.active_paper
    }

    pub fn annotations(&self) -> &[A] {
        &self.annotations
    }

    /// Install a fetched annotation list.
    ///
    /// `fetched_for` is the paper id the request was issued for. When
    /// it no longer matches the active paper the payload is stale and
    /// discarded; returns whether the list was accepted.
    pub fn set_annotations(&mut self, fetched_for: DbId, annotations: Vec<A>) -> bool {
        if self.active_paper != Some(fetched_for) {
            tracing::debug!(
                fetched_for,
                active = ?self.active_paper,
                "Discarding stale annotation fetch",
            );
            return false;
        }
        self.annotations = annotations;
        true
    }

    /// Prepend a newly created annotation (lists are newest first).
    /// Ignored when the annotation belongs to a paper that is no longer
    /// active.
    pub fn append_annotation(&mut self, paper_id: DbId, annotation: A) -> bool {
        if self.active_paper != Some(paper_id) {
            return false;
        }
        self.annotations.insert(0, annotation);
        true
    }

    /// Remove an annotation by a caller-supplied predicate (typically
    /// an id match). Returns whether anything was removed.
    pub fn remove_annotation<F>(&mut self, mut matches: F) -> bool
    where
        F: FnMut(&A) -> bool,
    {
        let before = self.annotations.len();
        self.annotations.retain(|a| !matches(a));
        self.annotations.len() != before
    }
}
