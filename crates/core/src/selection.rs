//! Selection-capture state machine.
//!
//! Models the lifecycle of a text selection on a rendered page: a
//! pointer release either produces a captured candidate highlight or
//! leaves the machine idle; the captured payload is submitted, and a
//! failed submission returns to Captured so the user can retry or
//! cancel without re-selecting.

use crate::error::CoreError;
use crate::geometry::{GeometryRecord, PageRect};

/// Delay in milliseconds between pointer-up and reading the selection.
///
/// The platform's selection state needs to settle after the pointer is
/// released; reading it immediately returns an empty selection on some
/// platforms. Callers must wait this long before building a
/// [`SelectionSnapshot`].
pub const SELECTION_SETTLE_DELAY_MS: u64 = 10;

/// A raw text selection as read from the platform after the settle
/// delay.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    /// The selected text, already trimmed by the caller or not; trimmed
    /// again here before the emptiness check.
    pub text: String,
    /// 1-based page number the selection was made on.
    pub page_number: i32,
    /// Whether the platform reports the selection as collapsed (a caret
    /// with no extent).
    pub collapsed: bool,
    /// Bounding rectangle of the selection, in viewport pixels.
    pub selection_rect: PageRect,
    /// Rectangle of the enclosing page element, if one could be located
    /// for the selection's anchor node.
    pub page_rect: Option<PageRect>,
}

/// A validated selection ready to be confirmed as a highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedSelection {
    pub text: String,
    pub page_number: i32,
    pub geometry: GeometryRecord,
}

/// The three states of the capture flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    /// No active selection.
    #[default]
    Idle,
    /// A valid selection exists; confirmation UI is showing.
    Captured(CapturedSelection),
    /// Confirmation is in flight.
    Submitting(CapturedSelection),
}

impl SelectionState {
    /// Try to build a captured selection from a raw snapshot.
    ///
    /// Returns `None` (meaning "no selection") for a collapsed
    /// selection, empty trimmed text, a missing page rectangle, or a
    /// geometry capture failure.
    pub fn try_capture(snapshot: &SelectionSnapshot) -> Option<CapturedSelection> {
        if snapshot.collapsed {
            return None;
        }
        let text = snapshot.text.trim();
        if text.is_empty() {
            return None;
        }
        let page_rect = snapshot.page_rect.as_ref()?;
        let geometry = GeometryRecord::capture(&snapshot.selection_rect, page_rect).ok()?;

        Some(CapturedSelection {
            text: text.to_string(),
            page_number: snapshot.page_number,
            geometry,
        })
    }

    /// Handle a pointer release: transition to Captured if the snapshot
    /// yields a valid selection, otherwise to Idle. Rapid re-selections
    /// replace the captured payload (latest wins). Ignored while a
    /// submission is in flight.
    pub fn pointer_released(&mut self, snapshot: &SelectionSnapshot) {
        if matches!(self, Self::Submitting(_)) {
            return;
        }
        *self = match Self::try_capture(snapshot) {
            Some(captured) => Self::Captured(captured),
            None => Self::Idle,
        };
    }

    /// Confirm the highlight: Captured -> Submitting, returning a copy
    /// of the payload for the caller to persist.
    pub fn begin_submit(&mut self) -> Result<CapturedSelection, CoreError> {
        match self {
            Self::Captured(captured) => {
                let payload = captured.clone();
                *self = Self::Submitting(payload.clone());
                Ok(payload)
            }
            _ => Err(CoreError::Validation(
                "no captured selection to submit".to_string(),
            )),
        }
    }

    /// The persisted annotation was created: Submitting -> Idle.
    pub fn submit_succeeded(&mut self) {
        if matches!(self, Self::Submitting(_)) {
            *self = Self::Idle;
        }
    }

    /// Persistence failed: Submitting -> Captured, keeping the payload
    /// so the user can retry or cancel without re-selecting.
    pub fn submit_failed(&mut self) {
        if let Self::Submitting(captured) = self {
            *self = Self::Captured(captured.clone());
        }
    }

    /// Explicit cancel or deselection: Captured -> Idle.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Captured(_)) {
            *self = Self::Idle;
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
