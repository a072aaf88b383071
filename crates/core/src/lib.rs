//! Domain logic for the Paperdeck annotation service.
//!
//! Everything here is pure and I/O-free: the coordinate transform and
//! its invariants, highlight overlay layout, the selection-capture
//! state machine, upload boundary policy, the pluggable AI responder,
//! and the client-side paper session state.

pub mod ai;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod selection;
pub mod session;
pub mod types;
pub mod upload;
