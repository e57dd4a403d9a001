//! # tab_scan
//!
//! Tabbable discovery and tab-order resolution over [`dom_core::DomPort`].
//!
//! There is no authoritative platform API for "the next focusable element",
//! so this crate reconstructs native tab semantics from element facts: which
//! elements the platform would let Tab reach, in what order, and what comes
//! after a given element. Two layers:
//!
//! - [`scan`] walks a single root and filters candidates
//!   (tag/tabindex/disabled/visibility rules).
//! - [`TabOrder`] merges scans of several disjoint roots into one logical
//!   order and answers first/last/next-with-wrap queries.
//!
//! Results are point-in-time: any DOM mutation invalidates them, so callers
//! re-resolve on every event instead of caching.

mod order;
mod tabbable;

pub use order::{Direction, TabOrder, document_position, is_inside};
pub use tabbable::{
    Candidate, ScanMode, all_auto_focusable, effective_tab_index, first_tabbable, is_rendered,
    last_tabbable, scan,
};
