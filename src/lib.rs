//! # focuslock
//!
//! Keyboard focus containment for hosts that render a DOM-shaped tree.
//!
//! The engine keeps keyboard focus inside a claimed region while a lock is
//! active: Tab wraps at the region edges, guard sentinels catch focus that
//! slips past, and focus that lands outside is arbitrated per the lock's
//! configuration. All document access goes through the [`DomPort`] trait,
//! so the policy layer stays pure and host-independent.
//!
//! A minimal host wires four things:
//!
//! ```no_run
//! use focuslock::{Direction, DomPort, FocusLockEngine, LockConfig, NodeId};
//!
//! fn open_dialog(port: &mut impl DomPort, engine: &mut FocusLockEngine, root: NodeId) {
//!     let lock = engine.activate(port, root, LockConfig::default());
//!     // on focus-in events: engine.handle_focus_change(port);
//!     // on Tab keydown:     engine.handle_tab(port, Direction::Forward);
//!     // on a slow tick:     engine.poll(port);  (while engine.needs_poll())
//!     engine.deactivate(port, lock);
//! }
//! ```
//!
//! The crates underneath are usable on their own: [`tab_scan`] for tabbable
//! discovery without any lock, `sim_dom` (dev) for an in-memory document to
//! test against.

pub use dom_core::{DomPort, FocusOptions, InsertSide, NodeId, marks};
pub use lock_core::{
    Direction, FocusLockEngine, GuardMode, GuardSide, LockConfig, LockConfigPatch, LockId, Phase,
    PollHandle, ReturnDecision, ReturnFocus, Shard, ShardHolder,
};
pub use tab_scan::{Candidate, ScanMode, TabOrder, first_tabbable, last_tabbable, scan};
