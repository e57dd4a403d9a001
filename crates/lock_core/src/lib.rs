//! # lock_core
//!
//! Keyboard focus containment over a [`dom_core::DomPort`].
//!
//! A lock claims a region of the tree (a primary root plus optional
//! shards) and keeps keyboard focus inside it while active: Tab wraps at
//! the edges, guard sentinels catch focus that slips past the region, and
//! escapes are arbitrated per the lock's configuration. Multiple locks
//! coexist through a single [`FocusLockEngine`], with authority resting on
//! the most recently activated one.
//!
//! The engine is pure policy: it owns no timers and no DOM, and reads the
//! world only through the port the host passes into each call. Hosts wire
//! three signals: focus-in events into
//! [`handle_focus_change`](FocusLockEngine::handle_focus_change), Tab
//! keydowns into [`handle_tab`](FocusLockEngine::handle_tab), and a
//! low-frequency tick into [`poll`](FocusLockEngine::poll) while
//! [`needs_poll`](FocusLockEngine::needs_poll) holds.

mod arbiter;
mod config;
mod engine;
mod guards;
mod id;
mod lock;
mod registry;
mod tick;

pub use config::{
    GuardMode, LockConfig, LockConfigPatch, ReturnDecision, ReturnFocus, Shard, ShardHolder,
};
pub use engine::FocusLockEngine;
pub use guards::GuardSide;
pub use id::LockId;
pub use lock::Phase;
pub use tick::PollHandle;

pub use tab_scan::Direction;
