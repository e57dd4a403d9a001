//! Marker attributes the engine recognizes on elements.
//!
//! These are plain data attributes so that hosts and wrappers can mark
//! elements declaratively, without calling into the engine.

/// Set on sentinel elements owned by a lock. Nodes carrying this attribute
/// are never reported by tabbable scans and are recognized by the arbiter
/// as containment signals.
pub const GUARD_ATTR: &str = "data-focus-guard";

/// Marks an element as the preferred initial-focus target of its region.
pub const AUTO_FOCUS_ATTR: &str = "data-autofocus";

/// Marks a subtree as exempt from containment: focus resting anywhere under
/// an element with this attribute is left alone by every lock.
pub const ALLOW_ATTR: &str = "data-focus-allow";
