//! Guard sentinels at the lock boundary.
//!
//! A guard is a normally-focusable, visually imperceptible element placed
//! as a sibling of the primary root. Its only purpose is to receive focus
//! that would otherwise escape the region, so the arbiter can route it back
//! inside. Guards carry the [`marks::GUARD_ATTR`] mark, which excludes them
//! from every tabbable scan; their presence is never observable through the
//! engine's own queries.

use dom_core::{DomPort, InsertSide, NodeId, marks};

use crate::GuardMode;

/// Which boundary a guard sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardSide {
    /// Before the root; reached by Shift+Tab off the first element.
    Head,
    /// After the root; reached by Tab off the last element.
    Tail,
}

// Zero-size but still in the accessibility focus order: clipped, not
// display:none (that would make it unfocusable).
const GUARD_STYLE: &str = "width:1px;height:0px;padding:0;overflow:hidden;position:fixed;top:1px;left:1px";

/// Create guard sentinels around `root` per `mode`. Returns the guards that
/// were actually inserted; a root with no parent yields none.
pub(crate) fn create_guards(
    port: &mut impl DomPort,
    root: NodeId,
    mode: GuardMode,
) -> Vec<(NodeId, GuardSide)> {
    let sides: &[(InsertSide, GuardSide)] = match mode {
        GuardMode::Both => &[
            (InsertSide::Before, GuardSide::Head),
            (InsertSide::After, GuardSide::Tail),
        ],
        GuardMode::Tail => &[(InsertSide::After, GuardSide::Tail)],
        GuardMode::None => &[],
    };
    let mut out = Vec::with_capacity(sides.len());
    for &(insert, side) in sides {
        let guard = port.create_element(
            "div",
            &[
                (marks::GUARD_ATTR, "true"),
                ("tabindex", "0"),
                ("aria-hidden", "true"),
                ("style", GUARD_STYLE),
            ],
        );
        if port.insert_sibling(root, insert, guard) {
            out.push((guard, side));
        } else {
            // root has no parent to host a sibling; drop the orphan
            port.remove_node(guard);
            log::trace!(target: "focus.lock", "guard insertion skipped, root {root:?} has no parent");
        }
    }
    out
}

/// Remove a lock's guards. Safe to call with already-removed nodes.
pub(crate) fn remove_guards(port: &mut impl DomPort, guards: &[(NodeId, GuardSide)]) {
    for &(guard, _) in guards {
        port.remove_node(guard);
    }
}
