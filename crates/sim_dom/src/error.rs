//! Errors reported by simulated-document mutations.

use dom_core::NodeId;

/// Structural violations in a [`SimDom`](crate::SimDom) mutation.
///
/// These indicate test-construction bugs, not engine conditions; the engine
/// itself only mutates the document through the port, which is infallible
/// by contract (bad inputs degrade to no-ops there).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimDomError {
    MissingNode(NodeId),
    InvalidParent(NodeId),
    InvalidSibling { parent: NodeId, before: NodeId },
    CycleDetected { parent: NodeId, child: NodeId },
}
