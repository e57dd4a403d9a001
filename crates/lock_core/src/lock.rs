//! Per-lock-instance state.

use dom_core::{DomPort, NodeId};

use crate::guards::GuardSide;
use crate::tick::PollHandle;
use crate::{LockConfig, LockId};

/// Lifecycle phase of a lock instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Inactive,
    Activating,
    Active,
    Deactivating,
}

/// A live lock instance: identity, observed roots, configuration snapshot,
/// and the focus bookkeeping the arbiter needs.
#[derive(Debug)]
pub(crate) struct Lock {
    pub id: LockId,
    pub root: NodeId,
    pub config: LockConfig,
    pub phase: Phase,
    /// Element that held focus immediately before activation. Consumed
    /// exactly once, on deactivation.
    pub return_to: Option<NodeId>,
    /// Last element observed holding focus inside the region.
    pub last_inside: Option<NodeId>,
    pub guards: Vec<(NodeId, GuardSide)>,
    pub poll: Option<PollHandle>,
}

impl Lock {
    pub fn new(id: LockId, root: NodeId, config: LockConfig) -> Self {
        Self {
            id,
            root,
            config,
            phase: Phase::Activating,
            return_to: None,
            last_inside: None,
            guards: Vec::new(),
            poll: None,
        }
    }

    /// The lock's own region roots: primary root plus every shard that
    /// currently resolves to an attached node. Malformed or detached shard
    /// entries are skipped, and the scan proceeds with what remains.
    pub fn own_roots(&self, port: &impl DomPort) -> Vec<NodeId> {
        let mut roots = vec![self.root];
        for shard in &self.config.shards {
            let Some(node) = shard.current() else {
                continue;
            };
            if port.is_attached(node) && !roots.contains(&node) {
                roots.push(node);
            }
        }
        roots
    }

    /// If `node` is one of this lock's guards, which boundary it sits on.
    pub fn guard_side(&self, node: NodeId) -> Option<GuardSide> {
        self.guards
            .iter()
            .find(|(guard, _)| *guard == node)
            .map(|&(_, side)| side)
    }

    /// Whether this lock currently arbitrates at all.
    pub fn is_enabled(&self) -> bool {
        self.phase == Phase::Active && !self.config.disabled
    }
}
