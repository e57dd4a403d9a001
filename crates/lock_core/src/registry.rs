//! Ordered registry of active lock instances.
//!
//! Focus is a single global cursor, so exactly one coordinator decides
//! which lock owns a given event. The registry is that coordinator: an
//! explicit, engine-owned, activation-ordered list — never ambient global
//! state. Authority belongs to the most recently activated relevant lock;
//! unregistering hands authority to the next most recent.

use std::collections::HashMap;

use crate::LockId;
use crate::lock::Lock;

#[derive(Debug, Default)]
pub(crate) struct Registry {
    /// Activation order: oldest first.
    order: Vec<LockId>,
    locks: HashMap<LockId, Lock>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, lock: Lock) {
        debug_assert!(
            !self.locks.contains_key(&lock.id),
            "lock registered twice"
        );
        self.order.push(lock.id);
        self.locks.insert(lock.id, lock);
    }

    pub fn unregister(&mut self, id: LockId) -> Option<Lock> {
        self.order.retain(|&other| other != id);
        self.locks.remove(&id)
    }

    pub fn get(&self, id: LockId) -> Option<&Lock> {
        self.locks.get(&id)
    }

    pub fn get_mut(&mut self, id: LockId) -> Option<&mut Lock> {
        self.locks.get_mut(&id)
    }

    /// Lock ids, most recently activated first — arbitration precedence.
    pub fn newest_first(&self) -> Vec<LockId> {
        self.order.iter().rev().copied().collect()
    }

    /// The lock currently holding top arbitration authority.
    pub fn topmost_enabled(&self) -> Option<LockId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| self.locks.get(id).is_some_and(Lock::is_enabled))
    }

    /// Ids of every enabled lock sharing `group`, excluding `except`.
    pub fn group_mates(&self, group: &str, except: LockId) -> Vec<LockId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| id != except)
            .filter(|id| {
                self.locks.get(id).is_some_and(|lock| {
                    lock.is_enabled() && lock.config.group.as_deref() == Some(group)
                })
            })
            .collect()
    }
}
