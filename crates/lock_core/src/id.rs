//! Identity for logical lock instances.

/// Opaque identifier for a lock instance within a
/// [`FocusLockEngine`](crate::FocusLockEngine).
///
/// Handed out by `activate` and used for registry bookkeeping; wrappers keep
/// it as the stable identity of a logical lock across config updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LockId(u64);

impl LockId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for LockId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_id_round_trip() {
        let id = LockId::from_raw(7);
        assert_eq!(id.as_raw(), 7);
    }
}
