//! The arbitration decision procedure.
//!
//! Pure functions: given the facts of a focus event, decide whether the
//! owning lock should leave focus alone or move it, and where. The engine
//! gathers the facts (guard hits, region membership, frame ancestry,
//! white-listing) and applies the verdicts; nothing here touches the DOM.

use crate::guards::GuardSide;

/// What triggered arbitration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FocusCause {
    /// A focus-in notification from the host.
    Event,
    /// The recurring poll tick (catches changes that dispatch no event).
    Poll,
}

/// Where a redirect should land, resolved against the lock's merged order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    /// First tabbable candidate.
    First,
    /// Last tabbable candidate.
    Last,
    /// Last known inside element if still valid, else first tabbable, else
    /// the region root itself.
    Recover,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Focus is acceptable (or deliberately allowed to rest outside).
    Leave,
    /// Move focus to the given target.
    Refocus(Target),
}

/// A guard fired: entering the leading guard means focus was travelling
/// backward out of the region, so it wraps to the last candidate; the
/// trailing guard wraps to the first.
pub(crate) fn decide_guard(side: GuardSide) -> Verdict {
    match side {
        GuardSide::Head => Verdict::Refocus(Target::Last),
        GuardSide::Tail => Verdict::Refocus(Target::First),
    }
}

/// Facts about a focus escape (active element outside the merged region and
/// not on a guard).
#[derive(Clone, Copy, Debug)]
pub(crate) struct EscapeContext {
    pub persistent: bool,
    pub cross_frame: bool,
    /// The last known inside element sat within a nested frame under the
    /// region — the escape originated inside that frame.
    pub origin_in_frame: bool,
    /// The new active element lives inside some frame.
    pub target_in_frame: bool,
    pub cause: FocusCause,
}

/// Decide what to do about an escape. Non-sticky locks let focus rest
/// outside (deliberate outside interaction is allowed), except when frame
/// containment applies.
pub(crate) fn decide_escape(ctx: EscapeContext) -> Verdict {
    if ctx.persistent {
        return Verdict::Refocus(Target::Recover);
    }
    if ctx.cross_frame {
        if ctx.origin_in_frame {
            return Verdict::Refocus(Target::Recover);
        }
        // only the poll can tell a frame swallow from a deliberate click
        if ctx.cause == FocusCause::Poll && ctx.target_in_frame {
            return Verdict::Refocus(Target::Recover);
        }
    }
    Verdict::Leave
}
