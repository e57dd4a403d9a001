//! The engine: activation state machine plus event-time arbitration.

use dom_core::{DomPort, NodeId, marks};
use tab_scan::{Direction, TabOrder, all_auto_focusable, document_position, effective_tab_index, is_inside};

use crate::arbiter::{self, EscapeContext, FocusCause, Target, Verdict};
use crate::guards;
use crate::lock::{Lock, Phase};
use crate::registry::Registry;
use crate::tick::PollHandle;
use crate::{LockConfig, LockConfigPatch, LockId, ReturnDecision, ReturnFocus};

/// Process-wide focus containment engine.
///
/// Owns the lock registry; every operation takes the host's [`DomPort`] so
/// that the engine itself never holds DOM state between events. Single
/// threaded, run-to-completion per call: the host invokes
/// [`handle_focus_change`](Self::handle_focus_change) on focus-in events,
/// [`handle_tab`](Self::handle_tab) on Tab keydown, and
/// [`poll`](Self::poll) on its low-frequency tick while
/// [`needs_poll`](Self::needs_poll) holds.
///
/// Nothing here returns an error to the caller: every failure mode
/// (detached targets, empty regions, stale shards) degrades to a skipped
/// action or a fallback focus move.
#[derive(Debug)]
pub struct FocusLockEngine {
    registry: Registry,
    next_id: u64,
}

impl Default for FocusLockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusLockEngine {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            next_id: 1,
        }
    }

    /// Lifecycle phase of a lock. Unknown or deactivated ids report
    /// [`Phase::Inactive`]; the transitional phases are only observable
    /// from within activation and deactivation callbacks.
    pub fn phase(&self, id: LockId) -> Phase {
        self.registry.get(id).map_or(Phase::Inactive, |lock| lock.phase)
    }

    /// Activate a lock over `root`. Captures the return-focus record,
    /// creates guards, performs initial focus per `auto_focus`, registers
    /// the lock, and fires `on_activation`.
    pub fn activate(&mut self, port: &mut impl DomPort, root: NodeId, config: LockConfig) -> LockId {
        let id = LockId::from_raw(self.next_id);
        self.next_id += 1;

        let mut lock = Lock::new(id, root, config);
        lock.return_to = port.active_element();
        lock.guards = guards::create_guards(port, root, lock.config.guard_mode);
        lock.poll = Some(PollHandle::new());
        log::trace!(target: "focus.lock", "activate {id:?} root={root:?} return_to={:?}", lock.return_to);

        if !lock.config.disabled {
            let roots = self.roots_with_group(port, &lock);
            let inside = port
                .active_element()
                .is_some_and(|active| is_inside(port, active, &roots));
            if lock.config.auto_focus {
                if inside {
                    lock.last_inside = port.active_element();
                } else {
                    self.initial_focus(port, &mut lock, &roots);
                }
            } else if !inside {
                // no auto focus: outside focus is dropped rather than pulled in
                port.blur();
            }
        }

        lock.phase = Phase::Active;
        let callback = lock.config.on_activation.clone();
        self.registry.register(lock);
        if let Some(on_activation) = callback {
            on_activation(root);
        }
        id
    }

    /// Deactivate a lock: cancel its poll registration synchronously,
    /// remove guards, unregister, apply the return-focus policy, and fire
    /// `on_deactivation`. Unknown ids are ignored.
    pub fn deactivate(&mut self, port: &mut impl DomPort, id: LockId) {
        let Some(mut lock) = self.registry.unregister(id) else {
            return;
        };
        lock.phase = Phase::Deactivating;
        if let Some(poll) = lock.poll.take() {
            poll.cancel();
        }
        guards::remove_guards(port, &lock.guards);
        lock.guards.clear();

        // the return-focus record is consumed exactly once
        if let Some(target) = lock.return_to.take() {
            let options = match &lock.config.return_focus {
                ReturnFocus::Disabled => None,
                ReturnFocus::Enabled => Some(lock.config.focus_options),
                ReturnFocus::WithOptions(options) => Some(*options),
                ReturnFocus::Custom(decide) => match decide(target) {
                    ReturnDecision::Skip => None,
                    ReturnDecision::Restore => Some(lock.config.focus_options),
                    ReturnDecision::RestoreWith(options) => Some(options),
                },
            };
            if let Some(options) = options {
                if !port.is_attached(target) || !port.focus(target, options) {
                    log::trace!(target: "focus.lock", "return focus skipped, {target:?} unavailable");
                }
            }
        }

        lock.phase = Phase::Inactive;
        log::trace!(target: "focus.lock", "deactivate {id:?}");
        if let Some(on_deactivation) = &lock.config.on_deactivation {
            on_deactivation();
        }
    }

    /// Apply a partial configuration update to a live lock. Re-evaluates
    /// guards when the guard mode changed, and re-arbitrates immediately
    /// when `persistent_focus` turned on while focus is outside.
    pub fn update_config(&mut self, port: &mut impl DomPort, id: LockId, patch: LockConfigPatch) {
        let Some(lock) = self.registry.get_mut(id) else {
            return;
        };
        let old_guard_mode = lock.config.guard_mode;
        let was_persistent = lock.config.persistent_focus;
        patch.apply(&mut lock.config);
        let rebuild_guards = lock.config.guard_mode != old_guard_mode;
        let now_sticky = !was_persistent && lock.config.persistent_focus;

        if rebuild_guards {
            let root = lock.root;
            let mode = lock.config.guard_mode;
            let old_guards = std::mem::take(&mut lock.guards);
            guards::remove_guards(port, &old_guards);
            let new_guards = guards::create_guards(port, root, mode);
            if let Some(lock) = self.registry.get_mut(id) {
                lock.guards = new_guards;
            }
        }
        if now_sticky {
            self.arbitrate(port, FocusCause::Event);
        }
    }

    /// Host entry point for native focus-in notifications.
    pub fn handle_focus_change(&mut self, port: &mut impl DomPort) {
        self.arbitrate(port, FocusCause::Event);
    }

    /// Host entry point for the recurring short-interval check.
    pub fn poll(&mut self, port: &mut impl DomPort) {
        self.arbitrate(port, FocusCause::Poll);
    }

    /// Whether any live lock still wants poll ticks.
    pub fn needs_poll(&self) -> bool {
        self.registry
            .newest_first()
            .iter()
            .filter_map(|&id| self.registry.get(id))
            .any(|lock| {
                lock.is_enabled() && lock.poll.as_ref().is_some_and(|p| !p.is_cancelled())
            })
    }

    /// The poll registration of a lock, for hosts that schedule per lock.
    pub fn poll_handle(&self, id: LockId) -> Option<PollHandle> {
        self.registry.get(id).and_then(|lock| lock.poll.clone())
    }

    /// Move focus to the adjacent candidate in the owning lock's merged
    /// order, wrapping at the ends. Returns `true` when the keypress was
    /// consumed (focus was inside an enabled lock's region).
    pub fn handle_tab(&mut self, port: &mut impl DomPort, direction: Direction) -> bool {
        let Some(active) = port.active_element() else {
            return false;
        };
        for id in self.registry.newest_first() {
            let Some(lock) = self.registry.get(id) else {
                continue;
            };
            if !lock.is_enabled() {
                continue;
            }
            let roots = self.region_roots(port, id);
            if !is_inside(port, active, &roots) {
                continue;
            }
            let order = TabOrder::resolve(port, &roots, lock.config.positive_indices);
            let options = lock.config.focus_options;
            let target = order.next(active, direction).or_else(|| {
                // inside but not itself tabbable (e.g. the region root):
                // land on the near end for the travel direction
                match direction {
                    Direction::Forward => order.first(),
                    Direction::Backward => order.last(),
                }
            });
            if let Some(node) = target {
                if port.focus(node, options) {
                    if let Some(lock) = self.registry.get_mut(id) {
                        lock.last_inside = Some(node);
                    }
                }
            }
            return true;
        }
        false
    }

    // =========================================================================
    // Arbitration
    // =========================================================================

    fn arbitrate(&mut self, port: &mut impl DomPort, cause: FocusCause) {
        let Some(active) = port.active_element() else {
            // focus dropped entirely; only sticky locks pull it back
            if let Some(id) = self.registry.topmost_enabled() {
                let sticky = self
                    .registry
                    .get(id)
                    .is_some_and(|lock| lock.config.persistent_focus);
                if sticky {
                    self.apply_refocus(port, id, Target::Recover);
                }
            }
            return;
        };

        if self.in_allowed_area(port, active) {
            log::trace!(target: "focus.arbiter", "active {active:?} under allow mark, no action");
            return;
        }

        // ownership pass: the most recent lock whose region (or guard set)
        // contains the target handles the event
        for id in self.registry.newest_first() {
            let Some(lock) = self.registry.get(id) else {
                continue;
            };
            if !lock.is_enabled() {
                continue;
            }
            if let Some(white_list) = &lock.config.white_list {
                if !white_list(active) {
                    continue; // out of this lock's working area
                }
            }
            if let Some(side) = lock.guard_side(active) {
                let verdict = arbiter::decide_guard(side);
                log::trace!(target: "focus.arbiter", "guard {side:?} fired for {id:?}: {verdict:?}");
                self.apply_verdict(port, id, verdict);
                return;
            }
            let roots = self.region_roots(port, id);
            if is_inside(port, active, &roots) {
                if let Some(lock) = self.registry.get_mut(id) {
                    lock.last_inside = Some(active);
                }
                return;
            }
        }

        // escape pass: focus is outside every region; the topmost lock
        // decides whether that is acceptable
        let Some(id) = self.registry.topmost_enabled() else {
            return;
        };
        let Some(lock) = self.registry.get(id) else {
            return;
        };
        if let Some(white_list) = &lock.config.white_list {
            if !white_list(active) {
                log::trace!(target: "focus.arbiter", "active {active:?} outside white list, no action");
                return;
            }
        }
        let ctx = EscapeContext {
            persistent: lock.config.persistent_focus,
            cross_frame: lock.config.cross_frame,
            origin_in_frame: lock
                .last_inside
                .is_some_and(|node| port.frame_element(node).is_some()),
            target_in_frame: port.frame_element(active).is_some()
                || port.tag_name(active).as_deref() == Some("iframe"),
            cause,
        };
        let verdict = arbiter::decide_escape(ctx);
        log::trace!(target: "focus.arbiter", "escape to {active:?}, lock {id:?}: {verdict:?}");
        self.apply_verdict(port, id, verdict);
    }

    fn apply_verdict(&mut self, port: &mut impl DomPort, id: LockId, verdict: Verdict) {
        if let Verdict::Refocus(target) = verdict {
            self.apply_refocus(port, id, target);
        }
    }

    fn apply_refocus(&mut self, port: &mut impl DomPort, id: LockId, target: Target) {
        let Some(lock) = self.registry.get(id) else {
            return;
        };
        let roots = self.region_roots(port, id);
        let order = TabOrder::resolve(port, &roots, lock.config.positive_indices);
        let options = lock.config.focus_options;
        let root = lock.root;
        let last_inside = lock.last_inside;

        let node = match target {
            Target::First => order.first(),
            Target::Last => order.last(),
            Target::Recover => last_inside
                .filter(|node| order.contains(*node))
                .or_else(|| order.first()),
        };
        let landed = match node {
            Some(node) => port.focus(node, options).then_some(node),
            None => {
                // empty region: the root itself becomes the focus target
                if effective_tab_index(port, root).is_none() {
                    port.set_attr(root, "tabindex", "-1");
                }
                port.focus(root, options).then_some(root)
            }
        };
        match landed {
            Some(node) => {
                if let Some(lock) = self.registry.get_mut(id) {
                    lock.last_inside = Some(node);
                }
            }
            None => {
                log::trace!(target: "focus.arbiter", "refocus for {id:?} skipped, no target available");
            }
        }
    }

    // =========================================================================
    // Region assembly
    // =========================================================================

    /// Merged region roots of a registered lock: its own roots plus every
    /// enabled group mate's.
    fn region_roots(&self, port: &impl DomPort, id: LockId) -> Vec<NodeId> {
        match self.registry.get(id) {
            Some(lock) => self.roots_with_group(port, lock),
            None => Vec::new(),
        }
    }

    fn roots_with_group(&self, port: &impl DomPort, lock: &Lock) -> Vec<NodeId> {
        let mut roots = lock.own_roots(port);
        if let Some(group) = &lock.config.group {
            for mate_id in self.registry.group_mates(group, lock.id) {
                if let Some(mate) = self.registry.get(mate_id) {
                    for root in mate.own_roots(port) {
                        if !roots.contains(&root) {
                            roots.push(root);
                        }
                    }
                }
            }
        }
        roots
    }

    /// Initial focus on activation: the first auto-focus-flagged candidate
    /// across the merged region, else the first tabbable, else the root
    /// itself made programmatically focusable.
    fn initial_focus(&self, port: &mut impl DomPort, lock: &mut Lock, roots: &[NodeId]) {
        let options = lock.config.focus_options;
        let mut flagged: Vec<NodeId> = roots
            .iter()
            .flat_map(|&root| all_auto_focusable(port, root))
            .collect();
        flagged.sort_by_cached_key(|&node| document_position(port, node));
        let order = TabOrder::resolve(port, roots, lock.config.positive_indices);
        let target = flagged.first().copied().or_else(|| order.first());
        match target {
            Some(node) => {
                if port.focus(node, options) {
                    lock.last_inside = Some(node);
                }
            }
            None => {
                if effective_tab_index(port, lock.root).is_none() {
                    port.set_attr(lock.root, "tabindex", "-1");
                }
                if port.focus(lock.root, options) {
                    lock.last_inside = Some(lock.root);
                }
            }
        }
    }

    fn in_allowed_area(&self, port: &impl DomPort, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if port.has_attr(n, marks::ALLOW_ATTR) {
                return true;
            }
            cursor = port.parent(n);
        }
        false
    }
}
