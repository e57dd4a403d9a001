//! Lock configuration: an explicit immutable record with enumerated fields,
//! plus a partial-update record for config changes on a live lock.

use std::fmt;
use std::rc::Rc;

use dom_core::{FocusOptions, NodeId};

/// Where guard sentinels are placed around the primary root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardMode {
    /// One guard immediately before and one immediately after the root.
    #[default]
    Both,
    /// Only the trailing guard.
    Tail,
    /// No guards at all.
    None,
}

/// What happens to focus when the lock deactivates.
#[derive(Clone, Default)]
pub enum ReturnFocus {
    /// Leave focus wherever arbitration last placed it.
    #[default]
    Disabled,
    /// Restore focus to the pre-activation element using the lock's
    /// `focus_options`.
    Enabled,
    /// Restore with explicit options (e.g. scroll-free).
    WithOptions(FocusOptions),
    /// Ask the caller, passing the element focus would return to.
    Custom(Rc<dyn Fn(NodeId) -> ReturnDecision>),
}

/// A caller's answer to a [`ReturnFocus::Custom`] query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnDecision {
    /// Do not restore focus.
    Skip,
    /// Restore using the lock's `focus_options`.
    Restore,
    /// Restore with these options.
    RestoreWith(FocusOptions),
}

impl fmt::Debug for ReturnFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Enabled => f.write_str("Enabled"),
            Self::WithOptions(options) => f.debug_tuple("WithOptions").field(options).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A holder object exposing the current node of a shard, for wrappers whose
/// shard references resolve late (e.g. render-cycle refs).
pub trait ShardHolder {
    fn current(&self) -> Option<NodeId>;
}

/// An auxiliary DOM subtree participating in a lock's region.
#[derive(Clone)]
pub enum Shard {
    /// A direct node reference.
    Node(NodeId),
    /// A holder resolved on every scan.
    Holder(Rc<dyn ShardHolder>),
}

impl Shard {
    /// The shard's current root, if it resolves.
    pub fn current(&self) -> Option<NodeId> {
        match self {
            Self::Node(node) => Some(*node),
            Self::Holder(holder) => holder.current(),
        }
    }
}

impl fmt::Debug for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Self::Holder(_) => f.write_str("Holder(..)"),
        }
    }
}

/// Configuration snapshot of a lock instance.
///
/// Field interactions follow the reference behavior: `disabled` suspends
/// arbitration without destroying state; `persistent_focus` makes
/// containment sticky even for non-keyboard escapes; `cross_frame` extends
/// containment across nested frames; `white_list` scopes which active
/// elements the lock reacts to at all.
#[derive(Clone)]
pub struct LockConfig {
    pub disabled: bool,
    pub return_focus: ReturnFocus,
    /// Options applied to every engine-initiated focus move for this lock.
    pub focus_options: FocusOptions,
    pub persistent_focus: bool,
    pub cross_frame: bool,
    pub auto_focus: bool,
    pub guard_mode: GuardMode,
    /// Opt-in positive-tabindex reordering (expensive, rarely correct to
    /// rely on).
    pub positive_indices: bool,
    /// Affinity key: locks sharing a group arbitrate as one region.
    pub group: Option<String>,
    /// Lock reacts to an active element only when this returns `true`.
    pub white_list: Option<Rc<dyn Fn(NodeId) -> bool>>,
    pub shards: Vec<Shard>,
    pub on_activation: Option<Rc<dyn Fn(NodeId)>>,
    pub on_deactivation: Option<Rc<dyn Fn()>>,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            return_focus: ReturnFocus::Disabled,
            focus_options: FocusOptions::default(),
            persistent_focus: false,
            cross_frame: true,
            auto_focus: true,
            guard_mode: GuardMode::Both,
            positive_indices: false,
            group: None,
            white_list: None,
            shards: Vec::new(),
            on_activation: None,
            on_deactivation: None,
        }
    }
}

impl fmt::Debug for LockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockConfig")
            .field("disabled", &self.disabled)
            .field("return_focus", &self.return_focus)
            .field("focus_options", &self.focus_options)
            .field("persistent_focus", &self.persistent_focus)
            .field("cross_frame", &self.cross_frame)
            .field("auto_focus", &self.auto_focus)
            .field("guard_mode", &self.guard_mode)
            .field("positive_indices", &self.positive_indices)
            .field("group", &self.group)
            .field("white_list", &self.white_list.as_ref().map(|_| ".."))
            .field("shards", &self.shards)
            .finish_non_exhaustive()
    }
}

/// Partial configuration update. `None` fields keep the current snapshot
/// value; `Some` fields replace it. Double-`Option` fields (`group`,
/// `white_list`, callbacks) can also clear the value with `Some(None)`.
#[derive(Clone, Default)]
pub struct LockConfigPatch {
    pub disabled: Option<bool>,
    pub return_focus: Option<ReturnFocus>,
    pub focus_options: Option<FocusOptions>,
    pub persistent_focus: Option<bool>,
    pub cross_frame: Option<bool>,
    pub auto_focus: Option<bool>,
    pub guard_mode: Option<GuardMode>,
    pub positive_indices: Option<bool>,
    pub group: Option<Option<String>>,
    pub white_list: Option<Option<Rc<dyn Fn(NodeId) -> bool>>>,
    pub shards: Option<Vec<Shard>>,
    pub on_activation: Option<Option<Rc<dyn Fn(NodeId)>>>,
    pub on_deactivation: Option<Option<Rc<dyn Fn()>>>,
}

impl LockConfigPatch {
    /// Apply this patch on top of `config`.
    pub fn apply(self, config: &mut LockConfig) {
        if let Some(v) = self.disabled {
            config.disabled = v;
        }
        if let Some(v) = self.return_focus {
            config.return_focus = v;
        }
        if let Some(v) = self.focus_options {
            config.focus_options = v;
        }
        if let Some(v) = self.persistent_focus {
            config.persistent_focus = v;
        }
        if let Some(v) = self.cross_frame {
            config.cross_frame = v;
        }
        if let Some(v) = self.auto_focus {
            config.auto_focus = v;
        }
        if let Some(v) = self.guard_mode {
            config.guard_mode = v;
        }
        if let Some(v) = self.positive_indices {
            config.positive_indices = v;
        }
        if let Some(v) = self.group {
            config.group = v;
        }
        if let Some(v) = self.white_list {
            config.white_list = v;
        }
        if let Some(v) = self.shards {
            config.shards = v;
        }
        if let Some(v) = self.on_activation {
            config.on_activation = v;
        }
        if let Some(v) = self.on_deactivation {
            config.on_deactivation = v;
        }
    }
}
