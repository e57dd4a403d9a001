//! The narrow DOM port the engine reads and writes the host document through.

use crate::{FocusOptions, NodeId};

/// Where to insert a new sibling relative to an anchor node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertSide {
    Before,
    After,
}

/// Read/write interface to the host document.
///
/// This trait captures the minimal set of operations needed for:
/// - Tabbable discovery (tree shape, tags, attributes, visibility)
/// - Focus arbitration (get/set the active element)
/// - Guard lifecycle (insert/remove sentinel elements)
///
/// Every query is a point-in-time read of live, externally mutable state;
/// callers must not cache results across events. Mutations are idempotent:
/// focusing the already-active element or removing an absent node is safe.
///
/// # Integration Pattern
///
/// For real-DOM hosts, convert the native node handle to [`NodeId`] at the
/// routing boundary and resolve it back inside each method:
///
/// ```ignore
/// fn on_focus_in(target: web::Element, engine: &mut FocusLockEngine, dom: &mut WebDom) {
///     dom.note_active(NodeId::from_raw(target.handle()));
///     engine.handle_focus_change(dom);
/// }
/// ```
pub trait DomPort {
    // =========================================================================
    // Tree shape
    // =========================================================================

    /// Parent element of `node`, or `None` for the document root or a
    /// detached node.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Element children of `node`, in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Whether `node` is still connected to the document.
    fn is_attached(&self, node: NodeId) -> bool;

    // =========================================================================
    // Element facts
    // =========================================================================

    /// Lowercase tag name of `node`, or `None` for non-elements / detached
    /// nodes.
    fn tag_name(&self, node: NodeId) -> Option<String>;

    /// Attribute value, if the attribute is present with a value.
    fn attr(&self, node: NodeId, name: &str) -> Option<String>;

    /// Whether the attribute is present at all (with or without a value).
    fn has_attr(&self, node: NodeId, name: &str) -> bool;

    /// Node-local visibility: `false` when this node itself is hidden
    /// (`display:none`, `visibility:hidden`, the `hidden` attribute, or
    /// zero-size without an overflow override). Ancestor state is *not*
    /// considered; the scanner walks ancestors itself.
    fn is_self_visible(&self, node: NodeId) -> bool;

    /// Nearest enclosing frame element (e.g. `<iframe>`) of the document
    /// containing `node`, or `None` when `node` lives in the top document.
    fn frame_element(&self, node: NodeId) -> Option<NodeId>;

    // =========================================================================
    // Focus cursor
    // =========================================================================

    /// The element that currently holds focus, if any.
    fn active_element(&self) -> Option<NodeId>;

    /// Move focus to `node`. Returns `false` when the host refused the move
    /// (node detached or not focusable); the engine treats that as a
    /// transient condition and carries on.
    fn focus(&mut self, node: NodeId, options: FocusOptions) -> bool;

    /// Drop focus entirely.
    fn blur(&mut self);

    // =========================================================================
    // Node mutation (guard lifecycle, focusability grants)
    // =========================================================================

    /// Create a detached element with the given tag and attributes.
    fn create_element(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId;

    /// Insert a detached node as a sibling of `anchor`. Returns `false`
    /// when `anchor` is detached.
    fn insert_sibling(&mut self, anchor: NodeId, side: InsertSide, node: NodeId) -> bool;

    /// Remove `node` (and its subtree) from the document. Removing an
    /// already-absent node is a no-op.
    fn remove_node(&mut self, node: NodeId);

    /// Set an attribute on `node`. Used to grant the region root
    /// programmatic focusability (`tabindex="-1"`) as a last resort.
    fn set_attr(&mut self, node: NodeId, name: &str, value: &str);
}
