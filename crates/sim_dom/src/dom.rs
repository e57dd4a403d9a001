use std::collections::HashMap;

use dom_core::{DomPort, FocusOptions, InsertSide, NodeId};

use crate::SimDomError;

struct Record {
    tag: String,
    attrs: Vec<(String, Option<String>)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory document with a single focus cursor.
///
/// Nodes live in an arena; the `live` map resolves [`NodeId`]s to arena
/// slots. Removed nodes keep their slot but leave the map, so stale ids
/// resolve to nothing rather than to recycled nodes.
pub struct SimDom {
    nodes: Vec<Record>,
    live: HashMap<NodeId, usize>,
    next_id: u64,
    body: NodeId,
    active: Option<NodeId>,
    last_focus_options: Option<FocusOptions>,
}

impl SimDom {
    /// Create a document with an empty `<body>` root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            live: HashMap::new(),
            next_id: 1,
            body: NodeId::from_raw(0),
            active: None,
            last_focus_options: None,
        };
        dom.body = dom.create_detached("body", &[]);
        dom
    }

    /// The document root element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element.
    pub fn create_detached(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id += 1;
        let index = self.nodes.len();
        self.nodes.push(Record {
            tag: tag.to_ascii_lowercase(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect(),
            parent: None,
            children: Vec::new(),
        });
        self.live.insert(id, index);
        id
    }

    /// Create an element and append it to `parent`. Convenience for tests.
    pub fn el(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.create_detached(tag, attrs);
        // parent comes from a prior create; a failure here is a test bug
        let _ = self.append_child(parent, id);
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SimDomError> {
        self.check_insert(parent, child)?;
        let parent_index = self.index_of(parent)?;
        let child_index = self.index_of(child)?;
        self.nodes[parent_index].children.push(child);
        self.nodes[child_index].parent = Some(parent);
        Ok(())
    }

    pub fn insert_before_node(
        &mut self,
        parent: NodeId,
        child: NodeId,
        before: NodeId,
    ) -> Result<(), SimDomError> {
        self.check_insert(parent, child)?;
        let parent_index = self.index_of(parent)?;
        let child_index = self.index_of(child)?;
        self.index_of(before)?;
        if self.nodes[child_index].parent.is_some() {
            debug_assert!(false, "child already has a parent");
            return Err(SimDomError::InvalidParent(child));
        }
        let siblings = &mut self.nodes[parent_index].children;
        let pos = siblings
            .iter()
            .position(|k| *k == before)
            .ok_or(SimDomError::InvalidSibling { parent, before })?;
        siblings.insert(pos, child);
        self.nodes[child_index].parent = Some(parent);
        Ok(())
    }

    /// Remove `node` and everything under it. Focus held inside the removed
    /// subtree is dropped, as a real document would.
    pub fn remove_subtree(&mut self, node: NodeId) {
        let Some(&index) = self.live.get(&node) else {
            return;
        };
        if let Some(active) = self.active {
            if active == node || self.is_descendant(node, active) {
                self.active = None;
            }
        }
        if let Some(parent) = self.nodes[index].parent.take() {
            if let Some(&parent_index) = self.live.get(&parent) {
                self.nodes[parent_index].children.retain(|k| *k != node);
            }
        }
        let children = std::mem::take(&mut self.nodes[index].children);
        self.live.remove(&node);
        for child in children {
            self.remove_subtree(child);
        }
    }

    /// Replace or add an attribute value.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Ok(index) = self.index_of(node) else {
            return;
        };
        let record = &mut self.nodes[index];
        for (k, v) in &mut record.attrs {
            if k.eq_ignore_ascii_case(name) {
                *v = Some(value.to_string());
                return;
            }
        }
        record.attrs.push((name.to_string(), Some(value.to_string())));
    }

    /// Drop an attribute entirely.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let Ok(index) = self.index_of(node) else {
            return;
        };
        self.nodes[index]
            .attrs
            .retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    }

    /// Force the active element without focusability checks, standing in
    /// for focus moves the engine did not initiate (user clicks, unrelated
    /// scripts).
    pub fn force_active(&mut self, node: Option<NodeId>) {
        self.active = node.filter(|n| self.live.contains_key(n));
    }

    /// Options the most recent successful `focus` call carried, for
    /// asserting `prevent_scroll` plumbing in tests.
    pub fn last_focus_options(&self) -> Option<FocusOptions> {
        self.last_focus_options
    }

    /// Whether the host would accept a focus call on `node` right now.
    pub fn can_focus(&self, node: NodeId) -> bool {
        if !self.is_attached_inner(node) {
            return false;
        }
        if self.has_attr_inner(node, "disabled") {
            return false;
        }
        // visibility of the node and every ancestor
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if !self.self_visible(n) {
                return false;
            }
            cursor = self.parent_inner(n);
        }
        if self.attr_inner(node, "tabindex").is_some_and(|t| t.trim().parse::<i32>().is_ok()) {
            return true;
        }
        self.natively_focusable(node)
    }

    fn natively_focusable(&self, node: NodeId) -> bool {
        let Ok(index) = self.index_of(node) else {
            return false;
        };
        match self.nodes[index].tag.as_str() {
            "input" | "select" | "textarea" | "button" | "iframe" | "summary" => true,
            "a" | "area" => self.has_attr_inner(node, "href"),
            "audio" | "video" => self.has_attr_inner(node, "controls"),
            _ => match self.attr_inner(node, "contenteditable") {
                Some(v) => !v.eq_ignore_ascii_case("false"),
                None => false,
            },
        }
    }

    fn self_visible(&self, node: NodeId) -> bool {
        if self.has_attr_inner(node, "hidden") {
            return false;
        }
        let Some(style) = self.attr_inner(node, "style") else {
            return true;
        };
        !style_declares(&style, "display", "none") && !style_declares(&style, "visibility", "hidden")
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), SimDomError> {
        if parent == child || self.is_descendant(child, parent) {
            debug_assert!(false, "cannot create cycle");
            return Err(SimDomError::CycleDetected { parent, child });
        }
        Ok(())
    }

    fn is_descendant(&self, ancestor: NodeId, maybe_descendant: NodeId) -> bool {
        let Some(&index) = self.live.get(&ancestor) else {
            return false;
        };
        let mut stack: Vec<NodeId> = self.nodes[index].children.clone();
        while let Some(current) = stack.pop() {
            if current == maybe_descendant {
                return true;
            }
            if let Some(&child_index) = self.live.get(&current) {
                stack.extend(self.nodes[child_index].children.iter().copied());
            }
        }
        false
    }

    fn index_of(&self, node: NodeId) -> Result<usize, SimDomError> {
        self.live
            .get(&node)
            .copied()
            .ok_or(SimDomError::MissingNode(node))
    }

    fn parent_inner(&self, node: NodeId) -> Option<NodeId> {
        let index = self.index_of(node).ok()?;
        self.nodes[index].parent
    }

    fn attr_inner(&self, node: NodeId, name: &str) -> Option<String> {
        let index = self.index_of(node).ok()?;
        self.nodes[index]
            .attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.clone())
    }

    fn has_attr_inner(&self, node: NodeId, name: &str) -> bool {
        let Ok(index) = self.index_of(node) else {
            return false;
        };
        self.nodes[index]
            .attrs
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    fn is_attached_inner(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if n == self.body {
                return true;
            }
            if !self.live.contains_key(&n) {
                return false;
            }
            cursor = self.parent_inner(n);
        }
        false
    }
}

impl Default for SimDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Naive inline-style check: does `style` declare `prop: value`?
fn style_declares(style: &str, prop: &str, value: &str) -> bool {
    style.split(';').any(|decl| {
        let mut parts = decl.splitn(2, ':');
        let (Some(k), Some(v)) = (parts.next(), parts.next()) else {
            return false;
        };
        k.trim().eq_ignore_ascii_case(prop) && v.trim().eq_ignore_ascii_case(value)
    })
}

impl DomPort for SimDom {
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_inner(node)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        match self.index_of(node) {
            Ok(index) => self.nodes[index].children.clone(),
            Err(_) => Vec::new(),
        }
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.is_attached_inner(node)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        let index = self.index_of(node).ok()?;
        Some(self.nodes[index].tag.clone())
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.attr_inner(node, name)
    }

    fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.has_attr_inner(node, name)
    }

    fn is_self_visible(&self, node: NodeId) -> bool {
        self.self_visible(node)
    }

    fn frame_element(&self, node: NodeId) -> Option<NodeId> {
        let mut cursor = self.parent_inner(node);
        while let Some(n) = cursor {
            if self.tag_name(n).as_deref() == Some("iframe") {
                return Some(n);
            }
            cursor = self.parent_inner(n);
        }
        None
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    fn focus(&mut self, node: NodeId, options: FocusOptions) -> bool {
        if !self.can_focus(node) {
            return false;
        }
        self.active = Some(node);
        self.last_focus_options = Some(options);
        true
    }

    fn blur(&mut self) {
        self.active = None;
    }

    fn create_element(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        self.create_detached(tag, attrs)
    }

    fn insert_sibling(&mut self, anchor: NodeId, side: InsertSide, node: NodeId) -> bool {
        let Some(parent) = self.parent_inner(anchor) else {
            return false;
        };
        let result = match side {
            InsertSide::Before => self.insert_before_node(parent, node, anchor),
            InsertSide::After => {
                let next = self.following_sibling(parent, anchor);
                match next {
                    Some(before) => self.insert_before_node(parent, node, before),
                    None => self.append_child(parent, node),
                }
            }
        };
        result.is_ok()
    }

    fn remove_node(&mut self, node: NodeId) {
        self.remove_subtree(node);
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.set_attribute(node, name, value);
    }
}

impl SimDom {
    fn following_sibling(&self, parent: NodeId, anchor: NodeId) -> Option<NodeId> {
        let index = self.index_of(parent).ok()?;
        let siblings = &self.nodes[index].children;
        let pos = siblings.iter().position(|k| *k == anchor)?;
        siblings.get(pos + 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_keep_insertion_order() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let a = dom.el(body, "input", &[]);
        let b = dom.el(body, "button", &[]);
        assert_eq!(dom.children(body), vec![a, b]);
    }

    #[test]
    fn insert_sibling_before_and_after() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let mid = dom.el(body, "div", &[]);
        let head = dom.create_detached("div", &[("data-focus-guard", "true")]);
        let tail = dom.create_detached("div", &[("data-focus-guard", "true")]);
        assert!(dom.insert_sibling(mid, InsertSide::Before, head));
        assert!(dom.insert_sibling(mid, InsertSide::After, tail));
        assert_eq!(dom.children(body), vec![head, mid, tail]);
    }

    #[test]
    fn cycle_is_rejected() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let outer = dom.el(body, "div", &[]);
        let inner = dom.el(outer, "div", &[]);
        assert_eq!(
            dom.append_child(inner, outer),
            Err(SimDomError::CycleDetected {
                parent: inner,
                child: outer
            })
        );
    }

    #[test]
    fn removing_focused_subtree_drops_focus() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let wrap = dom.el(body, "div", &[]);
        let input = dom.el(wrap, "input", &[]);
        assert!(dom.focus(input, FocusOptions::default()));
        dom.remove_subtree(wrap);
        assert_eq!(dom.active_element(), None);
        assert!(!dom.is_attached(input));
    }

    #[test]
    fn hidden_elements_refuse_focus() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let hidden = dom.el(body, "input", &[("style", "display: none")]);
        let wrapped = dom.el(body, "div", &[("style", "visibility:hidden")]);
        let inner = dom.el(wrapped, "button", &[]);
        assert!(!dom.focus(hidden, FocusOptions::default()));
        assert!(!dom.focus(inner, FocusOptions::default()));
        assert_eq!(dom.active_element(), None);
    }

    #[test]
    fn disabled_and_plain_divs_refuse_focus() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let disabled = dom.el(body, "button", &[("disabled", "")]);
        let plain = dom.el(body, "div", &[]);
        let granted = dom.el(body, "div", &[("tabindex", "-1")]);
        assert!(!dom.focus(disabled, FocusOptions::default()));
        assert!(!dom.focus(plain, FocusOptions::default()));
        assert!(dom.focus(granted, FocusOptions::default()));
    }

    #[test]
    fn frame_element_finds_enclosing_iframe() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let frame = dom.el(body, "iframe", &[]);
        let inner = dom.el(frame, "input", &[]);
        assert_eq!(dom.frame_element(inner), Some(frame));
        assert_eq!(dom.frame_element(frame), None);
    }
}
