//! Tabbable candidate discovery for a single root.

use dom_core::{DomPort, NodeId, marks};

/// What the scan should include.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Only elements reachable via keyboard Tab (tabindex >= 0).
    Tabbable,
    /// Also elements focusable only programmatically (tabindex = -1).
    Focusable,
}

/// A node judged focusable under the filtering rules, with its effective
/// tab index. Position in the scan result is document (pre-order) position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    pub tab_index: i32,
}

/// Effective tab index of `node`: the parsed `tabindex` attribute, or the
/// platform default for natively focusable tags, or `None` for elements Tab
/// can never reach. Guard sentinels report `None` unconditionally.
pub fn effective_tab_index(port: &impl DomPort, node: NodeId) -> Option<i32> {
    if port.has_attr(node, marks::GUARD_ATTR) {
        return None;
    }
    if let Some(raw) = port.attr(node, "tabindex") {
        if let Ok(value) = raw.trim().parse::<i32>() {
            return Some(value);
        }
        // malformed tabindex falls back to the native default
    }
    let tag = port.tag_name(node)?;
    let native = match tag.as_str() {
        "input" | "select" | "textarea" | "button" | "iframe" | "summary" => true,
        "a" | "area" => port.has_attr(node, "href"),
        "audio" | "video" => port.has_attr(node, "controls"),
        _ => match port.attr(node, "contenteditable") {
            Some(v) => !v.eq_ignore_ascii_case("false"),
            None => false,
        },
    };
    native.then_some(0)
}

/// Whether `node` and all of its ancestors are visible and attached.
pub fn is_rendered(port: &impl DomPort, node: NodeId) -> bool {
    if !port.is_attached(node) {
        return false;
    }
    let mut cursor = Some(node);
    while let Some(n) = cursor {
        if !port.is_self_visible(n) {
            return false;
        }
        cursor = port.parent(n);
    }
    true
}

/// Ordered candidate discovery under `root` (inclusive), depth-first
/// pre-order. Hidden subtrees are pruned whole; disabled elements and guard
/// sentinels are skipped. Returns an empty sequence (never an error) for a
/// detached or fully hidden root.
pub fn scan(port: &impl DomPort, root: NodeId, mode: ScanMode) -> Vec<Candidate> {
    if !is_rendered(port, root) {
        return Vec::new();
    }
    let mut out = Vec::new();
    walk(port, root, mode, &mut out);
    log::trace!(target: "focus.scan", "scan root={root:?} mode={mode:?} -> {} candidates", out.len());
    out
}

fn walk(port: &impl DomPort, node: NodeId, mode: ScanMode, out: &mut Vec<Candidate>) {
    // root visibility was checked by the caller; descendants are pruned below
    if !port.has_attr(node, "disabled") {
        if let Some(tab_index) = effective_tab_index(port, node) {
            if tab_index >= 0 || mode == ScanMode::Focusable {
                out.push(Candidate { node, tab_index });
            }
        }
    }
    for child in port.children(node) {
        if !port.is_self_visible(child) {
            continue; // hidden subtree, prune
        }
        walk(port, child, mode, out);
    }
}

/// First tabbable candidate under `root`, if any.
pub fn first_tabbable(port: &impl DomPort, root: NodeId) -> Option<NodeId> {
    scan(port, root, ScanMode::Tabbable).first().map(|c| c.node)
}

/// Last tabbable candidate under `root`, if any.
pub fn last_tabbable(port: &impl DomPort, root: NodeId) -> Option<NodeId> {
    scan(port, root, ScanMode::Tabbable).last().map(|c| c.node)
}

/// Candidates explicitly flagged as auto-focus targets, in document order.
/// Recognizes the engine's `data-autofocus` mark and the native `autofocus`
/// attribute.
pub fn all_auto_focusable(port: &impl DomPort, root: NodeId) -> Vec<NodeId> {
    scan(port, root, ScanMode::Focusable)
        .into_iter()
        .map(|c| c.node)
        .filter(|&n| port.has_attr(n, marks::AUTO_FOCUS_ATTR) || port.has_attr(n, "autofocus"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_dom::SimDom;

    #[test]
    fn scan_collects_form_controls_in_document_order() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let input = dom.el(region, "input", &[]);
        let text = dom.el(region, "div", &[]);
        let button = dom.el(region, "button", &[]);
        let _ = text;

        let nodes: Vec<_> = scan(&dom, region, ScanMode::Tabbable)
            .into_iter()
            .map(|c| c.node)
            .collect();
        assert_eq!(nodes, vec![input, button]);
    }

    #[test]
    fn anchors_need_an_href() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let bare = dom.el(body, "a", &[]);
        let linked = dom.el(body, "a", &[("href", "#")]);

        assert_eq!(effective_tab_index(&dom, bare), None);
        assert_eq!(effective_tab_index(&dom, linked), Some(0));
    }

    #[test]
    fn disabled_and_hidden_are_excluded() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let ok = dom.el(region, "input", &[]);
        let _disabled = dom.el(region, "input", &[("disabled", "")]);
        let _hidden = dom.el(region, "input", &[("hidden", "")]);
        let veiled = dom.el(region, "div", &[("style", "display:none")]);
        let _inside_veiled = dom.el(veiled, "input", &[]);

        let nodes: Vec<_> = scan(&dom, region, ScanMode::Tabbable)
            .into_iter()
            .map(|c| c.node)
            .collect();
        assert_eq!(nodes, vec![ok]);
    }

    #[test]
    fn negative_tabindex_needs_focusable_mode() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let skipped = dom.el(region, "button", &[("tabindex", "-1")]);
        let kept = dom.el(region, "button", &[]);

        let tabbable: Vec<_> = scan(&dom, region, ScanMode::Tabbable)
            .into_iter()
            .map(|c| c.node)
            .collect();
        assert_eq!(tabbable, vec![kept]);

        let focusable: Vec<_> = scan(&dom, region, ScanMode::Focusable)
            .into_iter()
            .map(|c| c.node)
            .collect();
        assert_eq!(focusable, vec![skipped, kept]);
    }

    #[test]
    fn malformed_tabindex_falls_back_to_native_default() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let input = dom.el(body, "input", &[("tabindex", "banana")]);
        let div = dom.el(body, "div", &[("tabindex", "banana")]);

        assert_eq!(effective_tab_index(&dom, input), Some(0));
        assert_eq!(effective_tab_index(&dom, div), None);
    }

    #[test]
    fn guards_are_invisible_to_scans() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let _guard = dom.el(
            region,
            "div",
            &[("data-focus-guard", "true"), ("tabindex", "0")],
        );
        let input = dom.el(region, "input", &[]);

        let nodes: Vec<_> = scan(&dom, region, ScanMode::Tabbable)
            .into_iter()
            .map(|c| c.node)
            .collect();
        assert_eq!(nodes, vec![input]);
    }

    #[test]
    fn detached_root_scans_empty() {
        let mut dom = SimDom::new();
        let region = dom.create_detached("div", &[]);
        let _input = dom.el(region, "input", &[]);
        assert!(scan(&dom, region, ScanMode::Tabbable).is_empty());
    }

    #[test]
    fn auto_focusable_recognizes_both_marks() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let _plain = dom.el(region, "input", &[]);
        let marked = dom.el(region, "input", &[("data-autofocus", "true")]);
        let native = dom.el(region, "input", &[("autofocus", "")]);

        assert_eq!(all_auto_focusable(&dom, region), vec![marked, native]);
    }

    #[test]
    fn contenteditable_regions_are_tabbable() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let editor = dom.el(body, "div", &[("contenteditable", "true")]);
        let off = dom.el(body, "div", &[("contenteditable", "false")]);

        assert_eq!(effective_tab_index(&dom, editor), Some(0));
        assert_eq!(effective_tab_index(&dom, off), None);
    }
}
