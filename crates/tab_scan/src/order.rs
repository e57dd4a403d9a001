//! Merged tab order across the primary root and shard roots.

use dom_core::{DomPort, NodeId};

use crate::{Candidate, ScanMode, scan};

/// Direction of keyboard tab navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Child-index path of `node` from the document root, usable as a
/// document-order sort key for disjoint subtrees. Detached nodes yield
/// `None`.
pub fn document_position(port: &impl DomPort, node: NodeId) -> Option<Vec<u32>> {
    let mut path = Vec::new();
    let mut current = node;
    while let Some(parent) = port.parent(current) {
        let index = port.children(parent).iter().position(|&c| c == current)?;
        path.push(index as u32);
        current = parent;
    }
    path.reverse();
    Some(path)
}

/// Ancestry test: does `node` belong to any of the given region roots?
pub fn is_inside(port: &impl DomPort, node: NodeId, roots: &[NodeId]) -> bool {
    let mut cursor = Some(node);
    while let Some(n) = cursor {
        if roots.contains(&n) {
            return true;
        }
        cursor = port.parent(n);
    }
    false
}

/// The merged logical tab order of a lock's region.
///
/// Shard roots are spliced in at their actual document position relative to
/// the primary root, not appended; with `positive_indices` the merged set is
/// additionally reordered so positive-tabindex candidates come first, by
/// ascending tabindex, matching native semantics. That reorder walks and
/// sorts the full candidate set, which is why it stays opt-in.
#[derive(Clone, Debug)]
pub struct TabOrder {
    entries: Vec<Candidate>,
}

impl TabOrder {
    /// Resolve the merged order for `roots`. Detached roots and duplicates
    /// are skipped; the result is empty (never an error) when nothing
    /// remains.
    pub fn resolve(port: &impl DomPort, roots: &[NodeId], positive_indices: bool) -> Self {
        let mut keyed: Vec<(Vec<u32>, NodeId)> = Vec::new();
        for &root in roots {
            if keyed.iter().any(|(_, r)| *r == root) {
                continue;
            }
            let Some(position) = document_position(port, root) else {
                continue; // detached root, skip this entry
            };
            keyed.push((position, root));
        }
        keyed.sort();

        let mut entries = Vec::new();
        for (_, root) in keyed {
            entries.extend(scan(port, root, ScanMode::Tabbable));
        }
        if positive_indices {
            // stable: document order breaks ties within each bucket
            entries.sort_by_key(|c| {
                if c.tab_index > 0 {
                    (0, c.tab_index)
                } else {
                    (1, 0)
                }
            });
        }
        log::trace!(target: "focus.scan", "resolved order: {} entries across {} roots", entries.len(), roots.len());
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.entries.first().map(|c| c.node)
    }

    pub fn last(&self) -> Option<NodeId> {
        self.entries.last().map(|c| c.node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.entries.iter().any(|c| c.node == node)
    }

    /// The adjacent candidate in the merged order, wrapping last→first when
    /// moving forward and first→last when moving backward. `None` when the
    /// order is empty or `current` is not part of it.
    pub fn next(&self, current: NodeId, direction: Direction) -> Option<NodeId> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let pos = self.entries.iter().position(|c| c.node == current)?;
        let target = match direction {
            Direction::Forward => (pos + 1) % len,
            Direction::Backward => (pos + len - 1) % len,
        };
        Some(self.entries[target].node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_dom::SimDom;

    #[test]
    fn shards_splice_at_document_position() {
        let mut dom = SimDom::new();
        let body = dom.body();
        // shard appears before the primary root in the document
        let shard = dom.el(body, "div", &[]);
        let shard_input = dom.el(shard, "input", &[]);
        let primary = dom.el(body, "div", &[]);
        let primary_input = dom.el(primary, "input", &[]);

        // resolve with the primary listed first; document order must win
        let order = TabOrder::resolve(&dom, &[primary, shard], false);
        assert_eq!(order.first(), Some(shard_input));
        assert_eq!(order.last(), Some(primary_input));
    }

    #[test]
    fn next_wraps_both_ways() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let a = dom.el(region, "input", &[]);
        let b = dom.el(region, "button", &[]);
        let c = dom.el(region, "input", &[]);

        let order = TabOrder::resolve(&dom, &[region], false);
        assert_eq!(order.next(c, Direction::Forward), Some(a));
        assert_eq!(order.next(a, Direction::Backward), Some(c));
        assert_eq!(order.next(b, Direction::Forward), Some(c));
    }

    #[test]
    fn positive_indices_sort_before_zero() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let zero = dom.el(region, "input", &[]);
        let two = dom.el(region, "input", &[("tabindex", "2")]);
        let one = dom.el(region, "input", &[("tabindex", "1")]);

        let plain = TabOrder::resolve(&dom, &[region], false);
        assert_eq!(plain.first(), Some(zero));

        let native = TabOrder::resolve(&dom, &[region], true);
        assert_eq!(native.first(), Some(one));
        assert_eq!(native.next(one, Direction::Forward), Some(two));
        assert_eq!(native.next(two, Direction::Forward), Some(zero));
    }

    #[test]
    fn detached_roots_are_skipped() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let input = dom.el(region, "input", &[]);
        let gone = dom.create_detached("div", &[]);

        let order = TabOrder::resolve(&dom, &[region, gone], false);
        assert_eq!(order.first(), Some(input));
        assert!(!order.is_empty());
    }

    #[test]
    fn is_inside_checks_ancestry() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let nested = dom.el(region, "div", &[]);
        let input = dom.el(nested, "input", &[]);
        let outside = dom.el(body, "input", &[]);

        assert!(is_inside(&dom, input, &[region]));
        assert!(is_inside(&dom, region, &[region]));
        assert!(!is_inside(&dom, outside, &[region]));
    }

    #[test]
    fn next_is_none_for_foreign_nodes() {
        let mut dom = SimDom::new();
        let body = dom.body();
        let region = dom.el(body, "div", &[]);
        let _a = dom.el(region, "input", &[]);
        let outside = dom.el(body, "input", &[]);

        let order = TabOrder::resolve(&dom, &[region], false);
        assert_eq!(order.next(outside, Direction::Forward), None);
    }
}
