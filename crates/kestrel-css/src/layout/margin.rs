//! [CSS 2.1 § 8.3.1 Collapsing margins](https://www.w3.org/TR/CSS2/box.html#collapsing-margins)
//!
//! "In CSS, the adjoining margins of two or more boxes (which might or might
//! not be siblings) can combine to form a single margin. Margins that combine
//! this way are said to collapse, and the resulting combined margin is called
//! a collapsed margin."
//!
//! Every in-flow block box contributes a top and a bottom [`MarginEdge`] in
//! document order. [`try_collapse_margins`] walks that sequence once, merging
//! each edge into its left neighbor while the two adjoin.

use core::fmt;

use serde::Serialize;

use crate::style::Clear;

use super::box_tree::{BoxId, LayoutTree};

/// Which side of a box a margin edge starts or ends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum MarginType {
    Top,
    Bottom,
}

/// A run of adjoining margins, from `first_node`'s `first_type` margin to
/// `last_node`'s `last_type` margin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginEdge {
    /// Width of the collapsed margin in px.
    pub size: f32,
    /// The first box of the run has clearance; nothing before it collapses
    /// with it.
    pub clearance: bool,
    /// Side of `first_node` the run starts on.
    pub first_type: MarginType,
    /// Box whose margin starts the run.
    pub first_node: BoxId,
    /// Side of `last_node` the run ends on.
    pub last_type: MarginType,
    /// Box whose margin ends the run.
    pub last_node: BoxId,
    /// Largest positive margin in the run, or 0.
    pub max_positive: f32,
    /// Most negative margin in the run, or 0.
    pub min_negative: f32,
}

impl MarginEdge {
    fn new(kind: MarginType, node: BoxId, margin: f32, clearance: bool) -> Self {
        Self {
            size: margin,
            clearance,
            first_type: kind,
            first_node: node,
            last_type: kind,
            last_node: node,
            max_positive: margin.max(0.0),
            min_negative: margin.min(0.0),
        }
    }

    /// "When two or more margins collapse, the resulting margin width is the
    /// maximum of the collapsing margins' widths. In the case of negative
    /// margins, the maximum of the absolute values of the negative adjoining
    /// margins is deducted from the maximum of the positive adjoining margins.
    /// If there are no positive margins, the maximum of the absolute values
    /// of the adjoining margins is deducted from zero."
    fn absorb(&mut self, next: &Self) {
        self.last_type = next.last_type;
        self.last_node = next.last_node;
        self.max_positive = self.max_positive.max(next.max_positive);
        self.min_negative = self.min_negative.min(next.min_negative);
        self.size = self.max_positive + self.min_negative;
    }

    /// True when the run covers more than one margin.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.first_node != self.last_node || self.first_type != self.last_type
    }
}

impl fmt::Display for MarginEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} .. {}#{}: {}px",
            self.first_type, self.first_node.0, self.last_type, self.last_node.0, self.size
        )?;
        if self.clearance {
            f.write_str(" (clearance)")?;
        }
        Ok(())
    }
}

/// The top margin edge of `id`.
///
/// [§ 9.5.2 Controlling flow next to floats](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
///
/// Clearance is placed "above the top margin" of an element whose `clear`
/// is not `none`, so only the top edge carries it.
#[must_use]
pub fn create_top_margin(tree: &LayoutTree, id: BoxId) -> MarginEdge {
    let node = tree.node(id);
    MarginEdge::new(
        MarginType::Top,
        id,
        node.used_margin.top,
        node.properties.clear != Clear::None,
    )
}

/// The bottom margin edge of `id`.
#[must_use]
pub fn create_bottom_margin(tree: &LayoutTree, id: BoxId) -> MarginEdge {
    MarginEdge::new(MarginType::Bottom, id, tree.node(id).used_margin.bottom, false)
}

/// "Two margins are adjoining if and only if:
///
/// - both belong to in-flow block-level boxes that participate in the same
///   block formatting context
/// - no line boxes, no clearance, no padding and no border separate them
/// - both belong to vertically-adjacent box edges, i.e. form one of the
///   following pairs:
///   - top margin of a box and top margin of its first in-flow child
///   - bottom margin of box and top margin of its next in-flow following
///     sibling
///   - bottom margin of a last in-flow child and bottom margin of its parent
///     if the parent has 'auto' computed height
///   - top and bottom margins of a box that does not establish a new block
///     formatting context and that has zero computed 'min-height', zero or
///     'auto' computed 'height', and no in-flow children"
///
/// Compares `edges[i]` with `edges[i + 1]`; false when either is missing.
#[must_use]
pub fn are_margins_adjoining(tree: &LayoutTree, edges: &[MarginEdge], i: usize) -> bool {
    let (Some(current), Some(next)) = (edges.get(i), edges.get(i + 1)) else {
        return false;
    };
    if next.clearance {
        return false;
    }
    let last = current.last_node;
    let first = next.first_node;
    if tree.node(last).formatting_context != tree.node(first).formatting_context {
        return false;
    }

    match (current.last_type, next.first_type) {
        (MarginType::Top, MarginType::Top) => {
            tree.first_in_flow_child(last) == Some(first) && !tree.has_top_border_or_padding(last)
        }
        (MarginType::Bottom, MarginType::Top) => tree.next_in_flow_sibling(last) == Some(first),
        (MarginType::Bottom, MarginType::Bottom) => {
            tree.parent(last) == Some(first)
                && tree.last_in_flow_child(first) == Some(last)
                && tree.has_auto_height(first)
                && !tree.has_bottom_border_or_padding(first)
        }
        (MarginType::Top, MarginType::Bottom) => last == first && tree.is_self_collapsing(last),
    }
}

/// Merge adjoining edges in place, left to right.
///
/// After a merge the widened edge is tested again against its new right
/// neighbor, so a chain like parent-top, child-top, child-bottom,
/// sibling-top folds into a single edge.
pub fn try_collapse_margins(tree: &LayoutTree, edges: &mut Vec<MarginEdge>) {
    let mut i = 0;
    while i + 1 < edges.len() {
        if are_margins_adjoining(tree, edges, i) {
            let next = edges.remove(i + 1);
            edges[i].absorb(&next);
            #[cfg(feature = "margin-trace")]
            eprintln!("[MARGIN] merged into {}", edges[i]);
        } else {
            i += 1;
        }
    }
}

/// The margin edges of every in-flow block box, top edge before the
/// descendants' edges and bottom edge after them.
///
/// Out-of-flow and inline-level boxes contribute no edges themselves. The
/// block boxes inside them belong to other formatting contexts and are
/// emitted as separate runs after the run they interrupt, so they never sit
/// between two edges that could adjoin.
#[must_use]
pub fn collect_margin_edges(tree: &LayoutTree) -> Vec<MarginEdge> {
    let mut edges = Vec::new();
    let mut deferred = Vec::new();
    push_edges(tree, LayoutTree::ROOT, &mut edges, &mut deferred);

    let mut next = 0;
    while let Some(&container) = deferred.get(next) {
        next += 1;
        for &child in tree.children(container) {
            push_edges(tree, child, &mut edges, &mut deferred);
        }
    }
    edges
}

fn push_edges(
    tree: &LayoutTree,
    id: BoxId,
    edges: &mut Vec<MarginEdge>,
    deferred: &mut Vec<BoxId>,
) {
    let node = tree.node(id);
    if !node.generates_box {
        return;
    }
    if !node.is_in_flow_block() {
        deferred.push(id);
        return;
    }
    edges.push(create_top_margin(tree, id));
    for &child in tree.children(id) {
        push_edges(tree, child, edges, deferred);
    }
    edges.push(create_bottom_margin(tree, id));
}

/// Collect and collapse the margins of a resolved tree.
///
/// Call [`LayoutTree::resolve`] first; unresolved boxes have no used margins.
#[must_use]
pub fn collapse_margins(tree: &LayoutTree) -> Vec<MarginEdge> {
    let mut edges = collect_margin_edges(tree);
    try_collapse_margins(tree, &mut edges);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutContext;
    use crate::style::{BoxProperties, Display, Float, Margin, MinSize};
    use crate::values::Length;

    fn block_with_margins(top: f32, bottom: f32) -> BoxProperties {
        let mut props = BoxProperties {
            display: Display::Block,
            ..BoxProperties::new()
        };
        props.margin.top = Margin::Length(Length::px(top));
        props.margin.bottom = Margin::Length(Length::px(bottom));
        props
    }

    #[test]
    fn negative_margins_are_deducted_from_positive() {
        let mut edge = MarginEdge::new(MarginType::Bottom, BoxId(1), 20.0, false);
        edge.absorb(&MarginEdge::new(MarginType::Top, BoxId(2), -5.0, false));
        edge.absorb(&MarginEdge::new(MarginType::Top, BoxId(3), -8.0, false));
        assert!((edge.size - 12.0).abs() < f32::EPSILON);
        assert_eq!(edge.last_node, BoxId(3));
    }

    #[test]
    fn clearance_blocks_collapsing_with_previous_edge() {
        let mut tree = LayoutTree::new(block_with_margins(0.0, 0.0));
        let body = tree.append_child(LayoutTree::ROOT, block_with_margins(0.0, 0.0));
        let _ = tree.append_child(body, block_with_margins(0.0, 10.0));
        let _ = tree.append_child(
            body,
            BoxProperties {
                clear: Clear::Both,
                ..block_with_margins(10.0, 0.0)
            },
        );
        tree.resolve(&LayoutContext::default());

        let edges = collapse_margins(&tree);
        assert!(edges.iter().all(|e| e.size <= 10.0));
        assert!(edges.iter().any(|e| e.clearance));
    }

    #[test]
    fn float_contents_do_not_separate_siblings() {
        let mut tree = LayoutTree::new(block_with_margins(0.0, 0.0));
        let body = tree.append_child(LayoutTree::ROOT, block_with_margins(0.0, 0.0));
        let a = tree.append_child(
            body,
            BoxProperties {
                min_height: MinSize::Length(Length::px(1.0)),
                ..block_with_margins(0.0, 10.0)
            },
        );
        let floated = tree.append_child(
            body,
            BoxProperties {
                float: Float::Left,
                ..block_with_margins(0.0, 0.0)
            },
        );
        let inner = tree.append_child(floated, block_with_margins(5.0, 5.0));
        let _ = tree.append_child(body, block_with_margins(30.0, 0.0));
        tree.resolve(&LayoutContext::default());

        let edges = collapse_margins(&tree);
        let merged = edges
            .iter()
            .find(|e| e.first_node == a && e.first_type == MarginType::Bottom)
            .map(|e| (e.last_node, e.size));
        assert!(matches!(
            merged,
            Some((node, size)) if node == body && (size - 30.0).abs() < f32::EPSILON
        ));
        let inner_edge = edges.iter().find(|e| e.first_node == inner);
        assert!(
            inner_edge
                .is_some_and(|e| e.last_node == inner && (e.size - 5.0).abs() < f32::EPSILON)
        );
    }
}
