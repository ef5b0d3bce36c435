//! Arena box tree.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use serde::Serialize;

use crate::style::{BoxProperties, Display, Overflow, Size};
use crate::values::Edges;

use super::context::LayoutContext;

/// Index of a node in a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BoxId(pub usize);

/// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
///
/// Identifies one block formatting context. Margins only collapse between
/// boxes that participate in the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FormattingContextId(pub usize);

/// One element's box and the values layout derived for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    /// Declared styles before [`LayoutTree::resolve`], computed styles after.
    pub properties: BoxProperties,
    /// Parent box, `None` for the root.
    pub parent: Option<BoxId>,
    /// Children in document order.
    pub children: Vec<BoxId>,
    /// The formatting context this box participates in.
    pub formatting_context: FormattingContextId,
    /// The formatting context this box's children participate in. Equal to
    /// `formatting_context` unless the box establishes a new one.
    pub child_context: FormattingContextId,
    /// [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
    ///
    /// "An element is called out of flow if it is floated, absolutely
    /// positioned, or is the root element. An element is called in-flow if
    /// it is not out-of-flow."
    ///
    /// The root is treated as in flow so its own margins take part in
    /// collapsing with its children.
    pub in_flow: bool,
    /// False when this box or an ancestor has `display: none`.
    pub generates_box: bool,
    /// Used margins in px (`auto` resolves to 0).
    pub used_margin: Edges<f32>,
    /// Used border widths in px; 0 where the border style is `none` or `hidden`.
    pub used_border: Edges<f32>,
    /// Used padding in px.
    pub used_padding: Edges<f32>,
    /// Used `min-height` in px.
    pub used_min_height: f32,
}

impl LayoutNode {
    fn new(properties: BoxProperties, parent: Option<BoxId>) -> Self {
        Self {
            properties,
            parent,
            children: Vec::new(),
            formatting_context: FormattingContextId(0),
            child_context: FormattingContextId(0),
            in_flow: true,
            generates_box: true,
            used_margin: Edges::default(),
            used_border: Edges::default(),
            used_padding: Edges::default(),
            used_min_height: 0.0,
        }
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "Floats, absolutely positioned elements, block containers (such as
    /// inline-blocks, table-cells, and table-captions) that are not block
    /// boxes, and block boxes with 'overflow' other than 'visible' (except
    /// when that value has been propagated to the viewport) establish new
    /// block formatting contexts for their contents."
    fn establishes_formatting_context(&self) -> bool {
        let props = &self.properties;
        props.float.is_floating()
            || props.position.is_absolutely_positioned()
            || matches!(
                props.display,
                Display::InlineBlock | Display::TableCell | Display::TableCaption
            )
            || props.overflow != Overflow::Visible
    }

    /// True for an in-flow, block-level box.
    #[must_use]
    pub const fn is_in_flow_block(&self) -> bool {
        self.in_flow && self.properties.display.is_block_level()
    }
}

/// A box tree with the root at [`LayoutTree::ROOT`].
///
/// Nodes are appended, never removed, so a parent always has a smaller
/// index than its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    /// The root box.
    pub const ROOT: BoxId = BoxId(0);

    /// A tree holding only the root element's box.
    #[must_use]
    pub fn new(root: BoxProperties) -> Self {
        Self {
            nodes: vec![LayoutNode::new(root, None)],
        }
    }

    /// Add a box as the last child of `parent`.
    pub fn append_child(&mut self, parent: BoxId, properties: BoxProperties) -> BoxId {
        let id = BoxId(self.nodes.len());
        self.nodes.push(LayoutNode::new(properties, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The node for `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not handed out by this tree.
    #[must_use]
    pub fn node(&self, id: BoxId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    /// Number of boxes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of `id` in document order.
    #[must_use]
    pub fn children(&self, id: BoxId) -> &[BoxId] {
        &self.node(id).children
    }

    /// Parent of `id`, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: BoxId) -> Option<BoxId> {
        self.node(id).parent
    }

    /// Settle every box: compute styles against the parent's computed
    /// styles, assign formatting contexts, and resolve the used edge widths
    /// margin collapsing needs.
    ///
    /// Resolving twice is harmless; computed styles no longer carry `inherit`.
    pub fn resolve(&mut self, context: &LayoutContext) {
        let mut next_context = 1;
        for index in 0..self.nodes.len() {
            let (before, rest) = self.nodes.split_at_mut(index);
            let node = &mut rest[0];
            let parent = node.parent.map(|id| &before[id.0]);

            node.properties.compute(parent.map(|p| &p.properties));

            node.generates_box = node.properties.display != Display::None
                && parent.is_none_or(|p| p.generates_box);
            node.formatting_context = parent.map_or(FormattingContextId(0), |p| p.child_context);
            node.child_context = if parent.is_none() || node.establishes_formatting_context() {
                next_context += 1;
                FormattingContextId(next_context - 1)
            } else {
                node.formatting_context
            };
            node.in_flow = node.generates_box
                && (parent.is_none()
                    || (!node.properties.float.is_floating()
                        && !node.properties.position.is_absolutely_positioned()));

            resolve_used_edges(node, context);
        }
    }

    /// [§ 9.4.1](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// The first child of `id` that is in flow.
    #[must_use]
    pub fn first_in_flow_child(&self, id: BoxId) -> Option<BoxId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.node(child).in_flow)
    }

    /// The last child of `id` that is in flow.
    #[must_use]
    pub fn last_in_flow_child(&self, id: BoxId) -> Option<BoxId> {
        self.children(id)
            .iter()
            .rev()
            .copied()
            .find(|&child| self.node(child).in_flow)
    }

    /// The next in-flow sibling after `id`.
    #[must_use]
    pub fn next_in_flow_sibling(&self, id: BoxId) -> Option<BoxId> {
        let siblings = self.children(self.parent(id)?);
        let position = siblings.iter().position(|&sibling| sibling == id)?;
        siblings[position + 1..]
            .iter()
            .copied()
            .find(|&sibling| self.node(sibling).in_flow)
    }

    /// "auto height": the computed `height` is `auto`.
    #[must_use]
    pub fn has_auto_height(&self, id: BoxId) -> bool {
        matches!(self.node(id).properties.height, Size::Auto)
    }

    /// [§ 8.3.1](https://www.w3.org/TR/CSS2/box.html#collapsing-margins)
    ///
    /// "top and bottom margins of a box that does not establish a new block
    /// formatting context and that has zero computed 'min-height', zero or
    /// 'auto' computed 'height', and no in-flow children"
    ///
    /// A box with vertical border or padding keeps its own margins apart.
    #[must_use]
    pub fn is_self_collapsing(&self, id: BoxId) -> bool {
        let node = self.node(id);
        node.child_context == node.formatting_context
            && node.used_min_height <= 0.0
            && node.properties.height.is_zero_or_auto()
            && self.first_in_flow_child(id).is_none()
            && !self.has_top_border_or_padding(id)
            && !self.has_bottom_border_or_padding(id)
    }

    /// "no line boxes, no clearance, no padding and no border separate them"
    #[must_use]
    pub fn has_top_border_or_padding(&self, id: BoxId) -> bool {
        let node = self.node(id);
        node.used_border.top > 0.0 || node.used_padding.top > 0.0
    }

    /// Bottom counterpart of [`has_top_border_or_padding`](Self::has_top_border_or_padding).
    #[must_use]
    pub fn has_bottom_border_or_padding(&self, id: BoxId) -> bool {
        let node = self.node(id);
        node.used_border.bottom > 0.0 || node.used_padding.bottom > 0.0
    }

    /// Box ids in document (pre-)order starting at the root.
    #[must_use]
    pub fn document_order(&self) -> Vec<BoxId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }
}

fn resolve_used_edges(node: &mut LayoutNode, context: &LayoutContext) {
    let LayoutContext {
        em_size: font_size,
        ex_size: x_height,
        containing_block_width,
    } = *context;
    let props = &node.properties;

    let margin = props
        .margin
        .to_array()
        .map(|m| m.to_px(containing_block_width, font_size, x_height));
    let padding = props
        .padding
        .to_array()
        .map(|p| p.to_px(containing_block_width, font_size, x_height));
    let styles = props.border_style.to_array();
    let widths = props.border_width.to_array();
    let border: [f32; 4] = std::array::from_fn(|side| {
        if styles[side].suppresses_width() {
            0.0
        } else {
            widths[side].to_px(font_size, x_height)
        }
    });

    node.used_min_height = props
        .min_height
        .to_px(containing_block_width, font_size, x_height);
    node.used_margin = edges_from(margin);
    node.used_padding = edges_from(padding);
    node.used_border = edges_from(border);
}

const fn edges_from([top, right, bottom, left]: [f32; 4]) -> Edges<f32> {
    Edges {
        top,
        right,
        bottom,
        left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Float, Margin, Position};
    use crate::values::{Length, LengthUnit};

    fn block() -> BoxProperties {
        BoxProperties {
            display: Display::Block,
            ..BoxProperties::new()
        }
    }

    #[test]
    fn root_and_overflow_blocks_establish_contexts() {
        let mut tree = LayoutTree::new(block());
        let plain = tree.append_child(LayoutTree::ROOT, block());
        let clipped = tree.append_child(
            LayoutTree::ROOT,
            BoxProperties {
                overflow: Overflow::Hidden,
                ..block()
            },
        );
        let inner = tree.append_child(clipped, block());
        tree.resolve(&LayoutContext::default());

        let root = tree.node(LayoutTree::ROOT);
        assert_eq!(root.formatting_context, FormattingContextId(0));
        assert_eq!(tree.node(plain).formatting_context, root.child_context);
        assert_eq!(tree.node(clipped).formatting_context, root.child_context);
        assert_ne!(tree.node(inner).formatting_context, root.child_context);
    }

    #[test]
    fn floats_and_absolute_boxes_are_out_of_flow() {
        let mut tree = LayoutTree::new(block());
        let floated = tree.append_child(
            LayoutTree::ROOT,
            BoxProperties {
                float: Float::Left,
                ..block()
            },
        );
        let absolute = tree.append_child(
            LayoutTree::ROOT,
            BoxProperties {
                position: Position::Absolute,
                float: Float::Right,
                ..block()
            },
        );
        let normal = tree.append_child(LayoutTree::ROOT, block());
        tree.resolve(&LayoutContext::default());

        assert!(!tree.node(floated).in_flow);
        assert!(!tree.node(absolute).in_flow);
        assert_eq!(tree.node(absolute).properties.float, Float::None);
        assert_eq!(tree.first_in_flow_child(LayoutTree::ROOT), Some(normal));
        assert_eq!(tree.next_in_flow_sibling(floated), Some(normal));
    }

    #[test]
    fn display_none_hides_the_subtree() {
        let mut tree = LayoutTree::new(block());
        let hidden = tree.append_child(
            LayoutTree::ROOT,
            BoxProperties {
                display: Display::None,
                ..BoxProperties::new()
            },
        );
        let child = tree.append_child(hidden, block());
        tree.resolve(&LayoutContext::default());
        assert!(!tree.node(child).generates_box);
        assert!(!tree.node(child).in_flow);
    }

    #[test]
    fn used_margins_resolve_units_and_percentages() {
        let mut props = block();
        props.margin.top = Margin::Length(Length {
            value: 2.0,
            unit: LengthUnit::Em,
        });
        props.margin.bottom = Margin::Percentage(10.0);
        props.margin.left = Margin::Auto;
        let mut tree = LayoutTree::new(props);
        tree.resolve(&LayoutContext {
            containing_block_width: 300.0,
            ..LayoutContext::default()
        });

        let margin = tree.node(LayoutTree::ROOT).used_margin;
        assert!((margin.top - 32.0).abs() < f32::EPSILON);
        assert!((margin.bottom - 30.0).abs() < 1e-4);
        assert!(margin.left.abs() < f32::EPSILON);
    }

    #[test]
    fn document_order_is_preorder() {
        let mut tree = LayoutTree::new(block());
        let a = tree.append_child(LayoutTree::ROOT, block());
        let b = tree.append_child(LayoutTree::ROOT, block());
        let a1 = tree.append_child(a, block());
        assert_eq!(tree.document_order(), [LayoutTree::ROOT, a, a1, b]);
    }
}
