//! Box tree and vertical margin collapsing.
//!
//! [CSS 2.1 § 8.3.1 Collapsing margins](https://www.w3.org/TR/CSS2/box.html#collapsing-margins)
//!
//! The tree is an arena: nodes live in a `Vec` and refer to each other by
//! [`BoxId`]. [`LayoutTree::resolve`] settles styles and formatting contexts
//! in tree order, after which [`collapse_margins`] can walk the in-flow
//! block boxes in document order.

mod box_tree;
mod context;
mod margin;

pub use box_tree::{BoxId, FormattingContextId, LayoutNode, LayoutTree};
pub use context::LayoutContext;
pub use margin::{
    MarginEdge, MarginType, are_margins_adjoining, collapse_margins, collect_margin_edges,
    create_bottom_margin, create_top_margin, try_collapse_margins,
};
