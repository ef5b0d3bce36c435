//! Integration tests for display blockification and margin collapsing on
//! resolved box trees.

use kestrel_css::layout::{
    BoxId, LayoutContext, LayoutTree, MarginEdge, MarginType, collapse_margins,
    collect_margin_edges,
};
use kestrel_css::parser::{apply_declaration, parse_declaration_block};
use kestrel_css::style::{BoxProperties, Display, Float};

fn styled(declarations: &str) -> BoxProperties {
    let mut props = BoxProperties::new();
    for (name, tokens) in parse_declaration_block(declarations) {
        assert!(
            apply_declaration(&mut props, &name, &tokens).is_applied(),
            "{name} rejected"
        );
    }
    props
}

fn resolved(tree: &mut LayoutTree) -> Vec<MarginEdge> {
    tree.resolve(&LayoutContext::default());
    collapse_margins(tree)
}

fn edge_from(edges: &[MarginEdge], node: BoxId, side: MarginType) -> &MarginEdge {
    edges
        .iter()
        .find(|e| e.first_node == node && e.first_type == side)
        .unwrap_or_else(|| panic!("no edge starts at {side} of {node:?}: {edges:#?}"))
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// root > body (padded) > children
fn padded_body(children: &[&str]) -> (LayoutTree, Vec<BoxId>) {
    let mut tree = LayoutTree::new(styled("display: block"));
    let body = tree.append_child(LayoutTree::ROOT, styled("display: block; padding: 1px"));
    let ids = children
        .iter()
        .map(|decls| tree.append_child(body, styled(decls)))
        .collect();
    (tree, ids)
}

#[test]
fn test_sibling_bottom_and_top_margins_collapse() {
    let (mut tree, ids) = padded_body(&[
        "display: block; height: 10px; margin-bottom: 10px",
        "display: block; height: 10px; margin-top: 20px",
        "display: block; height: 10px",
    ]);
    let edges = resolved(&mut tree);

    let merged = edge_from(&edges, ids[0], MarginType::Bottom);
    assert_eq!(merged.last_node, ids[1]);
    assert_eq!(merged.last_type, MarginType::Top);
    assert!(approx(merged.size, 20.0));
    assert!(merged.is_collapsed());

    // A's own top and bottom stay apart: it has a height.
    let top = edge_from(&edges, ids[0], MarginType::Top);
    assert!(!top.is_collapsed());
    assert_eq!(collect_margin_edges(&tree).len(), edges.len() + 2);
}

#[test]
fn test_empty_siblings_collapse_through() {
    let (mut tree, ids) = padded_body(&[
        "display: block; margin-bottom: 10px",
        "display: block; margin-top: 20px",
        "display: block",
    ]);
    let edges = resolved(&mut tree);

    let merged = edge_from(&edges, ids[0], MarginType::Top);
    assert_eq!(merged.last_node, ids[2]);
    assert_eq!(merged.last_type, MarginType::Bottom);
    assert!(approx(merged.size, 20.0));
}

#[test]
fn test_negative_margin_is_deducted() {
    let (mut tree, ids) = padded_body(&[
        "display: block; height: 10px; margin-bottom: 20px",
        "display: block; height: 10px; margin-top: -5px",
    ]);
    let edges = resolved(&mut tree);
    assert!(approx(edge_from(&edges, ids[0], MarginType::Bottom).size, 15.0));
}

#[test]
fn test_parent_and_first_child_top_margins_collapse() {
    let mut tree = LayoutTree::new(styled("display: block"));
    let parent = tree.append_child(LayoutTree::ROOT, styled("display: block; margin-top: 15px"));
    let child = tree.append_child(parent, styled("display: block; margin-top: 25px; height: 5px"));
    let edges = resolved(&mut tree);

    let merged = edge_from(&edges, parent, MarginType::Top);
    assert_eq!(merged.last_node, child);
    assert_eq!(merged.last_type, MarginType::Top);
    assert!(approx(merged.size, 25.0));
}

#[test]
fn test_padding_separates_parent_and_child() {
    let mut tree = LayoutTree::new(styled("display: block"));
    let parent = tree.append_child(
        LayoutTree::ROOT,
        styled("display: block; margin-top: 15px; padding-top: 1px"),
    );
    let child = tree.append_child(parent, styled("display: block; margin-top: 25px; height: 5px"));
    let edges = resolved(&mut tree);

    assert!(!edge_from(&edges, parent, MarginType::Top).is_collapsed());
    assert!(approx(edge_from(&edges, child, MarginType::Top).size, 25.0));
}

#[test]
fn test_border_separates_only_when_visible() {
    let mut tree = LayoutTree::new(styled("display: block"));
    let hidden_border = tree.append_child(
        LayoutTree::ROOT,
        styled("display: block; border-top-width: 4px"),
    );
    let hidden_child = tree.append_child(hidden_border, styled("display: block; height: 5px"));
    let solid_border = tree.append_child(
        LayoutTree::ROOT,
        styled("display: block; border-top: 4px solid"),
    );
    let solid_child = tree.append_child(solid_border, styled("display: block; height: 5px"));
    let edges = resolved(&mut tree);

    // Behind a `none`-style border the child's top margin joins its parent's.
    let merged = edge_from(&edges, hidden_border, MarginType::Top);
    assert_eq!(merged.last_node, hidden_child);
    assert_eq!(merged.last_type, MarginType::Top);
    assert!(
        edges
            .iter()
            .all(|e| !(e.first_node == hidden_child && e.first_type == MarginType::Top))
    );

    // A visible border keeps the child's top margin on its own.
    assert!(!edge_from(&edges, solid_child, MarginType::Top).is_collapsed());
}

#[test]
fn test_fixed_height_parent_keeps_bottom_margin() {
    let mut tree = LayoutTree::new(styled("display: block"));
    let fixed = tree.append_child(LayoutTree::ROOT, styled("display: block; height: 50px"));
    let inner = tree.append_child(fixed, styled("display: block; height: 5px; margin-bottom: 8px"));
    let auto = tree.append_child(LayoutTree::ROOT, styled("display: block"));
    let inner_auto = tree.append_child(
        auto,
        styled("display: block; height: 5px; margin-bottom: 8px"),
    );
    let edges = resolved(&mut tree);

    assert!(!edge_from(&edges, inner, MarginType::Bottom).is_collapsed());
    let merged = edge_from(&edges, inner_auto, MarginType::Bottom);
    assert_eq!(merged.last_node, auto);
    assert!(approx(merged.size, 8.0));
}

#[test]
fn test_new_formatting_context_stops_collapsing() {
    let mut tree = LayoutTree::new(styled("display: block"));
    let clipped = tree.append_child(LayoutTree::ROOT, styled("display: block; overflow: hidden"));
    let child = tree.append_child(clipped, styled("display: block; margin-top: 5px; height: 5px"));
    tree.resolve(&LayoutContext::default());

    assert_ne!(
        tree.node(clipped).formatting_context,
        tree.node(child).formatting_context
    );
    let edges = collapse_margins(&tree);
    assert!(!edge_from(&edges, clipped, MarginType::Top).is_collapsed());
}

#[test]
fn test_clearance_stops_collapsing_with_previous_sibling() {
    let (mut tree, ids) = padded_body(&[
        "display: block; height: 10px; margin-bottom: 10px",
        "display: block; height: 10px; margin-top: 20px; clear: left",
    ]);
    let edges = resolved(&mut tree);
    assert!(!edge_from(&edges, ids[0], MarginType::Bottom).is_collapsed());
    assert!(edge_from(&edges, ids[1], MarginType::Top).clearance);
}

#[test]
fn test_em_margins_use_context_font_size() {
    let (mut tree, ids) = padded_body(&["display: block; margin-bottom: 2em; margin-top: 50%"]);
    tree.resolve(&LayoutContext {
        containing_block_width: 200.0,
        ..LayoutContext::with_em_size(10.0)
    });
    let node = tree.node(ids[0]);
    assert!(approx(node.used_margin.bottom, 20.0));
    assert!(approx(node.used_margin.top, 100.0));
}

#[test]
fn test_hidden_boxes_have_no_edges() {
    let (mut tree, ids) = padded_body(&["display: none; margin-top: 40px"]);
    let edges = resolved(&mut tree);
    assert!(edges.iter().all(|e| e.first_node != ids[0] && e.last_node != ids[0]));
}

#[test]
fn test_root_inline_block_is_blockified() {
    let mut tree = LayoutTree::new(styled("display: inline-block"));
    let child = tree.append_child(LayoutTree::ROOT, styled("display: inline-block"));
    tree.resolve(&LayoutContext::default());

    assert_eq!(tree.node(LayoutTree::ROOT).properties.display, Display::Block);
    assert_eq!(tree.node(child).properties.display, Display::InlineBlock);
}

#[test]
fn test_floats_are_blockified() {
    let mut tree = LayoutTree::new(styled("display: block"));
    let table = tree.append_child(LayoutTree::ROOT, styled("display: inline-table; float: right"));
    let item = tree.append_child(LayoutTree::ROOT, styled("display: list-item; float: left"));
    tree.resolve(&LayoutContext::default());

    assert_eq!(tree.node(table).properties.display, Display::Table);
    assert_eq!(tree.node(item).properties.display, Display::ListItem);
}

#[test]
fn test_absolute_position_forces_float_none() {
    let mut tree = LayoutTree::new(styled("display: block"));
    let positioned = tree.append_child(
        LayoutTree::ROOT,
        styled("position: absolute; float: left; display: table-row"),
    );
    let hidden = tree.append_child(LayoutTree::ROOT, styled("position: fixed; display: none"));
    tree.resolve(&LayoutContext::default());

    let node = tree.node(positioned);
    assert_eq!(node.properties.float, Float::None);
    assert_eq!(node.properties.display, Display::Block);
    assert!(!node.in_flow);
    assert_eq!(tree.node(hidden).properties.display, Display::None);
}

#[test]
fn test_display_inherit_takes_parent_computed_value() {
    let mut tree = LayoutTree::new(styled("display: inline"));
    let child = tree.append_child(LayoutTree::ROOT, styled("display: inherit"));
    tree.resolve(&LayoutContext::default());
    // the parent computed to block at the root
    assert_eq!(tree.node(child).properties.display, Display::Block);
}
