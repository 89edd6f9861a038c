//! Flex layout of a [`View`] tree on top of taffy.
//!
//! Lengths in modifiers are dp; results are physical px (`dp * density`).
//! Rows run right-to-left when the ambient text direction is RTL.

use selector_core::*;
use taffy::prelude::{
    AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage,
    LengthPercentageAuto, NodeId, Position, Style, TaffyTree, auto, length, percent,
};

/// A tap target reported by layout: every node with `clickable()` and a tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegion {
    pub tag: u64,
    pub rect: Rect,
}

/// Absolute rect of one laid out node, in depth-first order.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    pub id: ViewId,
    pub tag: Option<u64>,
    pub rect: Rect,
}

#[derive(Clone, Debug, Default)]
pub struct LayoutResult {
    pub nodes: Vec<LayoutNode>,
    pub hit_regions: Vec<HitRegion>,
    /// dp→px factor the layout ran with.
    pub scale: f32,
}

impl LayoutResult {
    pub fn rect_of_tag(&self, tag: u64) -> Option<Rect> {
        self.nodes
            .iter()
            .find(|n| n.tag == Some(tag))
            .map(|n| n.rect)
    }

    /// Topmost hit region under `p` (later nodes paint above earlier ones).
    pub fn hit_test(&self, p: Vec2) -> Option<u64> {
        self.hit_regions
            .iter()
            .rev()
            .find(|r| r.rect.contains(p))
            .map(|r| r.tag)
    }
}

fn style_for(view: &View, px: &dyn Fn(f32) -> f32) -> Style {
    let m = &view.modifier;
    let mut s = Style {
        display: Display::Flex,
        ..Default::default()
    };

    s.flex_direction = match view.kind {
        ViewKind::Row if text_direction().is_rtl() => FlexDirection::RowReverse,
        ViewKind::Row => FlexDirection::Row,
        _ => FlexDirection::Column,
    };

    // `flex: n` semantics: siblings split free space by weight alone.
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
        s.flex_basis = length(0.0);
    }
    if let Some(j) = m.justify_content {
        s.justify_content = Some(j);
    }
    if let Some(a) = m.align_items {
        s.align_items = Some(a);
    }

    if m.fill_max_w {
        s.size.width = percent(1.0);
    }
    if let Some(w) = m.width {
        s.size.width = length(px(w.max(0.0)));
    }
    if let Some(h) = m.height {
        s.size.height = length(px(h.max(0.0)));
    }

    if let Some(p) = m.padding {
        let v: LengthPercentage = length(px(p));
        s.padding = taffy::geometry::Rect {
            left: v,
            right: v,
            top: v,
            bottom: v,
        };
    }
    if let Some(b) = &m.border {
        let v: LengthPercentage = length(px(b.width.max(0.0)));
        s.border = taffy::geometry::Rect {
            left: v,
            right: v,
            top: v,
            bottom: v,
        };
    }

    if let Some(PositionType::Absolute) = m.position_type {
        s.position = Position::Absolute;
        let inset = |v: Option<f32>| -> LengthPercentageAuto {
            v.map(|v| length(px(v))).unwrap_or_else(auto)
        };
        s.inset = taffy::geometry::Rect {
            left: inset(m.offset_left),
            right: inset(m.offset_right),
            top: inset(m.offset_top),
            bottom: auto(),
        };
    }

    if let ViewKind::Text { line_height, .. } = view.kind {
        let h: Dimension = length(px(line_height));
        s.size.height = h;
    }

    s
}

fn build(
    taffy: &mut TaffyTree<()>,
    view: &View,
    px: &dyn Fn(f32) -> f32,
) -> Result<NodeId, SelectorError> {
    let style = style_for(view, px);
    let children = view
        .children
        .iter()
        .map(|c| build(taffy, c, px))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(if children.is_empty() {
        taffy.new_leaf(style)?
    } else {
        taffy.new_with_children(style, &children)?
    })
}

fn collect(
    taffy: &TaffyTree<()>,
    view: &View,
    node: NodeId,
    origin: Vec2,
    px: &dyn Fn(f32) -> f32,
    out: &mut LayoutResult,
) -> Result<(), SelectorError> {
    let l = taffy.layout(node)?;
    let mut rect = Rect::new(
        origin.x + l.location.x,
        origin.y + l.location.y,
        l.size.width,
        l.size.height,
    );
    if let Some(t) = view.modifier.transform {
        rect = rect.translate(Vec2::new(px(t.translate_x), px(t.translate_y)));
    }

    out.nodes.push(LayoutNode {
        id: view.id,
        tag: view.modifier.tag,
        rect,
    });
    if view.modifier.click
        && let Some(tag) = view.modifier.tag
    {
        out.hit_regions.push(HitRegion { tag, rect });
    }

    let kids = taffy.children(node)?;
    for (child, child_node) in view.children.iter().zip(kids) {
        collect(taffy, child, child_node, Vec2::new(rect.x, rect.y), px, out)?;
    }
    Ok(())
}

/// Lay out `root` inside `available_width` dp of horizontal space.
///
/// Height is unconstrained; nodes size to their content or explicit heights.
pub fn layout(root: &View, available_width: f32) -> Result<LayoutResult, SelectorError> {
    let scale = density().scale;
    let px = |dp: f32| dp * scale;

    // Stamp ids depth-first so results can be matched back to views.
    fn stamp(v: &mut View, next: &mut u64) {
        v.id = *next;
        *next += 1;
        for c in &mut v.children {
            stamp(c, next);
        }
    }
    let mut root = root.clone();
    stamp(&mut root, &mut 1);

    let mut taffy: TaffyTree<()> = TaffyTree::new();
    let root_node = build(&mut taffy, &root, &px)?;
    taffy.compute_layout(
        root_node,
        taffy::geometry::Size {
            width: AvailableSpace::Definite(px(available_width.max(0.0))),
            height: AvailableSpace::MaxContent,
        },
    )?;

    let mut out = LayoutResult {
        scale,
        ..Default::default()
    };
    collect(&taffy, &root, root_node, Vec2::ZERO, &px, &mut out)?;
    Ok(out)
}
