//! Maps a press location to the tab slot underneath it.
//!
//! The bar is treated as a single horizontal row: once a point is inside the
//! bounds, only its x coordinate matters.

use iced::{Padding, Point, Rectangle};

/// How the items of a tab bar are positioned along the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemPositioning {
    /// Let the host decide; laid out like [`ItemPositioning::Fill`].
    #[default]
    Automatic,
    /// Items share the bar width equally.
    Fill,
    /// Items have a fixed width and spacing and are centered as a block.
    Centered,
}

/// Returns whether `point` lies inside `bounds`, right and bottom edges excluded.
#[must_use]
pub fn contains_point(bounds: Rectangle, point: Point) -> bool {
    point.x >= bounds.x
        && point.x < bounds.x + bounds.width
        && point.y >= bounds.y
        && point.y < bounds.y + bounds.height
}

/// Shrinks `bounds` by the given insets, never below a zero size.
#[must_use]
pub fn inset_by(bounds: Rectangle, insets: Padding) -> Rectangle {
    Rectangle {
        x: bounds.x + insets.left,
        y: bounds.y + insets.top,
        width: (bounds.width - insets.left - insets.right).max(0.0),
        height: (bounds.height - insets.top - insets.bottom).max(0.0),
    }
}

/// Resolves the index of the tab under `point`.
///
/// `bounds` must already be inset by the safe area. `item_width` is only used
/// by [`ItemPositioning::Centered`]; `None` or a non-positive width derives the
/// width from the bounds.
///
/// Returns `None` when there are no items, when the point is outside the
/// bounds, when the bounds have no width, or when the point falls outside
/// every computed slot.
#[must_use]
pub fn resolve_index(
    point: Point,
    bounds: Rectangle,
    visible_count: usize,
    positioning: ItemPositioning,
    item_width: Option<f32>,
    item_spacing: f32,
) -> Option<usize> {
    if visible_count == 0 || bounds.width <= 0.0 || !contains_point(bounds, point) {
        return None;
    }

    let count = visible_count as f32;

    let (origin_x, stride) = match positioning {
        ItemPositioning::Centered => {
            let item_width = item_width
                .filter(|width| *width > 0.0)
                .unwrap_or(bounds.width / count);
            let gaps = visible_count.saturating_sub(1) as f32;
            let total = count * item_width + gaps * item_spacing;
            (
                bounds.center_x() - total / 2.0,
                (item_width + item_spacing).max(1.0),
            )
        }
        ItemPositioning::Fill | ItemPositioning::Automatic => {
            (bounds.x, (bounds.width / count).max(1.0))
        }
    };

    slot_at(point.x - origin_x, stride, visible_count)
}

/// Floor-divides `offset` by `stride`, rejecting slots outside `0..count`.
fn slot_at(offset: f32, stride: f32, count: usize) -> Option<usize> {
    let slot = (offset / stride).floor();
    (slot >= 0.0 && slot < count as f32).then_some(slot as usize)
}

/// Returns whether `index` is the synthetic "more" slot, judged by counts alone.
///
/// Only the last visible slot can be the overflow slot, and only when more
/// tabs are configured than the bar can show.
#[must_use]
pub fn is_overflow_slot(index: usize, visible_count: usize, total_tabs: usize) -> bool {
    visible_count > 0 && index == visible_count - 1 && total_tabs > visible_count
}
