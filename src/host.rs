//! The tab bar controller a long-press interaction is installed on.

use crate::geometry::ItemPositioning;
use iced::Padding;

/// Layout parameters of a tab bar, as configured by its host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarLayout {
    /// How the items are positioned along the bar.
    pub positioning: ItemPositioning,
    /// The fixed item width used by [`ItemPositioning::Centered`].
    ///
    /// `None` derives the width from the bar bounds.
    pub item_width: Option<f32>,
    /// The spacing between items used by [`ItemPositioning::Centered`].
    pub item_spacing: f32,
    /// The safe-area insets of the bar; presses inside them hit no tab.
    pub safe_area: Padding,
}

impl BarLayout {
    /// Creates a [`BarLayout`] with the given positioning.
    #[must_use]
    pub fn new(positioning: ItemPositioning) -> Self {
        Self {
            positioning,
            ..Self::default()
        }
    }

    /// Sets the fixed item width.
    #[must_use]
    pub fn item_width(mut self, width: f32) -> Self {
        self.item_width = Some(width);
        self
    }

    /// Sets the spacing between items.
    #[must_use]
    pub fn item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Sets the safe-area insets.
    #[must_use]
    pub fn safe_area(mut self, insets: impl Into<Padding>) -> Self {
        self.safe_area = insets.into();
        self
    }
}

/// A controller owning a tab bar.
///
/// The interaction only holds a weak reference to its controller, so the
/// methods take `&self`; use interior mutability for anything that changes
/// while the interaction is installed.
pub trait TabBarController {
    /// The items shown in the tab bar.
    type Item: Clone;
    /// The tab models behind the items, for controllers that have them.
    type Tab: Clone;

    /// The layout of the tab bar, or `None` when the controller has no tab bar.
    fn tab_bar_layout(&self) -> Option<BarLayout>;

    /// The items currently visible in the tab bar, in order.
    ///
    /// The last item may be the controller's "more" item.
    fn items(&self) -> Vec<Self::Item>;

    /// The tab models, one per visible slot, if the controller has them.
    fn tabs(&self) -> Option<Vec<Self::Tab>> {
        None
    }

    /// Whether `item` is the reserved item opening the list of hidden tabs.
    fn is_more_item(&self, _item: &Self::Item) -> bool {
        false
    }
}
