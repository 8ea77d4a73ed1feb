//! Observers notified when a tab is long-pressed.
//!
//! A delegate advertises what it can handle through
//! [`TabBarLongPressDelegate::as_item_observer`] and
//! [`TabBarLongPressDelegate::as_tab_observer`]; only the capabilities it
//! returns are notified.

use crate::host::TabBarController;
use std::rc::Rc;

/// Receives long presses reported as tab bar items.
pub trait ItemLongPress<H: TabBarController> {
    /// Called when the item at `index` was long-pressed.
    ///
    /// `item` is `None` when the press hit the "more" slot.
    fn did_long_press_item(&self, controller: &H, item: Option<&H::Item>, index: usize);
}

/// Receives long presses reported as tab models.
pub trait TabLongPress<H: TabBarController> {
    /// Called when the tab at `index` was long-pressed.
    ///
    /// `tab` is `None` when the press hit the "more" slot or the controller
    /// has no model for that slot.
    fn did_long_press_tab(&self, controller: &H, tab: Option<&H::Tab>, index: usize);
}

/// A delegate of a [`TabBarLongPressInteraction`](crate::TabBarLongPressInteraction).
///
/// # Example
/// ```ignore
/// struct Logger;
///
/// impl ItemLongPress<Shell> for Logger {
///     fn did_long_press_item(&self, _: &Shell, item: Option<&Item>, index: usize) {
///         println!("{index}: {item:?}");
///     }
/// }
///
/// impl TabBarLongPressDelegate<Shell> for Logger {
///     fn as_item_observer(&self) -> Option<&dyn ItemLongPress<Shell>> {
///         Some(self)
///     }
/// }
/// ```
pub trait TabBarLongPressDelegate<H: TabBarController> {
    /// The item capability of this delegate, if implemented.
    fn as_item_observer(&self) -> Option<&dyn ItemLongPress<H>> {
        None
    }

    /// The tab capability of this delegate, if implemented.
    fn as_tab_observer(&self) -> Option<&dyn TabLongPress<H>> {
        None
    }
}

/// A handler called with the long-pressed item.
pub type LongPressHandler<H> = Rc<dyn Fn(&H, Option<&<H as TabBarController>::Item>, usize)>;

/// A handler called with the long-pressed tab model.
pub type TabLongPressHandler<H> = Rc<dyn Fn(&H, Option<&<H as TabBarController>::Tab>, usize)>;
