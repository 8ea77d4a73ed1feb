//! Long-press recognition for the tabs of a tab bar.
//!
//! A [`TabBarLongPressInteraction`] is installed on a [`TabBarController`]
//! and resolves which tab a held press landed on, taking the bar's
//! [`ItemPositioning`] and the "more" slot into account. Wrap the tab bar's
//! [`Element`](iced::Element) in a [`LongPress`] to feed it iced events.
#![warn(missing_docs)]

pub mod delegate;
pub mod geometry;
pub mod host;
pub mod interaction;
pub mod recognizer;
pub mod widget;

pub use delegate::{
    ItemLongPress, LongPressHandler, TabBarLongPressDelegate, TabLongPress, TabLongPressHandler,
};
pub use geometry::{ItemPositioning, resolve_index};
pub use host::{BarLayout, TabBarController};
pub use interaction::{DEFAULT_TOTAL_TABS, TabBarLongPressInteraction, TabPress};
pub use recognizer::{
    ALLOWABLE_MOVEMENT, DEFAULT_MINIMUM_PRESS_DURATION, GestureState, LongPressRecognizer,
    Transition,
};
pub use widget::LongPress;
