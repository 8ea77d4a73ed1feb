//! Reports long presses on the tabs of a [`TabBarController`].
//!
//! A [`TabBarLongPressInteraction`] owns the [`LongPressRecognizer`] installed
//! on the controller's tab bar. Raw presses are fed to it, and once a press
//! has been held long enough the tab under it is resolved and every
//! registered observer is notified.
//!
//! Nothing here fails loudly: a press on a vanished controller, on an empty
//! bar, or between tabs simply notifies no one.

use crate::delegate::{LongPressHandler, TabBarLongPressDelegate, TabLongPressHandler};
use crate::geometry::{inset_by, is_overflow_slot, resolve_index};
use crate::host::TabBarController;
use crate::recognizer::{DEFAULT_MINIMUM_PRESS_DURATION, LongPressRecognizer, Transition};
use iced::time::{Duration, Instant};
use iced::{Point, Rectangle};
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// The default number of configured tabs.
///
/// With this default, the last slot of a bar showing fewer than 5 items is
/// reported as the "more" slot.
pub const DEFAULT_TOTAL_TABS: usize = 5;

/// A long press that was dispatched to the observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabPress {
    /// The index of the pressed slot.
    pub index: usize,
    /// Whether the slot is the "more" slot rather than a real tab.
    pub is_overflow: bool,
}

/// Installs long-press recognition on the tab bar of a [`TabBarController`].
///
/// # Example
/// ```ignore
/// let interaction = TabBarLongPressInteraction::new(&controller)
///     .minimum_press_duration(Duration::from_millis(350))
///     .total_tabs(7)
///     .on_long_press(|_controller, item, index| {
///         println!("long pressed {index}: {item:?}");
///     });
/// ```
pub struct TabBarLongPressInteraction<H: TabBarController> {
    /// The controller owning the tab bar. Not kept alive by the interaction.
    controller: Weak<H>,
    /// The delegate. Not kept alive by the interaction.
    delegate: RefCell<Option<Weak<dyn TabBarLongPressDelegate<H>>>>,
    minimum_press_duration: Cell<Duration>,
    /// The number of configured tabs, used to detect the "more" slot.
    total_tabs: Cell<usize>,
    /// The recognizer installed on the tab bar, if installed.
    recognizer: RefCell<Option<LongPressRecognizer>>,
    on_long_press: RefCell<Option<LongPressHandler<H>>>,
    on_long_press_tab: RefCell<Option<TabLongPressHandler<H>>>,
}

impl<H: TabBarController> fmt::Debug for TabBarLongPressInteraction<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBarLongPressInteraction")
            .field("controller_alive", &(self.controller.strong_count() > 0))
            .field("minimum_press_duration", &self.minimum_press_duration.get())
            .field("total_tabs", &self.total_tabs.get())
            .field("recognizer", &self.recognizer.borrow())
            .finish()
    }
}

impl<H: TabBarController> TabBarLongPressInteraction<H> {
    /// Creates a [`TabBarLongPressInteraction`] and installs it on the tab bar
    /// of `controller`.
    ///
    /// If the controller has no tab bar nothing is installed and the
    /// interaction never reports anything.
    pub fn new(controller: &Rc<H>) -> Self {
        let interaction = Self {
            controller: Rc::downgrade(controller),
            delegate: RefCell::new(None),
            minimum_press_duration: Cell::new(DEFAULT_MINIMUM_PRESS_DURATION),
            total_tabs: Cell::new(DEFAULT_TOTAL_TABS),
            recognizer: RefCell::new(None),
            on_long_press: RefCell::new(None),
            on_long_press_tab: RefCell::new(None),
        };
        interaction.attach();
        interaction
    }

    /// Sets the minimum press duration.
    #[must_use]
    pub fn minimum_press_duration(self, duration: Duration) -> Self {
        self.set_minimum_press_duration(duration);
        self
    }

    /// Sets the number of configured tabs.
    #[must_use]
    pub fn total_tabs(self, total_tabs: usize) -> Self {
        self.set_total_tabs(total_tabs);
        self
    }

    /// Sets the handler called with the long-pressed item.
    #[must_use]
    pub fn on_long_press<F>(self, handler: F) -> Self
    where
        F: 'static + Fn(&H, Option<&H::Item>, usize),
    {
        self.set_on_long_press(handler);
        self
    }

    /// Sets the handler called with the long-pressed tab model.
    #[must_use]
    pub fn on_long_press_tab<F>(self, handler: F) -> Self
    where
        F: 'static + Fn(&H, Option<&H::Tab>, usize),
    {
        self.set_on_long_press_tab(handler);
        self
    }

    /// Sets the delegate.
    #[must_use]
    pub fn delegate<D>(self, delegate: &Rc<D>) -> Self
    where
        D: TabBarLongPressDelegate<H> + 'static,
    {
        self.set_delegate(delegate);
        self
    }

    /// Installs the recognizer on the controller's tab bar.
    ///
    /// Does nothing if already installed, if the controller is gone, or if
    /// it has no tab bar.
    pub fn attach(&self) {
        if self.is_attached() {
            return;
        }

        let has_tab_bar = self
            .controller
            .upgrade()
            .is_some_and(|controller| controller.tab_bar_layout().is_some());
        if !has_tab_bar {
            log::debug!("long press: no tab bar to install on, skipping");
            return;
        }

        *self.recognizer.borrow_mut() =
            Some(LongPressRecognizer::new(self.minimum_press_duration.get()));
        log::debug!(
            "long press: installed with a minimum press duration of {:?}",
            self.minimum_press_duration.get()
        );
    }

    /// Removes the recognizer from the tab bar, dropping any press in progress.
    pub fn detach(&self) {
        if self.recognizer.borrow_mut().take().is_some() {
            log::debug!("long press: detached");
        }
    }

    /// Whether the recognizer is installed.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.recognizer.borrow().is_some()
    }

    /// Gets the installed recognizer.
    #[must_use]
    pub fn recognizer(&self) -> Option<Ref<'_, LongPressRecognizer>> {
        Ref::filter_map(self.recognizer.borrow(), Option::as_ref).ok()
    }

    /// Gets the controller, if it is still alive.
    #[must_use]
    pub fn controller(&self) -> Option<Rc<H>> {
        self.controller.upgrade()
    }

    /// Gets the minimum press duration.
    #[must_use]
    pub fn get_minimum_press_duration(&self) -> Duration {
        self.minimum_press_duration.get()
    }

    /// Sets the minimum press duration, applied to the installed recognizer
    /// right away.
    pub fn set_minimum_press_duration(&self, duration: Duration) {
        self.minimum_press_duration.set(duration);
        if let Some(recognizer) = self.recognizer.borrow_mut().as_mut() {
            recognizer.set_minimum_press_duration(duration);
        }
        log::debug!("long press: minimum press duration set to {duration:?}");
    }

    /// Gets the number of configured tabs.
    #[must_use]
    pub fn get_total_tabs(&self) -> usize {
        self.total_tabs.get()
    }

    /// Sets the number of configured tabs.
    ///
    /// When it exceeds the number of visible items, the last visible slot is
    /// reported as the "more" slot.
    pub fn set_total_tabs(&self, total_tabs: usize) {
        self.total_tabs.set(total_tabs);
    }

    /// Replaces the handler called with the long-pressed item.
    pub fn set_on_long_press<F>(&self, handler: F)
    where
        F: 'static + Fn(&H, Option<&H::Item>, usize),
    {
        *self.on_long_press.borrow_mut() = Some(Rc::new(handler));
    }

    /// Removes the handler called with the long-pressed item.
    pub fn clear_on_long_press(&self) {
        *self.on_long_press.borrow_mut() = None;
    }

    /// Replaces the handler called with the long-pressed tab model.
    ///
    /// It is only called for controllers exposing tab models.
    pub fn set_on_long_press_tab<F>(&self, handler: F)
    where
        F: 'static + Fn(&H, Option<&H::Tab>, usize),
    {
        *self.on_long_press_tab.borrow_mut() = Some(Rc::new(handler));
    }

    /// Removes the handler called with the long-pressed tab model.
    pub fn clear_on_long_press_tab(&self) {
        *self.on_long_press_tab.borrow_mut() = None;
    }

    /// Sets the delegate. The interaction does not keep it alive.
    pub fn set_delegate<D>(&self, delegate: &Rc<D>)
    where
        D: TabBarLongPressDelegate<H> + 'static,
    {
        let delegate = Rc::downgrade(delegate);
        let delegate: Weak<dyn TabBarLongPressDelegate<H>> = delegate;
        *self.delegate.borrow_mut() = Some(delegate);
    }

    /// Removes the delegate.
    pub fn clear_delegate(&self) {
        *self.delegate.borrow_mut() = None;
    }

    /// Records the current bounds of the tab bar.
    pub fn set_bar_bounds(&self, bounds: Rectangle) {
        if let Some(recognizer) = self.recognizer.borrow_mut().as_mut() {
            recognizer.set_view_bounds(bounds);
        }
    }

    /// Gets the instant at which the press being held will begin.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.recognizer
            .borrow()
            .as_ref()
            .and_then(LongPressRecognizer::deadline)
    }

    /// A press started on the tab bar at `position`.
    ///
    /// Returns the instant at which the press will begin.
    pub fn touch_began(&self, position: Point, now: Instant) -> Option<Instant> {
        self.recognizer
            .borrow_mut()
            .as_mut()
            .and_then(|recognizer| recognizer.press(position, now))
    }

    /// The press moved to `position`.
    pub fn touch_moved(&self, position: Point) -> Option<TabPress> {
        let transition = self
            .recognizer
            .borrow_mut()
            .as_mut()
            .and_then(|recognizer| recognizer.moved(position));
        transition.and_then(|transition| self.handle(transition))
    }

    /// The press was lifted at `position`.
    pub fn touch_ended(&self, position: Point) -> Option<TabPress> {
        let transition = self
            .recognizer
            .borrow_mut()
            .as_mut()
            .and_then(|recognizer| recognizer.release(position));
        transition.and_then(|transition| self.handle(transition))
    }

    /// The press was lost.
    pub fn touch_cancelled(&self) -> Option<TabPress> {
        let transition = self
            .recognizer
            .borrow_mut()
            .as_mut()
            .and_then(LongPressRecognizer::cancel);
        transition.and_then(|transition| self.handle(transition))
    }

    /// Advances the clock of the recognizer.
    ///
    /// Returns the dispatched press if the press being held began.
    pub fn tick(&self, now: Instant) -> Option<TabPress> {
        let transition = self
            .recognizer
            .borrow_mut()
            .as_mut()
            .and_then(|recognizer| recognizer.tick(now));
        transition.and_then(|transition| self.handle(transition))
    }

    fn handle(&self, transition: Transition) -> Option<TabPress> {
        match transition {
            Transition::Began(position) => self.press_began(position),
            Transition::Changed(_) | Transition::Ended(_) | Transition::Cancelled => {
                log::trace!("long press: ignoring {transition:?}");
                None
            }
        }
    }

    /// Resolves the tab under `position` and notifies the observers.
    fn press_began(&self, position: Point) -> Option<TabPress> {
        let Some(controller) = self.controller.upgrade() else {
            log::trace!("long press: controller is gone");
            return None;
        };
        let controller = &*controller;
        let layout = controller.tab_bar_layout()?;
        let items = controller.items();
        if items.is_empty() {
            return None;
        }

        let bounds = self
            .recognizer
            .borrow()
            .as_ref()
            .and_then(LongPressRecognizer::view_bounds)?;
        let visible = items.len();
        let index = resolve_index(
            position,
            inset_by(bounds, layout.safe_area),
            visible,
            layout.positioning,
            layout.item_width,
            layout.item_spacing,
        )?;

        let is_overflow = is_overflow_slot(index, visible, self.total_tabs.get())
            || (index == visible - 1 && controller.is_more_item(&items[index]));
        let item = if is_overflow { None } else { items.get(index) };

        let delegate = self.delegate.borrow().as_ref().and_then(Weak::upgrade);
        let on_long_press = self.on_long_press.borrow().clone();
        let on_long_press_tab = self.on_long_press_tab.borrow().clone();

        let wants_tabs = on_long_press_tab.is_some()
            || delegate
                .as_ref()
                .is_some_and(|delegate| delegate.as_tab_observer().is_some());
        let tabs = if wants_tabs { controller.tabs() } else { None };
        let tab = tabs
            .as_ref()
            .filter(|_| !is_overflow)
            .and_then(|tabs| tabs.get(index));

        log::debug!("long press: tab {index} (overflow: {is_overflow})");

        if let Some(delegate) = &delegate {
            if let Some(observer) = delegate.as_item_observer() {
                observer.did_long_press_item(controller, item, index);
            }
            if let (Some(observer), Some(_)) = (delegate.as_tab_observer(), &tabs) {
                observer.did_long_press_tab(controller, tab, index);
            }
        }
        if let Some(on_long_press) = on_long_press {
            on_long_press(controller, item, index);
        }
        if let (Some(on_long_press_tab), Some(_)) = (on_long_press_tab, &tabs) {
            on_long_press_tab(controller, tab, index);
        }

        Some(TabPress { index, is_overflow })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::{ItemLongPress, TabLongPress};
    use crate::geometry::ItemPositioning;
    use crate::host::BarLayout;
    use iced::Padding;

    type Log = Rc<RefCell<Vec<String>>>;

    struct TabShell {
        layout: Cell<Option<BarLayout>>,
        items: RefCell<Vec<Rc<str>>>,
        more: Rc<str>,
        tabs: RefCell<Option<Vec<&'static str>>>,
    }

    impl TabShell {
        fn with_items(titles: &[&str]) -> Rc<Self> {
            Rc::new(Self {
                layout: Cell::new(Some(BarLayout::new(ItemPositioning::Fill))),
                items: RefCell::new(titles.iter().map(|title| Rc::from(*title)).collect()),
                more: Rc::from("More"),
                tabs: RefCell::new(None),
            })
        }

        fn show_more(&self) {
            let mut items = self.items.borrow_mut();
            items.pop();
            items.push(Rc::clone(&self.more));
        }
    }

    impl TabBarController for TabShell {
        type Item = Rc<str>;
        type Tab = &'static str;

        fn tab_bar_layout(&self) -> Option<BarLayout> {
            self.layout.get()
        }

        fn items(&self) -> Vec<Rc<str>> {
            self.items.borrow().clone()
        }

        fn tabs(&self) -> Option<Vec<&'static str>> {
            self.tabs.borrow().clone()
        }

        fn is_more_item(&self, item: &Rc<str>) -> bool {
            Rc::ptr_eq(item, &self.more)
        }
    }

    struct ItemDelegate(Log);

    impl ItemLongPress<TabShell> for ItemDelegate {
        fn did_long_press_item(&self, _: &TabShell, item: Option<&Rc<str>>, index: usize) {
            self.0
                .borrow_mut()
                .push(format!("delegate item {index} {item:?}"));
        }
    }

    impl TabBarLongPressDelegate<TabShell> for ItemDelegate {
        fn as_item_observer(&self) -> Option<&dyn ItemLongPress<TabShell>> {
            Some(self)
        }
    }

    struct FullDelegate(Log);

    impl ItemLongPress<TabShell> for FullDelegate {
        fn did_long_press_item(&self, _: &TabShell, item: Option<&Rc<str>>, index: usize) {
            self.0
                .borrow_mut()
                .push(format!("delegate item {index} {item:?}"));
        }
    }

    impl TabLongPress<TabShell> for FullDelegate {
        fn did_long_press_tab(&self, _: &TabShell, tab: Option<&&'static str>, index: usize) {
            self.0
                .borrow_mut()
                .push(format!("delegate tab {index} {tab:?}"));
        }
    }

    impl TabBarLongPressDelegate<TabShell> for FullDelegate {
        fn as_item_observer(&self) -> Option<&dyn ItemLongPress<TabShell>> {
            Some(self)
        }

        fn as_tab_observer(&self) -> Option<&dyn TabLongPress<TabShell>> {
            Some(self)
        }
    }

    fn bar_bounds() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 500.0,
            height: 49.0,
        }
    }

    fn installed(controller: &Rc<TabShell>, log: &Log) -> TabBarLongPressInteraction<TabShell> {
        let items = Rc::clone(log);
        let tabs = Rc::clone(log);
        let interaction = TabBarLongPressInteraction::new(controller)
            .on_long_press(move |_, item, index| {
                items
                    .borrow_mut()
                    .push(format!("handler item {index} {item:?}"));
            })
            .on_long_press_tab(move |_, tab, index| {
                tabs.borrow_mut()
                    .push(format!("handler tab {index} {tab:?}"));
            });
        interaction.set_bar_bounds(bar_bounds());
        interaction
    }

    fn long_press<H: TabBarController>(
        interaction: &TabBarLongPressInteraction<H>,
        x: f32,
    ) -> Option<TabPress> {
        let start = Instant::now();
        interaction.touch_began(Point::new(x, 20.0), start);
        let press = interaction.tick(start + interaction.get_minimum_press_duration());
        interaction.touch_ended(Point::new(x, 20.0));
        press
    }

    #[test]
    fn reports_the_pressed_item() {
        let controller = TabShell::with_items(&["A", "B", "C", "D", "E"]);
        let log = Log::default();
        let interaction = installed(&controller, &log);

        assert_eq!(
            long_press(&interaction, 120.0),
            Some(TabPress {
                index: 1,
                is_overflow: false
            })
        );
        assert_eq!(*log.borrow(), vec!["handler item 1 Some(\"B\")"]);
    }

    #[test]
    fn overflow_slot_by_count_reports_no_item() {
        let controller = TabShell::with_items(&["A", "B", "C", "D"]);
        let log = Log::default();
        let interaction = installed(&controller, &log).total_tabs(6);

        assert_eq!(
            long_press(&interaction, 499.0),
            Some(TabPress {
                index: 3,
                is_overflow: true
            })
        );
        assert_eq!(*log.borrow(), vec!["handler item 3 None"]);

        log.borrow_mut().clear();
        long_press(&interaction, 374.0);
        assert_eq!(*log.borrow(), vec!["handler item 2 Some(\"C\")"]);
    }

    #[test]
    fn overflow_slot_by_identity_reports_no_item() {
        let controller = TabShell::with_items(&["A", "B", "C", "D", "E"]);
        controller.show_more();
        let log = Log::default();
        let interaction = installed(&controller, &log);
        assert_eq!(interaction.get_total_tabs(), DEFAULT_TOTAL_TABS);

        assert_eq!(
            long_press(&interaction, 450.0),
            Some(TabPress {
                index: 4,
                is_overflow: true
            })
        );
        assert_eq!(*log.borrow(), vec!["handler item 4 None"]);
    }

    #[test]
    fn empty_bar_notifies_no_one() {
        let controller = TabShell::with_items(&[]);
        let log = Log::default();
        let interaction = installed(&controller, &log);

        assert!(interaction.is_attached());
        for x in [0.0, 250.0, 499.0] {
            assert_eq!(long_press(&interaction, x), None);
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn missing_tab_bar_skips_installation() {
        let controller = TabShell::with_items(&["A", "B"]);
        controller.layout.set(None);
        let log = Log::default();
        let interaction = installed(&controller, &log);

        assert!(!interaction.is_attached());
        assert!(interaction.recognizer().is_none());
        assert_eq!(
            interaction.touch_began(Point::new(10.0, 10.0), Instant::now()),
            None
        );
        assert_eq!(long_press(&interaction, 10.0), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn does_not_keep_the_controller_alive() {
        let controller = TabShell::with_items(&["A", "B", "C"]);
        let log = Log::default();
        let interaction = installed(&controller, &log);
        assert_eq!(Rc::strong_count(&controller), 1);

        let start = Instant::now();
        interaction.touch_began(Point::new(10.0, 10.0), start);
        drop(controller);

        assert!(interaction.controller().is_none());
        assert_eq!(
            interaction.tick(start + DEFAULT_MINIMUM_PRESS_DURATION),
            None,
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn presses_between_centered_tabs_resolve_to_nothing() {
        let controller = TabShell::with_items(&["A", "B", "C"]);
        controller.layout.set(Some(
            BarLayout::new(ItemPositioning::Centered)
                .item_width(40.0)
                .item_spacing(10.0),
        ));
        let log = Log::default();
        let interaction = installed(&controller, &log);
        interaction.set_bar_bounds(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 49.0,
        });

        assert_eq!(long_press(&interaction, 79.0), None);
        assert_eq!(long_press(&interaction, 230.0), None);
        assert_eq!(
            long_press(&interaction, 130.0).map(|press| press.index),
            Some(1),
        );
        assert_eq!(*log.borrow(), vec!["handler item 1 Some(\"B\")"]);
    }

    #[test]
    fn presses_in_the_safe_area_resolve_to_nothing() {
        let controller = TabShell::with_items(&["A", "B"]);
        controller.layout.set(Some(
            BarLayout::new(ItemPositioning::Automatic).safe_area(Padding {
                top: 0.0,
                right: 50.0,
                bottom: 0.0,
                left: 50.0,
            }),
        ));
        let log = Log::default();
        let interaction = installed(&controller, &log);

        assert_eq!(long_press(&interaction, 25.0), None);
        assert_eq!(long_press(&interaction, 475.0), None);
        assert_eq!(
            long_press(&interaction, 50.0).map(|press| press.index),
            Some(0),
        );
        assert_eq!(
            long_press(&interaction, 449.0).map(|press| press.index),
            Some(1),
        );
    }

    #[test]
    fn only_the_began_transition_notifies() {
        let controller = TabShell::with_items(&["A", "B"]);
        let log = Log::default();
        let interaction = installed(&controller, &log);

        let start = Instant::now();
        assert_eq!(
            interaction.touch_began(Point::new(10.0, 10.0), start),
            Some(start + DEFAULT_MINIMUM_PRESS_DURATION)
        );
        assert_eq!(
            interaction.deadline(),
            Some(start + DEFAULT_MINIMUM_PRESS_DURATION),
        );
        assert_eq!(interaction.tick(start), None);
        assert!(interaction.tick(start + DEFAULT_MINIMUM_PRESS_DURATION).is_some());
        assert_eq!(interaction.touch_moved(Point::new(300.0, 10.0)), None);
        assert_eq!(
            interaction.tick(start + DEFAULT_MINIMUM_PRESS_DURATION * 2),
            None,
        );
        assert_eq!(interaction.touch_cancelled(), None);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn minimum_press_duration_applies_to_the_next_press() {
        let controller = TabShell::with_items(&["A", "B"]);
        let log = Log::default();
        let interaction = installed(&controller, &log);

        let shorter = Duration::from_millis(150);
        interaction.set_minimum_press_duration(shorter);
        assert_eq!(
            interaction
                .recognizer()
                .map(|recognizer| recognizer.minimum_press_duration()),
            Some(shorter)
        );

        let start = Instant::now();
        interaction.touch_began(Point::new(10.0, 10.0), start);
        assert!(interaction.tick(start + shorter).is_some());
    }

    #[test]
    fn builder_duration_is_installed() {
        let controller = TabShell::with_items(&["A"]);
        let interaction = TabBarLongPressInteraction::new(&controller)
            .minimum_press_duration(Duration::from_secs(1));
        let recognizer = interaction.recognizer();
        assert_eq!(
            recognizer.map(|recognizer| recognizer.minimum_press_duration()),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn delegate_capabilities_are_detected() {
        let controller = TabShell::with_items(&["A", "B"]);
        let log = Log::default();
        let interaction = installed(&controller, &log).total_tabs(2);
        let delegate = Rc::new(ItemDelegate(Rc::clone(&log)));
        interaction.set_delegate(&delegate);

        // Tab models are only reported by controllers that have them.
        long_press(&interaction, 10.0);
        assert_eq!(
            *log.borrow(),
            vec!["delegate item 0 Some(\"A\")", "handler item 0 Some(\"A\")"]
        );

        log.borrow_mut().clear();
        *controller.tabs.borrow_mut() = Some(vec!["tab a", "tab b"]);
        long_press(&interaction, 260.0);
        assert_eq!(
            *log.borrow(),
            vec![
                "delegate item 1 Some(\"B\")",
                "handler item 1 Some(\"B\")",
                "handler tab 1 Some(\"tab b\")",
            ]
        );
    }

    #[test]
    fn default_total_marks_the_last_slot_of_a_short_bar() {
        let controller = TabShell::with_items(&["A", "B", "C"]);
        let log = Log::default();
        let interaction = installed(&controller, &log);

        assert_eq!(
            long_press(&interaction, 400.0),
            Some(TabPress {
                index: 2,
                is_overflow: true
            })
        );
        assert_eq!(*log.borrow(), vec!["handler item 2 None"]);

        log.borrow_mut().clear();
        interaction.set_total_tabs(3);
        long_press(&interaction, 400.0);
        assert_eq!(*log.borrow(), vec!["handler item 2 Some(\"C\")"]);
    }

    #[test]
    fn observers_are_notified_in_a_fixed_order() {
        let controller = TabShell::with_items(&["A", "B", "C"]);
        *controller.tabs.borrow_mut() = Some(vec!["tab a", "tab b", "tab c"]);
        let log = Log::default();
        let delegate = Rc::new(FullDelegate(Rc::clone(&log)));
        let interaction = installed(&controller, &log)
            .total_tabs(4)
            .delegate(&delegate);

        long_press(&interaction, 499.0);
        assert_eq!(
            *log.borrow(),
            vec![
                "delegate item 2 None",
                "delegate tab 2 None",
                "handler item 2 None",
                "handler tab 2 None",
            ]
        );
    }

    #[test]
    fn does_not_keep_the_delegate_alive() {
        let controller = TabShell::with_items(&["A"]);
        let log = Log::default();
        let delegate = Rc::new(ItemDelegate(Rc::clone(&log)));
        let interaction = TabBarLongPressInteraction::new(&controller).delegate(&delegate);
        interaction.set_bar_bounds(bar_bounds());
        assert_eq!(Rc::strong_count(&delegate), 1);

        drop(delegate);
        assert!(long_press(&interaction, 10.0).is_some());
        assert!(log.borrow().is_empty());

        let delegate = Rc::new(ItemDelegate(Rc::clone(&log)));
        interaction.set_delegate(&delegate);
        interaction.clear_delegate();
        long_press(&interaction, 10.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn handlers_can_be_replaced_from_inside_a_handler() {
        let controller = TabShell::with_items(&["A", "B"]);
        *controller.tabs.borrow_mut() = Some(vec!["tab a", "tab b"]);
        let interaction = Rc::new(TabBarLongPressInteraction::new(&controller).total_tabs(2));
        interaction.set_bar_bounds(bar_bounds());

        let calls = Rc::new(Cell::new(0));
        let weak = Rc::downgrade(&interaction);
        let counted = Rc::clone(&calls);
        interaction.set_on_long_press_tab(move |_, _, _| {
            counted.set(counted.get() + 1);
            if let Some(interaction) = weak.upgrade() {
                interaction.set_minimum_press_duration(Duration::from_millis(50));
                interaction.clear_on_long_press_tab();
            }
        });

        assert!(long_press(&interaction, 10.0).is_some());
        assert!(long_press(&interaction, 10.0).is_some());
        assert_eq!(calls.get(), 1);
        assert_eq!(
            interaction.get_minimum_press_duration(),
            Duration::from_millis(50)
        );

        let replaced = Rc::new(Cell::new(0));
        let counted = Rc::clone(&replaced);
        interaction.set_on_long_press_tab(move |_, tab, _| {
            assert_eq!(tab, Some(&"tab b"));
            counted.set(counted.get() + 1);
        });
        long_press(&interaction, 300.0);
        assert_eq!(replaced.get(), 1);
    }

    #[test]
    fn detach_stops_recognition_until_reattached() {
        let controller = TabShell::with_items(&["A", "B"]);
        let log = Log::default();
        let interaction = installed(&controller, &log);

        interaction.detach();
        assert!(!interaction.is_attached());
        assert_eq!(long_press(&interaction, 10.0), None);

        interaction.attach();
        interaction.set_bar_bounds(bar_bounds());
        assert!(long_press(&interaction, 10.0).is_some());
        assert_eq!(log.borrow().len(), 1);
    }
}
