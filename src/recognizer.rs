//! A long-press gesture recognizer.
//!
//! The recognizer does not read a clock on its own. Presses are stamped by
//! the caller and [`LongPressRecognizer::tick`] is fed the current time, so
//! the whole state machine can be driven deterministically.

use iced::time::{Duration, Instant};
use iced::{Point, Rectangle};

/// How long a press must be held before the gesture begins.
pub const DEFAULT_MINIMUM_PRESS_DURATION: Duration = Duration::from_millis(500);
/// How far (in logical pixels) a press may wander before the gesture fails.
pub const ALLOWABLE_MOVEMENT: f32 = 8.0;

/// The state of the gesture currently tracked by a [`LongPressRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// A press is held but the minimum duration has not elapsed yet.
    Possible,
    /// The minimum duration has just been satisfied.
    Began,
    /// The press moved after the gesture began.
    Changed,
}

/// A transition reported by the recognizer, with the press location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// The press has been held for the minimum duration.
    Began(Point),
    /// The press moved after it began.
    Changed(Point),
    /// The press was lifted after it began.
    Ended(Point),
    /// The press was lost after it began.
    Cancelled,
}

/// Tracks the press being recognized.
#[derive(Debug, Clone)]
struct Press {
    /// Where the press started.
    origin: Point,
    /// The latest known location of the press.
    current: Point,
    /// When the press started.
    started_at: Instant,
    state: GestureState,
}

/// Recognizes presses held in place for a minimum duration.
#[derive(Debug, Clone)]
pub struct LongPressRecognizer {
    minimum_press_duration: Duration,
    allowable_movement: f32,
    cancels_touches_in_view: bool,
    requires_exclusive_touch_type: bool,
    /// Bounds of the view the recognizer is attached to.
    view_bounds: Option<Rectangle>,
    press: Option<Press>,
}

impl Default for LongPressRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_PRESS_DURATION)
    }
}

impl LongPressRecognizer {
    /// Creates a recognizer firing after `minimum_press_duration`.
    ///
    /// Touches are never cancelled in the view and any touch type is accepted,
    /// so the view keeps handling its own taps.
    #[must_use]
    pub fn new(minimum_press_duration: Duration) -> Self {
        Self {
            minimum_press_duration,
            allowable_movement: ALLOWABLE_MOVEMENT,
            cancels_touches_in_view: false,
            requires_exclusive_touch_type: false,
            view_bounds: None,
            press: None,
        }
    }

    /// Gets the minimum press duration.
    #[must_use]
    pub fn minimum_press_duration(&self) -> Duration {
        self.minimum_press_duration
    }

    /// Sets the minimum press duration.
    ///
    /// A press already being held is measured against the new value.
    pub fn set_minimum_press_duration(&mut self, duration: Duration) {
        self.minimum_press_duration = duration;
    }

    /// Gets the movement tolerance of a press.
    #[must_use]
    pub fn allowable_movement(&self) -> f32 {
        self.allowable_movement
    }

    /// Whether recognizing a press cancels the touches delivered to the view.
    #[must_use]
    pub fn cancels_touches_in_view(&self) -> bool {
        self.cancels_touches_in_view
    }

    /// Whether all touches of a gesture must be of the same type.
    #[must_use]
    pub fn requires_exclusive_touch_type(&self) -> bool {
        self.requires_exclusive_touch_type
    }

    /// Gets the bounds of the view the recognizer is attached to, if laid out.
    #[must_use]
    pub fn view_bounds(&self) -> Option<Rectangle> {
        self.view_bounds
    }

    /// Records the current bounds of the view the recognizer is attached to.
    pub fn set_view_bounds(&mut self, bounds: Rectangle) {
        self.view_bounds = Some(bounds);
    }

    /// Gets the state of the tracked press, if any.
    #[must_use]
    pub fn state(&self) -> Option<GestureState> {
        self.press.as_ref().map(|press| press.state)
    }

    /// Always allows recognizing alongside `other`.
    ///
    /// The view's own tap handling must keep working while a long press is
    /// being tracked.
    #[must_use]
    pub fn should_recognize_simultaneously_with<G: ?Sized>(&self, _other: &G) -> bool {
        true
    }

    /// Starts tracking a press at `position`.
    ///
    /// Returns the instant at which the press will begin, or `None` when a
    /// press is already being tracked.
    pub fn press(&mut self, position: Point, now: Instant) -> Option<Instant> {
        if self.press.is_some() {
            log::trace!("long press: ignoring overlapping press at {position:?}");
            return None;
        }

        self.press = Some(Press {
            origin: position,
            current: position,
            started_at: now,
            state: GestureState::Possible,
        });
        self.deadline()
    }

    /// Gets the instant at which the tracked press will begin.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.press
            .as_ref()
            .filter(|press| press.state == GestureState::Possible)
            .map(|press| press.started_at + self.minimum_press_duration)
    }

    /// Updates the location of the tracked press.
    ///
    /// Moving further than the tolerance before the press began fails the
    /// gesture silently.
    pub fn moved(&mut self, position: Point) -> Option<Transition> {
        let press = self.press.as_mut()?;
        press.current = position;

        match press.state {
            GestureState::Possible => {
                if press.origin.distance(position) > self.allowable_movement {
                    log::trace!("long press: moved beyond tolerance, gesture failed");
                    self.press = None;
                }
                None
            }
            GestureState::Began | GestureState::Changed => {
                press.state = GestureState::Changed;
                Some(Transition::Changed(position))
            }
        }
    }

    /// Advances the clock, beginning the press once it was held long enough.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        let minimum_press_duration = self.minimum_press_duration;
        let press = self
            .press
            .as_mut()
            .filter(|press| press.state == GestureState::Possible)?;

        if now.saturating_duration_since(press.started_at) < minimum_press_duration {
            return None;
        }

        press.state = GestureState::Began;
        log::trace!("long press: began at {:?}", press.current);
        Some(Transition::Began(press.current))
    }

    /// Ends the tracked press.
    pub fn release(&mut self, position: Point) -> Option<Transition> {
        let press = self.press.take()?;
        match press.state {
            GestureState::Possible => None,
            GestureState::Began | GestureState::Changed => Some(Transition::Ended(position)),
        }
    }

    /// Drops the tracked press.
    pub fn cancel(&mut self) -> Option<Transition> {
        let press = self.press.take()?;
        match press.state {
            GestureState::Possible => None,
            GestureState::Began | GestureState::Changed => Some(Transition::Cancelled),
        }
    }
}
