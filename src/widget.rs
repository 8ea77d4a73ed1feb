//! Wraps the [`Element`] of a tab bar to report long presses on its tabs.

use crate::geometry::contains_point;
use crate::host::TabBarController;
use crate::interaction::{TabBarLongPressInteraction, TabPress};
use iced::advanced::{
    Clipboard, Layout, Shell, Widget,
    layout::{Limits, Node},
    renderer,
    widget::{Operation, Tree, tree},
};
use iced::mouse::{self, Cursor};
use iced::time::Instant;
use iced::{Element, Event, Length, Point, Rectangle, Size, touch, window};
use std::fmt;

/// A tab bar reporting long presses on its tabs.
///
/// Every event reaches the wrapped tab bar first and is never captured, so
/// taps keep selecting tabs while a press is being held.
///
/// # Example
/// ```ignore
/// # use iced_tab_long_press::{LongPress, TabPress};
/// #
/// #[derive(Debug, Clone)]
/// enum Message {
///     TabSelected(usize),
///     TabLongPressed(TabPress),
/// }
///
/// let bar = LongPress::new(tab_bar, &self.long_press)
///     .on_long_press(Message::TabLongPressed);
/// ```
pub struct LongPress<'a, H, Message, Theme = iced::Theme, Renderer = iced::Renderer>
where
    H: TabBarController,
{
    /// The wrapped tab bar.
    content: Element<'a, Message, Theme, Renderer>,
    /// The interaction recognizing presses on the tab bar.
    interaction: &'a TabBarLongPressInteraction<H>,
    /// The function that produces the message when a tab is long-pressed.
    on_long_press: Option<Box<dyn Fn(TabPress) -> Message + 'a>>,
}

impl<H, Message, Theme, Renderer> fmt::Debug for LongPress<'_, H, Message, Theme, Renderer>
where
    H: TabBarController,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LongPress")
            .field("interaction", self.interaction)
            .field("on_long_press", &self.on_long_press.is_some())
            .finish()
    }
}

impl<'a, H, Message, Theme, Renderer> LongPress<'a, H, Message, Theme, Renderer>
where
    H: TabBarController,
{
    /// Creates a new [`LongPress`] around the given tab bar, feeding presses to
    /// `interaction`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        interaction: &'a TabBarLongPressInteraction<H>,
    ) -> Self {
        Self {
            content: content.into(),
            interaction,
            on_long_press: None,
        }
    }

    /// Sets the message that will be produced when a tab is long-pressed.
    ///
    /// The observers registered on the interaction are notified first.
    #[must_use]
    pub fn on_long_press<F>(mut self, on_long_press: F) -> Self
    where
        F: 'a + Fn(TabPress) -> Message,
    {
        self.on_long_press = Some(Box::new(on_long_press));
        self
    }

    /// Starts a press and schedules a redraw for when it will begin.
    fn begin(&self, position: Point, shell: &mut Shell<'_, Message>) {
        if let Some(deadline) = self.interaction.touch_began(position, Instant::now()) {
            shell.request_redraw_at(window::RedrawRequest::At(deadline));
        }
    }
}

impl<H, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for LongPress<'_, H, Message, Theme, Renderer>
where
    H: TabBarController,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(self.content.as_widget())]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn layout(&mut self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation<()>,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let simultaneous = self.interaction.recognizer().is_some_and(|recognizer| {
            recognizer.should_recognize_simultaneously_with(self.content.as_widget())
        });
        if shell.is_event_captured() && !simultaneous {
            return;
        }

        let bounds = layout.bounds();
        self.interaction.set_bar_bounds(bounds);
        let state = tree.state.downcast_mut::<State>();

        let press = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    self.begin(position, shell);
                }
                None
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                let holding = state.finger.is_some()
                    && self
                        .interaction
                        .recognizer()
                        .is_some_and(|recognizer| recognizer.state().is_some());
                if !holding && contains_point(bounds, *position) {
                    state.finger = Some(*id);
                    self.begin(*position, shell);
                }
                None
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.interaction.touch_moved(*position)
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if state.finger == Some(*id) {
                    self.interaction.touch_moved(*position)
                } else {
                    None
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                match cursor.position() {
                    Some(position) => self.interaction.touch_ended(position),
                    None => self.interaction.touch_cancelled(),
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => {
                if state.finger == Some(*id) {
                    state.finger = None;
                    self.interaction.touch_ended(*position)
                } else {
                    None
                }
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.finger == Some(*id) {
                    state.finger = None;
                    self.interaction.touch_cancelled()
                } else {
                    None
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => self.interaction.touch_cancelled(),
            Event::Window(window::Event::RedrawRequested(now)) => {
                let press = self.interaction.tick(*now);
                // The frame may arrive early; keep waiting for the deadline.
                if let Some(deadline) = self.interaction.deadline() {
                    shell.request_redraw_at(window::RedrawRequest::At(deadline));
                }
                press
            }
            _ => None,
        };

        if let (Some(press), Some(on_long_press)) = (press, &self.on_long_press) {
            shell.publish(on_long_press(press));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }
}

/// The local state of a [`LongPress`].
#[derive(Debug, Default)]
struct State {
    /// The finger holding the current press.
    finger: Option<touch::Finger>,
}

impl<'a, H, Message, Theme, Renderer> From<LongPress<'a, H, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    H: 'a + TabBarController,
    Message: 'a,
    Theme: 'a,
    Renderer: 'a + renderer::Renderer,
{
    fn from(long_press: LongPress<'a, H, Message, Theme, Renderer>) -> Self {
        Element::new(long_press)
    }
}
