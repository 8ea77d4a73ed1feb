// This demo wraps a row of tab buttons in a `LongPress` and pins the tab
// that was held down.

use iced::{
    Element, Length,
    widget::{Button, Column, Row, Text},
};
use std::rc::Rc;

use iced_tab_long_press::{
    BarLayout, ItemPositioning, LongPress, TabBarController, TabBarLongPressInteraction,
    TabPress,
};

const LABELS: [&str; 4] = ["Home", "Search", "Inbox", "Profile"];

fn main() -> iced::Result {
    iced::application(
        LongPressExample::new,
        LongPressExample::update,
        LongPressExample::view,
    )
    .run()
}

#[derive(Debug, Clone)]
enum Message {
    TabSelected(usize),
    TabLongPressed(TabPress),
}

struct Tabs;

impl TabBarController for Tabs {
    type Item = &'static str;
    type Tab = ();

    fn tab_bar_layout(&self) -> Option<BarLayout> {
        Some(BarLayout::new(ItemPositioning::Fill))
    }

    fn items(&self) -> Vec<&'static str> {
        LABELS.to_vec()
    }
}

struct LongPressExample {
    // Owns the controller; the interaction only holds a weak reference.
    _tabs: Rc<Tabs>,
    long_press: TabBarLongPressInteraction<Tabs>,
    active_tab: usize,
    pinned: Option<usize>,
}

impl LongPressExample {
    fn new() -> Self {
        let tabs = Rc::new(Tabs);
        let long_press = TabBarLongPressInteraction::new(&tabs)
            .total_tabs(LABELS.len())
            .on_long_press(|_, item, index| {
                println!("long press on tab {index}: {item:?}");
            });

        Self {
            _tabs: tabs,
            long_press,
            active_tab: 0,
            pinned: None,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::TabSelected(index) => self.active_tab = index,
            Message::TabLongPressed(press) => {
                if !press.is_overflow {
                    self.pinned = Some(press.index);
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let tab_row = LABELS
            .iter()
            .enumerate()
            .fold(Row::new(), |row, (index, label)| {
                let label = if self.pinned == Some(index) {
                    format!("* {label}")
                } else {
                    (*label).to_owned()
                };
                row.push(
                    Button::new(Text::new(label))
                        .on_press(Message::TabSelected(index))
                        .width(Length::Fill),
                )
            })
            .height(40.0);

        Column::new()
            .push(LongPress::new(tab_row, &self.long_press).on_long_press(Message::TabLongPressed))
            .push(Text::new(format!("{} is selected", LABELS[self.active_tab])).size(25))
            .push(Text::new("Hold a tab to pin it").size(16))
            .spacing(10.0)
            .into()
    }
}
