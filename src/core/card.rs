// LogCard - core/card.rs
//
// Builds the styled "log entry card" fragment for a single event.
// Core layer: infallible, stateless, no I/O. Every call returns a fresh,
// independently owned tree.
//
// Shape (classes in util::constants):
//
//   div.container
//   ├── div.content
//   │   ├── div.title-row
//   │   │   ├── h3.title      title + ":&nbsp;&nbsp;"   (markup)
//   │   │   └── p.message     message                   (markup, TitleRow)
//   │   ├── div.mt-4          message wrapper           (empty unless Wrapper)
//   │   └── p.time            time                      (escaped text)
//   └── hr.divider

use crate::core::markup::{Element, Node};
use crate::core::model::{LogEntry, MessagePlacement};
use crate::util::constants::{
    CARD_CONTAINER_CLASSES, CARD_CONTENT_CLASSES, CARD_DIVIDER_CLASSES,
    CARD_MESSAGE_CLASSES, CARD_MESSAGE_WRAPPER_CLASSES, CARD_TIME_CLASSES,
    CARD_TITLE_CLASSES, CARD_TITLE_ROW_CLASSES, CARD_TITLE_SUFFIX,
};
use std::fmt;

/// A detached card fragment. The caller decides where (or whether) to insert it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCard {
    root: Element,
    placement: MessagePlacement,
}

/// Build a card with the default message placement.
pub fn build(title: &str, time: &str, message: &str) -> LogCard {
    assemble(title, time, message, MessagePlacement::default())
}

/// Build a card for a stored entry with an explicit message placement.
pub fn build_with(entry: &LogEntry, placement: MessagePlacement) -> LogCard {
    assemble(&entry.title, &entry.time, &entry.message, placement)
}

fn assemble(title: &str, time: &str, message: &str, placement: MessagePlacement) -> LogCard {
    let title_text = Element::new("h3")
        .with_class(CARD_TITLE_CLASSES)
        .with_child(Node::markup(format!("{title}{CARD_TITLE_SUFFIX}")));
    let message_text = Element::new("p")
        .with_class(CARD_MESSAGE_CLASSES)
        .with_child(Node::markup(message));

    let mut title_row = Element::new("div")
        .with_class(CARD_TITLE_ROW_CLASSES)
        .with_child(title_text);
    let mut message_wrapper = Element::new("div").with_class(CARD_MESSAGE_WRAPPER_CLASSES);

    match placement {
        MessagePlacement::TitleRow => title_row.append(message_text),
        MessagePlacement::Wrapper => message_wrapper.append(message_text),
    }

    let time_text = Element::new("p")
        .with_class(CARD_TIME_CLASSES)
        .with_child(Node::text(time));

    let content = Element::new("div")
        .with_class(CARD_CONTENT_CLASSES)
        .with_child(title_row)
        .with_child(message_wrapper)
        .with_child(time_text);

    let root = Element::new("div")
        .with_class(CARD_CONTAINER_CLASSES)
        .with_child(content)
        .with_child(Element::new("hr").with_class(CARD_DIVIDER_CLASSES));

    LogCard { root, placement }
}

impl LogCard {
    pub fn placement(&self) -> MessagePlacement {
        self.placement
    }

    /// Outer card container.
    pub fn container(&self) -> &Element {
        &self.root
    }

    pub fn content(&self) -> Option<&Element> {
        self.root.child_element(0)
    }

    pub fn title_row(&self) -> Option<&Element> {
        self.content()?.child_element(0)
    }

    pub fn title(&self) -> Option<&Element> {
        self.title_row()?.child_element(0)
    }

    pub fn message_wrapper(&self) -> Option<&Element> {
        self.content()?.child_element(1)
    }

    /// The message paragraph, wherever the placement put it.
    pub fn message(&self) -> Option<&Element> {
        match self.placement {
            MessagePlacement::TitleRow => self.title_row()?.child_element(1),
            MessagePlacement::Wrapper => self.message_wrapper()?.child_element(0),
        }
    }

    pub fn time(&self) -> Option<&Element> {
        self.content()?.child_element(2)
    }

    pub fn divider(&self) -> Option<&Element> {
        self.root.child_element(1)
    }

    /// Serialise the card to an HTML string.
    pub fn render(&self) -> String {
        self.root.render()
    }

    /// Give up the card wrapper and keep the raw tree, e.g. to append it to a list.
    pub fn into_element(self) -> Element {
        self.root
    }
}

impl fmt::Display for LogCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
