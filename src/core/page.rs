// LogCard - core/page.rs
//
// Renders many cards at once: either the bare list container that a host
// page inserts, or a standalone HTML document for viewing the event log
// directly in a browser.

use crate::core::card;
use crate::core::markup::{Element, Node};
use crate::core::model::{LogEntry, MessagePlacement};
use crate::util::constants::{LOG_LIST_CLASSES, LOG_LIST_ID, TAILWIND_CDN_URL};

/// Build the list container holding one card per entry, in input order.
pub fn list_element(entries: &[LogEntry], placement: MessagePlacement) -> Element {
    let mut list = Element::new("div")
        .with_id(LOG_LIST_ID)
        .with_class(LOG_LIST_CLASSES);
    for entry in entries {
        list.append(card::build_with(entry, placement).into_element());
    }
    list
}

/// Render the list container to HTML.
pub fn render_list(entries: &[LogEntry], placement: MessagePlacement) -> String {
    list_element(entries, placement).render()
}

/// Render a complete HTML5 document around the card list.
pub fn render_document(entries: &[LogEntry], placement: MessagePlacement, title: &str) -> String {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_child(Node::text(title)))
        .with_child(Element::new("script").with_attr("src", TAILWIND_CDN_URL));

    let body = Element::new("body")
        .with_class("bg-gray-100 p-6")
        .with_child(list_element(entries, placement));

    tracing::debug!(entries = entries.len(), %placement, "Rendering event log document");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">{}{}</html>\n",
        head.render(),
        body.render()
    )
}
