// src/core/html.rs
//! Small helpers over `scraper` element handles.
//! Every lookup is scoped to the descendants of the given element.

use scraper::{ElementRef, Selector};

/// First descendant matching `sel`, in document order.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Last descendant matching `sel`, in document order.
pub fn last<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).last()
}

/// All descendants matching `sel`, in document order.
pub fn all<'a>(el: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    el.select(sel).collect()
}

/// Concatenated text of the element and its descendants, untrimmed.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// True when the element has no `class` attribute, or only whitespace in it.
pub fn is_unclassed(el: ElementRef<'_>) -> bool {
    el.value()
        .attr("class")
        .is_none_or(|c| c.trim().is_empty())
}
