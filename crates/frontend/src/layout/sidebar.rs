//! Sidebar navigator: one collapsible item per documentation section.
//!
//! Clicking a collapsed item expands it (collapsing every other), reveals its
//! section, and smooth-scrolls the section to the top. Clicking an expanded
//! item collapses it when the section already sits at the viewport top, and
//! just re-scrolls otherwise. Nested entries are in-page anchors with the
//! default jump replaced by a smooth scroll.

use crate::console::SECTIONS;
use crate::layout::use_nav;
use leptos::prelude::*;

/// What a click on a top-level item should do, given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    /// Expand the clicked item (collapsing any other) and scroll its section
    Expand,
    /// Collapse the clicked item; its section already sat at the top
    Collapse,
    /// Keep it expanded and scroll the section back into view
    Scroll,
}

/// State machine of a top-level item, decoupled from the DOM.
pub fn transition(expanded: Option<&str>, clicked: &str, section_at_top: bool) -> NavStep {
    if expanded != Some(clicked) {
        NavStep::Expand
    } else if section_at_top {
        NavStep::Collapse
    } else {
        NavStep::Scroll
    }
}

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn scroll_into_view(id: &str) {
    if let Some(element) = element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn section_at_top(id: &str) -> bool {
    element_by_id(id)
        .map(|element| element.get_bounding_client_rect().top() == 0.0)
        .unwrap_or(false)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();

    view! {
        <nav id="sidebar" class="sidebar">
            <ul>
                {SECTIONS.iter().map(|section| {
                    let id = section.id;
                    view! {
                        <li class:active=move || nav.is_expanded(id)>
                            <a
                                href="#"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    match transition(nav.expanded.get_untracked(), id, section_at_top(id)) {
                                        NavStep::Expand => {
                                            nav.expanded.set(Some(id));
                                            scroll_into_view(id);
                                        }
                                        NavStep::Collapse => nav.expanded.set(None),
                                        NavStep::Scroll => scroll_into_view(id),
                                    }
                                }
                            >
                                <span class="toggle-icon">
                                    {move || if nav.is_expanded(id) { "-" } else { "+" }}
                                </span>
                                {section.label}
                            </a>
                            <ul class="nested" class:nested--open=move || nav.is_expanded(id)>
                                {section.anchors.iter().map(|(label, target)| {
                                    let target = *target;
                                    view! {
                                        <li>
                                            <a
                                                href=format!("#{}", target)
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    scroll_into_view(target);
                                                }
                                            >
                                                {*label}
                                            </a>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_a_collapsed_item_expands_it() {
        assert_eq!(transition(None, "ping", false), NavStep::Expand);
        assert_eq!(transition(None, "ping", true), NavStep::Expand);
    }

    #[test]
    fn clicking_another_item_switches_expansion() {
        assert_eq!(transition(Some("register"), "ping", false), NavStep::Expand);
        assert_eq!(transition(Some("register"), "ping", true), NavStep::Expand);
    }

    #[test]
    fn clicking_an_expanded_item_at_top_collapses_it() {
        assert_eq!(transition(Some("ping"), "ping", true), NavStep::Collapse);
    }

    #[test]
    fn clicking_an_expanded_item_scrolled_away_rescrolls() {
        assert_eq!(transition(Some("ping"), "ping", false), NavStep::Scroll);
    }
}
