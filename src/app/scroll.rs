use leptos::prelude::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::ScrollHost;

/// Scrolls elements of the current document into view.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScroll;

impl ScrollHost for DocumentScroll {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}
