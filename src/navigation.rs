use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::config::NAV_OFFSET;

/// Page geometry and scrolling, as needed by in-page navigation.
pub trait Viewport {
    /// Document-relative top of the element with `id`, if there is one.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

/// Scroll offset that puts a section starting at `position` just below the
/// fixed navigation bar.
pub fn scroll_target(position: f64) -> f64 {
    position - NAV_OFFSET
}

/// Smooth-scrolls to the section with `id`. Returns the offset scrolled to,
/// or `None` when the page has no such section.
pub fn scroll_to_section<V: Viewport + ?Sized>(viewport: &V, id: &str) -> Option<f64> {
    let Some(position) = viewport.section_top(id) else {
        log::debug!("no section with id {id:?}");
        return None;
    };
    let target = scroll_target(position);
    viewport.smooth_scroll_to(target);
    Some(target)
}

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for BrowserViewport {
    fn section_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        let page_offset = self.window.scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + page_offset)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Used by the logo in the navigation bar.
pub fn scroll_to_top() {
    if let Some(viewport) = BrowserViewport::new() {
        viewport.smooth_scroll_to(0.0);
    }
}

pub fn navigate_to(id: &str) {
    if let Some(viewport) = BrowserViewport::new() {
        scroll_to_section(&viewport, id);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        sections: HashMap<&'static str, f64>,
        scrolled_to: RefCell<Vec<f64>>,
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolled_to.borrow_mut().push(top);
        }
    }

    #[test]
    fn scrolls_below_the_nav_bar() {
        let viewport = FakeViewport {
            sections: HashMap::from([("clinics", 2400.0), ("expertise", 900.0)]),
            ..Default::default()
        };
        assert_eq!(scroll_to_section(&viewport, "clinics"), Some(2320.0));
        assert_eq!(*viewport.scrolled_to.borrow(), vec![2320.0]);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let viewport = FakeViewport::default();
        assert_eq!(scroll_to_section(&viewport, "clinics"), None);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn target_may_go_above_the_page_top() {
        assert_eq!(scroll_target(30.0), -50.0);
    }
}
