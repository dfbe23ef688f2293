use crate::content::SectionId;

/// Window scroll offset after which the navigation bar gets a solid backdrop.
pub const NAV_SOLID_AFTER_PX: f64 = 24.0;

/// Something that can bring an element, found by DOM id, into view.
pub trait ScrollHost {
    /// Smoothly scrolls the element with `id` into view. Returns `false` if there is no
    /// such element.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Scrolls to `target`. Missing targets are ignored.
pub fn scroll_to<H: ScrollHost>(host: &H, target: SectionId) {
    if !host.scroll_into_view(target.as_str()) {
        log::debug!("no element for section {target}");
    }
}

/// Scrolls to `target` and closes the menu.
pub fn scroll_to_section<H: ScrollHost>(host: &H, target: SectionId, menu: &mut NavMenu) {
    scroll_to(host, target);
    menu.close();
}

pub fn nav_is_solid(scroll_y: f64) -> bool {
    scroll_y > NAV_SOLID_AFTER_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockHost {
        mounted: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl MockHost {
        fn new(mounted: Vec<&'static str>) -> Self {
            Self {
                mounted,
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollHost for MockHost {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.mounted.iter().any(|m| *m == id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_scrolls_to_matching_element() {
        let host = MockHost::new(vec!["home", "about", "projects"]);
        let mut menu = NavMenu::default();
        scroll_to_section(&host, SectionId::Projects, &mut menu);
        assert_eq!(*host.scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_missing_element_is_noop() {
        let host = MockHost::new(vec!["home"]);
        let mut menu = NavMenu::default();
        scroll_to_section(&host, SectionId::Contact, &mut menu);
        assert!(host.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_navigation_closes_menu() {
        let host = MockHost::new(vec![]);
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        scroll_to_section(&host, SectionId::About, &mut menu);
        assert!(!menu.is_open());

        let host = MockHost::new(vec!["about"]);
        menu.toggle();
        scroll_to_section(&host, SectionId::About, &mut menu);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_nav_solid_threshold() {
        assert!(!nav_is_solid(0.0));
        assert!(!nav_is_solid(NAV_SOLID_AFTER_PX));
        assert!(nav_is_solid(NAV_SOLID_AFTER_PX + 1.0));
    }
}
