//! Collapsible navigation menu.

/// A navigation link pointing at an in-page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    /// Fragment reference, e.g. `#features`.
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Section id the link targets (the href without its leading `#`).
    pub fn target(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }
}

/// Open/closed state shared by the hamburger control and the menu panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape pressed. Returns `true` if the menu was open and is now closed.
    pub fn handle_escape(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn following_a_link_closes() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_reports_whether_it_closed() {
        let mut menu = NavMenu::new();
        assert!(!menu.handle_escape());
        menu.toggle();
        assert!(menu.handle_escape());
        assert!(!menu.is_open());
    }

    #[test]
    fn link_target_strips_fragment_marker() {
        assert_eq!(NavLink::new("Features", "#features").target(), "features");
        assert_eq!(NavLink::new("Raw", "contact").target(), "contact");
    }
}
