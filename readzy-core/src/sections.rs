//! Active-section highlighting.
//!
//! Stateless: given the page sections and the scroll offset, pick the
//! section the reader is in and mark the matching nav links.

use crate::menu::NavLink;

/// How far above a section's top the reader may be and still be "in" it.
pub const DEFAULT_ACTIVATION_OFFSET: f64 = 200.0;

/// A page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// The last section, in document order, with `scroll_y >= top - offset`.
pub fn current_section(sections: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - offset)
        .last()
        .map(|s| s.id.as_str())
}

/// Active flag per link: set exactly for links targeting `current`.
pub fn link_states(links: &[NavLink], current: Option<&str>) -> Vec<bool> {
    links
        .iter()
        .map(|link| current.is_some_and(|id| link.target() == id))
        .collect()
}

/// Tracks the highlighted section across scroll updates.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    offset: f64,
    current: Option<String>,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_OFFSET)
    }
}

impl ActiveSection {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            current: None,
        }
    }

    /// Recompute from a scroll offset. Returns `true` when the section changed.
    pub fn update(&mut self, sections: &[SectionSpan], scroll_y: f64) -> bool {
        let next = current_section(sections, scroll_y, self.offset).map(str::to_owned);
        let changed = next != self.current;
        self.current = next;
        changed
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 600.0),
            SectionSpan::new("features", 600.0, 800.0),
            SectionSpan::new("contact", 1400.0, 500.0),
        ]
    }

    #[test]
    fn section_activates_200_units_early() {
        let sections = page();
        assert_eq!(current_section(&sections, 0.0, 200.0), Some("home"));
        assert_eq!(current_section(&sections, 399.0, 200.0), Some("home"));
        assert_eq!(current_section(&sections, 400.0, 200.0), Some("features"));
        assert_eq!(current_section(&sections, 1200.0, 200.0), Some("contact"));
    }

    #[test]
    fn no_section_when_above_everything() {
        let sections = vec![SectionSpan::new("late", 1000.0, 100.0)];
        assert_eq!(current_section(&sections, 0.0, 200.0), None);
        assert_eq!(current_section(&[], 0.0, 200.0), None);
    }

    #[test]
    fn only_matching_links_are_active() {
        let links = vec![
            NavLink::new("Home", "#home"),
            NavLink::new("Features", "#features"),
            NavLink::new("Contact", "#contact"),
        ];
        assert_eq!(
            link_states(&links, Some("features")),
            vec![false, true, false]
        );
        assert_eq!(link_states(&links, None), vec![false, false, false]);
    }

    #[test]
    fn tracker_reports_changes() {
        let sections = page();
        let mut active = ActiveSection::default();
        assert!(active.update(&sections, 0.0));
        assert!(!active.update(&sections, 100.0));
        assert!(active.update(&sections, 500.0));
        assert_eq!(active.current(), Some("features"));
    }
}
