//! Static copy for the Readzy landing page.

use crate::menu::NavLink;

/// Page sections in document order, as `(id, heading)`.
pub const SECTIONS: [(&str, &str); 4] = [
    ("home", "Readzy"),
    ("features", "Features"),
    ("stats", "Readzy in numbers"),
    ("contact", "Get in touch"),
];

pub const TAGLINE: &str = "Read smarter. Remember more.";
pub const CTA_LABEL: &str = "Explore features";
pub const WELCOME: &str = "Welcome to Readzy!";

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn nav_links() -> Vec<NavLink> {
    SECTIONS
        .iter()
        .map(|(id, _)| {
            let label = match *id {
                "home" => "Home",
                "features" => "Features",
                "stats" => "Stats",
                "contact" => "Contact",
                other => other,
            };
            NavLink::new(label, format!("#{id}"))
        })
        .collect()
}

pub fn slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Your library, everywhere",
            caption: "Pick up any book on any device, right where you left off.",
        },
        Slide {
            title: "Highlights that stick",
            caption: "Spaced review turns your highlights into lasting memory.",
        },
        Slide {
            title: "Focus mode",
            caption: "A distraction-free page with adjustable type and spacing.",
        },
        Slide {
            title: "Reading goals",
            caption: "Set a daily target and watch your streak grow.",
        },
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "📚",
            title: "Smart library",
            body: "Books, articles and PDFs organised automatically.",
        },
        Feature {
            icon: "✍",
            title: "Highlights & notes",
            body: "Capture ideas inline and export them anywhere.",
        },
        Feature {
            icon: "🧠",
            title: "Spaced review",
            body: "Short daily reviews resurface what matters.",
        },
        Feature {
            icon: "🔍",
            title: "Instant search",
            body: "Find any passage across your whole library.",
        },
        Feature {
            icon: "🌙",
            title: "Night reading",
            body: "Warm themes that are easy on the eyes.",
        },
        Feature {
            icon: "📈",
            title: "Progress insights",
            body: "Reading time, pace and streaks at a glance.",
        },
    ]
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "50K+",
            label: "Active readers",
        },
        Stat {
            value: "1.2M",
            label: "Books finished",
        },
        Stat {
            value: "4.8★",
            label: "Average rating",
        },
        Stat {
            value: "24/7",
            label: "Sync across devices",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_nav_link() {
        let links = nav_links();
        assert_eq!(links.len(), SECTIONS.len());
        for (link, (id, _)) in links.iter().zip(SECTIONS) {
            assert_eq!(link.target(), id);
        }
    }

    #[test]
    fn carousel_has_slides() {
        assert_eq!(slides().len(), 4);
    }
}
