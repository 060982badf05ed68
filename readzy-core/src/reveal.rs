//! Scroll-triggered reveal.
//!
//! Observed elements start hidden. Each viewport update computes how much of
//! every still-observed element lies inside the viewport (shrunk at the
//! bottom by a margin); an element crossing the threshold is revealed and
//! stops being observed. Reveal never reverts. A revealed element fades in
//! and slides up over the transition, on time supplied by
//! [`ScrollReveal::advance`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vertical offset of a hidden element, in document units.
pub const HIDDEN_OFFSET: f64 = 20.0;
/// Length of the fade-in after an element is revealed.
pub const DEFAULT_TRANSITION_MS: u64 = 600;

/// Observer options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Minimum visible fraction of the element, in `[0, 1]`.
    pub threshold: f64,
    /// Distance the viewport's bottom edge is pulled up by.
    pub bottom_margin: f64,
    /// Fade-in length in milliseconds; 0 shows revealed elements at once.
    pub transition_ms: u64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 100.0,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

/// Visual state applied to an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_y: f64,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: 0.0,
        offset_y: HIDDEN_OFFSET,
    };
    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Style `progress` of the way through the fade-in, clamped to `[0, 1]`.
    pub fn at(progress: f64) -> RevealStyle {
        let p = progress.clamp(0.0, 1.0);
        RevealStyle {
            opacity: p,
            offset_y: HIDDEN_OFFSET * (1.0 - p),
        }
    }

    pub fn is_settled(&self) -> bool {
        *self == RevealStyle::SHOWN
    }
}

#[derive(Debug, Clone)]
struct Observed {
    extent: Extent,
    /// Time since reveal; `None` while still observed.
    shown_for: Option<Duration>,
}

impl Observed {
    fn revealed(&self) -> bool {
        self.shown_for.is_some()
    }
}

/// Tracks which observed elements have been revealed.
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    options: RevealOptions,
    elements: Vec<Observed>,
}

impl ScrollReveal {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            elements: Vec::new(),
        }
    }

    /// Start observing an element; returns its index. It starts hidden.
    pub fn observe(&mut self, extent: Extent) -> usize {
        self.elements.push(Observed {
            extent,
            shown_for: None,
        });
        self.elements.len() - 1
    }

    /// Fraction of `extent` inside the viewport `[scroll_y, scroll_y + viewport_height - margin)`.
    pub fn intersection_ratio(&self, extent: Extent, scroll_y: f64, viewport_height: f64) -> f64 {
        if extent.height <= 0.0 {
            return 0.0;
        }
        let view_top = scroll_y;
        let view_bottom = scroll_y + (viewport_height - self.options.bottom_margin).max(0.0);
        let overlap_top = extent.top.max(view_top);
        let overlap_bottom = (extent.top + extent.height).min(view_bottom);
        ((overlap_bottom - overlap_top).max(0.0) / extent.height).min(1.0)
    }

    /// Apply a viewport position. Returns the indices revealed by this update.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<usize> {
        let mut newly = Vec::new();
        for i in 0..self.elements.len() {
            if self.elements[i].revealed() {
                continue;
            }
            let ratio = self.intersection_ratio(self.elements[i].extent, scroll_y, viewport_height);
            if ratio > 0.0 && ratio >= self.options.threshold {
                self.elements[i].shown_for = Some(Duration::ZERO);
                newly.push(i);
            }
        }
        if !newly.is_empty() {
            debug!(count = newly.len(), "elements revealed");
        }
        newly
    }

    /// Age every revealed element's fade-in by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let transition = self.transition();
        for shown_for in self.elements.iter_mut().filter_map(|e| e.shown_for.as_mut()) {
            if *shown_for < transition {
                *shown_for = (*shown_for + dt).min(transition);
            }
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.elements.get(index).is_some_and(Observed::revealed)
    }

    pub fn style(&self, index: usize) -> RevealStyle {
        let Some(shown_for) = self.elements.get(index).and_then(|e| e.shown_for) else {
            return RevealStyle::HIDDEN;
        };
        let transition = self.transition();
        if transition.is_zero() {
            return RevealStyle::SHOWN;
        }
        RevealStyle::at(shown_for.as_secs_f64() / transition.as_secs_f64())
    }

    /// Number of elements still waiting to be revealed.
    pub fn observed_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.revealed()).count()
    }

    fn transition(&self) -> Duration {
        Duration::from_millis(self.options.transition_ms)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
