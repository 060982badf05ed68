//! Render surface for the carousel.
//!
//! The controller only ever writes presentation state through
//! [`CarouselHost`]; it never reads back what it wrote. [`SlideTrack`] is the
//! in-memory host used by the terminal UI: it holds the slides plus whatever
//! presentation state the controller last applied, and the renderer draws
//! from that state alone.

/// Presentation surface injected into a [`Carousel`](super::Carousel).
pub trait CarouselHost {
    /// Number of slides in the track, or `None` when the host has no track
    /// at all (the carousel then refuses to mount).
    fn slide_count(&self) -> Option<usize>;

    /// Append one indicator control to the indicator host.
    fn append_indicator(&mut self, label: String);

    /// Horizontal track offset as a percentage of one slide width.
    fn set_track_offset(&mut self, percent: i64);

    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Whether the carousel region accepts keyboard focus.
    fn set_focusable(&mut self, focusable: bool);
}

/// One generated position indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Accessible label, e.g. "Show slide 2".
    pub label: String,
    pub active: bool,
}

/// In-memory slide track holding slides of type `T`.
#[derive(Debug, Clone)]
pub struct SlideTrack<T> {
    slides: Vec<T>,
    offset_percent: i64,
    indicators: Vec<Indicator>,
    focusable: bool,
}

impl<T> SlideTrack<T> {
    pub fn new(slides: Vec<T>) -> Self {
        Self {
            slides,
            offset_percent: 0,
            indicators: Vec::new(),
            focusable: false,
        }
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn offset_percent(&self) -> i64 {
        self.offset_percent
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Index of the slide the current offset brings into view.
    ///
    /// Returns `None` for an offset that is not a whole, in-range slide step.
    pub fn visible_index(&self) -> Option<usize> {
        if self.offset_percent > 0 || self.offset_percent % 100 != 0 {
            return None;
        }
        let index = usize::try_from(-self.offset_percent / 100).ok()?;
        (index < self.slides.len()).then_some(index)
    }

    pub fn visible_slide(&self) -> Option<&T> {
        self.visible_index().and_then(|i| self.slides.get(i))
    }
}

impl<T> CarouselHost for SlideTrack<T> {
    fn slide_count(&self) -> Option<usize> {
        Some(self.slides.len())
    }

    fn append_indicator(&mut self, label: String) {
        self.indicators.push(Indicator {
            label,
            active: false,
        });
    }

    fn set_track_offset(&mut self, percent: i64) {
        self.offset_percent = percent;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.active = active;
        }
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }
}
