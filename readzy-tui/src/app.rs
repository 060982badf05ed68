//! Application state, single-owner and main-thread only.
//!
//! All page behaviour lives in `readzy_core`; this struct owns one instance
//! of each piece and feeds it terminal-derived inputs.

use std::time::Duration;

use ratatui::layout::Rect;
use tracing::{debug, info};

use readzy_core::carousel::{Carousel, CarouselEvent, SlideTrack};
use readzy_core::config::ReadzyConfig;
use readzy_core::contact::{ContactForm, Field};
use readzy_core::content::{self, Feature, Slide, Stat};
use readzy_core::debounce::Debouncer;
use readzy_core::menu::{NavLink, NavMenu};
use readzy_core::notify::{NotificationKind, Toasts};
use readzy_core::reveal::ScrollReveal;
use readzy_core::sections::{self, ActiveSection};
use readzy_core::shortcuts::{self, PageAction};
use readzy_core::timer::IntervalTimers;

use crate::layout::{self, PageLayout, ScreenLayout, Target, PX_PER_ROW};

pub type PageCarousel = Carousel<SlideTrack<Slide>, IntervalTimers>;

/// What keyboard input is currently routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Carousel,
    Field(Field),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Page,
        Focus::Carousel,
        Focus::Field(Field::Name),
        Focus::Field(Field::Email),
        Focus::Field(Field::Message),
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Page => "page",
            Focus::Carousel => "carousel",
            Focus::Field(field) => field.label(),
            Focus::Submit => "send",
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub config: ReadzyConfig,

    // Content
    pub links: Vec<NavLink>,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,

    // Geometry
    pub page: PageLayout,
    pub screen: ScreenLayout,
    pub scroll: u16,

    // Behaviour
    pub carousel: Option<PageCarousel>,
    pub menu: NavMenu,
    pub form: ContactForm,
    pub toasts: Toasts,
    pub reveal: ScrollReveal,
    pub card_reveals: Vec<usize>,
    pub stat_reveals: Vec<usize>,
    pub active_section: ActiveSection,
    pub scroll_debounce: Debouncer,

    // Input routing
    pub focus: Focus,
    pub pointer_over_carousel: bool,
}

impl AppState {
    pub fn new(config: ReadzyConfig, area: Rect) -> Self {
        let features = content::features();
        let stats = content::stats();
        let section_ids: Vec<&'static str> = content::SECTIONS.iter().map(|(id, _)| *id).collect();
        let page = PageLayout::compute(&section_ids, features.len(), stats.len());

        let mut reveal = ScrollReveal::new(config.reveal);
        let card_reveals = page.cards.iter().map(|c| reveal.observe(c.extent())).collect();
        let stat_reveals = page.stats.iter().map(|s| reveal.observe(s.extent())).collect();

        let carousel = Carousel::mount_with_period(
            SlideTrack::new(content::slides()),
            IntervalTimers::new(),
            config.autoplay_period(),
        );

        let mut app = Self {
            running: true,
            links: content::nav_links(),
            features,
            stats,
            page,
            screen: ScreenLayout::new(area),
            scroll: 0,
            carousel,
            menu: NavMenu::new(),
            form: ContactForm::new(),
            toasts: Toasts::new(config.toast_timing()),
            reveal,
            card_reveals,
            stat_reveals,
            active_section: ActiveSection::new(config.sections.activation_offset),
            scroll_debounce: Debouncer::new(config.scroll_debounce()),
            focus: Focus::Page,
            pointer_over_carousel: false,
            config,
        };
        app.refresh_reveal();
        app.refresh_active_section();
        app
    }

    /// Show the welcome notification.
    pub fn welcome(&mut self) {
        info!("{}", content::WELCOME);
        self.toasts.info(content::WELCOME);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Advance every timer-driven component by `dt`.
    ///
    /// Missed autoplay periods are coalesced: after a stall each live
    /// interval delivers at most one tick.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(carousel) = self.carousel.as_mut() {
            let mut fired = carousel.scheduler_mut().advance(dt);
            let due = fired.len();
            let mut seen = Vec::with_capacity(due);
            fired.retain(|handle| {
                let first = !seen.contains(handle);
                seen.push(*handle);
                first
            });
            if fired.len() < due {
                debug!(missed = due - fired.len(), "coalesced autoplay ticks");
            }
            for handle in fired {
                carousel.dispatch(CarouselEvent::AutoplayTick(handle));
            }
        }
        self.reveal.advance(dt);
        self.toasts.advance(dt);
        if self.scroll_debounce.advance(dt) {
            self.refresh_active_section();
        }
    }

    // ── Geometry & scrolling ─────────────────────────────────────────

    pub fn resize(&mut self, area: Rect) {
        let screen = ScreenLayout::new(area);
        if screen == self.screen {
            return;
        }
        self.screen = screen;
        self.scroll = self.scroll.min(self.max_scroll());
        self.on_scrolled();
    }

    pub fn viewport_rows(&self) -> u16 {
        self.screen.body.height
    }

    pub fn max_scroll(&self) -> u16 {
        self.page.total_rows.saturating_sub(self.viewport_rows())
    }

    pub fn scroll_to(&mut self, row: u16) {
        let row = row.min(self.max_scroll());
        if row == self.scroll {
            return;
        }
        self.scroll = row;
        self.on_scrolled();
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let row = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(u16::try_from(row).unwrap_or(0));
    }

    /// Bring a section's top to the top of the viewport.
    pub fn scroll_to_section(&mut self, id: &str) {
        if let Some(row) = self.page.section_row(id) {
            debug!(section = id, row, "scroll to section");
            self.scroll_to(row);
        }
    }

    fn on_scrolled(&mut self) {
        self.refresh_reveal();
        self.scroll_debounce.trigger();
        self.sync_carousel_hover();
    }

    fn scroll_px(&self) -> f64 {
        f64::from(self.scroll) * PX_PER_ROW
    }

    fn refresh_reveal(&mut self) {
        let viewport = f64::from(self.viewport_rows()) * PX_PER_ROW;
        let revealed = self.reveal.update(self.scroll_px(), viewport);
        if !revealed.is_empty() {
            debug!(?revealed, "elements revealed");
        }
    }

    fn refresh_active_section(&mut self) {
        let spans = self.page.section_spans();
        if self.active_section.update(&spans, self.scroll_px()) {
            debug!(section = ?self.active_section.current(), "active section changed");
        }
    }

    /// Highlight flag per nav link, in link order.
    pub fn link_states(&self) -> Vec<bool> {
        sections::link_states(&self.links, self.active_section.current())
    }

    // ── Page actions ─────────────────────────────────────────────────

    pub fn apply_page_action(&mut self, action: PageAction) {
        match action {
            PageAction::None | PageAction::MenuClosed => {}
            PageAction::FocusSection(id) => {
                self.set_focus(Focus::Page);
                self.scroll_to_section(id);
            }
            PageAction::ScrollTo(id) => self.scroll_to_section(id),
        }
    }

    pub fn call_to_action(&mut self) {
        self.apply_page_action(shortcuts::call_to_action());
    }

    /// Follow the `index`-th nav link: scroll to its section and close the menu.
    pub fn follow_link(&mut self, index: usize) {
        let Some(target) = self.links.get(index).map(|l| l.target().to_string()) else {
            return;
        };
        self.scroll_to_section(&target);
        self.menu.close();
    }

    pub fn link_labels(&self) -> Vec<&str> {
        self.links.iter().map(|l| l.label.as_str()).collect()
    }

    // ── Focus & pointer ──────────────────────────────────────────────

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        let was_carousel = self.focus == Focus::Carousel;
        let is_carousel = focus == Focus::Carousel;
        self.focus = focus;
        if let Some(carousel) = self.carousel.as_mut() {
            if was_carousel && !is_carousel {
                carousel.dispatch(CarouselEvent::FocusLost);
            } else if is_carousel && !was_carousel {
                carousel.dispatch(CarouselEvent::FocusGained);
            }
        }
        if let Focus::Field(_) | Focus::Submit = focus {
            self.scroll_into_view(self.focus_row());
        }
    }

    fn focus_row(&self) -> u16 {
        match self.focus {
            Focus::Field(field) => self.page.field_row(field),
            Focus::Submit => self.page.submit_row,
            Focus::Carousel => self.page.carousel.top,
            Focus::Page => self.scroll,
        }
    }

    fn scroll_into_view(&mut self, row: u16) {
        let rows = self.viewport_rows();
        if row < self.scroll {
            self.scroll_to(row);
        } else if rows > 0 && row >= self.scroll + rows {
            self.scroll_to(row + 1 - rows);
        }
    }

    pub fn carousel_event(&mut self, event: CarouselEvent) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.dispatch(event);
        }
    }

    /// Resolve a screen position to a clickable target.
    pub fn target_at(&self, col: u16, row: u16) -> Option<Target> {
        let labels = self.link_labels();
        let slide_count = self.carousel.as_ref().map_or(0, |c| c.len());
        layout::hit_test(
            &self.screen,
            &self.page,
            self.scroll,
            &labels,
            slide_count,
            self.menu.is_open(),
            col,
            row,
        )
    }

    /// Track the pointer for carousel hover.
    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        let over = matches!(
            self.target_at(col, row),
            Some(
                Target::Carousel
                    | Target::CarouselPrev
                    | Target::CarouselNext
                    | Target::Indicator(_)
            )
        );
        self.set_pointer_over_carousel(over);
    }

    fn set_pointer_over_carousel(&mut self, over: bool) {
        if over == self.pointer_over_carousel {
            return;
        }
        self.pointer_over_carousel = over;
        self.carousel_event(if over {
            CarouselEvent::PointerEnter
        } else {
            CarouselEvent::PointerLeave
        });
    }

    /// A scrolled-away carousel can no longer be under the pointer.
    fn sync_carousel_hover(&mut self) {
        if !self.pointer_over_carousel {
            return;
        }
        let top = self.page.carousel.top;
        let bottom = top + self.page.carousel.height;
        let visible = bottom > self.scroll && top < self.scroll + self.viewport_rows();
        if !visible {
            self.set_pointer_over_carousel(false);
        }
    }

    // ── Contact form ─────────────────────────────────────────────────

    pub fn submit_form(&mut self) {
        let outcome = self.form.submit_with_feedback();
        self.toasts.show(outcome.message, outcome.kind);
        if outcome.kind == NotificationKind::Success {
            self.set_focus(Focus::Field(Field::Name));
        }
    }

    pub fn teardown(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.teardown();
        }
    }
}
