//! Carousel controller.
//!
//! Owns the current index, the autoplay timer handle, and the injected host
//! and scheduler. All mutation goes through [`Carousel::navigate`], which
//! normalizes any integer target into range and re-renders.
//!
//! Autoplay discipline:
//! - at most one interval is live; every (re)start cancels the previous one
//! - manual navigation restarts the interval with a full period
//! - pointer hover cancels the interval; leaving starts a fresh one
//! - a tick whose handle is not the live interval is stale and ignored

use std::time::Duration;

use tracing::{debug, info};

use super::event::{CarouselAction, CarouselEvent, Direction};
use super::host::CarouselHost;
use crate::timer::{Scheduler, TimerHandle};

/// Default autoplay period.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(3500);

/// A mounted carousel.
///
/// A carousel with zero slides is valid but inert: every operation is a
/// no-op and no timer is ever scheduled.
#[derive(Debug)]
pub struct Carousel<H, S> {
    host: H,
    scheduler: S,
    len: usize,
    current: usize,
    period: Duration,
    autoplay: Option<TimerHandle>,
    hovered: bool,
    focused: bool,
}

impl<H: CarouselHost, S: Scheduler> Carousel<H, S> {
    /// Mount with the default 3500 ms autoplay period.
    pub fn mount(host: H, scheduler: S) -> Option<Self> {
        Self::mount_with_period(host, scheduler, AUTOPLAY_PERIOD)
    }

    /// Mount onto `host`, generating indicators, rendering slide 0, starting
    /// autoplay and making the region focusable.
    ///
    /// Returns `None` when the host has no slide track.
    pub fn mount_with_period(host: H, scheduler: S, period: Duration) -> Option<Self> {
        let Some(len) = host.slide_count() else {
            debug!("no slide track found; carousel not mounted");
            return None;
        };

        let mut carousel = Self {
            host,
            scheduler,
            len,
            current: 0,
            period,
            autoplay: None,
            hovered: false,
            focused: false,
        };
        if len == 0 {
            debug!("slide track is empty; carousel mounted inert");
            return Some(carousel);
        }

        for i in 0..len {
            carousel.host.append_indicator(format!("Show slide {}", i + 1));
        }
        carousel.navigate(0);
        carousel.reset_autoplay();
        carousel.host.set_focusable(true);

        info!(
            slides = len,
            period_ms = period.as_millis() as u64,
            "carousel mounted"
        );
        Some(carousel)
    }

    /// Show the slide at `target`, wrapping any integer into `[0, len)`.
    pub fn navigate(&mut self, target: i64) {
        if self.len == 0 {
            return;
        }
        let len = i64::try_from(self.len).unwrap_or(i64::MAX);
        // rem_euclid is always in [0, len), so the conversion back cannot fail.
        self.current = usize::try_from(target.rem_euclid(len)).unwrap_or(0);
        self.render();
    }

    pub fn step_forward(&mut self) {
        self.step(Direction::Forward);
    }

    pub fn step_backward(&mut self) {
        self.step(Direction::Backward);
    }

    pub fn jump_to(&mut self, index: i64) {
        self.navigate(index);
    }

    fn step(&mut self, direction: Direction) {
        let current = i64::try_from(self.current).unwrap_or(0);
        self.navigate(current + direction.delta());
    }

    /// Cancel the live interval (if any) and schedule a fresh one.
    ///
    /// Does nothing for an empty carousel or while the pointer hovers it:
    /// no automatic advance may be pending during hover.
    pub fn reset_autoplay(&mut self) {
        if self.len == 0 {
            return;
        }
        self.cancel_autoplay();
        if self.hovered {
            return;
        }
        let handle = self.scheduler.start_interval(self.period);
        debug!(timer = handle.id(), "autoplay scheduled");
        self.autoplay = Some(handle);
    }

    /// Cancel the live interval, if any.
    pub fn cancel_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.scheduler.cancel(handle);
            debug!(timer = handle.id(), "autoplay cancelled");
        }
    }

    /// Route one input event through the dispatch table.
    pub fn dispatch(&mut self, event: CarouselEvent) {
        if self.len == 0 {
            return;
        }
        if matches!(event, CarouselEvent::KeyDown(_)) && !self.focused {
            return;
        }
        let Some(action) = event.action() else {
            return;
        };
        self.apply(action);
    }

    fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Step(direction) => self.step(direction),
            CarouselAction::JumpTo(index) => {
                self.jump_to(i64::try_from(index).unwrap_or(i64::MAX));
            }
            CarouselAction::Advance(handle) => {
                if self.autoplay == Some(handle) {
                    self.step_forward();
                } else {
                    debug!(timer = handle.id(), "stale autoplay tick ignored");
                }
            }
            CarouselAction::PauseAutoplay => {
                self.hovered = true;
                self.cancel_autoplay();
            }
            CarouselAction::ResumeAutoplay => {
                self.hovered = false;
                self.reset_autoplay();
            }
            CarouselAction::SetFocus(focused) => self.focused = focused,
        }
        if action.is_manual() {
            self.reset_autoplay();
        }
    }

    /// Cancel autoplay for good. Call before dropping the host.
    pub fn teardown(&mut self) {
        self.cancel_autoplay();
    }

    fn render(&mut self) {
        let offset = -i64::try_from(self.current).unwrap_or(0) * 100;
        self.host.set_track_offset(offset);
        for i in 0..self.len {
            self.host.set_indicator_active(i, i == self.current);
        }
    }
}

impl<H, S> Carousel<H, S> {
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Handle of the live autoplay interval.
    pub fn autoplay_handle(&self) -> Option<TimerHandle> {
        self.autoplay
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable scheduler access, for hosts that drive the clock.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
