//! Readzy Core: the interactive behaviours of the Readzy landing page.
//!
//! Everything here is host-independent. A host (the terminal UI, a test, a
//! browser shim) owns the render surface and the clock, injects them into
//! these types, and forwards input events:
//! - Carousel controller with autoplay, indicator sync and keyboard control
//! - Repeating timers behind a `Scheduler` seam
//! - Navigation menu, contact form validation, toast notifications
//! - Scroll reveal, active-section highlighting, page shortcuts, debouncer
//!
//! The carousel is the only stateful component with a control loop; the
//! other handlers share no state with it or with each other.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod debounce;
pub mod keys;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod sections;
pub mod shortcuts;
pub mod timer;

pub use carousel::{Carousel, CarouselEvent, CarouselHost, SlideTrack};
pub use config::{ConfigError, ReadzyConfig};
pub use keys::{Key, KeyPress};
pub use timer::{IntervalTimers, Scheduler, TimerHandle};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the owned state types can move to another thread.
    ///
    /// Hosts are free to run the page on a dedicated UI thread; none of
    /// these types may grow an `Rc` or `RefCell`.
    #[allow(dead_code)]
    fn assert_send() {
        fn require_send<T: Send>() {}

        require_send::<Carousel<SlideTrack<content::Slide>, IntervalTimers>>();
        require_send::<menu::NavMenu>();
        require_send::<contact::ContactForm>();
        require_send::<notify::Toasts>();
        require_send::<reveal::ScrollReveal>();
        require_send::<debounce::Debouncer>();
        require_send::<ReadzyConfig>();
    }
}
