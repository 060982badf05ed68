//! Carousel: a fixed set of slides, one visible at a time.
//!
//! - `host`: the render surface the controller writes to
//! - `event`: input events and the event → action dispatch table
//! - `controller`: index state, navigation, autoplay discipline

pub mod controller;
pub mod event;
pub mod host;

pub use controller::{Carousel, AUTOPLAY_PERIOD};
pub use event::{CarouselAction, CarouselEvent, Direction};
pub use host::{CarouselHost, Indicator, SlideTrack};
