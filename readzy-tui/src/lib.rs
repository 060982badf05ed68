//! Readzy TUI - the landing page rendered in a terminal.
//!
//! The page scrolls inside the body; the header keeps the nav links (or the
//! hamburger menu) in view. Mouse hover and clicks drive the carousel the
//! same way the pointer does on the web page.

pub mod app;
pub mod input;
pub mod layout;
pub mod theme;
pub mod ui;

pub use app::{AppState, Focus};
pub use theme::Theme;
