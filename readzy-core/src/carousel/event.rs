//! Carousel input events and the dispatch table.
//!
//! [`CarouselEvent::action`] is the whole event → operation mapping and
//! touches no state.

use crate::keys::{Key, KeyPress};
use crate::timer::TimerHandle;

/// Something that happened to the carousel region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    NextClicked,
    PrevClicked,
    IndicatorClicked(usize),
    KeyDown(KeyPress),
    PointerEnter,
    PointerLeave,
    FocusGained,
    FocusLost,
    AutoplayTick(TimerHandle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn delta(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Controller operation an event maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// User-initiated step; resets autoplay.
    Step(Direction),
    /// User-initiated jump; resets autoplay.
    JumpTo(usize),
    /// Timer-driven forward step; no reset.
    Advance(TimerHandle),
    PauseAutoplay,
    ResumeAutoplay,
    SetFocus(bool),
}

impl CarouselAction {
    /// Whether the action counts as manual navigation.
    pub fn is_manual(self) -> bool {
        matches!(self, CarouselAction::Step(_) | CarouselAction::JumpTo(_))
    }
}

impl CarouselEvent {
    /// Map an event to the operation it triggers, if any.
    ///
    /// Only the left and right arrows are carousel keys; every other key
    /// maps to `None`. Focus gating happens in the controller.
    pub fn action(self) -> Option<CarouselAction> {
        match self {
            CarouselEvent::NextClicked => Some(CarouselAction::Step(Direction::Forward)),
            CarouselEvent::PrevClicked => Some(CarouselAction::Step(Direction::Backward)),
            CarouselEvent::IndicatorClicked(i) => Some(CarouselAction::JumpTo(i)),
            CarouselEvent::KeyDown(press) => match press.key {
                Key::ArrowLeft => Some(CarouselAction::Step(Direction::Backward)),
                Key::ArrowRight => Some(CarouselAction::Step(Direction::Forward)),
                _ => None,
            },
            CarouselEvent::PointerEnter => Some(CarouselAction::PauseAutoplay),
            CarouselEvent::PointerLeave => Some(CarouselAction::ResumeAutoplay),
            CarouselEvent::FocusGained => Some(CarouselAction::SetFocus(true)),
            CarouselEvent::FocusLost => Some(CarouselAction::SetFocus(false)),
            CarouselEvent::AutoplayTick(handle) => Some(CarouselAction::Advance(handle)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_controls_map_to_manual_navigation() {
        assert_eq!(
            CarouselEvent::NextClicked.action(),
            Some(CarouselAction::Step(Direction::Forward))
        );
        assert_eq!(
            CarouselEvent::PrevClicked.action(),
            Some(CarouselAction::Step(Direction::Backward))
        );
        assert_eq!(
            CarouselEvent::IndicatorClicked(3).action(),
            Some(CarouselAction::JumpTo(3))
        );
        for event in [
            CarouselEvent::NextClicked,
            CarouselEvent::PrevClicked,
            CarouselEvent::IndicatorClicked(0),
        ] {
            assert!(event.action().is_some_and(CarouselAction::is_manual));
        }
    }

    #[test]
    fn arrows_are_the_only_carousel_keys() {
        let left = CarouselEvent::KeyDown(KeyPress::plain(Key::ArrowLeft));
        let right = CarouselEvent::KeyDown(KeyPress::plain(Key::ArrowRight));
        assert_eq!(left.action(), Some(CarouselAction::Step(Direction::Backward)));
        assert_eq!(right.action(), Some(CarouselAction::Step(Direction::Forward)));

        for key in [
            Key::ArrowUp,
            Key::ArrowDown,
            Key::Escape,
            Key::Enter,
            Key::Tab,
            Key::Char('l'),
            Key::Other,
        ] {
            assert_eq!(CarouselEvent::KeyDown(KeyPress::plain(key)).action(), None);
        }
    }

    #[test]
    fn hover_and_timer_are_not_manual() {
        assert_eq!(
            CarouselEvent::PointerEnter.action(),
            Some(CarouselAction::PauseAutoplay)
        );
        assert_eq!(
            CarouselEvent::PointerLeave.action(),
            Some(CarouselAction::ResumeAutoplay)
        );
        assert!(!CarouselAction::PauseAutoplay.is_manual());
        assert!(!CarouselAction::ResumeAutoplay.is_manual());
        assert!(!CarouselAction::SetFocus(true).is_manual());
    }

    #[test]
    fn direction_delta() {
        assert_eq!(Direction::Forward.delta(), 1);
        assert_eq!(Direction::Backward.delta(), -1);
    }
}
