//! Transient toast notifications.
//!
//! A toast slides in, stays up for its lifetime (measured from creation),
//! slides out, and is removed. Time only moves when the host calls
//! [`Toasts::advance`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Time from creation until the slide-out starts.
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(4000);
/// Duration of the slide-in and of the slide-out.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Background colour as `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NotificationKind::Success => (0x4c, 0xaf, 0x50),
            NotificationKind::Error => (0xf4, 0x43, 0x36),
            NotificationKind::Info => (0x21, 0x96, 0xf3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub lifetime: Duration,
    pub animation: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            lifetime: DEFAULT_LIFETIME,
            animation: DEFAULT_ANIMATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    age: Duration,
    timing: ToastTiming,
}

impl Toast {
    pub fn age(&self) -> Duration {
        self.age
    }

    pub fn phase(&self) -> ToastPhase {
        if self.age < self.timing.animation {
            ToastPhase::Entering
        } else if self.age < self.timing.lifetime {
            ToastPhase::Visible
        } else {
            ToastPhase::Leaving
        }
    }

    /// Horizontal slide progress: 0.0 at rest, 1.0 fully off-screen.
    pub fn slide_offset(&self) -> f64 {
        let anim = self.timing.animation.as_secs_f64();
        if anim <= 0.0 {
            return 0.0;
        }
        match self.phase() {
            ToastPhase::Entering => 1.0 - self.age.as_secs_f64() / anim,
            ToastPhase::Visible => 0.0,
            ToastPhase::Leaving => {
                let out = self.age.saturating_sub(self.timing.lifetime);
                (out.as_secs_f64() / anim).min(1.0)
            }
        }
    }

    fn expired(&self) -> bool {
        self.age >= self.timing.lifetime + self.timing.animation
    }
}

/// Stack of live toasts, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    timing: ToastTiming,
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            timing,
            next_id: 0,
            items: Vec::new(),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let toast = Toast {
            id: self.next_id,
            message: message.into(),
            kind,
            age: Duration::ZERO,
            timing: self.timing,
        };
        debug!(id = toast.id, kind = ?kind, "toast shown");
        self.items.push(toast);
        self.next_id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Info)
    }

    /// Age every toast by `dt` and drop the ones whose slide-out finished.
    pub fn advance(&mut self, dt: Duration) {
        for toast in &mut self.items {
            toast.age += dt;
        }
        self.items.retain(|t| {
            let keep = !t.expired();
            if !keep {
                debug!(id = t.id, "toast removed");
            }
            keep
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
