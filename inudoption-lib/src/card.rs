//! Drag handling for a single card.
//!
//! A card starts [`GesturePhase::Idle`], follows the pointer while
//! [`GesturePhase::Dragging`] and on release is either dismissed for good or snaps back to rest.

use tracing::debug;

use crate::Profile;

/// Fraction of the card's width a drag has to exceed to dismiss it.
pub const DISMISS_THRESHOLD: f32 = 0.5;
/// Rotation, in degrees, of a card dragged by its full width.
pub const MAX_ROTATION_DEGREES: f32 = 25.0;

/// Offset of a card from its resting position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Dismissed,
}

/// How a finished drag was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Dismiss,
    SnapBack,
}

/// Horizontal drag distance relative to the container width.
///
/// Containers without a positive, finite width never produce a percentage other than zero.
pub fn gesture_percentage(translation_x: f32, container_width: f32) -> f32 {
    if container_width.is_finite() && container_width > 0.0 {
        translation_x / container_width
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardGesture {
    phase: GesturePhase,
    translation: Translation,
}

impl CardGesture {
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Follow the pointer. Has no effect once the card has been dismissed.
    pub fn drag(&mut self, translation: Translation) {
        if self.phase == GesturePhase::Dismissed {
            return;
        }

        self.phase = GesturePhase::Dragging;
        self.translation = translation;
    }

    /// Finish the gesture and classify it. Returns `None` if the card was already dismissed.
    pub fn release(&mut self, translation: Translation, container_width: f32) -> Option<Outcome> {
        if self.phase == GesturePhase::Dismissed {
            return None;
        }

        if gesture_percentage(translation.x, container_width).abs() > DISMISS_THRESHOLD {
            self.phase = GesturePhase::Dismissed;
            self.translation = translation;
            Some(Outcome::Dismiss)
        } else {
            self.phase = GesturePhase::Idle;
            self.translation = Translation::ZERO;
            Some(Outcome::SnapBack)
        }
    }

    /// Tilt of the card in degrees, applied around its bottom center.
    pub fn rotation_degrees(&self, container_width: f32) -> f32 {
        gesture_percentage(self.translation.x, container_width) * MAX_ROTATION_DEGREES
    }
}

/// Pointer input addressed to a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Changed(Translation),
    Ended(Translation),
}

/// Notifications a card sends to whoever owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    Dismissed(Profile),
}

/// A profile together with its drag state.
#[derive(Debug, Clone)]
pub struct Card {
    profile: Profile,
    gesture: CardGesture,
}

impl Card {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            gesture: CardGesture::default(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn gesture(&self) -> &CardGesture {
        &self.gesture
    }

    pub fn handle(&mut self, event: DragEvent, container_width: f32) -> Option<CardEvent> {
        match event {
            DragEvent::Changed(translation) => {
                self.gesture.drag(translation);
                None
            }
            DragEvent::Ended(translation) => {
                match self.gesture.release(translation, container_width)? {
                    Outcome::Dismiss => {
                        debug!("Dismissed card: {}", self.profile);
                        Some(CardEvent::Dismissed(self.profile.clone()))
                    }
                    Outcome::SnapBack => {
                        debug!("Card snapped back: {}", self.profile);
                        None
                    }
                }
            }
        }
    }
}
