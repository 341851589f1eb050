//! Core of the Inudoption swipe deck.
//!
//! Everything in here is independent of the GUI toolkit: the profile records and their seed,
//! the [`Stack`] of live cards with its layout rules, the per-card drag [`CardGesture`] and the
//! notification seam used to welcome the user once the deck is on screen.

use thiserror::Error;

pub mod card;
pub mod fs;
pub mod notification;
pub mod profile;
pub mod stack;

pub use card::{Card, CardEvent, CardGesture, DragEvent, GesturePhase, Outcome, Translation};
pub use profile::{Profile, ProfileId};
pub use stack::{CardLayout, Stack, StackLayout};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Profile id {0} appears more than once")]
    DuplicateProfileId(ProfileId),
    #[error("Notification trigger interval must be greater than zero")]
    InvalidTrigger,
    #[error("Notification authorization failed: {0}")]
    Authorization(String),
    #[error("Notification service is no longer running")]
    ServiceClosed,
    #[error("Notifications can only be scheduled from within a tokio runtime")]
    NoRuntime,
    #[error("$HOME must exist to resolve {0}")]
    MissingHome(&'static str),
    #[error("I/O error {0}")]
    Io(#[from] std::io::Error),
}
