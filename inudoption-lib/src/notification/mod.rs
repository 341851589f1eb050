//! Seam to the notification service.
//!
//! The deck only ever needs three things from it: ask for permission, schedule a one-off
//! alert and register for remote notifications. [`NotificationCenter`] captures exactly that so
//! the welcome flow in [`scheduler`] can run against the desktop implementation in [`local`] or
//! against a test double.

use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use derive_more::Display;
use strum::Display as StrumDisplay;

use crate::{Error, Result};

pub mod local;
pub mod scheduler;

pub use local::{LocalNotificationCenter, NotificationSettings};
pub use scheduler::{AUTHORIZATION_OPTIONS, Registration, register_and_schedule};

pub trait NotificationCenter {
    /// Ask the user for permission to show notifications. Resolves to whether it was granted.
    fn request_authorization(
        &self,
        options: &[AuthorizationOption],
    ) -> impl Future<Output = Result<bool>> + Send;

    fn register_for_remote_notifications(&self);

    /// Schedule a notification for delivery once its trigger fires.
    fn add(&self, request: NotificationRequest) -> Result<()>;
}

/// Kinds of interruption the app asks permission for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum AuthorizationOption {
    Sound,
    Alert,
    #[strum(to_string = "Critical alert")]
    CriticalAlert,
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
pub enum Sound {
    #[default]
    Default,
    #[strum(to_string = "Default (critical)")]
    DefaultCritical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub subtitle: String,
    pub sound: Sound,
}

/// Fires once `interval` has elapsed since the request was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeIntervalTrigger {
    interval: Duration,
    repeats: bool,
}

impl TimeIntervalTrigger {
    pub fn new(interval: Duration, repeats: bool) -> Self {
        Self { interval, repeats }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn repeats(&self) -> bool {
        self.repeats
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(Error::InvalidTrigger);
        }

        Ok(())
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Allocate an id that hasn't been handed out before in this process.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub id: NotificationId,
    pub content: NotificationContent,
    pub trigger: TimeIntervalTrigger,
}

impl NotificationRequest {
    pub fn new(content: NotificationContent, trigger: TimeIntervalTrigger) -> Self {
        Self {
            id: NotificationId::next(),
            content,
            trigger,
        }
    }

    /// The one-off nudge sent shortly after the deck is first shown.
    pub fn welcome(delay: Duration) -> Self {
        Self::new(
            NotificationContent {
                title: "Say hi to your new friend".into(),
                subtitle: "Launch app to connect with doggie".into(),
                sound: Sound::DefaultCritical,
            },
            TimeIntervalTrigger::new(delay, false),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_welcome() {
        let request = NotificationRequest::welcome(Duration::from_secs(5));

        assert_eq!(request.content.title, "Say hi to your new friend");
        assert_eq!(request.content.subtitle, "Launch app to connect with doggie");
        assert_eq!(request.content.sound, Sound::DefaultCritical);
        assert_eq!(request.trigger.interval(), Duration::from_secs(5));
        assert!(!request.trigger.repeats());
    }

    #[test]
    fn test_ids_are_unique() {
        let first = NotificationRequest::welcome(Duration::from_secs(5));
        let second = NotificationRequest::welcome(Duration::from_secs(5));

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let trigger = TimeIntervalTrigger::new(Duration::ZERO, false);

        assert!(matches!(trigger.validate(), Err(Error::InvalidTrigger)));
        assert!(
            TimeIntervalTrigger::new(Duration::from_secs(1), false)
                .validate()
                .is_ok()
        );
    }
}
