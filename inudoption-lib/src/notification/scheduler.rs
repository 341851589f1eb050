use std::time::Duration;

use tracing::info;

use crate::notification::{
    AuthorizationOption, NotificationCenter, NotificationId, NotificationRequest,
};

/// Everything the welcome flow asks permission for.
pub const AUTHORIZATION_OPTIONS: [AuthorizationOption; 4] = [
    AuthorizationOption::Sound,
    AuthorizationOption::Alert,
    AuthorizationOption::CriticalAlert,
    AuthorizationOption::Badge,
];

/// Result of the one-shot welcome flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registration {
    pub granted: bool,
    pub scheduled: Option<NotificationId>,
}

/// Ask for permission and, if granted, register for remote notifications and schedule the
/// welcome notification `delay` from now.
///
/// Runs once. Denials and failures are logged and leave nothing scheduled; there is no retry.
pub async fn register_and_schedule<C>(center: &C, delay: Duration) -> Registration
where
    C: NotificationCenter,
{
    let granted = match center.request_authorization(&AUTHORIZATION_OPTIONS).await {
        Ok(granted) => granted,
        Err(e) => {
            info!("Notification authorization failed: {e}");
            false
        }
    };

    if !granted {
        info!("Notifications were not granted, nothing will be scheduled");
        return Registration::default();
    }

    center.register_for_remote_notifications();
    info!("The user registered for remote notifications");

    info!("Scheduling alert...");
    let request = NotificationRequest::welcome(delay);
    let id = request.id;

    match center.add(request) {
        Ok(()) => Registration {
            granted,
            scheduled: Some(id),
        },
        Err(e) => {
            info!("Could not schedule the welcome notification: {e}");
            Registration {
                granted,
                scheduled: None,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        future::Future,
        sync::{
            Mutex,
            atomic::{AtomicBool, Ordering},
        },
    };

    use super::*;
    use crate::{Error, Result, notification::Sound};

    enum Answer {
        Grant,
        Deny,
        Fail,
    }

    struct RecordingCenter {
        answer: Answer,
        requested: Mutex<Vec<AuthorizationOption>>,
        added: Mutex<Vec<NotificationRequest>>,
        registered: AtomicBool,
    }

    impl RecordingCenter {
        fn new(answer: Answer) -> Self {
            Self {
                answer,
                requested: Mutex::new(Vec::new()),
                added: Mutex::new(Vec::new()),
                registered: AtomicBool::new(false),
            }
        }

        fn added(&self) -> Vec<NotificationRequest> {
            self.added.lock().unwrap().clone()
        }
    }

    impl NotificationCenter for RecordingCenter {
        fn request_authorization(
            &self,
            options: &[AuthorizationOption],
        ) -> impl Future<Output = Result<bool>> + Send {
            self.requested.lock().unwrap().extend_from_slice(options);
            let answer = match self.answer {
                Answer::Grant => Ok(true),
                Answer::Deny => Ok(false),
                Answer::Fail => Err(Error::Authorization("prompt dismissed".into())),
            };

            async move { answer }
        }

        fn register_for_remote_notifications(&self) {
            self.registered.store(true, Ordering::SeqCst);
        }

        fn add(&self, request: NotificationRequest) -> Result<()> {
            request.trigger.validate()?;
            self.added.lock().unwrap().push(request);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_granted() {
        let center = RecordingCenter::new(Answer::Grant);

        let registration = register_and_schedule(&center, Duration::from_secs(5)).await;

        let added = center.added();
        assert_eq!(added.len(), 1);
        let request = added.first().unwrap();

        assert!(registration.granted);
        assert_eq!(registration.scheduled, Some(request.id));
        assert_eq!(request.content.sound, Sound::DefaultCritical);
        assert_eq!(request.trigger.interval(), Duration::from_secs(5));
        assert!(!request.trigger.repeats());
        assert!(center.registered.load(Ordering::SeqCst));
        assert_eq!(*center.requested.lock().unwrap(), AUTHORIZATION_OPTIONS);
    }

    #[tokio::test]
    async fn test_denied() {
        let center = RecordingCenter::new(Answer::Deny);

        let registration = register_and_schedule(&center, Duration::from_secs(5)).await;

        assert_eq!(registration, Registration::default());
        assert!(center.added().is_empty());
        assert!(!center.registered.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_failed_authorization() {
        let center = RecordingCenter::new(Answer::Fail);

        let registration = register_and_schedule(&center, Duration::from_secs(5)).await;

        assert!(!registration.granted);
        assert!(center.added().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_trigger() {
        let center = RecordingCenter::new(Answer::Grant);

        let registration = register_and_schedule(&center, Duration::ZERO).await;

        assert!(registration.granted);
        assert_eq!(registration.scheduled, None);
        assert!(center.added().is_empty());
    }
}
