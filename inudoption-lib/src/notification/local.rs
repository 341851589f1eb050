use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tokio::{
    runtime::Handle,
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    time::sleep,
};
use tracing::{debug, info};

use crate::{
    Error, Result,
    notification::{AuthorizationOption, NotificationCenter, NotificationRequest},
};

/// User-facing knobs of the desktop notification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Answer given whenever the app asks for permission.
    pub allow: bool,
    /// Delay before the welcome notification shows up.
    pub delay_secs: u64,
}

impl NotificationSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            allow: true,
            delay_secs: 5,
        }
    }
}

/// Desktop notification service.
///
/// Requests are held by a tokio timer and handed to the receiver returned from
/// [`LocalNotificationCenter::new`] once their trigger fires. Whoever drains that receiver is
/// responsible for showing them.
#[derive(Debug, Clone)]
pub struct LocalNotificationCenter {
    settings: NotificationSettings,
    sender: UnboundedSender<NotificationRequest>,
    remote_registered: Arc<AtomicBool>,
}

impl LocalNotificationCenter {
    pub fn new(settings: NotificationSettings) -> (Self, UnboundedReceiver<NotificationRequest>) {
        let (sender, receiver) = unbounded_channel();

        (
            Self {
                settings,
                sender,
                remote_registered: Arc::new(AtomicBool::new(false)),
            },
            receiver,
        )
    }

    pub fn is_registered_for_remote(&self) -> bool {
        self.remote_registered.load(Ordering::Relaxed)
    }
}

impl NotificationCenter for LocalNotificationCenter {
    fn request_authorization(
        &self,
        options: &[AuthorizationOption],
    ) -> impl Future<Output = Result<bool>> + Send {
        let requested: Vec<String> = options.iter().map(ToString::to_string).collect();
        let allow = self.settings.allow;

        async move {
            debug!("Authorization requested for: {}", requested.join(", "));
            Ok(allow)
        }
    }

    fn register_for_remote_notifications(&self) {
        // There is no push backend to talk to, remember the registration for diagnostics
        self.remote_registered.store(true, Ordering::Relaxed);
        info!("Registered for remote notifications");
    }

    fn add(&self, request: NotificationRequest) -> Result<()> {
        request.trigger.validate()?;

        if self.sender.is_closed() {
            return Err(Error::ServiceClosed);
        }

        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let sender = self.sender.clone();
        let delay = request.trigger.interval();

        debug!("Notification {} scheduled in {delay:?}", request.id);

        runtime.spawn(async move {
            sleep(delay).await;
            let id = request.id;
            if sender.send(request).is_err() {
                debug!("Notification {id} dropped, nobody is listening anymore");
            }
        });

        Ok(())
    }
}
