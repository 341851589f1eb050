//! Glue between the notification service and the iced runtime.

use iced::{Task, futures::stream};
use inudoption_lib::notification::{
    LocalNotificationCenter, NotificationRequest, NotificationSettings, Registration,
    register_and_schedule,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Start the notification service: ask for permission once and forward every delivered
/// notification as a message.
pub fn start<Message>(
    settings: NotificationSettings,
    on_registration: fn(Registration) -> Message,
    on_delivery: fn(NotificationRequest) -> Message,
) -> Task<Message>
where
    Message: Send + 'static,
{
    let (center, deliveries) = LocalNotificationCenter::new(settings);

    Task::batch([
        Task::perform(
            async move { register_and_schedule(&center, settings.delay()).await },
            on_registration,
        ),
        Task::run(delivered(deliveries), on_delivery),
    ])
}

fn delivered(
    receiver: UnboundedReceiver<NotificationRequest>,
) -> impl iced::futures::Stream<Item = NotificationRequest> + Send + 'static {
    stream::unfold(receiver, |mut receiver| async move {
        receiver.recv().await.map(|request| (request, receiver))
    })
}
