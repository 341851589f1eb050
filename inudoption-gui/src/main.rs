use iced::{
    Color, Element,
    Length::Fill,
    Task, Theme, application,
    widget::{button, column, container, mouse_area, opaque, row, space, stack, text},
};
use inudoption_lib::{
    Stack,
    notification::{NotificationRequest, Registration},
};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::stack_view::{self, StackView},
    config::GuiConfig,
    icons::icon,
};

pub mod components;
pub mod config;
pub mod icons;
pub mod notifications;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    StackView(stack_view::Message),
    Registered(Registration),
    NotificationDelivered(NotificationRequest),
    BannerClosed,
}

struct App {
    title: String,
    theme: Theme,
    registration: Option<Registration>,
    /// Most recently delivered notification, shown until closed
    banner: Option<NotificationRequest>,
    // Components
    stack_view: StackView,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            debug!("Logging was already set up");
        }

        let cfg = GuiConfig::load();

        (
            Self {
                title: "Inudoption".into(),
                theme: cfg.theme(),
                registration: None,
                banner: None,
                stack_view: StackView::new(Stack::seeded()),
            },
            notifications::start(
                cfg.notifications,
                Message::Registered,
                Message::NotificationDelivered,
            ),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StackView(msg) => match self.stack_view.update(msg) {
                stack_view::Action::None => {}
                stack_view::Action::Dismissed(profile) => info!(
                    "Dismissed {profile}, {} profiles left",
                    self.stack_view.remaining()
                ),
            },
            Message::Registered(registration) => {
                debug!("Notification registration finished: {registration:?}");
                self.registration = Some(registration);
            }
            Message::NotificationDelivered(request) => {
                info!(
                    "Delivering notification {}: {} ({} sound)",
                    request.id, request.content.title, request.content.sound
                );
                // The banner takes over the pointer, a card mid-swipe would never see its release
                self.stack_view.cancel_drags();
                self.banner = Some(request);
            }
            Message::BannerClosed => self.banner = None,
        }

        Task::none()
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let notifications_status = match self.registration {
            Some(Registration { granted: true, .. }) => "Notifications on",
            Some(Registration { granted: false, .. }) => "Notifications off",
            None => "",
        };

        let content = column![
            // Top bar
            row![
                text(&self.title).size(24),
                space::horizontal(),
                text(format!("{} left", self.stack_view.remaining())),
                icon("notifications").width(20).height(20),
                text(notifications_status),
            ]
            .spacing(10),
            // Deck
            self.stack_view.view().map(Message::StackView),
        ]
        .padding(20)
        .height(Fill);

        match &self.banner {
            Some(request) => notification_banner(content, request),
            None => content.into(),
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// Show a delivered notification over `base`. Clicking anywhere outside the banner closes it.
fn notification_banner<'a>(
    base: impl Into<Element<'a, Message>>,
    request: &'a NotificationRequest,
) -> Element<'a, Message> {
    let banner = container(
        column![
            row![
                icon("notifications").width(24).height(24),
                text(&request.content.title).size(20),
            ]
            .spacing(10),
            text(&request.content.subtitle),
            row![
                space::horizontal(),
                button("OK").on_press(Message::BannerClosed)
            ],
        ]
        .spacing(10),
    )
    .padding(20)
    .width(360)
    .style(container::rounded_box);

    // Dim the deck and slide the banner in at the top, like a system notification
    let backdrop = mouse_area(
        container(opaque(banner))
            .center_x(Fill)
            .padding(40)
            .height(Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::BannerClosed);

    stack![base.into(), opaque(backdrop)]
        .width(Fill)
        .height(Fill)
        .into()
}
