// SPDX-License-Identifier: MPL-2.0
//! Minimal host application for the toast queue.
//!
//! Buttons post one notification per kind; the overlay in the top-right
//! corner renders the active sequence and forwards dismiss clicks back to the
//! manager. Run with `--duration-ms <ms>` to override the visible duration.

use iced::widget::{button, column, row, stack, text};
use iced::{time, Element, Length, Subscription, Task, Theme};
use iced_toasts::config::{self, TICK_INTERVAL_MS};
use iced_toasts::ui::notifications::{Kind, Manager, NotificationMessage, Toast};
use std::time::Duration;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let duration_ms: Option<u64> = args.opt_value_from_str("--duration-ms").unwrap_or(None);

    iced::application(move || Demo::new(duration_ms), Demo::update, Demo::view)
        .title("iced_toasts demo")
        .subscription(Demo::subscription)
        .theme(Demo::theme)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Post(Kind),
    ClearAll,
    Notification(NotificationMessage),
}

struct Demo {
    notifications: Manager,
    posted: u32,
}

impl Demo {
    fn new(duration_ms: Option<u64>) -> Self {
        let mut settings = config::load().unwrap_or_default();
        if duration_ms.is_some() {
            settings.auto_dismiss_ms = duration_ms;
        }

        Self {
            notifications: Manager::from_config(&settings),
            posted: 0,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Post(kind) => {
                self.posted += 1;
                let label = match kind {
                    Kind::Success => "Settings saved",
                    Kind::Error => "Failed to save settings",
                    Kind::Info => "Loading report",
                    Kind::Warning => "Session expires soon",
                };
                self.notifications
                    .notify(kind, format!("{label} (#{})", self.posted));
            }
            Message::ClearAll => {
                self.notifications.clear();
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = column![
            text("Post a notification:"),
            row![
                button("Success").on_press(Message::Post(Kind::Success)),
                button("Error").on_press(Message::Post(Kind::Error)),
                button("Info").on_press(Message::Post(Kind::Info)),
                button("Warning").on_press(Message::Post(Kind::Warning)),
            ]
            .spacing(8),
            button("Clear all").on_press(Message::ClearAll),
            text(format!(
                "Active: {}",
                self.notifications.active_count()
            )),
        ]
        .spacing(12)
        .padding(16);

        let overlay = Toast::view_overlay(&self.notifications).map(Message::Notification);

        stack![
            column![controls].width(Length::Fill).height(Length::Fill),
            overlay,
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Only poll while something can expire, as the host application does.
        if self.notifications.has_notifications() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS))
                .map(|_| Message::Notification(NotificationMessage::Tick))
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
