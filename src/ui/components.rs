//! Reusable UI components.

use chrono::NaiveDateTime;
use iced::widget::{button, container, text, Text};
use iced::{Color, Element, Fill};

pub fn format_time(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn header_cell(label: &str) -> Text<'_> {
    text(label).size(15).color(Color::from_rgb(0.7, 0.7, 0.7))
}

/// Cell for a check-in/check-out time; flagged cells render red.
pub fn time_text<'a>(time: Option<NaiveDateTime>, flagged: bool) -> Text<'a> {
    text(format_time(time)).size(15).color(if flagged {
        Color::from_rgb(0.95, 0.35, 0.35)
    } else {
        Color::from_rgb(0.75, 0.75, 0.75)
    })
}

pub fn notice_text<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    container(
        text(message)
            .size(16)
            .color(Color::from_rgb(0.6, 0.6, 0.6)),
    )
    .padding(20)
    .center_x(Fill)
    .into()
}

pub fn error_box<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    container(
        text(message)
            .size(14)
            .color(Color::from_rgb(1.0, 0.55, 0.55)),
    )
    .padding(12)
    .width(Fill)
    .style(|_| container::Style {
        background: Some(iced::Background::Color(Color::from_rgb(0.25, 0.12, 0.12))),
        border: iced::Border {
            color: Color::from_rgb(0.6, 0.3, 0.3),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
    .into()
}

pub fn card_container<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    bg: Color,
    border: Color,
) -> container::Container<'a, M> {
    container(content)
        .width(Fill)
        .style(move |_| container::Style {
            background: Some(iced::Background::Color(bg)),
            border: iced::Border {
                color: border,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
}

pub fn page_button_style(
    is_current: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let base_color = if is_current {
            Color::from_rgb(0.2, 0.45, 0.85)
        } else {
            match status {
                button::Status::Hovered => Color::from_rgb(0.3, 0.35, 0.45),
                button::Status::Pressed => Color::from_rgb(0.15, 0.2, 0.25),
                _ => Color::from_rgb(0.2, 0.25, 0.3),
            }
        };
        button::Style {
            background: Some(iced::Background::Color(base_color)),
            text_color: Color::WHITE,
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
