//! Pagination strip UI.

use crate::ui::components;
use attendance_dashboard::Pagination;
use iced::widget::{button, row, text, Space};
use iced::{Color, Element, Fill};

/// Record-range summary plus Trước / page buttons / Sau. With a single page
/// there is nothing to navigate, so only the record count is shown.
pub fn view<'a, M: Clone + 'a>(
    pagination: Pagination,
    loading: bool,
    on_page: impl Fn(u32) -> M + 'a,
    on_previous: M,
    on_next: M,
) -> Element<'a, M> {
    if pagination.total_pages <= 1 {
        return text(format!("Hiển thị {} bản ghi", pagination.total_records))
            .size(13)
            .color(Color::from_rgb(0.6, 0.6, 0.6))
            .into();
    }

    let (start, end) = pagination.record_range();

    let mut pages = row![].spacing(4);
    for page in pagination.visible_pages() {
        let is_current = page == pagination.current_page;
        let mut page_button = button(text(page.to_string()).size(13))
            .padding([4, 10])
            .style(components::page_button_style(is_current));
        if !is_current && !loading {
            page_button = page_button.on_press(on_page(page));
        }
        pages = pages.push(page_button);
    }

    row![
        text(format!(
            "Hiển thị {}-{} trên {} bản ghi",
            start, end, pagination.total_records
        ))
        .size(13)
        .color(Color::from_rgb(0.6, 0.6, 0.6)),
        Space::with_width(Fill),
        button(text("Trước").size(13))
            .padding([4, 10])
            .on_press_maybe((pagination.can_go_previous() && !loading).then_some(on_previous)),
        pages,
        button(text("Sau").size(13))
            .padding([4, 10])
            .on_press_maybe((pagination.can_go_next() && !loading).then_some(on_next)),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into()
}
