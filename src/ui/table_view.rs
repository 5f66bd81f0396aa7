//! Attendance table UI.

use crate::ui::components;
use attendance_dashboard::AttendanceRecord;
use iced::widget::{column, row, text, Column, Row};
use iced::{Color, Fill};

const COL_INDEX: f32 = 50.0;
const COL_ID: f32 = 140.0;
const COL_TIME: f32 = 100.0;

pub fn view<M: 'static>(rows: &[AttendanceRecord]) -> Column<'_, M> {
    let header = row![
        components::header_cell("STT").width(COL_INDEX),
        components::header_cell("Mã nhân viên").width(COL_ID),
        components::header_cell("Họ và Tên").width(Fill),
        components::header_cell("Giờ vào").width(COL_TIME),
        components::header_cell("Giờ ra").width(COL_TIME),
    ]
    .spacing(10);

    let mut table = column![header].spacing(8);

    for (index, record) in rows.iter().enumerate() {
        table = table.push(view_row(index, record));
    }

    table.push(
        text("Đỏ: vào muộn (sau 7:30) hoặc ra sớm (trước 16:30)")
            .size(12)
            .color(Color::from_rgb(0.55, 0.55, 0.55)),
    )
}

fn view_row<M>(index: usize, record: &AttendanceRecord) -> Row<'_, M> {
    row![
        text((index + 1).to_string())
            .size(15)
            .width(COL_INDEX)
            .color(Color::from_rgb(0.6, 0.6, 0.6)),
        text(&record.employee_id)
            .size(15)
            .width(COL_ID)
            .color(Color::from_rgb(0.75, 0.75, 0.75)),
        text(&record.employee_name).size(15).width(Fill),
        components::time_text(record.first_in, record.is_late_check_in()).width(COL_TIME),
        components::time_text(record.last_out, record.is_early_check_out()).width(COL_TIME),
    ]
    .spacing(10)
}
