use crate::ui;
use attendance_dashboard::services::{attendance, departments};
use attendance_dashboard::{
    ApiClient, AttendanceRecord, Config, CredentialProvider, Department, FetchError, NoToken,
    PageResult, Pagination, StaticToken,
};
use iced::widget::{button, column, container, pick_list, row, scrollable, text, Space};
use iced::{Element, Fill, Task};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    DepartmentsLoaded(Result<Vec<Department>, FetchError>),
    DepartmentSelected(Department),
    PageRequested(u32),
    PreviousPage,
    NextPage,
    Refresh,
    AttendanceLoaded(u64, Result<PageResult, FetchError>),
}

pub struct State {
    client: ApiClient,
    page_size: u32,
    departments: Vec<Department>,
    selected_department: Option<Department>,
    rows: Vec<AttendanceRecord>,
    pagination: Option<Pagination>,
    current_page: u32,
    loading: bool,
    error: Option<String>,
    // Sequence number of the latest issued fetch; responses tagged with an
    // older number are discarded.
    fetch_seq: u64,
}

impl State {
    pub fn new(config: &Config) -> Self {
        let credentials: Arc<dyn CredentialProvider> = match &config.token {
            Some(token) => Arc::new(StaticToken(token.clone())),
            None => Arc::new(NoToken),
        };

        Self {
            client: ApiClient::new(config.base_url.clone(), credentials),
            page_size: config.page_size,
            departments: Vec::new(),
            selected_department: None,
            rows: Vec::new(),
            pagination: None,
            current_page: 1,
            loading: false,
            error: None,
            fetch_seq: 0,
        }
    }
}

pub fn init(config: Config) -> (State, Task<Message>) {
    let state = State::new(&config);
    let client = state.client.clone();
    (
        state,
        Task::perform(load_departments(client), Message::DepartmentsLoaded),
    )
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::DepartmentsLoaded(Ok(departments)) => {
            state.departments = departments;
            // The dashboard lands on the first department of the directory.
            if state.selected_department.is_none() {
                if let Some(first) = state.departments.first().cloned() {
                    state.selected_department = Some(first);
                    state.current_page = 1;
                    return start_fetch(state);
                }
            }
            Task::none()
        }
        Message::DepartmentsLoaded(Err(e)) => {
            state.error = Some(format!("Không thể tải danh sách phòng ban: {}", e));
            Task::none()
        }
        Message::DepartmentSelected(department) => {
            if state.loading || state.selected_department.as_ref() == Some(&department) {
                return Task::none();
            }
            state.selected_department = Some(department);
            state.current_page = 1;
            start_fetch(state)
        }
        Message::PageRequested(page) => {
            let accepted = state
                .pagination
                .map(|p| p.is_valid_target(page))
                .unwrap_or(false);
            if state.loading || !accepted {
                return Task::none();
            }
            state.current_page = page;
            start_fetch(state)
        }
        Message::PreviousPage => {
            let target = state.current_page.saturating_sub(1);
            update(state, Message::PageRequested(target))
        }
        Message::NextPage => update(state, Message::PageRequested(state.current_page + 1)),
        Message::Refresh => {
            if state.loading {
                Task::none()
            } else {
                start_fetch(state)
            }
        }
        Message::AttendanceLoaded(seq, result) => {
            if seq != state.fetch_seq {
                tracing::debug!(
                    seq,
                    latest = state.fetch_seq,
                    "discarding stale attendance response"
                );
                return Task::none();
            }
            state.loading = false;
            match result {
                Ok(page) => {
                    // The server echo is canonical; it wins over the request.
                    state.current_page = page.page_index;
                    state.pagination = Some(Pagination::from_page(&page));
                    state.rows = page.items;
                    state.error = None;
                }
                Err(e) => {
                    state.rows.clear();
                    state.pagination = None;
                    state.error = Some(e.to_user_message());
                }
            }
            Task::none()
        }
    }
}

fn start_fetch(state: &mut State) -> Task<Message> {
    let Some(department) = state.selected_department.clone() else {
        return Task::none();
    };

    state.fetch_seq += 1;
    state.loading = true;
    state.error = None;

    let seq = state.fetch_seq;
    let client = state.client.clone();
    let (page, page_size) = (state.current_page, state.page_size);

    Task::perform(
        load_attendance(client, department.id, page, page_size),
        move |result| Message::AttendanceLoaded(seq, result),
    )
}

pub fn view(state: &State) -> Element<'_, Message> {
    let mut content = column![view_header(state)].spacing(5).padding(15);

    if let Some(error) = &state.error {
        content = content.push(ui::components::error_box(error));
    }

    content = content
        .push(Space::with_height(15))
        .push(view_attendance_card(state));

    container(scrollable(content)).width(Fill).height(Fill).into()
}

fn view_header(state: &State) -> Element<'_, Message> {
    let picker: Element<'_, Message> = if state.departments.is_empty() {
        text("Đang tải danh sách phòng ban...")
            .size(14)
            .color(iced::Color::from_rgb(0.6, 0.6, 0.6))
            .into()
    } else {
        pick_list(
            state.departments.clone(),
            state.selected_department.clone(),
            Message::DepartmentSelected,
        )
        .placeholder("Chọn phòng ban")
        .into()
    };

    row![
        text("THEO DÕI CHẤM CÔNG")
            .size(26)
            .color(iced::Color::from_rgb(0.9, 0.9, 1.0)),
        Space::with_width(Fill),
        picker,
        button("Làm mới")
            .on_press_maybe((!state.loading).then_some(Message::Refresh))
            .padding([8, 16]),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_attendance_card(state: &State) -> Element<'_, Message> {
    let title = state
        .selected_department
        .as_ref()
        .map(|d| d.name.as_str())
        .unwrap_or("Chấm công");

    let mut card = column![text(title).size(22)].spacing(12).padding(22);

    if state.loading {
        card = card.push(ui::components::notice_text("Đang tải dữ liệu..."));
    } else if state.rows.is_empty() {
        card = card.push(ui::components::notice_text("Không có dữ liệu chấm công"));
    } else {
        card = card.push(ui::table_view::view(&state.rows));
        if let Some(pagination) = state.pagination {
            card = card.push(ui::pagination_view::view(
                pagination,
                state.loading,
                Message::PageRequested,
                Message::PreviousPage,
                Message::NextPage,
            ));
        }
    }

    ui::components::card_container(
        card,
        iced::Color::from_rgb(0.15, 0.2, 0.25),
        iced::Color::from_rgb(0.3, 0.4, 0.5),
    )
    .into()
}

async fn load_departments(client: ApiClient) -> Result<Vec<Department>, FetchError> {
    departments::fetch_all(&client).await
}

async fn load_attendance(
    client: ApiClient,
    department_id: i64,
    page: u32,
    page_size: u32,
) -> Result<PageResult, FetchError> {
    attendance::fetch_page(&client, department_id, page, page_size).await
}
