//! Attendance fetch - business logic only.

use crate::domain::{PageResult, Result};
use crate::repositories::ApiClient;
use crate::services::normalize;

/// Fetch one page of attendance records for a department.
///
/// Purely request/response: no caching, no retry. A failure surfaces
/// immediately and the caller owns any retry policy.
///
/// # Errors
///
/// Returns [`crate::domain::FetchError`] on transport failure, an
/// unrecognized response shape, or an explicit failure envelope.
pub async fn fetch_page(
    client: &ApiClient,
    department_id: i64,
    page: u32,
    page_size: u32,
) -> Result<PageResult> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    tracing::debug!(department_id, page, page_size, "fetching attendance page");

    let body = client
        .post_json(
            "/AcsEvent/attendance-by-phongban",
            &[
                ("pageNumber", page.to_string()),
                ("pageSize", page_size.to_string()),
            ],
            &department_id,
        )
        .await?;

    let result = normalize::normalize_page(body, page_size)?;
    tracing::debug!(
        rows = result.items.len(),
        total = result.total_records,
        "attendance page normalized"
    );
    Ok(result)
}
