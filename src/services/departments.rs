//! Department directory - business logic only.

use crate::domain::{Department, FetchError, Result};
use crate::repositories::ApiClient;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct DepartmentListDto {
    #[allow(dead_code)]
    #[serde(default)]
    message: Option<String>,
    data: Vec<DepartmentDto>,
}

#[derive(Debug, Deserialize)]
struct DepartmentDto {
    #[serde(rename = "maPb")]
    id: i64,
    #[serde(rename = "tenPb")]
    name: String,
}

/// Fetch the full department list. Called once per dashboard session.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure or a malformed envelope.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Department>> {
    let body = client.get_json("/PhongBan").await?;
    parse_departments(body)
}

fn parse_departments(body: Value) -> Result<Vec<Department>> {
    let list: DepartmentListDto =
        serde_json::from_value(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    Ok(list
        .data
        .into_iter()
        .map(|d| Department {
            id: d.id,
            name: d.name,
        })
        .collect())
}
