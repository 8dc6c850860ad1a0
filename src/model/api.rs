use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope returned by every JSON endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApiMeta>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            meta: None,
        }
    }

    pub fn ok_with_meta(data: T, meta: ApiMeta) -> Self {
        Self {
            success: true,
            data: Some(data),
            meta: Some(meta),
        }
    }
}

/// Envelope metadata: pagination counters and/or the payload's origin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ApiMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DataSource>,
}

impl ApiMeta {
    pub fn pagination(total: u64, page: u64, per_page: u64, total_pages: u64) -> Self {
        Self {
            total: Some(total),
            page: Some(page),
            per_page: Some(per_page),
            total_pages: Some(total_pages),
            ..Default::default()
        }
    }

    pub fn source(source: DataSource) -> Self {
        Self {
            source: Some(source),
            ..Default::default()
        }
    }
}

/// Origin of a payload, so consumers can tell degraded responses apart.
///
/// `Database` and `Fallback` apply to content routes that substitute a static
/// payload when the database is unavailable; `Live` and `Simulated` apply to bot
/// telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Database,
    Fallback,
    Live,
    Simulated,
}

/// Error body shared by all failure responses.
///
/// `code` carries the ad hoc machine-readable tags some routes document
/// (`GUILD_ID_REQUIRED`, `DASHBOARD_FETCH_ERROR`); most errors have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: Some(code.into()),
        }
    }
}
