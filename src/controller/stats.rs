use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    model::{
        api::{ApiEnvelope, ApiMeta, ErrorDto},
        discord::GuildSummaryDto,
        stats::StatsDto,
    },
    service::stats::StatsService,
    state::AppState,
};

/// Tag for grouping bot telemetry endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get public bot statistics.
///
/// Served from live bot API telemetry when the bot is reachable, otherwise from
/// simulated numbers in the same shape. `meta.source` is `live` or `simulated`
/// accordingly; this route never fails.
///
/// # Returns
/// - `200 OK` - Bot statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Bot statistics", body = ApiEnvelope<StatsDto>),
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StatsService::new(&state.bot_api);

    let (stats, source) = service.overview().await;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok_with_meta(stats, ApiMeta::source(source))),
    ))
}

#[derive(Deserialize)]
pub struct FindGuildParams {
    pub guild_id: Option<String>,
}

/// Search for a guild the bot is in.
///
/// Looks the guild up through the bot control API by ID or name fragment.
///
/// # Returns
/// - `200 OK` - Matching guilds (possibly empty)
/// - `400 Bad Request` - `guild_id` parameter missing or empty, code `GUILD_ID_REQUIRED`
/// - `500 Internal Server Error` - Bot API unreachable
#[utoipa::path(
    get,
    path = "/api/find-guild",
    tag = STATS_TAG,
    params(
        ("guild_id" = Option<String>, Query, description = "Guild ID or name fragment to search for")
    ),
    responses(
        (status = 200, description = "Matching guilds", body = ApiEnvelope<Vec<GuildSummaryDto>>),
        (status = 400, description = "Missing guild_id parameter", body = ErrorDto),
        (status = 500, description = "Bot API unreachable", body = ErrorDto)
    ),
)]
pub async fn find_guild(
    State(state): State<AppState>,
    Query(params): Query<FindGuildParams>,
) -> Result<impl IntoResponse, AppError> {
    let guild_id = match params.guild_id.as_deref() {
        Some(guild_id) if !guild_id.is_empty() => guild_id,
        _ => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_code(
                    "Guild ID is required",
                    "GUILD_ID_REQUIRED",
                )),
            )
                .into_response())
        }
    };

    let guilds = state.bot_api.find_guild(guild_id).await?;

    let guilds: Vec<GuildSummaryDto> = guilds
        .into_iter()
        .map(|guild| GuildSummaryDto {
            id: guild.id,
            name: guild.name,
            icon: guild.icon,
            member_count: guild.member_count,
            shard_id: guild.shard_id,
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(guilds))).into_response())
}
