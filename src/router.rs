//! Axum route configuration and API documentation.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth, blog, dashboard, discord, faq, navigation, partner, plan, redirect, setting, stats,
        team, testimonial,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nyxara API",
        description = "Marketing site and admin dashboard backend for the Nyxara Discord bot"
    ),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::user,
        blog::list_posts,
        blog::get_post,
        blog::list_categories,
        faq::list_entries,
        team::list_team,
        plan::list_plans,
        partner::list_partners,
        testimonial::list_testimonials,
        stats::get_stats,
        stats::find_guild,
        navigation::get_navigation,
        setting::get_settings,
        setting::update_setting,
        dashboard::get_dashboard,
        discord::list_guilds,
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::user))
        .route("/api/blog", get(blog::list_posts))
        .route("/api/blog/categories", get(blog::list_categories))
        .route("/api/blog/{slug}", get(blog::get_post))
        .route("/api/faq", get(faq::list_entries))
        .route("/api/team", get(team::list_team))
        .route("/api/plans", get(plan::list_plans))
        .route("/api/partners", get(partner::list_partners))
        .route("/api/testimonials", get(testimonial::list_testimonials))
        .route("/api/stats", get(stats::get_stats))
        .route("/api/find-guild", get(stats::find_guild))
        .route("/api/navigation", get(navigation::get_navigation))
        .route(
            "/api/settings",
            get(setting::get_settings).post(setting::update_setting),
        )
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/discord/guilds", get(discord::list_guilds))
        .route("/invite", get(redirect::invite))
        .route("/support", get(redirect::support))
        .route("/docs", get(redirect::docs))
        .route("/bot-api/{*path}", get(redirect::bot_api_proxy))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
