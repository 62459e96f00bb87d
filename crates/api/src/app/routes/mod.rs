use axum::Router;

pub mod roles;
pub mod system;
pub mod users;

/// Router for all authenticated endpoints.
///
/// `/user/register` and `/health` live outside this router; see
/// `app::build_app`.
pub fn router() -> Router {
    Router::new()
        .nest("/user", users::router())
        .nest("/role", roles::router())
}
