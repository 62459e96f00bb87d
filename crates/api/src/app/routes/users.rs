//! User endpoints.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

use crate::app::dto::{
    self, CreateUserRequest, UpdatePasswordRequest, UpdateUserRequest, UserResponse,
};
use crate::app::errors::{rejection_response, ApiResult};
use crate::app::services::AppServices;
use crate::app::validate;

pub fn router() -> Router {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/get/:id", get(get_by_id))
        .route("/get-by-username/:username", get(get_by_username))
        .route("/update", post(update))
        .route("/update-password", post(update_password))
        .route("/delete/:id", delete(delete_user))
}

pub async fn get_all(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let users: Vec<UserResponse> = services
        .users
        .list_users()
        .into_iter()
        .map(dto::user_to_response)
        .collect();
    ApiResult::ok(users).into_response()
}

pub async fn get_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    match services.users.get_user_by_id(&id) {
        Ok(user) => ApiResult::ok(dto::user_to_response(user)).into_response(),
        Err(e) => ApiResult::<UserResponse>::from(e).into_response(),
    }
}

pub async fn get_by_username(
    Extension(services): Extension<Arc<AppServices>>,
    Path(username): Path<String>,
) -> Response {
    match services.users.get_user_by_username(&username) {
        Ok(user) => ApiResult::ok(dto::user_to_response(user)).into_response(),
        Err(e) => ApiResult::<UserResponse>::from(e).into_response(),
    }
}

/// POST /user/register — the only publicly reachable write.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rej) => return rejection_response(rej),
    };

    let violations = validate::validate_create_user(&req);
    if !violations.is_empty() {
        return ApiResult::<UserResponse>::failure(StatusCode::BAD_REQUEST, violations)
            .into_response();
    }

    match services
        .users
        .create_user(&req.username, &req.email, &req.password, &req.role_names)
    {
        Ok(user) => ApiResult::ok(dto::user_to_response(user)).into_response(),
        Err(e) => ApiResult::<UserResponse>::from(e).into_response(),
    }
}

pub async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rej) => return rejection_response(rej),
    };

    let violations = validate::validate_update_user(&req);
    if !violations.is_empty() {
        return ApiResult::<UserResponse>::failure(StatusCode::BAD_REQUEST, violations)
            .into_response();
    }

    match services.users.update_user(&req.id, &req.username, &req.email) {
        Ok(user) => ApiResult::ok(dto::user_to_response(user)).into_response(),
        Err(e) => ApiResult::<UserResponse>::from(e).into_response(),
    }
}

pub async fn update_password(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<UpdatePasswordRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rej) => return rejection_response(rej),
    };

    let violations = validate::validate_update_password(&req);
    if !violations.is_empty() {
        return ApiResult::<UserResponse>::failure(StatusCode::BAD_REQUEST, violations)
            .into_response();
    }

    match services
        .users
        .update_password(&req.id, &req.current_password, &req.new_password)
    {
        Ok(user) => ApiResult::ok(dto::user_to_response(user)).into_response(),
        Err(e) => ApiResult::<UserResponse>::from(e).into_response(),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    match services.users.delete_user(&id) {
        Ok(()) => ApiResult::ok(serde_json::Value::Null).into_response(),
        Err(e) => ApiResult::<serde_json::Value>::from(e).into_response(),
    }
}
