//! Role endpoints. All of them require the "ADMIN" scope.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::app::dto::{self, CreateRoleRequest, RoleResponse};
use crate::app::errors::{rejection_response, ApiResult};
use crate::app::services::AppServices;
use crate::app::validate;
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/get-all", get(get_all))
        .route("/find-by-id/:id", get(find_by_id))
        .route("/create", post(create))
}

pub async fn get_all(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Response {
    if let Err(denied) = authz::require_admin(&principal) {
        return denied;
    }

    let roles: Vec<RoleResponse> = services
        .roles
        .list_roles()
        .into_iter()
        .map(dto::role_to_response)
        .collect();
    ApiResult::ok(roles).into_response()
}

pub async fn find_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(denied) = authz::require_admin(&principal) {
        return denied;
    }

    match services.roles.get_role(&id) {
        Ok(role) => ApiResult::ok(dto::role_to_response(role)).into_response(),
        Err(e) => ApiResult::<RoleResponse>::from(e).into_response(),
    }
}

pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    body: Result<Json<CreateRoleRequest>, JsonRejection>,
) -> Response {
    if let Err(denied) = authz::require_admin(&principal) {
        return denied;
    }

    let Json(req) = match body {
        Ok(b) => b,
        Err(rej) => return rejection_response(rej),
    };

    let violations = validate::validate_create_role(&req);
    if !violations.is_empty() {
        return ApiResult::<RoleResponse>::failure(StatusCode::BAD_REQUEST, violations)
            .into_response();
    }

    let role = services.roles.create_role(&req.role_name);
    ApiResult::created(dto::role_to_response(role)).into_response()
}
