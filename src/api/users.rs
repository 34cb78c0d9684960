use actix_web::{http::StatusCode, web, HttpResponse};

use crate::models::{ApiResponse, InsertResult, UserRequest, UserResponse};
use crate::services::{parse_user_id, UserService};
use crate::utils::AppError;

pub const DELETED_MESSAGE: &str = "User successfully deleted";

/// Erros do extractor de JSON também saem no envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidBody(err.to_string()).into())
}

/// POST /user - Cria usuário
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<InsertResult>),
        (status = 400, description = "Malformed body or missing name"),
        (status = 500, description = "Storage error or timeout")
    )
)]
pub async fn create_user(
    service: web::Data<UserService>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /user - Creating user");

    let created = service.create_user(body.into_inner()).await?;
    Ok(ApiResponse::success(StatusCode::CREATED, created).into_http_response())
}

/// GET /user/{userId} - Busca usuário
#[utoipa::path(
    get,
    path = "/user/{userId}",
    tag = "Users",
    params(("userId" = String, Path, description = "User id (24-char hex)")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed user id"),
        (status = 500, description = "User not found, storage error or timeout")
    )
)]
pub async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🔍 GET /user/{}", user_id);

    let id = parse_user_id(&user_id)?;
    let user = service.get_user(id).await?;
    Ok(ApiResponse::success(StatusCode::OK, user).into_http_response())
}

/// GET /user - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (
            status = 200,
            description = "All users, empty array if none",
            body = ApiResponse<Vec<UserResponse>>
        ),
        (status = 500, description = "Storage error or timeout")
    )
)]
pub async fn get_all_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /user - Listing users");

    let users = service.list_users().await?;
    log::info!("✅ Listed {} users", users.len());
    Ok(ApiResponse::success(StatusCode::OK, users).into_http_response())
}

/// PUT /user/{userId} - Atualiza name e avatarUrl
#[utoipa::path(
    put,
    path = "/user/{userId}",
    tag = "Users",
    params(("userId" = String, Path, description = "User id (24-char hex)")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed body, missing name or malformed user id"),
        (status = 500, description = "User not found, storage error or timeout")
    )
)]
pub async fn update_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🔧 PUT /user/{} - Updating user", user_id);

    let id = parse_user_id(&user_id)?;
    let user = service.update_user(id, body.into_inner()).await?;
    Ok(ApiResponse::success(StatusCode::OK, user).into_http_response())
}

/// DELETE /user/{userId} - Remove usuário
#[utoipa::path(
    delete,
    path = "/user/{userId}",
    tag = "Users",
    params(("userId" = String, Path, description = "User id (24-char hex)")),
    responses(
        (status = 200, description = "User deleted, data is null"),
        (status = 400, description = "Malformed user id"),
        (status = 500, description = "Nothing deleted, storage error or timeout")
    )
)]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🗑️  DELETE /user/{}", user_id);

    let id = parse_user_id(&user_id)?;
    service.delete_user(id).await?;
    Ok(ApiResponse::empty(StatusCode::OK, DELETED_MESSAGE).into_http_response())
}
