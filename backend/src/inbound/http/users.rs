//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users          {"name":"hit9","email":"hit9@example.com"}
//! PUT    /api/v1/users/{id}     {"name":"hit9","universal":true}
//! DELETE /api/v1/users/{id}
//! GET    /api/v1/users/{id}/projects
//! ```
//!
//! Path identifiers are parsed before the body so a bad id is reported even
//! when the body is also malformed. Bodies are decoded by hand so every
//! decoding failure surfaces as the domain `bad_request` error rather than
//! Actix's default plain-text rejection.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::domain::{Error, Project, ResourceKind, User, UserFields, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ProjectSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/users`.
///
/// Omitted fields take the creation defaults: both notification channels
/// enabled, not universal, lowest rule level. An explicit `null` is treated
/// the same as an omitted field.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_true")]
    pub enable_email: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_true")]
    pub enable_phone: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub universal: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub rule_level: i32,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            enable_email: true,
            phone: String::new(),
            enable_phone: true,
            universal: false,
            rule_level: 0,
        }
    }
}

impl From<CreateUserRequest> for UserFields {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            enable_email: value.enable_email,
            phone: value.phone,
            enable_phone: value.enable_phone,
            universal: value.universal,
            rule_level: value.rule_level,
        }
    }
}

/// Request body for `PUT /api/v1/users/{id}`.
///
/// This is a full replace: any omitted or `null` field resets to its zero
/// value (empty string, `false`, `0`), clearing what was stored before.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplaceUserRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_email: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_phone: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub universal: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub rule_level: i32,
}

impl From<ReplaceUserRequest> for UserFields {
    fn from(value: ReplaceUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            enable_email: value.enable_email,
            phone: value.phone,
            enable_phone: value.enable_phone,
            universal: value.universal,
            rule_level: value.rule_level,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn parse_id(raw: &str, scope: ResourceKind) -> Result<UserId, Error> {
    raw.parse::<UserId>().map_err(|err| {
        debug!(id = raw, error = %err, "rejecting malformed path id");
        Error::invalid_id(scope)
    })
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "rejecting malformed request body");
        Error::bad_request("bad request")
    })
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use admin_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_id(&path, ResourceKind::User)?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = UserSchema),
        (status = 400, description = "Malformed body, failed validation, or null column", body = ErrorSchema),
        (status = 409, description = "Duplicate name or id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let request: CreateUserRequest = decode_body(&body)?;
    let user = state.users_command.create_user(request.into()).await?;
    Ok(web::Json(user))
}

/// Replace every mutable field of a user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = ReplaceUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Malformed id or body, failed validation, or null column", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 409, description = "Duplicate name", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let id = parse_id(&path, ResourceKind::User)?;
    let request: ReplaceUserRequest = decode_body(&body)?;
    let user = state.users_command.update_user(id, request.into()).await?;
    Ok(web::Json(user))
}

/// Delete a user together with its project associations.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path, ResourceKind::User)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Projects visible to a user.
///
/// A malformed id is reported as an invalid *project* id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/projects",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Visible projects", body = [ProjectSchema]),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserProjects"
)]
#[get("/users/{id}/projects")]
pub async fn user_projects(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Project>>> {
    let id = parse_id(&path, ResourceKind::Project)?;
    let projects = state.users.user_projects(id).await?;
    Ok(web::Json(projects))
}

/// Register every users handler on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(user_projects)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
