//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every user administration endpoint, the health
//! probes, and the schema wrappers from [`crate::inbound::http::schemas`]
//! so domain types stay free of utoipa derives. Swagger UI serves the
//! document in debug builds.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ProjectSchema, UserSchema};
use crate::inbound::http::users::{CreateUserRequest, ReplaceUserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User administration API",
        description = "CRUD over users and their project visibility, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::user_projects,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ProjectSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        ReplaceUserRequest
    )),
    tags(
        (name = "users", description = "User administration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
