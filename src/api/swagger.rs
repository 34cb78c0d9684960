use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "CRUD API for users backed by MongoDB.\n\n\
            Every `/user` response is an envelope `{status, message, data}`; \
            `status` mirrors the HTTP status and `message` is `success` or the error text."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::get_all_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::UserRequest,
            crate::models::UserResponse,
            crate::models::InsertResult,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete users."),
        (name = "Health", description = "Service and database liveness."),
    )
)]
pub struct ApiDoc;
