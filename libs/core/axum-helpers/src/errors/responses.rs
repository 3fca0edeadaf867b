//! Reusable OpenAPI response types for documenting error bodies.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Malformed request",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-11-29T10:15:30.123Z",
        "message": "Invalid id: abc",
        "status": 400,
        "error": "Bad Request",
        "path": "/api/v1/users/abc"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-11-29T10:15:30.123Z",
        "message": "User not found with id: 99",
        "status": 404,
        "error": "Not Found",
        "path": "/api/v1/users/99"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict with an existing resource",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-11-29T10:15:30.123Z",
        "message": "Database constraint violation. A resource with the provided email may already exist.",
        "status": 409,
        "error": "Conflict",
        "path": "/api/v1/users"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body could not be deserialized",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-11-29T10:15:30.123Z",
        "message": "Failed to deserialize the JSON body into the target type",
        "status": 422,
        "error": "Unprocessable Entity",
        "path": "/api/v1/users"
    })
)]
pub struct UnprocessableEntityResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-11-29T10:15:30.123Z",
        "message": "An unexpected internal server error occurred.",
        "status": 500,
        "error": "Internal Server Error",
        "path": "/api/v1/users"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
