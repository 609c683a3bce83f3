use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::WallService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_comments(
    service: &WallService,
    request: &HttpRequest,
    post_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_wall_post_by_id(post_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::WallPostNotFound,
                "Post not found",
            )));
        }
        Err(e) => {
            error!("Failed to get wall post {}: {}", post_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get post: {e}"),
                )),
            );
        }
    }

    match storage.list_wall_comments(post_id).await {
        Ok(comments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            comments,
            "Comments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list comments: {e}"),
            )),
        ),
    }
}
