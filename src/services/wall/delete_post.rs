use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::WallService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_post(
    service: &WallService,
    request: &HttpRequest,
    post_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_wall_post(post_id).await {
        Ok(true) => {
            info!("Wall post {} deleted", post_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Post deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WallPostNotFound,
            "Post not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Post deletion failed: {e}"),
            )),
        ),
    }
}
