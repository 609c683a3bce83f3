use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::WallService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_posts(
    service: &WallService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_wall_posts(class_id).await {
        Ok(posts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            posts,
            "Wall posts retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list wall posts: {e}"),
            )),
        ),
    }
}
