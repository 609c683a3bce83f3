use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::WallService;
use crate::models::wall::entities::AuthorRole;
use crate::models::wall::requests::CreateWallPostRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_post(
    service: &WallService,
    request: &HttpRequest,
    class_id: i64,
    data: CreateWallPostRequest,
) -> ActixResult<HttpResponse> {
    if data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Post content must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to get class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class information: {e}"),
                )),
            );
        }
    }

    // 禁言只约束学生，教师不受影响
    if data.author_role == AuthorRole::Student {
        match storage.is_student_muted(class_id, data.author_id).await {
            Ok(true) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::StudentMuted,
                    "Student is muted in this class",
                )));
            }
            Ok(false) => {}
            Err(e) => {
                error!("Failed to check mute status: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check mute status: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_wall_post(class_id, data).await {
        Ok(post) => {
            info!("Wall post {} created in class {}", post.id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(post, "Post created successfully")))
        }
        Err(e) => {
            error!("Wall post creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Post creation failed: {e}"),
                )),
            )
        }
    }
}
