use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::WallService;
use crate::models::wall::entities::AuthorRole;
use crate::models::wall::requests::CreateWallCommentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_comment(
    service: &WallService,
    request: &HttpRequest,
    post_id: i64,
    data: CreateWallCommentRequest,
) -> ActixResult<HttpResponse> {
    if data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Comment content must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    // 帖子必须存在，禁言按帖子所在班级判断
    let post = match storage.get_wall_post_by_id(post_id).await {
        Ok(Some(post)) => post,
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
    };

    if data.author_role == AuthorRole::Student {
        match storage.is_student_muted(post.class_id, data.author_id).await {
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

    match storage.create_wall_comment(post_id, data).await {
        Ok(comment) => {
            info!("Comment {} created on post {}", comment.id, post_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(comment, "Comment created successfully")))
        }
        Err(e) => {
            error!("Comment creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Comment creation failed: {e}"),
                )),
            )
        }
    }
}
